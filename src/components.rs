// this module contains the hardware configuration for the modelled machine
use log::info;
use organum::core::{wrap_device, Address, Addressable};
use organum::error::Error;
use organum::premade::{bus::Bus, bus::BusPort, memory::MemoryBlock, serial::Serial};

pub type Word = i16;

pub const IO_BASE: Address = 0xffff_8000;
pub const IO_SIZE: usize = 0x8000;

pub const DUART_BASE: Address = 0xfff0_0000;

/// Operating system ROM; RAM may grow up to its base and no further.
pub const ROM_BASE: Address = 0x00e0_0000;
pub const ROM_SIZE: usize = 0x4_0000;

/// ST-RAM of the reference board, just below the I/O space.
pub const DEFAULT_PHYSTOP: usize = 0x3d_0000;

/// Videl monitor type lives in bits 7..6 of this byte.
pub const VIDEL_MONITOR_REG: Address = 0xffff_8006;
/// MFP general purpose I/O; bit 7 tells colour from monochrome.
pub const MFP_GPIP: Address = 0xffff_fa01;

pub mod font;
pub mod geometry;
pub mod gsx;
pub mod ikbd;
pub mod video;

/// The video controller generation fitted to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShifterKind {
    /// Original shifter: three fixed resolutions, 9-bit palette.
    St,
    /// Extended shifter: 12-bit palette, byte-exact video base.
    Ste,
    /// TT shifter with its own mode register.
    Tt,
    /// Fully programmable Videl.
    Falcon,
}

impl ShifterKind {
    pub fn has_videl(&self) -> bool {
        *self == ShifterKind::Falcon
    }

    pub fn has_ste_shifter(&self) -> bool {
        *self == ShifterKind::Ste
    }

    pub fn has_tt_shifter(&self) -> bool {
        *self == ShifterKind::Tt
    }

    /// Bits of a palette register the hardware actually stores.
    pub fn palette_mask(&self) -> u16 {
        match self {
            ShifterKind::St | ShifterKind::Tt => 0x0777,
            ShifterKind::Ste | ShifterKind::Falcon => 0x0fff,
        }
    }
}

impl From<&str> for ShifterKind {
    fn from(value: &str) -> Self {
        match value {
            "ste" => ShifterKind::Ste,
            "tt" => ShifterKind::Tt,
            "falcon" | "videl" => ShifterKind::Falcon,
            _ => ShifterKind::St,
        }
    }
}

/// Monitor classes, same encoding as the Videl monitor bits.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Monitor {
    Mono = 0,
    Color = 1,
    Vga = 2,
    Tv = 3,
}

impl From<u8> for Monitor {
    fn from(value: u8) -> Self {
        match value & 3 {
            0 => Monitor::Mono,
            1 => Monitor::Color,
            2 => Monitor::Vga,
            _ => Monitor::Tv,
        }
    }
}

impl From<&str> for Monitor {
    fn from(value: &str) -> Self {
        match value {
            "color" | "colour" => Monitor::Color,
            "vga" => Monitor::Vga,
            "tv" => Monitor::Tv,
            _ => Monitor::Mono,
        }
    }
}

/// Capability switches of one machine build.
#[derive(Clone, Debug)]
pub struct MachineConfig {
    pub shifter: ShifterKind,
    pub monitor: Monitor,
    pub phystop: usize,
    /// PAL sync for the non-Videl shifters.
    pub os_pal: bool,
    pub with_duart: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            shifter: ShifterKind::St,
            monitor: Monitor::Mono,
            phystop: DEFAULT_PHYSTOP,
            os_pal: false,
            with_duart: true,
        }
    }
}

/// Map RAM, the I/O page and the DUART, and wire the monitor sense lines.
pub fn build_bus(config: &MachineConfig) -> Result<BusPort, Error> {
    let port = BusPort::new(Bus::new());
    port.map(0, wrap_device(MemoryBlock::new(vec![0u8; config.phystop])))?;
    let mut rom = MemoryBlock::new(vec![0u8; ROM_SIZE]);
    rom.read_only();
    port.map(ROM_BASE, wrap_device(rom))?;
    port.map(IO_BASE, wrap_device(MemoryBlock::new(vec![0u8; IO_SIZE])))?;
    if config.with_duart {
        port.map(DUART_BASE, wrap_device(Serial::new()))?;
    }

    let mut io = port.clone();
    if config.shifter.has_videl() {
        io.write_u8(VIDEL_MONITOR_REG, (config.monitor as u8) << 6)?;
    } else {
        let colour = config.monitor != Monitor::Mono;
        io.write_u8(MFP_GPIP, if colour { 0x80 } else { 0x00 })?;
    }

    info!(
        "machine: {:?} shifter, {:?} monitor, phystop {:06x}",
        config.shifter, config.monitor, config.phystop
    );
    Ok(port)
}
