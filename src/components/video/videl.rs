// Videl programming and the Falcon XBIOS video calls
use log::{debug, warn};
use organum::core::{Address, Addressable};
use organum::error::Error;

use super::modes::{lookup_mode, VideoModeEntry};
use super::screen::Screen;
use super::vbl::VBL_LEVEL;
use super::{VideoModeWord, EINVFN, FALCON_PALETTE_REGS, SPSHIFT, ST_SHIFTER, ST_VRAM_SIZE};
use crate::components::{Word, VIDEL_MONITOR_REG};

pub const VIDEL_BASE: Address = 0xffff_8200;

/* register offsets from VIDEL_BASE */
const SYNC: Address = 0x0a;
const LINE_OFFSET: Address = 0x0e;
const LINE_WIDTH: Address = 0x10;
const ST_SHIFT: Address = 0x60;
const SP_SHIFT: Address = 0x66;
const HHT: Address = 0x82;
const VFT: Address = 0xa2;
const VDB: Address = 0xa8;
const VDE: Address = 0xaa;
const VCO: Address = 0xc0;
const VCTL: Address = 0xc2;

/// Entries in the Falcon palette.
pub const FALCON_PALETTE_SIZE: usize = 256;

/// Bits of a Falcon palette register the hardware keeps.
const FALCON_PALETTE_MASK: u32 = 0xfcfc_00fc;

/// Write every timing register of `entry`. The caller masks the VBL.
fn program<R: Addressable>(regs: &mut R, mode: Word, entry: &VideoModeEntry) -> Result<(), Error> {
    let word = VideoModeWord::from(mode);
    regs.write_u8(VIDEL_BASE + SYNC, if word.pal() { 2 } else { 0 })?;

    let horizontal = [entry.hht, entry.hbb, entry.hbe, entry.hdb, entry.hde, entry.hss];
    for (i, value) in horizontal.iter().enumerate() {
        regs.write_beu16(VIDEL_BASE + HHT + 2 * i as Address, *value)?;
    }
    let vertical = [entry.vft, entry.vbb, entry.vbe, entry.vdb, entry.vde, entry.vss];
    for (i, value) in vertical.iter().enumerate() {
        regs.write_beu16(VIDEL_BASE + VFT + 2 * i as Address, *value)?;
    }

    regs.write_beu16(VIDEL_BASE + LINE_OFFSET, 0)?;
    regs.write_beu16(VIDEL_BASE + LINE_WIDTH, entry.width)?;
    regs.write_beu16(VIDEL_BASE + VCTL, entry.ctl)?;

    let clock = if word.vga() {
        0x0186
    } else if word.compat() && word.vertical() {
        // ST low and medium compatibility
        0x0081
    } else {
        0x0181
    };
    regs.write_beu16(VIDEL_BASE + VCO, clock)?;

    match word.bits_per_pixel() {
        1 => regs.write_beu16(VIDEL_BASE + SP_SHIFT, 0x0400)?,
        2 => {
            regs.write_beu16(VIDEL_BASE + SP_SHIFT, 0x0000)?;
            regs.write_u8(VIDEL_BASE + ST_SHIFT, 0x01)?;
        }
        4 => {
            regs.write_beu16(VIDEL_BASE + SP_SHIFT, 0x0000)?;
            regs.write_u8(VIDEL_BASE + ST_SHIFT, 0x00)?;
        }
        8 => {
            regs.write_beu16(VIDEL_BASE + SP_SHIFT, 0x0010)?;
            regs.write_u8(VIDEL_BASE + ST_SHIFT, 0x00)?;
        }
        _ => {
            regs.write_beu16(VIDEL_BASE + SP_SHIFT, 0x0100)?;
            regs.write_u8(VIDEL_BASE + ST_SHIFT, 0x00)?;
        }
    }
    Ok(())
}

/// Bits per pixel the Videl is currently shifting out.
pub fn videl_bpp<R: Addressable>(regs: &mut R) -> Result<u16, Error> {
    let spshift = regs.read_beu16(SPSHIFT)?;
    Ok(if spshift & 0x0400 != 0 {
        1
    } else if spshift & 0x0100 != 0 {
        16
    } else if spshift & 0x0010 != 0 {
        8
    } else {
        match regs.read_u8(ST_SHIFTER)? {
            0 => 4,
            1 => 2,
            _ => 1,
        }
    })
}

pub fn videl_width<R: Addressable>(regs: &mut R) -> Result<u16, Error> {
    let words = regs.read_beu16(VIDEL_BASE + LINE_WIDTH)?;
    Ok(words.wrapping_mul(16) / videl_bpp(regs)?)
}

pub fn videl_height<R: Addressable>(regs: &mut R) -> Result<u16, Error> {
    let vdb = regs.read_beu16(VIDEL_BASE + VDB)?;
    let vde = regs.read_beu16(VIDEL_BASE + VDE)?;
    let ctl = regs.read_beu16(VIDEL_BASE + VCTL)?;

    // counters run in half lines unless interlaced
    let mut lines = vde.wrapping_sub(vdb);
    if ctl & 0x02 == 0 {
        lines >>= 1;
    }
    if ctl & 0x01 != 0 {
        lines >>= 1;
    }
    Ok(lines)
}

impl<R: Addressable> Screen<R> {
    /// Switch the Videl to `mode` (Vsetmode). Returns the previous mode,
    /// the current one for -1, and leaves everything alone for unknown modes.
    pub fn apply_mode(&mut self, mode: Word) -> Result<i32, Error> {
        if !self.config.shifter.has_videl() {
            return Ok(EINVFN);
        }
        if mode == -1 {
            return Ok(self.mode as i32);
        }

        let entry = match lookup_mode(mode) {
            Some(entry) => entry,
            None => {
                warn!("videl: no such mode {:04x}, keeping {:04x}", mode, self.mode);
                return Ok(self.mode as i32);
            }
        };

        {
            let _masked = self.irq.mask_up_to(VBL_LEVEL);
            program(&mut self.regs, mode, entry)?;
        }
        debug!("videl: mode {:04x} -> {:04x}", self.mode, mode);

        let old = std::mem::replace(&mut self.mode, mode);
        Ok(old as i32)
    }

    pub fn get_mode(&self) -> Word {
        self.mode
    }

    /// Monitor attached to the Videl (VgetMonitor).
    pub fn vmontype(&mut self) -> Result<i32, Error> {
        if !self.config.shifter.has_videl() {
            return Ok(EINVFN);
        }
        Ok(((self.regs.read_u8(VIDEL_MONITOR_REG)? >> 6) & 3) as i32)
    }

    /// Bytes of video RAM `mode` needs. Unknown modes get the ST size.
    pub fn vgetsize(&self, mode: Word) -> i32 {
        if !self.config.shifter.has_videl() {
            return EINVFN;
        }
        match lookup_mode(mode) {
            Some(entry) => entry.width as i32 * 2 * entry.visible_lines() as i32,
            None => ST_VRAM_SIZE as i32,
        }
    }

    /// Palette entries the current depth can address.
    fn rgb_range(&mut self, index: Word, count: Word) -> Result<Option<std::ops::Range<usize>>, Error> {
        if !self.config.shifter.has_videl() || index < 0 || count <= 0 {
            return Ok(None);
        }
        let limit = if videl_bpp(&mut self.regs)? <= 4 { 16 } else { FALCON_PALETTE_SIZE };
        let (start, end) = (index as usize, index as usize + count as usize);
        Ok(if end > limit { None } else { Some(start..end) })
    }

    /// Load `count` 0x00RRGGBB colours from `index` on (VsetRGB).
    pub fn vsetrgb(&mut self, index: Word, count: Word, rgb: &[u32]) -> Result<(), Error> {
        let range = match self.rgb_range(index, count)? {
            Some(range) if range.len() <= rgb.len() => range,
            _ => return Ok(()),
        };

        for (slot, value) in range.zip(rgb) {
            self.shadow[slot] = *value;
            let [_, r, g, b] = value.to_be_bytes();
            let hw = u32::from_be_bytes([r, g, g, b]) & FALCON_PALETTE_MASK;
            self.regs.write_beu32(FALCON_PALETTE_REGS + 4 * slot as Address, hw)?;
        }
        Ok(())
    }

    /// Read back what `vsetrgb` stored (VgetRGB).
    pub fn vgetrgb(&mut self, index: Word, count: Word, rgb: &mut [u32]) -> Result<(), Error> {
        let range = match self.rgb_range(index, count)? {
            Some(range) if range.len() <= rgb.len() => range,
            _ => return Ok(()),
        };
        for (out, slot) in rgb.iter_mut().zip(range) {
            *out = self.shadow[slot];
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use organum::interrupts::InterruptController;
    use organum::premade::bus::BusPort;

    use super::super::screen::testing::{falcon, st, TEST_PHYSTOP};
    use super::super::vbl::Vbl;
    use super::super::{FALCON_DEFAULT_BOOT, FALCON_ST_HIGH, VIDEL_8BPP, VIDEL_VGA};
    use super::*;
    use crate::components::{build_bus, MachineConfig, Monitor, ShifterKind};

    #[test]
    fn unknown_mode_keeps_the_current_one() {
        let mut screen = falcon();
        assert_eq!(screen.apply_mode(FALCON_DEFAULT_BOOT).unwrap(), 0);
        let width = screen.regs.read_beu16(VIDEL_BASE + LINE_WIDTH).unwrap();

        assert_eq!(screen.apply_mode(0x7fff).unwrap(), FALCON_DEFAULT_BOOT as i32);
        assert_eq!(screen.get_mode(), FALCON_DEFAULT_BOOT);
        assert_eq!(screen.regs.read_beu16(VIDEL_BASE + LINE_WIDTH).unwrap(), width);
        assert_eq!(screen.apply_mode(-1).unwrap(), FALCON_DEFAULT_BOOT as i32);
    }

    #[test]
    fn applying_a_mode_returns_the_previous_one() {
        let mut screen = falcon();
        screen.apply_mode(FALCON_DEFAULT_BOOT).unwrap();
        assert_eq!(screen.apply_mode(FALCON_ST_HIGH).unwrap(), FALCON_DEFAULT_BOOT as i32);
        assert_eq!(screen.get_mode(), FALCON_ST_HIGH);
    }

    #[test]
    fn mode_registers_are_programmed() {
        let mut screen = falcon();
        screen.apply_mode(FALCON_DEFAULT_BOOT).unwrap();
        let regs = &mut screen.regs;
        assert_eq!(regs.read_u8(VIDEL_BASE + SYNC).unwrap(), 0);
        assert_eq!(regs.read_beu16(VIDEL_BASE + HHT).unwrap(), 0x01ff);
        assert_eq!(regs.read_beu16(VIDEL_BASE + VFT).unwrap(), 0x020c);
        assert_eq!(regs.read_beu16(VIDEL_BASE + VCTL).unwrap(), 0x0006);
        assert_eq!(regs.read_beu16(VIDEL_BASE + VCO).unwrap(), 0x0181);
        assert_eq!(regs.read_beu16(VIDEL_BASE + LINE_WIDTH).unwrap(), 160);
        assert_eq!(videl_bpp(regs).unwrap(), 4);
        assert_eq!(videl_width(regs).unwrap(), 640);
        assert_eq!(videl_height(regs).unwrap(), 400);
    }

    #[test]
    fn clock_word_follows_the_mode_flags() {
        let mut screen = falcon();
        screen.apply_mode(0x0189).unwrap();
        assert_eq!(screen.regs.read_beu16(VIDEL_BASE + VCO).unwrap(), 0x0081);
        assert_eq!(videl_bpp(&mut screen.regs).unwrap(), 2);

        screen.apply_mode(VIDEL_VGA | VIDEL_8BPP | 0x0008).unwrap();
        assert_eq!(screen.regs.read_beu16(VIDEL_BASE + VCO).unwrap(), 0x0186);
        assert_eq!(videl_bpp(&mut screen.regs).unwrap(), 8);
    }

    /// Register port that notes whether the VBL could fire on each Videl write.
    struct Watched {
        regs: BusPort,
        irq: Arc<InterruptController>,
        vbl_open: Vec<bool>,
    }

    impl Addressable for Watched {
        fn len(&self) -> usize {
            self.regs.len()
        }

        fn read(&mut self, addr: Address, data: &mut [u8]) -> Result<(), Error> {
            self.regs.read(addr, data)
        }

        fn write(&mut self, addr: Address, data: &[u8]) -> Result<(), Error> {
            if (VIDEL_BASE..VIDEL_BASE + 0x100).contains(&addr) {
                self.vbl_open.push(self.irq.accepts(VBL_LEVEL));
            }
            self.regs.write(addr, data)
        }
    }

    #[test]
    fn vbl_is_masked_while_registers_are_written() {
        let config = MachineConfig {
            shifter: ShifterKind::Falcon,
            monitor: Monitor::Vga,
            phystop: TEST_PHYSTOP,
            ..MachineConfig::default()
        };
        let irq = Arc::new(InterruptController::new(0x2300));
        let regs = Watched { regs: build_bus(&config).unwrap(), irq: irq.clone(), vbl_open: Vec::new() };
        let mut screen = Screen::new(regs, config, irq.clone(), Arc::new(Vbl::new()));
        assert!(irq.accepts(VBL_LEVEL));

        screen.apply_mode(FALCON_DEFAULT_BOOT).unwrap();
        let seen = &screen.regs.vbl_open;
        assert!(seen.len() > 10);
        assert!(seen.iter().all(|open| !open));
        assert!(irq.accepts(VBL_LEVEL));
    }

    #[test]
    fn programming_leaves_the_interrupt_mask_alone() {
        let mut screen = falcon();
        screen.irq.set_sr(0x2300);
        screen.apply_mode(FALCON_DEFAULT_BOOT).unwrap();
        assert_eq!(screen.irq.sr(), 0x2300);
    }

    #[test]
    fn rgb_round_trip_and_hardware_format() {
        let mut screen = falcon();
        screen.apply_mode(FALCON_DEFAULT_BOOT).unwrap();
        screen.vsetrgb(2, 2, &[0x00ff_8001, 0x0012_3456]).unwrap();

        let mut back = [0u32; 2];
        screen.vgetrgb(2, 2, &mut back).unwrap();
        assert_eq!(back, [0x00ff_8001, 0x0012_3456]);

        let hw = screen.regs.read_beu32(FALCON_PALETTE_REGS + 8).unwrap();
        assert_eq!(hw, 0xfc80_0000);
        let hw = screen.regs.read_beu32(FALCON_PALETTE_REGS + 12).unwrap();
        assert_eq!(hw, 0x1034_0054);
    }

    #[test]
    fn out_of_range_rgb_is_ignored() {
        let mut screen = falcon();
        screen.apply_mode(FALCON_DEFAULT_BOOT).unwrap();
        // 4 planes: only 16 entries
        screen.vsetrgb(15, 2, &[1, 2]).unwrap();
        screen.vsetrgb(-1, 1, &[1]).unwrap();
        screen.vsetrgb(0, 0, &[1]).unwrap();
        assert_eq!(screen.regs.read_beu32(FALCON_PALETTE_REGS + 60).unwrap(), 0);
        assert_eq!(screen.regs.read_beu32(FALCON_PALETTE_REGS).unwrap(), 0);

        let mut back = [7u32; 2];
        screen.vgetrgb(15, 2, &mut back).unwrap();
        assert_eq!(back, [7, 7]);
    }

    #[test]
    fn size_of_a_mode() {
        let screen = falcon();
        assert_eq!(screen.vgetsize(FALCON_DEFAULT_BOOT), 128_000);
        assert_eq!(screen.vgetsize(0x7fff), 32000);
    }

    #[test]
    fn no_videl_means_invalid_function() {
        let mut screen = st();
        assert_eq!(screen.apply_mode(FALCON_DEFAULT_BOOT).unwrap(), EINVFN);
        assert_eq!(screen.vmontype().unwrap(), EINVFN);
        assert_eq!(screen.vgetsize(FALCON_DEFAULT_BOOT), EINVFN);
        screen.vsetrgb(0, 1, &[0x00ff_ffff]).unwrap();
        assert_eq!(screen.regs.read_beu32(FALCON_PALETTE_REGS).unwrap(), 0);
        assert_eq!(screen.regs.read_beu16(VIDEL_BASE + LINE_WIDTH).unwrap(), 0);
    }
}
