// Screen setup at boot and the XBIOS screen calls
use std::sync::Arc;

use log::{debug, error, info, warn};
use organum::core::{Address, Addressable};
use organum::error::Error;
use organum::interrupts::InterruptController;

use super::vbl::Vbl;
use super::videl::{videl_bpp, videl_height, videl_width, FALCON_PALETTE_SIZE};
use super::*;
use crate::components::font::FontRegistry;
use crate::components::{MachineConfig, Monitor, Word, MFP_GPIP};

/// Where the Videl is pointed while it is reprogrammed at boot.
const SAFE_VIDEO_BASE: Address = 0x10000;
/// Gap old software expects between the ST screen and the top of RAM.
const ST_SCREEN_GAP: Address = 0x300;
/// Boot resolution location in NVRAM.
const NVRAM_BOOT_MODE: Address = 14;
/// Status register that lets the VBL through.
const SR_VBL_OPEN: u16 = 0x2300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    Uninitialized,
    Active,
}

/// The video hardware as the BIOS sees it.
pub struct Screen<R: Addressable> {
    pub(super) regs: R,
    pub(super) config: MachineConfig,
    pub(super) irq: Arc<InterruptController>,
    pub(super) vbl: Arc<Vbl>,
    /// Last mode accepted by the Videl.
    pub(super) mode: Word,
    pub(super) shadow: [u32; FALCON_PALETTE_SIZE],
    state: ScreenState,
    /// Logical screen, where drawing goes (`v_bas_ad`).
    logbase: Address,
    sshiftmod: Word,
    fonts: FontRegistry,
}

impl<R: Addressable> Screen<R> {
    pub fn new(regs: R, config: MachineConfig, irq: Arc<InterruptController>, vbl: Arc<Vbl>) -> Self {
        Self {
            regs,
            config,
            irq,
            vbl,
            mode: 0,
            shadow: [0; FALCON_PALETTE_SIZE],
            state: ScreenState::Uninitialized,
            logbase: 0,
            sshiftmod: ST_LOW,
            fonts: FontRegistry::new(),
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn regs(&mut self) -> &mut R {
        &mut self.regs
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Shift mode of the last resolution set, `FALCON_REZ` for Videl modes.
    pub fn shift_mode(&self) -> Word {
        self.sshiftmod
    }

    fn has_low_base_byte(&self) -> bool {
        self.config.shifter.has_videl() || self.config.shifter.has_ste_shifter()
    }

    /// Same encoding as `vmontype`.
    fn monitor_type(&mut self) -> Result<Word, Error> {
        if self.config.shifter.has_videl() {
            return Ok(self.vmontype()? as Word);
        }
        let gpip = self.regs.read_u8(MFP_GPIP)?;
        Ok(if gpip & 0x80 != 0 { 1 } else { 0 })
    }

    /// Bytes the current mode shows.
    pub fn vram_size(&mut self) -> Result<u32, Error> {
        if !self.config.shifter.has_videl() {
            return Ok(ST_VRAM_SIZE);
        }
        let width = videl_width(&mut self.regs)? as u32;
        let height = videl_height(&mut self.regs)? as u32;
        let bpp = videl_bpp(&mut self.regs)? as u32;
        Ok(width / 8 * height * bpp)
    }

    /// Point the shifter at `addr`. With `check`, a screen that would run
    /// into the ROM area stops the machine.
    pub fn setphys(&mut self, addr: Address, check: bool) -> Result<(), Error> {
        if check {
            let limit = (self.config.phystop as Address).saturating_sub(self.vram_size()?);
            if addr > limit {
                error!("screen: base {:06x} is past the last screen at {:06x}", addr, limit);
                return Err(Error::panic("VideoRAM covers ROM area!!"));
            }
        }

        self.regs.write_u8(VIDEOBASE_ADDR_HI, (addr >> 16) as u8)?;
        self.regs.write_u8(VIDEOBASE_ADDR_MID, (addr >> 8) as u8)?;
        if self.has_low_base_byte() {
            self.regs.write_u8(VIDEOBASE_ADDR_LOW, addr as u8)?;
        }
        Ok(())
    }

    /// Pick the resolution for the attached monitor, load the default
    /// palettes and place the screen just below the top of RAM.
    pub fn screen_init(&mut self, nvram: Option<&mut dyn Addressable>) -> Result<(), Error> {
        let monitor = self.monitor_type()?;
        let shifter = self.config.shifter;

        let mut boot_mode = FALCON_DEFAULT_BOOT;
        let rez = if shifter.has_videl() {
            self.setphys(SAFE_VIDEO_BASE, false)?;

            boot_mode = match nvram.map(|nvram| nvram.read_beu16(NVRAM_BOOT_MODE)) {
                Some(Ok(mode)) => mode as Word,
                Some(Err(err)) => {
                    warn!("screen: NVRAM unreadable ({}), using default boot mode", err);
                    FALCON_DEFAULT_BOOT
                }
                None => FALCON_DEFAULT_BOOT,
            };
            match Monitor::from(monitor as u8) {
                Monitor::Mono => boot_mode = FALCON_ST_HIGH,
                Monitor::Color => boot_mode = FALCON_ST_MEDIUM,
                Monitor::Vga => boot_mode |= VIDEL_VGA,
                Monitor::Tv => boot_mode &= !VIDEL_VGA,
            }
            self.apply_mode(boot_mode)?;
            FALCON_REZ
        } else {
            let rez = if monitor != 0 { ST_MEDIUM } else { ST_HIGH };
            self.regs.write_u8(ST_SHIFTER, rez as u8)?;
            rez
        };
        let mask = shifter.palette_mask();

        let pal = if rez == FALCON_REZ {
            boot_mode & VIDEL_PAL != 0
        } else {
            self.config.os_pal
        };
        self.regs.write_u8(SYNC_MODE, if pal { 2 } else { 0 })?;

        let mut palette = DEFAULT_PALETTE.map(|color| color & mask);
        if shifter.has_videl() {
            let mut falcon = [0u32; FALCON_PALETTE_SIZE];
            for (i, color) in falcon.iter_mut().enumerate() {
                *color = VIDEL_DEFAULT_PALETTE[i % 16];
            }
            // foreground is black in 2 and 4 colour modes
            match boot_mode & VIDEL_BPPMASK {
                VIDEL_1BPP => {
                    falcon[1] = falcon[15];
                    palette[1] = palette[15];
                }
                VIDEL_2BPP => {
                    falcon[3] = falcon[15];
                    palette[3] = palette[15];
                }
                _ => {}
            }
            for (i, color) in falcon.iter().enumerate() {
                self.regs.write_beu32(FALCON_PALETTE_REGS + 4 * i as Address, *color)?;
            }
        }
        self.sshiftmod = rez;
        match rez {
            ST_MEDIUM => palette[3] = palette[15],
            ST_HIGH => palette[1] = palette[15],
            _ => {}
        }
        for (i, color) in palette.iter().enumerate() {
            self.regs.write_beu16(ST_PALETTE_REGS + 2 * i as Address, *color)?;
        }

        let mut start = (self.config.phystop as Address).saturating_sub(self.vram_size()?) & 0x00ff_ff00;
        if !shifter.has_videl() {
            start = start.saturating_sub(ST_SCREEN_GAP);
        }
        self.logbase = start;
        self.setphys(start, true)?;

        let (width, height, planes) = self.resolution()?;
        self.fonts.set_default(height);
        self.state = ScreenState::Active;
        info!(
            "screen: {}x{} {} planes at {:06x}, rez {}, {} sync",
            width,
            height,
            planes,
            start,
            rez,
            if pal { "PAL" } else { "NTSC" }
        );
        Ok(())
    }

    /// Address the shifter is showing.
    pub fn physbase(&mut self) -> Result<Address, Error> {
        let mut addr = (self.regs.read_u8(VIDEOBASE_ADDR_HI)? as Address) << 16;
        addr |= (self.regs.read_u8(VIDEOBASE_ADDR_MID)? as Address) << 8;
        if self.has_low_base_byte() {
            addr |= self.regs.read_u8(VIDEOBASE_ADDR_LOW)? as Address;
        }
        Ok(addr)
    }

    pub fn logbase(&self) -> Address {
        self.logbase
    }

    /// Current resolution in shifter terms. Videl modes outside ST
    /// compatibility report ST high.
    pub fn getrez(&mut self) -> Result<Word, Error> {
        let shifter = self.config.shifter;
        if shifter.has_videl() {
            let mode = self.get_mode();
            let word = VideoModeWord::from(mode);
            if !word.compat() {
                return Ok(ST_HIGH);
            }
            return Ok(match word.bits_per_pixel() {
                1 => ST_HIGH,
                2 => ST_MEDIUM,
                4 => ST_LOW,
                _ => {
                    warn!("screen: unsupported compatible mode {:04x}", mode);
                    ST_LOW
                }
            });
        }
        if shifter.has_tt_shifter() {
            return Ok((self.regs.read_u8(TT_SHIFTER)? & 0x07) as Word);
        }
        Ok((self.regs.read_u8(ST_SHIFTER)? & 0x03) as Word)
    }

    /// Width, height and planes of the displayed screen.
    pub fn resolution(&mut self) -> Result<(u16, u16, u16), Error> {
        if self.config.shifter.has_videl() {
            let bpp = videl_bpp(&mut self.regs)?;
            return Ok((videl_width(&mut self.regs)?, videl_height(&mut self.regs)?, bpp));
        }
        Ok(match self.getrez()? {
            ST_LOW => (320, 200, 4),
            ST_MEDIUM => (640, 200, 2),
            TT_MEDIUM => (640, 480, 4),
            TT_HIGH => (1280, 960, 1),
            TT_LOW => (320, 480, 8),
            _ => (640, 400, 1),
        })
    }

    /// Move the logical and physical screens and switch resolution. `None`
    /// and negative values leave that part alone. Returns whether the
    /// resolution was set, in which case the workstation must be restarted.
    pub fn setscreen(
        &mut self,
        log: Option<Address>,
        phys: Option<Address>,
        rez: Word,
        videl_mode: Word,
    ) -> Result<bool, Error> {
        if let Some(log) = log {
            self.logbase = log;
        }
        if let Some(phys) = phys {
            self.setphys(phys, true)?;
        }
        if !(0..8).contains(&rez) {
            return Ok(false);
        }

        let shifter = self.config.shifter;
        if shifter.has_videl() {
            if rez == FALCON_REZ {
                self.apply_mode(videl_mode)?;
                self.sshiftmod = rez;
            } else if rez < FALCON_REZ {
                self.regs.write_beu16(SPSHIFT, 0)?;
                self.regs.write_u8(ST_SHIFTER, rez as u8)?;
                self.sshiftmod = rez;
            }
        } else if shifter.has_tt_shifter() {
            if rez != 3 && rez != 5 {
                self.regs.write_u8(TT_SHIFTER, rez as u8)?;
                self.sshiftmod = rez;
            }
        } else if rez < 3 {
            self.regs.write_u8(ST_SHIFTER, rez as u8)?;
            self.sshiftmod = rez;
        }

        let (_, height, _) = self.resolution()?;
        self.fonts.set_default(height);
        debug!("screen: resolution {} set, {} lines", rez, height);
        Ok(true)
    }

    /// Load the 16 colours at `addr` on the next vertical blank.
    pub fn setpalette(&mut self, addr: Address) -> Result<(), Error> {
        self.vbl.set_palette(addr)
    }

    /// Set colour `n` to `color` and return its old value. A colour of -1
    /// only reads.
    pub fn setcolor(&mut self, n: Word, color: Word) -> Result<Word, Error> {
        let reg = ST_PALETTE_REGS + 2 * (n & 0x0f) as Address;
        let mask = self.config.shifter.palette_mask();

        let old = (self.regs.read_beu16(reg)? & mask) as Word;
        if color != -1 {
            self.regs.write_beu16(reg, color as u16)?;
        }
        Ok(old)
    }

    /// Wait for the next vertical blank with the VBL let through.
    pub fn vsync(&self) -> Result<(), Error> {
        let _open = self.irq.scoped(SR_VBL_OPEN);
        let since = self.vbl.frclock()?;
        self.vbl.wait_tick(since)?;
        Ok(())
    }

    /// Set the TT shifter mode word, returning the old one.
    pub fn esetshift(&mut self, mode: Word) -> Result<i32, Error> {
        if !self.config.shifter.has_tt_shifter() {
            return Ok(EINVFN);
        }
        let old = self.regs.read_beu16(TT_SHIFTER)? as Word;
        self.regs.write_beu16(TT_SHIFTER, mode as u16)?;
        Ok(old as i32)
    }

    pub fn egetshift(&mut self) -> Result<i32, Error> {
        if !self.config.shifter.has_tt_shifter() {
            return Ok(EINVFN);
        }
        Ok(self.regs.read_beu16(TT_SHIFTER)? as Word as i32)
    }
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;
    use std::time::Duration;

    use organum::error::ErrorType;
    use organum::premade::memory::MemoryBlock;

    use super::testing::{falcon, machine, st, TEST_PHYSTOP};
    use super::*;
    use crate::components::ShifterKind;

    #[test]
    fn st_mono_boot() {
        let mut screen = st();
        assert_eq!(screen.state(), ScreenState::Uninitialized);
        screen.screen_init(None).unwrap();
        assert_eq!(screen.state(), ScreenState::Active);

        assert_eq!(screen.getrez().unwrap(), ST_HIGH);
        // 32000 bytes below the top, rounded, minus the gap
        assert_eq!(screen.logbase(), 0x38000);
        assert_eq!(screen.physbase().unwrap(), 0x38000);
        assert_eq!(screen.resolution().unwrap(), (640, 400, 1));
        assert_eq!(screen.regs.read_u8(SYNC_MODE).unwrap(), 0);
        // colour 1 is black in two colour modes
        assert_eq!(screen.regs.read_beu16(ST_PALETTE_REGS + 2).unwrap(), 0);
        assert_eq!(screen.regs.read_beu16(ST_PALETTE_REGS).unwrap(), 0x777);
    }

    #[test]
    fn st_colour_boot_uses_medium() {
        let mut screen = machine(ShifterKind::Ste, Monitor::Color);
        screen.config.os_pal = true;
        screen.screen_init(None).unwrap();
        assert_eq!(screen.getrez().unwrap(), ST_MEDIUM);
        assert_eq!(screen.shift_mode(), ST_MEDIUM);
        assert_eq!(screen.regs.read_u8(SYNC_MODE).unwrap(), 2);
        assert_eq!(screen.regs.read_beu16(ST_PALETTE_REGS).unwrap(), 0xfff);
        assert_eq!(screen.regs.read_beu16(ST_PALETTE_REGS + 6).unwrap(), 0);
        assert_eq!(screen.regs.read_beu16(ST_PALETTE_REGS + 2).unwrap(), 0xf00);
    }

    #[test]
    fn falcon_vga_boot_without_nvram() {
        let mut screen = falcon();
        screen.screen_init(None).unwrap();
        assert_eq!(screen.get_mode(), FALCON_DEFAULT_BOOT | VIDEL_VGA);
        assert_eq!(screen.shift_mode(), FALCON_REZ);
        assert_eq!(screen.resolution().unwrap(), (640, 240, 4));
        assert_eq!(screen.vram_size().unwrap(), 76800);
        // no gap below a Videl screen
        assert_eq!(screen.logbase(), 0x2d400);
        assert_eq!(screen.physbase().unwrap(), 0x2d400);
        assert_eq!(
            screen.regs.read_beu32(FALCON_PALETTE_REGS + 4 * 17).unwrap(),
            VIDEL_DEFAULT_PALETTE[1]
        );
        // not a compatible mode
        assert_eq!(screen.getrez().unwrap(), ST_HIGH);
    }

    #[test]
    fn falcon_boot_mode_comes_from_nvram() {
        let mut screen = machine(ShifterKind::Falcon, Monitor::Tv);
        let mut nvram = MemoryBlock::new(vec![0u8; 64]);
        let stored = VIDEL_VGA | VIDEL_PAL | VIDEL_80COL | VIDEL_4BPP;
        nvram.write_beu16(14, stored as u16).unwrap();
        screen.screen_init(Some(&mut nvram as &mut dyn Addressable)).unwrap();
        // a TV cannot do VGA timings
        assert_eq!(screen.get_mode(), 0x002a);
        assert_eq!(screen.regs.read_u8(SYNC_MODE).unwrap(), 2);
    }

    #[test]
    fn falcon_mono_monitor_forces_st_high() {
        let mut screen = machine(ShifterKind::Falcon, Monitor::Mono);
        screen.screen_init(None).unwrap();
        assert_eq!(screen.get_mode(), FALCON_ST_HIGH);
        assert_eq!(screen.getrez().unwrap(), ST_HIGH);
        assert_eq!(
            screen.regs.read_beu32(FALCON_PALETTE_REGS + 4).unwrap(),
            VIDEL_DEFAULT_PALETTE[15]
        );
    }

    #[test]
    fn falcon_colour_monitor_is_st_medium_compatible() {
        let mut screen = machine(ShifterKind::Falcon, Monitor::Color);
        screen.screen_init(None).unwrap();
        assert_eq!(screen.get_mode(), FALCON_ST_MEDIUM);
        assert_eq!(screen.getrez().unwrap(), ST_MEDIUM);
        assert_eq!(screen.regs.read_beu16(ST_PALETTE_REGS + 6).unwrap(), 0);
    }

    #[test]
    fn screen_past_phystop_is_fatal() {
        let mut screen = st();
        screen.screen_init(None).unwrap();
        let err = screen.setphys(TEST_PHYSTOP as Address - 100, true).unwrap_err();
        assert_eq!(err.err, ErrorType::Panic);
        assert!(err.is_fatal());
        // unchecked moves are allowed
        screen.setphys(0x1000, false).unwrap();
        assert_eq!(screen.physbase().unwrap(), 0x1000);
    }

    #[test]
    fn st_base_has_no_low_byte() {
        let mut screen = st();
        screen.setphys(0x12345, false).unwrap();
        assert_eq!(screen.physbase().unwrap(), 0x12300);

        let mut screen = machine(ShifterKind::Ste, Monitor::Mono);
        screen.setphys(0x12345, false).unwrap();
        assert_eq!(screen.physbase().unwrap(), 0x12345);
    }

    #[test]
    fn setscreen_switches_resolution() {
        let mut screen = machine(ShifterKind::St, Monitor::Color);
        screen.screen_init(None).unwrap();
        assert!(screen.setscreen(Some(0x20000), None, ST_LOW, 0).unwrap());
        assert_eq!(screen.logbase(), 0x20000);
        assert_eq!(screen.getrez().unwrap(), ST_LOW);
        assert_eq!(screen.resolution().unwrap(), (320, 200, 4));
        assert_eq!(screen.fonts().default_font().form_height, 16);

        // -1 keeps the resolution
        assert!(!screen.setscreen(None, None, -1, 0).unwrap());
        assert_eq!(screen.getrez().unwrap(), ST_LOW);
        // no such ST resolution: nothing written
        assert!(screen.setscreen(None, None, 4, 0).unwrap());
        assert_eq!(screen.getrez().unwrap(), ST_LOW);
    }

    #[test]
    fn setscreen_on_the_videl() {
        let mut screen = falcon();
        screen.screen_init(None).unwrap();
        assert!(screen.setscreen(None, None, FALCON_REZ, FALCON_ST_MEDIUM).unwrap());
        assert_eq!(screen.get_mode(), FALCON_ST_MEDIUM);
        assert!(screen.setscreen(None, None, ST_LOW, 0).unwrap());
        assert_eq!(screen.shift_mode(), ST_LOW);
        assert_eq!(screen.regs.read_beu16(SPSHIFT).unwrap(), 0);
    }

    #[test]
    fn setcolor_masks_the_old_value() {
        let mut screen = st();
        screen.screen_init(None).unwrap();
        assert_eq!(screen.setcolor(0x12, 0x0fff).unwrap(), 0x070);
        assert_eq!(screen.setcolor(2, -1).unwrap(), 0x777);
        assert_eq!(screen.regs.read_beu16(ST_PALETTE_REGS + 4).unwrap(), 0x0fff);
    }

    #[test]
    fn setpalette_waits_for_the_blank() {
        let mut screen = st();
        screen.screen_init(None).unwrap();
        for i in 0..16u32 {
            screen.regs.write_beu16(0x1000 + 2 * i, 0x0123).unwrap();
        }
        screen.setpalette(0x1000).unwrap();
        assert_eq!(screen.setcolor(4, -1).unwrap(), 0x007);

        let irq = InterruptController::new(0x2300);
        screen.vbl.clone().interrupt(&irq, &mut screen.regs).unwrap();
        assert_eq!(screen.setcolor(4, -1).unwrap(), 0x123);
    }

    #[test]
    fn vsync_opens_the_mask_and_restores_it() {
        let screen = st();
        let stop = Arc::new(AtomicBool::new(false));
        let blanker = {
            let (vbl, irq, stop) = (screen.vbl.clone(), screen.irq.clone(), stop.clone());
            let mut regs = MemoryBlock::new(vec![0u8; 0x10]);
            thread::spawn(move || {
                while !stop.load(Ordering::SeqCst) {
                    vbl.interrupt(&irq, &mut regs).unwrap();
                    thread::sleep(Duration::from_millis(1));
                }
            })
        };

        screen.vsync().unwrap();
        assert!(screen.vbl.frclock().unwrap() >= 1);
        assert_eq!(screen.irq.sr(), 0x2700);

        stop.store(true, Ordering::SeqCst);
        blanker.join().unwrap();
    }

    #[test]
    fn tt_shift_calls() {
        let mut screen = st();
        assert_eq!(screen.esetshift(0x0400).unwrap(), EINVFN);
        assert_eq!(screen.egetshift().unwrap(), EINVFN);

        let mut screen = machine(ShifterKind::Tt, Monitor::Color);
        assert_eq!(screen.esetshift(0x0400).unwrap(), 0);
        assert_eq!(screen.egetshift().unwrap(), 0x0400);
        assert_eq!(screen.getrez().unwrap(), TT_MEDIUM);
        assert_eq!(screen.resolution().unwrap(), (640, 480, 4));
    }
}
