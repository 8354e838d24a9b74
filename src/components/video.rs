// The video subsystem: register map, default palettes and the Videl mode word
//
// Every register access goes through an `Addressable` port, so the same code
// drives the modelled bus and the in-memory register files of the tests.

pub mod display;
pub mod modes;
pub mod screen;
pub mod vbl;
pub mod videl;

use modular_bitfield_msb::prelude::*;
use organum::core::Address;

use crate::components::Word;

pub const VIDEOBASE_ADDR_HI: Address = 0xffff_8201;
pub const VIDEOBASE_ADDR_MID: Address = 0xffff_8203;
pub const VIDEOBASE_ADDR_LOW: Address = 0xffff_820d;
pub const SYNC_MODE: Address = 0xffff_820a;

pub const ST_SHIFTER: Address = 0xffff_8260;
pub const TT_SHIFTER: Address = 0xffff_8262;
pub const SPSHIFT: Address = 0xffff_8266;

pub const ST_PALETTE_REGS: Address = 0xffff_8240;
pub const FALCON_PALETTE_REGS: Address = 0xffff_9800;

pub const ST_VRAM_SIZE: u32 = 32000;

/// Returned by calls the fitted hardware cannot serve.
pub const EINVFN: i32 = -32;

/* shifter resolutions */
pub const ST_LOW: Word = 0;
pub const ST_MEDIUM: Word = 1;
pub const ST_HIGH: Word = 2;
/// Not a real shifter value: the screen is in a Videl mode.
pub const FALCON_REZ: Word = 3;
pub const TT_MEDIUM: Word = 4;
pub const TT_HIGH: Word = 6;
pub const TT_LOW: Word = 7;

/* Videl mode word */
pub const VIDEL_BPPMASK: Word = 0x0007;
pub const VIDEL_1BPP: Word = 0;
pub const VIDEL_2BPP: Word = 1;
pub const VIDEL_4BPP: Word = 2;
pub const VIDEL_8BPP: Word = 3;
pub const VIDEL_TRUECOLOR: Word = 4;
pub const VIDEL_80COL: Word = 0x0008;
pub const VIDEL_VGA: Word = 0x0010;
pub const VIDEL_PAL: Word = 0x0020;
pub const VIDEL_OVERSCAN: Word = 0x0040;
pub const VIDEL_COMPAT: Word = 0x0080;
pub const VIDEL_VERTICAL: Word = 0x0100;

/// TV, NTSC, 80 columns, 4 planes, double line.
pub const FALCON_DEFAULT_BOOT: Word = VIDEL_VERTICAL | VIDEL_80COL | VIDEL_4BPP;
pub const FALCON_ST_HIGH: Word = VIDEL_COMPAT | VIDEL_80COL | VIDEL_1BPP;
pub const FALCON_ST_MEDIUM: Word = VIDEL_VERTICAL | VIDEL_COMPAT | VIDEL_80COL | VIDEL_2BPP;

/// The Videl mode word, as passed to `Vsetmode`.
#[modular_bitfield_msb::bitfield]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VideoModeWord {
    #[skip]
    __: B7,
    pub vertical: bool,
    pub compat: bool,
    pub overscan: bool,
    pub pal: bool,
    pub vga: bool,
    pub col80: bool,
    pub bpp: B3,
}

impl From<Word> for VideoModeWord {
    fn from(mode: Word) -> Self {
        VideoModeWord::from_bytes((mode as u16).to_be_bytes())
    }
}

impl VideoModeWord {
    pub fn bits_per_pixel(&self) -> u16 {
        match self.bpp() as Word {
            VIDEL_1BPP => 1,
            VIDEL_2BPP => 2,
            VIDEL_4BPP => 4,
            VIDEL_8BPP => 8,
            _ => 16,
        }
    }
}

/* ST(e) palette entries, 4 bits per gun */
pub const RGB_BLACK: u16 = 0x0000;
pub const RGB_BLUE: u16 = 0x000f;
pub const RGB_GREEN: u16 = 0x00f0;
pub const RGB_CYAN: u16 = 0x00ff;
pub const RGB_RED: u16 = 0x0f00;
pub const RGB_MAGENTA: u16 = 0x0f0f;
pub const RGB_LTGRAY: u16 = 0x0555;
pub const RGB_GRAY: u16 = 0x0333;
pub const RGB_LTBLUE: u16 = 0x033f;
pub const RGB_LTGREEN: u16 = 0x03f3;
pub const RGB_LTCYAN: u16 = 0x03ff;
pub const RGB_LTRED: u16 = 0x0f33;
pub const RGB_LTMAGENTA: u16 = 0x0f3f;
pub const RGB_YELLOW: u16 = 0x0ff0;
pub const RGB_LTYELLOW: u16 = 0x0ff3;
pub const RGB_WHITE: u16 = 0x0fff;

pub const DEFAULT_PALETTE: [u16; 16] = [
    RGB_WHITE,
    RGB_RED,
    RGB_GREEN,
    RGB_YELLOW,
    RGB_BLUE,
    RGB_MAGENTA,
    RGB_CYAN,
    RGB_LTGRAY,
    RGB_GRAY,
    RGB_LTRED,
    RGB_LTGREEN,
    RGB_LTYELLOW,
    RGB_LTBLUE,
    RGB_LTMAGENTA,
    RGB_LTCYAN,
    RGB_BLACK,
];

/* Falcon palette entries, RRGG00BB */
pub const FRGB_BLACK: u32 = 0x0000_0000;
pub const FRGB_BLUE: u32 = 0x0000_00ff;
pub const FRGB_GREEN: u32 = 0x00ff_0000;
pub const FRGB_CYAN: u32 = 0x00ff_00ff;
pub const FRGB_RED: u32 = 0xff00_0000;
pub const FRGB_MAGENTA: u32 = 0xff00_00ff;
pub const FRGB_LTGRAY: u32 = 0xaaaa_00aa;
pub const FRGB_GRAY: u32 = 0x5555_0055;
pub const FRGB_LTBLUE: u32 = 0x5555_00ff;
pub const FRGB_LTGREEN: u32 = 0x55ff_0055;
pub const FRGB_LTCYAN: u32 = 0x55ff_00ff;
pub const FRGB_LTRED: u32 = 0xff55_0055;
pub const FRGB_LTMAGENTA: u32 = 0xff55_00ff;
pub const FRGB_YELLOW: u32 = 0xffff_0000;
pub const FRGB_LTYELLOW: u32 = 0xffff_0055;
pub const FRGB_WHITE: u32 = 0xffff_00ff;

pub const VIDEL_DEFAULT_PALETTE: [u32; 16] = [
    FRGB_WHITE,
    FRGB_RED,
    FRGB_GREEN,
    FRGB_YELLOW,
    FRGB_BLUE,
    FRGB_MAGENTA,
    FRGB_CYAN,
    FRGB_LTGRAY,
    FRGB_GRAY,
    FRGB_LTRED,
    FRGB_LTGREEN,
    FRGB_LTYELLOW,
    FRGB_LTBLUE,
    FRGB_LTMAGENTA,
    FRGB_LTCYAN,
    FRGB_BLACK,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_word_fields() {
        let mode = VideoModeWord::from(FALCON_ST_MEDIUM);
        assert!(mode.vertical());
        assert!(mode.compat());
        assert!(mode.col80());
        assert!(!mode.vga());
        assert_eq!(mode.bits_per_pixel(), 2);

        let mode = VideoModeWord::from(VIDEL_VGA | VIDEL_PAL | VIDEL_TRUECOLOR);
        assert!(mode.vga());
        assert!(mode.pal());
        assert_eq!(mode.bits_per_pixel(), 16);
    }

    #[test]
    fn boot_mode_constants() {
        assert_eq!(FALCON_DEFAULT_BOOT, 0x10a);
        assert_eq!(FALCON_ST_HIGH, 0x88);
        assert_eq!(FALCON_ST_MEDIUM, 0x189);
    }
}
