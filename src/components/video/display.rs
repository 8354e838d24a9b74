// Turns what the shifter would scan out into RGBA for the host window
use image::{Rgba, RgbaImage};
use organum::core::{Address, Addressable};
use organum::error::Error;

use super::screen::Screen;
use super::{VideoModeWord, FALCON_PALETTE_REGS, ST_PALETTE_REGS};

/// One rendered frame, 4 bytes per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Frame {
    /// Copy into a frame of the same size, e.g. the `pixels` surface.
    pub fn blit_into(&self, target: &mut [u8]) {
        for (dst, src) in target.chunks_exact_mut(4).zip(self.rgba.chunks_exact(4)) {
            dst.copy_from_slice(src);
        }
    }

    pub fn to_image(&self) -> Result<RgbaImage, Error> {
        RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
            .ok_or_else(|| Error::new("display: frame does not match its size"))
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        let i = ((y * self.width + x) * 4) as usize;
        match self.rgba.get(i..i + 4) {
            Some(px) => Rgba([px[0], px[1], px[2], px[3]]),
            None => Rgba([0, 0, 0, 0]),
        }
    }
}

/// Expand an ST palette register. With 4 bits per gun the low bit of the
/// hardware value sits in bit 3 of the nibble.
fn st_rgba(color: u16, ste: bool) -> [u8; 4] {
    let gun = |shift: u16| -> u8 {
        let n = (color >> shift) & 0x0f;
        if ste {
            let level = ((n & 0x07) << 1) | ((n >> 3) & 1);
            (level * 17) as u8
        } else {
            ((n & 0x07) * 255 / 7) as u8
        }
    };
    [gun(8), gun(4), gun(0), 0xff]
}

/// Falcon palette registers hold RRGG00BB.
fn falcon_rgba(color: u32) -> [u8; 4] {
    let [r, g, _, b] = color.to_be_bytes();
    [r, g, b, 0xff]
}

/// Falcon true colour words are RGB 565.
fn truecolor_rgba(word: u16) -> [u8; 4] {
    let r = ((word >> 11) & 0x1f) as u32;
    let g = ((word >> 5) & 0x3f) as u32;
    let b = (word & 0x1f) as u32;
    [(r * 255 / 31) as u8, (g * 255 / 63) as u8, (b * 255 / 31) as u8, 0xff]
}

impl<R: Addressable> Screen<R> {
    fn palette_rgba(&mut self, planes: u16) -> Result<Vec<[u8; 4]>, Error> {
        let falcon = self.config.shifter.has_videl() && !VideoModeWord::from(self.mode).compat();
        if falcon {
            let entries = 1usize << planes.min(8);
            let mut colors = Vec::with_capacity(entries);
            for i in 0..entries {
                colors.push(falcon_rgba(self.regs.read_beu32(FALCON_PALETTE_REGS + 4 * i as Address)?));
            }
            return Ok(colors);
        }

        let ste = self.config.shifter.palette_mask() == 0x0fff;
        let mut colors = Vec::with_capacity(16);
        for i in 0..16 {
            colors.push(st_rgba(self.regs.read_beu16(ST_PALETTE_REGS + 2 * i)?, ste));
        }
        Ok(colors)
    }

    /// Render the physical screen.
    pub fn render(&mut self) -> Result<Frame, Error> {
        let (width, height, planes) = self.resolution()?;
        let base = self.physbase()?;
        let (w, h) = (width as usize, height as usize);
        let mut rgba = vec![0u8; w * h * 4];

        if planes == 16 {
            for (i, pixel) in rgba.chunks_exact_mut(4).enumerate() {
                let word = self.regs.read_beu16(base + 2 * i as Address)?;
                pixel.copy_from_slice(&truecolor_rgba(word));
            }
            return Ok(Frame { width: width as u32, height: height as u32, rgba });
        }

        let palette = self.palette_rgba(planes)?;
        let planes = planes as usize;
        let line_bytes = w / 16 * planes * 2;
        let mut words = vec![0u16; planes];
        for y in 0..h {
            for group in 0..w / 16 {
                let addr = base + (y * line_bytes + group * planes * 2) as Address;
                for (plane, word) in words.iter_mut().enumerate() {
                    *word = self.regs.read_beu16(addr + 2 * plane as Address)?;
                }
                for bit in 0..16 {
                    let mut index = 0usize;
                    for (plane, word) in words.iter().enumerate() {
                        if word & (0x8000 >> bit) != 0 {
                            index |= 1 << plane;
                        }
                    }
                    let color = palette.get(index).copied().unwrap_or([0, 0, 0, 0xff]);
                    let i = (y * w + group * 16 + bit) * 4;
                    rgba[i..i + 4].copy_from_slice(&color);
                }
            }
        }
        Ok(Frame { width: width as u32, height: height as u32, rgba })
    }
}

#[cfg(test)]
mod tests {
    use super::super::screen::testing::{machine, st};
    use super::*;
    use crate::components::{Monitor, ShifterKind};

    #[test]
    fn palette_expansion() {
        assert_eq!(st_rgba(0x0700, false), [255, 0, 0, 255]);
        assert_eq!(st_rgba(0x0fff, true), [255, 255, 255, 255]);
        // 0x8 is the least significant bit on the STe
        assert_eq!(st_rgba(0x0800, true), [17, 0, 0, 255]);
        assert_eq!(falcon_rgba(0xff80_0040), [0xff, 0x80, 0x40, 0xff]);
        assert_eq!(truecolor_rgba(0xf800), [255, 0, 0, 255]);
    }

    #[test]
    fn mono_screen_renders_black_on_white() {
        let mut screen = st();
        screen.screen_init(None).unwrap();
        let base = screen.physbase().unwrap();
        screen.regs().write_beu16(base, 0x8000).unwrap();

        let frame = screen.render().unwrap();
        assert_eq!((frame.width, frame.height), (640, 400));
        assert_eq!(frame.pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(frame.pixel(1, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(frame.to_image().unwrap().dimensions(), (640, 400));
    }

    #[test]
    fn planes_combine_into_a_colour_index() {
        let mut screen = machine(ShifterKind::St, Monitor::Color);
        screen.screen_init(None).unwrap();
        screen.setscreen(None, None, 0, 0).unwrap();
        let base = screen.physbase().unwrap();
        // pixel 0 gets index 1 (red), pixel 1 index 2 (green)
        screen.regs().write_beu16(base, 0x8000).unwrap();
        screen.regs().write_beu16(base + 2, 0x4000).unwrap();

        let frame = screen.render().unwrap();
        assert_eq!((frame.width, frame.height), (320, 200));
        assert_eq!(frame.pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(frame.pixel(1, 0), Rgba([0, 255, 0, 255]));
        assert_eq!(frame.pixel(2, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn frame_copies_into_a_surface() {
        let frame = Frame { width: 1, height: 2, rgba: vec![1, 2, 3, 4, 5, 6, 7, 8] };
        let mut surface = vec![0u8; 8];
        frame.blit_into(&mut surface);
        assert_eq!(surface, frame.rgba);
    }
}
