// Bitmap fonts in the classic GEM font header layout
pub mod system_8x16;

use log::debug;

pub use system_8x16::SYSTEM_8X16;

/* font flags */
pub const F_DEFAULT: u16 = 1 << 0;
pub const F_HORZ_OFF: u16 = 1 << 1;
pub const F_STDFORM: u16 = 1 << 2;
pub const F_MONOSPACE: u16 = 1 << 3;

/// A font is immutable: its tables live in static memory.
#[derive(Debug, PartialEq, Eq)]
pub struct Font {
    pub id: u16,
    pub point: u16,
    pub name: &'static str,
    pub first_ade: u16,
    pub last_ade: u16,
    pub top: u16,
    pub ascent: u16,
    pub half: u16,
    pub descent: u16,
    pub bottom: u16,
    pub max_char_width: u16,
    pub max_cell_width: u16,
    pub left_offset: u16,
    pub right_offset: u16,
    pub thicken: u16,
    pub ul_size: u16,
    pub lighten: u16,
    pub skew: u16,
    pub flags: u16,
    /// Bit offset of each glyph in a form row, one more entry than glyphs.
    pub off_table: &'static [u16],
    /// Form rows of `form_width` bytes, stored as big endian words.
    pub dat_table: &'static [u16],
    pub form_width: u16,
    pub form_height: u16,
}

impl Font {
    pub fn cell_height(&self) -> u16 {
        self.form_height
    }

    /// Glyph index for a character, characters outside the font map to the
    /// first one.
    fn index(&self, ch: u8) -> usize {
        let ch = ch as u16;
        if ch < self.first_ade || ch > self.last_ade {
            0
        } else {
            (ch - self.first_ade) as usize
        }
    }

    /// Width in pixels of one glyph.
    pub fn glyph_width(&self, ch: u8) -> u16 {
        let i = self.index(ch);
        match (self.off_table.get(i), self.off_table.get(i + 1)) {
            (Some(start), Some(end)) => end.saturating_sub(*start),
            _ => 0,
        }
    }

    fn form_bit(&self, row: usize, bit: usize) -> bool {
        let byte = row * self.form_width as usize + bit / 8;
        match self.dat_table.get(byte / 2) {
            Some(word) => {
                let shift = if byte % 2 == 0 { 8 } else { 0 };
                let value = (word >> shift) as u8;
                value & (0x80 >> (bit % 8)) != 0
            }
            None => false,
        }
    }

    /// One row of a glyph, left aligned in a word (first pixel is bit 15).
    pub fn glyph_row(&self, ch: u8, row: u16) -> u16 {
        if row >= self.form_height {
            return 0;
        }
        let start = self.off_table.get(self.index(ch)).copied().unwrap_or(0) as usize;
        let width = self.glyph_width(ch).min(16) as usize;
        let mut bits = 0u16;
        for x in 0..width {
            if self.form_bit(row as usize, start + x) {
                bits |= 0x8000 >> x;
            }
        }
        bits
    }
}

/// The fonts the firmware knows about and which one is the default.
pub struct FontRegistry {
    fonts: &'static [&'static Font],
    default: &'static Font,
}

static SYSTEM_FONTS: [&Font; 1] = [&SYSTEM_8X16];

impl FontRegistry {
    pub fn new() -> Self {
        Self {
            fonts: &SYSTEM_FONTS,
            default: &SYSTEM_8X16,
        }
    }

    pub fn default_font(&self) -> &'static Font {
        self.default
    }

    pub fn fonts(&self) -> &'static [&'static Font] {
        self.fonts
    }

    /// Pick the default font for a screen height: cells of 16 rows from 400
    /// lines up, 8 rows below, falling back to the tallest font available.
    pub fn set_default(&mut self, yres: u16) -> &'static Font {
        let wanted = if yres >= 400 { 16 } else { 8 };
        let tallest = self.fonts.iter().copied().max_by_key(|font| font.form_height);
        self.default = self
            .fonts
            .iter()
            .copied()
            .find(|font| font.form_height == wanted)
            .or(tallest)
            .unwrap_or(&SYSTEM_8X16);
        debug!("font: default for {} lines is {}", yres, self.default.name);
        self.default
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_font_metrics() {
        let font = &SYSTEM_8X16;
        assert_eq!(font.off_table.len(), 257);
        assert_eq!(font.dat_table.len(), 2048);
        assert_eq!(font.glyph_width(b'A'), 8);
        assert_eq!(font.flags & F_MONOSPACE, F_MONOSPACE);
        assert_eq!(font.cell_height(), 16);
    }

    #[test]
    fn glyphs_have_ink_and_space_has_none() {
        let font = &SYSTEM_8X16;
        let ink: u32 = (0..16).map(|row| font.glyph_row(b'A', row).count_ones()).sum();
        assert!(ink > 10);
        assert!((0..16).all(|row| font.glyph_row(b' ', row) == 0));
        // rows are left aligned in the word
        assert!((0..16).all(|row| font.glyph_row(b'A', row) & 0x00ff == 0));
    }

    #[test]
    fn rows_past_the_form_are_blank() {
        assert_eq!(SYSTEM_8X16.glyph_row(b'A', 16), 0);
    }

    #[test]
    fn registry_always_has_a_default() {
        let mut registry = FontRegistry::new();
        assert_eq!(registry.set_default(480).name, "8x16 system font");
        // no 8 row font: the 16 row one is used
        assert_eq!(registry.set_default(200).form_height, 16);
        assert_eq!(registry.fonts().len(), 1);
    }
}
