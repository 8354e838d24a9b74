// Text measurement, justification and output through the device text call
use codepage_437::CP437_WINGDINGS as cp437;
use organum::error::Error;

use super::{Driver, GraphicsContext, Justify, Opcode};
use crate::components::geometry::Rect;
use crate::components::Word;

/// Expand `text` into one glyph index per word of `out`.
///
/// Stops at a NUL or when `out` is full. Characters missing from the
/// character set become '?'. Returns the number of glyphs written.
pub fn expand_string(out: &mut [Word], text: &str) -> usize {
    let mut count = 0;
    for (slot, c) in out.iter_mut().zip(text.chars().take_while(|&c| c != '\0')) {
        *slot = cp437.encode(c).unwrap_or(b'?') as Word;
        count += 1;
    }
    count
}

impl<D: Driver> GraphicsContext<D> {
    /// Load `text` into `intin` and fit it into `max_w` by `max_h`.
    ///
    /// Returns the clamped width and height and how many characters fit.
    /// Nothing fits when the height is less than one cell.
    pub fn measure_and_clip(
        &mut self,
        font: Word,
        text: &str,
        max_w: Word,
        max_h: Word,
    ) -> (Word, Word, Word) {
        let (wc, hc) = self.cell_size(font);
        let mut count = expand_string(&mut self.pb.intin, text) as Word;

        let w = max_w.min(count.saturating_mul(wc));
        let h = max_h.min(hc);
        if hc == 0 || wc == 0 || h / hc == 0 {
            count = 0;
        } else {
            count = count.min(w / wc);
        }
        (w, h, count)
    }

    /// Shrink `rect` to the text and move it inside the `w` by `h` area
    /// according to `just`. Text is always centred vertically.
    pub fn justify(
        &mut self,
        just: Justify,
        font: Word,
        text: &str,
        mut w: Word,
        mut h: Word,
        rect: &mut Rect,
    ) -> Word {
        let (tw, th, count) = self.measure_and_clip(font, text, rect.w, rect.h);
        rect.w = tw;
        rect.h = th;

        h -= rect.h;
        if h > 0 {
            rect.y += (h + 1) / 2;
        }

        w -= rect.w;
        if w > 0 {
            match just {
                Justify::Center => rect.x += (w + 1) / 2,
                Justify::Right => rect.x += w,
                Justify::Left => {}
            }
        }
        count
    }

    /// Draw a justified string inside `rect` with the current text attributes.
    pub fn draw_text(&mut self, just: Justify, font: Word, text: &str, rect: &Rect) -> Result<(), Error> {
        let mut t = *rect;
        let count = self.justify(just, font, text, t.w, t.h, &mut t);
        if count > 0 {
            self.text_blit(font, t.x, t.y, count)?;
        }
        Ok(())
    }

    /// Output the first `count` glyphs already in `intin`, top left at x, y.
    pub fn text_blit(&mut self, font: Word, x: Word, y: Word, count: Word) -> Result<(), Error> {
        let baseline = self.select_font(font)?;
        self.pb.ptsin[0] = x;
        self.pb.ptsin[1] = y + baseline;
        self.call(Opcode::Text, 1, count.max(0) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::test_context;
    use super::super::{IBM, INTIN_SIZE, SMALL};
    use super::*;

    #[test]
    fn expansion_maps_to_the_character_set() {
        let mut out = [0 as Word; 8];
        assert_eq!(expand_string(&mut out, "Aé☺"), 3);
        assert_eq!(&out[..3], &[0x41, 0x82, 0x01]);
        assert_eq!(expand_string(&mut out, "a\0b"), 1);
        assert_eq!(expand_string(&mut out, "€"), 1);
        assert_eq!(out[0], b'?' as Word);
    }

    #[test]
    fn expansion_stops_at_capacity() {
        let mut ctx = test_context();
        let long = "x".repeat(INTIN_SIZE + 20);
        assert_eq!(expand_string(&mut ctx.pb.intin, &long), INTIN_SIZE);
    }

    #[test]
    fn centred_text_taller_than_the_box_fits_nothing() {
        let mut ctx = test_context();
        let mut rect = Rect::new(0, 0, 20, 10);
        let count = ctx.justify(Justify::Center, IBM, "AB", 20, 10, &mut rect);
        assert_eq!(rect.x, 2);
        assert_eq!(rect.w, 16);
        assert_eq!(rect.h, 10);
        assert_eq!(count, 0);
    }

    #[test]
    fn justification_moves_the_origin() {
        let mut ctx = test_context();
        let mut rect = Rect::new(10, 10, 100, 40);
        let count = ctx.justify(Justify::Right, IBM, "ABC", 100, 40, &mut rect);
        assert_eq!(count, 3);
        assert_eq!(rect, Rect::new(10 + 76, 10 + 12, 24, 16));

        let mut rect = Rect::new(10, 10, 100, 40);
        ctx.justify(Justify::Left, IBM, "ABC", 100, 40, &mut rect);
        assert_eq!(rect.x, 10);
    }

    #[test]
    fn narrow_box_truncates_the_string() {
        let mut ctx = test_context();
        let (w, h, count) = ctx.measure_and_clip(IBM, "ABCDEFGH", 20, 100);
        assert_eq!((w, h, count), (20, 16, 2));
    }

    #[test]
    fn text_is_drawn_on_the_font_baseline() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_text(Justify::Left, IBM, "Hi", &Rect::new(0, 0, 100, 16)).unwrap();
        ctx.draw_text(Justify::Left, SMALL, "Hi", &Rect::new(0, 0, 100, 8)).unwrap();
        let texts: Vec<_> = ctx.driver.calls_of(Opcode::Text).collect();
        assert_eq!(texts[0].ptsin, vec![0, 13]);
        assert_eq!(texts[0].intin, vec![b'H' as Word, b'i' as Word]);
        assert_eq!(texts[1].ptsin, vec![0, 6]);
    }

    #[test]
    fn nothing_is_sent_when_nothing_fits() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_text(Justify::Center, IBM, "AB", &Rect::new(0, 0, 20, 10)).unwrap();
        assert_eq!(ctx.driver.count(Opcode::Text), 0);
    }
}
