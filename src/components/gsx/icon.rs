// Icons and packed object colour words
use modular_bitfield_msb::prelude::*;
use organum::core::Address;
use organum::error::Error;

use super::{Driver, GraphicsContext, Justify, IP_SOLID, MD_REPLACE, MD_TRANS, SMALL, WHITE};
use crate::components::geometry::Rect;
use crate::components::Word;

/* object states */
pub const SELECTED: Word = 0x01;
pub const WHITEBAK: Word = 0x40;
pub const DRAW3D: Word = 0x80;

/// Colour and overlay character of an icon.
#[modular_bitfield_msb::bitfield]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IconColor {
    pub fg: B4,
    pub bg: B4,
    pub ch: u8,
}

impl From<u16> for IconColor {
    fn from(word: u16) -> Self {
        IconColor::from_bytes(word.to_be_bytes())
    }
}

/// Colour word of a box or text object.
#[modular_bitfield_msb::bitfield]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObjectColor {
    pub border: B4,
    pub text: B4,
    pub replace: bool,
    pub pattern: B3,
    pub interior: B4,
}

impl From<u16> for ObjectColor {
    fn from(word: u16) -> Self {
        ObjectColor::from_bytes(word.to_be_bytes())
    }
}

/// Decoded object colour word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CrackedColor {
    pub border: Word,
    pub text: Word,
    pub pattern: Word,
    pub interior: Word,
    pub mode: Word,
}

pub fn crack_color(word: u16) -> CrackedColor {
    let color = ObjectColor::from(word);
    CrackedColor {
        border: color.border() as Word,
        text: color.text() as Word,
        pattern: color.pattern() as Word,
        interior: color.interior() as Word,
        mode: if color.replace() { MD_REPLACE } else { MD_TRANS },
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IconBlock<'a> {
    /// One plane mask and image forms, `icon.w / 8` bytes per row.
    pub mask: Address,
    pub data: Address,
    pub text: &'a str,
    pub color: u16,
    /// Overlay character position, relative to the icon.
    pub xchar: Word,
    pub ychar: Word,
    pub icon: Rect,
    pub label: Rect,
}

impl<D: Driver> GraphicsContext<D> {
    fn icon_blit(&mut self, form: Address, at: &Rect, fg: Word, bg: Word) -> Result<(), Error> {
        let width = self.geo.width;
        self.blit(Some(form), 0, 0, at.w / 8, None, at.x, at.y, width / 8, at.w, at.h, MD_TRANS, fg, bg)
    }

    /// Draw an icon with its label underneath.
    pub fn draw_icon(&mut self, state: Word, ib: &IconBlock) -> Result<(), Error> {
        let color = IconColor::from(ib.color);
        let (mut ifg, mut ibg) = (color.fg() as Word, color.bg() as Word);
        let (mut tfg, mut tbg) = (ifg, ibg);
        let ch = color.ch() as Word;

        if state & SELECTED != 0 {
            std::mem::swap(&mut tfg, &mut tbg);
            if state & DRAW3D == 0 {
                std::mem::swap(&mut ifg, &mut ibg);
            }
        }

        let whitebak = state & WHITEBAK != 0;
        if !(whitebak && ibg == WHITE) {
            self.icon_blit(ib.mask, &ib.icon, ibg, ifg)?;
        }
        if !(whitebak && tbg == WHITE) && ib.label.w != 0 {
            self.draw_rect(tbg, IP_SOLID, &ib.label)?;
        }

        self.icon_blit(ib.data, &ib.icon, ifg, ibg)?;

        if state & SELECTED != 0 && state & DRAW3D != 0 {
            self.icon_blit(ib.mask, &ib.icon.offset(-1, -1), ifg, ibg)?;
            self.icon_blit(ib.mask, &ib.icon.offset(1, 1), ifg, ibg)?;
        }

        self.apply_attributes(true, MD_TRANS, ifg)?;
        if ch != 0 {
            self.pb.intin[0] = ch;
            self.text_blit(SMALL, ib.icon.x + ib.xchar, ib.icon.y + ib.ychar, 1)?;
        }

        self.apply_attributes(true, MD_TRANS, tfg)?;
        self.draw_text(Justify::Center, SMALL, ib.text, &ib.label)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{test_context, Call};
    use super::super::{Opcode, BLACK};
    use super::*;

    fn icon() -> IconBlock<'static> {
        IconBlock {
            mask: 0x1000,
            data: 0x2000,
            text: "DISK",
            // black on white, overlay 'A'
            color: 0x1041,
            xchar: 4,
            ychar: 6,
            icon: Rect::new(100, 50, 32, 32),
            label: Rect::new(92, 82, 48, 8),
        }
    }

    fn copies(calls: &[Call]) -> Vec<(Address, Word, Word, Word, Word)> {
        calls
            .iter()
            .filter(|c| c.opcode == Opcode::CopyTransparent)
            .map(|c| (c.src.addr.unwrap_or(0), c.ptsin[4], c.ptsin[5], c.intin[1], c.intin[2]))
            .collect()
    }

    #[test]
    fn colour_words_unpack() {
        let c = crack_color(0x12f3 | 0x0080);
        assert_eq!(c.border, 1);
        assert_eq!(c.text, 2);
        assert_eq!(c.mode, MD_REPLACE);
        assert_eq!(c.pattern, 7);
        assert_eq!(c.interior, 3);
        assert_eq!(crack_color(0x0070).mode, MD_TRANS);

        let ic = IconColor::from(0x1041);
        assert_eq!((ic.fg(), ic.bg(), ic.ch()), (1, 0, 0x41));
    }

    #[test]
    fn plain_icon_draws_mask_label_image_char_and_text() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_icon(0, &icon()).unwrap();
        assert_eq!(
            copies(&ctx.driver.calls),
            vec![(0x1000, 100, 50, WHITE, BLACK), (0x2000, 100, 50, BLACK, WHITE)]
        );
        assert_eq!(ctx.driver.count(Opcode::FillRect), 1);
        let texts: Vec<_> = ctx.driver.calls_of(Opcode::Text).collect();
        assert_eq!(texts.len(), 2);
        // overlay char at its offset, on the small font baseline
        assert_eq!(texts[0].ptsin, vec![104, 62]);
        assert_eq!(texts[0].intin, vec![0x41]);
        // label centred in 48 pixels: 4 chars of 6
        assert_eq!(texts[1].ptsin, vec![104, 88]);
    }

    #[test]
    fn white_background_skips_mask_and_label_fill() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_icon(WHITEBAK, &icon()).unwrap();
        assert_eq!(copies(&ctx.driver.calls), vec![(0x2000, 100, 50, BLACK, WHITE)]);
        assert_eq!(ctx.driver.count(Opcode::FillRect), 0);
    }

    #[test]
    fn selection_inverts_image_and_text() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_icon(SELECTED, &icon()).unwrap();
        assert_eq!(
            copies(&ctx.driver.calls),
            vec![(0x1000, 100, 50, BLACK, WHITE), (0x2000, 100, 50, WHITE, BLACK)]
        );
        let fill_colour = ctx.driver.calls_of(Opcode::SetFillColor).next().unwrap();
        assert_eq!(fill_colour.intin[0], BLACK);
    }

    #[test]
    fn selected_3d_icon_gets_a_bevel() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_icon(SELECTED | DRAW3D, &icon()).unwrap();
        assert_eq!(
            copies(&ctx.driver.calls),
            vec![
                (0x1000, 100, 50, WHITE, BLACK),
                (0x2000, 100, 50, BLACK, WHITE),
                (0x1000, 99, 49, BLACK, WHITE),
                (0x1000, 101, 51, BLACK, WHITE),
            ]
        );
        // text colours still swap
        let fill_colour = ctx.driver.calls_of(Opcode::SetFillColor).next().unwrap();
        assert_eq!(fill_colour.intin[0], BLACK);
    }

    #[test]
    fn no_label_fill_without_label_width() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        let mut ib = icon();
        ib.label.w = 0;
        ctx.draw_icon(0, &ib).unwrap();
        assert_eq!(ctx.driver.count(Opcode::FillRect), 0);
    }
}
