// Attribute cache: device settings are only sent when they change
use organum::error::Error;

use super::{Driver, GraphicsContext, Opcode, IBM, SMALL};
use crate::components::Word;

/// Last value sent to the device for each attribute; -1 is unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeCache {
    pub mode: Word,
    pub tcolor: Word,
    pub lcolor: Word,
    pub fis: Word,
    pub patt: Word,
    pub font: Word,
}

impl AttributeCache {
    pub fn new() -> Self {
        Self {
            mode: -1,
            tcolor: -1,
            lcolor: -1,
            fis: -1,
            patt: -1,
            font: -1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for AttributeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Driver> GraphicsContext<D> {
    pub fn attributes(&self) -> &AttributeCache {
        &self.attr
    }

    /// Make sure the device draws with `mode` and `color`.
    ///
    /// `is_text` selects the text colour, otherwise the line colour is set.
    /// `intin[0]` is preserved for callers that filled it beforehand.
    pub fn apply_attributes(&mut self, is_text: bool, mode: Word, color: Word) -> Result<(), Error> {
        let saved = self.pb.intin[0];

        if mode != self.attr.mode {
            self.one_code(Opcode::SetWritingMode, mode)?;
            self.attr.mode = mode;
        }

        if is_text {
            if color != self.attr.tcolor {
                self.one_code(Opcode::SetTextColor, color)?;
                self.attr.tcolor = color;
            }
        } else if color != self.attr.lcolor {
            self.one_code(Opcode::SetLineColor, color)?;
            self.attr.lcolor = color;
        }

        self.pb.intin[0] = saved;
        Ok(())
    }

    /// Switch fill interior and style, each only when it differs.
    pub(crate) fn apply_fill(&mut self, fis: Word, patt: Word) -> Result<(), Error> {
        if fis != self.attr.fis {
            self.one_code(Opcode::SetFillInterior, fis)?;
            self.attr.fis = fis;
        }
        if patt != self.attr.patt {
            self.one_code(Opcode::SetFillStyle, patt)?;
            self.attr.patt = patt;
        }
        Ok(())
    }

    /// Make `font` current and return its baseline offset in pixels.
    pub(crate) fn select_font(&mut self, font: Word) -> Result<Word, Error> {
        match font {
            IBM => {
                if font != self.attr.font {
                    let [wpts, hpts, wchar, hchar] = self.text_height(self.ws.chmaxh)?;
                    self.geo.wptschar = wpts;
                    self.geo.hptschar = hpts;
                    self.geo.wchar = wchar;
                    self.geo.hchar = hchar;
                    self.attr.font = font;
                }
                Ok(self.geo.hptschar)
            }
            SMALL => {
                if font != self.attr.font {
                    let [wpts, hpts, wchar, hchar] = self.text_height(self.ws.chminh)?;
                    self.geo.wsptschar = wpts;
                    self.geo.hsptschar = hpts;
                    self.geo.wschar = wchar;
                    self.geo.hschar = hchar;
                    self.attr.font = font;
                }
                Ok(self.geo.hsptschar)
            }
            _ => Ok(0),
        }
    }

    /// Cell width and height of one of the two system fonts.
    pub(crate) fn cell_size(&self, font: Word) -> (Word, Word) {
        match font {
            SMALL => (self.geo.wschar, self.geo.hschar),
            _ => (self.geo.wchar, self.geo.hchar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::test_context;
    use super::super::{MD_REPLACE, MD_TRANS};
    use super::*;

    #[test]
    fn identical_attributes_reach_the_device_once() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.apply_attributes(false, MD_REPLACE, 1).unwrap();
        assert_eq!(ctx.driver.count(Opcode::SetWritingMode), 1);
        assert_eq!(ctx.driver.count(Opcode::SetLineColor), 1);
        ctx.apply_attributes(false, MD_REPLACE, 1).unwrap();
        assert_eq!(ctx.driver.count(Opcode::SetWritingMode), 1);
        assert_eq!(ctx.driver.count(Opcode::SetLineColor), 1);
    }

    #[test]
    fn text_and_line_colours_are_cached_apart() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.apply_attributes(true, MD_TRANS, 2).unwrap();
        ctx.apply_attributes(false, MD_TRANS, 2).unwrap();
        assert_eq!(ctx.driver.count(Opcode::SetWritingMode), 1);
        assert_eq!(ctx.driver.count(Opcode::SetTextColor), 1);
        assert_eq!(ctx.driver.count(Opcode::SetLineColor), 1);
        assert_eq!(ctx.attributes().tcolor, 2);
        assert_eq!(ctx.attributes().lcolor, 2);
    }

    #[test]
    fn first_int_parameter_survives() {
        let mut ctx = test_context();
        ctx.pb.intin[0] = 0x41;
        ctx.apply_attributes(true, MD_TRANS, 3).unwrap();
        assert_eq!(ctx.pb.intin[0], 0x41);
    }

    #[test]
    fn restart_forgets_cached_values() {
        let mut ctx = test_context();
        ctx.apply_attributes(false, MD_REPLACE, 1).unwrap();
        ctx.start().unwrap();
        assert_eq!(*ctx.attributes(), AttributeCache::new());
        ctx.driver.calls.clear();
        ctx.apply_attributes(false, MD_REPLACE, 1).unwrap();
        assert_eq!(ctx.driver.calls.len(), 2);
    }

    #[test]
    fn failed_device_call_leaves_the_cache_alone() {
        let mut ctx = test_context();
        ctx.driver.fail_on = Some(Opcode::SetTextColor);
        assert!(ctx.apply_attributes(true, MD_TRANS, 5).is_err());
        assert_eq!(ctx.attributes().mode, MD_TRANS);
        assert_eq!(ctx.attributes().tcolor, -1);

        ctx.driver.fail_on = None;
        ctx.driver.calls.clear();
        ctx.apply_attributes(true, MD_TRANS, 5).unwrap();
        assert_eq!(ctx.driver.count(Opcode::SetWritingMode), 0);
        assert_eq!(ctx.driver.count(Opcode::SetTextColor), 1);
        assert_eq!(ctx.attributes().tcolor, 5);
    }

    #[test]
    fn failed_fill_style_is_sent_again() {
        let mut ctx = test_context();
        ctx.driver.fail_on = Some(Opcode::SetFillStyle);
        assert!(ctx.apply_fill(2, 4).is_err());
        assert_eq!((ctx.attributes().fis, ctx.attributes().patt), (2, -1));

        ctx.driver.fail_on = None;
        ctx.driver.calls.clear();
        ctx.apply_fill(2, 4).unwrap();
        assert_eq!(ctx.driver.count(Opcode::SetFillInterior), 0);
        assert_eq!(ctx.driver.count(Opcode::SetFillStyle), 1);
    }

    #[test]
    fn font_switch_requeries_metrics_only_on_change() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        assert_eq!(ctx.select_font(SMALL).unwrap(), 6);
        assert_eq!(ctx.select_font(SMALL).unwrap(), 6);
        assert_eq!(ctx.driver.count(Opcode::SetCharHeight), 1);
        assert_eq!(ctx.select_font(IBM).unwrap(), 13);
        assert_eq!(ctx.driver.count(Opcode::SetCharHeight), 2);
    }
}
