// Raster copies, transforms and filled rectangles
use organum::core::Address;
use organum::error::Error;

use super::{
    Driver, Fdb, GraphicsContext, Opcode, FIS_HOLLOW, FIS_PATTERN, FIS_SOLID, IP_HOLLOW,
    IP_SOLID, MD_REPLACE,
};
use crate::components::geometry::Rect;
use crate::components::Word;

/// Last pixel of a run of `len` starting at `start`, pinned to the word range.
fn last(start: Word, len: Word) -> Word {
    start.saturating_add(len).saturating_sub(1)
}

impl<D: Driver> GraphicsContext<D> {
    /// Describe a raster: the screen, or a one plane form `wb` bytes wide.
    pub fn fix_fdb(&self, addr: Option<Address>, wb: Word, h: Word) -> Fdb {
        match addr {
            None => {
                let w = self.ws.xres + 1;
                Fdb {
                    addr: None,
                    w,
                    h: self.ws.yres + 1,
                    wdwidth: w / 16,
                    stand: false,
                    nplanes: self.geo.nplanes,
                }
            }
            Some(_) => Fdb {
                addr,
                w: wb * 8,
                h,
                wdwidth: wb / 2,
                stand: false,
                nplanes: 1,
            },
        }
    }

    fn set_copy_points(&mut self, sx: Word, sy: Word, dx: Word, dy: Word, w: Word, h: Word) {
        self.pb.ptsin[..8].copy_from_slice(&[
            sx,
            sy,
            last(sx, w),
            last(sy, h),
            dx,
            dy,
            last(dx, w),
            last(dy, h),
        ]);
    }

    /// Copy a `w` by `h` block between two rasters.
    ///
    /// With `fg == -1` the copy is opaque and `rule` is a logic operation;
    /// otherwise `rule` is a writing mode and the set/clear source bits take
    /// the `fg`/`bg` colours.
    #[allow(clippy::too_many_arguments)]
    pub fn blit(
        &mut self,
        src: Option<Address>,
        sx: Word,
        sy: Word,
        swb: Word,
        dst: Option<Address>,
        dx: Word,
        dy: Word,
        dwb: Word,
        w: Word,
        h: Word,
        rule: Word,
        fg: Word,
        bg: Word,
    ) -> Result<(), Error> {
        self.pb.src = self.fix_fdb(src, swb, h);
        self.pb.dst = self.fix_fdb(dst, dwb, h);

        self.hide_pointer()?;
        self.set_copy_points(sx, sy, dx, dy, w, h);
        let result = if fg == -1 {
            self.pb.intin[0] = rule;
            self.call(Opcode::CopyOpaque, 4, 1)
        } else {
            self.pb.intin[..3].copy_from_slice(&[rule, fg, bg]);
            self.call(Opcode::CopyTransparent, 4, 3)
        };
        self.show_pointer()?;
        result
    }

    /// Move a block around on the screen.
    #[allow(clippy::too_many_arguments)]
    pub fn screen_to_screen_blit(
        &mut self,
        rule: Word,
        sx: Word,
        sy: Word,
        dx: Word,
        dy: Word,
        w: Word,
        h: Word,
    ) -> Result<(), Error> {
        self.blit(None, sx, sy, 0, None, dx, dy, 0, w, h, rule, -1, -1)
    }

    /// Convert a one plane standard form image into device form.
    pub fn transform_standard_to_device(
        &mut self,
        src: Address,
        swb: Word,
        dst: Address,
        dwb: Word,
        h: Word,
    ) -> Result<(), Error> {
        let mut from = self.fix_fdb(Some(src), swb, h);
        from.stand = true;
        from.nplanes = 1;
        self.pb.src = from;
        self.pb.dst = self.fix_fdb(Some(dst), dwb, h);
        self.call(Opcode::Transform, 0, 0)
    }

    /// Filled rectangle on the screen in the current fill colour.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_rect(
        &mut self,
        mode: Word,
        fis: Word,
        patt: Word,
        x: Word,
        y: Word,
        w: Word,
        h: Word,
    ) -> Result<(), Error> {
        self.pb.dst = self.fix_fdb(None, 0, 0);
        let tcolor = self.attr.tcolor;
        self.apply_attributes(true, mode, tcolor)?;
        self.apply_fill(fis, patt)?;
        self.pb.ptsin[..4].copy_from_slice(&[x, y, last(x, w), last(y, h)]);
        self.call(Opcode::FillRect, 2, 0)
    }

    /// Colored, patterned rectangle; pattern 0 is hollow and 7 solid.
    pub fn draw_rect(&mut self, color: Word, pattern: Word, r: &Rect) -> Result<(), Error> {
        let fis = match pattern {
            IP_HOLLOW => FIS_HOLLOW,
            IP_SOLID => FIS_SOLID,
            _ => FIS_PATTERN,
        };
        self.one_code(Opcode::SetFillColor, color)?;
        self.fill_rect(MD_REPLACE, fis, pattern, r.x, r.y, r.w, r.h)
    }
}
