// The clip engine: one stored rectangle, mirrored into the device
use organum::error::Error;

use super::{Driver, GraphicsContext, Opcode};
use crate::components::geometry::Rect;

impl<D: Driver> GraphicsContext<D> {
    /// Store the clip rectangle and program the device with it.
    ///
    /// A rect without width or height turns clipping off.
    pub fn set_clip(&mut self, rect: Rect) -> Result<(), Error> {
        self.clip = rect;
        let enabled = !rect.is_empty();
        if enabled {
            self.pb.ptsin[..4].copy_from_slice(&rect.to_pxy());
        }
        self.pb.intin[0] = enabled as i16;
        self.call(Opcode::SetClip, 2, 1)
    }

    pub fn get_clip(&self) -> Rect {
        self.clip
    }

    /// Quick reject against the clip rectangle.
    ///
    /// Above and left only cull a rect ending more than one pixel before the
    /// clip edge; below and right cull a rect starting at the pixel just past
    /// the clip.
    pub fn is_visible(&self, r: &Rect) -> bool {
        let c = &self.clip;
        if c.is_empty() {
            return true;
        }
        if r.y + r.h < c.y {
            return false;
        }
        if r.x + r.w < c.x {
            return false;
        }
        if c.y + c.h <= r.y {
            return false;
        }
        if c.x + c.w <= r.x {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::test_context;
    use super::*;

    #[test]
    fn disabled_clip_shows_everything() {
        let mut ctx = test_context();
        ctx.set_clip(Rect::new(10, 10, 0, 5)).unwrap();
        for r in [
            Rect::new(-500, -500, 1, 1),
            Rect::new(1000, 1000, 5, 5),
            Rect::new(0, 0, 0, 0),
        ] {
            assert!(ctx.is_visible(&r));
        }
        let call = ctx.driver.calls.last().unwrap();
        assert_eq!(call.opcode, Opcode::SetClip);
        assert_eq!(call.intin[0], 0);
    }

    #[test]
    fn device_clip_is_inclusive() {
        let mut ctx = test_context();
        ctx.set_clip(Rect::new(10, 20, 30, 40)).unwrap();
        let call = ctx.driver.calls.last().unwrap();
        assert_eq!(call.intin[0], 1);
        assert_eq!(call.ptsin, vec![10, 20, 39, 59]);
        assert_eq!(ctx.get_clip(), Rect::new(10, 20, 30, 40));
    }

    #[test]
    fn shared_edge_pixels_are_visible() {
        let mut ctx = test_context();
        let clip = Rect::new(10, 10, 10, 10);
        ctx.set_clip(clip).unwrap();
        // one pixel overlap on every side
        assert!(ctx.is_visible(&Rect::new(0, 0, 11, 11)));
        assert!(ctx.is_visible(&Rect::new(19, 19, 5, 5)));
        assert!(ctx.is_visible(&Rect::new(19, 0, 5, 11)));
        assert!(ctx.is_visible(&Rect::new(0, 19, 11, 5)));
    }

    #[test]
    fn rects_past_bottom_and_right_are_culled() {
        let mut ctx = test_context();
        ctx.set_clip(Rect::new(10, 10, 10, 10)).unwrap();
        assert!(!ctx.is_visible(&Rect::new(12, 20, 4, 4)));
        assert!(!ctx.is_visible(&Rect::new(20, 12, 4, 4)));
    }

    #[test]
    fn rects_clear_of_top_and_left_are_culled() {
        let mut ctx = test_context();
        ctx.set_clip(Rect::new(10, 10, 10, 10)).unwrap();
        // a one pixel gap before the clip edge
        assert!(!ctx.is_visible(&Rect::new(12, 0, 4, 9)));
        assert!(!ctx.is_visible(&Rect::new(0, 12, 9, 4)));
        // ending right on the edge still passes the quick test
        assert!(ctx.is_visible(&Rect::new(12, 0, 4, 10)));
        assert!(ctx.is_visible(&Rect::new(0, 12, 10, 4)));
    }
}
