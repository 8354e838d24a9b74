// Lines and box outlines, with the dithering-aware variants
use organum::error::Error;

use super::{Driver, GraphicsContext, Opcode, PTSIN_SIZE, SOLID_STYLE};
use crate::components::geometry::{Point, Rect};
use crate::components::Word;

/// Line styles for horizontal segments, by row parity of the leftmost end.
const HORIZ: [u16; 2] = [0x5555, 0xaaaa];
/// Line styles for vertical segments, by x parity | y parity << 1.
const VERT: [u16; 4] = [0x5555, 0xaaaa, 0xaaaa, 0x5555];

pub const MAX_POINTS: usize = PTSIN_SIZE / 2;

/// The style that keeps a segment in phase with a 50% dither.
pub fn dither_style(a: Point, b: Point) -> u16 {
    if a.x == b.x {
        VERT[((a.x & 1) | ((a.y & 1) << 1)) as usize]
    } else {
        let left = if a.x < b.x { a } else { b };
        HORIZ[(left.y & 1) as usize]
    }
}

fn box_points(r: &Rect) -> [Point; 5] {
    let right = r.right();
    let bottom = r.bottom();
    [
        Point::new(r.x, r.y),
        Point::new(right, r.y),
        Point::new(right, bottom),
        Point::new(r.x, bottom),
        Point::new(r.x, r.y),
    ]
}

impl<D: Driver> GraphicsContext<D> {
    fn set_line_style(&mut self, style: u16) -> Result<(), Error> {
        self.one_code(Opcode::SetUdLineStyle, style as Word)
    }

    /// Send a polyline as it is, with the current attributes.
    pub(crate) fn polyline(&mut self, points: &[Point]) -> Result<(), Error> {
        let count = points.len().min(MAX_POINTS);
        for (i, p) in points[..count].iter().enumerate() {
            self.pb.ptsin[2 * i] = p.x;
            self.pb.ptsin[2 * i + 1] = p.y;
        }
        self.call(Opcode::Polyline, count, 0)
    }

    /// Draw a polyline segment by segment so each one stays in dither phase.
    pub fn draw_dithered_polyline(&mut self, points: &[Point]) -> Result<(), Error> {
        for pair in points.windows(2) {
            self.set_line_style(dither_style(pair[0], pair[1]))?;
            self.polyline(pair)?;
        }
        self.set_line_style(SOLID_STYLE)
    }

    /// Dithered polyline relative to an origin, at most `MAX_POINTS` long.
    pub fn draw_polyline_at(&mut self, offx: Word, offy: Word, points: &[Point]) -> Result<(), Error> {
        if points.len() > MAX_POINTS {
            return Err(Error::new(&format!(
                "gsx: polyline of {} points, at most {} fit",
                points.len(),
                MAX_POINTS
            )));
        }
        let mut moved = [Point::default(); MAX_POINTS];
        for (dst, p) in moved.iter_mut().zip(points) {
            *dst = Point::new(offx.saturating_add(p.x), offy.saturating_add(p.y));
        }
        self.draw_dithered_polyline(&moved[..points.len()])
    }

    /// One solid segment, with the pointer out of the way.
    pub fn draw_clipped_line(&mut self, x1: Word, y1: Word, x2: Word, y2: Word) -> Result<(), Error> {
        self.hide_pointer()?;
        self.polyline(&[Point::new(x1, y1), Point::new(x2, y2)])?;
        self.show_pointer()
    }

    /// Outline with the current attributes.
    pub fn draw_box(&mut self, r: &Rect) -> Result<(), Error> {
        self.polyline(&box_points(r))
    }

    /// Outline that looks right over a dithered background.
    pub fn draw_dithered_box(&mut self, r: &Rect) -> Result<(), Error> {
        self.draw_dithered_polyline(&box_points(r))
    }

    /// Only the four corners of a dithered outline.
    pub fn draw_dithered_box_corners(&mut self, r: &Rect) -> Result<(), Error> {
        let wa = 2 * self.geo.wbox;
        let ha = 2 * self.geo.hbox;
        let right = r.right();
        let bottom = r.bottom();

        let corners = [
            [Point::new(r.x, r.y + ha), Point::new(r.x, r.y), Point::new(r.x + wa, r.y)],
            [
                Point::new(r.x + r.w - wa, r.y),
                Point::new(right, r.y),
                Point::new(right, r.y + ha),
            ],
            [
                Point::new(right, r.y + r.h - ha),
                Point::new(right, bottom),
                Point::new(r.x + r.w - wa, bottom),
            ],
            [
                Point::new(r.x + wa, bottom),
                Point::new(r.x, bottom),
                Point::new(r.x, r.y + r.h - ha),
            ],
        ];
        for corner in corners.iter() {
            self.draw_dithered_polyline(corner)?;
        }
        Ok(())
    }

    /// Concentric outlines: a positive thickness grows inwards, a negative
    /// one outwards and includes one extra outline.
    pub fn draw_framed_box(&mut self, x: Word, y: Word, w: Word, h: Word, mut th: Word) -> Result<(), Error> {
        if th == 0 {
            return Ok(());
        }
        if th < 0 {
            th -= 1;
        }

        let outer = Rect::new(x, y, w, h);
        self.hide_pointer()?;
        loop {
            th += if th > 0 { -1 } else { 1 };
            self.draw_box(&outer.inside(th))?;
            if th == 0 {
                break;
            }
        }
        self.show_pointer()
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{test_context, Call};
    use super::*;

    fn lines(calls: &[Call]) -> Vec<&Call> {
        calls.iter().filter(|c| c.opcode == Opcode::Polyline).collect()
    }

    #[test]
    fn dither_tables_follow_endpoint_parity() {
        // vertical: x parity | y parity << 1
        assert_eq!(dither_style(Point::new(0, 0), Point::new(0, 9)), 0x5555);
        assert_eq!(dither_style(Point::new(1, 0), Point::new(1, 9)), 0xaaaa);
        assert_eq!(dither_style(Point::new(0, 1), Point::new(0, 9)), 0xaaaa);
        assert_eq!(dither_style(Point::new(1, 1), Point::new(1, 9)), 0x5555);
        // horizontal: row of the leftmost endpoint
        assert_eq!(dither_style(Point::new(9, 2), Point::new(0, 3)), 0xaaaa);
        assert_eq!(dither_style(Point::new(0, 2), Point::new(9, 3)), 0x5555);
    }

    #[test]
    fn dithered_polyline_styles_each_segment_then_resets() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        let pts = [Point::new(0, 1), Point::new(10, 1), Point::new(10, 20)];
        ctx.draw_dithered_polyline(&pts).unwrap();

        let seq: Vec<(Opcode, Vec<Word>)> = ctx
            .driver
            .calls
            .iter()
            .map(|c| (c.opcode, if c.opcode == Opcode::Polyline { c.ptsin.clone() } else { c.intin.clone() }))
            .collect();
        assert_eq!(
            seq,
            vec![
                (Opcode::SetUdLineStyle, vec![0xaaaau16 as Word]),
                (Opcode::Polyline, vec![0, 1, 10, 1]),
                (Opcode::SetUdLineStyle, vec![0xaaaau16 as Word]),
                (Opcode::Polyline, vec![10, 1, 10, 20]),
                (Opcode::SetUdLineStyle, vec![-1]),
            ]
        );
    }

    #[test]
    fn offset_polyline_moves_every_point() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_polyline_at(100, 50, &[Point::new(0, 0), Point::new(4, 0)]).unwrap();
        let lines = lines(&ctx.driver.calls);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].ptsin, vec![100, 50, 104, 50]);
    }

    #[test]
    fn offset_polyline_refuses_too_many_points() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        let points = [Point::new(1, 1); MAX_POINTS + 1];
        assert!(ctx.draw_polyline_at(0, 0, &points).is_err());
        assert!(ctx.driver.calls.is_empty());
        assert!(ctx.draw_polyline_at(0, 0, &points[..MAX_POINTS]).is_ok());
    }

    #[test]
    fn box_is_a_closed_five_point_line() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_box(&Rect::new(2, 3, 10, 5)).unwrap();
        assert_eq!(ctx.driver.calls.len(), 1);
        assert_eq!(ctx.driver.calls[0].ptsin, vec![2, 3, 11, 3, 11, 7, 2, 7, 2, 3]);
    }

    #[test]
    fn corner_arms_are_two_boxes_long() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        // wbox = hbox = 19 on the test workstation
        ctx.draw_dithered_box_corners(&Rect::new(0, 0, 200, 100)).unwrap();
        let lines = lines(&ctx.driver.calls);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].ptsin, vec![0, 38, 0, 0]);
        assert_eq!(lines[1].ptsin, vec![0, 0, 38, 0]);
        assert_eq!(lines[2].ptsin, vec![162, 0, 199, 0]);
        assert_eq!(lines[5].ptsin, vec![199, 99, 162, 99]);
        assert_eq!(lines[7].ptsin, vec![0, 99, 0, 62]);
    }

    #[test]
    fn framed_box_thickness_three_draws_three_outlines() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_framed_box(10, 10, 20, 20, 3).unwrap();
        let lines = lines(&ctx.driver.calls);
        assert_eq!(lines.len(), 3);
        assert_eq!(&lines[0].ptsin[..2], &[12, 12]);
        assert_eq!(&lines[2].ptsin[..2], &[10, 10]);
        assert_eq!(ctx.driver.count(Opcode::HideCursor), 1);
        assert_eq!(ctx.driver.count(Opcode::ShowCursor), 1);
    }

    #[test]
    fn framed_box_negative_thickness_draws_one_more() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_framed_box(10, 10, 20, 20, -3).unwrap();
        let lines = lines(&ctx.driver.calls);
        assert_eq!(lines.len(), 4);
        assert_eq!(&lines[0].ptsin[..2], &[7, 7]);
        assert_eq!(&lines[3].ptsin[..2], &[10, 10]);
    }

    #[test]
    fn zero_thickness_draws_nothing() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_framed_box(10, 10, 20, 20, 0).unwrap();
        assert!(ctx.driver.calls.is_empty());
    }

    #[test]
    fn clipped_line_hides_the_pointer() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.draw_clipped_line(1, 2, 3, 4).unwrap();
        let ops: Vec<Opcode> = ctx.driver.calls.iter().map(|c| c.opcode).collect();
        assert_eq!(ops, vec![Opcode::HideCursor, Opcode::Polyline, Opcode::ShowCursor]);
    }
}
