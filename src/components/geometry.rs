// Rectangle arithmetic shared by every drawing routine
use crate::components::Word;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: Word,
    pub y: Word,
}

impl Point {
    pub const fn new(x: Word, y: Word) -> Self {
        Self { x, y }
    }
}

/// A screen rectangle in pixels. A zero width or height means "no region".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: Word,
    pub y: Word,
    pub w: Word,
    pub h: Word,
}

impl Rect {
    pub const fn new(x: Word, y: Word, w: Word, h: Word) -> Self {
        Self { x, y, w, h }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Build a rect from two inclusive corners given in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, a.x.max(b.x) - x + 1, a.y.max(b.y) - y + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Last column inside the rect.
    pub fn right(&self) -> Word {
        self.x + self.w - 1
    }

    /// Last row inside the rect.
    pub fn bottom(&self) -> Word {
        self.y + self.h - 1
    }

    /// Inclusive corner list as the device wants it: x1, y1, x2, y2.
    pub fn to_pxy(&self) -> [Word; 4] {
        [self.x, self.y, self.right(), self.bottom()]
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    /// Shrink by `th` on every side; a negative `th` grows the rect.
    pub fn inside(&self, th: Word) -> Self {
        Self::new(self.x + th, self.y + th, self.w - 2 * th, self.h - 2 * th)
    }

    pub fn offset(&self, dx: Word, dy: Word) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Overlap of two rects, `None` when they do not share a pixel.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let r = (self.x + self.w).min(other.x + other.w);
        let b = (self.y + self.h).min(other.y + other.h);
        if r > x && b > y {
            Some(Rect::new(x, y, r - x, b - y))
        } else {
            None
        }
    }
}
