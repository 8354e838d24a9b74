// The gsx layer composes fixed-size parameter blocks for the device driver.
//
// Everything that was process-wide state in a classic GEM kernel (clip
// rectangle, attribute cache, the parameter arrays, screen metrics) lives in
// a `GraphicsContext` so several screens or tests never share it.

pub mod attr;
pub mod blit;
pub mod clip;
pub mod icon;
pub mod line;
pub mod soft;
pub mod text;

#[cfg(test)]
pub mod testing;

use log::{debug, info};
use organum::core::Address;
use organum::error::Error;

use crate::components::geometry::Rect;
use crate::components::Word;

use attr::AttributeCache;

/* writing modes */
pub const MD_REPLACE: Word = 1;
pub const MD_TRANS: Word = 2;
pub const MD_XOR: Word = 3;
pub const MD_ERASE: Word = 4;

/* fill interior types */
pub const FIS_HOLLOW: Word = 0;
pub const FIS_SOLID: Word = 1;
pub const FIS_PATTERN: Word = 2;

/* object fill patterns */
pub const IP_HOLLOW: Word = 0;
pub const IP_SOLID: Word = 7;

pub const WHITE: Word = 0;
pub const BLACK: Word = 1;

/* font ids */
pub const IBM: Word = 3;
pub const SMALL: Word = 5;

/// User defined line type.
pub const LT_USERDEF: Word = 7;
pub const SOLID_STYLE: u16 = 0xffff;

pub const CONTRL_SIZE: usize = 12;
pub const INTIN_SIZE: usize = 128;
pub const PTSIN_SIZE: usize = 20;
pub const INTOUT_SIZE: usize = 16;
pub const PTSOUT_SIZE: usize = 16;

/// Device function numbers.
#[repr(i16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    Polyline = 6,
    Text = 8,
    SetCharHeight = 12,
    SetLineType = 15,
    SetLineWidth = 16,
    SetLineColor = 17,
    SetTextColor = 22,
    SetFillInterior = 23,
    SetFillStyle = 24,
    SetFillColor = 25,
    SetWritingMode = 32,
    InquireTextAttributes = 38,
    CopyOpaque = 109,
    Transform = 110,
    SetUdLineStyle = 113,
    FillRect = 114,
    CopyTransparent = 121,
    ShowCursor = 122,
    HideCursor = 123,
    SetClip = 129,
}

impl TryFrom<Word> for Opcode {
    type Error = Error;

    fn try_from(value: Word) -> Result<Self, Self::Error> {
        let opcode = match value {
            6 => Opcode::Polyline,
            8 => Opcode::Text,
            12 => Opcode::SetCharHeight,
            15 => Opcode::SetLineType,
            16 => Opcode::SetLineWidth,
            17 => Opcode::SetLineColor,
            22 => Opcode::SetTextColor,
            23 => Opcode::SetFillInterior,
            24 => Opcode::SetFillStyle,
            25 => Opcode::SetFillColor,
            32 => Opcode::SetWritingMode,
            38 => Opcode::InquireTextAttributes,
            109 => Opcode::CopyOpaque,
            110 => Opcode::Transform,
            113 => Opcode::SetUdLineStyle,
            114 => Opcode::FillRect,
            121 => Opcode::CopyTransparent,
            122 => Opcode::ShowCursor,
            123 => Opcode::HideCursor,
            129 => Opcode::SetClip,
            _ => return Err(Error::new(&format!("unknown device function {}", value))),
        };
        Ok(opcode)
    }
}

#[repr(i16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Justify {
    Left = 0,
    Right = 1,
    Center = 2,
}

impl From<Word> for Justify {
    fn from(value: Word) -> Self {
        match value {
            1 => Justify::Right,
            2 => Justify::Center,
            _ => Justify::Left,
        }
    }
}

/// Frame descriptor block: where a raster lives and how it is laid out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Fdb {
    /// `None` is the physical screen.
    pub addr: Option<Address>,
    pub w: Word,
    pub h: Word,
    /// Width of one plane row in 16-bit words.
    pub wdwidth: Word,
    /// Standard (plane-after-plane) form instead of device form.
    pub stand: bool,
    pub nplanes: Word,
}

/// The arrays handed to the device on every call.
#[derive(Clone, Debug)]
pub struct ParamBlock {
    pub contrl: [Word; CONTRL_SIZE],
    pub intin: [Word; INTIN_SIZE],
    pub ptsin: [Word; PTSIN_SIZE],
    pub intout: [Word; INTOUT_SIZE],
    pub ptsout: [Word; PTSOUT_SIZE],
    pub src: Fdb,
    pub dst: Fdb,
}

impl ParamBlock {
    pub fn new() -> Self {
        Self {
            contrl: [0; CONTRL_SIZE],
            intin: [0; INTIN_SIZE],
            ptsin: [0; PTSIN_SIZE],
            intout: [0; INTOUT_SIZE],
            ptsout: [0; PTSOUT_SIZE],
            src: Fdb::default(),
            dst: Fdb::default(),
        }
    }

    pub fn opcode(&self) -> Result<Opcode, Error> {
        Opcode::try_from(self.contrl[0])
    }

    /// Number of points in `ptsin`.
    pub fn nptsin(&self) -> usize {
        (self.contrl[1].max(0) as usize).min(PTSIN_SIZE / 2)
    }

    /// Number of words in `intin`.
    pub fn nintin(&self) -> usize {
        (self.contrl[3].max(0) as usize).min(INTIN_SIZE)
    }
}

impl Default for ParamBlock {
    fn default() -> Self {
        Self::new()
    }
}

/// The device driver: executes one function described by a parameter block.
pub trait Driver {
    fn gsx2(&mut self, pb: &mut ParamBlock) -> Result<(), Error>;
}

/// What the device reported when the workstation was opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Workstation {
    pub handle: Word,
    pub xres: Word,
    pub yres: Word,
    /// Pixel size in microns, for the aspect ratio.
    pub wpixel: Word,
    pub hpixel: Word,
    pub nplanes: Word,
    pub chminh: Word,
    pub chmaxh: Word,
}

/// Screen metrics and the standard rectangles computed at start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Geometry {
    pub width: Word,
    pub height: Word,
    pub nplanes: Word,

    pub wchar: Word,
    pub hchar: Word,
    pub wschar: Word,
    pub hschar: Word,
    pub wptschar: Word,
    pub hptschar: Word,
    pub wsptschar: Word,
    pub hsptschar: Word,

    pub wbox: Word,
    pub hbox: Word,

    pub screen: Rect,
    pub full: Rect,
    pub zero: Rect,
    pub center: Rect,
    pub menu: Rect,
}

pub struct GraphicsContext<D: Driver> {
    pub driver: D,
    pub pb: ParamBlock,
    pub ws: Workstation,
    pub geo: Geometry,
    pub(crate) clip: Rect,
    pub(crate) attr: AttributeCache,
    mouse_off: u16,
}

impl<D: Driver> GraphicsContext<D> {
    pub fn new(driver: D, ws: Workstation) -> Self {
        Self {
            driver,
            pb: ParamBlock::new(),
            ws,
            geo: Geometry::default(),
            clip: Rect::zero(),
            attr: AttributeCache::new(),
            mouse_off: 0,
        }
    }

    /// Issue the function in `contrl[0]` with the given point and int counts.
    pub(crate) fn call(&mut self, opcode: Opcode, nptsin: usize, nintin: usize) -> Result<(), Error> {
        self.pb.contrl[0] = opcode as Word;
        self.pb.contrl[1] = nptsin as Word;
        self.pb.contrl[3] = nintin as Word;
        self.pb.contrl[6] = self.ws.handle;
        self.driver.gsx2(&mut self.pb)
    }

    /// Call a function whose only parameter is one int.
    pub(crate) fn one_code(&mut self, opcode: Opcode, value: Word) -> Result<(), Error> {
        self.pb.intin[0] = value;
        self.call(opcode, 0, 1)
    }

    /// Set the character height; returns char w/h and cell w/h.
    pub(crate) fn text_height(&mut self, height: Word) -> Result<[Word; 4], Error> {
        self.pb.ptsin[0] = 0;
        self.pb.ptsin[1] = height;
        self.call(Opcode::SetCharHeight, 1, 0)?;
        Ok([self.pb.ptsout[0], self.pb.ptsout[1], self.pb.ptsout[2], self.pb.ptsout[3]])
    }

    /// Current char w/h and cell w/h.
    pub(crate) fn text_size(&mut self) -> Result<[Word; 4], Error> {
        self.call(Opcode::InquireTextAttributes, 0, 0)?;
        Ok([self.pb.ptsout[0], self.pb.ptsout[1], self.pb.ptsout[2], self.pb.ptsout[3]])
    }

    /// Hide the pointer; nested calls only reach the device once.
    pub fn hide_pointer(&mut self) -> Result<(), Error> {
        if self.mouse_off == 0 {
            self.call(Opcode::HideCursor, 0, 0)?;
        }
        self.mouse_off += 1;
        Ok(())
    }

    pub fn show_pointer(&mut self) -> Result<(), Error> {
        if self.mouse_off == 0 {
            return Ok(());
        }
        self.mouse_off -= 1;
        if self.mouse_off == 0 {
            self.pb.intin[0] = 1;
            self.call(Opcode::ShowCursor, 0, 1)?;
        }
        Ok(())
    }

    /// Reset every cache and compute the screen geometry.
    ///
    /// Must be called after the workstation is opened and again after every
    /// resolution change.
    pub fn start(&mut self) -> Result<(), Error> {
        self.attr.reset();

        let g = &mut self.geo;
        g.width = self.ws.xres + 1;
        g.height = self.ws.yres + 1;
        g.nplanes = self.ws.nplanes;
        self.clip = Rect::new(0, 0, g.width, g.height);

        info!(
            "gsx: video mode = {}x{} {}-{}",
            self.geo.width,
            self.geo.height,
            self.geo.nplanes,
            if self.geo.nplanes < 16 { "plane" } else { "bit" }
        );

        // the current font is the big one, the minimum height the small one
        let [wpts, hpts, wchar, hchar] = self.text_size()?;
        self.geo.wptschar = wpts;
        self.geo.hptschar = hpts;
        self.geo.wchar = wchar;
        self.geo.hchar = hchar;
        self.ws.chmaxh = hpts;

        let [wpts, hpts, wchar, hchar] = self.text_height(self.ws.chminh)?;
        self.geo.wsptschar = wpts;
        self.geo.hsptschar = hpts;
        self.geo.wschar = wchar;
        self.geo.hschar = hchar;
        self.text_height(self.ws.chmaxh)?;

        let g = &mut self.geo;
        g.hbox = g.hchar + 3;
        let wpixel = (self.ws.wpixel as i32).max(1);
        g.wbox = ((g.hbox as i32 * self.ws.hpixel as i32) / wpixel) as Word;
        if g.wbox < g.wchar + 4 {
            g.wbox = g.wchar + 4;
        }
        debug!(
            "gsx: wchar={}, hchar={}, wbox={}, hbox={}",
            g.wchar, g.hchar, g.wbox, g.hbox
        );

        g.screen = Rect::new(0, 0, g.width, g.height);
        g.full = Rect::new(0, g.hbox, g.width, g.height - g.hbox);
        g.zero = Rect::zero();
        g.center = Rect::new((g.width - g.wbox) / 2, (g.height - 2 * g.hbox) / 2, g.wbox, g.hbox);
        g.menu = Rect::new(0, 0, g.width, g.hbox);

        self.one_code(Opcode::SetLineType, LT_USERDEF)?;
        self.pb.ptsin[0] = 1;
        self.pb.ptsin[1] = 0;
        self.call(Opcode::SetLineWidth, 1, 0)?;
        self.one_code(Opcode::SetUdLineStyle, SOLID_STYLE as Word)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{test_context, Recorder};
    use super::*;

    #[test]
    fn start_computes_standard_rectangles() {
        let ctx = test_context();
        let g = &ctx.geo;
        assert_eq!((g.width, g.height), (640, 400));
        assert_eq!((g.wchar, g.hchar), (8, 16));
        assert_eq!((g.wschar, g.hschar), (6, 8));
        assert_eq!(g.hbox, 19);
        // square pixels: wbox follows hbox
        assert_eq!(g.wbox, 19);
        assert_eq!(g.screen, Rect::new(0, 0, 640, 400));
        assert_eq!(g.full, Rect::new(0, 19, 640, 381));
        assert_eq!(g.menu, Rect::new(0, 0, 640, 19));
        assert_eq!(g.center, Rect::new(310, 181, 19, 19));
        assert_eq!(ctx.get_clip(), Rect::new(0, 0, 640, 400));
    }

    #[test]
    fn start_restores_big_font_and_solid_lines() {
        let ctx = test_context();
        let heights: Vec<Word> = ctx
            .driver
            .calls_of(Opcode::SetCharHeight)
            .map(|call| call.ptsin[1])
            .collect();
        assert_eq!(heights, vec![6, 13]);
        let last = ctx.driver.calls.last().unwrap();
        assert_eq!(last.opcode, Opcode::SetUdLineStyle);
        assert_eq!(last.intin[0] as u16, SOLID_STYLE);
    }

    #[test]
    fn box_is_never_narrower_than_a_char_plus_border() {
        let mut ws = Recorder::workstation();
        // very tall pixels make the aspect-corrected box tiny
        ws.wpixel = 1000;
        ws.hpixel = 100;
        let mut ctx = GraphicsContext::new(Recorder::new(), ws);
        ctx.start().unwrap();
        assert_eq!(ctx.geo.wbox, ctx.geo.wchar + 4);
    }

    #[test]
    fn nested_pointer_hiding_reaches_device_once() {
        let mut ctx = test_context();
        ctx.driver.calls.clear();
        ctx.hide_pointer().unwrap();
        ctx.hide_pointer().unwrap();
        ctx.show_pointer().unwrap();
        ctx.show_pointer().unwrap();
        // unbalanced show is ignored
        ctx.show_pointer().unwrap();
        let ops: Vec<Opcode> = ctx.driver.calls.iter().map(|c| c.opcode).collect();
        assert_eq!(ops, vec![Opcode::HideCursor, Opcode::ShowCursor]);
    }

    #[test]
    fn opcode_round_trips_through_contrl() {
        assert_eq!(Opcode::try_from(114).unwrap(), Opcode::FillRect);
        assert!(Opcode::try_from(1).is_err());
    }
}
