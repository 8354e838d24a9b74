// A software device driver rendering into a plane interleaved frame buffer
//
// The frame buffer and every memory form live on the bus, so the driver only
// ever touches them through `Addressable`. Screen rows are made of 16 pixel
// groups of one word per plane; memory forms handed to the driver are one
// plane, except for the standard/device transform.

use log::{debug, trace, warn};
use organum::core::{Address, Addressable};
use organum::error::Error;

use super::{
    Driver, Fdb, Opcode, ParamBlock, Workstation, FIS_HOLLOW, FIS_PATTERN, FIS_SOLID, MD_ERASE,
    MD_REPLACE, MD_TRANS, MD_XOR, SOLID_STYLE,
};
use crate::components::font::Font;
use crate::components::geometry::{Point, Rect};
use crate::components::Word;

/// Line types 1 to 6; type 7 is the user style.
const LINE_STYLES: [u16; 6] = [0xffff, 0xfff0, 0xc0c0, 0xff18, 0xff00, 0xf191];

/// Dither patterns for fill styles 1 to 8, four rows repeated.
const DITHER: [[u16; 4]; 8] = [
    [0x0000, 0x4444, 0x0000, 0x1111],
    [0x0000, 0x5555, 0x0000, 0x5555],
    [0x8888, 0x5555, 0x2222, 0x5555],
    [0xaaaa, 0x5555, 0xaaaa, 0x5555],
    [0xaaaa, 0xdddd, 0xaaaa, 0x7777],
    [0xaaaa, 0xffff, 0xaaaa, 0xffff],
    [0xffff, 0xffff, 0xffff, 0xffff],
    [0xffff, 0xffff, 0xffff, 0xffff],
];

/// VDI colour index to pixel value.
const MAP_COL_4: [u8; 16] = [0, 15, 1, 2, 4, 6, 3, 5, 7, 8, 9, 10, 12, 14, 11, 13];
const MAP_COL_2: [u8; 4] = [0, 3, 1, 2];

/// Pixel size in microns of a square pixel.
const SQUARE_PIXEL: Word = 372;

/// Result of logic operation `op` (0..15) on one source and one destination bit.
pub fn logic_op(op: Word, s: bool, d: bool) -> bool {
    let index = ((s as Word) << 1) | d as Word;
    (op >> (3 - index)) & 1 != 0
}

/// Where a raster lives and how its words are laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Surface {
    base: Address,
    width: Word,
    height: Word,
    wdwidth: Word,
    planes: Word,
}

impl Surface {
    fn word_addr(&self, x: Word, y: Word, plane: Word) -> Address {
        let group = y as u32 * self.wdwidth as u32 + (x as u32 >> 4);
        self.base + 2 * (group * self.planes as u32 + plane as u32)
    }

    fn contains(&self, x: Word, y: Word) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }
}

pub struct SoftDriver<M: Addressable> {
    mem: M,
    screen: Surface,
    font: &'static Font,
    /// Draw with the half height cell instead of the full font.
    small: bool,
    clip: Option<Rect>,

    mode: Word,
    line_type: Word,
    line_color: Word,
    udsty: u16,
    text_color: Word,
    fill_color: Word,
    fill_interior: Word,
    fill_style: Word,

    hide_count: Word,
}

impl<M: Addressable> SoftDriver<M> {
    /// Open a workstation on a `width` by `height` screen at `base`.
    pub fn open(
        mem: M,
        base: Address,
        width: Word,
        height: Word,
        planes: Word,
        font: &'static Font,
    ) -> Result<(Self, Workstation), Error> {
        if !matches!(planes, 1 | 2 | 4 | 8) {
            return Err(Error::new(&format!(
                "soft driver: {} bit per pixel frame buffers are not supported",
                planes
            )));
        }

        let driver = Self {
            mem,
            screen: Surface {
                base,
                width,
                height,
                wdwidth: width / 16,
                planes,
            },
            font,
            small: false,
            clip: None,
            mode: MD_REPLACE,
            line_type: 1,
            line_color: 1,
            udsty: SOLID_STYLE,
            text_color: 1,
            fill_color: 1,
            fill_interior: FIS_HOLLOW,
            fill_style: 1,
            hide_count: 1,
        };

        // ST medium pixels are twice as tall as wide
        let wpixel = if width >= 3 * height { SQUARE_PIXEL * 5 / 11 } else { SQUARE_PIXEL };
        let ws = Workstation {
            handle: 1,
            xres: width - 1,
            yres: height - 1,
            wpixel,
            hpixel: SQUARE_PIXEL,
            nplanes: planes,
            chminh: (font.top / 2) as Word,
            chmaxh: font.top as Word,
        };
        debug!("soft driver: {}x{} in {} planes at {:06x}", width, height, planes, base);
        Ok((driver, ws))
    }

    pub fn pointer_hidden(&self) -> bool {
        self.hide_count > 0
    }

    pub fn memory(&mut self) -> &mut M {
        &mut self.mem
    }

    fn pixel_value(&self, index: Word) -> u8 {
        let index = index.max(0) as usize;
        match self.screen.planes {
            1 => (index != 0) as u8,
            2 => MAP_COL_2.get(index).copied().unwrap_or(1),
            4 => MAP_COL_4.get(index).copied().unwrap_or(15),
            _ => MAP_COL_4.get(index).copied().unwrap_or(index.min(255) as u8),
        }
    }

    fn surface_of(&self, fdb: &Fdb) -> Surface {
        match fdb.addr {
            None => self.screen,
            Some(base) => Surface {
                base,
                width: fdb.w,
                height: fdb.h,
                wdwidth: fdb.wdwidth,
                planes: fdb.nplanes.max(1),
            },
        }
    }

    fn read_pixel(&mut self, s: &Surface, x: Word, y: Word) -> Result<u8, Error> {
        let bit = 0x8000u16 >> (x & 15);
        let mut value = 0u8;
        for plane in 0..s.planes {
            if self.mem.read_beu16(s.word_addr(x, y, plane))? & bit != 0 {
                value |= 1 << plane;
            }
        }
        Ok(value)
    }

    fn write_pixel(&mut self, s: &Surface, x: Word, y: Word, value: u8) -> Result<(), Error> {
        let bit = 0x8000u16 >> (x & 15);
        for plane in 0..s.planes {
            let addr = s.word_addr(x, y, plane);
            let word = self.mem.read_beu16(addr)?;
            let word = if value & (1 << plane) != 0 { word | bit } else { word & !bit };
            self.mem.write_beu16(addr, word)?;
        }
        Ok(())
    }

    fn visible(&self, x: Word, y: Word) -> bool {
        self.screen.contains(x, y) && self.clip.map_or(true, |c| c.contains(Point::new(x, y)))
    }

    /// Plot one screen pixel of a pattern in the current writing mode.
    fn plot(&mut self, x: Word, y: Word, on: bool, color: u8) -> Result<(), Error> {
        if !self.visible(x, y) {
            return Ok(());
        }
        let screen = self.screen;
        match self.mode {
            MD_TRANS if on => self.write_pixel(&screen, x, y, color),
            MD_XOR if on => {
                let old = self.read_pixel(&screen, x, y)?;
                let mask = ((1u16 << screen.planes) - 1) as u8;
                self.write_pixel(&screen, x, y, !old & mask)
            }
            MD_ERASE if !on => self.write_pixel(&screen, x, y, color),
            MD_REPLACE => self.write_pixel(&screen, x, y, if on { color } else { 0 }),
            _ => Ok(()),
        }
    }

    fn line_style(&self) -> u16 {
        match self.line_type {
            7 => self.udsty,
            t => LINE_STYLES[(t.clamp(1, 6) - 1) as usize],
        }
    }

    fn line(&mut self, a: Point, b: Point) -> Result<(), Error> {
        let style = self.line_style();
        let color = self.pixel_value(self.line_color);
        let dx = (b.x as i32 - a.x as i32).abs();
        let dy = -(b.y as i32 - a.y as i32).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let (mut x, mut y) = (a.x as i32, a.y as i32);
        let mut err = dx + dy;
        let mut step = 0u32;
        loop {
            let on = style.rotate_left(step) & 0x8000 != 0;
            self.plot(x as Word, y as Word, on, color)?;
            if x == b.x as i32 && y == b.y as i32 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
            step = (step + 1) & 15;
        }
        Ok(())
    }

    fn polyline(&mut self, pb: &ParamBlock) -> Result<(), Error> {
        let count = pb.nptsin();
        for i in 1..count {
            let a = Point::new(pb.ptsin[2 * i - 2], pb.ptsin[2 * i - 1]);
            let b = Point::new(pb.ptsin[2 * i], pb.ptsin[2 * i + 1]);
            self.line(a, b)?;
        }
        Ok(())
    }

    fn fill_pattern_row(&self, y: Word) -> u16 {
        match self.fill_interior {
            FIS_SOLID => 0xffff,
            FIS_PATTERN => DITHER[(self.fill_style.clamp(1, 8) - 1) as usize][(y & 3) as usize],
            _ => 0,
        }
    }

    fn fill_rect(&mut self, pb: &ParamBlock) -> Result<(), Error> {
        let rect = Rect::from_corners(
            Point::new(pb.ptsin[0], pb.ptsin[1]),
            Point::new(pb.ptsin[2], pb.ptsin[3]),
        );
        let color = self.pixel_value(self.fill_color);
        for y in rect.y..=rect.bottom() {
            let pattern = self.fill_pattern_row(y);
            for x in rect.x..=rect.right() {
                let on = pattern & (0x8000 >> (x & 15)) != 0;
                self.plot(x, y, on, color)?;
            }
        }
        Ok(())
    }

    /// Source and destination rectangles of a copy, cut to what exists.
    fn copy_area(&self, pb: &ParamBlock, src: &Surface, dst: &Surface, dst_is_screen: bool) -> Option<(Rect, Point)> {
        let from = Rect::from_corners(
            Point::new(pb.ptsin[0], pb.ptsin[1]),
            Point::new(pb.ptsin[2], pb.ptsin[3]),
        );
        let to = Point::new(pb.ptsin[4].min(pb.ptsin[6]), pb.ptsin[5].min(pb.ptsin[7]));

        let mut area = Rect::new(to.x, to.y, from.w, from.h)
            .intersect(&Rect::new(0, 0, dst.width, dst.height))?;
        if dst_is_screen {
            if let Some(clip) = self.clip {
                area = area.intersect(&clip)?;
            }
        }
        let origin = Point::new(from.x + area.x - to.x, from.y + area.y - to.y);
        let source = Rect::new(origin.x, origin.y, area.w, area.h)
            .intersect(&Rect::new(0, 0, src.width, src.height))?;
        let area = Rect::new(area.x + source.x - origin.x, area.y + source.y - origin.y, source.w, source.h);
        Some((area, Point::new(source.x, source.y)))
    }

    fn copy_opaque(&mut self, pb: &ParamBlock) -> Result<(), Error> {
        let op = pb.intin[0] & 15;
        let src = self.surface_of(&pb.src);
        let dst = self.surface_of(&pb.dst);
        let (area, from) = match self.copy_area(pb, &src, &dst, pb.dst.addr.is_none()) {
            Some(found) => found,
            None => return Ok(()),
        };

        // walk backwards when an overlapping copy moves down or right
        let same = src == dst;
        let rows: Box<dyn Iterator<Item = Word>> = if same && area.y > from.y {
            Box::new((0..area.h).rev())
        } else {
            Box::new(0..area.h)
        };
        let backwards = same && area.x > from.x;
        for row in rows {
            for col in 0..area.w {
                let col = if backwards { area.w - 1 - col } else { col };
                let s = self.read_pixel(&src, from.x + col, from.y + row)?;
                let (x, y) = (area.x + col, area.y + row);
                let d = self.read_pixel(&dst, x, y)?;
                let mut value = 0u8;
                for plane in 0..dst.planes {
                    let sp = if src.planes == 1 { 0 } else { plane };
                    if logic_op(op, s & (1 << sp) != 0, d & (1 << plane) != 0) {
                        value |= 1 << plane;
                    }
                }
                self.write_pixel(&dst, x, y, value)?;
            }
        }
        Ok(())
    }

    fn copy_transparent(&mut self, pb: &ParamBlock) -> Result<(), Error> {
        let mode = pb.intin[0];
        let fg = self.pixel_value(pb.intin[1]);
        let bg = self.pixel_value(pb.intin[2]);
        let src = self.surface_of(&pb.src);
        let dst = self.surface_of(&pb.dst);
        let (area, from) = match self.copy_area(pb, &src, &dst, pb.dst.addr.is_none()) {
            Some(found) => found,
            None => return Ok(()),
        };

        let mask = ((1u16 << dst.planes) - 1) as u8;
        for row in 0..area.h {
            for col in 0..area.w {
                let on = self.read_pixel(&src, from.x + col, from.y + row)? & 1 != 0;
                let (x, y) = (area.x + col, area.y + row);
                let value = match mode {
                    MD_REPLACE => Some(if on { fg } else { bg }),
                    MD_TRANS if on => Some(fg),
                    MD_XOR if on => Some(!self.read_pixel(&dst, x, y)? & mask),
                    MD_ERASE if !on => Some(fg),
                    _ => None,
                };
                if let Some(value) = value {
                    self.write_pixel(&dst, x, y, value)?;
                }
            }
        }
        Ok(())
    }

    /// Standard form keeps planes one after another, device form interleaves
    /// them word by word.
    fn transform(&mut self, pb: &mut ParamBlock) -> Result<(), Error> {
        let src = pb.src;
        let mut dst = pb.dst;
        let (base_s, base_d) = match (src.addr, dst.addr) {
            (Some(s), Some(d)) => (s, d),
            _ => return Err(Error::new("soft driver: transform needs two memory forms")),
        };
        let planes = src.nplanes.max(1) as u32;
        let words = src.wdwidth.max(0) as u32;
        let rows = src.h.max(0) as u32;

        for plane in 0..planes {
            for row in 0..rows {
                for word in 0..words {
                    let standard = (plane * rows + row) * words + word;
                    let device = (row * words + word) * planes + plane;
                    let (from, to) = if src.stand { (standard, device) } else { (device, standard) };
                    let value = self.mem.read_beu16(base_s + 2 * from)?;
                    self.mem.write_beu16(base_d + 2 * to, value)?;
                }
            }
        }
        dst.stand = !src.stand;
        pb.dst = dst;
        Ok(())
    }

    /// Point height and cell height of the current cell.
    fn cell_height(&self) -> (u16, u16) {
        if self.small {
            (self.font.top / 2, self.font.form_height / 2)
        } else {
            (self.font.top, self.font.form_height)
        }
    }

    /// The small cell folds the font rows in pairs.
    fn glyph_row(&self, ch: u8, row: u16) -> u16 {
        if self.small {
            self.font.glyph_row(ch, 2 * row) | self.font.glyph_row(ch, 2 * row + 1)
        } else {
            self.font.glyph_row(ch, row)
        }
    }

    fn text(&mut self, pb: &ParamBlock) -> Result<(), Error> {
        let font = self.font;
        let color = self.pixel_value(self.text_color);
        let (points, rows) = self.cell_height();
        let top = pb.ptsin[1] - points as Word;
        let mut x = pb.ptsin[0];
        for &glyph in &pb.intin[..pb.nintin()] {
            let ch = glyph as u8;
            let width = font.glyph_width(ch) as Word;
            for row in 0..rows {
                let bits = self.glyph_row(ch, row);
                for col in 0..width {
                    let on = bits & (0x8000 >> col) != 0;
                    self.plot(x + col, top + row as Word, on, color)?;
                }
            }
            x += width;
        }
        Ok(())
    }

    fn report_text_size(&self, pb: &mut ParamBlock) {
        let font = self.font;
        let (points, rows) = self.cell_height();
        pb.ptsout[..4].copy_from_slice(&[
            font.max_char_width as Word,
            points as Word,
            font.max_cell_width as Word,
            rows as Word,
        ]);
    }
}

impl<M: Addressable> Driver for SoftDriver<M> {
    fn gsx2(&mut self, pb: &mut ParamBlock) -> Result<(), Error> {
        let opcode = pb.opcode()?;
        trace!("soft driver: {:?}", opcode);
        match opcode {
            Opcode::Polyline => self.polyline(pb)?,
            Opcode::Text => self.text(pb)?,
            Opcode::SetCharHeight => {
                self.small = pb.ptsin[1] < self.font.top as Word;
                trace!("soft driver: {} cell for height {}", if self.small { "small" } else { "full" }, pb.ptsin[1]);
                self.report_text_size(pb);
            }
            Opcode::InquireTextAttributes => {
                pb.intout[..6].copy_from_slice(&[self.font.id as Word, self.text_color, 0, 0, 0, self.mode]);
                self.report_text_size(pb);
            }
            Opcode::SetLineType => {
                self.line_type = pb.intin[0].clamp(1, 7);
                pb.intout[0] = self.line_type;
            }
            Opcode::SetLineWidth => {
                if pb.ptsin[0] > 1 {
                    warn!("soft driver: line width {} drawn as 1", pb.ptsin[0]);
                }
                pb.ptsout[0] = 1;
            }
            Opcode::SetLineColor => self.line_color = pb.intin[0],
            Opcode::SetTextColor => self.text_color = pb.intin[0],
            Opcode::SetFillInterior => self.fill_interior = pb.intin[0].clamp(FIS_HOLLOW, FIS_PATTERN),
            Opcode::SetFillStyle => self.fill_style = pb.intin[0],
            Opcode::SetFillColor => self.fill_color = pb.intin[0],
            Opcode::SetWritingMode => {
                self.mode = pb.intin[0].clamp(MD_REPLACE, MD_ERASE);
                pb.intout[0] = self.mode;
            }
            Opcode::SetUdLineStyle => self.udsty = pb.intin[0] as u16,
            Opcode::FillRect => self.fill_rect(pb)?,
            Opcode::CopyOpaque => self.copy_opaque(pb)?,
            Opcode::CopyTransparent => self.copy_transparent(pb)?,
            Opcode::Transform => self.transform(pb)?,
            Opcode::ShowCursor => {
                if pb.intin[0] == 0 || pb.nintin() == 0 {
                    self.hide_count = 0;
                } else if self.hide_count > 0 {
                    self.hide_count -= 1;
                }
            }
            Opcode::HideCursor => self.hide_count += 1,
            Opcode::SetClip => {
                self.clip = if pb.intin[0] != 0 {
                    Some(Rect::from_corners(
                        Point::new(pb.ptsin[0], pb.ptsin[1]),
                        Point::new(pb.ptsin[2], pb.ptsin[3]),
                    ))
                } else {
                    None
                };
            }
        }
        Ok(())
    }
}
