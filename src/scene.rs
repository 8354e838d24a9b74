// The picture drawn after boot: desktop, menu bar, a window and two drive icons
use organum::core::{Address, Addressable};
use organum::error::Error;

use crate::components::geometry::Rect;
use crate::components::gsx::icon::{crack_color, IconBlock, DRAW3D, SELECTED};
use crate::components::gsx::soft::SoftDriver;
use crate::components::gsx::{GraphicsContext, Justify, BLACK, IBM, MD_REPLACE, MD_XOR, SMALL};
use crate::components::Word;

/// Object colour words: black border and text, pattern 4 in black for the
/// desk, solid white for the menu bar and windows.
const DESK_COLOR: u16 = 0x1141;
const PANEL_COLOR: u16 = 0x1170;
const ICON_SIZE: Word = 32;
const MENU_TITLES: &str = "  Desk  File  View  Options";

/// A 32x32 floppy: body, shutter and label.
fn floppy() -> ([u32; 32], [u32; 32]) {
    let mut mask = [0u32; 32];
    let mut data = [0u32; 32];
    for y in 2..30 {
        mask[y] = 0x3fff_fffc;
        data[y] = if y == 2 || y == 29 { 0x3fff_fffc } else { 0x2000_0004 };
    }
    for row in data.iter_mut().take(12).skip(3) {
        *row |= 0x03ff_c000;
    }
    for row in data.iter_mut().take(13).skip(5) {
        *row &= !0x0030_0000;
    }
    for y in [17, 27] {
        data[y] |= 0x0fff_fff0;
    }
    for row in data.iter_mut().take(27).skip(18) {
        *row |= 0x0800_0010;
    }
    (mask, data)
}

/// Put the icon forms at `at` in standard form; returns mask and image addresses.
fn load_icon<M: Addressable>(mem: &mut M, at: Address) -> Result<(Address, Address), Error> {
    let (mask, data) = floppy();
    let image = at + 4 * mask.len() as Address;
    for (i, (m, d)) in mask.iter().zip(data.iter()).enumerate() {
        mem.write_beu32(at + 4 * i as Address, *m)?;
        mem.write_beu32(image + 4 * i as Address, *d)?;
    }
    Ok((at, image))
}

/// Fill `rect` as an object of colour `word` and set up its text colour.
fn fill_object<M: Addressable>(
    ctx: &mut GraphicsContext<SoftDriver<M>>,
    word: u16,
    rect: &Rect,
) -> Result<Word, Error> {
    let color = crack_color(word);
    ctx.draw_rect(color.interior, color.pattern, rect)?;
    ctx.apply_attributes(true, color.mode, color.text)?;
    Ok(color.border)
}

/// Draw the desktop. `forms` is free RAM for the icon bitmaps.
pub fn draw_desktop<M: Addressable>(ctx: &mut GraphicsContext<SoftDriver<M>>, forms: Address) -> Result<(), Error> {
    let geo = ctx.geo;
    ctx.set_clip(geo.screen)?;

    fill_object(ctx, DESK_COLOR, &geo.full)?;

    let border = fill_object(ctx, PANEL_COLOR, &geo.menu)?;
    ctx.draw_text(Justify::Left, IBM, MENU_TITLES, &Rect::new(0, 1, geo.width, geo.hchar))?;
    ctx.apply_attributes(false, MD_REPLACE, border)?;
    ctx.draw_clipped_line(0, geo.menu.bottom(), geo.width - 1, geo.menu.bottom())?;

    // a directory window in the upper left quarter
    let window = Rect::new(2 * geo.wbox, 2 * geo.hbox, geo.width / 2, geo.height / 2);
    let border = fill_object(ctx, PANEL_COLOR, &window)?;
    ctx.apply_attributes(false, MD_REPLACE, border)?;
    ctx.draw_framed_box(window.x, window.y, window.w, window.h, -1)?;
    let title = Rect::new(window.x, window.y, window.w, geo.hbox);
    ctx.draw_box(&title)?;
    ctx.apply_attributes(true, MD_REPLACE, BLACK)?;
    ctx.draw_text(Justify::Center, IBM, " A:\\ ", &title)?;
    let info = Rect::new(window.x + 4, title.bottom() + 2, window.w - 8, geo.hschar);
    ctx.draw_text(Justify::Left, SMALL, "2 items, 725 KB free", &info)?;

    // rubber band being dragged out of the window
    ctx.apply_attributes(false, MD_XOR, BLACK)?;
    let band = window.offset(geo.wbox, geo.hbox);
    ctx.draw_dithered_box(&band)?;
    ctx.draw_dithered_box_corners(&band.offset(geo.wbox, geo.hbox))?;

    let (mask, data) = load_icon(ctx.driver.memory(), forms)?;
    let x = geo.width - 3 * geo.wbox - ICON_SIZE;
    let label_w = 6 * geo.wschar;
    for (i, (text, state)) in [("DISK A", 0), ("DISK B", SELECTED | DRAW3D)].iter().enumerate() {
        let y = geo.full.y + geo.hbox + i as Word * (ICON_SIZE + 2 * geo.hbox);
        let ib = IconBlock {
            mask,
            data,
            text,
            // black on white
            color: 0x1000,
            xchar: 0,
            ychar: 0,
            icon: Rect::new(x, y, ICON_SIZE, ICON_SIZE),
            label: Rect::new(x + (ICON_SIZE - label_w) / 2, y + ICON_SIZE, label_w, geo.hschar),
        };
        ctx.draw_icon(*state, &ib)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::font::SYSTEM_8X16;
    use organum::premade::memory::MemoryBlock;

    #[test]
    fn floppy_image_stays_inside_its_mask() {
        let (mask, data) = floppy();
        assert!(mask.iter().zip(data.iter()).all(|(m, d)| d & !m == 0));
    }

    #[test]
    fn object_colours_decode_to_desk_and_panel_fills() {
        let desk = crack_color(DESK_COLOR);
        assert_eq!((desk.interior, desk.pattern, desk.border), (BLACK, 4, BLACK));
        let panel = crack_color(PANEL_COLOR);
        assert_eq!((panel.interior, panel.pattern, panel.text), (0, 7, BLACK));
    }

    #[test]
    fn desktop_draws_into_the_frame_buffer() {
        const BASE: u32 = 0x8000;
        let ram = MemoryBlock::new(vec![0u8; 0x10000]);
        let (driver, ws) = SoftDriver::open(ram, BASE, 640, 400, 1, &SYSTEM_8X16).unwrap();
        let mut ctx = GraphicsContext::new(driver, ws);
        ctx.start().unwrap();
        draw_desktop(&mut ctx, 0x1000).unwrap();

        // the line under the menu bar is solid black
        let bottom = ctx.geo.menu.bottom() as u32;
        let line = ctx.driver.memory().read_beu16(BASE + bottom * 80).unwrap();
        assert_eq!(line, 0xffff);
        let ink = (BASE..BASE + 32000)
            .step_by(2)
            .filter(|a| ctx.driver.memory().read_beu16(*a).unwrap() != 0)
            .count();
        assert!(ink > 1000);
    }
}
