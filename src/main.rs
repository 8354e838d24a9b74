mod components;
mod logger;
mod scene;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::{arg, command, value_parser, ArgAction, ArgMatches, Command};
use log::{error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use regex::Regex;
use winit::{
    dpi::LogicalSize,
    event::{Event, VirtualKeyCode},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use winit_input_helper::WinitInputHelper;

use organum::core::{Address, Addressable};
use organum::error::Error;
use organum::interrupts::InterruptController;
use organum::premade::{bus::BusPort, memory::MemoryBlock};

use crate::components::gsx::soft::SoftDriver;
use crate::components::gsx::GraphicsContext;
use crate::components::ikbd::KeyboardLink;
use crate::components::video::modes::lookup_mode;
use crate::components::video::screen::Screen;
use crate::components::video::vbl::Vbl;
use crate::components::video::*;
use crate::components::{build_bus, MachineConfig, Monitor, ShifterKind, Word, DUART_BASE};

pub const TITLE: &str = "tosgraf";
/// Low RAM for the icon forms, far below any screen.
pub const FORMS_BASE: Address = 0x1000;
pub const NVRAM_SIZE: usize = 64;
pub const IKBD_TIMEOUT_MS: u16 = 50;
/// Status register once the BIOS is up: VBL and above let through.
pub const SR_RUNNING: u16 = 0x2300;

fn cli() -> Command {
    command!()
        .arg(
            arg!(--shifter <KIND> "Video controller generation")
                .required(false)
                .value_parser(["st", "ste", "tt", "falcon"])
                .default_value("st"),
        )
        .arg(
            arg!(--monitor <TYPE> "Attached monitor")
                .required(false)
                .value_parser(["mono", "color", "vga", "tv"])
                .default_value("mono"),
        )
        .arg(
            arg!(--mode <MODE> "Videl boot mode: hex code or vga|tv[pal]:WxHxBPP")
                .required(false)
                .value_parser(parse_mode),
        )
        .arg(
            arg!(--rez <REZ> "Shifter resolution to switch to after boot")
                .required(false)
                .value_parser(value_parser!(i16).range(0..8)),
        )
        .arg(
            arg!(--ram <KB> "ST-RAM size in kilobytes")
                .required(false)
                .value_parser(value_parser!(u32).range(256..=14336))
                .default_value("3904"),
        )
        .arg(arg!(--pal "PAL timing on the ST, STe and TT").action(ArgAction::SetTrue))
        .arg(arg!(--"no-duart" "Leave the DUART and keyboard out").action(ArgAction::SetTrue))
        .arg(
            arg!(--screenshot <FILE> "Write the screen to a PNG file")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(--headless "Do not open a window").action(ArgAction::SetTrue))
        .arg(arg!(-v --verbose ... "More logging, repeat for more"))
}

/// Accept a mode word in hex, or the short form like `vgapal:640x480x8`.
/// Only modes the Videl table knows pass.
fn parse_mode(text: &str) -> Result<Word, String> {
    let mode = match text.strip_prefix("0x") {
        Some(hex) => u16::from_str_radix(hex, 16).map_err(|e| format!("{}: {}", text, e))? as Word,
        None => {
            let re = Regex::new(r"^(vga|tv)(pal)?:(\d+)x(\d+)x(\d+)$").map_err(|e| e.to_string())?;
            let caps = re
                .captures(text)
                .ok_or_else(|| format!("{}: expected a hex code or vga|tv[pal]:WxHxBPP", text))?;
            let number = |i: usize| caps[i].parse::<u16>().map_err(|e| format!("{}: {}", text, e));
            let (width, height, bpp) = (number(3)?, number(4)?, number(5)?);
            let vga = &caps[1] == "vga";

            let mut mode = match bpp {
                1 => VIDEL_1BPP,
                2 => VIDEL_2BPP,
                4 => VIDEL_4BPP,
                8 => VIDEL_8BPP,
                16 => VIDEL_TRUECOLOR,
                _ => return Err(format!("{}: no {} bit per pixel modes", text, bpp)),
            };
            match width {
                640 => mode |= VIDEL_80COL,
                320 => {}
                _ => return Err(format!("{}: width must be 320 or 640", text)),
            }
            if vga {
                mode |= VIDEL_VGA;
            }
            if caps.get(2).is_some() {
                mode |= VIDEL_PAL;
            }
            // line doubling on VGA, interlace on TV
            let vertical = if vga { height <= 240 } else { height >= 400 };
            if vertical {
                mode |= VIDEL_VERTICAL;
            }
            mode
        }
    };

    match lookup_mode(mode) {
        Some(_) => Ok(mode),
        None => Err(format!("{}: no video mode {:04x}", text, mode)),
    }
}

fn text<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches.get_one::<String>(id).map(String::as_str).unwrap_or_default()
}

fn machine_config(matches: &ArgMatches) -> MachineConfig {
    let kb = matches.get_one::<u32>("ram").copied().unwrap_or(3904);
    MachineConfig {
        shifter: ShifterKind::from(text(matches, "shifter")),
        monitor: Monitor::from(text(matches, "monitor")),
        phystop: kb as usize * 1024,
        os_pal: matches.get_flag("pal"),
        with_duart: !matches.get_flag("no-duart"),
    }
}

/// Raise the vertical blank at the frame rate of the sync mode.
fn spawn_vbl(vbl: Arc<Vbl>, irq: Arc<InterruptController>, mut port: BusPort, period: Duration) {
    thread::spawn(move || loop {
        if let Err(err) = vbl.interrupt(&irq, &mut port) {
            error!("vbl: {}", err);
            break;
        }
        thread::sleep(period);
    });
}

/// Switch to a Videl mode with the screen moved to the top of RAM.
fn switch_videl_mode(screen: &mut Screen<BusPort>, mode: Word) -> Result<(), Error> {
    let size = screen.vgetsize(mode);
    if size == EINVFN {
        warn!("only the Videl has modes; {:04x} ignored", mode);
        return Ok(());
    }
    let base = (screen.config().phystop as Address).saturating_sub(size as Address) & 0x00ff_ff00;
    screen.setscreen(Some(base), None, FALCON_REZ, mode)?;
    screen.setscreen(None, Some(base), -1, -1)?;
    Ok(())
}

fn boot(matches: &ArgMatches) -> Result<Screen<BusPort>, Error> {
    let config = machine_config(matches);
    let bus = build_bus(&config)?;
    let irq = Arc::new(InterruptController::default());
    let vbl = Arc::new(Vbl::new());
    let mut screen = Screen::new(bus.clone(), config.clone(), irq.clone(), vbl.clone());

    let mode = matches.get_one::<Word>("mode").copied();
    let mut nvram = MemoryBlock::new(vec![0u8; NVRAM_SIZE]);
    if let Some(mode) = mode {
        nvram.write_beu16(14, mode as u16)?;
    }
    screen.screen_init(Some(&mut nvram as &mut dyn Addressable))?;

    let pal = screen.regs().read_u8(SYNC_MODE)? & 2 != 0;
    let period = Duration::from_millis(if pal { 20 } else { 17 });
    spawn_vbl(vbl, irq.clone(), bus.clone(), period);
    irq.set_sr(SR_RUNNING);

    if config.with_duart {
        let mut ikbd = KeyboardLink::new(bus, DUART_BASE);
        ikbd.init()?;
        match ikbd.read(IKBD_TIMEOUT_MS)? {
            Some(byte) => info!("ikbd: controller answered {:02x}", byte),
            None => info!("ikbd: no answer from the keyboard controller"),
        }
    }

    if let Some(mode) = mode {
        if screen.get_mode() != mode {
            switch_videl_mode(&mut screen, mode)?;
        }
    }
    if let Some(rez) = matches.get_one::<Word>("rez").copied() {
        screen.setscreen(None, None, rez, -1)?;
    }
    Ok(screen)
}

fn draw(screen: &mut Screen<BusPort>) -> Result<(), Error> {
    let (width, height, planes) = screen.resolution()?;
    let font = screen.fonts().default_font();
    let (driver, ws) = SoftDriver::open(
        screen.regs().clone(),
        screen.logbase(),
        width as Word,
        height as Word,
        planes as Word,
        font,
    )?;
    let mut ctx = GraphicsContext::new(driver, ws);
    ctx.start()?;

    screen.vsync()?;
    scene::draw_desktop(&mut ctx, FORMS_BASE)?;
    // show what was drawn, the logical screen may be elsewhere
    let logbase = screen.logbase();
    screen.setscreen(None, Some(logbase), -1, -1)?;
    screen.vsync()
}

fn show(mut screen: Screen<BusPort>, width: u32, height: u32) -> Result<(), Error> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let window = {
        let size = LogicalSize::new(width as f64, height as f64);
        WindowBuilder::new()
            .with_title(TITLE)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)
            .map_err(|err| Error::new(&format!("window: {}", err)))?
    };
    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(width, height, surface_texture).map_err(|err| Error::new(&format!("pixels: {}", err)))?
    };

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            let result = screen.render().and_then(|frame| {
                frame.blit_into(pixels.get_frame_mut());
                pixels.render().map_err(|err| Error::new(&format!("pixels: {}", err)))
            });
            if let Err(err) = result {
                error!("render failed: {}", err);
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    error!("pixels.resize_surface() failed: {}", err);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }
            window.request_redraw();
        }
    });
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let mut screen = boot(matches)?;
    draw(&mut screen)?;

    let frame = screen.render()?;
    let screenshot = matches.get_one::<PathBuf>("screenshot");
    if let Some(path) = screenshot {
        frame
            .to_image()?
            .save(path)
            .map_err(|err| Error::new(&format!("{}: {}", path.display(), err)))?;
        info!("screenshot written to {}", path.display());
    }
    if matches.get_flag("headless") || screenshot.is_some() {
        return Ok(());
    }
    show(screen, frame.width, frame.height)
}

fn main() {
    let matches = cli().get_matches();
    if let Err(err) = logger::init(matches.get_count("verbose")) {
        eprintln!("{}", err);
    }

    if let Err(err) = run(&matches) {
        error!("{}", err);
        process::exit(if err.is_fatal() { 2 } else { 1 });
    }
}
