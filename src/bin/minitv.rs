use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::{error, info, warn};
use minitv::config::parse_resolution;
use minitv::input::{GpioButtons, ScriptedButtons};
use minitv::player::Player;
use minitv::storage::SdCard;
use minitv::{ButtonPad, Kiosk, KioskConfig, Renderer, Screen, Surface};

#[derive(Parser, Debug)]
#[command(name = "minitv", version, about = "SD card media kiosk for a framebuffer panel")]
struct Args {
    /// TOML config file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Framebuffer device name, e.g. fb0.
    #[arg(long)]
    fb: Option<String>,

    /// Draw into a WxH memory surface instead of the framebuffer, with no
    /// GPIO access.
    #[arg(long, value_name = "WxH")]
    preview: Option<String>,

    /// Save the screen to this PNG after every step that shows the UI.
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Run a single step and exit.
    #[arg(long)]
    once: bool,
}

fn open_surface(args: &Args, config: &KioskConfig) -> anyhow::Result<Surface> {
    if let Some(preview) = &args.preview {
        let (w, h) = parse_resolution(preview)?;
        info!("preview surface {w}x{h}");
        return Ok(Surface::memory(w, h));
    }
    let display = &config.display;
    let opened = match display.resolution()? {
        Some((w, h)) => Surface::open_device_with_size(&display.framebuffer, w, h),
        None => Surface::open_device(&display.framebuffer),
    };
    match opened {
        Ok(surface) => Ok(surface),
        Err(e) => {
            warn!("{e}; drawing into memory instead");
            Ok(Surface::memory(
                display.fallback_width,
                display.fallback_height,
            ))
        }
    }
}

fn open_buttons(args: &Args, config: &KioskConfig) -> Box<dyn ButtonPad> {
    if args.preview.is_some() {
        return Box::new(ScriptedButtons::default());
    }
    match GpioButtons::open(&config.buttons) {
        Ok(buttons) => Box::new(buttons),
        Err(e) => {
            warn!("buttons unavailable: {e}");
            Box::new(ScriptedButtons::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => KioskConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => KioskConfig::default(),
    };
    if let Some(fb) = &args.fb {
        config.display.framebuffer = fb.clone();
    }

    let mut surface = open_surface(&args, &config)?;
    surface
        .set_buffered(true)
        .context("reading the framebuffer into the back buffer")?;
    let mut renderer = Renderer::with_cache_budget(surface, config.display.glyph_cache_bytes);

    let mut buttons = open_buttons(&args, &config);
    let mut storage = SdCard::new(&config.storage);
    let mut player = Player::new(config.player.clone());
    let mut kiosk = Kiosk::new(config.clone()).context("building the start screen")?;

    loop {
        let wait = match kiosk.step(&mut renderer, buttons.as_mut(), &mut storage, &mut player) {
            Ok(wait) => wait,
            Err(e) if args.once => return Err(e.into()),
            Err(e) => {
                error!("{e}");
                Duration::from_millis(config.poll.no_card_ms)
            }
        };
        if let Some(path) = &args.snapshot {
            if kiosk.screen() != Screen::Playing {
                renderer
                    .surface_mut()
                    .save_png(path)
                    .with_context(|| format!("saving {}", path.display()))?;
            }
        }
        if args.once {
            return Ok(());
        }
        sleep(wait);
    }
}
