use anyhow::Context;
use image::ImageReader;
use minitv::input::ScriptedButtons;
use minitv::traits::{MediaPlayer, Storage};
use minitv::{Button, ButtonSet, Kiosk, KioskConfig, Renderer, Surface};
use std::fs;
use std::path::{Path, PathBuf};

const WIDTH: usize = 480;
const HEIGHT: usize = 272;

/// Card that is always inserted and holds a fixed list of files.
struct FixedCard(Vec<String>);

impl Storage for FixedCard {
    fn is_present(&self) -> bool {
        !self.0.is_empty()
    }
    fn mount(&mut self) -> Result<(), minitv::error::KioskError> {
        Ok(())
    }
    fn unmount(&mut self) -> Result<(), minitv::error::KioskError> {
        Ok(())
    }
    fn list_media(&self) -> Result<Vec<String>, minitv::error::KioskError> {
        Ok(self.0.clone())
    }
    fn media_path(&self, name: &str) -> PathBuf {
        Path::new("/media").join(name)
    }
}

struct NoPlayer;

impl MediaPlayer for NoPlayer {
    fn play(&mut self, _path: &Path) -> Result<(), minitv::error::KioskError> {
        Ok(())
    }
    fn is_running(&mut self) -> bool {
        false
    }
    fn is_active(&self) -> bool {
        false
    }
    fn stop(&mut self) {}
}

fn compare_with_tolerance(a_path: &Path, b_path: &Path, tolerance: u8) -> anyhow::Result<bool> {
    let a = ImageReader::open(a_path)
        .with_context(|| format!("read {}", a_path.display()))?
        .decode()?
        .to_rgba8();
    let b = ImageReader::open(b_path)
        .with_context(|| format!("read {}", b_path.display()))?
        .decode()?
        .to_rgba8();

    if a.dimensions() != b.dimensions() {
        return Ok(false);
    }
    Ok(a.pixels().zip(b.pixels()).all(|(pa, pb)| {
        let da = pa.0;
        let db = pb.0;
        (0..4).all(|i| da[i].abs_diff(db[i]) <= tolerance)
    }))
}

/// Runs one step per scripted frame (plus the first), then saves and compares.
fn snapshot_screen(name: &str, media: &[&str], presses: &[Button]) -> anyhow::Result<()> {
    let mut renderer = Renderer::new(Surface::memory(WIDTH, HEIGHT));
    let mut kiosk = Kiosk::new(KioskConfig::default())?;
    let mut buttons = ScriptedButtons::default();
    for &b in presses {
        buttons.push(ButtonSet::EMPTY);
        buttons.push(ButtonSet::of(&[b]));
    }
    let mut card = FixedCard(media.iter().map(|s| s.to_string()).collect());
    let mut player = NoPlayer;
    for _ in 0..=buttons.remaining() {
        kiosk.step(&mut renderer, &mut buttons, &mut card, &mut player)?;
    }

    fs::create_dir_all("snapshots/actual")?;
    fs::create_dir_all("snapshots/golden")?;
    let out_actual = PathBuf::from(format!("snapshots/actual/{name}.png"));
    let out_golden = PathBuf::from(format!("snapshots/golden/{name}.png"));
    renderer.surface_mut().save_png(&out_actual)?;

    if !out_golden.exists() {
        fs::copy(&out_actual, &out_golden)?;
        println!("golden created at {}", out_golden.display());
        return Ok(());
    }

    let ok = compare_with_tolerance(&out_actual, &out_golden, 0)?;
    println!("{name} snapshot {}", if ok { "OK" } else { "MISMATCH" });
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let files = ["clip01.mp4", "holiday.mkv", "trailer.avi"];
    snapshot_screen("insert_card", &[], &[])?;
    snapshot_screen("browse", &files, &[])?;
    snapshot_screen("browse_wrapped", &files, &[Button::Prev])?;
    Ok(())
}
