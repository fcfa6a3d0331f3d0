use std::path::{Path, PathBuf};

use crate::error::KioskError;
use crate::input::ButtonSet;

/// Source of the current button levels.
pub trait ButtonPad {
    fn poll(&mut self) -> Result<ButtonSet, KioskError>;
}

/// Removable media the kiosk browses.
pub trait Storage {
    /// Whether the card's block device exists.
    fn is_present(&self) -> bool;
    fn mount(&mut self) -> Result<(), KioskError>;
    fn unmount(&mut self) -> Result<(), KioskError>;
    /// File names (not directories) at the top of the card, sorted.
    fn list_media(&self) -> Result<Vec<String>, KioskError>;
    fn media_path(&self, name: &str) -> PathBuf;
}

/// External playback pipeline. It owns the framebuffer while it runs.
pub trait MediaPlayer {
    fn play(&mut self, path: &Path) -> Result<(), KioskError>;
    /// Non-blocking. `false` once any part of the pipeline has exited.
    fn is_running(&mut self) -> bool;
    fn is_active(&self) -> bool;
    fn stop(&mut self);
}
