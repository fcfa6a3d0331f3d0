//! Appliance configuration, loaded from TOML. Every field has a default
//! matching the stock board, so an empty file is a valid config.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::glyph_cache::DEFAULT_BUDGET;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    pub display: DisplayConfig,
    pub storage: StorageConfig,
    pub buttons: ButtonConfig,
    pub player: PlayerConfig,
    pub poll: PollConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Device name under `/dev` and `/sys/class/graphics`.
    pub framebuffer: String,
    /// `WIDTHxHEIGHT` to use instead of the device's virtual size.
    pub resolution: Option<String>,
    /// Size of the memory surface used when the device cannot be opened.
    pub fallback_width: usize,
    pub fallback_height: usize,
    pub glyph_cache_bytes: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            framebuffer: "fb0".into(),
            resolution: Some("480x272".into()),
            fallback_width: 800,
            fallback_height: 480,
            glyph_cache_bytes: DEFAULT_BUDGET,
        }
    }
}

impl DisplayConfig {
    pub fn resolution(&self) -> Result<Option<(usize, usize)>, ConfigError> {
        self.resolution.as_deref().map(parse_resolution).transpose()
    }
}

pub fn parse_resolution(text: &str) -> Result<(usize, usize), ConfigError> {
    let bad = || ConfigError::Resolution(text.to_string());
    let (w, h) = text.trim().split_once(['x', 'X']).ok_or_else(bad)?;
    let w = w.trim().parse().map_err(|_| bad())?;
    let h = h.trim().parse().map_err(|_| bad())?;
    Ok((w, h))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub device: PathBuf,
    pub mount_point: PathBuf,
    pub fs_type: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            device: "/dev/mmcblk0p1".into(),
            mount_point: "/mnt/sdcard".into(),
            fs_type: "vfat".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Physical address of the first GPIO port's register block.
    pub gpio_base: u64,
    /// Port index; each port block is 0x24 bytes.
    pub port: u32,
    pub play_pin: u32,
    pub next_pin: u32,
    pub prev_pin: u32,
    pub stop_pin: u32,
    /// Output pin driven high at startup (panel and amplifier enable).
    pub enable_pin: Option<u32>,
    /// Pressed buttons read as 0.
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            gpio_base: 0x01C2_0800,
            port: 4,
            play_pin: 1,
            next_pin: 2,
            prev_pin: 3,
            stop_pin: 4,
            enable_pin: Some(0),
            active_low: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Run once before each playback.
    pub setup: Vec<String>,
    /// Decoder writing video to the framebuffer and audio to stdout.
    /// `{file}` is replaced by the quoted media path.
    pub video_command: String,
    /// Reads the decoder's stdout. Empty to run the decoder alone.
    pub audio_command: String,
    /// Files up to this size are read once before playback to warm the
    /// page cache.
    pub preload_limit: u64,
    pub stop_grace_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            setup: vec![
                "tinymix set 1 48".into(),
                "tinymix set 2 1".into(),
                "tinymix set 13 0".into(),
            ],
            video_command: "ffmpeg -hide_banner -i {file} -an -pix_fmt bgra -f fbdev /dev/fb0 \
                            -vn -f wav pipe:1 -ar 44100 -ac 1"
                .into(),
            audio_command: "tinyplay stdin -r 44100 -c 1".into(),
            preload_limit: 16 * 1024 * 1024,
            stop_grace_ms: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    pub no_card_ms: u64,
    pub browse_ms: u64,
    pub playing_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            no_card_ms: 1000,
            browse_ms: 50,
            playing_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub browse_title: String,
    pub insert_prompt: String,
    pub empty_prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "A5-MiniTV".into(),
            browse_title: "Select a track to play".into(),
            insert_prompt: "Please insert an SD card. It can be removed at any time.".into(),
            empty_prompt: "No media files on this card.".into(),
        }
    }
}

impl KioskConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_board_defaults() {
        let config = KioskConfig::from_toml("").unwrap();
        assert_eq!(config, KioskConfig::default());
        assert_eq!(config.display.resolution().unwrap(), Some((480, 272)));
        assert_eq!(config.buttons.gpio_base, 0x01C2_0800);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let toml = r#"
            [display]
            framebuffer = "fb1"

            [poll]
            browse_ms = 20
        "#;
        let config = KioskConfig::from_toml(toml).unwrap();
        assert_eq!(config.display.framebuffer, "fb1");
        assert_eq!(config.display.fallback_width, 800);
        assert_eq!(config.poll.browse_ms, 20);
        assert_eq!(config.poll.no_card_ms, 1000);
    }

    #[test]
    fn rejects_bad_resolution() {
        assert!(matches!(
            parse_resolution("480-272"),
            Err(ConfigError::Resolution(_))
        ));
        assert_eq!(parse_resolution(" 320X240 ").unwrap(), (320, 240));
    }
}
