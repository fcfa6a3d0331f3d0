//! Framebuffer UI core and kiosk shell for a small media-player appliance.
//!
//! The graphics stack draws straight into a Linux framebuffer (or a memory
//! surface): a bitmap font with an LRU glyph cache, bitwise compositing, and
//! a retained element tree with row-packing layout. The shell polls GPIO
//! buttons, mounts the SD card and drives an external player.

pub mod config;
pub mod error;
pub mod glyph_atlas;
mod glyph_atlas_data;
pub mod glyph_cache;
pub mod input;
pub mod kiosk;
pub mod layout;
pub mod pixel_image;
pub mod player;
pub mod renderer;
pub mod storage;
pub mod surface;
pub mod traits;
pub mod ui;
pub mod utf;
pub mod utils;

pub use config::KioskConfig;
pub use error::{Error, Result};
pub use glyph_atlas::GlyphAtlas;
pub use glyph_cache::GlyphCache;
pub use input::{Button, ButtonSet};
pub use kiosk::{Kiosk, Screen};
pub use layout::{Anchors, HAnchor, Spacing, VAnchor};
pub use pixel_image::PixelImage;
pub use renderer::{GlyphStyle, Renderer};
pub use surface::{CompositeOp, Surface};
pub use traits::{ButtonPad, MediaPlayer, Storage};
pub use ui::{Element, ElementKind, Label, ListView};
pub use utils::{Color, Position, Rectangle, Size};
