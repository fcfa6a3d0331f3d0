//! Error types for every layer of the crate.
//!
//! Geometry never produces an error: clipped or degenerate drawing calls are
//! silent no-ops. Errors are reserved for backing resources, malformed text,
//! atlas construction and tree lookups.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("cannot open framebuffer {path}: {source}")]
    OpenDevice {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bad framebuffer geometry in {path}: {value:?}")]
    Geometry { path: PathBuf, value: String },

    #[error("pixel block is {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtfError {
    #[error("invalid lead byte {byte:#04x} at offset {offset}")]
    InvalidLeadByte { offset: usize, byte: u8 },

    #[error("expected continuation byte at offset {offset}, found {byte:#04x}")]
    InvalidContinuation { offset: usize, byte: u8 },

    #[error("sequence at offset {offset} needs {needed} bytes, {available} left")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("scalar {0:#x} cannot be encoded")]
    ScalarOutOfRange(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtlasError {
    #[error("{scalars} scalars but {widths} widths")]
    LengthMismatch { scalars: usize, widths: usize },

    #[error("strip holds {actual} bytes, glyphs need {expected}")]
    StripTooShort { expected: usize, actual: usize },

    #[error("replacement glyph {0:#x} is missing")]
    MissingReplacement(u32),

    #[error("scalar {0:#x} listed twice")]
    DuplicateScalar(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("no element named {0:?}")]
    NotFound(String),

    #[error("element {name:?} is a {found}, not a {expected}")]
    WrongKind {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("an element named {0:?} already exists here")]
    DuplicateName(String),

    #[error("list index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Text(#[from] UtfError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("bad resolution {0:?}, expected WIDTHxHEIGHT")]
    Resolution(String),
}

#[derive(Debug, Error)]
pub enum KioskError {
    #[error("mount of {device} on {target} failed: {source}")]
    Mount {
        device: PathBuf,
        target: PathBuf,
        #[source]
        source: nix::Error,
    },

    #[error("unmount of {target} failed: {source}")]
    Unmount {
        target: PathBuf,
        #[source]
        source: nix::Error,
    },

    #[error("gpio access failed: {0}")]
    Gpio(String),

    #[error("player failed: {0}")]
    Player(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("nix error: {0}")]
    Nix(#[from] nix::Error),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Ui(#[from] UiError),
}

/// Umbrella error for callers that drive several layers at once.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Utf(#[from] UtfError),

    #[error(transparent)]
    Atlas(#[from] AtlasError),

    #[error(transparent)]
    Ui(#[from] UiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Kiosk(#[from] KioskError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
