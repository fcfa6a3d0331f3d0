//! Compiled-in bitmap font.
//!
//! All glyphs share one 1-bit strip of fixed height. Glyph `n` occupies the
//! columns after glyphs `0..n`, and a set bit (MSB first) is a stroke pixel.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;

use crate::error::AtlasError;
use crate::glyph_atlas_data::{
    GLYPH_HEIGHT, GLYPH_SCALARS, GLYPH_STRIP, GLYPH_WIDTHS, STRIP_STRIDE,
};
use crate::pixel_image::PixelImage;
use crate::utils::{Color, Size};

/// Drawn in place of any scalar the atlas has no bitmap for.
pub const REPLACEMENT: u32 = '?' as u32;

static BUILTIN: OnceLock<GlyphAtlas> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphEntry {
    pub width: usize,
    /// Column of the glyph's first pixel inside the strip.
    pub x_offset: usize,
}

#[derive(Debug)]
pub struct GlyphAtlas {
    height: usize,
    stride: usize,
    strip: &'static [u8],
    scalars: &'static [u32],
    entries: Vec<GlyphEntry>,
    index: HashMap<u32, usize>,
}

impl GlyphAtlas {
    /// The atlas baked into the binary, built on first use.
    pub fn builtin() -> &'static GlyphAtlas {
        BUILTIN.get_or_init(|| {
            GlyphAtlas::new(
                &GLYPH_SCALARS,
                &GLYPH_WIDTHS,
                &GLYPH_STRIP,
                GLYPH_HEIGHT,
                STRIP_STRIDE,
            )
            .expect("Failed to load embedded glyph atlas")
        })
    }

    /// Builds the lookup tables over lockstep `scalars`/`widths` arrays and a
    /// strip of `height` rows, `stride` bytes each.
    pub fn new(
        scalars: &'static [u32],
        widths: &'static [u8],
        strip: &'static [u8],
        height: usize,
        stride: usize,
    ) -> Result<Self, AtlasError> {
        if scalars.len() != widths.len() {
            return Err(AtlasError::LengthMismatch {
                scalars: scalars.len(),
                widths: widths.len(),
            });
        }

        let mut entries = Vec::with_capacity(widths.len());
        let mut index = HashMap::with_capacity(scalars.len());
        let mut x_offset = 0;
        for (n, (&scalar, &width)) in scalars.iter().zip(widths).enumerate() {
            if index.insert(scalar, n).is_some() {
                return Err(AtlasError::DuplicateScalar(scalar));
            }
            entries.push(GlyphEntry {
                width: width as usize,
                x_offset,
            });
            x_offset += width as usize;
        }

        let expected = x_offset.div_ceil(8).max(stride) * height;
        if stride * 8 < x_offset || strip.len() < expected {
            return Err(AtlasError::StripTooShort {
                expected,
                actual: strip.len(),
            });
        }
        if !index.contains_key(&REPLACEMENT) {
            return Err(AtlasError::MissingReplacement(REPLACEMENT));
        }

        debug!(
            "glyph atlas ready: {} glyphs, {} columns, {} rows",
            entries.len(),
            x_offset,
            height
        );
        Ok(Self {
            height,
            stride,
            strip,
            scalars,
            entries,
            index,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, scalar: u32) -> bool {
        self.index.contains_key(&scalar)
    }

    pub fn lookup(&self, scalar: u32) -> Option<GlyphEntry> {
        self.index.get(&scalar).map(|&n| self.entries[n])
    }

    /// The scalar whose bitmap is drawn for `scalar`.
    pub fn resolve(&self, scalar: u32) -> u32 {
        if self.contains(scalar) {
            scalar
        } else {
            REPLACEMENT
        }
    }

    pub fn scalars(&self) -> &[u32] {
        self.scalars
    }

    /// Width and height of the glyph drawn for `scalar`.
    pub fn glyph_metrics(&self, scalar: u32) -> Size {
        let entry = self
            .lookup(scalar)
            .or_else(|| self.lookup(REPLACEMENT))
            .unwrap_or(GlyphEntry {
                width: 0,
                x_offset: 0,
            });
        Size::new(entry.width as i32, self.height as i32)
    }

    /// Expands one glyph into a dense two-color image: `fg` where the strip
    /// has a set bit, `bg` elsewhere. `None` when the scalar has no bitmap.
    pub fn extract_glyph(&self, scalar: u32, fg: Color, bg: Color) -> Option<PixelImage> {
        let entry = self.lookup(scalar)?;
        let mut img = PixelImage::filled(entry.width, self.height, bg);
        for y in 0..self.height {
            let row = &self.strip[y * self.stride..(y + 1) * self.stride];
            for x in 0..entry.width {
                let col = entry.x_offset + x;
                if row[col / 8] & (0x80 >> (col % 8)) != 0 {
                    img.set(x, y, fg);
                }
            }
        }
        Some(img)
    }
}
