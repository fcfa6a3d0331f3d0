use log::trace;

use crate::error::{SurfaceError, UtfError};
use crate::glyph_atlas::GlyphAtlas;
use crate::glyph_cache::{GlyphCache, DEFAULT_BUDGET};
use crate::surface::{CompositeOp, Surface};
use crate::utf;
use crate::utils::{Color, Size, BLACK, RGB_MASK, WHITE};

/// How a glyph is combined with what is already on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphStyle {
    /// Let the background show through around the strokes.
    pub transparent: bool,
    /// Stroke color. `None` keeps the cached black-on-white bitmap.
    pub color: Option<Color>,
}

impl GlyphStyle {
    pub fn opaque() -> Self {
        Self::default()
    }

    pub fn transparent() -> Self {
        Self {
            transparent: true,
            color: None,
        }
    }

    pub fn colored(color: Color) -> Self {
        Self {
            transparent: true,
            color: Some(color),
        }
    }
}

/// Owns a surface together with the glyph cache that feeds it. Each renderer
/// has its own cache, so two renderers never evict each other's glyphs.
pub struct Renderer {
    surface: Surface,
    glyphs: GlyphCache,
    atlas: &'static GlyphAtlas,
}

impl Renderer {
    pub fn new(surface: Surface) -> Self {
        Self::with_cache_budget(surface, DEFAULT_BUDGET)
    }

    pub fn with_cache_budget(surface: Surface, budget: usize) -> Self {
        Self {
            surface,
            glyphs: GlyphCache::new(budget),
            atlas: GlyphAtlas::builtin(),
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn into_surface(self) -> Surface {
        self.surface
    }

    pub fn glyph_cache(&self) -> &GlyphCache {
        &self.glyphs
    }

    pub fn atlas(&self) -> &'static GlyphAtlas {
        self.atlas
    }

    pub fn glyph_metrics(&self, scalar: u32) -> Size {
        self.atlas.glyph_metrics(scalar)
    }

    /// Summed width and tallest height of a run of scalars.
    pub fn text_metrics(&self, scalars: &[u32]) -> Size {
        text_metrics(self.atlas, scalars)
    }

    pub fn measure_text(&self, text: &[u8]) -> Result<Size, UtfError> {
        Ok(self.text_metrics(&utf::decode(text)?))
    }

    pub fn clear(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.surface.clear(color)
    }

    pub fn present(&mut self) -> Result<(), SurfaceError> {
        self.surface.present()
    }

    /// Draws one glyph with its top-left corner at `(x, y)` and returns its
    /// advance width.
    pub fn draw_glyph(&mut self, x: i32, y: i32, scalar: u32, style: GlyphStyle) -> Result<i32, SurfaceError> {
        let glyph = self.glyphs.get(self.atlas, scalar);
        let advance = glyph.width() as i32;
        match (style.transparent, style.color) {
            (false, None) => self.surface.draw_image(glyph, x, y, CompositeOp::Copy)?,
            (true, None) => self.surface.draw_image(glyph, x, y, CompositeOp::And)?,
            (_, Some(color)) => {
                // White strokes on black, then the strokes take the color
                // and the black surround disappears under OR.
                let mut tinted = glyph.clone();
                tinted.invert_colors();
                if color != WHITE {
                    tinted.replace_color(WHITE, color);
                }
                self.surface.draw_image(&tinted, x, y, CompositeOp::Or)?;
            }
        }
        Ok(advance)
    }

    /// Inverts the pixels under one glyph's strokes.
    pub fn draw_glyph_xor(&mut self, x: i32, y: i32, scalar: u32) -> Result<i32, SurfaceError> {
        let glyph = self.glyphs.get(self.atlas, scalar);
        let advance = glyph.width() as i32;
        let mask = glyph.map(|px| if px == BLACK { RGB_MASK } else { 0 });
        self.surface.draw_image(&mask, x, y, CompositeOp::Xor)?;
        Ok(advance)
    }

    pub fn draw_scalars(&mut self, x: i32, y: i32, scalars: &[u32], style: GlyphStyle) -> Result<(), SurfaceError> {
        trace!("text run of {} glyphs at ({}, {})", scalars.len(), x, y);
        let mut pen = x;
        for &scalar in scalars {
            pen = pen.saturating_add(self.draw_glyph(pen, y, scalar, style)?);
        }
        Ok(())
    }

    pub fn draw_text(&mut self, x: i32, y: i32, text: &[u8], style: GlyphStyle) -> crate::Result<()> {
        let scalars = utf::decode(text)?;
        self.draw_scalars(x, y, &scalars, style)?;
        Ok(())
    }

    pub fn draw_text_xor(&mut self, x: i32, y: i32, text: &[u8]) -> crate::Result<()> {
        let mut pen = x;
        for scalar in utf::decode(text)? {
            pen = pen.saturating_add(self.draw_glyph_xor(pen, y, scalar)?);
        }
        Ok(())
    }
}

pub fn text_metrics(atlas: &GlyphAtlas, scalars: &[u32]) -> Size {
    scalars.iter().fold(Size::ZERO, |acc, &s| {
        let g = atlas.glyph_metrics(s);
        Size::new(acc.width + g.width, acc.height.max(g.height))
    })
}
