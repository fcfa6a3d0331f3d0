use crate::error::{SurfaceError, UtfError};
use crate::glyph_atlas::GlyphAtlas;
use crate::layout::{layout_node, Anchors};
use crate::renderer::{text_metrics, GlyphStyle, Renderer};
use crate::utf;
use crate::utils::{Color, Rectangle, Size, BLACK};

/// Caption state of a label. The element it belongs to is at least as large
/// as the caption, even without children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: Vec<u8>,
    scalars: Vec<u32>,
    text_size: Size,
    pub font_color: Color,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: Vec::new(),
            scalars: Vec::new(),
            text_size: Size::ZERO,
            font_color: BLACK,
        }
    }
}

impl Label {
    pub fn new(text: &str) -> Self {
        let mut label = Self::default();
        label.set_text(text);
        label
    }

    pub fn caption(&self) -> &[u8] {
        &self.text
    }

    /// The caption as a string, when it is plain UTF-8 (no 5 or 6 byte forms).
    pub fn caption_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.text).ok()
    }

    pub fn scalars(&self) -> &[u32] {
        &self.scalars
    }

    pub fn text_size(&self) -> Size {
        self.text_size
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.as_bytes().to_vec();
        self.scalars = text.chars().map(u32::from).collect();
        self.remeasure();
    }

    /// Decodes and stores a raw caption. On error the previous caption is
    /// kept.
    pub fn set_caption(&mut self, text: &[u8]) -> Result<(), UtfError> {
        self.scalars = utf::decode(text)?;
        self.text = text.to_vec();
        self.remeasure();
        Ok(())
    }

    fn remeasure(&mut self) {
        self.text_size = text_metrics(GlyphAtlas::builtin(), &self.scalars);
    }

    /// Draws the caption aligned inside `area`. Strokes are ANDed in black so
    /// the fill stays visible between them, then tinted with `font_color`.
    pub(crate) fn paint(
        &self,
        renderer: &mut Renderer,
        area: Rectangle,
        alignment: Anchors,
    ) -> Result<(), SurfaceError> {
        if self.scalars.is_empty() {
            return Ok(());
        }
        let placed = layout_node(area, self.text_size, alignment);
        let (x, y) = (placed.position.x, placed.position.y);
        renderer.draw_scalars(x, y, &self.scalars, GlyphStyle::transparent())?;
        if self.font_color != BLACK {
            renderer.draw_scalars(x, y, &self.scalars, GlyphStyle::colored(self.font_color))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_is_measured_with_builtin_atlas() {
        let label = Label::new("AA");
        assert_eq!(label.text_size(), Size::new(18, 22));
        assert_eq!(Label::new("").text_size(), Size::ZERO);
    }

    #[test]
    fn bad_caption_keeps_previous_text() {
        let mut label = Label::new("ok");
        assert!(label.set_caption(&[0x80]).is_err());
        assert_eq!(label.caption_str(), Some("ok"));
    }

    #[test]
    fn six_byte_caption_decodes() {
        let mut label = Label::new("");
        label
            .set_caption(&[0xFC, 0x84, 0x80, 0x80, 0x80, 0x80])
            .unwrap();
        assert_eq!(label.scalars(), &[0x0400_0000]);
        assert_eq!(label.caption_str(), None);
        // Unknown scalars measure as the replacement glyph.
        assert_eq!(label.text_size(), Size::new(9, 22));
    }
}
