use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{SurfaceError, UiError};
use crate::layout::{Anchors, Spacing};
use crate::pixel_image::PixelImage;
use crate::renderer::Renderer;
use crate::surface::CompositeOp;
use crate::ui::label::Label;
use crate::ui::list_view::{ListItem, ListState, ListView};
use crate::utils::{Color, Position, Rectangle, Size, BLACK, OPAQUE_MASK, WHITE};

/// Geometry computed by the last layout pass. Recomputed on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layout {
    /// Offset from the parent's client origin (inside its margin and
    /// border), padding included, before alignment.
    pub rel: Position,
    /// Absolute top-left corner of the outer box, margin included.
    pub abs: Position,
    pub content: Size,
    /// Content plus margin, border and padding on both sides.
    pub frame: Size,
    /// Space offered by the parent: the width the element was measured
    /// against and the height of its row. A root gets the arranged size.
    pub container: Size,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Row {
    start: usize,
    end: usize,
    width: i32,
    height: i32,
    y: i32,
}

impl Row {
    fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Panel,
    Label(Label),
    ListView(ListState),
    ListItem(ListItem),
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Panel => "panel",
            ElementKind::Label(_) => "label",
            ElementKind::ListView(_) => "list view",
            ElementKind::ListItem(_) => "list item",
        }
    }

    fn caption(&self) -> Option<&Label> {
        match self {
            ElementKind::Label(label) => Some(label),
            ElementKind::ListItem(item) => Some(&item.label),
            _ => None,
        }
    }

    fn caption_mut(&mut self) -> Option<&mut Label> {
        match self {
            ElementKind::Label(label) => Some(label),
            ElementKind::ListItem(item) => Some(&mut item.label),
            _ => None,
        }
    }
}

/// A node of the retained UI tree.
///
/// Children are laid out in insertion order, left to right, wrapping into a
/// new row whenever the next child does not fit, asks for a line break or
/// expands horizontally.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    pub margin: Spacing,
    pub border: Spacing,
    pub padding: Spacing,
    pub expand_x: bool,
    pub expand_y: bool,
    /// Start a new row before this element.
    pub line_break: bool,
    /// Placement of the children (or caption) inside the content box.
    pub alignment: Anchors,
    /// Smallest content size, regardless of what the children need.
    pub min_size: Size,
    pub fill_color: Color,
    pub border_color: Color,
    pub transparent: bool,
    pub clip_children: bool,
    layout: Layout,
    rows: Vec<Row>,
    children: Vec<Element>,
    index: HashMap<String, usize>,
    kind: ElementKind,
}

impl Element {
    fn with_kind(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            margin: Spacing::ZERO,
            border: Spacing::ZERO,
            padding: Spacing::ZERO,
            expand_x: false,
            expand_y: false,
            line_break: false,
            alignment: Anchors::LEFT_TOP,
            min_size: Size::ZERO,
            fill_color: WHITE,
            border_color: BLACK,
            transparent: false,
            clip_children: false,
            layout: Layout::default(),
            rows: Vec::new(),
            children: Vec::new(),
            index: HashMap::new(),
            kind,
        }
    }

    pub fn panel(name: impl Into<String>) -> Self {
        Self::with_kind(name, ElementKind::Panel)
    }

    pub fn label(name: impl Into<String>, text: &str) -> Self {
        Self::with_kind(name, ElementKind::Label(Label::new(text)))
    }

    pub fn list_view(name: impl Into<String>) -> Self {
        let mut element = Self::with_kind(name, ElementKind::ListView(ListState::default()));
        element.clip_children = true;
        element
    }

    pub fn list_item(name: impl Into<String>, text: &str) -> Self {
        let mut element = Self::with_kind(name, ElementKind::ListItem(ListItem::new(text)));
        element.line_break = true;
        element.expand_x = true;
        element.padding = Spacing::new(2, 1);
        element
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut ElementKind {
        &mut self.kind
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Outer box from the last layout pass, margin included.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            self.layout.abs.x,
            self.layout.abs.y,
            self.layout.frame.width,
            self.layout.frame.height,
        )
    }

    /// Box inside the margin and border. Clipping and the fill use it.
    pub fn client_rect(&self) -> Rectangle {
        self.bounds()
            .inset(self.margin.x, self.margin.y)
            .inset(self.border.x, self.border.y)
    }

    pub fn content_rect(&self) -> Rectangle {
        let client = self.client_rect();
        Rectangle::new(
            client.x + self.padding.x,
            client.y + self.padding.y,
            self.layout.content.width,
            self.layout.content.height,
        )
    }

    /// Margin, border and padding of one side.
    pub fn frame(&self) -> Spacing {
        self.margin + self.border + self.padding
    }

    pub fn clips(&self) -> bool {
        self.clip_children || matches!(self.kind, ElementKind::ListView(_))
    }

    // Tree structure

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn child_at(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn reindex(&mut self) {
        self.index = self
            .children
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
    }

    /// Appends `child`. Names are unique among siblings.
    pub fn insert(&mut self, child: Element) -> Result<&mut Element, UiError> {
        if self.index.contains_key(&child.name) {
            return Err(UiError::DuplicateName(child.name));
        }
        let at = self.children.len();
        self.index.insert(child.name.clone(), at);
        self.children.push(child);
        Ok(&mut self.children[at])
    }

    pub fn remove(&mut self, name: &str) -> Option<Element> {
        let at = self.index.get(name).copied()?;
        let removed = self.children.remove(at);
        self.reindex();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.children.clear();
        self.index.clear();
        self.rows.clear();
    }

    pub fn get(&self, name: &str) -> Option<&Element> {
        self.index.get(name).map(|&i| &self.children[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Element> {
        let i = self.index.get(name).copied()?;
        Some(&mut self.children[i])
    }

    /// Depth-first search of the whole subtree, this element included.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(name))
    }

    fn wrong_kind(&self, expected: &'static str) -> UiError {
        UiError::WrongKind {
            name: self.name.clone(),
            expected,
            found: self.kind.name(),
        }
    }

    // Typed access

    pub fn as_label(&self) -> Result<&Label, UiError> {
        self.kind.caption().ok_or_else(|| self.wrong_kind("label"))
    }

    pub fn as_label_mut(&mut self) -> Result<&mut Label, UiError> {
        if self.kind.caption().is_none() {
            return Err(self.wrong_kind("label"));
        }
        self.kind
            .caption_mut()
            .ok_or_else(|| UiError::NotFound(self.name.clone()))
    }

    pub fn as_list_view(&mut self) -> Result<ListView<'_>, UiError> {
        if !matches!(self.kind, ElementKind::ListView(_)) {
            return Err(self.wrong_kind("list view"));
        }
        Ok(ListView::new(self))
    }

    pub fn label_ref(&self, name: &str) -> Result<&Label, UiError> {
        self.find(name)
            .ok_or_else(|| UiError::NotFound(name.to_string()))?
            .as_label()
    }

    pub fn label_mut(&mut self, name: &str) -> Result<&mut Label, UiError> {
        self.find_mut(name)
            .ok_or_else(|| UiError::NotFound(name.to_string()))?
            .as_label_mut()
    }

    pub fn list_view_mut(&mut self, name: &str) -> Result<ListView<'_>, UiError> {
        self.find_mut(name)
            .ok_or_else(|| UiError::NotFound(name.to_string()))?
            .as_list_view()
    }

    /// Replaces the caption of a label or list item. The new size takes
    /// effect on the next layout pass.
    pub fn set_caption(&mut self, text: &[u8]) -> Result<(), UiError> {
        self.as_label_mut()?.set_caption(text)?;
        Ok(())
    }

    // Layout

    /// Computes the size of this subtree given the space offered by the
    /// parent, and returns the outer box size.
    pub fn measure(&mut self, width_limit: i32, height_limit: i32) -> Size {
        let frame = self.frame().both_sides();
        let inner_w = (width_limit - frame.width).max(0);
        let inner_h = (height_limit - frame.height).max(0);

        let mut content = self.measure_children(inner_w, inner_h);
        if let Some(label) = self.kind.caption() {
            let text = label.text_size();
            content.width = content.width.max(text.width);
            content.height = content.height.max(text.height);
        }
        content.width = content.width.max(self.min_size.width);
        content.height = content.height.max(self.min_size.height);
        if self.expand_x {
            content.width = inner_w;
        }
        if self.expand_y {
            content.height = inner_h;
        }

        self.layout.content = content;
        self.layout.frame = content + frame;
        self.layout.frame
    }

    fn measure_children(&mut self, inner_w: i32, inner_h: i32) -> Size {
        self.rows.clear();
        let pad = self.padding;
        let mut row = Row::default();
        let mut force_break = false;

        for i in 0..self.children.len() {
            let wants_break =
                force_break || self.children[i].line_break || self.children[i].expand_x;
            if wants_break && !row.is_empty() {
                self.close_row(&mut row, inner_h);
            }

            let mut available = inner_w - row.width;
            let mut size = self.children[i].measure(available, inner_h);
            if row.width + size.width > inner_w && !row.is_empty() {
                self.close_row(&mut row, inner_h);
                available = inner_w;
                size = self.children[i].measure(available, inner_h);
            }

            let child = &mut self.children[i];
            child.layout.rel = Position::new(pad.x + row.width, pad.y + row.y);
            child.layout.container.width = available;
            force_break = child.expand_x;

            row.width += size.width;
            row.height = row.height.max(size.height);
            row.end = i + 1;
        }
        if !row.is_empty() {
            self.close_row(&mut row, inner_h);
        }

        Size::new(
            self.rows.iter().map(|r| r.width).max().unwrap_or(0),
            self.rows.iter().map(|r| r.height).sum(),
        )
    }

    fn close_row(&mut self, row: &mut Row, inner_h: i32) {
        for child in &mut self.children[row.start..row.end] {
            child.layout.container.height = if child.expand_y { inner_h } else { row.height };
        }
        self.rows.push(*row);
        *row = Row {
            start: row.end,
            end: row.end,
            width: 0,
            height: 0,
            y: row.y + row.height,
        };
    }

    /// Places this element's outer box at `(x, y)` and positions the
    /// subtree below it.
    pub fn arrange_at(&mut self, x: i32, y: i32) {
        self.layout.abs = Position::new(x, y);
        let client_x = x + self.margin.x + self.border.x;
        let client_y = y + self.margin.y + self.border.y;
        let area = self.alignment_area();
        let align = self.alignment;

        let block_height: i32 = self.rows.iter().map(|r| r.height).sum();
        let block_offset = align.v.offset(area.height, block_height);

        for row in &self.rows {
            let row_offset = align.h.offset(area.width, row.width);
            for child in &mut self.children[row.start..row.end] {
                let in_row = align.v.offset(row.height, child.layout.frame.height);
                let cx = client_x + child.layout.rel.x + row_offset;
                let cy = client_y + child.layout.rel.y + block_offset + in_row;
                child.arrange_at(cx, cy);
            }
        }

        if matches!(self.kind, ElementKind::ListView(_)) {
            self.ensure_selected_visible();
            let scroll = self.scroll_offset();
            if scroll != 0 {
                for child in &mut self.children {
                    child.translate(0, -scroll);
                }
            }
        }
    }

    /// Space children are aligned in: the container minus this element's
    /// frame, never smaller than the measured content.
    fn alignment_area(&self) -> Size {
        let frame = self.frame().both_sides();
        let container = self.layout.container;
        Size::new(
            container.width.saturating_sub(frame.width).max(self.layout.content.width),
            container.height.saturating_sub(frame.height).max(self.layout.content.height),
        )
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.layout.abs.x += dx;
        self.layout.abs.y += dy;
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    /// Full layout pass for a root placed at `(x, y)` inside `width x height`.
    pub fn arrange(&mut self, x: i32, y: i32, width: i32, height: i32) -> Size {
        let size = self.measure(width, height);
        self.layout.container = Size::new(width, height);
        self.arrange_at(x, y);
        debug!(
            "layout of {:?}: {}x{} at ({}, {})",
            self.name, size.width, size.height, x, y
        );
        size
    }

    pub(crate) fn scroll_offset(&self) -> i32 {
        match &self.kind {
            ElementKind::ListView(state) => state.scroll,
            _ => 0,
        }
    }

    /// Scrolls a list view by the least amount that brings the selected item
    /// fully into the viewport. Uses the geometry of the last layout pass.
    pub(crate) fn ensure_selected_visible(&mut self) {
        let viewport = self.layout.content.height;
        let pad_y = self.padding.y;
        let ElementKind::ListView(state) = &self.kind else {
            return;
        };
        let (selected, mut scroll) = (state.selected, state.scroll);
        if let Some(item) = selected.and_then(|i| self.children.get(i)) {
            let top = item.layout.rel.y - pad_y;
            let bottom = top + item.layout.frame.height;
            if top < scroll {
                scroll = top;
            } else if bottom > scroll + viewport {
                scroll = bottom - viewport;
            }
        } else {
            scroll = 0;
        }
        if let ElementKind::ListView(state) = &mut self.kind {
            state.scroll = scroll.max(0);
        }
    }

    // Rendering

    /// Lays the tree out inside `width x height` at `(x, y)` and paints it.
    pub fn render(
        &mut self,
        renderer: &mut Renderer,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), SurfaceError> {
        self.arrange(x, y, width, height);
        self.paint(renderer)
    }

    /// Paints using the geometry of the last layout pass.
    pub fn paint(&self, renderer: &mut Renderer) -> Result<(), SurfaceError> {
        trace!("paint {:?} at {:?}", self.name, self.bounds());
        let bordered = self.bounds().inset(self.margin.x, self.margin.y);
        let client = bordered.inset(self.border.x, self.border.y);

        if !self.transparent && !client.is_empty() {
            renderer.surface_mut().fill_rect(
                client.x,
                client.y,
                client.right(),
                client.bottom(),
                self.fill_color,
            )?;
        }
        self.paint_border(renderer, bordered)?;

        if self.clips() {
            self.paint_children_clipped(renderer, client)?;
        } else {
            self.paint_children(renderer)?;
        }

        match &self.kind {
            ElementKind::Label(label) => label.paint(renderer, self.content_rect(), self.alignment)?,
            ElementKind::ListItem(item) => {
                item.label.paint(renderer, self.content_rect(), self.alignment)?;
                if item.selected && !bordered.is_empty() {
                    renderer.surface_mut().draw_rect_xor(
                        bordered.x,
                        bordered.y,
                        bordered.right(),
                        bordered.bottom(),
                    )?;
                }
            }
            ElementKind::Panel | ElementKind::ListView(_) => {}
        }
        Ok(())
    }

    /// Top and bottom bars span the whole width; the side bars stop short of
    /// them so no pixel is painted twice.
    fn paint_border(&self, renderer: &mut Renderer, b: Rectangle) -> Result<(), SurfaceError> {
        let (bx, by) = (self.border.x, self.border.y);
        if b.is_empty() || (bx <= 0 && by <= 0) {
            return Ok(());
        }
        let s = renderer.surface_mut();
        let color = self.border_color;
        if by > 0 {
            let top_end = (b.y + by - 1).min(b.bottom());
            let bottom_start = (b.bottom() - by + 1).max(top_end + 1);
            s.fill_rect(b.x, b.y, b.right(), top_end, color)?;
            if bottom_start <= b.bottom() {
                s.fill_rect(b.x, bottom_start, b.right(), b.bottom(), color)?;
            }
        }
        let (side_top, side_bottom) = (b.y + by.max(0), b.bottom() - by.max(0));
        if bx > 0 && side_top <= side_bottom {
            let left_end = (b.x + bx - 1).min(b.right());
            let right_start = (b.right() - bx + 1).max(left_end + 1);
            s.fill_rect(b.x, side_top, left_end, side_bottom, color)?;
            if right_start <= b.right() {
                s.fill_rect(right_start, side_top, b.right(), side_bottom, color)?;
            }
        }
        Ok(())
    }

    fn paint_children(&self, renderer: &mut Renderer) -> Result<(), SurfaceError> {
        for child in &self.children {
            child.paint(renderer)?;
        }
        Ok(())
    }

    /// The surface has no scissor, so children are painted freely and the
    /// spill is undone: AND with a mask that is opaque only over `client`,
    /// then OR back what was on screen outside it.
    fn paint_children_clipped(
        &self,
        renderer: &mut Renderer,
        client: Rectangle,
    ) -> Result<(), SurfaceError> {
        let mut saved = renderer.surface_mut().snapshot()?;
        let mut allowed = PixelImage::new(saved.width(), saved.height());
        if !client.is_empty() {
            saved.fill_rect(client.x, client.y, client.right(), client.bottom(), 0);
            allowed.fill_rect(
                client.x,
                client.y,
                client.right(),
                client.bottom(),
                OPAQUE_MASK,
            );
        }

        self.paint_children(renderer)?;

        let s = renderer.surface_mut();
        s.draw_image(&allowed, 0, 0, CompositeOp::And)?;
        s.draw_image(&saved, 0, 0, CompositeOp::Or)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(name: &str, w: i32, h: i32) -> Element {
        let mut e = Element::panel(name);
        e.min_size = Size::new(w, h);
        e
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut root = Element::panel("root");
        root.insert(Element::panel("a")).unwrap();
        assert_eq!(
            root.insert(Element::panel("a")).unwrap_err(),
            UiError::DuplicateName("a".into())
        );
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn remove_reindexes_siblings() {
        let mut root = Element::panel("root");
        for n in ["a", "b", "c"] {
            root.insert(Element::panel(n)).unwrap();
        }
        assert!(root.remove("a").is_some());
        assert_eq!(root.position_of("c"), Some(1));
        assert_eq!(root.get("c").map(|e| e.name()), Some("c"));
        assert!(root.remove("a").is_none());
    }

    #[test]
    fn find_walks_the_subtree() {
        let mut root = Element::panel("root");
        let mut inner = Element::panel("inner");
        inner.insert(Element::label("deep", "x")).unwrap();
        root.insert(inner).unwrap();
        assert!(root.get("deep").is_none());
        assert_eq!(root.find("deep").map(|e| e.name()), Some("deep"));
    }

    #[test]
    fn typed_lookup_distinguishes_missing_from_wrong_kind() {
        let mut root = Element::panel("root");
        root.insert(Element::panel("box")).unwrap();
        assert_eq!(
            root.label_ref("nope").unwrap_err(),
            UiError::NotFound("nope".into())
        );
        assert!(matches!(
            root.label_ref("box"),
            Err(UiError::WrongKind {
                expected: "label",
                found: "panel",
                ..
            })
        ));
        assert!(matches!(
            root.list_view_mut("box"),
            Err(UiError::WrongKind { .. })
        ));
    }

    #[test]
    fn frame_adds_on_both_sides() {
        let mut e = boxed("e", 10, 5);
        e.margin = Spacing::new(1, 2);
        e.border = Spacing::uniform(1);
        e.padding = Spacing::new(3, 0);
        assert_eq!(e.measure(100, 100), Size::new(10 + 2 * 5, 5 + 2 * 3));
        assert_eq!(e.layout().content, Size::new(10, 5));
    }

    #[test]
    fn measure_is_idempotent() {
        let mut root = Element::panel("root");
        root.expand_x = true;
        for i in 0..5 {
            root.insert(boxed(&format!("c{i}"), 30, 10 + i)).unwrap();
        }
        let first = root.measure(100, 80);
        let snapshot = root.clone();
        assert_eq!(root.measure(100, 80), first);
        assert_eq!(root, snapshot);
    }

    #[test]
    fn overwide_child_sits_alone() {
        let mut root = Element::panel("root");
        root.insert(boxed("a", 20, 5)).unwrap();
        root.insert(boxed("wide", 150, 5)).unwrap();
        root.insert(boxed("b", 20, 5)).unwrap();
        root.arrange(0, 0, 100, 100);
        let y = |n: &str| root.get(n).map(|e| e.layout().abs.y);
        assert_eq!(y("a"), Some(0));
        assert_eq!(y("wide"), Some(5));
        assert_eq!(y("b"), Some(10));
        assert_eq!(root.layout().content, Size::new(150, 15));
    }

    #[test]
    fn line_break_and_expand_start_rows() {
        let mut root = Element::panel("root");
        root.insert(boxed("a", 10, 5)).unwrap();
        let mut b = boxed("b", 10, 5);
        b.line_break = true;
        root.insert(b).unwrap();
        let mut c = boxed("c", 10, 5);
        c.expand_x = true;
        root.insert(c).unwrap();
        root.insert(boxed("d", 10, 5)).unwrap();
        root.arrange(0, 0, 50, 100);
        let pos = |n: &str| root.get(n).map(|e| e.layout().abs);
        assert_eq!(pos("b"), Some(Position::new(0, 5)));
        assert_eq!(pos("c"), Some(Position::new(0, 10)));
        assert_eq!(pos("d"), Some(Position::new(0, 15)));
        assert_eq!(root.get("c").map(|e| e.layout().frame.width), Some(50));
    }

    #[test]
    fn centered_rows_align_independently() {
        let mut root = Element::panel("root");
        root.expand_x = true;
        root.alignment = Anchors::CENTER_TOP;
        root.insert(boxed("a", 40, 5)).unwrap();
        let mut b = boxed("b", 20, 5);
        b.line_break = true;
        root.insert(b).unwrap();
        root.arrange(0, 0, 100, 100);
        assert_eq!(root.get("a").map(|e| e.layout().abs.x), Some(30));
        assert_eq!(root.get("b").map(|e| e.layout().abs.x), Some(40));
    }

    #[test]
    fn children_offset_by_margin_border_and_padding() {
        let mut root = Element::panel("root");
        root.margin = Spacing::uniform(2);
        root.border = Spacing::uniform(1);
        root.padding = Spacing::new(3, 4);
        root.insert(boxed("a", 5, 5)).unwrap();
        root.arrange(10, 20, 100, 100);
        assert_eq!(
            root.get("a").map(|e| e.layout().abs),
            Some(Position::new(10 + 2 + 1 + 3, 20 + 2 + 1 + 4))
        );
    }
}
