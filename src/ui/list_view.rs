use log::debug;

use crate::error::UiError;
use crate::ui::element::{Element, ElementKind};
use crate::ui::label::Label;

/// Selection and scroll position of a list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    pub(crate) selected: Option<usize>,
    /// Pixels of the rows block hidden above the viewport. Never negative.
    pub(crate) scroll: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub label: Label,
    pub(crate) selected: bool,
}

impl ListItem {
    pub fn new(text: &str) -> Self {
        Self {
            label: Label::new(text),
            selected: false,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Typed handle over a list view element.
///
/// Items are full-width rows. Once the list holds anything exactly one item
/// is selected, and moving the selection wraps around at both ends.
pub struct ListView<'a> {
    element: &'a mut Element,
}

impl<'a> ListView<'a> {
    pub(crate) fn new(element: &'a mut Element) -> Self {
        Self { element }
    }

    fn state(&self) -> ListState {
        match self.element.kind() {
            ElementKind::ListView(state) => *state,
            _ => ListState::default(),
        }
    }

    fn set_state(&mut self, new: ListState) {
        if let ElementKind::ListView(state) = self.element.kind_mut() {
            *state = new;
        }
    }

    pub fn element(&self) -> &Element {
        &*self.element
    }

    pub fn element_mut(&mut self) -> &mut Element {
        &mut *self.element
    }

    pub fn items(&self) -> &[Element] {
        self.element.children()
    }

    pub fn len(&self) -> usize {
        self.element.len()
    }

    pub fn is_empty(&self) -> bool {
        self.element.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state().selected
    }

    pub fn selected_item(&self) -> Option<&Element> {
        self.selected_index().and_then(|i| self.element.child_at(i))
    }

    pub fn scroll_offset(&self) -> i32 {
        self.state().scroll
    }

    pub fn add_item(&mut self, name: &str, text: &str) -> Result<(), UiError> {
        self.element.insert(Element::list_item(name, text))?;
        if self.selected_index().is_none() {
            self.apply_selection(Some(0));
        }
        Ok(())
    }

    pub fn remove_item(&mut self, name: &str) -> Option<Element> {
        let at = self.element.position_of(name)?;
        let removed = self.element.remove(name)?;
        let len = self.len();
        let selected = match self.selected_index() {
            _ if len == 0 => None,
            Some(s) if s > at => Some(s - 1),
            Some(s) if s == at => Some(s.min(len - 1)),
            other => other,
        };
        self.apply_selection(selected);
        Some(removed)
    }

    pub fn clear_items(&mut self) {
        self.element.clear();
        self.set_state(ListState::default());
    }

    pub fn select(&mut self, index: usize) -> Result<(), UiError> {
        let len = self.len();
        if index >= len {
            return Err(UiError::IndexOutOfRange { index, len });
        }
        self.apply_selection(Some(index));
        Ok(())
    }

    pub fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let next = self.selected_index().map_or(0, |s| (s + 1) % len);
        self.apply_selection(Some(next));
    }

    pub fn select_prev(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let prev = self.selected_index().map_or(len - 1, |s| (s + len - 1) % len);
        self.apply_selection(Some(prev));
    }

    /// Nudges the scroll offset so the selected item is fully visible,
    /// based on the last layout pass. Rendering calls this again after
    /// layout, so a stale result here is corrected on the next frame.
    pub fn ensure_selected_visible(&mut self) {
        self.element.ensure_selected_visible();
    }

    fn apply_selection(&mut self, selected: Option<usize>) {
        for i in 0..self.element.len() {
            if let Some(ElementKind::ListItem(item)) =
                self.element.child_at_mut(i).map(|c| c.kind_mut())
            {
                item.selected = selected == Some(i);
            }
        }
        let mut state = self.state();
        state.selected = selected;
        self.set_state(state);
        self.ensure_selected_visible();
        debug!(
            "list {:?} selection {:?}, scroll {}",
            self.element.name(),
            selected,
            self.scroll_offset()
        );
    }
}
