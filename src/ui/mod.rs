//! Retained UI tree.
//!
//! Every frame runs a full layout pass (measure bottom-up, then position
//! top-down) before painting. There is no incremental reflow.

mod element;
mod label;
mod list_view;

pub use element::{Element, ElementKind, Layout};
pub use label::Label;
pub use list_view::{ListItem, ListState, ListView};
