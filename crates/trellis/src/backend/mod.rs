//! The rendering backend that trellis drives.


use std::fmt::Debug;

use crate::{
    geom::{Expanse, Rect},
    style::{DrawOptions, Font},
};

/// The trait implemented by immediate-mode rendering backends.
///
/// Trellis never renders anything itself. It keeps track of which containers
/// are open and forwards every call here. Close methods always act on the
/// innermost open container of their kind.
pub trait InterfaceBackend: Debug {
    /// Has the backend been started for the current processing cycle?
    fn is_started(&self) -> bool;
    /// (Re)initialize per-frame state, dropping any pending items.
    fn start(&mut self);
    /// Has the backend run out of room for pending items?
    fn is_capacity_limited(&self) -> bool;

    /// Open a panel. Returns false if the panel is closed or collapsed.
    fn start_panel(&mut self, name: &str, initial: Rect) -> bool;
    /// Close the innermost panel.
    fn end_panel(&mut self);
    /// Open a popup. Returns false unless the popup has been triggered.
    fn start_popup(&mut self, name: &str) -> bool;
    /// Close the innermost popup.
    fn end_popup(&mut self);
    /// Trigger a popup so that a later `start_popup` opens it.
    fn open_popup(&mut self, name: &str);
    /// Open an inset. Its height comes from the layout set just before.
    fn start_inset(&mut self, name: &str);
    /// Close the innermost inset.
    fn end_inset(&mut self);
    /// Open a tree node. Returns false if the node is collapsed.
    fn start_treenode(&mut self, name: &str) -> bool;
    /// Close the innermost tree node.
    fn end_treenode(&mut self);
    /// Open a column in the current row.
    fn start_column(&mut self);
    /// Close the innermost column.
    fn end_column(&mut self);

    /// Set the row layout of the active container. A width of `-1` fills the
    /// remaining space; an empty slice packs items on one line. A height of
    /// `0` means automatic.
    fn set_layout(&mut self, widths: &[i32], height: i32);
    /// Size of the active container.
    fn container_size(&self) -> Expanse;

    /// Set the interface font.
    fn set_font(&mut self, font: &Font);
    /// Look up a loaded font by name.
    fn font_named(&self, name: &str) -> Option<Font>;
    /// Set the interface font size.
    fn set_font_size(&mut self, size: i32);

    /// A collapsible header. Returns true while expanded.
    fn header(&mut self, label: &str) -> bool;
    /// A single-line label.
    fn label(&mut self, text: &str);
    /// Wrapped paragraph text.
    fn text(&mut self, text: &str);
    /// A button. Returns true when clicked.
    fn button(&mut self, text: &str) -> bool;
    /// A checkbox. Returns the new value.
    fn checkbox(&mut self, text: &str, value: bool) -> bool;
    /// A slider. Returns the new value.
    fn slider(&mut self, value: f32, min: f32, max: f32) -> f32;
    /// A numeric entry box. Returns the new value.
    fn number(&mut self, value: f32, step: f32) -> f32;
    /// A text entry box. Returns the new contents.
    fn text_box(&mut self, value: &str) -> String;
    /// Did the last element change value?
    fn changed(&self) -> bool;
    /// Was the last element confirmed, e.g. with enter?
    fn confirmed(&self) -> bool;

    /// Draw the finished frame.
    fn draw(&mut self, options: &DrawOptions);
}
