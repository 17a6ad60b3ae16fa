//! The host-facing interface session.

use crate::{
    backend::InterfaceBackend,
    config::SessionConfig,
    error::Diagnostic,
    geom::Rect,
    guard,
    kind::ContainerKind,
    layout::{self, DEFAULT_LABEL_WIDTH},
    recovery::{self, CloseOutcome},
    report::FrameReport,
    stack::ContainerStack,
    style::{DrawOptions, Font},
};

/// An immediate-mode interface session.
///
/// A `Session` owns the backend and keeps track of which containers are open.
/// Host programs call `start_*` and `end_*` in matched pairs, and
/// `draw_interface` once per frame. Mismatched calls never fail. They are
/// logged under the `interface` target, recorded in [`Session::diagnostics`],
/// and repaired so the backend always sees a balanced sequence.
#[derive(Debug)]
pub struct Session<B: InterfaceBackend> {
    /// The rendering backend.
    backend: B,
    /// Open containers.
    stack: ContainerStack,
    /// Width of the label column in label + control helpers.
    label_width: i32,
    /// Diagnostics for the current frame.
    report: FrameReport,
    /// Options handed to the backend on draw.
    draw_options: DrawOptions,
}

impl<B: InterfaceBackend> Session<B> {
    /// Create a session with default settings.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            stack: ContainerStack::new(),
            label_width: DEFAULT_LABEL_WIDTH,
            report: FrameReport::default(),
            draw_options: DrawOptions::default(),
        }
    }

    /// Create a session and apply a configuration. A font that the backend
    /// doesn't know is logged and skipped.
    pub fn with_config(backend: B, config: &SessionConfig) -> Self {
        let mut s = Self::new(backend);
        s.label_width = config.label_width;
        s.draw_options = config.draw_options.clone();
        if let Some(name) = &config.font {
            s.set_font_named(name);
        }
        if let Some(size) = config.font_size {
            s.set_font_size(size);
        }
        s
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Open containers, outermost first.
    pub fn stack(&self) -> &ContainerStack {
        &self.stack
    }

    /// Width of the label column in label + control helpers.
    pub fn label_width(&self) -> i32 {
        self.label_width
    }

    /// Have host mistakes been detected since the last draw?
    pub fn errors_occurred(&self) -> bool {
        self.report.errors_occurred()
    }

    /// Diagnostics recorded since the last draw, oldest first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.report.diagnostics()
    }

    /// Options handed to the backend on draw.
    pub fn draw_options(&self) -> &DrawOptions {
        &self.draw_options
    }

    /// Replace the options handed to the backend on draw.
    pub fn set_draw_options(&mut self, options: DrawOptions) {
        self.draw_options = options;
    }

    /// Start the backend for a new processing cycle.
    pub fn begin_frame(&mut self) {
        self.backend.start();
    }

    /// Run the pre-call check.
    fn check(&mut self) {
        guard::sanity_check(&mut self.backend, &mut self.report);
    }

    /// Record an opened container and refresh the layout. The layout is
    /// refreshed even when nothing opened.
    fn push(&mut self, opened: bool, kind: ContainerKind, name: &str) {
        if opened {
            self.stack.push(kind, name);
            tracing::trace!(target: "interface", "opened {kind} \"{name}\"");
        }
        layout::update_layout(&self.stack, &mut self.backend);
    }

    /// Route a close request through recovery.
    fn pop(&mut self, kind: ContainerKind, name: &str) -> CloseOutcome {
        recovery::close_container(
            &mut self.stack,
            &mut self.backend,
            &mut self.report,
            kind,
            name,
        )
    }

    /// Open a panel. Returns false if the backend kept it closed, in which
    /// case the host must not call `end_panel`.
    pub fn start_panel(&mut self, name: &str, initial: Rect) -> bool {
        self.check();
        let open = self.backend.start_panel(name, initial);
        self.push(open, ContainerKind::Panel, name);
        open
    }

    /// Close a panel.
    pub fn end_panel(&mut self, name: &str) -> CloseOutcome {
        self.check();
        self.pop(ContainerKind::Panel, name)
    }

    /// Open a popup, if it has been triggered with [`Session::open_popup`].
    /// Popups lay their contents out on a single line.
    pub fn start_popup(&mut self, name: &str) -> bool {
        self.check();
        let open = self.backend.start_popup(name);
        self.push(open, ContainerKind::Popup, name);
        if open {
            self.single_line_layout();
        }
        open
    }

    /// Close a popup.
    pub fn end_popup(&mut self, name: &str) -> CloseOutcome {
        self.check();
        self.pop(ContainerKind::Popup, name)
    }

    /// Trigger a popup.
    pub fn open_popup(&mut self, name: &str) {
        self.check();
        self.backend.open_popup(name);
    }

    /// Open an inset of the given height. Insets always open.
    pub fn start_inset(&mut self, name: &str, height: i32) {
        self.check();
        self.set_layout_height(height);
        self.backend.start_inset(name);
        self.push(true, ContainerKind::Inset, name);
    }

    /// Close an inset.
    pub fn end_inset(&mut self, name: &str) -> CloseOutcome {
        self.check();
        self.pop(ContainerKind::Inset, name)
    }

    /// Open a tree node. Returns false if the node is collapsed.
    pub fn start_treenode(&mut self, name: &str) -> bool {
        self.check();
        let open = self.backend.start_treenode(name);
        self.push(open, ContainerKind::TreeNode, name);
        open
    }

    /// Close a tree node.
    pub fn end_treenode(&mut self, name: &str) -> CloseOutcome {
        self.check();
        self.pop(ContainerKind::TreeNode, name)
    }

    /// Open an anonymous column in the current row.
    pub fn enter_column(&mut self) {
        self.check();
        self.backend.start_column();
        self.push(true, ContainerKind::Column, "");
    }

    /// Close the innermost column.
    pub fn leave_column(&mut self) -> CloseOutcome {
        self.check();
        self.pop(ContainerKind::Column, "")
    }

    /// One auto-width column spanning the container.
    pub fn reset_layout(&mut self) {
        self.check();
        layout::reset(&mut self.stack, &mut self.backend);
    }

    /// Pack subsequent items onto one line.
    pub fn single_line_layout(&mut self) {
        self.check();
        layout::single_line(&mut self.stack, &mut self.backend);
    }

    /// Clear the columns, ready for `add_column` calls.
    pub fn start_custom_layout(&mut self) {
        self.check();
        layout::start_custom(&mut self.stack, &mut self.backend);
    }

    /// Append a column of fixed width. `-1` fills the remaining space.
    pub fn add_column(&mut self, width: i32) {
        self.check();
        layout::add_column(&mut self.stack, &mut self.backend, width);
    }

    /// Append a column sized as a fraction of the container's width.
    pub fn add_column_relative(&mut self, fraction: f64) {
        self.check();
        layout::add_column_relative(&mut self.stack, &mut self.backend, fraction);
    }

    /// Set the row height of the active container; `0` is automatic.
    pub fn set_layout_height(&mut self, height: i32) {
        self.check();
        layout::set_height(&mut self.stack, &mut self.backend, height);
    }

    /// A collapsible header. Returns true while expanded.
    pub fn header(&mut self, label: &str) -> bool {
        self.check();
        let open = self.backend.header(label);
        layout::update_layout(&self.stack, &mut self.backend);
        open
    }

    /// A single-line label.
    pub fn label(&mut self, text: &str) {
        self.check();
        self.backend.label(text);
    }

    /// Wrapped paragraph text.
    pub fn paragraph(&mut self, text: &str) {
        self.check();
        self.backend.text(text);
    }

    /// Run `control` inside an anonymous two-column row, after a label.
    fn labelled<T>(&mut self, label: &str, control: impl FnOnce(&mut Self) -> T) -> T {
        self.check();
        self.enter_column();
        layout::two_column(&mut self.stack, &mut self.backend, self.label_width);
        self.backend.label(label);
        let res = control(self);
        self.leave_column();
        res
    }

    /// A button. Returns true when clicked.
    pub fn button(&mut self, text: &str) -> bool {
        self.check();
        self.backend.button(text)
    }

    /// A labelled button.
    pub fn labelled_button(&mut self, label: &str, text: &str) -> bool {
        self.labelled(label, |s| s.button(text))
    }

    /// A checkbox. Returns the new value.
    pub fn checkbox(&mut self, text: &str, value: bool) -> bool {
        self.check();
        self.backend.checkbox(text, value)
    }

    /// A labelled checkbox.
    pub fn labelled_checkbox(&mut self, label: &str, text: &str, value: bool) -> bool {
        self.labelled(label, |s| s.checkbox(text, value))
    }

    /// A slider. Returns the new value.
    pub fn slider(&mut self, value: f32, min: f32, max: f32) -> f32 {
        self.check();
        self.backend.slider(value, min, max)
    }

    /// A labelled slider.
    pub fn labelled_slider(&mut self, label: &str, value: f32, min: f32, max: f32) -> f32 {
        self.labelled(label, |s| s.slider(value, min, max))
    }

    /// A numeric entry box. Returns the new value.
    pub fn number_box(&mut self, value: f32, step: f32) -> f32 {
        self.check();
        self.backend.number(value, step)
    }

    /// A labelled numeric entry box.
    pub fn labelled_number_box(&mut self, label: &str, value: f32, step: f32) -> f32 {
        self.labelled(label, |s| s.number_box(value, step))
    }

    /// A text entry box. Returns the new contents.
    pub fn text_box(&mut self, value: &str) -> String {
        self.check();
        self.backend.text_box(value)
    }

    /// A labelled text entry box.
    pub fn labelled_text_box(&mut self, label: &str, value: &str) -> String {
        self.labelled(label, |s| s.text_box(value))
    }

    /// Did the last element change value?
    pub fn last_element_changed(&self) -> bool {
        self.backend.changed()
    }

    /// Was the last element confirmed?
    pub fn last_element_confirmed(&self) -> bool {
        self.backend.confirmed()
    }

    /// Set the interface font.
    pub fn set_font(&mut self, font: &Font) {
        self.backend.set_font(font);
    }

    /// Set the interface font by name. Unknown fonts are logged and ignored.
    pub fn set_font_named(&mut self, name: &str) {
        match self.backend.font_named(name) {
            Some(font) => self.backend.set_font(&font),
            None => tracing::warn!(target: "interface", "No font named \"{name}\" is loaded"),
        }
    }

    /// Set the interface font size.
    pub fn set_font_size(&mut self, size: i32) {
        self.backend.set_font_size(size);
    }

    /// Set the label column width used by label + control helpers.
    pub fn set_label_width(&mut self, width: i32) {
        self.label_width = width;
    }

    /// Finish the frame: close anything left open, report errors, and draw.
    pub fn draw_interface(&mut self) {
        guard::finalize(
            &mut self.stack,
            &mut self.backend,
            &mut self.report,
            &self.draw_options,
        );
    }
}
