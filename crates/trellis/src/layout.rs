//! Derives the backend row layout from the innermost open container.
//!
//! Every edit here is a no-op on an empty stack. A host that sets a layout
//! before opening anything gets nothing, rather than a fault.

use crate::{
    backend::InterfaceBackend,
    stack::{AUTO_WIDTH, ContainerRecord, ContainerStack},
};

/// Default width of the label column in label + control helpers.
pub const DEFAULT_LABEL_WIDTH: i32 = 60;

/// Send the innermost container's layout to the backend.
pub fn update_layout(stack: &ContainerStack, backend: &mut dyn InterfaceBackend) {
    if let Some(top) = stack.top() {
        backend.set_layout(&top.layout_widths, top.layout_height);
    }
}

/// Apply `f` to the innermost container and push the result to the backend.
/// Returns false if nothing is open.
fn edit(
    stack: &mut ContainerStack,
    backend: &mut dyn InterfaceBackend,
    f: impl FnOnce(&mut ContainerRecord),
) -> bool {
    let Some(top) = stack.top_mut() else {
        return false;
    };
    f(top);
    update_layout(stack, backend);
    true
}

/// One auto-width column spanning the container.
pub fn reset(stack: &mut ContainerStack, backend: &mut dyn InterfaceBackend) -> bool {
    edit(stack, backend, |r| r.layout_widths = vec![AUTO_WIDTH])
}

/// Pack items onto one line with automatic widths.
pub fn single_line(stack: &mut ContainerStack, backend: &mut dyn InterfaceBackend) -> bool {
    edit(stack, backend, |r| r.layout_widths.clear())
}

/// Clear the columns, ready for [`add_column`] calls.
pub fn start_custom(stack: &mut ContainerStack, backend: &mut dyn InterfaceBackend) -> bool {
    edit(stack, backend, |r| r.layout_widths.clear())
}

/// A fixed-width label column followed by a filling control column.
pub fn two_column(
    stack: &mut ContainerStack,
    backend: &mut dyn InterfaceBackend,
    label_width: i32,
) -> bool {
    edit(stack, backend, |r| {
        r.layout_widths = vec![label_width, AUTO_WIDTH];
    })
}

/// Append a column of the given width.
pub fn add_column(
    stack: &mut ContainerStack,
    backend: &mut dyn InterfaceBackend,
    width: i32,
) -> bool {
    edit(stack, backend, |r| r.layout_widths.push(width))
}

/// Append a column sized as a fraction of the active container's width.
pub fn add_column_relative(
    stack: &mut ContainerStack,
    backend: &mut dyn InterfaceBackend,
    fraction: f64,
) -> bool {
    if stack.is_empty() {
        return false;
    }
    let width = backend.container_size().fraction_of_width(fraction);
    add_column(stack, backend, width)
}

/// Set the row height; `0` is automatic.
pub fn set_height(
    stack: &mut ContainerStack,
    backend: &mut dyn InterfaceBackend,
    height: i32,
) -> bool {
    edit(stack, backend, |r| r.layout_height = height)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        backend::test::{Call, RecordingBackend},
        geom::Expanse,
        kind::ContainerKind,
    };

    #[test]
    fn empty_stack_is_inert() {
        let (log, mut b) = RecordingBackend::create();
        let mut s = ContainerStack::new();
        assert!(!reset(&mut s, &mut b));
        assert!(!single_line(&mut s, &mut b));
        assert!(!start_custom(&mut s, &mut b));
        assert!(!two_column(&mut s, &mut b, 60));
        assert!(!add_column(&mut s, &mut b, 10));
        assert!(!add_column_relative(&mut s, &mut b, 0.5));
        assert!(!set_height(&mut s, &mut b, 20));
        update_layout(&s, &mut b);
        assert!(s.is_empty());
        assert!(log.lock().unwrap().calls.is_empty());
    }

    #[test]
    fn edits_push_layout() {
        let (log, mut b) = RecordingBackend::create();
        let mut s = ContainerStack::new();
        s.push(ContainerKind::Panel, "p");

        start_custom(&mut s, &mut b);
        add_column(&mut s, &mut b, 100);
        set_height(&mut s, &mut b, 24);
        assert_eq!(s.top().unwrap().layout_widths, vec![100]);

        reset(&mut s, &mut b);
        single_line(&mut s, &mut b);

        assert_eq!(
            log.lock().unwrap().calls,
            vec![
                Call::SetLayout(vec![], 0),
                Call::SetLayout(vec![100], 0),
                Call::SetLayout(vec![100], 24),
                Call::SetLayout(vec![-1], 24),
                Call::SetLayout(vec![], 24),
            ]
        );
    }

    #[test]
    fn two_column_overrides_prior_layout() {
        let (_log, mut b) = RecordingBackend::create();
        let mut s = ContainerStack::new();
        s.push(ContainerKind::Column, "");
        add_column(&mut s, &mut b, 5);
        add_column(&mut s, &mut b, 7);
        two_column(&mut s, &mut b, DEFAULT_LABEL_WIDTH);
        assert_eq!(s.top().unwrap().layout_widths, vec![60, -1]);
    }

    #[test]
    fn relative_column_uses_container_width() {
        let (_log, b) = RecordingBackend::create();
        let mut b = b.with_container_size(Expanse::new(200, 50));
        let mut s = ContainerStack::new();
        s.push(ContainerKind::Panel, "p");
        start_custom(&mut s, &mut b);
        add_column_relative(&mut s, &mut b, 0.25);
        add_column_relative(&mut s, &mut b, 0.75);
        assert_eq!(s.top().unwrap().layout_widths, vec![50, 150]);
    }
}
