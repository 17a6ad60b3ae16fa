//! Closing containers, and recovering when the close doesn't match the
//! innermost open container.

use crate::{
    backend::InterfaceBackend,
    error::Diagnostic,
    kind::ContainerKind,
    report::FrameReport,
    stack::{ContainerRecord, ContainerStack},
};

/// What a close request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The request matched the innermost container, which is now closed.
    Closed,
    /// Nothing was open. The request was ignored.
    NothingOpen,
    /// No open container matched. The request was ignored.
    Unmatched,
    /// The request matched an outer container. Everything from the innermost
    /// container down to and including the match was closed, in this order.
    Unwound {
        /// The closed records, innermost first. The last is the match.
        closed: Vec<ContainerRecord>,
    },
}

/// Close the container `(kind, name)`.
///
/// Stack discipline is restored whatever the host did: a premature close
/// unwinds the containers opened inside the target, and a close with no
/// target leaves the stack untouched. No layout pass runs afterwards, so the
/// previous layout stays in effect until the next push or layout edit.
pub fn close_container(
    stack: &mut ContainerStack,
    backend: &mut dyn InterfaceBackend,
    report: &mut FrameReport,
    kind: ContainerKind,
    name: &str,
) -> CloseOutcome {
    let Some(top) = stack.top() else {
        report.report(Diagnostic::NothingOpen {
            kind,
            name: name.into(),
        });
        return CloseOutcome::NothingOpen;
    };

    if top.matches(kind, name) {
        kind.close(backend);
        stack.pop_top();
        tracing::trace!(target: "interface", "closed {kind} \"{name}\"");
        return CloseOutcome::Closed;
    }

    let Some(target) = stack.find_from_top(kind, name) else {
        report.report(Diagnostic::UnmatchedClose {
            kind,
            name: name.into(),
            expected_kind: top.kind,
            expected_name: top.name.clone(),
        });
        return CloseOutcome::Unmatched;
    };

    let still_open = stack
        .iter()
        .skip(target + 1)
        .rev()
        .map(|r| (r.kind, r.name.clone()))
        .collect();
    report.report(Diagnostic::PrematureClose {
        kind,
        name: name.into(),
        still_open,
    });

    CloseOutcome::Unwound {
        closed: unwind_to(stack, backend, target),
    }
}

/// Close and pop records until the stack holds exactly `len` entries.
/// Returns the popped records, innermost first.
fn unwind_to(
    stack: &mut ContainerStack,
    backend: &mut dyn InterfaceBackend,
    len: usize,
) -> Vec<ContainerRecord> {
    let mut closed = Vec::with_capacity(stack.len().saturating_sub(len));
    while stack.len() > len {
        let Some(record) = stack.pop_top() else {
            break;
        };
        record.kind.close(backend);
        closed.push(record);
    }
    closed
}
