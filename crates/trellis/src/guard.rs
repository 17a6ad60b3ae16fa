//! Pre-call checks and end-of-frame cleanup.

use crate::{
    backend::InterfaceBackend,
    error::Diagnostic,
    report::FrameReport,
    stack::ContainerStack,
    style::DrawOptions,
};

/// Logged once at draw time if any host mistakes were detected in the frame.
pub const ERROR_BANNER: &str = "=================Errors Occured in Interface!=================";

/// Make sure the backend is ready for another call.
///
/// A backend that was never started is started. A backend that has run out of
/// item capacity is restarted, which throws away everything pending in the
/// frame.
pub fn sanity_check(backend: &mut dyn InterfaceBackend, report: &mut FrameReport) {
    if !backend.is_started() {
        report.report(Diagnostic::NotStarted);
        backend.start();
    }
    if backend.is_capacity_limited() {
        report.report(Diagnostic::CapacityExceeded);
        backend.start();
    }
}

/// Close anything left open, report the frame's errors, and draw.
pub fn finalize(
    stack: &mut ContainerStack,
    backend: &mut dyn InterfaceBackend,
    report: &mut FrameReport,
    options: &DrawOptions,
) {
    sanity_check(backend, report);

    while let Some(record) = stack.pop_top() {
        report.report(Diagnostic::UnclosedAtFrameEnd {
            kind: record.kind,
            name: record.name,
        });
        record.kind.close(backend);
    }

    if report.errors_occurred() {
        tracing::warn!(target: "interface", "{ERROR_BANNER}");
    }
    report.clear();

    backend.draw(options);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        backend::test::{Call, RecordingBackend},
        kind::ContainerKind,
    };

    #[test]
    fn starts_unstarted_backend() {
        let (log, b) = RecordingBackend::create();
        let mut b = b.not_started();
        let mut r = FrameReport::default();
        sanity_check(&mut b, &mut r);
        assert_eq!(r.diagnostics(), &[Diagnostic::NotStarted]);
        assert!(!r.errors_occurred());
        assert_eq!(log.lock().unwrap().calls, vec![Call::Start]);

        sanity_check(&mut b, &mut r);
        assert_eq!(r.diagnostics().len(), 1);
    }

    #[test]
    fn restarts_full_backend() {
        let (log, b) = RecordingBackend::create();
        let mut b = b.with_capacity(2);
        b.label("one");
        b.label("two");
        let mut r = FrameReport::default();
        sanity_check(&mut b, &mut r);
        assert_eq!(r.diagnostics(), &[Diagnostic::CapacityExceeded]);
        assert_eq!(log.lock().unwrap().calls.last(), Some(&Call::Start));
        assert!(!b.is_capacity_limited());
    }

    #[test]
    fn finalize_drains_stack() {
        let (log, mut b) = RecordingBackend::create();
        let mut s = ContainerStack::new();
        s.push(ContainerKind::Panel, "p");
        s.push(ContainerKind::Popup, "pop");
        let mut r = FrameReport::default();
        finalize(&mut s, &mut b, &mut r, &DrawOptions::default());
        assert!(s.is_empty());
        assert!(!r.errors_occurred());
        assert_eq!(
            log.lock().unwrap().calls,
            vec![
                Call::EndPopup,
                Call::EndPanel,
                Call::Draw(DrawOptions::default())
            ]
        );
    }
}
