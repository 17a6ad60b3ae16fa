use crate::error::Diagnostic;

/// Collects the diagnostics raised during the current frame.
#[derive(Debug, Default, Clone)]
pub struct FrameReport {
    /// Set by any diagnostic that counts toward the error banner.
    errors_occurred: bool,
    /// Everything reported since the last draw.
    diagnostics: Vec<Diagnostic>,
}

impl FrameReport {
    /// Log a diagnostic and record it against this frame.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.emit();
        if diagnostic.sets_error_flag() {
            self.errors_occurred = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Have any host mistakes been detected since the last draw?
    pub fn errors_occurred(&self) -> bool {
        self.errors_occurred
    }

    /// Diagnostics recorded since the last draw, oldest first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Forget everything recorded for this frame.
    pub(crate) fn clear(&mut self) {
        self.errors_occurred = false;
        self.diagnostics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ContainerKind;

    #[test]
    fn flag_follows_diagnostic() {
        let mut r = FrameReport::default();
        r.report(Diagnostic::NotStarted);
        assert!(!r.errors_occurred());
        assert_eq!(r.diagnostics().len(), 1);

        r.report(Diagnostic::UnclosedAtFrameEnd {
            kind: ContainerKind::Panel,
            name: "p".into(),
        });
        assert!(r.errors_occurred());

        r.clear();
        assert!(!r.errors_occurred());
        assert!(r.diagnostics().is_empty());
    }
}
