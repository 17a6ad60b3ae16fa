//! Property tests for container stack discipline.

mod common;

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use trellis::{CloseOutcome, ContainerKind};

    use crate::common::{close, name_for, open, session};

    /// A step in a generated host program.
    #[derive(Debug, Clone)]
    enum Step {
        /// Open a container.
        Open(ContainerKind, u8),
        /// Close the innermost container.
        Close,
    }

    fn kind() -> impl Strategy<Value = ContainerKind> {
        prop::sample::select(ContainerKind::ALL.to_vec())
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            (kind(), 0u8..4).prop_map(|(k, n)| Step::Open(k, n)),
            Just(Step::Close),
        ]
    }

    proptest! {
        #[test]
        fn balanced_sequences_leave_no_trace(steps in prop::collection::vec(step(), 0..40)) {
            let (log, mut s) = session();
            let mut model: Vec<(ContainerKind, String)> = vec![];
            let mut opened = 0;

            for st in steps {
                match st {
                    Step::Open(kind, n) => {
                        let name = name_for(kind, &format!("c{n}"));
                        prop_assert!(open(&mut s, kind, &name));
                        model.push((kind, name));
                        opened += 1;
                    }
                    Step::Close => {
                        if let Some((kind, name)) = model.pop() {
                            prop_assert_eq!(close(&mut s, kind, &name), CloseOutcome::Closed);
                        }
                    }
                }
                prop_assert_eq!(s.stack().len(), model.len());
            }
            while let Some((kind, name)) = model.pop() {
                prop_assert_eq!(close(&mut s, kind, &name), CloseOutcome::Closed);
            }

            prop_assert!(s.stack().is_empty());
            prop_assert!(s.diagnostics().is_empty());
            prop_assert!(!s.errors_occurred());
            prop_assert_eq!(log.lock().unwrap().closes().len(), opened);
        }

        #[test]
        fn unmatched_close_changes_nothing(
            opens in prop::collection::vec((kind(), 0u8..4), 0..12),
            target in prop::sample::select(vec![
                ContainerKind::Panel,
                ContainerKind::Inset,
                ContainerKind::TreeNode,
                ContainerKind::Popup,
            ]),
        ) {
            let (log, mut s) = session();
            for (kind, n) in &opens {
                open(&mut s, *kind, &name_for(*kind, &format!("c{n}")));
            }
            let before = s.stack().clone();
            let closes_before = log.lock().unwrap().closes().len();

            let out = close(&mut s, target, "not-open");
            let expected = if opens.is_empty() {
                CloseOutcome::NothingOpen
            } else {
                CloseOutcome::Unmatched
            };
            prop_assert_eq!(out, expected);
            prop_assert_eq!(s.stack(), &before);
            prop_assert_eq!(log.lock().unwrap().closes().len(), closes_before);
            prop_assert!(s.errors_occurred());
        }

        #[test]
        fn draw_always_drains(opens in prop::collection::vec((kind(), 0u8..4), 0..12)) {
            let (log, mut s) = session();
            for (kind, n) in &opens {
                open(&mut s, *kind, &name_for(*kind, &format!("c{n}")));
            }
            s.draw_interface();
            prop_assert!(s.stack().is_empty());
            prop_assert!(!s.errors_occurred());
            let log = log.lock().unwrap();
            prop_assert_eq!(log.closes().len(), opens.len());
            prop_assert_eq!(log.draws(), 1);
        }
    }
}
