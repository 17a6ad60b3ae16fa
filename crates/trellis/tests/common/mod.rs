//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use trellis::{
    CloseOutcome, ContainerKind, Session,
    backend::test::{CallLog, RecordingBackend},
    geom::Rect,
};

/// A session over a fresh recording backend.
pub fn session() -> (Arc<Mutex<CallLog>>, Session<RecordingBackend>) {
    let (log, backend) = RecordingBackend::create();
    (log, Session::new(backend))
}

/// Open a container of any kind through its public call.
pub fn open(s: &mut Session<RecordingBackend>, kind: ContainerKind, name: &str) -> bool {
    match kind {
        ContainerKind::Panel => s.start_panel(name, Rect::new(0.0, 0.0, 200.0, 200.0)),
        ContainerKind::Inset => {
            s.start_inset(name, 40);
            true
        }
        ContainerKind::TreeNode => s.start_treenode(name),
        ContainerKind::Column => {
            s.enter_column();
            true
        }
        ContainerKind::Popup => {
            s.open_popup(name);
            s.start_popup(name)
        }
    }
}

/// Close a container of any kind through its public call.
pub fn close(s: &mut Session<RecordingBackend>, kind: ContainerKind, name: &str) -> CloseOutcome {
    match kind {
        ContainerKind::Panel => s.end_panel(name),
        ContainerKind::Inset => s.end_inset(name),
        ContainerKind::TreeNode => s.end_treenode(name),
        ContainerKind::Column => s.leave_column(),
        ContainerKind::Popup => s.end_popup(name),
    }
}

/// The name a container of this kind is opened under.
pub fn name_for(kind: ContainerKind, name: &str) -> String {
    if kind == ContainerKind::Column {
        String::new()
    } else {
        name.to_string()
    }
}
