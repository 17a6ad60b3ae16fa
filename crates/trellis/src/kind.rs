use std::fmt;

use crate::backend::InterfaceBackend;

/// The kinds of container a host program can open.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ContainerKind {
    /// A top-level, movable window.
    Panel,
    /// A scrollable region nested inside another container.
    Inset,
    /// A collapsible tree node.
    TreeNode,
    /// An anonymous column inside a row layout.
    Column,
    /// A floating popup, opened with `open_popup`.
    Popup,
}

/// Fixed per-kind facts used for dispatch and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    /// Prefix of the host call that closes this kind.
    pub verb_prefix: &'static str,
    /// Name used in diagnostics.
    pub display_name: &'static str,
}

impl ContainerKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Panel,
        Self::Inset,
        Self::TreeNode,
        Self::Column,
        Self::Popup,
    ];

    /// Look up the fixed facts for this kind.
    pub const fn info(self) -> KindInfo {
        match self {
            Self::Panel => KindInfo {
                verb_prefix: "end_",
                display_name: "panel",
            },
            Self::Inset => KindInfo {
                verb_prefix: "end_",
                display_name: "inset",
            },
            Self::TreeNode => KindInfo {
                verb_prefix: "end_",
                display_name: "treenode",
            },
            Self::Column => KindInfo {
                verb_prefix: "leave_",
                display_name: "column",
            },
            Self::Popup => KindInfo {
                verb_prefix: "end_",
                display_name: "popup",
            },
        }
    }

    /// The name used for this kind in diagnostics.
    pub const fn display_name(self) -> &'static str {
        self.info().display_name
    }

    /// The host call that closes this kind, e.g. `end_panel` or `leave_column`.
    pub fn end_call(self) -> String {
        let info = self.info();
        format!("{}{}", info.verb_prefix, info.display_name)
    }

    /// Close the innermost open backend container of this kind.
    pub(crate) fn close(self, backend: &mut dyn InterfaceBackend) {
        match self {
            Self::Panel => backend.end_panel(),
            Self::Inset => backend.end_inset(),
            Self::TreeNode => backend.end_treenode(),
            Self::Column => backend.end_column(),
            Self::Popup => backend.end_popup(),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
