use std::{io, result::Result as StdResult};

use thiserror::Error;

use crate::kind::ContainerKind;

/// Result type for fallible trellis operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors from operations that can genuinely fail. The frame loop itself
/// never returns these; see [`Diagnostic`] for host mistakes.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    #[error("config: {0}")]
    /// Configuration could not be parsed or is invalid.
    Config(String),
    #[error("io: {0}")]
    /// Reading a file failed.
    Io(String),
    #[error("logging: {0}")]
    /// A log subscriber could not be installed.
    Logging(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

/// A host-program mistake detected and recovered from during a frame. These
/// are logged and recorded on the session, never returned as errors.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Diagnostic {
    /// A close call arrived while no containers at all were open.
    #[error(
        "Unexpected call to {}(\"{name}\") - no {}s (or any other containers at all) started!",
        .kind.end_call(),
        .kind.display_name()
    )]
    NothingOpen {
        /// Kind named by the close call.
        kind: ContainerKind,
        /// Name passed to the close call.
        name: String,
    },

    /// A close call matched nothing on the stack.
    #[error(
        "Unexpected call to {}(\"{name}\") - no {} named '{name}' started! Maybe it's a typo?",
        .kind.end_call(),
        .kind.display_name()
    )]
    UnmatchedClose {
        /// Kind named by the close call.
        kind: ContainerKind,
        /// Name passed to the close call.
        name: String,
        /// Kind of the container on top of the stack.
        expected_kind: ContainerKind,
        /// Name of the container on top of the stack.
        expected_name: String,
    },

    /// A close call matched a container with others still open inside it.
    #[error("{}(\"{name}\"); called too early!", .kind.end_call())]
    PrematureClose {
        /// Kind named by the close call.
        kind: ContainerKind,
        /// Name passed to the close call.
        name: String,
        /// Containers that had to be force-closed first, innermost first.
        still_open: Vec<(ContainerKind, String)>,
    },

    /// A container was still open when the frame was drawn.
    #[error(
        "\"{name}\" ( a {} ) not closed before drawing! - make sure to call {}(\"{name}\")!",
        .kind.display_name(),
        .kind.end_call()
    )]
    UnclosedAtFrameEnd {
        /// Kind of the unclosed container.
        kind: ContainerKind,
        /// Name of the unclosed container.
        name: String,
    },

    /// The backend ran out of room for pending items and was restarted.
    #[error(
        "Too many interface items have been created without drawing/clearing them! Are you forgetting to call 'process_events' and 'draw_interface'?"
    )]
    CapacityExceeded,

    /// An interface call arrived before the backend was started this cycle.
    #[error("Interface function called before 'process_events' - make sure to call this first!")]
    NotStarted,
}

impl Diagnostic {
    /// Does this diagnostic count toward the end-of-frame error banner?
    pub fn sets_error_flag(&self) -> bool {
        !matches!(self, Self::CapacityExceeded | Self::NotStarted)
    }

    /// Log the diagnostic, plus any follow-up lines that go with it.
    pub(crate) fn emit(&self) {
        tracing::warn!(target: "interface", "{self}");
        match self {
            Self::UnmatchedClose {
                expected_kind,
                expected_name,
                ..
            } => {
                tracing::warn!(
                    target: "interface",
                    "    We were expecting a {} named \"{expected_name}\" instead.",
                    expected_kind.display_name()
                );
            }
            Self::PrematureClose { still_open, .. } => {
                tracing::warn!(target: "interface", "Make sure to call these first:");
                for (kind, name) in still_open {
                    tracing::warn!(target: "interface", "    {}(\"{name}\");", kind.end_call());
                }
            }
            Self::CapacityExceeded => {
                tracing::warn!(
                    target: "interface",
                    "The interface has now been cleared, to stop the program from crashing."
                );
            }
            _ => {}
        }
    }
}
