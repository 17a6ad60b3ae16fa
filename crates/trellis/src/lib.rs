//! Trellis: container bookkeeping for immediate-mode interfaces.
//!
//! Trellis sits between a host program and an immediate-mode rendering
//! backend. It tracks the panels, insets, tree nodes, columns and popups the
//! host has open, drives the backend's row layout from the innermost one, and
//! repairs mismatched open/close sequences so that a mistake in the host
//! degrades to a logged warning rather than a corrupted frame.
//!
//! # Quick Start
//!
//! The main entry points are:
//! - [`Session`] - Owns the backend and the container stack
//! - [`InterfaceBackend`] - The trait a rendering backend implements
//! - [`SessionConfig`] - Settings loaded from TOML
//!
//! A frame looks like this:
//!
//! ```ignore
//! session.begin_frame();
//! if session.start_panel("Settings", Rect::new(10.0, 10.0, 200.0, 300.0)) {
//!     session.labelled_slider("Volume", volume, 0.0, 1.0);
//!     session.end_panel("Settings");
//! }
//! session.draw_interface();
//! ```

#![warn(missing_docs)]

/// Backend trait and implementations.
pub mod backend;
/// Session configuration.
pub mod config;
/// Error and diagnostic types.
pub mod error;
/// Pre-call checks and frame finalization.
pub mod guard;
/// Container kinds.
pub mod kind;
/// Row layout derivation.
pub mod layout;
/// Log output.
pub mod logging;
/// Close handling and mismatch recovery.
pub mod recovery;
/// Per-frame diagnostic collection.
pub mod report;
/// The host-facing session.
pub mod session;
/// The open container stack.
pub mod stack;
/// Fonts and draw options.
pub mod style;

/// Geometry types used by the backend interface.
pub use trellis_geom as geom;

pub use backend::InterfaceBackend;
pub use config::SessionConfig;
pub use error::{Diagnostic, Error, Result};
pub use kind::ContainerKind;
pub use recovery::CloseOutcome;
pub use session::Session;
pub use stack::{ContainerRecord, ContainerStack};
