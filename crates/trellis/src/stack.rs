//! The stack of currently open containers.

use std::slice;

use crate::kind::ContainerKind;

/// Width value meaning "fill the remaining space".
pub const AUTO_WIDTH: i32 = -1;

/// One open container and its layout state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    /// What kind of container this is.
    pub kind: ContainerKind,
    /// Identity key. Columns are always anonymous.
    pub name: String,
    /// Column widths of the current row layout.
    pub layout_widths: Vec<i32>,
    /// Row height; `0` is automatic.
    pub layout_height: i32,
}

impl ContainerRecord {
    /// A record with the default single auto-width column.
    pub fn new(kind: ContainerKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            layout_widths: vec![AUTO_WIDTH],
            layout_height: 0,
        }
    }

    /// Does this record answer to a close request for `(kind, name)`?
    pub fn matches(&self, kind: ContainerKind, name: &str) -> bool {
        self.kind == kind && self.name == name
    }
}

/// Open containers, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStack {
    /// Stored records.
    records: Vec<ContainerRecord>,
}

impl ContainerStack {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record with default layout.
    pub fn push(&mut self, kind: ContainerKind, name: impl Into<String>) {
        self.records.push(ContainerRecord::new(kind, name));
    }

    /// Remove the innermost record.
    pub fn pop_top(&mut self) -> Option<ContainerRecord> {
        self.records.pop()
    }

    /// The innermost record.
    pub fn top(&self) -> Option<&ContainerRecord> {
        self.records.last()
    }

    /// The innermost record, for layout changes.
    pub fn top_mut(&mut self) -> Option<&mut ContainerRecord> {
        self.records.last_mut()
    }

    /// Index of the nearest record matching `(kind, name)`, scanning from the
    /// innermost outwards.
    pub fn find_from_top(&self, kind: ContainerKind, name: &str) -> Option<usize> {
        self.records.iter().rposition(|r| r.matches(kind, name))
    }

    /// Number of open containers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing is open.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records from outermost to innermost.
    pub fn iter(&self) -> slice::Iter<'_, ContainerRecord> {
        self.records.iter()
    }
}
