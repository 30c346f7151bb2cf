// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for tree operations.

use core::fmt;

use crate::node::RowKind;
use crate::path::FieldPath;
use crate::tree::RowPath;

/// Error returned by [`FieldTree`](crate::FieldTree) operations and
/// [`expand_node`](crate::expand_node).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerError {
    /// No row exists at the given row path.
    ///
    /// The empty row path names the root, which is not a row.
    NoSuchRow {
        /// The row path that was looked up.
        row: RowPath,
    },
    /// A leaf row was asked to expand.
    NotExpandable {
        /// Address of the leaf.
        address: FieldPath,
    },
    /// A branch row was activated; only leaf rows can be selected.
    NotALeaf {
        /// Kind of the activated row.
        kind: RowKind,
        /// Address of the activated row.
        address: FieldPath,
    },
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchRow { row } => write!(f, "no row at {:?}", row.as_slice()),
            Self::NotExpandable { address } => {
                write!(f, "field row `{address}` is a leaf and cannot be expanded")
            }
            Self::NotALeaf { kind, address } => {
                write!(f, "{kind} row `{address}` is not a selectable field")
            }
        }
    }
}

impl core::error::Error for PickerError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        let err = PickerError::NoSuchRow {
            row: RowPath::from_slice(&[0, 3]),
        };
        assert_eq!(err.to_string(), "no row at [0, 3]");

        let err = PickerError::NotExpandable {
            address: FieldPath::from("!A/Position"),
        };
        assert_eq!(
            err.to_string(),
            "field row `!A/Position` is a leaf and cannot be expanded"
        );

        let err = PickerError::NotALeaf {
            kind: RowKind::Component,
            address: FieldPath::from("!A/:Camera"),
        };
        assert_eq!(
            err.to_string(),
            "component row `!A/:Camera` is not a selectable field"
        );
    }
}
