#![forbid(unsafe_code)]

//! Error types.
//!
//! [`BoardError`] is the only error a caller ever sees, and only from
//! construction. [`MoveRejection`] explains why a move was turned into a
//! no-op; the widget itself never shows it to the user.

use std::fmt;

use crate::element::ItemPos;

/// Configuration that does not match the shape of the backing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// `fixed` has a different number of rows than there are containers, or
    /// a row whose length differs from its container.
    FixedShape {
        container: usize,
        expected: usize,
        found: usize,
    },
    /// More capacity entries than containers.
    LimitsShape { containers: usize, limits: usize },
    /// A validator registered for a container that does not exist.
    ValidatorsShape { containers: usize, container: usize },
    /// A container already holds more items than its limit allows.
    OverCapacity {
        container: usize,
        len: usize,
        limit: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedShape {
                container,
                expected,
                found,
            } => write!(
                f,
                "fixed flags for container {container} have {found} entries, expected {expected}"
            ),
            Self::LimitsShape { containers, limits } => {
                write!(f, "{limits} capacity limits given for {containers} containers")
            }
            Self::ValidatorsShape {
                containers,
                container,
            } => write!(
                f,
                "validator registered for container {container} but only {containers} exist"
            ),
            Self::OverCapacity {
                container,
                len,
                limit,
            } => write!(
                f,
                "container {container} starts with {len} items, over its limit of {limit}"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// Why the constraint checker refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The source item is flagged fixed.
    FixedItem { source: ItemPos },
    /// A cross-container move into a container already at its limit.
    AtCapacity { container: usize, limit: usize },
    /// The source position does not name an existing item.
    SourceOutOfRange { source: ItemPos },
    /// The destination container does not exist or the insertion index is
    /// past the end of the (post-removal) sequence.
    DestinationOutOfRange { destination: ItemPos },
}

impl MoveRejection {
    /// Stable short name used in log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FixedItem { .. } => "fixed_item",
            Self::AtCapacity { .. } => "at_capacity",
            Self::SourceOutOfRange { .. } => "source_out_of_range",
            Self::DestinationOutOfRange { .. } => "destination_out_of_range",
        }
    }
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedItem { source } => write!(f, "item at {source} is fixed"),
            Self::AtCapacity { container, limit } => {
                write!(f, "container {container} is full (limit {limit})")
            }
            Self::SourceOutOfRange { source } => write!(f, "no item at {source}"),
            Self::DestinationOutOfRange { destination } => {
                write!(f, "cannot insert at {destination}")
            }
        }
    }
}

impl std::error::Error for MoveRejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_error_messages() {
        let err = BoardError::FixedShape {
            container: 1,
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "fixed flags for container 1 have 2 entries, expected 3"
        );
        let err = BoardError::OverCapacity {
            container: 0,
            len: 4,
            limit: 2,
        };
        assert_eq!(
            err.to_string(),
            "container 0 starts with 4 items, over its limit of 2"
        );
    }

    #[test]
    fn rejection_names_are_stable() {
        let r = MoveRejection::AtCapacity {
            container: 2,
            limit: 1,
        };
        assert_eq!(r.as_str(), "at_capacity");
        assert_eq!(r.to_string(), "container 2 is full (limit 1)");
        let r = MoveRejection::FixedItem {
            source: ItemPos::new(0, 1),
        };
        assert_eq!(r.as_str(), "fixed_item");
        assert_eq!(r.to_string(), "item at (0, 1) is fixed");
    }
}
