//! Shortest-path distances.

use serde::{Serialize, Serializer};

/// Length of a shortest path, or the absence of any path.
///
/// Variant order makes every finite distance compare below `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// Sum of edge weights along a shortest path.
    Finite(u64),
    /// No path exists.
    Unreachable,
}

impl Distance {
    /// The finite value, if any.
    pub fn finite(self) -> Option<u64> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Unreachable => None,
        }
    }

    /// Whether a path exists.
    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl From<Option<u64>> for Distance {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Unreachable, Self::Finite)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Unreachable => write!(f, "inf"),
        }
    }
}

/// Serialized as a number, or `null` when unreachable.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.finite().serialize(serializer)
    }
}
