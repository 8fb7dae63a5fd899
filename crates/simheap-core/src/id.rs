//! Strongly-typed allocation identifiers.

use std::fmt;

/// Identifies a single allocation within an arena.
///
/// Allocations are assigned sequential IDs in the order they are made.
/// IDs are never reused, even after the allocation is released — a
/// released ID stays in the arena's slot table so that stale handle
/// copies can be recognised and reported instead of resolving to
/// recycled storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AllocId(pub u32);

impl fmt::Display for AllocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AllocId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_raw_value() {
        assert_eq!(AllocId(7).to_string(), "7");
    }

    #[test]
    fn ordering_follows_allocation_order() {
        assert!(AllocId(1) < AllocId(2));
        assert_eq!(AllocId::from(3u32), AllocId(3));
    }
}
