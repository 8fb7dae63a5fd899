//! Opaque allocation handles.
//!
//! A [`Handle`] stands in for a raw pointer. It is either *null*
//! (refers to nothing) or *valid* (names an allocation by [`AllocId`]
//! and carries its element count for bounds checking). Handles are
//! `Copy` on purpose: a caller can retain a stale copy past release,
//! exactly like a dangling pointer — and the arena's slot table is what
//! catches the copy, not the handle itself.

use std::fmt;
use std::marker::PhantomData;

use simheap_core::AllocId;

/// Internal handle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HandleState {
    /// Refers to nothing. Dereferencing is an error.
    Null,
    /// Refers to a live (or formerly live) allocation.
    Valid {
        /// The allocation this handle names.
        id: AllocId,
        /// Element count, fixed at allocation time.
        len: u32,
    },
}

/// An opaque reference to an allocation of `T` values.
///
/// Created by [`crate::ManualArena::allocate_scalar`] and
/// [`crate::ManualArena::allocate_array`], or null via [`Handle::null`].
/// The type parameter ties a handle to the element type of the arena
/// that issued it; the handle itself stores no `T`.
#[must_use]
pub struct Handle<T> {
    pub(crate) state: HandleState,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    /// A handle that refers to nothing.
    ///
    /// This is both the starting state of a never-assigned handle and
    /// the value a caller adopts after release.
    pub fn null() -> Self {
        Self {
            state: HandleState::Null,
            _marker: PhantomData,
        }
    }

    /// Create a valid handle for an allocation.
    pub(crate) fn valid(id: AllocId, len: u32) -> Self {
        Self {
            state: HandleState::Valid { id, len },
            _marker: PhantomData,
        }
    }

    /// Whether this handle refers to nothing.
    pub fn is_null(&self) -> bool {
        self.state == HandleState::Null
    }

    /// Element count of the allocation this handle names (0 for null).
    pub fn len(&self) -> usize {
        match self.state {
            HandleState::Null => 0,
            HandleState::Valid { len, .. } => len as usize,
        }
    }

    /// Whether the handle names no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The allocation ID, or `None` for a null handle.
    pub fn id(&self) -> Option<AllocId> {
        match self.state {
            HandleState::Null => None,
            HandleState::Valid { id, .. } => Some(id),
        }
    }
}

// Manual impls: the derives would bound `T`, but a handle stores no `T`.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<T> Eq for Handle<T> {}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").field("state", &self.state).finish()
    }
}

impl<T> fmt::Display for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            HandleState::Null => write!(f, "Handle(null)"),
            HandleState::Valid { id, len } => write!(f, "Handle(id={id}, len={len})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle_has_no_id_and_no_len() {
        let h: Handle<i64> = Handle::null();
        assert!(h.is_null());
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
        assert_eq!(h.id(), None);
    }

    #[test]
    fn valid_handle_carries_id_and_len() {
        let h: Handle<i64> = Handle::valid(AllocId(4), 3);
        assert!(!h.is_null());
        assert_eq!(h.len(), 3);
        assert_eq!(h.id(), Some(AllocId(4)));
    }

    #[test]
    fn handles_compare_by_state() {
        let a: Handle<char> = Handle::valid(AllocId(1), 1);
        let b: Handle<char> = Handle::valid(AllocId(1), 1);
        let n: Handle<char> = Handle::null();
        assert_eq!(a, b);
        assert_ne!(a, n);
        assert_eq!(n, Handle::null());
    }

    #[test]
    fn copies_share_state() {
        let a: Handle<i64> = Handle::valid(AllocId(2), 5);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(b.len(), 5);
    }

    #[test]
    fn display_formats_both_states() {
        let v: Handle<i64> = Handle::valid(AllocId(7), 2);
        let n: Handle<i64> = Handle::null();
        assert_eq!(v.to_string(), "Handle(id=7, len=2)");
        assert_eq!(n.to_string(), "Handle(null)");
    }
}
