//! Error types for simulated-heap misuse.
//!
//! Every variant is a programmer-usage error, not an environmental
//! failure: none are transient, none are retried, and none have a
//! recovery path. The arena surfaces them at the point of misuse so
//! that what would be undefined behaviour with raw pointers becomes a
//! deterministic, testable refusal.

use std::error::Error;
use std::fmt;

use crate::id::AllocId;

/// Errors raised by arena operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// Array allocation requested with a non-positive size, or a size
    /// that does not fit in a handle's `u32` length field.
    InvalidSize {
        /// The size that was requested.
        requested: i64,
    },
    /// Read or write addressed an index outside `[0, len)`.
    IndexOutOfRange {
        /// The offending index.
        index: i64,
        /// Element count of the allocation.
        len: usize,
    },
    /// Read or write attempted through a handle whose allocation has
    /// been released.
    UseAfterFree {
        /// The released allocation.
        id: AllocId,
    },
    /// Release attempted on an already-released or null handle.
    DoubleFree {
        /// The allocation, or `None` when the handle was null.
        id: Option<AllocId>,
    },
    /// Read or write attempted through a null handle.
    NullDereference,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { requested } => {
                write!(f, "invalid allocation size: {requested} (must be at least 1)")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for allocation of {len} elements")
            }
            Self::UseAfterFree { id } => {
                write!(f, "use after free: allocation {id} has been released")
            }
            Self::DoubleFree { id: Some(id) } => {
                write!(f, "double free: allocation {id} was already released")
            }
            Self::DoubleFree { id: None } => {
                write!(f, "double free: release attempted through a null handle")
            }
            Self::NullDereference => {
                write!(f, "null handle dereferenced")
            }
        }
    }
}

impl Error for AllocError {}
