//! Simheap: a simulated heap that makes manual memory management teachable.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the simheap sub-crates. For most users, adding `simheap` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use simheap::prelude::*;
//!
//! let mut arena: ManualArena<i64> = ManualArena::new();
//!
//! // Allocate an array of three values and fill it.
//! let mut h = arena.allocate_array(3).unwrap();
//! for i in 0..3 {
//!     arena.write_at(&h, i, (i + 1) * 10).unwrap();
//! }
//! assert_eq!(arena.iter(&h).unwrap().collect::<Vec<_>>(), vec![10, 20, 30]);
//!
//! // Release, adopting the returned null handle.
//! h = arena.release(h).unwrap();
//!
//! // Misuse is a tagged error, not undefined behaviour.
//! assert_eq!(arena.read(&h), Err(AllocError::NullDereference));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `simheap-arena` | `ManualArena`, `Handle`, `ValueIter` |
//! | [`types`] | `simheap-core` | `AllocId`, `AllocError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena, handles, and traversal (`simheap-arena`).
pub use simheap_arena as arena;

/// Allocation IDs and the error taxonomy (`simheap-core`).
pub use simheap_core as types;

/// Common imports for typical simheap usage.
///
/// ```rust
/// use simheap::prelude::*;
/// ```
pub mod prelude {
    pub use simheap_arena::{Handle, ManualArena, ValueIter};
    pub use simheap_core::{AllocError, AllocId};
}
