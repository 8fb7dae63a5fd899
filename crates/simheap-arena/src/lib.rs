//! Manual allocation arena with checked opaque handles.
//!
//! [`ManualArena`] simulates a heap the way an introductory memory
//! management exercise uses one: allocate a value or an array, read and
//! write it through a handle, release it, and null the handle. The
//! difference is that every misuse that would be undefined behaviour
//! with raw pointers — null dereference, out-of-bounds access,
//! use-after-free, double-free — is a deterministic [`AllocError`]
//! instead of silent corruption.
//!
//! # Architecture
//!
//! ```text
//! ManualArena<T> (orchestrator)
//! ├── ValueStore<T>  (growable bump storage, never compacted)
//! ├── slot table     (AllocId → Slot { offset, len, freed })
//! └── Handle<T>      (opaque, Copy; Null or Valid { id, len })
//! ```
//!
//! # Lifecycle
//!
//! Each allocation moves through `Unallocated → Valid → Released`:
//!
//! ```
//! use simheap_arena::ManualArena;
//!
//! let mut arena: ManualArena<i64> = ManualArena::new();
//! let mut h = arena.allocate_array(3).unwrap();
//! arena.write_at(&h, 0, 10).unwrap();
//! assert_eq!(arena.read_at(&h, 0).unwrap(), 10);
//! h = arena.release(h).unwrap();
//! assert!(h.is_null());
//! ```
//!
//! Release returns a null handle for the caller to adopt; a retained
//! stale copy of the old handle is still caught, because the slot table
//! remembers that the allocation was freed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod handle;
pub mod iter;
mod store;

pub use arena::ManualArena;
pub use handle::Handle;
pub use iter::ValueIter;
pub use simheap_core::{AllocError, AllocId};
