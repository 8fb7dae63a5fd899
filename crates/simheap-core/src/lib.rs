//! Core types for the simheap simulated heap.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the allocation identifier and the error taxonomy shared by the rest
//! of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::AllocError;
pub use id::AllocId;
