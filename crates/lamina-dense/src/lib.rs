//! Dense matrix storage for the Lamina workspace.
//!
//! This crate owns the raw element buffer and the logical row/column
//! extents underlying a dense matrix or array type. It behaves
//! identically whether the extents are compile-time constants, fixed
//! capacity with runtime shape, or fully runtime-determined, and it is
//! the only Lamina crate that may contain `unsafe` code (in non-test
//! code, confined to `alloc.rs` and `heap.rs`; every use carries a
//! `// SAFETY:` comment).
//!
//! # Architecture
//!
//! ```text
//! Storage (trait: rows/cols/as_ptr/resize/conservative_resize/swap)
//! ├── FixedStorage<T, N, ALIGN, R, C>   in-place AlignedArray, capacity N
//! ├── EmptyStorage<T, R, C>             no buffer, null pointer
//! └── HeapStorage<T, ALIGN, R, C>       exactly-sized owned heap buffer
//!     └── alloc (aligned allocate / reallocate / free over std::alloc)
//! ```
//!
//! The three implementations are selected by the enclosing matrix layer
//! from its size category: positive compile-time capacity, compile-time
//! zero, or runtime-determined. Extents (`lamina_core::Const` /
//! `lamina_core::Dyn`) cost zero bytes when compile-time, so a
//! fully-fixed storage is structurally just its buffer.
//!
//! # Contract style
//!
//! Shape preconditions (`size == rows * cols`, `size` within capacity)
//! are caller bugs, checked with `debug_assert!` and undefined in
//! release builds. Allocation failure goes to
//! [`std::alloc::handle_alloc_error`]; no error type exists at this
//! layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod align;
mod alloc;
pub mod array;
pub mod config;
pub mod empty;
pub mod fixed;
pub mod heap;
pub mod storage;

#[cfg(feature = "alloc-stats")]
pub mod stats;

// Public re-exports for the primary API surface.
pub use array::AlignedArray;
pub use empty::EmptyStorage;
pub use fixed::FixedStorage;
pub use heap::HeapStorage;
pub use storage::Storage;
