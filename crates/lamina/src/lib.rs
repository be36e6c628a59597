//! Lamina: dense matrix storage with compile-time, bounded, and runtime
//! extents.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Lamina sub-crates. It provides the storage layer a dense
//! matrix or array type is built on: an element buffer plus logical
//! row/column extents, behaving identically whether those extents are
//! compile-time constants, bounded with runtime shape, or fully
//! runtime-determined.
//!
//! # Quick start
//!
//! ```rust
//! use lamina::prelude::*;
//!
//! // A 2x3 runtime-shaped buffer of f64, 16-byte aligned for SIMD.
//! let mut s = HeapStorage::<f64, 16, Dyn, Dyn>::from_dims(6, 2, 3);
//! assert_eq!((s.rows(), s.cols()), (2, 3));
//!
//! // The storage layer exposes raw memory; the matrix layer above it
//! // does the element accounting.
//! for i in 0..s.len() {
//!     unsafe { s.as_mut_ptr().add(i).write(i as f64) };
//! }
//!
//! // Keep the leading elements, drop the rest.
//! s.conservative_resize(4, 2, 2);
//! assert_eq!(unsafe { s.as_ptr().add(3).read() }, 3.0);
//!
//! // A 2x2 f32 matrix with everything known at compile time costs
//! // exactly its elements.
//! type Mat2 = FixedStorage<f32, 4, 16, Const<2>, Const<2>>;
//! assert_eq!(std::mem::size_of::<Mat2>(), std::mem::size_of::<[f32; 4]>());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lamina-core` | Extent types and the `Scalar` marker |
//! | [`dense`] | `lamina-dense` | Storage implementations, alignment, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Extent types and the element marker (`lamina-core`).
///
/// [`types::Const`] and [`types::Dyn`] carry a dimension in the type
/// system or at runtime; [`types::Scalar`] marks element types dense
/// buffers may hold.
pub use lamina_core as types;

/// Storage implementations and alignment machinery (`lamina-dense`).
///
/// The [`dense::Storage`] trait and its three implementations
/// ([`dense::FixedStorage`], [`dense::EmptyStorage`],
/// [`dense::HeapStorage`]), plus the compile-time configuration surface
/// in [`dense::config`].
pub use lamina_dense as dense;

pub mod prelude {
    //! The types almost every user needs, importable in one line.

    pub use lamina_core::{Const, Dyn, Extent, Scalar};
    pub use lamina_dense::{
        AlignedArray, EmptyStorage, FixedStorage, HeapStorage, Storage,
    };
}
