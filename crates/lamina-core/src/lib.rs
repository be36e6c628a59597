//! Core vocabulary types for the Lamina dense-matrix workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the extent types that carry a matrix dimension either in the type
//! system ([`Const`]) or at runtime ([`Dyn`]), unified by the [`Extent`]
//! trait, plus the [`Scalar`] marker for element types that dense
//! buffers may hold.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod extent;
pub mod scalar;

pub use extent::{Const, Dyn, Extent};
pub use scalar::Scalar;
