//! Matrix extents: compile-time or runtime row/column counts.
//!
//! A dense matrix has two extents (row count and column count). Each is
//! carried independently as either a [`Const`], where the count lives
//! in the type and the holder is zero-sized, or a [`Dyn`], where the
//! count lives in a single `usize` field. Storage types compose two
//! extent holders and pay for exactly the dimensions that are not known
//! at compile time.

use std::fmt;

/// One logical dimension of a dense matrix.
///
/// Implemented by [`Const`] (compile-time count, zero-sized) and [`Dyn`]
/// (runtime count, one `usize`). Extents are plain value holders: reads
/// never fail and have no side effects, and writes to a compile-time
/// extent are no-ops that debug-assert the value is unchanged.
///
/// Extents are `usize`, so the non-negativity preconditions of the
/// storage layer are discharged by the type.
pub trait Extent:
    Copy + fmt::Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// The compile-time count, or `None` for runtime extents.
    const FIXED: Option<usize>;

    /// Build an extent holding `value`.
    ///
    /// For [`Const`] this debug-asserts `value` matches the compile-time
    /// count; the caller is expected to have validated the shape.
    fn from_value(value: usize) -> Self;

    /// The current count. Side-effect free, never fails.
    fn value(&self) -> usize;

    /// Replace the count.
    ///
    /// No-op for [`Const`], debug-asserting `value` is unchanged.
    fn set(&mut self, value: usize);
}

/// A compile-time extent. Zero-sized: occupies no space in a composite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

impl<const N: usize> Extent for Const<N> {
    const FIXED: Option<usize> = Some(N);

    fn from_value(value: usize) -> Self {
        debug_assert_eq!(value, N, "constant extent constructed with value {value}, expected {N}");
        Self
    }

    fn value(&self) -> usize {
        N
    }

    fn set(&mut self, value: usize) {
        debug_assert_eq!(value, N, "constant extent set to {value}, expected {N}");
    }
}

impl<const N: usize> fmt::Display for Const<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{N}")
    }
}

/// A runtime extent. Holds the count in a single `usize`, defaulting to 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dyn(pub usize);

impl Extent for Dyn {
    const FIXED: Option<usize> = None;

    fn from_value(value: usize) -> Self {
        Self(value)
    }

    fn value(&self) -> usize {
        self.0
    }

    fn set(&mut self, value: usize) {
        self.0 = value;
    }
}

impl fmt::Display for Dyn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
