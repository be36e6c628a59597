//! The element-type marker for dense buffers.

use std::fmt;

/// Marker for types that dense storage may hold.
///
/// Storage buffers hand out raw pointers into possibly-uninitialized
/// memory and free them without running element destructors, so elements
/// must be trivially copyable with no drop glue. `Copy` guarantees both.
///
/// Blanket-implemented; user element types (e.g. fixed-point wrappers,
/// `f16` newtypes) qualify automatically as long as they are `Copy`.
pub trait Scalar: Copy + fmt::Debug + 'static {}

impl<T> Scalar for T where T: Copy + fmt::Debug + 'static {}
