//! Fixed-capacity storage: the buffer lives in place, capacity `N` is a
//! compile-time constant.
//!
//! The extents may still be runtime values (a matrix declared with
//! bounded maximum dimensions), so the logical element count can be
//! smaller than `N`; prefix-aware copy and swap keep operands with
//! different current shapes consistent.

use std::fmt;
use std::mem;

use lamina_core::{Extent, Scalar};

use crate::align::{Align, Boundary};
use crate::array::AlignedArray;
use crate::storage::Storage;

/// Storage with compile-time capacity `N > 0`, in place, `ALIGN`-byte
/// aligned.
///
/// `resize` and `conservative_resize` are identical here: capacity never
/// changes, only the extents are relabeled. Requesting
/// `rows * cols > N` is a caller bug (debug-asserted).
///
/// When `R` and `C` are both [`lamina_core::Const`], the struct is
/// exactly its buffer: the extent holders occupy no bytes.
pub struct FixedStorage<T, const N: usize, const ALIGN: usize, R: Extent, C: Extent>
where
    Align<ALIGN>: Boundary,
{
    buf: AlignedArray<T, N, ALIGN>,
    rows: R,
    cols: C,
}

impl<T: Scalar, const N: usize, const ALIGN: usize, R: Extent, C: Extent>
    Storage<T> for FixedStorage<T, N, ALIGN, R, C>
where
    Align<ALIGN>: Boundary,
{
    fn from_dims(size: usize, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(size, rows * cols, "size {size} != {rows} x {cols}");
        debug_assert!(size <= N, "requested {size} elements, fixed capacity is {N}");
        Self {
            buf: AlignedArray::new(),
            rows: R::from_value(rows),
            cols: C::from_value(cols),
        }
    }

    fn rows(&self) -> usize {
        self.rows.value()
    }

    fn cols(&self) -> usize {
        self.cols.value()
    }

    fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    fn resize(&mut self, size: usize, rows: usize, cols: usize) {
        debug_assert_eq!(size, rows * cols, "size {size} != {rows} x {cols}");
        debug_assert!(size <= N, "requested {size} elements, fixed capacity is {N}");
        self.rows.set(rows);
        self.cols.set(cols);
    }

    fn conservative_resize(&mut self, size: usize, rows: usize, cols: usize) {
        // Capacity is fixed, so preserving contents is free.
        self.resize(size, rows, cols);
    }

    fn swap(&mut self, other: &mut Self) {
        let a_len = self.len();
        let b_len = other.len();
        AlignedArray::swap_prefix(&mut self.buf, a_len, &mut other.buf, b_len);
        mem::swap(&mut self.rows, &mut other.rows);
        mem::swap(&mut self.cols, &mut other.cols);
    }
}

impl<T: Scalar, const N: usize, const ALIGN: usize, R: Extent, C: Extent> Default
    for FixedStorage<T, N, ALIGN, R, C>
where
    Align<ALIGN>: Boundary,
{
    fn default() -> Self {
        Self {
            buf: AlignedArray::new(),
            rows: R::default(),
            cols: C::default(),
        }
    }
}

impl<T: Scalar, const N: usize, const ALIGN: usize, R: Extent, C: Extent> Clone
    for FixedStorage<T, N, ALIGN, R, C>
where
    Align<ALIGN>: Boundary,
{
    fn clone(&self) -> Self {
        let mut buf = AlignedArray::new();
        AlignedArray::copy_prefix(&self.buf, self.rows.value() * self.cols.value(), &mut buf);
        Self {
            buf,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T, const N: usize, const ALIGN: usize, R: Extent, C: Extent> fmt::Debug
    for FixedStorage<T, N, ALIGN, R, C>
where
    Align<ALIGN>: Boundary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedStorage")
            .field("capacity", &N)
            .field("align", &ALIGN)
            .field("rows", &self.rows.value())
            .field("cols", &self.cols.value())
            .finish()
    }
}
