//! Runtime-capacity storage: an exactly-sized, exclusively-owned heap
//! buffer.
//!
//! The buffer is allocated through the aligned-allocation glue in
//! `alloc.rs` and holds exactly `rows * cols` elements at all times,
//! with no over-allocation and no growth factor. That exact-capacity
//! invariant is what lets `Drop` reconstruct the allocation size from
//! the extents alone.

use std::fmt;
use std::mem;
use std::ptr;

use lamina_core::{Extent, Scalar};

use crate::align::{Align, Boundary};
use crate::alloc;
use crate::storage::Storage;

/// Storage with runtime-determined capacity on an `ALIGN`-byte boundary.
///
/// `R` and `C` may each be [`lamina_core::Dyn`] or a compile-time
/// [`lamina_core::Const`] (a matrix with one dynamic and one fixed
/// dimension); at least one must be dynamic for the element count to be
/// runtime-determined.
///
/// `ALIGN` is normally [`heap_alignment`](crate::config::heap_alignment);
/// pass 1 to suppress alignment. Elements are uninitialized until
/// written through [`Storage::as_mut_ptr`]; [`Clone`] reads the logical
/// `len()` elements and requires them to have been initialized.
pub struct HeapStorage<T, const ALIGN: usize, R: Extent, C: Extent>
where
    Align<ALIGN>: Boundary,
{
    ptr: *mut T,
    rows: R,
    cols: C,
}

// SAFETY: the buffer is exclusively owned; no interior sharing.
unsafe impl<T: Send, const ALIGN: usize, R: Extent, C: Extent> Send
    for HeapStorage<T, ALIGN, R, C>
where
    Align<ALIGN>: Boundary,
{
}

// SAFETY: shared access only reads through &self; no interior mutability.
unsafe impl<T: Sync, const ALIGN: usize, R: Extent, C: Extent> Sync
    for HeapStorage<T, ALIGN, R, C>
where
    Align<ALIGN>: Boundary,
{
}

impl<T: Scalar, const ALIGN: usize, R: Extent, C: Extent> Storage<T>
    for HeapStorage<T, ALIGN, R, C>
where
    Align<ALIGN>: Boundary,
{
    fn from_dims(size: usize, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(size, rows * cols, "size {size} != {rows} x {cols}");
        Self {
            ptr: alloc::alloc_elements(size, ALIGN),
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
        self.ptr
    }

    fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr
    }

    fn resize(&mut self, size: usize, rows: usize, cols: usize) {
        debug_assert_eq!(size, rows * cols, "size {size} != {rows} x {cols}");
        let old = self.len();
        // Only the total count drives reallocation: a same-count reshape
        // (2x3 -> 3x2) reuses the buffer untouched.
        if size != old {
            // SAFETY: invariant: ptr holds exactly `old` elements at ALIGN.
            unsafe { alloc::dealloc_elements(self.ptr, old, ALIGN) };
            self.ptr = ptr::null_mut();
            if size > 0 {
                self.ptr = alloc::alloc_elements(size, ALIGN);
            }
        }
        self.rows.set(rows);
        self.cols.set(cols);
    }

    fn conservative_resize(&mut self, size: usize, rows: usize, cols: usize) {
        debug_assert_eq!(size, rows * cols, "size {size} != {rows} x {cols}");
        let old = self.len();
        if size != old {
            // SAFETY: invariant: ptr holds exactly `old` elements at
            // ALIGN; on failure the allocator aborts, so ptr is never
            // left dangling.
            self.ptr = unsafe { alloc::realloc_elements(self.ptr, size, old, ALIGN) };
        }
        self.rows.set(rows);
        self.cols.set(cols);
    }

    fn swap(&mut self, other: &mut Self) {
        // Pointer and extent exchange; no element moves, no allocation.
        mem::swap(self, other);
    }
}

impl<T: Scalar, const ALIGN: usize, R: Extent, C: Extent> Default
    for HeapStorage<T, ALIGN, R, C>
where
    Align<ALIGN>: Boundary,
{
    /// Null buffer with default extents (0 for dynamic ones).
    fn default() -> Self {
        Self {
            ptr: ptr::null_mut(),
            rows: R::default(),
            cols: C::default(),
        }
    }
}

impl<T: Scalar, const ALIGN: usize, R: Extent, C: Extent> Clone
    for HeapStorage<T, ALIGN, R, C>
where
    Align<ALIGN>: Boundary,
{
    fn clone(&self) -> Self {
        let len = self.len();
        let ptr = alloc::alloc_elements(len, ALIGN);
        if len > 0 {
            // SAFETY: both buffers hold `len` elements; the fresh
            // allocation cannot overlap the source.
            unsafe { ptr::copy_nonoverlapping(self.ptr, ptr, len) };
        }
        Self {
            ptr,
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let old = self.len();
        let len = source.len();
        if old != len {
            // SAFETY: invariant: ptr holds exactly `old` elements at ALIGN.
            unsafe { alloc::dealloc_elements(self.ptr, old, ALIGN) };
            self.ptr = ptr::null_mut();
            self.ptr = alloc::alloc_elements(len, ALIGN);
        }
        if len > 0 {
            // SAFETY: both buffers hold `len` elements and cannot alias
            // (`&mut self` and `&source` are disjoint by the borrow rules).
            unsafe { ptr::copy_nonoverlapping(source.ptr, self.ptr, len) };
        }
        self.rows = source.rows;
        self.cols = source.cols;
    }
}

impl<T, const ALIGN: usize, R: Extent, C: Extent> Drop for HeapStorage<T, ALIGN, R, C>
where
    Align<ALIGN>: Boundary,
{
    fn drop(&mut self) {
        // SAFETY: invariant: the buffer was allocated with exactly
        // rows * cols elements at ALIGN.
        unsafe {
            alloc::dealloc_elements(self.ptr, self.rows.value() * self.cols.value(), ALIGN)
        };
    }
}

impl<T, const ALIGN: usize, R: Extent, C: Extent> fmt::Debug for HeapStorage<T, ALIGN, R, C>
where
    Align<ALIGN>: Boundary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapStorage")
            .field("rows", &self.rows.value())
            .field("cols", &self.cols.value())
            .field("align", &ALIGN)
            .field("ptr", &self.ptr)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lamina_core::{Const, Dyn};

    type DynStorage = HeapStorage<f64, 16, Dyn, Dyn>;

    fn filled(size: usize, rows: usize, cols: usize) -> DynStorage {
        let mut s = DynStorage::from_dims(size, rows, cols);
        for i in 0..size {
            // SAFETY: i < size, within the allocation.
            unsafe { s.as_mut_ptr().add(i).write(i as f64) };
        }
        s
    }

    fn read(s: &DynStorage, i: usize) -> f64 {
        // SAFETY: caller keeps i within the initialized prefix.
        unsafe { s.as_ptr().add(i).read() }
    }

    #[test]
    fn default_is_null_and_empty() {
        let s = DynStorage::default();
        assert!(s.as_ptr().is_null());
        assert_eq!((s.rows(), s.cols()), (0, 0));
    }

    #[test]
    fn construction_allocates_exactly_and_aligned() {
        let s = DynStorage::from_dims(6, 2, 3);
        assert!(!s.as_ptr().is_null());
        assert_eq!(s.as_ptr() as usize % 16, 0);
        assert_eq!((s.rows(), s.cols(), s.len()), (2, 3, 6));
    }

    #[test]
    fn zero_size_construction_is_null() {
        let s = DynStorage::from_dims(0, 0, 5);
        assert!(s.as_ptr().is_null());
        assert_eq!((s.rows(), s.cols()), (0, 5));
    }

    #[test]
    fn resize_with_same_count_reuses_the_buffer() {
        let mut s = filled(6, 2, 3);
        let p = s.as_ptr();
        // Same total, different shape: no reallocation by design.
        s.resize(6, 3, 2);
        assert_eq!(s.as_ptr(), p);
        assert_eq!((s.rows(), s.cols()), (3, 2));
        // Repeating the identical call is also a no-op.
        s.resize(6, 3, 2);
        assert_eq!(s.as_ptr(), p);
    }

    #[test]
    fn resize_to_a_new_count_reallocates() {
        let mut s = filled(4, 2, 2);
        s.resize(9, 3, 3);
        assert_eq!(s.len(), 9);
        assert!(!s.as_ptr().is_null());
    }

    #[test]
    fn resize_to_zero_releases_the_buffer() {
        let mut s = filled(4, 2, 2);
        s.resize(0, 0, 0);
        assert!(s.as_ptr().is_null());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn conservative_resize_preserves_the_prefix() {
        let mut s = filled(6, 2, 3);
        s.conservative_resize(4, 2, 2);
        assert_eq!((s.rows(), s.cols()), (2, 2));
        for i in 0..4 {
            assert_eq!(read(&s, i), i as f64);
        }
    }

    #[test]
    fn conservative_resize_grows_without_losing_data() {
        let mut s = filled(4, 2, 2);
        s.conservative_resize(8, 2, 4);
        for i in 0..4 {
            assert_eq!(read(&s, i), i as f64);
        }
        // The tail is uninitialized but must be writable.
        for i in 4..8 {
            // SAFETY: i < 8, within the new allocation.
            unsafe { s.as_mut_ptr().add(i).write(0.0) };
        }
    }

    #[test]
    fn conservative_resize_with_same_count_is_an_extent_update() {
        let mut s = filled(6, 2, 3);
        let p = s.as_ptr();
        s.conservative_resize(6, 1, 6);
        assert_eq!(s.as_ptr(), p);
        assert_eq!((s.rows(), s.cols()), (1, 6));
    }

    #[test]
    fn conservative_resize_from_null_allocates() {
        let mut s = DynStorage::default();
        s.conservative_resize(4, 4, 1);
        assert!(!s.as_ptr().is_null());
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn swap_exchanges_pointers_without_copying() {
        let mut a = filled(6, 2, 3);
        let mut b = filled(2, 1, 2);
        let (pa, pb) = (a.as_ptr(), b.as_ptr());
        a.swap(&mut b);
        assert_eq!(a.as_ptr(), pb);
        assert_eq!(b.as_ptr(), pa);
        assert_eq!((a.rows(), a.cols()), (1, 2));
        assert_eq!((b.rows(), b.cols()), (2, 3));
        // Round trip restores buffer identity.
        a.swap(&mut b);
        assert_eq!(a.as_ptr(), pa);
        assert_eq!(b.as_ptr(), pb);
    }

    #[test]
    fn take_leaves_the_source_empty() {
        let mut a = filled(6, 2, 3);
        let pa = a.as_ptr();
        let b = mem::take(&mut a);
        assert!(a.as_ptr().is_null());
        assert_eq!((a.rows(), a.cols()), (0, 0));
        assert_eq!(b.as_ptr(), pa);
        assert_eq!((b.rows(), b.cols()), (2, 3));
        assert_eq!(read(&b, 5), 5.0);
    }

    #[test]
    fn clone_is_deep_and_independent() {
        let a = filled(4, 2, 2);
        let mut b = a.clone();
        assert_ne!(a.as_ptr(), b.as_ptr());
        // SAFETY: index 0 is initialized in both.
        unsafe { b.as_mut_ptr().write(99.0) };
        assert_eq!(read(&a, 0), 0.0);
        assert_eq!((b.rows(), b.cols()), (2, 2));
    }

    #[test]
    fn clone_from_reuses_a_same_size_buffer() {
        let a = filled(4, 2, 2);
        let mut b = filled(4, 4, 1);
        let pb = b.as_ptr();
        b.clone_from(&a);
        assert_eq!(b.as_ptr(), pb);
        assert_eq!((b.rows(), b.cols()), (2, 2));
        for i in 0..4 {
            assert_eq!(read(&b, i), i as f64);
        }
    }

    #[test]
    fn mixed_fixed_and_dynamic_extents() {
        let mut s = HeapStorage::<f32, 16, Const<3>, Dyn>::from_dims(6, 3, 2);
        assert_eq!((s.rows(), s.cols()), (3, 2));
        s.resize(9, 3, 3);
        assert_eq!((s.rows(), s.cols(), s.len()), (3, 3, 9));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn extents_track_every_resize(
                shapes in proptest::collection::vec((0usize..32, 0usize..32), 1..12),
            ) {
                let mut s = DynStorage::default();
                for &(r, c) in &shapes {
                    s.resize(r * c, r, c);
                    prop_assert_eq!((s.rows(), s.cols()), (r, c));
                    prop_assert_eq!(s.len(), r * c);
                    prop_assert_eq!(s.as_ptr().is_null(), r * c == 0);
                }
            }

            #[test]
            fn conservative_chain_preserves_the_common_prefix(
                first in 1usize..64,
                second in 1usize..64,
            ) {
                let mut s = filled(first, 1, first);
                s.conservative_resize(second, 1, second);
                for i in 0..first.min(second) {
                    prop_assert_eq!(read(&s, i), i as f64);
                }
            }

            #[test]
            fn swap_is_an_involution(
                (r1, c1) in (0usize..8, 0usize..8),
                (r2, c2) in (0usize..8, 0usize..8),
            ) {
                let mut a = DynStorage::from_dims(r1 * c1, r1, c1);
                let mut b = DynStorage::from_dims(r2 * c2, r2, c2);
                let (pa, pb) = (a.as_ptr(), b.as_ptr());
                a.swap(&mut b);
                a.swap(&mut b);
                prop_assert_eq!(a.as_ptr(), pa);
                prop_assert_eq!(b.as_ptr(), pb);
                prop_assert_eq!((a.rows(), a.cols()), (r1, c1));
                prop_assert_eq!((b.rows(), b.cols()), (r2, c2));
            }
        }
    }
}
