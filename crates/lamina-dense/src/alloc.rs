//! Aligned allocation glue over `std::alloc`.
//!
//! Heap-backed storage acquires, regrows, and releases its buffer
//! through these three functions. They add element-count arithmetic and
//! SIMD alignment on top of the global allocator and nothing else:
//! allocation failure goes straight to
//! [`std::alloc::handle_alloc_error`], and mismatched release arguments
//! are undefined behavior, exactly as with the raw allocator.
//!
//! A zero-byte request never touches the allocator and is represented by
//! a null pointer throughout.

use std::alloc::{handle_alloc_error, Layout};
use std::mem;
use std::ptr;

/// Layout for `count` elements of `T` on an `align`-byte boundary.
///
/// The boundary is widened to the element's own alignment when that is
/// stricter.
fn element_layout<T>(count: usize, align: usize) -> Layout {
    let bytes = count
        .checked_mul(mem::size_of::<T>())
        .expect("element count overflows the address space");
    Layout::from_size_align(bytes, align.max(mem::align_of::<T>()))
        .expect("invalid element layout")
}

/// Allocate an uninitialized buffer of `count` elements of `T`.
///
/// Returns null when the total byte size is zero. Aborts via
/// [`handle_alloc_error`] on allocation failure, so the returned pointer
/// is otherwise never null.
pub(crate) fn alloc_elements<T>(count: usize, align: usize) -> *mut T {
    let layout = element_layout::<T>(count, align);
    if layout.size() == 0 {
        return ptr::null_mut();
    }
    // SAFETY: layout has non-zero size.
    let raw = unsafe { std::alloc::alloc(layout) };
    if raw.is_null() {
        handle_alloc_error(layout);
    }
    #[cfg(feature = "alloc-stats")]
    crate::stats::record_alloc(layout.size());
    raw.cast()
}

/// Grow or shrink a buffer to `new_count` elements, preserving the
/// leading `min(old_count, new_count)` elements.
///
/// Accepts a null `ptr` (with `old_count * size_of::<T>() == 0`) and
/// degenerates to a plain allocation; a zero `new_count` degenerates to
/// a release and returns null.
///
/// # Safety
///
/// A non-null `ptr` must have come from [`alloc_elements`] or
/// [`realloc_elements`] with exactly `old_count` elements and the same
/// `align`, and must not be used after the call.
pub(crate) unsafe fn realloc_elements<T>(
    ptr: *mut T,
    new_count: usize,
    old_count: usize,
    align: usize,
) -> *mut T {
    if ptr.is_null() {
        return alloc_elements(new_count, align);
    }
    if new_count == old_count {
        return ptr;
    }
    let old_layout = element_layout::<T>(old_count, align);
    let new_layout = element_layout::<T>(new_count, align);
    if new_layout.size() == 0 {
        // SAFETY: per contract, ptr was allocated with old_layout.
        unsafe { dealloc_elements(ptr, old_count, align) };
        return ptr::null_mut();
    }
    // SAFETY: per contract, ptr was allocated with old_layout; the new
    // size is non-zero and fits the address space (checked by
    // element_layout).
    let raw = unsafe { std::alloc::realloc(ptr.cast(), old_layout, new_layout.size()) };
    if raw.is_null() {
        handle_alloc_error(new_layout);
    }
    #[cfg(feature = "alloc-stats")]
    crate::stats::record_realloc(old_layout.size(), new_layout.size());
    raw.cast()
}

/// Release a buffer of `count` elements of `T`. No-op for null.
///
/// # Safety
///
/// A non-null `ptr` must have come from [`alloc_elements`] or
/// [`realloc_elements`] with exactly `count` elements and the same
/// `align`, and must not be used after the call.
pub(crate) unsafe fn dealloc_elements<T>(ptr: *mut T, count: usize, align: usize) {
    if ptr.is_null() {
        return;
    }
    let layout = element_layout::<T>(count, align);
    // SAFETY: per contract, ptr was allocated with this layout.
    unsafe { std::alloc::dealloc(ptr.cast(), layout) };
    #[cfg(feature = "alloc-stats")]
    crate::stats::record_dealloc(layout.size());
}
