//! Type-level alignment boundaries.
//!
//! `repr(align)` takes a literal, so a computed alignment number (from
//! [`crate::config::fixed_alignment`]) cannot be applied to a type
//! directly. [`Boundary`] bridges the gap: it is implemented for
//! [`Align<BYTES>`] at each supported power of two and provides a
//! zero-sized anchor type carrying the matching `repr(align)`. Embedding
//! the anchor as a field forces the containing struct to that boundary
//! at no size cost.

/// Type-level alignment selector. `Align<16>` names a 16-byte boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Align<const BYTES: usize>;

mod sealed {
    pub trait Sealed {}
}

/// A supported alignment boundary.
///
/// Implemented for [`Align<BYTES>`] with `BYTES` in
/// {1, 2, 4, 8, 16, 32, 64, 128}; sealed, since each implementation
/// must carry a matching `repr(align)` anchor type.
pub trait Boundary: sealed::Sealed {
    /// The boundary in bytes.
    const BYTES: usize;

    /// Zero-sized type whose alignment is [`Self::BYTES`].
    type Anchor: Copy + Default + Send + Sync + 'static;
}

macro_rules! boundaries {
    ($(($bytes:literal, $anchor:ident)),* $(,)?) => {
        $(
            #[doc = concat!("Zero-sized anchor forcing ", stringify!($bytes), "-byte alignment.")]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            #[repr(align($bytes))]
            pub struct $anchor;

            impl sealed::Sealed for Align<$bytes> {}

            impl Boundary for Align<$bytes> {
                const BYTES: usize = $bytes;
                type Anchor = $anchor;
            }
        )*
    };
}

boundaries!(
    (1, Anchor1),
    (2, Anchor2),
    (4, Anchor4),
    (8, Anchor8),
    (16, Anchor16),
    (32, Anchor32),
    (64, Anchor64),
    (128, Anchor128),
);
