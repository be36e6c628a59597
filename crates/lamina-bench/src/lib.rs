//! Benchmark profiles and fixtures for the Lamina storage layer.
//!
//! Provides the storage aliases and reference shapes the benches share,
//! so benchmark bodies measure the operation under test, not the setup.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lamina_core::Dyn;
use lamina_dense::HeapStorage;

/// Heap storage of f32 elements, SIMD-aligned, fully runtime-shaped.
pub type BenchStorage = HeapStorage<f32, 16, Dyn, Dyn>;

/// Reference shape: a 64x64 tile (16KB of f32).
pub const TILE: (usize, usize) = (64, 64);

/// Reference shape: a 1000x1000 working matrix (~4MB of f32).
pub const WORKING_SET: (usize, usize) = (1000, 1000);

/// Reference shape: a skinny 100000x4 design matrix.
pub const SKINNY: (usize, usize) = (100_000, 4);

/// All reference shapes with display labels, for parameterized benches.
pub fn reference_shapes() -> Vec<(&'static str, (usize, usize))> {
    vec![
        ("tile_64x64", TILE),
        ("working_1000x1000", WORKING_SET),
        ("skinny_100000x4", SKINNY),
    ]
}
