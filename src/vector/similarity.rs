//! Vector Kernels
//!
//! Dot product, Euclidean norm and normalization over `f32` slices.

const LANES: usize = 4;

/// Inner product of two equal-length slices.
///
/// Accumulates four independent lanes so the compiler can vectorize.
#[inline]
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

    let lhs = a.chunks_exact(LANES);
    let rhs = b.chunks_exact(LANES);
    let tail: f32 = lhs
        .remainder()
        .iter()
        .zip(rhs.remainder())
        .map(|(x, y)| x * y)
        .sum();

    let mut lanes = [0.0f32; LANES];
    for (x, y) in lhs.zip(rhs) {
        for ((acc, xi), yi) in lanes.iter_mut().zip(x).zip(y) {
            *acc += xi * yi;
        }
    }

    lanes.iter().sum::<f32>() + tail
}

/// Euclidean norm, `sqrt(sum(x^2))`
#[inline]
pub fn magnitude(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scale `v` by `1 / norm` into a new vector.
///
/// A zero norm yields an all-zero vector instead of NaNs.
pub fn normalized(v: &[f32], norm: f32) -> Vec<f32> {
    if norm > 0.0 {
        v.iter().map(|x| x / norm).collect()
    } else {
        vec![0.0; v.len()]
    }
}
