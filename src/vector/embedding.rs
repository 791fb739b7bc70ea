//! Embedding Vector
//!
//! Read-only view over one row of a model, or an owned copy of one.

use std::borrow::Cow;
use std::ops::Deref;

use super::similarity::{dot_product, magnitude, normalized};

/// An immutable embedding vector.
///
/// Rows handed out by [`Model::vector`](crate::Model::vector) borrow the
/// model's backing store; derived vectors (e.g. normalized ones) own
/// their components.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<'a> {
    components: Cow<'a, [f32]>,
}

impl<'a> Vector<'a> {
    /// Wrap a borrowed row
    pub fn borrowed(components: &'a [f32]) -> Self {
        Self {
            components: Cow::Borrowed(components),
        }
    }

    /// Wrap owned components
    pub fn owned(components: Vec<f32>) -> Vector<'static> {
        Vector {
            components: Cow::Owned(components),
        }
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Inner product with `other`.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors differ in length.
    pub fn dot(&self, other: &Vector<'_>) -> f32 {
        assert_eq!(
            self.len(),
            other.len(),
            "Vector dimensions must match: {} vs {}",
            self.len(),
            other.len()
        );
        dot_product(&self.components, &other.components)
    }

    /// Euclidean norm
    pub fn norm(&self) -> f32 {
        magnitude(&self.components)
    }

    /// Unit-length copy of this vector; a zero vector stays zero.
    pub fn normalized(&self) -> Vector<'static> {
        Vector::owned(normalized(&self.components, self.norm()))
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.components
    }

    /// Detach from the backing store
    pub fn into_owned(self) -> Vector<'static> {
        Vector::owned(self.components.into_owned())
    }
}

impl Deref for Vector<'_> {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_and_norm() {
        let raw = [3.0f32, 4.0];
        let a = Vector::borrowed(&raw);
        let b = Vector::owned(vec![1.0, 1.0]);
        assert!((a.dot(&b) - 7.0).abs() < 1e-6);
        assert!((a.norm() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalized_is_unit() {
        let v = Vector::owned(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((v.normalized().norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_borrowed_into_owned() {
        let raw = vec![0.5f32, -0.5];
        let owned = Vector::borrowed(&raw).into_owned();
        drop(raw);
        assert_eq!(owned.as_slice(), &[0.5, -0.5]);
    }

    #[test]
    #[should_panic(expected = "Vector dimensions must match")]
    fn test_dot_length_mismatch_panics() {
        let a = Vector::owned(vec![1.0, 2.0]);
        let b = Vector::owned(vec![1.0, 2.0, 3.0]);
        a.dot(&b);
    }
}
