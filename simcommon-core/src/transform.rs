//! 3D transformation utilities

use crate::types::{Matrix4f, Point3f, Vector3f};
use serde::{Deserialize, Serialize};

/// A 3D transformation that can be applied to points and vectors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3f {
    pub matrix: Matrix4f,
}

impl Transform3f {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4f::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3f) -> Self {
        Self {
            matrix: Matrix4f::new_translation(&translation),
        }
    }

    /// Create a scaling transformation
    pub fn scaling(scale: Vector3f) -> Self {
        Self {
            matrix: Matrix4f::new_nonuniform_scaling(&scale),
        }
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3f) -> Point3f {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3f::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the transformation to a direction vector, ignoring translation
    pub fn transform_vector(&self, vector: &Vector3f) -> Vector3f {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// Get the rotation/scale part with the translation zeroed out,
    /// suitable for transforming normals
    pub fn without_translation(&self) -> Self {
        let mut matrix = self.matrix;
        matrix[(0, 3)] = 0.0;
        matrix[(1, 3)] = 0.0;
        matrix[(2, 3)] = 0.0;
        Self { matrix }
    }

    /// Compose this transformation with another
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform3f {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3f {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4f> for Transform3f {
    fn from(matrix: Matrix4f) -> Self {
        Self { matrix }
    }
}
