//! Translation offsets and their spatial operators.
//!
//! Convention: spatial motion vectors are [angular; linear], so a pure
//! translation by `r` acts as
//!
//! ```text
//! X = |  I3    0 |
//!     | -[r]×  I3 |
//! ```

use crate::{Mat3, Mat4, Mat6, Scalar, Vec3};

/// Cross-product matrix: `[r]×` such that `[r]× w = r × w`.
#[inline]
pub fn skew<T: Scalar>(x: T, y: T, z: T) -> Mat3<T> {
    Mat3::new(
        T::zero(),
        -z.clone(),
        y.clone(),
        z,
        T::zero(),
        -x.clone(),
        -y,
        x,
        T::zero(),
    )
}

/// 6x6 spatial translation operator built from a skew matrix `rx = [r]×`.
pub fn spatial_translation_operator<T: Scalar>(rx: &Mat3<T>) -> Mat6<T> {
    let mut m = Mat6::identity();
    // Bottom-left: -[r]×
    m.fixed_view_mut::<3, 3>(3, 0).copy_from(&(-rx));
    m
}

/// 4x4 homogeneous translation by `(x, y, z)`, or by `(-x, -y, -z)` when
/// `inverse` is set.
pub fn homogeneous_translation<T: Scalar>(x: T, y: T, z: T, inverse: bool) -> Mat4<T> {
    let (x, y, z) = if inverse { (-x, -y, -z) } else { (x, y, z) };
    let mut m = Mat4::identity();
    m[(0, 3)] = x;
    m[(1, 3)] = y;
    m[(2, 3)] = z;
    m
}

/// A fixed translation offset together with its derived operators.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation<T = f64> {
    offset: Vec3<T>,
    skew: Mat3<T>,
    spatial: Mat6<T>,
}

impl<T: Scalar> Translation<T> {
    /// Create from the three offset components.
    pub fn from_scalars(x: T, y: T, z: T) -> Self {
        Self::from_vector(Vec3::new(x, y, z))
    }

    /// Create from an offset vector (or anything convertible, e.g. `[x, y, z]`).
    pub fn from_vector(offset: impl Into<Vec3<T>>) -> Self {
        let offset = offset.into();
        let skew = skew(offset.x.clone(), offset.y.clone(), offset.z.clone());
        let spatial = spatial_translation_operator(&skew);
        Self {
            offset,
            skew,
            spatial,
        }
    }

    /// The offset `(x, y, z)`.
    pub fn offset(&self) -> &Vec3<T> {
        &self.offset
    }

    /// `[r]×` for the offset.
    pub fn skew_matrix(&self) -> &Mat3<T> {
        &self.skew
    }

    /// The 6x6 spatial translation operator.
    pub fn spatial_operator(&self) -> &Mat6<T> {
        &self.spatial
    }

    /// The 4x4 homogeneous translation (negated offset when `inverse`).
    pub fn homogeneous(&self, inverse: bool) -> Mat4<T> {
        homogeneous_translation(
            self.offset.x.clone(),
            self.offset.y.clone(),
            self.offset.z.clone(),
            inverse,
        )
    }
}
