//! Roll/pitch/yaw rotations and their spatial operators.
//!
//! The elementary rotations are coordinate transforms (they map vectors
//! expressed in the parent frame into the rotated frame), so `rot_z(θ)` is the
//! transpose of the textbook active rotation by `θ`. Angles are in radians.

use crate::{Mat3, Mat4, Mat6, Scalar, Vec3};

/// Coordinate rotation about the X axis.
pub fn rot_x<T: Scalar>(theta: T) -> Mat3<T> {
    let (s, c) = theta.sin_cos();
    Mat3::new(
        T::one(),
        T::zero(),
        T::zero(),
        T::zero(),
        c.clone(),
        s.clone(),
        T::zero(),
        -s,
        c,
    )
}

/// Coordinate rotation about the Y axis.
pub fn rot_y<T: Scalar>(theta: T) -> Mat3<T> {
    let (s, c) = theta.sin_cos();
    Mat3::new(
        c.clone(),
        T::zero(),
        -s.clone(),
        T::zero(),
        T::one(),
        T::zero(),
        s,
        T::zero(),
        c,
    )
}

/// Coordinate rotation about the Z axis.
pub fn rot_z<T: Scalar>(theta: T) -> Mat3<T> {
    let (s, c) = theta.sin_cos();
    Mat3::new(
        c.clone(),
        s.clone(),
        T::zero(),
        -s,
        c,
        T::zero(),
        T::zero(),
        T::zero(),
        T::one(),
    )
}

/// Direction cosine matrix `E = rot_x(roll) · rot_y(pitch) · rot_z(yaw)`.
pub fn direction_cosine_matrix<T: Scalar>(roll: T, pitch: T, yaw: T) -> Mat3<T> {
    rot_x(roll) * rot_y(pitch) * rot_z(yaw)
}

/// Block-diagonal 6x6 spatial rotation operator.
///
/// X = | E  0 |
///     | 0  E |
pub fn spatial_rotation_operator<T: Scalar>(e: &Mat3<T>) -> Mat6<T> {
    let mut m = Mat6::zeros();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(e);
    m.fixed_view_mut::<3, 3>(3, 3).copy_from(e);
    m
}

/// 4x4 homogeneous block with `e` in the top-left and no translation.
pub fn homogeneous_rotation<T: Scalar>(e: &Mat3<T>) -> Mat4<T> {
    let mut m = Mat4::identity();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(e);
    m
}

/// A fixed roll/pitch/yaw rotation together with its derived operators.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation<T = f64> {
    roll: T,
    pitch: T,
    yaw: T,
    dcm: Mat3<T>,
    spatial: Mat6<T>,
}

impl<T: Scalar> Rotation<T> {
    /// Create from roll, pitch and yaw.
    pub fn from_scalars(roll: T, pitch: T, yaw: T) -> Self {
        let dcm = direction_cosine_matrix(roll.clone(), pitch.clone(), yaw.clone());
        let spatial = spatial_rotation_operator(&dcm);
        Self {
            roll,
            pitch,
            yaw,
            dcm,
            spatial,
        }
    }

    /// Create from `[roll, pitch, yaw]`.
    pub fn from_vector(rpy: impl Into<Vec3<T>>) -> Self {
        let [[roll, pitch, yaw]] = rpy.into().data.0;
        Self::from_scalars(roll, pitch, yaw)
    }

    pub fn roll(&self) -> &T {
        &self.roll
    }

    pub fn pitch(&self) -> &T {
        &self.pitch
    }

    pub fn yaw(&self) -> &T {
        &self.yaw
    }

    /// The direction cosine matrix `E`.
    pub fn dcm(&self) -> &Mat3<T> {
        &self.dcm
    }

    /// The 6x6 spatial rotation operator.
    pub fn spatial_operator(&self) -> &Mat6<T> {
        &self.spatial
    }

    /// The 4x4 homogeneous rotation block.
    pub fn homogeneous(&self) -> Mat4<T> {
        homogeneous_rotation(&self.dcm)
    }
}
