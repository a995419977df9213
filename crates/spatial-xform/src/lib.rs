//! Spatial algebra transforms for rigid-body kinematics.
//!
//! Builds 6x6 motion-space operators and 4x4 homogeneous transforms from
//! translation offsets, roll/pitch/yaw angles and quaternions, following
//! Featherstone's [angular; linear] ordering.
//!
//! Every routine is generic over [`Scalar`], so the same code runs on `f64`,
//! `f32` or (with the `symbolic` feature) the expression type [`Expr`].

pub mod error;
pub mod origin;
pub mod quaternion;
pub mod rotation;
pub mod scalar;
#[cfg(feature = "symbolic")]
pub mod symbolic;
pub mod translation;

pub use error::{Result, SpatialError};
pub use origin::{FixedTransform, Origin, transform_spatial_inertia};
pub use quaternion::{Quaternion, quat_to_rotation_matrix, quat_to_rpy, rpy_to_quat};
pub use rotation::{
    Rotation, direction_cosine_matrix, homogeneous_rotation, rot_x, rot_y, rot_z,
    spatial_rotation_operator,
};
pub use scalar::Scalar;
#[cfg(feature = "symbolic")]
pub use symbolic::Expr;
pub use translation::{Translation, homogeneous_translation, skew, spatial_translation_operator};

use nalgebra as na;

/// 3D vector alias.
pub type Vec3<T = f64> = na::Vector3<T>;
/// 3x3 matrix alias.
pub type Mat3<T = f64> = na::Matrix3<T>;
/// 4x4 matrix alias.
pub type Mat4<T = f64> = na::Matrix4<T>;
/// 6x6 matrix alias.
pub type Mat6<T = f64> = na::Matrix6<T>;
