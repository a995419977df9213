//! Quaternion conversions for 3D rotations.
//!
//! Convention: q = [w; x; y; z] where w is scalar, (x,y,z) is vector part.
//!
//! Rotation matrices produced here follow the same coordinate-transform
//! convention as [`rot_x`](crate::rot_x) and friends, so
//! `quat_to_rotation_matrix(q)` equals
//! `direction_cosine_matrix(quat_to_rpy(q))` for a unit quaternion.

use crate::{Mat3, Result, Scalar, SpatialError, Vec3};

/// A scalar-first quaternion.
#[derive(Debug, Clone, PartialEq)]
pub struct Quaternion<T = f64> {
    /// Scalar part (w).
    pub w: T,
    /// Vector part (x, y, z).
    pub v: Vec3<T>,
}

impl<T: Scalar> Quaternion<T> {
    /// Create a new quaternion from scalar and vector parts.
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            w,
            v: Vec3::new(x, y, z),
        }
    }

    /// Identity quaternion (no rotation).
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Create from `[w, x, y, z]`.
    pub fn from_array([w, x, y, z]: [T; 4]) -> Self {
        Self::new(w, x, y, z)
    }

    /// Components as `[w, x, y, z]`.
    pub fn to_array(&self) -> [T; 4] {
        [
            self.w.clone(),
            self.v.x.clone(),
            self.v.y.clone(),
            self.v.z.clone(),
        ]
    }

    /// Create quaternion from axis-angle representation.
    /// axis should be a unit vector, angle in radians.
    pub fn from_axis_angle(axis: &Vec3<T>, angle: T) -> Self {
        let half_angle = angle * T::from_f64(0.5);
        let (s, c) = half_angle.sin_cos();
        Self {
            w: c,
            v: axis * s,
        }
    }

    /// Largest absolute component and the components divided by it.
    ///
    /// `None` when every component is zero.
    fn rescaled(&self) -> Option<(T, [T; 4])> {
        let [w, x, y, z] = self.to_array();
        let scale = [x.clone(), y.clone(), z.clone()]
            .into_iter()
            .fold(w.clone().abs(), |m, c| m.max(c.abs()));
        if scale.is_zero() {
            return None;
        }
        let unit = [w, x, y, z].map(|c| c / scale.clone());
        Some((scale, unit))
    }

    /// Euclidean norm of all four components.
    ///
    /// Components are rescaled before squaring, so the result neither
    /// overflows nor underflows for any finite input.
    pub fn norm(&self) -> T {
        match self.rescaled() {
            Some((scale, [w, x, y, z])) => {
                scale * (w.clone() * w + x.clone() * x + y.clone() * y + z.clone() * z).sqrt()
            }
            None => T::zero(),
        }
    }

    /// Scale to unit norm. Fails on a zero quaternion.
    pub fn normalize(&self) -> Result<Self> {
        let Some((_, [w, x, y, z])) = self.rescaled() else {
            log::debug!("cannot normalize zero-norm quaternion {:?}", self);
            return Err(SpatialError::DegenerateInput("quaternion has zero norm"));
        };
        let norm = (w.clone() * w.clone()
            + x.clone() * x.clone()
            + y.clone() * y.clone()
            + z.clone() * z.clone())
        .sqrt();
        Ok(Self::new(
            w / norm.clone(),
            x / norm.clone(),
            y / norm.clone(),
            z / norm,
        ))
    }

    /// Convert to a 3x3 rotation matrix, normalizing first.
    ///
    /// E = 2 | w²+x²-½   xy+wz     xz-wy   |
    ///       | xy-wz     w²+y²-½   yz+wx   |
    ///       | xz+wy     yz-wx     w²+z²-½ |
    pub fn to_rotation_matrix(&self) -> Result<Mat3<T>> {
        let [w, x, y, z] = self.normalize()?.to_array();

        let ww = w.clone() * w.clone();
        let xx = x.clone() * x.clone();
        let yy = y.clone() * y.clone();
        let zz = z.clone() * z.clone();
        let wx = w.clone() * x.clone();
        let wy = w.clone() * y.clone();
        let wz = w * z.clone();
        let xy = x.clone() * y.clone();
        let xz = x * z.clone();
        let yz = y * z;
        let half = T::from_f64(0.5);

        let e = Mat3::new(
            ww.clone() + xx - half.clone(),
            xy.clone() + wz.clone(),
            xz.clone() - wy.clone(),
            xy - wz,
            ww.clone() + yy - half.clone(),
            yz.clone() + wx.clone(),
            xz + wy,
            yz - wx,
            ww + zz - half,
        );
        Ok(e * T::from_f64(2.0))
    }

    /// Roll, pitch and yaw of this quaternion.
    ///
    /// The quaternion is used as given; pass a unit quaternion for
    /// meaningful pitch values.
    pub fn to_rpy(&self) -> (T, T, T) {
        let [q0, q1, q2, q3] = self.to_array();
        let two = T::from_f64(2.0);

        let (s0, s1, s2, s3) = (
            q0.clone() * q0.clone(),
            q1.clone() * q1.clone(),
            q2.clone() * q2.clone(),
            q3.clone() * q3.clone(),
        );

        let roll = (two.clone() * q2.clone() * q3.clone() + two.clone() * q0.clone() * q1.clone())
            .atan2(s3.clone() - s2.clone() - s1.clone() + s0.clone());
        let pitch = -(two.clone() * q1.clone() * q3.clone() - two.clone() * q0.clone() * q2.clone())
            .asin();
        let yaw = (two.clone() * q1 * q2 + two * q0 * q3).atan2(s1 + s0 - s3 - s2);
        (roll, pitch, yaw)
    }
}

/// Roll, pitch and yaw of the scalar-first quaternion `(q0, q1, q2, q3)`.
pub fn quat_to_rpy<T: Scalar>(q0: T, q1: T, q2: T, q3: T) -> (T, T, T) {
    Quaternion::new(q0, q1, q2, q3).to_rpy()
}

/// Rotation matrix of the scalar-first quaternion `(q0, q1, q2, q3)`.
///
/// The quaternion is normalized first; a zero quaternion yields
/// [`SpatialError::DegenerateInput`].
pub fn quat_to_rotation_matrix<T: Scalar>(q0: T, q1: T, q2: T, q3: T) -> Result<Mat3<T>> {
    Quaternion::new(q0, q1, q2, q3).to_rotation_matrix()
}

/// Unit scalar-first quaternion for roll, pitch and yaw.
///
/// Not available yet: always returns [`SpatialError::NotImplemented`].
pub fn rpy_to_quat<T: Scalar>(_roll: T, _pitch: T, _yaw: T) -> Result<Quaternion<T>> {
    Err(SpatialError::NotImplemented("roll/pitch/yaw to quaternion"))
}
