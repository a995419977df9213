//! Fixed frame origins: a translation followed by a roll/pitch/yaw rotation.
//!
//! An [`Origin`] collects both parts and [`Origin::build`] turns them into a
//! [`FixedTransform`]: the 6x6 motion operator `X = rot(E) · xlt(r)`, the
//! homogeneous transform `[E | r; 0 | 1]`, and its companion "inverse"
//! `[Eᵀ | -r; 0 | 1]`.

use crate::rotation::homogeneous_rotation;
use crate::{Mat3, Mat4, Mat6, Result, Rotation, Scalar, SpatialError, Translation, Vec3};

/// The matrices produced by building an [`Origin`].
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTransform<T = f64> {
    /// 6x6 spatial motion transform: spatial rotation times spatial translation.
    pub spatial: Mat6<T>,
    /// 4x4 homogeneous transform with rotation block `E` and translation column `r`.
    pub homogeneous: Mat4<T>,
    /// 4x4 companion of `homogeneous` with rotation block `Eᵀ` and translation
    /// column `-r`.
    ///
    /// The offset is negated as given, not rotated, so this equals the true
    /// inverse `[Eᵀ | -Eᵀr]` only when `E` is the identity or `r` is already
    /// expressed in the rotated frame. Consumers relying on an exact inverse
    /// should invert `homogeneous` themselves.
    pub homogeneous_inv: Mat4<T>,
}

impl<T: Scalar> FixedTransform<T> {
    /// Compute the fixed transform for a translation and rotation.
    pub fn new(translation: &Translation<T>, rotation: &Rotation<T>) -> Self {
        let spatial = rotation.spatial_operator() * translation.spatial_operator();
        Self::assemble(spatial, rotation.dcm(), translation.offset())
    }

    fn assemble(spatial: Mat6<T>, e: &Mat3<T>, offset: &Vec3<T>) -> Self {
        let mut homogeneous = homogeneous_rotation(e);
        let mut homogeneous_inv = homogeneous_rotation(&e.transpose());
        for (i, r) in offset.iter().enumerate() {
            homogeneous[(i, 3)] = r.clone();
            homogeneous_inv[(i, 3)] = -r.clone();
        }

        Self {
            spatial,
            homogeneous,
            homogeneous_inv,
        }
    }

    /// The rotation block `E`.
    pub fn rotation_block(&self) -> Mat3<T> {
        self.homogeneous.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// The translation column `r`, expressed in the parent frame.
    pub fn offset(&self) -> Vec3<T> {
        self.homogeneous.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Fold an intermediate fixed frame into this transform.
    ///
    /// `self` maps the intermediate frame to a child frame and `fixed` maps
    /// the parent to the intermediate frame. The result maps the parent
    /// straight to the child, so the intermediate frame can be dropped.
    ///
    /// With `fixed = (a, E1)` and `self = (b, E2)` the merged frame has
    /// rotation `E2·E1` and offset `a + E1ᵀ·b`. The homogeneous parts are
    /// rebuilt from those in the same layout [`new`](Self::new) uses.
    pub fn absorb(&self, fixed: &FixedTransform<T>) -> FixedTransform<T> {
        let e1 = fixed.rotation_block();
        let e = self.rotation_block() * &e1;
        let offset = fixed.offset() + e1.transpose() * self.offset();
        Self::assemble(&self.spatial * &fixed.spatial, &e, &offset)
    }
}

/// Express a 6x6 spatial inertia across a motion transform: `Xᵀ · I · X`.
///
/// With `x` mapping parent coordinates to child coordinates and `inertia`
/// given in the child frame, the result is in the parent frame, where it can
/// be added to the parent's own inertia.
pub fn transform_spatial_inertia<T: Scalar>(x: &Mat6<T>, inertia: &Mat6<T>) -> Mat6<T> {
    x.transpose() * inertia * x
}

/// A frame origin assembled from a translation and a rotation.
///
/// Setters may be called in any order and overwrite previous values. Changing
/// either part discards a previously built transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Origin<T = f64> {
    translation: Option<Translation<T>>,
    rotation: Option<Rotation<T>>,
    built: Option<FixedTransform<T>>,
}

impl<T: Scalar> Default for Origin<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Origin<T> {
    /// Create an empty origin.
    pub fn new() -> Self {
        Self {
            translation: None,
            rotation: None,
            built: None,
        }
    }

    pub fn set_translation(&mut self, translation: Translation<T>) -> &mut Self {
        self.translation = Some(translation);
        self.built = None;
        self
    }

    /// Set the translation from its three components.
    pub fn set_translation_xyz(&mut self, x: T, y: T, z: T) -> &mut Self {
        self.set_translation(Translation::from_scalars(x, y, z))
    }

    pub fn set_rotation(&mut self, rotation: Rotation<T>) -> &mut Self {
        self.rotation = Some(rotation);
        self.built = None;
        self
    }

    /// Set the rotation from roll, pitch and yaw.
    pub fn set_rotation_rpy(&mut self, roll: T, pitch: T, yaw: T) -> &mut Self {
        self.set_rotation(Rotation::from_scalars(roll, pitch, yaw))
    }

    pub fn translation(&self) -> Option<&Translation<T>> {
        self.translation.as_ref()
    }

    pub fn rotation(&self) -> Option<&Rotation<T>> {
        self.rotation.as_ref()
    }

    /// Compute the fixed transforms from the current translation and rotation.
    ///
    /// Fails with [`SpatialError::Precondition`] unless both have been set; in
    /// that case nothing is stored.
    pub fn build(&mut self) -> Result<&FixedTransform<T>> {
        let (translation, rotation) = match (&self.translation, &self.rotation) {
            (Some(t), Some(r)) => (t, r),
            (t, r) => {
                let missing = match (t.is_none(), r.is_none()) {
                    (true, true) => "translation and rotation must be set before build",
                    (true, false) => "translation must be set before build",
                    _ => "rotation must be set before build",
                };
                log::warn!("origin build failed: {missing}");
                return Err(SpatialError::Precondition(missing));
            }
        };

        let transform = FixedTransform::new(translation, rotation);
        log::debug!(
            "origin built: offset {:?}, rpy ({:?}, {:?}, {:?})",
            translation.offset(),
            rotation.roll(),
            rotation.pitch(),
            rotation.yaw()
        );
        Ok(self.built.insert(transform))
    }

    /// The transform produced by the last successful [`build`](Self::build).
    pub fn transform(&self) -> Result<&FixedTransform<T>> {
        self.built
            .as_ref()
            .ok_or(SpatialError::Precondition("origin has not been built"))
    }

    /// The 6x6 spatial motion transform.
    pub fn spatial(&self) -> Result<&Mat6<T>> {
        Ok(&self.transform()?.spatial)
    }

    /// The 4x4 homogeneous transform.
    pub fn homogeneous(&self) -> Result<&Mat4<T>> {
        Ok(&self.transform()?.homogeneous)
    }

    /// The 4x4 companion "inverse"; see [`FixedTransform::homogeneous_inv`].
    pub fn homogeneous_inv(&self) -> Result<&Mat4<T>> {
        Ok(&self.transform()?.homogeneous_inv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        direction_cosine_matrix, rot_z, skew, spatial_rotation_operator,
        spatial_translation_operator,
    };
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn built(xyz: [f64; 3], rpy: [f64; 3]) -> FixedTransform {
        let mut origin = Origin::new();
        origin
            .set_translation(Translation::from_vector(xyz))
            .set_rotation(Rotation::from_vector(rpy));
        origin.build().unwrap().clone()
    }

    #[test]
    fn test_pure_translation() {
        let xf = built([1.0, 2.0, 3.0], [0.0, 0.0, 0.0]);
        let mut expected = Mat4::identity();
        expected[(0, 3)] = 1.0;
        expected[(1, 3)] = 2.0;
        expected[(2, 3)] = 3.0;
        assert_relative_eq!(xf.homogeneous, expected, epsilon = 1e-12);

        let mut expected_inv = Mat4::identity();
        expected_inv[(0, 3)] = -1.0;
        expected_inv[(1, 3)] = -2.0;
        expected_inv[(2, 3)] = -3.0;
        assert_relative_eq!(xf.homogeneous_inv, expected_inv, epsilon = 1e-12);
    }

    #[test]
    fn test_spatial_is_rotation_times_translation() {
        let t = Translation::from_scalars(0.1, -0.4, 0.9);
        let r = Rotation::from_scalars(0.3, 0.2, -1.2);
        let xf = FixedTransform::new(&t, &r);
        assert_relative_eq!(
            xf.spatial,
            r.spatial_operator() * t.spatial_operator(),
            epsilon = 1e-14
        );
        // Bottom-left block is -E[r]×.
        let e = *r.dcm();
        let expected = -e * t.skew_matrix();
        assert_relative_eq!(
            xf.spatial.fixed_view::<3, 3>(3, 0).into_owned(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_homogeneous_layout_with_rotation() {
        let xf = built([1.0, -2.0, 0.5], [0.4, -0.3, 0.8]);
        let e = direction_cosine_matrix(0.4, -0.3, 0.8);
        assert_relative_eq!(xf.homogeneous.fixed_view::<3, 3>(0, 0).into_owned(), e);
        assert_relative_eq!(
            xf.homogeneous_inv.fixed_view::<3, 3>(0, 0).into_owned(),
            e.transpose()
        );
        assert_eq!(xf.homogeneous[(1, 3)], -2.0);
        // Offset is negated as given, not rotated.
        assert_eq!(xf.homogeneous_inv[(1, 3)], 2.0);
        assert_eq!(xf.homogeneous[(3, 3)], 1.0);
        assert_eq!(xf.homogeneous_inv[(3, 3)], 1.0);
    }

    #[test]
    fn test_build_requires_both_parts() {
        let mut origin = Origin::<f64>::new();
        assert_eq!(
            origin.build().unwrap_err(),
            SpatialError::Precondition("translation and rotation must be set before build")
        );

        origin.set_translation_xyz(1.0, 2.0, 3.0);
        assert_eq!(
            origin.build().unwrap_err(),
            SpatialError::Precondition("rotation must be set before build")
        );
        assert!(origin.transform().is_err());

        let mut origin = Origin::<f64>::new();
        origin.set_rotation_rpy(0.0, 0.0, 0.0);
        assert!(matches!(origin.build(), Err(SpatialError::Precondition(_))));
    }

    #[test]
    fn test_getters_before_build() {
        let origin = Origin::<f64>::new();
        assert!(matches!(origin.spatial(), Err(SpatialError::Precondition(_))));
        assert!(matches!(origin.homogeneous(), Err(SpatialError::Precondition(_))));
        assert!(matches!(origin.homogeneous_inv(), Err(SpatialError::Precondition(_))));
    }

    #[test]
    fn test_setters_overwrite_and_invalidate() {
        let mut origin = Origin::new();
        origin.set_rotation_rpy(0.0, 0.0, 0.0);
        origin.set_translation_xyz(5.0, 5.0, 5.0);
        origin.set_translation_xyz(1.0, 0.0, 0.0);
        origin.build().unwrap();
        assert_eq!(origin.homogeneous().unwrap()[(0, 3)], 1.0);

        origin.set_translation_xyz(2.0, 0.0, 0.0);
        assert!(origin.transform().is_err());
        origin.build().unwrap();
        assert_eq!(origin.homogeneous().unwrap()[(0, 3)], 2.0);
        assert_eq!(origin.translation().unwrap().offset(), &Vec3::new(2.0, 0.0, 0.0));
        assert!(origin.rotation().is_some());
    }

    #[test]
    fn test_absorb_identity_is_noop() {
        let xf = built([0.3, 0.2, 0.1], [0.5, -0.5, 0.25]);
        let identity = built([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        let merged = xf.absorb(&identity);
        assert_relative_eq!(merged.spatial, xf.spatial, epsilon = 1e-14);
        assert_relative_eq!(merged.homogeneous, xf.homogeneous, epsilon = 1e-14);
        assert_relative_eq!(merged.homogeneous_inv, xf.homogeneous_inv, epsilon = 1e-14);
    }

    #[test]
    fn test_absorb_chains_translations() {
        let child = built([0.0, 1.0, 0.0], [0.0, 0.0, 0.0]);
        let fixed = built([2.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        let merged = child.absorb(&fixed);
        let direct = built([2.0, 1.0, 0.0], [0.0, 0.0, 0.0]);
        assert_relative_eq!(merged.spatial, direct.spatial, epsilon = 1e-12);
        assert_relative_eq!(merged.homogeneous, direct.homogeneous, epsilon = 1e-12);
        assert_relative_eq!(merged.homogeneous_inv, direct.homogeneous_inv, epsilon = 1e-12);
    }

    #[test]
    fn test_absorb_with_rotations_matches_direct_origin() {
        // Both frames rotate about z, so the merged rotation is a single yaw.
        let fixed = built([0.0, 0.0, 0.5], [0.0, 0.0, FRAC_PI_2]);
        let child = built([0.2, 0.0, 0.0], [0.0, 0.0, 0.3]);
        let merged = child.absorb(&fixed);

        // The child offset (0.2, 0, 0) seen from the parent is (0, 0.2, 0).
        let direct = built([0.0, 0.2, 0.5], [0.0, 0.0, FRAC_PI_2 + 0.3]);
        assert_relative_eq!(merged.spatial, direct.spatial, epsilon = 1e-12);
        assert_relative_eq!(merged.homogeneous, direct.homogeneous, epsilon = 1e-12);
        assert_relative_eq!(merged.homogeneous_inv, direct.homogeneous_inv, epsilon = 1e-12);
    }

    #[test]
    fn test_absorb_keeps_parts_consistent() {
        let fixed = built([0.0, 0.0, 0.5], [0.0, 0.0, FRAC_PI_2]);
        let child = built([0.2, 0.0, 0.0], [0.1, 0.0, 0.0]);
        let merged = child.absorb(&fixed);

        let e = direction_cosine_matrix(0.1, 0.0, 0.0) * rot_z(FRAC_PI_2);
        let r = Vec3::new(0.0, 0.2, 0.5);
        assert_relative_eq!(merged.rotation_block(), e, epsilon = 1e-12);
        assert_relative_eq!(merged.offset(), r, epsilon = 1e-12);
        assert_relative_eq!(
            merged.homogeneous_inv.fixed_view::<3, 3>(0, 0).into_owned(),
            e.transpose(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            merged.homogeneous_inv.fixed_view::<3, 1>(0, 3).into_owned(),
            -r,
            epsilon = 1e-12
        );
        // The homogeneous parts describe the same motion as the 6x6 operator.
        let expected = spatial_rotation_operator(&e)
            * spatial_translation_operator(&skew(r.x, r.y, r.z));
        assert_relative_eq!(merged.spatial, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_inertia_transform_point_mass() {
        // Point mass m at the child origin, child offset by r from the parent.
        let m: f64 = 2.0;
        let mut inertia = Mat6::zeros();
        inertia.fixed_view_mut::<3, 3>(3, 3).copy_from(&(Mat3::identity() * m));

        let xf = built([0.0, 1.0, 0.0], [0.0, 0.0, 0.0]);
        let moved = transform_spatial_inertia(&xf.spatial, &inertia);

        // Mass block is unchanged and the result stays symmetric.
        assert_relative_eq!(moved[(3, 3)], m, epsilon = 1e-12);
        assert_relative_eq!(moved, moved.transpose(), epsilon = 1e-12);
        // Rotational inertia about the parent origin: m(|r|²I - rrᵀ) with r = (0,1,0).
        assert_relative_eq!(moved[(0, 0)], m, epsilon = 1e-12);
        assert_relative_eq!(moved[(1, 1)], 0.0, epsilon = 1e-12);
        assert_relative_eq!(moved[(2, 2)], m, epsilon = 1e-12);
    }
}
