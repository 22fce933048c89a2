//! Homogeneous rigid transforms and chain composition.
//!
//! A [`RigidTransform`] maps points from a child frame into its parent:
//! `p_parent = R · p_child + d`. Chains are composed base to tool, each
//! transform expressed in the previous frame.

use std::ops::Mul;

use nalgebra::{Matrix3, Matrix4, Rotation3, Vector3};

/// 4x4 homogeneous transform with bottom row fixed to (0, 0, 0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    matrix: Matrix4<f64>,
}

impl RigidTransform {
    /// Place `rotation` in the upper-left 3x3 block and `displacement` in the
    /// last column.
    pub fn new(rotation: Matrix3<f64>, displacement: Vector3<f64>) -> Self {
        let mut matrix = Matrix4::identity();
        matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotation);
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&displacement);
        Self { matrix }
    }

    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Pure translation.
    pub fn from_translation(displacement: Vector3<f64>) -> Self {
        Self::new(Matrix3::identity(), displacement)
    }

    /// `self · other`: `other` is expressed in the frame `self` leads to.
    pub fn compose(&self, other: &RigidTransform) -> RigidTransform {
        RigidTransform {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Fold a base-to-tool sequence of transforms into one.
    pub fn compose_chain<'a, I>(chain: I) -> RigidTransform
    where
        I: IntoIterator<Item = &'a RigidTransform>,
    {
        chain
            .into_iter()
            .fold(RigidTransform::identity(), |acc, t| acc.compose(t))
    }

    pub fn rotation(&self) -> Matrix3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Map a point given in the child frame into the parent frame.
    pub fn transform_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.rotation() * point + self.translation()
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for RigidTransform {
    type Output = RigidTransform;

    fn mul(self, rhs: RigidTransform) -> RigidTransform {
        self.compose(&rhs)
    }
}

impl<'a> Mul<&'a RigidTransform> for &'a RigidTransform {
    type Output = RigidTransform;

    fn mul(self, rhs: &'a RigidTransform) -> RigidTransform {
        self.compose(rhs)
    }
}

/// Rotation about the x axis (roll).
pub fn rot_x(angle: f64) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle).into_inner()
}

/// Rotation about the y axis (pitch). Positive angles tip +x towards -z.
pub fn rot_y(angle: f64) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle).into_inner()
}

/// Rotation about the z axis (yaw).
pub fn rot_z(angle: f64) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle).into_inner()
}
