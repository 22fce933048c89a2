//! Forward kinematics: joint angles to tool position.
//!
//! Two strategies evaluate the same chain:
//!
//! - [`ClosedForm`] expands every link's contribution with sines and cosines of
//!   the cumulative pitch angles `s1 = θ1`, `s12 = θ1+θ2`, `s123 = θ1+θ2+θ3`.
//! - [`TransformChain`] builds one [`RigidTransform`] per link and composes
//!   them from base to tool.
//!
//! Coordinate system:
//! +X = forward at zero yaw
//! +Z = up (vertical)
//! Positive pitch angles swing the arm downwards.

use nalgebra::Vector3;
use tracing::trace;

use crate::geometry::LinkGeometry;
use crate::transform::{rot_x, rot_y, rot_z, RigidTransform};
use crate::types::{CartesianPose, JointAngles};

/// A way of evaluating forward kinematics for the arm.
pub trait ForwardKinematics {
    fn tool_position(&self, angles: &JointAngles, geometry: &LinkGeometry) -> CartesianPose;
}

/// Direct trigonometric expansion of the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosedForm;

/// Composition of per-link homogeneous transforms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformChain;

impl ForwardKinematics for ClosedForm {
    fn tool_position(&self, angles: &JointAngles, geometry: &LinkGeometry) -> CartesianPose {
        let [l0, l1, l2, l3] = *geometry.link_lengths();
        let d3 = geometry.lateral_offset();
        let d4 = geometry.wrist_offset();

        let s1 = angles.shoulder;
        let s12 = s1 + angles.elbow;
        let s123 = s12 + angles.wrist_pitch;

        // Horizontal reach inside the arm plane
        let reach = l1 * s1.cos() + l2 * s12.cos() + d4 * s123.sin() + l3 * s123.cos();

        let (sb, cb) = angles.base.sin_cos();
        let x = cb * reach - d3 * sb;
        let y = sb * reach + d3 * cb;
        let z = l0 - l1 * s1.sin() - l2 * s12.sin() + d4 * s123.cos() - l3 * s123.sin();

        trace!(x, y, z, "closed-form forward kinematics");
        CartesianPose::new(x, y, z)
    }
}

impl TransformChain {
    /// Per-link transforms, base to tool:
    ///
    /// Link        | Rotation  | Displacement (parent frame)
    /// ------------|-----------|----------------------------
    /// base        | Rz(θ0)    | (0, 0, L0)
    /// shoulder    | Ry(θ1)    | (0, D3, 0)
    /// elbow       | Ry(θ2)    | (L1, 0, 0)
    /// wrist pitch | Ry(θ3)    | (L2, 0, 0)
    /// wrist roll  | Rx(θ4)    | (L3, 0, D4)
    pub fn frame_transforms(&self, angles: &JointAngles, geometry: &LinkGeometry) -> [RigidTransform; 5] {
        [
            RigidTransform::new(
                rot_z(angles.base),
                Vector3::new(0.0, 0.0, geometry.base_height()),
            ),
            RigidTransform::new(
                rot_y(angles.shoulder),
                Vector3::new(0.0, geometry.lateral_offset(), 0.0),
            ),
            RigidTransform::new(
                rot_y(angles.elbow),
                Vector3::new(geometry.upper_arm(), 0.0, 0.0),
            ),
            RigidTransform::new(
                rot_y(angles.wrist_pitch),
                Vector3::new(geometry.forearm(), 0.0, 0.0),
            ),
            RigidTransform::new(
                rot_x(angles.wrist_roll),
                Vector3::new(geometry.tool_length(), 0.0, geometry.wrist_offset()),
            ),
        ]
    }

    /// Full tool pose (rotation and position) in the base frame.
    pub fn tool_transform(&self, angles: &JointAngles, geometry: &LinkGeometry) -> RigidTransform {
        RigidTransform::compose_chain(&self.frame_transforms(angles, geometry))
    }
}

impl ForwardKinematics for TransformChain {
    fn tool_position(&self, angles: &JointAngles, geometry: &LinkGeometry) -> CartesianPose {
        let pose = CartesianPose::from(self.tool_transform(angles, geometry).translation());
        trace!(x = pose.x, y = pose.y, z = pose.z, "transform-chain forward kinematics");
        pose
    }
}
