//! Analytic manipulator Jacobian for the tool position.
//!
//! Column i holds ∂(x, y, z)/∂θi for the base, shoulder, elbow and wrist
//! pitch joints. The wrist roll leaves the tool point fixed, so its column is
//! identically zero and is not stored.

use nalgebra::{Matrix3x4, Vector3, Vector4};

use crate::geometry::LinkGeometry;
use crate::types::JointAngles;

/// 3x4 position Jacobian.
pub type JacobianMatrix = Matrix3x4<f64>;

/// Closed-form partial derivatives of the trigonometric forward expansion.
///
/// Differentiating by θi only touches the cumulative-angle terms that contain
/// θi, so each column drops the links proximal to its joint.
pub fn compute_jacobian(angles: &JointAngles, geometry: &LinkGeometry) -> JacobianMatrix {
    let l1 = geometry.upper_arm();
    let l2 = geometry.forearm();
    let l3 = geometry.tool_length();
    let d3 = geometry.lateral_offset();
    let d4 = geometry.wrist_offset();

    let s1 = angles.shoulder;
    let s12 = s1 + angles.elbow;
    let s123 = s12 + angles.wrist_pitch;
    let (sin1, cos1) = s1.sin_cos();
    let (sin12, cos12) = s12.sin_cos();
    let (sin123, cos123) = s123.sin_cos();
    let (sb, cb) = angles.base.sin_cos();

    // In-plane reach and its derivatives along the pitch chain
    let reach = l1 * cos1 + l2 * cos12 + d4 * sin123 + l3 * cos123;
    let d_reach_wrist = d4 * cos123 - l3 * sin123;
    let d_reach_elbow = -l2 * sin12 + d_reach_wrist;
    let d_reach_shoulder = -l1 * sin1 + d_reach_elbow;

    // Height derivatives along the pitch chain
    let d_z_wrist = -d4 * sin123 - l3 * cos123;
    let d_z_elbow = -l2 * cos12 + d_z_wrist;
    let d_z_shoulder = -l1 * cos1 + d_z_elbow;

    JacobianMatrix::new(
        -sb * reach - d3 * cb, cb * d_reach_shoulder, cb * d_reach_elbow, cb * d_reach_wrist,
        cb * reach - d3 * sb, sb * d_reach_shoulder, sb * d_reach_elbow, sb * d_reach_wrist,
        0.0, d_z_shoulder, d_z_elbow, d_z_wrist,
    )
}

/// Linear tool velocity for the given joint rates (rad/s), `J · θ̇`.
///
/// The wrist roll rate is ignored; it does not move the tool point.
pub fn tool_velocity(angles: &JointAngles, rates: &JointAngles, geometry: &LinkGeometry) -> Vector3<f64> {
    let qdot = Vector4::new(rates.base, rates.shoulder, rates.elbow, rates.wrist_pitch);
    compute_jacobian(angles, geometry) * qdot
}
