//! Joint-space and Cartesian-space value types.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Number of revolute joints in the chain.
pub const JOINT_COUNT: usize = 5;

/// Joint angles in radians, base to tool.
///
/// No limits are enforced; mechanical feasibility is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointAngles {
    /// θ0: yaw about the vertical base axis
    pub base: f64,
    /// θ1: shoulder pitch
    pub shoulder: f64,
    /// θ2: elbow pitch
    pub elbow: f64,
    /// θ3: wrist pitch
    pub wrist_pitch: f64,
    /// θ4: roll about the tool axis
    pub wrist_roll: f64,
}

impl JointAngles {
    pub const fn new(base: f64, shoulder: f64, elbow: f64, wrist_pitch: f64, wrist_roll: f64) -> Self {
        Self {
            base,
            shoulder,
            elbow,
            wrist_pitch,
            wrist_roll,
        }
    }

    pub const fn from_array(angles: [f64; JOINT_COUNT]) -> Self {
        let [base, shoulder, elbow, wrist_pitch, wrist_roll] = angles;
        Self::new(base, shoulder, elbow, wrist_pitch, wrist_roll)
    }

    pub const fn to_array(&self) -> [f64; JOINT_COUNT] {
        [self.base, self.shoulder, self.elbow, self.wrist_pitch, self.wrist_roll]
    }

    /// Euclidean joint-space distance, each difference wrapped into (-π, π].
    pub fn distance_to(&self, other: &JointAngles) -> f64 {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .map(|(a, b)| normalize_angle(a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl From<[f64; JOINT_COUNT]> for JointAngles {
    fn from(angles: [f64; JOINT_COUNT]) -> Self {
        Self::from_array(angles)
    }
}

impl From<JointAngles> for [f64; JOINT_COUNT] {
    fn from(angles: JointAngles) -> Self {
        angles.to_array()
    }
}

/// Position of the tool-frame origin in the base frame, metres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianPose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPose {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn distance_to(&self, other: &CartesianPose) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Vector3<f64>> for CartesianPose {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<CartesianPose> for Vector3<f64> {
    fn from(pose: CartesianPose) -> Self {
        pose.to_vector()
    }
}

/// Wrap an angle into (-π, π].
pub fn normalize_angle(angle: f64) -> f64 {
    let two_pi = 2.0 * std::f64::consts::PI;
    let mut normalized = angle % two_pi;
    if normalized > std::f64::consts::PI {
        normalized -= two_pi;
    } else if normalized <= -std::f64::consts::PI {
        normalized += two_pi;
    }
    normalized
}
