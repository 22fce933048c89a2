// Kinematics facade for the five-joint desktop arm.
// Bundles one geometry with a forward strategy and exposes the forward,
// inverse and Jacobian operations on it.

use nalgebra::Vector3;

use crate::error::KinematicsError;
use crate::forward::{ClosedForm, ForwardKinematics, TransformChain};
use crate::geometry::LinkGeometry;
use crate::inverse::{self, ArmConfiguration};
use crate::jacobian::{self, JacobianMatrix};
use crate::transform::RigidTransform;
use crate::types::{CartesianPose, JointAngles};

/// Arm kinematics over a fixed geometry.
///
/// `S` selects how forward kinematics is evaluated; the inverse solver and
/// the Jacobian are closed-form regardless.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArmKinematics<S: ForwardKinematics = ClosedForm> {
    geometry: LinkGeometry,
    strategy: S,
}

impl ArmKinematics<ClosedForm> {
    pub fn new(geometry: LinkGeometry) -> Self {
        Self::with_strategy(geometry, ClosedForm)
    }
}

impl<S: ForwardKinematics> ArmKinematics<S> {
    pub fn with_strategy(geometry: LinkGeometry, strategy: S) -> Self {
        Self { geometry, strategy }
    }

    pub fn geometry(&self) -> &LinkGeometry {
        &self.geometry
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    // ============================================================================
    // Forward Kinematics
    // ============================================================================

    /// Tool position for the given joint angles.
    pub fn forward_kinematics(&self, angles: &JointAngles) -> CartesianPose {
        self.strategy.tool_position(angles, &self.geometry)
    }

    /// Tool position together with the Jacobian at the same configuration.
    pub fn forward_with_jacobian(&self, angles: &JointAngles) -> (CartesianPose, JacobianMatrix) {
        (self.forward_kinematics(angles), self.jacobian(angles))
    }

    // ============================================================================
    // Jacobian
    // ============================================================================

    pub fn jacobian(&self, angles: &JointAngles) -> JacobianMatrix {
        jacobian::compute_jacobian(angles, &self.geometry)
    }

    /// Linear tool velocity produced by `rates` at `angles`.
    pub fn tool_velocity(&self, angles: &JointAngles, rates: &JointAngles) -> Vector3<f64> {
        jacobian::tool_velocity(angles, rates, &self.geometry)
    }

    // ============================================================================
    // Inverse Kinematics
    // ============================================================================

    /// Joint angles reaching `target` in the default front-reach, elbow-up
    /// configuration.
    pub fn inverse_kinematics(&self, target: &CartesianPose) -> Result<JointAngles, KinematicsError> {
        self.inverse_kinematics_with(target, ArmConfiguration::default())
    }

    pub fn inverse_kinematics_with(
        &self,
        target: &CartesianPose,
        configuration: ArmConfiguration,
    ) -> Result<JointAngles, KinematicsError> {
        inverse::solve(target, &self.geometry, configuration)
    }

    /// All configurations reaching `target`.
    pub fn inverse_kinematics_all(&self, target: &CartesianPose) -> Vec<(ArmConfiguration, JointAngles)> {
        inverse::solve_all(target, &self.geometry)
    }

    /// The solution closest in joint space to `current`, keeping its wrist roll.
    pub fn inverse_kinematics_nearest(
        &self,
        target: &CartesianPose,
        current: &JointAngles,
    ) -> Result<JointAngles, KinematicsError> {
        let solutions = self.inverse_kinematics_all(target);

        // Re-run the default configuration to surface its error when nothing solves
        if solutions.is_empty() {
            return self.inverse_kinematics(target);
        }

        let mut best = solutions[0].1;
        let mut min_distance = best.distance_to(current);
        for (_, solution) in &solutions[1..] {
            let distance = solution.distance_to(current);
            if distance < min_distance {
                min_distance = distance;
                best = *solution;
            }
        }

        best.wrist_roll = current.wrist_roll;
        Ok(best)
    }
}

impl ArmKinematics<TransformChain> {
    /// Full tool pose, rotation included.
    pub fn tool_transform(&self, angles: &JointAngles) -> RigidTransform {
        self.strategy.tool_transform(angles, &self.geometry)
    }
}
