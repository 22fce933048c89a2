// Library exports for the desktop arm kinematics engine

pub mod error;
pub mod forward;
pub mod geometry;
pub mod inverse;
pub mod jacobian;
pub mod kinematics;
pub mod report;
pub mod transform;
pub mod types;

pub use error::KinematicsError;
pub use forward::{ClosedForm, ForwardKinematics, TransformChain};
pub use geometry::LinkGeometry;
pub use inverse::{ArmConfiguration, Elbow, Reach};
pub use jacobian::JacobianMatrix;
pub use kinematics::ArmKinematics;
pub use transform::RigidTransform;
pub use types::{normalize_angle, CartesianPose, JointAngles};

/// Tool position for `angles`, using the closed-form expansion.
pub fn forward_kinematics(angles: &JointAngles, geometry: &LinkGeometry) -> CartesianPose {
    ClosedForm.tool_position(angles, geometry)
}

/// Tool position and Jacobian at the same configuration.
pub fn forward_with_jacobian(angles: &JointAngles, geometry: &LinkGeometry) -> (CartesianPose, JacobianMatrix) {
    (forward_kinematics(angles, geometry), compute_jacobian(angles, geometry))
}

/// Joint angles reaching `target` with the front-reach, elbow-up configuration.
pub fn inverse_kinematics(target: &CartesianPose, geometry: &LinkGeometry) -> Result<JointAngles, KinematicsError> {
    inverse::solve(target, geometry, ArmConfiguration::default())
}

pub fn compute_jacobian(angles: &JointAngles, geometry: &LinkGeometry) -> JacobianMatrix {
    jacobian::compute_jacobian(angles, geometry)
}
