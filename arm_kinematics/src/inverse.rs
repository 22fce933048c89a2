//! Geometric inverse kinematics.
//!
//! The solver keeps the tool axis pointing straight down, so
//! `θ1 + θ2 + θ3 = π/2`, and the remaining position problem splits into:
//!
//! 1. the base yaw, from the target bearing corrected for the lateral offset;
//! 2. a planar two-link triangle (upper arm, forearm) in the arm plane,
//!    solved with the law of cosines;
//! 3. the wrist pitch, from the pitch-sum constraint.
//!
//! Each step has two geometric answers. [`ArmConfiguration`] picks one;
//! [`solve_all`] returns every configuration that reaches the target.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::KinematicsError;
use crate::geometry::LinkGeometry;
use crate::types::{normalize_angle, CartesianPose, JointAngles};

/// How far an arc-cosine/arc-sine argument may drift past ±1 and still be
/// treated as rounding error.
pub const DOMAIN_TOLERANCE: f64 = 1e-6;

/// Distances below this are treated as zero.
const EPSILON: f64 = 1e-12;

/// Which side of the base the arm plane reaches into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Reach {
    /// Shoulder leans towards the target
    #[default]
    Front,
    /// Base turned half a revolution, arm reaching back over the shoulder
    Back,
}

/// Elbow posture of the planar two-link sub-chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Elbow {
    /// Elbow above the shoulder-wrist line; non-negative elbow angle
    #[default]
    Up,
    /// Elbow below the shoulder-wrist line; negative elbow angle
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArmConfiguration {
    pub reach: Reach,
    pub elbow: Elbow,
}

impl ArmConfiguration {
    pub const ALL: [ArmConfiguration; 4] = [
        ArmConfiguration { reach: Reach::Front, elbow: Elbow::Up },
        ArmConfiguration { reach: Reach::Front, elbow: Elbow::Down },
        ArmConfiguration { reach: Reach::Back, elbow: Elbow::Up },
        ArmConfiguration { reach: Reach::Back, elbow: Elbow::Down },
    ];

    pub const fn new(reach: Reach, elbow: Elbow) -> Self {
        Self { reach, elbow }
    }
}

/// Bring a law-of-cosines (or sine) ratio into `[-1, 1]`.
///
/// Ratios within [`DOMAIN_TOLERANCE`] of the interval are clamped; anything
/// further out means the triangle does not close.
pub fn clamp_to_unit(ratio: f64, what: &str) -> Result<f64, KinematicsError> {
    if !ratio.is_finite() {
        return Err(KinematicsError::UnreachablePose(format!(
            "{} ratio is not finite",
            what
        )));
    }
    if (-1.0..=1.0).contains(&ratio) {
        return Ok(ratio);
    }
    if ratio.abs() <= 1.0 + DOMAIN_TOLERANCE {
        warn!(ratio, what, "clamping ratio back into [-1, 1]");
        return Ok(ratio.clamp(-1.0, 1.0));
    }
    Err(KinematicsError::UnreachablePose(format!(
        "{} ratio {:.9} is outside [-1, 1]",
        what, ratio
    )))
}

/// Bearing of `(x, y)` in the horizontal plane, in (-π, π].
///
/// `x == 0` is handled explicitly: the bearing is ±π/2 by the sign of `y`.
/// The origin itself has no bearing.
pub fn bearing(x: f64, y: f64) -> Result<f64, KinematicsError> {
    if x.hypot(y) < EPSILON {
        return Err(KinematicsError::DegenerateBearing);
    }
    if x == 0.0 {
        return Ok(if y > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 });
    }
    Ok(y.atan2(x))
}

/// Solve for the base yaw and return it with the signed in-plane reach that
/// the lateral offset leaves for the arm.
fn solve_base(target: &CartesianPose, geometry: &LinkGeometry, reach: Reach) -> Result<(f64, f64), KinematicsError> {
    let phi = bearing(target.x, target.y)?;
    let radial = target.x.hypot(target.y);
    let d3 = geometry.lateral_offset();

    let sin_alpha = clamp_to_unit(d3 / radial, "lateral offset")?;
    let alpha = sin_alpha.asin();
    let arm_reach = (radial * radial - d3 * d3).max(0.0).sqrt();

    Ok(match reach {
        Reach::Front => (normalize_angle(phi - alpha), arm_reach),
        Reach::Back => (normalize_angle(phi + alpha - PI), -arm_reach),
    })
}

/// Planar two-link problem: find (shoulder, elbow) so that
/// `u = L1 cos θ1 + L2 cos(θ1+θ2)` and `v = L1 sin θ1 + L2 sin(θ1+θ2)`.
fn solve_planar(u: f64, v: f64, geometry: &LinkGeometry, elbow: Elbow) -> Result<(f64, f64), KinematicsError> {
    let l1 = geometry.upper_arm();
    let l2 = geometry.forearm();
    let distance = u.hypot(v);
    let max_reach = l1 + l2;
    let min_reach = (l1 - l2).abs();

    if distance > max_reach * (1.0 + DOMAIN_TOLERANCE) {
        return Err(KinematicsError::UnreachablePose(format!(
            "wrist distance {:.6} exceeds arm reach {:.6}",
            distance, max_reach
        )));
    }
    if distance < min_reach * (1.0 - DOMAIN_TOLERANCE) {
        return Err(KinematicsError::UnreachablePose(format!(
            "wrist distance {:.6} is inside the minimum reach {:.6}",
            distance, min_reach
        )));
    }

    // Folded flat onto the shoulder: any shoulder angle works
    if distance < EPSILON {
        let elbow_angle = match elbow {
            Elbow::Up => PI,
            Elbow::Down => -PI,
        };
        return Ok((0.0, elbow_angle));
    }

    let cos_elbow = clamp_to_unit(
        (distance * distance - l1 * l1 - l2 * l2) / (2.0 * l1 * l2),
        "elbow",
    )?;
    let elbow_angle = match elbow {
        Elbow::Up => cos_elbow.acos(),
        Elbow::Down => -cos_elbow.acos(),
    };

    let beta = v.atan2(u);
    let cos_psi = clamp_to_unit(
        (distance * distance + l1 * l1 - l2 * l2) / (2.0 * l1 * distance),
        "shoulder",
    )?;
    let psi = cos_psi.acos();

    // Elbow sign decides which side of the shoulder-wrist line the upper arm sits
    let shoulder = if elbow_angle >= 0.0 { beta - psi } else { beta + psi };

    Ok((shoulder, elbow_angle))
}

/// Solve for joint angles placing the tool point at `target` in the given
/// configuration. The wrist roll is returned as zero.
pub fn solve(
    target: &CartesianPose,
    geometry: &LinkGeometry,
    configuration: ArmConfiguration,
) -> Result<JointAngles, KinematicsError> {
    if !target.is_finite() {
        return Err(KinematicsError::UnreachablePose(
            "target coordinates are not finite".to_string(),
        ));
    }

    let (base, arm_reach) = solve_base(target, geometry, configuration.reach)?;

    // Target in the shoulder frame: yaw removed, wrist offset and tool drop undone
    let (sb, cb) = base.sin_cos();
    let radial = cb * target.x + sb * target.y;
    let u = radial - geometry.wrist_offset();
    let v = geometry.base_height() - geometry.tool_length() - target.z;

    debug!(
        ?configuration,
        base,
        arm_reach,
        u,
        v,
        "solving planar sub-chain"
    );

    let (shoulder, elbow) = solve_planar(u, v, geometry, configuration.elbow)?;
    let wrist_pitch = FRAC_PI_2 - shoulder - elbow;

    let solution = JointAngles::new(base, shoulder, elbow, wrist_pitch, 0.0);
    debug!(?solution, "inverse kinematics solved");
    Ok(solution)
}

/// Every configuration that reaches `target`, in [`ArmConfiguration::ALL`]
/// order. Empty when the target is out of reach for all of them.
pub fn solve_all(target: &CartesianPose, geometry: &LinkGeometry) -> Vec<(ArmConfiguration, JointAngles)> {
    ArmConfiguration::ALL
        .iter()
        .filter_map(|&configuration| match solve(target, geometry, configuration) {
            Ok(solution) => Some((configuration, solution)),
            Err(e) => {
                debug!(?configuration, error = %e, "configuration rejected");
                None
            }
        })
        .collect()
}
