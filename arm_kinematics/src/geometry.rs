//! Link geometry for the five-joint desktop arm
//!
//! The arm is a yaw base followed by three pitch joints and a wrist roll.
//! Lengths run along the arm; offsets are the sideways/vertical shifts
//! between consecutive joint axes.
//!
//! Index | Length (L)          | Offset (D)
//! ------|---------------------|------------------------------
//! 0     | base height  0.250  | 0
//! 1     | upper arm    0.200  | -0.040
//! 2     | forearm      0.200  | 0.040
//! 3     | tool length  0.150  | -0.040 (lateral, shoulder)
//! 4     |                     | -0.040 (wrist, along tool z)
//! 5     |                     | 0
//!
//! All lengths in metres.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::KinematicsError;

/// Immutable physical constants of the arm.
///
/// Fields are private: a geometry is built once (preset, `new`, or loaded
/// from JSON) and then only read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkGeometry {
    /// Link lengths L0..L3 (base height, upper arm, forearm, tool)
    link_lengths: [f64; 4],

    /// Joint offsets D0..D5
    joint_offsets: [f64; 6],
}

impl LinkGeometry {
    /// Geometry of the reference desktop arm.
    pub const fn desktop_arm() -> Self {
        Self {
            link_lengths: [0.250, 0.200, 0.200, 0.150],
            joint_offsets: [0.0, -0.040, 0.040, -0.040, -0.040, 0.0],
        }
    }

    /// Build a geometry from raw tables, rejecting values no arm can have.
    pub fn new(link_lengths: [f64; 4], joint_offsets: [f64; 6]) -> Result<Self, KinematicsError> {
        let geometry = Self {
            link_lengths,
            joint_offsets,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Parse a geometry from JSON of the form
    /// `{"link_lengths": [..4], "joint_offsets": [..6]}`.
    pub fn from_json_str(json: &str) -> Result<Self, KinematicsError> {
        let geometry: Self = serde_json::from_str(json)
            .map_err(|e| KinematicsError::Config(format!("invalid geometry JSON: {}", e)))?;
        geometry.validate()?;
        Ok(geometry)
    }

    /// Load a geometry from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, KinematicsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            KinematicsError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    fn validate(&self) -> Result<(), KinematicsError> {
        let all_finite = self
            .link_lengths
            .iter()
            .chain(self.joint_offsets.iter())
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(KinematicsError::InvalidGeometry(
                "link lengths and joint offsets must be finite".to_string(),
            ));
        }

        // The planar triangle needs two real links
        if self.upper_arm() <= 0.0 || self.forearm() <= 0.0 {
            return Err(KinematicsError::InvalidGeometry(format!(
                "upper arm ({}) and forearm ({}) must be positive",
                self.upper_arm(),
                self.forearm()
            )));
        }

        Ok(())
    }

    pub fn link_lengths(&self) -> &[f64; 4] {
        &self.link_lengths
    }

    pub fn joint_offsets(&self) -> &[f64; 6] {
        &self.joint_offsets
    }

    /// L0: height of the shoulder axis above the base frame.
    pub fn base_height(&self) -> f64 {
        self.link_lengths[0]
    }

    /// L1: shoulder to elbow.
    pub fn upper_arm(&self) -> f64 {
        self.link_lengths[1]
    }

    /// L2: elbow to wrist.
    pub fn forearm(&self) -> f64 {
        self.link_lengths[2]
    }

    /// L3: wrist to tool point, along the tool axis.
    pub fn tool_length(&self) -> f64 {
        self.link_lengths[3]
    }

    /// D3: sideways shift of the arm plane from the base axis.
    pub fn lateral_offset(&self) -> f64 {
        self.joint_offsets[3]
    }

    /// D4: tool point shift perpendicular to the tool axis, inside the arm plane.
    pub fn wrist_offset(&self) -> f64 {
        self.joint_offsets[4]
    }

    /// Furthest shoulder-to-wrist distance the planar sub-chain can span.
    pub fn max_reach(&self) -> f64 {
        self.upper_arm() + self.forearm()
    }
}

impl Default for LinkGeometry {
    fn default() -> Self {
        Self::desktop_arm()
    }
}
