use std::error::Error;
use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// No joint configuration places the tool at the requested point.
    UnreachablePose(String),
    /// Target lies on the base axis, where the bearing angle is undefined.
    DegenerateBearing,
    InvalidGeometry(String),
    Config(String),
}

impl Error for KinematicsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KinematicsError::UnreachablePose(ref msg) => write!(f, "Unreachable pose: {}", msg),
            KinematicsError::DegenerateBearing => {
                write!(f, "Target lies on the base axis; bearing angle is undefined")
            }
            KinematicsError::InvalidGeometry(ref msg) => write!(f, "Invalid geometry: {}", msg),
            KinematicsError::Config(ref msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}
