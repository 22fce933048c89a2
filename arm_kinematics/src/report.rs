//! Plain-text rendering of kinematics results.
//!
//! Every cell is printed with 4 decimal places followed by a tab, rows are
//! newline-terminated, and each block ends with an empty line.

use std::fmt::Write;

use nalgebra::storage::RawStorage;
use nalgebra::{Dim, Matrix};

use crate::jacobian::JacobianMatrix;
use crate::transform::RigidTransform;
use crate::types::{CartesianPose, JointAngles};

fn write_rows<R, C, S>(out: &mut String, m: &Matrix<f64, R, C, S>)
where
    R: Dim,
    C: Dim,
    S: RawStorage<f64, R, C>,
{
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            let _ = write!(out, "{:.4}\t", m[(i, j)]);
        }
        out.push('\n');
    }
    out.push('\n');
}

fn write_cells(out: &mut String, values: &[f64]) {
    for value in values {
        let _ = write!(out, "{:.4}\t", value);
    }
    out.push('\n');
    out.push('\n');
}

pub fn format_jacobian(jacobian: &JacobianMatrix) -> String {
    let mut out = String::from("Jacobian Matrix: \n");
    write_rows(&mut out, jacobian);
    out
}

pub fn format_transform(transform: &RigidTransform) -> String {
    let mut out = String::from("Transform Matrix: \n");
    write_rows(&mut out, transform.matrix());
    out
}

pub fn format_pose(pose: &CartesianPose) -> String {
    let mut out = String::from("Tool Position: \n");
    write_cells(&mut out, &[pose.x, pose.y, pose.z]);
    out
}

pub fn format_joint_angles(angles: &JointAngles) -> String {
    let mut out = String::from("Joint Angles: \n");
    write_cells(&mut out, &angles.to_array());
    out
}
