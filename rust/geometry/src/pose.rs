// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rigid pose helpers
//!
//! A pose is a 4x4 homogeneous matrix whose first three columns are the
//! local right (X), up (Y) and forward (Z) axes expressed in world space and
//! whose fourth column is the translation. Room scanners and raycasts both
//! hand out poses in this layout.

use nalgebra::{Matrix4, Point3, Rotation3, Unit, Vector3};

/// Axis columns shorter than this are treated as degenerate.
pub const AXIS_EPSILON: f64 = 1e-9;

/// Read-only accessors for pose matrices.
pub trait PoseExt {
    /// World-space position of the pose origin (column 3).
    fn translation(&self) -> Point3<f64>;

    /// Normalized local X axis, `None` if the column is degenerate.
    fn unit_right(&self) -> Option<Unit<Vector3<f64>>>;

    /// Normalized local Y axis, `None` if the column is degenerate.
    fn unit_up(&self) -> Option<Unit<Vector3<f64>>>;

    /// Normalized local Z axis, `None` if the column is degenerate.
    fn unit_forward(&self) -> Option<Unit<Vector3<f64>>>;

    fn unit_left(&self) -> Option<Unit<Vector3<f64>>> {
        self.unit_right().map(|v| -v)
    }

    fn unit_down(&self) -> Option<Unit<Vector3<f64>>> {
        self.unit_up().map(|v| -v)
    }

    fn unit_back(&self) -> Option<Unit<Vector3<f64>>> {
        self.unit_forward().map(|v| -v)
    }
}

impl PoseExt for Matrix4<f64> {
    fn translation(&self) -> Point3<f64> {
        Point3::new(self[(0, 3)], self[(1, 3)], self[(2, 3)])
    }

    fn unit_right(&self) -> Option<Unit<Vector3<f64>>> {
        axis_column(self, 0)
    }

    fn unit_up(&self) -> Option<Unit<Vector3<f64>>> {
        axis_column(self, 1)
    }

    fn unit_forward(&self) -> Option<Unit<Vector3<f64>>> {
        axis_column(self, 2)
    }
}

fn axis_column(pose: &Matrix4<f64>, col: usize) -> Option<Unit<Vector3<f64>>> {
    let axis = Vector3::new(pose[(0, col)], pose[(1, col)], pose[(2, col)]);
    Unit::try_new(axis, AXIS_EPSILON)
}

/// Pure translation pose.
pub fn translation_pose(offset: &Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new_translation(offset)
}

/// Rotation about the world X axis (radians).
pub fn rotation_pose_x(radians: f64) -> Matrix4<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), radians).to_homogeneous()
}

/// Rotation about the world Y axis (radians).
pub fn rotation_pose_y(radians: f64) -> Matrix4<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), radians).to_homogeneous()
}

/// Rotation about the world Z axis (radians).
pub fn rotation_pose_z(radians: f64) -> Matrix4<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), radians).to_homogeneous()
}

/// Composed rotation `Rx * Ry * Rz` from per-axis angles in radians.
pub fn rotation_pose(radians: &Vector3<f64>) -> Matrix4<f64> {
    rotation_pose_x(radians.x) * rotation_pose_y(radians.y) * rotation_pose_z(radians.z)
}

/// Non-uniform scale pose. Boxes expect rigid poses, so this is only useful
/// for building malformed inputs and for presentation transforms.
pub fn scale_pose(scale: &Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new_nonuniform_scaling(scale)
}

/// Rigid pose from a rotation and a translation.
pub fn rigid_pose(rotation: &Rotation3<f64>, translation: &Vector3<f64>) -> Matrix4<f64> {
    let mut pose = rotation.to_homogeneous();
    pose[(0, 3)] = translation.x;
    pose[(1, 3)] = translation.y;
    pose[(2, 3)] = translation.z;
    pose
}
