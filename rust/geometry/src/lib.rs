// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RoomFit Geometry
//!
//! Oriented bounding box queries used to judge where an asset is being
//! placed relative to scanned room objects, built on nalgebra.

pub mod error;
pub mod oriented_box;
pub mod pose;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Rotation3, Unit, Vector3};

pub use error::{Error, Result};
pub use oriented_box::{
    OrientedBox, Proximity, ABOVE_THRESHOLD, CONTAINED_THRESHOLD, NEAR_THRESHOLD,
};
pub use pose::{
    rigid_pose, rotation_pose, rotation_pose_x, rotation_pose_y, rotation_pose_z, scale_pose,
    translation_pose, PoseExt,
};

/// A placement or object pose as a homogeneous 4x4 matrix.
pub type Transform = Matrix4<f64>;
