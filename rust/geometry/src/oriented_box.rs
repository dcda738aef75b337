// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Oriented bounding boxes and the point queries used for asset placement.
//!
//! A box is a rigid pose plus half-extents along its local axes. All queries
//! are pure; they take a world-space point (usually the translation of a
//! candidate placement transform) and answer:
//!
//! - how far the point is from the box surface ([`OrientedBox::distance_to_surface`]),
//! - how far it is from the plane of the top face ([`OrientedBox::distance_to_top_plane`]),
//! - whether it projects inside the top face ([`OrientedBox::is_on_top_face`]),
//! - and the two thresholded predicates built on those.

use nalgebra::{Matrix4, Point3, Vector3};

use crate::error::{Error, Result};
use crate::pose::{PoseExt, AXIS_EPSILON};

/// Points closer than this to a box surface count as near it.
pub const NEAR_THRESHOLD: f64 = 0.25;

/// Points closer than this to the top plane (and over the face) count as resting on it.
pub const ABOVE_THRESHOLD: f64 = 0.05;

/// Surface distances below this count as inside the box.
pub const CONTAINED_THRESHOLD: f64 = 0.01;

/// Result of a proximity test: the verdict and the measured surface distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    pub is_near: bool,
    pub distance: f64,
}

/// A box with an arbitrary rigid pose and local half-extents.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientedBox {
    pose: Matrix4<f64>,
    half_extents: Vector3<f64>,
}

impl OrientedBox {
    /// Creates a box from a pose and half-extents along the local X, Y and Z axes.
    pub fn new(pose: Matrix4<f64>, half_extents: Vector3<f64>) -> Result<Self> {
        if !is_valid_extent(&half_extents) {
            return Err(Error::InvalidHalfExtents {
                x: half_extents.x,
                y: half_extents.y,
                z: half_extents.z,
            });
        }
        Ok(Self { pose, half_extents })
    }

    /// Creates a box from full edge lengths (width, height, depth).
    pub fn from_dimensions(pose: Matrix4<f64>, dimensions: Vector3<f64>) -> Result<Self> {
        if !is_valid_extent(&dimensions) {
            return Err(Error::InvalidDimensions {
                x: dimensions.x,
                y: dimensions.y,
                z: dimensions.z,
            });
        }
        Ok(Self {
            pose,
            half_extents: dimensions * 0.5,
        })
    }

    pub fn pose(&self) -> &Matrix4<f64> {
        &self.pose
    }

    pub fn half_extents(&self) -> &Vector3<f64> {
        &self.half_extents
    }

    pub fn dimensions(&self) -> Vector3<f64> {
        self.half_extents * 2.0
    }

    pub fn center(&self) -> Point3<f64> {
        self.pose.translation()
    }

    /// Center of the top face, `None` if the up axis is degenerate.
    pub fn top_face_center(&self) -> Option<Point3<f64>> {
        let up = self.pose.unit_up()?;
        Some(self.center() + up.into_inner() * self.half_extents.y)
    }

    /// Minimum distance from `point` to the box, `0.0` when inside or on it.
    ///
    /// The point is moved into the box frame with the inverse pose, where the
    /// box is axis aligned and the usual per-axis excess formula applies.
    /// Returns `f64::INFINITY` if the pose cannot be inverted.
    pub fn distance_to_surface(&self, point: &Point3<f64>) -> f64 {
        let Some(inverse) = self.pose.try_inverse() else {
            return f64::INFINITY;
        };
        let local = inverse.transform_point(point);

        let dx = (local.x.abs() - self.half_extents.x).max(0.0);
        let dy = (local.y.abs() - self.half_extents.y).max(0.0);
        let dz = (local.z.abs() - self.half_extents.z).max(0.0);

        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Perpendicular distance from `point` to the plane containing the top face.
    ///
    /// The plane normal is `forward x right`. Returns `None` when the pose
    /// axes are degenerate or parallel and no normal exists.
    pub fn distance_to_top_plane(&self, point: &Point3<f64>) -> Option<f64> {
        let forward = self.pose.unit_forward()?;
        let right = self.pose.unit_right()?;
        let top = self.top_face_center()?;

        let normal = forward.cross(&right);
        let len = normal.norm();
        if len < AXIS_EPSILON {
            return None;
        }

        Some((point - top).dot(&(normal / len)).abs())
    }

    /// Whether `point` projects strictly inside the top face.
    ///
    /// Uses the parallelogram test: with corner `a` and adjacent edges `ab`
    /// and `ad`, the point is inside iff `0 < ap.ab < ab.ab` and
    /// `0 < ap.ad < ad.ad`. Points on an edge are outside.
    pub fn is_on_top_face(&self, point: &Point3<f64>) -> bool {
        let (Some(right), Some(forward), Some(top)) = (
            self.pose.unit_right(),
            self.pose.unit_forward(),
            self.top_face_center(),
        ) else {
            return false;
        };

        let dx = right.into_inner() * self.half_extents.x;
        let dz = forward.into_inner() * self.half_extents.z;

        let a = top - dx + dz;
        let b = top - dx - dz;
        let d = top + dx + dz;

        let ap = point - a;
        let ab = b - a;
        let ad = d - a;

        let ap_ab = ap.dot(&ab);
        let ap_ad = ap.dot(&ad);

        0.0 < ap_ab && ap_ab < ab.dot(&ab) && 0.0 < ap_ad && ap_ad < ad.dot(&ad)
    }

    /// Whether `point` rests on the top face, using [`ABOVE_THRESHOLD`].
    pub fn is_point_above(&self, point: &Point3<f64>) -> bool {
        self.is_point_above_within(point, ABOVE_THRESHOLD)
    }

    /// Whether `point` is within `threshold` of the top plane and over the top face.
    pub fn is_point_above_within(&self, point: &Point3<f64>, threshold: f64) -> bool {
        match self.distance_to_top_plane(point) {
            Some(d) => d < threshold && self.is_on_top_face(point),
            None => false,
        }
    }

    /// Proximity test against [`NEAR_THRESHOLD`].
    pub fn is_near(&self, point: &Point3<f64>) -> Proximity {
        self.is_near_within(point, NEAR_THRESHOLD)
    }

    /// Proximity test against an explicit threshold.
    pub fn is_near_within(&self, point: &Point3<f64>, threshold: f64) -> Proximity {
        let distance = self.distance_to_surface(point);
        Proximity {
            is_near: distance < threshold,
            distance,
        }
    }
}

fn is_valid_extent(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite() && *c >= 0.0)
}
