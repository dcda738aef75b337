// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point queries against oriented boxes in realistic room poses.

use approx::assert_relative_eq;
use roomfit_geometry::{
    rigid_pose, rotation_pose_y, translation_pose, OrientedBox, Point3, Rotation3, Vector3,
};
use std::f64::consts::FRAC_PI_6;

/// A 1m cube resting on the floor with its base centered on the origin.
fn cube_on_origin() -> OrientedBox {
    OrientedBox::new(
        translation_pose(&Vector3::new(0.0, 0.5, 0.0)),
        Vector3::new(0.5, 0.5, 0.5),
    )
    .unwrap()
}

#[test]
fn point_just_above_top_rests_on_it() {
    let b = cube_on_origin();
    let p = Point3::new(0.0, 1.01, 0.0);
    assert_relative_eq!(b.distance_to_top_plane(&p).unwrap(), 0.01, epsilon = 1e-9);
    assert!(b.is_point_above(&p));
}

#[test]
fn point_well_above_top_does_not_rest_on_it() {
    let b = cube_on_origin();
    let p = Point3::new(0.0, 1.2, 0.0);
    assert_relative_eq!(b.distance_to_top_plane(&p).unwrap(), 0.2, epsilon = 1e-9);
    assert!(!b.is_point_above(&p));
}

#[test]
fn point_beyond_side_face() {
    let b = cube_on_origin();
    assert_relative_eq!(b.distance_to_surface(&Point3::new(2.0, 0.0, 0.0)), 1.5, epsilon = 1e-12);
}

#[test]
fn distance_is_monotonic_along_face_normal() {
    let b = cube_on_origin();
    let mut last = 0.0;
    for step in 0..40 {
        let x = 0.5 + step as f64 * 0.05;
        let d = b.distance_to_surface(&Point3::new(x, 0.5, 0.0));
        assert!(d >= 0.0);
        assert!(d >= last, "distance decreased at x = {x}");
        last = d;
    }
}

#[test]
fn interior_points_have_zero_distance() {
    let pose = rigid_pose(
        &Rotation3::from_euler_angles(0.2, 0.9, -0.4),
        &Vector3::new(3.0, 1.0, -2.0),
    );
    let b = OrientedBox::new(pose, Vector3::new(0.8, 0.4, 1.2)).unwrap();

    for &(x, y, z) in &[(0.0, 0.0, 0.0), (0.79, 0.39, 1.19), (-0.7, 0.1, -1.1), (0.3, -0.39, 0.0)] {
        let world = pose.transform_point(&Point3::new(x, y, z));
        assert_relative_eq!(b.distance_to_surface(&world), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn rotated_table_top() {
    // 1.6m x 0.8m table, 0.75m tall, turned 30 degrees about the vertical
    let pose = translation_pose(&Vector3::new(2.0, 0.375, 1.0)) * rotation_pose_y(FRAC_PI_6);
    let table = OrientedBox::from_dimensions(pose, Vector3::new(1.6, 0.75, 0.8)).unwrap();

    // a point on the long axis of the table, 0.7m from the center
    let along = pose.transform_point(&Point3::new(0.7, 0.375, 0.0));
    assert!(table.is_on_top_face(&along));
    assert!(table.is_point_above(&along));

    // the same offset along world X misses the rotated top near its corner
    let world_offset = Point3::new(2.0 + 0.7, 0.75, 1.0 + 0.39);
    assert!(!table.is_on_top_face(&world_offset));

    // under the table the plane distance is large
    let below = Point3::new(2.0, 0.0, 1.0);
    assert!(!table.is_point_above(&below));
    assert!(table.is_on_top_face(&below));
}

#[test]
fn near_threshold_is_strict() {
    let b = cube_on_origin();
    let inside = b.is_near(&Point3::new(0.0, 0.5, 0.0));
    assert!(inside.is_near);
    assert_eq!(inside.distance, 0.0);

    let far = b.is_near(&Point3::new(0.0, 0.5, 3.0));
    assert!(!far.is_near);
    assert_relative_eq!(far.distance, 2.5, epsilon = 1e-12);
}
