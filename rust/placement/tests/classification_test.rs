// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end placement scenarios in a small scanned kitchen.

use approx::assert_relative_eq;
use roomfit_geometry::{rotation_pose_y, translation_pose, Transform, Vector3};
use roomfit_placement::{
    classify, AssetCategoryPolicy, Category, GestureOutcome, GoodBasis, NeutralBasis, ObjectId,
    ObjectSnapshot, PlacementKind, PlacementResult, PlacementSession, PolicyTable, RoomModel,
    RoomObject, RoomUpdate,
};
use std::f64::consts::FRAC_PI_2;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn at(x: f64, y: f64, z: f64) -> Transform {
    translation_pose(&Vector3::new(x, y, z))
}

fn fallback() -> Transform {
    at(0.0, 1.4, -1.0)
}

/// Object resting on the floor with its base centered on (x, 0, z).
fn snapshot(x: f64, z: f64, dimensions: Vector3<f64>, category: Category) -> ObjectSnapshot {
    ObjectSnapshot {
        id: ObjectId::new_random(),
        pose: at(x, dimensions.y / 2.0, z),
        dimensions,
        category,
    }
}

fn object(x: f64, z: f64, dimensions: Vector3<f64>, category: Category) -> RoomObject {
    RoomObject::from_snapshot(&snapshot(x, z, dimensions, category)).unwrap()
}

#[test]
fn electrical_hazard_beats_neutral_surface() {
    init_logging();
    let policy = AssetCategoryPolicy::new(&[Category::Storage], &[], &[Category::Sink], true);

    // a storage cabinet with a sink right next to it
    let cabinet = object(0.0, 0.0, Vector3::new(1.0, 0.9, 0.6), Category::Storage);
    let sink = object(0.6, 0.0, Vector3::new(0.2, 1.0, 0.6), Category::Sink);
    let sink_id = sink.id();
    let candidate = at(0.3, 0.91, 0.0);

    // resting on the cabinet top, 0.2 from the sink
    assert!(cabinet.bounds().is_point_above(&roomfit_geometry::Point3::new(0.3, 0.91, 0.0)));

    for objects in [vec![cabinet.clone(), sink.clone()], vec![sink.clone(), cabinet.clone()]] {
        let placement = classify(Some(&candidate), &fallback(), &objects, &policy);
        assert_eq!(placement.result, PlacementResult::ElectricalHazard { object: sink_id });
    }
}

#[test]
fn electrical_beats_fire_on_the_same_object() {
    let policy = AssetCategoryPolicy::new(&[Category::Oven], &[Category::Oven], &[Category::Oven], true);
    let oven = object(0.0, 0.0, Vector3::new(0.6, 0.9, 0.6), Category::Oven);
    let id = oven.id();
    let placement = classify(Some(&at(0.0, 0.91, 0.0)), &fallback(), &[oven], &policy);
    assert_eq!(placement.result, PlacementResult::ElectricalHazard { object: id });
}

#[test]
fn missing_candidate_always_yields_none() {
    let policies = PolicyTable::builtin();
    let objects = vec![
        object(0.0, 0.0, Vector3::new(0.6, 0.9, 0.6), Category::Sink),
        object(2.0, 0.0, Vector3::new(0.6, 0.9, 0.6), Category::Oven),
    ];
    for asset in policies.asset_types() {
        let placement = classify(None, &fallback(), &objects, policies.get(asset).unwrap());
        assert_eq!(placement.result, PlacementResult::None);
        assert_relative_eq!(placement.transform, fallback());
    }
}

#[test]
fn empty_room_uses_floor_rule() {
    let policies = PolicyTable::builtin();
    let candidate = at(1.0, 0.0, 1.0);

    let toy = classify(Some(&candidate), &fallback(), &[], policies.get("toy").unwrap());
    assert_eq!(toy.result, PlacementResult::Good { basis: GoodBasis::Floor });

    let toaster = classify(Some(&candidate), &fallback(), &[], policies.get("toaster").unwrap());
    assert_eq!(
        toaster.result,
        PlacementResult::Neutral { object: None, basis: NeutralBasis::Floor }
    );
}

#[test]
fn classification_is_idempotent() {
    let policies = PolicyTable::builtin();
    let objects = vec![
        object(0.0, 0.0, Vector3::new(1.2, 0.75, 0.8), Category::Table),
        object(1.5, 0.0, Vector3::new(0.6, 0.9, 0.6), Category::Dishwasher),
    ];
    let policy = policies.get("toaster").unwrap();
    for candidate in [at(0.0, 0.75, 0.0), at(1.2, 0.0, 0.0), at(5.0, 0.0, 5.0)] {
        let first = classify(Some(&candidate), &fallback(), &objects, policy);
        let second = classify(Some(&candidate), &fallback(), &objects, policy);
        assert_eq!(first, second);
    }
}

#[test]
fn toaster_around_the_kitchen() {
    let policies = PolicyTable::builtin();
    let toaster = policies.get("toaster").unwrap();

    let counter = object(0.0, 0.0, Vector3::new(2.0, 0.9, 0.6), Category::Table);
    let stove = object(3.0, 0.0, Vector3::new(0.6, 0.9, 0.6), Category::Oven);
    let bed = object(0.0, 4.0, Vector3::new(1.4, 0.5, 2.0), Category::Bed);
    let fireplace = object(-3.0, 0.0, Vector3::new(1.0, 1.0, 0.4), Category::Fireplace);
    let stove_id = stove.id();
    let bed_id = bed.id();
    let fireplace_id = fireplace.id();
    let objects = vec![counter, stove, bed, fireplace];

    let kind_at = |t: Transform| classify(Some(&t), &fallback(), &objects, toaster).result;

    // middle of the counter top
    assert_eq!(kind_at(at(0.0, 0.9, 0.0)), PlacementResult::Good { basis: GoodBasis::OnTop });
    // counter end next to the oven
    assert_eq!(kind_at(at(2.6, 0.9, 0.0)), PlacementResult::FireHazard { object: stove_id });
    // on the bed
    assert_eq!(
        kind_at(at(0.0, 0.52, 4.0)),
        PlacementResult::Neutral { object: Some(bed_id), basis: NeutralBasis::OnTop }
    );
    // on the floor in front of the fireplace
    assert_eq!(kind_at(at(-3.0, 0.0, 0.3)), PlacementResult::FireHazard { object: fireplace_id });
    // open floor
    assert_eq!(kind_at(at(0.0, 0.0, 2.0)).kind(), PlacementKind::Neutral);
}

#[test]
fn rotated_objects_are_respected() {
    let policy = AssetCategoryPolicy::new(&[Category::Sofa], &[], &[], true);
    // a 2m sofa turned to run along Z
    let pose = at(0.0, 0.4, 0.0) * rotation_pose_y(FRAC_PI_2);
    let sofa = RoomObject::from_snapshot(&ObjectSnapshot {
        id: ObjectId::new_random(),
        pose,
        dimensions: Vector3::new(2.0, 0.8, 0.9),
        category: Category::Sofa,
    })
    .unwrap();

    let along = classify(Some(&at(0.0, 0.8, 0.9)), &fallback(), std::slice::from_ref(&sofa), &policy);
    assert_eq!(along.result.kind(), PlacementKind::Neutral);

    let across = classify(Some(&at(0.9, 0.0, 0.0)), &fallback(), std::slice::from_ref(&sofa), &policy);
    assert_eq!(across.result, PlacementResult::Good { basis: GoodBasis::Floor });
}

#[test]
fn relabeled_object_changes_verdict() {
    let policies = PolicyTable::builtin();
    let mut room = RoomModel::new();
    let snap = snapshot(0.0, 0.0, Vector3::new(0.8, 0.9, 0.6), Category::Storage);
    let id = snap.id;
    room.apply(RoomUpdate::Added(vec![snap])).unwrap();

    let toy = policies.get("toy").unwrap();
    let top = at(0.0, 0.9, 0.0);
    assert_eq!(classify(Some(&top), &fallback(), room.objects(), toy).result.kind(), PlacementKind::Neutral);

    room.get_mut(id).unwrap().set_label("Oven");
    assert_eq!(
        classify(Some(&top), &fallback(), room.objects(), toy).result,
        PlacementResult::FireHazard { object: id }
    );
}

#[test]
fn full_gesture_over_live_room() {
    init_logging();
    let policies = PolicyTable::builtin();
    let mut room = RoomModel::new();
    let sink = snapshot(0.0, 0.0, Vector3::new(0.6, 0.9, 0.6), Category::Sink);
    room.apply(RoomUpdate::Refreshed(vec![sink])).unwrap();

    let mut session = PlacementSession::default();
    session.begin("toaster", &policies, fallback()).unwrap();

    let near_sink = *session.update(Some(&at(0.4, 0.0, 0.0)), &fallback(), room.objects()).unwrap();
    assert_eq!(near_sink.result.kind(), PlacementKind::ElectricalHazard);

    let far = at(3.0, 0.0, 0.0);
    let on_floor = *session.update(Some(&far), &fallback(), room.objects()).unwrap();
    assert_eq!(on_floor.result.kind(), PlacementKind::Neutral);

    match session.end().unwrap() {
        GestureOutcome::Placed(asset) => {
            assert_relative_eq!(asset.transform, far);
            assert_eq!(asset.placement.result.kind(), PlacementKind::Neutral);
        }
        other => panic!("expected placed, got {other:?}"),
    }
}
