// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # RoomFit Placement
//!
//! Decides whether an asset being placed in a scanned room sits somewhere
//! good, somewhere merely non-ideal, or next to a fire or electrical hazard.
//!
//! The room scanner supplies labeled oriented boxes ([`RoomModel`]), the
//! interaction layer supplies a candidate placement transform on every
//! pointer move, and per-asset [`AssetCategoryPolicy`] records say which
//! categories matter. [`PlacementClassifier`] combines them into a
//! [`PlacementResult`]; [`presentation`] maps results to colors and text.
//!
//! ```
//! use roomfit_placement::{classify, PolicyTable, PlacementKind, RoomModel};
//! use roomfit_geometry::{translation_pose, Vector3};
//!
//! let policies = PolicyTable::builtin();
//! let room = RoomModel::new();
//! let candidate = translation_pose(&Vector3::new(1.0, 0.0, 2.0));
//! let fallback = translation_pose(&Vector3::new(0.0, 1.4, -1.0));
//!
//! let placement = classify(Some(&candidate), &fallback, room.objects(), policies.get("toaster")?);
//! // the toaster does not belong on the floor
//! assert_eq!(placement.result.kind(), PlacementKind::Neutral);
//! # Ok::<(), roomfit_placement::Error>(())
//! ```
//!
//! All operations are synchronous and side-effect free apart from logging;
//! callers serialize room updates and classification on one thread.

pub mod category;
pub mod classifier;
pub mod config;
pub mod error;
pub mod policy;
pub mod presentation;
pub mod room;
pub mod session;

pub use category::{Category, LABEL_FALLBACK};
pub use classifier::{
    classify, GoodBasis, NeutralBasis, Placement, PlacementClassifier, PlacementKind,
    PlacementResult,
};
pub use config::PlacementConfig;
pub use error::{Error, Result};
pub use policy::{AssetCategoryPolicy, PolicyTable, Severity};
pub use room::{ObjectId, ObjectSnapshot, RoomDelta, RoomModel, RoomObject, RoomUpdate};
pub use session::{GestureOutcome, GestureState, PlacedAsset, PlacementSession};
