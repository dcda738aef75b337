// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interactive placement gesture.
//!
//! A gesture picks up an asset (`Idle → Tracking`), reclassifies it on every
//! pose update while the asset snaps to the returned transform, and ends in
//! `Placed` if the last update found a surface or `Discarded` if it did not.
//! Not finding a surface is an ordinary outcome, not an error.

use roomfit_geometry::Transform;

use crate::classifier::{Placement, PlacementClassifier};
use crate::error::{Error, Result};
use crate::policy::{AssetCategoryPolicy, PolicyTable};
use crate::room::RoomObject;

/// Where the session is in the gesture lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// No asset picked up.
    #[default]
    Idle,
    /// An asset follows the user's pointer.
    Tracking,
    /// The last gesture left its asset in the scene.
    Placed,
    /// The last gesture removed its asset.
    Discarded,
}

/// An asset left in the scene by a finished gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedAsset {
    pub asset_type: String,
    pub transform: Transform,
    /// Verdict at the moment of release.
    pub placement: Placement,
}

/// How a gesture ended.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    Placed(PlacedAsset),
    Discarded { asset_type: String },
}

#[derive(Debug, Clone)]
struct ActiveGesture {
    asset_type: String,
    policy: AssetCategoryPolicy,
    transform: Transform,
    last: Option<Placement>,
}

/// Drives one placement gesture at a time.
#[derive(Debug, Clone, Default)]
pub struct PlacementSession {
    classifier: PlacementClassifier,
    state: GestureState,
    active: Option<ActiveGesture>,
}

impl PlacementSession {
    pub fn new(classifier: PlacementClassifier) -> Self {
        Self {
            classifier,
            state: GestureState::Idle,
            active: None,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Asset type being tracked, if any.
    pub fn asset_type(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.asset_type.as_str())
    }

    /// Current transform of the tracked asset.
    pub fn asset_transform(&self) -> Option<&Transform> {
        self.active.as_ref().map(|a| &a.transform)
    }

    /// Most recent classification of the tracked asset.
    pub fn last_placement(&self) -> Option<&Placement> {
        self.active.as_ref().and_then(|a| a.last.as_ref())
    }

    /// Picks up an asset at `initial`, new or already placed.
    ///
    /// Fails closed when `policies` has no entry for `asset_type`.
    pub fn begin(&mut self, asset_type: &str, policies: &PolicyTable, initial: Transform) -> Result<()> {
        if self.state == GestureState::Tracking {
            return Err(Error::AlreadyTracking);
        }
        let policy = policies.get(asset_type)?.clone();

        tracing::debug!(asset_type, "placement gesture started");
        self.active = Some(ActiveGesture {
            asset_type: asset_type.to_string(),
            policy,
            transform: initial,
            last: None,
        });
        self.state = GestureState::Tracking;
        Ok(())
    }

    /// Reclassifies the tracked asset for a new pointer pose.
    pub fn update(
        &mut self,
        candidate: Option<&Transform>,
        fallback: &Transform,
        objects: &[RoomObject],
    ) -> Result<&Placement> {
        let state = self.state;
        let classifier = self.classifier;
        let active = match self.active.as_mut() {
            Some(active) if state == GestureState::Tracking => active,
            _ => return Err(Error::NotTracking(state)),
        };

        let placement = classifier.classify(candidate, fallback, objects, &active.policy);
        active.transform = placement.transform;
        Ok(&*active.last.insert(placement))
    }

    /// Releases the asset.
    pub fn end(&mut self) -> Result<GestureOutcome> {
        if self.state != GestureState::Tracking {
            return Err(Error::NotTracking(self.state));
        }
        let Some(active) = self.active.take() else {
            return Err(Error::NotTracking(self.state));
        };

        let outcome = match active.last {
            Some(placement) if placement.is_on_surface() => {
                self.state = GestureState::Placed;
                GestureOutcome::Placed(PlacedAsset {
                    asset_type: active.asset_type,
                    transform: active.transform,
                    placement,
                })
            }
            _ => {
                self.state = GestureState::Discarded;
                GestureOutcome::Discarded {
                    asset_type: active.asset_type,
                }
            }
        };

        tracing::debug!(state = ?self.state, "placement gesture ended");
        Ok(outcome)
    }
}
