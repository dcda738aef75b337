// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement classification.
//!
//! Given a candidate placement transform and the room objects, decide
//! whether the placement is good, neutral or hazardous. Rules, most severe
//! first; within a rule the first object in list order wins:
//!
//! 1. near an electrical-hazard object → [`PlacementResult::ElectricalHazard`]
//! 2. near a fire-hazard object → [`PlacementResult::FireHazard`]
//! 3. inside a neutral object → [`PlacementResult::Neutral`] ([`NeutralBasis::Inside`])
//! 4. resting on a neutral object → [`PlacementResult::Neutral`] ([`NeutralBasis::OnTop`])
//! 5. resting on any other object → [`PlacementResult::Good`] ([`GoodBasis::OnTop`])
//! 6. otherwise the asset is on the floor: good if the policy allows the
//!    floor, neutral if not.
//!
//! Without a candidate the asset is not over any surface and the result is
//! [`PlacementResult::None`] with the fallback transform.

use roomfit_geometry::{PoseExt, Transform};

use crate::config::PlacementConfig;
use crate::error::Result;
use crate::policy::AssetCategoryPolicy;
use crate::room::{ObjectId, RoomObject};

/// Outcome without its payload; what presentation keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementKind {
    Good,
    Neutral,
    FireHazard,
    ElectricalHazard,
    None,
}

/// Why a placement is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeutralBasis {
    /// Inside the bounds of a neutral object.
    Inside,
    /// Resting on top of a neutral object.
    OnTop,
    /// On the floor, which the policy does not allow.
    Floor,
}

/// Why a placement is good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoodBasis {
    /// Resting on top of an unflagged object.
    OnTop,
    /// On the floor, which the policy allows.
    Floor,
}

/// Classification verdict, with the object that triggered it when there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementResult {
    ElectricalHazard { object: ObjectId },
    FireHazard { object: ObjectId },
    Neutral { object: Option<ObjectId>, basis: NeutralBasis },
    Good { basis: GoodBasis },
    None,
}

impl PlacementResult {
    pub fn kind(&self) -> PlacementKind {
        match self {
            PlacementResult::ElectricalHazard { .. } => PlacementKind::ElectricalHazard,
            PlacementResult::FireHazard { .. } => PlacementKind::FireHazard,
            PlacementResult::Neutral { .. } => PlacementKind::Neutral,
            PlacementResult::Good { .. } => PlacementKind::Good,
            PlacementResult::None => PlacementKind::None,
        }
    }

    /// The room object responsible for the verdict, if any.
    pub fn trigger(&self) -> Option<ObjectId> {
        match self {
            PlacementResult::ElectricalHazard { object } | PlacementResult::FireHazard { object } => {
                Some(*object)
            }
            PlacementResult::Neutral { object, .. } => *object,
            PlacementResult::Good { .. } | PlacementResult::None => None,
        }
    }

    pub fn is_hazard(&self) -> bool {
        matches!(
            self,
            PlacementResult::ElectricalHazard { .. } | PlacementResult::FireHazard { .. }
        )
    }
}

/// A verdict and the transform to apply to the asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub result: PlacementResult,
    pub transform: Transform,
}

impl Placement {
    /// Whether the asset sits on a detected surface.
    pub fn is_on_surface(&self) -> bool {
        self.result != PlacementResult::None
    }
}

/// First matching object for each rule, filled in one pass over the room.
#[derive(Debug, Default)]
struct Matches {
    electrical: Option<ObjectId>,
    fire: Option<ObjectId>,
    inside_neutral: Option<ObjectId>,
    on_neutral: Option<ObjectId>,
    on_any: bool,
}

/// Stateless classifier parameterized by distance thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlacementClassifier {
    config: PlacementConfig,
}

impl PlacementClassifier {
    /// Builds a classifier, rejecting negative or non-finite thresholds.
    pub fn try_new(config: PlacementConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Classifier with thresholds read from the environment.
    pub fn from_env() -> Result<Self> {
        Self::try_new(PlacementConfig::from_env()?)
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Classifies `candidate` against `objects` under `policy`.
    ///
    /// The returned transform is `candidate` itself when present, otherwise
    /// `fallback`.
    pub fn classify(
        &self,
        candidate: Option<&Transform>,
        fallback: &Transform,
        objects: &[RoomObject],
        policy: &AssetCategoryPolicy,
    ) -> Placement {
        let Some(candidate) = candidate else {
            tracing::debug!("no surface under candidate, using fallback transform");
            return Placement {
                result: PlacementResult::None,
                transform: *fallback,
            };
        };

        let result = self.evaluate(candidate, objects, policy);
        tracing::debug!(kind = ?result.kind(), trigger = ?result.trigger(), "classified placement");

        Placement {
            result,
            transform: *candidate,
        }
    }

    fn evaluate(
        &self,
        candidate: &Transform,
        objects: &[RoomObject],
        policy: &AssetCategoryPolicy,
    ) -> PlacementResult {
        let point = candidate.translation();
        let mut found = Matches::default();

        for object in objects {
            let category = object.category();
            let bounds = object.bounds();
            let proximity = bounds.is_near_within(&point, self.config.near_threshold);

            tracing::trace!(
                id = %object.id(),
                %category,
                distance = proximity.distance,
                near = proximity.is_near,
                "evaluating room object"
            );

            if proximity.is_near {
                if policy.is_electrical_hazard(category) {
                    found.electrical = Some(object.id());
                    // nothing outranks this
                    break;
                }
                if policy.is_fire_hazard(category) {
                    found.fire = found.fire.or(Some(object.id()));
                    continue;
                }
                if policy.is_neutral(category) && proximity.distance < self.config.contained_threshold {
                    found.inside_neutral = found.inside_neutral.or(Some(object.id()));
                    continue;
                }
            }

            if bounds.is_point_above_within(&point, self.config.above_threshold) {
                found.on_any = true;
                if policy.is_neutral(category) {
                    found.on_neutral = found.on_neutral.or(Some(object.id()));
                }
            }
        }

        if let Some(object) = found.electrical {
            PlacementResult::ElectricalHazard { object }
        } else if let Some(object) = found.fire {
            PlacementResult::FireHazard { object }
        } else if let Some(object) = found.inside_neutral {
            PlacementResult::Neutral {
                object: Some(object),
                basis: NeutralBasis::Inside,
            }
        } else if let Some(object) = found.on_neutral {
            PlacementResult::Neutral {
                object: Some(object),
                basis: NeutralBasis::OnTop,
            }
        } else if found.on_any {
            PlacementResult::Good {
                basis: GoodBasis::OnTop,
            }
        } else if policy.is_floor_okay {
            PlacementResult::Good {
                basis: GoodBasis::Floor,
            }
        } else {
            PlacementResult::Neutral {
                object: None,
                basis: NeutralBasis::Floor,
            }
        }
    }
}

/// Classifies with the default thresholds.
pub fn classify(
    candidate: Option<&Transform>,
    fallback: &Transform,
    objects: &[RoomObject],
    policy: &AssetCategoryPolicy,
) -> Placement {
    PlacementClassifier::default().classify(candidate, fallback, objects, policy)
}
