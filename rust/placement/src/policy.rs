// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-asset category policies.
//!
//! Each asset type declares which room object categories are hazardous or
//! merely non-ideal to place it near, and whether the bare floor is a good
//! spot. Tables are static configuration: built in, or loaded from JSON such as
//!
//! ```json
//! {
//!   "lamp": {
//!     "neutral": ["sofa"],
//!     "fire_hazard": ["fireplace"],
//!     "electrical_hazard": ["sink", "bathtub"],
//!     "is_floor_okay": true
//!   }
//! }
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{Error, Result};

/// How a policy rates a category, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    ElectricalHazard,
    FireHazard,
    Neutral,
}

/// Category sets and floor rule for one asset type.
///
/// The sets may overlap; lookups resolve overlap as
/// electrical hazard > fire hazard > neutral.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetCategoryPolicy {
    #[serde(default)]
    pub neutral: FxHashSet<Category>,
    #[serde(default)]
    pub fire_hazard: FxHashSet<Category>,
    #[serde(default)]
    pub electrical_hazard: FxHashSet<Category>,
    #[serde(default)]
    pub is_floor_okay: bool,
}

impl AssetCategoryPolicy {
    pub fn new(
        neutral: &[Category],
        fire_hazard: &[Category],
        electrical_hazard: &[Category],
        is_floor_okay: bool,
    ) -> Self {
        Self {
            neutral: neutral.iter().copied().collect(),
            fire_hazard: fire_hazard.iter().copied().collect(),
            electrical_hazard: electrical_hazard.iter().copied().collect(),
            is_floor_okay,
        }
    }

    pub fn is_electrical_hazard(&self, category: Category) -> bool {
        self.electrical_hazard.contains(&category)
    }

    pub fn is_fire_hazard(&self, category: Category) -> bool {
        self.fire_hazard.contains(&category)
    }

    pub fn is_neutral(&self, category: Category) -> bool {
        self.neutral.contains(&category)
    }

    /// Most severe rating of `category`, `None` if it is unflagged.
    pub fn severity(&self, category: Category) -> Option<Severity> {
        if self.is_electrical_hazard(category) {
            Some(Severity::ElectricalHazard)
        } else if self.is_fire_hazard(category) {
            Some(Severity::FireHazard)
        } else if self.is_neutral(category) {
            Some(Severity::Neutral)
        } else {
            None
        }
    }
}

/// Immutable lookup of policies by asset type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyTable {
    policies: FxHashMap<String, AssetCategoryPolicy>,
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The policies shipped with the stock asset catalog.
    pub fn builtin() -> Self {
        use Category::*;

        let mut table = Self::new();
        table.insert(
            "toy",
            AssetCategoryPolicy::new(&[Storage, Sofa, Sink], &[Oven, Fireplace], &[], true),
        );
        table.insert(
            "toaster",
            AssetCategoryPolicy::new(
                &[Storage, Bed, WasherDryer, Sofa, Chair],
                &[Oven, Fireplace],
                &[Sink, WasherDryer, Toilet, Bathtub, Dishwasher],
                false,
            ),
        );
        table.insert(
            "tricycle",
            AssetCategoryPolicy::new(
                &[Storage, Table, Sofa, Chair, Stove, WasherDryer, Dishwasher],
                &[],
                &[],
                true,
            ),
        );
        table
    }

    /// Parses a table from a JSON object keyed by asset type.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        tracing::debug!(assets = table.len(), "loaded policy table");
        Ok(table)
    }

    pub fn insert(&mut self, asset_type: impl Into<String>, policy: AssetCategoryPolicy) {
        self.policies.insert(asset_type.into(), policy);
    }

    /// Policy for `asset_type`; unknown assets are a configuration error.
    pub fn get(&self, asset_type: &str) -> Result<&AssetCategoryPolicy> {
        self.policies
            .get(asset_type)
            .ok_or_else(|| Error::MissingPolicy(asset_type.to_string()))
    }

    /// Asset types with a policy, sorted.
    pub fn asset_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.policies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
