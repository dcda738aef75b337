// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classifier thresholds, with defaults and environment overrides.

use roomfit_geometry::{ABOVE_THRESHOLD, CONTAINED_THRESHOLD, NEAR_THRESHOLD};

use crate::error::{Error, Result};

/// Distance thresholds used by the classifier, in scene units (meters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Surface distance under which an object counts as near.
    pub near_threshold: f64,
    /// Top-plane distance under which a point rests on an object.
    pub above_threshold: f64,
    /// Surface distance under which a point is inside an object.
    pub contained_threshold: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            near_threshold: NEAR_THRESHOLD,
            above_threshold: ABOVE_THRESHOLD,
            contained_threshold: CONTAINED_THRESHOLD,
        }
    }
}

impl PlacementConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `ROOMFIT_NEAR_THRESHOLD`, `ROOMFIT_ABOVE_THRESHOLD` and
    /// `ROOMFIT_CONTAINED_THRESHOLD`; unset or unparsable values keep the
    /// defaults. Values that parse but are negative or not finite (`NaN`,
    /// `inf`) are rejected with [`Error::InvalidThreshold`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`PlacementConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let read = |name: &str, default: f64| {
            lookup(name)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .unwrap_or(default)
        };

        let config = Self {
            near_threshold: read("ROOMFIT_NEAR_THRESHOLD", defaults.near_threshold),
            above_threshold: read("ROOMFIT_ABOVE_THRESHOLD", defaults.above_threshold),
            contained_threshold: read("ROOMFIT_CONTAINED_THRESHOLD", defaults.contained_threshold),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every threshold is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("near_threshold", self.near_threshold),
            ("above_threshold", self.above_threshold),
            ("contained_threshold", self.contained_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}
