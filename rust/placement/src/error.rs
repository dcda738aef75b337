// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for placement evaluation.

use crate::session::GestureState;

/// Result type alias for placement operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or driving placement evaluation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No category policy is configured for the asset type.
    #[error("no category policy configured for asset type {0:?}")]
    MissingPolicy(String),

    /// Text that does not name any category.
    #[error("unknown category label: {0:?}")]
    UnknownCategory(String),

    /// A policy table could not be parsed.
    #[error("invalid policy table: {0}")]
    PolicyParse(#[from] serde_json::Error),

    /// A threshold is negative or not finite.
    #[error("invalid threshold {name}: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// A gesture update arrived while no asset is being tracked.
    #[error("no placement gesture in progress (state: {0:?})")]
    NotTracking(GestureState),

    /// A new gesture started before the current one ended.
    #[error("a placement gesture is already in progress")]
    AlreadyTracking,

    /// Scanned geometry was rejected.
    #[error("geometry error: {0}")]
    Geometry(#[from] roomfit_geometry::Error),
}
