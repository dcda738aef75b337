// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid half-extents ({x}, {y}, {z}): must be finite and non-negative")]
    InvalidHalfExtents { x: f64, y: f64, z: f64 },

    #[error("Invalid dimensions ({x}, {y}, {z}): must be finite and non-negative")]
    InvalidDimensions { x: f64, y: f64, z: f64 },
}
