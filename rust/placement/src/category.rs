// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Semantic categories of detected room objects.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Category assigned to labels that do not name any category.
///
/// Unrecognized text maps to storage rather than [`Category::Unknown`], so a
/// mistyped label silently becomes a real category.
pub const LABEL_FALLBACK: Category = Category::Storage;

/// Closed set of object categories reported by the room scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Unknown,
    Storage,
    Refrigerator,
    Stove,
    Bed,
    Sink,
    WasherDryer,
    Toilet,
    Bathtub,
    Oven,
    Dishwasher,
    Table,
    Sofa,
    Chair,
    Fireplace,
    Television,
    Stairs,
}

impl Category {
    /// Every category, in the order a label picker lists them.
    pub const ALL: [Category; 17] = [
        Category::Unknown,
        Category::Storage,
        Category::Refrigerator,
        Category::Stove,
        Category::Bed,
        Category::Sink,
        Category::WasherDryer,
        Category::Toilet,
        Category::Bathtub,
        Category::Oven,
        Category::Dishwasher,
        Category::Table,
        Category::Sofa,
        Category::Chair,
        Category::Fireplace,
        Category::Television,
        Category::Stairs,
    ];

    /// User-facing label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "Unknown",
            Category::Storage => "Storage",
            Category::Refrigerator => "Refrigerator",
            Category::Stove => "Stove",
            Category::Bed => "Bed",
            Category::Sink => "Sink",
            Category::WasherDryer => "Washer",
            Category::Toilet => "Toilet",
            Category::Bathtub => "Bathtub",
            Category::Oven => "Oven",
            Category::Dishwasher => "Dishwasher",
            Category::Table => "Table",
            Category::Sofa => "Sofa",
            Category::Chair => "Chair",
            Category::Fireplace => "Fireplace",
            Category::Television => "Screen",
            Category::Stairs => "Stairs",
        }
    }

    /// Maps a label to its category, falling back to [`LABEL_FALLBACK`].
    ///
    /// Every picker label maps to its own category, including "Unknown",
    /// which stays [`Category::Unknown`] and so matches no policy set.
    pub fn from_label(text: &str) -> Category {
        match text.parse() {
            Ok(category) => category,
            Err(_) => {
                tracing::warn!(label = text, fallback = %LABEL_FALLBACK, "unrecognized category label");
                LABEL_FALLBACK
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Strict parse of a user-facing label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
