// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lookup tables that turn classifications into visual state.
//!
//! Classification never touches rendering; a renderer reads these tables to
//! tint the asset's indicator box, choose the status line, and color the
//! boxes drawn around room objects.

use serde::Serialize;

use crate::category::Category;
use crate::classifier::PlacementKind;

/// Linear RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    /// Platform "system blue" used for plumbing fixtures.
    pub const SYSTEM_BLUE: Color = Color::new(0.0, 0.478, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Tint and opacity of the box drawn around a tracked asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Indicator {
    pub color: Color,
    pub opacity: f32,
}

impl Indicator {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Indicator for a classification.
pub fn indicator(kind: PlacementKind) -> Indicator {
    let (color, opacity) = match kind {
        PlacementKind::Good => (Color::GREEN, 0.5),
        PlacementKind::Neutral => (Color::YELLOW, 0.5),
        PlacementKind::FireHazard => (Color::RED, 1.0),
        PlacementKind::ElectricalHazard => (Color::BLUE, 1.0),
        PlacementKind::None => (Color::WHITE, 0.0),
    };
    Indicator { color, opacity }
}

/// Status line shown while an asset is tracked.
pub fn status_message(kind: PlacementKind) -> &'static str {
    match kind {
        PlacementKind::Good => "Message: Great object placement",
        PlacementKind::Neutral => "Message: Object on non-ideal surface",
        PlacementKind::FireHazard => "Warning: Object near fire hazard",
        PlacementKind::ElectricalHazard => "Warning: Object near electrical hazard",
        PlacementKind::None => "Message: Place object",
    }
}

/// Whether the triggering room object should be highlighted.
pub fn highlights_trigger(kind: PlacementKind) -> bool {
    matches!(kind, PlacementKind::FireHazard | PlacementKind::ElectricalHazard)
}

/// Box color for a room object of `category`.
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Sink | Category::WasherDryer | Category::Toilet | Category::Bathtub => {
            Color::SYSTEM_BLUE
        }
        Category::Fireplace => Color::RED,
        _ => Color::WHITE,
    }
}

/// Labels offered when the user relabels a room object.
pub fn picker_labels() -> Vec<&'static str> {
    Category::ALL.iter().map(Category::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazards_are_opaque_and_the_rest_translucent() {
        assert_eq!(indicator(PlacementKind::FireHazard).opacity, 1.0);
        assert_eq!(indicator(PlacementKind::ElectricalHazard).color, Color::BLUE);
        assert_eq!(indicator(PlacementKind::Good).opacity, 0.5);
        assert_eq!(indicator(PlacementKind::Neutral).color, Color::YELLOW);
        assert!(!indicator(PlacementKind::None).is_visible());
    }

    #[test]
    fn messages() {
        assert_eq!(status_message(PlacementKind::None), "Message: Place object");
        assert!(status_message(PlacementKind::ElectricalHazard).starts_with("Warning"));
        assert!(highlights_trigger(PlacementKind::FireHazard));
        assert!(!highlights_trigger(PlacementKind::Neutral));
    }

    #[test]
    fn category_colors() {
        assert_eq!(category_color(Category::Toilet), Color::SYSTEM_BLUE);
        assert_eq!(category_color(Category::Fireplace), Color::RED);
        assert_eq!(category_color(Category::Stove), Color::WHITE);
    }

    #[test]
    fn picker_starts_with_unknown() {
        let labels = picker_labels();
        assert_eq!(labels.len(), 17);
        assert_eq!(labels[0], "Unknown");
        assert!(labels.contains(&"Screen"));
    }
}
