// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room objects and the registry that tracks them across scan updates.
//!
//! The room scanner reports whole-room updates (objects added, changed,
//! removed, or a full refresh). [`RoomModel`] folds those into an ordered
//! list of [`RoomObject`]s keyed by the scanner's stable identifiers. Box
//! geometry is replaced wholesale on every update; a label the user typed
//! survives geometry updates and overrides the detected category.

use std::fmt;

use nalgebra::Vector3;
use roomfit_geometry::{OrientedBox, Transform};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::Category;
use crate::error::Result;

/// Opaque identifier of a physical room object, stable for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(Uuid);

impl ObjectId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ObjectId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One object as reported by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSnapshot {
    pub id: ObjectId,
    pub pose: Transform,
    /// Full edge lengths along the local axes.
    pub dimensions: Vector3<f64>,
    pub category: Category,
}

/// A detected object with its current geometry and category.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomObject {
    id: ObjectId,
    bounds: OrientedBox,
    detected_category: Category,
    edited: Option<EditedLabel>,
}

/// User-typed label and the category it resolved to when it was set.
#[derive(Debug, Clone, PartialEq)]
struct EditedLabel {
    text: String,
    category: Category,
}

impl RoomObject {
    pub fn new(id: ObjectId, bounds: OrientedBox, detected_category: Category) -> Self {
        Self {
            id,
            bounds,
            detected_category,
            edited: None,
        }
    }

    pub fn from_snapshot(snapshot: &ObjectSnapshot) -> Result<Self> {
        let bounds = OrientedBox::from_dimensions(snapshot.pose, snapshot.dimensions)?;
        Ok(Self::new(snapshot.id, bounds, snapshot.category))
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn bounds(&self) -> &OrientedBox {
        &self.bounds
    }

    pub fn detected_category(&self) -> Category {
        self.detected_category
    }

    pub fn edited_label(&self) -> Option<&str> {
        self.edited.as_ref().map(|e| e.text.as_str())
    }

    /// The label shown to the user: the edited label if set, else the detected category.
    pub fn label(&self) -> &str {
        self.edited_label().unwrap_or(self.detected_category.as_str())
    }

    /// Category used for placement decisions.
    pub fn category(&self) -> Category {
        match &self.edited {
            Some(edited) => edited.category,
            None => self.detected_category,
        }
    }

    /// Overrides the detected category with user text. Empty text clears the override.
    ///
    /// The text is mapped to a category here, once, so an unrecognized label
    /// is reported when it is entered rather than on every classification.
    pub fn set_label(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.edited = if text.is_empty() {
            None
        } else {
            let category = Category::from_label(&text);
            Some(EditedLabel { text, category })
        };
    }

    pub fn clear_label(&mut self) {
        self.edited = None;
    }

    fn replace_geometry(&mut self, bounds: OrientedBox, detected_category: Category) {
        self.bounds = bounds;
        self.detected_category = detected_category;
    }
}

/// A batch of changes reported by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomUpdate {
    Added(Vec<ObjectSnapshot>),
    Changed(Vec<ObjectSnapshot>),
    Removed(Vec<ObjectId>),
    /// The complete current room; anything absent is removed.
    Refreshed(Vec<ObjectSnapshot>),
}

/// Counts of what an update did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomDelta {
    pub added: usize,
    pub changed: usize,
    pub removed: usize,
}

/// Ordered registry of room objects, in first-detection order.
#[derive(Debug, Clone, Default)]
pub struct RoomModel {
    objects: Vec<RoomObject>,
    index: FxHashMap<ObjectId, usize>,
}

impl RoomModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> &[RoomObject] {
        &self.objects
    }

    pub fn get(&self, id: ObjectId) -> Option<&RoomObject> {
        self.index.get(&id).map(|&i| &self.objects[i])
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut RoomObject> {
        match self.index.get(&id) {
            Some(&i) => Some(&mut self.objects[i]),
            None => None,
        }
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Applies a scanner update.
    ///
    /// Adds for known ids and changes for unknown ids are skipped with a
    /// warning. Snapshots with invalid dimensions fail the whole update
    /// before anything is modified.
    pub fn apply(&mut self, update: RoomUpdate) -> Result<RoomDelta> {
        let mut delta = RoomDelta::default();

        match update {
            RoomUpdate::Added(snapshots) => {
                for object in build_objects(&snapshots)? {
                    if self.contains(object.id) {
                        tracing::warn!(id = %object.id, "ignoring add for an object that already exists");
                        continue;
                    }
                    self.push(object);
                    delta.added += 1;
                }
            }
            RoomUpdate::Changed(snapshots) => {
                for object in build_objects(&snapshots)? {
                    match self.get_mut(object.id) {
                        Some(existing) => {
                            existing.replace_geometry(object.bounds, object.detected_category);
                            delta.changed += 1;
                        }
                        None => {
                            tracing::warn!(id = %object.id, "ignoring change for an unknown object");
                        }
                    }
                }
            }
            RoomUpdate::Removed(ids) => {
                let ids: FxHashSet<ObjectId> = ids.into_iter().collect();
                delta.removed = self.retain(|o| !ids.contains(&o.id));
            }
            RoomUpdate::Refreshed(snapshots) => {
                let objects = build_objects(&snapshots)?;
                let present: FxHashSet<ObjectId> = objects.iter().map(|o| o.id).collect();
                delta.removed = self.retain(|o| present.contains(&o.id));

                for object in objects {
                    match self.get_mut(object.id) {
                        Some(existing) => {
                            existing.replace_geometry(object.bounds, object.detected_category);
                            delta.changed += 1;
                        }
                        None => {
                            self.push(object);
                            delta.added += 1;
                        }
                    }
                }
            }
        }

        tracing::debug!(
            added = delta.added,
            changed = delta.changed,
            removed = delta.removed,
            total = self.len(),
            "applied room update"
        );
        Ok(delta)
    }

    fn push(&mut self, object: RoomObject) {
        self.index.insert(object.id, self.objects.len());
        self.objects.push(object);
    }

    /// Keeps objects matching `keep`, returns how many were dropped.
    fn retain(&mut self, keep: impl Fn(&RoomObject) -> bool) -> usize {
        let before = self.objects.len();
        self.objects.retain(|o| keep(o));
        let removed = before - self.objects.len();
        if removed > 0 {
            self.reindex();
        }
        removed
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, object) in self.objects.iter().enumerate() {
            self.index.insert(object.id, i);
        }
    }
}

fn build_objects(snapshots: &[ObjectSnapshot]) -> Result<Vec<RoomObject>> {
    snapshots.iter().map(RoomObject::from_snapshot).collect()
}
