//! The store struct and its scalar state.

use serde::Serialize;
use tracing::debug;

use taskdeck_models::{EntityId, FolderEntity, ListEntity, SpaceEntity, TaskEntity};

/// Flat-by-type state for the active workspace session.
///
/// Collections keep insertion order; order carries no meaning beyond
/// display. Entities are never removed or mutated in place; the store grows
/// until [`reset`](WorkspaceStore::reset) clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkspaceStore {
    pub spaces: Vec<SpaceEntity>,
    pub folders: Vec<FolderEntity>,
    pub lists: Vec<ListEntity>,
    pub tasks: Vec<TaskEntity>,

    /// Currently selected entity, if any. UI-only; not validated against
    /// the collections.
    pub active_item: Option<EntityId>,

    /// Display name for the active item.
    pub active_item_name: String,

    /// Most recent operation failure. Overwritten per failure; only the
    /// latest is visible.
    pub last_error: Option<String>,
}

impl WorkspaceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an entity as the active item. The id is not checked against
    /// the collections.
    pub fn set_active(&mut self, id: EntityId) {
        self.active_item = Some(id);
    }

    /// Sets the display name shown for the active item.
    pub fn set_active_name(&mut self, name: impl Into<String>) {
        self.active_item_name = name.into();
    }

    /// Records an operation failure, replacing any previous one.
    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(error = %message, "recording operation failure");
        self.last_error = Some(message);
    }

    /// Restores the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
