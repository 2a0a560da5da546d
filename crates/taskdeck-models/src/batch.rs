//! Per-space fetch results.
//!
//! A workspace fetch returns one bundle per space, with parallel arrays for
//! the space itself, its folders, lists, and tasks. Tasks arrive raw and
//! must be sanitized before the bundle can be merged into the store.

use serde::{Deserialize, Serialize};

use crate::entity::{FolderEntity, ListEntity, RawTask, SpaceEntity, TaskEntity};
use crate::meta::MetaCatalog;
use crate::sanitize::sanitize_tasks;

/// One space's fetch result as it comes off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchedSpace {
    #[serde(default)]
    pub space: Vec<SpaceEntity>,
    #[serde(default)]
    pub folder: Vec<FolderEntity>,
    #[serde(default)]
    pub list: Vec<ListEntity>,
    #[serde(default)]
    pub task: Vec<RawTask>,
}

impl FetchedSpace {
    /// Runs the raw tasks through the sanitizer, producing a batch the
    /// store can merge.
    pub fn sanitize(self, catalog: &MetaCatalog) -> SpaceBatch {
        SpaceBatch {
            spaces: self.space,
            folders: self.folder,
            lists: self.list,
            tasks: sanitize_tasks(self.task, &catalog.priorities, &catalog.statuses),
        }
    }
}

/// A sanitized per-space batch, ready for the bulk loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceBatch {
    pub spaces: Vec<SpaceEntity>,
    pub folders: Vec<FolderEntity>,
    pub lists: Vec<ListEntity>,
    pub tasks: Vec<TaskEntity>,
}
