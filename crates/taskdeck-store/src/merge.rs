//! Bulk loader: merge fetched per-space batches into the store.

use tracing::debug;

use taskdeck_models::{Identified, SpaceBatch};

use crate::store::WorkspaceStore;

/// Appends `item` unless an entity with the same id is already present.
///
/// Dedup is keyed strictly on the server-assigned id: repeated fetches
/// deserialize into fresh structs, so structural or reference identity
/// would never match.
fn push_unique<T: Identified>(collection: &mut Vec<T>, item: T) {
    if collection
        .iter()
        .any(|existing| existing.entity_id() == item.entity_id())
    {
        debug!(id = %item.entity_id(), "skipping already-loaded entity");
        return;
    }
    collection.push(item);
}

impl WorkspaceStore {
    /// Merges a sequence of sanitized per-space batches into the store.
    ///
    /// Records are appended in batch order, each collection deduplicated by
    /// entity id. No parent-reference repair happens here: fetched records
    /// already carry their children arrays.
    ///
    /// Mutation is in place and per record; a reader may observe a batch
    /// partially applied mid-merge.
    pub fn merge_fetched(&mut self, batches: Vec<SpaceBatch>) {
        for batch in batches {
            for space in batch.spaces {
                push_unique(&mut self.spaces, space);
            }
            for folder in batch.folders {
                push_unique(&mut self.folders, folder);
            }
            for list in batch.lists {
                push_unique(&mut self.lists, list);
            }
            for task in batch.tasks {
                push_unique(&mut self.tasks, task);
            }
        }
    }
}
