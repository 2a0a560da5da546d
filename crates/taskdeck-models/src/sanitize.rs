//! Task sanitization: resolve raw priority/status ids into full metadata.
//!
//! Pure and synchronous. Every task coming off the wire must pass through
//! here before it enters the store; a task whose metadata id has no catalog
//! match keeps `None` rather than failing the batch.

use crate::entity::{RawTask, TaskEntity};
use crate::meta::{Priority, Status};

/// Resolves a single raw task against the given lookup tables.
pub fn sanitize_task(raw: RawTask, priorities: &[Priority], statuses: &[Status]) -> TaskEntity {
    let priority = raw
        .priority
        .and_then(|id| priorities.iter().find(|p| p.id == id).cloned());
    let status = raw
        .status
        .and_then(|id| statuses.iter().find(|s| s.id == id).cloned());

    TaskEntity {
        id: raw.id,
        name: raw.name,
        priority,
        status,
        parent: raw.parent,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
    }
}

/// Resolves a batch of raw tasks, preserving order.
pub fn sanitize_tasks(
    raw: Vec<RawTask>,
    priorities: &[Priority],
    statuses: &[Status],
) -> Vec<TaskEntity> {
    raw.into_iter()
        .map(|task| sanitize_task(task, priorities, statuses))
        .collect()
}
