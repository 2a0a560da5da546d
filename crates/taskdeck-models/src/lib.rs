//! Core data models for Taskdeck.
//!
//! This crate provides the fundamental data types used throughout the
//! Taskdeck system: workspace entities, id newtypes, priority/status
//! metadata, and the task sanitizer.

pub mod batch;
pub mod entity;
pub mod ids;
pub mod meta;
pub mod sanitize;

// Re-export main types
pub use batch::{FetchedSpace, SpaceBatch};
pub use entity::{
    ChildRef, ChildType, FolderEntity, Identified, ListEntity, ParentRef, ParentType, RawTask,
    SpaceEntity, TaskEntity, TaskParentRef,
};
pub use ids::{EntityId, UserId, WorkspaceId};
pub use meta::{MetaCatalog, Priority, Status, TaskMeta};
pub use sanitize::{sanitize_task, sanitize_tasks};
