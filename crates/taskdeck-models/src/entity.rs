//! Workspace entities and the references that link them.
//!
//! The store keeps spaces, folders, lists, and tasks as flat collections;
//! hierarchy is expressed through [`ParentRef`] on children and [`ChildRef`]
//! entries in a parent's `children` sequence. Wire field names (`_id`,
//! `parentType`, `childType`, ...) follow the Taskdeck REST payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::EntityId;
use crate::meta::{Priority, Status};

/// Kind of entity a [`ChildRef`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChildType {
    Folder,
    List,
    Task,
}

/// Kind of entity a child declares as its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParentType {
    Space,
    Folder,
    List,
}

/// A (type, id) pointer from a parent's children list to a child entity.
///
/// Not an ownership relation; the child record itself lives in its flat
/// collection. The wire format carries the id twice (`id` and `_id`), so
/// both fields are kept and always hold the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRef {
    #[serde(rename = "childType")]
    pub child_type: ChildType,
    pub id: EntityId,
    #[serde(rename = "_id")]
    pub record_id: EntityId,
}

impl ChildRef {
    /// Creates a reference to the given child.
    pub fn new(child_type: ChildType, id: EntityId) -> Self {
        Self {
            child_type,
            record_id: id.clone(),
            id,
        }
    }
}

/// Declared parent of a folder or list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    #[serde(rename = "parentId")]
    pub parent_id: EntityId,
    #[serde(rename = "parentType")]
    pub parent_type: ParentType,
}

/// Declared parent of a task. Tasks always live in a list; a declared
/// parent type may arrive on the wire but attachment ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskParentRef {
    #[serde(rename = "parentId")]
    pub parent_id: EntityId,
    #[serde(rename = "parentType", default, skip_serializing_if = "Option::is_none")]
    pub parent_type: Option<ParentType>,
}

/// A top-level space in the active workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceEntity {
    #[serde(rename = "_id")]
    pub id: EntityId,

    pub name: String,

    /// Space metadata (colors, icons, statuses, views). Opaque to the store.
    #[serde(default)]
    pub meta: serde_json::Value,

    /// Ordered child references, as maintained by the server and the
    /// attachment resolver.
    #[serde(default)]
    pub children: Vec<ChildRef>,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A folder, nested under a space (or another container).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderEntity {
    #[serde(rename = "_id")]
    pub id: EntityId,

    pub name: String,

    pub parent: ParentRef,

    #[serde(default)]
    pub children: Vec<ChildRef>,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A list of tasks. In practice only task children are attached here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntity {
    #[serde(rename = "_id")]
    pub id: EntityId,

    pub name: String,

    pub parent: ParentRef,

    #[serde(default)]
    pub children: Vec<ChildRef>,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A task as stored: priority and status resolved to full metadata objects.
///
/// Raw tasks off the wire carry bare metadata ids; they must pass through
/// [`crate::sanitize::sanitize_tasks`] before entering the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEntity {
    #[serde(rename = "_id")]
    pub id: EntityId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    pub parent: TaskParentRef,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A task as fetched: priority and status are bare metadata ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTask {
    #[serde(rename = "_id")]
    pub id: EntityId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<EntityId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityId>,

    pub parent: TaskParentRef,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Entities that carry a server-assigned id. Lets the store dedup and look
/// up records generically across the four collections.
pub trait Identified {
    fn entity_id(&self) -> &EntityId;
}

impl Identified for SpaceEntity {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for FolderEntity {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for ListEntity {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl Identified for TaskEntity {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}
