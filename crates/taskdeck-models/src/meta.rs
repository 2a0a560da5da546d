//! Priority and status metadata.
//!
//! The server stores priority/status assignments on tasks as bare ids; the
//! catalog below is the lookup table the sanitizer resolves them against.

use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// A priority level (e.g. "Urgent", "High").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A task status (e.g. "Open", "In Progress", "Done").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// The priority/status lookup tables known to the client session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaCatalog {
    #[serde(default)]
    pub priorities: Vec<Priority>,
    #[serde(default)]
    pub statuses: Vec<Status>,
}

impl MetaCatalog {
    pub fn new(priorities: Vec<Priority>, statuses: Vec<Status>) -> Self {
        Self {
            priorities,
            statuses,
        }
    }

    /// Looks up a priority by id.
    pub fn priority(&self, id: &EntityId) -> Option<&Priority> {
        self.priorities.iter().find(|p| &p.id == id)
    }

    /// Looks up a status by id.
    pub fn status(&self, id: &EntityId) -> Option<&Status> {
        self.statuses.iter().find(|s| &s.id == id)
    }
}

/// Metadata supplied when creating a task: bare ids, resolved server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
