//! Parameter bags for the five operations.

use serde::{Deserialize, Serialize};

use taskdeck_models::{EntityId, ParentType, TaskMeta, UserId, WorkspaceId};

/// Arguments for the workspace bulk fetch: which spaces to load and the
/// caller's credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchWorkspaceParams {
    pub spaces: Vec<EntityId>,
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSpaceParams {
    pub space_name: String,
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderParams {
    pub folder_name: String,
    pub parent_type: ParentType,
    pub parent_id: EntityId,
    pub user_id: UserId,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListParams {
    pub list_name: String,
    pub parent_type: ParentType,
    pub parent_id: EntityId,
    pub user_id: UserId,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskParams {
    pub task_name: String,
    pub task_meta: TaskMeta,
    pub parent_type: ParentType,
    pub parent_id: EntityId,
    pub user_id: UserId,
    pub token: String,
}
