//! The `WorkspaceApi` trait: every network call the pipeline makes.

use async_trait::async_trait;

use taskdeck_models::{
    EntityId, FetchedSpace, FolderEntity, ListEntity, ParentType, RawTask, SpaceEntity, TaskMeta,
    UserId, WorkspaceId,
};

use crate::error::Result;

/// Network collaborator for the workspace core.
///
/// Every method either fails at the transport level or returns the server's
/// `{success, error?}` envelope unwrapped: an explicit failure flag becomes
/// [`ClientError::Rejected`](crate::ClientError::Rejected), a successful
/// envelope yields the created/fetched payload.
#[async_trait]
pub trait WorkspaceApi: Send + Sync {
    /// Fetches everything belonging to one space: the space record plus its
    /// folders, lists, and (raw, unsanitized) tasks.
    async fn fetch_space_everything(
        &self,
        space_id: &EntityId,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
        token: &str,
    ) -> Result<FetchedSpace>;

    /// Creates a space; the server assigns the id and returns the canonical
    /// record.
    async fn create_space(
        &self,
        name: &str,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
        token: &str,
    ) -> Result<SpaceEntity>;

    /// Creates a folder under the declared parent.
    async fn create_folder(
        &self,
        name: &str,
        parent_type: ParentType,
        parent_id: &EntityId,
        user_id: &UserId,
        token: &str,
    ) -> Result<FolderEntity>;

    /// Creates a list under the declared parent.
    async fn create_list(
        &self,
        name: &str,
        parent_type: ParentType,
        parent_id: &EntityId,
        user_id: &UserId,
        token: &str,
    ) -> Result<ListEntity>;

    /// Creates a task. The returned record is raw; callers must sanitize it
    /// before it enters the store.
    async fn create_task(
        &self,
        name: &str,
        meta: &TaskMeta,
        parent_type: ParentType,
        parent_id: &EntityId,
        user_id: &UserId,
        token: &str,
    ) -> Result<RawTask>;
}
