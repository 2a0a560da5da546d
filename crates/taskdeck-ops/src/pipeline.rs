//! The operation pipeline: orchestration between the network collaborator,
//! the sanitizer, and the store.

use std::sync::Arc;

use futures::future::try_join_all;
use tokio::sync::RwLock;
use tracing::{debug, info};

use taskdeck_client::WorkspaceApi;
use taskdeck_models::{
    sanitize_task, EntityId, FolderEntity, ListEntity, MetaCatalog, SpaceEntity, TaskEntity,
};
use taskdeck_store::WorkspaceStore;

use crate::params::{
    CreateFolderParams, CreateListParams, CreateSpaceParams, CreateTaskParams,
    FetchWorkspaceParams,
};
use crate::phase::Phase;

/// Drives the five workspace operations against a shared store.
///
/// The store is mutated only after a network call resolves; mutations
/// themselves are synchronous under the write lock, so two in-flight
/// operations on the same parent both land, in completion order.
#[derive(Clone)]
pub struct Pipeline {
    store: Arc<RwLock<WorkspaceStore>>,
    api: Arc<dyn WorkspaceApi>,
    catalog: Arc<RwLock<MetaCatalog>>,
}

impl Pipeline {
    /// Creates a pipeline over an empty store with an empty metadata
    /// catalog.
    pub fn new(api: Arc<dyn WorkspaceApi>) -> Self {
        Self::with_catalog(api, MetaCatalog::default())
    }

    /// Creates a pipeline with the given priority/status catalog.
    pub fn with_catalog(api: Arc<dyn WorkspaceApi>, catalog: MetaCatalog) -> Self {
        Self {
            store: Arc::new(RwLock::new(WorkspaceStore::new())),
            api,
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Handle to the shared store, for UI readers.
    pub fn store(&self) -> Arc<RwLock<WorkspaceStore>> {
        Arc::clone(&self.store)
    }

    /// Clones the current store state.
    pub async fn snapshot(&self) -> WorkspaceStore {
        self.store.read().await.clone()
    }

    /// Replaces the priority/status catalog the sanitizer resolves against.
    pub async fn set_catalog(&self, catalog: MetaCatalog) {
        *self.catalog.write().await = catalog;
    }

    /// Marks an entity as the active item.
    pub async fn set_active(&self, id: EntityId) {
        self.store.write().await.set_active(id);
    }

    /// Sets the active item's display name.
    pub async fn set_active_name(&self, name: impl Into<String>) {
        self.store.write().await.set_active_name(name);
    }

    /// Clears the store back to its initial empty state.
    pub async fn reset(&self) {
        self.store.write().await.reset();
    }

    /// Fetches every requested space concurrently, sanitizes the raw tasks,
    /// and bulk merges the batches. One failed space fetch rejects the
    /// whole operation.
    pub async fn fetch_workspace(&self, params: FetchWorkspaceParams) -> Phase<()> {
        let fetches = params.spaces.iter().map(|space_id| {
            self.api.fetch_space_everything(
                space_id,
                &params.workspace_id,
                &params.user_id,
                &params.token,
            )
        });

        match try_join_all(fetches).await {
            Ok(fetched) => {
                let batches = {
                    let catalog = self.catalog.read().await;
                    fetched
                        .into_iter()
                        .map(|bundle| bundle.sanitize(&catalog))
                        .collect()
                };
                self.store.write().await.merge_fetched(batches);
                info!(spaces = params.spaces.len(), "workspace fetch merged");
                Phase::Fulfilled(())
            }
            Err(err) => self.reject(err.to_string()).await,
        }
    }

    /// Creates a space and appends the canonical record to the store.
    pub async fn create_space(&self, params: CreateSpaceParams) -> Phase<SpaceEntity> {
        match self
            .api
            .create_space(
                &params.space_name,
                &params.workspace_id,
                &params.user_id,
                &params.token,
            )
            .await
        {
            Ok(space) => {
                debug!(id = %space.id, "space created");
                self.store.write().await.attach_space(space.clone());
                Phase::Fulfilled(space)
            }
            Err(err) => self.reject(err.to_string()).await,
        }
    }

    /// Creates a folder and wires it into its declared parent.
    pub async fn create_folder(&self, params: CreateFolderParams) -> Phase<FolderEntity> {
        match self
            .api
            .create_folder(
                &params.folder_name,
                params.parent_type,
                &params.parent_id,
                &params.user_id,
                &params.token,
            )
            .await
        {
            Ok(folder) => {
                debug!(id = %folder.id, "folder created");
                self.store.write().await.attach_folder(folder.clone());
                Phase::Fulfilled(folder)
            }
            Err(err) => self.reject(err.to_string()).await,
        }
    }

    /// Creates a list and wires it into its declared parent.
    pub async fn create_list(&self, params: CreateListParams) -> Phase<ListEntity> {
        match self
            .api
            .create_list(
                &params.list_name,
                params.parent_type,
                &params.parent_id,
                &params.user_id,
                &params.token,
            )
            .await
        {
            Ok(list) => {
                debug!(id = %list.id, "list created");
                self.store.write().await.attach_list(list.clone());
                Phase::Fulfilled(list)
            }
            Err(err) => self.reject(err.to_string()).await,
        }
    }

    /// Creates a task, sanitizes the returned record, and wires it into its
    /// owning list.
    pub async fn create_task(&self, params: CreateTaskParams) -> Phase<TaskEntity> {
        match self
            .api
            .create_task(
                &params.task_name,
                &params.task_meta,
                params.parent_type,
                &params.parent_id,
                &params.user_id,
                &params.token,
            )
            .await
        {
            Ok(raw) => {
                let task = {
                    let catalog = self.catalog.read().await;
                    sanitize_task(raw, &catalog.priorities, &catalog.statuses)
                };
                debug!(id = %task.id, "task created");
                self.store.write().await.attach_task(task.clone());
                Phase::Fulfilled(task)
            }
            Err(err) => self.reject(err.to_string()).await,
        }
    }

    /// Writes the collapsed failure message to the error channel and shapes
    /// the rejected phase.
    async fn reject<T>(&self, message: String) -> Phase<T> {
        self.store.write().await.set_error(message.clone());
        Phase::Rejected(message)
    }
}
