//! reqwest-backed implementation of [`WorkspaceApi`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use taskdeck_models::{
    EntityId, FetchedSpace, FolderEntity, ListEntity, ParentType, RawTask, SpaceEntity, TaskMeta,
    UserId, WorkspaceId,
};

use crate::api::WorkspaceApi;
use crate::error::{ClientError, Result};

/// Header carrying the acting user's id.
const USER_ID_HEADER: &str = "x-user-id";

/// HTTP client for the Taskdeck REST API.
#[derive(Clone)]
pub struct HttpWorkspaceApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWorkspaceApi {
    /// Creates a client targeting the given base URL (e.g.
    /// `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        user_id: &UserId,
        token: &str,
    ) -> Result<T> {
        let url = self.url(path);
        trace!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(token)
            .header(USER_ID_HEADER, user_id.as_str())
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        user_id: &UserId,
        token: &str,
    ) -> Result<T> {
        let url = self.url(path);
        trace!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(USER_ID_HEADER, user_id.as_str())
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Http(format!("status {status}: {text}")));
        }
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Unwraps a `{success, error?}` envelope around an optional payload.
fn into_result<T>(success: bool, error: Option<String>, payload: Option<T>, what: &str) -> Result<T> {
    if !success {
        return Err(ClientError::Rejected(
            error.unwrap_or_else(|| format!("{what} request failed")),
        ));
    }
    payload.ok_or_else(|| ClientError::Decode(format!("{what} missing from response body")))
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    space: Vec<SpaceEntity>,
    #[serde(default)]
    folder: Vec<FolderEntity>,
    #[serde(default)]
    list: Vec<ListEntity>,
    #[serde(default)]
    task: Vec<RawTask>,
}

#[derive(Debug, Deserialize)]
struct SpaceResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    space: Option<SpaceEntity>,
}

#[derive(Debug, Deserialize)]
struct FolderResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    folder: Option<FolderEntity>,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    list: Option<ListEntity>,
}

#[derive(Debug, Deserialize)]
struct TaskResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    task: Option<RawTask>,
}

#[derive(Debug, Serialize)]
struct CreateSpaceBody<'a> {
    name: &'a str,
    #[serde(rename = "workspaceId")]
    workspace_id: &'a WorkspaceId,
}

#[derive(Debug, Serialize)]
struct CreateChildBody<'a> {
    name: &'a str,
    #[serde(rename = "parentType")]
    parent_type: ParentType,
    #[serde(rename = "parentId")]
    parent_id: &'a EntityId,
}

#[derive(Debug, Serialize)]
struct CreateTaskBody<'a> {
    name: &'a str,
    meta: &'a TaskMeta,
    #[serde(rename = "parentType")]
    parent_type: ParentType,
    #[serde(rename = "parentId")]
    parent_id: &'a EntityId,
}

#[async_trait]
impl WorkspaceApi for HttpWorkspaceApi {
    async fn fetch_space_everything(
        &self,
        space_id: &EntityId,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
        token: &str,
    ) -> Result<FetchedSpace> {
        let path = format!("/spaces/{space_id}/everything");
        let response: EverythingResponse = self
            .get_json(
                &path,
                &[("workspaceId", workspace_id.as_str())],
                user_id,
                token,
            )
            .await?;

        if !response.success {
            return Err(ClientError::Rejected(
                response
                    .error
                    .unwrap_or_else(|| "space fetch failed".to_string()),
            ));
        }

        debug!(
            space = %space_id,
            folders = response.folder.len(),
            lists = response.list.len(),
            tasks = response.task.len(),
            "fetched space"
        );

        Ok(FetchedSpace {
            space: response.space,
            folder: response.folder,
            list: response.list,
            task: response.task,
        })
    }

    async fn create_space(
        &self,
        name: &str,
        workspace_id: &WorkspaceId,
        user_id: &UserId,
        token: &str,
    ) -> Result<SpaceEntity> {
        let body = CreateSpaceBody { name, workspace_id };
        let response: SpaceResponse = self.post_json("/spaces", &body, user_id, token).await?;
        into_result(response.success, response.error, response.space, "space")
    }

    async fn create_folder(
        &self,
        name: &str,
        parent_type: ParentType,
        parent_id: &EntityId,
        user_id: &UserId,
        token: &str,
    ) -> Result<FolderEntity> {
        let body = CreateChildBody {
            name,
            parent_type,
            parent_id,
        };
        let response: FolderResponse = self.post_json("/folders", &body, user_id, token).await?;
        into_result(response.success, response.error, response.folder, "folder")
    }

    async fn create_list(
        &self,
        name: &str,
        parent_type: ParentType,
        parent_id: &EntityId,
        user_id: &UserId,
        token: &str,
    ) -> Result<ListEntity> {
        let body = CreateChildBody {
            name,
            parent_type,
            parent_id,
        };
        let response: ListResponse = self.post_json("/lists", &body, user_id, token).await?;
        into_result(response.success, response.error, response.list, "list")
    }

    async fn create_task(
        &self,
        name: &str,
        meta: &TaskMeta,
        parent_type: ParentType,
        parent_id: &EntityId,
        user_id: &UserId,
        token: &str,
    ) -> Result<RawTask> {
        let body = CreateTaskBody {
            name,
            meta,
            parent_type,
            parent_id,
        };
        let response: TaskResponse = self.post_json("/tasks", &body, user_id, token).await?;
        into_result(response.success, response.error, response.task, "task")
    }
}
