//! Network collaborator boundary for the workspace core.
//!
//! [`WorkspaceApi`] is the seam the async pipeline calls through; the
//! reqwest-backed [`HttpWorkspaceApi`] is the production implementation.
//! Tests substitute scripted implementations of the trait.

mod api;
mod error;
mod http;

pub use api::WorkspaceApi;
pub use error::{ClientError, Result};
pub use http::HttpWorkspaceApi;
