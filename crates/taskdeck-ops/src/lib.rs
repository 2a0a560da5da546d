//! Async operation pipeline for the Taskdeck workspace store.
//!
//! Five operations populate and mutate the store: one bulk fetch and four
//! creates. Each wraps a network call in the pending/fulfilled/rejected
//! lifecycle; fulfillment applies the matching store mutation, rejection
//! writes the error channel. Operations never throw past their boundary.

mod params;
mod phase;
mod pipeline;

pub use params::{
    CreateFolderParams, CreateListParams, CreateSpaceParams, CreateTaskParams,
    FetchWorkspaceParams,
};
pub use phase::Phase;
pub use pipeline::Pipeline;
