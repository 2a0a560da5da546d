//! Normalized in-memory workspace store.
//!
//! Spaces, folders, lists, and tasks live in flat, insertion-ordered
//! collections linked by id references. The store exposes the bulk loader
//! (`merge_fetched`), the attachment resolvers (`attach_*`), and the active
//! item / error channel setters; the async pipeline in `taskdeck-ops` is the
//! only intended caller of the mutating methods.

mod attach;
mod merge;
mod store;

pub use store::WorkspaceStore;
