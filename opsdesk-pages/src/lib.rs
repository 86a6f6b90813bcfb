//! Page catalog and shared workspace types for opsdesk.
//!
//! This crate provides the vocabulary shared between the tab lifecycle
//! manager and its collaborators (router, tab strip, command palette):
//!
//! - The closed `PageKind` catalog with exhaustive icon/label lookup
//! - Entity family definitions and their route segments
//! - Tab descriptors produced by the route lookup
//! - Route parsing (`descriptor_from_path`) and typed path builders
//! - Snapshot types for workspace persistence

pub mod descriptor;
pub mod kind;
pub mod routes;
pub mod snapshot;

// Re-export main types for convenience
pub use descriptor::{TabDescriptor, TabId};
pub use kind::{EntityFamily, PageKind};
pub use routes::{descriptor_from_path, detail_path, edit_path, list_path, new_path};
pub use snapshot::{TabSnapshot, WorkspaceSnapshot};
