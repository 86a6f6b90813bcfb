//! Tab lifecycle management for the opsdesk workspace.
//!
//! The workspace presents business records (clients, deals, missions,
//! invoices, proposals, suppliers, expenses) as screens in a browser-style
//! tab strip. This crate owns the strip: which tabs exist, which is active,
//! when a navigation reuses a tab versus opening a new one, which tabs the
//! eviction sweep may drop, and which ones closing must refuse.
//!
//! Entry points:
//! - [`tab::TabManager`] for the live strip
//! - [`session`] for saving and restoring it across launches
//! - [`pages`] for the screen taxonomy and route lookup

pub mod session;
pub mod tab;

pub use opsdesk_pages as pages;

pub use pages::{EntityFamily, PageKind, TabDescriptor, TabId, descriptor_from_path};
pub use tab::{NavigationSource, OpenOptions, Tab, TabEvent, TabManager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
