//! Route lookup: URL paths to tab descriptors and back.
//!
//! `descriptor_from_path` is the pure function the router collaborator calls
//! when a browser navigation event arrives, before handing the result to the
//! tab manager. It recognizes the closed route set
//!
//! ```text
//! /                        dashboard
//! /<family>                list
//! /<family>/new            creation form
//! /<family>/<id>           detail
//! /<family>/<id>/edit      edit form
//! ```
//!
//! and nothing else; unknown shapes return `None` so the caller can fall
//! through to its not-found handling.

use crate::descriptor::TabDescriptor;
use crate::kind::EntityFamily;

/// Path of a family's list screen, e.g. `/invoices`.
pub fn list_path(family: EntityFamily) -> String {
    format!("/{}", family.route_segment())
}

/// Path of a family's creation screen, e.g. `/invoices/new`.
pub fn new_path(family: EntityFamily) -> String {
    format!("/{}/new", family.route_segment())
}

/// Path of a record's detail screen, e.g. `/invoices/inv-42`.
///
/// The segment `new` is reserved for the creation route: ids are issued by
/// the data backend and never collide with it, so `detail_path(f, "new")`
/// would produce a path that parses back as the creation screen.
pub fn detail_path(family: EntityFamily, entity_id: &str) -> String {
    format!("/{}/{}", family.route_segment(), entity_id)
}

/// Path of a record's edit screen, e.g. `/invoices/inv-42/edit`.
///
/// As with [`detail_path`], the id `new` is reserved.
pub fn edit_path(family: EntityFamily, entity_id: &str) -> String {
    format!("/{}/{}/edit", family.route_segment(), entity_id)
}

/// Synthesize a tab descriptor from a URL path.
///
/// Side-effect free. Trailing slashes are tolerated; empty segments and
/// unknown route shapes yield `None`. The returned descriptor's `path` is
/// the canonical form (no trailing slash), not the raw input.
pub fn descriptor_from_path(path: &str) -> Option<TabDescriptor> {
    let segments: Vec<&str> = path
        .strip_prefix('/')?
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match segments.as_slice() {
        [] => Some(TabDescriptor::dashboard()),
        [family] => {
            let family = EntityFamily::from_route_segment(family)?;
            Some(TabDescriptor::list(family))
        }
        [family, "new"] => {
            let family = EntityFamily::from_route_segment(family)?;
            Some(TabDescriptor::new_record(family))
        }
        [family, id] => {
            let family = EntityFamily::from_route_segment(family)?;
            Some(TabDescriptor::detail(family, *id))
        }
        // "new" is the creation route's segment, never an entity id
        [family, id, "edit"] if *id != "new" => {
            let family = EntityFamily::from_route_segment(family)?;
            Some(TabDescriptor::edit(family, *id))
        }
        _ => None,
    }
}
