// SPDX-License-Identifier: MPL-2.0
//! Region containers, one per position.
//!
//! There is no bookkeeping here: a region exists exactly when the surface
//! holds a `toast-container` tagged with its position, so a removed region
//! is recreated on demand and two positions can never share a container.

use super::{classes, Position};
use crate::surface::{ElementId, Surface};

/// Returns the container for `position`, creating and attaching it if needed.
pub fn get_or_create<S: Surface>(surface: &mut S, position: &Position) -> ElementId {
    if let Some(container) = find(surface, position) {
        return container;
    }
    let container = surface.create_element(classes::CONTAINER);
    surface.set_data(container, classes::POSITION_KEY, position.as_str());
    surface.append_to_body(container);
    log::debug!("created toast region {position}");
    container
}

/// Looks up the live container for `position`.
pub fn find<S: Surface>(surface: &S, position: &Position) -> Option<ElementId> {
    surface.query(classes::CONTAINER, classes::POSITION_KEY, position.as_str())
}

/// Removes `container` if it no longer holds any toast.
///
/// Returns `true` when the container was removed.
pub fn release_if_empty<S: Surface>(surface: &mut S, container: ElementId) -> bool {
    if surface.has_children(container) {
        return false;
    }
    surface.remove(container);
    log::debug!("removed empty toast region {container:?}");
    true
}
