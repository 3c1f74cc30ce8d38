// SPDX-License-Identifier: MPL-2.0
//! Presentation surface the toasts are drawn on.
//!
//! The toast logic never renders anything itself. It creates elements,
//! toggles state classes, writes the `--progress` style property and
//! registers for input notifications through the [`Surface`] trait. Layout,
//! styling and the actual transitions belong to whoever implements it.
//!
//! [`Document`] is the in-memory implementation used by the Iced front end
//! and by the tests.

mod document;

pub use document::{Document, Region};

use std::time::Duration;

/// Handle to an element owned by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u64);

/// Element-level notifications a toast can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    Click,
    PointerEnter,
    PointerLeave,
    TransitionEnd,
}

/// Document-wide visibility state of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Primitives a host must provide for toasts to live on it.
///
/// Class and property writes take effect synchronously. Transition
/// completion and visibility changes arrive later as events.
pub trait Surface {
    /// Creates a detached element carrying one initial class.
    fn create_element(&mut self, class: &str) -> ElementId;

    /// Appends an element to the document body.
    fn append_to_body(&mut self, element: ElementId);

    /// Appends `child` to `parent`, moving it out of its current parent.
    fn append_child(&mut self, parent: ElementId, child: ElementId);

    /// Removes an element (and everything registered on it) from the document.
    fn remove(&mut self, element: ElementId);

    fn parent(&self, element: ElementId) -> Option<ElementId>;

    fn has_children(&self, element: ElementId) -> bool;

    /// Adds or removes a class, like `classList.toggle(class, on)`.
    fn set_class(&mut self, element: ElementId, class: &str, on: bool);

    fn has_class(&self, element: ElementId, class: &str) -> bool;

    fn add_class(&mut self, element: ElementId, class: &str) {
        self.set_class(element, class, true);
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        self.set_class(element, class, false);
    }

    fn set_data(&mut self, element: ElementId, key: &str, value: &str);

    /// Finds the first attached element with `class` whose `key` data equals `value`.
    fn query(&self, class: &str, key: &str, value: &str) -> Option<ElementId>;

    /// Replaces the element's text content. Never interpreted as markup.
    fn set_text(&mut self, element: ElementId, text: &str);

    fn set_style_property(&mut self, element: ElementId, name: &str, value: f32);

    fn listen(&mut self, element: ElementId, listener: Listener);

    fn unlisten(&mut self, element: ElementId, listener: Listener);

    fn is_listening(&self, element: ElementId, listener: Listener) -> bool;

    /// Registers or drops a document-wide visibility-change listener owned by `owner`.
    fn watch_visibility(&mut self, owner: ElementId, on: bool);

    fn is_watching_visibility(&self, owner: ElementId) -> bool;

    fn visibility(&self) -> Visibility;

    /// Records a visibility change reported by the host.
    fn set_visibility(&mut self, visibility: Visibility);

    /// Drains the transitions started since the last call, with their durations.
    ///
    /// The caller is expected to deliver a transition-end notification for
    /// each one once its duration has elapsed.
    fn take_started_transitions(&mut self) -> Vec<(ElementId, Duration)>;
}
