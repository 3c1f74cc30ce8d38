// SPDX-License-Identifier: MPL-2.0
//! In-memory element tree implementing [`Surface`].
//!
//! The tree is a flat map of nodes plus the ordered list of body children.
//! Only classes listed as transitioning (by default the toast `show` class)
//! start a transition when they change on an attached element.

use super::{ElementId, Listener, Surface, Visibility};
use crate::config::DEFAULT_TRANSITION_MS;
use crate::toast::classes;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::time::Duration;

#[derive(Debug, Default)]
struct Node {
    classes: Vec<String>,
    data: BTreeMap<String, String>,
    text: String,
    style: BTreeMap<String, f32>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    listeners: HashSet<Listener>,
}

/// A region container as seen by a renderer.
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    pub element: ElementId,
    /// Raw `position` tag of the container.
    pub position: &'a str,
    /// Toast elements in insertion order.
    pub toasts: &'a [ElementId],
}

#[derive(Debug)]
pub struct Document {
    nodes: HashMap<ElementId, Node>,
    body: Vec<ElementId>,
    next_id: u64,
    visibility: Visibility,
    visibility_watchers: BTreeSet<ElementId>,
    transition_classes: Vec<String>,
    transition: Duration,
    started_transitions: Vec<(ElementId, Duration)>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty, visible document with the default transition duration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transition(Duration::from_millis(DEFAULT_TRANSITION_MS))
    }

    #[must_use]
    pub fn with_transition(transition: Duration) -> Self {
        Self {
            nodes: HashMap::new(),
            body: Vec::new(),
            next_id: 0,
            visibility: Visibility::Visible,
            visibility_watchers: BTreeSet::new(),
            transition_classes: vec![classes::SHOW.to_string()],
            transition,
            started_transitions: Vec::new(),
        }
    }

    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        self.transition
    }

    /// Returns whether the element still exists.
    #[must_use]
    pub fn contains(&self, element: ElementId) -> bool {
        self.nodes.contains_key(&element)
    }

    /// Number of live elements, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level elements in insertion order.
    #[must_use]
    pub fn body(&self) -> &[ElementId] {
        &self.body
    }

    #[must_use]
    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.nodes
            .get(&element)
            .map_or(&[], |node| node.children.as_slice())
    }

    #[must_use]
    pub fn text(&self, element: ElementId) -> Option<&str> {
        self.nodes.get(&element).map(|node| node.text.as_str())
    }

    #[must_use]
    pub fn data(&self, element: ElementId, key: &str) -> Option<&str> {
        self.nodes
            .get(&element)
            .and_then(|node| node.data.get(key))
            .map(String::as_str)
    }

    #[must_use]
    pub fn style_property(&self, element: ElementId, name: &str) -> Option<f32> {
        self.nodes
            .get(&element)
            .and_then(|node| node.style.get(name))
            .copied()
    }

    /// Region containers attached to the body, in creation order.
    pub fn regions(&self) -> impl Iterator<Item = Region<'_>> {
        self.body.iter().filter_map(|&element| {
            let node = self.nodes.get(&element)?;
            if !node.classes.iter().any(|c| c == classes::CONTAINER) {
                return None;
            }
            Some(Region {
                element,
                position: node
                    .data
                    .get(classes::POSITION_KEY)
                    .map_or("", String::as_str),
                toasts: &node.children,
            })
        })
    }

    /// Returns whether the element is reachable from the body.
    #[must_use]
    pub fn is_attached(&self, element: ElementId) -> bool {
        let mut current = element;
        loop {
            match self.nodes.get(&current) {
                None => return false,
                Some(node) => match node.parent {
                    Some(parent) => current = parent,
                    None => return self.body.contains(&current),
                },
            }
        }
    }

    fn detach_from_parent(&mut self, element: ElementId) {
        let parent = self.nodes.get_mut(&element).and_then(|node| node.parent.take());
        match parent {
            Some(parent) => {
                if let Some(node) = self.nodes.get_mut(&parent) {
                    node.children.retain(|&child| child != element);
                }
            }
            None => self.body.retain(|&child| child != element),
        }
    }

    fn drop_subtree(&mut self, element: ElementId) {
        if let Some(node) = self.nodes.remove(&element) {
            self.visibility_watchers.remove(&element);
            self.started_transitions.retain(|(el, _)| *el != element);
            for child in node.children {
                self.drop_subtree(child);
            }
        }
    }

    /// Depth-first walk over attached elements in document order.
    fn attached_in_order(&self) -> Vec<ElementId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<ElementId> = self.body.iter().rev().copied().collect();
        while let Some(element) = stack.pop() {
            order.push(element);
            stack.extend(self.children(element).iter().rev().copied());
        }
        order
    }
}

impl Surface for Document {
    fn create_element(&mut self, class: &str) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                classes: vec![class.to_string()],
                ..Node::default()
            },
        );
        id
    }

    fn append_to_body(&mut self, element: ElementId) {
        if !self.nodes.contains_key(&element) {
            return;
        }
        self.detach_from_parent(element);
        self.body.push(element);
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent == child || !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            return;
        }
        self.detach_from_parent(child);
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
    }

    fn remove(&mut self, element: ElementId) {
        if !self.nodes.contains_key(&element) {
            return;
        }
        self.detach_from_parent(element);
        self.drop_subtree(element);
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element).and_then(|node| node.parent)
    }

    fn has_children(&self, element: ElementId) -> bool {
        !self.children(element).is_empty()
    }

    fn set_class(&mut self, element: ElementId, class: &str, on: bool) {
        let attached = self.is_attached(element);
        let Some(node) = self.nodes.get_mut(&element) else {
            return;
        };
        let present = node.classes.iter().any(|c| c == class);
        if present == on {
            return;
        }
        if on {
            node.classes.push(class.to_string());
        } else {
            node.classes.retain(|c| c != class);
        }
        if attached && self.transition_classes.iter().any(|c| c == class) {
            self.started_transitions.push((element, self.transition));
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.nodes
            .get(&element)
            .is_some_and(|node| node.classes.iter().any(|c| c == class))
    }

    fn set_data(&mut self, element: ElementId, key: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.data.insert(key.to_string(), value.to_string());
        }
    }

    fn query(&self, class: &str, key: &str, value: &str) -> Option<ElementId> {
        self.attached_in_order().into_iter().find(|&element| {
            self.has_class(element, class) && self.data(element, key) == Some(value)
        })
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.text = text.to_string();
        }
    }

    fn set_style_property(&mut self, element: ElementId, name: &str, value: f32) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.style.insert(name.to_string(), value);
        }
    }

    fn listen(&mut self, element: ElementId, listener: Listener) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.listeners.insert(listener);
        }
    }

    fn unlisten(&mut self, element: ElementId, listener: Listener) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.listeners.remove(&listener);
        }
    }

    fn is_listening(&self, element: ElementId, listener: Listener) -> bool {
        self.nodes
            .get(&element)
            .is_some_and(|node| node.listeners.contains(&listener))
    }

    fn watch_visibility(&mut self, owner: ElementId, on: bool) {
        if on && self.nodes.contains_key(&owner) {
            self.visibility_watchers.insert(owner);
        } else {
            self.visibility_watchers.remove(&owner);
        }
    }

    fn is_watching_visibility(&self, owner: ElementId) -> bool {
        self.visibility_watchers.contains(&owner)
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    fn take_started_transitions(&mut self) -> Vec<(ElementId, Duration)> {
        std::mem::take(&mut self.started_transitions)
    }
}
