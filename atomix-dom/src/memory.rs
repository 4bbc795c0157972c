//! An in-memory [`DomHost`].
//!
//! Markup passed to [`DomHost::set_inner_html`] is stored as text rather than
//! parsed, and the element children it replaces are released. Listeners and dispatched events are recorded so callers can
//! inspect them.
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::{
    events::CustomEvent,
    host::{DomHost, Listener, NodeId, Rect, Viewport},
};

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    classes: SmallVec<[String; 4]>,
    attributes: Vec<(String, String)>,
    value: String,
    inner_html: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Rect,
    position: Option<(f64, f64)>,
}

/// A document held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: SlotMap<NodeId, Node>,
    body: NodeId,
    listeners: Vec<Listener>,
    events: Vec<(NodeId, CustomEvent)>,
    viewport: Viewport,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// An empty document with a `body`.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(Node {
            tag: "body".to_string(),
            ..Node::default()
        });
        Self {
            nodes,
            body,
            listeners: Vec::new(),
            events: Vec::new(),
            viewport: Viewport::default(),
        }
    }

    /// The body element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.insert(Node {
            tag: tag.to_string(),
            ..Node::default()
        })
    }

    /// Appends `child` to `parent`, moving it if it already has a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.append_to_element(parent, child)
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(node) = self.nodes.get_mut(node) else {
            return;
        };
        match node.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Value of an attribute.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(node)?.attributes.iter().find_map(|(key, value)| {
            (key == name).then_some(value.as_str())
        })
    }

    /// Sets the layout box reported by [`DomHost::bounding_rect`].
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.rect = rect;
        }
    }

    /// Sets the window size and scroll.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Tag name of `node`.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|node| node.tag.as_str())
    }

    /// Classes of `node`, in insertion order.
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.nodes.get(node).map_or(&[], |node| node.classes.as_slice())
    }

    /// Returns true when `node` has `class`.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes(node).iter().any(|c| c == class)
    }

    /// Last markup set on `node`.
    pub fn inner_html(&self, node: NodeId) -> &str {
        self.nodes.get(node).map_or("", |node| node.inner_html.as_str())
    }

    /// Last `(top, left)` set on `node`.
    pub fn position(&self, node: NodeId) -> Option<(f64, f64)> {
        self.nodes.get(node)?.position
    }

    /// Parent of `node`.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node)?.parent
    }

    /// Registered listeners.
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Listeners owned by the widget rooted at `owner`.
    pub fn listeners_of(&self, owner: NodeId) -> impl Iterator<Item = &Listener> {
        self.listeners
            .iter()
            .filter(move |listener| listener.owner == owner)
    }

    /// Events dispatched so far, with their targets.
    pub fn events(&self) -> &[(NodeId, CustomEvent)] {
        &self.events
    }

    /// Drains the recorded events.
    pub fn take_events(&mut self) -> Vec<(NodeId, CustomEvent)> {
        std::mem::take(&mut self.events)
    }

    /// Number of live nodes, the body included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn release(&mut self, root: NodeId) {
        for id in self.descendants(root) {
            self.nodes.remove(id);
        }
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(node) = self.nodes.get(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }
}

impl DomHost for MemoryDocument {
    fn element_exists(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    fn query_all(&self, attribute: &str) -> Vec<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|id| self.attribute(*id, attribute).is_some())
            .collect()
    }

    fn data_attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.attribute(node, &format!("data-{name}"))
            .map(str::to_string)
    }

    fn find_input(&self, node: NodeId) -> Option<NodeId> {
        self.descendants(node)
            .into_iter()
            .skip(1)
            .find(|id| self.tag(*id) == Some("input"))
    }

    fn input_value(&self, input: NodeId) -> String {
        self.nodes
            .get(input)
            .map(|node| node.value.clone())
            .unwrap_or_default()
    }

    fn set_input_value(&mut self, input: NodeId, value: &str) {
        if let Some(node) = self.nodes.get_mut(input) {
            node.value = value.to_string();
        }
    }

    fn create_calendar_node(&mut self) -> NodeId {
        let node = self.create_element("div");
        self.set_attribute(node, "role", "dialog");
        self.set_attribute(node, "aria-label", "Date picker");
        node
    }

    fn append_to_body(&mut self, node: NodeId) -> bool {
        let body = self.body;
        self.append_to_element(body, node)
    }

    fn append_to_element(&mut self, parent: NodeId, node: NodeId) -> bool {
        if !self.nodes.contains_key(parent)
            || !self.nodes.contains_key(node)
            || self.contains(node, parent)
            || self.parent(node) == Some(parent)
        {
            return false;
        }
        self.detach(node);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(node);
        }
        if let Some(child) = self.nodes.get_mut(node) {
            child.parent = Some(parent);
        }
        true
    }

    fn detach(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.nodes.get_mut(node).and_then(|node| node.parent.take()) else {
            return false;
        };
        if let Some(parent) = self.nodes.get_mut(parent) {
            parent.children.retain(|child| *child != node);
        }
        true
    }

    fn remove(&mut self, node: NodeId) -> bool {
        if node == self.body || !self.nodes.contains_key(node) {
            return false;
        }
        self.detach(node);
        self.release(node);
        true
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.parent(node).is_some()
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) {
        let Some(children) = self
            .nodes
            .get_mut(node)
            .map(|n| {
                n.inner_html = html.to_string();
                std::mem::take(&mut n.children)
            })
        else {
            return;
        };
        for child in children {
            self.release(child);
        }
    }

    fn set_position(&mut self, node: NodeId, top: f64, left: f64) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.position = Some((top, left));
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        match self.nodes.get_mut(node) {
            Some(node) if !node.classes.iter().any(|c| c == class) => {
                node.classes.push(class.to_string());
                true
            }
            _ => false,
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> bool {
        let Some(node) = self.nodes.get_mut(node) else {
            return false;
        };
        let before = node.classes.len();
        node.classes.retain(|c| c != class);
        node.classes.len() != before
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.nodes.get(node).map(|node| node.rect).unwrap_or_default()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn add_listener(&mut self, listener: Listener) -> bool {
        if self.listeners.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    fn remove_listener(&mut self, listener: &Listener) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|existing| existing != listener);
        self.listeners.len() != before
    }

    fn dispatch(&mut self, node: NodeId, event: CustomEvent) {
        self.events.push((node, event));
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }
}
