//! The document abstraction the widget is driven against.
//!
//! A [`DomHost`] owns every node. Widgets only keep [`NodeId`]s and borrow the
//! host for each operation, so several widgets can share one document.
use crate::events::CustomEvent;

slotmap::new_key_type! {
    /// Handle to a node owned by a [`DomHost`].
    pub struct NodeId;
}

/// A box in viewport coordinates, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Distance from the viewport's left edge.
    pub left: f64,
    /// Distance from the viewport's top edge.
    pub top: f64,
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Rect {
    /// Creates a rect from its origin and size.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Size and scroll offset of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Inner width.
    pub width: f64,
    /// Inner height.
    pub height: f64,
    /// Horizontal page scroll.
    pub scroll_x: f64,
    /// Vertical page scroll.
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }
}

/// Event kinds a widget listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// `click`
    Click,
    /// `focus`
    Focus,
    /// `input`
    Input,
    /// `keydown`
    KeyDown,
}

impl EventType {
    /// The DOM event name.
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Click => "click",
            EventType::Focus => "focus",
            EventType::Input => "input",
            EventType::KeyDown => "keydown",
        }
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The document itself.
    Document,
    /// A node.
    Node(NodeId),
}

/// A registered listener. `owner` is the element of the widget that added it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Listener {
    /// Target the listener is attached to.
    pub target: ListenerTarget,
    /// Event it handles.
    pub event: EventType,
    /// Root element of the owning widget.
    pub owner: NodeId,
}

/// Operations a widget needs from a document.
///
/// Attachment and listener operations are idempotent: attaching an attached
/// node, detaching a detached one, adding a listener twice or removing an
/// absent one are all allowed and report `false` when nothing changed.
pub trait DomHost {
    /// Returns true when `node` is a live element of this document.
    fn element_exists(&self, node: NodeId) -> bool;

    /// Elements carrying `attribute`, in document order.
    fn query_all(&self, attribute: &str) -> Vec<NodeId>;

    /// Value of the `data-<name>` attribute of `node`.
    fn data_attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// First `input` descendant of `node`.
    fn find_input(&self, node: NodeId) -> Option<NodeId>;

    /// Current value of an input. Empty for other nodes.
    fn input_value(&self, input: NodeId) -> String;

    /// Replaces the value of an input.
    fn set_input_value(&mut self, input: NodeId, value: &str);

    /// Creates a detached `div` with the dialog role and a
    /// `Date picker` label.
    fn create_calendar_node(&mut self) -> NodeId;

    /// Appends `node` to the body.
    fn append_to_body(&mut self, node: NodeId) -> bool;

    /// Appends `node` to `parent`.
    fn append_to_element(&mut self, parent: NodeId, node: NodeId) -> bool;

    /// Removes `node` from its parent.
    fn detach(&mut self, node: NodeId) -> bool;

    /// Detaches `node` and releases it together with its descendants. Ids of
    /// released nodes no longer exist afterwards.
    fn remove(&mut self, node: NodeId) -> bool;

    /// Returns true when `node` has a parent.
    fn is_attached(&self, node: NodeId) -> bool;

    /// Replaces the children of `node` with parsed `html`.
    fn set_inner_html(&mut self, node: NodeId, html: &str);

    /// Sets absolute `top` and `left` in pixels.
    fn set_position(&mut self, node: NodeId, top: f64, left: f64);

    /// Adds a class.
    fn add_class(&mut self, node: NodeId, class: &str) -> bool;

    /// Removes a class.
    fn remove_class(&mut self, node: NodeId, class: &str) -> bool;

    /// Layout box of `node`.
    fn bounding_rect(&self, node: NodeId) -> Rect;

    /// Window size and scroll.
    fn viewport(&self) -> Viewport;

    /// Registers a listener.
    fn add_listener(&mut self, listener: Listener) -> bool;

    /// Unregisters a listener.
    fn remove_listener(&mut self, listener: &Listener) -> bool;

    /// Dispatches `event` at `node`.
    fn dispatch(&mut self, node: NodeId, event: CustomEvent);

    /// Returns true when `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn event_names() {
        assert_eq!(EventType::Click.as_str(), "click");
        assert_eq!(EventType::KeyDown.as_str(), "keydown");
    }
}
