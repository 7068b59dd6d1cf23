use super::{Document, NodeId};
use crate::message::Message;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
pub struct Node {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub classes: Vec<String>,
    pub text: String,
    pub children: Vec<NodeId>,
    parent: Option<NodeId>,
    on_click: Option<Message>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn click_message(&self) -> Option<&Message> {
        self.on_click.as_ref()
    }
}

/// Retained in-memory element tree.
///
/// Slots are never reused: nodes detached by `empty` stay in the arena,
/// unreachable from the body, so a `NodeId` held elsewhere never aliases a
/// newer node. Each full draw or favorites redraw leaves its old link nodes
/// behind; the tree is dropped whole on the next page load.
#[derive(Clone, Debug)]
pub struct NodeTree {
    nodes: Vec<Node>,
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeTree {
    /// A tree holding only an empty `body`.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body")],
        }
    }

    /// A body with one `div` carrying `container_id`, the host page layout
    /// the sidebar expects.
    pub fn with_container(container_id: &str) -> Self {
        let mut tree = Self::new();
        let container = tree.create_element("div");
        tree.set_attribute(container, "id", container_id);
        tree.append_child(tree.body(), container);
        tree
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.body() {
                return true;
            }
            current = self.node(node).parent;
        }
        false
    }

    /// `id` and everything below it, in document order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    pub fn find_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.node(id).has_class(class))
            .collect()
    }

    /// The message bound to `id` itself; clicks do not bubble to ancestors.
    pub fn click(&self, id: NodeId) -> Option<Message> {
        self.node(id).on_click.clone()
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.node_mut(child).parent.take() {
            self.node_mut(parent).children.retain(|&c| c != child);
        }
    }
}

impl Document for NodeTree {
    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Node::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.node_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        let node = self.node_mut(node);
        if !node.has_class(class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.node_mut(node).classes.retain(|c| c != class);
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.node_mut(node).text = text.to_string();
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn empty(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.node_mut(node).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
    }

    fn on_click(&mut self, node: NodeId, message: Message) {
        self.node_mut(node).on_click = Some(message);
    }

    fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body())
            .into_iter()
            .find(|&node| self.node(node).attribute("id") == Some(id))
    }
}
