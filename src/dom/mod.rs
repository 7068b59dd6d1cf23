// Minimal UI toolkit surface the sidebar renders through
mod tree;

pub use tree::{Node, NodeTree};

use crate::message::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Element creation and mutation, plus click binding.
///
/// Clicks are bound to a [`Message`] rather than a closure; whoever owns the
/// document dispatches the message back into the sidebar.
pub trait Document {
    fn create_element(&mut self, tag: &str) -> NodeId;
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);
    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);
    fn set_text(&mut self, node: NodeId, text: &str);
    fn append_child(&mut self, parent: NodeId, child: NodeId);
    /// Detach every child of `node`.
    fn empty(&mut self, node: NodeId);
    fn on_click(&mut self, node: NodeId, message: Message);
    /// Look up an attached element by its `id` attribute.
    fn find_by_id(&self, id: &str) -> Option<NodeId>;
}
