//! Port lookup keys.
//!
//! Port ids are only unique within their node, so the index is keyed by `(node, id)`. The borrowed
//! view lets lookups go through `hashbrown` without allocating an owned key.

use super::NodeId;

#[derive(Clone, Copy, Hash)]
pub(in crate::graph) struct PortKeyView<'a> {
    pub(in crate::graph) node: NodeId,
    pub(in crate::graph) id: &'a str,
}

impl<'a> hashbrown::Equivalent<PortKey> for PortKeyView<'a> {
    fn equivalent(&self, key: &PortKey) -> bool {
        key.node == self.node && key.id == self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(in crate::graph) struct PortKey {
    pub(in crate::graph) node: NodeId,
    pub(in crate::graph) id: String,
}
