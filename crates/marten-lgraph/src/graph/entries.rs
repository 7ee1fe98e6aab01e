//! Element records stored in [`LGraph`](super::LGraph).

use super::{EdgeId, LayerId, NodeId, PortId};

/// How a port is used by its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    OutgoingOnly,
    IncomingOnly,
    /// Both incoming and outgoing edges.
    Mixed,
    /// No edges at all.
    Unconnected,
}

impl PortKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PortKind::OutgoingOnly => "outgoing-only",
            PortKind::IncomingOnly => "incoming-only",
            PortKind::Mixed => "mixed",
            PortKind::Unconnected => "unconnected",
        }
    }
}

impl std::fmt::Display for PortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Layer {
    pub(in crate::graph) nodes: Vec<NodeId>,
}

impl Layer {
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(in crate::graph) id: String,
    pub(in crate::graph) layer: LayerId,
    pub(in crate::graph) ports: Vec<PortId>,
    pub(in crate::graph) model_order: Option<i32>,
}

impl Node {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn layer(&self) -> LayerId {
        self.layer
    }

    pub fn ports(&self) -> &[PortId] {
        &self.ports
    }

    /// Position of the node among its siblings in the source model, if known.
    pub fn model_order(&self) -> Option<i32> {
        self.model_order
    }
}

#[derive(Debug, Clone)]
pub struct Port {
    pub(in crate::graph) id: String,
    pub(in crate::graph) node: NodeId,
    pub(in crate::graph) incoming: Vec<EdgeId>,
    pub(in crate::graph) outgoing: Vec<EdgeId>,
}

impl Port {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    pub fn kind(&self) -> PortKind {
        match (self.incoming.is_empty(), self.outgoing.is_empty()) {
            (true, false) => PortKind::OutgoingOnly,
            (false, true) => PortKind::IncomingOnly,
            (false, false) => PortKind::Mixed,
            (true, true) => PortKind::Unconnected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub(in crate::graph) source: PortId,
    pub(in crate::graph) target: PortId,
    pub(in crate::graph) model_order: i32,
}

impl Edge {
    pub fn source(&self) -> PortId {
        self.source
    }

    pub fn target(&self) -> PortId {
        self.target
    }

    /// Position this edge held among its siblings in the source model.
    pub fn model_order(&self) -> i32 {
        self.model_order
    }
}
