//! The [`LGraph`] arena.

use crate::error::{GraphError, Result};
use rustc_hash::FxBuildHasher;

mod entries;
mod ids;
mod port_key;

pub use entries::{Edge, Layer, Node, Port, PortKind};
pub use ids::{EdgeId, LayerId, NodeId, PortId};

use port_key::{PortKey, PortKeyView};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct LGraph {
    layers: Vec<Layer>,
    nodes: Vec<Node>,
    ports: Vec<Port>,
    edges: Vec<Edge>,

    node_index: HashMap<String, NodeId>,
    port_index: HashMap<PortKey, PortId>,
}

impl LGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty layer after the existing ones.
    pub fn add_layer(&mut self) -> LayerId {
        self.layers.push(Layer::default());
        LayerId(self.layers.len() - 1)
    }

    /// Appends a node to the end of `layer`.
    pub fn add_node(&mut self, layer: LayerId, id: impl Into<String>) -> Result<NodeId> {
        let id = id.into();
        if !self.has_layer(layer) {
            return Err(GraphError::UnknownLayer { index: layer.0 });
        }
        if self.node_index.contains_key(id.as_str()) {
            return Err(GraphError::DuplicateNode { id });
        }

        let node = NodeId(self.nodes.len());
        self.node_index.insert(id.clone(), node);
        self.nodes.push(Node {
            id,
            layer,
            ports: Vec::new(),
            model_order: None,
        });
        self.layers[layer.0].nodes.push(node);
        Ok(node)
    }

    pub fn set_node_model_order(&mut self, node: NodeId, model_order: Option<i32>) -> Result<()> {
        let entry = self
            .nodes
            .get_mut(node.0)
            .ok_or(GraphError::UnknownNode { index: node.0 })?;
        entry.model_order = model_order;
        Ok(())
    }

    /// Appends a port to the end of `node`'s port list.
    pub fn add_port(&mut self, node: NodeId, id: impl Into<String>) -> Result<PortId> {
        let id = id.into();
        let Some(owner) = self.nodes.get(node.0) else {
            return Err(GraphError::UnknownNode { index: node.0 });
        };
        if self.port_index.contains_key(&PortKeyView { node, id: &id }) {
            return Err(GraphError::DuplicatePort {
                node: owner.id.clone(),
                id,
            });
        }

        let port = PortId(self.ports.len());
        self.port_index.insert(
            PortKey {
                node,
                id: id.clone(),
            },
            port,
        );
        self.ports.push(Port {
            id,
            node,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        });
        self.nodes[node.0].ports.push(port);
        Ok(port)
    }

    /// Connects `source` to `target`. The edge is appended to the source's outgoing list and the
    /// target's incoming list.
    pub fn add_edge(&mut self, source: PortId, target: PortId, model_order: i32) -> Result<EdgeId> {
        for p in [source, target] {
            if p.0 >= self.ports.len() {
                return Err(GraphError::UnknownPort { index: p.0 });
            }
        }

        let edge = EdgeId(self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            model_order,
        });
        self.ports[source.0].outgoing.push(edge);
        self.ports[target.0].incoming.push(edge);
        Ok(edge)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_layer(&self, layer: LayerId) -> bool {
        layer.0 < self.layers.len()
    }

    pub fn layer_at(&self, index: usize) -> Option<LayerId> {
        (index < self.layers.len()).then_some(LayerId(index))
    }

    pub fn layer_ids(&self) -> impl Iterator<Item = LayerId> {
        (0..self.layers.len()).map(LayerId)
    }

    pub fn layer(&self, layer: LayerId) -> Option<&Layer> {
        self.layers.get(layer.0)
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.0)
    }

    pub fn port(&self, port: PortId) -> Option<&Port> {
        self.ports.get(port.0)
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge.0)
    }

    pub fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.node_index.get(id).copied()
    }

    pub fn port_by_id(&self, node: NodeId, id: &str) -> Option<PortId> {
        self.port_index.get(&PortKeyView { node, id }).copied()
    }

    /// Nodes of `layer` in their current order; empty for an unknown layer.
    pub fn layer_nodes(&self, layer: LayerId) -> &[NodeId] {
        self.layers
            .get(layer.0)
            .map(|l| l.nodes.as_slice())
            .unwrap_or(&[])
    }

    /// Ports of `node` in their current order; empty for an unknown node.
    pub fn node_ports(&self, node: NodeId) -> &[PortId] {
        self.nodes
            .get(node.0)
            .map(|n| n.ports.as_slice())
            .unwrap_or(&[])
    }

    /// The node owning the source port of `edge`.
    pub fn edge_source_node(&self, edge: EdgeId) -> Option<NodeId> {
        let e = self.edges.get(edge.0)?;
        self.ports.get(e.source.0).map(|p| p.node)
    }

    /// The node owning the target port of `edge`.
    pub fn edge_target_node(&self, edge: EdgeId) -> Option<NodeId> {
        let e = self.edges.get(edge.0)?;
        self.ports.get(e.target.0).map(|p| p.node)
    }

    /// Replaces the port order of `node`. `order` must contain exactly the node's ports.
    pub fn reorder_ports(&mut self, node: NodeId, order: &[PortId]) -> Result<()> {
        let entry = self
            .nodes
            .get_mut(node.0)
            .ok_or(GraphError::UnknownNode { index: node.0 })?;
        if !is_permutation(&entry.ports, order) {
            return Err(GraphError::NotAPermutation {
                context: format!("ports of node {}", entry.id),
                expected: entry.ports.len(),
                found: order.len(),
            });
        }
        entry.ports.clear();
        entry.ports.extend_from_slice(order);
        Ok(())
    }

    /// Replaces the node order of `layer`. `order` must contain exactly the layer's nodes.
    pub fn reorder_layer(&mut self, layer: LayerId, order: &[NodeId]) -> Result<()> {
        let entry = self
            .layers
            .get_mut(layer.0)
            .ok_or(GraphError::UnknownLayer { index: layer.0 })?;
        if !is_permutation(&entry.nodes, order) {
            return Err(GraphError::NotAPermutation {
                context: format!("nodes of layer {}", layer.0),
                expected: entry.nodes.len(),
                found: order.len(),
            });
        }
        entry.nodes.clear();
        entry.nodes.extend_from_slice(order);
        Ok(())
    }
}

/// `current` never holds duplicates, so equal length plus membership of every distinct proposed
/// element is enough.
fn is_permutation<T>(current: &[T], proposed: &[T]) -> bool
where
    T: Copy + Eq + std::hash::Hash,
{
    if current.len() != proposed.len() {
        return false;
    }
    let members: HashSet<T> = current.iter().copied().collect();
    let mut seen: HashSet<T> = HashSet::default();
    proposed
        .iter()
        .all(|v| members.contains(v) && seen.insert(*v))
}
