use super::SourceAnchor;
use crate::error::{Error, Result};
use crate::lgraph::{EdgeId, GraphError, LGraph, LayerId, NodeId};
use crate::options::UnresolvedSourcePolicy;
use rustc_hash::FxHashMap;

/// Frozen node positions of the layer preceding the one being ordered.
///
/// Positions are kept in a map sized to the previous layer, so lookups never scan it.
#[derive(Debug, Clone, Default)]
pub struct PreviousLayer {
    layer: Option<LayerId>,
    positions: FxHashMap<NodeId, usize>,
}

impl PreviousLayer {
    /// The "previous layer" of the first layer: contains nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(graph: &LGraph, layer: LayerId) -> Result<Self> {
        if !graph.has_layer(layer) {
            return Err(GraphError::UnknownLayer {
                index: layer.index(),
            }
            .into());
        }

        let nodes = graph.layer_nodes(layer);
        let mut positions =
            FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        for (position, &node) in nodes.iter().enumerate() {
            positions.insert(node, position);
        }

        Ok(Self {
            layer: Some(layer),
            positions,
        })
    }

    pub fn layer(&self) -> Option<LayerId> {
        self.layer
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.positions.get(&node).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.position(node).is_some()
    }

    /// Anchors `edge` at the previous-layer position of its source node.
    ///
    /// `element` names the port or node being keyed and only feeds diagnostics.
    pub(crate) fn anchor(
        &self,
        graph: &LGraph,
        edge: EdgeId,
        policy: UnresolvedSourcePolicy,
        element: &dyn Fn() -> String,
    ) -> Result<SourceAnchor> {
        let model_order = graph
            .edge(edge)
            .ok_or(GraphError::UnknownEdge {
                index: edge.index(),
            })?
            .model_order();
        let source = graph.edge_source_node(edge).ok_or(GraphError::UnknownEdge {
            index: edge.index(),
        })?;

        if let Some(position) = self.position(source) {
            return Ok(SourceAnchor::Resolved {
                position,
                model_order,
            });
        }

        let source_node = graph
            .node(source)
            .map(|n| n.id().to_string())
            .unwrap_or_default();
        match policy {
            UnresolvedSourcePolicy::KeepInputOrder => {
                tracing::warn!(
                    element = %element(),
                    source_node = %source_node,
                    previous_layer = ?self.layer.map(LayerId::index),
                    "source node missing from previous layer; keeping input order"
                );
                Ok(SourceAnchor::Unresolved {
                    group: source.index(),
                    model_order,
                })
            }
            UnresolvedSourcePolicy::Fail => Err(Error::UnresolvedSource {
                element: element(),
                source_node,
            }),
        }
    }
}
