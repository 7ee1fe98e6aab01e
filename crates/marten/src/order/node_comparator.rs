use super::{ModelOrderKey, NodeSortKey, PreviousLayer};
use crate::error::Result;
use crate::lgraph::{GraphError, LGraph, NodeId};
use crate::options::OrderOptions;
use std::cmp::Ordering;

/// Node-level counterpart of [`PortComparator`](super::PortComparator).
///
/// Nodes without incoming edges come first, ordered by their own model order (or, lacking one,
/// the model order of their first outgoing edge). Nodes with incoming edges follow, ordered by
/// the previous-layer position of the node feeding their first incoming edge, where "first" walks
/// the ports in their current order.
#[derive(Debug, Clone, Copy)]
pub struct NodeComparator<'a> {
    graph: &'a LGraph,
    previous: &'a PreviousLayer,
    options: OrderOptions,
}

impl<'a> NodeComparator<'a> {
    pub fn new(graph: &'a LGraph, previous: &'a PreviousLayer, options: OrderOptions) -> Self {
        Self {
            graph,
            previous,
            options,
        }
    }

    pub fn sort_key(&self, node: NodeId) -> Result<NodeSortKey> {
        let n = self.graph.node(node).ok_or(GraphError::UnknownNode {
            index: node.index(),
        })?;

        let mut first_in = None;
        let mut first_out = None;
        for &port in n.ports() {
            let Some(p) = self.graph.port(port) else {
                continue;
            };
            if let Some(&e) = p.incoming().first() {
                first_in = Some(e);
                break;
            }
            if first_out.is_none() {
                first_out = p.outgoing().first().copied();
            }
        }

        if let Some(edge) = first_in {
            let anchor = self.previous.anchor(
                self.graph,
                edge,
                self.options.unresolved_sources,
                &|| format!("node {}", n.id()),
            )?;
            return Ok(NodeSortKey::Anchored(anchor));
        }

        let model_order = n.model_order().or_else(|| {
            first_out
                .and_then(|e| self.graph.edge(e))
                .map(|e| e.model_order())
        });
        Ok(NodeSortKey::Free(ModelOrderKey::from(model_order)))
    }

    /// Compares two nodes on their own. Nodes fed by different missing source nodes compare
    /// equal, since only the layer pass sees the input order that ranks them.
    pub fn compare(&self, n1: NodeId, n2: NodeId) -> Result<Ordering> {
        let (k1, k2) = (self.sort_key(n1)?, self.sort_key(n2)?);
        Ok(match (k1.anchor(), k2.anchor()) {
            (Some(x), Some(y)) if x.apart(y) => Ordering::Equal,
            _ => k1.cmp(&k2),
        })
    }
}
