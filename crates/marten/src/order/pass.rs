use super::{NodeComparator, PortComparator, PreviousLayer, SourceAnchor};
use crate::error::{Error, Result};
use crate::lgraph::{GraphError, LGraph, LayerId, NodeId, PortId};
use crate::options::OrderOptions;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderReport {
    pub layers_processed: usize,
    /// Ports that ended up at a different position within their node.
    pub ports_reordered: usize,
    /// Nodes that ended up at a different position within their layer.
    pub nodes_reordered: usize,
    /// Incoming ports whose source node was missing from the previous layer.
    pub unresolved_port_sources: usize,
    /// Nodes whose first incoming edge comes from a node missing from the previous layer.
    pub unresolved_node_sources: usize,
}

/// Orders layers source-to-sink.
///
/// The pass keeps a cursor on the next layer to order: layer `k` can only be ordered once layers
/// `0..k` are, because its comparators read layer `k - 1` as final.
#[derive(Debug, Clone)]
pub struct LayerOrderingPass {
    options: OrderOptions,
    next_layer: usize,
    report: OrderReport,
}

impl LayerOrderingPass {
    pub fn new(options: OrderOptions) -> Self {
        Self {
            options,
            next_layer: 0,
            report: OrderReport::default(),
        }
    }

    pub fn options(&self) -> &OrderOptions {
        &self.options
    }

    /// Index of the layer [`order_layer`](Self::order_layer) accepts next.
    pub fn next_layer(&self) -> usize {
        self.next_layer
    }

    pub fn report(&self) -> &OrderReport {
        &self.report
    }

    /// Orders every layer not processed yet.
    pub fn run(mut self, graph: &mut LGraph) -> Result<OrderReport> {
        while let Some(layer) = graph.layer_at(self.next_layer) {
            self.order_layer(graph, layer)?;
        }
        Ok(self.report)
    }

    pub fn order_layer(&mut self, graph: &mut LGraph, layer: LayerId) -> Result<()> {
        if layer.index() != self.next_layer {
            return Err(Error::LayerOutOfOrder {
                expected: self.next_layer,
                found: layer.index(),
            });
        }
        if !graph.has_layer(layer) {
            return Err(GraphError::UnknownLayer {
                index: layer.index(),
            }
            .into());
        }

        let previous = match layer.index().checked_sub(1).and_then(|i| graph.layer_at(i)) {
            Some(prev) => PreviousLayer::new(graph, prev)?,
            None => PreviousLayer::empty(),
        };

        tracing::debug!(
            layer = layer.index(),
            nodes = graph.layer_nodes(layer).len(),
            previous_nodes = previous.len(),
            "ordering layer"
        );

        if self.options.sort_ports {
            let port_orders = self.sorted_ports(graph, layer, &previous)?;
            for (node, order) in port_orders {
                let changed = count_moved(graph.node_ports(node), &order);
                if changed > 0 {
                    tracing::trace!(
                        layer = layer.index(),
                        node = node.index(),
                        changed,
                        "reordering ports"
                    );
                    graph.reorder_ports(node, &order)?;
                    self.report.ports_reordered += changed;
                }
            }
        }

        if self.options.sort_nodes {
            let order = self.sorted_nodes(graph, layer, &previous)?;
            let changed = count_moved(graph.layer_nodes(layer), &order);
            if changed > 0 {
                tracing::trace!(layer = layer.index(), changed, "reordering nodes");
                graph.reorder_layer(layer, &order)?;
                self.report.nodes_reordered += changed;
            }
        }

        self.report.layers_processed += 1;
        self.next_layer += 1;
        Ok(())
    }

    fn sorted_ports(
        &mut self,
        graph: &LGraph,
        layer: LayerId,
        previous: &PreviousLayer,
    ) -> Result<Vec<(NodeId, Vec<PortId>)>> {
        let comparator = PortComparator::new(graph, previous, self.options);
        let mut out = Vec::new();

        for &node in graph.layer_nodes(layer) {
            let ports = graph.node_ports(node);
            let mut keyed = Vec::with_capacity(ports.len());
            for &port in ports {
                keyed.push((comparator.sort_key(port)?, port));
            }
            self.report.unresolved_port_sources +=
                regroup_unresolved(keyed.iter_mut().filter_map(|(k, _)| k.anchor_mut()));
            // `sort_by` is stable: ports with equal keys keep their input order.
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            out.push((node, keyed.into_iter().map(|(_, p)| p).collect()));
        }

        Ok(out)
    }

    fn sorted_nodes(
        &mut self,
        graph: &LGraph,
        layer: LayerId,
        previous: &PreviousLayer,
    ) -> Result<Vec<NodeId>> {
        let comparator = NodeComparator::new(graph, previous, self.options);
        let nodes = graph.layer_nodes(layer);

        let mut keyed = Vec::with_capacity(nodes.len());
        for &node in nodes {
            keyed.push((comparator.sort_key(node)?, node));
        }
        self.report.unresolved_node_sources +=
            regroup_unresolved(keyed.iter_mut().filter_map(|(k, _)| k.anchor_mut()));
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(keyed.into_iter().map(|(_, n)| n).collect())
    }
}

/// Orders all layers of `graph` with a fresh [`LayerOrderingPass`].
pub fn order_layers(graph: &mut LGraph, options: &OrderOptions) -> Result<OrderReport> {
    LayerOrderingPass::new(*options).run(graph)
}

/// Renumbers unresolved anchors by the first appearance of their source node. Returns the number
/// of unresolved anchors.
fn regroup_unresolved<'k>(anchors: impl Iterator<Item = &'k mut SourceAnchor>) -> usize {
    let mut groups = FxHashMap::default();
    let mut count = 0;
    for anchor in anchors {
        if let SourceAnchor::Unresolved { group, .. } = anchor {
            let next = groups.len();
            *group = *groups.entry(*group).or_insert(next);
            count += 1;
        }
    }
    count
}

fn count_moved<T: PartialEq>(before: &[T], after: &[T]) -> usize {
    before.iter().zip(after).filter(|(a, b)| a != b).count()
}
