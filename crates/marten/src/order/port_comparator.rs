use super::{PortSortKey, PreviousLayer};
use crate::error::{Error, Result};
use crate::lgraph::{Edge, EdgeId, GraphError, LGraph, PortId, PortKind};
use crate::options::{MalformedPortPolicy, OrderOptions};
use std::cmp::Ordering;

/// Orders ports of nodes in the same layer by the model order of their edges, or by the order of
/// the nodes they connect to in the previous layer.
///
/// - Two outgoing-only ports compare by the model order of their first outgoing edge.
/// - Two incoming-only ports compare by the previous-layer position of the node feeding their
///   first incoming edge; ports fed by the same node compare by the model order of those edges.
/// - An outgoing-only port precedes an incoming-only port.
///
/// Mixed and unconnected ports are handled according to [`MalformedPortPolicy`].
#[derive(Debug, Clone, Copy)]
pub struct PortComparator<'a> {
    graph: &'a LGraph,
    previous: &'a PreviousLayer,
    options: OrderOptions,
}

impl<'a> PortComparator<'a> {
    pub fn new(graph: &'a LGraph, previous: &'a PreviousLayer, options: OrderOptions) -> Self {
        Self {
            graph,
            previous,
            options,
        }
    }

    pub fn sort_key(&self, port: PortId) -> Result<PortSortKey> {
        let p = self.graph.port(port).ok_or(GraphError::UnknownPort {
            index: port.index(),
        })?;

        match p.kind() {
            PortKind::OutgoingOnly => {
                let edge = self.first_edge(p.outgoing())?;
                Ok(PortSortKey::Outgoing {
                    model_order: edge.model_order(),
                })
            }
            PortKind::IncomingOnly => {
                let anchor = self.previous.anchor(
                    self.graph,
                    p.incoming()[0],
                    self.options.unresolved_sources,
                    &|| format!("port {}", self.describe(port)),
                )?;
                Ok(PortSortKey::Incoming(anchor))
            }
            kind @ (PortKind::Mixed | PortKind::Unconnected) => {
                match self.options.malformed_ports {
                    MalformedPortPolicy::Fail => Err(Error::MalformedPort {
                        node: self.node_name(port),
                        port: p.id().to_string(),
                        kind,
                    }),
                    MalformedPortPolicy::PlaceLast => {
                        tracing::warn!(port = %self.describe(port), %kind, "placing port last");
                        Ok(PortSortKey::Malformed)
                    }
                }
            }
        }
    }

    /// Compares two ports on their own. Ports fed by different missing source nodes compare
    /// equal, since only the layer pass sees the input order that ranks them.
    pub fn compare(&self, p1: PortId, p2: PortId) -> Result<Ordering> {
        let (k1, k2) = (self.sort_key(p1)?, self.sort_key(p2)?);
        Ok(match (k1.anchor(), k2.anchor()) {
            (Some(x), Some(y)) if x.apart(y) => Ordering::Equal,
            _ => k1.cmp(&k2),
        })
    }

    fn first_edge(&self, edges: &[EdgeId]) -> Result<&'a Edge> {
        let first = edges[0];
        self.graph.edge(first).ok_or_else(|| {
            GraphError::UnknownEdge {
                index: first.index(),
            }
            .into()
        })
    }

    fn node_name(&self, port: PortId) -> String {
        self.graph
            .port(port)
            .and_then(|p| self.graph.node(p.node()))
            .map(|n| n.id().to_string())
            .unwrap_or_default()
    }

    fn describe(&self, port: PortId) -> String {
        let name = self.graph.port(port).map(|p| p.id()).unwrap_or_default();
        format!("{}.{}", self.node_name(port), name)
    }
}
