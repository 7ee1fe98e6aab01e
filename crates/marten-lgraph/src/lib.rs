//! Layered graph container used by `marten`.
//!
//! An [`LGraph`] is an arena of layers, nodes, ports and edges. Nodes live in exactly one layer,
//! ports on exactly one node, and edges connect a source port to a target port. Elements are
//! addressed by copyable typed indices; nodes and ports additionally keep the string id they were
//! created with.
//!
//! The structure is fixed once built. The only mutations offered afterwards reorder the ports of
//! a node or the nodes of a layer, and both require a permutation of the current members.

mod error;
mod graph;

pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeId, LGraph, Layer, LayerId, Node, NodeId, Port, PortId, PortKind};
