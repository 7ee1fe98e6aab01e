//! Model-order preserving ordering of ports and nodes within the layers of a layered graph.
//!
//! Layers are processed source-to-sink. For each layer the ports of every node are sorted so that
//! outgoing ports follow the model order of their edges and incoming ports mirror the already
//! fixed order of the previous layer; the nodes of the layer are then sorted with the analogous
//! node-level rule. See [`order`] for the rules and [`mapping`] for the diagram bookkeeping that
//! accompanies a layout session.

pub use marten_lgraph as lgraph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod error;
pub mod mapping;
pub mod options;
pub mod order;

pub use error::{Error, Result};
pub use options::{MalformedPortPolicy, OrderOptions, UnresolvedSourcePolicy};
pub use order::{LayerOrderingPass, OrderReport, order_layers};
