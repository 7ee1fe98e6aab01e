//! Model-order layer ordering.
//!
//! Every port and node of the layer being ordered is reduced to a sort key ([`PortSortKey`],
//! [`NodeSortKey`]) that totally orders it against its siblings. Keys read the previous layer
//! through a precomputed [`PreviousLayer`] position table, so each lookup is O(1) and a layer is
//! ordered with plain stable sorts.

mod types;

pub use types::{ModelOrderKey, NodeSortKey, PortSortKey, SourceAnchor};

mod previous_layer;
pub use previous_layer::PreviousLayer;

mod port_comparator;
pub use port_comparator::PortComparator;

mod node_comparator;
pub use node_comparator::NodeComparator;

mod pass;
pub use pass::{LayerOrderingPass, OrderReport, order_layers};
