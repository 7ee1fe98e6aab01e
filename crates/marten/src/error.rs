use crate::lgraph::{GraphError, PortKind};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("port {port} of node {node} is {kind}; only purely incoming or outgoing ports can be ordered")]
    MalformedPort {
        node: String,
        port: String,
        kind: PortKind,
    },

    #[error("source node {source_node} of {element} is not part of the previous layer")]
    UnresolvedSource {
        element: String,
        source_node: String,
    },

    #[error("layers must be ordered source-to-sink: expected layer {expected}, got layer {found}")]
    LayerOutOfOrder { expected: usize, found: usize },

    #[error("layout mapping conflict: {detail}")]
    MappingConflict { detail: String },

    #[error("invalid order options: {message}")]
    InvalidOptions { message: String },
}
