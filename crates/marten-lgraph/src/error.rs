#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("unknown layer index {index}")]
    UnknownLayer { index: usize },

    #[error("unknown node index {index}")]
    UnknownNode { index: usize },

    #[error("unknown port index {index}")]
    UnknownPort { index: usize },

    #[error("unknown edge index {index}")]
    UnknownEdge { index: usize },

    #[error("node id is already in use: {id}")]
    DuplicateNode { id: String },

    #[error("port id is already in use on node {node}: {id}")]
    DuplicatePort { node: String, id: String },

    #[error("{context}: expected a permutation of {expected} members, got {found}")]
    NotAPermutation {
        context: String,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;
