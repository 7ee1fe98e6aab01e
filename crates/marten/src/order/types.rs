//! Sort keys.
//!
//! The derived `Ord` implementations are the ordering rules: variants compare in declaration
//! order, fields compare lexicographically.

/// Where the first incoming edge of a port or node comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceAnchor {
    /// The source node sits at `position` in the previous layer; `model_order` is the model order
    /// of the incoming edge and only matters between edges leaving the same source node.
    Resolved { position: usize, model_order: i32 },
    /// The source node is not part of the previous layer.
    ///
    /// `group` identifies the source node: comparators use its node index, and the layer pass
    /// renumbers groups by first appearance so different missing sources keep their input order.
    /// Within one group, anchors compare by the model order of the incoming edge.
    Unresolved { group: usize, model_order: i32 },
}

impl SourceAnchor {
    pub fn is_resolved(self) -> bool {
        matches!(self, SourceAnchor::Resolved { .. })
    }

    /// Both anchors are unresolved and fed by different source nodes.
    pub(crate) fn apart(self, other: SourceAnchor) -> bool {
        matches!(
            (self, other),
            (
                SourceAnchor::Unresolved { group: a, .. },
                SourceAnchor::Unresolved { group: b, .. },
            ) if a != b
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PortSortKey {
    /// Model order of the first outgoing edge.
    Outgoing { model_order: i32 },
    Incoming(SourceAnchor),
    /// Mixed or unconnected port kept under
    /// [`MalformedPortPolicy::PlaceLast`](crate::MalformedPortPolicy::PlaceLast).
    Malformed,
}

impl PortSortKey {
    pub fn anchor(self) -> Option<SourceAnchor> {
        match self {
            PortSortKey::Incoming(anchor) => Some(anchor),
            _ => None,
        }
    }

    pub(crate) fn anchor_mut(&mut self) -> Option<&mut SourceAnchor> {
        match self {
            PortSortKey::Incoming(anchor) => Some(anchor),
            _ => None,
        }
    }
}

/// Model order of a node without incoming edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelOrderKey {
    Ordered(i32),
    Unordered,
}

impl From<Option<i32>> for ModelOrderKey {
    fn from(value: Option<i32>) -> Self {
        match value {
            Some(v) => ModelOrderKey::Ordered(v),
            None => ModelOrderKey::Unordered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeSortKey {
    /// No incoming edges.
    Free(ModelOrderKey),
    /// Keyed by the first incoming edge, in port order.
    Anchored(SourceAnchor),
}

impl NodeSortKey {
    pub fn anchor(self) -> Option<SourceAnchor> {
        match self {
            NodeSortKey::Anchored(anchor) => Some(anchor),
            NodeSortKey::Free(_) => None,
        }
    }

    pub(crate) fn anchor_mut(&mut self) -> Option<&mut SourceAnchor> {
        match self {
            NodeSortKey::Anchored(anchor) => Some(anchor),
            NodeSortKey::Free(_) => None,
        }
    }
}
