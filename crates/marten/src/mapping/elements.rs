use crate::error::{Error, Result};
use crate::lgraph::{EdgeId, NodeId, PortId};
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GraphElement {
    Node(NodeId),
    Port(PortId),
    Edge(EdgeId),
}

impl From<NodeId> for GraphElement {
    fn from(value: NodeId) -> Self {
        GraphElement::Node(value)
    }
}

impl From<PortId> for GraphElement {
    fn from(value: PortId) -> Self {
        GraphElement::Port(value)
    }
}

impl From<EdgeId> for GraphElement {
    fn from(value: EdgeId) -> Self {
        GraphElement::Edge(value)
    }
}

/// Injective mapping between graph elements and diagram parts, iterated in insertion order.
#[derive(Debug, Clone)]
pub struct ElementMapping<T>
where
    T: Eq + Hash + Clone,
{
    forward: IndexMap<GraphElement, T, FxBuildHasher>,
    reverse: FxHashMap<T, GraphElement>,
}

impl<T> Default for ElementMapping<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self {
            forward: IndexMap::default(),
            reverse: FxHashMap::default(),
        }
    }
}

impl<T> ElementMapping<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `element` to `part`. Re-inserting an identical pair is a no-op; mapping either side
    /// to something else fails.
    pub fn insert(&mut self, element: impl Into<GraphElement>, part: T) -> Result<()> {
        let element = element.into();
        if let Some(existing) = self.forward.get(&element) {
            if *existing == part {
                return Ok(());
            }
            return Err(Error::MappingConflict {
                detail: format!("{element:?} is already mapped to another diagram part"),
            });
        }
        if let Some(other) = self.reverse.get(&part) {
            return Err(Error::MappingConflict {
                detail: format!("diagram part is already mapped to {other:?}"),
            });
        }

        self.reverse.insert(part.clone(), element);
        self.forward.insert(element, part);
        Ok(())
    }

    pub fn diagram_part(&self, element: impl Into<GraphElement>) -> Option<&T> {
        self.forward.get(&element.into())
    }

    pub fn graph_element(&self, part: &T) -> Option<GraphElement> {
        self.reverse.get(part).copied()
    }

    pub fn remove_element(&mut self, element: impl Into<GraphElement>) -> Option<T> {
        let part = self.forward.shift_remove(&element.into())?;
        self.reverse.remove(&part);
        Some(part)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GraphElement, &T)> {
        self.forward.iter().map(|(e, p)| (*e, p))
    }
}
