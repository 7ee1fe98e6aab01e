//! Bookkeeping between a layout graph and the diagram it was built from.
//!
//! A [`LayoutMapping`] lives for one layout session. It keeps two independent structures: an
//! injective [`ElementMapping`] between graph elements and diagram parts, and a flat, ordered
//! list of [`LayoutConfigs`] entries. The ordering pass itself never reads either.

mod configs;
mod elements;

pub use configs::{LayoutConfigEntry, LayoutConfigs};
pub use elements::{ElementMapping, GraphElement};

use crate::lgraph::LGraph;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct LayoutMapping<T>
where
    T: Eq + Hash + Clone,
{
    graph_map: ElementMapping<T>,
    configs: LayoutConfigs,
    layout_graph: Option<LGraph>,
    parent_element: Option<T>,
}

impl<T> Default for LayoutMapping<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self {
            graph_map: ElementMapping::default(),
            configs: LayoutConfigs::default(),
            layout_graph: None,
            parent_element: None,
        }
    }
}

impl<T> LayoutMapping<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph_map(&self) -> &ElementMapping<T> {
        &self.graph_map
    }

    pub fn graph_map_mut(&mut self) -> &mut ElementMapping<T> {
        &mut self.graph_map
    }

    pub fn configs(&self) -> &LayoutConfigs {
        &self.configs
    }

    pub fn configs_mut(&mut self) -> &mut LayoutConfigs {
        &mut self.configs
    }

    pub fn set_layout_graph(&mut self, graph: LGraph) -> &mut Self {
        self.layout_graph = Some(graph);
        self
    }

    pub fn layout_graph(&self) -> Option<&LGraph> {
        self.layout_graph.as_ref()
    }

    pub fn layout_graph_mut(&mut self) -> Option<&mut LGraph> {
        self.layout_graph.as_mut()
    }

    /// Top-level diagram part the layout graph was built from.
    pub fn set_parent_element(&mut self, part: T) -> &mut Self {
        self.parent_element = Some(part);
        self
    }

    pub fn parent_element(&self) -> Option<&T> {
        self.parent_element.as_ref()
    }
}
