use marten::OrderOptions;
use marten::lgraph::{LGraph, LayerId, NodeId, PortId};
use marten::order::{ModelOrderKey, NodeComparator, NodeSortKey, PreviousLayer, SourceAnchor};
use std::cmp::Ordering;

fn layered(layers: &[&[&str]]) -> (LGraph, Vec<LayerId>) {
    let mut g = LGraph::new();
    let mut ids = Vec::new();
    for nodes in layers {
        let layer = g.add_layer();
        for &v in *nodes {
            g.add_node(layer, v).unwrap();
        }
        ids.push(layer);
    }
    (g, ids)
}

fn node(g: &LGraph, id: &str) -> NodeId {
    g.node_by_id(id).unwrap()
}

fn link(g: &mut LGraph, source: &str, target: &str, model_order: i32) -> (PortId, PortId) {
    let (s, t) = (node(g, source), node(g, target));
    let n = g.port_count();
    let sp = g.add_port(s, format!("o{n}")).unwrap();
    let tp = g.add_port(t, format!("i{}", n + 1)).unwrap();
    g.add_edge(sp, tp, model_order).unwrap();
    (sp, tp)
}

#[test]
fn free_nodes_compare_by_their_own_model_order() {
    let (mut g, _) = layered(&[&["a", "b"]]);
    let (a, b) = (node(&g, "a"), node(&g, "b"));
    g.set_node_model_order(a, Some(4)).unwrap();
    g.set_node_model_order(b, Some(1)).unwrap();

    let previous = PreviousLayer::empty();
    let cmp = NodeComparator::new(&g, &previous, OrderOptions::default());

    assert_eq!(cmp.compare(b, a).unwrap(), Ordering::Less);
    assert_eq!(
        cmp.sort_key(a).unwrap(),
        NodeSortKey::Free(ModelOrderKey::Ordered(4))
    );
}

#[test]
fn free_nodes_fall_back_to_their_first_outgoing_edge() {
    let (mut g, _) = layered(&[&["a", "b", "c"], &["z"]]);
    link(&mut g, "a", "z", 6);
    link(&mut g, "b", "z", 2);
    let (a, b, c) = (node(&g, "a"), node(&g, "b"), node(&g, "c"));

    let previous = PreviousLayer::empty();
    let cmp = NodeComparator::new(&g, &previous, OrderOptions::default());

    assert_eq!(cmp.compare(b, a).unwrap(), Ordering::Less);
    // No model order at all: after every ordered free node.
    assert_eq!(cmp.compare(a, c).unwrap(), Ordering::Less);
    assert_eq!(
        cmp.sort_key(c).unwrap(),
        NodeSortKey::Free(ModelOrderKey::Unordered)
    );
}

#[test]
fn free_nodes_precede_anchored_nodes() {
    let (mut g, layers) = layered(&[&["p"], &["free", "anchored"]]);
    link(&mut g, "p", "anchored", 0);
    let (free, anchored) = (node(&g, "free"), node(&g, "anchored"));
    g.set_node_model_order(free, Some(99)).unwrap();

    let previous = PreviousLayer::new(&g, layers[0]).unwrap();
    let cmp = NodeComparator::new(&g, &previous, OrderOptions::default());

    assert_eq!(cmp.compare(free, anchored).unwrap(), Ordering::Less);
}

#[test]
fn anchored_nodes_follow_the_previous_layer() {
    let (mut g, layers) = layered(&[&["p1", "p2"], &["x", "y"]]);
    link(&mut g, "p2", "x", 0);
    link(&mut g, "p1", "y", 7);
    let (x, y) = (node(&g, "x"), node(&g, "y"));
    g.set_node_model_order(x, Some(0)).unwrap();
    g.set_node_model_order(y, Some(1)).unwrap();

    let previous = PreviousLayer::new(&g, layers[0]).unwrap();
    let cmp = NodeComparator::new(&g, &previous, OrderOptions::default());

    assert_eq!(cmp.compare(y, x).unwrap(), Ordering::Less);
    assert_eq!(
        cmp.sort_key(x).unwrap(),
        NodeSortKey::Anchored(SourceAnchor::Resolved {
            position: 1,
            model_order: 0
        })
    );
}

#[test]
fn anchored_nodes_fed_by_the_same_node_compare_by_edge_model_order() {
    let (mut g, layers) = layered(&[&["p"], &["x", "y"]]);
    link(&mut g, "p", "x", 3);
    link(&mut g, "p", "y", 1);
    let (x, y) = (node(&g, "x"), node(&g, "y"));

    let previous = PreviousLayer::new(&g, layers[0]).unwrap();
    let cmp = NodeComparator::new(&g, &previous, OrderOptions::default());

    assert_eq!(cmp.compare(y, x).unwrap(), Ordering::Less);
}

#[test]
fn nodes_fed_by_the_same_missing_node_compare_by_edge_model_order() {
    let (mut g, layers) = layered(&[&["p"], &["x", "y", "z"], &["late1", "late2"]]);
    link(&mut g, "late1", "x", 6);
    link(&mut g, "late1", "y", 2);
    link(&mut g, "late2", "z", 0);
    let (x, y, z) = (node(&g, "x"), node(&g, "y"), node(&g, "z"));

    let previous = PreviousLayer::new(&g, layers[0]).unwrap();
    let cmp = NodeComparator::new(&g, &previous, OrderOptions::default());

    assert_eq!(cmp.compare(y, x).unwrap(), Ordering::Less);
    assert_eq!(cmp.compare(x, z).unwrap(), Ordering::Equal);
    assert_eq!(cmp.compare(z, y).unwrap(), Ordering::Equal);
}

#[test]
fn the_first_incoming_edge_follows_port_order() {
    let (mut g, layers) = layered(&[&["p1", "p2"], &["x", "y"], &["z"]]);
    let (_, x_from_p2) = link(&mut g, "p2", "x", 0);
    let (_, x_from_p1) = link(&mut g, "p1", "x", 0);
    let (x_out, _) = link(&mut g, "x", "z", 0);
    link(&mut g, "p1", "y", 5);
    let (x, y) = (node(&g, "x"), node(&g, "y"));

    {
        let previous = PreviousLayer::new(&g, layers[0]).unwrap();
        let cmp = NodeComparator::new(&g, &previous, OrderOptions::default());
        // x is keyed by p2 (its first port), y by p1.
        assert_eq!(cmp.compare(y, x).unwrap(), Ordering::Less);
    }

    g.reorder_ports(x, &[x_out, x_from_p1, x_from_p2]).unwrap();
    let previous = PreviousLayer::new(&g, layers[0]).unwrap();
    let cmp = NodeComparator::new(&g, &previous, OrderOptions::default());
    // Now x is keyed by p1 with a lower edge model order than y's.
    assert_eq!(cmp.compare(x, y).unwrap(), Ordering::Less);
}
