use std::collections::HashMap;

use egui::Pos2;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use petgraph::visit::EdgeRef;

use crate::elements::{Edge, Node};

/// Outcome of [`Graph::toggle_edge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeToggle {
    Added,
    Removed,
}

/// Orders an unordered node pair canonically, lower index first.
fn canonical(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
    if a.index() <= b.index() {
        (a, b)
    } else {
        (b, a)
    }
}

/// The graph model: an undirected graph of positioned nodes.
///
/// Storage is a [`StableUnGraph`] so node indices survive removals, plus a
/// pair index keyed by the canonical ordering of the endpoints. Both
/// orderings of a pair resolve to the same single edge, giving O(1)
/// unordered lookup. The two structures are kept in sync by the mutation
/// methods below; removing an element that is not present is a contract
/// violation of the caller, not a recoverable error.
#[derive(Debug, Default)]
pub struct Graph {
    g: StableUnGraph<Node, Edge>,
    pairs: HashMap<(NodeIndex, NodeIndex), EdgeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node at the given position with no edges. Always succeeds.
    pub fn add_node(&mut self, pos: Pos2) -> NodeIndex {
        self.g.add_node(Node::new(pos))
    }

    /// Removes a node and all its incident edges. Returns the number of
    /// edges removed.
    pub fn remove_node(&mut self, idx: NodeIndex) -> usize {
        debug_assert!(self.g.node_weight(idx).is_some(), "node not in graph");

        let incident: Vec<_> = self
            .g
            .edges(idx)
            .map(|e| (e.source(), e.target()))
            .collect();
        for &(a, b) in &incident {
            self.remove_edge_between(a, b);
        }

        self.g.remove_node(idx);
        incident.len()
    }

    /// Adds an edge between `a` and `b`, recomputing its geometry from the
    /// endpoint positions. Self-loops and duplicate pairs are silent no-ops.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        if a == b || self.edge_between(a, b).is_some() {
            return None;
        }

        let edge = Edge::new(self.g[a].location(), self.g[b].location());
        let idx = self.g.add_edge(a, b, edge);
        self.pairs.insert(canonical(a, b), idx);
        Some(idx)
    }

    /// Removes the edge between `a` and `b` if it exists.
    pub fn remove_edge_between(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        match self.pairs.remove(&canonical(a, b)) {
            Some(idx) => {
                self.g.remove_edge(idx);
                true
            }
            None => false,
        }
    }

    /// Toggles the edge between `a` and `b`: adds it if absent, removes it
    /// otherwise. Returns `None` for a self-loop.
    pub fn toggle_edge(&mut self, a: NodeIndex, b: NodeIndex) -> Option<EdgeToggle> {
        if a == b {
            return None;
        }
        if self.remove_edge_between(a, b) {
            Some(EdgeToggle::Removed)
        } else {
            self.add_edge(a, b);
            Some(EdgeToggle::Added)
        }
    }

    /// O(1) unordered pair lookup.
    pub fn edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.pairs.get(&canonical(a, b)).copied()
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        self.g.clear();
        self.pairs.clear();
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.g.node_weight(idx)
    }

    pub fn node_mut(&mut self, idx: NodeIndex) -> Option<&mut Node> {
        self.g.node_weight_mut(idx)
    }

    pub fn edge(&self, idx: EdgeIndex) -> Option<&Edge> {
        self.g.edge_weight(idx)
    }

    /// Nodes in index order. This order is what export numbering is based
    /// on, so it is deterministic for a given snapshot.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.g.node_indices().map(|idx| (idx, &self.g[idx]))
    }

    /// Edges in index order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, &Edge)> {
        self.g.edge_indices().map(|idx| (idx, &self.g[idx]))
    }

    /// Endpoint pairs of all edges, each pair canonically ordered.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.g
            .edge_indices()
            .filter_map(|e| self.g.edge_endpoints(e))
            .map(|(a, b)| canonical(a, b))
    }

    pub fn node_count(&self) -> usize {
        self.g.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.g.edge_count()
    }

    pub fn edges_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.g.edges(idx).map(|e| e.id())
    }

    /// Recomputes the geometry of every edge incident to `idx`. Must be
    /// called after the node's position changed.
    pub fn sync_edges_of(&mut self, idx: NodeIndex) {
        let incident: Vec<_> = self
            .g
            .edges(idx)
            .map(|e| (e.id(), e.source(), e.target()))
            .collect();
        for (e, a, b) in incident {
            let (pos_a, pos_b) = (self.g[a].location(), self.g[b].location());
            self.g[e].sync(pos_a, pos_b);
        }
    }

    /// Recomputes the geometry of every edge in the graph.
    pub fn sync_all_edges(&mut self) {
        let all: Vec<_> = self
            .g
            .edge_indices()
            .filter_map(|e| self.g.edge_endpoints(e).map(|(a, b)| (e, a, b)))
            .collect();
        for (e, a, b) in all {
            let (pos_a, pos_b) = (self.g[a].location(), self.g[b].location());
            self.g[e].sync(pos_a, pos_b);
        }
    }
}
