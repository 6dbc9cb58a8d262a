use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the range of all nodes `0..n`.
    /// The range does not borrow `self` and can be used while mutating the graph.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of distinct edges of the graph, i.e. the number of columns of the
    /// equivalent incidence matrix. An undirected edge and a loop count once, parallel arcs
    /// between the same pair of nodes are not counted separately.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the graph as a multiset of directed arcs, one per entry of the adjacency list.
///
/// An undirected edge `{u, v}` contributes the arcs `(u, v)` and `(v, u)`, a loop of degree
/// `d` contributes `d` copies of `(u, u)`.
pub trait DirectedEdges: GraphNodeOrder {
    /// Returns all arcs ordered by tail; arcs with the same tail keep the adjacency-list order
    fn directed_edges(&self) -> Vec<Edge>;

    /// Returns all arcs in sorted order
    fn ordered_directed_edges(&self) -> Vec<Edge> {
        let mut edges = self.directed_edges();
        edges.sort_unstable();
        edges
    }

    /// Returns the number of arcs (the length of [`DirectedEdges::directed_edges`])
    fn number_of_arcs(&self) -> NumEdges {
        self.directed_edges().len() as NumEdges
    }

    /// Returns the number of arcs leaving `u`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.degrees()[u as usize].1
    }

    /// Returns the number of arcs entering `u`
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.degrees()[u as usize].0
    }

    /// Returns `(in_degree, out_degree)` for every node
    fn degrees(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut degrees = vec![(0, 0); self.len()];
        for Edge(u, v) in self.directed_edges() {
            degrees[u as usize].1 += 1;
            degrees[v as usize].0 += 1;
        }
        degrees
    }

    /// Returns a distribution of total degrees (in + out) sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .into_iter()
            .map(|(i, o)| i + o)
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }
}
