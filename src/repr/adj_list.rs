/*!
# Adjacency List

For every node `u`, an ordered sequence of nodes `v` such that there is an arc `u -> v`.
A loop is stored as `v == u`; repeating `v` encodes a multiplicity, which makes this the only
form that can hold parallel arcs between two distinct nodes.
*/

use std::slice::Iter;

use itertools::Itertools;

use super::*;

/// Neighborhoods as jagged arrays (`Vec<Vec<Node>>`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjList {
    nbs: Vec<Vec<Node>>,
}

impl AdjList {
    /// Creates a list of `n` nodes without arcs
    pub fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
        }
    }

    /// Creates the list from neighborhoods, checking that every neighbor is a node
    pub fn try_from_lists(nbs: Vec<Vec<Node>>) -> Result<Self> {
        let n = nbs.len() as NumNodes;
        for (u, nb) in nbs.iter().enumerate() {
            if let Some(&v) = nb.iter().find(|&&v| v >= n) {
                return Err(GraphError::NeighborOutOfRange {
                    node: u as Node,
                    neighbor: v as i64,
                    n,
                });
            }
        }
        Ok(Self { nbs })
    }

    /// Creates the list from raw integer rows as read from a text file
    pub fn try_from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let n = rows.len();
        let nbs = rows
            .into_iter()
            .enumerate()
            .map(|(u, row)| {
                row.into_iter()
                    .map(|v| {
                        if (0..n as i64).contains(&v) {
                            Ok(v as Node)
                        } else {
                            Err(GraphError::NeighborOutOfRange {
                                node: u as Node,
                                neighbor: v,
                                n: n as NumNodes,
                            })
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { nbs })
    }

    /// Returns the neighborhoods as raw integer rows
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.nbs
            .iter()
            .map(|nb| nb.iter().map(|&v| v as i64).collect())
            .collect()
    }

    /// Returns the neighbors of `u` in stored order
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }

    /// Iterates over all neighborhoods in node order
    pub fn neighborhoods(&self) -> Iter<'_, Vec<Node>> {
        self.nbs.iter()
    }

    /// Appends the arc `u -> v`, allowing parallel arcs
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_arc(&mut self, u: Node, v: Node) {
        assert!(v < self.number_of_nodes());
        self.nbs[u as usize].push(v);
    }

    /// Returns how often `v` appears in the neighborhood of `u`
    /// ** Panics if `u >= n` **
    pub fn multiplicity(&self, u: Node, v: Node) -> Degree {
        self.nbs[u as usize].iter().filter(|&&w| w == v).count() as Degree
    }

    /// Returns a copy in which every neighborhood is sorted, so two lists describing the same
    /// graph compare equal regardless of arc order
    pub fn sorted(&self) -> Self {
        Self {
            nbs: self
                .nbs
                .iter()
                .map(|nb| nb.iter().copied().sorted_unstable().collect())
                .collect(),
        }
    }

    /// Consumes the list and returns its neighborhoods
    pub fn into_lists(self) -> Vec<Vec<Node>> {
        self.nbs
    }
}

impl GraphNodeOrder for AdjList {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjList {
    fn number_of_edges(&self) -> NumEdges {
        AdjMatrix::from(self).number_of_edges()
    }
}

impl DirectedEdges for AdjList {
    fn directed_edges(&self) -> Vec<Edge> {
        self.nbs
            .iter()
            .enumerate()
            .flat_map(|(u, nb)| nb.iter().map(move |&v| Edge(u as Node, v)))
            .collect()
    }

    fn number_of_arcs(&self) -> NumEdges {
        self.nbs.iter().map(|nb| nb.len() as NumEdges).sum()
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

crate::testing::test_repr_ops!(
    test_adj_list,
    AdjList,
    (GraphNodeOrder, GraphEdgeOrder, DirectedEdges)
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_neighbors_outside_the_graph() {
        assert_eq!(
            AdjList::try_from_lists(vec![vec![1], vec![2]]),
            Err(GraphError::NeighborOutOfRange {
                node: 1,
                neighbor: 2,
                n: 2
            })
        );
        assert!(AdjList::try_from_rows(vec![vec![-1]]).is_err());
        assert!(AdjList::try_from_rows(vec![vec![0, 0], vec![]]).is_ok());
    }

    #[test]
    fn parallel_arcs_are_kept() {
        let mut list = AdjList::new(2);
        list.add_arc(0, 1);
        list.add_arc(0, 1);
        list.add_arc(1, 1);

        assert_eq!(list.multiplicity(0, 1), 2);
        assert_eq!(list.number_of_arcs(), 3);
        assert_eq!(list.directed_edges(), vec![Edge(0, 1), Edge(0, 1), Edge(1, 1)]);
        assert_eq!(list.degrees(), vec![(0, 2), (3, 1)]);
        assert_eq!(list.to_rows(), vec![vec![1, 1], vec![1]]);
    }

    #[test]
    fn sorted_ignores_arc_order() {
        let a = AdjList::try_from_lists(vec![vec![2, 0, 1], vec![], vec![1]]).unwrap();
        let b = AdjList::try_from_lists(vec![vec![0, 1, 2], vec![], vec![1]]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.sorted(), b);
    }
}
