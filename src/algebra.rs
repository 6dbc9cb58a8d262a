/*!
# Graph Algebra

Operations building a new [`Graph`] from one or two operands: complement, disjoint union and
join ("connection"). Operands are only read; every operation works on a
[`detached_copy`](Graph::detached_copy) and returns its result in the form of the first operand.
*/

use crate::{error::*, prelude::*};

impl Graph {
    /// Returns the complement on the same nodes: every non-loop pair absent from `self` becomes
    /// an arc, every present one disappears, and all loops are removed.
    /// The result is named `<name>_addition`.
    pub fn complement(&self) -> Result<Graph> {
        tracing::trace!(graph = %self.name(), "complement");

        let mut copy = self.detached_copy();
        copy.set_state(State::AdjacencyMatrix)?;
        let source = copy.repr().to_adj_matrix();

        let n = source.number_of_nodes();
        let mut matrix = AdjMatrix::new(n);
        for u in 0..n {
            for v in 0..n {
                if u != v && !source.has_arc(u, v) {
                    matrix.set(u, v, 1);
                }
            }
        }

        let mut result = Graph::new(matrix, format!("{}_addition", self.name()));
        result.set_state(self.state())?;
        Ok(result)
    }

    /// Returns the disjoint union: the nodes of `self` followed by the nodes of `other`, the edges
    /// of `self` followed by the edges of `other`, and no edge between the two node blocks.
    /// The result is named `<name1>_union_<name2>`.
    ///
    /// # Errors
    /// Fails if either operand cannot be expressed as an incidence matrix.
    pub fn union(&self, other: &Graph) -> Result<Graph> {
        tracing::trace!(first = %self.name(), second = %other.name(), "union");

        let union = self.block_union(other)?;
        let mut result = Graph::new(union, format!("{}_union_{}", self.name(), other.name()));
        result.set_state(self.state())?;
        Ok(result)
    }

    /// Returns the join: the disjoint union plus one undirected edge between every node of `self`
    /// and every node of `other`. The new edges follow the union's edges, ordered by the node of
    /// `self` first. The result is named `<name1>_connection_<name2>`.
    ///
    /// # Errors
    /// Fails if either operand cannot be expressed as an incidence matrix.
    pub fn connection(&self, other: &Graph) -> Result<Graph> {
        tracing::trace!(first = %self.name(), second = %other.name(), "connection");

        let mut join = self.block_union(other)?;
        let n1 = self.number_of_nodes();
        for u in 0..n1 {
            for v in n1..join.number_of_nodes() {
                join.push_edge(EdgeKind::Undirected(u, v));
            }
        }

        let mut result = Graph::new(join, format!("{}_connection_{}", self.name(), other.name()));
        result.set_state(self.state())?;
        Ok(result)
    }

    /// Block-diagonal incidence matrix of both operands
    fn block_union(&self, other: &Graph) -> Result<IncidenceMatrix> {
        let mut union = IncidenceMatrix::new(self.number_of_nodes() + other.number_of_nodes());

        let mut offset = 0;
        for operand in [self, other] {
            let mut copy = operand.detached_copy();
            copy.set_state(State::IncidenceMatrix)?;
            let Some(incidence) = copy.repr().as_incidence() else {
                unreachable!("operand was just converted to an incidence matrix");
            };

            for kind in incidence.edge_kinds() {
                union.push_edge(match kind {
                    EdgeKind::Loop { node, degree } => EdgeKind::Loop {
                        node: node + offset,
                        degree,
                    },
                    EdgeKind::Undirected(u, v) => EdgeKind::Undirected(u + offset, v + offset),
                    EdgeKind::Directed { tail, head } => EdgeKind::Directed {
                        tail: tail + offset,
                        head: head + offset,
                    },
                });
            }
            offset += operand.number_of_nodes();
        }

        Ok(union)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn graph(state: State, rows: Vec<Vec<i64>>, name: &str) -> Graph {
        Graph::try_from_rows(state, rows, name).unwrap()
    }

    #[test]
    fn complement_clears_loops() {
        let g = graph(
            State::AdjacencyMatrix,
            vec![vec![2, 1, 0], vec![0, 0, 1], vec![0, 1, 1]],
            "g",
        );
        let complement = g.complement().unwrap();

        assert_eq!(complement.name(), "g_addition");
        assert_eq!(complement.state(), State::AdjacencyMatrix);
        assert_eq!(
            complement.to_rows(),
            vec![vec![0, 0, 1], vec![1, 0, 0], vec![1, 0, 0]]
        );
        assert_eq!(g.name(), "g");
    }

    #[test]
    fn complement_twice_is_identity_without_loops() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);

        for state in State::ALL {
            for n in [1 as NumNodes, 4, 15] {
                let mut g = Graph::new(random_loopless_matrix(rng, n, 0.4), "g");
                g.set_state(state).unwrap();
                let before = g.clone();

                let twice = g.complement().unwrap().complement().unwrap();

                assert_eq!(g, before);
                assert_eq!(twice.state(), state);
                assert_eq!(
                    twice.repr().to_adj_matrix().into_owned(),
                    g.repr().to_adj_matrix().into_owned()
                );
            }
        }
    }

    #[test]
    fn union_is_block_diagonal() {
        let a = graph(State::AdjacencyList, vec![vec![1], vec![0]], "a");
        let b = graph(
            State::IncidenceMatrix,
            vec![vec![1, 2], vec![-1, 0]],
            "b",
        );

        let union = a.union(&b).unwrap();
        assert_eq!(union.name(), "a_union_b");
        assert_eq!(union.state(), State::AdjacencyList);
        assert_eq!(union.number_of_nodes(), 4);
        assert_eq!(union.number_of_edges(), 3);

        let mut incidence = union.clone();
        incidence.set_state(State::IncidenceMatrix).unwrap();
        assert_eq!(
            incidence.to_rows(),
            vec![
                vec![1, 0, 0],
                vec![1, 0, 0],
                vec![0, 2, 1],
                vec![0, 0, -1]
            ]
        );

        assert_eq!(a.state(), State::AdjacencyList);
        assert_eq!(b.state(), State::IncidenceMatrix);
    }

    #[test]
    fn union_counts_and_blocks() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..30 {
            let n1 = rng.random_range(0..8);
            let n2 = rng.random_range(0..8);
            let mut a = Graph::new(random_simple_matrix(rng, n1, 0.3), "a");
            let b = Graph::new(random_simple_matrix(rng, n2, 0.3), "b");
            a.set_state(State::ALL[rng.random_range(0..3)]).unwrap();

            let mut union = a.union(&b).unwrap();
            assert_eq!(union.state(), a.state());
            assert_eq!(union.number_of_nodes(), n1 + n2);
            assert_eq!(
                union.number_of_edges(),
                a.number_of_edges() + b.number_of_edges()
            );

            union.set_state(State::IncidenceMatrix).unwrap();
            let incidence = union.repr().as_incidence().unwrap();
            for kind in incidence.edge_kinds() {
                let (u, v) = match kind {
                    EdgeKind::Loop { node, .. } => (node, node),
                    EdgeKind::Undirected(u, v) => (u, v),
                    EdgeKind::Directed { tail, head } => (tail, head),
                };
                assert_eq!(u < n1, v < n1);
            }
        }
    }

    #[test]
    fn connection_joins_every_cross_pair() {
        let a = graph(State::AdjacencyMatrix, vec![vec![0, 1], vec![0, 0]], "a");
        let b = graph(State::AdjacencyList, vec![vec![0]], "b");

        let join = a.connection(&b).unwrap();
        assert_eq!(join.name(), "a_connection_b");
        assert_eq!(join.state(), State::AdjacencyMatrix);
        assert_eq!(
            join.to_rows(),
            vec![vec![0, 1, 1], vec![0, 0, 1], vec![1, 1, 1]]
        );
    }

    #[test]
    fn connection_adds_n1_times_n2_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);

        for _ in 0..30 {
            let n1 = rng.random_range(1..8);
            let n2 = rng.random_range(1..8);
            let a = Graph::new(random_simple_matrix(rng, n1, 0.3), "a");
            let mut b = Graph::new(random_simple_matrix(rng, n2, 0.3), "b");
            b.set_state(State::AdjacencyList).unwrap();

            let union = a.union(&b).unwrap();
            let mut join = a.connection(&b).unwrap();
            assert_eq!(
                join.number_of_edges(),
                union.number_of_edges() + n1 * n2
            );

            join.set_state(State::IncidenceMatrix).unwrap();
            let incidence = join.repr().as_incidence().unwrap();
            let cross = incidence
                .edge_kinds()
                .filter(|kind| match *kind {
                    EdgeKind::Undirected(u, v) => u < n1 && v >= n1,
                    _ => false,
                })
                .count();
            assert_eq!(cross as NumNodes, n1 * n2);
            assert_eq!(b.state(), State::AdjacencyList);
        }
    }

    #[test]
    fn multi_edges_block_union() {
        let a = graph(State::AdjacencyList, vec![vec![1, 1], vec![]], "a");
        let b = graph(State::AdjacencyList, vec![vec![]], "b");

        assert!(matches!(a.union(&b), Err(GraphError::MultiEdge { .. })));
        assert!(matches!(b.connection(&a), Err(GraphError::MultiEdge { .. })));

        // the complement only needs the matrix form
        let complement = a.complement().unwrap();
        assert_eq!(complement.to_rows(), vec![vec![], vec![0]]);
        assert_eq!(complement.directed_edges(), vec![Edge(1, 0)]);
    }
}
