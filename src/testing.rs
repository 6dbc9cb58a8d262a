/// Every representation should implement `GraphNodeOrder`, `GraphEdgeOrder` and `DirectedEdges`
/// consistently with the simple adjacency matrix it was built from
macro_rules! test_repr_ops {
    ($env:ident, $form:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::{test_repr_ops, random_simple_matrix, FromSimpleMatrix}};
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            $(
                test_repr_ops!($form: $trait);
            )*
        }
    };
    ($form:ident: GraphNodeOrder) => {
        #[test]
        fn graph_node_order() {
            use itertools::Itertools;
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [0 as NumNodes, 1, 10, 50] {
                let graph = <$form>::from_simple(&random_simple_matrix(rng, n, 0.2));

                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.len(), n as usize);
                assert_eq!(graph.is_empty(), n == 0);
                assert_eq!(graph.vertices_range().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($form:ident: GraphEdgeOrder) => {
        #[test]
        fn graph_edge_order() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 30] {
                for p in [0.0, 0.1, 0.5] {
                    for _ in 0..5 {
                        let matrix = random_simple_matrix(rng, n, p);
                        let graph = <$form>::from_simple(&matrix);

                        let mut m = 0;
                        for u in 0..n {
                            for v in u..n {
                                if matrix.get(u, v) != 0 || matrix.get(v, u) != 0 {
                                    m += 1;
                                }
                            }
                        }

                        assert_eq!(graph.number_of_edges(), m);
                        assert_eq!(graph.is_singleton_graph(), m == 0);
                    }
                }
            }
        }
    };
    ($form:ident: DirectedEdges) => {
        #[test]
        fn directed_edges() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 30] {
                for p in [0.0, 0.1, 0.5] {
                    let matrix = random_simple_matrix(rng, n, p);
                    let graph = <$form>::from_simple(&matrix);

                    let mut arcs = Vec::new();
                    for u in 0..n {
                        for v in 0..n {
                            for _ in 0..matrix.get(u, v) {
                                arcs.push(Edge(u, v));
                            }
                        }
                    }

                    assert_eq!(graph.ordered_directed_edges(), arcs);
                    assert_eq!(graph.number_of_arcs(), arcs.len() as NumEdges);

                    let degrees = graph.degrees();
                    for u in 0..n {
                        let out_degree = arcs.iter().filter(|e| e.0 == u).count() as NumNodes;
                        let in_degree = arcs.iter().filter(|e| e.1 == u).count() as NumNodes;

                        assert_eq!(graph.out_degree_of(u), out_degree);
                        assert_eq!(graph.in_degree_of(u), in_degree);
                        assert_eq!(degrees[u as usize], (in_degree, out_degree));
                    }
                }
            }
        }
    };
}

pub(crate) use test_repr_ops;

#[cfg(test)]
pub(crate) use generators::*;

#[cfg(test)]
mod generators {
    use rand::{Rng, seq::SliceRandom};

    use crate::prelude::*;

    /// Builds a representation from a matrix every form can hold
    pub(crate) trait FromSimpleMatrix {
        fn from_simple(matrix: &AdjMatrix) -> Self;
    }

    impl FromSimpleMatrix for AdjList {
        fn from_simple(matrix: &AdjMatrix) -> Self {
            AdjList::from(matrix)
        }
    }

    impl FromSimpleMatrix for AdjMatrix {
        fn from_simple(matrix: &AdjMatrix) -> Self {
            matrix.clone()
        }
    }

    impl FromSimpleMatrix for IncidenceMatrix {
        fn from_simple(matrix: &AdjMatrix) -> Self {
            IncidenceMatrix::try_from(matrix).unwrap()
        }
    }

    /// Random matrix with each off-diagonal arc present with probability `p` and each node
    /// carrying a half or full loop with probability `p`
    pub(crate) fn random_simple_matrix<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> AdjMatrix {
        let mut matrix = random_loopless_matrix(rng, n, p);
        for u in 0..n {
            if rng.random_bool(p) {
                matrix.set(u, u, rng.random_range(HALF_LOOP..=FULL_LOOP));
            }
        }
        matrix
    }

    /// Random matrix with each off-diagonal arc present with probability `p` and no loops
    pub(crate) fn random_loopless_matrix<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> AdjMatrix {
        let mut matrix = AdjMatrix::new(n);
        for u in 0..n {
            for v in 0..n {
                if u != v && rng.random_bool(p) {
                    matrix.set(u, v, 1);
                }
            }
        }
        matrix
    }

    /// Random list without parallel arcs between distinct nodes, neighborhoods in random order
    pub(crate) fn random_simple_list<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> AdjList {
        let matrix = random_simple_matrix(rng, n, p);
        let mut nbs = AdjList::from(&matrix).into_lists();
        for nb in &mut nbs {
            nb.shuffle(rng);
        }

        match AdjList::try_from_lists(nbs) {
            Ok(list) => list,
            Err(err) => unreachable!("{err}"),
        }
    }
}
