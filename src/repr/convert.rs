/*!
# Conversions

The six conversions between the three forms. Adjacency lists and incidence matrices never
convert into each other directly but go through an adjacency matrix.

Only simple matrices (off-diagonal entries in `{0, 1}`, loop degrees in `{0, 1, 2}`) can become
incidence matrices; converting anything else fails with [`GraphError::MultiEdge`] instead of
dropping the extra multiplicity.
*/

use super::*;

impl From<&AdjList> for AdjMatrix {
    /// Entry `(u, v)` counts the occurrences of `v` in the neighborhood of `u`
    fn from(list: &AdjList) -> Self {
        let mut matrix = AdjMatrix::new(list.number_of_nodes());
        for Edge(u, v) in list.directed_edges() {
            matrix.set(u, v, matrix.get(u, v) + 1);
        }
        matrix
    }
}

impl From<&AdjMatrix> for AdjList {
    /// Appends `v` to the neighborhood of `u` exactly `matrix[u][v]` times
    fn from(matrix: &AdjMatrix) -> Self {
        let mut list = AdjList::new(matrix.number_of_nodes());
        for (u, row) in matrix.rows().enumerate() {
            for (v, &d) in row.iter().enumerate() {
                for _ in 0..d {
                    list.add_arc(u as Node, v as Node);
                }
            }
        }
        list
    }
}

impl TryFrom<&AdjMatrix> for IncidenceMatrix {
    type Error = GraphError;

    /// Emits columns in row-major order of the matrix. The mirror `(v, u)` of an undirected edge
    /// emitted at `(u, v)` is skipped.
    fn try_from(matrix: &AdjMatrix) -> Result<Self> {
        if let Some((edge, multiplicity)) = matrix.first_multi_edge() {
            tracing::warn!(%edge, multiplicity, "multi-edge blocks conversion to incidence matrix");
            return Err(GraphError::MultiEdge { edge, multiplicity });
        }

        let mut incidence = IncidenceMatrix::new(matrix.number_of_nodes());
        for u in matrix.vertices_range() {
            for v in matrix.vertices_range() {
                if !matrix.has_arc(u, v) || (u > v && matrix.has_arc(v, u)) {
                    continue;
                }

                incidence.push_edge(if u == v {
                    EdgeKind::Loop {
                        node: u,
                        degree: matrix.loop_degree(u),
                    }
                } else if matrix.has_arc(v, u) {
                    EdgeKind::Undirected(u, v)
                } else {
                    EdgeKind::Directed { tail: u, head: v }
                });
            }
        }
        Ok(incidence)
    }
}

impl From<&IncidenceMatrix> for AdjMatrix {
    /// Every column sets its own entries; no two columns share a pair of nodes
    fn from(incidence: &IncidenceMatrix) -> Self {
        let mut matrix = AdjMatrix::new(incidence.number_of_nodes());
        for kind in incidence.edge_kinds() {
            match kind {
                EdgeKind::Loop { node, degree } => matrix.set(node, node, degree),
                EdgeKind::Undirected(u, v) => {
                    matrix.set(u, v, 1);
                    matrix.set(v, u, 1);
                }
                EdgeKind::Directed { tail, head } => matrix.set(tail, head, 1),
            }
        }
        matrix
    }
}

impl TryFrom<&AdjList> for IncidenceMatrix {
    type Error = GraphError;

    fn try_from(list: &AdjList) -> Result<Self> {
        IncidenceMatrix::try_from(&AdjMatrix::from(list))
    }
}

impl From<&IncidenceMatrix> for AdjList {
    fn from(incidence: &IncidenceMatrix) -> Self {
        AdjList::from(&AdjMatrix::from(incidence))
    }
}
