/*!
# Incidence Matrix

An `n x m` matrix with one column per edge:
- a loop at `u` has a single non-zero entry in row `u`, its loop degree (`1` or `2`),
- an undirected edge `{u, v}` has `1` in rows `u` and `v`,
- an arc `u -> v` has `1` in the tail row `u` and `-1` in the head row `v`.

Every column is checked against these three shapes on construction, so the conversions never
meet a column they cannot interpret. Two columns joining the same pair of nodes are rejected as
a multi-edge, so every column maps to its own entries of the adjacency matrix.
*/

use itertools::Itertools;

use super::*;

/// Tail entry of an arc and entry of both endpoints of an undirected edge
pub const INCIDENT: Incidence = 1;

/// Head entry of an arc
pub const HEAD: Incidence = -1;

/// The edge stored in a single incidence column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Loop at `node` with the given loop degree
    Loop { node: Node, degree: Degree },
    /// Undirected edge between two distinct nodes, smaller node first
    Undirected(Node, Node),
    /// Arc from `tail` to `head`
    Directed { tail: Node, head: Node },
}

impl EdgeKind {
    /// Returns the pair of nodes the edge joins, smaller node first
    pub fn endpoints(&self) -> Edge {
        match *self {
            EdgeKind::Loop { node, .. } => Edge(node, node),
            EdgeKind::Undirected(u, v) => Edge(u, v),
            EdgeKind::Directed { tail, head } => Edge(tail, head).normalized(),
        }
    }

    /// Returns *true* if the edge carries the arc `u -> v`
    pub fn carries_arc(&self, u: Node, v: Node) -> bool {
        match *self {
            EdgeKind::Loop { node, .. } => u == node && v == node,
            EdgeKind::Undirected(a, b) => Edge(u, v).normalized() == Edge(a, b),
            EdgeKind::Directed { tail, head } => u == tail && v == head,
        }
    }
}

/// Rectangular matrix of [`Incidence`]s stored row by row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidenceMatrix {
    rows: Vec<Vec<Incidence>>,
}

impl IncidenceMatrix {
    /// Creates the matrix of `n` nodes without edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            rows: vec![Vec::new(); n as usize],
        }
    }

    /// Creates the matrix from rows, checking that it is rectangular, that every column
    /// describes a loop, an undirected edge or an arc, and that no two columns join the same
    /// pair of nodes
    pub fn try_from_matrix(rows: Vec<Vec<Incidence>>) -> Result<Self> {
        let m = rows.first().map_or(0, |r| r.len());
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != m) {
            return Err(GraphError::RaggedMatrix {
                row,
                len: r.len(),
                expected: m,
            });
        }

        let matrix = Self { rows };
        let endpoints = (0..m)
            .map(|e| matrix.classify_column(e).map(|kind| kind.endpoints()))
            .collect::<Result<Vec<_>>>()?;

        let multiplicities = endpoints.iter().counts();
        if let Some(&edge) = endpoints.iter().find(|edge| multiplicities[edge] > 1) {
            let multiplicity = multiplicities[&edge] as Degree;
            tracing::warn!(%edge, multiplicity, "parallel incidence columns");
            return Err(GraphError::MultiEdge { edge, multiplicity });
        }

        Ok(matrix)
    }

    /// Creates the matrix from raw integer rows as read from a text file
    pub fn try_from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let matrix = rows
            .into_iter()
            .enumerate()
            .map(|(row, r)| {
                r.into_iter()
                    .enumerate()
                    .map(|(col, value)| {
                        Incidence::try_from(value).map_err(|_| GraphError::InvalidEntry {
                            state: State::IncidenceMatrix,
                            row,
                            col,
                            value,
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::try_from_matrix(matrix)
    }

    /// Returns the matrix as raw integer rows
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(|&x| x as i64).collect())
            .collect()
    }

    /// Returns entry `(u, e)`
    /// ** Panics if `u >= n || e >= m` **
    pub fn get(&self, u: Node, e: NumEdges) -> Incidence {
        self.rows[u as usize][e as usize]
    }

    /// Returns row `u`
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Incidence] {
        &self.rows[u as usize]
    }

    /// Iterates over all rows in node order
    pub fn rows(&self) -> impl Iterator<Item = &[Incidence]> + '_ {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Returns the edge stored in column `e`
    /// ** Panics if `e >= m` **
    pub fn edge_at(&self, e: NumEdges) -> EdgeKind {
        assert!(e < self.number_of_edges(), "edge {e} out of range");
        // every column was validated on construction or built by `push_edge`
        match self.classify_column(e as usize) {
            Ok(kind) => kind,
            Err(err) => unreachable!("{err}"),
        }
    }

    /// Iterates over the edges of all columns in column order
    pub fn edge_kinds(&self) -> impl Iterator<Item = EdgeKind> + '_ {
        (0..self.number_of_edges()).map(|e| self.edge_at(e))
    }

    /// Returns the index of the first column carrying the arc `u -> v`
    pub fn find_edge(&self, u: Node, v: Node) -> Option<NumEdges> {
        self.edge_kinds()
            .position(|kind| kind.carries_arc(u, v))
            .map(|e| e as NumEdges)
    }

    /// Appends a new column holding `kind`.
    /// No other column may join the same pair of nodes; this is only checked in debug builds.
    /// ** Panics if an endpoint is `>= n`, or if a loop degree is not `1` or `2` **
    pub fn push_edge(&mut self, kind: EdgeKind) {
        debug_assert!(
            self.edge_kinds().all(|other| other.endpoints() != kind.endpoints()),
            "parallel column for {}",
            kind.endpoints()
        );

        let entries: &[(Node, Incidence)] = &match kind {
            EdgeKind::Loop { node, degree } => {
                assert!((HALF_LOOP..=FULL_LOOP).contains(&degree));
                [(node, degree as Incidence), (node, degree as Incidence)]
            }
            EdgeKind::Undirected(u, v) => {
                assert_ne!(u, v);
                [(u, INCIDENT), (v, INCIDENT)]
            }
            EdgeKind::Directed { tail, head } => {
                assert_ne!(tail, head);
                [(tail, INCIDENT), (head, HEAD)]
            }
        };
        assert!(entries.iter().all(|&(u, _)| u < self.number_of_nodes()));

        for row in &mut self.rows {
            row.push(0);
        }
        for &(u, x) in entries {
            if let Some(last) = self.rows[u as usize].last_mut() {
                *last = x;
            }
        }
    }

    /// Deletes column `e`; later columns move one index down
    /// ** Panics if `e >= m` **
    pub fn remove_edge(&mut self, e: NumEdges) {
        assert!(e < self.number_of_edges(), "edge {e} out of range");
        for row in &mut self.rows {
            row.remove(e as usize);
        }
    }

    /// Inserts a node without edges at `position`; later nodes move one index up
    /// ** Panics if `position > n` **
    pub fn insert_node(&mut self, position: Node) {
        let m = self.number_of_edges() as usize;
        self.rows.insert(position as usize, vec![0; m]);
    }

    /// Deletes the row of `u`; later nodes move one index down.
    /// ** Panics if `u >= n` or if `u` still has incident edges **
    pub fn remove_isolated_node(&mut self, u: Node) {
        assert!(
            self.rows[u as usize].iter().all(|&x| x == 0),
            "node {u} still has incident edges"
        );
        self.rows.remove(u as usize);
    }

    /// Consumes the matrix and returns its rows
    pub fn into_matrix(self) -> Vec<Vec<Incidence>> {
        self.rows
    }

    fn classify_column(&self, e: usize) -> Result<EdgeKind> {
        let mut non_zeros = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r[e] != 0)
            .map(|(u, r)| (u as Node, r[e]));

        match (non_zeros.next(), non_zeros.next(), non_zeros.next()) {
            (None, _, _) => Err(GraphError::column(e, "column is empty")),
            (Some(_), Some(_), Some(_)) => {
                Err(GraphError::column(e, "more than two non-zero entries"))
            }
            (Some((node, x)), None, _) => match x {
                1 | 2 => Ok(EdgeKind::Loop {
                    node,
                    degree: x as Degree,
                }),
                _ => Err(GraphError::column(e, "loop degree must be 1 or 2")),
            },
            (Some((u, x)), Some((v, y)), None) => match (x, y) {
                (INCIDENT, INCIDENT) => Ok(EdgeKind::Undirected(u, v)),
                (INCIDENT, HEAD) => Ok(EdgeKind::Directed { tail: u, head: v }),
                (HEAD, INCIDENT) => Ok(EdgeKind::Directed { tail: v, head: u }),
                _ => Err(GraphError::column(
                    e,
                    "endpoints must be 1 and 1, or 1 (tail) and -1 (head)",
                )),
            },
        }
    }
}

impl GraphNodeOrder for IncidenceMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }
}

impl GraphEdgeOrder for IncidenceMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.rows.first().map_or(0, |r| r.len() as NumEdges)
    }
}

impl DirectedEdges for IncidenceMatrix {
    fn directed_edges(&self) -> Vec<Edge> {
        AdjList::from(self).directed_edges()
    }
}

crate::testing::test_repr_ops!(
    test_incidence,
    IncidenceMatrix,
    (GraphNodeOrder, GraphEdgeOrder, DirectedEdges)
);
