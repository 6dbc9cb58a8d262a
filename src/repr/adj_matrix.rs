/*!
# Adjacency Matrix

An `n x n` matrix of non-negative entries. Off the diagonal, entry `(u, v)` is `1` if there is
an arc `u -> v`; an undirected edge sets both `(u, v)` and `(v, u)`. The diagonal holds the loop
degree: `0` (no loop), [`HALF_LOOP`] or [`FULL_LOOP`].

Entries above these bounds only arise from adjacency lists with parallel arcs; they survive a
round trip to the list form but cannot be turned into an incidence matrix.
*/

use super::*;

/// Square matrix of [`Degree`]s stored row by row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjMatrix {
    rows: Vec<Vec<Degree>>,
}

impl AdjMatrix {
    /// Creates the all-zero matrix for `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            rows: vec![vec![0; n as usize]; n as usize],
        }
    }

    /// Creates the matrix from rows, checking that it is square
    pub fn try_from_matrix(rows: Vec<Vec<Degree>>) -> Result<Self> {
        let n = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GraphError::NonSquareMatrix {
                row,
                len: r.len(),
                expected: n,
            });
        }
        Ok(Self { rows })
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
                        Degree::try_from(value).map_err(|_| GraphError::InvalidEntry {
                            state: State::AdjacencyMatrix,
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
            .map(|r| r.iter().map(|&d| d as i64).collect())
            .collect()
    }

    /// Returns entry `(u, v)`
    /// ** Panics if `u >= n || v >= n` **
    pub fn get(&self, u: Node, v: Node) -> Degree {
        self.rows[u as usize][v as usize]
    }

    /// Overwrites entry `(u, v)`
    /// ** Panics if `u >= n || v >= n` **
    pub fn set(&mut self, u: Node, v: Node, degree: Degree) {
        self.rows[u as usize][v as usize] = degree;
    }

    /// Returns *true* if entry `(u, v)` is non-zero
    /// ** Panics if `u >= n || v >= n` **
    pub fn has_arc(&self, u: Node, v: Node) -> bool {
        self.get(u, v) != 0
    }

    /// Returns the loop degree of `u`
    /// ** Panics if `u >= n` **
    pub fn loop_degree(&self, u: Node) -> Degree {
        self.get(u, u)
    }

    /// Returns row `u`
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Degree] {
        &self.rows[u as usize]
    }

    /// Iterates over all rows in node order
    pub fn rows(&self) -> impl Iterator<Item = &[Degree]> + '_ {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Zeroes row and column `u`, detaching all edges at `u`
    /// ** Panics if `u >= n` **
    pub fn clear_node(&mut self, u: Node) {
        self.rows[u as usize].fill(0);
        for row in &mut self.rows {
            row[u as usize] = 0;
        }
    }

    /// Returns the first entry that an incidence matrix cannot represent: an off-diagonal
    /// value above `1` or a loop degree above [`FULL_LOOP`]
    pub fn first_multi_edge(&self) -> Option<(Edge, Degree)> {
        self.rows.iter().enumerate().find_map(|(u, row)| {
            row.iter().enumerate().find_map(|(v, &d)| {
                let bound = if u == v { FULL_LOOP } else { 1 };
                (d > bound).then_some((Edge(u as Node, v as Node), d))
            })
        })
    }

    /// Consumes the matrix and returns its rows
    pub fn into_matrix(self) -> Vec<Vec<Degree>> {
        self.rows
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjMatrix {
    /// Counts the columns the incidence form would have: one per loop, one per unordered pair
    /// with at least one arc
    fn number_of_edges(&self) -> NumEdges {
        let mut m = 0;
        for u in self.vertices_range() {
            if self.has_arc(u, u) {
                m += 1;
            }
            for v in (u + 1)..self.number_of_nodes() {
                if self.has_arc(u, v) || self.has_arc(v, u) {
                    m += 1;
                }
            }
        }
        m
    }
}

impl DirectedEdges for AdjMatrix {
    fn directed_edges(&self) -> Vec<Edge> {
        AdjList::from(self).directed_edges()
    }

    fn number_of_arcs(&self) -> NumEdges {
        self.rows.iter().flatten().sum()
    }
}

crate::testing::test_repr_ops!(
    test_adj_matrix,
    AdjMatrix,
    (GraphNodeOrder, GraphEdgeOrder, DirectedEdges)
);
