/*!
# Editing

In-place edits of a [`Graph`]. Each edit forces the form that makes it simplest (adjacency matrix
for arc-level changes, incidence matrix for deleting rows and columns), applies it and converts
back to the form the graph had before. An edit that fails or panics leaves the graph exactly as
it was.

Node and edge indices are expected to be in range; out-of-range indices panic.
*/

use crate::{error::*, prelude::*};

impl Graph {
    /// Merges node `j` into node `i`; nodes after `j` move one index down.
    ///
    /// Every arc between `j` and a third node is redirected to `i`. The loop at `i` becomes a full
    /// loop if `i` and `j` were joined in both directions, a half loop if in one, and is cleared
    /// otherwise. Identifying a node with itself does nothing.
    ///
    /// ** Panics if `i >= n || j >= n` **
    ///
    /// # Errors
    /// Fails if the graph cannot be expressed as an incidence matrix.
    pub fn identify_nodes(&mut self, i: Node, j: Node) -> Result<()> {
        let n = self.number_of_nodes();
        assert!(i < n && j < n, "nodes ({i}, {j}) out of range for {n} nodes");
        if i == j {
            return Ok(());
        }
        tracing::trace!(graph = %self.name(), i, j, "identify nodes");

        let mut guard = self.edit();
        let matrix = guard.adj_matrix()?;
        for k in 0..n {
            if k == i || k == j {
                continue;
            }
            if matrix.has_arc(j, k) {
                matrix.set(i, k, 1);
            }
            if matrix.has_arc(k, j) {
                matrix.set(k, i, 1);
            }
        }

        let loop_degree = match (matrix.has_arc(i, j), matrix.has_arc(j, i)) {
            (true, true) => FULL_LOOP,
            (true, false) | (false, true) => HALF_LOOP,
            (false, false) => 0,
        };
        matrix.set(i, i, loop_degree);
        matrix.clear_node(j);

        guard.incidence()?.remove_isolated_node(j);
        guard.commit()
    }

    /// Inserts a node without edges at `position`; nodes from `position` on move one index up.
    ///
    /// ** Panics if `position > n` **
    ///
    /// # Errors
    /// Fails if the graph cannot be expressed as an incidence matrix.
    pub fn add_node(&mut self, position: Node) -> Result<()> {
        let n = self.number_of_nodes();
        assert!(position <= n, "position {position} out of range for {n} nodes");
        tracing::trace!(graph = %self.name(), position, "add node");

        let mut guard = self.edit();
        guard.incidence()?.insert_node(position);
        guard.commit()
    }

    /// Removes node `u` together with all edges at `u`; later nodes move one index down.
    ///
    /// ** Panics if `u >= n` **
    ///
    /// # Errors
    /// Fails if the graph cannot be expressed as an incidence matrix.
    pub fn remove_node(&mut self, u: Node) -> Result<()> {
        let n = self.number_of_nodes();
        assert!(u < n, "node {u} out of range for {n} nodes");
        tracing::trace!(graph = %self.name(), u, "remove node");

        let mut guard = self.edit();
        guard.adj_matrix()?.clear_node(u);
        guard.incidence()?.remove_isolated_node(u);
        guard.commit()
    }

    /// Deletes edge `e`, i.e. column `e` of the incidence matrix; its endpoints stay.
    /// Later edges move one index down.
    ///
    /// ** Panics if `e >= m` **
    ///
    /// # Errors
    /// Fails if the graph cannot be expressed as an incidence matrix.
    pub fn remove_edge(&mut self, e: NumEdges) -> Result<()> {
        tracing::trace!(graph = %self.name(), e, "remove edge");

        let mut guard = self.edit();
        guard.incidence()?.remove_edge(e);
        guard.commit()
    }

    /// Pulls edge `e` off the graph. Removing the column already detaches the edge from both
    /// endpoints, so this is the same as [`Graph::remove_edge`].
    ///
    /// ** Panics if `e >= m` **
    ///
    /// # Errors
    /// Fails if the graph cannot be expressed as an incidence matrix.
    pub fn pull_off_edge(&mut self, e: NumEdges) -> Result<()> {
        self.remove_edge(e)
    }

    /// Adds the arc `u -> v`.
    ///
    /// For `u == v` the loop degree of `u` grows by one, up to [`FULL_LOOP`]. Otherwise the entry
    /// `(u, v)` is set if it was not set before; adding `v -> u` to an existing `u -> v` yields an
    /// undirected edge. A second parallel arc is never created.
    ///
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        let n = self.number_of_nodes();
        assert!(u < n && v < n, "arc ({u}, {v}) out of range for {n} nodes");
        tracing::trace!(graph = %self.name(), u, v, "add edge");

        let mut guard = self.edit();
        let matrix = guard.adj_matrix()?;
        if u == v {
            matrix.set(u, u, (matrix.loop_degree(u) + 1).min(FULL_LOOP));
        } else if !matrix.has_arc(u, v) {
            matrix.set(u, v, 1);
        }
        guard.commit()
    }
}
