/*!
# Graph

[`Graph`] owns one [`Representation`] together with a display name. Queries work on any form:
they compute the form they need into a temporary value, so the caller's chosen representation is
never switched under its feet. Editing operations (see [`editing`](crate::editing)) and the graph
algebra (see [`algebra`](crate::algebra)) force the form best suited to their work through a
`StateGuard`, which converts back to the original form when the edit is committed and restores
an exact snapshot if it is not.
*/

use crate::{error::*, prelude::*};

/// Display name used when a graph is created or renamed with an empty name
pub const UNNAMED: &str = "unnamed";

/// A named graph stored in one of the three forms
///
/// # Example
/// ```
/// use graphforms::prelude::*;
///
/// let mut graph =
///     Graph::try_from_rows(State::AdjacencyList, vec![vec![1], vec![0]], "pair").unwrap();
///
/// graph.set_state(State::IncidenceMatrix).unwrap();
/// assert_eq!(graph.to_rows(), vec![vec![1], vec![1]]);
///
/// assert_eq!(graph.number_of_edges(), 1);
/// assert_eq!(graph.directed_edges(), vec![Edge(0, 1), Edge(1, 0)]);
/// assert_eq!(graph.state(), State::IncidenceMatrix);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    name: String,
    repr: Representation,
}

impl Graph {
    /// Creates a graph from any of the three forms
    pub fn new<R, S>(repr: R, name: S) -> Self
    where
        R: Into<Representation>,
        S: Into<String>,
    {
        Self {
            name: Self::display_name(name.into()),
            repr: repr.into(),
        }
    }

    /// Creates a graph from raw integer rows interpreted according to `state`
    ///
    /// # Errors
    /// Fails if the rows do not have the shape `state` requires.
    pub fn try_from_rows<S>(state: State, rows: Vec<Vec<i64>>, name: S) -> Result<Self>
    where
        S: Into<String>,
    {
        Ok(Self::new(Representation::try_from_rows(state, rows)?, name))
    }

    /// Returns the current payload as raw integer rows
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.repr.to_rows()
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name
    pub fn rename<S: Into<String>>(&mut self, name: S) {
        self.name = Self::display_name(name.into());
    }

    /// Returns the tag of the current form
    pub fn state(&self) -> State {
        self.repr.state()
    }

    /// Returns the current payload
    pub fn repr(&self) -> &Representation {
        &self.repr
    }

    /// Consumes the graph and returns its payload
    pub fn into_repr(self) -> Representation {
        self.repr
    }

    /// Converts the payload into form `target`; does nothing if already in `target`.
    /// On failure the graph is left unchanged.
    ///
    /// # Errors
    /// Fails with [`GraphError::MultiEdge`] if `target` is [`State::IncidenceMatrix`] and the
    /// graph has parallel arcs or a loop degree above [`FULL_LOOP`].
    pub fn set_state(&mut self, target: State) -> Result<()> {
        let state = self.state();
        if state == target {
            return Ok(());
        }

        tracing::debug!(
            graph = %self.name,
            from = %state,
            to = %target,
            nodes = self.number_of_nodes(),
            "converting representation"
        );
        self.repr = self.repr.convert(target)?;
        Ok(())
    }

    /// Returns an independent deep copy, used whenever an operation must not touch its operand
    pub fn detached_copy(&self) -> Graph {
        Graph {
            name: self.name.clone(),
            repr: self.repr.clone(),
        }
    }

    /// Returns the index of the first incidence column carrying the arc `u -> v`: a directed
    /// column from `u` to `v`, an undirected column on `{u, v}`, or the loop column at `u == v`.
    /// This is the edge index [`Graph::remove_edge`] expects.
    ///
    /// # Errors
    /// Fails if the graph cannot be expressed as an incidence matrix.
    pub fn find_edge(&self, u: Node, v: Node) -> Result<Option<NumEdges>> {
        Ok(match self.repr.as_incidence() {
            Some(incidence) => incidence.find_edge(u, v),
            None => IncidenceMatrix::try_from(&*self.repr.to_adj_matrix())?.find_edge(u, v),
        })
    }

    /// Starts an edit that may switch the form of the graph
    pub(crate) fn edit(&mut self) -> StateGuard<'_> {
        StateGuard {
            snapshot: Some(self.repr.clone()),
            graph: self,
        }
    }

    fn display_name(name: String) -> String {
        if name.is_empty() {
            UNNAMED.to_string()
        } else {
            name
        }
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.repr.number_of_nodes()
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.repr.number_of_edges()
    }
}

impl DirectedEdges for Graph {
    fn directed_edges(&self) -> Vec<Edge> {
        self.repr.directed_edges()
    }
}

/// Scoped switch of a graph's form.
///
/// The guard remembers the payload it started from. [`StateGuard::commit`] converts the edited
/// payload back into the original form; dropping the guard without committing (early return on
/// error, or a panic on an out-of-range index) puts the remembered payload back unchanged.
pub(crate) struct StateGuard<'a> {
    graph: &'a mut Graph,
    snapshot: Option<Representation>,
}

impl StateGuard<'_> {
    /// Forces the adjacency-matrix form and returns it for editing
    pub(crate) fn adj_matrix(&mut self) -> Result<&mut AdjMatrix> {
        self.graph.set_state(State::AdjacencyMatrix)?;
        match &mut self.graph.repr {
            Representation::AdjMatrix(matrix) => Ok(matrix),
            _ => unreachable!("graph was just converted to an adjacency matrix"),
        }
    }

    /// Forces the incidence-matrix form and returns it for editing
    pub(crate) fn incidence(&mut self) -> Result<&mut IncidenceMatrix> {
        self.graph.set_state(State::IncidenceMatrix)?;
        match &mut self.graph.repr {
            Representation::Incidence(incidence) => Ok(incidence),
            _ => unreachable!("graph was just converted to an incidence matrix"),
        }
    }

    /// Converts the graph back into the form it had when the edit started.
    /// If that fails, the edit is undone.
    pub(crate) fn commit(mut self) -> Result<()> {
        let Some(snapshot) = self.snapshot.take() else {
            return Ok(());
        };

        if let Err(err) = self.graph.set_state(snapshot.state()) {
            tracing::error!(graph = %self.graph.name, %err, "cannot restore representation, undoing edit");
            self.graph.repr = snapshot;
            return Err(err);
        }
        Ok(())
    }
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            tracing::debug!(graph = %self.graph.name, "edit aborted, restoring previous payload");
            self.graph.repr = snapshot;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn mutual_pair() -> Graph {
        Graph::try_from_rows(State::AdjacencyList, vec![vec![1], vec![0]], "pair").unwrap()
    }

    #[test]
    fn empty_names_become_unnamed() {
        let mut graph = Graph::new(AdjList::new(1), "");
        assert_eq!(graph.name(), UNNAMED);

        graph.rename("g");
        assert_eq!(graph.name(), "g");
        graph.rename(String::new());
        assert_eq!(graph.name(), UNNAMED);
    }

    #[test]
    fn set_state_walks_through_all_forms() {
        let mut graph = mutual_pair();

        graph.set_state(State::AdjacencyMatrix).unwrap();
        assert_eq!(graph.to_rows(), vec![vec![0, 1], vec![1, 0]]);

        graph.set_state(State::IncidenceMatrix).unwrap();
        assert_eq!(graph.to_rows(), vec![vec![1], vec![1]]);

        graph.set_state(State::AdjacencyMatrix).unwrap();
        assert_eq!(graph.to_rows(), vec![vec![0, 1], vec![1, 0]]);

        graph.set_state(State::AdjacencyList).unwrap();
        assert_eq!(graph, mutual_pair());
    }

    #[test]
    fn failed_conversion_keeps_the_graph() {
        let mut graph =
            Graph::try_from_rows(State::AdjacencyList, vec![vec![1, 1], vec![]], "multi").unwrap();
        let before = graph.clone();

        assert_eq!(
            graph.set_state(State::IncidenceMatrix),
            Err(GraphError::MultiEdge {
                edge: Edge(0, 1),
                multiplicity: 2
            })
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn queries_do_not_switch_state() {
        for state in State::ALL {
            let mut graph = mutual_pair();
            graph.set_state(state).unwrap();
            let before = graph.clone();

            assert_eq!(graph.number_of_nodes(), 2);
            assert_eq!(graph.number_of_edges(), 1);
            assert_eq!(graph.number_of_arcs(), 2);
            assert_eq!(graph.directed_edges(), vec![Edge(0, 1), Edge(1, 0)]);
            assert_eq!(graph.degrees(), vec![(1, 1), (1, 1)]);
            assert_eq!(graph.find_edge(1, 0), Ok(Some(0)));
            assert_eq!(graph.find_edge(0, 0), Ok(None));

            assert_eq!(graph, before);
        }
    }

    #[test]
    fn edge_counts_agree_across_states() {
        let rows = vec![vec![2, 1, 0], vec![0, 0, 1], vec![1, 1, 0]];
        let mut graph = Graph::try_from_rows(State::AdjacencyMatrix, rows, "g").unwrap();

        graph.set_state(State::IncidenceMatrix).unwrap();
        let columns = graph.to_rows()[0].len() as NumEdges;
        assert_eq!(graph.number_of_edges(), columns);

        graph.set_state(State::AdjacencyList).unwrap();
        let arcs: usize = graph.to_rows().iter().map(|r| r.len()).sum();
        assert_eq!(graph.number_of_arcs(), arcs as NumEdges);
        assert_eq!(graph.number_of_edges(), columns);
    }

    #[test]
    fn dropped_guard_restores_snapshot() {
        let mut graph = mutual_pair();
        {
            let mut guard = graph.edit();
            guard.adj_matrix().unwrap().set(0, 0, 2);
        }
        assert_eq!(graph, mutual_pair());

        {
            let mut guard = graph.edit();
            guard.adj_matrix().unwrap().set(0, 0, 2);
            guard.commit().unwrap();
        }
        assert_eq!(graph.state(), State::AdjacencyList);
        assert_eq!(graph.to_rows(), vec![vec![0, 0, 1], vec![0]]);
    }

    #[test]
    fn detached_copy_is_independent() {
        let graph = mutual_pair();
        let mut copy = graph.detached_copy();
        copy.set_state(State::IncidenceMatrix).unwrap();
        copy.rename("copy");

        assert_eq!(graph, mutual_pair());
        assert_ne!(copy.state(), graph.state());
    }
}
