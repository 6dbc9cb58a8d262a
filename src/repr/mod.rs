/*!
# Representations

A graph is stored in exactly one of three physical forms at a time:

- [`AdjList`]: one neighborhood per node; the only form that can hold parallel arcs,
- [`AdjMatrix`]: `n x n` presence flags off the diagonal, loop degrees on it,
- [`IncidenceMatrix`]: `n x m`, one signed column per edge.

[`Representation`] is the tagged union over these forms and [`State`] its tag. Since each variant
carries its own payload type, a payload can never disagree with its tag; shape checks happen once,
when a form is built from raw rows.

Conversions between the forms live in [`convert`](self::convert) and are dispatched by
[`Representation::convert`].
*/

use std::{borrow::Cow, fmt::Display, str::FromStr};

use crate::{error::*, ops::*, *};

mod adj_list;
mod adj_matrix;
mod convert;
mod incidence;

pub mod digest;

pub use adj_list::*;
pub use adj_matrix::*;
pub use incidence::*;

/// Multiplicity of an arc, or loop degree, in an adjacency matrix
pub type Degree = u32;

/// Entry of an incidence matrix
pub type Incidence = i32;

/// Loop degree of a directed (half) loop
pub const HALF_LOOP: Degree = 1;

/// Loop degree of a full undirected loop
pub const FULL_LOOP: Degree = 2;

/// Tag naming the active physical form of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    AdjacencyList,
    AdjacencyMatrix,
    IncidenceMatrix,
}

impl State {
    /// All states in menu order
    pub const ALL: [State; 3] = [
        State::AdjacencyList,
        State::AdjacencyMatrix,
        State::IncidenceMatrix,
    ];

    /// Human readable name, also accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            State::AdjacencyList => "adjacency list",
            State::AdjacencyMatrix => "adjacency matrix",
            State::IncidenceMatrix => "incidence matrix",
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for State {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "adjacency list" | "adjacent list" | "list" => Ok(State::AdjacencyList),
            "adjacency matrix" | "adjacent matrix" | "matrix" => Ok(State::AdjacencyMatrix),
            "incidence matrix" | "incidence" => Ok(State::IncidenceMatrix),
            _ => Err(GraphError::UnknownState(s.to_string())),
        }
    }
}

/// The physical payload of a graph, tagged by its [`State`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation {
    AdjList(AdjList),
    AdjMatrix(AdjMatrix),
    Incidence(IncidenceMatrix),
}

impl Representation {
    /// Builds the form named by `state` from raw integer rows: jagged neighbor lists for
    /// [`State::AdjacencyList`], square rows for [`State::AdjacencyMatrix`], rectangular rows
    /// for [`State::IncidenceMatrix`].
    pub fn try_from_rows(state: State, rows: Vec<Vec<i64>>) -> Result<Self> {
        Ok(match state {
            State::AdjacencyList => Representation::AdjList(AdjList::try_from_rows(rows)?),
            State::AdjacencyMatrix => Representation::AdjMatrix(AdjMatrix::try_from_rows(rows)?),
            State::IncidenceMatrix => {
                Representation::Incidence(IncidenceMatrix::try_from_rows(rows)?)
            }
        })
    }

    /// Returns the payload as raw integer rows
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        match self {
            Representation::AdjList(list) => list.to_rows(),
            Representation::AdjMatrix(matrix) => matrix.to_rows(),
            Representation::Incidence(incidence) => incidence.to_rows(),
        }
    }

    /// Returns the tag of the active form
    pub fn state(&self) -> State {
        match self {
            Representation::AdjList(_) => State::AdjacencyList,
            Representation::AdjMatrix(_) => State::AdjacencyMatrix,
            Representation::Incidence(_) => State::IncidenceMatrix,
        }
    }

    /// Computes the payload in form `target`. Returns a clone if already in `target`.
    ///
    /// # Errors
    /// Fails with [`GraphError::MultiEdge`] if `target` is [`State::IncidenceMatrix`] and the
    /// graph has parallel arcs or a loop degree above [`FULL_LOOP`].
    pub fn convert(&self, target: State) -> Result<Self> {
        use Representation as R;

        Ok(match (self, target) {
            (R::AdjList(list), State::AdjacencyList) => R::AdjList(list.clone()),
            (R::AdjList(list), State::AdjacencyMatrix) => R::AdjMatrix(AdjMatrix::from(list)),
            (R::AdjList(list), State::IncidenceMatrix) => {
                R::Incidence(IncidenceMatrix::try_from(list)?)
            }
            (R::AdjMatrix(matrix), State::AdjacencyList) => R::AdjList(AdjList::from(matrix)),
            (R::AdjMatrix(matrix), State::AdjacencyMatrix) => R::AdjMatrix(matrix.clone()),
            (R::AdjMatrix(matrix), State::IncidenceMatrix) => {
                R::Incidence(IncidenceMatrix::try_from(matrix)?)
            }
            (R::Incidence(incidence), State::AdjacencyList) => {
                R::AdjList(AdjList::from(incidence))
            }
            (R::Incidence(incidence), State::AdjacencyMatrix) => {
                R::AdjMatrix(AdjMatrix::from(incidence))
            }
            (R::Incidence(incidence), State::IncidenceMatrix) => R::Incidence(incidence.clone()),
        })
    }

    /// Returns the adjacency-list form, borrowed if it is the active one
    pub fn to_adj_list(&self) -> Cow<'_, AdjList> {
        match self {
            Representation::AdjList(list) => Cow::Borrowed(list),
            Representation::AdjMatrix(matrix) => Cow::Owned(AdjList::from(matrix)),
            Representation::Incidence(incidence) => Cow::Owned(AdjList::from(incidence)),
        }
    }

    /// Returns the adjacency-matrix form, borrowed if it is the active one
    pub fn to_adj_matrix(&self) -> Cow<'_, AdjMatrix> {
        match self {
            Representation::AdjList(list) => Cow::Owned(AdjMatrix::from(list)),
            Representation::AdjMatrix(matrix) => Cow::Borrowed(matrix),
            Representation::Incidence(incidence) => Cow::Owned(AdjMatrix::from(incidence)),
        }
    }

    /// Returns the adjacency list if it is the active form
    pub fn as_adj_list(&self) -> Option<&AdjList> {
        match self {
            Representation::AdjList(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the adjacency matrix if it is the active form
    pub fn as_adj_matrix(&self) -> Option<&AdjMatrix> {
        match self {
            Representation::AdjMatrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    /// Returns the incidence matrix if it is the active form
    pub fn as_incidence(&self) -> Option<&IncidenceMatrix> {
        match self {
            Representation::Incidence(incidence) => Some(incidence),
            _ => None,
        }
    }
}

impl From<AdjList> for Representation {
    fn from(value: AdjList) -> Self {
        Representation::AdjList(value)
    }
}

impl From<AdjMatrix> for Representation {
    fn from(value: AdjMatrix) -> Self {
        Representation::AdjMatrix(value)
    }
}

impl From<IncidenceMatrix> for Representation {
    fn from(value: IncidenceMatrix) -> Self {
        Representation::Incidence(value)
    }
}

impl GraphNodeOrder for Representation {
    fn number_of_nodes(&self) -> NumNodes {
        match self {
            Representation::AdjList(list) => list.number_of_nodes(),
            Representation::AdjMatrix(matrix) => matrix.number_of_nodes(),
            Representation::Incidence(incidence) => incidence.number_of_nodes(),
        }
    }
}

impl GraphEdgeOrder for Representation {
    fn number_of_edges(&self) -> NumEdges {
        match self {
            Representation::AdjList(list) => list.number_of_edges(),
            Representation::AdjMatrix(matrix) => matrix.number_of_edges(),
            Representation::Incidence(incidence) => incidence.number_of_edges(),
        }
    }
}

impl DirectedEdges for Representation {
    fn directed_edges(&self) -> Vec<Edge> {
        self.to_adj_list().directed_edges()
    }
}
