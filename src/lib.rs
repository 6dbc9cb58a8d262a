/*!
`graphforms` stores small graphs in one of three interchangeable forms and keeps them consistent
while they are converted, combined and edited.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **arcs**, we use a simple tuple-struct `Edge(Node, Node)`.

A [`Graph`](crate::graph::Graph) holds a name and exactly one of
- [`AdjList`](crate::repr::AdjList): for every node, the list of its out-neighbors (repetitions allowed),
- [`AdjMatrix`](crate::repr::AdjMatrix): an `n x n` matrix of arc counts,
- [`IncidenceMatrix`](crate::repr::IncidenceMatrix): an `n x m` matrix with one column per edge.

In an incidence matrix, a column with entries `1` and `1` is an undirected edge (an arc in each
direction), a column with `1` at the tail and `-1` at the head is a directed edge, and a column
with a single entry is a loop: `1` for a half loop (one arc), `2` for a full loop (two arcs).
The active form is tagged by [`State`](crate::repr::State).

### Edges and arcs

Two counts are provided: [`number_of_edges`](crate::ops::GraphEdgeOrder::number_of_edges) counts
edges as they appear as incidence columns, whereas
[`number_of_arcs`](crate::ops::DirectedEdges::number_of_arcs) counts the arcs of the adjacency
list. An undirected edge is one edge but two arcs.

# Design

Converting between forms is lossless for every graph an incidence matrix can express. Graphs with
parallel arcs or loops of degree above two fail to convert into incidence form with
[`GraphError::MultiEdge`](crate::error::GraphError::MultiEdge), and the graph is left unchanged.

Queries never switch the form of a graph. Edits and the graph algebra temporarily force the form
they need and convert back; an edit that fails leaves the graph exactly as it was.

Readers and writers are provided as configurable structs that one can alter to their needs using
the *Builder* / *Setter* pattern before calling them on a graph.

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations, the graph itself and all representations,
- [`editing`] and [`algebra`] document the mutating and combining operations on [`Graph`](crate::graph::Graph),
- [`io`] includes readers and writers for the raw row format and a table renderer.

[`repr::digest`] enables computing a `Sha256`-hash of the logical graph, independent of its form.

In most use-cases, `use graphforms::prelude::*;` suffices for your needs.

```
use graphforms::prelude::*;

let mut g = Graph::try_from_rows(State::AdjacencyList, vec![vec![1], vec![]], "g").unwrap();
let h = g.complement().unwrap();
assert_eq!(h.to_rows(), vec![vec![], vec![0]]);

g.add_edge(1, 0).unwrap();
let join = g.connection(&h).unwrap();
assert_eq!(join.number_of_nodes(), 4);
assert_eq!(join.number_of_edges(), 1 + 1 + 4);
```
*/

pub mod algebra;
pub mod edge;
pub mod editing;
pub mod error;
pub mod graph;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `graphforms::prelude` includes definitions for nodes and edges, all basic graph operation traits, the graph as well as all representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, graph::*, node::*, ops::*, repr::*};
}
