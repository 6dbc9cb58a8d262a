/*!
# Node Representation

Nodes are numbered `0` to `n - 1` and stored as `u32`. Every representation of a graph uses
the same numbering, so a node keeps its index across conversions; only editing operations
(inserting, removing or identifying nodes) shift the indices of later nodes.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;
