/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which computes a hash of the *logical* graph
independent of the form it is currently stored in.

The digest encodes:
- the number of nodes, and
- the sorted multiset of directed arcs,

before feeding them into a cryptographic hash function. Since every form yields the same arcs for
the same graph, converting a graph never changes its digest.

## Example
```
use graphforms::{prelude::*, repr::digest::GraphDigest};

let list = Graph::try_from_rows(State::AdjacencyList, vec![vec![1], vec![0]], "g").unwrap();
let mut matrix = list.clone();
matrix.set_state(State::IncidenceMatrix).unwrap();

assert_eq!(list.digest_sha256(), matrix.digest_sha256());
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a **canonical hash digest** of a graph.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: DirectedEdges,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        hasher.update(self.number_of_nodes().to_le_bytes());

        for Edge(u, v) in self.ordered_directed_edges() {
            hasher.update(u.to_le_bytes());
            hasher.update(v.to_le_bytes());
        }

        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digest_ignores_form_and_arc_order() {
        let a = AdjList::try_from_lists(vec![vec![2, 1], vec![], vec![2]]).unwrap();
        let b = AdjList::try_from_lists(vec![vec![1, 2], vec![], vec![2]]).unwrap();
        let matrix = AdjMatrix::from(&a);

        assert_eq!(a.digest_sha256().len(), 64);
        assert_eq!(a.digest_sha256(), b.digest_sha256());
        assert_eq!(a.digest_sha256(), matrix.digest_sha256());
    }

    #[test]
    fn digest_depends_on_nodes_and_arcs() {
        let a = AdjList::new(3);
        let b = AdjList::new(4);
        let mut c = AdjList::new(3);
        c.add_arc(0, 1);

        assert_ne!(a.digest_sha256(), b.digest_sha256());
        assert_ne!(a.digest_sha256(), c.digest_sha256());
    }
}
