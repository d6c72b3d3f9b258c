//! This is a library to compute a [maximum cardinality matching](https://en.wikipedia.org/wiki/Maximum_cardinality_matching) of a simple, undirected graph.
//!
//! A *matching* is a set of edges without common vertices. It is *maximum* if
//! no matching of the graph has more edges. By Berge's theorem, this is the
//! case exactly if there is no *augmenting path*, a path between two unmatched
//! vertices whose edges are alternately unmatched and matched.
//!
//! The matching is computed with Edmonds' blossom algorithm in *O(nm)* time:
//! a greedy matching is repeatedly grown along augmenting paths. Odd cycles
//! found during the search for such a path are contracted into single
//! vertices (blossoms) and expanded again when the path is applied.
//!
//! # Examples
//!
//! A cycle with five nodes has a maximum matching with two edges.
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use petgraph::graph::UnGraph;
//! use cardinality_matching::maximum_matching;
//!
//! let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
//! let matching = maximum_matching(&graph)?;
//!
//! assert_eq!(matching.len(), 2);
//! assert_eq!(matching.unmatched().count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Determining whether a graph has a [perfect matching](https://en.wikipedia.org/wiki/Perfect_matching).
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use petgraph::graph::{NodeIndex, UnGraph};
//! use cardinality_matching::maximum_matching_from;
//!
//! // two triangles sharing a node and a pendant node
//! let graph = UnGraph::<(), ()>::from_edges([(0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 4), (4, 5)]);
//!
//! // start with the edge that blocks both triangles
//! let initial = [(NodeIndex::new(2), NodeIndex::new(4))];
//! let matching = maximum_matching_from(&graph, initial)?;
//!
//! assert!(matching.is_perfect());
//! # Ok(())
//! # }
//! ```
//!
//! # Generics
//!
//! The algorithm is implemented for structs that implement the `petgraph`
//! traits `NodeCompactIndexable`, `IntoNeighbors`, and `GraphProp<EdgeType =
//! Undirected>`. The adjacency must be symmetric and free of self loops; this
//! is checked before the computation starts.
//!
//! # References
//! + \[Edm65\]: Jack Edmonds. “Paths, Trees, and Flowers”. <https://doi.org/10.4153/CJM-1965-045-4>.
//! + \[Gal86\]: Zvi Galil. “Efficient Algorithms for Finding Maximum Matching in Graphs”. <https://doi.org/10.1145/6462.6502>.

#![forbid(unsafe_code)]
#![doc(test(attr(deny(warnings, rust_2018_idioms), allow(dead_code))))]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

/// The blossom algorithm.
pub mod blossom;
mod error;
mod index;
mod matching;
mod queue;
mod union_find;
mod validate;


pub use blossom::{maximum_matching, maximum_matching_from, AugmentingSearch};
pub use error::MatchingError;
pub use matching::Matching;
pub use validate::check_graph;
