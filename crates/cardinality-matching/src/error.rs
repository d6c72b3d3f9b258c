use std::fmt::{Display, Formatter};

/// The input of a matching computation violates its preconditions.
///
/// Vertices are reported by their compact index, i.e. the value of
/// `NodeIndexable::to_index` for the graph at hand.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum MatchingError {
    /// The graph contains a loop at the vertex.
    SelfLoop(usize),
    /// `to` is a neighbor of `from`, but `from` is not a neighbor of `to`.
    AsymmetricAdjacency {
        /// The vertex listing the neighbor.
        from: usize,
        /// The neighbor that does not list `from` in return.
        to: usize,
    },
    /// An initial pair is not an edge of the graph.
    NotAnEdge(usize, usize),
    /// A vertex occurs in two different initial pairs.
    VertexMatchedTwice(usize),
    /// An initial pair names a vertex whose index is not below the node bound.
    NodeOutOfRange(usize),
}

impl Display for MatchingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchingError::SelfLoop(u) => write!(f, "graph contains a self loop at vertex {u}"),
            MatchingError::AsymmetricAdjacency { from, to } => {
                write!(f, "vertex {to} is a neighbor of {from}, but not vice versa")
            }
            MatchingError::NotAnEdge(u, v) => write!(f, "initial pair ({u}, {v}) is not an edge of the graph"),
            MatchingError::VertexMatchedTwice(u) => write!(f, "vertex {u} is matched more than once"),
            MatchingError::NodeOutOfRange(u) => write!(f, "vertex {u} is not in the graph"),
        }
    }
}

impl std::error::Error for MatchingError {}

#[cfg(test)]
mod test {
    use super::MatchingError;

    #[test]
    fn display() {
        assert_eq!(MatchingError::SelfLoop(3).to_string(), "graph contains a self loop at vertex 3");
        assert_eq!(
            MatchingError::AsymmetricAdjacency { from: 1, to: 2 }.to_string(),
            "vertex 2 is a neighbor of 1, but not vice versa"
        );
        assert_eq!(MatchingError::NotAnEdge(0, 4).to_string(), "initial pair (0, 4) is not an edge of the graph");
        assert_eq!(MatchingError::VertexMatchedTwice(7).to_string(), "vertex 7 is matched more than once");
        assert_eq!(MatchingError::NodeOutOfRange(9).to_string(), "vertex 9 is not in the graph");
    }
}
