use petgraph::visit::{GraphProp, IntoNeighbors, NodeCompactIndexable};
use petgraph::Undirected;
use tracing::instrument;

use crate::index::VertexIndex;
use crate::MatchingError;

/// Checks that the graph is a valid input for the matching algorithm.
///
/// Every vertex must list each neighbor as often as that neighbor lists it,
/// and no vertex may be its own neighbor. Runs in *O(n + m)* time.
///
/// ```rust
/// use petgraph::graph::UnGraph;
/// use cardinality_matching::{check_graph, MatchingError};
///
/// let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
/// assert_eq!(check_graph(&graph), Ok(()));
///
/// let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 1)]);
/// assert_eq!(check_graph(&graph), Err(MatchingError::SelfLoop(1)));
/// ```
#[instrument(skip_all)]
pub fn check_graph<G>(graph: G) -> Result<(), MatchingError>
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    let n = graph.node_bound();

    // Bucketing the arcs by head and then by tail yields, for every vertex, its
    // sorted in- and out-neighborhoods. The graph is symmetric iff they agree.
    let mut incoming = vec![vec![]; n];
    for u in 0..n {
        for w in graph.neighbors(graph.from_index(u)) {
            let w = graph.to_index(w);
            if w == u {
                return Err(MatchingError::SelfLoop(u));
            }
            incoming[w].push(VertexIndex::new(u));
        }
    }
    let mut outgoing = vec![vec![]; n];
    for (w, tails) in incoming.iter().enumerate() {
        for u in tails {
            outgoing[u.index()].push(VertexIndex::new(w));
        }
    }

    for (x, (out, inc)) in outgoing.iter().zip(&incoming).enumerate() {
        if out == inc {
            continue;
        }
        let i = out.iter().zip(inc).take_while(|(a, b)| a == b).count();
        return Err(match (out.get(i), inc.get(i)) {
            (Some(a), Some(b)) if a < b => MatchingError::AsymmetricAdjacency { from: x, to: a.index() },
            (Some(a), None) => MatchingError::AsymmetricAdjacency { from: x, to: a.index() },
            (_, Some(b)) => MatchingError::AsymmetricAdjacency { from: b.index(), to: x },
            (None, None) => unreachable!("neighborhoods differ"),
        });
    }
    Ok(())
}

/// Converts initial pairs into a mate array. Every pair must be an edge within
/// the node bound and no vertex may occur in two different pairs.
pub(crate) fn initial_mates<G, I>(graph: G, pairs: I) -> Result<Vec<VertexIndex>, MatchingError>
where
    G: NodeCompactIndexable + IntoNeighbors,
    I: IntoIterator<Item = (G::NodeId, G::NodeId)>,
{
    let mut mates = vec![VertexIndex::end(); graph.node_bound()];
    for (a, b) in pairs {
        let (u, v) = (graph.to_index(a), graph.to_index(b));
        if u.max(v) >= mates.len() {
            return Err(MatchingError::NodeOutOfRange(u.max(v)));
        }
        if u == v {
            return Err(MatchingError::SelfLoop(u));
        }
        if mates[u] == VertexIndex::new(v) && mates[v] == VertexIndex::new(u) {
            continue;
        }
        if let Some(&x) = [u, v].iter().find(|x| mates[**x].is_valid()) {
            return Err(MatchingError::VertexMatchedTwice(x));
        }
        if !graph.neighbors(a).any(|c| c == b) {
            return Err(MatchingError::NotAnEdge(u, v));
        }
        mates[u] = VertexIndex::new(v);
        mates[v] = VertexIndex::new(u);
    }
    Ok(mates)
}

#[cfg(test)]
mod test {
    use petgraph::graph::{NodeIndex, UnGraph};
    use petgraph::visit::{GraphBase, GraphProp, IntoNeighbors, NodeCompactIndexable, NodeCount, NodeIndexable};
    use petgraph::Undirected;

    use super::{check_graph, initial_mates};
    use crate::index::VertexIndex;
    use crate::tests::{bowtie_graph, cycle_graph, petersen_graph};
    use crate::MatchingError;

    /// An adjacency list that is not forced to be symmetric.
    struct Adjacency(Vec<Vec<usize>>);

    impl GraphBase for Adjacency {
        type EdgeId = usize;
        type NodeId = usize;
    }

    impl GraphProp for Adjacency {
        type EdgeType = Undirected;
    }

    impl<'a> IntoNeighbors for &'a Adjacency {
        type Neighbors = std::iter::Copied<std::slice::Iter<'a, usize>>;
        fn neighbors(self, a: usize) -> Self::Neighbors {
            self.0[a].iter().copied()
        }
    }

    impl NodeCount for Adjacency {
        fn node_count(&self) -> usize {
            self.0.len()
        }
    }

    impl NodeIndexable for Adjacency {
        fn node_bound(&self) -> usize {
            self.0.len()
        }
        fn to_index(&self, a: usize) -> usize {
            a
        }
        fn from_index(&self, i: usize) -> usize {
            i
        }
    }

    impl NodeCompactIndexable for Adjacency {}

    #[test]
    fn accepts_symmetric_graphs() {
        assert_eq!(check_graph(&cycle_graph(5)), Ok(()));
        assert_eq!(check_graph(&bowtie_graph()), Ok(()));
        assert_eq!(check_graph(&petersen_graph()), Ok(()));
        assert_eq!(check_graph(&UnGraph::<(), ()>::default()), Ok(()));
        assert_eq!(check_graph(&Adjacency(vec![vec![2, 1], vec![0], vec![0]])), Ok(()));
    }

    #[test]
    fn rejects_self_loops() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (2, 2)]);
        assert_eq!(check_graph(&graph), Err(MatchingError::SelfLoop(2)));
    }

    #[test]
    fn rejects_missing_reverse_arc() {
        let graph = Adjacency(vec![vec![1, 2], vec![0], vec![]]);
        assert_eq!(check_graph(&graph), Err(MatchingError::AsymmetricAdjacency { from: 0, to: 2 }));

        let graph = Adjacency(vec![vec![1], vec![0], vec![1]]);
        assert_eq!(check_graph(&graph), Err(MatchingError::AsymmetricAdjacency { from: 2, to: 1 }));
    }

    #[test]
    fn initial_pairs() {
        let graph = cycle_graph(5);
        let n = |i| NodeIndex::new(i);

        let mates = initial_mates(&graph, [(n(0), n(1)), (n(3), n(2)), (n(1), n(0))]).unwrap();
        let expected: Vec<_> = [1, 0, 3, 2, usize::MAX]
            .into_iter()
            .map(|m| if m == usize::MAX { VertexIndex::end() } else { VertexIndex::new(m) })
            .collect();
        assert_eq!(mates, expected);

        assert_eq!(initial_mates(&graph, [(n(0), n(2))]), Err(MatchingError::NotAnEdge(0, 2)));
        assert_eq!(initial_mates(&graph, [(n(4), n(4))]), Err(MatchingError::SelfLoop(4)));
        assert_eq!(initial_mates(&graph, [(n(0), n(1)), (n(1), n(2))]), Err(MatchingError::VertexMatchedTwice(1)));
        assert_eq!(initial_mates(&graph, [(n(0), n(7))]), Err(MatchingError::NodeOutOfRange(7)));
        assert_eq!(initial_mates(&graph, [(n(5), n(5))]), Err(MatchingError::NodeOutOfRange(5)));
    }
}
