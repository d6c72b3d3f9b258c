mod phase;

use std::fmt::{Debug, Formatter};

use petgraph::visit::{GraphBase, GraphProp, IntoNeighbors, NodeCompactIndexable};
use petgraph::Undirected;
use tracing::{debug, info, instrument};

use crate::blossom::phase::PhaseState;
use crate::index::VertexIndex;
use crate::validate::{check_graph, initial_mates};
use crate::{Matching, MatchingError};

/// Computes a maximum cardinality matching of the graph.
///
/// # Errors
///
/// Returns a [MatchingError] if the graph has a self loop or its adjacency is
/// not symmetric.
pub fn maximum_matching<G>(graph: G) -> Result<Matching<G>, MatchingError>
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    maximum_matching_from(graph, [])
}

/// Computes a maximum cardinality matching of the graph, starting from the
/// given matched pairs.
///
/// The initial pairs are kept as long as they are not on an augmenting path.
/// Starting from a maximum matching returns it unchanged.
///
/// # Errors
///
/// Returns a [MatchingError] if the graph has a self loop or its adjacency is
/// not symmetric, or if the initial pairs do not form a matching of the graph.
#[instrument(skip_all)]
pub fn maximum_matching_from<G, I>(graph: G, initial: I) -> Result<Matching<G>, MatchingError>
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    I: IntoIterator<Item = (G::NodeId, G::NodeId)>,
{
    let mut search = AugmentingSearch::with_initial(graph, initial)?;
    search.greedy();
    while search.augment() {}
    info!(number_of_nodes = graph.node_bound(), matching_size = search.len(), phases = search.phases());
    Ok(search.into_matching())
}

/// Step-wise maximum matching computation.
///
/// Every call to [AugmentingSearch::augment] runs one phase of Edmonds'
/// algorithm: it grows alternating trees from all unmatched vertices at once,
/// contracting odd cycles into blossoms, until it finds an augmenting path or
/// runs out of edges. A phase either adds exactly one edge to the matching or
/// proves that the matching is maximum.
///
/// The matching is only modified at phase boundaries, so callers can stop
/// between phases, e.g. to enforce a time limit, and keep a valid matching.
///
/// ```rust
/// # use std::error::Error;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use petgraph::graph::UnGraph;
/// use cardinality_matching::AugmentingSearch;
///
/// // a path with 6 nodes
/// let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
/// let mut search = AugmentingSearch::new(&graph)?;
///
/// while search.augment() {
///     println!("{} edges after {} phases", search.len(), search.phases());
/// }
/// assert_eq!(search.len(), 3);
/// assert_eq!(search.phases(), 4);
/// # Ok(())
/// # }
/// ```
pub struct AugmentingSearch<G: GraphBase> {
    graph: G,
    mates: Vec<VertexIndex>,
    state: PhaseState,
    len: usize,
    phases: usize,
}

impl<G> AugmentingSearch<G>
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    /// Starts with an empty matching.
    ///
    /// # Errors
    ///
    /// Returns a [MatchingError] if the graph is not a valid input, see [check_graph].
    pub fn new(graph: G) -> Result<Self, MatchingError> {
        Self::with_initial(graph, [])
    }

    /// Starts with the given matched pairs.
    ///
    /// # Errors
    ///
    /// Returns a [MatchingError] if the graph is not a valid input, see
    /// [check_graph], or if the pairs do not form a matching of the graph.
    pub fn with_initial<I>(graph: G, initial: I) -> Result<Self, MatchingError>
    where
        I: IntoIterator<Item = (G::NodeId, G::NodeId)>,
    {
        check_graph(graph)?;
        let mates = initial_mates(graph, initial)?;
        let len = mates.iter().filter(|m| m.is_valid()).count() / 2;
        let state = PhaseState::new(graph.node_bound());
        Ok(Self { graph, mates, state, len, phases: 0 })
    }

    /// Matches every unmatched vertex to its first unmatched neighbor, if any.
    ///
    /// Returns the number of added edges. This only saves phases; the final
    /// matching size does not depend on it.
    #[instrument(skip_all)]
    pub fn greedy(&mut self) -> usize {
        let graph = self.graph;
        let mut added = 0;
        for i in 0..graph.node_bound() {
            if self.mates[i].is_valid() {
                continue;
            }
            let mates = &self.mates;
            let free = graph
                .neighbors(graph.from_index(i))
                .map(|w| VertexIndex::new(graph.to_index(w)))
                .find(|w| !mates[w.index()].is_valid());
            if let Some(w) = free {
                self.mates[i] = w;
                self.mates[w.index()] = VertexIndex::new(i);
                added += 1;
            }
        }
        self.len += added;
        debug!(added, matching_size = self.len);
        added
    }

    /// Runs one phase. Returns whether the matching grew by one edge.
    ///
    /// Once this returns `false`, the matching is maximum and further calls
    /// return `false` as well.
    #[instrument(level = "debug", skip_all, fields(phase = self.phases + 1))]
    pub fn augment(&mut self) -> bool {
        self.phases += 1;
        // An augmenting path needs two distinct unmatched endpoints.
        if self.mates.len() < 2 * self.len + 2 {
            return false;
        }
        let augmented = self.state.search(self.graph, &mut self.mates);
        if augmented {
            self.len += 1;
            debug!(matching_size = self.len, "augmented");
        }
        augmented
    }

    /// Returns the current number of matched edges.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether no edge is matched yet.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of phases run so far, including unsuccessful ones.
    #[inline(always)]
    pub fn phases(&self) -> usize {
        self.phases
    }

    /// Returns a copy of the current matching.
    pub fn matching(&self) -> Matching<G> {
        Matching::new(self.graph, self.mates.clone())
    }

    /// Returns the current matching.
    pub fn into_matching(self) -> Matching<G> {
        Matching::new(self.graph, self.mates)
    }
}

impl<G: GraphBase> Debug for AugmentingSearch<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AugmentingSearch")
            .field("number_of_nodes", &self.mates.len())
            .field("len", &self.len)
            .field("phases", &self.phases)
            .finish()
    }
}
