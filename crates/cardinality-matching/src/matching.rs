use std::fmt::{Debug, Formatter};

use petgraph::visit::{GraphBase, NodeIndexable};

use crate::index::VertexIndex;

/// A matching of a graph: a set of edges without common endpoints.
///
/// The matching keeps a handle to its graph in order to translate between
/// node identifiers and compact indices.
#[derive(Clone)]
pub struct Matching<G: GraphBase> {
    graph: G,
    mates: Vec<VertexIndex>,
    len: usize,
}

impl<G> Matching<G>
where
    G: GraphBase + NodeIndexable,
{
    /// Assumes that `mates` is symmetric. Unmatched vertices hold `VertexIndex::end()`.
    pub(crate) fn new(graph: G, mates: Vec<VertexIndex>) -> Self {
        debug_assert_eq!(mates.len(), graph.node_bound());
        debug_assert!(mates
            .iter()
            .enumerate()
            .all(|(i, m)| !m.is_valid() || mates[m.index()] == VertexIndex::new(i)));
        let len = mates.iter().filter(|m| m.is_valid()).count() / 2;
        Self { graph, mates, len }
    }

    /// Returns the partner of `node`, or `None` if `node` is unmatched.
    ///
    /// A node whose index is not below the node bound is reported as
    /// unmatched.
    ///
    /// # Panics
    ///
    /// Panics if the graph itself cannot map `node` to an index, e.g. a node
    /// that is not in a `GraphMap`.
    pub fn mate(&self, node: G::NodeId) -> Option<G::NodeId> {
        let mate = *self.mates.get(self.graph.to_index(node))?;
        mate.is_valid().then(|| self.graph.from_index(mate.index()))
    }

    /// Returns whether `node` is covered by the matching.
    pub fn contains_node(&self, node: G::NodeId) -> bool {
        self.mate(node).is_some()
    }

    /// Returns whether the edge `a`-`b` is part of the matching.
    pub fn contains_edge(&self, a: G::NodeId, b: G::NodeId) -> bool {
        self.mate(a) == Some(b)
    }

    /// Returns the number of matched edges.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether no edge is matched.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether every vertex is matched.
    pub fn is_perfect(&self) -> bool {
        2 * self.len == self.mates.len()
    }

    /// Returns an iterator over the matched edges.
    ///
    /// Every edge is reported once with the endpoint of lower index first. The
    /// edges are ordered by that endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (G::NodeId, G::NodeId)> + '_ {
        self.mates
            .iter()
            .enumerate()
            .filter(|(i, m)| m.is_valid() && *i < m.index())
            .map(|(i, m)| (self.graph.from_index(i), self.graph.from_index(m.index())))
    }

    /// Returns an iterator over the vertices not covered by the matching.
    pub fn unmatched(&self) -> impl Iterator<Item = G::NodeId> + '_ {
        self.mates.iter().enumerate().filter(|(_, m)| !m.is_valid()).map(|(i, _)| self.graph.from_index(i))
    }
}

impl<G: GraphBase> Debug for Matching<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let edges = self.mates.iter().enumerate().filter(|(i, m)| m.is_valid() && *i < m.index());
        f.debug_map().entries(edges.map(|(i, m)| (i, m.index()))).finish()
    }
}

#[cfg(test)]
mod test {
    use petgraph::graph::{NodeIndex, UnGraph};
    use petgraph::graphmap::UnGraphMap;

    use crate::index::VertexIndex;
    use crate::Matching;

    fn mates(n: usize, pairs: &[(usize, usize)]) -> Vec<VertexIndex> {
        let mut mates = vec![VertexIndex::end(); n];
        for &(u, v) in pairs {
            mates[u] = VertexIndex::new(v);
            mates[v] = VertexIndex::new(u);
        }
        mates
    }

    #[test]
    fn accessors() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]);
        let matching = Matching::new(&graph, mates(5, &[(1, 0), (3, 2)]));

        assert_eq!(matching.len(), 2);
        assert!(!matching.is_empty());
        assert!(!matching.is_perfect());
        assert_eq!(matching.mate(NodeIndex::new(0)), Some(NodeIndex::new(1)));
        assert_eq!(matching.mate(NodeIndex::new(3)), Some(NodeIndex::new(2)));
        assert_eq!(matching.mate(NodeIndex::new(4)), None);
        assert_eq!(matching.mate(NodeIndex::new(17)), None);
        assert!(matching.contains_node(NodeIndex::new(2)));
        assert!(!matching.contains_node(NodeIndex::new(4)));
        assert!(matching.contains_edge(NodeIndex::new(2), NodeIndex::new(3)));
        assert!(!matching.contains_edge(NodeIndex::new(1), NodeIndex::new(2)));

        let edges: Vec<_> = matching.edges().map(|(u, v)| (u.index(), v.index())).collect();
        assert_eq!(edges, [(0, 1), (2, 3)]);
        let unmatched: Vec<_> = matching.unmatched().map(|u| u.index()).collect();
        assert_eq!(unmatched, [4]);
    }

    #[test]
    #[should_panic]
    fn mate_of_node_missing_from_graph_map() {
        let graph = UnGraphMap::<char, ()>::from_edges([('a', 'b')]);
        let matching = Matching::new(&graph, mates(2, &[(0, 1)]));
        matching.mate('z');
    }

    #[test]
    fn perfect_and_empty() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1)]);
        assert!(Matching::new(&graph, mates(2, &[(0, 1)])).is_perfect());
        let empty = Matching::new(&graph, mates(2, &[]));
        assert!(empty.is_empty());
        assert_eq!(empty.edges().count(), 0);
    }

    #[test]
    fn debug_lists_edges() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (2, 3)]);
        let matching = Matching::new(&graph, mates(4, &[(3, 2), (0, 1)]));
        assert_eq!(format!("{:?}", matching), "{0: 1, 2: 3}");
    }
}
