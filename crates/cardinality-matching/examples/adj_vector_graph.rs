use cardinality_matching::maximum_matching;
use petgraph::visit::{GraphBase, GraphProp, IntoNeighbors, NodeCompactIndexable, NodeCount, NodeIndexable};
use petgraph::Undirected;

struct Graph(Vec<Vec<usize>>);

impl Graph {
    fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut adj = vec![];
        for (u, v) in edges {
            assert_ne!(u, v);
            if u.max(v) >= adj.len() {
                adj.resize(u.max(v) + 1, vec![])
            }
            adj[u].push(v);
            adj[v].push(u);
        }
        Self(adj)
    }
}

impl GraphBase for Graph {
    type EdgeId = usize;
    type NodeId = usize;
}

impl GraphProp for Graph {
    type EdgeType = Undirected;
}

struct Neighbors<'a>(std::slice::Iter<'a, usize>);

impl<'a> Iterator for Neighbors<'a> {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().copied()
    }
}

impl<'a> IntoNeighbors for &'a Graph {
    type Neighbors = Neighbors<'a>;
    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors {
        Neighbors(self.0[a].iter())
    }
}

impl NodeCount for Graph {
    fn node_count(&self) -> usize {
        self.0.len()
    }
}

impl NodeIndexable for Graph {
    fn node_bound(&self) -> usize {
        self.node_count()
    }
    fn to_index(&self, a: Self::NodeId) -> usize {
        a
    }
    fn from_index(&self, i: usize) -> Self::NodeId {
        i
    }
}

impl NodeCompactIndexable for Graph {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // two triangles sharing node 2
    let graph = Graph::from_edges([(0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 4)]);
    let matching = maximum_matching(&graph)?;
    println!("{:?}", matching);

    let edges: Vec<_> = matching.edges().collect();
    println!("{} matched edges: {:?}", matching.len(), edges);
    let unmatched: Vec<_> = matching.unmatched().collect();
    println!("unmatched nodes: {:?}", unmatched);
    Ok(())
}
