use petgraph::graph::UnGraph;
use std::fs::File;
use std::io::BufRead;
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadEdgeListError {
    #[error("invalid line {line} (expected 'u v', got '{content}')")]
    InvalidLine { line: usize, content: String },
    #[error("self loop at node {0}")]
    SelfLoop(u32),
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads a list of edges `u v` with 0-based node indices, one per line.
///
/// Empty lines and lines starting with `#` are skipped. The number of nodes is
/// one more than the largest index.
pub fn read_edge_list<P>(path: P) -> Result<UnGraph<(), ()>, ReadEdgeListError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;

    let mut n = 0;
    let mut edges = vec![];
    for (i, line) in std::io::BufReader::new(file).lines().enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let invalid = || ReadEdgeListError::InvalidLine { line: i + 1, content: line.clone() };
        let mut tokens = content.split_ascii_whitespace();
        let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(invalid());
        };

        let u: u32 = a.parse()?;
        let v: u32 = b.parse()?;
        if u == v {
            return Err(ReadEdgeListError::SelfLoop(u));
        }
        edges.push((u, v));
        n = n.max(u + 1).max(v + 1);
    }

    let mut graph = UnGraph::with_capacity(n as usize, edges.len());
    for _ in 0..n {
        graph.add_node(());
    }
    graph.extend_with_edges(edges);
    Ok(graph)
}
