use petgraph::graph::{NodeIndex, UnGraph};
use std::cmp::Ordering;
use std::fs::File;
use std::io::BufRead;
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadMetisError {
    #[error("missing header")]
    MissingHeader,
    #[error("invalid header (expected '(n) (m)' or '(n) (m) 0', got {0})")]
    WrongHeader(String),
    #[error("wrong n given in header (expected {expected}, got {actual})")]
    WrongN { expected: usize, actual: usize },
    #[error("wrong m given in header (expected {expected}, got {actual})")]
    WrongM { expected: usize, actual: usize },
    #[error("found zero index (indices must be at least 1)")]
    ZeroIndex,
    #[error("index {index} exceeds number of nodes {n}")]
    IndexOutOfRange { index: usize, n: usize },
    #[error("number of reverse edges not matching (expected {expected}, got {actual})")]
    NumReverseEdgesNotMatching { expected: usize, actual: usize },
    #[error("found self loop at node {0}")]
    SelfLoop(usize),
    #[error("parse error")]
    ParseInt(#[from] ParseIntError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Implements a subset of the metis graph format. See [metis].
///
/// The format supports undirected, unweighted, loop-less graphs and specifies
/// the number of nodes and the number edges in its header. The vertices indices
/// start with 1. Every edge is listed in the adjacency lines of both of its
/// endpoints, which makes the format symmetric by construction.
///
/// The restrictions are
/// + only allows '(n) (m)' or '(n) (m) 0' as header
/// + does not support vertex and edge weights
///
/// [metis]: https://people.sc.fsu.edu/~jburkardt/data/metis_graph/metis_graph.html
pub fn read_metis<P>(path: P) -> Result<UnGraph<(), ()>, ReadMetisError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let mut lines = std::io::BufReader::new(file).lines().filter(|line| !matches!(line, Ok(l) if l.starts_with('%')));

    let first_line = lines.next().ok_or(ReadMetisError::MissingHeader)??;

    let (n, m) = {
        let err = || ReadMetisError::WrongHeader(first_line.clone());
        let mut iter = first_line.split_ascii_whitespace();
        let n: usize = iter.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let m: usize = iter.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        match (iter.next(), iter.next()) {
            (None, None) | (Some("0"), None) => {}
            _ => return Err(err()),
        }
        if n >= u32::MAX as usize || m >= u32::MAX as usize {
            return Err(err());
        }
        (n, m)
    };

    let mut graph = UnGraph::with_capacity(n, m);
    for _ in 0..n {
        graph.add_node(());
    }

    let mut m_reverse = 0;
    let mut u = 0;
    for line in lines {
        let line = line?;
        if u == n && line.trim().is_empty() {
            continue;
        }
        u += 1;
        for v in line.split_ascii_whitespace() {
            let v: usize = v.parse()?;
            if v == 0 {
                return Err(ReadMetisError::ZeroIndex);
            }
            if v > n {
                return Err(ReadMetisError::IndexOutOfRange { index: v, n });
            }
            match u.cmp(&v) {
                Ordering::Less => {
                    graph.add_edge(NodeIndex::new(u - 1), NodeIndex::new(v - 1), ());
                }
                Ordering::Equal => return Err(ReadMetisError::SelfLoop(u)),
                Ordering::Greater => {
                    m_reverse += 1;
                }
            }
        }
    }

    if u != n {
        return Err(ReadMetisError::WrongN { actual: u, expected: n });
    }
    if graph.edge_count() != m {
        return Err(ReadMetisError::WrongM { actual: graph.edge_count(), expected: m });
    }
    if m_reverse != m {
        return Err(ReadMetisError::NumReverseEdgesNotMatching { actual: m_reverse, expected: m });
    }

    Ok(graph)
}
