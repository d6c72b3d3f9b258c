use petgraph::graph::{NodeIndex, UnGraph};
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Pace2023Error {
    #[error("not pace2023 format")]
    InvalidFormat,
    #[error("missing header")]
    MissingHeader,
    #[error("invalid header (expected 'p (problem) (n) (m)')")]
    InvalidHeader,
    #[error("node {index} is out of range 1..={n}")]
    IndexOutOfRange { index: u32, n: usize },
    #[error("could not read file")]
    IoError(#[from] io::Error),
}

impl From<ParseIntError> for Pace2023Error {
    fn from(_value: ParseIntError) -> Self {
        Pace2023Error::InvalidFormat
    }
}

/// Reads a graph in the format of the PACE 2023 challenge.
///
/// The header `p (problem) (n) (m)` is followed by one 1-based edge `u v` per
/// line. Comment lines start with `c`. The problem descriptor (`tww` in the
/// challenge) is not checked.
pub fn read_pace2023<P>(path: P) -> Result<UnGraph<(), ()>, Pace2023Error>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let mut lines = io::BufReader::new(file).lines().filter(|line| !matches!(line, Ok(l) if l.starts_with('c')));
    let first_line = lines.next().ok_or(Pace2023Error::MissingHeader)??;
    let mut iter = first_line.split_ascii_whitespace();

    if iter.next() != Some("p") || iter.next().is_none() {
        return Err(Pace2023Error::InvalidHeader);
    }
    let n: usize = iter.next().ok_or(Pace2023Error::InvalidHeader)?.parse()?;
    let m: usize = iter.next().ok_or(Pace2023Error::InvalidHeader)?.parse()?;

    let mut graph = UnGraph::with_capacity(n, m);
    for _ in 0..n {
        graph.add_node(());
    }

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut iter = line.split_ascii_whitespace();
        let mut next_node = || -> Result<NodeIndex, Pace2023Error> {
            let index: u32 = iter.next().ok_or(Pace2023Error::InvalidFormat)?.parse()?;
            if index == 0 || index as usize > n {
                return Err(Pace2023Error::IndexOutOfRange { index, n });
            }
            Ok(NodeIndex::new(index as usize - 1))
        };
        let u = next_node()?;
        let v = next_node()?;
        graph.add_edge(u, v, ());
    }
    Ok(graph)
}
