mod edge_list;
mod matching;
mod metis;
mod pace2023;

use clap::ValueEnum;
use petgraph::graph::UnGraph;
use std::path::Path;

pub use edge_list::{read_edge_list, ReadEdgeListError};
pub use matching::{read_matching, write_matching, ReadMatchingError, WriteMatchingError};
pub use metis::{read_metis, ReadMetisError};
pub use pace2023::{read_pace2023, Pace2023Error};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum GraphFileType {
    Pace2023,
    Metis,
    EdgeList,
}

/// Reads a graph in the given format.
pub fn read_graph<P>(path: P, file_type: GraphFileType) -> Result<UnGraph<(), ()>, Box<dyn std::error::Error>>
where
    P: AsRef<Path>,
{
    Ok(match file_type {
        GraphFileType::Pace2023 => read_pace2023(path)?,
        GraphFileType::Metis => read_metis(path)?,
        GraphFileType::EdgeList => read_edge_list(path)?,
    })
}
