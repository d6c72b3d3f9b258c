use cardinality_matching::AugmentingSearch;
use petgraph::graph::UnGraph;
use std::error::Error;
use std::ffi::OsStr;
use std::os::unix::fs::MetadataExt;
use std::time::{Duration, Instant};
use std::{env, fs};

struct Run {
    time: Duration,
    size: usize,
    greedy: usize,
    phases: usize,
}

fn run(graph: &UnGraph<(), ()>, greedy: bool) -> Result<Run, Box<dyn Error>> {
    let start = Instant::now();
    let mut search = AugmentingSearch::new(graph)?;
    let greedy = if greedy { search.greedy() } else { 0 };
    while search.augment() {}
    let time = start.elapsed();
    Ok(Run { time, size: search.len(), greedy, phases: search.phases() })
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<_> = env::args().collect();
    let dir = args.get(1).ok_or("usage: evaluation [dir]")?;

    let mut paths: Vec<_> = fs::read_dir(dir)?.map(|p| p.map(|p| p.path())).collect::<Result<_, _>>()?;
    paths.retain(|p| p.is_file());
    paths.sort_by_cached_key(|p| p.metadata().map(|m| m.size()).unwrap_or(u64::MAX));

    for (i, path) in paths.iter().enumerate() {
        let start = Instant::now();
        let graph = common::io::read_metis(path)?;
        let t_read = start.elapsed();

        let with_greedy = run(&graph, true)?;
        let without_greedy = run(&graph, false)?;
        assert_eq!(with_greedy.size, without_greedy.size, "{}", path.display());

        let fastest_time = with_greedy.time.min(without_greedy.time).as_nanos().max(1) as f64;
        let name = path.file_name().and_then(OsStr::to_str).unwrap_or("?");

        println!("{i:4} {name:<30.30}  n {:8}  m {:9}  size {:8}  read {:9} μs  greedy {:9} μs {:6.2} [{:8} + {:6} phases]  plain {:9} μs {:6.2} [{:6} phases]",
                 graph.node_count(), graph.edge_count(), with_greedy.size,
                 t_read.as_micros(),
                 with_greedy.time.as_micros(), (with_greedy.time.as_nanos() as f64 / fastest_time),
                 with_greedy.greedy, with_greedy.phases,
                 without_greedy.time.as_micros(), (without_greedy.time.as_nanos() as f64 / fastest_time),
                 without_greedy.phases,
        );
    }
    Ok(())
}
