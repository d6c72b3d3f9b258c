use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use cardinality_matching::AugmentingSearch;
use clap::Parser;
use common::io::{read_graph, read_matching, write_matching, GraphFileType};
use petgraph::graph::NodeIndex;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

/// Computes a maximum cardinality matching of a graph.
#[derive(Debug, Parser)]
struct Cli {
    #[arg(long)]
    input_type: GraphFileType,
    #[arg(long)]
    input: PathBuf,
    /// Pairs to start from, in the output format.
    #[arg(long)]
    initial: Option<PathBuf>,
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long)]
    stats: Option<PathBuf>,
    /// Skip the greedy initial matching.
    #[arg(long)]
    no_greedy: bool,
    /// Stop after this many seconds and report the matching found so far.
    #[arg(long, value_parser = parse_time_limit)]
    time_limit: Option<Duration>,
    #[arg(long)]
    log_level: Option<Level>,
}

#[derive(Default)]
struct Stats {
    n: usize,
    m: usize,
    size: usize,
    phases: usize,
    time: Option<Duration>,
}

fn write_stats(stats: &Option<PathBuf>, input: &Path, s: &Stats, status: &str) -> Result<(), Box<dyn Error>> {
    let Some(stats) = stats else { return Ok(()); };
    let mut out = BufWriter::new(File::create(stats)?);
    let input = input.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    let time = s.time.map(|t| t.as_secs_f64()).unwrap_or(f64::NAN);
    writeln!(
        out,
        "{{\"input\": \"{input}\", \"n\": {}, \"m\": {}, \"size\": {}, \"phases\": {}, \"time\": {time}, \"status\": \"{status}\"}}",
        s.n, s.m, s.size, s.phases
    )?;
    Ok(())
}

/// Parses a non-negative, finite number of seconds.
fn parse_time_limit(arg: &str) -> Result<Duration, String> {
    let secs: f64 = arg.parse().map_err(|err| format!("{err}"))?;
    Duration::try_from_secs_f64(secs).map_err(|_| format!("expected a non-negative number of seconds, got {arg}"))
}

fn initial_pairs(path: &Option<PathBuf>) -> Result<Vec<(NodeIndex, NodeIndex)>, Box<dyn Error>> {
    let Some(path) = path else { return Ok(vec![]); };
    let pairs = read_matching(path)?;
    Ok(pairs.into_iter().map(|(u, v)| (NodeIndex::new(u), NodeIndex::new(v))).collect())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(level) = cli.log_level {
        let subscriber = FmtSubscriber::builder().with_max_level(level).with_span_events(FmtSpan::CLOSE).finish();
        subscriber.init();
    };

    let mut stats = Stats::default();
    write_stats(&cli.stats, &cli.input, &stats, "unfinished")?;

    let graph = read_graph(&cli.input, cli.input_type)?;
    stats.n = graph.node_count();
    stats.m = graph.edge_count();
    let initial = initial_pairs(&cli.initial)?;

    let deadline = cli.time_limit.and_then(|limit| Instant::now().checked_add(limit));
    let start = Instant::now();
    let mut search = AugmentingSearch::with_initial(&graph, initial)?;
    if !cli.no_greedy {
        search.greedy();
    }
    let mut status = "finished";
    while search.augment() {
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            status = "timeout";
            break;
        }
    }
    stats.time = Some(start.elapsed());
    stats.size = search.len();
    stats.phases = search.phases();
    info!(matching_size = stats.size, phases = stats.phases, status);

    let matching = search.into_matching();
    if let Some(output) = cli.output {
        let mut out = BufWriter::new(File::create(output)?);
        write_matching(&mut out, matching.edges().map(|(u, v)| (u.index(), v.index())))?;
    } else {
        println!("{}", matching.len());
    }
    write_stats(&cli.stats, &cli.input, &stats, status)?;
    Ok(())
}
