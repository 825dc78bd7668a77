use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sssp_path::generate::RandomGraph;
use sssp_path::{parse_problem, EngineConfig, Graph, PathOverlay, QueryResult};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths on weighted directed graphs", long_about = None)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read `n m`, m edges `from to cost` and a `source target` pair, then print the shortest path.
    Solve {
        /// Problem file; stdin when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the path overlay as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Run the search to exhaustion instead of stopping at the target.
        #[arg(long)]
        full_run: bool,
    },
    /// Time random queries on seeded random graphs and write a JSON report.
    Bench {
        #[arg(long, value_delimiter = ',', default_value = "1000,10000")]
        sizes: Vec<usize>,

        #[arg(long, default_value_t = 4.0)]
        degree: f32,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 100)]
        max_cost: u64,

        #[arg(long, default_value_t = 16)]
        queries: usize,

        /// Report path; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("SSSP_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "sssp_path=debug,info" } else { "sssp_path=info,warn" })
    });

    let format = env::var("SSSP_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());
    let registry = tracing_subscriber::registry().with(filter);
    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false).with_writer(io::stderr)).init()
        }
        _ => registry.with(fmt::layer().compact().with_writer(io::stderr)).init(),
    }
}

fn run_solve(input: Option<PathBuf>, json: bool, full_run: bool) -> anyhow::Result<()> {
    let text = match &input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };
    let problem = parse_problem::<u64>(&text).context("parsing problem")?;
    let graph = &problem.graph;
    debug!(nodes = graph.node_count(), edges = graph.edge_count(), "problem loaded");

    let mut config = EngineConfig::from_env();
    if full_run {
        config.early_exit = false;
    }
    let result = graph.query_with(problem.source, problem.target, &config)?;

    write_solution(&mut io::stdout().lock(), graph, &result, json)
}

fn write_solution<W: Write>(
    out: &mut W,
    graph: &Graph<u64>,
    result: &QueryResult<u64>,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", PathOverlay::new(graph, result).to_json()?)?;
    } else if let Some(d) = result.distance.finite() {
        let hops: Vec<String> = result.path.nodes().iter().map(ToString::to_string).collect();
        writeln!(out, "distance {d}")?;
        writeln!(out, "path {}", hops.join(" -> "))?;
    } else {
        writeln!(out, "no path from {} to {}", result.source, result.target)?;
    }
    out.flush().context("writing stdout")
}

fn run_bench(
    sizes: &[usize],
    degree: f32,
    seed: u64,
    max_cost: u64,
    queries: usize,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = EngineConfig::from_env();
    let mut rows = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let graph = RandomGraph { nodes: n, avg_degree: degree, max_cost, seed }
            .build()
            .with_context(|| format!("generating graph with {n} nodes"))?;
        let mut rng = SmallRng::seed_from_u64(seed ^ n as u64);
        let (mut total_ms, mut reachable) = (0.0f64, 0usize);
        let (mut relaxations, mut pushes) = (0u64, 0u64);
        for _ in 0..queries {
            let (s, t) = (rng.gen_range(0..n), rng.gen_range(0..n));
            let start = Instant::now();
            let r = graph.query_with(s, t, &config)?;
            total_ms += start.elapsed().as_secs_f64() * 1000.0;
            reachable += usize::from(r.is_reachable());
            relaxations += r.stats.relaxations;
            pushes += r.stats.heap.pushes;
        }
        info!(n, m = graph.edge_count(), total_ms, "bench size done");
        rows.push(serde_json::json!({
            "n": n,
            "m": graph.edge_count(),
            "avg_degree": degree,
            "queries": queries,
            "total_ms": total_ms,
            "mean_ms": total_ms / queries.max(1) as f64,
            "reachable": reachable,
            "relaxations": relaxations,
            "heap_pushes": pushes,
        }));
    }
    let report = serde_json::to_string_pretty(&serde_json::Value::Array(rows))?;
    match out {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            }
            fs::write(&path, report).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote report");
        }
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{report}")?;
            out.flush().context("writing stdout")?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve { input, json, full_run } => run_solve(input, json, full_run),
        Commands::Bench { sizes, degree, seed, max_cost, queries, out } => {
            run_bench(&sizes, degree, seed, max_cost, queries, out)
        }
    }
}
