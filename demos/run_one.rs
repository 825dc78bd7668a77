use std::time::Instant;

use sssp_path::generate::RandomGraph;
use sssp_path::EngineConfig;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        eprintln!("usage: run_one <n> <avg_degree> <seed> <mode: early|full> [source target]");
        std::process::exit(1);
    }
    let parse = |i: usize, what: &str| -> Option<f64> {
        let v = args.get(i)?.parse().ok();
        if v.is_none() {
            eprintln!("bad {what}: {}", args[i]);
        }
        v
    };
    let (Some(n), Some(degree), Some(seed)) = (parse(1, "n"), parse(2, "avg_degree"), parse(3, "seed")) else {
        std::process::exit(1);
    };
    let config = match args[4].as_str() {
        "early" => EngineConfig::default(),
        "full" => EngineConfig { early_exit: false, ..EngineConfig::default() },
        other => {
            eprintln!("bad mode {other}");
            std::process::exit(1);
        }
    };
    let n = n as usize;
    let source = parse(5, "source").map_or(0, |v| v as usize);
    let target = parse(6, "target").map_or(n.saturating_sub(1), |v| v as usize);

    let graph = match (RandomGraph { nodes: n, avg_degree: degree as f32, max_cost: 100, seed: seed as u64 }).build() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error {e}");
            std::process::exit(1);
        }
    };
    let start = Instant::now();
    match graph.query_with(source, target, &config) {
        Ok(r) => println!(
            "mode={} n={n} m={} dist={} hops={} relax={} settled={} stale={} heap_max={} ms={:.3}",
            args[4],
            graph.edge_count(),
            r.distance,
            r.path.len().saturating_sub(1),
            r.stats.relaxations,
            r.stats.settled,
            r.stats.stale_skips,
            r.stats.heap.max_size,
            start.elapsed().as_secs_f64() * 1000.0
        ),
        Err(e) => eprintln!("error {e}"),
    }
}
