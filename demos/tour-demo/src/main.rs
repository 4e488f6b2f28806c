//! tour-demo — solve a k-shortest-path-tour problem from the command line.
//!
//! With no arguments, solves the built-in four-node network (tours from
//! node 0 through node 1 to node 3, k = 2).
//!
//! ```bash
//! cargo run -p tour-demo
//! cargo run -p tour-demo -- --problem problem.json --sorted
//! cargo run -p tour-demo -- --edges roads.csv --groups "0;4,5;9" --k 3
//! ```

mod problem;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use kspt_tour::TourSolver;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "tour-demo", version, about = "k shortest path tours by ripple spreading")]
struct Args {
    /// JSON problem file (edges, groups, config).
    #[arg(long, value_name = "FILE", conflicts_with = "edges")]
    problem: Option<PathBuf>,

    /// Edge CSV file with `from,to,weight` rows.  Requires `--groups`.
    #[arg(long, value_name = "FILE", requires = "groups")]
    edges: Option<PathBuf>,

    /// Treat CSV edges as one-way.
    #[arg(long, default_value_t = false)]
    directed: bool,

    /// Waypoint groups: `;` between groups, `,` between nodes.
    #[arg(long, value_name = "GROUPS")]
    groups: Option<String>,

    /// Tours wanted per final-group node (CSV input only).
    #[arg(long, default_value_t = 1)]
    k: usize,

    /// Per-stage tick budget; overrides the problem file.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Print tours shortest first instead of in simulation order.
    #[arg(long, default_value_t = false)]
    sorted: bool,

    /// Print the result as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = parse_level(&args.log_level)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let loaded = match (&args.problem, &args.edges) {
        (Some(path), _) => problem::Problem::from_json(path)?.build()?,
        (None, Some(path)) => {
            let Some(text) = args.groups.as_deref() else {
                bail!("--edges needs --groups");
            };
            problem::from_csv(path, args.directed, problem::parse_groups(text)?, args.k)?
        }
        (None, None) => problem::builtin()?,
    };

    let mut solver = TourSolver::new(&loaded.graph, loaded.config);
    if let Some(limit) = args.max_ticks {
        solver = solver.max_ticks(limit);
    }

    let t0 = Instant::now();
    let set = solver.solve(&loaded.groups)?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "solve done");

    let tours = if args.sorted { set.sorted_by_length() } else { set.tours.clone() };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tours)?);
    } else {
        println!("{:>4}  {:>10}  path", "#", "length");
        for (i, tour) in tours.iter().enumerate() {
            let nodes: Vec<String> = tour.path.iter().map(|n| n.0.to_string()).collect();
            println!("{:>4}  {:>10.3}  {}", i + 1, tour.length, nodes.join(" → "));
        }
    }

    for short in &set.shortfalls {
        for unmet in &short.unmet {
            eprintln!(
                "warning: group {} node {} has only {} of {} paths",
                short.group, unmet.node.0, unmet.found, set.requested_k
            );
        }
    }
    Ok(())
}

fn parse_level(text: &str) -> Result<LevelFilter> {
    text.parse::<LevelFilter>()
        .with_context(|| format!("invalid --log-level {text:?} (expected trace, debug, info, warn, error or off)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_log_levels_parse() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level("WARN").unwrap(), LevelFilter::WARN);
    }

    #[test]
    fn unknown_log_level_is_an_error() {
        let err = parse_level("verbose").unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }
}
