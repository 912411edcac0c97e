use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use wayfinder::grid::{GridPathProblem, Layout};
use wayfinder::search::{validate, SearchResult, StrategyName};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(version)]
/// Search for a path through a maze layout.
struct Cli {
    #[arg(help = "The maze layout file")]
    layout: PathBuf,
    #[arg(
        value_enum,
        help = "The search strategy to use",
        short = 's',
        long = "strategy",
        id = "STRATEGY",
        default_value_t = StrategyName::BFS
    )]
    strategy: StrategyName,
    #[arg(help = "The output plan file", short = 'o', long = "output", id = "OUTPUT")]
    output: Option<PathBuf>,
    #[arg(
        help = "Print a machine-readable summary to stdout instead of text",
        long = "json"
    )]
    json: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

/// What a run looked like, printed as JSON when `--json` is given.
#[derive(Debug, Serialize)]
struct SearchReport {
    strategy: String,
    solved: bool,
    plan: Vec<String>,
    plan_length: usize,
    plan_cost: Option<f64>,
    expanded_nodes: i64,
    generated_nodes: i64,
    duplicate_states: i64,
    peak_frontier_size: usize,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let layout = match Layout::from_path(&cli.layout) {
        Ok(layout) => layout,
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    };

    solve(cli, layout);
}

fn solve(cli: Cli, layout: Layout) {
    let problem = GridPathProblem::new(&layout);
    let (result, statistics) = cli.strategy.search(&problem);

    match result {
        SearchResult::Solved(plan) => {
            info!("validating plan");
            match validate(&plan, &problem) {
                Ok(()) => info!("plan is valid"),
                Err(error) => {
                    info!("plan is invalid: {}", error);
                    return;
                }
            }
            info!("plan found");
            info!(plan_length = plan.len());

            if cli.json {
                let report = SearchReport {
                    strategy: cli.strategy.to_string(),
                    solved: true,
                    plan: plan.steps().iter().map(ToString::to_string).collect(),
                    plan_length: plan.len(),
                    plan_cost: problem.cost_of_actions(plan.steps()),
                    expanded_nodes: statistics.expanded_nodes(),
                    generated_nodes: statistics.generated_nodes(),
                    duplicate_states: statistics.duplicate_states(),
                    peak_frontier_size: statistics.peak_frontier_size(),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("Failed to serialise report")
                );
            } else {
                println!("Plan found:");
                println!("{}", plan);
                println!("Plan length: {}", plan.len());
            }

            if let Some(path) = cli.output {
                std::fs::write(path, plan.to_string()).expect("Failed to write plan file");
            }
        }
        SearchResult::Exhausted => {
            info!("no plan found");
            if cli.json {
                let report = SearchReport {
                    strategy: cli.strategy.to_string(),
                    solved: false,
                    plan: vec![],
                    plan_length: 0,
                    plan_cost: None,
                    expanded_nodes: statistics.expanded_nodes(),
                    generated_nodes: statistics.generated_nodes(),
                    duplicate_states: statistics.duplicate_states(),
                    peak_frontier_size: statistics.peak_frontier_size(),
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("Failed to serialise report")
                );
            } else {
                println!("No plan found, no goal state is reachable.");
            }
        }
    }
}
