//! CLI entry point for the `route-finder` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use route_finder::config::DEFAULT_DATA_PATH;
use route_finder::network::Graph;
use route_finder::planner::{Planner, SearchConfig, SearchMode, SearchRequest};
use route_finder::web::RoutesResponse;

#[derive(Parser)]
#[command(
    name = "route-finder",
    about = "Find routes between two stations on a transit network"
)]
struct Cli {
    /// Start station
    #[arg(long)]
    from: String,

    /// Destination station
    #[arg(long)]
    to: String,

    /// Search mode: "shortest" (all minimum-hop routes) or "bounded"
    #[arg(long, default_value = "shortest")]
    mode: SearchMode,

    /// Maximum hops (bounded mode only; shortest mode has no depth limit)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Maximum number of routes
    #[arg(long)]
    max_routes: Option<usize>,

    /// Network data file
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    /// The option given that the selected mode does not use, if any.
    fn ignored_option(&self) -> Option<&'static str> {
        (self.mode == SearchMode::Shortest && self.max_depth.is_some()).then_some("--max-depth")
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(option) = cli.ignored_option() {
        warn!("{option} only applies to --mode bounded and is ignored");
    }

    let graph = match Graph::load(&cli.data) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to load graph: {e}");
            process::exit(1);
        }
    };

    let mut request = SearchRequest::new(&cli.from, &cli.to, cli.mode);
    if let Some(max_depth) = cli.max_depth {
        request = request.with_max_depth(max_depth);
    }
    if let Some(max_routes) = cli.max_routes {
        request = request.with_max_routes(max_routes);
    }

    let config = SearchConfig::default();
    let result = match Planner::new(&graph, &config).search(&request) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Route finding failed: {e}");
            process::exit(1);
        }
    };

    if cli.json {
        let response = RoutesResponse::new(cli.from, cli.to, result);
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to encode results: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("Found {} route(s):", result.routes.len());
        for (i, route) in result.routes.iter().enumerate() {
            println!("Route {}: {}", i + 1, route);
        }
    }
}
