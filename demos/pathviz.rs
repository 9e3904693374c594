//! Command-line pathfinding demo.
//!
//! Builds a grid from flags, optionally carves a maze or scatters random
//! obstacles, runs one search strategy over every leg and prints the traced
//! grid as text.
//!
//! Run: cargo run --bin pathviz -- --maze --strategy astar --stop 9,11

use clap::Parser;
use flexi_logger::Logger;
use log::info;

use pathviz_core::{Layout, Point, SessionConfig};
use pathviz_maze::MazeGen;
use pathviz_paths::{Overlay, SearchError, Strategy, Tag, route};

#[derive(Parser, Debug)]
#[command(name = "pathviz", version, about = "Watch grid search strategies find a route")]
struct Args {
    /// Grid side length.
    #[arg(short = 'n', long, default_value_t = 21)]
    size: i32,

    /// Source node as `row,col` (default: top-left inside the border).
    #[arg(long, value_parser = parse_point)]
    source: Option<Point>,

    /// Intermediate stop as `row,col`; repeat for several, visited in order.
    #[arg(long = "stop", value_parser = parse_point)]
    stops: Vec<Point>,

    /// End node as `row,col` (default: bottom-right inside the border).
    #[arg(long, value_parser = parse_point)]
    end: Option<Point>,

    /// bfs, bidir, dfs, greedy, astar, or the menu index 1-5.
    #[arg(short, long, default_value = "astar")]
    strategy: Strategy,

    /// Carve a recursive-division maze before searching.
    #[arg(long, conflicts_with = "scatter")]
    maze: bool,

    /// Scatter random obstacles instead; density defaults to 0.25.
    #[arg(long, num_args = 0..=1, default_missing_value = "0.25")]
    scatter: Option<f64>,

    /// Seed for maze generation and obstacle scattering.
    #[arg(long)]
    seed: Option<u64>,

    /// Log level spec, e.g. `debug` or `pathviz_paths=trace`.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// List the available strategies and exit.
    #[arg(long)]
    list: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row in {s:?}: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column in {s:?}: {e}"))?;
    Ok(Point::new(row, col))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _logger = Logger::try_with_env_or_str(&args.log_level)?
        .log_to_stderr()
        .start()?;

    if args.list {
        for (i, s) in Strategy::ALL.iter().enumerate() {
            println!("{}  {:<7} {}", i + 1, s.name(), s.label());
        }
        return Ok(());
    }

    let mut config = SessionConfig::default()
        .with_size(args.size)
        .with_stops(args.stops.len());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    // Pin the seed so it can be logged and replayed.
    let seed = config.seed_or_random();
    config = config.with_seed(seed);

    let inset = if args.size > 2 { 1 } else { 0 };
    let source = args.source.unwrap_or(Point::new(inset, inset));
    let end = args
        .end
        .unwrap_or(Point::new(args.size - 1 - inset, args.size - 1 - inset));

    let mut layout = Layout::new(&config)?;
    layout.place_all(source, &args.stops, end)?;

    if args.maze {
        let walls = MazeGen::new(config.rng()).generate(layout.graph_mut(), &mut ())?;
        info!("maze with seed {seed}: {walls} walls");
    } else if let Some(density) = args.scatter {
        let walls = MazeGen::new(config.rng()).scatter(layout.graph_mut(), density, &mut ())?;
        info!("scatter with seed {seed}: {walls} walls");
    }

    let waypoints = layout.waypoints().ok_or("layout is missing terminals")?;
    let graph = layout.graph();
    let mut overlay = Overlay::new(graph);

    let outcome = route(graph, args.strategy, &waypoints, &mut overlay);
    if let Ok(r) = &outcome {
        overlay.mark_path(&r.combined());
    }
    print!("{}", overlay.render(graph));

    let visited = overlay.count(|t| matches!(t, Tag::Visited { .. }));
    match outcome {
        Ok(r) => {
            println!(
                "{}: {} moves over {} leg(s), {} nodes visited",
                args.strategy,
                r.edges(),
                r.legs().len(),
                visited
            );
            Ok(())
        }
        Err(e) if e.search_error() == Some(SearchError::NoPathFound) => {
            println!("No path found! ({e})");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
