use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use road_pathfinding::{Algorithm, Point, RoadNetwork};
use std::path::PathBuf;
use std::time::Instant;

mod config;
mod summary;

use config::BenchConfig;
use summary::{Sample, Summary};

/// Compares the search algorithms on random Routes through a Road Network
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// file with one Road per line: `<roadType> <srcX> <srcY> <dstX> <dstY>`
    #[arg(default_value = "test.txt")]
    file: PathBuf,

    /// number of random start and goal pairs
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// seed for picking the pairs
    #[arg(short, long)]
    seed: Option<u64>,

    /// also measure IDA*
    #[arg(long)]
    ida_star: bool,

    /// measure the pairs in parallel
    #[arg(short, long)]
    parallel: bool,

    /// start from the quick preset instead of the defaults
    #[arg(short, long)]
    quick: bool,
}

impl Args {
    fn config(&self) -> BenchConfig {
        let base = if self.quick {
            BenchConfig::QUICK
        } else {
            BenchConfig::default()
        };
        BenchConfig {
            iterations: self.iterations.unwrap_or(base.iterations),
            seed: self.seed.or(base.seed),
            ida_star: self.ida_star || base.ida_star,
            parallel: self.parallel || base.parallel,
        }
    }
}

fn main() -> road_pathfinding::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();

    let start_time = Instant::now();
    let network = RoadNetwork::from_file(&args.file)?;
    info!(
        "loaded {} roads from {} in {:?}",
        network.roads().len(),
        args.file.display(),
        start_time.elapsed()
    );

    if network.roads().is_empty() {
        warn!("{} contains no roads", args.file.display());
        return Ok(());
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("{:?}, seed = {}", config, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let roads = network.roads();
    let pairs: Vec<(Point, Point)> = (0..config.iterations)
        .map(|_| {
            let start = roads[rng.gen_range(0..roads.len())].start();
            let goal = roads[rng.gen_range(0..roads.len())].start();
            (start, goal)
        })
        .collect();

    let samples: Vec<Sample> = if config.parallel {
        pairs
            .par_iter()
            .filter_map(|&(start, goal)| measure(&network, start, goal, config.ida_star))
            .collect()
    } else {
        pairs
            .iter()
            .filter_map(|&(start, goal)| measure(&network, start, goal, config.ida_star))
            .collect()
    };

    match Summary::new(&samples) {
        Some(summary) => println!("{}", summary),
        None => warn!("none of the {} pairs has a route", pairs.len()),
    }

    Ok(())
}

/// Runs BFS, then A* (and IDA*) from `start` to `goal`.
///
/// Returns `None` if there is no Route. Computing the heuristics is not part of the timings.
fn measure(network: &RoadNetwork, start: Point, goal: Point, ida_star: bool) -> Option<Sample> {
    let heuristics = network.heuristics(goal);

    let timed = |algorithm: Algorithm| {
        let start_time = Instant::now();
        let path = network
            .find_path_with(&heuristics, start, goal, algorithm)
            .ok()??;
        Some((start_time.elapsed().as_micros(), path.expanded()))
    };

    let (bfs_micros, bfs_expanded) = timed(Algorithm::Bfs)?;
    let (a_star_micros, a_star_expanded) = timed(Algorithm::AStar)?;
    let ida_star = if ida_star {
        timed(Algorithm::IdaStar)
    } else {
        None
    };

    Some(Sample {
        bfs_micros,
        a_star_micros,
        bfs_expanded,
        a_star_expanded,
        ida_star,
    })
}
