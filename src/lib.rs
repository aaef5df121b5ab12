#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find optimal Routes on a planar Road Network.
//!
//! ## Introduction
//! A Road Network is a list of straight [`Road`] segments between integer Points. Each Road is
//! either one-way (only from `start` to `end`) or two-way. The Points where Roads meet form a
//! Graph, and this crate searches that Graph for the Route between two Points.
//!
//! Three search strategies are provided, all selected through [`Algorithm`]:
//! - [`Algorithm::Bfs`] finds the Route with the fewest Roads, ignoring their length.
//! - [`Algorithm::AStar`] finds the shortest Route by total length, guided by the straight-line
//!   distance to the goal.
//! - [`Algorithm::IdaStar`] finds the same Route as A*, but with repeated depth-first searches
//!   under an increasing cost bound instead of an open/closed set.
//!
//! Routes are returned as a [`RoadPath`], which lists the traversed Roads **from the goal back to
//! the start**. Use [`RoadPath::start_to_goal`] if you need them the other way around.
//!
//! ## Examples
//! Building the Graph and searching it:
//! ```
//! use road_pathfinding::prelude::*;
//!
//! let roads = vec![
//!     Road::new(RoadType::TwoWay, (0, 0), (10, 0)),
//!     Road::new(RoadType::TwoWay, (10, 0), (10, 10)),
//! ];
//!
//! let adjacency = build_adjacency(&roads);
//! let heuristics = compute_heuristics(&roads, (10, 10));
//!
//! let path = find_path(
//!     &roads,
//!     &adjacency,
//!     Some(&heuristics), // may be None, in which case it is computed on demand
//!     (0, 0),            // start
//!     (10, 10),          // goal
//!     Algorithm::AStar,
//! )
//! .unwrap();
//!
//! // find_path returns Ok(Some(path)) if the goal is reachable
//! let path = path.unwrap();
//! assert_eq!(path.len(), 2);
//! assert_eq!(path.cost(), 20.0);
//!
//! // the Roads are ordered from the goal back to the start
//! assert_eq!(path[0], roads[1]);
//! assert_eq!(path[1], roads[0]);
//! ```
//!
//! A goal that cannot be reached is not an Error:
//! ```
//! # use road_pathfinding::prelude::*;
//! let roads = vec![Road::new(RoadType::OneWay, (0, 0), (10, 0))];
//! let adjacency = build_adjacency(&roads);
//!
//! let path = find_path(&roads, &adjacency, None, (10, 0), (0, 0), Algorithm::Bfs).unwrap();
//! assert!(path.is_none());
//! ```
//!
//! ### Road Files
//! Road Networks are usually loaded from a text file with one Road per line:
//! ```text
//! <roadType> <srcX> <srcY> <dstX> <dstY>
//! ```
//! where `roadType` is `1` for one-way and `2` for two-way Roads. See [`parse_roads`] and
//! [`RoadNetwork::from_file`].
//!
//! ### RoadNetwork
//! [`RoadNetwork`] bundles the Roads with their Graph, so that it only has to be built once:
//! ```
//! use road_pathfinding::prelude::*;
//!
//! let network: RoadNetwork = "2 0 0 10 0\n2 10 0 10 10\n".parse().unwrap();
//!
//! let bfs = network.find_path((0, 0), (10, 10), Algorithm::Bfs).unwrap();
//! let a_star = network.find_path((0, 0), (10, 10), Algorithm::AStar).unwrap();
//! assert_eq!(bfs.len(), a_star.len());
//! ```
//!
//! ## Features
//! - `parallel` (default): [`RoadNetwork::find_paths`] runs its searches on the rayon thread pool.
//! - `log`: trace the time spent in the individual phases of a search using the `log` crate.

/// A shorthand for Points on the plane
pub type Point = (i32, i32);

/// The Type used to reference a Road by its position in the list of Roads
pub type RoadID = u32;

/// Logs the time since `$timer` was last set and resets it.
///
/// Expands to nothing unless the `log` feature is enabled.
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        #[cfg(feature = "log")]
        #[allow(unused_variables)]
        let $timer = {
            let now = std::time::Instant::now();
            log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
            now
        };
    };
}

macro_rules! debug {
    ($($arg: tt)*) => {
        #[cfg(feature = "log")]
        {
            log::debug!($($arg)*);
        }
    };
}

mod error;
pub use self::error::{Error, Result};

mod road;
pub use self::road::{distance, Road, RoadType};

mod parser;
pub use self::parser::{parse_roads, read_roads};

pub mod graph;
pub use self::graph::{build_adjacency, AdjacencyMap, NetworkPoint};

mod heuristic;
pub use self::heuristic::{compute_heuristics, HeuristicTable};

mod path;
pub use self::path::{reconstruct_path, ParentMap, RoadPath};

mod search;
pub use self::search::{find_path, Algorithm};

mod network;
pub use self::network::{RoadNetwork, DEFAULT_PICK_DISTANCE};

/// The most commonly used Types and Functions
pub mod prelude {
    pub use crate::{
        build_adjacency, compute_heuristics, find_path, Algorithm, Point, Road, RoadNetwork,
        RoadPath, RoadType,
    };
}
