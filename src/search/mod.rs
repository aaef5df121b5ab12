//! The search algorithms and their common entry point.
//!
//! Every search allocates its own state and only reads the [`AdjacencyMap`] and
//! [`HeuristicTable`], so any number of searches may run in parallel on the same Graph.

use crate::graph::NetworkPoint;
use crate::{
	compute_heuristics, reconstruct_path, AdjacencyMap, Error, HeuristicTable, ParentMap, Point,
	Result, Road, RoadPath,
};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

mod a_star;
mod bfs;
mod ida_star;

/// The search strategy used by [`find_path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// Breadth-First Search: finds the Route with the fewest Roads, regardless of their length.
	Bfs,
	/// A*: finds the shortest Route, expanding Points in order of their cost so far plus the
	/// straight-line distance to the goal.
	AStar,
	/// Iterative-Deepening A*: finds the shortest Route with repeated depth-first searches, each
	/// bounded by the smallest cost estimate that exceeded the previous bound.
	///
	/// Uses very little memory, but may revisit the same Points many times. Only suitable for
	/// small Road Networks.
	IdaStar,
}

impl Algorithm {
	/// All available Algorithms
	pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::AStar, Algorithm::IdaStar];

	/// The short name of the Algorithm, as accepted by [`FromStr`].
	pub fn name(self) -> &'static str {
		match self {
			Algorithm::Bfs => "bfs",
			Algorithm::AStar => "astar",
			Algorithm::IdaStar => "idastar",
		}
	}

	/// `true` if the Algorithm is guided by a [`HeuristicTable`]
	pub fn uses_heuristics(self) -> bool {
		!matches!(self, Algorithm::Bfs)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		fmt.write_str(self.name())
	}
}

impl FromStr for Algorithm {
	type Err = Error;
	fn from_str(name: &str) -> Result<Algorithm> {
		match name.to_ascii_lowercase().as_str() {
			"bfs" => Ok(Algorithm::Bfs),
			"astar" | "a*" | "a_star" => Ok(Algorithm::AStar),
			"idastar" | "ida*" | "ida_star" => Ok(Algorithm::IdaStar),
			_ => Err(Error::UnknownAlgorithm(name.to_owned())),
		}
	}
}

/// What a search leaves behind for [`reconstruct_path`]
#[derive(Debug, Default)]
pub(crate) struct SearchTree {
	pub parents: ParentMap,
	pub expanded: usize,
	/// The cost of the Route to the goal, if it was reached.
	///
	/// Measured in Roads for BFS and in length for all other searches.
	pub goal_cost: Option<f64>,
}

/// Finds the best Route from `start` to `goal`.
///
/// ## Arguments
/// - `roads` - the Roads of the Network, used to look up the Roads along the Route
/// - `adjacency` - the Graph built from `roads` with [`build_adjacency`](crate::build_adjacency)
/// - `heuristics` - the straight-line distances to `goal`, as computed by
///     [`compute_heuristics`]. Only used by [`Algorithm::AStar`] and [`Algorithm::IdaStar`].
///     If `None`, they are computed when needed.
/// - `start` - the Point where the Route begins
/// - `goal` - the Point where the Route ends
/// - `algorithm` - which search strategy to use
///
/// ## Returns
/// `Ok(Some(path))` with the Roads of the Route **in goal-to-start order**, or `Ok(None)` if
/// `goal` cannot be reached from `start`. Since no Road has to be traveled, `start == goal` is
/// also reported as `Ok(None)`.
///
/// ## Errors
/// [`Error::HeuristicGoalMismatch`] if `heuristics` were computed for a different goal.
///
/// ## Examples
/// BFS minimizes the number of Roads, A* their total length:
/// ```
/// # use road_pathfinding::prelude::*;
/// let roads = vec![
///     // a short detour with three Roads
///     Road::new(RoadType::TwoWay, (0, 0), (3, 1)),
///     Road::new(RoadType::TwoWay, (3, 1), (6, 1)),
///     Road::new(RoadType::TwoWay, (6, 1), (10, 0)),
///     // a long detour with two Roads
///     Road::new(RoadType::TwoWay, (0, 0), (0, 30)),
///     Road::new(RoadType::TwoWay, (0, 30), (10, 0)),
/// ];
/// let adjacency = build_adjacency(&roads);
///
/// let bfs = find_path(&roads, &adjacency, None, (0, 0), (10, 0), Algorithm::Bfs)
///     .unwrap()
///     .unwrap();
/// assert_eq!(bfs.len(), 2);
///
/// let a_star = find_path(&roads, &adjacency, None, (0, 0), (10, 0), Algorithm::AStar)
///     .unwrap()
///     .unwrap();
/// assert_eq!(a_star.len(), 3);
/// assert!(a_star.cost() < bfs.cost());
/// ```
pub fn find_path(
	roads: &[Road],
	adjacency: &AdjacencyMap,
	heuristics: Option<&HeuristicTable>,
	start: Point,
	goal: Point,
	algorithm: Algorithm,
) -> Result<Option<RoadPath>> {
	if let Some(table) = heuristics {
		if table.goal() != goal {
			return Err(Error::HeuristicGoalMismatch {
				table: table.goal(),
				goal,
			});
		}
	}
	Ok(search(roads, adjacency, heuristics, start, goal, algorithm))
}

/// [`find_path`] for heuristics that are known to belong to `goal`
pub(crate) fn search(
	roads: &[Road],
	adjacency: &AdjacencyMap,
	heuristics: Option<&HeuristicTable>,
	start: Point,
	goal: Point,
	algorithm: Algorithm,
) -> Option<RoadPath> {
	#[cfg(feature = "log")]
	let timer = std::time::Instant::now();

	let tree = match algorithm {
		Algorithm::Bfs => bfs::bfs_search(adjacency, start, goal),
		Algorithm::AStar | Algorithm::IdaStar => {
			let computed;
			let heuristics = match heuristics {
				Some(table) => table,
				None => {
					computed = compute_heuristics(roads, goal);
					&computed
				}
			};
			if algorithm == Algorithm::AStar {
				a_star::a_star_search(adjacency, heuristics, start, goal)
			} else {
				ida_star::ida_star_search(adjacency, heuristics, start, goal)
			}
		}
	};

	re_trace!("search", timer);
	debug!(
		"{} from {:?} to {:?}: expanded {} points, goal cost {:?}",
		algorithm,
		start,
		goal,
		tree.expanded,
		tree.goal_cost
	);

	if tree.goal_cost.is_none() {
		return None;
	}

	let path = reconstruct_path(roads, &tree.parents, goal)?;

	re_trace!("reconstruct path", timer);

	if path.is_empty() {
		None
	} else {
		Some(RoadPath::new(path, tree.expanded))
	}
}

/// An entry in the A* frontier.
///
/// Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest `estimate`
/// first, and among equal estimates the one that was pushed first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HeuristicElement {
	pub point: NetworkPoint,
	pub cost: f64,
	pub estimate: f64,
	pub sequence: usize,
}

impl PartialEq for HeuristicElement {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for HeuristicElement {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.estimate
			.total_cmp(&self.estimate)
			.then_with(|| rhs.sequence.cmp(&self.sequence))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{build_adjacency, RoadType};
	use std::collections::BinaryHeap;

	#[test]
	fn algorithm_names() {
		for algorithm in Algorithm::ALL {
			assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
		}
		assert_eq!("A*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
		assert_eq!("IDA*".parse::<Algorithm>().unwrap(), Algorithm::IdaStar);
		assert!(matches!(
			"dijkstra".parse::<Algorithm>(),
			Err(Error::UnknownAlgorithm(_))
		));
	}

	#[test]
	fn heap_order() {
		let point = NetworkPoint::new((0, 0), 0);
		let mut heap = BinaryHeap::new();
		for (sequence, estimate) in [3.0, 1.0, 2.0, 1.0].into_iter().enumerate() {
			heap.push(HeuristicElement {
				point,
				cost: 0.0,
				estimate,
				sequence,
			});
		}
		let order: Vec<usize> = std::iter::from_fn(|| heap.pop())
			.map(|element| element.sequence)
			.collect();
		assert_eq!(order, vec![1, 3, 2, 0]);
	}

	#[test]
	fn rejects_foreign_heuristics() {
		let roads = [Road::new(RoadType::TwoWay, (0, 0), (1, 0))];
		let adjacency = build_adjacency(&roads);
		let heuristics = compute_heuristics(&roads, (0, 0));

		let result = find_path(
			&roads,
			&adjacency,
			Some(&heuristics),
			(0, 0),
			(1, 0),
			Algorithm::AStar,
		);
		assert!(matches!(
			result,
			Err(Error::HeuristicGoalMismatch {
				table: (0, 0),
				goal: (1, 0)
			})
		));
	}

	#[test]
	fn start_is_goal() {
		let roads = [Road::new(RoadType::TwoWay, (0, 0), (1, 0))];
		let adjacency = build_adjacency(&roads);

		for algorithm in Algorithm::ALL {
			let path = find_path(&roads, &adjacency, None, (0, 0), (0, 0), algorithm).unwrap();
			assert_eq!(path, None, "{algorithm}");
		}
	}

	#[test]
	fn unknown_points() {
		let roads = [Road::new(RoadType::TwoWay, (0, 0), (1, 0))];
		let adjacency = build_adjacency(&roads);

		for algorithm in Algorithm::ALL {
			let path = find_path(&roads, &adjacency, None, (5, 5), (1, 0), algorithm).unwrap();
			assert_eq!(path, None, "{algorithm}");
			let path = find_path(&roads, &adjacency, None, (0, 0), (5, 5), algorithm).unwrap();
			assert_eq!(path, None, "{algorithm}");
		}
	}
}
