use crate::graph::{NetworkPoint, PointSet};
use crate::search::search;
use crate::{
	build_adjacency, compute_heuristics, distance, find_path, parse_roads, read_roads,
	AdjacencyMap, Algorithm, HeuristicTable, Point, Result, Road, RoadID, RoadPath,
};

use std::path::Path;
use std::str::FromStr;

/// The maximum distance at which [`RoadNetwork::point_near`] is usually asked to snap a
/// position to a Point of the Network.
pub const DEFAULT_PICK_DISTANCE: f64 = 10.0;

/// A Road Network together with its Graph.
///
/// The Network is immutable once built, so it can be shared between threads and searched
/// concurrently.
///
/// ## Examples
/// ```
/// use road_pathfinding::prelude::*;
///
/// let network = RoadNetwork::new(vec![
///     Road::new(RoadType::OneWay, (0, 0), (10, 0)),
///     Road::new(RoadType::OneWay, (10, 0), (10, 10)),
///     Road::new(RoadType::TwoWay, (10, 10), (0, 0)),
/// ]);
///
/// let path = network.find_path((0, 0), (10, 10), Algorithm::AStar).unwrap();
/// assert_eq!(path.len(), 1);
///
/// // the one-way Roads force a detour
/// let path = network.find_path((10, 10), (10, 0), Algorithm::AStar).unwrap();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.cost(), 200f64.sqrt() + 10.0);
/// ```
#[derive(Clone, Debug)]
pub struct RoadNetwork {
	roads: Vec<Road>,
	adjacency: AdjacencyMap,
	points: Vec<NetworkPoint>,
}

impl RoadNetwork {
	/// Builds the Graph for `roads`.
	pub fn new(roads: Vec<Road>) -> RoadNetwork {
		let adjacency = build_adjacency(&roads);

		let mut seen = PointSet::with_capacity(adjacency.len());
		let mut points = Vec::with_capacity(adjacency.len());
		for (id, road) in roads.iter().enumerate() {
			for pos in [road.start(), road.end()] {
				let point = NetworkPoint::new(pos, id as RoadID);
				if seen.insert(point) {
					points.push(point);
				}
			}
		}

		debug!(
			"road network with {} roads, {} points and {} connections",
			roads.len(),
			points.len(),
			adjacency.edge_count()
		);

		RoadNetwork {
			roads,
			adjacency,
			points,
		}
	}

	/// Loads a Road Network from a file. See [`parse_roads`] for the format.
	///
	/// ## Errors
	/// If the file cannot be read or contains an invalid line.
	pub fn from_file(path: impl AsRef<Path>) -> Result<RoadNetwork> {
		read_roads(path).map(RoadNetwork::new)
	}

	/// all Roads, in the order they were provided
	pub fn roads(&self) -> &[Road] {
		&self.roads
	}

	/// The Road with the index `id`, if it exists.
	pub fn road(&self, id: RoadID) -> Option<&Road> {
		self.roads.get(id as usize)
	}

	/// the Graph of the Network
	pub fn adjacency(&self) -> &AdjacencyMap {
		&self.adjacency
	}

	/// All distinct endpoints of the Roads, in the order in which they first appear.
	pub fn points(&self) -> &[NetworkPoint] {
		&self.points
	}

	/// Computes the [`HeuristicTable`] for `goal`.
	///
	/// Useful to search for the same goal from several starts with [`find_path_with`](Self::find_path_with).
	pub fn heuristics(&self, goal: Point) -> HeuristicTable {
		compute_heuristics(&self.roads, goal)
	}

	/// Finds the best Route from `start` to `goal`.
	///
	/// Returns `None` if `goal` cannot be reached, or if `start == goal`. See
	/// [`find_path`](crate::find_path) for the details.
	pub fn find_path(&self, start: Point, goal: Point, algorithm: Algorithm) -> Option<RoadPath> {
		search(&self.roads, &self.adjacency, None, start, goal, algorithm)
	}

	/// Same as [`find_path`](Self::find_path), but with precomputed heuristics.
	///
	/// ## Errors
	/// [`Error::HeuristicGoalMismatch`](crate::Error::HeuristicGoalMismatch) if `heuristics`
	/// were not computed for `goal`.
	pub fn find_path_with(
		&self,
		heuristics: &HeuristicTable,
		start: Point,
		goal: Point,
		algorithm: Algorithm,
	) -> Result<Option<RoadPath>> {
		find_path(
			&self.roads,
			&self.adjacency,
			Some(heuristics),
			start,
			goal,
			algorithm,
		)
	}

	/// Runs one search per `(start, goal)` pair.
	///
	/// The results are in the same order as `queries`. With the `parallel` feature, the
	/// searches run on the rayon thread pool.
	///
	/// ## Examples
	/// ```
	/// # use road_pathfinding::prelude::*;
	/// let network: RoadNetwork = "2 0 0 5 0\n1 5 0 5 5\n".parse().unwrap();
	///
	/// let paths = network.find_paths(&[((0, 0), (5, 5)), ((5, 5), (0, 0))], Algorithm::Bfs);
	/// assert_eq!(paths[0].as_ref().map(|path| path.len()), Some(2));
	/// assert!(paths[1].is_none());
	/// ```
	pub fn find_paths(&self, queries: &[(Point, Point)], algorithm: Algorithm) -> Vec<Option<RoadPath>> {
		#[cfg(feature = "parallel")]
		{
			use rayon::prelude::*;
			queries
				.par_iter()
				.map(|&(start, goal)| self.find_path(start, goal, algorithm))
				.collect()
		}
		#[cfg(not(feature = "parallel"))]
		{
			queries
				.iter()
				.map(|&(start, goal)| self.find_path(start, goal, algorithm))
				.collect()
		}
	}

	/// Finds the endpoint of a Road that is closest to `pos`.
	///
	/// Only endpoints within `max_distance` are considered. If several endpoints are equally
	/// close, the one that appears first wins, checking the `start` of each Road before its `end`.
	///
	/// ## Examples
	/// ```
	/// # use road_pathfinding::{RoadNetwork, DEFAULT_PICK_DISTANCE};
	/// let network: RoadNetwork = "2 0 0 100 0\n".parse().unwrap();
	///
	/// let point = network.point_near((3, 4), DEFAULT_PICK_DISTANCE).unwrap();
	/// assert_eq!(point.pos(), (0, 0));
	///
	/// assert!(network.point_near((50, 0), DEFAULT_PICK_DISTANCE).is_none());
	/// ```
	pub fn point_near(&self, pos: Point, max_distance: f64) -> Option<NetworkPoint> {
		let mut best: Option<(NetworkPoint, f64)> = None;

		for (id, road) in self.roads.iter().enumerate() {
			for end in [road.start(), road.end()] {
				let dist = distance(pos, end);
				if dist > max_distance {
					continue;
				}
				if best.map_or(true, |(_, best_dist)| dist < best_dist) {
					best = Some((NetworkPoint::new(end, id as RoadID), dist));
				}
			}
		}

		best.map(|(point, _)| point)
	}
}

impl FromStr for RoadNetwork {
	type Err = crate::Error;
	fn from_str(text: &str) -> Result<RoadNetwork> {
		parse_roads(text.as_bytes()).map(RoadNetwork::new)
	}
}

impl FromIterator<Road> for RoadNetwork {
	fn from_iter<I: IntoIterator<Item = Road>>(roads: I) -> RoadNetwork {
		RoadNetwork::new(roads.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::RoadType;

	fn square() -> RoadNetwork {
		[
			Road::new(RoadType::TwoWay, (0, 0), (10, 0)),
			Road::new(RoadType::TwoWay, (10, 0), (10, 10)),
			Road::new(RoadType::TwoWay, (10, 10), (0, 10)),
			Road::new(RoadType::OneWay, (0, 10), (0, 0)),
		]
		.into_iter()
		.collect()
	}

	#[test]
	fn points_in_order_of_appearance() {
		let network = square();
		let points: Vec<Point> = network.points().iter().map(|p| p.pos()).collect();
		assert_eq!(points, vec![(0, 0), (10, 0), (10, 10), (0, 10)]);
		assert_eq!(network.points()[3].road(), 2);
	}

	#[test]
	fn road_lookup() {
		let network = square();
		assert_eq!(network.road(1), Some(&network.roads()[1]));
		assert_eq!(network.road(4), None);
	}

	#[test]
	fn point_near() {
		let network = square();

		let point = network.point_near((1, 1), DEFAULT_PICK_DISTANCE).unwrap();
		assert_eq!(point.pos(), (0, 0));
		assert_eq!(point.road(), 0);

		// (5, 0) is equally far from (0, 0) and (10, 0)
		let point = network.point_near((5, 0), DEFAULT_PICK_DISTANCE).unwrap();
		assert_eq!(point.pos(), (0, 0));

		// the boundary is inclusive
		let point = network.point_near((0, 20), 10.0).unwrap();
		assert_eq!(point.pos(), (0, 10));
		assert_eq!(point.road(), 2);

		assert_eq!(network.point_near((5, 5), 5.0), None);
		assert_eq!(RoadNetwork::new(vec![]).point_near((0, 0), 100.0), None);
	}

	#[test]
	fn precomputed_heuristics() {
		let network = square();
		let heuristics = network.heuristics((0, 10));

		let path = network
			.find_path_with(&heuristics, (0, 0), (0, 10), Algorithm::AStar)
			.unwrap()
			.unwrap();
		// the direct Road only leads the other way
		assert_eq!(path.len(), 3);
		assert_eq!(path.cost(), 30.0);

		assert!(network
			.find_path_with(&heuristics, (0, 0), (10, 10), Algorithm::AStar)
			.is_err());
	}

	#[test]
	fn batch_keeps_query_order() {
		let network = square();
		let queries = [
			((0, 0), (10, 10)),
			((0, 10), (0, 0)),
			((0, 0), (0, 0)),
			((0, 0), (7, 7)),
		];

		for algorithm in Algorithm::ALL {
			let paths = network.find_paths(&queries, algorithm);
			let lengths: Vec<Option<usize>> = paths.iter().map(|p| p.as_ref().map(|p| p.len())).collect();
			assert_eq!(lengths, vec![Some(2), Some(1), None, None], "{algorithm}");
		}
	}

	#[test]
	fn parse_errors_are_reported() {
		let err = "2 0 0 1 1\n2 0 0 1\n".parse::<RoadNetwork>().unwrap_err();
		assert_eq!(
			err.to_string(),
			"line 2: expected `<roadType> <srcX> <srcY> <dstX> <dstY>`, found 4 values"
		);
	}
}
