use super::SearchTree;
use crate::graph::PointSet;
use crate::{AdjacencyMap, NetworkPoint, Point};

use std::collections::VecDeque;

/// Searches the Graph level by level, ignoring the length of the Roads.
///
/// Points are expanded strictly in the order in which they were discovered, so among several
/// Routes with the same number of Roads, the one whose Points were discovered first wins.
pub(crate) fn bfs_search(adjacency: &AdjacencyMap, start: Point, goal: Point) -> SearchTree {
	let mut tree = SearchTree::default();

	let start = adjacency
		.point(start)
		.unwrap_or_else(|| NetworkPoint::new(start, 0));

	let mut visited = PointSet::new();
	visited.insert(start);
	let mut next = VecDeque::new();
	next.push_back((start, 0usize));

	while let Some((current, hops)) = next.pop_front() {
		if current.pos() == goal {
			tree.goal_cost = Some(hops as f64);
			break;
		}
		tree.expanded += 1;

		for &neighbor in adjacency.neighbors(current.pos()) {
			if visited.insert(neighbor) {
				tree.parents.insert(neighbor, current);
				next.push_back((neighbor, hops + 1));
			}
		}
	}

	tree
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{build_adjacency, reconstruct_path, Road, RoadType};

	#[test]
	fn fewest_roads() {
		let roads = [
			Road::new(RoadType::TwoWay, (0, 0), (1, 0)),
			Road::new(RoadType::TwoWay, (1, 0), (2, 0)),
			Road::new(RoadType::TwoWay, (2, 0), (3, 0)),
			Road::new(RoadType::TwoWay, (0, 0), (0, 100)),
			Road::new(RoadType::TwoWay, (0, 100), (3, 0)),
		];
		let adjacency = build_adjacency(&roads);

		let tree = bfs_search(&adjacency, (0, 0), (3, 0));
		assert_eq!(tree.goal_cost, Some(2.0));

		let path = reconstruct_path(&roads, &tree.parents, (3, 0)).unwrap();
		assert_eq!(path, vec![roads[4], roads[3]]);
	}

	#[test]
	fn discovery_order_breaks_ties() {
		// (0, 0) lists (0, 10) before (10, 0), so the Route over (0, 10) is found first
		let roads = [
			Road::new(RoadType::TwoWay, (0, 0), (0, 10)),
			Road::new(RoadType::TwoWay, (0, 0), (10, 0)),
			Road::new(RoadType::TwoWay, (10, 0), (10, 10)),
			Road::new(RoadType::TwoWay, (0, 10), (10, 10)),
		];
		let adjacency = build_adjacency(&roads);

		let tree = bfs_search(&adjacency, (0, 0), (10, 10));
		assert_eq!(tree.parents[&(10, 10)].pos(), (0, 10));

		let path = reconstruct_path(&roads, &tree.parents, (10, 10)).unwrap();
		assert_eq!(path, vec![roads[3], roads[0]]);
	}

	#[test]
	fn stops_at_goal() {
		let roads = [
			Road::new(RoadType::OneWay, (0, 0), (1, 0)),
			Road::new(RoadType::OneWay, (1, 0), (2, 0)),
			Road::new(RoadType::OneWay, (2, 0), (3, 0)),
		];
		let adjacency = build_adjacency(&roads);

		let tree = bfs_search(&adjacency, (0, 0), (1, 0));
		assert_eq!(tree.expanded, 1);
		assert!(!tree.parents.contains_key(&(2, 0)));
	}

	#[test]
	fn unreachable() {
		let roads = [
			Road::new(RoadType::OneWay, (0, 0), (1, 0)),
			Road::new(RoadType::OneWay, (2, 0), (1, 0)),
		];
		let adjacency = build_adjacency(&roads);

		let tree = bfs_search(&adjacency, (0, 0), (2, 0));
		assert_eq!(tree.goal_cost, None);
		assert_eq!(tree.expanded, 2);
		assert_eq!(
			reconstruct_path(&roads, &tree.parents, (2, 0)),
			Some(vec![])
		);
	}
}
