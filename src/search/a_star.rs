use super::{HeuristicElement, SearchTree};
use crate::graph::PointMap;
use crate::{AdjacencyMap, HeuristicTable, NetworkPoint, Point};

use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
	Open,
	Closed,
}

/// Searches the Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The cost of a Road is its length, and `heuristics` provide the estimate for the remaining
/// distance. Points that were already expanded are opened again if a cheaper Route to them is
/// found later on.
///
/// The heap may hold several entries for the same Point. Only the one matching the current cost
/// of an open Point is expanded, all others are skipped when popped.
pub(crate) fn a_star_search(
	adjacency: &AdjacencyMap,
	heuristics: &HeuristicTable,
	start: Point,
	goal: Point,
) -> SearchTree {
	let mut tree = SearchTree::default();

	let start = adjacency
		.point(start)
		.unwrap_or_else(|| NetworkPoint::new(start, 0));

	let mut visited: PointMap<(f64, Status)> = PointMap::new();
	visited.insert(start, (0.0, Status::Open));

	let mut sequence = 0;
	let mut next = BinaryHeap::new();
	next.push(HeuristicElement {
		point: start,
		cost: 0.0,
		estimate: heuristics.estimate(start.pos()),
		sequence,
	});

	while let Some(HeuristicElement {
		point: current,
		cost: current_cost,
		..
	}) = next.pop()
	{
		match visited.get(&current) {
			Some(&(cost, Status::Open)) if current_cost <= cost => {}
			_ => continue,
		}

		if current.pos() == goal {
			tree.goal_cost = Some(current_cost);
			break;
		}
		tree.expanded += 1;

		for &neighbor in adjacency.neighbors(current.pos()) {
			let other_cost = current_cost + current.distance(&neighbor);

			if let Some(&(prev_cost, _)) = visited.get(&neighbor) {
				if prev_cost <= other_cost {
					continue;
				}
			}

			visited.insert(neighbor, (other_cost, Status::Open));
			tree.parents.insert(neighbor, current);

			sequence += 1;
			next.push(HeuristicElement {
				point: neighbor,
				cost: other_cost,
				estimate: other_cost + heuristics.estimate(neighbor.pos()),
				sequence,
			});
		}

		visited.insert(current, (current_cost, Status::Closed));
	}

	tree
}
