use super::SearchTree;
use crate::graph::PointSet;
use crate::{AdjacencyMap, HeuristicTable, NetworkPoint, Point};

/// A Point on the current Route of a depth-first probe
#[derive(Debug)]
struct Frame {
	point: NetworkPoint,
	cost: f64,
	/// index of the next neighbor to try
	next: usize,
}

#[derive(Debug)]
enum Probe {
	/// the Points from start to goal, with the total cost
	Found(Vec<NetworkPoint>, f64),
	/// the smallest estimate that was cut off
	Exceeded(f64),
}

/// Searches the Graph using [Iterative-Deepening A*](https://en.wikipedia.org/wiki/Iterative_deepening_A*).
///
/// Every iteration is a depth-first search that cuts off all branches whose cost plus estimate
/// exceeds the current bound. The bound starts at the estimate of `start` and is raised to the
/// smallest cut-off value after every unsuccessful iteration. If nothing was cut off, every
/// Route has been tried and the goal is unreachable.
///
/// Only the Points on the current Route are remembered, which prevents cycles but not the
/// repeated expansion of Points that are reachable in more than one way.
pub(crate) fn ida_star_search(
	adjacency: &AdjacencyMap,
	heuristics: &HeuristicTable,
	start: Point,
	goal: Point,
) -> SearchTree {
	let mut tree = SearchTree::default();

	let start = adjacency
		.point(start)
		.unwrap_or_else(|| NetworkPoint::new(start, 0));

	let mut bound = heuristics.estimate(start.pos());

	loop {
		match probe(adjacency, heuristics, start, goal, bound, &mut tree.expanded) {
			Probe::Found(route, cost) => {
				for step in route.windows(2) {
					tree.parents.insert(step[1], step[0]);
				}
				tree.goal_cost = Some(cost);
				break;
			}
			Probe::Exceeded(next_bound) if next_bound.is_finite() => {
				debug!("raising IDA* bound from {} to {}", bound, next_bound);
				bound = next_bound;
			}
			Probe::Exceeded(_) => break,
		}
	}

	tree
}

fn probe(
	adjacency: &AdjacencyMap,
	heuristics: &HeuristicTable,
	start: NetworkPoint,
	goal: Point,
	bound: f64,
	expanded: &mut usize,
) -> Probe {
	let mut exceeded = f64::INFINITY;
	let mut stack: Vec<Frame> = Vec::new();
	let mut on_route = PointSet::new();

	let mut candidate = Some((start, 0.0));

	loop {
		if let Some((point, cost)) = candidate.take() {
			let estimate = cost + heuristics.estimate(point.pos());
			if estimate > bound {
				exceeded = exceeded.min(estimate);
			} else if point.pos() == goal {
				let route = stack
					.iter()
					.map(|frame| frame.point)
					.chain(Some(point))
					.collect();
				return Probe::Found(route, cost);
			} else {
				*expanded += 1;
				on_route.insert(point);
				stack.push(Frame {
					point,
					cost,
					next: 0,
				});
			}
		}

		let Some(frame) = stack.last_mut() else {
			break;
		};

		match adjacency.neighbors(frame.point.pos()).get(frame.next) {
			Some(&neighbor) => {
				frame.next += 1;
				if !on_route.contains(&neighbor) {
					candidate = Some((neighbor, frame.cost + frame.point.distance(&neighbor)));
				}
			}
			None => {
				on_route.remove(&frame.point);
				stack.pop();
			}
		}
	}

	Probe::Exceeded(exceeded)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::search::a_star::a_star_search;
	use crate::{build_adjacency, compute_heuristics, reconstruct_path, Road, RoadType};

	#[test]
	fn basic() {
		let roads = [
			Road::new(RoadType::TwoWay, (0, 0), (10, 0)),
			Road::new(RoadType::TwoWay, (10, 0), (10, 10)),
		];
		let adjacency = build_adjacency(&roads);
		let heuristics = compute_heuristics(&roads, (10, 10));

		let tree = ida_star_search(&adjacency, &heuristics, (0, 0), (10, 10));
		assert_eq!(tree.goal_cost, Some(20.0));

		let path = reconstruct_path(&roads, &tree.parents, (10, 10)).unwrap();
		assert_eq!(path, vec![roads[1], roads[0]]);
	}

	#[test]
	fn raises_bound_around_obstacle() {
		// the straight line is blocked, so the first bound is too low
		let roads = [
			Road::new(RoadType::TwoWay, (0, 0), (0, 10)),
			Road::new(RoadType::TwoWay, (0, 10), (10, 10)),
			Road::new(RoadType::TwoWay, (10, 10), (10, 0)),
		];
		let adjacency = build_adjacency(&roads);
		let heuristics = compute_heuristics(&roads, (10, 0));

		let tree = ida_star_search(&adjacency, &heuristics, (0, 0), (10, 0));
		assert_eq!(tree.goal_cost, Some(30.0));
		assert!(tree.expanded > 3);

		let path = reconstruct_path(&roads, &tree.parents, (10, 0)).unwrap();
		assert_eq!(path, vec![roads[2], roads[1], roads[0]]);
	}

	#[test]
	fn same_cost_as_a_star() {
		let roads = [
			Road::new(RoadType::TwoWay, (0, 0), (0, 30)),
			Road::new(RoadType::TwoWay, (0, 30), (10, 0)),
			Road::new(RoadType::TwoWay, (0, 0), (3, 1)),
			Road::new(RoadType::TwoWay, (3, 1), (6, 1)),
			Road::new(RoadType::TwoWay, (6, 1), (10, 0)),
			Road::new(RoadType::TwoWay, (3, 1), (3, -5)),
			Road::new(RoadType::TwoWay, (3, -5), (10, 0)),
		];
		let adjacency = build_adjacency(&roads);
		let heuristics = compute_heuristics(&roads, (10, 0));

		let ida = ida_star_search(&adjacency, &heuristics, (0, 0), (10, 0));
		let a_star = a_star_search(&adjacency, &heuristics, (0, 0), (10, 0));

		let (ida, a_star) = (ida.goal_cost.unwrap(), a_star.goal_cost.unwrap());
		assert!((ida - a_star).abs() < 1e-9, "{} != {}", ida, a_star);
	}

	#[test]
	fn respects_one_way_roads() {
		let roads = [
			Road::new(RoadType::OneWay, (0, 0), (5, 0)),
			Road::new(RoadType::OneWay, (5, 0), (5, 5)),
			Road::new(RoadType::OneWay, (5, 5), (0, 0)),
		];
		let adjacency = build_adjacency(&roads);

		let heuristics = compute_heuristics(&roads, (5, 5));
		let forward = ida_star_search(&adjacency, &heuristics, (0, 0), (5, 5));
		assert_eq!(forward.goal_cost, Some(10.0));

		// going backwards means going all the way around
		let heuristics = compute_heuristics(&roads, (5, 0));
		let backward = ida_star_search(&adjacency, &heuristics, (5, 5), (5, 0));
		let expected = 50f64.sqrt() + 5.0;
		let cost = backward.goal_cost.unwrap();
		assert!((cost - expected).abs() < 1e-9, "{} != {}", cost, expected);
	}

	#[test]
	fn unreachable() {
		let roads = [
			Road::new(RoadType::TwoWay, (0, 0), (1, 0)),
			Road::new(RoadType::TwoWay, (1, 0), (1, 1)),
			Road::new(RoadType::TwoWay, (1, 1), (0, 0)),
			Road::new(RoadType::TwoWay, (5, 5), (6, 6)),
		];
		let adjacency = build_adjacency(&roads);
		let heuristics = compute_heuristics(&roads, (6, 6));

		let tree = ida_star_search(&adjacency, &heuristics, (0, 0), (6, 6));
		assert_eq!(tree.goal_cost, None);
		assert!(tree.parents.is_empty());
	}

	#[test]
	fn start_is_goal() {
		let roads = [Road::new(RoadType::TwoWay, (0, 0), (1, 0))];
		let adjacency = build_adjacency(&roads);
		let heuristics = compute_heuristics(&roads, (0, 0));

		let tree = ida_star_search(&adjacency, &heuristics, (0, 0), (0, 0));
		assert_eq!(tree.goal_cost, Some(0.0));
		assert_eq!(tree.expanded, 0);
		assert!(tree.parents.is_empty());
	}
}
