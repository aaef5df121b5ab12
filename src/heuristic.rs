use crate::graph::{NetworkPoint, PointMap};
use crate::{distance, Point, Road, RoadID};

/// The straight-line distance from every Point of a Road Network to a fixed goal.
///
/// Since Roads are straight, no Route between two Points can be shorter than the straight line
/// between them, so these estimates never overestimate the remaining cost of a Route.
///
/// A table is only valid for the goal it was computed for. Compute a new one with
/// [`compute_heuristics`] whenever the goal changes.
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicTable {
    goal: Point,
    estimates: PointMap<f64>,
}

impl HeuristicTable {
    #[cfg(test)]
    pub(crate) fn from_estimates(
        goal: Point,
        estimates: impl IntoIterator<Item = (Point, f64)>,
    ) -> HeuristicTable {
        let estimates = estimates
            .into_iter()
            .map(|(pos, estimate)| (NetworkPoint::new(pos, 0), estimate))
            .collect();
        HeuristicTable { goal, estimates }
    }

    /// the goal that all estimates refer to
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The stored estimate for `point`, if it is an endpoint of any Road
    pub fn get(&self, point: Point) -> Option<f64> {
        self.estimates.get(&point).copied()
    }

    /// The estimate for `point`, computed on the fly if it is not part of the table
    pub fn estimate(&self, point: Point) -> f64 {
        self.get(point).unwrap_or_else(|| distance(point, self.goal))
    }

    /// the number of Points in the table
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    /// `true` if the table was built from an empty Road Network
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Iterates over all Points with their estimates, in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.estimates
            .iter()
            .map(|(point, estimate)| (point.pos(), *estimate))
    }
}

/// Computes the straight-line distance from every endpoint of `roads` to `goal`.
///
/// ## Examples
/// ```
/// # use road_pathfinding::{compute_heuristics, Road, RoadType};
/// let roads = [Road::new(RoadType::TwoWay, (0, 0), (10, 0))];
/// let heuristics = compute_heuristics(&roads, (10, 10));
///
/// assert_eq!(heuristics.get((10, 0)), Some(10.0));
/// assert_eq!(heuristics.get((0, 0)), Some(200f64.sqrt()));
/// assert_eq!(heuristics.get((5, 5)), None);
/// ```
pub fn compute_heuristics(roads: &[Road], goal: Point) -> HeuristicTable {
    let mut estimates = PointMap::with_capacity(roads.len() * 2);

    for (id, road) in roads.iter().enumerate() {
        for pos in [road.start(), road.end()] {
            estimates
                .entry(NetworkPoint::new(pos, id as RoadID))
                .or_insert_with(|| distance(pos, goal));
        }
    }

    HeuristicTable { goal, estimates }
}
