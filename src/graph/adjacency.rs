use super::{NetworkPoint, PointMap};
use crate::{Point, Road, RoadID};

/// Maps every Point to the Points that can be reached from it with a single Road.
///
/// Neighbors are kept in the order in which their Roads first appeared, without duplicates.
/// A Point only has an entry if at least one Road can be traveled away from it, so the `end` of
/// a one-way Road that no other Road touches has none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    neighbors: PointMap<Vec<NetworkPoint>>,
}

impl AdjacencyMap {
    /// The Points reachable from `point` in one step, or an empty slice if there are none.
    pub fn neighbors(&self, point: Point) -> &[NetworkPoint] {
        self.neighbors
            .get(&point)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The NetworkPoint stored for `point`, if any Road can be traveled away from it.
    pub fn point(&self, point: Point) -> Option<NetworkPoint> {
        self.neighbors.get_key_value(&point).map(|(key, _)| *key)
    }

    /// `true` if any Road can be traveled away from `point`
    pub fn contains(&self, point: Point) -> bool {
        self.neighbors.contains_key(&point)
    }

    /// the number of Points with at least one neighbor
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// `true` if there are no Roads at all
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// the total number of directed connections
    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(Vec::len).sum()
    }

    /// Iterates over all Points with their neighbors, in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (NetworkPoint, &[NetworkPoint])> + '_ {
        self.neighbors
            .iter()
            .map(|(point, neighbors)| (*point, neighbors.as_slice()))
    }
}

/// Builds the [`AdjacencyMap`] for a list of Roads.
///
/// For every Road, `end` becomes a neighbor of `start`. Two-way Roads also make `start` a
/// neighbor of `end`. The Roads are never modified, and building twice from the same list
/// yields identical maps.
///
/// ## Examples
/// ```
/// # use road_pathfinding::{build_adjacency, Road, RoadType};
/// let roads = [
///     Road::new(RoadType::OneWay, (0, 0), (5, 0)),
///     Road::new(RoadType::TwoWay, (0, 0), (0, 5)),
/// ];
/// let adjacency = build_adjacency(&roads);
///
/// let neighbors: Vec<_> = adjacency.neighbors((0, 0)).iter().map(|p| p.pos()).collect();
/// assert_eq!(neighbors, vec![(5, 0), (0, 5)]);
///
/// // one-way: (5, 0) leads nowhere
/// assert!(adjacency.neighbors((5, 0)).is_empty());
/// assert!(!adjacency.contains((5, 0)));
///
/// // two-way: (0, 5) leads back
/// assert_eq!(adjacency.neighbors((0, 5))[0].pos(), (0, 0));
/// ```
pub fn build_adjacency(roads: &[Road]) -> AdjacencyMap {
    #[cfg(feature = "log")]
    let timer = std::time::Instant::now();

    let mut neighbors: PointMap<Vec<NetworkPoint>> = PointMap::with_capacity(roads.len());

    for (id, road) in roads.iter().enumerate() {
        let id = id as RoadID;
        let start = NetworkPoint::new(road.start(), id);
        let end = NetworkPoint::new(road.end(), id);

        insert_unique(neighbors.entry(start).or_default(), end);

        if road.is_two_way() {
            insert_unique(neighbors.entry(end).or_default(), start);
        }
    }

    re_trace!("build adjacency", timer);

    AdjacencyMap { neighbors }
}

fn insert_unique(list: &mut Vec<NetworkPoint>, point: NetworkPoint) {
    if !list.contains(&point) {
        list.push(point);
    }
}
