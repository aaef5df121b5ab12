use crate::graph::{NetworkPoint, PointMap};
use crate::{Point, Road};

use std::fmt;
use std::ops::{Deref, Index};

/// Maps every Point reached by a search to the Point it was reached from.
pub type ParentMap = PointMap<NetworkPoint>;

/// A Route through the Road Network, as found by [`find_path`](crate::find_path).
///
/// **The Roads are ordered from the goal back to the start**, which is the order in which they
/// are discovered when following the [`ParentMap`]. Use [`start_to_goal`](RoadPath::start_to_goal)
/// to walk them in travel order.
///
/// Searches never return an empty RoadPath, they report a missing Route as `None` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadPath {
    roads: Vec<Road>,
    cost: f64,
    expanded: usize,
}

impl RoadPath {
    /// Creates a RoadPath from Roads in goal-to-start order.
    ///
    /// `expanded` is the number of Points the search expanded to find it.
    pub fn new(roads: Vec<Road>, expanded: usize) -> RoadPath {
        let cost = roads.iter().map(Road::length).sum();
        RoadPath {
            roads,
            cost,
            expanded,
        }
    }

    /// the total length of all Roads in the Path
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// How many Points the search expanded before it found the Path.
    ///
    /// This is a measure of how much work the search did, which is useful to compare
    /// [`Algorithm`](crate::Algorithm)s.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// the number of Roads in the Path
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    /// `true` if the Path contains no Roads
    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Iterates over the Roads from the goal back to the start
    pub fn iter(&self) -> std::slice::Iter<'_, Road> {
        self.roads.iter()
    }

    /// Iterates over the Roads from the start to the goal.
    ///
    /// ## Examples
    /// ```
    /// # use road_pathfinding::prelude::*;
    /// let network: RoadNetwork = "2 0 0 1 0\n2 1 0 2 0\n".parse().unwrap();
    /// let path = network.find_path((0, 0), (2, 0), Algorithm::Bfs).unwrap();
    ///
    /// let first = path.start_to_goal().next().unwrap();
    /// assert_eq!(first.start(), (0, 0));
    /// assert_eq!(path[0].end(), (2, 0));
    /// ```
    pub fn start_to_goal(&self) -> std::iter::Rev<std::slice::Iter<'_, Road>> {
        self.roads.iter().rev()
    }

    /// the Roads in goal-to-start order
    pub fn into_roads(self) -> Vec<Road> {
        self.roads
    }
}

impl Index<usize> for RoadPath {
    type Output = Road;
    fn index(&self, index: usize) -> &Road {
        &self.roads[index]
    }
}

impl Deref for RoadPath {
    type Target = [Road];
    fn deref(&self) -> &[Road] {
        &self.roads
    }
}

impl<'a> IntoIterator for &'a RoadPath {
    type Item = &'a Road;
    type IntoIter = std::slice::Iter<'a, Road>;
    fn into_iter(self) -> Self::IntoIter {
        self.roads.iter()
    }
}

impl fmt::Display for RoadPath {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "RoadPath[Cost = {:.3}]: ", self.cost)?;
        if self.roads.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.roads[0])?;
            for road in self.roads.iter().skip(1) {
                write!(fmt, ", {}", road)?;
            }
            Ok(())
        }
    }
}

/// Follows `parents` backwards from `goal` and collects the Roads along the way.
///
/// The walk ends at the first Point without a parent, which is the start of the search. For
/// every step, the first Road in `roads` that connects the two Points (in either direction) is
/// added. Steps without such a Road are skipped.
///
/// The Roads are returned **in goal-to-start order**. An empty list means that `goal` was never
/// reached. `None` is returned if `parents` contains a cycle, which a correct search never
/// produces. Callers should treat both cases as "no path".
///
/// ## Examples
/// ```
/// # use road_pathfinding::{graph::PointMap, reconstruct_path, NetworkPoint, Road, RoadType};
/// let roads = [
///     Road::new(RoadType::TwoWay, (0, 0), (1, 0)),
///     Road::new(RoadType::TwoWay, (1, 0), (2, 0)),
/// ];
/// let mut parents = PointMap::default();
/// parents.insert(NetworkPoint::new((1, 0), 0), NetworkPoint::new((0, 0), 0));
/// parents.insert(NetworkPoint::new((2, 0), 1), NetworkPoint::new((1, 0), 0));
///
/// let path = reconstruct_path(&roads, &parents, (2, 0)).unwrap();
/// assert_eq!(path, vec![roads[1], roads[0]]);
///
/// // a Point that was never reached
/// assert_eq!(reconstruct_path(&roads, &parents, (9, 9)), Some(vec![]));
/// ```
pub fn reconstruct_path(roads: &[Road], parents: &ParentMap, goal: Point) -> Option<Vec<Road>> {
    let mut path = Vec::new();
    let mut current = goal;
    let mut steps = 0;

    while let Some(parent) = parents.get(&current) {
        let parent = parent.pos();
        if parent == current {
            debug!("({}, {}) is its own parent", current.0, current.1);
            return None;
        }

        if let Some(road) = find_road(roads, current, parent) {
            path.push(*road);
        }

        // a walk longer than the map itself has to go in circles
        steps += 1;
        if steps > parents.len() {
            debug!("cycle in parent map after {} steps", steps);
            return None;
        }

        current = parent;
    }

    Some(path)
}

fn find_road(roads: &[Road], a: Point, b: Point) -> Option<&Road> {
    roads.iter().find(|road| road.connects(a, b))
}
