use crate::{distance, Point, RoadID};

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A Point in the Road Network.
///
/// Besides its coordinates, a NetworkPoint remembers the index of a Road it belongs to. This
/// index is purely informational: equality and hashing only consider the coordinates, which is
/// also why a NetworkPoint can be looked up in a map using a plain [`Point`].
///
/// ## Examples
/// ```
/// # use road_pathfinding::{graph::PointSet, NetworkPoint};
/// let a = NetworkPoint::new((3, 4), 0);
/// let b = NetworkPoint::new((3, 4), 7);
/// assert_eq!(a, b);
///
/// let mut set = PointSet::default();
/// set.insert(a);
/// assert!(!set.insert(b));
/// assert!(set.contains(&(3, 4)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NetworkPoint {
    pos: Point,
    road: RoadID,
}

impl NetworkPoint {
    /// Creates a NetworkPoint at `pos` that belongs to the Road with the index `road`
    pub fn new(pos: Point, road: RoadID) -> NetworkPoint {
        NetworkPoint { pos, road }
    }

    /// the coordinates of the Point
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// The index of the Road this Point was created from.
    ///
    /// For keys of an [`AdjacencyMap`](crate::AdjacencyMap) this is the first Road that starts or
    /// ends at this Point. For neighbors it is the Road that leads to the neighbor.
    pub fn road(&self) -> RoadID {
        self.road
    }

    /// the straight-line distance to `other`
    pub fn distance(&self, other: &NetworkPoint) -> f64 {
        distance(self.pos, other.pos)
    }
}

impl PartialEq for NetworkPoint {
    fn eq(&self, other: &NetworkPoint) -> bool {
        self.pos == other.pos
    }
}

impl Eq for NetworkPoint {}

impl Hash for NetworkPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl Borrow<Point> for NetworkPoint {
    fn borrow(&self) -> &Point {
        &self.pos
    }
}

impl fmt::Display for NetworkPoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.pos.0, self.pos.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PointMap;

    #[test]
    fn road_does_not_affect_identity() {
        let mut map = PointMap::default();
        map.insert(NetworkPoint::new((1, 1), 0), "first");
        map.insert(NetworkPoint::new((1, 1), 5), "second");

        assert_eq!(map.len(), 1);
        assert_eq!(map[&(1, 1)], "second");

        // the key keeps the Road it was inserted with
        let (key, _) = map.get_key_value(&(1, 1)).unwrap();
        assert_eq!(key.road(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(NetworkPoint::new((-3, 12), 1).to_string(), "(-3, 12)");
    }
}
