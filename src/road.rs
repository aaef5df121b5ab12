use crate::{Error, Point};
use std::fmt;

/// Whether a [`Road`] can be traveled in one or both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoadType {
    /// the Road can only be traveled from `start` to `end`
    OneWay,
    /// the Road can be traveled in both directions
    TwoWay,
}

impl RoadType {
    /// The numeric code used for this RoadType in road files.
    ///
    /// ## Examples
    /// ```
    /// # use road_pathfinding::RoadType;
    /// assert_eq!(RoadType::OneWay.code(), 1);
    /// assert_eq!(RoadType::try_from(2_i64).unwrap(), RoadType::TwoWay);
    /// assert!(RoadType::try_from(3_i64).is_err());
    /// ```
    pub fn code(self) -> i64 {
        match self {
            RoadType::OneWay => 1,
            RoadType::TwoWay => 2,
        }
    }
}

impl TryFrom<i64> for RoadType {
    type Error = Error;
    fn try_from(code: i64) -> Result<RoadType, Error> {
        match code {
            1 => Ok(RoadType::OneWay),
            2 => Ok(RoadType::TwoWay),
            other => Err(Error::UnknownRoadType(other)),
        }
    }
}

/// A straight Road between two Points.
///
/// Two Roads are equal if their [`RoadType`] and both endpoints match. The order of the
/// endpoints matters: swapping `start` and `end` creates a different Road, even for two-way Roads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Road {
    road_type: RoadType,
    start: Point,
    end: Point,
}

impl Road {
    /// Creates a new Road from `start` to `end`
    pub fn new(road_type: RoadType, start: Point, end: Point) -> Road {
        Road {
            road_type,
            start,
            end,
        }
    }

    /// whether the Road is one-way or two-way
    pub fn road_type(&self) -> RoadType {
        self.road_type
    }

    /// the Point where the Road begins
    pub fn start(&self) -> Point {
        self.start
    }

    /// the Point where the Road ends
    pub fn end(&self) -> Point {
        self.end
    }

    /// `true` if the Road can be traveled from `end` to `start`
    pub fn is_two_way(&self) -> bool {
        self.road_type == RoadType::TwoWay
    }

    /// The straight-line length of the Road
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Checks if the Road runs between `a` and `b`, in either order.
    ///
    /// The [`RoadType`] is ignored.
    pub fn connects(&self, a: Point, b: Point) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }
}

impl fmt::Display for Road {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let arrow = match self.road_type {
            RoadType::OneWay => "->",
            RoadType::TwoWay => "<->",
        };
        write!(
            fmt,
            "({}, {}) {} ({}, {})",
            self.start.0, self.start.1, arrow, self.end.0, self.end.1
        )
    }
}

/// The Euclidean distance between two Points
///
/// ## Examples
/// ```
/// # use road_pathfinding::distance;
/// assert_eq!(distance((0, 0), (3, 4)), 5.0);
/// assert_eq!(distance((-1, -1), (-1, -1)), 0.0);
/// ```
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = f64::from(b.0) - f64::from(a.0);
    let dy = f64::from(b.1) - f64::from(a.1);
    (dx * dx + dy * dy).sqrt()
}
