//! The Graph formed by the endpoints of the Roads.
//!
//! Every distinct Point that appears as an endpoint becomes a [`NetworkPoint`]. Points are only
//! ever identified by their coordinates, so two NetworkPoints with the same coordinates are
//! interchangeable as keys in a [`PointMap`] or [`PointSet`].

mod network_point;
pub use network_point::NetworkPoint;

mod adjacency;
pub use adjacency::{build_adjacency, AdjacencyMap};

/// A [`HashMap`](hashbrown::HashMap) keyed by [`NetworkPoint`]s.
///
/// Lookups can use a plain [`Point`](crate::Point) as the key.
pub type PointMap<V> = hashbrown::HashMap<NetworkPoint, V>;
/// A [`HashSet`](hashbrown::HashSet) of [`NetworkPoint`]s
pub type PointSet = hashbrown::HashSet<NetworkPoint>;
