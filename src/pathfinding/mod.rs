//! Graph search over the navmesh.
//!
//! [`find_path`] runs A* from a start region to a destination region,
//! producing waypoints (region centers, ending at the literal target point)
//! and a diagnostic count of expanded nodes.
//!
//! ## Cost model caveat
//!
//! Edge cost is a uniform 1 per region transition while the heuristic is
//! the Euclidean distance from a region's center to the target. With
//! unevenly spaced region centers the heuristic is not admissible against
//! the unit cost, so the path found minimizes region transitions rather
//! than geometric length and may not be transition-optimal in contrived
//! meshes. This is deliberate for now; revisit if a geometric edge cost
//! is ever wanted.

mod astar;
mod open_list;

pub use astar::{find_path, PathResult};
pub use open_list::{OpenList, SearchEntry};
