//! # Polynav: Convex Navmesh Decomposition and A* Pathfinding
//!
//! A navigation library for agents moving through a bounded polygonal
//! environment. Given a closed counterclockwise outline of directed edges
//! (each carrying an outward-facing normal), the library:
//!
//! 1. **Decomposes** the enclosed region into convex sub-regions by
//!    repeatedly splitting at reflex vertices ([`decompose`])
//! 2. **Connects** the sub-regions into an adjacency graph by matching
//!    shared edges ([`graph::Graph::build`])
//! 3. **Searches** that graph with A* to produce an ordered waypoint list
//!    ending at a literal target point ([`pathfinding::find_path`])
//!
//! ## Quick Start
//!
//! ```rust
//! use polynav::core::{Point2, Polygon};
//! use polynav::NavMesh;
//!
//! // An L-shaped room: one reflex vertex, splits into two convex regions.
//! let outline = Polygon::from_points(&[
//!     Point2::new(0.0, 0.0),
//!     Point2::new(20.0, 0.0),
//!     Point2::new(20.0, 10.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(10.0, 20.0),
//!     Point2::new(0.0, 20.0),
//! ]).unwrap();
//!
//! let mut mesh = NavMesh::new();
//! let nodes = mesh.set_boundary(&outline).unwrap();
//! assert!(nodes >= 2);
//!
//! let result = mesh.find_path(Point2::new(18.0, 2.0), Point2::new(2.0, 18.0)).unwrap();
//! assert!(result.found);
//! assert_eq!(*result.waypoints.last().unwrap(), Point2::new(2.0, 18.0));
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! outline ──► decompose ──► convex polygons ──► Graph::build ──► Graph
//!                                                                  │
//! (position, target) ──► node resolution ──► find_path (A*) ◄──────┘
//!                                                  │
//!                                                  ▼
//!                                           waypoint list
//! ```
//!
//! ## Design Notes
//!
//! - Geometry is planar (`f32` x/y). Outlines must be counterclockwise with
//!   outward normals; a vertex is reflex when `dot(edge[i].normal,
//!   edge[i+1].direction) > 0`, meaning the interior angle exceeds 180
//!   degrees.
//! - The navmesh is rebuilt wholesale on every boundary change; nothing is
//!   patched incrementally.
//! - A* uses a uniform edge cost of 1 per region transition paired with a
//!   Euclidean center-to-target heuristic. See [`pathfinding`] for the
//!   caveats this combination carries.
//! - Everything is single-threaded and synchronous; a build or a search runs
//!   to completion on the calling thread.

pub mod core;
pub mod decompose;
pub mod error;
pub mod graph;
pub mod navmesh;
pub mod pathfinding;

pub use decompose::decompose;
pub use error::{MeshError, Result};
pub use graph::{Graph, GraphNode, Neighbor, NodeId};
pub use navmesh::NavMesh;
pub use pathfinding::{find_path, PathResult};
