//! Error types for polynav.

use thiserror::Error;

/// Polynav error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Outline has too few edges to enclose a region.
    #[error("degenerate outline: {edges} edges, need at least 3")]
    DegenerateOutline {
        /// Number of edges supplied.
        edges: usize,
    },

    /// Consecutive outline edges are not contiguous.
    #[error("open outline: edge {index} does not connect to its successor")]
    OpenOutline {
        /// Index of the edge whose end does not meet the next edge's start.
        index: usize,
    },

    /// Outline winds clockwise; the decomposer requires counterclockwise
    /// traversal with outward normals.
    #[error("outline winds clockwise, expected counterclockwise")]
    ClockwiseOutline,

    /// Pathfinding was requested before any boundary was set.
    #[error("no navmesh: set a boundary before requesting a path")]
    NoGraph,

    /// The agent position lies outside every region of the mesh.
    #[error("start position ({x:.2}, {y:.2}) is outside the navmesh")]
    StartOutsideMesh {
        /// Position x.
        x: f32,
        /// Position y.
        y: f32,
    },

    /// The target point lies outside every region of the mesh.
    #[error("target point ({x:.2}, {y:.2}) is outside the navmesh")]
    TargetOutsideMesh {
        /// Target x.
        x: f32,
        /// Target y.
        y: f32,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeshError>;
