//! Owned navigation façade.
//!
//! [`NavMesh`] owns the current graph and exposes one typed entry point per
//! event: [`NavMesh::set_boundary`] for a boundary change and
//! [`NavMesh::find_path`] for a target request. Collaborators call these
//! directly: there is no shared event registry and no global mutable
//! state, and whatever wiring a host needs happens at startup, explicitly.

use log::{debug, info};

use crate::core::{Point2, Polygon};
use crate::decompose::decompose;
use crate::error::{MeshError, Result};
use crate::graph::Graph;
use crate::pathfinding::{self, PathResult};

/// The navmesh service: builds and owns the region graph, resolves raw
/// points to regions, and answers path requests.
#[derive(Debug, Default)]
pub struct NavMesh {
    graph: Option<Graph>,
}

impl NavMesh {
    /// Create a navmesh with no boundary set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the navmesh for a changed boundary.
    ///
    /// Decomposes the outline into convex regions and replaces the previous
    /// graph wholesale; the old graph is dropped, never patched. Returns
    /// the number of region nodes in the new graph.
    ///
    /// # Errors
    /// [`MeshError::ClockwiseOutline`] when the outline winds the wrong
    /// way; the reflex test and split-cut normals both assume
    /// counterclockwise traversal.
    pub fn set_boundary(&mut self, outline: &Polygon) -> Result<usize> {
        if outline.signed_area_doubled() <= 0.0 {
            return Err(MeshError::ClockwiseOutline);
        }
        let graph = Graph::build(decompose(outline));
        let nodes = graph.len();
        info!("[NavMesh] boundary changed, rebuilt graph with {} nodes", nodes);
        self.graph = Some(graph);
        Ok(nodes)
    }

    /// Answer a target request for an agent at `position`.
    ///
    /// Resolves both points to their enclosing regions, then searches. The
    /// search itself never errors; resolution can:
    ///
    /// # Errors
    /// - [`MeshError::NoGraph`] when no boundary has been set
    /// - [`MeshError::StartOutsideMesh`] when `position` is in no region
    /// - [`MeshError::TargetOutsideMesh`] when `target` is in no region
    pub fn find_path(&self, position: Point2, target: Point2) -> Result<PathResult> {
        let graph = self.graph.as_ref().ok_or(MeshError::NoGraph)?;

        let start = graph
            .node_at(position)
            .ok_or(MeshError::StartOutsideMesh {
                x: position.x,
                y: position.y,
            })?;
        let destination = graph.node_at(target).ok_or(MeshError::TargetOutsideMesh {
            x: target.x,
            y: target.y,
        })?;

        let result = pathfinding::find_path(graph, start, destination, target);
        debug!(
            "[NavMesh] path request ({:.2}, {:.2}) -> ({:.2}, {:.2}): {} waypoints, {} expanded",
            position.x,
            position.y,
            target.x,
            target.y,
            result.waypoints.len(),
            result.expanded
        );
        Ok(result)
    }

    /// The current graph, if a boundary has been set.
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_outline() -> Polygon {
        Polygon::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(20.0, 0.0),
            Point2::new(20.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 20.0),
            Point2::new(0.0, 20.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_graph_error() {
        let mesh = NavMesh::new();
        let err = mesh
            .find_path(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0))
            .unwrap_err();
        assert_eq!(err, MeshError::NoGraph);
    }

    #[test]
    fn test_set_boundary_reports_node_count() {
        let mut mesh = NavMesh::new();
        let nodes = mesh.set_boundary(&l_outline()).unwrap();
        assert_eq!(nodes, 2);
        assert_eq!(mesh.graph().unwrap().len(), 2);
    }

    #[test]
    fn test_path_across_the_l() {
        let mut mesh = NavMesh::new();
        mesh.set_boundary(&l_outline()).unwrap();

        let target = Point2::new(2.0, 18.0);
        let result = mesh.find_path(Point2::new(18.0, 2.0), target).unwrap();
        assert!(result.found);
        assert_eq!(*result.waypoints.last().unwrap(), target);
        assert!(result.waypoints.len() >= 2);
    }

    #[test]
    fn test_outside_points_rejected() {
        let mut mesh = NavMesh::new();
        mesh.set_boundary(&l_outline()).unwrap();

        // (15, 15) is in the notch outside the L.
        let err = mesh
            .find_path(Point2::new(15.0, 15.0), Point2::new(2.0, 2.0))
            .unwrap_err();
        assert!(matches!(err, MeshError::StartOutsideMesh { .. }));

        let err = mesh
            .find_path(Point2::new(2.0, 2.0), Point2::new(15.0, 15.0))
            .unwrap_err();
        assert!(matches!(err, MeshError::TargetOutsideMesh { .. }));
    }

    #[test]
    fn test_clockwise_outline_rejected() {
        let cw = Polygon::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        ])
        .unwrap();
        let mut mesh = NavMesh::new();
        assert_eq!(mesh.set_boundary(&cw).unwrap_err(), MeshError::ClockwiseOutline);
        assert!(mesh.graph().is_none());
    }

    #[test]
    fn test_boundary_change_replaces_graph() {
        let mut mesh = NavMesh::new();
        mesh.set_boundary(&l_outline()).unwrap();

        let square = Polygon::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 5.0),
            Point2::new(0.0, 5.0),
        ])
        .unwrap();
        let nodes = mesh.set_boundary(&square).unwrap();
        assert_eq!(nodes, 1);
        assert_eq!(mesh.graph().unwrap().len(), 1);
    }
}
