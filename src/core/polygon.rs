//! Closed polygon boundaries.

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, Result};

use super::math::{points_coincide, SIGN_EPSILON};
use super::{Edge, Point2};

/// An ordered, cyclic sequence of directed edges forming one closed region.
///
/// Invariants, checked at construction:
/// - at least 3 edges
/// - `edge[i].end` coincides with `edge[i + 1 mod n].start`
///
/// Traversal is counterclockwise with outward normals; the reflex test and
/// the split-cut normals both depend on that orientation, but it is an input
/// contract rather than a checked invariant here (boundary producers
/// guarantee it, every split preserves it, and [`crate::NavMesh`] rejects
/// clockwise outlines up front).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Polygon {
    edges: Vec<Edge>,
}

impl Polygon {
    /// Create a polygon from a closed edge loop.
    ///
    /// # Errors
    /// - [`MeshError::DegenerateOutline`] when fewer than 3 edges are given
    /// - [`MeshError::OpenOutline`] when consecutive edges are not
    ///   contiguous (including the wrap from last back to first)
    pub fn new(edges: Vec<Edge>) -> Result<Self> {
        if edges.len() < 3 {
            return Err(MeshError::DegenerateOutline { edges: edges.len() });
        }
        for i in 0..edges.len() {
            let next = (i + 1) % edges.len();
            if !points_coincide(edges[i].end, edges[next].start) {
                return Err(MeshError::OpenOutline { index: i });
            }
        }
        Ok(Self { edges })
    }

    /// Build a counterclockwise polygon from a vertex loop, synthesizing
    /// edges with outward normals.
    ///
    /// Vertices must be listed counterclockwise; consecutive duplicates are
    /// rejected as degenerate.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        if points.len() < 3 {
            return Err(MeshError::DegenerateOutline {
                edges: points.len(),
            });
        }
        let edges = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(&a, &b)| Edge::between(a, b))
            .collect::<Vec<_>>();
        if edges.iter().any(|e| points_coincide(e.start, e.end)) {
            return Err(MeshError::DegenerateOutline { edges: edges.len() });
        }
        Ok(Self { edges })
    }

    /// Build a polygon from edges known to form a valid loop.
    ///
    /// Used by the decomposer for split halves, whose closure follows from
    /// the parent polygon's.
    pub(crate) fn from_edges_unchecked(edges: Vec<Edge>) -> Self {
        debug_assert!(edges.len() >= 3);
        Self { edges }
    }

    /// Number of edges (equals the number of vertices).
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always false; polygons hold at least 3 edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge at index `i`.
    #[inline]
    pub fn edge(&self, i: usize) -> &Edge {
        &self.edges[i]
    }

    /// All edges in traversal order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Index of the first reflex vertex, scanning edges in order.
    ///
    /// The vertex between edge `i` and edge `i + 1` (at `edge[i].end`) is
    /// reflex when the next edge turns toward edge `i`'s outward normal,
    /// i.e. `dot(edge[i].normal, edge[i + 1].direction) > 0`: the boundary
    /// bulges into the region and the interior angle exceeds 180 degrees.
    /// At a convex vertex the next edge turns away from the outward normal
    /// and the dot product is negative.
    pub fn first_reflex_vertex(&self) -> Option<usize> {
        (0..self.edges.len()).find(|&i| {
            let next = (i + 1) % self.edges.len();
            self.edges[i].normal.dot(self.edges[next].direction) > SIGN_EPSILON
        })
    }

    /// A polygon is convex iff it has no reflex vertex.
    #[inline]
    pub fn is_convex(&self) -> bool {
        self.first_reflex_vertex().is_none()
    }

    /// Representative center: the mean of all edge start points.
    ///
    /// For the convex regions produced by decomposition this always lies
    /// inside the polygon; it is the waypoint A* emits for the region.
    pub fn center(&self) -> Point2 {
        let n = self.edges.len() as f32;
        let (sx, sy) = self
            .edges
            .iter()
            .fold((0.0f32, 0.0f32), |(sx, sy), e| (sx + e.start.x, sy + e.start.y));
        Point2::new(sx / n, sy / n)
    }

    /// Twice the signed area (positive for counterclockwise traversal).
    pub fn signed_area_doubled(&self) -> f32 {
        self.edges
            .iter()
            .map(|e| e.start.x * e.end.y - e.end.x * e.start.y)
            .sum()
    }

    /// Even-odd point containment test.
    ///
    /// Points exactly on the boundary are not guaranteed either answer;
    /// callers resolving an agent position to a region should not sit an
    /// agent exactly on a wall.
    pub fn contains_point(&self, point: Point2) -> bool {
        let mut inside = false;
        for e in &self.edges {
            let (a, b) = (e.start, e.end);
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}
