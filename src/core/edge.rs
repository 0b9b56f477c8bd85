//! Directed boundary edges.

use serde::{Deserialize, Serialize};

use super::math::points_coincide;
use super::{Point2, Vec2};

/// A directed boundary segment with an outward-facing normal.
///
/// Edges are immutable once created. `direction` is always the normalized
/// `end - start`; `normal` points out of the enclosed region. New edges are
/// synthesized only when a polygon is split (the two closing cuts).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Segment start point.
    pub start: Point2,
    /// Segment end point.
    pub end: Point2,
    /// Outward-facing unit normal.
    pub normal: Vec2,
    /// Unit direction from start to end.
    pub direction: Vec2,
}

impl Edge {
    /// Create an edge with an explicitly supplied outward normal.
    ///
    /// The direction is derived from the endpoints; the caller is
    /// responsible for the normal actually pointing out of the region.
    pub fn new(start: Point2, end: Point2, normal: Vec2) -> Self {
        Self {
            start,
            end,
            normal: normal.normalized(),
            direction: (end - start).normalized(),
        }
    }

    /// Create an edge between two points, synthesizing the outward normal
    /// for a counterclockwise traversal (direction rotated clockwise).
    ///
    /// Used for outlines built from vertex lists and for split cuts, both of
    /// which keep their polygons counterclockwise.
    pub fn between(start: Point2, end: Point2) -> Self {
        let direction = (end - start).normalized();
        Self {
            start,
            end,
            normal: direction.perp_cw(),
            direction,
        }
    }

    /// The same segment traversed in the opposite direction, with the
    /// normal flipped to stay outward for the other side.
    pub fn reversed(&self) -> Edge {
        Edge {
            start: self.end,
            end: self.start,
            normal: -self.normal,
            direction: -self.direction,
        }
    }

    /// Midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Point2 {
        self.start.midpoint(self.end)
    }

    /// Segment length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Check whether this edge and `other` cover the same boundary segment,
    /// in either orientation.
    ///
    /// This is the shared-edge test the graph builder uses to link two
    /// regions that resulted from the same split.
    pub fn coincides_with(&self, other: &Edge) -> bool {
        (points_coincide(self.start, other.start) && points_coincide(self.end, other.end))
            || (points_coincide(self.start, other.end) && points_coincide(self.end, other.start))
    }
}
