//! Geometric predicates shared by the decomposer and graph builder.
//!
//! All predicates operate on planar coordinates. Comparisons are
//! epsilon-based: outlines come from world geometry and split cuts are
//! synthesized from the same endpoint values, so a small tolerance absorbs
//! accumulated float error without changing topology.

use super::Point2;

/// Tolerance for point coincidence, in world units.
pub const POINT_EPSILON: f32 = 1e-4;

/// Tolerance for direction sign tests on normalized vectors.
pub const SIGN_EPSILON: f32 = 1e-6;

/// Check if two points coincide within [`POINT_EPSILON`].
#[inline]
pub fn points_coincide(a: Point2, b: Point2) -> bool {
    a.distance_squared(b) <= POINT_EPSILON * POINT_EPSILON
}

/// Orientation of point `c` relative to the directed line `a -> b`.
///
/// Returns the z-component of `(b - a) x (c - a)`: positive when `c` is to
/// the left (counterclockwise), negative to the right, near zero when
/// collinear.
#[inline]
pub fn orient(a: Point2, b: Point2, c: Point2) -> f32 {
    (b - a).cross(c - a)
}

/// Check if point `c` lies within the axis-aligned bounding box of segment
/// `a -> b`, expanded by [`POINT_EPSILON`]. Only meaningful when the three
/// points are collinear.
#[inline]
fn on_segment(a: Point2, b: Point2, c: Point2) -> bool {
    c.x <= a.x.max(b.x) + POINT_EPSILON
        && c.x >= a.x.min(b.x) - POINT_EPSILON
        && c.y <= a.y.max(b.y) + POINT_EPSILON
        && c.y >= a.y.min(b.y) - POINT_EPSILON
}

/// Check if segment `p1 -> p2` intersects segment `p3 -> p4`.
///
/// Touching counts as intersecting: the decomposer uses this against edges
/// that are known not to share an endpoint with the candidate diagonal, so
/// any contact at all invalidates the diagonal.
pub fn segments_intersect(p1: Point2, p2: Point2, p3: Point2, p4: Point2) -> bool {
    let d1 = orient(p3, p4, p1);
    let d2 = orient(p3, p4, p2);
    let d3 = orient(p1, p2, p3);
    let d4 = orient(p1, p2, p4);

    // Proper crossing: endpoints of each segment straddle the other.
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    // Collinear or endpoint contact.
    (d1.abs() <= SIGN_EPSILON && on_segment(p3, p4, p1))
        || (d2.abs() <= SIGN_EPSILON && on_segment(p3, p4, p2))
        || (d3.abs() <= SIGN_EPSILON && on_segment(p1, p2, p3))
        || (d4.abs() <= SIGN_EPSILON && on_segment(p1, p2, p4))
}
