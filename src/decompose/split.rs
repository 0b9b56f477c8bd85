//! Split-point search and polygon splitting.
//!
//! A split cuts a polygon along a diagonal from the reflex vertex
//! `edge[r].end` to some partner vertex `edge[s].end`. The partner search
//! starts roughly opposite the reflex vertex to favor balanced halves and
//! walks outward from there.

use crate::core::math::{segments_intersect, SIGN_EPSILON};
use crate::core::{Edge, Polygon};

/// Find a valid split partner for the reflex vertex at index `r`.
///
/// Candidates are vertex indices starting at `r + n/2` and walking outward
/// (offsets 0, +1, -1, +2, -2, ...), skipping `r` itself and its two
/// immediate neighbors, whose diagonals would be degenerate or coincide
/// with existing edges. Returns the first candidate whose diagonal is valid,
/// or `None` when the polygon admits no split at `r`.
pub(crate) fn find_split_point(poly: &Polygon, r: usize) -> Option<usize> {
    let n = poly.len();
    let opposite = (r + n / 2) % n;

    for k in 0..n {
        // 0, +1, -1, +2, -2, ... around the opposite vertex.
        let delta = if k % 2 == 1 { (k as isize + 1) / 2 } else { -(k as isize / 2) };
        let s = (opposite as isize + delta).rem_euclid(n as isize) as usize;

        if s == r || s == (r + 1) % n || s == (r + n - 1) % n {
            continue;
        }
        if diagonal_is_valid(poly, r, s) {
            return Some(s);
        }
    }
    None
}

/// Check whether the diagonal `edge[r].end -> edge[s].end` is a valid cut.
///
/// Three conditions, per the standard diagonal rule:
/// 1. The diagonal must leave the reflex vertex on the interior side of
///    edge `r` (sign test against `edge[r].normal`), so the half keeping
///    edge `r` does not re-create the reflex.
/// 2. It must not touch any boundary edge other than the four sharing one
///    of its endpoints.
/// 3. Its midpoint must lie strictly inside the polygon (rules out
///    diagonals that leave the region through a notch).
fn diagonal_is_valid(poly: &Polygon, r: usize, s: usize) -> bool {
    let n = poly.len();
    let from = poly.edge(r).end;
    let to = poly.edge(s).end;
    let dir = (to - from).normalized();

    // A reflex vertex has the next edge turning toward edge r's outward
    // normal; the cut must turn away from it instead.
    if poly.edge(r).normal.dot(dir) >= -SIGN_EPSILON {
        return false;
    }

    // Edges r and r+1 share `from`; edges s and s+1 share `to`.
    let adjacent = [r, (r + 1) % n, s, (s + 1) % n];
    for j in 0..n {
        if adjacent.contains(&j) {
            continue;
        }
        let e = poly.edge(j);
        if segments_intersect(from, to, e.start, e.end) {
            return false;
        }
    }

    poly.contains_point(from.midpoint(to))
}

/// Split `poly` along the diagonal `(r, s)` into two sub-polygons.
///
/// The half that keeps edge `r` runs `edge[s].end -> ... -> edge[r].end`
/// along the parent boundary and closes with the cut
/// `edge[r].end -> edge[s].end`; the other half takes the remaining edges
/// and the reversed cut. Both halves stay counterclockwise, so the cut
/// normals are synthesized the same way as outline edges.
pub(crate) fn split(poly: &Polygon, r: usize, s: usize) -> (Polygon, Polygon) {
    let n = poly.len();
    let cut = Edge::between(poly.edge(r).end, poly.edge(s).end);

    // Half A: edges s+1 ..= r (cyclic), closed by the cut.
    let mut a = collect_cyclic(poly, (s + 1) % n, r);
    a.push(cut);

    // Half B: edges r+1 ..= s (cyclic), closed by the reversed cut.
    let mut b = collect_cyclic(poly, (r + 1) % n, s);
    b.push(cut.reversed());

    (
        Polygon::from_edges_unchecked(a),
        Polygon::from_edges_unchecked(b),
    )
}

/// Collect edges from index `from` through index `to`, inclusive, wrapping
/// around the end of the edge list.
fn collect_cyclic(poly: &Polygon, from: usize, to: usize) -> Vec<Edge> {
    let n = poly.len();
    let count = (to + n - from) % n + 1;
    (0..count).map(|k| *poly.edge((from + k) % n)).collect()
}
