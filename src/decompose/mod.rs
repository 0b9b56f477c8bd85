//! Convex decomposition of a closed polygon boundary.
//!
//! The decomposer turns one possibly non-convex outline into a set of convex
//! polygons whose boundaries exactly cover the input region. It iterates
//! a worklist to a fixed point: any polygon with a reflex vertex is split
//! along a diagonal into two halves, and both halves are re-queued until no
//! reflex vertex remains.
//!
//! A polygon whose reflex vertex admits no valid diagonal is kept in the
//! output as-is (degraded, possibly still non-convex) rather than failing
//! the whole build; the condition is logged at `warn`.

mod split;

pub(crate) use split::{find_split_point, split};

use log::{debug, trace, warn};
use std::collections::VecDeque;

use crate::core::Polygon;

/// Decompose an outline into convex polygons.
///
/// The result covers the input region with no gaps or overlaps; every split
/// introduces one complementary pair of cut edges, which is what the graph
/// builder later matches to link neighboring regions.
///
/// A convex input is returned unchanged as a single polygon.
pub fn decompose(outline: &Polygon) -> Vec<Polygon> {
    let mut worklist: VecDeque<Polygon> = VecDeque::new();
    worklist.push_back(outline.clone());

    let mut done = Vec::new();
    let mut splits = 0usize;
    let mut degraded = 0usize;

    while let Some(poly) = worklist.pop_front() {
        match poly.first_reflex_vertex() {
            None => done.push(poly),
            Some(r) => match find_split_point(&poly, r) {
                Some(s) => {
                    trace!(
                        "[Decompose] splitting {}-gon at reflex vertex {} with partner {}",
                        poly.len(),
                        r,
                        s
                    );
                    let (a, b) = split(&poly, r, s);
                    splits += 1;
                    worklist.push_back(a);
                    worklist.push_back(b);
                }
                None => {
                    // Non-fatal: keep the polygon even though it is still
                    // non-convex, so the rest of the mesh stays usable.
                    warn!(
                        "[Decompose] no valid split for reflex vertex {} of a {}-gon, keeping as-is",
                        r,
                        poly.len()
                    );
                    degraded += 1;
                    done.push(poly);
                }
            },
        }
    }

    debug!(
        "[Decompose] {} polygons after {} splits ({} degraded)",
        done.len(),
        splits,
        degraded
    );
    done
}
