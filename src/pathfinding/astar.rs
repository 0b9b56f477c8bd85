//! A* search over the navmesh graph.

use log::{debug, warn};
use std::collections::HashMap;

use crate::core::Point2;
use crate::graph::{Graph, NodeId};

use super::open_list::OpenList;

/// Result of a pathfinding request.
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Ordered waypoints from the start region toward the target. The last
    /// waypoint is always the literal target point; when no route exists
    /// the list degenerates to just the target.
    pub waypoints: Vec<Point2>,
    /// Number of nodes expanded during the search. Diagnostic only.
    pub expanded: usize,
    /// Whether the destination region was actually reached.
    pub found: bool,
}

impl PathResult {
    fn not_found(target: Point2, expanded: usize) -> Self {
        Self {
            waypoints: vec![target],
            expanded,
            found: false,
        }
    }

    /// Total polyline length of the waypoints.
    pub fn length(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}

/// Find a shortest route from `start` to `destination`, measured in region
/// transitions (uniform cost 1 per traversed edge).
///
/// Waypoints are the centers of the traversed regions, in order, with the
/// literal `target` point appended in place of the destination's center.
/// `target` also anchors the heuristic: each frontier entry is estimated by
/// the Euclidean distance from its region's center to `target`.
///
/// Never errors: an unreachable destination yields `waypoints == [target]`
/// with `found == false` and `expanded` equal to the number of nodes in
/// the start's reachable component. `start == destination` short-circuits
/// to `([target], 0)` without searching.
pub fn find_path(graph: &Graph, start: NodeId, destination: NodeId, target: Point2) -> PathResult {
    if start == destination {
        return PathResult {
            waypoints: vec![target],
            expanded: 0,
            found: true,
        };
    }

    let mut open = OpenList::new();
    // Finalized nodes, mapped to the parent they were reached from. Doubles
    // as the closed set and the parent chain for reconstruction.
    let mut closed: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    // Best cumulative cost seen per node, live entries included.
    let mut best_g: HashMap<NodeId, f32> = HashMap::new();

    // Each node is expanded at most once, so the node count bounds the
    // loop; treat exceeding it as a malformed graph.
    let cap = graph.len();
    let mut expanded = 0usize;

    open.push(start, None, 0.0, target.distance(graph.node(start).center()));
    best_g.insert(start, 0.0);

    while let Some(entry) = open.pop() {
        if closed.contains_key(&entry.node) {
            // Stale duplicate superseded by a cheaper entry already popped.
            continue;
        }
        closed.insert(entry.node, entry.parent);

        if entry.node == destination {
            let result = reconstruct(graph, &closed, destination, target, expanded);
            debug!(
                "[AStar] found path of {} waypoints, expanded {} of {} nodes",
                result.waypoints.len(),
                expanded,
                graph.len()
            );
            return result;
        }

        if expanded >= cap {
            warn!("[AStar] expansion cap {} hit, giving up", cap);
            return PathResult::not_found(target, expanded);
        }

        for link in &graph.node(entry.node).neighbors {
            if closed.contains_key(&link.node) {
                continue;
            }
            let g = entry.g + 1.0;
            let current = best_g.get(&link.node).copied().unwrap_or(f32::INFINITY);
            if g < current {
                best_g.insert(link.node, g);
                let h = target.distance(graph.node(link.node).center());
                open.push(link.node, Some(entry.node), g, h);
            }
        }

        expanded += 1;
    }

    debug!("[AStar] no route after expanding {} nodes", expanded);
    PathResult::not_found(target, expanded)
}

/// Walk the finalized parent chain back from the destination, emit the
/// centers of every region except the destination's, and terminate the
/// path with the literal target point.
fn reconstruct(
    graph: &Graph,
    closed: &HashMap<NodeId, Option<NodeId>>,
    destination: NodeId,
    target: Point2,
    expanded: usize,
) -> PathResult {
    let mut ids = Vec::new();
    let mut cursor = Some(destination);
    while let Some(id) = cursor {
        ids.push(id);
        cursor = closed.get(&id).copied().flatten();
    }
    ids.reverse(); // start -> destination

    let mut waypoints: Vec<Point2> = ids[..ids.len() - 1]
        .iter()
        .map(|&id| graph.node(id).center())
        .collect();
    waypoints.push(target);

    PathResult {
        waypoints,
        expanded,
        found: true,
    }
}
