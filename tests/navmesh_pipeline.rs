//! End-to-end navmesh pipeline tests.
//!
//! Exercises the full chain on realistic room shapes:
//! outline -> decompose -> graph -> A* -> waypoints.
//!
//! Run with: `cargo test --test navmesh_pipeline`

use approx::assert_relative_eq;
use polynav::core::{Point2, Polygon};
use polynav::{decompose, find_path, Graph, NavMesh};

// ============================================================================
// Fixtures
// ============================================================================

/// Three-step staircase, two reflex vertices, area 600.
fn staircase() -> Polygon {
    Polygon::from_points(&[
        Point2::new(0.0, 0.0),
        Point2::new(30.0, 0.0),
        Point2::new(30.0, 30.0),
        Point2::new(20.0, 30.0),
        Point2::new(20.0, 20.0),
        Point2::new(10.0, 20.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
    ])
    .unwrap()
}

/// U-shaped corridor, two reflex vertices, area 500.
fn u_corridor() -> Polygon {
    Polygon::from_points(&[
        Point2::new(0.0, 0.0),
        Point2::new(30.0, 0.0),
        Point2::new(30.0, 20.0),
        Point2::new(20.0, 20.0),
        Point2::new(20.0, 10.0),
        Point2::new(10.0, 10.0),
        Point2::new(10.0, 20.0),
        Point2::new(0.0, 20.0),
    ])
    .unwrap()
}

fn area(polys: &[Polygon]) -> f32 {
    polys.iter().map(|p| p.signed_area_doubled()).sum::<f32>() * 0.5
}

// ============================================================================
// Decomposition invariants
// ============================================================================

#[test]
fn test_staircase_decomposes_convex_and_preserves_area() {
    let outline = staircase();
    let parts = decompose(&outline);

    assert!(parts.len() >= 3);
    assert!(parts.iter().all(Polygon::is_convex));
    assert_relative_eq!(area(&parts), 600.0, epsilon = 1e-2);
}

#[test]
fn test_u_corridor_boundary_edges_survive() {
    let outline = u_corridor();
    let parts = decompose(&outline);

    for orig in outline.edges() {
        let count = parts
            .iter()
            .flat_map(|p| p.edges())
            .filter(|e| e.coincides_with(orig))
            .count();
        assert_eq!(count, 1, "each boundary edge must survive exactly once");
    }
}

#[test]
fn test_cut_edges_come_in_complementary_pairs() {
    let outline = staircase();
    let parts = decompose(&outline);

    let cuts: Vec<_> = parts
        .iter()
        .flat_map(|p| p.edges())
        .filter(|e| !outline.edges().iter().any(|orig| e.coincides_with(orig)))
        .collect();

    // Every synthesized cut appears exactly twice: once per half.
    assert!(!cuts.is_empty());
    assert_eq!(cuts.len() % 2, 0);
    for cut in &cuts {
        let twins = cuts.iter().filter(|c| c.coincides_with(cut)).count();
        assert_eq!(twins, 2, "cut edges must pair up across the split");
    }
}

// ============================================================================
// Graph invariants
// ============================================================================

#[test]
fn test_graph_symmetry_on_staircase() {
    let graph = Graph::build(decompose(&staircase()));
    assert!(graph.len() >= 3);

    for node in graph.iter() {
        for link in &node.neighbors {
            let other = graph.node(link.node);
            let back = other
                .neighbors
                .iter()
                .find(|b| b.node == node.id)
                .expect("A listing B requires B listing A");
            assert!(
                node.polygon
                    .edge(link.edge)
                    .coincides_with(other.polygon.edge(back.edge)),
                "linked edge indices must name the same boundary segment"
            );
        }
    }
}

#[test]
fn test_mesh_is_connected() {
    // A single room always decomposes into one connected component:
    // every region reaches every other.
    let graph = Graph::build(decompose(&u_corridor()));
    let target = graph.node(graph.len() - 1).center();
    for id in 0..graph.len() {
        let result = find_path(&graph, id, graph.len() - 1, target);
        assert!(result.found, "region {} cannot reach the last region", id);
    }
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn test_path_through_the_u_corridor() {
    let mut mesh = NavMesh::new();
    mesh.set_boundary(&u_corridor()).unwrap();

    // From deep in the left arm to deep in the right arm: the path must
    // round the notch through the bottom bar.
    let start = Point2::new(5.0, 18.0);
    let target = Point2::new(25.0, 18.0);
    let result = mesh.find_path(start, target).unwrap();

    assert!(result.found);
    assert_eq!(*result.waypoints.last().unwrap(), target);
    // More than a straight hop: at least one intermediate region center.
    assert!(result.waypoints.len() >= 3);

    // Every intermediate waypoint lies inside the mesh.
    let graph = mesh.graph().unwrap();
    for w in &result.waypoints[..result.waypoints.len() - 1] {
        assert!(graph.node_at(*w).is_some(), "waypoint {:?} outside mesh", w);
    }
}

#[test]
fn test_target_in_same_region_needs_no_search() {
    let mut mesh = NavMesh::new();
    mesh.set_boundary(&staircase()).unwrap();

    // Aim for the center of whatever region the agent already stands in.
    let position = Point2::new(2.0, 2.0);
    let region = mesh.graph().unwrap().node_at(position).unwrap();
    let target = mesh.graph().unwrap().node(region).center();

    let result = mesh.find_path(position, target).unwrap();
    assert!(result.found);
    assert_eq!(result.expanded, 0);
    assert_eq!(result.waypoints, vec![target]);
}

#[test]
fn test_expanded_count_is_diagnostic_only() {
    let mut mesh = NavMesh::new();
    mesh.set_boundary(&staircase()).unwrap();
    let graph_len = mesh.graph().unwrap().len();

    let result = mesh
        .find_path(Point2::new(2.0, 2.0), Point2::new(25.0, 28.0))
        .unwrap();
    assert!(result.found);
    assert!(result.expanded <= graph_len);
}

#[test]
fn test_rebuild_after_boundary_change() {
    let mut mesh = NavMesh::new();
    mesh.set_boundary(&staircase()).unwrap();
    let first = mesh.graph().unwrap().len();

    mesh.set_boundary(&u_corridor()).unwrap();
    let second = mesh.graph().unwrap().len();

    // The new graph fully replaces the old one and still answers requests.
    assert!(first >= 3 && second >= 3);
    let result = mesh
        .find_path(Point2::new(5.0, 18.0), Point2::new(25.0, 18.0))
        .unwrap();
    assert!(result.found);
}
