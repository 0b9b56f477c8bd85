//! Navmesh adjacency graph.
//!
//! Each convex polygon from the decomposer becomes one [`GraphNode`];
//! two nodes are neighbors when they share a boundary segment (the
//! complementary cut edges a split leaves behind, endpoint-coincident in
//! opposite orientation). The graph is rebuilt wholesale on every boundary
//! change and never mutated afterwards.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Point2, Polygon};

/// Node identity. Ids are sequential indices into [`Graph::nodes`];
/// lookups go by id, never by reference.
pub type NodeId = usize;

/// A neighbor link: the adjacent node and the local index of the shared
/// edge on this node's own boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Id of the adjacent node.
    pub node: NodeId,
    /// Index of the shared edge in this node's boundary.
    pub edge: usize,
}

/// One convex region of the navmesh.
///
/// Created once by [`Graph::build`]; neighbor links are appended during
/// construction and the node is immutable afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique sequential id.
    pub id: NodeId,
    /// The region boundary.
    pub polygon: Polygon,
    /// Adjacent regions, in ascending (node id, edge index) discovery order.
    pub neighbors: Vec<Neighbor>,
}

impl GraphNode {
    /// Representative center of the region (mean of boundary vertices).
    #[inline]
    pub fn center(&self) -> Point2 {
        self.polygon.center()
    }
}

/// The navmesh: all region nodes with their neighbor links.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<GraphNode>,
}

impl Graph {
    /// Build a graph from decomposed polygons.
    ///
    /// Every unordered pair of nodes is compared edge-by-edge; edges whose
    /// endpoints coincide in either orientation link the pair as mutual
    /// neighbors, each side recording its own edge index. The comparison
    /// loop runs in ascending node id then ascending edge index, which
    /// fixes the neighbor list order and makes builds reproducible.
    ///
    /// Quadratic in node count times edges per node; fine for the low
    /// hundreds of regions a single boundary decomposes into.
    pub fn build(polygons: Vec<Polygon>) -> Graph {
        let mut nodes: Vec<GraphNode> = polygons
            .into_iter()
            .enumerate()
            .map(|(id, polygon)| GraphNode {
                id,
                polygon,
                neighbors: Vec::new(),
            })
            .collect();

        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                for ei in 0..nodes[i].polygon.len() {
                    for ej in 0..nodes[j].polygon.len() {
                        let shared = nodes[i]
                            .polygon
                            .edge(ei)
                            .coincides_with(nodes[j].polygon.edge(ej));
                        if shared {
                            nodes[i].neighbors.push(Neighbor { node: j, edge: ei });
                            nodes[j].neighbors.push(Neighbor { node: i, edge: ej });
                        }
                    }
                }
            }
        }

        debug!(
            "[Graph] built {} nodes, {} links",
            nodes.len(),
            nodes.iter().map(|n| n.neighbors.len()).sum::<usize>()
        );
        Graph { nodes }
    }

    /// Node by id.
    #[inline]
    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id]
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    /// Find the node whose region contains `point`, if any.
    ///
    /// Linear scan with a point-in-polygon test per node; used to resolve
    /// an agent position or target to its enclosing region before search.
    pub fn node_at(&self, point: Point2) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| n.polygon.contains_point(point))
            .map(|n| n.id)
    }
}
