/*!
# Graph Representation

A [`Graph`] stores its vertices in an arena of slots addressed by [`Node`] handles. Every
[`Vertex`] owns its outgoing edges as an ordered list of [`EdgeData`]; the insertion order of that
list is observable as it decides ties in the algorithms.

Besides identity (label, position, shape), vertices and edges carry *scratch* fields written by
the algorithms in [`crate::algo`] and read back by whoever draws the graph:
- `selected` (all algorithms),
- `distance` / `predecessor` (shortest path),
- `color`, `pending_saturation`, `colored_neighbors` (coloring).
*/

use crate::{edge::*, node::*};

mod graph;

pub use graph::*;

/// A vertex record together with its outgoing edges
#[derive(Debug, Clone)]
pub struct Vertex {
    pub(crate) label: String,
    pub(crate) position: Position,
    pub(crate) shape: VertexShape,
    pub(crate) out_edges: Vec<EdgeData>,

    pub(crate) selected: bool,
    pub(crate) distance: f64,
    pub(crate) predecessor: Option<Node>,
    pub(crate) color: Option<usize>,
    pub(crate) pending_saturation: Option<u32>,
    pub(crate) colored_neighbors: u32,
}

impl Vertex {
    pub(crate) fn new(label: String, position: Position, shape: VertexShape) -> Self {
        Self {
            label,
            position,
            shape,
            out_edges: Vec::new(),
            selected: false,
            distance: f64::INFINITY,
            predecessor: None,
            color: None,
            pending_saturation: None,
            colored_neighbors: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn shape(&self) -> VertexShape {
        self.shape
    }

    /// Outgoing edges in insertion order
    pub fn out_edges(&self) -> &[EdgeData] {
        &self.out_edges
    }

    /// Number of outgoing edges (mirrors included)
    pub fn out_degree(&self) -> NumNodes {
        self.out_edges.len() as NumNodes
    }

    /// Returns the edge towards `v` if there is one
    pub fn edge_to(&self, v: Node) -> Option<&EdgeData> {
        self.out_edges.iter().find(|e| e.to == v)
    }

    pub(crate) fn edge_to_mut(&mut self, v: Node) -> Option<&mut EdgeData> {
        self.out_edges.iter_mut().find(|e| e.to == v)
    }

    /// Returns *true* if there is an edge towards `v`
    pub fn has_edge_to(&self, v: Node) -> bool {
        self.edge_to(v).is_some()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Tentative distance of the last shortest-path run (`+inf` if unreached)
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Predecessor on the last shortest-path tree
    pub fn predecessor(&self) -> Option<Node> {
        self.predecessor
    }

    /// Palette index assigned by the last coloring, `None` for the default color
    pub fn color(&self) -> Option<usize> {
        self.color
    }

    /// Saturation used to pick the next vertex to color; `None` once the vertex is colored
    pub fn pending_saturation(&self) -> Option<u32> {
        self.pending_saturation
    }

    /// Number of colored neighbors seen by the last coloring
    pub fn colored_neighbors(&self) -> u32 {
        self.colored_neighbors
    }

    pub(crate) fn reset_shortest_path(&mut self) {
        self.distance = f64::INFINITY;
        self.predecessor = None;
    }
}

/// An edge record owned by the vertex it leaves
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    pub(crate) to: Node,
    pub(crate) weight: String,
    pub(crate) style: EdgeStyle,
    pub(crate) selected: bool,
    pub(crate) drawn: bool,
}

impl EdgeData {
    pub(crate) fn new(to: Node, weight: String, style: EdgeStyle) -> Self {
        Self {
            to,
            weight,
            style,
            selected: false,
            drawn: false,
        }
    }

    /// Vertex the edge arrives at
    pub fn to(&self) -> Node {
        self.to
    }

    /// Weight label; numeric in [`WeightMode::Numeric`](crate::settings::WeightMode::Numeric) graphs
    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn style(&self) -> EdgeStyle {
        self.style
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Render cache flag, used by the drawing layer to paint mirrored pairs once
    pub fn is_drawn(&self) -> bool {
        self.drawn
    }
}
