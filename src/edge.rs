use std::fmt::{Debug, Display};

use crate::{error::GraphError, node::Node};

/// An edge is defined by two nodes/endpoints, `Edge(from, to)`.
/// In undirected graphs both `Edge(u, v)` and `Edge(v, u)` are stored physically.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// Stroke an edge is drawn with. Rendering-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeStyle {
    #[default]
    SinglePlain,
    SingleDashed,
    DoublePlain,
    DoubleDashed,
}

/// Weight label given to edges created by builders in a numerically weighted graph
pub const DEFAULT_NUMERIC_WEIGHT: &str = "0";

/// Parses the weight label of `edge` as a floating point number.
///
/// Surrounding whitespace is ignored; `"NaN"` and `"inf"` are accepted as `f64` does.
pub fn parse_weight(edge: Edge, label: &str) -> Result<f64, GraphError> {
    label
        .trim()
        .parse::<f64>()
        .map_err(|_| GraphError::InvalidWeight {
            from: edge.0,
            to: edge.1,
            label: label.to_string(),
        })
}
