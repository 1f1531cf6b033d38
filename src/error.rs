use thiserror::Error;

use crate::node::Node;

/// Failures reported by the graph model and its algorithms.
///
/// None of these carry user-facing wording; presenting them is up to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("vertex {0} does not exist")]
    UnknownVertex(Node),

    #[error("self-loop at vertex {0} is not permitted in a graph without loops")]
    LoopForbidden(Node),

    #[error("weight {label:?} of edge ({from},{to}) is not a number")]
    InvalidWeight { from: Node, to: Node, label: String },

    #[error("negative cycle through vertex {0}; shortest paths are undefined")]
    NegativeCycle(Node),

    #[error("vertex {vertex} needs a color beyond the {palette_size} colors of the palette")]
    PaletteExhausted { vertex: Node, palette_size: usize },

    #[error("operation is only defined on undirected graphs")]
    RequiresUndirected,

    #[error("operation is only defined on numerically weighted graphs")]
    RequiresNumericWeights,
}
