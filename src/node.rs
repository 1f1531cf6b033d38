/*!
# Node Representation

Vertices are addressed through `Node = u32` handles. A handle is the slot of the vertex in the
arena of its [`Graph`](crate::repr::Graph) and stays valid until the vertex is removed, even if
other vertices are removed in the meantime.
*/

use stream_bitset::bitset::BitSetImpl;

/// Handle of a vertex inside a [`Graph`](crate::repr::Graph)
pub type Node = u32;

/// Node-Value that is never handed out as a handle
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumNodes = Node;

/// BitSet over node handles. Sized by the number of arena slots, not the number of live vertices.
pub type NodeBitSet = BitSetImpl<Node>;

/// Location of a vertex on the drawing canvas.
/// Opaque to every algorithm of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Position {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Outline a vertex is drawn with. Rendering-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexShape {
    #[default]
    Ellipse,
    Rectangle,
    RoundRectangle,
    Diamond,
}
