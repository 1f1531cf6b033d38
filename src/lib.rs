/*!
`graphdraw` is the algorithm engine of an interactive graph drawing tool. Graphs are
- **labelled** : Every vertex carries a text label, a position and a shape
- **weighted** : Edges carry a label that is read as a weight when the graph is numerically weighted
- **directed or undirected** : Undirected edges are stored as a pair of mirrored directed edges

# Representation

We represent **vertices** as `u32` handles into an arena of slots. Removing a vertex empties its
slot, so the handles of all other vertices stay valid.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; the per-edge data (weight label,
style, selection) lives in [`EdgeData`](crate::repr::EdgeData) records owned by the source vertex.

### Directed vs Undirected

- In a **directed** graph, `Edge(u, v)` and `Edge(v, u)` are distinct.
- In an **undirected** graph, adding `Edge(u, v)` also stores `Edge(v, u)` and every change to
  one of them is applied to the other.

The orientation, whether loops are allowed and how edge labels are read are collected in
[`GraphSettings`](crate::settings::GraphSettings) and can be switched on a live graph.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, settings, basic graph operations, the graph
  itself and the substructure builders,
- [`algo`] includes the algorithm traits implemented on graphs: marking, connectivity, shortest
  paths and coloring,
- [`editor`] includes the tool state machine that maps clicks to graph edits and algorithm runs,
- [`io`] includes a writer for the DOT language,
- [`gens`] includes builders that connect existing vertices as paths, cycles or cliques.

Algorithms report their results through the selection flags and colors of the graph so that a
renderer can draw them directly.

In most use-cases, `use graphdraw::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod editor;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod settings;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `graphdraw::prelude` includes definitions for nodes and edges, settings, errors, all basic graph
/// operation traits, the graph representation and the substructure builders.
pub mod prelude {
    pub use super::{edge::*, error::*, gens::*, node::*, ops::*, repr::*, settings::*};
}
