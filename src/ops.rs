/*!
# Graph Operations

Basic getters and edits every graph exposes, split into small traits as in the rest of the crate:
- [`GraphNodeOrder`] for vertex counts and iteration,
- [`GraphEdgeOrder`] for edge counts,
- [`AdjacencyList`] for neighborhoods,
- [`GraphEdgeEditing`] for adding and removing edges.

Edges are counted physically: an undirected edge between two distinct vertices counts twice.
*/

use crate::{edge::*, error::GraphError, node::*};

/// Provides getters pertaining to the vertices of a graph
pub trait GraphNodeOrder {
    /// Returns the number of live vertices
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an exclusive upper bound on all vertex handles, removed ones included
    fn node_bound(&self) -> NumNodes;

    /// Returns an iterator over all live vertices in insertion order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns empty bitset with one entry per handle
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.node_bound())
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edges of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edge records of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns an iterator over the out-neighbors of `u` in insertion order.
    /// ** Panics if `u` is not a live vertex **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u` is not a live vertex **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns *true* if the edge `(u, v)` exists
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns an iterator over the in-neighbors of `u`.
    ///
    /// There is no index of incoming edges, so this scans the whole graph.
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(move |&w| self.has_edge(w, u))
    }

    /// Returns an iterator over all edges in vertex order, then insertion order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.neighbors_of(u).map(move |v| Edge(u, v)))
    }

    /// Returns an iterator over the degree of every vertex
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(move |u| self.degree_of(u))
    }

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the number of self-loops
    fn number_of_loops(&self) -> NumNodes {
        self.vertices().filter(|&u| self.has_edge(u, u)).count() as NumNodes
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: AdjacencyList {
    /// Adds the edge `(u, v)` labelled `weight`.
    /// Returns *true* if the edge already existed.
    ///
    /// # Errors
    /// Fails if an endpoint does not exist or the edge is a forbidden loop.
    fn try_add_edge(&mut self, u: Node, v: Node, weight: &str) -> Result<bool, GraphError>;

    /// Removes the edge `(u, v)` and returns *true* if it existed
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;

    /// Removes all edges leaving or entering `u` but keeps `u` itself
    fn remove_edges_at_node(&mut self, u: Node);
}
