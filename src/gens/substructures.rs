/*!
# Substructure Builders

Adds common motifs between existing vertices of a graph:

- **Paths**
- **Cycles**
- **Cliques**

New edges are labelled `"0"` in numerically weighted graphs and left unlabelled otherwise. Edges
that already exist are kept as they are and self-loops are only created where the graph permits
them. Each builder returns the number of edges it created; in undirected graphs an edge and its
mirror count once.

# Example

```rust
use graphdraw::prelude::*;

let mut g = Graph::default();
let v: Vec<Node> = (0..5).map(|i| g.add_vertex(i.to_string(), (0.0, 0.0))).collect();

g.connect_path(&v[0..3]).unwrap();
g.connect_cycle(&v[2..5]).unwrap();

assert_eq!(
    g.edges().collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use itertools::Itertools;
use log::debug;

use super::*;
use crate::{edge::DEFAULT_NUMERIC_WEIGHT, settings::WeightMode};

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// # Errors
/// All builders fail with [`GraphError::UnknownVertex`] on a handle that does not exist. Edges
/// created before the failure remain.
pub trait GeneratorSubstructures {
    /// Connects each consecutive pair of `nodes` by an edge.
    fn connect_path(&mut self, nodes: &[Node]) -> Result<NumEdges, GraphError>;

    /// Connects `nodes` as a path and additionally the last node back to the first.
    /// A single node is connected to itself if loops are permitted.
    fn connect_cycle(&mut self, nodes: &[Node]) -> Result<NumEdges, GraphError>;

    /// Connects every ordered pair of `nodes`, including each node with itself if loops are
    /// permitted.
    ///
    /// # Example
    /// ```rust
    /// use graphdraw::prelude::*;
    ///
    /// let mut g = Graph::new(GraphSettings::new().orientation(Orientation::Undirected));
    /// let v: Vec<Node> = (0..4).map(|i| g.add_vertex(i.to_string(), (0.0, 0.0))).collect();
    ///
    /// assert_eq!(g.connect_clique(&v).unwrap(), 10);
    /// assert_eq!(g.number_of_loops(), 4);
    /// ```
    fn connect_clique(&mut self, nodes: &[Node]) -> Result<NumEdges, GraphError>;
}

impl Graph {
    /// Label given to edges created by the builders
    fn builder_weight(&self) -> &'static str {
        if self.settings().weight_mode == WeightMode::Numeric {
            DEFAULT_NUMERIC_WEIGHT
        } else {
            ""
        }
    }

    /// Adds `(u, v)` unless it exists or is a forbidden loop; returns *true* if an edge was created
    fn add_builder_edge(&mut self, u: Node, v: Node) -> Result<bool, GraphError> {
        if u == v && !self.settings().allows_loops() {
            return Ok(false);
        }
        let weight = self.builder_weight();
        Ok(!self.try_add_edge(u, v, weight)?)
    }
}

impl GeneratorSubstructures for Graph {
    fn connect_path(&mut self, nodes: &[Node]) -> Result<NumEdges, GraphError> {
        let mut added = 0;
        for (&u, &v) in nodes.iter().tuple_windows() {
            added += self.add_builder_edge(u, v)? as NumEdges;
        }
        debug!("path over {} vertices added {added} edges", nodes.len());
        Ok(added)
    }

    fn connect_cycle(&mut self, nodes: &[Node]) -> Result<NumEdges, GraphError> {
        let (Some(&first), Some(&last)) = (nodes.first(), nodes.last()) else {
            return Ok(0);
        };

        let mut added = self.connect_path(nodes)?;
        added += self.add_builder_edge(last, first)? as NumEdges;
        Ok(added)
    }

    fn connect_clique(&mut self, nodes: &[Node]) -> Result<NumEdges, GraphError> {
        let mut added = 0;
        for (&u, &v) in nodes.iter().cartesian_product(nodes.iter()) {
            added += self.add_builder_edge(u, v)? as NumEdges;
        }
        debug!("clique over {} vertices added {added} edges", nodes.len());
        Ok(added)
    }
}
