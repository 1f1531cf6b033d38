/*!
# Graph Algorithms

The algorithms of this module run directly on a [`Graph`] and report their results through the
scratch fields of its vertices and edges (selection flags, distances, colors) in addition to their
return values. All algorithms are re-exported at the top level of this module:
```rust
use graphdraw::{algo::*, prelude::*};

let mut g = Graph::new(GraphSettings::new().weight_mode(WeightMode::Numeric));
let a = g.add_vertex("a", (0.0, 0.0));
let b = g.add_vertex("b", (1.0, 0.0));
g.try_add_edge(a, b, "2.5").unwrap();

assert_eq!(g.shortest_path(a, b).unwrap(), Some(vec![a, b]));
assert!(g.vertex(b).is_selected());
```

Every entry point resets the scratch state it relies on before running, so repeated calls on an
unchanged graph yield the same results.
*/

mod coloring;
mod connectivity;
mod marking;
mod shortest_path;

use crate::{error::GraphError, prelude::*};

pub use coloring::*;
pub use connectivity::*;
pub use marking::*;
pub use shortest_path::*;
