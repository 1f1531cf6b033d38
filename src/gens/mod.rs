/*!
# Graph Builders

Deterministic builders that add common substructures (paths, cycles, cliques) between existing
vertices of a [`Graph`]. They back the chain, cycle and clique tools of the
[`GraphEditor`](crate::editor::GraphEditor).
*/

use crate::{error::GraphError, prelude::*};

mod substructures;

pub use substructures::*;
