/*!
# Graph Settings

Mode flags of a graph as chosen when the graph is created. All settings are plain values configured
through the *Setter* pattern:

```rust
use graphdraw::prelude::*;

let settings = GraphSettings::new()
    .name("roads")
    .orientation(Orientation::Undirected)
    .weight_mode(WeightMode::Numeric);

assert!(settings.is_undirected());
assert_eq!(settings.simplicity, Simplicity::LoopsAllowed);
```

Note that an undirected graph with loops allowed is a legal combination here; only
[`Graph::set_orientation`](crate::repr::Graph::set_orientation) forces loops to be forbidden.
*/

/// Whether edges have a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Directed,
    Undirected,
}

/// Whether self-loops are permitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Simplicity {
    LoopsForbidden,
    #[default]
    LoopsAllowed,
}

/// How edge labels are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeightMode {
    /// Edges carry no label; weights cannot be edited
    #[default]
    None,
    /// Labels are numbers and usable by the shortest-path engine
    Numeric,
    /// Labels are free text
    Text,
}

/// Rule used by [`Connectivity::is_connected`](crate::algo::Connectivity::is_connected) on
/// undirected graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UndirectedConnectivity {
    /// Connected iff `number_of_edges / 2 >= number_of_nodes`.
    /// This is a structural estimate and can both accept disconnected and reject connected graphs.
    #[default]
    EdgeCountHeuristic,
    /// Connected iff a traversal from the first vertex reaches every vertex
    Traversal,
}

/// Settings of a [`Graph`](crate::repr::Graph)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphSettings {
    pub name: String,
    pub orientation: Orientation,
    pub simplicity: Simplicity,
    pub weight_mode: WeightMode,
    pub undirected_connectivity: UndirectedConnectivity,
}

impl GraphSettings {
    /// Shorthand for default: unnamed, directed, loops allowed, unweighted
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name of the graph
    pub fn name<S>(mut self, name: S) -> Self
    where
        S: Into<String>,
    {
        self.name = name.into();
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn simplicity(mut self, simplicity: Simplicity) -> Self {
        self.simplicity = simplicity;
        self
    }

    pub fn weight_mode(mut self, weight_mode: WeightMode) -> Self {
        self.weight_mode = weight_mode;
        self
    }

    pub fn undirected_connectivity(mut self, rule: UndirectedConnectivity) -> Self {
        self.undirected_connectivity = rule;
        self
    }

    /// Returns *true* if edges have a direction
    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    /// Returns *true* if every edge is mirrored
    pub fn is_undirected(&self) -> bool {
        self.orientation == Orientation::Undirected
    }

    /// Returns *true* if self-loops may be created
    pub fn allows_loops(&self) -> bool {
        self.simplicity == Simplicity::LoopsAllowed
    }

    /// Returns *true* if edge labels may be edited
    pub fn is_weighted(&self) -> bool {
        self.weight_mode != WeightMode::None
    }
}
