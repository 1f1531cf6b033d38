use log::debug;

use super::{marking::expand_marking, *};
use crate::settings::UndirectedConnectivity;

pub trait Connectivity {
    /// Decides whether the graph is connected.
    ///
    /// - Directed graphs: marks the full closure of descendants and of ascendants of the first
    ///   vertex; the graph is connected if every vertex is reached by either pass. A graph made of a
    ///   single vertex without outgoing edges is **not** connected.
    /// - Undirected graphs: decided by the graph's
    ///   [`UndirectedConnectivity`] rule.
    ///
    /// The empty graph is not connected. All selections are cleared on return.
    fn is_connected(&mut self) -> bool;
}

impl Connectivity for Graph {
    fn is_connected(&mut self) -> bool {
        let Some(first) = self.vertices().next() else {
            return false;
        };
        let n = self.number_of_nodes();

        let connected = if self.is_directed() {
            self.deselect_all();
            expand_marking(self, first, MarkingDirection::Descendants.closure_levels(n));
            expand_marking(self, first, MarkingDirection::Ascendants.closure_levels(n));
            let reached = self.selected_vertices().count() as NumNodes;
            self.deselect_all();

            reached == n && !(n == 1 && self.degree_of(first) == 0)
        } else {
            match self.settings().undirected_connectivity {
                UndirectedConnectivity::EdgeCountHeuristic => self.number_of_edges() / 2 >= n,
                UndirectedConnectivity::Traversal => {
                    self.deselect_all();
                    expand_marking(self, first, MarkingDirection::Descendants.closure_levels(n));
                    let reached = self.selected_vertices().count() as NumNodes;
                    self.deselect_all();
                    reached == n
                }
            }
        };

        debug!("graph {:?} with {n} vertices connected: {connected}", self.name());
        connected
    }
}
