/*!
Reachability marking.

A marking selects every vertex reachable from a start vertex within a bounded number of rounds,
together with the edges used to reach them. Descendants are found along outgoing edges; ascendants
along incoming edges, which requires scanning the out-lists of all vertices since incoming edges are
not indexed.
*/

use log::{debug, trace};

use super::*;

/// Direction in which a marking expands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkingDirection {
    /// Follow outgoing edges
    Descendants,
    /// Follow incoming edges
    Ascendants,
}

impl MarkingDirection {
    /// Direction encoded by the sign of a level count; `0` counts as descendants
    pub fn of_levels(levels: i32) -> Self {
        if levels >= 0 {
            Self::Descendants
        } else {
            Self::Ascendants
        }
    }

    /// Level count that reaches the full closure of a graph with `n` vertices in this direction
    pub fn closure_levels(self, n: NumNodes) -> i32 {
        let n = n.min(i32::MAX as NumNodes) as i32;
        match self {
            Self::Descendants => n,
            Self::Ascendants => -n,
        }
    }
}

pub trait Marking {
    /// Clears all selections and marks the vertices reachable from `start` within `|levels|`
    /// rounds. Non-negative `levels` follow outgoing edges, negative `levels` incoming ones.
    /// With `levels == 0` only `start` is selected.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `start` does not exist.
    fn mark(&mut self, start: Node, levels: i32) -> Result<(), GraphError>;

    /// Same as [`Marking::mark`] but keeps existing selections, so that the result is the union
    /// of the previous marking and the new one.
    fn extend_marking(&mut self, start: Node, levels: i32) -> Result<(), GraphError>;

    /// Returns *true* if marking from `start` with `levels` rounds already selects every edge of
    /// the full closure in `direction`, i.e. adding rounds in `direction` changes nothing.
    ///
    /// If the sign of `levels` disagrees with `direction`, the marking counts as complete only if
    /// it selects no edge at all. A graph consisting of a single vertex marked with `levels == 0`
    /// is always complete.
    ///
    /// Leaves the graph marked as by `mark(start, levels)`.
    fn is_marking_complete(
        &mut self,
        start: Node,
        levels: i32,
        direction: MarkingDirection,
    ) -> Result<bool, GraphError>;
}

impl Marking for Graph {
    fn mark(&mut self, start: Node, levels: i32) -> Result<(), GraphError> {
        if !self.contains_vertex(start) {
            return Err(GraphError::UnknownVertex(start));
        }
        self.deselect_all();
        expand_marking(self, start, levels);
        Ok(())
    }

    fn extend_marking(&mut self, start: Node, levels: i32) -> Result<(), GraphError> {
        if !self.contains_vertex(start) {
            return Err(GraphError::UnknownVertex(start));
        }
        expand_marking(self, start, levels);
        Ok(())
    }

    fn is_marking_complete(
        &mut self,
        start: Node,
        levels: i32,
        direction: MarkingDirection,
    ) -> Result<bool, GraphError> {
        self.mark(start, levels)?;
        let marked = count_marked_edges(self);

        let agrees = match direction {
            MarkingDirection::Descendants => levels >= 0,
            MarkingDirection::Ascendants => levels <= 0,
        };

        let complete = if agrees {
            self.mark(start, direction.closure_levels(self.number_of_nodes()))?;
            let closure = count_marked_edges(self);
            self.mark(start, levels)?;
            marked == closure
        } else {
            marked == 0
        };

        Ok(complete || (levels == 0 && self.number_of_nodes() == 1))
    }
}

/// Number of selected edges leaving selected vertices
fn count_marked_edges(graph: &Graph) -> usize {
    graph
        .vertex_records()
        .filter(|(_, vertex)| vertex.is_selected())
        .map(|(_, vertex)| vertex.out_edges().iter().filter(|e| e.is_selected()).count())
        .sum()
}

/// Level-wise expansion from `start` without clearing previous selections.
/// ** Panics if `start` is not a live vertex **
pub(crate) fn expand_marking(graph: &mut Graph, start: Node, levels: i32) {
    let direction = MarkingDirection::of_levels(levels);
    let mut remaining = levels.unsigned_abs();

    debug!("marking {direction:?} of vertex {start} for {remaining} levels");

    let mut frontier = vec![start];
    let mut in_next = graph.vertex_bitset_unset();

    loop {
        let mut next = Vec::new();
        in_next.clear_all();

        for &u in &frontier {
            if remaining > 0 {
                let reached: Vec<Edge> = match direction {
                    MarkingDirection::Descendants => {
                        graph.neighbors_of(u).map(|v| Edge(u, v)).collect()
                    }
                    MarkingDirection::Ascendants => {
                        graph.in_neighbors_of(u).map(|w| Edge(w, u)).collect()
                    }
                };

                for edge in reached {
                    let Edge(from, to) = edge;
                    let discovered = if direction == MarkingDirection::Descendants {
                        to
                    } else {
                        from
                    };
                    if !in_next.set_bit(discovered) {
                        next.push(discovered);
                    }
                    graph.set_edge_selected(from, to, true);
                }
            }
            graph.set_vertex_selected(u, true);
        }

        trace!(
            "marking level {remaining}: {} vertices, next frontier {next:?}",
            frontier.len()
        );

        if remaining == 0 || next.is_empty() {
            break;
        }
        frontier = next;
        remaining -= 1;
    }
}
