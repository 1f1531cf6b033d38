/*!
Shortest paths on numerically weighted graphs.

Edge weights are read from the edge labels and parsed as `f64` when an edge is relaxed. The search
keeps a binary heap of tentative distances and re-inserts a vertex whenever its distance improves;
outdated heap entries are recognized by comparison with the live distance of the vertex and
skipped. As improved vertices are explored again, negative weights are handled correctly as long as
they do not form a negative cycle, which is reported as an error.
*/

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use log::{debug, trace, warn};

use super::*;
use crate::edge::parse_weight;

/// Totally ordered wrapper of a tentative distance.
///
/// Equal distances are broken by vertex handle in the heap, so the vertex inserted first does not
/// necessarily win; the one with the lower handle does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance(pub f64);

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

pub trait ShortestPath {
    /// Computes a shortest path from `start` to `end` and returns its vertices in order, or `None`
    /// if `start == end` or `end` is unreachable.
    ///
    /// Before searching, all selections and render caches are cleared and every distance is reset
    /// to `+inf`. Afterwards each vertex carries its tentative distance and predecessor, and the
    /// vertices and edges of the path are selected. If `end` is unreachable only `end` is selected.
    /// For `start == end` the graph is left untouched.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if an endpoint does not exist,
    /// - [`GraphError::InvalidWeight`] if a relaxed edge carries a non-numeric label,
    /// - [`GraphError::NegativeCycle`] if a negative cycle is reachable from `start`.
    ///
    /// # Example
    /// ```rust
    /// use graphdraw::{algo::*, prelude::*};
    ///
    /// let mut g = Graph::new(GraphSettings::new().weight_mode(WeightMode::Numeric));
    /// let a = g.add_vertex("A", (0.0, 0.0));
    /// let b = g.add_vertex("B", (1.0, 0.0));
    /// let c = g.add_vertex("C", (2.0, 0.0));
    /// g.try_add_edge(a, b, "2").unwrap();
    /// g.try_add_edge(b, c, "3").unwrap();
    /// g.try_add_edge(a, c, "10").unwrap();
    ///
    /// let path = g.shortest_path(a, c).unwrap().unwrap();
    /// assert_eq!(path, vec![a, b, c]);
    /// assert_eq!(g.path_weight(&path).unwrap(), Some(5.0));
    /// ```
    fn shortest_path(&mut self, start: Node, end: Node) -> Result<Option<Vec<Node>>, GraphError>;

    /// Sums the weights along `path`. Returns `None` if two consecutive vertices of `path` are not
    /// connected by an edge. The empty path and single vertices weigh `0`.
    fn path_weight(&self, path: &[Node]) -> Result<Option<f64>, GraphError>;
}

impl ShortestPath for Graph {
    fn shortest_path(&mut self, start: Node, end: Node) -> Result<Option<Vec<Node>>, GraphError> {
        for u in [start, end] {
            if !self.contains_vertex(u) {
                return Err(GraphError::UnknownVertex(u));
            }
        }
        if start == end {
            return Ok(None);
        }

        debug!("shortest path from {start} to {end}");

        self.deselect_all();
        self.reset_drawn_edges();
        for (_, vertex) in self.vertex_records_mut() {
            vertex.reset_shortest_path();
        }

        relax_from(self, start)?;
        let path = select_path(self, end);

        if path.len() < 2 {
            debug!("no path from {start} to {end}");
            return Ok(None);
        }

        debug!("path {path:?} of weight {}", self.vertex(end).distance());
        Ok(Some(path))
    }

    fn path_weight(&self, path: &[Node]) -> Result<Option<f64>, GraphError> {
        let mut total = 0.0;
        for window in path.windows(2) {
            let (u, v) = (window[0], window[1]);
            let Some(edge) = self.edge(u, v) else {
                return Ok(None);
            };
            total += parse_weight(Edge(u, v), edge.weight())?;
        }
        Ok(Some(total))
    }
}

/// Label-correcting relaxation from `start`; fills in `distance` and `predecessor`
fn relax_from(graph: &mut Graph, start: Node) -> Result<(), GraphError> {
    graph.vertex_mut(start).distance = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((Distance(0.0), start)));

    while let Some(Reverse((Distance(dist_u), u))) = heap.pop() {
        if dist_u > graph.vertex(u).distance() {
            continue;
        }
        trace!("settle {u} at {dist_u}");

        let relaxations = graph
            .out_edges(u)
            .iter()
            .map(|e| {
                let edge = Edge(u, e.to());
                parse_weight(edge, e.weight())
                    .inspect_err(|_| warn!("edge {edge} has non-numeric weight {:?}", e.weight()))
                    .map(|w| (e.to(), w))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (v, weight) in relaxations {
            let total = dist_u + weight;
            if total >= graph.vertex(v).distance() || total.is_nan() {
                continue;
            }

            if weight < 0.0 && is_ancestor(graph, v, u) {
                warn!("negative cycle through {v}");
                return Err(GraphError::NegativeCycle(v));
            }

            let target = graph.vertex_mut(v);
            target.distance = total;
            target.predecessor = Some(u);
            heap.push(Reverse((Distance(total), v)));
        }
    }

    Ok(())
}

/// Returns *true* if `ancestor` lies on the predecessor chain of `u` (`u` included)
fn is_ancestor(graph: &Graph, ancestor: Node, u: Node) -> bool {
    let mut current = Some(u);
    let mut steps = 0;
    while let Some(w) = current {
        if w == ancestor {
            return true;
        }
        steps += 1;
        if steps > graph.len() {
            return false;
        }
        current = graph.vertex(w).predecessor();
    }
    false
}

/// Walks the predecessor chain back from `end`, selecting vertices and the edges between them,
/// and returns the chain in forward order
fn select_path(graph: &mut Graph, end: Node) -> Vec<Node> {
    let mut path = Vec::new();
    let mut current = Some(end);

    while let Some(v) = current {
        path.push(v);
        graph.set_vertex_selected(v, true);

        current = graph.vertex(v).predecessor();
        if let Some(u) = current {
            graph.set_edge_selected(u, v, true);
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{settings::*, testing::*};

    fn numeric(orientation: Orientation) -> GraphSettings {
        GraphSettings::new()
            .orientation(orientation)
            .simplicity(Simplicity::LoopsForbidden)
            .weight_mode(WeightMode::Numeric)
    }

    fn abc() -> (Graph, [Node; 3]) {
        let mut g = Graph::new(numeric(Orientation::Directed));
        let a = g.add_vertex("A", (0.0, 0.0));
        let b = g.add_vertex("B", (1.0, 0.0));
        let c = g.add_vertex("C", (2.0, 0.0));
        g.try_add_edge(a, b, "2").unwrap();
        g.try_add_edge(b, c, "3").unwrap();
        g.try_add_edge(a, c, "10").unwrap();
        (g, [a, b, c])
    }

    #[test]
    fn detour_beats_direct_edge() {
        let (mut g, [a, b, c]) = abc();

        let path = g.shortest_path(a, c).unwrap().unwrap();
        assert_eq!(path, vec![a, b, c]);
        assert_eq!(g.path_weight(&path).unwrap(), Some(5.0));

        assert_eq!(g.vertex(c).distance(), 5.0);
        assert_eq!(g.vertex(c).predecessor(), Some(b));
        assert_eq!(g.selected_vertices().collect_vec(), vec![a, b, c]);
        assert_eq!(g.selected_edges().collect_vec(), vec![Edge(a, b), Edge(b, c)]);
    }

    #[test]
    fn degenerate_requests() {
        let (mut g, [a, b, c]) = abc();

        g.set_vertex_selected(b, true);
        assert_eq!(g.shortest_path(a, a).unwrap(), None);
        assert!(g.vertex(b).is_selected());

        assert_eq!(g.shortest_path(c, a).unwrap(), None);
        assert_eq!(g.selected_vertices().collect_vec(), vec![a]);
        assert_eq!(g.selected_edges().count(), 0);
        assert_eq!(g.vertex(b).distance(), f64::INFINITY);

        assert_eq!(g.shortest_path(a, 9), Err(GraphError::UnknownVertex(9)));
        assert_eq!(g.path_weight(&[c, a]).unwrap(), None);
        assert_eq!(g.path_weight(&[c]).unwrap(), Some(0.0));
    }

    #[test]
    fn invalid_and_negative_weights() {
        let (mut g, [a, b, c]) = abc();
        g.set_edge_weight(b, c, "three");
        assert_eq!(
            g.shortest_path(a, c),
            Err(GraphError::InvalidWeight {
                from: b,
                to: c,
                label: "three".into()
            })
        );

        g.set_edge_weight(b, c, "-4");
        assert_eq!(g.shortest_path(a, c).unwrap(), Some(vec![a, b, c]));
        assert_eq!(g.vertex(c).distance(), -2.0);

        g.try_add_edge(c, b, "1").unwrap();
        assert_eq!(g.shortest_path(a, c), Err(GraphError::NegativeCycle(c)));
    }

    #[test]
    fn undirected_path_selects_mirrors() {
        let mut g = Graph::new(numeric(Orientation::Undirected));
        let a = g.add_vertex("A", (0.0, 0.0));
        let b = g.add_vertex("B", (1.0, 0.0));
        let c = g.add_vertex("C", (2.0, 0.0));
        g.try_add_edge(a, b, "1").unwrap();
        g.try_add_edge(b, c, "1").unwrap();
        g.try_add_edge(a, c, "5").unwrap();

        assert_eq!(g.shortest_path(c, a).unwrap(), Some(vec![c, b, a]));
        assert_eq!(
            g.selected_edges().sorted().collect_vec(),
            vec![Edge(a, b), Edge(b, a), Edge(b, c), Edge(c, b)]
        );
        assert!(!g.edge(a, c).unwrap().is_selected());
        assert!(!g.edge(c, a).unwrap().is_selected());
    }

    #[test]
    fn equal_distances_prefer_lower_handle() {
        let mut g = Graph::new(numeric(Orientation::Directed));
        let s = g.add_vertex("s", (0.0, 0.0));
        let x = g.add_vertex("x", (0.0, 0.0));
        let y = g.add_vertex("y", (0.0, 0.0));
        let t = g.add_vertex("t", (0.0, 0.0));
        g.try_add_edge(s, y, "1").unwrap();
        g.try_add_edge(s, x, "1").unwrap();
        g.try_add_edge(y, t, "1").unwrap();
        g.try_add_edge(x, t, "1").unwrap();

        assert_eq!(g.shortest_path(s, t).unwrap(), Some(vec![s, x, t]));
    }

    #[test]
    fn matches_floyd_warshall() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xd1c5);

        for orientation in [Orientation::Directed, Orientation::Undirected] {
            for n in [2, 5, 10, 25] {
                for _ in 0..10 {
                    let mut g = random_graph(rng, numeric(orientation), n, 3 * n, 20);
                    let dist = floyd_warshall(&g);

                    for _ in 0..10 {
                        let s = rng.random_range(0..n);
                        let t = rng.random_range(0..n);
                        let expected = dist[s as usize][t as usize];

                        match g.shortest_path(s, t).unwrap() {
                            None => assert!(s == t || expected.is_infinite()),
                            Some(path) => {
                                assert_eq!(path.first(), Some(&s));
                                assert_eq!(path.last(), Some(&t));
                                assert_eq!(g.path_weight(&path).unwrap(), Some(expected));

                                let again = g.shortest_path(s, t).unwrap().unwrap();
                                assert_eq!(again, path);
                            }
                        }
                    }
                }
            }
        }
    }
}
