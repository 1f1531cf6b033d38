//! Helpers shared by the test suites of this crate.

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

/// Creates a graph with `n` vertices labelled `0..n` and at most `m_ub` random edges.
/// In numerically weighted graphs every edge gets an integer weight in `0..max_weight`.
pub(crate) fn random_graph<R: Rng>(
    rng: &mut R,
    settings: GraphSettings,
    n: NumNodes,
    m_ub: NumEdges,
    max_weight: u32,
) -> Graph {
    let mut graph = Graph::new(settings);
    let nodes = (0..n)
        .map(|i| graph.add_vertex(i.to_string(), (i as f64, 0.0)))
        .collect_vec();

    for _ in 0..m_ub {
        let u = nodes[rng.random_range(0..n) as usize];
        let v = nodes[rng.random_range(0..n) as usize];
        if u == v && !graph.settings().allows_loops() {
            continue;
        }
        let weight = rng.random_range(0..max_weight.max(1)).to_string();
        graph.try_add_edge(u, v, &weight).unwrap();
    }

    graph
}

/// Numeric weight of an edge; panics on unparsable labels
pub(crate) fn weight_of(graph: &Graph, u: Node, v: Node) -> f64 {
    graph.edge(u, v).unwrap().weight().parse().unwrap()
}

/// All-pairs distances indexed by handle; `+inf` where there is no path
pub(crate) fn floyd_warshall(graph: &Graph) -> Vec<Vec<f64>> {
    let n = graph.node_bound() as usize;
    let mut dist = vec![vec![f64::INFINITY; n]; n];

    for u in graph.vertices() {
        dist[u as usize][u as usize] = 0.0;
    }
    for Edge(u, v) in graph.edges() {
        let w = weight_of(graph, u, v);
        let entry = &mut dist[u as usize][v as usize];
        *entry = entry.min(w);
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = dist[i][k] + dist[k][j];
                if via < dist[i][j] {
                    dist[i][j] = via;
                }
            }
        }
    }
    dist
}

/// Vertices reachable from `start` within `levels` hops, following edges backwards if `reverse`
pub(crate) fn reachable_within(
    graph: &Graph,
    start: Node,
    levels: usize,
    reverse: bool,
) -> Vec<Node> {
    let mut reached = vec![start];
    let mut frontier = vec![start];

    for _ in 0..levels {
        let mut next = Vec::new();
        for &u in &frontier {
            let neighbors = if reverse {
                graph.in_neighbors_of(u).collect_vec()
            } else {
                graph.neighbors_of(u).collect_vec()
            };
            for v in neighbors {
                if !reached.contains(&v) {
                    reached.push(v);
                    next.push(v);
                }
            }
        }
        frontier = next;
    }

    reached.sort_unstable();
    reached
}
