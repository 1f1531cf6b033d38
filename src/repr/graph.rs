use itertools::Itertools;
use log::debug;

use super::*;
use crate::{error::GraphError, ops::*, settings::*, utils::compare_labels};

/// Arena-backed multigraph of labelled vertices.
///
/// Vertices live in slots indexed by their [`Node`] handle. Removed vertices leave an empty slot
/// behind so that the handles of all other vertices remain valid. Iteration always follows slot
/// order, which equals insertion order.
///
/// In [`Orientation::Undirected`] graphs every edge `(u, v)` with `u != v` is stored together with
/// its mirror `(v, u)`. All setters that touch an edge apply the change to the mirror as well.
///
/// # Example
/// ```rust
/// use graphdraw::prelude::*;
///
/// let mut g = Graph::new(GraphSettings::new().orientation(Orientation::Undirected));
/// let a = g.add_vertex("a", (0.0, 0.0));
/// let b = g.add_vertex("b", (1.0, 0.0));
///
/// g.try_add_edge(a, b, "").unwrap();
/// assert!(g.has_edge(a, b) && g.has_edge(b, a));
/// assert_eq!(g.number_of_edges(), 2);
///
/// g.try_remove_edge(b, a);
/// assert!(g.is_singleton());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    settings: GraphSettings,
    slots: Vec<Option<Vertex>>,
}

impl Graph {
    /// Creates an empty graph with the given settings
    pub fn new(settings: GraphSettings) -> Self {
        Self {
            settings,
            slots: Vec::new(),
        }
    }

    pub fn settings(&self) -> &GraphSettings {
        &self.settings
    }

    pub fn name(&self) -> &str {
        &self.settings.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.settings.name = name.into();
    }

    pub fn orientation(&self) -> Orientation {
        self.settings.orientation
    }

    pub fn is_directed(&self) -> bool {
        self.settings.is_directed()
    }

    pub fn is_undirected(&self) -> bool {
        self.settings.is_undirected()
    }

    /// Adds a new vertex drawn as an ellipse and returns its handle
    pub fn add_vertex<S, P>(&mut self, label: S, position: P) -> Node
    where
        S: Into<String>,
        P: Into<Position>,
    {
        self.add_vertex_with_shape(label, position, VertexShape::default())
    }

    /// Adds a new vertex and returns its handle
    pub fn add_vertex_with_shape<S, P>(&mut self, label: S, position: P, shape: VertexShape) -> Node
    where
        S: Into<String>,
        P: Into<Position>,
    {
        let u = self.slots.len() as Node;
        assert!(u < INVALID_NODE, "Graph cannot hold more vertices");
        self.slots
            .push(Some(Vertex::new(label.into(), position.into(), shape)));
        u
    }

    /// Removes a vertex together with every edge leaving or entering it.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `u` is not a live vertex.
    pub fn remove_vertex(&mut self, u: Node) -> Result<Vertex, GraphError> {
        if !self.contains_vertex(u) {
            return Err(GraphError::UnknownVertex(u));
        }

        for vertex in self.slots.iter_mut().flatten() {
            vertex.out_edges.retain(|e| e.to != u);
        }

        let vertex = self.slots[u as usize]
            .take()
            .ok_or(GraphError::UnknownVertex(u))?;
        debug!(
            "removed vertex {u} ({:?}) with {} outgoing edges",
            vertex.label,
            vertex.out_edges.len()
        );
        Ok(vertex)
    }

    /// Returns *true* if `u` is the handle of a live vertex
    pub fn contains_vertex(&self, u: Node) -> bool {
        self.try_vertex(u).is_some()
    }

    /// Returns the vertex `u` if it exists
    pub fn try_vertex(&self, u: Node) -> Option<&Vertex> {
        self.slots.get(u as usize).and_then(Option::as_ref)
    }

    /// Returns the vertex `u`.
    /// ** Panics if `u` is not a live vertex **
    pub fn vertex(&self, u: Node) -> &Vertex {
        self.try_vertex(u)
            .unwrap_or_else(|| panic!("vertex {u} does not exist"))
    }

    pub(crate) fn vertex_mut(&mut self, u: Node) -> &mut Vertex {
        self.slots
            .get_mut(u as usize)
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("vertex {u} does not exist"))
    }

    pub(crate) fn try_vertex_mut(&mut self, u: Node) -> Option<&mut Vertex> {
        self.slots.get_mut(u as usize).and_then(Option::as_mut)
    }

    /// Iterates over `(handle, vertex)` for all live vertices in insertion order
    pub fn vertex_records(&self) -> impl Iterator<Item = (Node, &Vertex)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(u, v)| v.as_ref().map(|v| (u as Node, v)))
    }

    pub(crate) fn vertex_records_mut(&mut self) -> impl Iterator<Item = (Node, &mut Vertex)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(u, v)| v.as_mut().map(|v| (u as Node, v)))
    }

    /// Iterates over all edge records in vertex order, then insertion order
    pub fn edge_records(&self) -> impl Iterator<Item = (Edge, &EdgeData)> + '_ {
        self.vertex_records()
            .flat_map(|(u, vertex)| vertex.out_edges.iter().map(move |e| (Edge(u, e.to), e)))
    }

    /// Outgoing edges of `u`.
    /// ** Panics if `u` is not a live vertex **
    pub fn out_edges(&self, u: Node) -> &[EdgeData] {
        self.vertex(u).out_edges()
    }

    /// Returns the edge `(u, v)` if it exists
    pub fn edge(&self, u: Node, v: Node) -> Option<&EdgeData> {
        self.try_vertex(u).and_then(|vertex| vertex.edge_to(v))
    }

    fn edge_mut(&mut self, u: Node, v: Node) -> Option<&mut EdgeData> {
        self.try_vertex_mut(u).and_then(|vertex| vertex.edge_to_mut(v))
    }

    /// Adds the edge `(u, v)` with the given weight label and style.
    /// Returns *true* if the edge already existed, in which case nothing changes.
    ///
    /// The label is dropped in graphs with [`WeightMode::None`].
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if an endpoint does not exist,
    /// - [`GraphError::LoopForbidden`] if `u == v` and loops are forbidden.
    pub fn try_add_styled_edge<S>(
        &mut self,
        u: Node,
        v: Node,
        weight: S,
        style: EdgeStyle,
    ) -> Result<bool, GraphError>
    where
        S: Into<String>,
    {
        for w in [u, v] {
            if !self.contains_vertex(w) {
                return Err(GraphError::UnknownVertex(w));
            }
        }

        if self.has_edge(u, v) {
            return Ok(true);
        }

        if u == v && !self.settings.allows_loops() {
            return Err(GraphError::LoopForbidden(u));
        }

        let weight = if self.settings.is_weighted() {
            weight.into()
        } else {
            String::new()
        };

        if self.is_undirected() && u != v && !self.has_edge(v, u) {
            self.vertex_mut(v)
                .out_edges
                .push(EdgeData::new(u, weight.clone(), style));
        }
        self.vertex_mut(u)
            .out_edges
            .push(EdgeData::new(v, weight, style));

        Ok(false)
    }

    /// Applies `f` to the edge `(u, v)` and, in undirected graphs, to its mirror.
    /// Returns *false* if there is no edge `(u, v)`.
    fn update_edge<F>(&mut self, u: Node, v: Node, mut f: F) -> bool
    where
        F: FnMut(&mut EdgeData),
    {
        let Some(edge) = self.edge_mut(u, v) else {
            return false;
        };
        f(edge);

        if self.is_undirected() && u != v {
            if let Some(mirror) = self.edge_mut(v, u) {
                f(mirror);
            }
        }
        true
    }

    /// Changes the label of `(u, v)` and its mirror.
    /// Returns *false* if the edge does not exist or the graph carries no labels.
    pub fn set_edge_weight<S: Into<String>>(&mut self, u: Node, v: Node, weight: S) -> bool {
        if !self.settings.is_weighted() {
            return false;
        }
        let weight = weight.into();
        self.update_edge(u, v, |e| e.weight.clone_from(&weight))
    }

    /// Changes the style of `(u, v)` and its mirror
    pub fn set_edge_style(&mut self, u: Node, v: Node, style: EdgeStyle) -> bool {
        self.update_edge(u, v, |e| e.style = style)
    }

    /// Changes the selection flag of `(u, v)` and its mirror
    pub fn set_edge_selected(&mut self, u: Node, v: Node, selected: bool) -> bool {
        self.update_edge(u, v, |e| e.selected = selected)
    }

    /// Changes the render cache flag of `(u, v)` and its mirror
    pub fn set_edge_drawn(&mut self, u: Node, v: Node, drawn: bool) -> bool {
        self.update_edge(u, v, |e| e.drawn = drawn)
    }

    /// Clears the render cache flag of every edge
    pub fn reset_drawn_edges(&mut self) {
        for (_, vertex) in self.vertex_records_mut() {
            vertex.out_edges.iter_mut().for_each(|e| e.drawn = false);
        }
    }

    /// Sets the selection flag of `u`. Deselecting a vertex also deselects its outgoing edges
    /// (and their mirrors). Returns *false* if `u` does not exist.
    pub fn set_vertex_selected(&mut self, u: Node, selected: bool) -> bool {
        let Some(vertex) = self.try_vertex_mut(u) else {
            return false;
        };
        vertex.selected = selected;

        if !selected {
            let targets = vertex.out_edges.iter().map(|e| e.to).collect_vec();
            for v in targets {
                self.set_edge_selected(u, v, false);
            }
        }
        true
    }

    /// Deselects every vertex and edge
    pub fn deselect_all(&mut self) {
        for (_, vertex) in self.vertex_records_mut() {
            vertex.selected = false;
            vertex.out_edges.iter_mut().for_each(|e| e.selected = false);
        }
    }

    /// Iterates over all selected vertices
    pub fn selected_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertex_records()
            .filter_map(|(u, vertex)| vertex.selected.then_some(u))
    }

    /// Iterates over all selected edges (mirrors included)
    pub fn selected_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edge_records()
            .filter_map(|(edge, data)| data.selected.then_some(edge))
    }

    pub fn move_vertex<P: Into<Position>>(&mut self, u: Node, position: P) -> bool {
        self.try_vertex_mut(u)
            .map(|vertex| vertex.position = position.into())
            .is_some()
    }

    pub fn set_label<S: Into<String>>(&mut self, u: Node, label: S) -> bool {
        self.try_vertex_mut(u)
            .map(|vertex| vertex.label = label.into())
            .is_some()
    }

    pub fn set_shape(&mut self, u: Node, shape: VertexShape) -> bool {
        self.try_vertex_mut(u)
            .map(|vertex| vertex.shape = shape)
            .is_some()
    }

    /// Switches the orientation of the graph.
    ///
    /// Turning a graph undirected forbids loops (removing existing ones) and completes every edge
    /// with its mirror. Where both directions already exist, the edge visited first (in vertex
    /// order) passes its weight and style on to the other one.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.settings.orientation = orientation;
        if orientation == Orientation::Directed {
            return;
        }

        self.set_simplicity(Simplicity::LoopsForbidden);

        let edges = self.edges().collect_vec();
        for Edge(u, v) in edges {
            let Some(edge) = self.edge(u, v) else {
                continue;
            };
            let (weight, style) = (edge.weight.clone(), edge.style);

            match self.edge_mut(v, u) {
                Some(mirror) => {
                    mirror.weight = weight;
                    mirror.style = style;
                }
                None => self
                    .vertex_mut(v)
                    .out_edges
                    .push(EdgeData::new(u, weight, style)),
            }
        }
        debug!(
            "graph {:?} is now undirected with {} edge records",
            self.settings.name,
            self.number_of_edges()
        );
    }

    /// Changes whether loops are allowed. Forbidding loops removes all existing ones.
    pub fn set_simplicity(&mut self, simplicity: Simplicity) {
        self.settings.simplicity = simplicity;
        if simplicity == Simplicity::LoopsForbidden {
            for (u, vertex) in self.vertex_records_mut() {
                vertex.out_edges.retain(|e| e.to != u);
            }
        }
    }

    /// Changes how edge labels are interpreted. Labels themselves are kept.
    pub fn set_weight_mode(&mut self, weight_mode: WeightMode) {
        self.settings.weight_mode = weight_mode;
    }

    /// Changes the rule used to decide connectivity of undirected graphs
    pub fn set_undirected_connectivity(&mut self, rule: UndirectedConnectivity) {
        self.settings.undirected_connectivity = rule;
    }

    /// Removes all vertices and edges. Handles start at `0` again afterwards.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns the 0/1 adjacency matrix with rows and columns in vertex order
    ///
    /// # Example
    /// ```rust
    /// use graphdraw::prelude::*;
    ///
    /// let mut g = Graph::default();
    /// let a = g.add_vertex("a", (0.0, 0.0));
    /// let b = g.add_vertex("b", (1.0, 0.0));
    /// g.try_add_edge(a, b, "").unwrap();
    ///
    /// assert_eq!(g.adjacency_matrix(), vec![vec![0, 1], vec![0, 0]]);
    /// ```
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let mut index = vec![usize::MAX; self.slots.len()];
        for (i, u) in self.vertices().enumerate() {
            index[u as usize] = i;
        }

        let n = self.len();
        let mut matrix = vec![vec![0u8; n]; n];
        for Edge(u, v) in self.edges() {
            matrix[index[u as usize]][index[v as usize]] = 1;
        }
        matrix
    }

    /// Returns all vertices ordered by label, comparing numerically where both labels are integers
    pub fn vertices_sorted_by_label(&self) -> Vec<Node> {
        self.vertex_records()
            .sorted_by(|(_, a), (_, b)| compare_labels(&a.label, &b.label))
            .map(|(u, _)| u)
            .collect()
    }

    /// Returns the first vertex whose label equals `label`
    pub fn find_by_label(&self, label: &str) -> Option<Node> {
        self.vertex_records()
            .find(|(_, vertex)| vertex.label == label)
            .map(|(u, _)| u)
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.slots.iter().flatten().count() as NumNodes
    }

    fn node_bound(&self) -> NumNodes {
        self.slots.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertex_records().map(|(u, _)| u)
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.slots
            .iter()
            .flatten()
            .map(|vertex| vertex.out_edges.len())
            .sum::<usize>() as NumEdges
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertex(u).out_edges.iter().map(|e| e.to)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.vertex(u).out_degree()
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge(u, v).is_some()
    }
}

impl GraphEdgeEditing for Graph {
    fn try_add_edge(&mut self, u: Node, v: Node, weight: &str) -> Result<bool, GraphError> {
        self.try_add_styled_edge(u, v, weight, EdgeStyle::default())
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        let Some(vertex) = self.try_vertex_mut(u) else {
            return false;
        };
        let Some(pos) = vertex.out_edges.iter().position(|e| e.to == v) else {
            return false;
        };
        vertex.out_edges.remove(pos);

        if self.is_undirected() && u != v {
            if let Some(mirror) = self.try_vertex_mut(v) {
                mirror.out_edges.retain(|e| e.to != u);
            }
        }
        true
    }

    fn remove_edges_at_node(&mut self, u: Node) {
        for (_, vertex) in self.vertex_records_mut() {
            vertex.out_edges.retain(|e| e.to != u);
        }
        if let Some(vertex) = self.try_vertex_mut(u) {
            vertex.out_edges.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected_weighted() -> Graph {
        Graph::new(
            GraphSettings::new()
                .orientation(Orientation::Undirected)
                .simplicity(Simplicity::LoopsForbidden)
                .weight_mode(WeightMode::Numeric),
        )
    }

    fn assert_mirrored(g: &Graph) {
        for (Edge(u, v), data) in g.edge_records() {
            if u == v {
                continue;
            }
            let mirror = g.edge(v, u).expect("mirror missing");
            assert_eq!(mirror.weight, data.weight);
            assert_eq!(mirror.style, data.style);
            assert_eq!(mirror.selected, data.selected);
            assert_eq!(mirror.drawn, data.drawn);
        }
    }

    #[test]
    fn handles_survive_removal() {
        let mut g = Graph::default();
        let nodes = (0..5)
            .map(|i| g.add_vertex(i.to_string(), (i as f64, 0.0)))
            .collect_vec();
        g.try_add_edge(nodes[0], nodes[2], "").unwrap();
        g.try_add_edge(nodes[2], nodes[4], "").unwrap();
        g.try_add_edge(nodes[4], nodes[2], "").unwrap();

        let removed = g.remove_vertex(nodes[2]).unwrap();
        assert_eq!(removed.label(), "2");

        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.vertices().collect_vec(), vec![0, 1, 3, 4]);
        assert_eq!(g.vertex(nodes[4]).label(), "4");
        assert!(g.is_singleton());

        assert_eq!(
            g.remove_vertex(nodes[2]).unwrap_err(),
            GraphError::UnknownVertex(nodes[2])
        );
        assert_eq!(
            g.try_add_edge(nodes[0], nodes[2], ""),
            Err(GraphError::UnknownVertex(nodes[2]))
        );
    }

    #[test]
    fn mirror_invariant_on_edits() {
        let mut g = undirected_weighted();
        let a = g.add_vertex("a", (0.0, 0.0));
        let b = g.add_vertex("b", (1.0, 0.0));
        let c = g.add_vertex("c", (2.0, 0.0));

        assert_eq!(g.try_add_edge(a, b, "4"), Ok(false));
        assert_eq!(g.try_add_edge(b, a, "7"), Ok(true));
        g.try_add_edge(b, c, "1").unwrap();
        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.edge(b, a).unwrap().weight(), "4");

        assert!(g.set_edge_weight(b, a, "9"));
        assert!(g.set_edge_style(a, b, EdgeStyle::DoubleDashed));
        assert!(g.set_edge_selected(c, b, true));
        assert!(g.set_edge_drawn(b, c, true));
        assert_mirrored(&g);
        assert_eq!(g.edge(a, b).unwrap().weight(), "9");

        assert!(g.try_remove_edge(c, b));
        assert!(!g.has_edge(b, c));
        assert!(!g.try_remove_edge(b, c));

        g.remove_vertex(b).unwrap();
        assert!(g.is_singleton());
    }

    #[test]
    fn loops_respect_simplicity() {
        let mut g = undirected_weighted();
        let a = g.add_vertex("a", (0.0, 0.0));
        assert_eq!(g.try_add_edge(a, a, "1"), Err(GraphError::LoopForbidden(a)));

        let mut g = Graph::new(GraphSettings::new().simplicity(Simplicity::LoopsAllowed));
        let a = g.add_vertex("a", (0.0, 0.0));
        let b = g.add_vertex("b", (0.0, 0.0));
        g.try_add_edge(a, a, "").unwrap();
        g.try_add_edge(a, b, "").unwrap();
        assert_eq!(g.number_of_edges(), 2);

        g.set_simplicity(Simplicity::LoopsForbidden);
        assert_eq!(g.edges().collect_vec(), vec![Edge(a, b)]);
    }

    #[test]
    fn unweighted_graph_drops_labels() {
        let mut g = Graph::default();
        let a = g.add_vertex("a", (0.0, 0.0));
        let b = g.add_vertex("b", (0.0, 0.0));
        g.try_add_edge(a, b, "12").unwrap();
        assert_eq!(g.edge(a, b).unwrap().weight(), "");
        assert!(!g.set_edge_weight(a, b, "3"));

        g.set_weight_mode(WeightMode::Text);
        assert!(g.set_edge_weight(a, b, "road"));
        assert_eq!(g.edge(a, b).unwrap().weight(), "road");
    }

    #[test]
    fn deselect_cascades_to_edges() {
        let mut g = undirected_weighted();
        let a = g.add_vertex("a", (0.0, 0.0));
        let b = g.add_vertex("b", (0.0, 0.0));
        g.try_add_edge(a, b, "1").unwrap();

        g.set_vertex_selected(a, true);
        g.set_vertex_selected(b, true);
        g.set_edge_selected(a, b, true);
        assert_eq!(g.selected_edges().count(), 2);

        g.set_vertex_selected(a, false);
        assert_eq!(g.selected_vertices().collect_vec(), vec![b]);
        assert_eq!(g.selected_edges().count(), 0);
        assert_mirrored(&g);

        assert!(!g.set_vertex_selected(17, true));
    }

    #[test]
    fn switching_to_undirected_mirrors_edges() {
        let mut g = Graph::new(GraphSettings::new().weight_mode(WeightMode::Numeric));
        let a = g.add_vertex("a", (0.0, 0.0));
        let b = g.add_vertex("b", (0.0, 0.0));
        let c = g.add_vertex("c", (0.0, 0.0));
        g.try_add_edge(a, a, "5").unwrap();
        g.try_add_edge(a, b, "2").unwrap();
        g.try_add_edge(b, a, "3").unwrap();
        g.try_add_styled_edge(c, b, "8", EdgeStyle::SingleDashed)
            .unwrap();

        g.set_orientation(Orientation::Undirected);

        assert_eq!(g.settings().simplicity, Simplicity::LoopsForbidden);
        assert!(!g.has_edge(a, a));
        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.edge(b, a).unwrap().weight(), "2");
        assert_eq!(g.edge(b, c).unwrap().style(), EdgeStyle::SingleDashed);
        assert_mirrored(&g);

        g.set_orientation(Orientation::Directed);
        assert_eq!(g.number_of_edges(), 4);
        assert!(g.try_remove_edge(a, b));
        assert!(g.has_edge(b, a));
    }

    #[test]
    fn matrix_and_label_order() {
        let mut g = Graph::default();
        let ten = g.add_vertex("10", (0.0, 0.0));
        let two = g.add_vertex("2", (0.0, 0.0));
        let x = g.add_vertex("x", (0.0, 0.0));
        g.try_add_edge(ten, x, "").unwrap();
        g.try_add_edge(x, two, "").unwrap();

        assert_eq!(g.vertices_sorted_by_label(), vec![two, ten, x]);
        assert_eq!(
            g.adjacency_matrix(),
            vec![vec![0, 0, 1], vec![0, 0, 0], vec![0, 1, 0]]
        );

        g.remove_vertex(two).unwrap();
        assert_eq!(g.adjacency_matrix(), vec![vec![0, 1], vec![0, 0]]);
        assert_eq!(g.find_by_label("x"), Some(x));
        assert_eq!(g.find_by_label("2"), None);
    }

    #[test]
    fn remove_edges_at_node_keeps_vertex() {
        let mut g = Graph::default();
        let a = g.add_vertex("a", (0.0, 0.0));
        let b = g.add_vertex("b", (0.0, 0.0));
        let c = g.add_vertex("c", (0.0, 0.0));
        g.try_add_edge(a, b, "").unwrap();
        g.try_add_edge(b, c, "").unwrap();
        g.try_add_edge(c, a, "").unwrap();

        g.remove_edges_at_node(b);
        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.edges().collect_vec(), vec![Edge(c, a)]);
    }
}
