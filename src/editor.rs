/*!
# Editor

[`GraphEditor`] drives a [`Graph`] the way an interactive drawing tool does: exactly one tool
([`Mode`]) is active at a time, and clicks on vertices are interpreted by the active tool. Some tools
act immediately when activated (coloring, builders, clearing), others collect vertex clicks
(edge creation, shortest path, marking).

```rust
use graphdraw::{editor::*, prelude::*};

let settings = GraphSettings::new().weight_mode(WeightMode::Numeric);
let mut editor = GraphEditor::new(Graph::new(settings));

editor.activate(Mode::CreateVertex).unwrap();
let a = editor.place_vertex((0.0, 0.0)).unwrap();
let b = editor.place_vertex((1.0, 0.0)).unwrap();
assert_eq!(editor.graph().vertex(b).label(), "2");

editor.activate(Mode::Chain).unwrap();
editor.activate(Mode::ShortestPath).unwrap();
editor.click_vertex(a).unwrap();
editor.click_vertex(b).unwrap();
assert_eq!(editor.last_path(), Some(&[a, b][..]));
```
*/

use itertools::Itertools;
use log::{debug, info};

use crate::{algo::*, prelude::*};

/// Tools of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Clicks on the canvas place new vertices
    CreateVertex,
    /// Two vertex clicks create an edge between them
    CreateEdge,
    /// Vertices are dragged around by the caller
    Move,
    /// Clicked vertices are removed
    Delete,
    /// Clears the render cache of all edges; deactivates itself
    ResetEdges,
    /// Connects all vertices pairwise on activation
    Clique,
    /// Shortest path between the two most recently clicked vertices
    ShortestPath,
    /// Colors the graph on activation
    Coloring,
    /// Marks descendants or ascendants of the clicked vertex
    Marking,
    /// Removes all vertices; deactivates itself
    Clear,
    /// Connects all vertices in insertion order on activation
    Chain,
    /// Connects all vertices in insertion order and closes the cycle on activation
    Cycle,
}

/// Mode state machine over a single [`Graph`]
#[derive(Debug, Clone)]
pub struct GraphEditor {
    graph: Graph,
    mode: Option<Mode>,
    pending: Vec<Node>,
    marking_levels: i32,
    chromatic_number: Option<usize>,
    last_path: Option<Vec<Node>>,
    palette: Palette,
    vertex_counter: u64,
    vertex_shape: VertexShape,
    edge_style: EdgeStyle,
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new(Graph::default())
    }
}

impl GraphEditor {
    /// Creates an editor without an active tool. New vertices are labelled after the number of
    /// vertices already present.
    pub fn new(graph: Graph) -> Self {
        let vertex_counter = graph.number_of_nodes() as u64;
        Self {
            graph,
            mode: None,
            pending: Vec::new(),
            marking_levels: 1,
            chromatic_number: None,
            last_path: None,
            palette: Palette::default(),
            vertex_counter,
            vertex_shape: VertexShape::default(),
            edge_style: EdgeStyle::default(),
        }
    }

    /// Sets the palette used by [`Mode::Coloring`]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the shape of vertices placed from now on
    pub fn vertex_shape(mut self, shape: VertexShape) -> Self {
        self.vertex_shape = shape;
        self
    }

    /// Sets the style of edges created from now on
    pub fn edge_style(mut self, style: EdgeStyle) -> Self {
        self.edge_style = style;
        self
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Mutable access for edits outside of the tools (renaming, styling, ...).
    /// Removing vertices this way may leave stale handles in the pending selection.
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Currently active tool
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Vertices clicked under the active tool, oldest first
    pub fn pending(&self) -> &[Node] {
        &self.pending
    }

    pub fn marking_levels(&self) -> i32 {
        self.marking_levels
    }

    /// Result of the last coloring of this editor
    pub fn chromatic_number(&self) -> Option<usize> {
        self.chromatic_number
    }

    /// Result of the last shortest path run of this editor
    pub fn last_path(&self) -> Option<&[Node]> {
        self.last_path.as_deref()
    }

    /// Switches to `mode` and runs its immediate effect.
    ///
    /// The previous tool is deactivated, dropping all selections, unless `mode` is
    /// [`Mode::Marking`] and exactly one vertex is pending; that vertex is marked right away.
    ///
    /// # Errors
    /// Propagates failures of the immediate effect, e.g. [`GraphError::RequiresUndirected`] when
    /// coloring a directed graph. No tool is active afterwards.
    pub fn activate(&mut self, mode: Mode) -> Result<(), GraphError> {
        if mode != Mode::Marking || self.pending.len() != 1 {
            self.deactivate();
        } else {
            self.mode = None;
        }
        debug!("activate {mode:?} with pending {:?}", self.pending);

        let all = self.graph.vertices().collect_vec();
        match mode {
            Mode::ResetEdges => {
                self.graph.reset_drawn_edges();
                return Ok(());
            }
            Mode::Clear => {
                self.clear();
                return Ok(());
            }
            Mode::Coloring => {
                self.run_coloring()?;
            }
            Mode::Clique => {
                self.graph.connect_clique(&all)?;
            }
            Mode::Chain => {
                self.graph.connect_path(&all)?;
            }
            Mode::Cycle => {
                self.graph.connect_cycle(&all)?;
            }
            Mode::Marking => {
                if let [start] = self.pending[..] {
                    self.run_marking(start)?;
                }
            }
            Mode::CreateVertex
            | Mode::CreateEdge
            | Mode::Move
            | Mode::Delete
            | Mode::ShortestPath => {}
        }

        self.mode = Some(mode);
        Ok(())
    }

    /// Leaves the active tool and drops all selections
    pub fn deactivate(&mut self) {
        self.mode = None;
        self.drop_pending();
    }

    fn drop_pending(&mut self) {
        self.graph.deselect_all();
        self.pending.clear();
    }

    /// Places a new vertex if [`Mode::CreateVertex`] is active and returns its handle
    pub fn place_vertex<P: Into<Position>>(&mut self, position: P) -> Option<Node> {
        if self.mode != Some(Mode::CreateVertex) {
            return None;
        }
        self.vertex_counter += 1;
        Some(self.graph.add_vertex_with_shape(
            self.vertex_counter.to_string(),
            position,
            self.vertex_shape,
        ))
    }

    /// Interprets a click on vertex `u` according to the active tool
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `u` does not exist and propagates failures of the
    /// algorithm the click triggers.
    pub fn click_vertex(&mut self, u: Node) -> Result<(), GraphError> {
        if !self.graph.contains_vertex(u) {
            return Err(GraphError::UnknownVertex(u));
        }

        match self.mode {
            Some(Mode::CreateEdge) => self.click_create_edge(u)?,
            Some(Mode::Delete) => {
                self.graph.remove_vertex(u)?;
                self.pending.retain(|&w| w != u);
                if self.last_path.as_ref().is_some_and(|path| path.contains(&u)) {
                    self.last_path = None;
                }
            }
            Some(Mode::ShortestPath) => self.click_shortest_path(u)?,
            Some(Mode::Marking) => {
                self.pending = vec![u];
                self.run_marking(u)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn click_create_edge(&mut self, u: Node) -> Result<(), GraphError> {
        self.graph.set_vertex_selected(u, true);
        self.pending.push(u);

        if let [from, to] = self.pending[..] {
            if from != to || self.graph.settings().allows_loops() {
                let weight = if self.graph.settings().weight_mode == WeightMode::Numeric {
                    DEFAULT_NUMERIC_WEIGHT
                } else {
                    ""
                };
                self.graph
                    .try_add_styled_edge(from, to, weight, self.edge_style)?;
            }
            self.drop_pending();
        }
        Ok(())
    }

    fn click_shortest_path(&mut self, u: Node) -> Result<(), GraphError> {
        self.graph.set_vertex_selected(u, true);
        if self.pending != [u] {
            self.pending.push(u);
        }
        if self.pending.len() > 2 {
            self.pending.remove(0);
        }

        if let [start, end] = self.pending[..] {
            let result = self.run_shortest_path(start, end);
            if !matches!(result, Ok(Some(_))) {
                self.drop_pending();
                self.graph.set_vertex_selected(end, true);
                self.pending.push(end);
            }
            result?;
        }
        Ok(())
    }

    /// Drops the pending selection of the edge creation and shortest path tools
    pub fn click_background(&mut self) {
        if matches!(self.mode, Some(Mode::CreateEdge | Mode::ShortestPath)) {
            self.drop_pending();
        }
    }

    /// Sets the number of levels used by [`Mode::Marking`]; negative values mark ascendants.
    /// An active marking is redrawn.
    pub fn set_marking_levels(&mut self, levels: i32) -> Result<(), GraphError> {
        self.marking_levels = levels;
        if self.mode == Some(Mode::Marking) {
            if let [start] = self.pending[..] {
                self.run_marking(start)?;
            }
        }
        Ok(())
    }

    /// Runs the shortest path search and remembers its result. A failed run forgets the previous
    /// path.
    ///
    /// # Errors
    /// Fails with [`GraphError::RequiresNumericWeights`] before touching the graph unless its
    /// weight mode is [`WeightMode::Numeric`], and propagates failures of the search.
    pub fn run_shortest_path(
        &mut self,
        start: Node,
        end: Node,
    ) -> Result<Option<Vec<Node>>, GraphError> {
        self.last_path = None;
        if self.graph.settings().weight_mode != WeightMode::Numeric {
            return Err(GraphError::RequiresNumericWeights);
        }
        let path = self.graph.shortest_path(start, end)?;
        self.last_path.clone_from(&path);
        Ok(path)
    }

    /// Colors the graph and remembers the number of colors used
    ///
    /// # Errors
    /// Fails with [`GraphError::RequiresUndirected`] on directed graphs.
    pub fn run_coloring(&mut self) -> Result<usize, GraphError> {
        if self.graph.is_directed() {
            return Err(GraphError::RequiresUndirected);
        }
        let colors = self.graph.color_graph(&self.palette)?;
        info!("graph {:?} colored with {colors} colors", self.graph.name());
        self.chromatic_number = Some(colors);
        Ok(colors)
    }

    /// Marks from `start` with the current number of levels
    pub fn run_marking(&mut self, start: Node) -> Result<(), GraphError> {
        self.graph.mark(start, self.marking_levels)
    }

    /// Decides connectivity of the graph. The visible selection is left as it was.
    pub fn is_connected(&mut self) -> bool {
        let vertices = self.graph.selected_vertices().collect_vec();
        let edges = self.graph.selected_edges().collect_vec();

        let connected = self.graph.is_connected();

        for u in vertices {
            self.graph.set_vertex_selected(u, true);
        }
        for Edge(u, v) in edges {
            self.graph.set_edge_selected(u, v, true);
        }
        connected
    }

    /// Returns *true* if more levels in `direction` would not extend the active marking.
    /// Without an active marking there is nothing to extend.
    pub fn is_marking_complete(&mut self, direction: MarkingDirection) -> Result<bool, GraphError> {
        match (self.mode, &self.pending[..]) {
            (Some(Mode::Marking), &[start]) => {
                self.graph
                    .is_marking_complete(start, self.marking_levels, direction)
            }
            _ => Ok(true),
        }
    }

    /// Removes all vertices; labels of new vertices start at `1` again
    pub fn clear(&mut self) {
        self.graph.clear();
        self.pending.clear();
        self.last_path = None;
        self.chromatic_number = None;
        self.vertex_counter = 0;
    }
}
