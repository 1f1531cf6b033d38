//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw labelled, colored nodes
//! and weighted edges:
//! ```rust
//! use graphdraw::{io::*, prelude::*};
//!
//! let mut g = Graph::new(GraphSettings::new().name("g").weight_mode(WeightMode::Numeric));
//! let a = g.add_vertex("a", (0.0, 0.0));
//! let b = g.add_vertex("b", (1.0, 0.0));
//! g.try_add_edge(a, b, "4").unwrap();
//! g.set_vertex_selected(b, true);
//!
//! let mut out = Vec::new();
//! DotWriter::new()
//!     .highlight(SHORTEST_PATH_HIGHLIGHT)
//!     .try_write_graph(&g, &mut out)
//!     .unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "digraph \"g\" {\n  \
//!        u0 [label=\"a\"];\n  \
//!        u1 [label=\"b\", color=\"#9D87FF\", penwidth=2];\n  \
//!        u0 -> u1 [label=\"4\"];\n\
//!      }\n"
//! );
//! ```
//!
//! Vertices are named by their handle, so removed vertices leave gaps in the numbering. Mirrored
//! edges of undirected graphs are written once.
use std::io::Write;

use super::*;
use crate::{
    algo::{Palette, Rgb},
    repr::Vertex,
};

/// Highlight used by the editor for shortest paths
pub const SHORTEST_PATH_HIGHLIGHT: Rgb = Rgb(157, 135, 255);

/// Highlight used by the editor for markings
pub const MARKING_HIGHLIGHT: Rgb = Rgb(255, 120, 120);

/// Highlight used by the editor for plain selections
pub const SELECTION_HIGHLIGHT: Rgb = Rgb(30, 149, 76);

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Outline color of selected vertices and edges
    highlight: Rgb,
    /// Print edge labels
    show_weights: bool,
    /// Fill colors of colored vertices
    palette: Palette,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            highlight: SELECTION_HIGHLIGHT,
            show_weights: true,
            palette: Palette::default(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color of selected vertices and edges
    pub fn highlight(mut self, color: Rgb) -> Self {
        self.highlight = color;
        self
    }

    /// If *false*, edge labels are omitted
    pub fn show_weights(mut self, show_weights: bool) -> Self {
        self.show_weights = show_weights;
        self
    }

    /// Sets the palette that translates color indices of vertices into fill colors
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    fn node_attributes(&self, vertex: &Vertex) -> String {
        let mut attrs = vec![format!("label=\"{}\"", escape(vertex.label()))];
        let mut styles = Vec::new();

        match vertex.shape() {
            VertexShape::Ellipse => {}
            VertexShape::Rectangle => attrs.push("shape=box".into()),
            VertexShape::RoundRectangle => {
                attrs.push("shape=box".into());
                styles.push("rounded");
            }
            VertexShape::Diamond => attrs.push("shape=diamond".into()),
        }

        let fill = vertex.color().and_then(|c| self.palette.get(c));
        if fill.is_some() {
            styles.push("filled");
        }
        if !styles.is_empty() {
            attrs.push(format!("style=\"{}\"", styles.join(",")));
        }
        if let Some(fill) = fill {
            attrs.push(format!("fillcolor=\"{fill}\""));
        }
        if vertex.is_selected() {
            attrs.push(format!("color=\"{}\", penwidth=2", self.highlight));
        }
        attrs.join(", ")
    }

    fn edge_attributes(&self, edge: &EdgeData) -> String {
        let mut attrs = Vec::new();

        if self.show_weights && !edge.weight().is_empty() {
            attrs.push(format!("label=\"{}\"", escape(edge.weight())));
        }
        match edge.style() {
            EdgeStyle::SinglePlain => {}
            EdgeStyle::SingleDashed => attrs.push("style=dashed".into()),
            EdgeStyle::DoublePlain => attrs.push("style=bold".into()),
            EdgeStyle::DoubleDashed => attrs.push("style=\"bold,dashed\"".into()),
        }
        if edge.is_selected() {
            attrs.push(format!("color=\"{}\"", self.highlight));
        }

        if attrs.is_empty() {
            String::new()
        } else {
            format!(" [{}]", attrs.join(", "))
        }
    }
}

impl GraphWriter<Graph> for DotWriter {
    fn try_write_graph<W>(&self, graph: &Graph, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let (keyword, connector) = if graph.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln!(writer, "{keyword} \"{}\" {{", escape(graph.name()))?;

        for (u, vertex) in graph.vertex_records() {
            writeln!(writer, "  u{u} [{}];", self.node_attributes(vertex))?;
        }

        for (Edge(u, v), data) in graph.edge_records() {
            if graph.is_undirected() && u > v {
                continue;
            }
            writeln!(
                writer,
                "  u{u} {connector} u{v}{};",
                self.edge_attributes(data)
            )?;
        }

        writeln!(writer, "}}")
    }
}

/// Escapes a string for use inside a quoted DOT identifier
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>;
}

impl DotWrite for Graph {
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }

    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        DotWriter::default().try_write_graph_file(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::Coloring, settings::*};

    fn render(writer: &DotWriter, graph: &Graph) -> String {
        let mut out = Vec::new();
        writer.try_write_graph(graph, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn undirected_edges_written_once() {
        let mut g = Graph::new(
            GraphSettings::new()
                .name("tri\"angle")
                .orientation(Orientation::Undirected)
                .simplicity(Simplicity::LoopsForbidden)
                .weight_mode(WeightMode::Text),
        );
        let a = g.add_vertex("a", (0.0, 0.0));
        let b = g.add_vertex_with_shape("b", (0.0, 0.0), VertexShape::Diamond);
        let c = g.add_vertex_with_shape("c", (0.0, 0.0), VertexShape::RoundRectangle);
        g.try_add_edge(b, a, "x").unwrap();
        g.try_add_styled_edge(c, b, "", EdgeStyle::SingleDashed)
            .unwrap();

        assert_eq!(
            render(&DotWriter::new(), &g),
            "graph \"tri\\\"angle\" {\n\
             \x20 u0 [label=\"a\"];\n\
             \x20 u1 [label=\"b\", shape=diamond];\n\
             \x20 u2 [label=\"c\", shape=box, style=\"rounded\"];\n\
             \x20 u0 -- u1 [label=\"x\"];\n\
             \x20 u1 -- u2 [style=dashed];\n\
             }\n"
        );

        assert!(
            render(&DotWriter::new().show_weights(false), &g).contains("  u0 -- u1;\n")
        );
    }

    #[test]
    fn coloring_and_selection() {
        let mut g = Graph::new(GraphSettings::new().orientation(Orientation::Undirected));
        let a = g.add_vertex("a", (0.0, 0.0));
        let b = g.add_vertex("b", (0.0, 0.0));
        g.try_add_edge(a, b, "").unwrap();
        g.color_graph(&Palette::default()).unwrap();
        g.set_edge_selected(b, a, true);

        let dot = render(&DotWriter::new().highlight(MARKING_HIGHLIGHT), &g);
        assert!(dot.contains("u0 [label=\"a\", style=\"filled\", fillcolor=\"#FF5353\"];"));
        assert!(dot.contains("u1 [label=\"b\", style=\"filled\", fillcolor=\"#72FE95\"];"));
        assert!(dot.contains("u0 -- u1 [color=\"#FF7878\"];"));
    }
}
