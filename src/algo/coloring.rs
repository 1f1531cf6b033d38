/*!
Greedy vertex coloring following Brélaz (DSATUR).

Vertices are colored one at a time. The next vertex is the uncolored one whose *pending saturation*
is maximal, ties going to the vertex that comes first in insertion order. Initially the pending
saturation of a vertex is its out-degree; once a neighbor gets colored it becomes the number of
colored neighbors seen so far. Each vertex receives the first palette color not used by any of its
out-neighbors.

The result is only a proper coloring on undirected graphs, where every edge is mirrored.
*/

use std::fmt::{Display, Formatter};

use fxhash::FxHashSet;
use log::{debug, warn};
use smallvec::SmallVec;

use super::*;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Builds a color from a `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl Display for Rgb {
    /// Formats as `#RRGGBB`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

const DEFAULT_COLORS: [u32; 20] = [
    0xFF5353, 0x72FE95, 0x62A9FF, 0xFFF06A, 0xFF9C42, 0xA095EE, 0x92FEF9, 0xC87C5B, 0x74BAAC,
    0x95FF4F, 0xFF9A9A, 0xD79AFF, 0x9AD9FF, 0x98DFA1, 0xFFF29A, 0xFFCA9A, 0xD1FF9A, 0xD7FFFF,
    0xC3C6FF, 0xFF9AD2,
];

/// Ordered, fixed list of colors available to [`Coloring::color_graph`].
/// Lower indices are preferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Default for Palette {
    /// The 20 colors used by the editor
    fn default() -> Self {
        Self::new(DEFAULT_COLORS.into_iter().map(Rgb::from_hex))
    }
}

impl Palette {
    pub fn new<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = Rgb>,
    {
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the color with index `index` if there is one
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }
}

pub trait Coloring {
    /// Colors all vertices greedily and returns the number of distinct colors used, an upper bound
    /// on the chromatic number.
    ///
    /// Afterwards [`Vertex::color`] holds the palette index of every vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::PaletteExhausted`] if a vertex sees every palette color among its
    /// neighbors. Vertices colored up to that point keep their colors.
    ///
    /// # Example
    /// ```rust
    /// use graphdraw::{algo::*, prelude::*};
    ///
    /// let mut g = Graph::new(GraphSettings::new().orientation(Orientation::Undirected));
    /// let nodes: Vec<_> = ["a", "b", "c"].iter().map(|l| g.add_vertex(*l, (0.0, 0.0))).collect();
    /// g.connect_clique(&nodes).unwrap();
    ///
    /// assert_eq!(g.color_graph(&Palette::default()).unwrap(), 3);
    /// ```
    fn color_graph(&mut self, palette: &Palette) -> Result<usize, GraphError>;
}

impl Coloring for Graph {
    fn color_graph(&mut self, palette: &Palette) -> Result<usize, GraphError> {
        debug!(
            "coloring {} vertices with a palette of {}",
            self.number_of_nodes(),
            palette.len()
        );

        for (_, vertex) in self.vertex_records_mut() {
            vertex.pending_saturation = Some(vertex.out_degree());
            vertex.colored_neighbors = 0;
            vertex.color = None;
        }

        for _ in 0..self.number_of_nodes() {
            let Some(u) = most_saturated(self) else {
                break;
            };

            let color = first_free_color(self, u, palette)?;
            let vertex = self.vertex_mut(u);
            vertex.pending_saturation = None;
            vertex.color = Some(color);

            let targets: SmallVec<[Node; 8]> = self.neighbors_of(u).collect();
            for v in targets {
                let neighbor = self.vertex_mut(v);
                neighbor.colored_neighbors += 1;
                if neighbor.pending_saturation.is_some() {
                    neighbor.pending_saturation = Some(neighbor.colored_neighbors);
                }
            }
        }

        let used: FxHashSet<usize> = self
            .vertex_records()
            .filter_map(|(_, vertex)| vertex.color())
            .collect();

        debug!("coloring uses {} colors", used.len());
        Ok(used.len())
    }
}

/// First uncolored vertex of maximal pending saturation
fn most_saturated(graph: &Graph) -> Option<Node> {
    let mut best: Option<(Node, u32)> = None;
    for (u, vertex) in graph.vertex_records() {
        let Some(saturation) = vertex.pending_saturation() else {
            continue;
        };
        if best.is_none_or(|(_, s)| saturation > s) {
            best = Some((u, saturation));
        }
    }
    best.map(|(u, _)| u)
}

/// Lowest palette index not used by an out-neighbor of `u`
fn first_free_color(graph: &Graph, u: Node, palette: &Palette) -> Result<usize, GraphError> {
    let taken: SmallVec<[usize; 8]> = graph
        .neighbors_of(u)
        .filter_map(|v| graph.vertex(v).color())
        .collect();

    (0..palette.len())
        .find(|c| !taken.contains(c))
        .ok_or_else(|| {
            warn!("vertex {u} exhausts the palette of {} colors", palette.len());
            GraphError::PaletteExhausted {
                vertex: u,
                palette_size: palette.len(),
            }
        })
}
