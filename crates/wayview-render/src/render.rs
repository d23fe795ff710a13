//! The [`SearchView`] renderer: tile map + snapshot in, draw commands out.

use std::fmt;

use log::{debug, warn};

use wayview_core::{
    Color, MapError, NodeArena, NodeId, Palette, Point, PointerEvent, Rect, SearchNode, Snapshot,
    Tile, TileMap,
};

use crate::viewport::{CellLayout, Viewport};

// ---------------------------------------------------------------------------
// DrawCmd
// ---------------------------------------------------------------------------

/// One filled rectangle, with an optional outline painted over the fill.
///
/// A draw pass produces these back-to-front: later commands overpaint
/// earlier ones wherever they overlap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawCmd {
    pub rect: Rect,
    pub fill: Color,
    pub outline: Option<Color>,
}

// ---------------------------------------------------------------------------
// RenderError
// ---------------------------------------------------------------------------

/// Errors surfaced by a draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// A referenced node lies outside the map.
    OutOfBounds(Point),
    /// The snapshot references an id the arena never produced.
    UnknownNode(NodeId),
    /// The parent chain from the start node never terminated.
    CyclicPath { visited: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "node at {p} lies outside the map"),
            Self::UnknownNode(id) => write!(f, "snapshot references unknown node {}", id.0),
            Self::CyclicPath { visited } => {
                write!(f, "parent chain still unterminated after {visited} nodes")
            }
        }
    }
}

impl std::error::Error for RenderError {}

// ---------------------------------------------------------------------------
// SearchView
// ---------------------------------------------------------------------------

/// Visualizes the progress of a grid search as an ordered command list.
///
/// The map is fixed at construction. The search process replaces the
/// [`Snapshot`] through [`update`](SearchView::update) after each algorithm
/// step, the host feeds pointer events through
/// [`pointer`](SearchView::pointer), and the host's paint callback calls
/// [`draw`](SearchView::draw) once per frame.
pub struct SearchView {
    map: TileMap,
    snapshot: Snapshot,
    viewport: Viewport,
    layout: CellLayout,
    palette: Palette,
}

impl SearchView {
    /// Create a view over an existing map.
    pub fn from_map(map: TileMap) -> Self {
        Self {
            map,
            snapshot: Snapshot::default(),
            viewport: Viewport::new(),
            layout: CellLayout::default(),
            palette: Palette::default(),
        }
    }

    /// Create a view over a fresh all-empty map of the given dimensions.
    pub fn from_dimensions(rows: i32, cols: i32) -> Result<Self, MapError> {
        Ok(Self::from_map(TileMap::new(rows, cols)?))
    }

    /// Replace the palette (builder).
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the cell layout (builder).
    pub fn with_layout(mut self, layout: CellLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The map being visualized.
    #[inline]
    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// Current pan state.
    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Cell layout in use.
    #[inline]
    pub fn layout(&self) -> CellLayout {
        self.layout
    }

    /// Replace the current snapshot wholesale.
    ///
    /// Returns `true`: the host should schedule a repaint.
    pub fn update(&mut self, snapshot: Snapshot) -> bool {
        debug!(
            "snapshot replaced: {} open, {} closed",
            snapshot.open.len(),
            snapshot.closed.len()
        );
        self.snapshot = snapshot;
        true
    }

    /// Feed a pointer event to the pan state machine.
    ///
    /// Returns whether the host should repaint.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        self.viewport.handle(event)
    }

    /// Produce this frame's draw commands, back-to-front.
    ///
    /// `nodes` is the arena owned by the search process; it is only read,
    /// and only for the duration of this call.
    pub fn draw(&self, nodes: &NodeArena) -> Result<Vec<DrawCmd>, RenderError> {
        let base = self.viewport.offset();
        let mut cmds = Vec::with_capacity(
            self.map.len() + self.snapshot.open.len() + self.snapshot.closed.len(),
        );

        // Base map pass.
        for (p, tile) in self.map.iter() {
            let fill = match tile {
                // The walk pass repaints the start cell once a search is
                // live, so leave it out of the base pass entirely.
                Tile::Start if self.snapshot.start.is_some() => continue,
                Tile::Start => self.palette.step,
                Tile::Wall => self.palette.wall,
                Tile::Gateway => self.palette.destination,
                Tile::Empty => self.palette.background,
            };
            let outline =
                matches!(tile, Tile::Start | Tile::Gateway).then_some(self.palette.outline);
            cmds.push(DrawCmd {
                rect: self.layout.cell_rect(p, base),
                fill,
                outline,
            });
        }

        // No start node means the search has not begun.
        let Some(start) = self.snapshot.start else {
            return Ok(cmds);
        };

        // Open pass, then closed, so closed overpaints shared cells.
        for &id in &self.snapshot.open {
            let node = self.resolve(nodes, id)?;
            cmds.push(DrawCmd {
                rect: self.layout.cell_rect(node.pos, base),
                fill: self.palette.open,
                outline: None,
            });
        }
        for &id in &self.snapshot.closed {
            let node = self.resolve(nodes, id)?;
            cmds.push(DrawCmd {
                rect: self.layout.cell_rect(node.pos, base),
                fill: self.palette.closed,
                outline: None,
            });
        }

        // Walk pass: follow parent links back from the start node. A chain
        // of in-bounds nodes longer than the cell count must revisit a cell.
        let mut step = Some(start);
        let mut visited = 0usize;
        while let Some(id) = step {
            if visited == self.map.len() {
                warn!("parent chain exceeded {visited} cells, aborting walk");
                return Err(RenderError::CyclicPath { visited });
            }
            let node = self.resolve(nodes, id)?;
            cmds.push(DrawCmd {
                rect: self.layout.cell_rect(node.pos, base),
                fill: self.palette.step,
                outline: Some(self.palette.outline),
            });
            step = node.parent;
            visited += 1;
        }

        // Destination pass, painted over everything. Fall back to the map's
        // gateway tile when the snapshot does not carry a destination;
        // resolved fresh on every pass.
        let destination = match self.snapshot.destination {
            Some(id) => Some(self.resolve(nodes, id)?.pos),
            None => self.map.gateway(),
        };
        if let Some(p) = destination {
            cmds.push(DrawCmd {
                rect: self.layout.cell_rect(p, base),
                fill: self.palette.destination,
                outline: Some(self.palette.outline),
            });
        }

        Ok(cmds)
    }

    /// Look up `id` in the arena and bounds-check its position.
    fn resolve<'a>(
        &self,
        nodes: &'a NodeArena,
        id: NodeId,
    ) -> Result<&'a SearchNode, RenderError> {
        let node = nodes.get(id).ok_or(RenderError::UnknownNode(id))?;
        if !self.map.contains(node.pos) {
            return Err(RenderError::OutOfBounds(node.pos));
        }
        Ok(node)
    }
}
