//! Pan state and cell-to-pixel layout: [`CellLayout`] and [`Viewport`].

use wayview_core::{Point, PointerEvent, Rect};

// ---------------------------------------------------------------------------
// CellLayout
// ---------------------------------------------------------------------------

/// Pixel layout of one grid cell: edge length plus the gap between cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellLayout {
    pub cell_size: i32,
    pub cell_inset: i32,
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            cell_size: 12,
            cell_inset: 3,
        }
    }
}

impl CellLayout {
    /// Pixel rectangle of the cell at grid position `p`, shifted by the pan
    /// offset `base`.
    pub fn cell_rect(&self, p: Point, base: Point) -> Rect {
        let pitch = self.cell_size + self.cell_inset;
        Rect::new(
            p.x * pitch + self.cell_inset + base.x,
            p.y * pitch + self.cell_inset + base.y,
            self.cell_size,
            self.cell_size,
        )
    }
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Pan offset for the rendered world, driven by pointer press/drag/release.
///
/// `base` is the live offset; `last_base` is the offset committed at the
/// last release, so each drag session moves relative to where the previous
/// one ended. Outside a drag, `base == last_base`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    base: Point,
    last_base: Point,
    anchor: Point,
}

impl Viewport {
    /// A viewport at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current pan offset in pixels.
    #[inline]
    pub fn offset(&self) -> Point {
        self.base
    }

    /// Record where the pointer went down. The drag begins implicitly with
    /// the next [`on_drag`](Viewport::on_drag).
    pub fn on_press(&mut self, at: Point) {
        self.anchor = at;
    }

    /// Move the offset by however far the pointer travelled from the anchor.
    pub fn on_drag(&mut self, to: Point) {
        self.base = self.last_base + to - self.anchor;
    }

    /// Commit the current offset as the starting point of the next drag.
    pub fn on_release(&mut self) {
        self.last_base = self.base;
    }

    /// Feed a raw pointer event through the pan state machine.
    ///
    /// Returns whether the host should repaint. `Moved` is a no-op;
    /// `Entered`/`Exited` change nothing but still request a repaint.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Pressed(at) => self.on_press(at),
            PointerEvent::Dragged(to) => self.on_drag(to),
            PointerEvent::Released => self.on_release(),
            PointerEvent::Moved(_) => return false,
            PointerEvent::Entered | PointerEvent::Exited => {}
        }
        true
    }
}
