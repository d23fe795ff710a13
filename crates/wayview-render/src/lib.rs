//! **wayview-render** — turns a tile map plus search snapshot into an
//! ordered list of draw commands, with mouse-drag panning.
//!
//! The host windowing layer owns the actual raster: it feeds raw pointer
//! events into [`SearchView::pointer`], and on each repaint consumes the
//! [`DrawCmd`] sequence from [`SearchView::draw`]. The search process owns
//! the node arena and replaces the snapshot via [`SearchView::update`]
//! after each algorithm step.

pub mod render;
pub mod viewport;

pub use render::{DrawCmd, RenderError, SearchView};
pub use viewport::{CellLayout, Viewport};
