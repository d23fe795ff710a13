//! **wayview-core** — shared primitives for the wayview search visualizer.
//!
//! This crate provides the types the renderer and the search process agree
//! on: geometry, tile maps, search nodes and snapshots, pointer events,
//! colours, and small randomization/buffer helpers.

pub mod buffers;
pub mod geom;
pub mod map;
pub mod messages;
pub mod node;
pub mod rng;
pub mod style;

pub use geom::{Point, Rect};
pub use map::{MapError, Tile, TileMap};
pub use messages::PointerEvent;
pub use node::{NodeArena, NodeId, SearchNode, Snapshot};
pub use rng::RangedRng;
pub use style::{Color, Palette};
