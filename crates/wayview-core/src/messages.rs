//! Raw pointer events delivered by the host windowing layer.

use crate::geom::Point;

/// A pointer event, in host pixel coordinates.
///
/// The host delivers `Pressed` before the first `Dragged` of a drag
/// session; `Released` ends it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvent {
    /// Primary button went down.
    Pressed(Point),
    /// Pointer moved while the button is held.
    Dragged(Point),
    /// Button released.
    Released,
    /// Pointer moved with no button held.
    Moved(Point),
    /// Pointer entered the render surface.
    Entered,
    /// Pointer left the render surface.
    Exited,
}
