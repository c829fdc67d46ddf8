//! Panel geometry for the floating chat widget.
//!
//! [`GeometryEngine`] holds the pure positioning, sizing and fullscreen
//! rules. [`DragController`] and [`ResizeController`] turn pointer
//! gestures into geometry updates through the engine.

pub mod drag;
pub mod engine;
pub mod resize;

pub use drag::DragController;
pub use engine::{GeometryEngine, PanelGeometry, ShellVariant};
pub use resize::ResizeController;
