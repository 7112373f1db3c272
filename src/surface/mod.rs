//! [`Surface`](crate::graph::Surface) implementations for concrete drawing backends.

#[cfg(feature = "web")]
mod canvas;
mod pixmap;

#[cfg(feature = "web")]
pub use canvas::CanvasSurface;
pub use tiny_skia::Pixmap;
