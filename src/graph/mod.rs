//! Graph model: nodes, edges, drawing and per-element computation.

mod compute;
mod error;
mod model;
mod render;
mod types;

pub use compute::{ComputeResults, PlaceholderVision, VisionProtocol};
pub use error::{DrawError, ElementKind, GraphError};
pub use model::Graph;
pub use render::{DrawStyle, EDGE_WIDTH, Surface};
pub use types::{Color, DEFAULT_EDGE_COLOR, Edge, Node, PALETTE, Position};
