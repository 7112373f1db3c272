use thiserror::Error;

/// Which kind of graph element an error or result refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
	/// A [`Node`](super::Node).
	Node,
	/// An [`Edge`](super::Edge).
	Edge,
}

impl std::fmt::Display for ElementKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ElementKind::Node => f.write_str("node"),
			ElementKind::Edge => f.write_str("edge"),
		}
	}
}

/// Errors raised while building or editing a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
	/// An element was given an empty id.
	#[error("{kind} id must not be empty")]
	EmptyId {
		/// Kind of element being built.
		kind: ElementKind,
	},
	/// A node was given a zero radius and could never be drawn.
	#[error("node `{node}` must have a radius greater than zero")]
	ZeroRadius {
		/// Offending node id.
		node: String,
	},
	/// An edge names an endpoint the graph does not contain.
	#[error("edge `{edge}` references unknown node `{node}`")]
	UnknownEndpoint {
		/// Offending edge id.
		edge: String,
		/// Missing endpoint id.
		node: String,
	},
	/// A lookup named a node the graph does not contain.
	#[error("unknown node `{node}`")]
	UnknownNode {
		/// Missing node id.
		node: String,
	},
}

/// Errors raised while drawing a graph onto a surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
	/// A node position lies outside the surface.
	#[error("node `{node}` at ({x}, {y}) lies outside the {width}x{height} surface")]
	OutOfBounds {
		/// Offending node id.
		node: String,
		/// Requested x coordinate.
		x: u32,
		/// Requested y coordinate.
		y: u32,
		/// Surface width.
		width: u32,
		/// Surface height.
		height: u32,
	},
}
