use super::error::{ElementKind, GraphError};
use super::render::Surface;

/// Default node colors, cycled by index.
pub const PALETTE: &[Color] = &[
	Color::rgb(0x1f, 0x77, 0xb4),
	Color::rgb(0xff, 0x7f, 0x0e),
	Color::rgb(0x2c, 0xa0, 0x2c),
	Color::rgb(0xd6, 0x27, 0x28),
	Color::rgb(0x94, 0x67, 0xbd),
	Color::rgb(0x8c, 0x56, 0x4b),
	Color::rgb(0xe3, 0x77, 0xc2),
	Color::rgb(0x7f, 0x7f, 0x7f),
	Color::rgb(0xbc, 0xbd, 0x22),
	Color::rgb(0x17, 0xbe, 0xcf),
];

/// Edge color used when none is given.
pub const DEFAULT_EDGE_COLOR: Color = Color::rgb(0x00, 0xff, 0x00);

/// A pixel coordinate on the target image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
	/// Column, from the left edge.
	pub x: u32,
	/// Row, from the top edge.
	pub y: u32,
}

impl Position {
	/// Shorthand constructor.
	pub const fn new(x: u32, y: u32) -> Self {
		Self { x, y }
	}
}

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha channel, 255 is opaque.
	pub a: u8,
}

impl Color {
	/// An opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 255 }
	}

	/// A color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// Palette entry for the `i`-th element, wrapping around.
	pub fn from_palette(i: usize) -> Self {
		PALETTE[i % PALETTE.len()]
	}

	/// CSS `rgba(...)` notation, as used by the browser canvas.
	pub fn to_css(&self) -> String {
		format!(
			"rgba({}, {}, {}, {})",
			self.r,
			self.g,
			self.b,
			f64::from(self.a) / 255.0
		)
	}
}

/// A labeled graph vertex, drawn as a filled circle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	id: String,
	position: Position,
	radius: u32,
	color: Color,
}

impl Node {
	/// Builds a node, rejecting an empty id or a zero radius.
	pub fn new(
		id: impl Into<String>,
		position: Position,
		radius: u32,
		color: Color,
	) -> Result<Self, GraphError> {
		let id = id.into();
		if id.is_empty() {
			return Err(GraphError::EmptyId {
				kind: ElementKind::Node,
			});
		}
		if radius == 0 {
			return Err(GraphError::ZeroRadius { node: id });
		}
		Ok(Self {
			id,
			position,
			radius,
			color,
		})
	}

	/// Node identifier.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Circle center on the image.
	pub fn position(&self) -> Position {
		self.position
	}

	pub(super) fn set_position(&mut self, position: Position) {
		self.position = position;
	}

	/// Circle radius in pixels, always positive.
	pub fn radius(&self) -> u32 {
		self.radius
	}

	/// Fill color.
	pub fn color(&self) -> Color {
		self.color
	}

	/// Placeholder vision computation; the image is never inspected.
	pub fn compute<S: Surface + ?Sized>(&self, _image: &S) -> String {
		format!("Vision computation result for node {}", self.id)
	}
}

/// A labeled connection between two nodes, drawn as a line.
///
/// Endpoints are node ids resolved against the owning [`Graph`](super::Graph),
/// so moving a node moves every edge attached to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	id: String,
	source: String,
	destination: String,
	color: Color,
}

impl Edge {
	/// Builds an edge with [`DEFAULT_EDGE_COLOR`], rejecting an empty id.
	pub fn new(
		id: impl Into<String>,
		source: impl Into<String>,
		destination: impl Into<String>,
	) -> Result<Self, GraphError> {
		let id = id.into();
		if id.is_empty() {
			return Err(GraphError::EmptyId {
				kind: ElementKind::Edge,
			});
		}
		Ok(Self {
			id,
			source: source.into(),
			destination: destination.into(),
			color: DEFAULT_EDGE_COLOR,
		})
	}

	/// Replaces the stroke color.
	pub fn with_color(mut self, color: Color) -> Self {
		self.color = color;
		self
	}

	/// Edge identifier.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Id of the source node.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Id of the destination node.
	pub fn destination(&self) -> &str {
		&self.destination
	}

	/// Stroke color.
	pub fn color(&self) -> Color {
		self.color
	}

	/// Placeholder vision computation; neither the endpoints nor the image are inspected.
	pub fn compute<S: Surface + ?Sized>(&self, _image: &S) -> String {
		format!("Vision computation result for edge {}", self.id)
	}
}
