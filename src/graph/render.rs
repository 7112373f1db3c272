use log::debug;

use super::error::DrawError;
use super::model::Graph;
use super::types::{Color, Position};

/// Edge stroke width used by [`DrawStyle::default`].
pub const EDGE_WIDTH: f32 = 2.0;

/// A raster target the graph can be drawn onto.
///
/// This is the boundary to whatever drawing library owns the pixels. Callers
/// only get bounds-checked coordinates.
pub trait Surface {
	/// Width in pixels.
	fn width(&self) -> u32;

	/// Height in pixels.
	fn height(&self) -> u32;

	/// Fills a circle centered on `center`.
	fn fill_circle(&mut self, center: Position, radius: f32, color: Color, anti_alias: bool);

	/// Strokes a straight line from `from` to `to`.
	fn stroke_line(&mut self, from: Position, to: Position, color: Color, width: f32, anti_alias: bool);

	/// Whether `p` addresses a pixel on this surface.
	fn contains(&self, p: Position) -> bool {
		p.x < self.width() && p.y < self.height()
	}
}

/// Rendering knobs for [`Graph::draw_with`].
#[derive(Clone, Debug, PartialEq)]
pub struct DrawStyle {
	/// Edge stroke width in pixels.
	pub edge_width: f32,
	/// Whether shapes are anti-aliased.
	pub anti_alias: bool,
}

impl Default for DrawStyle {
	fn default() -> Self {
		Self {
			edge_width: EDGE_WIDTH,
			anti_alias: true,
		}
	}
}

impl Graph {
	/// Draws the graph with [`DrawStyle::default`].
	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), DrawError> {
		self.draw_with(surface, &DrawStyle::default())
	}

	/// Fills a circle per node, then strokes a line per edge.
	///
	/// Every node position is bounds-checked before the first pixel is
	/// written, so a failed draw leaves the surface untouched. Edge endpoints
	/// are nodes of this graph and need no separate check.
	pub fn draw_with<S: Surface + ?Sized>(
		&self,
		surface: &mut S,
		style: &DrawStyle,
	) -> Result<(), DrawError> {
		self.check_bounds(surface)?;

		for node in self.nodes() {
			surface.fill_circle(
				node.position(),
				node.radius() as f32,
				node.color(),
				style.anti_alias,
			);
		}
		// Graph::new resolved every endpoint, so none are skipped.
		for (edge, (src, dst)) in self
			.edges()
			.iter()
			.filter_map(|edge| Some((edge, self.endpoints(edge)?)))
		{
			surface.stroke_line(
				src.position(),
				dst.position(),
				edge.color(),
				style.edge_width,
				style.anti_alias,
			);
		}

		debug!(
			"drew {} nodes and {} edges on {}x{} surface",
			self.nodes().len(),
			self.edges().len(),
			surface.width(),
			surface.height()
		);
		Ok(())
	}

	// Edge endpoints are graph nodes, so checking nodes covers them too.
	fn check_bounds<S: Surface + ?Sized>(&self, surface: &S) -> Result<(), DrawError> {
		match self.nodes().iter().find(|n| !surface.contains(n.position())) {
			Some(node) => Err(DrawError::OutOfBounds {
				node: node.id().to_string(),
				x: node.position().x,
				y: node.position().y,
				width: surface.width(),
				height: surface.height(),
			}),
			None => Ok(()),
		}
	}
}
