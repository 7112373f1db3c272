use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::graph::{Color, Position, Surface};

/// A browser 2D canvas context, sized from its backing `<canvas>` element.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
	width: u32,
	height: u32,
}

impl CanvasSurface {
	/// Wraps `ctx`. A detached context reports a 0x0 surface.
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		let (width, height) = ctx
			.canvas()
			.map(|c| (c.width(), c.height()))
			.unwrap_or((0, 0));
		Self { ctx, width, height }
	}

	/// Paints the whole canvas with `color`.
	pub fn clear(&self, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx
			.fill_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
	}
}

// Canvas shapes are always anti-aliased; the flag is ignored here.
impl Surface for CanvasSurface {
	fn width(&self) -> u32 {
		self.width
	}

	fn height(&self) -> u32 {
		self.height
	}

	fn fill_circle(&mut self, center: Position, radius: f32, color: Color, _anti_alias: bool) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(
			f64::from(center.x) + 0.5,
			f64::from(center.y) + 0.5,
			f64::from(radius),
			0.0,
			2.0 * PI,
		);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: Position, to: Position, color: Color, width: f32, _anti_alias: bool) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(f64::from(width));
		self.ctx.begin_path();
		self.ctx
			.move_to(f64::from(from.x) + 0.5, f64::from(from.y) + 0.5);
		self.ctx.line_to(f64::from(to.x) + 0.5, f64::from(to.y) + 0.5);
		self.ctx.stroke();
	}
}
