use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::graph::{Color, Position, Surface};

fn paint(color: Color, anti_alias: bool) -> Paint<'static> {
	let mut paint = Paint::default();
	paint.set_color_rgba8(color.r, color.g, color.b, color.a);
	paint.anti_alias = anti_alias;
	paint
}

// Pixel centers sit at +0.5 in tiny-skia's coordinate space.
fn center(p: Position) -> (f32, f32) {
	(p.x as f32 + 0.5, p.y as f32 + 0.5)
}

impl Surface for Pixmap {
	fn width(&self) -> u32 {
		Pixmap::width(self)
	}

	fn height(&self) -> u32 {
		Pixmap::height(self)
	}

	fn fill_circle(&mut self, c: Position, radius: f32, color: Color, anti_alias: bool) {
		let (x, y) = center(c);
		let Some(path) = PathBuilder::from_circle(x, y, radius) else {
			return;
		};
		self.fill_path(
			&path,
			&paint(color, anti_alias),
			FillRule::Winding,
			Transform::identity(),
			None,
		);
	}

	fn stroke_line(&mut self, from: Position, to: Position, color: Color, width: f32, anti_alias: bool) {
		let mut pb = PathBuilder::new();
		let (x1, y1) = center(from);
		let (x2, y2) = center(to);
		pb.move_to(x1, y1);
		pb.line_to(x2, y2);
		let Some(path) = pb.finish() else {
			return;
		};
		let stroke = Stroke {
			width,
			..Stroke::default()
		};
		self.stroke_path(
			&path,
			&paint(color, anti_alias),
			&stroke,
			Transform::identity(),
			None,
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rgba(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
		let p = pixmap.pixel(x, y).unwrap();
		(p.red(), p.green(), p.blue(), p.alpha())
	}

	#[test]
	fn fills_circle_interior_only() {
		let mut pixmap = Pixmap::new(40, 40).unwrap();
		pixmap.fill_circle(Position::new(20, 20), 5.0, Color::rgb(255, 0, 0), false);
		assert_eq!(rgba(&pixmap, 20, 20), (255, 0, 0, 255));
		assert_eq!(rgba(&pixmap, 2, 2), (0, 0, 0, 0));
	}

	#[test]
	fn strokes_line_between_points() {
		let mut pixmap = Pixmap::new(40, 40).unwrap();
		pixmap.stroke_line(
			Position::new(5, 10),
			Position::new(35, 10),
			Color::rgb(0, 0, 255),
			2.0,
			false,
		);
		assert_eq!(rgba(&pixmap, 20, 10), (0, 0, 255, 255));
		assert_eq!(rgba(&pixmap, 20, 30), (0, 0, 0, 0));
	}
}
