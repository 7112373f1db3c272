//! The fixed demo graph: three nodes in a row, two edges chaining them.

use crate::graph::{Color, Edge, Graph, GraphError, Node, Position};

/// Width of the surface the sample graph is laid out for.
pub const SAMPLE_WIDTH: u32 = 320;
/// Height of the surface the sample graph is laid out for.
pub const SAMPLE_HEIGHT: u32 = 240;

const NODE_RADIUS: u32 = 10;

/// Nodes `1`, `2`, `3` and edges `A: 1->2`, `B: 2->3`.
pub fn sample_graph() -> Result<Graph, GraphError> {
	let positions = [(80, 120), (160, 60), (240, 120)];
	let nodes = positions
		.iter()
		.enumerate()
		.map(|(i, &(x, y))| {
			Node::new(
				(i + 1).to_string(),
				Position::new(x, y),
				NODE_RADIUS,
				Color::from_palette(i),
			)
		})
		.collect::<Result<Vec<_>, _>>()?;
	let edges = vec![Edge::new("A", "1", "2")?, Edge::new("B", "2", "3")?];
	Graph::new(nodes, edges)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_fits_its_canvas() {
		let graph = sample_graph().unwrap();
		assert_eq!(graph.nodes().len(), 3);
		assert_eq!(graph.edges().len(), 2);
		assert!(graph.nodes().iter().all(|n| {
			n.position().x + n.radius() < SAMPLE_WIDTH && n.position().y + n.radius() < SAMPLE_HEIGHT
		}));
	}
}
