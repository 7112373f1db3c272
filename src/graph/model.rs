use std::fmt;

use indexmap::IndexMap;

use super::error::GraphError;
use super::types::{Edge, Node, Position};

/// The owning aggregate of nodes and edges.
///
/// Edges refer to nodes by id. A node id maps to the last node pushed with
/// that id, so duplicate ids resolve the same way the compute results do.
#[derive(Clone, Default)]
pub struct Graph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	index: IndexMap<String, usize>,
}

impl Graph {
	/// Builds a graph, checking that every edge endpoint names a known node.
	pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
		let index = nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (node.id().to_string(), i))
			.collect::<IndexMap<_, _>>();

		for edge in &edges {
			for endpoint in [edge.source(), edge.destination()] {
				if !index.contains_key(endpoint) {
					return Err(GraphError::UnknownEndpoint {
						edge: edge.id().to_string(),
						node: endpoint.to_string(),
					});
				}
			}
		}

		Ok(Self {
			nodes,
			edges,
			index,
		})
	}

	/// Nodes in insertion order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Looks up a node by id.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.index.get(id).and_then(|&i| self.nodes.get(i))
	}

	/// Resolves an edge's endpoints against the current node data.
	pub fn endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
		Some((self.node(edge.source())?, self.node(edge.destination())?))
	}

	/// Moves a node. Edges attached to it follow on the next draw.
	pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), GraphError> {
		let node = self
			.index
			.get(id)
			.and_then(|&i| self.nodes.get_mut(i))
			.ok_or_else(|| GraphError::UnknownNode {
				node: id.to_string(),
			})?;
		node.set_position(position);
		Ok(())
	}
}

impl fmt::Display for Graph {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let nodes = self.nodes.iter().map(Node::id).collect::<Vec<_>>();
		let edges = self
			.edges
			.iter()
			.map(|e| format!("{}:{}->{}", e.id(), e.source(), e.destination()))
			.collect::<Vec<_>>();
		write!(
			f,
			"VisionGraph(nodes=[{}], edges=[{}])",
			nodes.join(", "),
			edges.join(", ")
		)
	}
}

impl fmt::Debug for Graph {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Graph")
			.field("nodes", &self.nodes)
			.field("edges", &self.edges)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::PALETTE;

	fn node(id: &str, x: u32, y: u32) -> Node {
		Node::new(id, Position::new(x, y), 4, PALETTE[0]).unwrap()
	}

	#[test]
	fn rejects_dangling_endpoint() {
		let err = Graph::new(
			vec![node("1", 10, 10)],
			vec![Edge::new("A", "1", "9").unwrap()],
		)
		.unwrap_err();
		assert_eq!(
			err,
			GraphError::UnknownEndpoint {
				edge: "A".into(),
				node: "9".into()
			}
		);
	}

	#[test]
	fn endpoints_follow_moved_nodes() {
		let mut graph = Graph::new(
			vec![node("1", 10, 10), node("2", 20, 20)],
			vec![Edge::new("A", "1", "2").unwrap()],
		)
		.unwrap();
		graph.move_node("2", Position::new(30, 5)).unwrap();

		let (src, dst) = graph.endpoints(&graph.edges()[0]).unwrap();
		assert_eq!(src.position(), Position::new(10, 10));
		assert_eq!(dst.position(), Position::new(30, 5));
	}

	#[test]
	fn move_unknown_node_fails() {
		let mut graph = Graph::new(vec![node("1", 1, 1)], vec![]).unwrap();
		assert_eq!(
			graph.move_node("2", Position::default()),
			Err(GraphError::UnknownNode { node: "2".into() })
		);
	}

	#[test]
	fn duplicate_node_ids_resolve_to_last() {
		let graph = Graph::new(vec![node("1", 1, 1), node("1", 2, 2)], vec![]).unwrap();
		assert_eq!(graph.nodes().len(), 2);
		assert_eq!(graph.node("1").unwrap().position(), Position::new(2, 2));
	}

	#[test]
	fn display_summarizes_elements() {
		let graph = Graph::new(
			vec![node("1", 1, 1), node("2", 2, 2)],
			vec![Edge::new("A", "1", "2").unwrap()],
		)
		.unwrap();
		assert_eq!(
			graph.to_string(),
			"VisionGraph(nodes=[1, 2], edges=[A:1->2])"
		);
	}
}
