use std::collections::HashMap;

use indexmap::IndexMap;
use log::debug;

use super::error::ElementKind;
use super::model::Graph;
use super::render::Surface;
use super::types::{Edge, Node};

/// Adapter between the graph and a vision library.
///
/// Results are opaque strings; the graph only collects them.
pub trait VisionProtocol {
	/// Called once per pass, before any element, with the whole image.
	fn process_image(&self, _image: &dyn Surface) {}

	/// Computes a result for one node.
	fn process_node(&self, node: &Node, image: &dyn Surface) -> String;

	/// Computes a result for one edge.
	fn process_edge(&self, edge: &Edge, image: &dyn Surface) -> String;
}

/// Delegates to [`Node::compute`] and [`Edge::compute`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderVision;

impl VisionProtocol for PlaceholderVision {
	fn process_node(&self, node: &Node, image: &dyn Surface) -> String {
		node.compute(image)
	}

	fn process_edge(&self, edge: &Edge, image: &dyn Surface) -> String {
		edge.compute(image)
	}
}

/// Per-element results of [`Graph::compute`], keyed by id and kept apart by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComputeResults {
	nodes: IndexMap<String, String>,
	edges: IndexMap<String, String>,
}

impl ComputeResults {
	/// Node results in first-seen order. A repeated id keeps the last result.
	pub fn nodes(&self) -> &IndexMap<String, String> {
		&self.nodes
	}

	/// Edge results in first-seen order. A repeated id keeps the last result.
	pub fn edges(&self) -> &IndexMap<String, String> {
		&self.edges
	}

	/// Looks up a result by kind and id.
	pub fn get(&self, kind: ElementKind, id: &str) -> Option<&str> {
		match kind {
			ElementKind::Node => self.nodes.get(id),
			ElementKind::Edge => self.edges.get(id),
		}
		.map(String::as_str)
	}

	/// Total number of entries across both kinds.
	pub fn len(&self) -> usize {
		self.nodes.len() + self.edges.len()
	}

	/// Whether there are no results at all.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.edges.is_empty()
	}

	/// All results, nodes first, then edges.
	pub fn iter(&self) -> impl Iterator<Item = (ElementKind, &str, &str)> {
		let nodes = self
			.nodes
			.iter()
			.map(|(id, r)| (ElementKind::Node, id.as_str(), r.as_str()));
		let edges = self
			.edges
			.iter()
			.map(|(id, r)| (ElementKind::Edge, id.as_str(), r.as_str()));
		nodes.chain(edges)
	}

	/// Flattens into a single id-keyed map. An edge overwrites a node with the same id.
	pub fn merged(&self) -> HashMap<String, String> {
		self.iter()
			.map(|(_, id, r)| (id.to_string(), r.to_string()))
			.collect()
	}

	/// Owned variant of [`ComputeResults::merged`].
	pub fn into_merged(self) -> HashMap<String, String> {
		self.nodes.into_iter().chain(self.edges).collect()
	}
}

impl Graph {
	/// Runs the placeholder computation over every node, then every edge.
	pub fn compute(&self, image: &dyn Surface) -> ComputeResults {
		self.compute_with(&PlaceholderVision, image)
	}

	/// Runs `protocol` over the image, then every node, then every edge.
	pub fn compute_with<P>(&self, protocol: &P, image: &dyn Surface) -> ComputeResults
	where
		P: VisionProtocol + ?Sized,
	{
		protocol.process_image(image);

		let mut results = ComputeResults::default();
		for node in self.nodes() {
			results
				.nodes
				.insert(node.id().to_string(), protocol.process_node(node, image));
		}
		for edge in self.edges() {
			results
				.edges
				.insert(edge.id().to_string(), protocol.process_edge(edge, image));
		}
		debug!(
			"computed {} node and {} edge results",
			results.nodes.len(),
			results.edges.len()
		);
		results
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;
	use crate::graph::{PALETTE, Position};

	struct Blank;

	impl Surface for Blank {
		fn width(&self) -> u32 {
			0
		}
		fn height(&self) -> u32 {
			0
		}
		fn fill_circle(&mut self, _: Position, _: f32, _: crate::graph::Color, _: bool) {}
		fn stroke_line(&mut self, _: Position, _: Position, _: crate::graph::Color, _: f32, _: bool) {}
	}

	struct Sizes;

	impl VisionProtocol for Sizes {
		fn process_node(&self, node: &Node, image: &dyn Surface) -> String {
			format!("{}@{}x{}", node.id(), image.width(), image.height())
		}

		fn process_edge(&self, edge: &Edge, _image: &dyn Surface) -> String {
			format!("{}->{}", edge.source(), edge.destination())
		}
	}

	#[derive(Default)]
	struct Counting {
		images: Cell<usize>,
		elements: Cell<usize>,
	}

	impl VisionProtocol for Counting {
		fn process_image(&self, _image: &dyn Surface) {
			assert_eq!(self.elements.get(), 0, "image hook must run before elements");
			self.images.set(self.images.get() + 1);
		}

		fn process_node(&self, node: &Node, _image: &dyn Surface) -> String {
			self.elements.set(self.elements.get() + 1);
			node.id().to_string()
		}

		fn process_edge(&self, edge: &Edge, _image: &dyn Surface) -> String {
			self.elements.set(self.elements.get() + 1);
			edge.id().to_string()
		}
	}

	fn graph(node_ids: &[&str], edges: &[(&str, &str, &str)]) -> Graph {
		let nodes = node_ids
			.iter()
			.map(|id| Node::new(*id, Position::new(1, 1), 1, PALETTE[0]).unwrap())
			.collect();
		let edges = edges
			.iter()
			.map(|(id, s, d)| Edge::new(*id, *s, *d).unwrap())
			.collect();
		Graph::new(nodes, edges).unwrap()
	}

	#[test]
	fn compute_works_on_an_empty_image() {
		let g = graph(&["x"], &[("y", "x", "x")]);
		let results = g.compute(&Blank);
		assert_eq!(
			results.get(ElementKind::Node, "x"),
			Some("Vision computation result for node x")
		);
		assert_eq!(
			results.get(ElementKind::Edge, "y"),
			Some("Vision computation result for edge y")
		);
	}

	#[test]
	fn colliding_ids_keep_both_kinds() {
		let g = graph(&["1", "2"], &[("1", "1", "2")]);
		let results = g.compute(&Blank);
		assert_eq!(results.len(), 3);
		assert_eq!(
			results.get(ElementKind::Node, "1"),
			Some("Vision computation result for node 1")
		);

		let merged = results.merged();
		assert_eq!(merged.len(), 2);
		assert_eq!(merged["1"], "Vision computation result for edge 1");
		assert_eq!(results.into_merged(), merged);
	}

	#[test]
	fn iter_is_nodes_then_edges() {
		let g = graph(&["b", "a"], &[("E", "a", "b")]);
		let order = g
			.compute(&Blank)
			.iter()
			.map(|(kind, id, _)| (kind, id.to_string()))
			.collect::<Vec<_>>();
		assert_eq!(
			order,
			vec![
				(ElementKind::Node, "b".to_string()),
				(ElementKind::Node, "a".to_string()),
				(ElementKind::Edge, "E".to_string()),
			]
		);
	}

	#[test]
	fn custom_protocol_sees_elements_and_image() {
		let g = graph(&["1", "2"], &[("A", "1", "2")]);
		let results = g.compute_with(&Sizes, &Blank);
		assert_eq!(results.get(ElementKind::Node, "2"), Some("2@0x0"));
		assert_eq!(results.get(ElementKind::Edge, "A"), Some("1->2"));
	}

	#[test]
	fn empty_graph_has_no_results() {
		assert!(Graph::default().compute(&Blank).is_empty());
	}

	#[test]
	fn image_hook_runs_once_per_pass() {
		let g = graph(&["1", "2", "3"], &[("A", "1", "2"), ("B", "2", "3")]);
		let protocol = Counting::default();
		g.compute_with(&protocol, &Blank);
		assert_eq!(protocol.images.get(), 1);
		assert_eq!(protocol.elements.get(), 5);
	}

	#[test]
	fn image_hook_runs_on_empty_graph() {
		let protocol = Counting::default();
		assert!(Graph::default().compute_with(&protocol, &Blank).is_empty());
		assert_eq!(protocol.images.get(), 1);
	}

	#[test]
	fn accepts_trait_object_surface() {
		let g = graph(&["x"], &[]);
		let image: &dyn Surface = &Blank;
		assert_eq!(g.compute(image).len(), 1);
	}
}
