pub mod vision_graph;
