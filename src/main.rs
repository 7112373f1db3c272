//! Draws the sample graph and prints its per-element vision results.
//!
//! Native builds print one `id: result` line per element, nodes first. With
//! the `web` feature on wasm32 the Leptos app is mounted instead.

use std::process::ExitCode;

// Used by the library; the binary only goes through `vision_graph`.
#[cfg(not(target_arch = "wasm32"))]
use env_logger as _;
use indexmap as _;
use log as _;
use thiserror as _;
use tiny_skia as _;
#[cfg(feature = "web")]
use console_error_panic_hook as _;
#[cfg(feature = "web")]
use console_log as _;
#[cfg(feature = "web")]
use leptos as _;
#[cfg(feature = "web")]
use leptos_meta as _;
#[cfg(feature = "web")]
use leptos_router as _;
#[cfg(feature = "web")]
use wasm_bindgen as _;
#[cfg(feature = "web")]
use web_sys as _;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn main() -> ExitCode {
	vision_graph::init_logging();
	vision_graph::mount();
	ExitCode::SUCCESS
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn main() -> ExitCode {
	use vision_graph::sample::{SAMPLE_HEIGHT, SAMPLE_WIDTH, sample_graph};
	use vision_graph::surface::Pixmap;

	vision_graph::init_logging();

	let graph = match sample_graph() {
		Ok(graph) => graph,
		Err(err) => {
			eprintln!("{err}");
			return ExitCode::FAILURE;
		}
	};
	let Some(mut image) = Pixmap::new(SAMPLE_WIDTH, SAMPLE_HEIGHT) else {
		eprintln!("failed to allocate {SAMPLE_WIDTH}x{SAMPLE_HEIGHT} image");
		return ExitCode::FAILURE;
	};
	if let Err(err) = graph.draw(&mut image) {
		eprintln!("{err}");
		return ExitCode::FAILURE;
	}

	for (_, id, result) in graph.compute(&image).iter() {
		println!("{id}: {result}");
	}
	ExitCode::SUCCESS
}
