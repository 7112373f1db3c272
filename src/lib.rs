//! A graph of labeled nodes and edges that draws itself onto an image and runs
//! a per-element vision computation.
//!
//! With the `web` feature the crate also ships a Leptos client-side app that
//! draws the sample graph on a `<canvas>`.

#[cfg(feature = "web")]
use leptos::prelude::*;
#[cfg(feature = "web")]
use leptos_meta::*;
#[cfg(feature = "web")]
use leptos_router::components::*;
#[cfg(feature = "web")]
use leptos_router::path;
use log::info;

// Modules
#[cfg(feature = "web")]
mod components;
pub mod graph;
#[cfg(feature = "web")]
mod pages;
pub mod sample;
pub mod surface;

pub use graph::{
	Color, ComputeResults, DrawError, DrawStyle, Edge, ElementKind, Graph, GraphError, Node,
	PlaceholderVision, Position, Surface, VisionProtocol,
};

// Top-Level pages
#[cfg(feature = "web")]
use crate::pages::home::Home;
#[cfg(feature = "web")]
use crate::pages::not_found::NotFound;

/// Initialize logging: `env_logger` (honouring `RUST_LOG`, default `info`) on native targets.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
	let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.try_init();
	info!("Logging initialized");
}

/// Initialize logging and panic hooks for the WASM target.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
	#[cfg(feature = "web")]
	{
		let _ = console_log::init_with_level(log::Level::Debug);
		console_error_panic_hook::set_once();
	}
	info!("Logging initialized");
}

/// Mounts [`App`] on the document body.
#[cfg(feature = "web")]
pub fn mount() {
	leptos::mount::mount_to_body(App);
}

/// An app router which renders the homepage and handles 404's
#[cfg(feature = "web")]
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Vision Graph" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
