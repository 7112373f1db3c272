use leptos::prelude::*;
use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::graph::{Color, Graph};
use crate::sample::{SAMPLE_HEIGHT, SAMPLE_WIDTH};
use crate::surface::CanvasSurface;

const BACKGROUND: Color = Color::rgb(0x1a, 0x1a, 0x2e);

/// Draws `graph` on a canvas once mounted and lists its compute results below it.
#[component]
pub fn VisionGraphCanvas(
	graph: Graph,
	#[prop(default = SAMPLE_WIDTH)] width: u32,
	#[prop(default = SAMPLE_HEIGHT)] height: u32,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let results = RwSignal::new(Vec::<(String, String)>::new());
	let draw_error = RwSignal::new(None::<String>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width);
		canvas.set_height(height);

		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx,
			_ => {
				warn!("2d canvas context unavailable");
				return;
			}
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			warn!("2d canvas context has an unexpected type");
			return;
		};

		let mut surface = CanvasSurface::new(ctx);
		surface.clear(BACKGROUND);
		match graph.draw(&mut surface) {
			Ok(()) => debug!("rendered {graph}"),
			Err(err) => {
				error!("{err}");
				draw_error.set(Some(err.to_string()));
			}
		}

		results.set(
			graph
				.compute(&surface)
				.iter()
				.map(|(_, id, result)| (id.to_string(), result.to_string()))
				.collect(),
		);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="vision-graph-canvas"
			style="display: block;"
		/>
		{move || draw_error.get().map(|err| view! { <p class="draw-error">{err}</p> })}
		<ul class="compute-results">
			{move || {
				results
					.get()
					.into_iter()
					.map(|(id, result)| view! { <li>{id}": "{result}</li> })
					.collect_view()
			}}
		</ul>
	}
}
