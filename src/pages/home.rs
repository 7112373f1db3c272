use leptos::prelude::*;

use crate::components::vision_graph::VisionGraphCanvas;
use crate::sample::sample_graph;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="vision-graph">
				<h1>"Vision Graph"</h1>
				<p class="subtitle">"Nodes are drawn as circles, edges as lines. Each element reports its computation result below."</p>
				{move || sample_graph().map(|graph| view! { <VisionGraphCanvas graph=graph /> })}
			</div>
		</ErrorBoundary>
	}
}
