use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use super::layout::LayoutConfig;
use super::render::{EdgePath, NODE_CLASS, NodeMark};
use super::state::EdgeBundlingState;
use super::types::{GraphData, Node};

/// Whether the click landed on a node circle.
fn lands_on_node(ev: &MouseEvent) -> bool {
	ev.target()
		.and_then(|target| target.dyn_into::<Element>().ok())
		.is_some_and(|el| el.class_list().contains(NODE_CLASS))
}

#[component]
pub fn EdgeBundling(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(optional)] config: LayoutConfig,
	#[prop(optional, into)] on_node_selected: Option<Callback<Node>>,
) -> impl IntoView {
	let outer = config.outer_size;
	let no_edge_tip = config.no_edge_tip.clone();
	let state = RwSignal::new(EdgeBundlingState::new(config));

	// Full rebuild on every model change
	Effect::new(move |_| {
		let model = data.get();
		state.update(|s| s.rebuild(&model));
	});

	let on_outside_click = move |ev: MouseEvent| {
		if lands_on_node(&ev) {
			return;
		}
		if state.with_untracked(|s| s.chosen().is_some()) {
			state.update(|s| s.outside_click());
		}
	};

	let tip = move || {
		state
			.with(|s| s.layout.node_count() > 0 && !s.layout.has_real_edges())
			.then(|| view! { <p class="edge-bundling-tip">{no_edge_tip.clone()}</p> })
	};

	view! {
		<div class="edge-bundling" on:click=on_outside_click>
			<svg
				width=outer.width.to_string()
				height=outer.height.to_string()
				viewBox=format!("0 0 {} {}", outer.width, outer.height)
			>
				<g class="edge-bundling-edges">
					<For
						each=move || state.with(|s| s.edge_keys())
						key=|key| *key
						children=move |(_, edge)| view! { <EdgePath state edge /> }
					/>
				</g>
				<g class="edge-bundling-nodes">
					<For
						each=move || state.with(|s| s.node_keys())
						key=|key| *key
						children=move |(_, node)| view! { <NodeMark state node on_node_selected /> }
					/>
				</g>
			</svg>
			{tip}
		</div>
	}
}
