use std::f64::consts::PI;

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::geometry::rotate_label;
use super::layout::{EdgeStyle, PaintNode};
use super::state::EdgeBundlingState;
use super::types::{EdgeHandle, Node, NodeHandle};

pub const NODE_CLASS: &str = "edge-bundling-node";

/// Text anchor, x position and CSS style of a node label, rotated about the
/// node center. Left-half labels are turned half a revolution and anchored
/// at their end so they never read upside down.
pub fn label_placement(node: &PaintNode, label_offset: f64) -> (&'static str, f64, String) {
	let (cx, cy) = node.center;
	let reach = node.radius + label_offset;
	let (anchor, x, rotation) = if node.faces_left() {
		("end", cx - reach, node.angle - PI)
	} else {
		("start", cx + reach, node.angle)
	};
	let style = format!(
		"{} transform-origin: {}px {}px; transform-box: view-box;",
		rotate_label(rotation),
		cx,
		cy
	);
	(anchor, x, style)
}

#[component]
pub fn EdgePath(state: RwSignal<EdgeBundlingState>, edge: EdgeHandle) -> impl IntoView {
	// geometry is fixed for the lifetime of a revision
	let path = state.with_untracked(|s| s.layout.edge(edge).map(|e| e.path.clone()).unwrap_or_default());
	let stroke = move || {
		state.with(|s| {
			s.layout
				.edge(edge)
				.map_or(EdgeStyle::Background.stroke(), |e| e.stroke)
		})
	};
	let stroke_width = move || {
		state.with(|s| {
			s.layout
				.edge(edge)
				.map_or(EdgeStyle::Background.width(), |e| e.stroke_width)
				.to_string()
		})
	};

	view! { <path d=path fill="none" stroke=stroke stroke-width=stroke_width /> }
}

#[component]
pub fn NodeMark(
	state: RwSignal<EdgeBundlingState>,
	node: NodeHandle,
	on_node_selected: Option<Callback<Node>>,
) -> impl IntoView {
	let (paint, label_offset) = state.with_untracked(|s| (s.layout.node(node).cloned(), s.config.label_offset));

	paint.map(|paint| {
		let (cx, cy) = (paint.center.0.to_string(), paint.center.1.to_string());
		let (ring_cx, ring_cy) = (cx.clone(), cy.clone());
		let radius = paint.radius;
		let fill = paint.fill.color();
		let (anchor, label_x, label_style) = label_placement(&paint, label_offset);
		let label_y = paint.center.1;
		let label = paint.label;

		let is_active = move || state.with(|s| s.layout.node(node).is_some_and(|n| n.is_active));
		let is_chosen = move || state.with(|s| s.chosen() == Some(node));

		let on_click = move |_: MouseEvent| {
			let selected = state.try_update(|s| s.click(node)).flatten();
			if let (Some(source), Some(callback)) = (selected, on_node_selected) {
				log::info!("node selected: {}", source.id);
				callback.run(source);
			}
		};

		view! {
			<g>
				<Show when=is_chosen>
					<circle
						cx=ring_cx.clone()
						cy=ring_cy.clone()
						r=(radius + 3.0).to_string()
						fill="none"
						stroke=EdgeStyle::Active.stroke()
						stroke-width="1"
					/>
				</Show>
				<circle
					class=move || if is_active() { "edge-bundling-node active" } else { NODE_CLASS }
					cx=cx
					cy=cy
					r=radius.to_string()
					fill=fill
					style="cursor: pointer;"
					on:click=on_click
					on:mouseenter=move |_| state.update(|s| s.hover_enter(node))
					on:mouseleave=move |_| state.update(|s| s.hover_leave(node))
				/>
				<Show when=is_active>
					<text
						x=label_x.to_string()
						y=label_y.to_string()
						dy="0.35em"
						text-anchor=anchor
						font-size="11"
						fill="#555"
						style=label_style.clone()
						pointer-events="none"
					>
						{label.clone()}
					</text>
				</Show>
			</g>
		}
	})
}
