use leptos::prelude::*;

use crate::components::edge_bundling::{Edge, EdgeBundling, GraphData, Node};

/// Generate sample data: `n` nodes and up to `edge_count` unique links among
/// the first `linked` nodes.
fn generate_sample_data(n: usize, edge_count: usize, linked: usize, seed: usize) -> GraphData {
	let nodes: Vec<Node> = (0..n)
		.map(|i| Node {
			id: i.to_string(),
			label: format!("10.0.{}.{}", i / 256, i % 256),
			value: Some(rand_simple(seed + i) * 10.0),
		})
		.collect();

	let linked = linked.min(n);
	let mut edges: Vec<Edge> = Vec::new();
	let mut attempt = seed;
	// bounded so a saturated pool cannot spin forever
	while edges.len() < edge_count && attempt < seed + edge_count * 50 {
		attempt += 1;
		let source = (rand_simple(attempt * 2) * linked as f64) as usize;
		let target = (rand_simple(attempt * 2 + 1) * linked as f64) as usize;
		let (source, target) = (source.to_string(), target.to_string());
		if source == target || edges.iter().any(|e| e.connects(&source, &target)) {
			continue;
		}
		edges.push(Edge::new(source, target));
	}

	GraphData { nodes, edges }
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let seed = RwSignal::new(0usize);
	let selected = RwSignal::new(None::<Node>);
	let graph_data = Signal::derive(move || generate_sample_data(25, 5, 6, seed.get()));

	let regenerate = move |_: web_sys::MouseEvent| {
		seed.set((js_sys::Math::random() * 10_000.0) as usize);
		selected.set(None);
	};

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

			<div class="edge-bundling-page">
				<div class="graph-overlay">
					<h1>"Edge Bundling"</h1>
					<p class="subtitle">"Hover a node to see its label. Click a node to highlight its connections."</p>
					<button on:click=regenerate>"Regenerate"</button>
					<p class="selection">
						{move || {
							selected
								.get()
								.map(|node| format!("Selected: {} ({:.1})", node.label, node.value.unwrap_or_default()))
								.unwrap_or_default()
						}}
					</p>
				</div>
				<EdgeBundling
					data=graph_data
					on_node_selected=Callback::new(move |node: Node| selected.set(Some(node)))
				/>
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sample_data_is_unique_and_loop_free() {
		let data = generate_sample_data(25, 5, 6, 0);
		assert_eq!(data.nodes.len(), 25);
		assert!(data.edges.len() <= 5);
		for (i, edge) in data.edges.iter().enumerate() {
			assert!(!edge.is_self_loop());
			assert!(!edge.is_bg_line);
			assert!(data.edges[i + 1..].iter().all(|other| !other.same_pair(edge)));
			assert!(edge.source.parse::<usize>().unwrap() < 6);
		}
	}

	#[test]
	fn test_sample_data_saturates_small_pool() {
		// three nodes allow three distinct pairs at most
		let data = generate_sample_data(3, 10, 3, 7);
		assert!(data.edges.len() <= 3);
	}
}
