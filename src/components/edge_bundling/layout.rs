use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;
use std::sync::Arc;

use super::color::{FillTier, severity_color};
use super::geometry::{QuadraticCurve, curve_path, ellipse_position};
use super::normalize::normalize;
use super::types::{Edge, EdgeHandle, GraphData, Node, NodeHandle, Size};

pub const NODE_RADIUS: f64 = 5.0;

/// Stroke applied to a paint edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStyle {
	Background,
	Active,
}

impl EdgeStyle {
	pub fn stroke(self) -> &'static str {
		match self {
			EdgeStyle::Background => "#ededed",
			EdgeStyle::Active => "#E54545",
		}
	}

	pub fn width(self) -> f64 {
		match self {
			EdgeStyle::Background => 1.0,
			EdgeStyle::Active => 2.0,
		}
	}
}

/// Sizing and text options of the diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Whole drawing surface; its center is the shared curve control point.
	pub outer_size: Size,
	/// Bounding box of the node ellipse.
	pub inner_size: Size,
	/// Distance between a node's rim and its label.
	pub label_offset: f64,
	/// Shown when the model has no real edges.
	pub no_edge_tip: String,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			outer_size: Size::new(600.0, 600.0),
			inner_size: Size::new(390.0, 390.0),
			label_offset: 8.0,
			no_edge_tip: "All nodes connected normally, no abnormal nodes".into(),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaintNode {
	pub center: (f64, f64),
	pub radius: f64,
	pub angle: f64,
	pub fill: FillTier,
	pub label: String,
	pub source: Arc<Node>,
	pub is_active: bool,
}

impl PaintNode {
	/// Labels on the left half are flipped to stay readable.
	pub fn faces_left(&self) -> bool {
		self.angle > PI / 2.0 && self.angle < 3.0 * PI / 2.0
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaintEdge {
	pub curve: QuadraticCurve,
	pub path: String,
	pub stroke: &'static str,
	pub stroke_width: f64,
	/// Endpoints of a real edge; `None` for background edges.
	pub bound_nodes: Option<(NodeHandle, NodeHandle)>,
}

impl PaintEdge {
	pub fn is_background(&self) -> bool {
		self.bound_nodes.is_none()
	}
}

/// Lays out `nodes` around the ellipse and scores each by its real edges.
pub fn build_nodes(nodes: &[Node], edges: &[Edge], inner_size: Size, outer_size: Size) -> Vec<PaintNode> {
	if nodes.is_empty() {
		return Vec::new();
	}
	let angle_sep = 2.0 * PI / nodes.len() as f64;
	let share = 100.0 / nodes.len() as f64;
	let (a_length, b_length) = (inner_size.width / 2.0, inner_size.height / 2.0);
	let center = outer_size.center();

	nodes
		.iter()
		.enumerate()
		.map(|(index, node)| {
			let degree = edges
				.iter()
				.filter(|e| !e.is_bg_line && !e.is_self_loop() && e.touches(&node.id))
				.count();
			let value = degree as f64 * share;
			let (x, y, angle) = ellipse_position(index, angle_sep, a_length, b_length, center);
			PaintNode {
				center: (x, y),
				radius: NODE_RADIUS,
				angle,
				fill: severity_color(Some(value)),
				label: node.label.clone(),
				source: Arc::new(Node {
					value: Some(value),
					..node.clone()
				}),
				is_active: false,
			}
		})
		.collect()
}

/// Draws every resolvable edge through `control` and indexes the real ones
/// by endpoint. The index has one entry per paint node.
pub fn build_edges(
	edges: &[Edge],
	paint_nodes: &[PaintNode],
	control: (f64, f64),
) -> (Vec<PaintEdge>, Vec<HashSet<EdgeHandle>>) {
	let mut by_id: HashMap<&str, NodeHandle> = HashMap::new();
	for (i, node) in paint_nodes.iter().enumerate() {
		by_id.entry(node.source.id.as_str()).or_insert(NodeHandle(i));
	}
	let mut adjacency = vec![HashSet::new(); paint_nodes.len()];
	let mut paint_edges = Vec::with_capacity(edges.len());

	for edge in edges {
		let (Some(&src), Some(&tgt)) = (by_id.get(edge.source.as_str()), by_id.get(edge.target.as_str()))
		else {
			log::trace!("dropping edge {} -> {}: unknown node", edge.source, edge.target);
			continue;
		};
		if src == tgt {
			log::trace!("dropping self-loop on {}", edge.source);
			continue;
		}
		let curve = curve_path(paint_nodes[src.0].center, paint_nodes[tgt.0].center, control);
		let handle = EdgeHandle(paint_edges.len());
		paint_edges.push(PaintEdge {
			curve,
			path: curve.to_string(),
			stroke: EdgeStyle::Background.stroke(),
			stroke_width: EdgeStyle::Background.width(),
			bound_nodes: (!edge.is_bg_line).then_some((src, tgt)),
		});
		if !edge.is_bg_line {
			adjacency[src.0].insert(handle);
			adjacency[tgt.0].insert(handle);
		}
	}
	(paint_edges, adjacency)
}

/// Paint arenas for one model: nodes and edges addressed by handle, the edge
/// draw order, and the real-edge adjacency of every node.
#[derive(Clone, Debug, Default)]
pub struct Layout {
	nodes: Vec<PaintNode>,
	edges: Vec<PaintEdge>,
	draw_order: Vec<EdgeHandle>,
	adjacency: Vec<HashSet<EdgeHandle>>,
}

impl Layout {
	pub fn build(data: &GraphData, config: &LayoutConfig) -> Self {
		let normalized = normalize(&data.edges, &data.nodes);
		let nodes = build_nodes(
			&data.nodes,
			&normalized,
			config.inner_size,
			config.outer_size,
		);
		let (edges, adjacency) = build_edges(&normalized, &nodes, config.outer_size.center());
		let dropped = normalized.len() - edges.len();
		if dropped > 0 {
			log::debug!("{} edges reference unknown nodes and were not drawn", dropped);
		}
		let draw_order = (0..edges.len()).map(EdgeHandle).collect();
		Self {
			nodes,
			edges,
			draw_order,
			adjacency,
		}
	}

	pub fn node(&self, handle: NodeHandle) -> Option<&PaintNode> {
		self.nodes.get(handle.0)
	}

	pub fn edge(&self, handle: EdgeHandle) -> Option<&PaintEdge> {
		self.edges.get(handle.0)
	}

	pub fn node_handles(&self) -> impl Iterator<Item = NodeHandle> + '_ {
		(0..self.nodes.len()).map(NodeHandle)
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn find_node(&self, id: &str) -> Option<NodeHandle> {
		self.nodes
			.iter()
			.position(|n| n.source.id == id)
			.map(NodeHandle)
	}

	/// Edges in paint order; later edges draw over earlier ones.
	pub fn draw_order(&self) -> &[EdgeHandle] {
		&self.draw_order
	}

	/// Real edges incident to `node`; empty for unknown or isolated nodes.
	pub fn incident_edges(&self, node: NodeHandle) -> impl Iterator<Item = EdgeHandle> + '_ {
		self.adjacency
			.get(node.0)
			.into_iter()
			.flat_map(|set| set.iter().copied())
	}

	pub fn is_incident(&self, node: NodeHandle, edge: EdgeHandle) -> bool {
		self.adjacency
			.get(node.0)
			.is_some_and(|set| set.contains(&edge))
	}

	pub fn degree(&self, node: NodeHandle) -> usize {
		self.adjacency.get(node.0).map_or(0, HashSet::len)
	}

	pub fn has_real_edges(&self) -> bool {
		self.edges.iter().any(|e| !e.is_background())
	}

	/// Mutates the edge's stroke in place.
	pub fn set_edge_style(&mut self, handle: EdgeHandle, style: EdgeStyle) {
		if let Some(edge) = self.edges.get_mut(handle.0) {
			edge.stroke = style.stroke();
			edge.stroke_width = style.width();
		}
	}

	/// Mutates the node's active flag in place.
	pub fn set_node_active(&mut self, handle: NodeHandle, active: bool) {
		if let Some(node) = self.nodes.get_mut(handle.0) {
			node.is_active = active;
		}
	}

	/// Moves the edges incident to `node` to the end of the draw order,
	/// keeping relative order within both groups.
	pub fn raise_incident(&mut self, node: NodeHandle) {
		let (rest, raised): (Vec<_>, Vec<_>) = self
			.draw_order
			.iter()
			.copied()
			.partition(|&edge| !self.is_incident(node, edge));
		self.draw_order = rest.into_iter().chain(raised).collect();
	}
}
