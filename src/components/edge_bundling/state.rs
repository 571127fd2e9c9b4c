use super::layout::{EdgeStyle, Layout, LayoutConfig};
use super::types::{EdgeHandle, GraphData, Node, NodeHandle};

/// Click focus of the diagram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
	#[default]
	Idle,
	Focused(NodeHandle),
}

impl Focus {
	pub fn chosen(self) -> Option<NodeHandle> {
		match self {
			Focus::Idle => None,
			Focus::Focused(node) => Some(node),
		}
	}
}

/// Chosen and hovered nodes, tracked independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	pub focus: Focus,
	pub hovered: Option<NodeHandle>,
}

/// Layout plus the hover/click state machine acting on it.
///
/// Interaction mutates paint nodes and edges in place; only [`rebuild`]
/// replaces them, bumping [`revision`] so renderers keyed by
/// `(revision, handle)` drop stale elements.
///
/// [`rebuild`]: EdgeBundlingState::rebuild
/// [`revision`]: EdgeBundlingState::revision
#[derive(Clone, Debug, Default)]
pub struct EdgeBundlingState {
	pub config: LayoutConfig,
	pub layout: Layout,
	pub selection: Selection,
	revision: u64,
}

impl EdgeBundlingState {
	pub fn new(config: LayoutConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	pub fn with_data(data: &GraphData, config: LayoutConfig) -> Self {
		let mut state = Self::new(config);
		state.rebuild(data);
		state
	}

	/// Replaces the whole layout for a new model and resets selection.
	pub fn rebuild(&mut self, data: &GraphData) {
		self.layout = Layout::build(data, &self.config);
		self.selection = Selection::default();
		self.revision += 1;
		log::debug!(
			"edge bundling layout rebuilt: {} nodes, {} edges (rev {})",
			self.layout.node_count(),
			self.layout.draw_order().len(),
			self.revision
		);
	}

	pub fn revision(&self) -> u64 {
		self.revision
	}

	pub fn chosen(&self) -> Option<NodeHandle> {
		self.selection.focus.chosen()
	}

	pub fn hovered(&self) -> Option<NodeHandle> {
		self.selection.hovered
	}

	pub fn node_keys(&self) -> Vec<(u64, NodeHandle)> {
		self.layout
			.node_handles()
			.map(|node| (self.revision, node))
			.collect()
	}

	/// Edge keys in draw order.
	pub fn edge_keys(&self) -> Vec<(u64, EdgeHandle)> {
		self.layout
			.draw_order()
			.iter()
			.map(|&edge| (self.revision, edge))
			.collect()
	}

	pub fn hover_enter(&mut self, node: NodeHandle) {
		self.selection.hovered = Some(node);
		let already_active = self.layout.node(node).is_some_and(|n| n.is_active);
		if self.chosen() == Some(node) || already_active {
			return;
		}
		self.layout.set_node_active(node, true);
	}

	pub fn hover_leave(&mut self, node: NodeHandle) {
		self.selection.hovered = None;
		if self.is_bundled(node) {
			return;
		}
		self.layout.set_node_active(node, false);
	}

	/// True when `candidate` is an endpoint of an edge incident to the
	/// chosen node.
	pub fn is_bundled(&self, candidate: NodeHandle) -> bool {
		let Some(chosen) = self.chosen() else {
			return false;
		};
		self.layout
			.incident_edges(chosen)
			.filter_map(|edge| self.layout.edge(edge)?.bound_nodes)
			.any(|(a, b)| a == candidate || b == candidate)
	}

	/// Focuses `node` and highlights its real edges. Returns the source node
	/// to announce, or `None` when the node has no real edges.
	pub fn click(&mut self, node: NodeHandle) -> Option<Node> {
		if self.layout.degree(node) == 0 {
			log::debug!("ignoring click on isolated node {:?}", node);
			return None;
		}
		if self.chosen() != Some(node) {
			self.blur(self.chosen());
		}
		self.selection.focus = Focus::Focused(node);
		self.restyle(node, EdgeStyle::Active, true);
		self.layout.node(node).map(|n| n.source.as_ref().clone())
	}

	/// Click that landed outside every node.
	pub fn outside_click(&mut self) {
		self.blur(self.chosen());
		self.selection.focus = Focus::Idle;
	}

	fn blur(&mut self, node: Option<NodeHandle>) {
		let Some(node) = node else {
			return;
		};
		self.restyle(node, EdgeStyle::Background, false);
	}

	fn restyle(&mut self, node: NodeHandle, style: EdgeStyle, active: bool) {
		let incident: Vec<EdgeHandle> = self.layout.incident_edges(node).collect();
		for edge in incident {
			self.layout.set_edge_style(edge, style);
			if let Some((a, b)) = self.layout.edge(edge).and_then(|e| e.bound_nodes) {
				self.layout.set_node_active(a, active);
				self.layout.set_node_active(b, active);
			}
		}
		self.layout.raise_incident(node);
	}
}
