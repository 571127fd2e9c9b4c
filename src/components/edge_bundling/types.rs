/// A node as supplied by the data source.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: String,
	pub label: String,
	/// Participation score in `[0, 100]`, recomputed on every layout.
	pub value: Option<f64>,
}

impl Node {
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			value: None,
		}
	}
}

/// An undirected connection between two node ids.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub source: String,
	pub target: String,
	/// Synthetic backdrop edge, never interactive.
	pub is_bg_line: bool,
}

impl Edge {
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			is_bg_line: false,
		}
	}

	pub fn background(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			is_bg_line: true,
			..Self::new(source, target)
		}
	}

	/// True when both edges join the same unordered pair of ids.
	pub fn same_pair(&self, other: &Edge) -> bool {
		self.connects(&other.source, &other.target)
	}

	pub fn connects(&self, a: &str, b: &str) -> bool {
		(self.source == a && self.target == b) || (self.source == b && self.target == a)
	}

	pub fn touches(&self, id: &str) -> bool {
		self.source == id || self.target == id
	}

	pub fn is_self_loop(&self) -> bool {
		self.source == self.target
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}
}

/// Stable index of a paint node within one layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub usize);

/// Stable index of a paint edge within one layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeHandle(pub usize);
