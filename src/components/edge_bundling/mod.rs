mod color;
mod component;
mod geometry;
mod layout;
mod normalize;
mod render;
mod state;
mod types;

pub use color::{FillTier, severity_color};
pub use component::EdgeBundling;
pub use geometry::{QuadraticCurve, curve_path, ellipse_position, rotate_label};
pub use layout::{EdgeStyle, Layout, LayoutConfig, PaintEdge, PaintNode, build_edges, build_nodes};
pub use normalize::{dedupe, normalize, patch_background};
pub use state::{EdgeBundlingState, Focus, Selection};
pub use types::{Edge, EdgeHandle, GraphData, Node, NodeHandle, Size};
