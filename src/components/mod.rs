pub mod edge_bundling;
