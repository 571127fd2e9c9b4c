use std::collections::HashSet;

use super::types::{Edge, Node};

/// Unordered identity of an edge.
fn pair_key(edge: &Edge) -> (&str, &str) {
	if edge.source <= edge.target {
		(edge.source.as_str(), edge.target.as_str())
	} else {
		(edge.target.as_str(), edge.source.as_str())
	}
}

/// Keeps the first edge of every unordered `{source, target}` pair, in input order.
pub fn dedupe(edges: Vec<Edge>) -> Vec<Edge> {
	let mut seen: HashSet<(String, String)> = HashSet::new();
	edges
		.into_iter()
		.filter(|edge| {
			let (a, b) = pair_key(edge);
			seen.insert((a.to_owned(), b.to_owned()))
		})
		.collect()
}

/// Forces every supplied edge to be real and appends a background edge for
/// each ordered node pair that no supplied edge connects.
///
/// Existence is checked against the supplied edges only, so an unconnected
/// pair is appended in both orders; [`dedupe`] collapses them.
pub fn patch_background(edges: Vec<Edge>, nodes: &[Node]) -> Vec<Edge> {
	let mut patched: Vec<Edge> = edges
		.into_iter()
		.map(|edge| Edge {
			is_bg_line: false,
			..edge
		})
		.collect();
	let existing: HashSet<(String, String)> = patched
		.iter()
		.map(|edge| {
			let (a, b) = pair_key(edge);
			(a.to_owned(), b.to_owned())
		})
		.collect();

	for node_a in nodes {
		for node_b in nodes.iter().filter(|n| n.id != node_a.id) {
			let key = if node_a.id <= node_b.id {
				(node_a.id.clone(), node_b.id.clone())
			} else {
				(node_b.id.clone(), node_a.id.clone())
			};
			if !existing.contains(&key) {
				patched.push(Edge::background(node_a.id.clone(), node_b.id.clone()));
			}
		}
	}
	patched
}

/// Full-mesh edge set: every distinct node pair joined by exactly one edge.
pub fn normalize(edges: &[Edge], nodes: &[Node]) -> Vec<Edge> {
	dedupe(patch_background(edges.to_vec(), nodes))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn nodes(ids: &[&str]) -> Vec<Node> {
		ids.iter().map(|id| Node::new(*id, *id)).collect()
	}

	fn pairs(edges: &[Edge]) -> Vec<(&str, &str, bool)> {
		edges
			.iter()
			.map(|e| (e.source.as_str(), e.target.as_str(), e.is_bg_line))
			.collect()
	}

	#[test]
	fn test_dedupe_keeps_first_of_either_direction() {
		let edges = vec![
			Edge::new("a", "b"),
			Edge::new("b", "c"),
			Edge::new("b", "a"),
			Edge::background("a", "b"),
			Edge::new("c", "b"),
			Edge::new("a", "c"),
		];
		let result = dedupe(edges);
		assert_eq!(
			pairs(&result),
			vec![("a", "b", false), ("b", "c", false), ("a", "c", false)]
		);
	}

	#[test]
	fn test_dedupe_idempotent() {
		let edges = vec![
			Edge::new("x", "y"),
			Edge::new("y", "x"),
			Edge::new("z", "x"),
			Edge::new("x", "z"),
			Edge::new("y", "z"),
		];
		let once = dedupe(edges);
		let twice = dedupe(once.clone());
		assert_eq!(once, twice);
	}

	#[test]
	fn test_patch_forces_supplied_edges_real() {
		let patched = patch_background(vec![Edge::background("a", "b")], &nodes(&["a", "b"]));
		assert_eq!(pairs(&patched), vec![("a", "b", false)]);
	}

	#[test]
	fn test_patch_synthesizes_both_orders_then_dedupe_collapses() {
		let patched = patch_background(vec![], &nodes(&["a", "b"]));
		assert_eq!(pairs(&patched), vec![("a", "b", true), ("b", "a", true)]);

		let deduped = dedupe(patched);
		assert_eq!(pairs(&deduped), vec![("a", "b", true)]);
	}

	#[test]
	fn test_patch_skips_pairs_connected_in_reverse() {
		let patched = patch_background(vec![Edge::new("b", "a")], &nodes(&["a", "b"]));
		assert_eq!(pairs(&patched), vec![("b", "a", false)]);
	}

	#[test]
	fn test_three_node_scenario() {
		let edges = normalize(&[Edge::new("A", "B")], &nodes(&["A", "B", "C"]));
		assert_eq!(
			pairs(&edges),
			vec![("A", "B", false), ("A", "C", true), ("B", "C", true)]
		);
	}

	#[test]
	fn test_full_mesh_invariant() {
		let ids = ["n0", "n1", "n2", "n3", "n4", "n5"];
		let raw = vec![
			Edge::new("n0", "n1"),
			Edge::new("n1", "n0"),
			Edge::new("n3", "n2"),
			Edge::new("n5", "n1"),
			Edge::new("n4", "missing"),
		];
		let edges = normalize(&raw, &nodes(&ids));

		for (i, a) in ids.iter().enumerate() {
			for b in &ids[i + 1..] {
				let count = edges.iter().filter(|e| e.connects(a, b)).count();
				assert_eq!(count, 1, "pair {a}-{b}");
			}
		}
		let real: Vec<_> = edges.iter().filter(|e| !e.is_bg_line).collect();
		assert_eq!(real.len(), 4);
	}

	#[test]
	fn test_empty_inputs() {
		assert!(normalize(&[], &[]).is_empty());
		assert!(normalize(&[], &nodes(&["solo"])).is_empty());
	}
}
