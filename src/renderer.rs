use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::graph::Graph;

const START_MARKER: &str = "@startuml";
const END_MARKER: &str = "@enduml";

/// Render the whole graph: every node declaration in first-seen order,
/// then every edge in adjacency creation order, duplicates included.
pub fn render_full(graph: &Graph) -> String {
    let mut out = String::new();
    out.push_str(START_MARKER);
    out.push('\n');
    for node in graph.nodes() {
        push_node(&mut out, node);
    }
    for (from, dests) in graph.adjacency() {
        for to in dests {
            push_edge(&mut out, from, to);
        }
    }
    out.push_str(END_MARKER);
    out.push('\n');
    out
}

/// Render only the subgraph reachable from `start`, in breadth-first
/// discovery order, with each node's outgoing edges right after its own
/// declaration.
///
/// Edges are emitted unconditionally, even into nodes that are already
/// visited or already queued, so a node reached along several paths shows
/// every inbound edge. A start node absent from the graph still gets its
/// declaration; the diagram then has no edges.
pub fn render_reachable(graph: &Graph, start: &str) -> String {
    let mut out = String::new();
    out.push_str(START_MARKER);
    out.push('\n');

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        // A node can be queued once per inbound edge; expand it only once.
        if !visited.insert(current) {
            continue;
        }
        push_node(&mut out, current);
        for neighbor in graph.neighbors(current) {
            push_edge(&mut out, current, neighbor);
            if !visited.contains(neighbor.as_str()) {
                queue.push_back(neighbor);
            }
        }
    }

    debug!("traversal from `{start}` visited {} nodes", visited.len());
    out.push_str(END_MARKER);
    out.push('\n');
    out
}

fn push_node(out: &mut String, id: &str) {
    out.push_str(&format!("node {id} {{\n}}\n"));
}

fn push_edge(out: &mut String, from: &str, to: &str) {
    out.push_str(&format!("{from} --> {to}\n"));
}
