use log::debug;

use crate::error::ParseError;
use crate::record_parser::Record;

/// Directed graph built from an edge list, one instance per request.
///
/// Identifiers are compared by plain value equality: no case folding, no
/// whitespace trimming. Both the adjacency entries and the node list keep
/// first-seen order so that rendering the same input always produces the
/// same text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// Per-source destination lists, in the order sources first appeared.
    /// Destination order is input row order; duplicate edges are kept.
    adjacency: Vec<(String, Vec<String>)>,
    /// Every identifier seen as either endpoint, deduplicated, first-seen order.
    nodes: Vec<String>,
}

impl Graph {
    /// Build a graph from raw records. Every record must have exactly two
    /// fields; the first malformed record aborts the load.
    pub fn load(records: &[Record]) -> Result<Graph, ParseError> {
        let mut graph = Graph::default();
        for record in records {
            match record.fields.as_slice() {
                [from, to] => graph.add_edge(from, to),
                fields => {
                    return Err(ParseError::MalformedRecord {
                        line: record.line,
                        found: fields.len(),
                        record: fields.join(","),
                    });
                }
            }
        }
        debug!(
            "loaded graph: {} rows, {} nodes, {} sources",
            records.len(),
            graph.nodes.len(),
            graph.adjacency.len()
        );
        Ok(graph)
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        match self.adjacency.iter_mut().find(|(src, _)| src == from) {
            Some((_, dests)) => dests.push(to.to_string()),
            None => self
                .adjacency
                .push((from.to_string(), vec![to.to_string()])),
        }
        self.add_node(from);
        self.add_node(to);
    }

    fn add_node(&mut self, id: &str) {
        if !self.nodes.iter().any(|n| n == id) {
            self.nodes.push(id.to_string());
        }
    }

    /// All node identifiers in first-seen order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Destinations of `id` in insertion order. A node with no outgoing
    /// edges (or one that never appears at all) yields an empty slice,
    /// never an error.
    pub fn neighbors(&self, id: &str) -> &[String] {
        self.adjacency
            .iter()
            .find(|(src, _)| src == id)
            .map(|(_, dests)| dests.as_slice())
            .unwrap_or(&[])
    }

    /// Adjacency entries in creation order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.adjacency
            .iter()
            .map(|(src, dests)| (src.as_str(), dests.as_slice()))
    }
}
