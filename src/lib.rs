pub mod error;
pub mod graph;
pub mod record_parser;
pub mod renderer;

pub use error::ParseError;
pub use graph::Graph;

/// Parse CSV edge rows and render PlantUML text.
///
/// With a non-empty `start`, only the subgraph reachable from that node is
/// rendered (breadth-first); otherwise the full graph is. The graph is
/// rebuilt from `input` on every call; nothing is cached between calls.
pub fn render(input: &str, start: Option<&str>) -> Result<String, ParseError> {
    let records = record_parser::parse_records(input)?;
    let graph = Graph::load(&records)?;
    match start {
        Some(node) if !node.is_empty() => Ok(renderer::render_reachable(&graph, node)),
        _ => Ok(renderer::render_full(&graph)),
    }
}
