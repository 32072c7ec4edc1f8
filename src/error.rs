use thiserror::Error;

/// Errors produced while turning CSV text into a graph.
///
/// An unknown start node is deliberately not an error: rendering the
/// reachable subgraph from an identifier that never appears in the edge
/// list yields a diagram containing just that node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A data row whose field count is not exactly two. Loading aborts on
    /// the first such row rather than skipping it.
    #[error("line {line}: expected 2 fields, found {found}: `{record}`")]
    MalformedRecord {
        line: usize,
        found: usize,
        record: String,
    },

    /// A double-quoted field that is never closed, or stray text between
    /// a closing quote and the next separator.
    #[error("line {line}: malformed quoted field")]
    InvalidQuoting { line: usize },
}
