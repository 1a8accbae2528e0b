use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced by the analysis core.
///
/// Only precondition violations and configuration problems are errors. A search that finds
/// nothing or a scan that stops early on binary content are normal outcomes.
pub enum AnalysisError {
    #[error("brace index {index} is out of range for a span of {len} characters")]
    /// The candidate brace index does not point into the scanned span.
    InvalidBraceIndex {
        /// The requested character index.
        index: usize,
        /// Length of the span in characters.
        len: usize,
    },

    #[error("character {found:?} at index {index} is not an opening brace")]
    /// The candidate brace index points at something other than a configured opening brace.
    NotAnOpeningBrace {
        /// The requested character index.
        index: usize,
        /// The character found there.
        found: char,
    },

    #[error("offset {offset} is out of range for a document of {len} characters")]
    /// An edit or cursor offset lies beyond the end of the document.
    OffsetOutOfRange {
        /// The requested character offset.
        offset: usize,
        /// Document length in characters.
        len: usize,
    },

    #[error("range {start}..{end} is reversed")]
    /// An edit range ends before it starts.
    ReversedRange {
        /// Start of the range.
        start: usize,
        /// End of the range.
        end: usize,
    },

    #[error("line {line} is out of range (document has {line_count} lines)")]
    /// A 1-based line number does not exist in the document.
    LineOutOfRange {
        /// The requested 1-based line number.
        line: usize,
        /// Number of lines in the document.
        line_count: usize,
    },

    #[error("search pattern error: {0}")]
    /// The escaped search literal could not be compiled.
    Pattern(#[from] regex::Error),

    #[error("configuration error: {0}")]
    /// Configuration JSON could not be parsed.
    Config(#[from] serde_json::Error),
}
