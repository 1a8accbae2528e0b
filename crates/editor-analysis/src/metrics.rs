//! Document metrics.
//!
//! A single left-to-right pass classifies every character of the document and produces a
//! fresh [`DocumentMetrics`] snapshot. Nothing is cached between scans: callers keep the
//! latest snapshot per open document.
//!
//! Character classes:
//!
//! - `'\n'` ends the current word and counts a line; it is not counted as a character
//! - alphanumeric characters extend the current word
//! - other whitespace ends the current word (see [`ScanPolicy`] for how runs are counted)
//! - printable punctuation and symbols are counted but neither start nor end a word
//! - control characters and U+FFFD stop the scan (binary content); the counts gathered so
//!   far are returned unchanged

use crate::config::ScanPolicy;
use serde::{Deserialize, Serialize};
use tracing::trace;
use unicode_width::UnicodeWidthChar;

/// Character, word and line counts of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentMetrics {
    /// Number of counted characters (newlines excluded).
    pub char_count: usize,
    /// Number of alphanumeric runs.
    pub word_count: usize,
    /// Number of `'\n'` characters.
    pub line_count: usize,
    /// 1-based cursor column, when the scan was given a cursor.
    pub current_column: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Newline,
    WordChar,
    Whitespace,
    Printable,
    Invalid,
}

fn classify(ch: char) -> CharClass {
    if ch == '\n' {
        CharClass::Newline
    } else if ch.is_alphanumeric() {
        CharClass::WordChar
    } else if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_control() || ch == char::REPLACEMENT_CHARACTER {
        CharClass::Invalid
    } else {
        CharClass::Printable
    }
}

/// Single-pass metrics scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsScanner {
    policy: ScanPolicy,
}

impl MetricsScanner {
    /// Create a scanner with the given whitespace counting policy.
    pub fn new(policy: ScanPolicy) -> Self {
        Self { policy }
    }

    /// The whitespace counting policy of this scanner.
    pub fn policy(&self) -> ScanPolicy {
        self.policy
    }

    /// Scan `text`.
    pub fn scan(&self, text: &str) -> DocumentMetrics {
        self.scan_chars(text.chars())
    }

    /// Scan `text` and fill [`DocumentMetrics::current_column`] for `cursor` (a char offset).
    pub fn scan_with_cursor(&self, text: &str, cursor: usize) -> DocumentMetrics {
        DocumentMetrics {
            current_column: Some(cursor_column(text, cursor)),
            ..self.scan(text)
        }
    }

    /// Scan an arbitrary character stream, e.g. the chunks of a rope.
    pub fn scan_chars<I>(&self, chars: I) -> DocumentMetrics
    where
        I: IntoIterator<Item = char>,
    {
        let mut metrics = DocumentMetrics::default();
        let mut in_word = false;
        let mut chars = chars.into_iter().peekable();

        while let Some(ch) = chars.next() {
            match classify(ch) {
                CharClass::Newline => {
                    if in_word {
                        metrics.word_count += 1;
                        in_word = false;
                    }
                    metrics.line_count += 1;
                }
                CharClass::WordChar => {
                    in_word = true;
                    metrics.char_count += 1;
                }
                CharClass::Whitespace => {
                    metrics.char_count += 1;
                    if in_word {
                        metrics.word_count += 1;
                        in_word = false;
                    }
                    if self.policy == ScanPolicy::CollapseWhitespaceRuns {
                        while chars
                            .next_if(|&next| next != '\n' && next.is_whitespace())
                            .is_some()
                        {}
                    }
                }
                CharClass::Printable => metrics.char_count += 1,
                CharClass::Invalid => {
                    trace!(?ch, ?metrics, "metrics scan stopped at invalid character");
                    return metrics;
                }
            }
        }

        if in_word {
            metrics.word_count += 1;
        }
        metrics
    }
}

/// Scan `text` with the default policy.
pub fn scan(text: &str) -> DocumentMetrics {
    MetricsScanner::default().scan(text)
}

/// 1-based column of the char offset `cursor` within its line.
///
/// Offsets past the end of `text` are clamped to the end.
pub fn cursor_column(text: &str, cursor: usize) -> usize {
    let mut column = 1;
    for ch in text.chars().take(cursor) {
        if ch == '\n' {
            column = 1;
        } else {
            column += 1;
        }
    }
    column
}

/// 1-based visual column of `cursor`, expanding `'\t'` to the next tab stop and measuring
/// wide characters by their cell width.
pub fn visual_column(text: &str, cursor: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let mut cells = 0usize;
    for ch in text.chars().take(cursor) {
        cells = match ch {
            '\n' => 0,
            '\t' => cells + tab_width - cells % tab_width,
            _ => cells + UnicodeWidthChar::width(ch).unwrap_or(0),
        };
    }
    cells + 1
}
