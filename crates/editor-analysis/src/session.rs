//! Per-document composition of the analysis components.
//!
//! A [`DocumentSession`] owns the text of one open document together with its cursor, the
//! latest [`DocumentMetrics`] snapshot and its [`SearchController`]. Every edit goes through
//! the session, which rescans the metrics and invalidates the search state so the host
//! cannot forget to.
//!
//! # Example
//!
//! ```rust
//! use editor_analysis::{AnalysisConfig, DocumentSession, SearchOptions, SearchOutcome};
//!
//! let mut session = DocumentSession::new("cat dog cat", AnalysisConfig::default());
//! assert_eq!(session.metrics().word_count, 3);
//!
//! let outcome = session.find("cat", false, SearchOptions::default()).unwrap();
//! assert!(matches!(outcome, SearchOutcome::Found(m) if m.start == 0));
//!
//! session.insert(0, "a ").unwrap();
//! assert_eq!(session.metrics().word_count, 4);
//! ```

use crate::AnalysisError;
use crate::braces::BraceBalanceChecker;
use crate::config::AnalysisConfig;
use crate::controller::{ReplaceOutcome, SearchController, SearchOutcome, SearchState};
use crate::metrics::{DocumentMetrics, MetricsScanner, visual_column};
use crate::search::{SearchMatch, SearchOptions};
use editor_analysis_lang::Language;
use ropey::Rope;
use std::ops::Range;
use tracing::debug;

/// One open document and the analysis state that belongs to it.
#[derive(Debug, Clone)]
pub struct DocumentSession {
    rope: Rope,
    cursor: usize,
    selection: Option<SearchMatch>,
    metrics: DocumentMetrics,
    scanner: MetricsScanner,
    search: SearchController,
    config: AnalysisConfig,
    file_name: Option<String>,
    language: Language,
    version: u64,
    is_modified: bool,
}

impl DocumentSession {
    /// Create a session for `text` with the cursor at the start of the document.
    pub fn new(text: &str, config: AnalysisConfig) -> Self {
        let mut session = Self {
            rope: Rope::from_str(text),
            cursor: 0,
            selection: None,
            metrics: DocumentMetrics::default(),
            scanner: MetricsScanner::new(config.scan_policy),
            search: SearchController::new(config.retry_policy),
            config,
            file_name: None,
            language: Language::None,
            version: 0,
            is_modified: false,
        };
        session.rescan();
        session
    }

    /// Create a session for an empty document.
    pub fn empty(config: AnalysisConfig) -> Self {
        Self::new("", config)
    }

    /// The configuration this session was created with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The document buffer.
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Document length in characters.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Number of editor lines (newline count + 1).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Latest metrics snapshot, including the cursor column.
    pub fn metrics(&self) -> DocumentMetrics {
        self.metrics
    }

    /// Cursor position as a char offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Range selected by the last find or replace, if it succeeded and the document has not
    /// changed since.
    pub fn selection(&self) -> Option<SearchMatch> {
        self.selection
    }

    /// Retained find/replace state.
    pub fn search_state(&self) -> &SearchState {
        self.search.state()
    }

    /// Version number, incremented on every edit.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the document changed since it was created or last saved.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Mark the document as saved.
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    /// The file name of the document, if it has one.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Set the file name and pick the language from its extension.
    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        let file_name = file_name.into();
        self.language = Language::from_file_name(&file_name);
        debug!(%file_name, language = %self.language, "file name set");
        self.file_name = Some(file_name);
    }

    /// The language of the document.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Override the language picked from the file name.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// A brace checker tracking the brace pairs of the document language.
    pub fn brace_checker(&self) -> BraceBalanceChecker {
        BraceBalanceChecker::new(self.language.config().brace_pairs)
    }

    /// Move the cursor, clamping to the end of the document. Clears the selection.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.char_count());
        self.selection = None;
        self.metrics.current_column = Some(self.cursor_column());
    }

    /// 1-based visual column of the cursor, with tabs expanded to the configured tab width.
    pub fn visual_column(&self) -> usize {
        let line_start = self.rope.line_to_char(self.rope.char_to_line(self.cursor));
        let line = self.rope.slice(line_start..self.cursor).to_string();
        visual_column(&line, self.cursor - line_start, self.config.tab_width)
    }

    /// Move the cursor to the start of the 1-based `line` and return its char offset.
    pub fn go_to_line(&mut self, line: usize) -> Result<usize, AnalysisError> {
        let line_count = self.line_count();
        if line == 0 || line > line_count {
            return Err(AnalysisError::LineOutOfRange { line, line_count });
        }
        let offset = self.rope.line_to_char(line - 1);
        self.set_cursor(offset);
        Ok(offset)
    }

    /// Replace the whole document.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = self.cursor.min(self.char_count());
        self.document_changed();
    }

    /// Insert `text` at char offset `offset`.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<(), AnalysisError> {
        let len = self.char_count();
        if offset > len {
            return Err(AnalysisError::OffsetOutOfRange { offset, len });
        }
        self.rope.insert(offset, text);
        if offset <= self.cursor {
            self.cursor += text.chars().count();
        }
        self.document_changed();
        Ok(())
    }

    /// Delete the chars in `range`. An empty range is a no-op.
    pub fn delete(&mut self, range: Range<usize>) -> Result<(), AnalysisError> {
        let len = self.char_count();
        for offset in [range.start, range.end] {
            if offset > len {
                return Err(AnalysisError::OffsetOutOfRange { offset, len });
            }
        }
        if range.start > range.end {
            return Err(AnalysisError::ReversedRange {
                start: range.start,
                end: range.end,
            });
        }
        if range.is_empty() {
            return Ok(());
        }
        self.rope.remove(range.clone());
        if self.cursor >= range.end {
            self.cursor -= range.len();
        } else if self.cursor > range.start {
            self.cursor = range.start;
        }
        self.document_changed();
        Ok(())
    }

    /// Find `query`. On success the match becomes the selection and the cursor moves to its
    /// end; otherwise the cursor stays where it was and the selection is cleared.
    pub fn find(
        &mut self,
        query: &str,
        find_next: bool,
        options: SearchOptions,
    ) -> Result<SearchOutcome, AnalysisError> {
        let text = self.text();
        let outcome = self.search.find(&text, query, find_next, options)?;
        match outcome {
            SearchOutcome::Found(m) => self.select(m),
            SearchOutcome::NotFound => self.selection = None,
        }
        Ok(outcome)
    }

    /// Replace the next occurrence of `query`; the inserted text becomes the selection.
    pub fn replace(
        &mut self,
        query: &str,
        replacement: &str,
        options: SearchOptions,
    ) -> Result<ReplaceOutcome, AnalysisError> {
        let mut text = self.text();
        let outcome = self
            .search
            .replace(&mut text, query, replacement, options)?;
        if let ReplaceOutcome::Replaced(inserted) = outcome {
            self.rope = Rope::from_str(&text);
            self.bump_version();
            self.rescan();
            self.select(inserted);
        }
        Ok(outcome)
    }

    /// Replace every occurrence of `query` and return how many were replaced.
    pub fn replace_all(
        &mut self,
        query: &str,
        replacement: &str,
        options: SearchOptions,
    ) -> Result<usize, AnalysisError> {
        let mut text = self.text();
        let replaced = self
            .search
            .replace_all(&mut text, query, replacement, options)?;
        if replaced > 0 {
            self.rope = Rope::from_str(&text);
            self.cursor = self.cursor.min(self.char_count());
            self.selection = None;
            self.bump_version();
            self.rescan();
        }
        Ok(replaced)
    }

    fn select(&mut self, range: SearchMatch) {
        self.cursor = range.end;
        self.selection = Some(range);
        self.metrics.current_column = Some(self.cursor_column());
    }

    fn cursor_column(&self) -> usize {
        let line_start = self.rope.line_to_char(self.rope.char_to_line(self.cursor));
        self.cursor - line_start + 1
    }

    fn bump_version(&mut self) {
        self.version += 1;
        self.is_modified = true;
    }

    fn document_changed(&mut self) {
        self.bump_version();
        self.selection = None;
        self.search.invalidate();
        self.rescan();
        debug!(
            version = self.version,
            chars = self.char_count(),
            "document changed"
        );
    }

    fn rescan(&mut self) {
        self.metrics = DocumentMetrics {
            current_column: Some(self.cursor_column()),
            ..self.scanner.scan_chars(self.rope.chars())
        };
    }
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::empty(AnalysisConfig::default())
    }
}
