//! Literal text search.
//!
//! Search APIs over a UTF-8 `&str` using **character offsets** (not byte offsets) for all
//! public inputs and outputs. Queries are plain text: they are escaped and compiled into a
//! regex so that case-insensitive matching follows Unicode simple case folding.

use crate::AnalysisError;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Options that control how search is performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchOptions {
    /// If `true`, performs a case-sensitive search.
    pub case_sensitive: bool,
    /// If `true`, matches only whole words (bounded by non-alphanumeric characters).
    pub whole_word: bool,
}

impl SearchOptions {
    /// Create options from the two flags of a find dialog.
    pub fn new(case_sensitive: bool, whole_word: bool) -> Self {
        Self {
            case_sensitive,
            whole_word,
        }
    }
}

/// A match returned by the search APIs, expressed as a half-open character range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl SearchMatch {
    /// Create a match covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the match in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the match is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Debug)]
pub(crate) struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    pub(crate) fn char_count(&self) -> usize {
        self.char_to_byte.len().saturating_sub(1)
    }

    pub(crate) fn char_to_byte(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_count());
        self.char_to_byte
            .get(clamped)
            .copied()
            .unwrap_or(self.text_len)
    }

    pub(crate) fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }

    pub(crate) fn char_at(&self, text: &str, char_offset: usize) -> Option<char> {
        if char_offset >= self.char_count() {
            return None;
        }
        let start = self.char_to_byte[char_offset];
        let end = self.char_to_byte[char_offset + 1];
        text.get(start..end)?.chars().next()
    }
}

fn compile_search_regex(query: &str, options: SearchOptions) -> Result<Regex, AnalysisError> {
    Ok(RegexBuilder::new(&regex::escape(query))
        .case_insensitive(!options.case_sensitive)
        .build()?)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

fn is_whole_word(text: &str, index: &CharIndex, m: SearchMatch) -> bool {
    if m.is_empty() {
        return false;
    }

    let before = if m.start == 0 {
        None
    } else {
        index.char_at(text, m.start - 1)
    };
    let after = index.char_at(text, m.end);

    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// A compiled query bound to one text.
struct Finder<'t> {
    text: &'t str,
    re: Regex,
    index: CharIndex,
    whole_word: bool,
}

impl<'t> Finder<'t> {
    fn new(text: &'t str, query: &str, options: SearchOptions) -> Result<Self, AnalysisError> {
        Ok(Self {
            text,
            re: compile_search_regex(query, options)?,
            index: CharIndex::new(text),
            whole_word: options.whole_word,
        })
    }

    fn next_from(&self, from_char: usize) -> Option<SearchMatch> {
        let mut start_char = from_char.min(self.index.char_count());
        loop {
            let start_byte = self.index.char_to_byte(start_char);
            let m = self.re.find_at(self.text, start_byte)?;

            let candidate = SearchMatch {
                start: self.index.byte_to_char(m.start()),
                end: self.index.byte_to_char(m.end()),
            };
            if candidate.is_empty() {
                return None;
            }

            // A rejected candidate may overlap a whole word ("aa" in "aaa aa"), so only
            // step a single character.
            if self.whole_word && !is_whole_word(self.text, &self.index, candidate) {
                start_char = candidate.start + 1;
                continue;
            }

            return Some(candidate);
        }
    }
}

/// Find the next occurrence of `query` in `text`, searching forward from `from_char`.
///
/// - Returns `Ok(None)` if no match is found (or if `query` is empty).
/// - Match ranges are character offsets and are half-open (`[start, end)`).
pub fn find_next(
    text: &str,
    query: &str,
    options: SearchOptions,
    from_char: usize,
) -> Result<Option<SearchMatch>, AnalysisError> {
    if query.is_empty() {
        return Ok(None);
    }
    Ok(Finder::new(text, query, options)?.next_from(from_char))
}

/// Find all non-overlapping occurrences of `query` in `text`, left to right.
///
/// - Returns an empty list if `query` is empty.
/// - Match ranges are character offsets and are half-open (`[start, end)`).
pub fn find_all(
    text: &str,
    query: &str,
    options: SearchOptions,
) -> Result<Vec<SearchMatch>, AnalysisError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let finder = Finder::new(text, query, options)?;
    let mut matches = Vec::new();
    let mut from = 0;
    while let Some(m) = finder.next_from(from) {
        from = m.end;
        matches.push(m);
    }
    Ok(matches)
}

/// Returns a copy of `text` with every range in `ranges` replaced by `replacement`.
///
/// `ranges` must be sorted and non-overlapping character ranges.
pub(crate) fn splice(text: &str, ranges: &[SearchMatch], replacement: &str) -> String {
    let index = CharIndex::new(text);
    let mut out = String::with_capacity(text.len());
    let mut copied_to = 0usize;
    for range in ranges {
        let start = index.char_to_byte(range.start);
        out.push_str(&text[copied_to..start]);
        out.push_str(replacement);
        copied_to = index.char_to_byte(range.end);
    }
    out.push_str(&text[copied_to..]);
    out
}
