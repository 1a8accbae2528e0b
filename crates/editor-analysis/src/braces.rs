//! Brace balance checking.
//!
//! All indices are character offsets into the scanned span.

use crate::AnalysisError;
use editor_analysis_lang::BracePair;

/// Index-based bracket matching over an arbitrary span of text.
///
/// With a single configured pair this is a plain depth counter. With several pairs,
/// [`first_unbalanced_closing_brace_index`](Self::first_unbalanced_closing_brace_index)
/// keeps a stack of open brace kinds so that `(]` is reported as unbalanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BraceBalanceChecker {
    pairs: Vec<BracePair>,
}

impl Default for BraceBalanceChecker {
    fn default() -> Self {
        Self::new(BracePair::DEFAULT)
    }
}

impl BraceBalanceChecker {
    /// Create a checker tracking the given pairs.
    pub fn new(pairs: impl IntoIterator<Item = BracePair>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Create a checker tracking a single pair.
    pub fn single(pair: BracePair) -> Self {
        Self { pairs: vec![pair] }
    }

    /// The tracked pairs.
    pub fn pairs(&self) -> &[BracePair] {
        &self.pairs
    }

    fn pair_opened_by(&self, ch: char) -> Option<BracePair> {
        self.pairs.iter().copied().find(|pair| pair.open == ch)
    }

    fn pair_closed_by(&self, ch: char) -> Option<BracePair> {
        self.pairs.iter().copied().find(|pair| pair.close == ch)
    }

    /// Returns `true` if the opening brace at `open_brace_index` is closed later in `context`.
    ///
    /// Only braces of the same kind are counted, so `"(a[)"` balances the `(`.
    ///
    /// Fails if the index is outside `context` or does not point at an opening brace.
    pub fn is_balanced(
        &self,
        context: &str,
        open_brace_index: usize,
    ) -> Result<bool, AnalysisError> {
        Ok(self
            .matching_closing_brace_index(context, open_brace_index)?
            .is_some())
    }

    /// Index of the brace closing the one at `open_brace_index`, if any.
    ///
    /// Same preconditions as [`is_balanced`](Self::is_balanced).
    pub fn matching_closing_brace_index(
        &self,
        context: &str,
        open_brace_index: usize,
    ) -> Result<Option<usize>, AnalysisError> {
        let mut chars = context.chars().enumerate().skip(open_brace_index);
        let Some((_, found)) = chars.next() else {
            return Err(AnalysisError::InvalidBraceIndex {
                index: open_brace_index,
                len: context.chars().count(),
            });
        };
        let pair = self
            .pair_opened_by(found)
            .ok_or(AnalysisError::NotAnOpeningBrace {
                index: open_brace_index,
                found,
            })?;

        let mut depth = 1usize;
        for (index, ch) in chars {
            if ch == pair.open {
                depth += 1;
            } else if ch == pair.close {
                depth -= 1;
                if depth == 0 {
                    return Ok(Some(index));
                }
            }
        }
        Ok(None)
    }

    /// Index of the first closing brace that has no opening brace to match, or `None` if
    /// every closing brace in `context` is matched.
    ///
    /// Opening braces left unclosed at the end of `context` are not reported.
    pub fn first_unbalanced_closing_brace_index(&self, context: &str) -> Option<usize> {
        let mut open: Vec<BracePair> = Vec::new();
        for (index, ch) in context.chars().enumerate() {
            if let Some(pair) = self.pair_opened_by(ch) {
                open.push(pair);
            } else if let Some(pair) = self.pair_closed_by(ch) {
                match open.pop() {
                    Some(top) if top == pair => {}
                    _ => return Some(index),
                }
            }
        }
        None
    }
}

/// [`BraceBalanceChecker::is_balanced`] with the default pairs.
pub fn is_balanced(context: &str, open_brace_index: usize) -> Result<bool, AnalysisError> {
    BraceBalanceChecker::default().is_balanced(context, open_brace_index)
}

/// [`BraceBalanceChecker::first_unbalanced_closing_brace_index`] with the default pairs.
pub fn first_unbalanced_closing_brace_index(context: &str) -> Option<usize> {
    BraceBalanceChecker::default().first_unbalanced_closing_brace_index(context)
}
