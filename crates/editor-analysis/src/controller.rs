//! Stateful find/replace.
//!
//! [`SearchController`] remembers where the previous match ended so that successive
//! "Find Next" requests walk through the document, wrapping around to the start once when
//! the end is reached.
//!
//! # State machine
//!
//! ```text
//!            find ok                     find ok
//!   Idle ───────────────▶ HasLastMatch ◀──────────┐
//!    ▲                        │  │                │
//!    │      find failed       │  └────────────────┘
//!    └────────────────────────┘
//!          (or invalidate)
//! ```
//!
//! - A plain Find always scans from the start of the document.
//! - Find Next resumes after the previous match; from `Idle` it is a plain Find.
//! - If Find Next finds nothing before the end of the document, it retries exactly once from
//!   the start, using the options selected by the [`RetryPolicy`].
//!
//! The controller does not observe the document. Whoever edits the text must call
//! [`SearchController::invalidate`]; [`DocumentSession`](crate::DocumentSession) does so on
//! every edit.

use crate::AnalysisError;
use crate::config::RetryPolicy;
use crate::search::{self, SearchMatch, SearchOptions};
use tracing::debug;

/// The query of the most recent search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQuery {
    /// Query text.
    pub text: String,
    /// Options the query was issued with.
    pub options: SearchOptions,
}

/// State retained between search requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// End (exclusive char offset) of the last successful match.
    ///
    /// `None` when no search happened yet, when the last search failed, or after the state
    /// was invalidated.
    pub last_match_end: Option<usize>,
    /// The most recently requested query, whether or not it matched.
    pub active_query: Option<ActiveQuery>,
}

/// Coarse state of a [`SearchController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No remembered match.
    Idle,
    /// A previous match is remembered; Find Next resumes after it.
    HasLastMatch,
}

impl SearchState {
    /// The state machine phase this state corresponds to.
    pub fn phase(&self) -> SearchPhase {
        if self.last_match_end.is_some() {
            SearchPhase::HasLastMatch
        } else {
            SearchPhase::Idle
        }
    }
}

/// Result of a find request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A match was found.
    Found(SearchMatch),
    /// No match anywhere in the document.
    NotFound,
}

impl SearchOutcome {
    /// The match, if one was found.
    pub fn found(self) -> Option<SearchMatch> {
        match self {
            SearchOutcome::Found(m) => Some(m),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Result of a single replace request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// One occurrence was replaced; the range covers the inserted replacement text.
    Replaced(SearchMatch),
    /// Nothing to replace.
    NotFound,
}

/// Find/replace controller for a single document.
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    state: SearchState,
    retry_policy: RetryPolicy,
}

impl SearchController {
    /// Create an idle controller using `retry_policy` for Find Next wraparound.
    pub fn new(retry_policy: RetryPolicy) -> Self {
        Self {
            state: SearchState::default(),
            retry_policy,
        }
    }

    /// The retained search state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The current phase of the state machine.
    pub fn phase(&self) -> SearchPhase {
        self.state.phase()
    }

    /// The configured Find Next wraparound policy.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Forget the last match. Must be called whenever the document text changes.
    pub fn invalidate(&mut self) {
        if self.state.last_match_end.take().is_some() {
            debug!("search state invalidated");
        }
    }

    fn retry_options(&self, requested: SearchOptions) -> SearchOptions {
        match self.retry_policy {
            RetryPolicy::CallerOptions => requested,
            RetryPolicy::WholeWordCaseSensitive => SearchOptions::new(true, true),
        }
    }

    /// Find `query` in `document`.
    ///
    /// With `find_next` set and a remembered match, the scan resumes at the end of that
    /// match and wraps around once; otherwise it starts at the beginning of the document.
    /// An empty query never matches.
    pub fn find(
        &mut self,
        document: &str,
        query: &str,
        find_next: bool,
        options: SearchOptions,
    ) -> Result<SearchOutcome, AnalysisError> {
        self.state.active_query = Some(ActiveQuery {
            text: query.to_string(),
            options,
        });

        let from = if find_next {
            self.state.last_match_end.unwrap_or(0)
        } else {
            0
        };

        let mut found = search::find_next(document, query, options, from)?;
        if found.is_none() && find_next {
            let retry = self.retry_options(options);
            if from > 0 || retry != options {
                debug!(from, ?retry, "find next wrapped around to document start");
                found = search::find_next(document, query, retry, 0)?;
            }
        }

        match found {
            Some(m) => {
                debug!(start = m.start, end = m.end, find_next, "match found");
                self.state.last_match_end = Some(m.end);
                Ok(SearchOutcome::Found(m))
            }
            None => {
                debug!(find_next, "no match found");
                self.state.last_match_end = None;
                Ok(SearchOutcome::NotFound)
            }
        }
    }

    /// Replace the next occurrence of `query` in `document` with `replacement`.
    ///
    /// The occurrence is located like a Find Next (resuming after the last match, with
    /// wraparound). Afterwards the controller resumes after the inserted text, so repeated
    /// calls walk through the document even when `replacement` contains `query`.
    pub fn replace(
        &mut self,
        document: &mut String,
        query: &str,
        replacement: &str,
        options: SearchOptions,
    ) -> Result<ReplaceOutcome, AnalysisError> {
        let SearchOutcome::Found(m) = self.find(document, query, true, options)? else {
            return Ok(ReplaceOutcome::NotFound);
        };

        *document = search::splice(document, &[m], replacement);
        let inserted = SearchMatch::new(m.start, m.start + replacement.chars().count());
        self.state.last_match_end = Some(inserted.end);
        debug!(
            start = inserted.start,
            end = inserted.end,
            "replaced one occurrence"
        );
        Ok(ReplaceOutcome::Replaced(inserted))
    }

    /// Replace every non-overlapping occurrence of `query` in `document`, left to right.
    ///
    /// Returns the number of replacements. The controller is left idle.
    pub fn replace_all(
        &mut self,
        document: &mut String,
        query: &str,
        replacement: &str,
        options: SearchOptions,
    ) -> Result<usize, AnalysisError> {
        self.state.active_query = Some(ActiveQuery {
            text: query.to_string(),
            options,
        });
        self.state.last_match_end = None;

        let matches = search::find_all(document, query, options)?;
        if !matches.is_empty() {
            *document = search::splice(document, &matches, replacement);
        }
        debug!(replaced = matches.len(), "replace all");
        Ok(matches.len())
    }
}
