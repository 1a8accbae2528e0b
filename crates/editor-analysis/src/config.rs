//! Analysis configuration.
//!
//! Whitespace counting and the Find Next retry options each come in two variants: the
//! default counts every character and retries with the caller's options, the alternatives
//! collapse whitespace runs and force whole-word case-sensitive retries.

use crate::AnalysisError;
use serde::{Deserialize, Serialize};

/// How the metrics scanner counts whitespace toward `char_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// Every non-newline character counts once.
    #[default]
    CountEveryCharacter,
    /// A run of non-newline whitespace counts as a single character.
    CollapseWhitespaceRuns,
}

/// Options used for the single wraparound retry of a failed Find Next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Retry with the options the caller asked for.
    #[default]
    CallerOptions,
    /// Retry with whole-word and case-sensitive matching, whatever the caller asked for.
    WholeWordCaseSensitive,
}

/// Configuration shared by the scanner, the search controller and document sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Whitespace counting policy.
    pub scan_policy: ScanPolicy,
    /// Find Next wraparound policy.
    pub retry_policy: RetryPolicy,
    /// Tab width in character cells, used for visual columns. Must be greater than 0.
    pub tab_width: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            scan_policy: ScanPolicy::default(),
            retry_policy: RetryPolicy::default(),
            tab_width: 4,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// A `tab_width` of 0 is replaced by 1.
    pub fn from_json_str(json: &str) -> Result<Self, AnalysisError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.tab_width = config.tab_width.max(1);
        Ok(config)
    }

    /// Use the given whitespace counting policy.
    pub fn with_scan_policy(mut self, scan_policy: ScanPolicy) -> Self {
        self.scan_policy = scan_policy;
        self
    }

    /// Use the given Find Next retry policy.
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Use the given tab width (clamped to at least 1).
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }
}
