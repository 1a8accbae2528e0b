#![warn(missing_docs)]
//! Editor Analysis - headless document analysis and search for text editors
//!
//! # Overview
//!
//! `editor-analysis` contains the parts of a text editor that operate on the document text
//! itself and nothing else. It does not know about windows, widgets or files: the host
//! hands it text plus a cursor offset and renders whatever comes back.
//!
//! # Components
//!
//! - [`metrics`] - single-pass character / word / line counting
//! - [`braces`] - brace balance checking at a given index
//! - [`search`] - literal search over character offsets (case-sensitive and whole-word)
//! - [`controller`] - stateful Find / Find Next / Replace / Replace All with wraparound
//! - [`session`] - one open document: text, cursor, cached metrics and search state
//! - [`config`] - policies and settings shared by the components
//!
//! All offsets in the public API are **character offsets**.
//!
//! # Quick Start
//!
//! ```rust
//! use editor_analysis::{SearchController, SearchOptions, SearchOutcome, scan};
//!
//! let metrics = scan("hello world\n");
//! assert_eq!(metrics.word_count, 2);
//! assert_eq!(metrics.line_count, 1);
//!
//! let mut controller = SearchController::default();
//! let text = "cat dog cat";
//! let first = controller.find(text, "cat", false, SearchOptions::default()).unwrap();
//! let second = controller.find(text, "cat", true, SearchOptions::default()).unwrap();
//! assert!(matches!(first, SearchOutcome::Found(m) if m.start == 0));
//! assert!(matches!(second, SearchOutcome::Found(m) if m.start == 8));
//! ```
//!
//! ```rust
//! use editor_analysis::braces::{first_unbalanced_closing_brace_index, is_balanced};
//!
//! assert!(is_balanced("a(b(c)d)e", 1).unwrap());
//! assert_eq!(first_unbalanced_closing_brace_index("a(b))c"), Some(4));
//! ```

pub mod braces;
pub mod config;
pub mod controller;
mod error;
pub mod metrics;
pub mod search;
pub mod session;

pub use braces::BraceBalanceChecker;
pub use config::{AnalysisConfig, RetryPolicy, ScanPolicy};
pub use controller::{
    ActiveQuery, ReplaceOutcome, SearchController, SearchOutcome, SearchPhase, SearchState,
};
pub use editor_analysis_lang::{BracePair, Language, LanguageConfig};
pub use error::AnalysisError;
pub use metrics::{DocumentMetrics, MetricsScanner, scan};
pub use search::{SearchMatch, SearchOptions};
pub use session::DocumentSession;
