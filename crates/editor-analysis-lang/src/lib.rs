#![warn(missing_docs)]
//! `editor-analysis-lang` - data-driven language configuration for `editor-analysis`.
//!
//! This crate stays lightweight and has no dependencies. It maps file names to the
//! programming languages the editor knows about and provides the per-language brace pair
//! table that the analysis core's brace checker consumes.

use std::fmt;
use std::path::Path;

/// A programming language the editor can be switched into.
///
/// [`Language::None`] is plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Plain text.
    #[default]
    None,
    /// C.
    C,
    /// C++.
    Cpp,
    /// Java.
    Java,
    /// Python.
    Python,
}

impl Language {
    /// Every language that can be selected, in menu order.
    pub const ALL: [Language; 5] = [
        Language::None,
        Language::C,
        Language::Cpp,
        Language::Java,
        Language::Python,
    ];

    /// Map a bare file extension (without the dot) to a language.
    ///
    /// Matching is case-insensitive. Unknown extensions map to [`Language::None`].
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "c" => Language::C,
            "cpp" | "cc" | "cxx" | "h" | "hpp" => Language::Cpp,
            "java" => Language::Java,
            "py" => Language::Python,
            _ => Language::None,
        }
    }

    /// Detect the language from a file name or path using its last extension.
    ///
    /// Files without an extension (including dotfiles such as `.bashrc`) are plain text.
    pub fn from_file_name(file_name: impl AsRef<Path>) -> Self {
        file_name
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }

    /// Human readable name, as shown in a status bar.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::None => "Plain text",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::Python => "Python",
        }
    }

    /// The analysis configuration for this language.
    ///
    /// Every language the editor knows tracks the default `()`, `[]` and `{}` pairs.
    pub fn config(self) -> LanguageConfig {
        LanguageConfig {
            language: self,
            brace_pairs: BracePair::DEFAULT.to_vec(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An opening/closing bracket pair, e.g. `(` and `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracePair {
    /// Opening character.
    pub open: char,
    /// Closing character.
    pub close: char,
}

impl BracePair {
    /// `(` / `)`.
    pub const PAREN: BracePair = BracePair::new('(', ')');
    /// `[` / `]`.
    pub const BRACKET: BracePair = BracePair::new('[', ']');
    /// `{` / `}`.
    pub const CURLY: BracePair = BracePair::new('{', '}');
    /// The pairs tracked when nothing more specific is configured.
    pub const DEFAULT: [BracePair; 3] = [Self::PAREN, Self::BRACKET, Self::CURLY];

    /// Create a pair from its opening and closing characters.
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }
}

/// Everything the analysis core needs to know about a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// The language this config describes.
    pub language: Language,
    /// Brace pairs checked by the brace balance checker.
    pub brace_pairs: Vec<BracePair>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Language::None.config()
    }
}
