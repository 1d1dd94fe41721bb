//! dotregex: lossless parser for .NET regular expression patterns.
//!
//! # Example
//!
//! ```
//! use dotregex_lib::{RegexOptions, RegexTree, VirtualCharSequence};
//!
//! let chars = VirtualCharSequence::from("(?<year>\\d{4})-(?<month>\\d{2})");
//! let tree = RegexTree::parse(Some(&chars), RegexOptions::NONE).expect("too complex");
//!
//! assert!(tree.diagnostics().is_empty());
//! assert!(tree.captures().has_name("year"));
//! eprintln!("{}", tree.diagnostics().render(chars.text()));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod captures;
pub mod chars;
pub mod diagnostics;
pub mod options;
pub mod parser;
pub mod printer;
pub mod tree;


/// Result type for analysis passes that produce both output and diagnostics.
///
/// Each pass returns its typed output alongside any diagnostics it collected.
/// Fatal errors (like the recursion guard) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use captures::CaptureTable;
pub use chars::{VirtualChar, VirtualCharSequence};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use options::RegexOptions;
pub use parser::RegexParser;
pub use printer::TreePrinter;
pub use tree::RegexTree;

/// Fatal conditions that abort a parse. Everything else is a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (pattern nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, Error>;
