//! Shared logic for all commands: load the pattern, parse it, render diagnostics.

use std::path::PathBuf;

use dotregex_lib::{Error, RegexOptions, RegexParser, RegexTree, VirtualCharSequence};

use super::pattern_loader::{LoadedPattern, load_pattern};

pub struct PatternArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub options: RegexOptions,
    pub recursion_limit: Option<u32>,
}

/// Loads and parses the pattern, exiting with status 1 when either step fails.
pub fn parse_pattern(args: &PatternArgs) -> (LoadedPattern, RegexTree) {
    let pattern = match load_pattern(args.pattern_path.as_deref(), args.pattern_text.as_deref()) {
        Ok(pattern) => pattern,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let chars = VirtualCharSequence::from(pattern.text.as_str());
    let result = RegexParser::new(&chars)
        .options(args.options)
        .recursion_limit(args.recursion_limit)
        .parse();

    match result {
        Ok(tree) => (pattern, tree),
        Err(Error::RecursionLimitExceeded) => {
            eprintln!("error: pattern too complex to analyze");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Diagnostics as annotated snippets, empty when there are none.
pub fn render_diagnostics(pattern: &LoadedPattern, tree: &RegexTree, color: bool) -> String {
    let printer = tree
        .diagnostics()
        .printer(&pattern.text)
        .colored(color);
    match pattern.path() {
        Some(path) => printer.path(path).render(),
        None => printer.render(),
    }
}
