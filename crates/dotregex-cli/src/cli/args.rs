//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose. The same definition can
//! be reused with different visibility (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use dotregex_lib::RegexOptions;

/// Pattern file (positional, `-` for stdin).
pub fn pattern_path_arg() -> Arg {
    Arg::new("pattern_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("pattern_text")
        .help("Pattern file (use \"-\" for stdin)")
}

/// Inline pattern (-p/--pattern).
pub fn pattern_text_arg() -> Arg {
    Arg::new("pattern_text")
        .short('p')
        .long("pattern")
        .value_name("TEXT")
        .allow_hyphen_values(true)
        .help("Inline pattern text")
}

fn flag(id: &'static str, short: char, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(long)
        .action(ArgAction::SetTrue)
        .help(help)
}

/// -i/--ignore-case
pub fn ignore_case_arg() -> Arg {
    flag("ignore_case", 'i', "ignore-case", "Case-insensitive matching (i)")
}

/// -m/--multiline
pub fn multiline_arg() -> Arg {
    flag("multiline", 'm', "multiline", "^ and $ match at line breaks (m)")
}

/// -n/--explicit-capture
pub fn explicit_capture_arg() -> Arg {
    flag(
        "explicit_capture",
        'n',
        "explicit-capture",
        "Only named or numbered groups capture (n)",
    )
}

/// -s/--singleline
pub fn singleline_arg() -> Arg {
    flag("singleline", 's', "singleline", ". matches every character (s)")
}

/// -x/--ignore-pattern-whitespace
pub fn ignore_pattern_whitespace_arg() -> Arg {
    flag(
        "ignore_pattern_whitespace",
        'x',
        "ignore-pattern-whitespace",
        "Whitespace and # comments are trivia (x)",
    )
}

/// --right-to-left
pub fn right_to_left_arg() -> Arg {
    Arg::new("right_to_left")
        .long("right-to-left")
        .action(ArgAction::SetTrue)
        .help("Right-to-left matching")
}

/// --ecmascript
pub fn ecmascript_arg() -> Arg {
    Arg::new("ecmascript")
        .long("ecmascript")
        .action(ArgAction::SetTrue)
        .help("ECMAScript-compatible behavior")
}

/// Option letters in one go (--options).
pub fn options_arg() -> Arg {
    Arg::new("options")
        .long("options")
        .value_name("LETTERS")
        .value_parser(|s: &str| s.parse::<RegexOptions>().map_err(|e| e.to_string()))
        .help("Option letters, e.g. \"ix\" (r = right-to-left, e = ECMAScript)")
}

/// Nesting limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting depth (0 disables the limit, default 100)")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Include trivia tokens (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include trivia tokens (comments, whitespace under x)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}
