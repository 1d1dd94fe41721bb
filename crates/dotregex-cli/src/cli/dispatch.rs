//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields and ignore hidden ones
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use dotregex_lib::RegexOptions;
use dotregex_lib::parser::DEFAULT_RECURSION_LIMIT;

use super::ColorChoice;
use crate::commands::captures::CapturesArgs;
use crate::commands::check::CheckArgs;
use crate::commands::tree::TreeArgs;
use crate::commands::PatternArgs;

/// Input and parser settings shared by every command.
pub struct PatternParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub options: RegexOptions,
    pub recursion_limit: Option<u32>,
}

impl PatternParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            options: parse_options(m),
            recursion_limit: parse_recursion_limit(m),
        }
    }
}

impl From<PatternParams> for PatternArgs {
    fn from(p: PatternParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            options: p.options,
            recursion_limit: p.recursion_limit,
        }
    }
}

pub struct TreeParams {
    pub pattern: PatternParams,
    pub spans: bool,
    pub trivia: bool,
    pub color: ColorChoice,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            spans: m.get_flag("spans"),
            trivia: m.get_flag("trivia"),
            color: parse_color(m),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            pattern: p.pattern.into(),
            spans: p.spans,
            trivia: p.trivia,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub pattern: PatternParams,
    pub json: bool,
    pub color: ColorChoice,
    // spans and trivia are parsed but not extracted (unified flags)
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern.into(),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CapturesParams {
    pub pattern: PatternParams,
    pub json: bool,
    pub color: ColorChoice,
}

impl CapturesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: PatternParams::from_matches(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CapturesParams> for CapturesArgs {
    fn from(p: CapturesParams) -> Self {
        Self {
            pattern: p.pattern.into(),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

/// Union of the single-letter flags and `--options`.
fn parse_options(m: &ArgMatches) -> RegexOptions {
    let mut options = m
        .get_one::<RegexOptions>("options")
        .copied()
        .unwrap_or(RegexOptions::NONE);

    let flags = [
        ("ignore_case", RegexOptions::IGNORE_CASE),
        ("multiline", RegexOptions::MULTILINE),
        ("explicit_capture", RegexOptions::EXPLICIT_CAPTURE),
        ("singleline", RegexOptions::SINGLELINE),
        ("ignore_pattern_whitespace", RegexOptions::IGNORE_PATTERN_WHITESPACE),
        ("right_to_left", RegexOptions::RIGHT_TO_LEFT),
        ("ecmascript", RegexOptions::ECMA_SCRIPT),
    ];
    for (id, flag) in flags {
        if m.get_flag(id) {
            options.insert(flag);
        }
    }
    options
}

/// `0` turns the guard off; absent means the library default.
fn parse_recursion_limit(m: &ArgMatches) -> Option<u32> {
    match m.get_one::<u32>("recursion_limit").copied() {
        Some(0) => None,
        Some(limit) => Some(limit),
        None => Some(DEFAULT_RECURSION_LIMIT),
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
