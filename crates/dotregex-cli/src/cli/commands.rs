//! Command builders for the CLI.
//!
//! Every command takes the same pattern input and option flags. Output flags that a
//! command ignores are still accepted but hidden from `--help`, so switching between
//! `tree`, `check` and `captures` never breaks a command line.

use clap::Command;

use super::args::*;

/// Pattern input plus the regex option flags.
fn with_pattern_args(cmd: Command) -> Command {
    cmd.arg(pattern_path_arg())
        .arg(pattern_text_arg())
        .arg(ignore_case_arg())
        .arg(multiline_arg())
        .arg(explicit_capture_arg())
        .arg(singleline_arg())
        .arg(ignore_pattern_whitespace_arg())
        .arg(right_to_left_arg())
        .arg(ecmascript_arg())
        .arg(options_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
}

/// Add hidden tree output args (for commands that don't print the tree).
fn with_hidden_tree_args(cmd: Command) -> Command {
    cmd.arg(spans_arg().hide(true)).arg(trivia_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("dotregex")
        .about("Inspect and validate .NET regular expression patterns")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tree_command())
        .subcommand(check_command())
        .subcommand(captures_command())
}

/// Print the concrete syntax tree.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Print the concrete syntax tree of a pattern")
        .override_usage(
            "\
  dotregex tree <FILE>
  dotregex tree -p <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  dotregex tree -p '(?<year>\d{4})-\d{2}'     # syntax tree
  dotregex tree -p 'a+ # note' -x --trivia   # include comments
  dotregex tree pattern.txt --spans          # with source ranges"#,
        )
        .arg(spans_arg())
        .arg(trivia_arg())
        .arg(json_arg().hide(true));

    with_pattern_args(cmd)
}

/// Validate a pattern.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report diagnostics, exit with 1 if there are any")
        .override_usage(
            "\
  dotregex check <FILE>
  dotregex check -p <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  dotregex check -p '(a'               # not enough )'s
  dotregex check -p '\k<x>' --json     # diagnostics as JSON
  echo '[z-a]' | dotregex check -      # from stdin"#,
        )
        .arg(json_arg());

    with_hidden_tree_args(with_pattern_args(cmd))
}

/// Show the capture table.
pub fn captures_command() -> Command {
    let cmd = Command::new("captures")
        .about("List capture groups by number and name")
        .override_usage(
            "\
  dotregex captures <FILE>
  dotregex captures -p <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  dotregex captures -p '(a)(?<n>b)'         # numbers, then names
  dotregex captures -p '(a)(b)' -n          # explicit capture
  dotregex captures -p '(?<x>a)' --json     # table as JSON"#,
        )
        .arg(json_arg());

    with_hidden_tree_args(with_pattern_args(cmd))
}
