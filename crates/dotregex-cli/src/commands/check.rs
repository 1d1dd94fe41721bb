use dotregex_lib::Diagnostic;
use serde::Serialize;

use super::run_common::{PatternArgs, parse_pattern, render_diagnostics};

pub struct CheckArgs {
    pub pattern: PatternArgs,
    pub json: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    valid: bool,
    diagnostics: Vec<&'a Diagnostic>,
}

pub fn run(args: CheckArgs) {
    let (pattern, tree) = parse_pattern(&args.pattern);

    if args.json {
        let report = CheckReport {
            valid: tree.is_valid(),
            diagnostics: tree.diagnostics().iter().collect(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        eprint!("{}", render_diagnostics(&pattern, &tree, args.color));
    }

    if !tree.is_valid() {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
