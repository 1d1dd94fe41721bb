use super::run_common::{PatternArgs, parse_pattern, render_diagnostics};

pub struct CapturesArgs {
    pub pattern: PatternArgs,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: CapturesArgs) {
    let (pattern, tree) = parse_pattern(&args.pattern);

    if args.json {
        match serde_json::to_string_pretty(tree.captures()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", tree.printer().only_captures(true).dump());
    }

    eprint!("{}", render_diagnostics(&pattern, &tree, args.color));
}
