use super::run_common::{PatternArgs, parse_pattern, render_diagnostics};

pub struct TreeArgs {
    pub pattern: PatternArgs,
    pub spans: bool,
    pub trivia: bool,
    pub color: bool,
}

/// Prints the tree even for invalid patterns; the tree is the point of recovery.
pub fn run(args: TreeArgs) {
    let (pattern, tree) = parse_pattern(&args.pattern);

    print!(
        "{}",
        tree.printer()
            .with_spans(args.spans)
            .with_trivia(args.trivia)
            .dump()
    );
    eprint!("{}", render_diagnostics(&pattern, &tree, args.color));
}
