mod cli;
mod commands;

use cli::{CapturesParams, CheckParams, TreeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("captures", m)) => {
            let params = CapturesParams::from_matches(m);
            commands::captures::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
