mod cli;
mod commands;
mod error;
mod logging;

use cli::{CheckParams, NormalizeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("normalize", m)) => {
            let params = NormalizeParams::from_matches(m);
            logging::init(params.verbose);
            commands::normalize::run(params.into())
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            logging::init(params.verbose);
            commands::check::run(params.into())
        }
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
