mod determine;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "sexdeterrmine";
    pub const BIN_NAME: &str = "sexdeterrmine";
}

fn build_parser() -> Command {
    determine::cli::create_sexdeterrmine_cli()
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag(determine::cli::VERBOSE_ARG));

    determine::handlers::run_sexdeterrmine(&matches)?;

    Ok(())
}
