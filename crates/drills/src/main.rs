use std::process::ExitCode;

use anyhow::Result;
use clap::ArgMatches;
use drills::cli::{
    build_cli,
    handlers::{dispatch, Collaborators, Context},
    setup,
};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = setup::init_tracing() {
        eprintln!("Warning: {e}");
    }

    let matches = build_cli().get_matches();
    match run(&matches).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(u8::try_from(setup::exit_code(&e)).unwrap_or(1))
        }
    }
}

async fn run(matches: &ArgMatches) -> Result<()> {
    let config = setup::load(matches)?;
    let ctx = Context::from_config(&config, Collaborators::simulated())?;
    dispatch(matches, &ctx).await
}
