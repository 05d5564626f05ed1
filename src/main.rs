use alnview::{
    cli::{init_verbose, Cli, FULL_VERSION},
    commands::view,
    utils::{handle_error_and_exit, Result},
};
use clap::Parser;
use std::time;

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    log::info!("Running {}-{}", env!("CARGO_PKG_NAME"), FULL_VERSION);

    let start_timer = time::Instant::now();
    view::view(&cli)?;
    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
