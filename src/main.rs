use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use billsplit::{
    core::state::AppState,
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;
    let state = AppState::new_with_config(config);

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate)
            .paste(true),
    ));
    let mut runner = AppRunner::new(state, tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
