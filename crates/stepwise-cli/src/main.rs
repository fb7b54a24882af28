//! Stepwise CLI Application
//!
//! Command-line front end that drives stored multi-step forms one command at
//! a time.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use stepwise_core::{params::ListForms, FormStoreBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = FormStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize form store")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(store, renderer);

    info!("Stepwise started");

    match command {
        Some(Commands::Form { command }) => cli.handle_form_command(command).await,
        Some(Commands::Step { command }) => cli.handle_step_command(command).await,
        None => cli.list_forms(&ListForms::default()).await,
    }
}
