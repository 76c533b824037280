//! Sprout CLI Application
//!
//! Command-line interface for managing community-garden projects stored on a
//! remote project store.

mod args;
mod cli;
mod renderer;
mod shell;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use shell::Shell;
use sprout_core::{display::OperationStatus, params::ListProjects, ManagerBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        base_url,
        timeout,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let builder = ManagerBuilder::new()
        .with_base_url(base_url)
        .with_timeout(timeout.map(Duration::from_secs));

    match command {
        Some(Commands::PlantTypes) => Cli::plant_types(&renderer),
        Some(Commands::Shell) => run_shell(builder, &renderer).await,
        command => run_once(builder, renderer, command).await,
    }
}

/// The shell starts even when the store is down; `reload` retries.
async fn run_shell(builder: ManagerBuilder, renderer: &TerminalRenderer) -> Result<()> {
    let manager = builder
        .build_unloaded()
        .context("Failed to initialize project manager")?;
    if let Err(e) = manager.load().await {
        renderer.render(&OperationStatus::from(&e).to_string())?;
    }

    info!("Sprout shell started");
    Shell::new(manager).run(renderer).await
}

async fn run_once(
    builder: ManagerBuilder,
    renderer: TerminalRenderer,
    command: Option<Commands>,
) -> Result<()> {
    let manager = builder
        .build()
        .await
        .context("Failed to load projects from the remote store")?;
    let cli = Cli::new(manager, renderer);

    info!("Sprout started");

    match command {
        Some(Commands::List(args)) => cli.list(&args.into()).await,
        Some(Commands::Show(args)) => cli.show(args.position, &args.view.into()).await,
        Some(Commands::Add(args)) => cli.add(&args.into()).await,
        Some(Commands::Edit(args)) => cli.edit(&args.into()).await,
        Some(Commands::Delete(args)) => cli.delete(&args.into()).await,
        Some(Commands::PlantTypes | Commands::Shell) | None => {
            cli.list(&ListProjects::default()).await
        }
    }
}
