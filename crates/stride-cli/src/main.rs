//! Stride CLI Application
//!
//! Command-line interface and MCP server for multi-week activity plans.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, StrideMcpServer};
use renderer::TerminalRenderer;
use stride_core::{OwnerId, PlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        storage_file,
        store,
        owner,
        no_color,
        command,
    } = Args::parse();

    // Commands that never touch storage
    let command = match command {
        Some(Template) => {
            cli::print_template();
            return Ok(());
        }
        Some(Reflow(args)) => return cli::print_reflowed(args),
        other => other,
    };

    let owner = OwnerId::new(owner).context("Invalid --owner")?;
    let planner = PlannerBuilder::new()
        .with_storage_path(storage_file)
        .with_storage_kind(store.into())
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Stride started with {} storage", planner.storage_kind());
    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Some(Serve) => {
            info!("Starting Stride MCP server");
            run_stdio_server(StrideMcpServer::new(planner, owner))
                .await
                .context("MCP server failed")
        }
        Some(Load(args)) => Cli::new(planner, owner, renderer).load_plan(args).await,
        Some(Show(args)) => Cli::new(planner, owner, renderer).show_plan(args).await,
        Some(Week { command }) => {
            Cli::new(planner, owner, renderer)
                .handle_week_command(command)
                .await
        }
        _ => Cli::new(planner, owner, renderer).list_plans().await,
    }
}
