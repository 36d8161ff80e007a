use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use stride_core::StorageKind;

use crate::cli::{LoadArgs, ReflowArgs, ShowArgs, WeekCommands};

/// Schedule, track and edit multi-week activity plans
///
/// Stride takes a weekday-keyed plan template, anchors it to real calendar
/// dates from a start date, stores it per owner, and lets you edit one week
/// at a time. It can also run as an MCP (Model Context Protocol) server so an
/// assistant can draft and adjust plans for you.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Path to the storage file. Defaults to $XDG_DATA_HOME/stride/stride.db
    /// for list storage or $XDG_DATA_HOME/stride/action_plans.json for single
    /// storage
    #[arg(long, global = true)]
    pub storage_file: Option<PathBuf>,

    /// Storage layout: many plans per owner, or one
    #[arg(long, global = true, value_enum, default_value_t = StoreArg::List)]
    pub store: StoreArg,

    /// Owner whose plans are read and written
    #[arg(long, global = true, default_value = "local")]
    pub owner: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stride CLI
///
/// Without a command, the owner's plans are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the starter plan template as JSON
    #[command(alias = "t")]
    Template,
    /// Anchor a plan file to a start date and print it, without storing
    Reflow(ReflowArgs),
    /// Validate a plan file, anchor it to a start date and store it
    #[command(alias = "l")]
    Load(LoadArgs),
    /// List stored plans
    #[command(alias = "ls")]
    List,
    /// Show a stored plan with all its weeks
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Edit one week of a stored plan
    #[command(alias = "w")]
    Week {
        #[command(subcommand)]
        command: WeekCommands,
    },
    /// Start the MCP server
    Serve,
}

/// Command-line representation of the storage layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreArg {
    /// Many plans per owner, addressed by ID (SQLite)
    List,
    /// One plan per owner (JSON file)
    Single,
}

impl From<StoreArg> for StorageKind {
    fn from(val: StoreArg) -> Self {
        match val {
            StoreArg::List => StorageKind::List,
            StoreArg::Single => StorageKind::Single,
        }
    }
}
