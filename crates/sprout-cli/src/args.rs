use clap::{Parser, Subcommand};

use crate::cli::{AddArgs, DeleteArgs, EditArgs, ListArgs, ShowArgs};

/// Manage community-garden projects kept on a remote project store
///
/// Sprout lists, searches, filters and sorts the garden projects run by
/// schools and community groups, and creates, edits or deletes them on the
/// remote store. Every command loads the current project list first; `shell`
/// keeps one session open for interactive work.
#[derive(Parser)]
#[command(version, about, name = "sprout")]
pub struct Args {
    /// Base URL of the project store
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds. Defaults to 30
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Sprout CLI
///
/// Without a command, `list` runs with default parameters.
#[derive(Subcommand)]
pub enum Commands {
    /// List projects, optionally searched, filtered and sorted
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show one project by its position in the list
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Create a new project
    #[command(aliases = ["a", "new"])]
    Add(AddArgs),
    /// Change fields of an existing project
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Delete a project
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// List the plant types a project can grow
    PlantTypes,
    /// Start an interactive session
    Shell,
}
