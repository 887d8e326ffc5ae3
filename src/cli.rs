use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "n00p", about = "Repo-local helper for n00plicate")]
pub struct Cli {
    #[arg(long, global = true)]
    pub json: bool,

    /// Repository root to operate on
    #[arg(long, global = true, default_value = ".")]
    pub root: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List available packages
    Packages,
    /// Show git status for the repository
    Status,
}
