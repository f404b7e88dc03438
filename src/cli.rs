// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use dockery::output::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dockery")]
#[command(about = "Watch and control local Docker and Podman containers")]
#[command(version)]
pub struct Cli {
    /// Path to a configuration file (default: dockery.yml in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Normal)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Normal,
    Quiet,
    Json,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Normal => OutputMode::Normal,
            OutputFormat::Quiet => OutputMode::Quiet,
            OutputFormat::Json => OutputMode::Json,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all containers, running first
    List,

    /// Show the full detail of one container
    Inspect {
        /// Container name or id
        name: String,
    },

    /// Keep the container list up to date as runtime events arrive
    Watch {
        /// Only react to events for this container id
        #[arg(long)]
        container: Option<String>,
    },

    /// Show runtime version information
    Info,

    /// Start a created or exited container
    Start { name: String },

    /// Stop a running container
    Stop { name: String },

    /// Pause a running container
    Pause { name: String },

    /// Resume a paused container
    Resume { name: String },

    /// Restart a container
    Restart { name: String },

    /// Kill a container
    Kill { name: String },

    /// Remove a container (kills it unless `remove: remove` is configured)
    Remove { name: String },
}
