//! Clap argument types

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Validate bugjira configuration and inspect field data.
#[derive(Parser, Debug)]
#[command(name = "bugjira", version)]
pub struct Cli {
    /// Log output format (overrides LOG_FORMAT).
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and validate a config file.
    Check {
        /// Path to the JSON config file.
        #[arg(long, short)]
        config: PathBuf,
    },

    /// List the fields supplied by a backend's field data plugin.
    Fields {
        /// Path to the JSON config file.
        #[arg(long, short)]
        config: PathBuf,

        /// Backend whose fields to list.
        #[arg(long, short, value_enum)]
        backend: BackendArg,
    },

    /// Print which backend an issue key belongs to.
    Route {
        /// A bugzilla bug id or a jira issue key.
        key: String,
    },

    /// Write an example config file.
    Init {
        /// Destination path.
        #[arg(default_value = "bugjira.json")]
        path: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendArg {
    Bugzilla,
    Jira,
}

impl From<BackendArg> for types::Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Bugzilla => types::Backend::Bugzilla,
            BackendArg::Jira => types::Backend::Jira,
        }
    }
}
