//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal chat with Azure-hosted chat-completion models
#[derive(Parser)]
#[command(name = "parley", about, version, propagate_version = true)]
pub struct Cli {
    /// Defaults to `chat`
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

/// Per-invocation overrides of the env configuration.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct Overrides {
    /// Provider to use (azure, openai). Uses PARLEY_PROVIDER env if not set.
    #[arg(long)]
    pub provider: Option<String>,
    /// Model for OpenAI-compatible endpoints. Uses PARLEY_MODEL env if not set.
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive chat in the terminal UI
    Chat {
        #[command(flatten)]
        overrides: Overrides,
        /// Color scheme (dark, light). Uses PARLEY_THEME env if not set.
        #[arg(long)]
        theme: Option<String>,
    },
    /// Send one prompt and print the reply
    Ask {
        /// Prompt text
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration (default)
    Show,
    /// Save the API key to ~/.parley/env
    Api,
}
