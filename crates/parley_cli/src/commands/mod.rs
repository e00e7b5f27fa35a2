//! Command dispatch.

pub mod ask;
pub mod chat;
pub mod config;

use anyhow::Result;
use parley_observability::{init, ObservabilityConfig};
use parley_runtime::{LlmProvider, RuntimeConfig};

use crate::cli::{Cli, Command, ConfigAction, Overrides};
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;
    match cli.command {
        None => chat::handle(Overrides::default(), None, verbose).await,
        Some(Command::Chat { overrides, theme }) => chat::handle(overrides, theme, verbose).await,
        Some(Command::Ask { prompt, overrides }) => ask::handle(prompt.join(" "), overrides, verbose).await,
        Some(Command::Config { action }) => config::handle(action.unwrap_or(ConfigAction::Show), verbose).await,
    }
}

/// Env configuration with command-line overrides applied.
pub fn runtime_config(overrides: &Overrides) -> Result<RuntimeConfig> {
    let mut config = RuntimeConfig::from_env()?;
    if let Some(provider) = overrides.provider.as_deref() {
        config = config.with_provider(provider.parse::<LlmProvider>()?);
    }
    if let Some(model) = overrides.model.as_deref() {
        config = config.with_model(model);
    }
    Ok(config)
}

/// Console logging for the non-interactive commands. Quiet unless `verbose`.
fn init_console_logging(verbose: bool) {
    let mut obs_config = ObservabilityConfig::from_env();
    if verbose {
        obs_config = obs_config.with_log_level("debug");
    } else if obs_config.log_level.is_none() {
        obs_config = obs_config.with_log_level("warn");
    }
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }
}
