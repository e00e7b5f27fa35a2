//! `parley chat`: run the interactive TUI with the runtime on its own task.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{bail, Result};
use parley_core::SessionEvent;
use parley_observability::{init, shutdown, LogSink, ObservabilityConfig};
use parley_runtime::Runtime;
use parley_tui::{run_tui_with_runtime, Appearance, Branding};
use tokio::sync::mpsc;

use crate::cli::Overrides;
use crate::commands::runtime_config;
use crate::output;

pub async fn handle(overrides: Overrides, theme: Option<String>, verbose: bool) -> Result<()> {
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        bail!("parley chat needs an interactive terminal (TTY); use `parley ask <prompt>` instead");
    }

    let mut config = runtime_config(&overrides)?;
    if let Some(theme) = theme {
        config = config.with_theme(theme)?;
    }
    let client = config.build_client()?;

    // Channel for runtime logs → TUI debug traces screen (Ctrl+D)
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: LogSink = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });
    let mut obs_config = ObservabilityConfig::from_env().with_console(false).with_log_sink(log_sink);
    if verbose {
        obs_config = obs_config.with_log_level("debug");
    }
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }

    let appearance = config.theme.parse::<Appearance>().unwrap_or_default();
    let branding = Branding::load(&config.branding);
    tracing::info!(provider = %config.provider, endpoint = %config.endpoint_url(), "starting chat");

    let (event_tx, event_rx) = mpsc::channel::<SessionEvent>(256);
    let (user_msg_tx, user_msg_rx) = mpsc::channel::<String>(64);
    let runtime = tokio::spawn(Runtime::new(client).run(user_msg_rx, event_tx));

    let result = run_tui_with_runtime(event_rx, user_msg_tx, Some(log_rx), branding, appearance);

    // Drop any turn still in flight.
    runtime.abort();
    shutdown();
    result
}
