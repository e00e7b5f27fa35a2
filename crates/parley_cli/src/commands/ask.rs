//! `parley ask`: one request, reply printed to stdout.

use anyhow::{anyhow, Result};
use parley_runtime::Runtime;
use parley_tui::messages::chat::display_segments;

use crate::cli::Overrides;
use crate::commands::{init_console_logging, runtime_config};
use crate::output;

pub async fn handle(prompt: String, overrides: Overrides, verbose: bool) -> Result<()> {
    init_console_logging(verbose);
    let config = runtime_config(&overrides)?;
    let mut runtime = Runtime::new(config.build_client()?);

    let spinner = output::spinner("Waiting for reply…");
    let reply = runtime.ask(&prompt).await;
    spinner.finish_and_clear();

    let message = reply?.ok_or_else(|| anyhow!("empty reply from completion service"))?;
    output::segments(&display_segments(&message));
    Ok(())
}
