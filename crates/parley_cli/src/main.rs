//! CLI entry point for parley.

mod cli;
mod commands;
mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use parley_constant::app::{DATA_DIR, ENV_FILE};

use crate::cli::Cli;

/// Nearest `relative` file in `start` or one of its parents.
fn find_upwards(start: &Path, relative: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take(32)
        .map(|dir| dir.join(relative))
        .find(|candidate| candidate.is_file())
}

/// Load env files without overriding variables already set. First file wins:
/// 1) ~/.parley/env  2) .parley/env (project)  3) .env (project root)
fn load_parley_config() {
    if let Some(home) = dirs::home_dir() {
        let path = home.join(DATA_DIR).join(ENV_FILE);
        if path.is_file() {
            let _ = dotenvy::from_path(&path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let project_env = Path::new(DATA_DIR).join(ENV_FILE);
        for relative in [project_env.as_path(), Path::new(".env")] {
            if let Some(path) = find_upwards(&cwd, relative) {
                let _ = dotenvy::from_path(&path);
            }
        }
    }
}

#[tokio::main]
async fn main() {
    load_parley_config();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
