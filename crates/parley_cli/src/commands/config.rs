//! `parley config` subcommands.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use parley_constant::app::{DATA_DIR, ENV_FILE};
use parley_runtime::RuntimeConfig;

use crate::cli::ConfigAction;
use crate::commands::init_console_logging;
use crate::output;

const API_KEY_VAR: &str = "PARLEY_API_KEY";

pub async fn handle(action: ConfigAction, verbose: bool) -> Result<()> {
    init_console_logging(verbose);
    match action {
        ConfigAction::Show => show(),
        ConfigAction::Api => configure_api(),
    }
}

/// Rows shown by `config show`, API key masked.
fn config_rows(config: &RuntimeConfig) -> Vec<(&'static str, String)> {
    let api_key = if config.api_key.is_empty() {
        "(not set)".to_string()
    } else {
        mask_key(&config.api_key)
    };
    let branding = if config.branding.is_file() {
        config.branding.display().to_string()
    } else {
        format!("{} (missing, plain title)", config.branding.display())
    };
    vec![
        ("provider", config.provider.to_string()),
        ("endpoint", config.endpoint_url()),
        ("model", config.model.clone()),
        ("api_key", api_key),
        ("max_tokens", config.sampling.max_tokens.to_string()),
        ("temperature", config.sampling.temperature.to_string()),
        ("theme", config.theme.clone()),
        ("branding", branding),
    ]
}

fn show() -> Result<()> {
    let config = RuntimeConfig::from_env()?;
    let rows = config_rows(&config);

    if output::is_json() {
        let map: serde_json::Map<String, serde_json::Value> =
            rows.into_iter().map(|(k, v)| (k.to_string(), v.into())).collect();
        output::data("config", &map);
        return Ok(());
    }

    output::header("Effective configuration");
    let mut table = output::table("Setting", "Value");
    for (key, value) in &rows {
        output::table_row(&mut table, key, value);
    }
    println!("{table}");
    Ok(())
}

fn configure_api() -> Result<()> {
    output::header("Configure API key");
    if let Ok(current) = std::env::var(API_KEY_VAR)
        && !current.is_empty()
    {
        println!("  Current: {}", mask_key(&current));
        println!();
    }

    let key = prompt_api_key()?;
    if key.is_empty() {
        output::warning("No key entered, cancelled.");
        return Ok(());
    }

    let config_path = get_config_path()?;
    save_env_var(&config_path, API_KEY_VAR, &key)?;

    output::success(&format!("Saved {} to {}", API_KEY_VAR, config_path.display()));
    output::dim("parley reads this file on start; variables already set in the shell take precedence.");
    Ok(())
}

/// Read a key without echoing it (stars instead). Ctrl+C cancels.
fn prompt_api_key() -> Result<String> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal,
    };

    println!("Enter API key:");
    print!("> ");
    io::stdout().flush()?;

    let mut key = String::new();
    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => match k.code {
                KeyCode::Enter => break Ok(()),
                KeyCode::Backspace => {
                    if key.pop().is_some() {
                        print!("\x08 \x08");
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                    key.clear();
                    break Ok(());
                }
                KeyCode::Char(c) => {
                    key.push(c);
                    print!("*");
                    io::stdout().flush()?;
                }
                _ => {}
            },
            Ok(_) => {}
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;
    println!();
    result?;
    Ok(key.trim().to_string())
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

fn get_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    let dir = home.join(DATA_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir.join(ENV_FILE))
}

/// Set `var` in an `export K="v"` env file, keeping the other entries.
fn save_env_var(path: &Path, var: &str, value: &str) -> Result<()> {
    let existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut entries: BTreeMap<String, String> = existing
        .lines()
        .filter_map(|line| {
            let (key, value) = line.trim().strip_prefix("export ")?.split_once('=')?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect();
    entries.insert(var.to_string(), format!("\"{}\"", value));

    let mut content = String::from("# parley configuration\n\n");
    for (k, v) in &entries {
        content.push_str(&format!("export {}={}\n", k, v));
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_short_and_long_keys() {
        assert_eq!(mask_key("abc"), "***");
        assert_eq!(mask_key("sk-abcdefgh1234"), "sk-a...1234");
    }

    #[test]
    fn rows_mask_the_key() {
        let config = RuntimeConfig::new().with_api_key("sk-abcdefgh1234");
        let rows = config_rows(&config);
        let api_key = rows.iter().find(|(k, _)| *k == "api_key").unwrap();
        assert_eq!(api_key.1, "sk-a...1234");
        assert!(rows.iter().all(|(_, v)| !v.contains("abcdefgh")));
    }

    #[test]
    fn rows_report_missing_key_and_branding() {
        let config = RuntimeConfig::new().with_branding("/nonexistent/bb.txt");
        let rows = config_rows(&config);
        assert!(rows.contains(&("api_key", "(not set)".to_string())));
        assert!(rows.iter().any(|(k, v)| *k == "branding" && v.contains("missing")));
    }

    #[test]
    fn save_env_var_keeps_other_entries() {
        let dir = std::env::temp_dir().join(format!("parley-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("env");
        fs::write(&path, "export PARLEY_PROVIDER=\"openai\"\nexport PARLEY_API_KEY=\"old\"\n").unwrap();

        save_env_var(&path, "PARLEY_API_KEY", "new-key").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("export PARLEY_PROVIDER=\"openai\"\n"));
        assert!(content.contains("export PARLEY_API_KEY=\"new-key\"\n"));
        assert!(!content.contains("old"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
