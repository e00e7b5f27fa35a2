//! Terminal output helpers: styled text for humans, one JSON object per line for scripts.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for the configuration table
//! - `indicatif` for the spinner while a reply is pending

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use parley_core::Segment;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn to_json(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    serde_json::to_string(&Msg { level, message, data })
        .unwrap_or_else(|_| serde_json::json!({ "level": level, "message": message }).to_string())
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        println!("{}", to_json("info", text, None));
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn success(text: &str) {
    if is_json() {
        println!("{}", to_json("success", text, None));
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", to_json("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        println!("{}", to_json("warning", text, None));
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        println!("{}", to_json("info", text, None));
    } else {
        println!("{}", style(text).dim());
    }
}

/// Emit a serializable value as structured output (JSON mode only).
pub fn data<T: Serialize>(label: &str, value: &T) {
    let json_val = serde_json::to_value(value).unwrap_or(JsonValue::Null);
    println!("{}", to_json("data", label, Some(&json_val)));
}

// ── Replies ────────────────────────────────────────────────────────

/// Print reply segments: prose as is, code under a language rule with line numbers.
pub fn segments(segments: &[Segment]) {
    if is_json() {
        data("reply", &serde_json::json!({ "segments": segments }));
        return;
    }
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match segment {
            Segment::Text { content } => println!("{}", content),
            Segment::Code { language, content } => {
                let label = if language.is_empty() { "text" } else { language.as_str() };
                println!("{}", style(format!("── {} ──", label)).dim());
                let lines: Vec<&str> = content.lines().collect();
                let gutter = lines.len().to_string().len();
                for (n, line) in lines.iter().enumerate() {
                    println!(
                        "{} {}",
                        style(format!("{:>gutter$}", n + 1)).dim(),
                        style(line).yellow()
                    );
                }
            }
        }
    }
}

// ── Tables ─────────────────────────────────────────────────────────

/// Two-column key/value table.
pub fn table(key_header: &str, value_header: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(key_header).fg(Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new(value_header).fg(Color::Cyan).add_attribute(Attribute::Bold),
        ]);
    table
}

pub fn table_row(table: &mut Table, key: &str, value: &str) {
    table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
}

// ── Spinners ───────────────────────────────────────────────────────

/// Spinner on stderr; hidden in JSON mode.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
