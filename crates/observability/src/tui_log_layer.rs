//! Layer that forwards each event as one formatted line to a [`LogSink`].

use std::fmt::Write;

use tracing::field::{Field, Visit};
use tracing::Level;
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

const MAX_LINE_LEN: usize = 8_000;

/// Collects "message key=value ..." from an event's fields.
#[derive(Default)]
struct LineVisitor {
    buf: String,
}

impl LineVisitor {
    fn separate(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.separate();
        if field.name() == "message" {
            self.buf.push_str(value);
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.separate();
        if field.name() == "message" {
            write!(self.buf, "{:?}", value).ok();
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }
}

/// "[LEVEL] target: fields", cut at MAX_LINE_LEN characters.
fn format_line(level: &Level, target: &str, fields: &str) -> String {
    let line = if fields.is_empty() {
        format!("[{}] {}", level, target)
    } else {
        format!("[{}] {}: {}", level, target, fields)
    };
    let total = line.chars().count();
    if total > MAX_LINE_LEN {
        let cut: String = line.chars().take(MAX_LINE_LEN).collect();
        format!("{}… ({} chars)", cut, total)
    } else {
        line
    }
}

pub(crate) fn tui_log_layer(sink: Option<LogSink>) -> TuiLogLayer {
    TuiLogLayer { sink }
}

#[derive(Clone)]
pub(crate) struct TuiLogLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for TuiLogLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(sink) = &self.sink else {
            return;
        };
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let meta = event.metadata();
        sink(format_line(meta.level(), meta.target(), &visitor.buf));
    }
}
