//! Span helpers

/// Span around one user turn: submit, completion, reply.
///
/// ```rust
/// use parley_observability::turn_span;
///
/// let span = turn_span!("session-1", 0usize);
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! turn_span {
    ($session_id:expr, $message_index:expr) => {
        tracing::info_span!(
            "chat.turn",
            session.id = $session_id,
            message.index = $message_index,
            reply.chars = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
        )
    };
}

/// Mark the current span as failed and log the error.
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", tracing::field::display(error));
    tracing::error!(error = %error, "operation failed");
}

/// Record `duration` in milliseconds under `key` on the current span.
pub fn record_duration(key: &str, duration: std::time::Duration) {
    tracing::Span::current().record(key, duration.as_millis() as u64);
}
