//! Logging and tracing setup shared by the parley binaries.
//!
//! - `tracing-subscriber` registry with an `EnvFilter`
//! - optional console output (off inside the TUI)
//! - optional log sink that receives each formatted line (the TUI debug screen)
//! - optional OTLP span export when `OTEL_EXPORTER_OTLP_ENDPOINT` is set
//!
//! ```no_run
//! use parley_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::from_env().with_console(false);
//! init(config).expect("tracing");
//! tracing::info!("started");
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME`: service name (default "parley")
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP gRPC endpoint, export disabled when unset
//! - `PARLEY_LOG_LEVEL` or `RUST_LOG`: filter directives

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;
pub mod tui_log_layer;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, shutdown};
pub use tracing::{record_duration, record_error};
