//! parley_runtime: owns the session and runs one request/response turn at a time.

pub mod config;
pub mod error;
pub mod runtime;

pub use config::{LlmProvider, RuntimeConfig};
pub use error::{Result, RuntimeError};
pub use runtime::Runtime;
