//! # Hookline Runtime
//!
//! Orchestration layer for the Hookline interception pipeline.
//!
//! This crate provides:
//! - Configuration loading and validation (`config`)
//! - Logging setup (`logging`)
//! - The payload-source seam to the host (`PayloadSource`, `QueuedSource`)
//! - The polling runtime (`HookRuntime`)
//!
//! The pipeline itself is synchronous; the runtime's only asynchrony is the
//! polling tick that asks the host-facing source for new payloads:
//!
//! ```text
//! ┌──────────────┐  poll   ┌─────────────┐  on_raw_payload  ┌─────────────┐
//! │ HookRuntime  │────────▶│ PayloadSource│────────────────▶│ Interceptor │
//! │ (tokio tick) │         │ (host seam) │                  │ (sync core) │
//! └──────────────┘         └─────────────┘                  └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use hookline_framework::HookRegistration;
//! use hookline_runtime::{HookRuntime, QueuedSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let (source, queue) = QueuedSource::new();
//!     let runtime = HookRuntime::builder().source(source).build()?;
//!
//!     runtime.interceptor().registry().register(
//!         HookRegistration::new("debug-tools")
//!             .method0("ping", &["debug", "ping"], || println!("pong")),
//!     );
//!
//!     // Run until Ctrl+C
//!     runtime.run().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod source;

pub use config::{ConfigError, ConfigLoader, ConfigResult, HooklineConfig, load_config};
pub use error::{RuntimeError, RuntimeResult};
pub use logging::LoggingBuilder;
pub use runtime::{HookRuntime, HookRuntimeBuilder};
pub use source::{PayloadQueue, PayloadSource, QueuedSource};

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
///
/// Provides the commonly used logging macros alongside the runtime types.
pub mod prelude {
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
}
