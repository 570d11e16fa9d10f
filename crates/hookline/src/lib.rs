//! # Hookline
//!
//! URL-scheme hook interception, validation and dispatch.
//!
//! ## Overview
//!
//! A host application receives a custom URL-scheme payload; Hookline turns it
//! into invocations of registered callable targets:
//!
//! ```text
//! ┌──────┐     ┌─────────────┐     ┌──────────┐
//! │ host │────▶│ Interceptor │────▶│ Registry │──▶ fields / properties / methods
//! └──────┘     │  tokenize   │     │  lookup  │
//!              │  key check  │     └──────────┘
//!              │  exceptions │
//!              └─────────────┘
//! ```
//!
//! - **hookline-core**: tokenization, security, filtering, coercion,
//!   preferences, broadcast points
//! - **hookline-framework**: hook capabilities, the registry, the
//!   dispatcher, and the pipeline
//! - **hookline-runtime**: configuration, logging, and the polling loop
//!   around a host payload source
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use hookline::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let (source, queue) = QueuedSource::new();
//!     let runtime = HookRuntime::builder().source(source).build()?;
//!
//!     runtime.interceptor().registry().register(
//!         HookRegistration::new("debug-tools")
//!             .method0("run_tests", &["debug", "settings", "testing"], || run_tests()),
//!     );
//!
//!     runtime.run().await?;
//!     Ok(())
//! }
//! ```

pub use hookline_core as core;
pub use hookline_framework as framework;
pub use hookline_runtime as runtime;

/// Prelude module for convenient imports.
pub mod prelude {
    // Runtime - main entry point
    pub use hookline_runtime::{HookRuntime, PayloadQueue, PayloadSource, QueuedSource};

    // Pipeline - for hosts driving the interceptor directly
    pub use hookline_framework::{InterceptOutcome, Interceptor};

    // Registration - for hookable collaborators
    pub use hookline_framework::{HookCapability, HookDecl, HookRegistration, Registry};

    // Payload model - for listeners and custom sources
    pub use hookline_core::{
        Broadcast, HookValue, ParamKind, ParsedPayload, Preferences, SharedPreferences, Verbosity,
        tokenize,
    };

    // Configuration
    pub use hookline_runtime::config::{ConfigLoader, HooklineConfig};
}
