//! Runtime orchestration.
//!
//! [`HookRuntime`] drives the interception pipeline from a polled payload
//! source: once per tick it asks the source for a new payload and, if one
//! arrived, runs it through the interceptor synchronously. Only one payload
//! is ever in flight; dispatch completes before the next poll.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hookline_runtime::{HookRuntime, QueuedSource};
//!
//! let (source, queue) = QueuedSource::new();
//! let runtime = HookRuntime::builder()
//!     .config_file("hookline.toml")
//!     .source(source)
//!     .build()?;
//!
//! runtime.interceptor().registry().register(my_hooks());
//! runtime.run().await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use hookline_core::SharedPreferences;
use hookline_framework::{Interceptor, Registry};

use crate::config::{ConfigLoader, HooklineConfig, validate_config};
use crate::error::{RuntimeError, RuntimeResult};
use crate::logging;
use crate::source::PayloadSource;

/// Default interval between source polls.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// The polling runtime around an [`Interceptor`].
pub struct HookRuntime {
    interceptor: Arc<Interceptor>,
    source: Box<dyn PayloadSource>,
    poll_interval: Duration,
    cancel: CancellationToken,
}

impl HookRuntime {
    /// Creates a runtime builder.
    pub fn builder() -> HookRuntimeBuilder {
        HookRuntimeBuilder::new()
    }

    /// The interceptor this runtime drives.
    ///
    /// Hookable collaborators register through
    /// `runtime.interceptor().registry()`.
    pub fn interceptor(&self) -> &Arc<Interceptor> {
        &self.interceptor
    }

    /// A token that stops [`Self::run`] when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Runs the polling loop until cancellation or Ctrl+C.
    pub async fn run(mut self) -> RuntimeResult<()> {
        let mut ticker = tokio::time::interval(self.poll_interval);
        // A slow dispatch should not be followed by a burst of catch-up polls.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Hook runtime started"
        );

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    info!("Shutdown requested, stopping hook runtime");
                    break;
                }
                _ = &mut ctrl_c => {
                    info!("Ctrl+C received, stopping hook runtime");
                    break;
                }
                _ = ticker.tick() => {
                    if let Some(raw) = self.source.poll().await {
                        debug!(raw = %raw, "Payload received from source");
                        let outcome = self.interceptor.on_raw_payload(&raw);
                        trace!(?outcome, "Payload processed");
                    }
                }
            }
        }

        Ok(())
    }
}

/// Builder for [`HookRuntime`].
pub struct HookRuntimeBuilder {
    config: Option<HooklineConfig>,
    config_file: Option<std::path::PathBuf>,
    registry: Option<Arc<Registry>>,
    source: Option<Box<dyn PayloadSource>>,
    poll_interval: Duration,
    init_logging: bool,
}

impl Default for HookRuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HookRuntimeBuilder {
    /// Creates a builder with defaults.
    pub fn new() -> Self {
        Self {
            config: None,
            config_file: None,
            registry: None,
            source: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            init_logging: true,
        }
    }

    /// Uses a pre-loaded configuration.
    pub fn config(mut self, config: HooklineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Loads configuration from a specific file.
    pub fn config_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Uses an existing registry instead of creating a fresh one.
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the payload source. Required.
    pub fn source(mut self, source: impl PayloadSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Overrides the poll interval.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Skips logging initialization (e.g. when the host already set up a
    /// subscriber).
    pub fn without_logging(mut self) -> Self {
        self.init_logging = false;
        self
    }

    /// Validates configuration and assembles the runtime.
    pub fn build(self) -> RuntimeResult<HookRuntime> {
        let config = match (self.config, &self.config_file) {
            (Some(config), _) => config,
            (None, Some(path)) => ConfigLoader::new().file(path).load()?,
            (None, None) => ConfigLoader::new().with_current_dir().load()?,
        };
        validate_config(&config)?;

        if self.init_logging {
            logging::init_from_config(&config);
        }

        let source = self.source.ok_or(RuntimeError::MissingSource)?;
        let registry = self.registry.unwrap_or_default();
        let prefs = SharedPreferences::new(config.hooks);

        Ok(HookRuntime {
            interceptor: Arc::new(Interceptor::new(registry, prefs)),
            source,
            poll_interval: self.poll_interval,
            cancel: CancellationToken::new(),
        })
    }
}
