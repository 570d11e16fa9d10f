//! # Hookline Framework
//!
//! Hook registration and dispatch for the Hookline interception pipeline.
//!
//! This layer turns the payload primitives from `hookline-core` into a
//! routed invocation system:
//!
//! - **Targets**: bound callable capabilities — field/property setters and
//!   methods ([`HookCapability`])
//! - **Registry**: the process-wide table of (path, capability) entries,
//!   fed by explicit push-based registrations ([`Registry`],
//!   [`HookRegistration`])
//! - **Dispatcher**: progressive positional narrowing and survivor
//!   invocation ([`dispatch`])
//! - **Interceptor**: the pipeline state machine gluing tokenization,
//!   security, filtering and dispatch together ([`Interceptor`])
//!
//! ```text
//! ┌───────────┐     ┌─────────────┐     ┌──────────┐
//! │   host    │────▶│ Interceptor │────▶│ Registry │──▶ bound targets
//! │ (payload) │     │  (pipeline) │     │ (lookup) │
//! └───────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hookline_core::SharedPreferences;
//! use hookline_framework::{HookRegistration, Interceptor, Registry};
//!
//! let registry = Arc::new(Registry::new());
//! registry.register(
//!     HookRegistration::new("debug-tools")
//!         .method0("run_tests", &["debug", "settings", "testing"], || run_tests()),
//! );
//!
//! let interceptor = Interceptor::new(registry, SharedPreferences::default());
//! interceptor.on_raw_payload("debug/settings/testing/");
//! ```

pub mod dispatch;
pub mod interceptor;
pub mod registry;
pub mod target;

pub use dispatch::{DispatchReport, dispatch};
pub use interceptor::{InterceptOutcome, Interceptor};
pub use registry::{HookDecl, HookRegistration, Registry, RegistryEntry};
pub use target::{HookCapability, HookParam, InvokerFn, SetterFn};
