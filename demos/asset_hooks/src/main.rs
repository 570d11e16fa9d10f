//! Asset Hooks Demo
//!
//! Wires two hookable owners into a [`HookRuntime`] and feeds a handful of
//! payloads through a queue-backed source: a secured zero-arg method hook, a
//! field hook taking an integer parameter, and payloads that get dropped by
//! the security check and the exception list.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package asset-hooks
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use parking_lot::Mutex;
use tracing::info;

use hookline::prelude::*;

/// Mutable state a hookable owner exposes through field hooks.
#[derive(Debug, Default)]
struct AudioState {
    volume: i32,
    muted: bool,
}

fn audio_registration(state: Arc<Mutex<AudioState>>) -> HookRegistration {
    let volume_state = Arc::clone(&state);
    let muted_state = state;

    HookRegistration::new("audio-settings")
        .field::<i32>("volume", &["audio", "volume"], move |v| {
            volume_state.lock().volume = v;
            info!(volume = v, "volume updated");
        })
        .property::<bool>("muted", &["audio", "muted"], move |m| {
            muted_state.lock().muted = m;
            info!(muted = m, "mute toggled");
        })
}

fn debug_registration() -> HookRegistration {
    HookRegistration::new("debug-tools")
        .method0("run_tests", &["debug", "settings", "testing"], || {
            info!("running test suite");
        })
        .method1::<String>("set_label", &["debug", "label"], |label| {
            info!(label = %label, "label changed");
        })
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = HooklineConfig::default();
    config.hooks.logging = Verbosity::Debug;
    config.hooks.use_secure_hooks = true;
    config.hooks.secure_key = "K1".to_owned();
    config.hooks.exceptions.insert("ignored".to_owned());

    let (source, queue) = QueuedSource::new();
    let runtime = HookRuntime::builder()
        .config(config)
        .source(source)
        .poll_interval(Duration::from_millis(50))
        .build()?;

    let audio = Arc::new(Mutex::new(AudioState::default()));
    let registry = runtime.interceptor().registry();
    registry.register(audio_registration(Arc::clone(&audio)));
    registry.register(debug_registration());

    runtime
        .interceptor()
        .routed()
        .subscribe(|tokens: &Vec<String>| info!(path = %tokens.join("/"), "payload routed"));

    // Invoked: run_tests, then the volume field (param anywhere in the path).
    queue.push("key=K1/debug/settings/testing/");
    queue.push("key=K1/audio/param=80/volume/");
    queue.push("key=K1/debug/label/param=nightly/");
    // Dropped: wrong key, then an excepted first segment.
    queue.push("key=WRONG/audio/muted/param=true/");
    queue.push("key=K1/ignored/anything/");

    let cancel = runtime.cancellation_token();
    let shutdown = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(1)).await;
        cancel.cancel();
    });

    runtime.run().await?;
    shutdown.await?;

    info!(volume = audio.lock().volume, "final state");
    Ok(())
}
