//! Browser entry point for the fractal renderer.
//!
//! Loaded as an ES module; expects the renderer's own glue at `./fractal.js`
//! relative to the generated bindings. On load it:
//! 1. installs the panic hook and console logger,
//! 2. attaches the touch-to-mouse bridge to `document`,
//! 3. awaits the renderer's `init()` and calls `wasm_main()` once.
//!
//! A failure rejects the module's start promise and surfaces through the
//! page's unhandled-rejection reporting.

mod module;

use anyhow::Context;
use fractal_shim::ShimConfig;
use fractal_shim::bootstrap::{Sequencer, TimerDelay};
use fractal_shim::input::platform::web::DocumentRoot;
use fractal_shim::logging::init_logging;
use wasm_bindgen::prelude::*;

pub use module::FractalModule;

/// Configuration used by the page entry point.
pub fn page_config() -> ShimConfig {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    ShimConfig::new().log_level(level)
}

/// Runs the full startup sequence against the page document.
pub async fn boot(config: ShimConfig) -> anyhow::Result<()> {
    init_logging(config.logging.clone());

    let root = DocumentRoot::from_window().context("binding to the page document")?;
    let session = Sequencer::new(root, FractalModule, &config)
        .with_delay(TimerDelay)
        .run()
        .await
        .context("starting the fractal renderer")?;

    if session.stalled() {
        log::info!("renderer started after a slow initialization");
    }

    // Listener closures must outlive this call: the page never tears them down.
    std::mem::forget(session);
    Ok(())
}

#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    boot(page_config())
        .await
        .map_err(|e| js_sys::Error::new(&format!("{e:#}")).into())
}
