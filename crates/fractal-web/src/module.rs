use std::future::Future;

use fractal_shim::ShimError;
use fractal_shim::bootstrap::ExternalModule;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

// JS glue of the renderer build, served next to this package's glue.
#[wasm_bindgen(raw_module = "./fractal.js")]
extern "C" {
    #[wasm_bindgen(js_name = default)]
    fn init() -> js_sys::Promise;

    fn wasm_main();
}

/// The compiled fractal renderer, reached through its JS glue.
pub struct FractalModule;

impl ExternalModule for FractalModule {
    fn ready(&self) -> impl Future<Output = Result<(), ShimError>> {
        async {
            JsFuture::from(init())
                .await
                .map(|_| ())
                .map_err(|e| ShimError::Readiness(describe(&e)))
        }
    }

    fn start(&self) {
        wasm_main();
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}
