//! Ember Mesh - ambient particle mesh for the browser
//!
//! Particles rise from below the canvas, fade from black to white as they
//! age, and are joined by lines to every neighbour within range. The
//! simulation lives in [`core`] and is shared with the headless CLI; the
//! WASM build adds the eframe app, the wgpu line renderer and the browser
//! event sources.

pub mod core;

#[cfg(any(not(target_arch = "wasm32"), feature = "wasm"))]
pub mod time;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod app;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod gpu;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod theme;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use wasm_bindgen::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[wasm_bindgen(start)]
pub fn main() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    let config = app::load_config();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id(app::CANVAS_ID)
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::EmberApp::new(cc, config)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
