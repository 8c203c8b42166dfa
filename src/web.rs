//! Browser event sources and layout queries
//!
//! Timer and resize callbacks push [`Event`]s into a shared queue that the
//! app drains once per frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, info, trace};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::{Event, Viewport, ViewportError};

/// Shared event queue — browser callbacks push, app drains in update()
pub type EventQueue = Rc<RefCell<VecDeque<Event>>>;

/// Spawn timer and resize listener, removed again on drop
pub struct EventSources {
    window: Window,
    interval_id: i32,
    /// Timer callback (kept alive while the interval runs)
    #[allow(dead_code)]
    on_tick: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
}

impl EventSources {
    /// Start the spawn interval and listen for window resizes
    pub fn install(queue: EventQueue, spawn_interval_ms: u32) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Spawn timer - fires regardless of frame rate
        let tick_queue = queue.clone();
        let on_tick = Closure::wrap(Box::new(move || {
            trace!("Spawn tick");
            tick_queue.borrow_mut().push_back(Event::SpawnTick);
        }) as Box<dyn FnMut()>);
        let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            on_tick.as_ref().unchecked_ref(),
            spawn_interval_ms as i32,
        )?;

        // Resize - payload-free, the app re-queries the layout
        let on_resize = Closure::wrap(Box::new(move || {
            debug!("Window resized");
            queue.borrow_mut().push_back(Event::Resized);
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        info!(spawn_interval_ms, "Event sources installed");

        Ok(Self {
            window,
            interval_id,
            on_tick,
            on_resize,
        })
    }
}

impl Drop for EventSources {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.interval_id);
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        debug!("Event sources removed");
    }
}

/// Measure the element with id `element_id` via its bounding client rect.
pub fn measure_viewport(element_id: &str) -> Result<Viewport, ViewportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ViewportError::MissingWindow)?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| ViewportError::ElementNotFound(element_id.to_string()))?;
    let rect = element.get_bounding_client_rect();
    Viewport::measured(rect.width() as f32, rect.height() as f32)
}

/// Read an optional JSON config string from `window.__ember_config`
pub fn config_json() -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str("__ember_config"))
        .ok()
        .and_then(|v| v.as_string())
}
