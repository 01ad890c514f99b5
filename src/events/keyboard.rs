use crate::frame::SharedDriver;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a key press asks the page to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePause,
    ToggleOverlay,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::TogglePause),
        "h" | "H" => Some(KeyAction::ToggleOverlay),
        _ => None,
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, driver: &SharedDriver) {
    match key_action(&ev.key()) {
        Some(KeyAction::TogglePause) => {
            let mut d = driver.borrow_mut();
            let paused = d.is_paused();
            d.set_paused(!paused);
            ev.prevent_default();
        }
        Some(KeyAction::ToggleOverlay) => {
            if let Some(hidden) = crate::dom::window_document().and_then(|d| overlay::toggle(&d)) {
                log::debug!("[keyboard] overlay hidden={}", hidden);
            }
            ev.prevent_default();
        }
        None => {}
    }
}

pub fn wire_global_keydown(driver: SharedDriver) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &driver);
            }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
