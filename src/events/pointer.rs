use crate::frame::SharedDriver;
use crate::input;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Route canvas pointer presses to the engine. The first press also hides the
/// start overlay, which is the user gesture browsers require before audio.
pub fn wire_pointer_spawn(canvas: web::HtmlCanvasElement, driver: SharedDriver) {
    let canvas_for_listener = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(doc) = crate::dom::window_document() {
            if overlay::dismiss(&doc) {
                log::info!("[pointer] first gesture, audio unlocked");
            }
        }
        let pos = input::pointer_surface_px(&ev, &canvas);
        let spawned = driver.borrow_mut().click(pos.x, pos.y);
        if spawned {
            log::debug!("[pointer] spawn at ({:.1},{:.1})", pos.x, pos.y);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
