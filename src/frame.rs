use crate::audio::ClipBank;
use crate::canvas::CanvasSurface;
use bubbles_core::{AnimationDriver, FrameStatus, SeededDice, SystemClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebDriver = AnimationDriver<CanvasSurface, ClipBank, SystemClock, SeededDice>;
pub type SharedDriver = Rc<RefCell<WebDriver>>;

/// Drive `driver` from `requestAnimationFrame` until it halts.
///
/// The driver already ran its first frame during construction, so this only
/// schedules the following ones.
pub fn start_loop(driver: SharedDriver) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let status = driver.borrow_mut().update();
        if status == FrameStatus::Halted {
            log::info!("[frame] loop halted");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
