#![cfg(target_arch = "wasm32")]
use bubbles_core::{AnimationDriver, SeededDice, SystemClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("music-bubbles starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_canvas(&document)?;
    let config = dom::read_config(&canvas);
    dom::size_canvas(&canvas, &config);

    let surface = canvas::CanvasSurface::new(canvas.clone())?;
    let bank = audio::ClipBank::load(&dom::clip_urls())?;
    let dice = SeededDice::from_seed_option(config.seed);

    // first frame runs inside `new`
    let driver = AnimationDriver::new(config, surface, bank, SystemClock, dice)?;
    let driver: frame::SharedDriver = Rc::new(RefCell::new(driver));

    events::wire_pointer_spawn(canvas, driver.clone());
    events::wire_global_keydown(driver.clone());

    frame::start_loop(driver);
    Ok(())
}
