use crate::constants::CLIP_VOLUME;
use bubbles_core::{ConfigError, SoundBank};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct ClipSlot {
    url: String,
    element: web::HtmlAudioElement,
    failed: Rc<Cell<bool>>,
}

/// Note clips backed by `<audio>` elements, loaded eagerly.
///
/// A clip that fails to load (network, codec) is logged once and its slot
/// becomes silent; the engine keeps spawning with no audio for that note.
pub struct ClipBank {
    slots: Vec<Option<ClipSlot>>,
}

impl ClipBank {
    pub fn load(urls: &[String]) -> Result<Self, ConfigError> {
        if urls.is_empty() {
            return Err(ConfigError::EmptySoundBank);
        }
        let slots = urls.iter().map(|url| load_clip(url)).collect::<Vec<_>>();
        let ready = slots.iter().filter(|s| s.is_some()).count();
        log::info!("[audio] loading {} clips ({} created)", urls.len(), ready);
        Ok(Self { slots })
    }
}

fn load_clip(url: &str) -> Option<ClipSlot> {
    let element = match web::HtmlAudioElement::new_with_src(url) {
        Ok(el) => el,
        Err(e) => {
            log::warn!("[audio] could not create clip {}: {:?}", url, e);
            return None;
        }
    };
    element.set_preload("auto");
    element.set_volume(CLIP_VOLUME);

    let failed = Rc::new(Cell::new(false));
    let failed_flag = failed.clone();
    let url_for_log = url.to_string();
    let on_error = Closure::wrap(Box::new(move || {
        if !failed_flag.replace(true) {
            log::warn!("[audio] clip {} failed to load; slot muted", url_for_log);
        }
    }) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();
    element.load();

    Some(ClipSlot {
        url: url.to_string(),
        element,
        failed,
    })
}

impl SoundBank for ClipBank {
    fn count(&self) -> usize {
        self.slots.len()
    }

    fn play(&mut self, index: usize) {
        let Some(Some(slot)) = self.slots.get(index) else {
            return;
        };
        if slot.failed.get() {
            return;
        }
        // restart from the top so rapid re-triggers of one note cut cleanly
        let _ = slot.element.pause();
        slot.element.set_current_time(0.0);
        match slot.element.play() {
            Ok(promise) => {
                let url = slot.url.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::debug!("[audio] playback of {} rejected: {:?}", url, e);
                    }
                });
            }
            Err(e) => log::debug!("[audio] play {} failed: {:?}", slot.url, e),
        }
    }
}
