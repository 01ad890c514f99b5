use crate::constants::OVERLAY_ID;
use wasm_bindgen::JsCast;
use web_sys as web;

fn find(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(OVERLAY_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Hide the start overlay. Returns true only for the press that actually
/// dismissed it.
pub fn dismiss(document: &web::Document) -> bool {
    match find(document) {
        Some(el) if !el.hidden() => {
            el.set_hidden(true);
            true
        }
        _ => false,
    }
}

/// Flip overlay visibility; `None` when the page has no overlay.
pub fn toggle(document: &web::Document) -> Option<bool> {
    let el = find(document)?;
    let hidden = !el.hidden();
    el.set_hidden(hidden);
    Some(hidden)
}
