use crate::constants::*;
use bubbles_core::{AnimationConfig, RadiusScale, SpawnPolicy};
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Defaults overridden by whatever data attributes the canvas carries.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> AnimationConfig {
    let attr = |name: &str| canvas.get_attribute(name);
    let mut config = AnimationConfig::default();

    if let Some(w) = attr(ATTR_WIDTH).and_then(|v| v.parse::<f32>().ok()) {
        config.width = w;
    }
    if let Some(h) = attr(ATTR_HEIGHT).and_then(|v| v.parse::<f32>().ok()) {
        config.height = h;
    }
    if let Some(name) = attr(ATTR_POLICY) {
        match SpawnPolicy::from_name(&name) {
            Some(p) => config.policy = p,
            None => log::warn!("unknown {}='{}', keeping {}", ATTR_POLICY, name, config.policy.name()),
        }
    }
    if let Some(bpm) = attr(ATTR_TEMPO).and_then(|v| v.parse::<f32>().ok()) {
        config.tempo_bpm = bpm;
    }
    if let Some(ms) = attr(ATTR_CYCLE_MS).and_then(|v| v.parse::<u64>().ok()) {
        config.cycle_time = Duration::from_millis(ms);
    }
    if let Some(name) = attr(ATTR_RADIUS_SCALE) {
        match RadiusScale::from_name(&name) {
            Some(scale) => config.bubble = config.bubble.in_scale(scale, config.width),
            None => log::warn!(
                "unknown {}='{}', keeping {}",
                ATTR_RADIUS_SCALE,
                name,
                config.bubble.radius_scale.name()
            ),
        }
    }
    config
}

/// Pin the canvas backing store to the configured surface size.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, config: &AnimationConfig) {
    canvas.set_width(config.width.max(1.0) as u32);
    canvas.set_height(config.height.max(1.0) as u32);
}

#[inline]
pub fn clip_urls() -> Vec<String> {
    CLIP_NAMES
        .iter()
        .map(|n| format!("{}{}.{}", CLIP_BASE_URL, n, CLIP_EXTENSION))
        .collect()
}
