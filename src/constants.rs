// DOM wiring and asset constants for the web frontend.

// Element ids
pub const CANVAS_ID: &str = "bubbles-canvas";
pub const OVERLAY_ID: &str = "start-overlay";

// Canvas data attributes that override `AnimationConfig` defaults
pub const ATTR_POLICY: &str = "data-policy"; // interactive | rhythmic | ambient
pub const ATTR_TEMPO: &str = "data-tempo"; // beats per minute
pub const ATTR_CYCLE_MS: &str = "data-cycle-ms"; // background hue period
pub const ATTR_RADIUS_SCALE: &str = "data-radius-scale"; // absolute | width
pub const ATTR_WIDTH: &str = "width";
pub const ATTR_HEIGHT: &str = "height";

// Note clips, lowest first; the left edge of the canvas plays the first one
pub const CLIP_BASE_URL: &str = "sounds/";
pub const CLIP_EXTENSION: &str = "mp3";
pub const CLIP_NAMES: [&str; 12] = [
    "c4", "d4", "e4", "g4", "a4", "c5", "d5", "e5", "g5", "a5", "c6", "d6",
];

// Clip playback volume (HTMLMediaElement range 0..1)
pub const CLIP_VOLUME: f64 = 0.6;
