// Shared tuning constants used by the engine and both front-ends.

// Surface
pub const DEFAULT_SURFACE_WIDTH: f32 = 400.0;
pub const DEFAULT_SURFACE_HEIGHT: f32 = 300.0;

// Background hue rotation
pub const DEFAULT_CYCLE_TIME_MS: u64 = 30_000; // one full hue turn
pub const BACKGROUND_SATURATION: f32 = 0.75;
pub const BACKGROUND_LIGHTNESS: f32 = 0.75;

// Rhythm
pub const DEFAULT_TEMPO_BPM: f32 = 140.0;
/// Slowest accepted tempo; a whole note at this rate is four minutes.
pub const MIN_TEMPO_BPM: f32 = 1.0;
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Note-length multipliers (in beats) drawn uniformly; duplicates bias the
/// draw toward longer notes.
pub const NOTE_LENGTH_MULTIPLIERS: [f32; 13] = [
    0.25, // sixteenth-ish
    0.5, 0.5, 0.5, // eighth
    1.0, 1.0, 1.0, // quarter
    2.0, 2.0, // half
    4.0, 4.0, 4.0, 4.0, // whole
];

// Ambient spawning: one roll in 0..=AMBIENT_ROLL_MAX per tick
pub const AMBIENT_ROLL_MAX: u32 = 100;
pub const DEFAULT_AMBIENT_TRIGGER: u32 = 50;

// Bubble animation defaults (radii are fractions of surface width)
pub const DEFAULT_BUBBLE_DURATION_MS: u64 = 4_000;
pub const DEFAULT_START_RADIUS: f32 = 0.02;
pub const DEFAULT_STOP_RADIUS: f32 = 0.25;
pub const DEFAULT_START_OPACITY: f32 = 0.8;
pub const DEFAULT_STOP_OPACITY: f32 = 0.0;

// Bubble fill (white)
pub const BUBBLE_FILL_HUE: f32 = 0.0;
pub const BUBBLE_FILL_SATURATION: f32 = 0.0;
pub const BUBBLE_FILL_LIGHTNESS: f32 = 1.0;
