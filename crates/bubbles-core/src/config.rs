use crate::constants::*;
use crate::error::ConfigError;
use crate::interp::lerp;
use std::time::Duration;

/// How bubble radius endpoints are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadiusScale {
    /// Endpoints are surface units.
    Absolute,
    /// Endpoints are fractions of the surface width.
    #[default]
    SurfaceWidth,
}

impl RadiusScale {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "absolute" => Some(RadiusScale::Absolute),
            "width" => Some(RadiusScale::SurfaceWidth),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RadiusScale::Absolute => "absolute",
            RadiusScale::SurfaceWidth => "width",
        }
    }
}

/// Per-bubble animation curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleStyle {
    pub start_radius: f32,
    pub stop_radius: f32,
    pub start_opacity: f32,
    pub stop_opacity: f32,
    pub duration: Duration,
    pub radius_scale: RadiusScale,
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            start_radius: DEFAULT_START_RADIUS,
            stop_radius: DEFAULT_STOP_RADIUS,
            start_opacity: DEFAULT_START_OPACITY,
            stop_opacity: DEFAULT_STOP_OPACITY,
            duration: Duration::from_millis(DEFAULT_BUBBLE_DURATION_MS),
            radius_scale: RadiusScale::SurfaceWidth,
        }
    }
}

impl BubbleStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration.is_zero() {
            return Err(ConfigError::ZeroBubbleDuration);
        }
        let unit = 0.0..=1.0;
        if !unit.contains(&self.start_opacity) || !unit.contains(&self.stop_opacity) {
            return Err(ConfigError::OpacityOutOfRange {
                start: self.start_opacity,
                stop: self.stop_opacity,
            });
        }
        let radius_ok = |r: f32| r.is_finite() && r >= 0.0;
        if !radius_ok(self.start_radius) || !radius_ok(self.stop_radius) {
            return Err(ConfigError::InvalidRadius {
                start: self.start_radius,
                stop: self.stop_radius,
            });
        }
        Ok(())
    }

    /// The same curve with its radius endpoints re-expressed in `scale`, so the
    /// drawn sizes on a `surface_width`-wide surface do not change.
    pub fn in_scale(self, scale: RadiusScale, surface_width: f32) -> Self {
        let factor = match (self.radius_scale, scale) {
            (RadiusScale::SurfaceWidth, RadiusScale::Absolute) => surface_width,
            (RadiusScale::Absolute, RadiusScale::SurfaceWidth) if surface_width > 0.0 => {
                surface_width.recip()
            }
            _ => 1.0,
        };
        Self {
            start_radius: self.start_radius * factor,
            stop_radius: self.stop_radius * factor,
            radius_scale: scale,
            ..self
        }
    }

    /// Radius in surface units at `fraction` of the lifetime.
    #[inline]
    pub fn radius_at(&self, fraction: f32, surface_width: f32) -> f32 {
        let r = lerp(self.start_radius, self.stop_radius, fraction);
        match self.radius_scale {
            RadiusScale::Absolute => r,
            RadiusScale::SurfaceWidth => r * surface_width,
        }
    }

    #[inline]
    pub fn opacity_at(&self, fraction: f32) -> f32 {
        lerp(self.start_opacity, self.stop_opacity, fraction)
    }
}

/// Rule deciding when and where bubbles are created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpawnPolicy {
    /// Pointer clicks spawn at the click position.
    Interactive,
    /// Random positions on a tempo-quantized random note grid.
    #[default]
    Rhythmic,
    /// Random positions whenever the per-tick roll hits `trigger`.
    Ambient { trigger: u32 },
}

impl SpawnPolicy {
    /// Parse the names used by the web data attributes and the CLI.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "interactive" | "click" => Some(SpawnPolicy::Interactive),
            "rhythmic" | "rhythm" => Some(SpawnPolicy::Rhythmic),
            "ambient" => Some(SpawnPolicy::Ambient {
                trigger: DEFAULT_AMBIENT_TRIGGER,
            }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpawnPolicy::Interactive => "interactive",
            SpawnPolicy::Rhythmic => "rhythmic",
            SpawnPolicy::Ambient { .. } => "ambient",
        }
    }
}

/// Immutable per-animation configuration.
///
/// - `width`/`height`: surface size the host should create
/// - `tempo_bpm`: scales rhythmic note lengths to wall time
/// - `cycle_time`: background hue period
/// - `initial_hue`: fixed starting hue; random when `None`
/// - `seed`: seeds the spawn dice; OS entropy when `None`
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub width: f32,
    pub height: f32,
    pub tempo_bpm: f32,
    pub cycle_time: Duration,
    pub bubble: BubbleStyle,
    pub policy: SpawnPolicy,
    pub initial_hue: Option<f32>,
    pub seed: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            tempo_bpm: DEFAULT_TEMPO_BPM,
            cycle_time: Duration::from_millis(DEFAULT_CYCLE_TIME_MS),
            bubble: BubbleStyle::default(),
            policy: SpawnPolicy::default(),
            initial_hue: None,
            seed: None,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_surface(self.width, self.height)?;
        if !(self.tempo_bpm.is_finite() && self.tempo_bpm >= MIN_TEMPO_BPM) {
            return Err(ConfigError::InvalidTempo(self.tempo_bpm));
        }
        if self.cycle_time.is_zero() {
            return Err(ConfigError::ZeroCycleTime);
        }
        if let Some(h) = self.initial_hue {
            if !(0.0..1.0).contains(&h) {
                return Err(ConfigError::InvalidHue(h));
            }
        }
        if let SpawnPolicy::Ambient { trigger } = self.policy {
            if trigger > AMBIENT_ROLL_MAX {
                return Err(ConfigError::AmbientTriggerOutOfRange {
                    trigger,
                    max: AMBIENT_ROLL_MAX,
                });
            }
        }
        self.bubble.validate()
    }
}

pub(crate) fn validate_surface(width: f32, height: f32) -> Result<(), ConfigError> {
    let ok = |v: f32| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(ConfigError::InvalidSurface { width, height })
    }
}
