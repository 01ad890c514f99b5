use thiserror::Error;

/// Construction-time configuration failures.
///
/// Everything here is rejected up front by `AnimationConfig::validate` or
/// `AnimationDriver::new` so the frame loop never divides by zero or runs
/// with an empty note set.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("surface dimensions must be positive and finite (width={width}, height={height})")]
    InvalidSurface { width: f32, height: f32 },
    #[error("bubble duration must be greater than zero")]
    ZeroBubbleDuration,
    #[error("background cycle time must be greater than zero")]
    ZeroCycleTime,
    #[error("tempo must be finite and at least 1 bpm, got {0}")]
    InvalidTempo(f32),
    #[error("opacity endpoints must lie in [0, 1] (start={start}, stop={stop})")]
    OpacityOutOfRange { start: f32, stop: f32 },
    #[error("radius endpoints must be non-negative and finite (start={start}, stop={stop})")]
    InvalidRadius { start: f32, stop: f32 },
    #[error("initial hue must lie in [0, 1), got {0}")]
    InvalidHue(f32),
    #[error("ambient trigger {trigger} is outside the roll range 0..={max}")]
    AmbientTriggerOutOfRange { trigger: u32, max: u32 },
    #[error("sound bank has no clips")]
    EmptySoundBank,
}
