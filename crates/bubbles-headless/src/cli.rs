// Command-line argument parsing.

use bubbles_core::{AnimationConfig, SpawnPolicy, DEFAULT_AMBIENT_TRIGGER, DEFAULT_TEMPO_BPM};
use clap::Parser;
use std::time::Duration;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "bubbles-headless")]
#[command(about = "Run the music-bubbles engine without a display", long_about = None)]
pub struct Args {
    /// Spawn policy: interactive, rhythmic (default), ambient
    #[arg(long, value_name = "POLICY", default_value = "rhythmic")]
    pub policy: String,

    /// Tempo for the rhythmic policy
    #[arg(long, value_name = "BPM", default_value_t = DEFAULT_TEMPO_BPM)]
    pub tempo: f32,

    /// Ambient roll value that triggers a spawn (0..=100)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_AMBIENT_TRIGGER)]
    pub trigger: u32,

    /// Simulated session length
    #[arg(long, value_name = "SECONDS", default_value = "30")]
    pub seconds: f32,

    /// Simulated frame rate
    #[arg(long, value_name = "HZ", default_value = "60")]
    pub fps: f32,

    /// Number of note clips in the bank
    #[arg(long, value_name = "N", default_value = "12")]
    pub sounds: usize,

    /// Synthetic pointer presses per second (interactive policy)
    #[arg(long, value_name = "N", default_value = "2")]
    pub clicks_per_second: f32,

    /// RNG seed; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Simulation step sizes derived from the arguments.
#[derive(Debug, PartialEq)]
pub struct Timing {
    pub frame: Duration,
    pub total: Duration,
    pub click_every: Option<Duration>,
}

impl Args {
    pub fn timing(&self) -> anyhow::Result<Timing> {
        anyhow::ensure!(
            self.fps.is_finite() && self.fps > 0.0,
            "--fps must be positive and finite, got {}",
            self.fps
        );
        anyhow::ensure!(
            self.seconds.is_finite() && self.seconds >= 0.0,
            "--seconds must be finite and not negative, got {}",
            self.seconds
        );
        anyhow::ensure!(
            self.clicks_per_second.is_finite() && self.clicks_per_second >= 0.0,
            "--clicks-per-second must be finite and not negative, got {}",
            self.clicks_per_second
        );
        let frame = Duration::try_from_secs_f32(self.fps.recip())?;
        anyhow::ensure!(!frame.is_zero(), "--fps {} leaves no time per frame", self.fps);
        let total = Duration::try_from_secs_f32(self.seconds)?;
        let click_every = if self.clicks_per_second > 0.0 {
            Some(Duration::try_from_secs_f32(self.clicks_per_second.recip())?)
        } else {
            None
        };
        Ok(Timing {
            frame,
            total,
            click_every,
        })
    }

    pub fn parse_policy(&self) -> SpawnPolicy {
        match SpawnPolicy::from_name(&self.policy) {
            Some(SpawnPolicy::Ambient { .. }) => SpawnPolicy::Ambient {
                trigger: self.trigger,
            },
            Some(p) => p,
            None => {
                log::warn!("unknown policy '{}', using rhythmic", self.policy);
                SpawnPolicy::Rhythmic
            }
        }
    }

    pub fn config(&self) -> AnimationConfig {
        AnimationConfig {
            tempo_bpm: self.tempo,
            policy: self.parse_policy(),
            seed: self.seed,
            ..AnimationConfig::default()
        }
    }
}
