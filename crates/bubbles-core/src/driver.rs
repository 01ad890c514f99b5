use crate::background::BackgroundCycle;
use crate::clock::Clock;
use crate::config::{validate_surface, AnimationConfig};
use crate::dice::Dice;
use crate::error::ConfigError;
use crate::scheduler::SpawnScheduler;
use crate::sound::SoundBank;
use crate::surface::Surface;
use glam::Vec2;
use instant::Instant;

/// What the host should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Request another frame callback.
    Continue,
    /// Stop requesting frames; the driver will not run again.
    Halted,
}

/// Top-level orchestrator: one background, one scheduler, one frame clock.
///
/// The driver owns both collaborators and lends them to the subsystems on
/// every frame. Hosts call `update` from their frame callback and keep
/// re-requesting frames while it returns `FrameStatus::Continue`.
pub struct AnimationDriver<S: Surface, B: SoundBank, C: Clock, D: Dice> {
    surface: S,
    bank: B,
    clock: C,
    background: BackgroundCycle,
    scheduler: SpawnScheduler<D>,
    last_frame: Instant,
    running: bool,
    paused: bool,
    frames: u64,
}

impl<S: Surface, B: SoundBank, C: Clock, D: Dice> AnimationDriver<S, B, C, D> {
    /// Validate, build both subsystems and run the first frame synchronously.
    pub fn new(
        config: AnimationConfig,
        mut surface: S,
        bank: B,
        clock: C,
        mut dice: D,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_surface(surface.width(), surface.height())?;
        if bank.count() == 0 {
            return Err(ConfigError::EmptySoundBank);
        }

        let hue = config.initial_hue.unwrap_or_else(|| dice.unit());
        let background = BackgroundCycle::new(&mut surface, config.cycle_time, hue);
        let scheduler = SpawnScheduler::new(&config, dice);
        let last_frame = clock.now();

        log::info!(
            "[driver] start {}x{} policy={} tempo={} sounds={}",
            surface.width(),
            surface.height(),
            config.policy.name(),
            config.tempo_bpm,
            bank.count()
        );

        let mut driver = Self {
            surface,
            bank,
            clock,
            background,
            scheduler,
            last_frame,
            running: true,
            paused: false,
            frames: 0,
        };
        driver.update();
        Ok(driver)
    }

    /// Run one frame.
    pub fn update(&mut self) -> FrameStatus {
        if !self.running {
            return FrameStatus::Halted;
        }
        if !self.surface.is_available() {
            log::warn!("[driver] surface unavailable after {} frames; halting", self.frames);
            self.running = false;
            return FrameStatus::Halted;
        }

        let now = self.clock.now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;

        if !self.paused {
            self.background.update(elapsed, &mut self.surface);
            self.scheduler
                .update(elapsed, &mut self.surface, &mut self.bank);
        }
        self.surface.present();
        self.frames += 1;
        FrameStatus::Continue
    }

    /// Route a pointer press in surface coordinates.
    pub fn click(&mut self, x: f32, y: f32) -> bool {
        if !self.running || self.paused {
            return false;
        }
        self.scheduler
            .click(Vec2::new(x, y), &mut self.surface, &mut self.bank)
    }

    /// End the loop permanently.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("[driver] stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::info!("[driver] {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames run so far, including the one at construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn background(&self) -> &BackgroundCycle {
        &self.background
    }

    pub fn scheduler(&self) -> &SpawnScheduler<D> {
        &self.scheduler
    }
}
