use crate::bubble::Bubble;
use crate::config::{AnimationConfig, BubbleStyle, SpawnPolicy};
use crate::constants::{AMBIENT_ROLL_MAX, MS_PER_MINUTE, NOTE_LENGTH_MULTIPLIERS};
use crate::dice::Dice;
use crate::sound::SoundBank;
use crate::surface::Surface;
use glam::Vec2;
use std::time::Duration;

/// Owns the live bubbles and decides when new ones appear.
///
/// The scheduler keeps its own clock (`time_alive`), advanced only by
/// `update`. Surface and sound bank are borrowed per call so the driver stays
/// the single owner of both.
///
/// Typical usage:
/// - Construct with `SpawnScheduler::new(&config, dice)`
/// - Call `update(elapsed, surface, bank)` once per frame
/// - Route pointer presses to `click(position, surface, bank)`
pub struct SpawnScheduler<D: Dice> {
    policy: SpawnPolicy,
    style: BubbleStyle,
    tempo_bpm: f32,
    bubbles: Vec<Bubble>,
    time_alive: Duration,
    last_made: Duration,
    next_duration: Option<Duration>,
    spawned: u64,
    dice: D,
}

impl<D: Dice> SpawnScheduler<D> {
    /// Build a scheduler for `config`. Rhythmic schedulers draw their first
    /// note length immediately.
    pub fn new(config: &AnimationConfig, dice: D) -> Self {
        let mut scheduler = Self {
            policy: config.policy,
            style: config.bubble,
            tempo_bpm: config.tempo_bpm,
            bubbles: Vec::new(),
            time_alive: Duration::ZERO,
            last_made: Duration::ZERO,
            next_duration: None,
            spawned: 0,
            dice,
        };
        if scheduler.policy == SpawnPolicy::Rhythmic {
            scheduler.next_duration = Some(scheduler.draw_note_length());
        }
        scheduler
    }

    /// Advance the clock, apply the spawn policy, then age and prune bubbles.
    pub fn update<S, B>(&mut self, elapsed: Duration, surface: &mut S, bank: &mut B)
    where
        S: Surface + ?Sized,
        B: SoundBank + ?Sized,
    {
        self.time_alive += elapsed;

        match self.policy {
            SpawnPolicy::Interactive => {}
            SpawnPolicy::Rhythmic => self.step_rhythmic(surface, bank),
            SpawnPolicy::Ambient { trigger } => self.step_ambient(trigger, surface, bank),
        }

        for bubble in &mut self.bubbles {
            bubble.update(elapsed, surface);
        }
        // shapes were already released inside Bubble::update
        self.bubbles.retain(Bubble::is_alive);
    }

    /// Pointer press at `position`. Only the interactive policy spawns.
    pub fn click<S, B>(&mut self, position: Vec2, surface: &mut S, bank: &mut B) -> bool
    where
        S: Surface + ?Sized,
        B: SoundBank + ?Sized,
    {
        if self.policy != SpawnPolicy::Interactive {
            log::debug!(
                "[scheduler] click at ({:.1},{:.1}) ignored under {} policy",
                position.x,
                position.y,
                self.policy.name()
            );
            return false;
        }
        self.spawn_at(position, surface, bank);
        true
    }

    /// Spawn one bubble at `position` with the note for its x coordinate.
    pub fn spawn_at<S, B>(&mut self, position: Vec2, surface: &mut S, bank: &mut B)
    where
        S: Surface + ?Sized,
        B: SoundBank + ?Sized,
    {
        let sound = sound_index_for_x(position.x, surface.width(), bank.count());
        log::debug!(
            "[scheduler] spawn #{} at ({:.1},{:.1}) note={} t={}ms",
            self.spawned,
            position.x,
            position.y,
            sound,
            self.time_alive.as_millis()
        );
        let bubble = Bubble::spawn(position, sound, self.style, surface, bank);
        self.bubbles.push(bubble);
        self.spawned += 1;
    }

    fn step_rhythmic<S, B>(&mut self, surface: &mut S, bank: &mut B)
    where
        S: Surface + ?Sized,
        B: SoundBank + ?Sized,
    {
        let next = match self.next_duration {
            Some(d) => d,
            None => {
                let d = self.draw_note_length();
                self.next_duration = Some(d);
                d
            }
        };
        if self.time_alive.saturating_sub(self.last_made) > next {
            let position = self.random_position(&*surface);
            self.spawn_at(position, surface, bank);
            self.last_made = self.time_alive;
            self.next_duration = Some(self.draw_note_length());
        }
    }

    fn step_ambient<S, B>(&mut self, trigger: u32, surface: &mut S, bank: &mut B)
    where
        S: Surface + ?Sized,
        B: SoundBank + ?Sized,
    {
        // one roll per tick: spawn rate follows the frame rate
        if self.dice.roll(AMBIENT_ROLL_MAX) == trigger {
            let position = self.random_position(&*surface);
            self.spawn_at(position, surface, bank);
        }
    }

    fn draw_note_length(&mut self) -> Duration {
        let multiplier = NOTE_LENGTH_MULTIPLIERS[self.dice.index(NOTE_LENGTH_MULTIPLIERS.len())];
        note_length(multiplier, self.tempo_bpm)
    }

    fn random_position<S: Surface + ?Sized>(&mut self, surface: &S) -> Vec2 {
        let x = self.dice.unit() * surface.width();
        let y = self.dice.unit() * surface.height();
        Vec2::new(x, y)
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn live_count(&self) -> usize {
        self.bubbles.len()
    }

    /// Total bubbles spawned since construction.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    pub fn policy(&self) -> SpawnPolicy {
        self.policy
    }

    pub fn time_alive(&self) -> Duration {
        self.time_alive
    }

    /// Scheduler time of the most recent rhythmic spawn.
    pub fn last_made(&self) -> Duration {
        self.last_made
    }

    /// Pending rhythmic interval, `None` for the other policies.
    pub fn next_duration(&self) -> Option<Duration> {
        self.next_duration
    }
}

/// Note index for a spawn at `x`: the surface is split into `count` equal
/// bands, lowest note on the left.
#[inline]
pub fn sound_index_for_x(x: f32, surface_width: f32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let x = x.clamp(0.0, surface_width.max(0.0));
    let band = ((x / (surface_width + 1.0)) * count as f32).floor();
    (band.max(0.0) as usize).min(count - 1)
}

/// Wall time of a note `multiplier` beats long at `tempo_bpm`. Saturates at
/// `Duration::MAX` when the length is not representable.
#[inline]
pub fn note_length(multiplier: f32, tempo_bpm: f32) -> Duration {
    let ms = multiplier as f64 * (MS_PER_MINUTE / tempo_bpm as f64);
    Duration::try_from_secs_f64(ms.max(0.0) / 1000.0).unwrap_or(Duration::MAX)
}
