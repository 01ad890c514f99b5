// Shared fixtures for the host-side engine tests.

#![allow(dead_code)]
use bubbles_core::{BubbleStyle, Dice, RadiusScale};
use std::collections::VecDeque;
use std::time::Duration;

/// Dice that replays fixed sequences, falling back to constants when empty.
#[derive(Debug, Default)]
pub struct ScriptedDice {
    units: VecDeque<f32>,
    rolls: VecDeque<u32>,
    indices: VecDeque<usize>,
    unit_fallback: f32,
    roll_fallback: u32,
    index_fallback: usize,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self {
            unit_fallback: 0.5,
            ..Self::default()
        }
    }

    pub fn units(mut self, values: impl IntoIterator<Item = f32>) -> Self {
        self.units.extend(values);
        self
    }

    pub fn rolls(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.rolls.extend(values);
        self
    }

    pub fn indices(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(values);
        self
    }

    pub fn unit_fallback(mut self, v: f32) -> Self {
        self.unit_fallback = v;
        self
    }

    pub fn roll_fallback(mut self, v: u32) -> Self {
        self.roll_fallback = v;
        self
    }

    pub fn index_fallback(mut self, v: usize) -> Self {
        self.index_fallback = v;
        self
    }
}

impl Dice for ScriptedDice {
    fn unit(&mut self) -> f32 {
        self.units.pop_front().unwrap_or(self.unit_fallback)
    }

    fn roll(&mut self, max: u32) -> u32 {
        self.rolls.pop_front().unwrap_or(self.roll_fallback).min(max)
    }

    fn index(&mut self, len: usize) -> usize {
        self.indices
            .pop_front()
            .unwrap_or(self.index_fallback)
            .min(len - 1)
    }
}

/// Index of the quarter-note (1.0) multiplier in `NOTE_LENGTH_MULTIPLIERS`.
pub const QUARTER_INDEX: usize = 4;

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Absolute-unit style: radius 10 -> 30, opacity 1 -> 0 over one second.
pub fn absolute_style() -> BubbleStyle {
    BubbleStyle {
        start_radius: 10.0,
        stop_radius: 30.0,
        start_opacity: 1.0,
        stop_opacity: 0.0,
        duration: ms(1000),
        radius_scale: RadiusScale::Absolute,
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
