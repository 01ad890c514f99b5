use crate::constants::{BACKGROUND_LIGHTNESS, BACKGROUND_SATURATION};
use crate::surface::{Hsl, ShapeHandle, ShapeStyle, Surface};
use std::time::Duration;

/// Full-surface rectangle whose hue turns once every `cycle_time`.
#[derive(Clone, Debug)]
pub struct BackgroundCycle {
    rect: ShapeHandle,
    hue: f32,
    saturation: f32,
    lightness: f32,
    cycle_time: Duration,
}

impl BackgroundCycle {
    /// Create the backing rectangle, initially white.
    ///
    /// `cycle_time` must be non-zero (checked by `AnimationConfig::validate`);
    /// `hue` is wrapped into [0, 1).
    pub fn new<S: Surface + ?Sized>(surface: &mut S, cycle_time: Duration, hue: f32) -> Self {
        let (w, h) = (surface.width(), surface.height());
        let rect = surface.create_filled_rectangle(0.0, 0.0, w, h);
        let white = surface.hue_to_color(
            Hsl::WHITE.hue,
            Hsl::WHITE.saturation,
            Hsl::WHITE.lightness,
        );
        surface.set_shape_style(rect, ShapeStyle::default().fill(white).fill_opacity(1.0));
        Self {
            rect,
            hue: wrap_unit(hue),
            saturation: BACKGROUND_SATURATION,
            lightness: BACKGROUND_LIGHTNESS,
            cycle_time,
        }
    }

    pub fn update<S: Surface + ?Sized>(&mut self, elapsed: Duration, surface: &mut S) {
        let cycle = self.cycle_time.as_secs_f64();
        if cycle > 0.0 {
            let turned = (elapsed.as_secs_f64() / cycle) as f32;
            self.hue = wrap_unit(self.hue + turned);
        }
        let color = surface.hue_to_color(self.hue, self.saturation, self.lightness);
        surface.set_shape_style(self.rect, ShapeStyle::default().fill(color));
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn lightness(&self) -> f32 {
        self.lightness
    }

    pub fn cycle_time(&self) -> Duration {
        self.cycle_time
    }

    pub fn shape(&self) -> ShapeHandle {
        self.rect
    }
}

/// Fold any finite value into [0, 1).
#[inline]
fn wrap_unit(v: f32) -> f32 {
    let w = v - v.floor();
    // `v - floor(v)` rounds up to exactly 1.0 for tiny negative inputs
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}
