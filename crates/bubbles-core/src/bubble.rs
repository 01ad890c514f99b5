use crate::config::BubbleStyle;
use crate::constants::{BUBBLE_FILL_HUE, BUBBLE_FILL_LIGHTNESS, BUBBLE_FILL_SATURATION};
use crate::sound::SoundBank;
use crate::surface::{ShapeHandle, ShapeStyle, Surface};
use glam::Vec2;
use std::time::Duration;

/// One expanding, fading circle tied to the note it played at birth.
///
/// A bubble is alive until its accumulated time reaches `style.duration`; at
/// that update it releases its shape and never touches the surface again.
#[derive(Clone, Debug)]
pub struct Bubble {
    position: Vec2,
    sound: usize,
    style: BubbleStyle,
    time_alive: Duration,
    shape: Option<ShapeHandle>,
}

impl Bubble {
    /// Play `sound` and draw the initial circle at `position`.
    pub fn spawn<S, B>(
        position: Vec2,
        sound: usize,
        style: BubbleStyle,
        surface: &mut S,
        bank: &mut B,
    ) -> Self
    where
        S: Surface + ?Sized,
        B: SoundBank + ?Sized,
    {
        bank.play(sound);

        let radius = style.radius_at(0.0, surface.width());
        let shape = surface.create_circle(position, radius);
        let fill = surface.hue_to_color(
            BUBBLE_FILL_HUE,
            BUBBLE_FILL_SATURATION,
            BUBBLE_FILL_LIGHTNESS,
        );
        surface.set_shape_style(
            shape,
            ShapeStyle::default()
                .radius(radius)
                .fill_opacity(style.opacity_at(0.0))
                .fill(fill),
        );

        Self {
            position,
            sound,
            style,
            time_alive: Duration::ZERO,
            shape: Some(shape),
        }
    }

    /// Advance by `elapsed` and restyle, or die once the duration is reached.
    pub fn update<S: Surface + ?Sized>(&mut self, elapsed: Duration, surface: &mut S) {
        let Some(shape) = self.shape else {
            return;
        };
        self.time_alive += elapsed;
        if self.time_alive >= self.style.duration {
            surface.release_shape(shape);
            self.shape = None;
            return;
        }

        let fraction = self.fraction();
        let radius = self.style.radius_at(fraction, surface.width());
        surface.set_shape_style(
            shape,
            ShapeStyle::default()
                .radius(radius)
                .fill_opacity(self.style.opacity_at(fraction)),
        );
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.shape.is_some()
    }

    /// Normalized progress through the lifetime, in [0, 1].
    pub fn fraction(&self) -> f32 {
        let total = self.style.duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        (self.time_alive.as_secs_f64() / total).min(1.0) as f32
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn sound(&self) -> usize {
        self.sound
    }

    pub fn time_alive(&self) -> Duration {
        self.time_alive
    }

    pub fn style(&self) -> &BubbleStyle {
        &self.style
    }

    /// Shape handle while alive.
    pub fn shape(&self) -> Option<ShapeHandle> {
        self.shape
    }
}
