//! Drawing seam between the engine and whatever renders the shapes.
//!
//! The engine never draws pixels itself. It creates a handful of retained
//! shapes (one background rectangle plus one circle per live bubble), mutates
//! their style every frame and releases them when the owning entity dies.

use glam::Vec2;
use std::fmt;

/// Opaque reference to a shape owned by a `Surface`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub usize);

/// Partial style update. `None` fields are left untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle<C> {
    pub radius: Option<f32>,
    pub fill_opacity: Option<f32>,
    pub fill: Option<C>,
}

impl<C> Default for ShapeStyle<C> {
    fn default() -> Self {
        Self {
            radius: None,
            fill_opacity: None,
            fill: None,
        }
    }
}

impl<C> ShapeStyle<C> {
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn fill_opacity(mut self, opacity: f32) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    pub fn fill(mut self, color: C) -> Self {
        self.fill = Some(color);
        self
    }
}

/// Hue/saturation/lightness triple, each in [0, 1].
///
/// Surfaces that defer color conversion to their backend (CSS, a shader) can
/// use this directly as their `Color`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const WHITE: Hsl = Hsl {
        hue: 0.0,
        saturation: 0.0,
        lightness: 1.0,
    };

    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// CSS `hsl()` notation.
    pub fn to_css(&self) -> String {
        format!(
            "hsl({:.1}, {:.1}%, {:.1}%)",
            self.hue * 360.0,
            self.saturation * 100.0,
            self.lightness * 100.0
        )
    }
}

/// A 2D drawing target holding retained shapes.
pub trait Surface {
    type Color: Clone + fmt::Debug;

    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// False once the host has torn the surface down.
    fn is_available(&self) -> bool {
        true
    }

    fn create_filled_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32) -> ShapeHandle;
    fn create_circle(&mut self, center: Vec2, radius: f32) -> ShapeHandle;
    fn set_shape_style(&mut self, handle: ShapeHandle, style: ShapeStyle<Self::Color>);
    fn release_shape(&mut self, handle: ShapeHandle);
    fn hue_to_color(&self, hue: f32, saturation: f32, lightness: f32) -> Self::Color;

    /// Called once at the end of every driven frame.
    fn present(&mut self) {}

    #[inline]
    fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }
}
