//! In-memory collaborators for the headless runner and host-side tests.

use crate::sound::SoundBank;
use crate::surface::{Hsl, ShapeHandle, ShapeStyle, Surface};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Rectangle { origin: Vec2, size: Vec2 },
    Circle { center: Vec2 },
}

/// Current state of one retained shape.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryShape {
    pub kind: ShapeKind,
    pub radius: f32,
    pub fill_opacity: f32,
    pub fill: Option<Hsl>,
}

/// Slot-based shape store. Released slots are reused.
#[derive(Debug)]
pub struct MemorySurface {
    width: f32,
    height: f32,
    available: bool,
    shapes: Vec<Option<MemoryShape>>,
    free: Vec<usize>,
    created: usize,
    released: usize,
    presented: usize,
}

impl MemorySurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            available: true,
            shapes: Vec::new(),
            free: Vec::new(),
            created: 0,
            released: 0,
            presented: 0,
        }
    }

    /// Simulate the host destroying the surface.
    pub fn teardown(&mut self) {
        self.available = false;
    }

    pub fn shape(&self, handle: ShapeHandle) -> Option<&MemoryShape> {
        self.shapes.get(handle.0).and_then(|s| s.as_ref())
    }

    pub fn live_shapes(&self) -> impl Iterator<Item = &MemoryShape> {
        self.shapes.iter().flatten()
    }

    pub fn live_count(&self) -> usize {
        self.live_shapes().count()
    }

    pub fn created_count(&self) -> usize {
        self.created
    }

    pub fn released_count(&self) -> usize {
        self.released
    }

    pub fn presented_frames(&self) -> usize {
        self.presented
    }

    fn insert(&mut self, shape: MemoryShape) -> ShapeHandle {
        self.created += 1;
        match self.free.pop() {
            Some(slot) => {
                self.shapes[slot] = Some(shape);
                ShapeHandle(slot)
            }
            None => {
                self.shapes.push(Some(shape));
                ShapeHandle(self.shapes.len() - 1)
            }
        }
    }
}

impl Surface for MemorySurface {
    type Color = Hsl;

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn create_filled_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32) -> ShapeHandle {
        self.insert(MemoryShape {
            kind: ShapeKind::Rectangle {
                origin: Vec2::new(x, y),
                size: Vec2::new(w, h),
            },
            radius: 0.0,
            fill_opacity: 1.0,
            fill: None,
        })
    }

    fn create_circle(&mut self, center: Vec2, radius: f32) -> ShapeHandle {
        self.insert(MemoryShape {
            kind: ShapeKind::Circle { center },
            radius,
            fill_opacity: 1.0,
            fill: None,
        })
    }

    fn set_shape_style(&mut self, handle: ShapeHandle, style: ShapeStyle<Hsl>) {
        let Some(shape) = self.shapes.get_mut(handle.0).and_then(|s| s.as_mut()) else {
            log::warn!("style update for unknown shape {:?}", handle);
            return;
        };
        if let Some(r) = style.radius {
            shape.radius = r;
        }
        if let Some(o) = style.fill_opacity {
            shape.fill_opacity = o;
        }
        if let Some(c) = style.fill {
            shape.fill = Some(c);
        }
    }

    fn release_shape(&mut self, handle: ShapeHandle) {
        let taken = self.shapes.get_mut(handle.0).and_then(Option::take);
        if taken.is_some() {
            self.free.push(handle.0);
            self.released += 1;
        } else {
            log::warn!("release of unknown shape {:?}", handle);
        }
    }

    fn hue_to_color(&self, hue: f32, saturation: f32, lightness: f32) -> Hsl {
        Hsl::new(hue, saturation, lightness)
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}

/// Sound bank that records which clips were started.
#[derive(Debug)]
pub struct RecordingSoundBank {
    playable: Vec<bool>,
    plays: Vec<usize>,
}

impl RecordingSoundBank {
    pub fn new(count: usize) -> Self {
        Self {
            playable: vec![true; count],
            plays: Vec::new(),
        }
    }

    /// Treat slot `index` as failed to load.
    pub fn mark_unplayable(&mut self, index: usize) {
        if let Some(p) = self.playable.get_mut(index) {
            log::warn!("sound slot {} marked unplayable", index);
            *p = false;
        }
    }

    /// Clip indices in the order they were started.
    pub fn plays(&self) -> &[usize] {
        &self.plays
    }

    /// Number of plays per clip index.
    pub fn histogram(&self) -> Vec<usize> {
        let mut counts = vec![0; self.playable.len()];
        for &i in &self.plays {
            counts[i] += 1;
        }
        counts
    }
}

impl SoundBank for RecordingSoundBank {
    fn count(&self) -> usize {
        self.playable.len()
    }

    fn play(&mut self, index: usize) {
        if self.playable.get(index).copied().unwrap_or(false) {
            self.plays.push(index);
        }
    }
}
