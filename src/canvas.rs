//! Canvas2D implementation of the engine's `Surface`.
//!
//! Shapes are retained in a slot list and the whole scene is repainted in
//! `present`, once per animation frame. Slot order is paint order, so the
//! background rectangle (created first) stays underneath every bubble.

use bubbles_core::{Hsl, ShapeHandle, ShapeStyle, Surface};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone, Copy, Debug)]
enum Kind {
    Rect { origin: Vec2, size: Vec2 },
    Circle { center: Vec2 },
}

#[derive(Clone, Debug)]
struct CanvasShape {
    kind: Kind,
    radius: f32,
    opacity: f32,
    fill: String,
}

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: f32,
    height: f32,
    shapes: Vec<Option<CanvasShape>>,
    free: Vec<usize>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        Ok(Self {
            canvas,
            ctx,
            width,
            height,
            shapes: Vec::new(),
            free: Vec::new(),
        })
    }

    fn insert(&mut self, shape: CanvasShape) -> ShapeHandle {
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

    #[allow(deprecated)]
    fn paint(&self, shape: &CanvasShape) {
        self.ctx.set_global_alpha(shape.opacity.clamp(0.0, 1.0) as f64);
        self.ctx.set_fill_style(&JsValue::from_str(&shape.fill));
        match shape.kind {
            Kind::Rect { origin, size } => {
                self.ctx
                    .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
            }
            Kind::Circle { center } => {
                self.ctx.begin_path();
                if self
                    .ctx
                    .arc(
                        center.x as f64,
                        center.y as f64,
                        shape.radius.max(0.0) as f64,
                        0.0,
                        std::f64::consts::TAU,
                    )
                    .is_ok()
                {
                    self.ctx.fill();
                }
            }
        }
    }
}

impl Surface for CanvasSurface {
    type Color = String;

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn is_available(&self) -> bool {
        self.canvas.is_connected()
    }

    fn create_filled_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32) -> ShapeHandle {
        self.insert(CanvasShape {
            kind: Kind::Rect {
                origin: Vec2::new(x, y),
                size: Vec2::new(w, h),
            },
            radius: 0.0,
            opacity: 1.0,
            fill: Hsl::WHITE.to_css(),
        })
    }

    fn create_circle(&mut self, center: Vec2, radius: f32) -> ShapeHandle {
        self.insert(CanvasShape {
            kind: Kind::Circle { center },
            radius,
            opacity: 1.0,
            fill: Hsl::WHITE.to_css(),
        })
    }

    fn set_shape_style(&mut self, handle: ShapeHandle, style: ShapeStyle<String>) {
        let Some(shape) = self.shapes.get_mut(handle.0).and_then(|s| s.as_mut()) else {
            return;
        };
        if let Some(r) = style.radius {
            shape.radius = r;
        }
        if let Some(o) = style.fill_opacity {
            shape.opacity = o;
        }
        if let Some(c) = style.fill {
            shape.fill = c;
        }
    }

    fn release_shape(&mut self, handle: ShapeHandle) {
        if let Some(slot) = self.shapes.get_mut(handle.0) {
            if slot.take().is_some() {
                self.free.push(handle.0);
            }
        }
    }

    fn hue_to_color(&self, hue: f32, saturation: f32, lightness: f32) -> String {
        Hsl::new(hue, saturation, lightness).to_css()
    }

    fn present(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        for shape in self.shapes.iter().flatten() {
            self.paint(shape);
        }
        self.ctx.set_global_alpha(1.0);
    }
}
