use glam::Vec2;
use web_sys as web;

/// Map a client-space point into surface coordinates.
///
/// `rect` is the element's bounding box in CSS pixels as
/// `[left, top, width, height]`; `surface` is the backing store size. The
/// result is clamped to the surface bounds. Degenerate rects map to the origin.
#[inline]
pub fn client_to_surface(client: Vec2, rect: [f32; 4], surface: Vec2) -> Vec2 {
    let [left, top, w, h] = rect;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }
    let u = ((client.x - left) / w).clamp(0.0, 1.0);
    let v = ((client.y - top) / h).clamp(0.0, 1.0);
    Vec2::new(u * surface.x, v * surface.y)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_surface_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_surface(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        [
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ],
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
