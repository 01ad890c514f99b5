/// Linear blend between `start` and `stop`.
///
/// `fraction` is not clamped; callers keep it within [0, 1].
#[inline]
pub fn lerp(start: f32, stop: f32, fraction: f32) -> f32 {
    start + fraction * (stop - start)
}
