/// Indexed set of preloaded note clips.
///
/// Index 0 is the lowest note; the scheduler maps the left edge of the
/// surface to it.
pub trait SoundBank {
    fn count(&self) -> usize;

    /// Start clip `index` from the beginning, cutting off any playback of the
    /// same clip. Unplayable or out-of-range slots are ignored.
    fn play(&mut self, index: usize);
}
