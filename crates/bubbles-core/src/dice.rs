use rand::prelude::*;

/// Source of the random draws used for spawning and background seeding.
///
/// The scheduler only ever asks for these three shapes of randomness, which
/// keeps scripted sequences in tests small.
pub trait Dice {
    /// Uniform sample in [0, 1).
    fn unit(&mut self) -> f32;
    /// Uniform integer in `0..=max`.
    fn roll(&mut self, max: u32) -> u32;
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

/// `StdRng`-backed dice.
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, otherwise drawn from the OS.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }
}

impl Dice for SeededDice {
    fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    fn roll(&mut self, max: u32) -> u32 {
        self.rng.gen_range(0..=max)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn unit(&mut self) -> f32 {
        (**self).unit()
    }

    fn roll(&mut self, max: u32) -> u32 {
        (**self).roll(max)
    }

    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}
