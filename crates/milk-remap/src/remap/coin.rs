//! Coin flips for the dithered bands.
//!
//! The remapper never touches a global random source. Callers inject a
//! [`Coin`], which makes seeded, reproducible runs and per-thread sources
//! straightforward.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Size of the uniform integer range a weighted flip draws from.
pub const DRAW_RANGE: u32 = 10_000;

/// Draws below this value come up heads (70%).
pub const HEADS_BELOW: u32 = 7_000;

/// A source of per-pixel binary decisions.
///
/// `true` ("heads") selects the first-named option of a dithered band,
/// `false` the second.
pub trait Coin {
    /// Flip the coin once.
    fn flip(&mut self) -> bool;
}

impl<C: Coin + ?Sized> Coin for &mut C {
    #[inline]
    fn flip(&mut self) -> bool {
        (**self).flip()
    }
}

/// A coin that always lands heads. Used when dithering is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedCoin;

impl Coin for FixedCoin {
    #[inline]
    fn flip(&mut self) -> bool {
        true
    }
}

/// A 70/30 coin backed by any [`rand::Rng`].
///
/// # Example
///
/// ```
/// use milk_remap::{Coin, WeightedCoin};
///
/// let mut a = WeightedCoin::from_seed(7);
/// let mut b = WeightedCoin::from_seed(7);
/// let flips_a: Vec<bool> = (0..32).map(|_| a.flip()).collect();
/// let flips_b: Vec<bool> = (0..32).map(|_| b.flip()).collect();
/// assert_eq!(flips_a, flips_b);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedCoin<R> {
    rng: R,
}

impl<R: Rng> WeightedCoin<R> {
    /// Wrap an existing random number generator.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl WeightedCoin<StdRng> {
    /// A reproducible coin seeded from a `u64`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A coin seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Coin for WeightedCoin<R> {
    #[inline]
    fn flip(&mut self) -> bool {
        self.rng.gen_range(0..DRAW_RANGE) < HEADS_BELOW
    }
}
