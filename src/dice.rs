//! Dice and weighted choice over a swappable random source.
//!
//! Every roll in the crate goes through [`RandomSource`], so a generation run
//! can be driven by a seeded ChaCha stream or by [`ScriptedRolls`] when a test
//! needs to force a particular table result.

use std::collections::VecDeque;

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;
use rand_chacha::{ChaCha12Rng, ChaCha20Rng, ChaCha8Rng};

/// A sequential stream of die rolls.
///
/// One source belongs to one generation request. Two requests that must stay
/// reproducible never share a source.
pub trait RandomSource {
    /// Uniform roll in `1..=sides`.
    fn roll(&mut self, sides: u32) -> u32;
}

macro_rules! impl_random_source {
    ($($rng:ty),* $(,)?) => {
        $(
            impl RandomSource for $rng {
                fn roll(&mut self, sides: u32) -> u32 {
                    self.gen_range(1..=sides)
                }
            }
        )*
    };
}

impl_random_source!(ChaCha8Rng, ChaCha12Rng, ChaCha20Rng, StdRng, ThreadRng);

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll(&mut self, sides: u32) -> u32 {
        (**self).roll(sides)
    }
}

/// Sum of `count` rolls of a `sides`-sided die.
pub fn roll_die(rng: &mut impl RandomSource, sides: u32, count: u32) -> i32 {
    assert!(sides >= 1, "a die needs at least one side (got {sides})");
    (0..count).map(|_| rng.roll(sides) as i32).sum()
}

pub fn d5(rng: &mut impl RandomSource) -> i32 {
    roll_die(rng, 5, 1)
}

pub fn d10(rng: &mut impl RandomSource) -> i32 {
    roll_die(rng, 10, 1)
}

pub fn d100(rng: &mut impl RandomSource) -> i32 {
    roll_die(rng, 100, 1)
}

/// Pick an entry by integer weight.
///
/// Draws `r` in `1..=total` and returns the first entry whose cumulative
/// weight reaches `r`, so ties always go to the earlier declaration.
pub fn weighted_choice<'a, T>(rng: &mut impl RandomSource, entries: &'a [(T, u32)]) -> &'a T {
    let total: u32 = entries.iter().map(|(_, weight)| *weight).sum();
    assert!(total > 0, "weighted choice needs a positive total weight");

    let target = rng.roll(total);
    let mut cumulative = 0;
    for (value, weight) in entries {
        cumulative += weight;
        if cumulative >= target {
            return value;
        }
    }
    &entries[entries.len() - 1].0
}

/// Pick one element with equal probability.
pub fn choose_uniform<'a, T>(rng: &mut impl RandomSource, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "cannot choose from an empty list");
    let index = rng.roll(items.len() as u32) as usize - 1;
    &items[index]
}

/// What a [`ScriptedRolls`] source returns once its script runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    Minimum,
    Maximum,
}

/// A random source that replays a fixed list of rolls.
///
/// Scripted values are clamped into `1..=sides` of whatever die asks for them.
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    script: VecDeque<u32>,
    fallback: Fallback,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: rolls.into_iter().collect(),
            fallback: Fallback::Minimum,
        }
    }

    /// Every roll comes up as the highest face.
    pub fn always_max() -> Self {
        Self::new([]).then(Fallback::Maximum)
    }

    /// Every roll comes up as a 1.
    pub fn always_min() -> Self {
        Self::new([])
    }

    pub fn then(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Scripted rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn roll(&mut self, sides: u32) -> u32 {
        match self.script.pop_front() {
            Some(value) => value.clamp(1, sides.max(1)),
            None => match self.fallback {
                Fallback::Minimum => 1,
                Fallback::Maximum => sides.max(1),
            },
        }
    }
}
