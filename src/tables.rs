//! Banded lookup tables.
//!
//! A table is an ordered list of `(upper_bound_inclusive, outcome)` bands.
//! A roll resolves to the first band whose bound is at least the roll; the
//! last band also catches anything above it.

use crate::dice::{roll_die, RandomSource};

/// Depth of nested "roll again" expansions a recursive table may perform.
pub const DEFAULT_RECURSION_BUDGET: u32 = 3;

/// A table whose every band is a direct result.
#[derive(Clone, Copy, Debug)]
pub struct Table<T: 'static> {
    sides: u32,
    bands: &'static [(i32, T)],
}

impl<T: Copy> Table<T> {
    pub const fn new(sides: u32, bands: &'static [(i32, T)]) -> Self {
        Self { sides, bands }
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Outcome for an already-modified roll.
    pub fn resolve(&self, roll: i32) -> T {
        assert!(!self.bands.is_empty(), "table has no bands");
        let band = self
            .bands
            .iter()
            .find(|(upper, _)| *upper >= roll)
            .unwrap_or(&self.bands[self.bands.len() - 1]);
        band.1
    }

    /// Roll the table's die, add `modifier`, resolve.
    pub fn roll(&self, rng: &mut impl RandomSource, modifier: i32) -> T {
        self.roll_with_total(rng, modifier).1
    }

    /// Like [`Table::roll`] but also returns the modified roll.
    pub fn roll_with_total(&self, rng: &mut impl RandomSource, modifier: i32) -> (i32, T) {
        let total = roll_die(rng, self.sides, 1) + modifier;
        (total, self.resolve(total))
    }
}

/// A band outcome that may ask for further rolls on the same table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Value(T),
    /// Roll this many more times on the same table.
    Recurse(u32),
}

/// A table with "roll again" bands.
///
/// Expansion is bounded by a depth budget: a Recurse band reached with no
/// budget left contributes nothing.
#[derive(Clone, Copy, Debug)]
pub struct RecursiveTable<T: 'static> {
    sides: u32,
    bands: &'static [(i32, Outcome<T>)],
}

impl<T: Copy> RecursiveTable<T> {
    pub const fn new(sides: u32, bands: &'static [(i32, Outcome<T>)]) -> Self {
        Self { sides, bands }
    }

    pub fn resolve(&self, roll: i32) -> Outcome<T> {
        assert!(!self.bands.is_empty(), "table has no bands");
        let band = self
            .bands
            .iter()
            .find(|(upper, _)| *upper >= roll)
            .unwrap_or(&self.bands[self.bands.len() - 1]);
        band.1
    }

    /// Resolve one roll, expanding Recurse bands up to `budget` levels deep.
    pub fn roll_all(&self, rng: &mut impl RandomSource, modifier: i32, budget: u32) -> Vec<T> {
        let mut results = Vec::new();
        self.roll_into(rng, modifier, budget, &mut results);
        results
    }

    /// Resolve `slots` independent rolls with the default budget.
    pub fn roll_slots(&self, rng: &mut impl RandomSource, slots: u32, modifier: i32) -> Vec<T> {
        let mut results = Vec::new();
        for _ in 0..slots {
            self.roll_into(rng, modifier, DEFAULT_RECURSION_BUDGET, &mut results);
        }
        results
    }

    fn roll_into(&self, rng: &mut impl RandomSource, modifier: i32, budget: u32, out: &mut Vec<T>) {
        let total = roll_die(rng, self.sides, 1) + modifier;
        match self.resolve(total) {
            Outcome::Value(value) => out.push(value),
            Outcome::Recurse(_) if budget == 0 => {
                tracing::trace!(total, "recursion budget spent, dropping re-roll");
            }
            Outcome::Recurse(times) => {
                for _ in 0..times {
                    self.roll_into(rng, modifier, budget - 1, out);
                }
            }
        }
    }
}
