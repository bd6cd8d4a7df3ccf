//! Percentile tables: ranges over `1..=100` resolved with a single d100 roll.

pub mod magic_items;

use rand::Rng;

use crate::error::{Error, Result};

/// The lowest and highest value a percentile roll can produce.
pub const PERCENTILE: std::ops::RangeInclusive<u8> = 1..=100;

/// `{min}-{max}: payload`\
/// One row of a [`WeightedRange`], both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry<T> {
    pub min: u8,
    pub max: u8,
    pub payload: T,
}

impl<T> RangeEntry<T> {
    pub fn contains(&self, roll: u8) -> bool {
        (self.min..=self.max).contains(&roll)
    }
}

pub(crate) const fn entry<T>(min: u8, max: u8, payload: T) -> RangeEntry<T> {
    RangeEntry { min, max, payload }
}

/// An ordered list of ranges that should partition `1..=100`.
///
/// Rows are scanned in declaration order and the first one containing the roll wins,
/// so overlapping rows resolve deterministically. Use [`WeightedRange::coverage`] to
/// find rows that overlap or leave gaps.
#[derive(Debug)]
pub struct WeightedRange<T: 'static> {
    pub(crate) name: &'static str,
    pub(crate) entries: &'static [RangeEntry<T>],
}

impl<T> WeightedRange<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [RangeEntry<T>] {
        self.entries
    }

    /// Returns the payload of the first row containing `roll`.
    pub fn lookup(&self, roll: u8) -> Result<&'static T> {
        let entries: &'static [RangeEntry<T>] = self.entries;
        match entries.iter().find(|entry| entry.contains(roll)) {
            Some(entry) => {
                tracing::debug!(
                    table = self.name,
                    roll,
                    min = entry.min,
                    max = entry.max,
                    "resolved table row"
                );
                Ok(&entry.payload)
            }
            None => {
                tracing::error!(table = self.name, roll, "no table row contains the roll");
                Err(Error::NoMatchingRange {
                    table: self.name,
                    roll,
                })
            }
        }
    }

    /// Rolls a d100 with the rng specified and looks the result up.
    pub fn resolve(&self, rng: &mut impl Rng) -> Result<&'static T> {
        self.lookup(roll_percentile(rng))
    }

    /// Counts how often each value of `1..=100` is covered by the rows.
    pub fn coverage(&self) -> Coverage {
        let mut hits = [0u8; 101];
        for entry in self.entries {
            for roll in entry.min.max(*PERCENTILE.start())..=entry.max.min(*PERCENTILE.end()) {
                hits[roll as usize] = hits[roll as usize].saturating_add(1);
            }
        }

        let mut coverage = Coverage::default();
        for roll in PERCENTILE {
            match hits[roll as usize] {
                0 => coverage.gaps.push(roll),
                1 => {}
                _ => coverage.overlaps.push(roll),
            }
        }
        coverage
    }

    /// Logs every gap and overlap of the table, returns false if there were any.
    pub fn audit(&self) -> bool {
        let coverage = self.coverage();
        if !coverage.gaps.is_empty() {
            tracing::error!(
                table = self.name,
                gaps = ?coverage.gaps,
                "table leaves percentile rolls without a result"
            );
        }
        if !coverage.overlaps.is_empty() {
            tracing::warn!(
                table = self.name,
                overlaps = ?coverage.overlaps,
                "table has overlapping ranges, the first declared row wins"
            );
        }
        coverage.is_partition()
    }
}

/// The result of checking a table against `1..=100`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Rolls no row contains.
    pub gaps: Vec<u8>,
    /// Rolls more than one row contains.
    pub overlaps: Vec<u8>,
}

impl Coverage {
    pub fn is_partition(&self) -> bool {
        self.gaps.is_empty() && self.overlaps.is_empty()
    }
}

/// A uniform roll between 1 and 100.
pub fn roll_percentile(rng: &mut impl Rng) -> u8 {
    let roll = rng.gen_range(PERCENTILE);
    tracing::trace!(roll, "rolled d100");
    roll
}
