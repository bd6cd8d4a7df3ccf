//! Hoard coins and the loot tables rolled alongside them.

use rand::Rng;

use super::{roll_quantity, CoinRecipe, CrBand, Denomination::*};
use crate::error::Result;
use crate::table::{
    entry,
    magic_items::{repeat_draws, MagicItemTable, MagicItemTable::*},
    WeightedRange,
};

use ItemCount::{Once, Roll};
use Valuables::{Art, Gems};

/// Gems or art objects found in a hoard, the quantity is rolled with the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Valuables {
    /// `{notation}` gems worth `{value}` gp each
    Gems(&'static str, u32),
    /// `{notation}` art objects worth `{value}` gp each
    Art(&'static str, u32),
}

impl Valuables {
    pub fn notation(&self) -> &'static str {
        match self {
            Gems(notation, _) | Art(notation, _) => *notation,
        }
    }

    fn roll(&self, rng: &mut impl Rng) -> Result<String> {
        let amount = roll_quantity(self.notation(), rng)?;
        Ok(match self {
            Gems(_, value) => format!("{amount} {value}gp gems"),
            Art(_, value) => format!("{amount} {value}gp art objects"),
        })
    }
}

/// How many times to draw from a magic item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCount {
    Once,
    Roll(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDraw(pub ItemCount, pub MagicItemTable);

impl ItemDraw {
    fn roll(&self, rng: &mut impl Rng) -> Result<String> {
        let ItemDraw(count, table) = *self;
        let times = match count {
            Once => 1,
            Roll(notation) => u32::try_from(roll_quantity(notation, rng)?).unwrap_or(u32::MAX),
        };
        repeat_draws(times, table, rng)
    }
}

/// One row of a hoard loot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loot {
    pub valuables: Option<Valuables>,
    pub items: &'static [ItemDraw],
}

const fn loot(valuables: Option<Valuables>, items: &'static [ItemDraw]) -> Loot {
    Loot { valuables, items }
}

const NOTHING: Loot = loot(None, &[]);

impl Loot {
    /// Rolls every quantity of the row and describes the result,
    /// e.g. `3 50gp gems and a potion of healing, a driftglobe`.
    pub fn roll(&self, rng: &mut impl Rng) -> Result<String> {
        let valuables = self.valuables.map(|v| v.roll(rng)).transpose()?;
        let items = self
            .items
            .iter()
            .map(|draw| draw.roll(rng))
            .collect::<Result<Vec<_>>>()?
            .join(", ");

        Ok(match (valuables, items.is_empty()) {
            (None, true) => "nothing".to_string(),
            (None, false) => items,
            (Some(valuables), true) => valuables,
            (Some(valuables), false) => format!("{valuables} and {items}"),
        })
    }

    /// Every dice notation used by the row.
    pub fn notations(&self) -> impl Iterator<Item = &'static str> + '_ {
        let items = self.items.iter().filter_map(|ItemDraw(count, _)| match count {
            Once => None,
            Roll(notation) => Some(*notation),
        });
        self.valuables.map(|v| v.notation()).into_iter().chain(items)
    }
}

pub(crate) fn coins(band: CrBand) -> CoinRecipe {
    match band {
        CrBand::Cr0To4 => &[(Copper, "6d6*100"), (Silver, "3d6*100"), (Gold, "2d6*10")],
        CrBand::Cr5To10 => &[
            (Copper, "2d6*100"),
            (Silver, "2d6*1000"),
            (Gold, "6d6*100"),
            (Platinum, "3d6*10"),
        ],
        CrBand::Cr11To16 => &[(Gold, "4d6*1000"), (Platinum, "5d6*100")],
        CrBand::Cr17Plus => &[(Gold, "12d6*1000"), (Platinum, "8d6*1000")],
    }
}

pub(crate) fn table(band: CrBand) -> &'static WeightedRange<Loot> {
    match band {
        CrBand::Cr0To4 => &SMALL,
        CrBand::Cr5To10 => &MEDIUM,
        CrBand::Cr11To16 => &LARGE,
        CrBand::Cr17Plus => &HUGE,
    }
}

#[rustfmt::skip]
static SMALL: WeightedRange<Loot> = WeightedRange {
    name: "hoard loot CR 0-4",
    entries: &[
        entry(1, 7, NOTHING),
        entry(8, 16, loot(Some(Gems("2d6", 10)), &[])),
        entry(17, 26, loot(Some(Art("2d4", 25)), &[])),
        entry(27, 36, loot(Some(Gems("2d6", 50)), &[])),
        entry(37, 44, loot(Some(Gems("2d6", 10)), &[ItemDraw(Roll("1d6"), A)])),
        entry(45, 52, loot(Some(Art("2d4", 25)), &[ItemDraw(Roll("1d6"), A)])),
        entry(53, 60, loot(Some(Gems("2d6", 50)), &[ItemDraw(Roll("1d6"), A)])),
        entry(61, 65, loot(Some(Gems("2d6", 10)), &[ItemDraw(Roll("1d4"), B)])),
        entry(66, 70, loot(Some(Art("2d4", 25)), &[ItemDraw(Roll("1d4"), B)])),
        entry(71, 75, loot(Some(Gems("2d6", 50)), &[ItemDraw(Roll("1d4"), B)])),
        entry(76, 78, loot(Some(Gems("2d6", 10)), &[ItemDraw(Roll("1d4"), C)])),
        entry(79, 80, loot(Some(Art("2d4", 25)), &[ItemDraw(Roll("1d4"), C)])),
        entry(81, 85, loot(Some(Gems("2d6", 50)), &[ItemDraw(Roll("1d4"), C)])),
        entry(86, 92, loot(Some(Art("2d4", 25)), &[ItemDraw(Roll("1d4"), F)])),
        entry(93, 97, loot(Some(Gems("2d6", 50)), &[ItemDraw(Roll("1d4"), F)])),
        entry(98, 99, loot(Some(Art("2d4", 25)), &[ItemDraw(Once, G)])),
        entry(100, 100, loot(Some(Gems("2d6", 50)), &[ItemDraw(Once, G)])),
    ],
};

#[rustfmt::skip]
static MEDIUM: WeightedRange<Loot> = WeightedRange {
    name: "hoard loot CR 5-10",
    entries: &[
        entry(1, 4, NOTHING),
        entry(5, 10, loot(Some(Art("2d4", 25)), &[])),
        entry(11, 16, loot(Some(Gems("3d6", 50)), &[])),
        entry(17, 22, loot(Some(Gems("3d6", 100)), &[])),
        entry(23, 28, loot(Some(Art("2d4", 25)), &[])),
        entry(29, 32, loot(Some(Art("2d4", 25)), &[ItemDraw(Roll("1d6"), A)])),
        entry(33, 36, loot(Some(Gems("3d6", 50)), &[ItemDraw(Roll("1d6"), A)])),
        entry(37, 40, loot(Some(Gems("3d6", 100)), &[ItemDraw(Roll("1d6"), A)])),
        entry(41, 44, loot(Some(Art("2d4", 25)), &[ItemDraw(Roll("1d6"), A)])),
        entry(45, 49, loot(Some(Art("2d4", 25)), &[ItemDraw(Roll("1d4"), B)])),
        entry(50, 54, loot(Some(Gems("3d6", 50)), &[ItemDraw(Roll("1d4"), B)])),
        entry(55, 59, loot(Some(Gems("3d6", 100)), &[ItemDraw(Roll("1d4"), B)])),
        entry(60, 63, loot(Some(Art("2d4", 25)), &[ItemDraw(Roll("1d4"), B)])),
        entry(64, 66, loot(Some(Art("2d4", 25)), &[ItemDraw(Roll("1d4"), C)])),
        entry(67, 69, loot(Some(Gems("3d6", 50)), &[ItemDraw(Roll("1d4"), C)])),
        entry(70, 72, loot(Some(Gems("3d6", 100)), &[ItemDraw(Roll("1d4"), C)])),
        entry(73, 74, loot(Some(Art("2d4", 25)), &[ItemDraw(Roll("1d4"), C)])),
        entry(75, 76, loot(Some(Art("2d4", 25)), &[ItemDraw(Once, D)])),
        entry(77, 78, loot(Some(Gems("3d6", 50)), &[ItemDraw(Once, D)])),
        entry(79, 80, loot(Some(Art("2d4", 250)), &[ItemDraw(Once, D)])),
        entry(81, 84, loot(Some(Art("2d4", 25)), &[ItemDraw(Roll("1d4"), F)])),
        entry(85, 88, loot(Some(Gems("3d6", 50)), &[ItemDraw(Roll("1d4"), F)])),
        entry(89, 91, loot(Some(Gems("3d6", 100)), &[ItemDraw(Roll("1d4"), F)])),
        entry(92, 94, loot(Some(Art("2d4", 250)), &[ItemDraw(Roll("1d4"), F)])),
        entry(95, 96, loot(Some(Gems("3d6", 50)), &[ItemDraw(Roll("1d4"), G)])),
        entry(97, 98, loot(Some(Art("2d4", 250)), &[ItemDraw(Roll("1d6"), G)])),
        entry(99, 99, loot(Some(Gems("3d6", 100)), &[ItemDraw(Once, H)])),
        entry(100, 100, loot(Some(Art("2d4", 250)), &[ItemDraw(Once, H)])),
    ],
};

#[rustfmt::skip]
static LARGE: WeightedRange<Loot> = WeightedRange {
    name: "hoard loot CR 11-16",
    entries: &[
        entry(1, 3, NOTHING),
        entry(4, 6, loot(Some(Art("2d4", 250)), &[])),
        entry(7, 10, loot(Some(Art("2d4", 750)), &[])),
        entry(11, 12, loot(Some(Gems("3d6", 500)), &[])),
        entry(13, 15, loot(Some(Gems("3d6", 1000)), &[])),
        entry(16, 19, loot(Some(Art("2d4", 250)), &[ItemDraw(Roll("1d4"), A), ItemDraw(Roll("1d6"), B)])),
        entry(20, 23, loot(Some(Art("2d4", 750)), &[ItemDraw(Roll("1d4"), A), ItemDraw(Roll("1d6"), B)])),
        entry(24, 26, loot(Some(Gems("3d6", 500)), &[ItemDraw(Roll("1d4"), A), ItemDraw(Roll("1d6"), B)])),
        entry(27, 29, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Roll("1d4"), A), ItemDraw(Roll("1d6"), B)])),
        entry(30, 35, loot(Some(Art("2d4", 250)), &[ItemDraw(Roll("1d6"), C)])),
        entry(36, 40, loot(Some(Art("2d4", 750)), &[ItemDraw(Roll("1d6"), C)])),
        entry(41, 45, loot(Some(Gems("3d6", 500)), &[ItemDraw(Roll("1d6"), C)])),
        entry(46, 50, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Roll("1d6"), C)])),
        entry(51, 54, loot(Some(Art("2d4", 250)), &[ItemDraw(Roll("1d4"), D)])),
        entry(55, 59, loot(Some(Art("2d4", 750)), &[ItemDraw(Roll("1d4"), D)])),
        entry(60, 62, loot(Some(Gems("3d6", 500)), &[ItemDraw(Roll("1d4"), D)])),
        entry(63, 66, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Roll("1d4"), D)])),
        entry(67, 68, loot(Some(Art("2d4", 250)), &[ItemDraw(Once, E)])),
        entry(69, 70, loot(Some(Art("2d4", 750)), &[ItemDraw(Once, E)])),
        entry(71, 72, loot(Some(Gems("3d6", 500)), &[ItemDraw(Once, E)])),
        entry(73, 74, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Once, E)])),
        entry(75, 76, loot(Some(Art("2d4", 250)), &[ItemDraw(Once, F), ItemDraw(Roll("1d4"), G)])),
        entry(77, 78, loot(Some(Art("2d4", 750)), &[ItemDraw(Once, F), ItemDraw(Roll("1d4"), G)])),
        entry(79, 80, loot(Some(Gems("3d6", 500)), &[ItemDraw(Once, F), ItemDraw(Roll("1d4"), G)])),
        entry(81, 82, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Once, F), ItemDraw(Roll("1d4"), G)])),
        entry(83, 85, loot(Some(Art("2d4", 250)), &[ItemDraw(Roll("1d4"), H)])),
        entry(86, 88, loot(Some(Art("2d4", 750)), &[ItemDraw(Roll("1d4"), H)])),
        entry(89, 90, loot(Some(Gems("3d6", 500)), &[ItemDraw(Roll("1d4"), H)])),
        entry(91, 92, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Roll("1d4"), H)])),
        entry(93, 94, loot(Some(Art("2d4", 250)), &[ItemDraw(Once, I)])),
        entry(95, 96, loot(Some(Art("2d4", 750)), &[ItemDraw(Once, I)])),
        entry(97, 98, loot(Some(Gems("3d6", 500)), &[ItemDraw(Once, I)])),
        entry(99, 100, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Once, I)])),
    ],
};

#[rustfmt::skip]
static HUGE: WeightedRange<Loot> = WeightedRange {
    name: "hoard loot CR 17+",
    entries: &[
        entry(1, 2, NOTHING),
        entry(3, 5, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Roll("1d8"), C)])),
        entry(6, 8, loot(Some(Art("1d10", 2500)), &[ItemDraw(Roll("1d8"), C)])),
        entry(9, 11, loot(Some(Art("1d4", 7500)), &[ItemDraw(Roll("1d8"), C)])),
        entry(12, 14, loot(Some(Gems("1d8", 5000)), &[ItemDraw(Roll("1d8"), C)])),
        entry(15, 22, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Roll("1d6"), D)])),
        entry(23, 30, loot(Some(Art("1d10", 2500)), &[ItemDraw(Roll("1d6"), D)])),
        entry(31, 38, loot(Some(Art("1d4", 7500)), &[ItemDraw(Roll("1d6"), D)])),
        entry(39, 46, loot(Some(Gems("1d8", 5000)), &[ItemDraw(Roll("1d6"), D)])),
        entry(47, 52, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Roll("1d6"), E)])),
        entry(53, 58, loot(Some(Art("1d10", 2500)), &[ItemDraw(Roll("1d6"), E)])),
        entry(59, 63, loot(Some(Art("1d4", 7500)), &[ItemDraw(Roll("1d6"), E)])),
        entry(64, 68, loot(Some(Gems("1d8", 5000)), &[ItemDraw(Roll("1d6"), E)])),
        entry(69, 69, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Roll("1d4"), G)])),
        entry(70, 70, loot(Some(Art("1d10", 2500)), &[ItemDraw(Roll("1d4"), G)])),
        entry(71, 71, loot(Some(Art("1d4", 7500)), &[ItemDraw(Roll("1d4"), G)])),
        entry(72, 72, loot(Some(Gems("1d8", 5000)), &[ItemDraw(Roll("1d4"), G)])),
        entry(73, 74, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Roll("1d4"), H)])),
        entry(75, 76, loot(Some(Art("1d10", 2500)), &[ItemDraw(Roll("1d4"), H)])),
        entry(77, 78, loot(Some(Art("1d4", 7500)), &[ItemDraw(Roll("1d4"), H)])),
        entry(79, 80, loot(Some(Gems("1d8", 5000)), &[ItemDraw(Roll("1d4"), H)])),
        entry(81, 85, loot(Some(Gems("3d6", 1000)), &[ItemDraw(Roll("1d4"), I)])),
        entry(86, 90, loot(Some(Art("1d10", 2500)), &[ItemDraw(Roll("1d4"), I)])),
        entry(91, 95, loot(Some(Art("1d4", 7500)), &[ItemDraw(Once, F), ItemDraw(Roll("1d4"), G)])),
        entry(96, 100, loot(Some(Gems("1d8", 5000)), &[ItemDraw(Roll("1d4"), I)])),
    ],
};
