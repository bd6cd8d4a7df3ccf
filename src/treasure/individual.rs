//! Coins carried by a single creature, one table per challenge rating band.
//!
//! The CR 11-16 table lists `0-30` followed by `21-35`. The rows are kept as
//! published, rolls of 21 to 30 resolve to the first row and the table audit reports
//! the overlap.

use super::{CoinRecipe, CrBand, Denomination::*};
use crate::table::{entry, WeightedRange};

pub(crate) fn table(band: CrBand) -> &'static WeightedRange<CoinRecipe> {
    match band {
        CrBand::Cr0To4 => &CR_0_TO_4,
        CrBand::Cr5To10 => &CR_5_TO_10,
        CrBand::Cr11To16 => &CR_11_TO_16,
        CrBand::Cr17Plus => &CR_17_PLUS,
    }
}

static CR_0_TO_4: WeightedRange<CoinRecipe> = WeightedRange {
    name: "individual treasure CR 0-4",
    entries: &[
        entry(0, 30, &[(Copper, "5d6")]),
        entry(31, 60, &[(Silver, "4d6")]),
        entry(61, 70, &[(Electrum, "3d6")]),
        entry(71, 95, &[(Gold, "3d6")]),
        entry(96, 100, &[(Platinum, "1d6")]),
    ],
};

static CR_5_TO_10: WeightedRange<CoinRecipe> = WeightedRange {
    name: "individual treasure CR 5-10",
    entries: &[
        entry(0, 30, &[(Copper, "4d6*100"), (Electrum, "1d6*10")]),
        entry(31, 60, &[(Silver, "6d6*10"), (Gold, "2d6*10")]),
        entry(61, 70, &[(Electrum, "1d6*100"), (Gold, "2d6*10")]),
        entry(71, 95, &[(Gold, "4d6*10")]),
        entry(96, 100, &[(Gold, "2d6*10"), (Platinum, "3d6")]),
    ],
};

static CR_11_TO_16: WeightedRange<CoinRecipe> = WeightedRange {
    name: "individual treasure CR 11-16",
    entries: &[
        entry(0, 30, &[(Copper, "4d6*100"), (Gold, "1d6*10")]),
        entry(21, 35, &[(Electrum, "1d6*100"), (Gold, "1d6*100")]),
        entry(36, 75, &[(Gold, "2d6*100"), (Platinum, "1d6*10")]),
        entry(76, 100, &[(Gold, "2d6*100"), (Platinum, "2d6*10")]),
    ],
};

static CR_17_PLUS: WeightedRange<CoinRecipe> = WeightedRange {
    name: "individual treasure CR 17+",
    entries: &[
        entry(0, 15, &[(Electrum, "2d6*1000"), (Gold, "8d6*100")]),
        entry(16, 55, &[(Gold, "1d6*1000"), (Platinum, "1d6*100")]),
        entry(56, 100, &[(Gold, "1d6*1000"), (Platinum, "2d6*100")]),
    ],
};

#[cfg(test)]
mod tests {
    use super::table;
    use crate::treasure::{CrBand, Denomination};

    #[test]
    fn test_clean_tables_partition_percentile() {
        for band in [CrBand::Cr0To4, CrBand::Cr5To10, CrBand::Cr17Plus] {
            let coverage = table(band).coverage();
            assert!(coverage.is_partition(), "{band}: {coverage:?}");
        }
    }

    #[test]
    fn test_cr_11_to_16_overlap_is_flagged() {
        let table = table(CrBand::Cr11To16);
        let coverage = table.coverage();

        assert!(coverage.gaps.is_empty());
        assert_eq!(coverage.overlaps, (21..=30).collect::<Vec<u8>>());
        assert!(!table.audit());
    }

    #[test]
    fn test_cr_11_to_16_overlap_resolves_to_first_row() {
        let table = table(CrBand::Cr11To16);
        for roll in 21..=30 {
            let recipe = table.lookup(roll).unwrap();
            assert_eq!(recipe[0].0, Denomination::Copper, "{roll}");
        }
        assert_eq!(table.lookup(31).unwrap()[0].0, Denomination::Electrum);
    }

    #[test]
    fn test_row_boundaries() {
        let low = table(CrBand::Cr0To4);
        assert_eq!(*low.lookup(1).unwrap(), [(Denomination::Copper, "5d6")]);
        assert_eq!(*low.lookup(30).unwrap(), [(Denomination::Copper, "5d6")]);
        assert_eq!(*low.lookup(31).unwrap(), [(Denomination::Silver, "4d6")]);
        assert_eq!(*low.lookup(100).unwrap(), [(Denomination::Platinum, "1d6")]);

        let epic = table(CrBand::Cr17Plus);
        assert_eq!(epic.lookup(15).unwrap()[0].0, Denomination::Electrum);
        assert_eq!(epic.lookup(16).unwrap()[1], (Denomination::Platinum, "1d6*100"));
    }
}
