//! Coins and loot generated from a creature's challenge rating.
//!
//! ```rust
//! # use rpg_treasure_roller::{generate_treasure_with, Treasure};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), rpg_treasure_roller::Error> {
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! // What a CR 1/4 goblin carries
//! let treasure = generate_treasure_with("1/4", "no", &mut rng)?;
//! assert!(matches!(treasure, Treasure::Individual(_)));
//!
//! // The lair of a CR 17 dragon
//! let treasure = generate_treasure_with("17", "hoard", &mut rng)?;
//! println!("{treasure}");
//! # Ok(())
//! # }
//! ```

pub mod hoard;
pub mod individual;

use std::str::FromStr;
use std::sync::Once;

use rand::Rng;

use crate::error::{Error, Result};
use crate::parse::DiceExpression;
use crate::table::{magic_items::MagicItemTable, roll_percentile};

/// Which coins to roll and the notation for each, e.g. `[(Gold, "4d6*10")]`.
pub type CoinRecipe = &'static [(Denomination, &'static str)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Denomination {
    Copper,
    Silver,
    Electrum,
    Gold,
    Platinum,
}

impl Denomination {
    /// Ordered from the least to the most valuable coin.
    pub const ALL: [Denomination; 5] = [
        Denomination::Copper,
        Denomination::Silver,
        Denomination::Electrum,
        Denomination::Gold,
        Denomination::Platinum,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            Denomination::Copper => "cp",
            Denomination::Silver => "sp",
            Denomination::Electrum => "ep",
            Denomination::Gold => "gp",
            Denomination::Platinum => "pp",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// An amount for every denomination, missing coins are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CoinAmounts([u64; 5]);

impl CoinAmounts {
    pub fn get(&self, denomination: Denomination) -> u64 {
        self.0[denomination.index()]
    }

    pub fn set(&mut self, denomination: Denomination, amount: u64) {
        self.0[denomination.index()] = amount;
    }

    /// Every denomination with its amount, zeroes included.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        Denomination::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&amount| amount == 0)
    }

    /// Rolls every notation of the recipe.
    pub fn roll(recipe: CoinRecipe, rng: &mut impl Rng) -> Result<Self> {
        let mut amounts = CoinAmounts::default();
        for &(denomination, notation) in recipe {
            amounts.set(denomination, roll_quantity(notation, rng)?);
        }
        Ok(amounts)
    }
}

impl std::fmt::Display for CoinAmounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "no coins");
        }
        let coins = self
            .iter()
            .filter(|(_, amount)| *amount > 0)
            .map(|(denomination, amount)| format!("{amount} {denomination}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{coins}")
    }
}

/// Rolls the notation and returns the sum, negative sums count as 0.
pub(crate) fn roll_quantity(notation: &str, rng: &mut impl Rng) -> Result<u64> {
    let outcome = DiceExpression::parse(notation)?.roll_with(rng);
    Ok(u64::try_from(outcome.sum()).unwrap_or(0))
}

/// A challenge rating between 0 and 30.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ChallengeRating(f64);

impl ChallengeRating {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 30.0;

    pub fn new(value: f64) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidChallengeRating(value.to_string()))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn band(self) -> CrBand {
        match self.0 {
            cr if cr <= 4.0 => CrBand::Cr0To4,
            cr if cr <= 10.0 => CrBand::Cr5To10,
            cr if cr <= 16.0 => CrBand::Cr11To16,
            _ => CrBand::Cr17Plus,
        }
    }
}

impl TryFrom<f64> for ChallengeRating {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

/// Accepts `1/8`, `1/4`, `1/2` and decimal numbers.
impl FromStr for ChallengeRating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let value = match token {
            "1/8" => 0.125,
            "1/4" => 0.25,
            "1/2" => 0.5,
            _ => token
                .parse::<f64>()
                .map_err(|_| Error::InvalidChallengeRating(s.to_string()))?,
        };
        Self::new(value).map_err(|_| Error::InvalidChallengeRating(s.to_string()))
    }
}

impl std::fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            cr if cr == 0.125 => write!(f, "1/8"),
            cr if cr == 0.25 => write!(f, "1/4"),
            cr if cr == 0.5 => write!(f, "1/2"),
            cr => write!(f, "{cr}"),
        }
    }
}

/// The four challenge rating bands every treasure table is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrBand {
    Cr0To4,
    Cr5To10,
    Cr11To16,
    Cr17Plus,
}

impl CrBand {
    pub const ALL: [CrBand; 4] = [
        CrBand::Cr0To4,
        CrBand::Cr5To10,
        CrBand::Cr11To16,
        CrBand::Cr17Plus,
    ];
}

impl std::fmt::Display for CrBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            CrBand::Cr0To4 => "CR 0-4",
            CrBand::Cr5To10 => "CR 5-10",
            CrBand::Cr11To16 => "CR 11-16",
            CrBand::Cr17Plus => "CR 17+",
        };
        write!(f, "{str}")
    }
}

/// Selects the coin and loot tables for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreasureTier {
    pub band: CrBand,
    pub hoard: bool,
}

impl TreasureTier {
    pub fn new(challenge_rating: ChallengeRating, hoard: bool) -> Self {
        Self {
            band: challenge_rating.band(),
            hoard,
        }
    }

    pub fn generate(self, rng: &mut impl Rng) -> Result<Treasure> {
        if self.hoard {
            self.hoard_treasure(rng).map(Treasure::Hoard)
        } else {
            self.individual_treasure(rng).map(Treasure::Individual)
        }
    }

    /// Resolves the band's coin table and rolls the chosen recipe.
    pub fn individual_treasure(self, rng: &mut impl Rng) -> Result<CoinAmounts> {
        audit_tables_once();
        tracing::debug!(band = %self.band, "generating individual treasure");

        let recipe = individual::table(self.band).resolve(rng)?;
        CoinAmounts::roll(recipe, rng)
    }

    /// Rolls the band's hoard coins and one row of its loot table.
    pub fn hoard_treasure(self, rng: &mut impl Rng) -> Result<Hoard> {
        audit_tables_once();
        tracing::debug!(band = %self.band, "generating hoard");

        // the loot row is picked before any coin is rolled
        let loot_roll = roll_percentile(rng);
        let coins = CoinAmounts::roll(hoard::coins(self.band), rng)?;
        let loot = hoard::table(self.band).lookup(loot_roll)?.roll(rng)?;
        Ok(Hoard { coins, loot })
    }
}

/// A hoard: coins plus a description of the gems, art objects and magic items in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hoard {
    pub coins: CoinAmounts,
    pub loot: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Treasure {
    Individual(CoinAmounts),
    Hoard(Hoard),
}

impl Treasure {
    pub fn coins(&self) -> &CoinAmounts {
        match self {
            Treasure::Individual(coins) => coins,
            Treasure::Hoard(hoard) => &hoard.coins,
        }
    }

    pub fn loot(&self) -> Option<&str> {
        match self {
            Treasure::Individual(_) => None,
            Treasure::Hoard(hoard) => Some(&hoard.loot),
        }
    }
}

impl std::fmt::Display for Treasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Treasure::Individual(coins) => write!(f, "You found {coins}!"),
            Treasure::Hoard(Hoard { coins, loot }) => write!(
                f,
                "For coins, you found {coins}!\n\nFor treasure, you found {loot}!"
            ),
        }
    }
}

/// Coins carried by a single creature of the given challenge rating.
pub fn generate_individual_treasure(
    challenge_rating: f64,
    rng: &mut impl Rng,
) -> Result<CoinAmounts> {
    TreasureTier::new(ChallengeRating::new(challenge_rating)?, false).individual_treasure(rng)
}

/// Coins and loot of a hoard guarded by a creature of the given challenge rating.
pub fn generate_hoard_treasure(challenge_rating: f64, rng: &mut impl Rng) -> Result<Hoard> {
    TreasureTier::new(ChallengeRating::new(challenge_rating)?, true).hoard_treasure(rng)
}

/// `yes`, `true`, `1`, `hoard` or anything starting with `y`, ignoring case.
pub fn is_hoard(token: &str) -> bool {
    let token = token.trim().to_lowercase();
    matches!(token.as_str(), "yes" | "true" | "1" | "hoard") || token.starts_with('y')
}

/// Parses both tokens and generates the treasure.
/// Uses rand::thread_rng(), if you want to choose the rng yourself use `generate_treasure_with()`
pub fn generate_treasure(challenge_rating: &str, hoard: &str) -> Result<Treasure> {
    generate_treasure_with(challenge_rating, hoard, &mut rand::thread_rng())
}

/// Same as `generate_treasure()` but allows you to choose the rng you prefer to use.
pub fn generate_treasure_with(
    challenge_rating: &str,
    hoard: &str,
    rng: &mut impl Rng,
) -> Result<Treasure> {
    let challenge_rating = challenge_rating.parse::<ChallengeRating>()?;
    let treasure = TreasureTier::new(challenge_rating, is_hoard(hoard)).generate(rng)?;
    tracing::debug!(%challenge_rating, %treasure, "generated treasure");
    Ok(treasure)
}

static AUDIT: Once = Once::new();

fn audit_tables_once() {
    AUDIT.call_once(|| {
        audit_tables();
    });
}

/// Checks every table and notation, logging each defect found.
/// Returns true when all tables partition `1..=100` and every notation parses.
pub fn audit_tables() -> bool {
    let mut clean = true;

    for table in MagicItemTable::ALL {
        clean &= table.table().audit();
    }

    for band in CrBand::ALL {
        clean &= individual::table(band).audit();
        clean &= hoard::table(band).audit();

        let individual_notations = individual::table(band)
            .entries()
            .iter()
            .flat_map(|entry| entry.payload.iter().map(|(_, notation)| *notation));
        let hoard_notations = hoard::coins(band).iter().map(|(_, notation)| *notation);
        let loot_notations = hoard::table(band)
            .entries()
            .iter()
            .flat_map(|entry| entry.payload.notations());

        for notation in individual_notations
            .chain(hoard_notations)
            .chain(loot_notations)
        {
            if let Err(err) = DiceExpression::parse(notation) {
                tracing::error!(%band, %err, "treasure table uses invalid notation");
                clean = false;
            }
        }
    }

    clean
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{
        audit_tables, generate_hoard_treasure, generate_individual_treasure,
        generate_treasure_with, is_hoard, ChallengeRating, CoinAmounts, CrBand, Denomination,
        Treasure, TreasureTier,
    };
    use crate::error::Error;

    #[test]
    fn test_challenge_rating_tokens() {
        #[rustfmt::skip]
        let inputs = [
            ("1/8", 0.125),
            ("1/4", 0.25),
            ("1/2", 0.5),
            ("0", 0.0),
            ("3", 3.0),
            (" 17 ", 17.0),
            ("4.5", 4.5),
            ("30", 30.0),
        ];

        for (token, expected) in inputs {
            let cr: ChallengeRating = token.parse().unwrap();
            assert_eq!(cr.value(), expected, "{token}");
        }
    }

    #[test]
    fn test_invalid_challenge_ratings() {
        for token in ["", "-1", "30.5", "31", "abc", "1/3", "NaN", "inf", "-inf", "5abc"] {
            let err = token.parse::<ChallengeRating>().unwrap_err();
            assert_eq!(err, Error::InvalidChallengeRating(token.to_string()));
        }

        assert!(ChallengeRating::new(f64::NAN).is_err());
        assert!(ChallengeRating::try_from(-0.5).is_err());
        assert!(ChallengeRating::try_from(30.0).is_ok());
    }

    #[test]
    fn test_bands() {
        #[rustfmt::skip]
        let inputs = [
            (0.0, CrBand::Cr0To4),
            (0.25, CrBand::Cr0To4),
            (4.0, CrBand::Cr0To4),
            (4.5, CrBand::Cr5To10),
            (5.0, CrBand::Cr5To10),
            (10.0, CrBand::Cr5To10),
            (11.0, CrBand::Cr11To16),
            (16.0, CrBand::Cr11To16),
            (17.0, CrBand::Cr17Plus),
            (30.0, CrBand::Cr17Plus),
        ];

        for (value, expected) in inputs {
            assert_eq!(ChallengeRating::new(value).unwrap().band(), expected, "{value}");
        }
    }

    #[test]
    fn test_challenge_rating_display() {
        assert_eq!("1/4".parse::<ChallengeRating>().unwrap().to_string(), "1/4");
        assert_eq!("12".parse::<ChallengeRating>().unwrap().to_string(), "12");
    }

    #[test]
    fn test_is_hoard() {
        for token in ["yes", "YES", "true", "True", "1", "hoard", "Hoard", "y", "yep", "yarr"] {
            assert!(is_hoard(token), "{token}");
        }
        for token in ["", "no", "false", "0", "n", "individual", "nope", "2"] {
            assert!(!is_hoard(token), "{token}");
        }
    }

    #[test]
    fn test_coin_amounts_display() {
        let mut coins = CoinAmounts::default();
        assert_eq!(coins.to_string(), "no coins");

        coins.set(Denomination::Gold, 40);
        coins.set(Denomination::Copper, 12);
        assert_eq!(coins.to_string(), "12 cp, 40 gp");
        assert_eq!(coins.iter().count(), 5);
    }

    #[test]
    fn test_individual_treasure_at_range_ends() {
        for cr in [0.0, 30.0] {
            let coins = generate_individual_treasure(cr, &mut StdRng::seed_from_u64(5)).unwrap();
            let amounts = coins.iter().collect::<Vec<_>>();
            assert_eq!(amounts.len(), 5);
            assert!(!coins.is_empty());
        }
    }

    #[test]
    fn test_individual_treasure_only_uses_band_coins() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let coins = generate_individual_treasure(20.0, &mut rng).unwrap();
            assert_eq!(coins.get(Denomination::Copper), 0);
            assert_eq!(coins.get(Denomination::Silver), 0);
            assert!(coins.get(Denomination::Gold) >= 800);
        }
    }

    #[test]
    fn test_hoard_coins_follow_band_recipe() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let hoard = generate_hoard_treasure(2.0, &mut rng).unwrap();
            assert!((600..=3600).contains(&hoard.coins.get(Denomination::Copper)));
            assert!((300..=1800).contains(&hoard.coins.get(Denomination::Silver)));
            assert!((20..=120).contains(&hoard.coins.get(Denomination::Gold)));
            assert_eq!(hoard.coins.get(Denomination::Electrum), 0);
            assert_eq!(hoard.coins.get(Denomination::Platinum), 0);
            assert!(!hoard.loot.is_empty());
        }
    }

    #[test]
    fn test_out_of_range_rating_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_individual_treasure(31.0, &mut rng),
            Err(Error::InvalidChallengeRating(_))
        ));
        assert!(matches!(
            generate_hoard_treasure(-1.0, &mut rng),
            Err(Error::InvalidChallengeRating(_))
        ));
        assert!(matches!(
            generate_treasure_with("thirty", "yes", &mut rng),
            Err(Error::InvalidChallengeRating(_))
        ));
    }

    #[test]
    fn test_tier_selection() {
        let cr: ChallengeRating = "1/4".parse().unwrap();
        let tier = TreasureTier::new(cr, false);
        assert_eq!(tier.band, CrBand::Cr0To4);
        assert!(!tier.hoard);

        let treasure = generate_treasure_with("1/4", "no", &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(matches!(treasure, Treasure::Individual(_)));
        assert_eq!(treasure.loot(), None);

        let treasure = generate_treasure_with("9", "y", &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(treasure.loot().is_some());
        assert!(treasure.to_string().starts_with("For coins, you found "));
    }

    #[test]
    fn test_audit_reports_known_overlap() {
        // the CR 11-16 individual table overlaps on 21-30
        assert!(!audit_tables());
    }
}
