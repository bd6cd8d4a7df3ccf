//! Roll dice notation and generate treasure from percentile tables.
//!
//! ```rust
//! # use rpg_treasure_roller::{roll, roll_with, generate_treasure_with, DiceExpression};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), rpg_treasure_roller::Error> {
//! // Roll 2 d6 and add 1 to the total.
//! let rolled = roll("2d6+1")?;
//! println!("{rolled}"); // 3 + 5 (+ 1) = 9
//!
//! // Use a custom Rng that implements the rand::Rng trait
//! let mut rng = StdRng::seed_from_u64(1);
//! let rolled = roll_with("4d6*100", &mut rng)?;
//! assert_eq!(rolled.rolls().len(), 4);
//!
//! // Create the expression directly without parsing
//! let dice = DiceExpression::new(1, 20).with_modifier(-2);
//! let rolled = dice.roll_with(&mut rng);
//! assert!((-1..=18).contains(&rolled.sum()));
//!
//! // Treasure for a CR 5 hoard
//! let treasure = generate_treasure_with("5", "yes", &mut rng)?;
//! println!("{treasure}");
//! # Ok(())
//! # }
//! ```

mod error;
mod evaluate;
mod parse;
pub mod table;
pub mod treasure;

pub use error::{Error, Result};
pub use evaluate::roll::RollOutcome;
pub use parse::{DiceExpression, MAX_DICE};
pub use table::{
    magic_items::{repeat_draws, MagicItemTable},
    Coverage, RangeEntry, WeightedRange,
};
pub use treasure::{
    audit_tables, generate_hoard_treasure, generate_individual_treasure, generate_treasure,
    generate_treasure_with, is_hoard, ChallengeRating, CoinAmounts, CrBand, Denomination, Hoard,
    Treasure, TreasureTier,
};

/// Parses the notation without rolling the dice.
pub fn parse(notation: &str) -> Result<DiceExpression> {
    DiceExpression::parse(notation)
}

/// Parses the notation returning the result of rolling all the dice parsed.
pub fn roll(notation: &str) -> Result<RollOutcome> {
    let expression = DiceExpression::parse(notation)?;
    Ok(expression.roll_with(&mut rand::thread_rng()))
}

/// Same as `roll()` but allows you to choose the rng you prefer to use.
pub fn roll_with(notation: &str, rng: &mut impl rand::Rng) -> Result<RollOutcome> {
    let expression = DiceExpression::parse(notation)?;
    Ok(expression.roll_with(rng))
}
