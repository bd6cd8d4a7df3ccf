//! Property-based tests for dice rolling
//!
//! Tests invariants:
//! - Every die lands between 1 and its number of sides
//! - One result per die
//! - The sum is `(rolls + modifier) * multiplier`
//! - Canonical notation parses back to the same expression

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use rpg_treasure_roller::{roll_with, DiceExpression, MAX_DICE};

fn arb_dice_expression() -> impl Strategy<Value = DiceExpression> {
    (1..=MAX_DICE, 1u32..=1000, -1000i64..=1000, 1u32..=1000).prop_map(
        |(count, sides, modifier, multiplier)| {
            DiceExpression::new(count, sides)
                .with_modifier(modifier)
                .with_multiplier(multiplier)
        },
    )
}

proptest! {
    #[test]
    fn rolls_stay_within_sides(dice in arb_dice_expression(), seed in any::<u64>()) {
        let outcome = dice.roll_with(&mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(outcome.rolls().len(), dice.count() as usize);
        prop_assert!(outcome.rolls().iter().all(|r| (1..=dice.sides()).contains(r)));
    }

    #[test]
    fn sum_applies_modifier_then_multiplier(dice in arb_dice_expression(), seed in any::<u64>()) {
        let outcome = dice.roll_with(&mut StdRng::seed_from_u64(seed));
        let total: i64 = outcome.rolls().iter().map(|&r| i64::from(r)).sum();

        prop_assert_eq!(outcome.sum(), (total + dice.modifier()) * i64::from(dice.multiplier()));
    }

    #[test]
    fn display_parses_back(dice in arb_dice_expression()) {
        let parsed = DiceExpression::parse(&dice.to_string()).unwrap();
        prop_assert_eq!(parsed, dice);
    }

    #[test]
    fn same_seed_same_roll(dice in arb_dice_expression(), seed in any::<u64>()) {
        let notation = dice.to_string();
        let first = roll_with(&notation, &mut StdRng::seed_from_u64(seed)).unwrap();
        let second = roll_with(&notation, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}
