use rand::{rngs::StdRng, SeedableRng};
use rpg_treasure_roller::{parse, roll, roll_with, DiceExpression, Error};

fn test_rng() -> StdRng {
    StdRng::seed_from_u64(1)
}

fn run(input: &str, count: usize, sides: u32, modifier: i64, multiplier: u32) {
    let rolled = roll_with(input, &mut test_rng()).unwrap();
    assert_eq!(rolled.rolls().len(), count, "{input}");
    assert!(rolled.rolls().iter().all(|r| (1..=sides).contains(r)), "{input}");
    assert_eq!(rolled.modifier(), modifier, "{input}");
    assert_eq!(rolled.multiplier(), multiplier, "{input}");

    let total: i64 = rolled.rolls().iter().map(|&r| i64::from(r)).sum();
    assert_eq!(rolled.sum(), (total + modifier) * i64::from(multiplier), "{input}");
}

#[test]
fn test_one_d20() {
    run("1d20", 1, 20, 0, 1);
}

#[test]
fn test_implicit_count() {
    run("d8", 1, 8, 0, 1);
}

#[test]
fn test_two_d6_plus_one() {
    run("2d6+1", 2, 6, 1, 1);
}

#[test]
fn test_negative_modifier() {
    run("1d20-2", 1, 20, -2, 1);
}

#[test]
fn test_multiplier() {
    run("4d6*100", 4, 6, 0, 100);
    run("12d6*1000", 12, 6, 0, 1000);
}

#[test]
fn test_modifier_then_multiplier() {
    run("2d6+1*10", 2, 6, 1, 10);
}

#[test]
fn test_whitespace_is_ignored() {
    run(" 3 d 6 + 2 ", 3, 6, 2, 1);
}

#[test]
fn test_same_seed_same_outcome() {
    let first = roll_with("10d100+5*3", &mut test_rng()).unwrap();
    let second = roll_with("10d100+5*3", &mut test_rng()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_display_matches_rolls() {
    let rolled = roll_with("3d6+1", &mut test_rng()).unwrap();
    let dice = rolled
        .rolls()
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" + ");
    assert_eq!(rolled.to_string(), format!("{dice} (+ 1) = {}", rolled.sum()));

    let rolled = roll_with("2d4*100", &mut test_rng()).unwrap();
    let dice = rolled
        .rolls()
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" + ");
    assert_eq!(rolled.to_string(), format!("({dice}) * 100 = {}", rolled.sum()));
}

#[test]
fn test_thread_rng_roll() {
    let rolled = roll("5d4").unwrap();
    assert_eq!(rolled.rolls().len(), 5);
    assert!((5..=20).contains(&rolled.sum()));
}

#[test]
fn test_parse_without_rolling() {
    let dice = parse("2d6+1*10").unwrap();
    assert_eq!(dice, DiceExpression::new(2, 6).with_modifier(1).with_multiplier(10));
    assert_eq!(dice.to_string(), "2d6+1*10");
}

#[test]
fn test_invalid_notations() {
    #[rustfmt::skip]
    let inputs = [
        "",
        "abc",
        "2x6",
        "2d",
        "d",
        "2d6+",
        "2d6*",
        "2d6 extra",
        "0d6",
        "2d0",
    ];

    for input in inputs {
        let err = roll_with(input, &mut test_rng()).unwrap_err();
        assert!(
            matches!(&err, Error::InvalidNotation { notation, .. } if notation == input),
            "{input}: {err:?}"
        );
        assert!(err.is_user_error());
    }
}
