use winnow::{
    ascii::digit1,
    combinator::{alt, cut_err, opt, preceded},
    error::{
        StrContext::{Expected, Label},
        StrContextValue::{CharLiteral, Description},
    },
    PResult, Parser,
};

use super::{DiceExpression, MAX_DICE};
use crate::error::{Error, Result};

pub(super) fn parse_notation(notation: &str) -> Result<DiceExpression> {
    let stripped: String = notation.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(Error::invalid_notation(notation, "the notation is empty"));
    }

    let parsed = dice_expression.parse(stripped.as_str()).map_err(|e| {
        let context = e.inner().to_string();
        let reason = if context.is_empty() {
            format!("unexpected input at position {}", e.offset())
        } else {
            context.replace('\n', ", ")
        };
        Error::invalid_notation(notation, reason)
    });

    match &parsed {
        Ok(expression) => tracing::trace!(%notation, %expression, "parsed dice notation"),
        Err(err) => tracing::debug!(%err, "rejected dice notation"),
    }
    parsed
}

fn dice_expression(input: &mut &str) -> PResult<DiceExpression> {
    (
        opt(dice_count),
        'd'.context(Label("d")).context(Expected(CharLiteral('d'))),
        cut_err(dice_sides),
        opt(modifier),
        opt(multiplier),
    )
        .map(|(count, _, sides, modifier, multiplier)| DiceExpression {
            count: count.unwrap_or(1),
            sides,
            modifier: modifier.unwrap_or(0),
            multiplier: multiplier.unwrap_or(1),
        })
        .context(Label("Dice"))
        .parse_next(input)
}

fn dice_count(input: &mut &str) -> PResult<u32> {
    number
        .verify(|count: &u32| (1..=MAX_DICE).contains(count))
        .context(Label("dice quantity"))
        .context(Expected(Description(
            "quantity must either be between 1 and 999 or empty (to indicate 1 die)",
        )))
        .parse_next(input)
}

fn dice_sides(input: &mut &str) -> PResult<u32> {
    positive_number
        .context(Label("dice sides"))
        .context(Expected(Description("a number of sides of at least 1")))
        .parse_next(input)
}

fn modifier(input: &mut &str) -> PResult<i64> {
    let sign = alt(('+'.value(1i64), '-'.value(-1i64))).parse_next(input)?;
    let magnitude = cut_err(digit1.try_map(|digits: &str| digits.parse::<i64>()))
        .context(Label("modifier"))
        .context(Expected(Description("a number after `+` or `-`")))
        .parse_next(input)?;

    Ok(sign * magnitude)
}

fn multiplier(input: &mut &str) -> PResult<u32> {
    preceded(
        '*',
        cut_err(positive_number)
            .context(Label("multiplier"))
            .context(Expected(Description("a number of at least 1 after `*`"))),
    )
    .parse_next(input)
}

fn positive_number(input: &mut &str) -> PResult<u32> {
    number.verify(|n: &u32| *n >= 1).parse_next(input)
}

fn number(input: &mut &str) -> PResult<u32> {
    digit1
        .try_map(|digits: &str| digits.parse::<u32>())
        .parse_next(input)
}
