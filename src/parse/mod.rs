mod dice;

use std::str::FromStr;

use crate::error::{Error, Result};

/// The largest amount of dice a single notation may roll.
pub const MAX_DICE: u32 = 999;

/// `{count}d{sides}{+|-modifier}{*multiplier}`\
/// A parsed dice notation, e.g. `2d6+1` or `4d6*100`.
///
/// The modifier is added to the sum of the dice before the multiplier is applied,
/// so `2d6+1*10` rolls two d6, adds one and multiplies the total by ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceExpression {
    pub(crate) count: u32,
    pub(crate) sides: u32,
    pub(crate) modifier: i64,
    pub(crate) multiplier: u32,
}

impl DiceExpression {
    /// Creates `{count}d{sides}` without modifier or multiplier.
    /// The count is clamped between 1 and [`MAX_DICE`], the sides are at least 1.
    pub fn new(count: u32, sides: u32) -> Self {
        Self {
            count: count.clamp(1, MAX_DICE),
            sides: sides.max(1),
            modifier: 0,
            multiplier: 1,
        }
    }

    pub fn with_modifier(mut self, modifier: i64) -> Self {
        self.modifier = modifier;
        self
    }

    /// A multiplier of 0 is treated as 1.
    pub fn with_multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = multiplier.max(1);
        self
    }

    /// Parses the notation, whitespace anywhere in the input is ignored.
    pub fn parse(notation: &str) -> Result<Self> {
        dice::parse_notation(notation)
    }

    pub fn count(&self) -> u32 {
        self.count
    }
    pub fn sides(&self) -> u32 {
        self.sides
    }
    pub fn modifier(&self) -> i64 {
        self.modifier
    }
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }
}

impl FromStr for DiceExpression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        if self.multiplier != 1 {
            write!(f, "*{}", self.multiplier)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DiceExpression, MAX_DICE};

    #[test]
    fn test_display_is_canonical() {
        #[rustfmt::skip]
        let inputs = [
            ("d20", "1d20"),
            ("2d6+1", "2d6+1"),
            ("2d8-5", "2d8-5"),
            ("4d6*100", "4d6*100"),
            ("1d6+0*1", "1d6"),
            (" 3 d 4 - 2 * 10 ", "3d4-2*10"),
        ];

        for (input, expected) in inputs {
            let expression = DiceExpression::parse(input).unwrap();
            assert_eq!(expression.to_string(), expected);
            assert_eq!(DiceExpression::parse(expected).unwrap(), expression);
        }
    }

    #[test]
    fn test_new_clamps_values() {
        let expression = DiceExpression::new(0, 0).with_multiplier(0);
        assert_eq!(expression.count(), 1);
        assert_eq!(expression.sides(), 1);
        assert_eq!(expression.multiplier(), 1);

        let expression = DiceExpression::new(5000, 6);
        assert_eq!(expression.count(), MAX_DICE);
    }

    #[test]
    fn test_from_str() {
        let expression: DiceExpression = "3d6*10".parse().unwrap();
        assert_eq!(expression, DiceExpression::new(3, 6).with_multiplier(10));
    }
}
