use rand::Rng;

use crate::parse::DiceExpression;

/// The result of rolling a [`DiceExpression`].
///
/// `sum` is `(rolls + modifier) * multiplier`, the modifier and multiplier
/// are kept so the result can be displayed the same way it was rolled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    pub(crate) rolls: Vec<u32>,
    pub(crate) sum: i64,
    pub(crate) modifier: i64,
    pub(crate) multiplier: u32,
}

impl RollOutcome {
    pub(crate) fn new(rolls: Vec<u32>, modifier: i64, multiplier: u32) -> Self {
        let total: i64 = rolls.iter().map(|&r| i64::from(r)).sum();
        Self {
            sum: total
                .saturating_add(modifier)
                .saturating_mul(i64::from(multiplier)),
            rolls,
            modifier,
            multiplier,
        }
    }

    /// Every die result in the order it was rolled.
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }
    pub fn sum(&self) -> i64 {
        self.sum
    }
    pub fn modifier(&self) -> i64 {
        self.modifier
    }
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }
}

impl DiceExpression {
    /// Roll every die of the expression.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `roll_with()`
    pub fn roll(&self) -> RollOutcome {
        self.roll_with(&mut rand::thread_rng())
    }

    /// Roll every die of the expression with the rng specified.
    pub fn roll_with(&self, rng: &mut impl Rng) -> RollOutcome {
        let rolls = (0..self.count).map(|_| self.roll_value(rng)).collect();
        let outcome = RollOutcome::new(rolls, self.modifier, self.multiplier);
        tracing::trace!(expression = %self, rolls = ?outcome.rolls, sum = outcome.sum, "rolled dice");
        outcome
    }

    fn roll_value(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(1..=self.sides)
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rolls = self
            .rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(" + ");

        let modifier = match self.modifier {
            0 => String::new(),
            m if m > 0 => format!(" (+ {m})"),
            m => format!(" (- {})", m.unsigned_abs()),
        };

        if self.multiplier != 1 {
            write!(f, "({rolls}{modifier}) * {} = {}", self.multiplier, self.sum)
        } else {
            write!(f, "{rolls}{modifier} = {}", self.sum)
        }
    }
}
