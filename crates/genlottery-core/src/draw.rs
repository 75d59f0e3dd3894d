//! Number generation: sampling without replacement per a game's rule.

use std::fmt;

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::rules::{LotteryRule, RULE_START};

/// One generated combination of numbers for a single play.
///
/// Numbers are stored as two-digit zero-padded strings, sorted ascending
/// (lexicographic order equals numeric order at fixed width). `secondary`
/// is `None` for games without a secondary draw — the distinction survives
/// a trip through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawLine {
    /// The primary draw, `main_qty` unique numbers.
    #[serde(rename = "x1")]
    pub primary: Vec<String>,

    /// The secondary draw, when the game has one.
    #[serde(rename = "x2")]
    pub secondary: Option<Vec<String>>,
}

impl fmt::Display for DrawLine {
    /// Renders as `01, 05, 23, 40, 49 - 03, 11` (secondary after the dash).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary.join(", "))?;
        if let Some(ref extra) = self.secondary {
            write!(f, " - {}", extra.join(", "))?;
        }
        Ok(())
    }
}

/// Draw one line using the thread-local RNG.
pub fn draw(rule: &LotteryRule) -> DrawLine {
    draw_with(rule, &mut rand::thread_rng())
}

/// Draw one line from the given RNG. Pure apart from consuming entropy.
pub fn draw_with<R: Rng + ?Sized>(rule: &LotteryRule, rng: &mut R) -> DrawLine {
    debug_assert!(rule.is_satisfiable(), "rule table invariant violated");

    DrawLine {
        primary: pick(rng, rule.main_max, rule.main_qty),
        secondary: rule
            .extra
            .filter(|e| e.qty > 0)
            .map(|e| pick(rng, e.max, e.qty)),
    }
}

/// Draw `line_count` independent lines using the thread-local RNG.
pub fn draw_many(rule: &LotteryRule, line_count: usize) -> Vec<DrawLine> {
    let mut rng = rand::thread_rng();
    (0..line_count).map(|_| draw_with(rule, &mut rng)).collect()
}

/// Sample `qty` distinct integers uniformly from `[RULE_START, max)`,
/// formatted zero-padded and sorted.
fn pick<R: Rng + ?Sized>(rng: &mut R, max: u8, qty: usize) -> Vec<String> {
    let span = usize::from(max - RULE_START);
    let mut picked: Vec<String> = index::sample(rng, span, qty)
        .into_iter()
        .map(|offset| format!("{:02}", offset + usize::from(RULE_START)))
        .collect();
    picked.sort_unstable();
    picked
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    use crate::rules::LotteryType;

    use super::*;

    fn assert_valid_set(values: &[String], qty: usize, max: u8) {
        assert_eq!(values.len(), qty);

        // Unique and sorted ascending
        let mut deduped = values.to_vec();
        deduped.dedup();
        assert_eq!(deduped.len(), qty, "duplicates in {values:?}");
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, values, "not sorted: {values:?}");

        // Two-digit zero-padded strings within [RULE_START, max)
        for v in values {
            assert_eq!(v.len(), 2, "not two digits: {v}");
            let n: u8 = v.parse().expect("numeric");
            assert!(n >= RULE_START && n < max, "{n} outside [{RULE_START}, {max})");
        }
    }

    #[test]
    fn every_game_draws_a_valid_line() {
        let mut rng = StdRng::seed_from_u64(7);
        for ty in LotteryType::iter() {
            let rule = ty.rule();
            for _ in 0..50 {
                let line = draw_with(&rule, &mut rng);
                assert_valid_set(&line.primary, rule.main_qty, rule.main_max);
                match rule.extra {
                    Some(extra) => {
                        let secondary = line.secondary.as_deref().expect("secondary expected");
                        assert_valid_set(secondary, extra.qty, extra.max);
                    }
                    None => assert_eq!(line.secondary, None),
                }
            }
        }
    }

    #[test]
    fn euro_line_has_five_main_and_two_lucky_stars() {
        let mut rng = StdRng::seed_from_u64(42);
        let line = draw_with(&LotteryType::Euro.rule(), &mut rng);
        assert_valid_set(&line.primary, 5, 51);
        assert_valid_set(line.secondary.as_deref().expect("lucky stars"), 2, 13);
    }

    #[test]
    fn lotto_line_has_empty_secondary() {
        let mut rng = StdRng::seed_from_u64(42);
        let line = draw_with(&LotteryType::Lotto.rule(), &mut rng);
        assert_valid_set(&line.primary, 6, 60);
        assert_eq!(line.secondary, None);
    }

    #[test]
    fn draw_many_produces_the_requested_count() {
        let lines = draw_many(&LotteryType::Thunder.rule(), 10);
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn display_joins_primary_and_secondary() {
        let line = DrawLine {
            primary: vec!["01".into(), "09".into(), "23".into()],
            secondary: Some(vec!["04".into()]),
        };
        assert_eq!(line.to_string(), "01, 09, 23 - 04");

        let plain = DrawLine {
            primary: vec!["07".into(), "13".into()],
            secondary: None,
        };
        assert_eq!(plain.to_string(), "07, 13");
    }
}
