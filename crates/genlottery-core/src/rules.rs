//! Static rule table for the supported lottery games.
//!
//! Pure data: each [`LotteryType`] maps to one immutable [`LotteryRule`].
//! Because the type is a closed enum, an unknown game name can only occur
//! while parsing user input — [`str::parse`] rejects it there.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// The smallest number any game draws from. Draw ranges are
/// `[RULE_START, max)`, matching the printed tickets (no zero ball).
pub const RULE_START: u8 = 1;

/// Minimum number of lines a single request may generate.
pub const MIN_LINES: usize = 1;

/// Maximum number of lines a single request may generate.
/// An arbitrary but reasonable limit.
pub const MAX_LINES: usize = 100;

/// Lines generated when the user does not ask for a specific count.
pub const DEFAULT_LINES: usize = 2;

/// The fixed set of supported lottery games.
///
/// Serialized (store files, CLI, display) as the uppercase game name,
/// e.g. `EURO`. Parsing is case-insensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum LotteryType {
    Lotto,
    #[default]
    Euro,
    Set4Life,
    LottoHot,
    EuroHot,
    Thunder,
}

/// The secondary draw of a game, when it has one (e.g. EuroMillions
/// Lucky Stars, Thunderball).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraRule {
    /// One past the highest drawable number.
    pub max: u8,
    /// How many numbers the secondary draw picks.
    pub qty: usize,
}

/// The drawing rule for one game: how many numbers to pick from which
/// range, for the primary and optional secondary draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotteryRule {
    /// One past the highest drawable primary number.
    pub main_max: u8,
    /// How many primary numbers a line picks.
    pub main_qty: usize,
    /// Secondary draw, absent for single-pool games.
    pub extra: Option<ExtraRule>,
}

impl LotteryRule {
    /// Whether the rule can be satisfied: each draw must fit in its range.
    pub fn is_satisfiable(&self) -> bool {
        let main_ok = self.main_qty <= usize::from(self.main_max - RULE_START);
        let extra_ok = self
            .extra
            .is_none_or(|e| e.qty <= usize::from(e.max - RULE_START));
        main_ok && extra_ok
    }
}

impl LotteryType {
    /// Look up the drawing rule for this game. No side effects.
    pub const fn rule(self) -> LotteryRule {
        match self {
            Self::Lotto => LotteryRule {
                main_max: 60,
                main_qty: 6,
                extra: None,
            },
            Self::Euro => LotteryRule {
                main_max: 51,
                main_qty: 5,
                extra: Some(ExtraRule { max: 13, qty: 2 }),
            },
            Self::Set4Life => LotteryRule {
                main_max: 48,
                main_qty: 5,
                extra: Some(ExtraRule { max: 11, qty: 1 }),
            },
            Self::LottoHot => LotteryRule {
                main_max: 60,
                main_qty: 5,
                extra: None,
            },
            Self::EuroHot => LotteryRule {
                main_max: 51,
                main_qty: 5,
                extra: None,
            },
            Self::Thunder => LotteryRule {
                main_max: 40,
                main_qty: 5,
                extra: Some(ExtraRule { max: 15, qty: 1 }),
            },
        }
    }

    /// The uppercase game name, used for store filenames and display.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
