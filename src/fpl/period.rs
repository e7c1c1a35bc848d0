//! Forfeit periods: the nine gameweek windows of a season and their forfeits.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cli::types::Gameweek;


/// Width of every period except the last.
pub const PERIOD_LENGTH: u16 = 4;

/// Number of forfeit periods in a season.
pub const PERIOD_COUNT: usize = 9;

/// An inclusive gameweek window `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub start: u16,
    pub end: u16,
}

impl Period {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn is_first(&self) -> bool {
        self.start == 1
    }

    /// Label used by the forfeit table, e.g. `"5-8"`.
    pub fn weeks_label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// A forfeit and the period it is handed out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Forfeit {
    pub weeks: &'static str,
    pub description: &'static str,
}

/// The season's periods, in order.
pub const PERIODS: [Period; PERIOD_COUNT] = [
    Period::new(1, 4),
    Period::new(5, 8),
    Period::new(9, 12),
    Period::new(13, 16),
    Period::new(17, 20),
    Period::new(21, 24),
    Period::new(25, 28),
    Period::new(29, 32),
    Period::new(33, 38),
];

/// Forfeits, index-aligned with [`PERIODS`].
pub const FORFEITS: [Forfeit; PERIOD_COUNT] = [
    Forfeit {
        weeks: "1-4",
        description: "Stare at wall for 30 minutes without music",
    },
    Forfeit {
        weeks: "5-8",
        description: "Ghost Chilli, or teaspoon of Carolina Reaper sauce",
    },
    Forfeit {
        weeks: "9-12",
        description: "Presentation on why you lost, 5 minute PowerPoint live with us",
    },
    Forfeit {
        weeks: "13-16",
        description: "Ball to balls (lie down, spread legs, someone drops it)",
    },
    Forfeit {
        weeks: "17-20",
        description: "Ice bucket Outside (no towel for 1 min)",
    },
    Forfeit {
        weeks: "21-24",
        description: "Chug 2l of milk in 2 min (if fail then add 20 GBP to prize pool)",
    },
    Forfeit {
        weeks: "25-28",
        description: "Makeup Tutorial (3 min vid, solo, serious and real makeup)",
    },
    Forfeit {
        weeks: "29-32",
        description: "Raw egg (1 egg in a glass to be swallowed, if fail then 20 GBP)",
    },
    Forfeit {
        weeks: "33-38",
        description: "Depressing Meal (Others pick from a list of food)",
    },
];

/// Period enclosing `gameweek`.
///
/// Total over all inputs: anything up to 4 (including 0) falls in the first
/// period and anything past 32 falls in the last, so out-of-season values
/// clamp to the nearest end of the season.
pub fn current_period(gameweek: Gameweek) -> Period {
    let gw = gameweek.as_u16();
    PERIODS
        .iter()
        .copied()
        .find(|p| gw <= p.end)
        .unwrap_or(PERIODS[PERIOD_COUNT - 1])
}

/// The period before `period`, or `None` in the first period.
pub fn previous_period(period: &Period) -> Option<Period> {
    if period.is_first() {
        return None;
    }
    let start = period.start.saturating_sub(PERIOD_LENGTH).max(1);
    Some(Period::new(start, period.start - 1))
}

/// Every period that finished before `period` started, oldest first.
pub fn completed_periods(period: &Period) -> impl Iterator<Item = Period> + '_ {
    PERIODS.iter().copied().filter(move |p| p.start < period.start)
}

/// Forfeit whose period starts at `start`, if there is one.
pub fn lookup_forfeit(start: u16) -> Option<&'static Forfeit> {
    let offset = start.checked_sub(1)?;
    if offset % PERIOD_LENGTH != 0 {
        return None;
    }
    FORFEITS.get(usize::from(offset / PERIOD_LENGTH))
}

/// Forfeit for `period`.
///
/// Periods built by [`current_period`] always resolve. An unknown start falls
/// back to the first forfeit.
pub fn forfeit_for_period(period: &Period) -> &'static Forfeit {
    match lookup_forfeit(period.start) {
        Some(forfeit) => forfeit,
        None => {
            warn!(start = period.start, "no forfeit for period start, using first forfeit");
            &FORFEITS[0]
        }
    }
}
