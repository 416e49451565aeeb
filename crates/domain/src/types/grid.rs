//! Heatmap grid value objects
//!
//! Grids are plain data: no iteration state, deterministic to rebuild from
//! the same day list. Placeholder cells are an explicit variant so the
//! presenter can never confuse "no such day" with "a day without activity"
//! when wiring tooltips.

use serde::{Deserialize, Serialize};

use super::contribution::DailyContribution;

/// Requested heatmap arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatmapLayout {
    /// Weeks × weekdays calendar, GitHub style
    WeeklyGrid,
    /// One card per month with a day-of-month grid
    MonthlyCards,
}

/// One grid slot: either a real day or leading/trailing padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Alignment padding; never a real zero-activity day
    Empty,
    Day(DailyContribution),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The contained day, if this is a real cell.
    pub fn day(&self) -> Option<&DailyContribution> {
        match self {
            Self::Empty => None,
            Self::Day(day) => Some(day),
        }
    }
}

/// Weeks × weekdays arrangement; every week holds exactly seven cells in
/// weekday order starting at the configured first day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGrid {
    pub weeks: Vec<Vec<Cell>>,
}

impl WeeklyGrid {
    /// Total number of cells, padding included.
    pub fn cell_count(&self) -> usize {
        self.weeks.iter().map(Vec::len).sum()
    }
}

/// One calendar month of cells with leading alignment padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCard {
    pub year: i32,
    /// 1-based calendar month
    pub month: u32,
    pub cells: Vec<Cell>,
}

/// A built heatmap in one of the supported layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grid {
    Weekly(WeeklyGrid),
    Monthly(Vec<MonthCard>),
}
