//! Heatmap building: leveled days → calendar-aligned grid
//!
//! Both layouts pad with explicit [`Cell::Empty`] markers so real days
//! always land in the column of their actual weekday. Building is a pure
//! function of its inputs: same days, same layout, same grid.

use chrono::{Datelike, NaiveDate, Weekday};
use commitgrid_domain::{Cell, DailyContribution, Grid, HeatmapLayout, MonthCard, WeeklyGrid};

/// Arrange a contribution window into the requested layout.
pub fn build(days: &[DailyContribution], layout: HeatmapLayout, week_start: Weekday) -> Grid {
    match layout {
        HeatmapLayout::WeeklyGrid => Grid::Weekly(weekly_grid(days, week_start)),
        HeatmapLayout::MonthlyCards => Grid::Monthly(monthly_cards(days, week_start)),
    }
}

/// Column index of a date within a week starting on `week_start`.
fn column_of(date: NaiveDate, week_start: Weekday) -> usize {
    let offset =
        (date.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
    offset as usize
}

fn weekly_grid(days: &[DailyContribution], week_start: Weekday) -> WeeklyGrid {
    let Some(first) = days.first() else {
        return WeeklyGrid { weeks: Vec::new() };
    };

    let mut cells: Vec<Cell> = Vec::with_capacity(days.len() + 13);
    cells.resize(column_of(first.date, week_start), Cell::Empty);
    cells.extend(days.iter().cloned().map(Cell::Day));
    // Close the last week so every row holds seven cells.
    let remainder = cells.len() % 7;
    if remainder != 0 {
        cells.resize(cells.len() + 7 - remainder, Cell::Empty);
    }

    let weeks = cells.chunks(7).map(<[Cell]>::to_vec).collect();
    WeeklyGrid { weeks }
}

fn monthly_cards(days: &[DailyContribution], week_start: Weekday) -> Vec<MonthCard> {
    let mut cards: Vec<MonthCard> = Vec::new();

    for day in days {
        let year = day.date.year();
        let month = day.date.month();
        let start_new_card =
            cards.last().map_or(true, |card| card.year != year || card.month != month);

        if start_new_card {
            let mut cells = vec![Cell::Empty; column_of(day.date, week_start)];
            cells.push(Cell::Day(day.clone()));
            cards.push(MonthCard { year, month, cells });
        } else if let Some(card) = cards.last_mut() {
            card.cells.push(Cell::Day(day.clone()));
        }
    }

    cards
}
