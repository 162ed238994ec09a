//! Month grid generation for the irrigation schedule calendar.
//!
//! The grid always holds six full weeks (42 cells) starting on a Sunday. Cells
//! before the 1st are the previous month's trailing days, cells after the last
//! day are the next month's leading days. Only current-month cells carry
//! schedules.

use crate::date_range::DateRange;
use crate::error::{FarmError, Result};
use crate::schedule::ScheduleEntry;
use chrono::{Datelike, NaiveDate, TimeDelta};
use farm_utils::dates;

/// Number of cells in a generated month grid (6 rows of 7 days).
pub const GRID_CELLS: usize = 42;

/// Number of schedule markers drawn in a cell before collapsing into "+N".
pub const VISIBLE_MARKERS: usize = 2;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 1-31
    pub day: u32,
    /// 0-based month the cell belongs to, already wrapped into 0-11
    pub month: u32,
    pub year: i32,
    pub in_current_month: bool,
    /// Active schedules running on this weekday, in source order
    pub schedules: Vec<ScheduleEntry>,
}

impl CalendarDay {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }

    /// Weekday of the cell, Sunday = 0.
    pub fn weekday(&self) -> Option<u32> {
        self.date().map(|d| d.weekday().num_days_from_sunday())
    }

    /// Highlight only applies to cells of the displayed month.
    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.in_current_month && self.date() == Some(today)
    }

    /// Schedules drawn as markers, capped at [`VISIBLE_MARKERS`].
    pub fn visible_schedules(&self) -> &[ScheduleEntry] {
        &self.schedules[..self.schedules.len().min(VISIBLE_MARKERS)]
    }

    /// Count of schedules hidden behind the "+N" badge.
    pub fn overflow(&self) -> usize {
        self.schedules.len().saturating_sub(VISIBLE_MARKERS)
    }
}

/// Build the 42-cell grid for a 0-based month.
///
/// The schedule slice is only read; calling twice with the same inputs yields
/// equal grids.
pub fn generate_month(month0: u32, year: i32, schedules: &[ScheduleEntry]) -> Result<Vec<CalendarDay>> {
    if month0 > 11 {
        return Err(FarmError::InvalidMonth(month0));
    }
    let out_of_range = || FarmError::YearOutOfRange(year);
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or_else(out_of_range)?;
    let leading = first.weekday().num_days_from_sunday();
    let grid = first
        .checked_sub_signed(TimeDelta::days(i64::from(leading)))
        .and_then(|start| DateRange::starting_at(start, GRID_CELLS as u32))
        .ok_or_else(out_of_range)?;

    let cells: Vec<CalendarDay> = grid
        .map(|date| {
            let in_current_month = date.month0() == month0 && date.year() == year;
            let schedules = if in_current_month {
                let weekday = date.weekday().num_days_from_sunday();
                schedules
                    .iter()
                    .filter(|s| s.runs_on(weekday))
                    .cloned()
                    .collect()
            } else {
                Vec::new()
            };
            CalendarDay {
                day: date.day(),
                month: date.month0(),
                year: date.year(),
                in_current_month,
                schedules,
            }
        })
        .collect();

    log::debug!(
        "calendar: generated {} {} with {} leading cells",
        dates::month_name(month0),
        year,
        leading
    );
    Ok(cells)
}

/// Month/year pair driving the calendar header and its prev/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub month0: u32,
    pub year: i32,
}

impl MonthCursor {
    pub fn new(month0: u32, year: i32) -> Result<Self> {
        if month0 > 11 {
            return Err(FarmError::InvalidMonth(month0));
        }
        Ok(Self { month0, year })
    }

    /// Cursor positioned on the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month0: date.month0(),
            year: date.year(),
        }
    }

    pub fn previous(self) -> Self {
        let (month0, year) = dates::wrap_month(self.month0 as i32 - 1, self.year);
        Self { month0, year }
    }

    pub fn next(self) -> Self {
        let (month0, year) = dates::wrap_month(self.month0 as i32 + 1, self.year);
        Self { month0, year }
    }

    /// Header text such as "January 2025".
    pub fn title(&self) -> String {
        format!("{} {}", dates::month_name(self.month0), self.year)
    }

    pub fn grid(&self, schedules: &[ScheduleEntry]) -> Result<Vec<CalendarDay>> {
        generate_month(self.month0, self.year, schedules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{parse_time, ColorTag, DaysOfWeek};

    fn schedule(id: &str, days: &[u8], active: bool) -> ScheduleEntry {
        ScheduleEntry {
            id: id.to_string(),
            title: format!("Schedule {id}"),
            area: format!("Area {id}"),
            time: parse_time("08:00").unwrap(),
            duration_minutes: 30,
            days: DaysOfWeek::from_days(days).unwrap(),
            active,
            color: ColorTag::Green,
        }
    }

    fn sample_schedules() -> Vec<ScheduleEntry> {
        vec![
            schedule("1", &[1, 3, 5], true),
            schedule("2", &[0, 2, 4, 6], true),
            schedule("3", &[1, 2, 3, 4, 5], false),
        ]
    }

    #[test]
    fn test_january_2025_grid() {
        let grid = generate_month(0, 2025, &sample_schedules()).unwrap();
        assert_eq!(grid.len(), GRID_CELLS);

        // Jan 1 2025 is a Wednesday: Dec 29, 30, 31 lead the grid
        let first = &grid[0];
        assert_eq!((first.day, first.month, first.year), (29, 11, 2024));
        assert!(!first.in_current_month);
        assert!(first.schedules.is_empty());
        assert_eq!(first.weekday(), Some(0));

        let jan1 = &grid[3];
        assert_eq!((jan1.day, jan1.month, jan1.year), (1, 0, 2025));
        assert!(jan1.in_current_month);
        // Wednesday: only schedule 1 is active on weekday 3
        let ids: Vec<&str> = jan1.schedules.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);

        let last = &grid[41];
        assert_eq!((last.day, last.month, last.year), (8, 1, 2025));
    }

    #[test]
    fn test_every_month_has_42_cells_starting_on_sunday() {
        let schedules = sample_schedules();
        for year in [1999, 2000, 2023, 2024, 2025, 2100] {
            for month0 in 0..12 {
                let grid = generate_month(month0, year, &schedules).unwrap();
                assert_eq!(grid.len(), GRID_CELLS, "{year}-{month0}");
                assert_eq!(grid[0].weekday(), Some(0));
                assert_eq!(grid[41].weekday(), Some(6));

                let first = &grid[0];
                let previous = MonthCursor { month0, year }.previous();
                assert!(
                    first.in_current_month
                        || (first.month == previous.month0 && first.year == previous.year)
                );

                let current: Vec<u32> = grid.iter().filter(|c| c.in_current_month).map(|c| c.day).collect();
                assert_eq!(current.first(), Some(&1));
                assert_eq!(current.last().copied(), Some(current.len() as u32));
                let next = MonthCursor { month0, year }.next();
                let after_last = NaiveDate::from_ymd_opt(next.year, next.month0 + 1, 1).unwrap();
                assert_eq!(after_last.pred_opt().unwrap().day(), current.len() as u32);
            }
        }
    }

    #[test]
    fn test_attached_schedules_are_active_and_match_weekday() {
        let schedules = sample_schedules();
        let grid = generate_month(5, 2025, &schedules).unwrap();
        for cell in &grid {
            let weekday = cell.weekday().unwrap();
            for s in &cell.schedules {
                assert!(s.active);
                assert!(s.days.contains(weekday));
            }
            if cell.in_current_month {
                let expected = schedules.iter().filter(|s| s.runs_on(weekday)).count();
                assert_eq!(cell.schedules.len(), expected);
            }
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let schedules = sample_schedules();
        let before = schedules.clone();
        let a = generate_month(1, 2024, &schedules).unwrap();
        let b = generate_month(1, 2024, &schedules).unwrap();
        assert_eq!(a, b);
        assert_eq!(schedules, before);
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_cells() {
        // Jun 1 2025 is a Sunday
        let grid = generate_month(5, 2025, &[]).unwrap();
        assert_eq!((grid[0].day, grid[0].month), (1, 5));
        assert!(grid[0].in_current_month);
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert_eq!(generate_month(12, 2025, &[]), Err(FarmError::InvalidMonth(12)));
        assert!(MonthCursor::new(12, 2025).is_err());
    }

    #[test]
    fn test_grid_past_supported_dates_is_an_error() {
        let min_year = NaiveDate::MIN.year();
        let max_year = NaiveDate::MAX.year();
        assert_eq!(generate_month(0, min_year, &[]), Err(FarmError::YearOutOfRange(min_year)));
        assert_eq!(generate_month(11, max_year, &[]), Err(FarmError::YearOutOfRange(max_year)));
        assert_eq!(
            generate_month(0, max_year + 1, &[]),
            Err(FarmError::YearOutOfRange(max_year + 1))
        );
        assert_eq!(generate_month(5, max_year, &[]).map(|g| g.len()), Ok(GRID_CELLS));
    }

    #[test]
    fn test_cursor_wraps_year() {
        let jan = MonthCursor::new(0, 2025).unwrap();
        assert_eq!(jan.previous(), MonthCursor { month0: 11, year: 2024 });
        let dec = MonthCursor::new(11, 2025).unwrap();
        assert_eq!(dec.next(), MonthCursor { month0: 0, year: 2026 });
        assert_eq!(jan.title(), "January 2025");
    }

    #[test]
    fn test_today_highlight_and_overflow() {
        let schedules = vec![
            schedule("1", &[3], true),
            schedule("2", &[3], true),
            schedule("3", &[3], true),
        ];
        let grid = generate_month(0, 2025, &schedules).unwrap();
        let jan1 = &grid[3];
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(jan1.is_today(today));
        assert!(!grid[0].is_today(NaiveDate::from_ymd_opt(2024, 12, 29).unwrap()));
        assert_eq!(jan1.visible_schedules().len(), 2);
        assert_eq!(jan1.overflow(), 1);
    }
}
