//! Recurring irrigation schedules.

use crate::error::{FarmError, Result};
use chrono::{Datelike, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const TIME_FORMAT: &str = "%H:%M";

/// Set of weekdays a schedule runs on, Sunday = 0 through Saturday = 6.
///
/// Stored as a bitmask so every member is unique and in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct DaysOfWeek(u8);

impl DaysOfWeek {
    /// Build from a list of weekdays, rejecting values above 6 and repeats.
    pub fn from_days(days: &[u8]) -> Result<Self> {
        let mut mask = 0u8;
        for &day in days {
            if day > 6 {
                return Err(FarmError::InvalidWeekday(day));
            }
            let bit = 1 << day;
            if mask & bit != 0 {
                return Err(FarmError::DuplicateWeekday(day));
            }
            mask |= bit;
        }
        Ok(DaysOfWeek(mask))
    }

    pub fn contains(&self, weekday: u32) -> bool {
        weekday < 7 && self.0 & (1 << weekday) != 0
    }

    /// Member weekdays in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..7u8).filter(move |day| self.0 & (1 << day) != 0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<Vec<u8>> for DaysOfWeek {
    type Error = FarmError;

    fn try_from(days: Vec<u8>) -> Result<Self> {
        DaysOfWeek::from_days(&days)
    }
}

impl From<DaysOfWeek> for Vec<u8> {
    fn from(days: DaysOfWeek) -> Self {
        days.iter().collect()
    }
}

/// Semicolon separated, e.g. "1;3;5". Used for the fixture and database column.
impl fmt::Display for DaysOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|d| d.to_string()).collect();
        f.write_str(&parts.join(";"))
    }
}

impl FromStr for DaysOfWeek {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        let mut days = Vec::new();
        for part in s.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let day = part.parse::<u8>().map_err(|_| FarmError::UnknownLabel {
                field: "weekday",
                value: part.to_string(),
            })?;
            days.push(day);
        }
        DaysOfWeek::from_days(&days)
    }
}

/// Colour marker used on calendar cells and in the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
}

impl ColorTag {
    pub const ALL: [ColorTag; 5] = [
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Purple,
        ColorTag::Orange,
        ColorTag::Red,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Purple => "purple",
            ColorTag::Orange => "orange",
            ColorTag::Red => "red",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            ColorTag::Blue => "#3b82f6",
            ColorTag::Green => "#22c55e",
            ColorTag::Purple => "#a855f7",
            ColorTag::Orange => "#f97316",
            ColorTag::Red => "#ef4444",
        }
    }
}

impl FromStr for ColorTag {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        ColorTag::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| FarmError::UnknownLabel {
                field: "color",
                value: s.to_string(),
            })
    }
}

/// A recurring irrigation directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    pub title: String,
    /// Area display name, e.g. "Area 1"
    pub area: String,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub days: DaysOfWeek,
    pub active: bool,
    pub color: ColorTag,
}

impl ScheduleEntry {
    /// Start time as "HH:MM".
    pub fn time_label(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    /// True when this schedule is active and runs on `weekday`.
    pub fn runs_on(&self, weekday: u32) -> bool {
        self.active && self.days.contains(weekday)
    }
}

/// Parse "HH:MM" into a time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| FarmError::InvalidTime(s.to_string()))
}

/// Unvalidated input from the add-schedule form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScheduleDraft {
    pub title: String,
    pub area: String,
    pub time: String,
    pub duration_minutes: u32,
    pub days: Vec<u8>,
    pub color: ColorTag,
}

impl ScheduleDraft {
    /// Validate the draft into an active schedule with the given id.
    pub fn into_entry(self, id: String) -> Result<ScheduleEntry> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(FarmError::EmptyTitle);
        }
        if self.duration_minutes == 0 {
            return Err(FarmError::InvalidDuration(self.duration_minutes));
        }
        Ok(ScheduleEntry {
            id,
            title,
            area: self.area.trim().to_string(),
            time: parse_time(&self.time)?,
            duration_minutes: self.duration_minutes,
            days: DaysOfWeek::from_days(&self.days)?,
            active: true,
            color: self.color,
        })
    }
}

/// Next free numeric id: one past the largest numeric id in use.
pub fn next_id(schedules: &[ScheduleEntry]) -> String {
    let max = schedules
        .iter()
        .filter_map(|s| s.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

pub fn active_count(schedules: &[ScheduleEntry]) -> usize {
    schedules.iter().filter(|s| s.active).count()
}

/// Number of active schedules that run on `weekday`.
pub fn tasks_on(schedules: &[ScheduleEntry], weekday: u32) -> usize {
    schedules.iter().filter(|s| s.runs_on(weekday)).count()
}

/// Sum of durations across active schedules, in minutes per cycle.
pub fn total_active_minutes(schedules: &[ScheduleEntry]) -> u32 {
    schedules
        .iter()
        .filter(|s| s.active)
        .map(|s| s.duration_minutes)
        .sum()
}

/// An upcoming run of a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence<'a> {
    pub schedule: &'a ScheduleEntry,
    pub at: NaiveDateTime,
}

impl Occurrence<'_> {
    /// "Today", "Tomorrow", or the weekday name relative to `now`.
    pub fn day_label(&self, now: NaiveDateTime) -> String {
        match (self.at.date() - now.date()).num_days() {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            _ => self.at.format("%A").to_string(),
        }
    }
}

/// Earliest run of any active schedule strictly after `now`.
///
/// Looks one full week ahead so a schedule that only runs on today's weekday,
/// earlier than `now`, is found next week. Ties keep source order.
pub fn next_occurrence(schedules: &[ScheduleEntry], now: NaiveDateTime) -> Option<Occurrence<'_>> {
    let mut best: Option<Occurrence<'_>> = None;
    for offset in 0..=7 {
        let date = now.date() + TimeDelta::days(offset);
        let weekday = date.weekday().num_days_from_sunday();
        for schedule in schedules.iter().filter(|s| s.runs_on(weekday)) {
            let at = date.and_time(schedule.time);
            if at <= now {
                continue;
            }
            if best.as_ref().map_or(true, |b| at < b.at) {
                best = Some(Occurrence { schedule, at });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: &str, time: &str, days: &[u8], active: bool) -> ScheduleEntry {
        ScheduleEntry {
            id: id.to_string(),
            title: format!("Schedule {id}"),
            area: format!("Area {id}"),
            time: parse_time(time).unwrap(),
            duration_minutes: 30,
            days: DaysOfWeek::from_days(days).unwrap(),
            active,
            color: ColorTag::Blue,
        }
    }

    #[test]
    fn test_days_of_week_rejects_out_of_range() {
        assert_eq!(
            DaysOfWeek::from_days(&[1, 7]),
            Err(FarmError::InvalidWeekday(7))
        );
    }

    #[test]
    fn test_days_of_week_rejects_duplicates() {
        assert_eq!(
            DaysOfWeek::from_days(&[1, 3, 1]),
            Err(FarmError::DuplicateWeekday(1))
        );
    }

    #[test]
    fn test_days_of_week_sorted_and_counted() {
        let days = DaysOfWeek::from_days(&[5, 1, 3]).unwrap();
        assert_eq!(days.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(days.len(), 3);
        assert!(days.contains(3));
        assert!(!days.contains(0));
        assert!(!days.contains(9));
        assert_eq!(days.to_string(), "1;3;5");
        assert_eq!("1;3;5".parse::<DaysOfWeek>().unwrap(), days);
    }

    #[test]
    fn test_days_of_week_serde_as_list() {
        let days = DaysOfWeek::from_days(&[0, 6]).unwrap();
        assert_eq!(serde_json::to_string(&days).unwrap(), "[0,6]");
        assert!(serde_json::from_str::<DaysOfWeek>("[2,2]").is_err());
    }

    #[test]
    fn test_draft_validation() {
        let draft = ScheduleDraft {
            title: "  Night soak ".to_string(),
            area: "Area 4".to_string(),
            time: "21:30".to_string(),
            duration_minutes: 15,
            days: vec![0, 6],
            color: ColorTag::Orange,
        };
        let entry = draft.clone().into_entry("4".to_string()).unwrap();
        assert_eq!(entry.title, "Night soak");
        assert_eq!(entry.time_label(), "21:30");
        assert!(entry.active);

        let blank = ScheduleDraft { title: " ".into(), ..draft.clone() };
        assert_eq!(blank.into_entry("5".into()), Err(FarmError::EmptyTitle));

        let bad_time = ScheduleDraft { time: "25:00".into(), ..draft.clone() };
        assert!(matches!(
            bad_time.into_entry("5".into()),
            Err(FarmError::InvalidTime(_))
        ));

        let zero = ScheduleDraft { duration_minutes: 0, ..draft };
        assert_eq!(zero.into_entry("5".into()), Err(FarmError::InvalidDuration(0)));
    }

    #[test]
    fn test_aggregates() {
        let schedules = vec![
            entry("1", "08:00", &[1, 3, 5], true),
            entry("2", "18:00", &[0, 2, 4, 6], true),
            entry("3", "12:00", &[1, 2, 3, 4, 5], false),
        ];
        assert_eq!(active_count(&schedules), 2);
        assert_eq!(tasks_on(&schedules, 1), 1);
        assert_eq!(tasks_on(&schedules, 2), 1);
        assert_eq!(total_active_minutes(&schedules), 60);
        assert_eq!(next_id(&schedules), "4");
        assert_eq!(next_id(&[]), "1");
    }

    #[test]
    fn test_next_occurrence_later_today() {
        let schedules = vec![
            entry("1", "08:00", &[1, 3, 5], true),
            entry("2", "18:00", &[0, 2, 4, 6], true),
        ];
        // Monday 2025-01-06 07:00
        let now = NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        let next = next_occurrence(&schedules, now).unwrap();
        assert_eq!(next.schedule.id, "1");
        assert_eq!(next.day_label(now), "Today");
    }

    #[test]
    fn test_next_occurrence_skips_inactive_and_past() {
        let schedules = vec![
            entry("1", "08:00", &[1], true),
            entry("3", "09:00", &[1, 2], false),
        ];
        // Monday 2025-01-06 09:00, Monday run already happened
        let now = NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let next = next_occurrence(&schedules, now).unwrap();
        assert_eq!(next.schedule.id, "1");
        assert_eq!(next.at.date(), NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());
        assert_eq!(next.day_label(now), "Monday");
    }

    #[test]
    fn test_next_occurrence_none_when_all_inactive() {
        let schedules = vec![entry("1", "08:00", &[1], false)];
        let now = NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert!(next_occurrence(&schedules, now).is_none());
    }
}
