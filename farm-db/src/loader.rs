//! CSV loading for populating the in-memory database.
//!
//! Every fixture has a header row. Formats:
//!
//! - **Area readings**: `KIND,AREA_ID,NAME,VALUE,LAST_UPDATED`
//! - **Series**: `KIND,SEQ,TIME,VALUE`
//! - **Schedules**: `ID,TITLE,AREA,TIME,DURATION,DAYS,ACTIVE,COLOR` (days as `1;3;5`)
//! - **Users**: `ID,EMAIL,FIRST_NAME,LAST_NAME,ROLE,ACTIVE,SELECTED,LAST_ACTIVE,CREATED_AT`
//! - **Irrigation areas**: `AREA_ID,NAME,FLOW_RATE,TOTAL_USED,LAST_IRRIGATION`
//! - **Monthly climate**: `MONTH,TEMPERATURE,HUMIDITY,RAINFALL,SOIL_MOISTURE,WATER_USAGE,IRRIGATION_HOURS`
//!
//! Rows are validated through the `farm-core` parsers before insert, so a bad
//! weekday list or unknown role fails the load instead of surfacing later.

use crate::Database;
use anyhow::Context;
use farm_core::area::SensorKind;
use farm_core::schedule::{parse_time, ColorTag, DaysOfWeek};
use farm_core::user::Role;
use rusqlite::params;

pub(crate) const AREAS_CSV: &str = include_str!("../../fixtures/areas.csv");
pub(crate) const SERIES_CSV: &str = include_str!("../../fixtures/series.csv");
pub(crate) const SCHEDULES_CSV: &str = include_str!("../../fixtures/schedules.csv");
pub(crate) const USERS_CSV: &str = include_str!("../../fixtures/users.csv");
pub(crate) const IRRIGATION_AREAS_CSV: &str = include_str!("../../fixtures/irrigation_areas.csv");
pub(crate) const MONTHLY_CLIMATE_CSV: &str = include_str!("../../fixtures/monthly_climate.csv");

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes())
}

fn parse_flag(s: &str) -> anyhow::Result<bool> {
    match s {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => anyhow::bail!("invalid boolean '{}'", other),
    }
}

fn optional(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl Database {
    /// Load every embedded fixture.
    pub fn load_fixtures(&self) -> anyhow::Result<()> {
        self.load_area_readings(AREAS_CSV)?;
        self.load_series(SERIES_CSV)?;
        self.load_schedules(SCHEDULES_CSV)?;
        self.load_users(USERS_CSV)?;
        self.load_irrigation_areas(IRRIGATION_AREAS_CSV)?;
        self.load_monthly_climate(MONTHLY_CLIMATE_CSV)?;
        Ok(())
    }

    /// Load latest per-area sensor values.
    ///
    /// # Example CSV
    /// ```text
    /// KIND,AREA_ID,NAME,VALUE,LAST_UPDATED
    /// soil-moisture,area1,Area 1,70,2 mins ago
    /// ```
    pub fn load_area_readings(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let kind: SensorKind = r.get(0).unwrap_or("").parse()?;
            let area_id = r.get(1).unwrap_or("");
            let name = r.get(2).unwrap_or("");
            let value: f64 = r.get(3).unwrap_or("").parse().context("area reading value")?;
            let last_updated = r.get(4).unwrap_or("");

            conn.execute(
                "INSERT OR REPLACE INTO area_readings (kind, area_id, name, value, last_updated)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![kind.id(), area_id, name, value, last_updated],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} area readings", count);
        Ok(())
    }

    /// Load per-kind trend series.
    pub fn load_series(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let kind: SensorKind = r.get(0).unwrap_or("").parse()?;
            let seq: i64 = r.get(1).unwrap_or("").parse().context("series seq")?;
            let time = r.get(2).unwrap_or("");
            let value: f64 = r.get(3).unwrap_or("").parse().context("series value")?;

            conn.execute(
                "INSERT OR REPLACE INTO series_points (kind, seq, time, value)
                 VALUES (?1, ?2, ?3, ?4)",
                params![kind.id(), seq, time, value],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} series points", count);
        Ok(())
    }

    /// Load irrigation schedules.
    ///
    /// # Example CSV
    /// ```text
    /// ID,TITLE,AREA,TIME,DURATION,DAYS,ACTIVE,COLOR
    /// 1,Morning Irrigation - Area 1,Area 1,08:00,30,1;3;5,true,blue
    /// ```
    pub fn load_schedules(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let id = r.get(0).unwrap_or("");
            let title = r.get(1).unwrap_or("");
            let area = r.get(2).unwrap_or("");
            let time = parse_time(r.get(3).unwrap_or(""))?;
            let duration: u32 = r.get(4).unwrap_or("").parse().context("schedule duration")?;
            let days: DaysOfWeek = r.get(5).unwrap_or("").parse()?;
            let active = parse_flag(r.get(6).unwrap_or(""))?;
            let color: ColorTag = r.get(7).unwrap_or("").parse()?;

            conn.execute(
                "INSERT INTO schedules (id, title, area, time, duration, days, active, color)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    id,
                    title,
                    area,
                    time.format("%H:%M").to_string(),
                    duration,
                    days.to_string(),
                    active,
                    color.label()
                ],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} schedules", count);
        Ok(())
    }

    /// Load user accounts. Empty name columns are stored as NULL.
    pub fn load_users(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let id = r.get(0).unwrap_or("");
            let email = r.get(1).unwrap_or("");
            let first_name = optional(r.get(2).unwrap_or(""));
            let last_name = optional(r.get(3).unwrap_or(""));
            let role: Role = r.get(4).unwrap_or("").parse()?;
            let active = parse_flag(r.get(5).unwrap_or(""))?;
            let selected = parse_flag(r.get(6).unwrap_or(""))?;
            let last_active = farm_utils::dates::parse_date(r.get(7).unwrap_or(""))?;
            let created_at = farm_utils::dates::parse_date(r.get(8).unwrap_or(""))?;

            conn.execute(
                "INSERT OR REPLACE INTO users
                 (id, email, first_name, last_name, role, active, selected, last_active, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    id,
                    email,
                    first_name,
                    last_name,
                    role.label(),
                    active,
                    selected,
                    farm_utils::dates::format_date(&last_active),
                    farm_utils::dates::format_date(&created_at)
                ],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} users", count);
        Ok(())
    }

    /// Load irrigation area flow rates and lifetime usage.
    pub fn load_irrigation_areas(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let area_id = r.get(0).unwrap_or("");
            let name = r.get(1).unwrap_or("");
            let flow_rate: f64 = r.get(2).unwrap_or("").parse().context("flow rate")?;
            let total_used: f64 = r.get(3).unwrap_or("").parse().context("total used")?;
            let last_irrigation = r.get(4).unwrap_or("");

            conn.execute(
                "INSERT OR REPLACE INTO irrigation_areas
                 (area_id, name, flow_rate, total_used, last_irrigation)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![area_id, name, flow_rate, total_used, last_irrigation],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} irrigation areas", count);
        Ok(())
    }

    /// Load monthly climate rows. Months outside 1-12 are rejected.
    pub fn load_monthly_climate(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let month: u32 = r.get(0).unwrap_or("").parse().context("month")?;
            if !(1..=12).contains(&month) {
                anyhow::bail!("month {} out of range", month);
            }
            let mut values = [0f64; 6];
            for (i, slot) in values.iter_mut().enumerate() {
                *slot = r
                    .get(i + 1)
                    .unwrap_or("")
                    .parse()
                    .with_context(|| format!("monthly climate column {}", i + 1))?;
            }

            conn.execute(
                "INSERT OR REPLACE INTO monthly_climate
                 (month, temperature, humidity, rainfall, soil_moisture, water_usage, irrigation_hours)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![month, values[0], values[1], values[2], values[3], values[4], values[5]],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} monthly climate rows", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn load_schedules_rejects_bad_weekday() {
        let db = Database::new().unwrap();
        let csv = "ID,TITLE,AREA,TIME,DURATION,DAYS,ACTIVE,COLOR\n9,Bad,Area 1,08:00,30,1;7,true,blue\n";
        assert!(db.load_schedules(csv).is_err());
    }

    #[test]
    fn load_users_stores_missing_names_as_null() {
        let db = Database::new().unwrap();
        let csv = "ID,EMAIL,FIRST_NAME,LAST_NAME,ROLE,ACTIVE,SELECTED,LAST_ACTIVE,CREATED_AT\n\
                   7,anon@farm.test,,,viewer,true,false,2025-09-10,2025-08-01\n";
        db.load_users(csv).unwrap();
        let users = db.query_users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].first_name, None);
        assert_eq!(users[0].display_name(), "anon@farm.test");
    }

    #[test]
    fn load_monthly_climate_rejects_month_13() {
        let db = Database::new().unwrap();
        let csv = "MONTH,TEMPERATURE,HUMIDITY,RAINFALL,SOIL_MOISTURE,WATER_USAGE,IRRIGATION_HOURS\n13,1,1,1,1,1,1\n";
        assert!(db.load_monthly_climate(csv).is_err());
    }

    #[test]
    fn load_fixtures_populates_every_table() {
        let db = Database::new().unwrap();
        db.load_fixtures().unwrap();
        assert_eq!(db.query_schedules().unwrap().len(), 3);
        assert_eq!(db.query_users().unwrap().len(), 6);
        assert_eq!(db.query_monthly_climate().unwrap().len(), 12);
        assert_eq!(db.query_irrigation_areas().unwrap().len(), 6);
    }
}
