//! Typed query and mutation methods.
//!
//! Queries return `farm-core` domain types directly; rows are re-validated
//! through the same parsers the loader uses.

use crate::Database;
use anyhow::Context;
use farm_core::area::{AreaReading, SensorKind, SeriesPoint};
use farm_core::climate::MonthlyClimate;
use farm_core::irrigation::IrrigationRunState;
use farm_core::schedule::{self, parse_time, ScheduleDraft, ScheduleEntry};
use farm_core::user::UserAccount;
use farm_core::FarmError;
use rusqlite::params;

struct ScheduleRow {
    id: String,
    title: String,
    area: String,
    time: String,
    duration: u32,
    days: String,
    active: bool,
    color: String,
}

impl ScheduleRow {
    fn into_entry(self) -> anyhow::Result<ScheduleEntry> {
        Ok(ScheduleEntry {
            time: parse_time(&self.time)?,
            days: self.days.parse()?,
            color: self.color.parse()?,
            id: self.id,
            title: self.title,
            area: self.area,
            duration_minutes: self.duration,
            active: self.active,
        })
    }
}

impl Database {
    // ───────────────────── Sensors ─────────────────────

    /// Latest value of every area for one sensor kind, ordered by area id.
    pub fn query_area_readings(&self, kind: SensorKind) -> anyhow::Result<Vec<AreaReading>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT area_id, name, value, last_updated FROM area_readings
             WHERE kind = ?1
             ORDER BY area_id",
        )?;
        let rows = stmt
            .query_map(params![kind.id()], |row| {
                Ok(AreaReading::new(
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    kind,
                    row.get(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("query: {} readings for {}", rows.len(), kind);
        Ok(rows)
    }

    /// Trend series for one sensor kind, oldest first.
    pub fn query_series(&self, kind: SensorKind) -> anyhow::Result<Vec<SeriesPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT time, value FROM series_points WHERE kind = ?1 ORDER BY seq",
        )?;
        let rows = stmt
            .query_map(params![kind.id()], |row| {
                Ok(SeriesPoint {
                    time: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("query: {} series points for {}", rows.len(), kind);
        Ok(rows)
    }

    pub fn query_monthly_climate(&self) -> anyhow::Result<Vec<MonthlyClimate>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT month, temperature, humidity, rainfall, soil_moisture, water_usage, irrigation_hours
             FROM monthly_climate ORDER BY month",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MonthlyClimate {
                    month: row.get(0)?,
                    temperature: row.get(1)?,
                    humidity: row.get(2)?,
                    rainfall: row.get(3)?,
                    soil_moisture: row.get(4)?,
                    water_usage: row.get(5)?,
                    irrigation_hours: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Every irrigation area in its idle starting state.
    pub fn query_irrigation_areas(&self) -> anyhow::Result<Vec<IrrigationRunState>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT area_id, name, flow_rate, total_used, last_irrigation
             FROM irrigation_areas ORDER BY area_id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(IrrigationRunState::idle(
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    // ───────────────────── Schedules ─────────────────────

    /// All schedules in insertion order.
    pub fn query_schedules(&self) -> anyhow::Result<Vec<ScheduleEntry>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, title, area, time, duration, days, active, color
             FROM schedules ORDER BY seq",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ScheduleRow {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    area: row.get(2)?,
                    time: row.get(3)?,
                    duration: row.get(4)?,
                    days: row.get(5)?,
                    active: row.get(6)?,
                    color: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(ScheduleRow::into_entry).collect()
    }

    /// Flip a schedule's active flag and return the new value.
    pub fn toggle_schedule_active(&self, id: &str) -> anyhow::Result<bool> {
        let conn = self.conn.borrow();
        let changed = conn.execute(
            "UPDATE schedules SET active = NOT active WHERE id = ?1",
            params![id],
        )?;
        if changed == 0 {
            return Err(FarmError::UnknownSchedule(id.to_string()).into());
        }
        let active: bool = conn.query_row(
            "SELECT active FROM schedules WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        log::info!("schedule {} is now {}", id, if active { "active" } else { "inactive" });
        Ok(active)
    }

    pub fn remove_schedule(&self, id: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let changed = conn.execute("DELETE FROM schedules WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(FarmError::UnknownSchedule(id.to_string()).into());
        }
        log::info!("schedule {} deleted", id);
        Ok(())
    }

    /// Validate a draft, assign the next numeric id and store it.
    pub fn insert_schedule(&self, draft: ScheduleDraft) -> anyhow::Result<ScheduleEntry> {
        let existing = self.query_schedules()?;
        let entry = draft.into_entry(schedule::next_id(&existing))?;

        let conn = self.conn.borrow();
        conn.execute(
            "INSERT INTO schedules (id, title, area, time, duration, days, active, color)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                entry.id,
                entry.title,
                entry.area,
                entry.time_label(),
                entry.duration_minutes,
                entry.days.to_string(),
                entry.active,
                entry.color.label()
            ],
        )
        .with_context(|| format!("inserting schedule '{}'", entry.title))?;
        log::info!("schedule {} added: {}", entry.id, entry.title);
        Ok(entry)
    }

    // ───────────────────── Users ─────────────────────

    /// All users ordered by id.
    pub fn query_users(&self) -> anyhow::Result<Vec<UserAccount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, email, first_name, last_name, role, active, selected, last_active, created_at
             FROM users ORDER BY CAST(id AS INTEGER), id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, bool>(5)?,
                    row.get::<_, bool>(6)?,
                    row.get::<_, String>(7)?,
                    row.get::<_, String>(8)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(
                |(id, email, first_name, last_name, role, active, selected, last_active, created_at)| {
                    Ok(UserAccount {
                        id,
                        email,
                        first_name,
                        last_name,
                        role: role.parse()?,
                        active,
                        selected,
                        last_active: farm_utils::dates::parse_date(&last_active)?,
                        created_at: farm_utils::dates::parse_date(&created_at)?,
                    })
                },
            )
            .collect()
    }

    /// Flip one user's selection flag and return the new value.
    pub fn toggle_user_selected(&self, id: &str) -> anyhow::Result<bool> {
        let conn = self.conn.borrow();
        let changed = conn.execute(
            "UPDATE users SET selected = NOT selected WHERE id = ?1",
            params![id],
        )?;
        if changed == 0 {
            anyhow::bail!("unknown user '{}'", id);
        }
        let selected = conn.query_row(
            "SELECT selected FROM users WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(selected)
    }

    pub fn update_all_selected(&self, selected: bool) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let changed = conn.execute("UPDATE users SET selected = ?1", params![selected])?;
        log::debug!("users: set selected={} on {} rows", selected, changed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use farm_core::area::{ReadingStatus, SensorKind};
    use farm_core::schedule::{ColorTag, ScheduleDraft};

    fn seeded() -> Database {
        Database::seeded().unwrap()
    }

    #[test]
    fn area_readings_derive_status() {
        let db = seeded();
        let soil = db.query_area_readings(SensorKind::SoilMoisture).unwrap();
        assert_eq!(soil.len(), 6);
        assert_eq!(soil[2].area_id, "area3");
        assert_eq!(soil[2].status, ReadingStatus::Low);
        assert_eq!(soil[3].status, ReadingStatus::High);

        let temp = db.query_area_readings(SensorKind::Temperature).unwrap();
        assert_eq!(temp[2].status, ReadingStatus::Hot);
        assert_eq!(temp[4].status, ReadingStatus::Cold);
    }

    #[test]
    fn series_is_ordered() {
        let db = seeded();
        let series = db.query_series(SensorKind::Humidity).unwrap();
        assert_eq!(series.len(), 10);
        assert_eq!(series[0].time, "8:41");
        assert_eq!(series[9].value, 68.0);
    }

    #[test]
    fn schedules_keep_fixture_order() {
        let db = seeded();
        let schedules = db.query_schedules().unwrap();
        let ids: Vec<&str> = schedules.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(schedules[0].runs_on(1));
        assert!(!schedules[2].active);
    }

    #[test]
    fn toggle_and_delete_schedule() {
        let db = seeded();
        assert!(!db.toggle_schedule_active("1").unwrap());
        assert!(db.toggle_schedule_active("1").unwrap());

        db.remove_schedule("2").unwrap();
        assert_eq!(db.query_schedules().unwrap().len(), 2);
        assert!(db.remove_schedule("2").is_err());
        assert!(db.toggle_schedule_active("99").is_err());
    }

    #[test]
    fn insert_schedule_assigns_next_id() {
        let db = seeded();
        let entry = db
            .insert_schedule(ScheduleDraft {
                title: "Dawn Mist - Area 4".to_string(),
                area: "Area 4".to_string(),
                time: "06:15".to_string(),
                duration_minutes: 15,
                days: vec![0, 6],
                color: ColorTag::Orange,
            })
            .unwrap();
        assert_eq!(entry.id, "4");
        let all = db.query_schedules().unwrap();
        assert_eq!(all.last().map(|s| s.title.as_str()), Some("Dawn Mist - Area 4"));
        assert_eq!(all.last().map(|s| s.time_label()), Some("06:15".to_string()));
    }

    #[test]
    fn insert_schedule_rejects_invalid_draft() {
        let db = seeded();
        let draft = ScheduleDraft {
            title: String::new(),
            area: "Area 1".to_string(),
            time: "06:15".to_string(),
            duration_minutes: 15,
            days: vec![1],
            color: ColorTag::Blue,
        };
        assert!(db.insert_schedule(draft).is_err());
        assert_eq!(db.query_schedules().unwrap().len(), 3);
    }

    #[test]
    fn user_selection() {
        let db = seeded();
        let users = db.query_users().unwrap();
        assert_eq!(users[0].email, "john.doe@gmail.com");
        assert!(users[0].selected);

        assert!(db.toggle_user_selected("2").unwrap());
        db.update_all_selected(false).unwrap();
        assert!(db.query_users().unwrap().iter().all(|u| !u.selected));
        assert!(db.toggle_user_selected("nope").is_err());
    }

    #[test]
    fn irrigation_areas_start_idle() {
        let db = seeded();
        let areas = db.query_irrigation_areas().unwrap();
        assert_eq!(areas.len(), 6);
        assert!(areas.iter().all(|a| !a.active && a.water_level == 0));
        assert_eq!(areas[2].flow_rate_l_per_min, 2.8);
    }
}
