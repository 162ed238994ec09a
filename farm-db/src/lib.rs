//! In-memory SQLite repository for the smart farming dashboard.
//!
//! Loads the embedded CSV fixtures into an in-memory SQLite database and
//! exposes typed queries and mutations. Pages reach it through the
//! repository traits in `farm_core::repository`.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - Fixtures embedded with `include_str!` at compile time
//!
//! # Usage
//!
//! ```rust
//! use farm_core::repository::ScheduleRepository;
//! use farm_db::Database;
//!
//! let db = Database::seeded().unwrap();
//! let schedules = db.schedules().unwrap();
//! assert_eq!(schedules.len(), 3);
//! ```

pub mod schema;
mod loader;
mod queries;

use farm_core::area::{AreaReading, SensorKind, SeriesPoint};
use farm_core::climate::MonthlyClimate;
use farm_core::irrigation::IrrigationRunState;
use farm_core::repository::{ReadingRepository, ScheduleRepository, UserRepository};
use farm_core::schedule::{ScheduleDraft, ScheduleEntry};
use farm_core::user::UserAccount;
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding all dashboard data.
///
/// Cheaply cloneable (via `Rc`); clones share one connection, so a change
/// made through one handle is visible through every other.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create an empty in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database populated from the embedded fixtures.
    pub fn seeded() -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_fixtures()?;
        Ok(db)
    }
}

impl PartialEq for Database {
    /// Two handles are equal when they share the same connection.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}

impl ScheduleRepository for Database {
    fn schedules(&self) -> anyhow::Result<Vec<ScheduleEntry>> {
        self.query_schedules()
    }

    fn toggle_schedule(&self, id: &str) -> anyhow::Result<bool> {
        self.toggle_schedule_active(id)
    }

    fn delete_schedule(&self, id: &str) -> anyhow::Result<()> {
        self.remove_schedule(id)
    }

    fn add_schedule(&self, draft: ScheduleDraft) -> anyhow::Result<ScheduleEntry> {
        self.insert_schedule(draft)
    }
}

impl UserRepository for Database {
    fn users(&self) -> anyhow::Result<Vec<UserAccount>> {
        self.query_users()
    }

    fn toggle_user_selection(&self, id: &str) -> anyhow::Result<bool> {
        self.toggle_user_selected(id)
    }

    fn set_all_selected(&self, selected: bool) -> anyhow::Result<()> {
        self.update_all_selected(selected)
    }
}

impl ReadingRepository for Database {
    fn area_readings(&self, kind: SensorKind) -> anyhow::Result<Vec<AreaReading>> {
        self.query_area_readings(kind)
    }

    fn series(&self, kind: SensorKind) -> anyhow::Result<Vec<SeriesPoint>> {
        self.query_series(kind)
    }

    fn monthly_climate(&self) -> anyhow::Result<Vec<MonthlyClimate>> {
        self.query_monthly_climate()
    }

    fn irrigation_areas(&self) -> anyhow::Result<Vec<IrrigationRunState>> {
        self.query_irrigation_areas()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.schedules().unwrap().is_empty());
        assert!(db.users().unwrap().is_empty());
    }

    #[test]
    fn clones_share_the_connection() {
        let db = Database::seeded().unwrap();
        let db2 = db.clone();
        db.delete_schedule("1").unwrap();
        assert_eq!(db2.schedules().unwrap().len(), 2);
        assert!(db == db2);
        assert!(db != Database::new().unwrap());
    }

    #[test]
    fn seeded_climate_is_a_full_year() {
        let db = Database::seeded().unwrap();
        let months = db.monthly_climate().unwrap();
        let numbers: Vec<u32> = months.iter().map(|m| m.month).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
        assert_eq!(months[6].rainfall, 240.0);
    }

    #[test]
    fn repository_traits_work_through_dyn() {
        let db = Database::seeded().unwrap();
        let readings: &dyn ReadingRepository = &db;
        assert_eq!(readings.series(SensorKind::SoilMoisture).unwrap().len(), 10);
        let users: &dyn UserRepository = &db;
        users.set_all_selected(true).unwrap();
        assert!(farm_core::user::all_selected(&users.users().unwrap()));
    }
}
