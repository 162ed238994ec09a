//! Data access seams between the pages and whatever holds the data.
//!
//! Pages only talk to these traits. The in-memory SQLite `Database` in
//! `farm-db` implements all of them.

use crate::area::{AreaReading, SensorKind, SeriesPoint};
use crate::climate::MonthlyClimate;
use crate::irrigation::IrrigationRunState;
use crate::schedule::{ScheduleDraft, ScheduleEntry};
use crate::user::UserAccount;

/// Irrigation schedules.
pub trait ScheduleRepository {
    /// All schedules in insertion order.
    fn schedules(&self) -> anyhow::Result<Vec<ScheduleEntry>>;

    /// Flip the active flag; returns the new value.
    fn toggle_schedule(&self, id: &str) -> anyhow::Result<bool>;

    fn delete_schedule(&self, id: &str) -> anyhow::Result<()>;

    /// Validate and store a new schedule, returning it with its assigned id.
    fn add_schedule(&self, draft: ScheduleDraft) -> anyhow::Result<ScheduleEntry>;
}

/// User accounts and their table selection state.
pub trait UserRepository {
    fn users(&self) -> anyhow::Result<Vec<UserAccount>>;

    /// Flip one user's selection; returns the new value.
    fn toggle_user_selection(&self, id: &str) -> anyhow::Result<bool>;

    fn set_all_selected(&self, selected: bool) -> anyhow::Result<()>;
}

/// Read-only sensor, climate and irrigation seed data.
pub trait ReadingRepository {
    fn area_readings(&self, kind: SensorKind) -> anyhow::Result<Vec<AreaReading>>;

    fn series(&self, kind: SensorKind) -> anyhow::Result<Vec<SeriesPoint>>;

    /// Twelve months, January first.
    fn monthly_climate(&self) -> anyhow::Result<Vec<MonthlyClimate>>;

    /// Idle starting state for every irrigation area.
    fn irrigation_areas(&self) -> anyhow::Result<Vec<IrrigationRunState>>;
}
