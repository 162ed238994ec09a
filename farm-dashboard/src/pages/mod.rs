//! One component per sidebar entry.

mod dashboard;
mod humidity;
mod irrigation_schedule;
mod pattern_analyzer;
mod seasonal_summary;
mod sensor;
mod settings;
mod soil_moisture;
mod temperature;
mod users;
mod water_distribution;
mod weather;

pub use dashboard::Dashboard;
pub use humidity::Humidity;
pub use irrigation_schedule::IrrigationSchedule;
pub use pattern_analyzer::PatternAnalyzer;
pub use seasonal_summary::SeasonalSummary;
pub use settings::Settings;
pub use soil_moisture::SoilMoisture;
pub use temperature::Temperature;
pub use users::Users;
pub use water_distribution::WaterDistribution;
pub use weather::Weather;

use dioxus::prelude::ReadableExt;
use farm_db::Database;
use farm_ui::state::AppState;

/// Run `op` against the repository, reporting failures to the shell.
///
/// Returns `None` while the repository is still being seeded or when the
/// operation failed. Reading `state.db` subscribes the calling effect, so
/// effects re-run once seeding completes.
pub(crate) fn with_db<T>(
    mut state: AppState,
    context: &str,
    op: impl FnOnce(&Database) -> anyhow::Result<T>,
) -> Option<T> {
    let db = state.db.read().clone()?;
    match op(&db) {
        Ok(value) => Some(value),
        Err(err) => {
            state.report(context, err);
            None
        }
    }
}

/// JSON payload for the D3 bridge; an empty array if serialization fails.
pub(crate) fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::warn!("chart payload serialization failed: {}", err);
        "[]".to_string()
    })
}

/// Inline style for a row of stat cards.
pub(crate) const STATS_GRID: &str =
    "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 24px; margin-bottom: 24px;";

/// Inline style for a two-column card grid.
pub(crate) const TWO_COLUMNS: &str =
    "display: grid; grid-template-columns: repeat(auto-fit, minmax(360px, 1fr)); gap: 24px; margin-bottom: 24px;";

/// Inline style for a page section heading.
pub(crate) const SECTION_TITLE: &str =
    "margin: 0 0 16px 0; font-size: 20px; font-weight: 600; color: #1f2937;";
