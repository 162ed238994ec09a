//! SQL schema for the in-memory farm database.

/// Returns the full SQL schema as a single batch string.
///
/// - `area_readings` - latest sensor value per (kind, area)
/// - `series_points` - per-kind trend series, ordered by `seq`
/// - `schedules` - irrigation schedules; `days` holds "1;3;5" style weekday lists
/// - `users` - user accounts and their table selection flag
/// - `irrigation_areas` - flow rate and lifetime usage per irrigation area
/// - `monthly_climate` - one row per calendar month (1-12)
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS area_readings (
        kind TEXT NOT NULL,
        area_id TEXT NOT NULL,
        name TEXT NOT NULL,
        value REAL NOT NULL,
        last_updated TEXT NOT NULL,
        PRIMARY KEY (kind, area_id)
    );

    CREATE TABLE IF NOT EXISTS series_points (
        kind TEXT NOT NULL,
        seq INTEGER NOT NULL,
        time TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (kind, seq)
    );
    CREATE INDEX IF NOT EXISTS idx_series_kind ON series_points(kind);

    CREATE TABLE IF NOT EXISTS schedules (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        title TEXT NOT NULL,
        area TEXT NOT NULL,
        time TEXT NOT NULL,
        duration INTEGER NOT NULL,
        days TEXT NOT NULL,
        active INTEGER NOT NULL,
        color TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        email TEXT NOT NULL,
        first_name TEXT,
        last_name TEXT,
        role TEXT NOT NULL,
        active INTEGER NOT NULL,
        selected INTEGER NOT NULL,
        last_active TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS irrigation_areas (
        area_id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        flow_rate REAL NOT NULL,
        total_used REAL NOT NULL,
        last_irrigation TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS monthly_climate (
        month INTEGER PRIMARY KEY,
        temperature REAL NOT NULL,
        humidity REAL NOT NULL,
        rainfall REAL NOT NULL,
        soil_moisture REAL NOT NULL,
        water_usage REAL NOT NULL,
        irrigation_hours REAL NOT NULL
    );
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in [
            "area_readings",
            "series_points",
            "schedules",
            "users",
            "irrigation_areas",
            "monthly_climate",
        ] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
