//! Simulated water distribution.
//!
//! The simulation is a discrete-time stepper: [`step`] advances one area by one
//! tick and [`advance`] applies any number of ticks. Nothing here owns a timer;
//! the UI calls [`IrrigationPanel::tick`] from its own periodic loop.
//!
//! Per-area states:
//!
//! ```text
//! Idle ──start──▶ Active ──level hits 100──▶ Completed
//!  ▲                │                            │
//!  └─────stop───────┘◀──────────start/stop───────┘
//! ```

use crate::error::{FarmError, Result};
use serde::{Deserialize, Serialize};

/// Nominal period between ticks, in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 100;

/// Water level gained per tick, in percent.
pub const LEVEL_STEP: u8 = 2;

/// Level at which a run completes.
pub const FULL_LEVEL: u8 = 100;

/// Run status of one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    #[default]
    Idle,
    Active,
    /// Reserved: no operation currently transitions into this state.
    Paused,
    Completed,
}

impl RunStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RunStatus::Idle => "idle",
            RunStatus::Active => "active",
            RunStatus::Paused => "paused",
            RunStatus::Completed => "completed",
        }
    }
}

/// Live irrigation state of one area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationRunState {
    pub area_id: String,
    pub name: String,
    pub active: bool,
    /// 0-100
    pub water_level: u8,
    /// Ticks elapsed in the current run, shown as seconds
    pub elapsed_seconds: u32,
    pub flow_rate_l_per_min: f64,
    pub status: RunStatus,
    pub liters_used: f64,
    pub last_irrigation: String,
}

impl IrrigationRunState {
    /// An idle area with an empty run.
    pub fn idle(
        area_id: impl Into<String>,
        name: impl Into<String>,
        flow_rate_l_per_min: f64,
        liters_used: f64,
        last_irrigation: impl Into<String>,
    ) -> Self {
        Self {
            area_id: area_id.into(),
            name: name.into(),
            active: false,
            water_level: 0,
            elapsed_seconds: 0,
            flow_rate_l_per_min,
            status: RunStatus::Idle,
            liters_used,
            last_irrigation: last_irrigation.into(),
        }
    }

    fn start(&mut self) {
        if self.status == RunStatus::Completed || self.water_level >= FULL_LEVEL {
            self.water_level = 0;
            self.elapsed_seconds = 0;
        }
        self.active = true;
        self.status = RunStatus::Active;
    }

    fn stop(&mut self) {
        self.active = false;
        self.status = RunStatus::Idle;
        self.water_level = 0;
        self.elapsed_seconds = 0;
    }
}

/// Advance one area by a single tick.
///
/// An active area below full gains [`LEVEL_STEP`] percent (capped at
/// [`FULL_LEVEL`]), one elapsed second, and `flow / 60` litres. The tick that
/// fills the area marks it completed and inactive; later ticks leave it alone.
pub fn step(area: &IrrigationRunState) -> IrrigationRunState {
    let mut next = area.clone();
    if next.active && next.water_level < FULL_LEVEL {
        next.water_level = next.water_level.saturating_add(LEVEL_STEP).min(FULL_LEVEL);
        next.elapsed_seconds += 1;
        next.liters_used += next.flow_rate_l_per_min / 60.0;
        if next.water_level >= FULL_LEVEL {
            next.status = RunStatus::Completed;
            next.active = false;
            log::debug!("irrigation: {} completed after {}s", next.area_id, next.elapsed_seconds);
        }
    }
    next
}

/// Apply `ticks` steps to every area.
pub fn advance(areas: &[IrrigationRunState], ticks: u32) -> Vec<IrrigationRunState> {
    let mut current = areas.to_vec();
    for _ in 0..ticks {
        current = current.iter().map(step).collect();
    }
    current
}

/// Which of the START ALL / STOP ALL buttons was pressed last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlobalControl {
    Start,
    #[default]
    Stop,
}

/// All areas on the water distribution page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IrrigationPanel {
    pub areas: Vec<IrrigationRunState>,
    pub global_control: GlobalControl,
}

impl IrrigationPanel {
    pub fn new(areas: Vec<IrrigationRunState>) -> Self {
        Self {
            areas,
            global_control: GlobalControl::Stop,
        }
    }

    /// One simulation tick over every area.
    pub fn tick(&mut self) {
        self.areas = advance(&self.areas, 1);
    }

    /// Start an idle or completed area, or stop an active one.
    ///
    /// Returns the new active flag.
    pub fn toggle_area(&mut self, area_id: &str) -> Result<bool> {
        let area = self
            .areas
            .iter_mut()
            .find(|a| a.area_id == area_id)
            .ok_or_else(|| FarmError::UnknownArea(area_id.to_string()))?;
        if area.active {
            area.stop();
        } else {
            area.start();
        }
        log::info!("irrigation: {} -> {}", area.area_id, area.status.label());
        Ok(area.active)
    }

    /// Start every area from an empty run.
    pub fn start_all(&mut self) {
        self.global_control = GlobalControl::Start;
        for area in &mut self.areas {
            area.stop();
            area.start();
        }
        log::info!("irrigation: started {} areas", self.areas.len());
    }

    /// Stop every area and reset its run.
    pub fn stop_all(&mut self) {
        self.global_control = GlobalControl::Stop;
        for area in &mut self.areas {
            area.stop();
        }
        log::info!("irrigation: stopped all areas");
    }

    pub fn active_count(&self) -> usize {
        self.areas.iter().filter(|a| a.active).count()
    }

    pub fn total_liters_used(&self) -> f64 {
        self.areas.iter().map(|a| a.liters_used).sum()
    }

    /// Combined flow of the areas currently running.
    pub fn active_flow_rate(&self) -> f64 {
        self.areas
            .iter()
            .filter(|a| a.active)
            .map(|a| a.flow_rate_l_per_min)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> IrrigationPanel {
        IrrigationPanel::new(vec![
            IrrigationRunState::idle("area1", "Area 1", 2.5, 245.0, "2 hours ago"),
            IrrigationRunState::idle("area2", "Area 2", 2.3, 198.0, "3 hours ago"),
        ])
    }

    #[test]
    fn test_idle_area_does_not_move() {
        let area = IrrigationRunState::idle("area1", "Area 1", 2.5, 0.0, "");
        assert_eq!(step(&area), area);
    }

    #[test]
    fn test_level_climbs_by_two_and_completes_once() {
        let mut p = panel();
        p.toggle_area("area1").unwrap();
        let mut area = p.areas[0].clone();
        let mut completions = 0;
        for tick in 1..=60u32 {
            let before = area.water_level;
            area = step(&area);
            assert!(area.water_level <= FULL_LEVEL);
            assert!(area.water_level >= before);
            if tick <= 50 {
                assert_eq!(area.water_level, before + LEVEL_STEP);
            }
            if before < FULL_LEVEL && area.water_level == FULL_LEVEL {
                completions += 1;
                assert_eq!(tick, 50);
                assert_eq!(area.status, RunStatus::Completed);
                assert!(!area.active);
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(area.elapsed_seconds, 50);
        assert!((area.liters_used - (245.0 + 50.0 * 2.5 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_advance_matches_repeated_steps() {
        let mut p = panel();
        p.start_all();
        let advanced = advance(&p.areas, 10);
        let mut stepped = p.areas.clone();
        for _ in 0..10 {
            stepped = stepped.iter().map(step).collect();
        }
        assert_eq!(advanced, stepped);
        assert!(advanced.iter().all(|a| a.water_level == 20));
    }

    #[test]
    fn test_toggle_stop_resets_run() {
        let mut p = panel();
        p.toggle_area("area1").unwrap();
        for _ in 0..5 {
            p.tick();
        }
        assert_eq!(p.areas[0].water_level, 10);
        let active = p.toggle_area("area1").unwrap();
        assert!(!active);
        let area = &p.areas[0];
        assert_eq!(area.water_level, 0);
        assert_eq!(area.elapsed_seconds, 0);
        assert_eq!(area.status, RunStatus::Idle);
    }

    #[test]
    fn test_restart_after_completion_starts_empty() {
        let mut p = panel();
        p.toggle_area("area2").unwrap();
        for _ in 0..50 {
            p.tick();
        }
        assert_eq!(p.areas[1].status, RunStatus::Completed);
        p.toggle_area("area2").unwrap();
        assert_eq!(p.areas[1].water_level, 0);
        assert_eq!(p.areas[1].status, RunStatus::Active);
    }

    #[test]
    fn test_toggle_unknown_area() {
        let mut p = panel();
        assert_eq!(
            p.toggle_area("area9"),
            Err(FarmError::UnknownArea("area9".to_string()))
        );
    }

    #[test]
    fn test_start_all_and_stop_all() {
        let mut p = panel();
        p.start_all();
        assert_eq!(p.global_control, GlobalControl::Start);
        assert_eq!(p.active_count(), 2);
        assert!((p.active_flow_rate() - 4.8).abs() < 1e-9);
        p.tick();
        p.stop_all();
        assert_eq!(p.global_control, GlobalControl::Stop);
        assert_eq!(p.active_count(), 0);
        assert!(p.areas.iter().all(|a| a.water_level == 0 && a.status == RunStatus::Idle));
        // litres already delivered stay on the books
        assert!(p.total_liters_used() > 443.0);
    }
}
