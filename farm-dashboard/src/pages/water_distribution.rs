//! Water distribution control.
//!
//! Owns an [`IrrigationPanel`] seeded from the repository and drives it with
//! a 100 ms timer future. The future belongs to this component, so leaving
//! the page drops it and the simulation stops.

use super::{with_db, STATS_GRID};
use dioxus::prelude::*;
use farm_core::irrigation::{IrrigationPanel, IrrigationRunState, RunStatus, TICK_INTERVAL_MS};
use farm_core::repository::{ReadingRepository, ScheduleRepository};
use farm_core::schedule::{next_occurrence, ScheduleEntry};
use farm_data::stats::{average, round1};
use farm_ui::components::{StatCard, CARD_STYLE};
use farm_ui::state::AppState;
use farm_utils::dates::format_elapsed;
use gloo_timers::future::TimeoutFuture;

fn run_colors(status: RunStatus) -> (&'static str, &'static str) {
    match status {
        RunStatus::Active => ("#dcfce7", "#166534"),
        RunStatus::Completed => ("#dbeafe", "#1e40af"),
        RunStatus::Paused => ("#fef9c3", "#854d0e"),
        RunStatus::Idle => ("#f3f4f6", "#374151"),
    }
}

#[component]
pub fn WaterDistribution() -> Element {
    let mut state = use_context::<AppState>();
    let mut panel = use_signal(IrrigationPanel::default);
    let mut schedules = use_signal(Vec::<ScheduleEntry>::new);

    use_effect(move || {
        if let Some(areas) = with_db(state, "Failed to load irrigation areas", |db| db.irrigation_areas()) {
            panel.set(IrrigationPanel::new(areas));
        }
    });

    use_effect(move || {
        let _ = (state.revision)();
        if let Some(rows) = with_db(state, "Failed to load schedules", |db| db.schedules()) {
            schedules.set(rows);
        }
    });

    // ─── Simulation loop ───
    use_future(move || async move {
        loop {
            TimeoutFuture::new(TICK_INTERVAL_MS).await;
            // Only write while something runs so idle pages do not re-render.
            if panel.peek().active_count() > 0 {
                panel.write().tick();
            }
        }
    });

    let snapshot = panel.read().clone();
    let flows: Vec<f64> = snapshot.areas.iter().map(|a| a.flow_rate_l_per_min).collect();
    let avg_flow = average(&flows).map(round1).unwrap_or(0.0);
    let now = chrono::Local::now().naive_local();
    let next_run = next_occurrence(&schedules.read(), now)
        .map(|o| format!("{} at {}", o.day_label(now), o.schedule.time_label()))
        .unwrap_or_else(|| "Nothing scheduled".to_string());
    let active_flow = snapshot.active_flow_rate();
    let total_used = snapshot.total_liters_used();

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;",
            div {
                h1 { style: "margin: 0; font-size: 24px; font-weight: 700; color: #1f2937;", "Water Distribution Control" }
                p { style: "margin: 4px 0 0 0; font-size: 14px; color: #4b5563;", "Manage irrigation across all cultivation areas" }
            }
            div {
                style: "display: flex; gap: 12px;",
                button {
                    style: "padding: 12px 24px; background: #16a34a; color: #fff; border: none; border-radius: 8px; font-weight: 500; cursor: pointer;",
                    onclick: move |_| panel.write().start_all(),
                    "▶ START ALL"
                }
                button {
                    style: "padding: 12px 24px; background: #dc2626; color: #fff; border: none; border-radius: 8px; font-weight: 500; cursor: pointer;",
                    onclick: move |_| panel.write().stop_all(),
                    "■ STOP ALL"
                }
            }
        }

        div {
            style: "{STATS_GRID}",
            StatCard {
                label: "Active Areas".to_string(),
                value: format!("{}/{}", snapshot.active_count(), snapshot.areas.len()),
                note: format!("Currently irrigating at {} L/min", active_flow),
            }
            StatCard {
                label: "Total Water Used".to_string(),
                value: format!("{:.0}L", total_used),
                note: "Today's consumption".to_string(),
            }
            StatCard {
                label: "Avg Flow Rate".to_string(),
                value: format!("{}", avg_flow),
                note: "Liters per minute".to_string(),
            }
            StatCard {
                label: "System Status".to_string(),
                value: "Operational".to_string(),
                note: "All systems normal".to_string(),
                note_color: "#16a34a".to_string(),
            }
        }

        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 24px; margin-bottom: 24px;",
            for area in snapshot.areas.iter().cloned() {
                AreaControl {
                    key: "{area.area_id}",
                    area: area.clone(),
                    on_toggle: move |id: String| {
                        let result = panel.write().toggle_area(&id);
                        if let Err(err) = result {
                            state.report("Irrigation control failed", err.into());
                        }
                    },
                }
            }
        }

        div {
            style: "background: #eff6ff; border: 1px solid #bfdbfe; padding: 24px; border-radius: 8px; margin-bottom: 24px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;", "System Information" }
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; font-size: 14px; color: #374151;",
                div { div { style: "font-weight: 600; margin-bottom: 4px;", "Water Pressure" } "45 PSI - Optimal" }
                div { div { style: "font-weight: 600; margin-bottom: 4px;", "Tank Level" } "85% - 1,700L remaining" }
                div { div { style: "font-weight: 600; margin-bottom: 4px;", "Next Scheduled" } "{next_run}" }
            }
        }

        div {
            style: "background: #f0fdf4; border: 1px solid #bbf7d0; padding: 24px; border-radius: 8px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;", "Smart Recommendations" }
            ul {
                style: "list-style: none; margin: 0; padding: 0; font-size: 14px; color: #374151;",
                li { style: "margin-bottom: 8px;", span { style: "color: #16a34a; font-weight: 700;", "✓ " } "Water pressure is optimal across all zones. System efficiency at 98%." }
                li { style: "margin-bottom: 8px;", span { style: "color: #2563eb; font-weight: 700;", "ℹ " } "Consider scheduling Area 4 for irrigation - last watered 4 hours ago." }
                li { span { style: "color: #ca8a04; font-weight: 700;", "⚠ " } "Rain expected this afternoon. You may skip the 6:00 PM scheduled irrigation." }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AreaControlProps {
    area: IrrigationRunState,
    on_toggle: EventHandler<String>,
}

#[component]
fn AreaControl(props: AreaControlProps) -> Element {
    let area = props.area;
    let (bg, fg) = run_colors(area.status);
    let level = area.water_level;
    let fill = if area.active {
        "repeating-linear-gradient(45deg, #22d3ee, #22d3ee 10px, #3b82f6 10px, #3b82f6 20px)"
    } else {
        "linear-gradient(to right, #d1d5db, #9ca3af)"
    };
    let level_text = if level > 0 { format!("{}%", level) } else { "Ready".to_string() };
    let level_color = if level > 50 { "#fff" } else { "#374151" };
    let duration = format_elapsed(area.elapsed_seconds);
    let (button_bg, button_label) = if area.active {
        ("#dc2626", "■ Stop Irrigation")
    } else {
        ("#16a34a", "▶ Start Irrigation")
    };
    let id = area.area_id.clone();

    rsx! {
        div {
            style: "{CARD_STYLE}",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 16px;",
                div {
                    h3 { style: "margin: 0; font-size: 20px; font-weight: 700; color: #1f2937;", "{area.name}" }
                    p { style: "margin: 4px 0 0 0; font-size: 12px; color: #6b7280;", "Last: {area.last_irrigation}" }
                }
                span {
                    style: "padding: 2px 12px; border-radius: 9999px; font-size: 12px; font-weight: 500; background: {bg}; color: {fg}; text-transform: capitalize;",
                    {area.status.label()}
                }
            }

            div {
                style: "display: flex; justify-content: space-between; font-size: 14px; color: #4b5563; margin-bottom: 8px;",
                span { "Water Flow" }
                span { style: "font-weight: 600;", "{level}%" }
            }
            div {
                style: "position: relative; height: 40px; background: #e5e7eb; border-radius: 9999px; overflow: hidden; margin-bottom: 16px;",
                div { style: "position: absolute; top: 0; left: 0; height: 100%; width: {level}%; background: {fill}; transition: width 0.3s;" }
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; font-size: 14px; font-weight: 700; color: {level_color};",
                    "{level_text}"
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 16px;",
                div {
                    style: "background: #f9fafb; padding: 12px; border-radius: 8px;",
                    div { style: "font-size: 12px; color: #4b5563;", "⏱ Duration" }
                    div { style: "font-size: 18px; font-weight: 700;", "{duration}" }
                }
                div {
                    style: "background: #f9fafb; padding: 12px; border-radius: 8px;",
                    div { style: "font-size: 12px; color: #4b5563;", "💧 Flow Rate" }
                    div { style: "font-size: 18px; font-weight: 700;", "{area.flow_rate_l_per_min} L/m" }
                }
            }

            div {
                style: "background: #eff6ff; padding: 12px; border-radius: 8px; margin-bottom: 16px;",
                div { style: "font-size: 12px; color: #4b5563;", "Total Water Used" }
                div { style: "font-size: 24px; font-weight: 700; color: #2563eb;", {format!("{:.1}L", area.liters_used)} }
            }

            button {
                style: "width: 100%; padding: 12px; border: none; border-radius: 8px; font-weight: 600; color: #fff; background: {button_bg}; cursor: pointer;",
                onclick: move |_| props.on_toggle.call(id.clone()),
                "{button_label}"
            }
        }
    }
}
