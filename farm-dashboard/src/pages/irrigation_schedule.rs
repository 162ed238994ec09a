//! Irrigation schedule: stats, schedule list, month calendar and add form.

use super::{with_db, STATS_GRID};
use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use farm_core::calendar::{CalendarDay, MonthCursor};
use farm_core::repository::ScheduleRepository;
use farm_core::schedule::{
    active_count, next_occurrence, tasks_on, total_active_minutes, ColorTag, ScheduleDraft,
    ScheduleEntry,
};
use farm_ui::components::{StatCard, CARD_STYLE};
use farm_ui::state::AppState;
use farm_utils::dates::{format_long_date, DAY_NAMES};
use std::str::FromStr;

const AREA_OPTIONS: [&str; 6] = ["Area 1", "Area 2", "Area 3", "Area 4", "Area 5", "Area 6"];

fn blank_draft() -> ScheduleDraft {
    ScheduleDraft {
        title: String::new(),
        area: AREA_OPTIONS[0].to_string(),
        time: "06:00".to_string(),
        duration_minutes: 30,
        days: Vec::new(),
        color: ColorTag::default(),
    }
}

#[component]
pub fn IrrigationSchedule() -> Element {
    let mut state = use_context::<AppState>();
    let now = chrono::Local::now().naive_local();
    let today = now.date();

    let mut schedules = use_signal(Vec::<ScheduleEntry>::new);
    let mut cursor = use_signal(|| MonthCursor::containing(chrono::Local::now().date_naive()));
    let mut selected_date = use_signal(|| None::<NaiveDate>);
    let mut show_form = use_signal(|| false);

    use_effect(move || {
        let _ = (state.revision)();
        if let Some(rows) = with_db(state, "Failed to load schedules", |db| db.schedules()) {
            schedules.set(rows);
        }
    });

    let rows = schedules.read().clone();
    let weekday = today.weekday().num_days_from_sunday();
    let (next_time, next_note) = match next_occurrence(&rows, now) {
        Some(o) => (o.schedule.time_label(), format!("{} - {}", o.schedule.area, o.day_label(now))),
        None => ("--:--".to_string(), "No active schedules".to_string()),
    };

    let month = cursor();
    let cells = match month.grid(&rows) {
        Ok(cells) => cells,
        Err(err) => {
            log::error!("calendar: {}", err);
            Vec::new()
        }
    };
    let legend: Vec<(String, &'static str, String)> = rows
        .iter()
        .filter(|s| s.active)
        .map(|s| (s.id.clone(), s.color.hex(), s.area.clone()))
        .collect();
    let selected_summary = selected_date().map(|date| {
        let day = date.weekday().num_days_from_sunday();
        let names: Vec<String> = rows
            .iter()
            .filter(|s| s.runs_on(day))
            .map(|s| format!("{} {}", s.time_label(), s.title))
            .collect();
        (format_long_date(&date), names)
    });

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;",
            div {
                h1 { style: "margin: 0; font-size: 24px; font-weight: 700; color: #1f2937;", "Irrigation Schedule" }
                p { style: "margin: 4px 0 0 0; font-size: 14px; color: #4b5563;", "Plan and manage your watering schedules" }
            }
            button {
                style: "padding: 10px 20px; background: #2563eb; color: #fff; border: none; border-radius: 8px; font-weight: 500; cursor: pointer;",
                onclick: move |_| show_form.set(!show_form()),
                "＋ Add Schedule"
            }
        }

        if show_form() {
            AddScheduleForm {
                on_close: move |_| show_form.set(false),
                on_saved: move |_| {
                    show_form.set(false);
                    state.touch();
                },
            }
        }

        div {
            style: "{STATS_GRID}",
            StatCard {
                label: "Active Schedules".to_string(),
                value: active_count(&rows).to_string(),
                note: format!("of {} total", rows.len()),
            }
            StatCard {
                label: "Today's Tasks".to_string(),
                value: tasks_on(&rows, weekday).to_string(),
                note: DAY_NAMES[weekday as usize].to_string(),
            }
            StatCard {
                label: "Total Duration".to_string(),
                value: total_active_minutes(&rows).to_string(),
                note: "Minutes per cycle".to_string(),
            }
            StatCard {
                label: "Next Schedule".to_string(),
                value: next_time,
                note: next_note,
            }
        }

        div {
            style: "display: grid; grid-template-columns: minmax(280px, 1fr) 2fr; gap: 24px; margin-bottom: 24px;",

            // ─── Schedule list ───
            div {
                style: "{CARD_STYLE}",
                h3 { style: "margin: 0 0 16px 0; font-size: 18px; font-weight: 600;", "🕒 Time Schedules" }
                for schedule in rows.iter().cloned() {
                    ScheduleRow {
                        key: "{schedule.id}",
                        schedule: schedule.clone(),
                        on_toggle: move |id: String| {
                            if with_db(state, "Failed to update schedule", |db| db.toggle_schedule(&id)).is_some() {
                                state.touch();
                            }
                        },
                        on_delete: move |id: String| {
                            if with_db(state, "Failed to delete schedule", |db| db.delete_schedule(&id)).is_some() {
                                state.touch();
                            }
                        },
                    }
                }
                if rows.is_empty() {
                    div {
                        style: "text-align: center; padding: 32px 0; color: #6b7280;",
                        div { style: "font-size: 48px; opacity: 0.5;", "📅" }
                        p { style: "margin: 8px 0 0 0;", "No schedules yet" }
                        p { style: "margin: 4px 0 0 0; font-size: 12px;", "Click \"Add Schedule\" to create one" }
                    }
                }
            }

            // ─── Calendar ───
            div {
                style: "{CARD_STYLE}",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;",
                    button {
                        style: "padding: 8px; background: none; border: none; font-size: 20px; cursor: pointer;",
                        title: "Previous Month",
                        onclick: move |_| cursor.set(cursor().previous()),
                        "‹"
                    }
                    h3 { style: "margin: 0; font-size: 20px; font-weight: 700;", {month.title()} }
                    button {
                        style: "padding: 8px; background: none; border: none; font-size: 20px; cursor: pointer;",
                        title: "Next Month",
                        onclick: move |_| cursor.set(cursor().next()),
                        "›"
                    }
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 8px; margin-bottom: 8px;",
                    for name in DAY_NAMES {
                        div { key: "{name}", style: "text-align: center; font-size: 14px; font-weight: 600; color: #4b5563; padding: 8px 0;", "{name}" }
                    }
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 8px;",
                    for (idx, cell) in cells.into_iter().enumerate() {
                        CalendarCell {
                            key: "{idx}",
                            is_today: cell.is_today(today),
                            cell: cell.clone(),
                            on_pick: move |date: NaiveDate| selected_date.set(Some(date)),
                        }
                    }
                }
                if let Some((label, names)) = selected_summary {
                    div {
                        style: "margin-top: 16px; font-size: 14px; color: #374151;",
                        strong { "{label}" }
                        if names.is_empty() {
                            span { " · no irrigation planned" }
                        } else {
                            for (idx, name) in names.into_iter().enumerate() {
                                div { key: "{idx}", style: "margin-top: 4px;", "{name}" }
                            }
                        }
                    }
                }
                div {
                    style: "margin-top: 24px; padding-top: 16px; border-top: 1px solid #e5e7eb;",
                    h4 { style: "margin: 0 0 12px 0; font-size: 14px; font-weight: 600; color: #374151;", "Schedule Legend" }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 16px;",
                        for (id, color, area) in legend {
                            div {
                                key: "{id}",
                                style: "display: flex; align-items: center; gap: 8px;",
                                span { style: "width: 12px; height: 12px; border-radius: 9999px; background: {color};" }
                                span { style: "font-size: 12px; color: #4b5563;", "{area}" }
                            }
                        }
                    }
                }
            }
        }

        div {
            style: "background: #f0fdf4; border: 1px solid #bbf7d0; padding: 24px; border-radius: 8px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;", "Smart Scheduling Tips" }
            ul {
                style: "list-style: none; margin: 0; padding: 0; font-size: 14px; color: #374151;",
                li { style: "margin-bottom: 8px;", span { style: "color: #16a34a; font-weight: 700;", "✓ " } "Best watering times are early morning (6-10 AM) or evening (6-8 PM) to minimize evaporation." }
                li { style: "margin-bottom: 8px;", span { style: "color: #2563eb; font-weight: 700;", "ℹ " } "Consider weather forecasts - skip scheduled irrigation when rain is expected." }
                li { span { style: "color: #9333ea; font-weight: 700;", "💡 " } "Rotate irrigation times weekly to ensure even water distribution across all areas." }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ScheduleRowProps {
    schedule: ScheduleEntry,
    on_toggle: EventHandler<String>,
    on_delete: EventHandler<String>,
}

#[component]
fn ScheduleRow(props: ScheduleRowProps) -> Element {
    let schedule = props.schedule;
    let (border, bg) = if schedule.active {
        ("#3b82f6", "#eff6ff")
    } else {
        ("#e5e7eb", "#fff")
    };
    let (check_color, check_title) = if schedule.active {
        ("#16a34a", "Active")
    } else {
        ("#9ca3af", "Inactive")
    };
    let toggle_id = schedule.id.clone();
    let delete_id = schedule.id.clone();
    let time = schedule.time_label();
    let color = schedule.color.hex();
    let days = schedule.days.len();

    rsx! {
        div {
            style: "border: 2px solid {border}; background: {bg}; border-radius: 8px; padding: 16px; margin-bottom: 12px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 8px;",
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span { style: "width: 12px; height: 12px; border-radius: 9999px; background: {color};" }
                    span { style: "font-weight: 600; color: #1f2937;", "{time}" }
                }
                div {
                    style: "display: flex; gap: 4px;",
                    button {
                        style: "padding: 4px; background: none; border: none; cursor: pointer; color: {check_color};",
                        title: "{check_title}",
                        onclick: move |_| props.on_toggle.call(toggle_id.clone()),
                        "✔"
                    }
                    button {
                        style: "padding: 4px; background: none; border: none; cursor: pointer; color: #dc2626;",
                        title: "Delete",
                        onclick: move |_| props.on_delete.call(delete_id.clone()),
                        "🗑"
                    }
                }
            }
            div { style: "font-size: 14px; color: #4b5563; margin-bottom: 4px;", "{schedule.title}" }
            div {
                style: "display: flex; gap: 16px; font-size: 12px; color: #6b7280;",
                span { "{schedule.duration_minutes} min" }
                span { "{days} days/week" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CalendarCellProps {
    cell: CalendarDay,
    is_today: bool,
    on_pick: EventHandler<NaiveDate>,
}

#[component]
fn CalendarCell(props: CalendarCellProps) -> Element {
    let cell = props.cell;
    let background = if props.is_today {
        "#eff6ff"
    } else if cell.in_current_month {
        "#fff"
    } else {
        "#f9fafb"
    };
    let border = if props.is_today { "#3b82f6" } else { "#e5e7eb" };
    let opacity = if cell.in_current_month { "1" } else { "0.5" };
    let number_color = if props.is_today { "#2563eb" } else { "#374151" };
    let weight = if props.is_today { "700" } else { "400" };
    let markers: Vec<(String, &'static str, String)> = cell
        .visible_schedules()
        .iter()
        .map(|s| (s.id.clone(), s.color.hex(), s.title.clone()))
        .collect();
    let overflow = cell.overflow();
    let date = cell.date();

    rsx! {
        div {
            style: "aspect-ratio: 1; border: 1px solid {border}; border-radius: 8px; padding: 8px; background: {background}; opacity: {opacity}; cursor: pointer;",
            onclick: move |_| {
                if let Some(date) = date {
                    props.on_pick.call(date);
                }
            },
            div { style: "font-size: 14px; color: {number_color}; font-weight: {weight};", "{cell.day}" }
            div {
                style: "margin-top: 4px; display: flex; flex-direction: column; gap: 4px;",
                for (id, color, title) in markers {
                    div { key: "{id}", style: "width: 100%; height: 4px; border-radius: 4px; background: {color};", title: "{title}" }
                }
                if overflow > 0 {
                    div { style: "font-size: 12px; color: #6b7280;", "+{overflow}" }
                }
            }
        }
    }
}

#[component]
fn AddScheduleForm(on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let mut draft = use_signal(blank_draft);
    let mut form_error = use_signal(|| None::<String>);

    let current = draft();
    let input_style = "width: 100%; padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 8px; box-sizing: border-box;";
    let label_style = "display: block; font-size: 14px; font-weight: 500; color: #374151; margin-bottom: 4px;";

    let submit = move |_: MouseEvent| {
        let candidate = draft();
        let Some(db) = state.db.peek().clone() else {
            return;
        };
        match db.add_schedule(candidate) {
            Ok(entry) => {
                log::info!("schedule {} added: {}", entry.id, entry.title);
                draft.set(blank_draft());
                form_error.set(None);
                on_saved.call(());
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    rsx! {
        div {
            style: "{CARD_STYLE} margin-bottom: 24px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                h3 { style: "margin: 0; font-size: 18px; font-weight: 600;", "New Schedule" }
                button {
                    style: "background: none; border: none; font-size: 18px; cursor: pointer;",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            if let Some(err) = form_error() {
                div { style: "margin-bottom: 12px; color: #c62828; font-size: 14px;", "{err}" }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px;",
                div {
                    label { style: "{label_style}", "Title" }
                    input {
                        style: "{input_style}",
                        r#type: "text",
                        placeholder: "Morning Irrigation - Area 1",
                        value: "{current.title}",
                        oninput: move |evt: Event<FormData>| draft.write().title = evt.value(),
                    }
                }
                div {
                    label { style: "{label_style}", "Area" }
                    select {
                        style: "{input_style}",
                        onchange: move |evt: Event<FormData>| draft.write().area = evt.value(),
                        for area in AREA_OPTIONS {
                            option { key: "{area}", value: "{area}", selected: current.area == area, "{area}" }
                        }
                    }
                }
                div {
                    label { style: "{label_style}", "Time" }
                    input {
                        style: "{input_style}",
                        r#type: "time",
                        value: "{current.time}",
                        oninput: move |evt: Event<FormData>| draft.write().time = evt.value(),
                    }
                }
                div {
                    label { style: "{label_style}", "Duration (minutes)" }
                    input {
                        style: "{input_style}",
                        r#type: "number",
                        min: "1",
                        value: "{current.duration_minutes}",
                        oninput: move |evt: Event<FormData>| {
                            draft.write().duration_minutes = evt.value().parse().unwrap_or(0);
                        },
                    }
                }
                div {
                    label { style: "{label_style}", "Color" }
                    select {
                        style: "{input_style}",
                        onchange: move |evt: Event<FormData>| {
                            if let Ok(color) = ColorTag::from_str(&evt.value()) {
                                draft.write().color = color;
                            }
                        },
                        for (name, color) in ColorTag::ALL.map(|c| (c.label(), c)) {
                            option { key: "{name}", value: "{name}", selected: current.color == color, "{name}" }
                        }
                    }
                }
            }
            div {
                style: "margin-top: 16px;",
                label { style: "{label_style}", "Days" }
                div {
                    style: "display: flex; gap: 8px; flex-wrap: wrap;",
                    for (idx, name) in DAY_NAMES.into_iter().enumerate() {
                        DayToggle {
                            key: "{name}",
                            name: name,
                            selected: current.days.contains(&(idx as u8)),
                            on_click: move |_| {
                                let day = idx as u8;
                                let mut d = draft.write();
                                if let Some(pos) = d.days.iter().position(|&x| x == day) {
                                    d.days.remove(pos);
                                } else {
                                    d.days.push(day);
                                    d.days.sort_unstable();
                                }
                            },
                        }
                    }
                }
            }
            div {
                style: "display: flex; justify-content: flex-end; gap: 12px; margin-top: 20px;",
                button {
                    style: "padding: 8px 16px; background: #f3f4f6; border: none; border-radius: 8px; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    style: "padding: 8px 16px; background: #2563eb; color: #fff; border: none; border-radius: 8px; cursor: pointer;",
                    onclick: submit,
                    "Save Schedule"
                }
            }
        }
    }
}

#[component]
fn DayToggle(name: &'static str, selected: bool, on_click: EventHandler<()>) -> Element {
    let (bg, fg) = if selected { ("#2563eb", "#fff") } else { ("#f3f4f6", "#374151") };
    rsx! {
        button {
            style: "padding: 6px 12px; border: none; border-radius: 9999px; background: {bg}; color: {fg}; cursor: pointer;",
            onclick: move |_| on_click.call(()),
            "{name}"
        }
    }
}
