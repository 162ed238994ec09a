//! Account and system preferences.
//!
//! The form lives in a single `SettingsForm` signal. Nothing is persisted;
//! saving logs the form and confirms through a browser alert.

use dioxus::prelude::*;
use farm_core::settings::{
    NotificationToggle, SettingsForm, SettingsTab, Units, LANGUAGES, TIMEZONES,
};
use farm_ui::components::{ChartHeader, CARD_STYLE};
use farm_ui::js_bridge;

const INPUT_STYLE: &str =
    "width: 100%; padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 8px; box-sizing: border-box;";
const LABEL_STYLE: &str = "display: block; margin-bottom: 6px; font-size: 14px; font-weight: 500; color: #374151;";
const ROW_STYLE: &str =
    "display: flex; justify-content: space-between; align-items: center; padding: 16px 0; border-bottom: 1px solid #f3f4f6;";

#[component]
pub fn Settings() -> Element {
    let mut form = use_signal(SettingsForm::default);
    let active = form.read().tab;

    rsx! {
        ChartHeader {
            title: "Settings".to_string(),
            subtitle: "Manage your account and system preferences".to_string(),
        }

        div {
            style: "display: grid; grid-template-columns: 220px 1fr; gap: 24px; align-items: start;",
            nav {
                style: "{CARD_STYLE} padding: 8px;",
                for (tab, label) in SettingsTab::ALL.map(|t| (t, t.label())) {
                    button {
                        key: "{label}",
                        style: if tab == active {
                            "display: block; width: 100%; text-align: left; padding: 10px 16px; border: none; border-radius: 6px; background: #dcfce7; color: #166534; font-weight: 600; cursor: pointer;"
                        } else {
                            "display: block; width: 100%; text-align: left; padding: 10px 16px; border: none; border-radius: 6px; background: none; color: #374151; cursor: pointer;"
                        },
                        onclick: move |_| form.write().tab = tab,
                        "{label}"
                    }
                }
            }

            div {
                style: "{CARD_STYLE} padding: 24px;",
                match active {
                    SettingsTab::Profile => rsx! { ProfileTab { form } },
                    SettingsTab::Notifications => rsx! { NotificationsTab { form } },
                    SettingsTab::Security => rsx! { SecurityTab {} },
                    SettingsTab::System => rsx! { SystemTab { form } },
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 12px; margin-top: 24px; padding-top: 16px; border-top: 1px solid #e5e7eb;",
                    button {
                        style: "padding: 8px 16px; background: #fff; border: 1px solid #d1d5db; border-radius: 8px; cursor: pointer;",
                        onclick: move |_| {
                            let tab = form.peek().tab;
                            form.set(SettingsForm { tab, ..SettingsForm::default() });
                        },
                        "Cancel"
                    }
                    button {
                        style: "padding: 8px 16px; background: #16a34a; color: #fff; border: none; border-radius: 8px; font-weight: 500; cursor: pointer;",
                        onclick: move |_| js_bridge::alert(form.read().save()),
                        "Save Changes"
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileTab(form: Signal<SettingsForm>) -> Element {
    let mut form = form;
    let profile = form.read().profile.clone();

    rsx! {
        h2 { style: "margin: 0 0 24px 0; font-size: 20px; font-weight: 600;", "Profile Information" }
        div {
            style: "display: flex; align-items: center; gap: 16px; margin-bottom: 24px;",
            div {
                style: "width: 80px; height: 80px; border-radius: 9999px; background: #16a34a; color: #fff; display: flex; align-items: center; justify-content: center; font-size: 28px; font-weight: 700;",
                {initials(&profile.first_name, &profile.last_name)}
            }
            button {
                style: "padding: 8px 16px; background: #fff; border: 1px solid #d1d5db; border-radius: 8px; cursor: pointer;",
                "Change Photo"
            }
        }
        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
            TextField { label: "First Name", value: profile.first_name, on_input: move |v| form.write().profile.first_name = v }
            TextField { label: "Last Name", value: profile.last_name, on_input: move |v| form.write().profile.last_name = v }
            TextField { label: "Email", kind: "email", value: profile.email, on_input: move |v| form.write().profile.email = v }
            TextField { label: "Phone", kind: "tel", value: profile.phone, on_input: move |v| form.write().profile.phone = v }
            TextField { label: "Location", value: profile.location, on_input: move |v| form.write().profile.location = v }
            TextField { label: "Organization", value: profile.organization, on_input: move |v| form.write().profile.organization = v }
        }
    }
}

fn initials(first: &str, last: &str) -> String {
    [first, last]
        .iter()
        .filter_map(|s| s.chars().next())
        .collect::<String>()
        .to_uppercase()
}

#[component]
fn TextField(
    label: &'static str,
    value: String,
    #[props(default = "text")] kind: &'static str,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { style: "{LABEL_STYLE}", "{label}" }
            input {
                r#type: kind,
                aria_label: label,
                value: "{value}",
                style: "{INPUT_STYLE}",
                oninput: move |evt: Event<FormData>| on_input.call(evt.value()),
            }
        }
    }
}

#[component]
fn NotificationsTab(form: Signal<SettingsForm>) -> Element {
    let mut form = form;
    let prefs = form.read().notifications;
    let rows = |channel: bool| -> Vec<(NotificationToggle, &'static str, &'static str, bool)> {
        NotificationToggle::ALL
            .into_iter()
            .filter(|t| t.is_channel() == channel)
            .map(|t| (t, t.label(), t.description(), prefs.get(t)))
            .collect()
    };
    let channels = rows(true);
    let alerts = rows(false);

    rsx! {
        h2 { style: "margin: 0 0 8px 0; font-size: 20px; font-weight: 600;", "Notification Channels" }
        for (toggle, label, description, enabled) in channels {
            ToggleRow {
                key: "{label}",
                label,
                description,
                enabled,
                on_click: move |_| form.write().notifications.flip(toggle),
            }
        }
        h2 { style: "margin: 32px 0 8px 0; font-size: 20px; font-weight: 600;", "Alert Types" }
        for (toggle, label, description, enabled) in alerts {
            ToggleRow {
                key: "{label}",
                label,
                description,
                enabled,
                on_click: move |_| form.write().notifications.flip(toggle),
            }
        }
    }
}

#[component]
fn SecurityTab() -> Element {
    rsx! {
        h2 { style: "margin: 0 0 24px 0; font-size: 20px; font-weight: 600;", "Change Password" }
        div {
            style: "display: flex; flex-direction: column; gap: 16px; max-width: 420px;",
            for field in ["Current Password", "New Password", "Confirm New Password"] {
                div {
                    key: "{field}",
                    label { style: "{LABEL_STYLE}", "{field}" }
                    input { r#type: "password", aria_label: field, style: "{INPUT_STYLE}" }
                }
            }
        }

        div {
            style: "{ROW_STYLE} margin-top: 24px;",
            div {
                div { style: "font-weight: 600; color: #1f2937;", "Two-Factor Authentication" }
                div { style: "font-size: 14px; color: #6b7280;", "Add extra security layer" }
            }
            button {
                style: "padding: 8px 16px; background: #16a34a; color: #fff; border: none; border-radius: 8px; cursor: pointer;",
                "Enable"
            }
        }

        h3 { style: "margin: 24px 0 12px 0; font-size: 18px; font-weight: 600;", "Active Sessions" }
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; background: #f9fafb; border-radius: 8px;",
            div {
                div { style: "font-weight: 500; color: #1f2937;", "Windows • Chrome • Dagupan, PH" }
                div { style: "font-size: 13px; color: #16a34a;", "Current session" }
            }
            span { style: "font-size: 13px; color: #6b7280;", "Active now" }
        }
    }
}

#[component]
fn SystemTab(form: Signal<SettingsForm>) -> Element {
    let mut form = form;
    let system = form.read().system.clone();
    let switches = [
        ("Auto Irrigation", "Water automatically when soil moisture drops", system.auto_irrigation),
        ("Water Saving Mode", "Reduce irrigation when rain is expected", system.water_saving),
        ("Weather Integration", "Use forecasts to adjust schedules", system.weather_integration),
    ];

    rsx! {
        h2 { style: "margin: 0 0 8px 0; font-size: 20px; font-weight: 600;", "System Preferences" }
        for (idx, (label, description, enabled)) in switches.into_iter().enumerate() {
            ToggleRow {
                key: "{label}",
                label,
                description,
                enabled,
                on_click: move |_| {
                    let mut f = form.write();
                    match idx {
                        0 => f.system.auto_irrigation = !f.system.auto_irrigation,
                        1 => f.system.water_saving = !f.system.water_saving,
                        _ => f.system.weather_integration = !f.system.weather_integration,
                    }
                },
            }
        }

        div {
            style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-top: 24px;",
            div {
                label { style: "{LABEL_STYLE}", "Timezone" }
                select {
                    style: "{INPUT_STYLE}",
                    aria_label: "Timezone",
                    onchange: move |evt: Event<FormData>| form.write().system.timezone = evt.value(),
                    for (value, name) in TIMEZONES {
                        option { key: "{value}", value, selected: system.timezone == value, "{name}" }
                    }
                }
            }
            div {
                label { style: "{LABEL_STYLE}", "Language" }
                select {
                    style: "{INPUT_STYLE}",
                    aria_label: "Language",
                    onchange: move |evt: Event<FormData>| form.write().system.language = evt.value(),
                    for language in LANGUAGES {
                        option { key: "{language}", value: language, selected: system.language == language, "{language}" }
                    }
                }
            }
            div {
                label { style: "{LABEL_STYLE}", "Units" }
                select {
                    style: "{INPUT_STYLE}",
                    aria_label: "Units",
                    onchange: move |evt: Event<FormData>| form.write().system.units = Units::from_id(&evt.value()),
                    for (units, id, name) in [Units::Metric, Units::Imperial].map(|u| (u, u.id(), u.label())) {
                        option { key: "{id}", value: id, selected: system.units == units, "{name}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ToggleRow(
    label: &'static str,
    description: &'static str,
    enabled: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let (track, knob) = if enabled { ("#16a34a", "22px") } else { ("#d1d5db", "2px") };
    rsx! {
        div {
            style: "{ROW_STYLE}",
            div {
                div { style: "font-weight: 600; color: #1f2937;", "{label}" }
                div { style: "font-size: 14px; color: #6b7280;", "{description}" }
            }
            button {
                role: "switch",
                aria_checked: "{enabled}",
                aria_label: label,
                style: "position: relative; width: 44px; height: 24px; border: none; border-radius: 9999px; background: {track}; cursor: pointer; transition: background 0.2s;",
                onclick: move |evt| on_click.call(evt),
                span { style: "position: absolute; top: 2px; left: {knob}; width: 20px; height: 20px; border-radius: 9999px; background: #fff; transition: left 0.2s;" }
            }
        }
    }
}
