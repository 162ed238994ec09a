//! User accounts table with search and bulk selection.

use super::with_db;
use dioxus::prelude::*;
use farm_core::repository::UserRepository;
use farm_core::user::{all_selected, search, select_all_target, Role, UserAccount};
use farm_ui::components::{ChartHeader, CARD_STYLE};
use farm_ui::state::AppState;
use farm_utils::dates::format_long_date;

const HEADER_CELL: &str =
    "padding: 12px 24px; text-align: left; font-size: 12px; font-weight: 600; color: #6b7280; text-transform: uppercase;";
const BODY_CELL: &str = "padding: 16px 24px; border-top: 1px solid #f3f4f6; font-size: 14px; color: #374151;";

fn role_colors(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Admin => ("#f3e8ff", "#6b21a8"),
        Role::User => ("#dbeafe", "#1e40af"),
        Role::Viewer => ("#f3f4f6", "#374151"),
    }
}

#[component]
pub fn Users() -> Element {
    let mut state = use_context::<AppState>();
    let mut users = use_signal(Vec::<UserAccount>::new);
    let mut query = use_signal(String::new);

    use_effect(move || {
        let _ = (state.revision)();
        if let Some(rows) = with_db(state, "Failed to load users", |db| db.users()) {
            users.set(rows);
        }
    });

    let all = users.read().clone();
    let header_checked = all_selected(&all);
    let q = query();
    let visible: Vec<UserAccount> = search(&all, &q).into_iter().cloned().collect();
    let no_matches = visible.is_empty();
    let selected_count = all.iter().filter(|u| u.selected).count();

    rsx! {
        ChartHeader {
            title: "Users Management".to_string(),
            subtitle: "Manage user accounts and permissions".to_string(),
            button {
                style: "padding: 8px 16px; background: #16a34a; color: #fff; border: none; border-radius: 8px; font-weight: 500; cursor: pointer;",
                "+ Add User"
            }
        }

        div {
            style: "{CARD_STYLE} padding: 0; overflow: hidden;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 16px 24px; gap: 16px;",
                input {
                    r#type: "search",
                    placeholder: "Search by name or email...",
                    aria_label: "Search users",
                    value: "{q}",
                    style: "flex: 1; max-width: 360px; padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 8px;",
                    oninput: move |evt: Event<FormData>| query.set(evt.value()),
                }
                if selected_count > 0 {
                    span { style: "font-size: 14px; color: #4b5563;", "{selected_count} selected" }
                }
            }

            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    style: "background: #f9fafb;",
                    tr {
                        th {
                            style: "{HEADER_CELL} width: 48px;",
                            input {
                                r#type: "checkbox",
                                aria_label: "Select all users",
                                checked: header_checked,
                                onchange: move |_| {
                                    let target = select_all_target(&users.peek());
                                    if with_db(state, "Failed to update selection", |db| db.set_all_selected(target)).is_some() {
                                        state.touch();
                                    }
                                },
                            }
                        }
                        th { style: "{HEADER_CELL}", "User Information" }
                        th { style: "{HEADER_CELL}", "Last Active" }
                        th { style: "{HEADER_CELL}", "Date Added" }
                        th { style: "{HEADER_CELL} text-align: right;", "Actions" }
                    }
                }
                tbody {
                    for user in visible {
                        UserRow {
                            key: "{user.id}",
                            user: user.clone(),
                            on_toggle: move |id: String| {
                                if with_db(state, "Failed to update selection", |db| db.toggle_user_selection(&id)).is_some() {
                                    state.touch();
                                }
                            },
                        }
                    }
                }
            }

            if no_matches {
                div {
                    style: "padding: 32px; text-align: center; color: #6b7280; font-size: 14px;",
                    "No users match \"{q}\""
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct UserRowProps {
    user: UserAccount,
    on_toggle: EventHandler<String>,
}

#[component]
fn UserRow(props: UserRowProps) -> Element {
    let user = props.user;
    let (bg, fg) = role_colors(user.role);
    let role = user.role.label();
    let initials = user.initials();
    let name = user.display_name();
    let last_active = format_long_date(&user.last_active);
    let added = format_long_date(&user.created_at);
    let row_bg = if user.selected { "#f0fdf4" } else { "#fff" };
    let id = user.id.clone();

    rsx! {
        tr {
            style: "background: {row_bg};",
            td {
                style: "{BODY_CELL}",
                input {
                    r#type: "checkbox",
                    aria_label: "Select {name}",
                    checked: user.selected,
                    onchange: move |_| props.on_toggle.call(id.clone()),
                }
            }
            td {
                style: "{BODY_CELL}",
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    div {
                        style: "width: 40px; height: 40px; border-radius: 9999px; background: #16a34a; color: #fff; display: flex; align-items: center; justify-content: center; font-weight: 600;",
                        "{initials}"
                    }
                    div {
                        div {
                            style: "display: flex; align-items: center; gap: 8px;",
                            span { style: "font-weight: 600; color: #1f2937;", "{name}" }
                            span {
                                style: "padding: 2px 8px; border-radius: 9999px; font-size: 11px; font-weight: 600; background: {bg}; color: {fg};",
                                "{role}"
                            }
                        }
                        div { style: "font-size: 13px; color: #6b7280;", "{user.email}" }
                    }
                }
            }
            td { style: "{BODY_CELL}", "{last_active}" }
            td { style: "{BODY_CELL}", "{added}" }
            td {
                style: "{BODY_CELL} text-align: right;",
                button {
                    style: "padding: 6px 12px; background: none; border: 1px solid #d1d5db; border-radius: 6px; cursor: pointer; color: #374151;",
                    aria_label: "Actions for {name}",
                    "⋯"
                }
            }
        }
    }
}
