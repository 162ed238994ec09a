//! Top bar with the sidebar toggle, a search box and action icons.

use crate::view::ViewState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    pub view: ViewState,
    pub on_toggle_sidebar: EventHandler<()>,
}

#[component]
pub fn Header(props: HeaderProps) -> Element {
    let tooltip = props.view.toggle_tooltip();
    let icon_button = "padding: 8px; background: none; border: none; border-radius: 4px; cursor: pointer; font-size: 18px;";

    rsx! {
        header {
            style: "background: #fff; border-bottom: 1px solid #e5e7eb; padding: 16px 24px; display: flex; align-items: center; justify-content: space-between;",
            div {
                style: "display: flex; align-items: center; gap: 16px;",
                button {
                    style: "{icon_button}",
                    title: "{tooltip}",
                    onclick: move |_| props.on_toggle_sidebar.call(()),
                    "☰"
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px; max-width: 28rem;",
                    span { style: "color: #9ca3af;", "🔍" }
                    input {
                        r#type: "text",
                        placeholder: "Search",
                        style: "flex: 1; border: none; outline: none; font-size: 14px;",
                    }
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 16px;",
                button { style: "{icon_button}", title: "Download", "⬇" }
                button { style: "{icon_button}", title: "Messages", "✉" }
                button { style: "{icon_button}", title: "Notifications", "🔔" }
                button { style: "{icon_button}", title: "Profile", "👤" }
            }
        }
    }
}
