//! Summary card: label, big value, optional footnote.

use super::CARD_STYLE;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub label: String,
    pub value: String,
    #[props(default = String::new())]
    pub icon: String,
    #[props(default = String::new())]
    pub note: String,
    #[props(default = "#4b5563".to_string())]
    pub note_color: String,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            style: "{CARD_STYLE}",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                span { style: "color: #4b5563; font-size: 14px;", "{props.label}" }
                span { "{props.icon}" }
            }
            div { style: "font-size: 30px; font-weight: 700; color: #1f2937;", "{props.value}" }
            if !props.note.is_empty() {
                div { style: "font-size: 14px; margin-top: 8px; color: {props.note_color};", "{props.note}" }
            }
        }
    }
}
