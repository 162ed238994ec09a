//! Page title row with subtitle and an optional right-hand slot.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
    /// Controls rendered on the right (selectors, buttons)
    pub children: Element,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; gap: 12px; flex-wrap: wrap;",
            div {
                h1 { style: "margin: 0; font-size: 24px; font-weight: 700; color: #1f2937;", "{props.title}" }
                if !props.subtitle.is_empty() {
                    p { style: "margin: 4px 0 0 0; font-size: 14px; color: #4b5563;", "{props.subtitle}" }
                }
            }
            div { style: "display: flex; gap: 12px; align-items: center;", {props.children} }
        }
    }
}
