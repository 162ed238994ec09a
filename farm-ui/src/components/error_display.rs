//! Error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Called when the banner is dismissed; no close button when absent.
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; display: flex; justify-content: space-between;",
            span {
                strong { "Error: " }
                "{props.message}"
            }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    style: "background: none; border: none; color: inherit; cursor: pointer;",
                    title: "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    "✕"
                }
            }
        }
    }
}
