//! Card-wrapped container for a D3 chart.

use super::CARD_STYLE;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id D3 renders into
    pub id: String,
    #[props(default = String::new())]
    pub title: String,
    #[props(default = 300)]
    pub min_height: u32,
    #[props(default = false)]
    pub loading: bool,
}

/// A card with an optional title and a div for a D3 chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{CARD_STYLE}",
            if !props.title.is_empty() {
                h3 { style: "margin: 0 0 12px 0; font-size: 16px; font-weight: 600;", "{props.title}" }
            }
            div {
                style: "{style}",
                if props.loading {
                    div {
                        style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                        "Loading chart..."
                    }
                }
                div { id: "{props.id}", style: "width: 100%;" }
            }
        }
    }
}
