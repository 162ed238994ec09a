//! Dropdown for choosing an area.

use dioxus::prelude::*;
use farm_core::area::AreaReading;

#[derive(Props, Clone, PartialEq)]
pub struct AreaSelectorProps {
    pub areas: Vec<AreaReading>,
    pub selected: String,
    pub on_select: EventHandler<String>,
}

#[component]
pub fn AreaSelector(props: AreaSelectorProps) -> Element {
    rsx! {
        select {
            style: "padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 8px;",
            aria_label: "Select area",
            onchange: move |evt: Event<FormData>| props.on_select.call(evt.value()),
            for area in props.areas.iter() {
                option {
                    key: "{area.area_id}",
                    value: "{area.area_id}",
                    selected: area.area_id == props.selected,
                    "{area.name}"
                }
            }
        }
    }
}
