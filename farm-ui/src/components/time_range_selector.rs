//! Today / This Week / This Month picker.

use dioxus::prelude::*;
use farm_core::area::TimeRange;

#[component]
pub fn TimeRangeSelector(selected: TimeRange, on_change: EventHandler<TimeRange>) -> Element {
    rsx! {
        select {
            style: "padding: 8px 16px; border: 1px solid #d1d5db; border-radius: 8px;",
            aria_label: "Select time range",
            onchange: move |evt: Event<FormData>| on_change.call(TimeRange::from_id(&evt.value())),
            for range in TimeRange::ALL {
                option {
                    value: "{range.id()}",
                    selected: range == selected,
                    "{range.label()}"
                }
            }
        }
    }
}
