//! Coloured pill for a reading status.

use dioxus::prelude::*;
use farm_core::area::ReadingStatus;

/// (background, text) colours for a status.
pub fn status_colors(status: ReadingStatus) -> (&'static str, &'static str) {
    match status {
        ReadingStatus::Optimal | ReadingStatus::Normal => ("#dcfce7", "#166534"),
        ReadingStatus::Low | ReadingStatus::Dry => ("#fef9c3", "#854d0e"),
        ReadingStatus::High | ReadingStatus::Cold | ReadingStatus::Humid => ("#dbeafe", "#1e40af"),
        ReadingStatus::Hot => ("#fee2e2", "#991b1b"),
    }
}

#[component]
pub fn StatusBadge(status: ReadingStatus) -> Element {
    let (bg, fg) = status_colors(status);
    rsx! {
        span {
            style: "padding: 2px 10px; border-radius: 9999px; font-size: 12px; font-weight: 500; background: {bg}; color: {fg}; text-transform: capitalize;",
            "{status.label()}"
        }
    }
}
