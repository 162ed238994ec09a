//! Reusable Dioxus RSX components shared by the dashboard pages.

mod area_selector;
mod chart_container;
mod chart_header;
mod error_display;
mod header;
mod loading_spinner;
mod progress_ring;
mod sidebar;
mod stat_card;
mod status_badge;
mod time_range_selector;

pub use area_selector::AreaSelector;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use header::Header;
pub use loading_spinner::LoadingSpinner;
pub use progress_ring::ProgressRing;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use status_badge::{status_colors, StatusBadge};
pub use time_range_selector::TimeRangeSelector;

/// Inline style shared by white page cards.
pub const CARD_STYLE: &str =
    "background: #fff; padding: 20px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);";
