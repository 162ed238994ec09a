//! Smart Farming Dashboard
//!
//! Single-page web app for monitoring cultivation areas: sensor readings,
//! weather, irrigation control and schedules, and seasonal analytics.
//!
//! Data flow:
//! 1. On mount: seed the in-memory SQLite repository from the embedded CSV
//!    fixtures and store the handle in `AppState::db`.
//! 2. The active [`Page`] picks which page component renders; each page
//!    queries the repository in its own effects and re-queries whenever
//!    `AppState::revision` is bumped by a write.
//! 3. Charts are drawn by D3.js through `farm_ui::js_bridge`.

mod pages;

use dioxus::prelude::*;
use farm_db::Database;
use farm_ui::components::{ErrorDisplay, Header, LoadingSpinner, Sidebar};
use farm_ui::js_bridge;
use farm_ui::state::AppState;
use farm_ui::view::Page;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("farm-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Seed the repository once on mount ───
    use_effect(move || {
        match Database::seeded() {
            Ok(db) => {
                log::info!("farm data loaded");
                state.db.set(Some(db));
            }
            Err(err) => state.report("Failed to load farm data", err),
        }
        state.loading.set(false);

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
    });

    let view = (state.view)();

    rsx! {
        div {
            style: "display: flex; height: 100vh; background: #f9fafb; font-family: system-ui, -apple-system, sans-serif;",

            Sidebar {
                active: view.active_page,
                open: view.sidebar_open,
                on_navigate: move |page: Page| state.navigate(page),
            }

            div {
                style: "flex: 1; display: flex; flex-direction: column; overflow: hidden;",

                Header {
                    view,
                    on_toggle_sidebar: move |_| state.toggle_sidebar(),
                }

                main {
                    style: "flex: 1; overflow-y: auto; padding: 24px;",

                    if let Some(err) = state.error_msg.read().as_ref() {
                        ErrorDisplay {
                            message: err.clone(),
                            on_dismiss: move |_| state.error_msg.set(None),
                        }
                    }

                    if *state.loading.read() {
                        LoadingSpinner {}
                    } else {
                        ActivePage { page: view.active_page }
                    }
                }
            }
        }
    }
}

/// Renders the page for the current view.
#[component]
fn ActivePage(page: Page) -> Element {
    match page {
        Page::Dashboard => rsx! { pages::Dashboard {} },
        Page::Users => rsx! { pages::Users {} },
        Page::SoilMoisture => rsx! { pages::SoilMoisture {} },
        Page::Temperature => rsx! { pages::Temperature {} },
        Page::Humidity => rsx! { pages::Humidity {} },
        Page::Weather => rsx! { pages::Weather {} },
        Page::WaterDistribution => rsx! { pages::WaterDistribution {} },
        Page::IrrigationSchedule => rsx! { pages::IrrigationSchedule {} },
        Page::PatternAnalyzer => rsx! { pages::PatternAnalyzer {} },
        Page::SeasonalSummary => rsx! { pages::SeasonalSummary {} },
        Page::Settings => rsx! { pages::Settings {} },
    }
}
