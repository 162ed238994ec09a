//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the shell's reactive signals into a single struct
//! provided via `use_context_provider`. Pages retrieve it with
//! `use_context::<AppState>()`.

use crate::view::{Page, ViewState};
use dioxus::prelude::*;
use farm_db::Database;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Active page and sidebar flag
    pub view: Signal<ViewState>,
    /// Repository (None until seeded)
    pub db: Signal<Option<Database>>,
    /// Whether the repository is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Bumped after every repository write so readers re-query.
    pub revision: Signal<u64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            view: Signal::new(ViewState::default()),
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            revision: Signal::new(0),
        }
    }

    pub fn navigate(&mut self, page: Page) {
        self.view.write().set_active_page(page);
    }

    pub fn toggle_sidebar(&mut self) {
        self.view.write().toggle_sidebar();
    }

    /// Record a repository failure for the shell to display.
    pub fn report(&mut self, context: &str, err: anyhow::Error) {
        log::error!("{}: {:#}", context, err);
        self.error_msg.set(Some(format!("{}: {}", context, err)));
    }

    /// Signal that repository data changed.
    pub fn touch(&mut self) {
        *self.revision.write() += 1;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
