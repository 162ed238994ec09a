//! Navigation model: which page is shown and whether the sidebar is expanded.

use std::fmt;

/// Every page the shell can render.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Page {
    #[default]
    Dashboard,
    Users,
    SoilMoisture,
    Temperature,
    Humidity,
    Weather,
    WaterDistribution,
    IrrigationSchedule,
    PatternAnalyzer,
    SeasonalSummary,
    Settings,
}

/// Sidebar grouping.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Operations,
    Analytics,
    System,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Operations => "Operations",
            Section::Analytics => "Analytics & Reporting",
            Section::System => "System",
        }
    }
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 11] = [
        Page::Dashboard,
        Page::Users,
        Page::SoilMoisture,
        Page::Temperature,
        Page::Humidity,
        Page::Weather,
        Page::WaterDistribution,
        Page::IrrigationSchedule,
        Page::PatternAnalyzer,
        Page::SeasonalSummary,
        Page::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Users => "users",
            Page::SoilMoisture => "soil-moisture",
            Page::Temperature => "temperature",
            Page::Humidity => "humidity",
            Page::Weather => "weather",
            Page::WaterDistribution => "water-distribution",
            Page::IrrigationSchedule => "irrigation-schedule",
            Page::PatternAnalyzer => "pattern-analyzer",
            Page::SeasonalSummary => "seasonal-summary",
            Page::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::SoilMoisture => "Soil Moisture",
            Page::Temperature => "Temperature",
            Page::Humidity => "Humidity",
            Page::Weather => "Weather Update",
            Page::WaterDistribution => "Water Distribution",
            Page::IrrigationSchedule => "Irrigation Schedule",
            Page::PatternAnalyzer => "Pattern Analyzer",
            Page::SeasonalSummary => "Seasonal Summary",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "▦",
            Page::Users => "👤",
            Page::SoilMoisture => "💧",
            Page::Temperature => "🌡",
            Page::Humidity => "🌦",
            Page::Weather => "☁",
            Page::WaterDistribution => "🌱",
            Page::IrrigationSchedule => "📅",
            Page::PatternAnalyzer => "📈",
            Page::SeasonalSummary => "📊",
            Page::Settings => "⚙",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Page::PatternAnalyzer | Page::SeasonalSummary => Section::Analytics,
            Page::Settings => Section::System,
            _ => Section::Operations,
        }
    }

    /// Resolve a page id; anything unknown lands on the dashboard.
    pub fn from_id(id: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .unwrap_or_default()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Shell navigation state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ViewState {
    pub active_page: Page,
    pub sidebar_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_page: Page::Dashboard,
            sidebar_open: true,
        }
    }
}

impl ViewState {
    pub fn set_active_page(&mut self, page: Page) {
        if self.active_page != page {
            log::debug!("view: {} -> {}", self.active_page, page);
        }
        self.active_page = page;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Tooltip on the header's sidebar button.
    pub fn toggle_tooltip(&self) -> &'static str {
        if self.sidebar_open {
            "Collapse sidebar"
        } else {
            "Expand sidebar"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_view() {
        let view = ViewState::default();
        assert_eq!(view.active_page, Page::Dashboard);
        assert!(view.sidebar_open);
    }

    #[test]
    fn test_every_id_resolves_to_its_page() {
        let mut seen = HashSet::new();
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), page);
            assert!(seen.insert(page.id()), "duplicate id {}", page.id());
        }
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn test_unknown_id_falls_back_to_dashboard() {
        assert_eq!(Page::from_id("reports"), Page::Dashboard);
        assert_eq!(Page::from_id(""), Page::Dashboard);
        assert_eq!(Page::from_id("Settings"), Page::Dashboard);
    }

    #[test]
    fn test_set_active_page_is_unconditional() {
        let mut view = ViewState::default();
        view.set_active_page(Page::Weather);
        assert_eq!(view.active_page, Page::Weather);
        view.set_active_page(Page::Weather);
        assert_eq!(view.active_page, Page::Weather);
        assert!(view.sidebar_open);
    }

    #[test]
    fn test_sidebar_toggle_and_tooltip() {
        let mut view = ViewState::default();
        assert_eq!(view.toggle_tooltip(), "Collapse sidebar");
        view.toggle_sidebar();
        assert!(!view.sidebar_open);
        assert_eq!(view.toggle_tooltip(), "Expand sidebar");
        view.set_sidebar_open(true);
        assert!(view.sidebar_open);
    }

    #[test]
    fn test_sections() {
        assert_eq!(Page::IrrigationSchedule.section(), Section::Operations);
        assert_eq!(Page::PatternAnalyzer.section(), Section::Analytics);
        assert_eq!(Page::Settings.section(), Section::System);
        assert_eq!(Section::Analytics.title(), "Analytics & Reporting");
    }
}
