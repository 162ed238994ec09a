//! Settings page form state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Security,
    System,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Security,
        SettingsTab::System,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Security => "Security",
            SettingsTab::System => "System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub organization: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@gmail.com".to_string(),
            phone: "+63 917 123 4567".to_string(),
            location: "Dagupan, Pangasinan".to_string(),
            organization: "Smart Farms Inc.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
    pub weather_alerts: bool,
    pub low_moisture: bool,
    pub schedule_reminders: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            push: true,
            weather_alerts: true,
            low_moisture: true,
            schedule_reminders: true,
        }
    }
}

/// Switchable notification channels and alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationToggle {
    Email,
    Sms,
    Push,
    WeatherAlerts,
    LowMoisture,
    ScheduleReminders,
}

impl NotificationToggle {
    pub const ALL: [NotificationToggle; 6] = [
        NotificationToggle::Email,
        NotificationToggle::Sms,
        NotificationToggle::Push,
        NotificationToggle::WeatherAlerts,
        NotificationToggle::LowMoisture,
        NotificationToggle::ScheduleReminders,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationToggle::Email => "Email Notifications",
            NotificationToggle::Sms => "SMS Notifications",
            NotificationToggle::Push => "Push Notifications",
            NotificationToggle::WeatherAlerts => "Weather Alerts",
            NotificationToggle::LowMoisture => "Low Moisture Alerts",
            NotificationToggle::ScheduleReminders => "Schedule Reminders",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NotificationToggle::Email => "Receive alerts via email",
            NotificationToggle::Sms => "Receive alerts via SMS",
            NotificationToggle::Push => "Receive in-app notifications",
            NotificationToggle::WeatherAlerts => "Get notified about severe weather",
            NotificationToggle::LowMoisture => "Alert when soil moisture is low",
            NotificationToggle::ScheduleReminders => "Remind me of upcoming irrigation",
        }
    }

    /// Channels come first, then alert kinds.
    pub fn is_channel(&self) -> bool {
        matches!(
            self,
            NotificationToggle::Email | NotificationToggle::Sms | NotificationToggle::Push
        )
    }
}

/// (value, label) pairs for the timezone picker.
pub const TIMEZONES: [(&str, &str); 3] = [
    ("Asia/Manila", "Asia/Manila (GMT+8)"),
    ("Asia/Tokyo", "Asia/Tokyo (GMT+9)"),
    ("UTC", "UTC (GMT+0)"),
];

pub const LANGUAGES: [&str; 3] = ["English", "Filipino", "Spanish"];

impl NotificationPreferences {
    pub fn get(&self, toggle: NotificationToggle) -> bool {
        match toggle {
            NotificationToggle::Email => self.email,
            NotificationToggle::Sms => self.sms,
            NotificationToggle::Push => self.push,
            NotificationToggle::WeatherAlerts => self.weather_alerts,
            NotificationToggle::LowMoisture => self.low_moisture,
            NotificationToggle::ScheduleReminders => self.schedule_reminders,
        }
    }

    pub fn flip(&mut self, toggle: NotificationToggle) {
        let slot = match toggle {
            NotificationToggle::Email => &mut self.email,
            NotificationToggle::Sms => &mut self.sms,
            NotificationToggle::Push => &mut self.push,
            NotificationToggle::WeatherAlerts => &mut self.weather_alerts,
            NotificationToggle::LowMoisture => &mut self.low_moisture,
            NotificationToggle::ScheduleReminders => &mut self.schedule_reminders,
        };
        *slot = !*slot;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn id(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Units::Metric => "Metric (°C, mm)",
            Units::Imperial => "Imperial (°F, inches)",
        }
    }

    pub fn from_id(id: &str) -> Units {
        if id == "imperial" {
            Units::Imperial
        } else {
            Units::Metric
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPreferences {
    pub auto_irrigation: bool,
    pub water_saving: bool,
    pub weather_integration: bool,
    pub timezone: String,
    pub language: String,
    pub units: Units,
}

impl Default for SystemPreferences {
    fn default() -> Self {
        Self {
            auto_irrigation: true,
            water_saving: true,
            weather_integration: true,
            timezone: "Asia/Manila".to_string(),
            language: "English".to_string(),
            units: Units::Metric,
        }
    }
}

/// Everything the settings page edits.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsForm {
    pub tab: SettingsTab,
    pub profile: Profile,
    pub notifications: NotificationPreferences,
    pub system: SystemPreferences,
}

/// Message shown after saving.
pub const SAVE_CONFIRMATION: &str = "Settings saved successfully!";

impl SettingsForm {
    /// Saving has no backing store; it always reports success.
    pub fn save(&self) -> &'static str {
        log::info!(
            "settings: saved profile for {} (units: {:?})",
            self.profile.email,
            self.system.units
        );
        SAVE_CONFIRMATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = SettingsForm::default();
        assert_eq!(form.tab, SettingsTab::Profile);
        assert!(form.notifications.email);
        assert!(!form.notifications.sms);
        assert_eq!(form.system.timezone, "Asia/Manila");
    }

    #[test]
    fn test_flip_notification() {
        let mut prefs = NotificationPreferences::default();
        prefs.flip(NotificationToggle::Sms);
        assert!(prefs.get(NotificationToggle::Sms));
        prefs.flip(NotificationToggle::Sms);
        assert!(!prefs.get(NotificationToggle::Sms));
    }

    #[test]
    fn test_save_always_succeeds() {
        let mut form = SettingsForm::default();
        form.profile.email.clear();
        assert_eq!(form.save(), SAVE_CONFIRMATION);
    }
}
