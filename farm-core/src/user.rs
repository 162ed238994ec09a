//! User accounts shown on the Users page.

use crate::error::{FarmError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
    Viewer,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Viewer => "VIEWER",
        }
    }
}

impl FromStr for Role {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            "VIEWER" => Ok(Role::Viewer),
            _ => Err(FarmError::UnknownLabel {
                field: "role",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
    pub active: bool,
    pub selected: bool,
    pub last_active: NaiveDate,
    pub created_at: NaiveDate,
}

impl UserAccount {
    /// "First Last", whichever parts exist, or the email when neither does.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }

    /// Avatar initials from the name parts, falling back to the email.
    pub fn initials(&self) -> String {
        let from_names: String = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter_map(|n| n.chars().next())
            .collect();
        if from_names.is_empty() {
            self.email.chars().next().map(|c| c.to_string()).unwrap_or_default()
        } else {
            from_names.to_uppercase()
        }
    }

    /// Case-insensitive match of `query` against email and name parts.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let hit = |field: &str| field.to_lowercase().contains(&needle);
        hit(&self.email)
            || self.first_name.as_deref().is_some_and(hit)
            || self.last_name.as_deref().is_some_and(hit)
    }
}

/// Users matching the search box, in source order.
pub fn search<'a>(users: &'a [UserAccount], query: &str) -> Vec<&'a UserAccount> {
    users.iter().filter(|u| u.matches(query)).collect()
}

/// True when there is at least one user and every user is selected.
pub fn all_selected(users: &[UserAccount]) -> bool {
    !users.is_empty() && users.iter().all(|u| u.selected)
}

/// Target of the header checkbox: clear when everything is selected, else select all.
pub fn select_all_target(users: &[UserAccount]) -> bool {
    !users.iter().all(|u| u.selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, first: Option<&str>, last: Option<&str>, selected: bool) -> UserAccount {
        UserAccount {
            id: id.to_string(),
            email: format!("user{id}@gmail.com"),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            role: Role::User,
            active: true,
            selected,
            last_active: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let users = vec![
            user("1", Some("John"), Some("Doe"), false),
            user("2", Some("Jane"), Some("Smith"), false),
        ];
        assert_eq!(search(&users, "JOHN").len(), 1);
        assert_eq!(search(&users, "smi")[0].id, "2");
        assert_eq!(search(&users, "gmail").len(), 2);
        assert_eq!(search(&users, "").len(), 2);
        assert!(search(&users, "zzz").is_empty());
    }

    #[test]
    fn test_select_all_target() {
        let mut users = vec![
            user("1", None, None, true),
            user("2", None, None, false),
        ];
        assert!(select_all_target(&users));
        assert!(!all_selected(&users));
        users[1].selected = true;
        assert!(all_selected(&users));
        assert!(!select_all_target(&users));
        assert!(!all_selected(&[]));
    }

    #[test]
    fn test_display_name_and_initials() {
        let full = user("1", Some("Alice"), Some("Williams"), false);
        assert_eq!(full.display_name(), "Alice Williams");
        assert_eq!(full.initials(), "AW");
        let anonymous = user("7", None, None, false);
        assert_eq!(anonymous.display_name(), "user7@gmail.com");
        assert_eq!(anonymous.initials(), "u");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("VIEWER".parse::<Role>().unwrap(), Role::Viewer);
        assert!("OWNER".parse::<Role>().is_err());
    }
}
