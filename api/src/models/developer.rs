//! # Developer models
//!
//! A [`Developer`] is the owning side of everything else in the system:
//! projects reference one, and at most one [`DeveloperInfo`] record extends
//! one with a start date and an operating-system preference.
//!
//! The read representation is [`DeveloperWithInfo`]: the developer row plus an
//! explicit `Option<DeveloperInfoSummary>` — absence of an info record is a
//! `None`, never a null-filled join row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full developer record from the `developers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Developer {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Payload for creating a developer.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDeveloper {
    pub name: String,
    pub email: String,
}

/// Partial update: only the provided fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeveloperPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// The operating systems a developer info record may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredOs {
    Windows,
    Linux,
    MacOs,
}

impl PreferredOs {
    /// Wire spellings, in the order they are reported to clients.
    pub const OPTIONS: [&'static str; 3] = ["Windows", "Linux", "MacOS"];

    pub fn as_str(self) -> &'static str {
        match self {
            PreferredOs::Windows => "Windows",
            PreferredOs::Linux => "Linux",
            PreferredOs::MacOs => "MacOS",
        }
    }

    /// Exact-spelling parse; anything else is a validation failure.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Windows" => Some(PreferredOs::Windows),
            "Linux" => Some(PreferredOs::Linux),
            "MacOS" => Some(PreferredOs::MacOs),
            _ => None,
        }
    }
}

/// Full info record from the `developer_infos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeveloperInfo {
    pub id: i32,
    #[serde(rename = "developerSince")]
    pub developer_since: NaiveDate,
    #[serde(rename = "preferredOS")]
    pub preferred_os: String,
    #[serde(rename = "developerId")]
    pub developer_id: i32,
}

/// Payload for writing a developer's info record.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDeveloperInfo {
    #[serde(rename = "developerSince")]
    pub developer_since: NaiveDate,
    #[serde(rename = "preferredOS")]
    pub preferred_os: String,
}

/// Info fields exposed when reading a developer.
#[derive(Debug, Clone, Serialize)]
pub struct DeveloperInfoSummary {
    #[serde(rename = "developerSince")]
    pub developer_since: NaiveDate,
    #[serde(rename = "preferredOS")]
    pub preferred_os: String,
}

/// Read representation: the developer plus its optional info record.
#[derive(Debug, Clone, Serialize)]
pub struct DeveloperWithInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(rename = "developerInfo")]
    pub info: Option<DeveloperInfoSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_os_round_trips_the_wire_spellings() {
        for option in PreferredOs::OPTIONS {
            let os = PreferredOs::parse(option).expect("listed option must parse");
            assert_eq!(os.as_str(), option);
        }
    }

    #[test]
    fn preferred_os_rejects_other_spellings() {
        for value in ["windows", "macos", "MacOs", "Ubuntu", ""] {
            assert!(PreferredOs::parse(value).is_none(), "{value:?} must not parse");
        }
    }

    #[test]
    fn new_developer_info_accepts_the_wire_field_names() {
        let payload: NewDeveloperInfo = serde_json::from_str(
            r#"{"developerSince": "2020-01-15", "preferredOS": "Linux"}"#,
        )
        .unwrap();
        assert_eq!(payload.preferred_os, "Linux");
        assert_eq!(payload.developer_since.to_string(), "2020-01-15");
    }

    #[test]
    fn missing_info_serializes_as_null() {
        let dev = DeveloperWithInfo {
            id: 1,
            name: "Ana".into(),
            email: "ana@x.com".into(),
            info: None,
        };
        let json = serde_json::to_value(&dev).unwrap();
        assert_eq!(json["developerInfo"], serde_json::Value::Null);
        assert_eq!(json["email"], "ana@x.com");
    }
}
