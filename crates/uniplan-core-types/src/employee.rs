//! Employee directory record.

use serde::{Deserialize, Serialize};

/// A person from the staff directory.
///
/// This is also the candidate shape carried by an ambiguous resolution:
/// when a free-text identifier matches several people, the full records are
/// returned so the caller can re-submit with one of the `url_id` slugs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub photo_link: Option<String>,
    #[serde(default)]
    pub calendar_id: Option<String>,
    /// Canonical human-meaningful slug, stable across lookups.
    pub url_id: String,
}

impl Employee {
    /// "Last First Middle" with absent parts skipped.
    pub fn full_name(&self) -> String {
        let mut parts = vec![self.last_name.as_str(), self.first_name.as_str()];
        if let Some(middle) = self.middle_name.as_deref() {
            if !middle.is_empty() {
                parts.push(middle);
            }
        }
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> Employee {
        Employee {
            id: 501,
            first_name: "Ivan".into(),
            last_name: "Ivanov".into(),
            middle_name: Some("Ivanovich".into()),
            degree: None,
            rank: None,
            photo_link: None,
            calendar_id: None,
            url_id: "ivanov-i-i".into(),
        }
    }

    #[test]
    fn test_full_name_joins_present_parts() {
        assert_eq!(employee().full_name(), "Ivanov Ivan Ivanovich");

        let mut e = employee();
        e.middle_name = None;
        assert_eq!(e.full_name(), "Ivanov Ivan");
    }

    #[test]
    fn test_candidate_serializes_with_slug() {
        let value = serde_json::to_value(employee()).unwrap();
        assert_eq!(value["url_id"], "ivanov-i-i");
        assert_eq!(value["id"], 501);
    }
}
