use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::Assumptions;

/// A saved assumption set: the document shape the scenario store
/// persists. Loaded records are plain assumption data; the engine treats
/// them exactly like the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Slug of the name, used as the storage key
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub assumptions: Assumptions,
}

impl ScenarioRecord {
    pub fn new(name: impl Into<String>, assumptions: Assumptions) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            name,
            created_at: Utc::now(),
            assumptions,
        }
    }
}

/// Lowercases ASCII alphanumerics and folds every other run of
/// characters into a single hyphen. An all-junk name becomes "unnamed".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    if slug.is_empty() {
        "unnamed".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::baseline::load_baseline;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Main St 8-Plex"), "main-st-8-plex");
        assert_eq!(slugify("  High   Rate!!  "), "high-rate");
        assert_eq!(slugify("Déjà vu"), "d-j-vu");
        assert_eq!(slugify("!!!"), "unnamed");
        assert_eq!(slugify(""), "unnamed");
    }

    #[test]
    fn test_record_carries_slug_id() {
        let record = ScenarioRecord::new("Rate Shock 6%", load_baseline());
        assert_eq!(record.id, "rate-shock-6");
        assert_eq!(record.name, "Rate Shock 6%");
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = ScenarioRecord::new("Baseline Copy", load_baseline());
        let json = serde_json::to_string(&record).unwrap();
        let back: ScenarioRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
