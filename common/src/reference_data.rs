//! Cuisine and ambience lookups used by the filter selects.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub id: u64,
    pub name: String,
}

pub type Cuisine = ReferenceEntry;
pub type Ambience = ReferenceEntry;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    pub cuisines: Vec<Cuisine>,
    pub ambiences: Vec<Ambience>,
}

impl ReferenceData {
    pub fn cuisine_name(&self, id: u64) -> Option<&str> {
        lookup(&self.cuisines, id)
    }

    pub fn ambience_name(&self, id: u64) -> Option<&str> {
        lookup(&self.ambiences, id)
    }

    /// Lists carried by a listing envelope take precedence when non-empty.
    pub fn merged_with(&self, newer: &ReferenceData) -> ReferenceData {
        ReferenceData {
            cuisines: if newer.cuisines.is_empty() { self.cuisines.clone() } else { newer.cuisines.clone() },
            ambiences: if newer.ambiences.is_empty() { self.ambiences.clone() } else { newer.ambiences.clone() },
        }
    }
}

fn lookup(entries: &[ReferenceEntry], id: u64) -> Option<&str> {
    entries.iter().find(|e| e.id == id).map(|e| e.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, name: &str) -> ReferenceEntry {
        ReferenceEntry { id, name: name.to_string() }
    }

    #[test]
    fn looks_up_names_by_id() {
        let data = ReferenceData {
            cuisines: vec![entry(1, "Thai"), entry(2, "Mexican")],
            ambiences: vec![entry(5, "romantic")],
        };
        assert_eq!(data.cuisine_name(2), Some("Mexican"));
        assert_eq!(data.cuisine_name(9), None);
        assert_eq!(data.ambience_name(5), Some("romantic"));
    }

    #[test]
    fn merge_keeps_existing_lists_when_newer_is_empty() {
        let fetched = ReferenceData { cuisines: vec![entry(1, "Thai")], ambiences: vec![entry(5, "romantic")] };
        let from_listing = ReferenceData { cuisines: vec![entry(3, "Greek")], ambiences: vec![] };
        let merged = fetched.merged_with(&from_listing);
        assert_eq!(merged.cuisines, vec![entry(3, "Greek")]);
        assert_eq!(merged.ambiences, vec![entry(5, "romantic")]);
    }

    #[test]
    fn decodes_plain_array_payload() {
        let list: Vec<Cuisine> = serde_json::from_str(r#"[{"id": 1, "name": "Thai"}]"#).unwrap();
        assert_eq!(list, vec![entry(1, "Thai")]);
    }
}
