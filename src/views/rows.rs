use serde::Serialize;
use serde_json::Value;

use crate::api::{Collection, Entity};

/// One display line of a collection listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: String,
    pub name: String,
    pub status: String,
}

/// Flatten a collection into display rows, ordered by key
///
/// Entries shaped like Sparkle entities show their name and current state;
/// anything else is shown as compact JSON.
pub fn rows(collection: &Collection) -> Vec<Row> {
    let mut rows: Vec<Row> = collection
        .iter()
        .map(|(id, value)| match Entity::from_value(value) {
            Some(entity) => Row {
                id: id.clone(),
                name: entity.field("name").map(display).unwrap_or_default(),
                status: match entity.field("state") {
                    Some(state) if entity.is_current() => display(state),
                    _ if entity.is_current() => "present".to_string(),
                    _ => "pending".to_string(),
                },
            },
            None => Row {
                id: id.clone(),
                name: String::new(),
                status: display(value),
            },
        })
        .collect();
    rows.sort_by(|a, b| a.id.cmp(&b.id));
    rows
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_rows() {
        let collection = json!({
            "b2": {"desired": {"name": "db"}},
            "a1": {"desired": {"name": "web"}, "current": {"state": "running"}},
            "c3": {"desired": {"name": "cache"}, "current": {}}
        });
        let rows = rows(collection.as_object().unwrap());

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            Row {
                id: "a1".to_string(),
                name: "web".to_string(),
                status: "running".to_string(),
            }
        );
        assert_eq!(rows[1].status, "pending");
        assert_eq!(rows[2].status, "present");
    }

    #[test]
    fn test_opaque_rows() {
        let collection = json!({"count": 3, "owner": "acme"});
        let rows = rows(collection.as_object().unwrap());
        assert_eq!(rows[0].id, "count");
        assert_eq!(rows[0].status, "3");
        assert_eq!(rows[1].status, "acme");
        assert!(rows[1].name.is_empty());
    }
}
