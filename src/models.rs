use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A single to-do entry as exchanged with the remote service.
///
/// `id` is assigned by the service and absent until the item is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ToDoItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl ToDoItem {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
            tags: Vec::new(),
            deadline: None,
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a successful `list` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<ToDoItem>,
}

/// Body of a successful single-item response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEnvelope {
    pub item: ToDoItem,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Items stored by the service for one deployment id.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Deployment {
    pub next_id: u64,
    pub items: Vec<ToDoItem>,
}

impl Deployment {
    /// Stores a copy of `item` under a fresh id, ignoring any id it carried.
    pub fn insert(&mut self, mut item: ToDoItem) -> ToDoItem {
        self.next_id = self.next_id.max(1);
        item.id = Some(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.items.push(item.clone());
        item
    }

    pub fn find(&self, id: u64) -> Option<&ToDoItem> {
        self.items.iter().find(|item| item.id == Some(id))
    }

    pub fn remove(&mut self, id: u64) -> Option<ToDoItem> {
        let index = self.items.iter().position(|item| item.id == Some(id))?;
        Some(self.items.remove(index))
    }

    /// Replaces the stored item that shares `item.id`. Returns `None` when
    /// no such item exists.
    pub fn replace(&mut self, item: ToDoItem) -> Option<ToDoItem> {
        let id = item.id?;
        let slot = self.items.iter_mut().find(|stored| stored.id == Some(id))?;
        *slot = item;
        Some(slot.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub deployments: BTreeMap<String, Deployment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_or_missing_tags_become_empty() {
        let with_null: ToDoItem =
            serde_json::from_str(r#"{"id":3,"description":"a","tags":null}"#).unwrap();
        let missing: ToDoItem = serde_json::from_str(r#"{"description":"b"}"#).unwrap();

        assert_eq!(with_null.id, Some(3));
        assert!(with_null.tags.is_empty());
        assert!(missing.tags.is_empty());
        assert_eq!(missing.id, None);
        assert_eq!(missing.deadline, None);
    }

    #[test]
    fn unsaved_item_serializes_without_id() {
        let item = ToDoItem::new("buy milk").with_tags(["home"]);
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "description": "buy milk", "tags": ["home"] })
        );
    }

    #[test]
    fn deployment_assigns_increasing_ids() {
        let mut deployment = Deployment::default();
        let first = deployment.insert(ToDoItem::new("a").with_id(99));
        let second = deployment.insert(ToDoItem::new("b"));

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));

        deployment.remove(1).expect("first item stored");
        let third = deployment.insert(ToDoItem::new("c"));
        assert_eq!(third.id, Some(3));
    }

    #[test]
    fn replace_requires_known_id() {
        let mut deployment = Deployment::default();
        let stored = deployment.insert(ToDoItem::new("a"));

        assert!(deployment.replace(ToDoItem::new("no id")).is_none());
        assert!(deployment.replace(ToDoItem::new("x").with_id(42)).is_none());

        let updated = deployment
            .replace(ToDoItem::new("renamed").with_id(stored.id.unwrap()))
            .expect("replaced");
        assert_eq!(updated.description, "renamed");
        assert_eq!(deployment.items.len(), 1);
    }
}
