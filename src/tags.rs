use crate::models::ToDoItem;
use crate::ordering::{sorted, SortOrder};
use std::collections::{BTreeMap, BTreeSet};

/// Label given to items that carry no tags of their own.
pub const UNTAGGED: &str = "untagged";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagGroups {
    /// Distinct labels in ordinal order.
    pub labels: Vec<String>,
    /// Items under each label, newest deadline first.
    pub groups: BTreeMap<String, Vec<ToDoItem>>,
}

impl TagGroups {
    pub fn group(&self, label: &str) -> &[ToDoItem] {
        self.groups.get(label).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Copies of `items` where an empty tag list becomes `["untagged"]`.
pub fn normalize_tags(items: &[ToDoItem]) -> Vec<ToDoItem> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.tags.is_empty() {
                item.tags.push(UNTAGGED.to_string());
            }
            item
        })
        .collect()
}

pub fn distinct_labels(items: &[ToDoItem]) -> Vec<String> {
    normalize_tags(items)
        .into_iter()
        .flat_map(|item| item.tags)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Places every item under each of its labels. An item with N tags shows up
/// N times.
pub fn group_by_tag(items: &[ToDoItem]) -> TagGroups {
    let normalized = sorted(&normalize_tags(items), SortOrder::Newest);

    let labels: BTreeSet<String> = normalized
        .iter()
        .flat_map(|item| item.tags.iter().cloned())
        .collect();

    let mut groups: BTreeMap<String, Vec<ToDoItem>> = BTreeMap::new();
    for item in &normalized {
        for tag in &item.tags {
            groups.entry(tag.clone()).or_default().push(item.clone());
        }
    }

    TagGroups {
        labels: labels.into_iter().collect(),
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_item_gets_synthetic_label() {
        let items = vec![
            ToDoItem::new("first"),
            ToDoItem::new("second").with_tags(["a", "b"]),
            ToDoItem::new("third").with_tags(["a"]),
        ];

        assert_eq!(distinct_labels(&items), ["a", "b", "untagged"]);

        let normalized = normalize_tags(&items);
        assert_eq!(normalized[0].tags, [UNTAGGED]);
        assert!(items[0].tags.is_empty(), "input must not be mutated");
    }

    #[test]
    fn labels_use_ordinal_order() {
        let items = vec![
            ToDoItem::new("x").with_tags(["beta", "Zeta", "alpha"]),
            ToDoItem::new("y").with_tags(["alpha"]),
        ];
        assert_eq!(distinct_labels(&items), ["Zeta", "alpha", "beta"]);
    }

    #[test]
    fn groups_repeat_multi_tag_items_in_newest_order() {
        let items = vec![
            ToDoItem::new("old").with_tags(["work"]).with_deadline("2029-01-01"),
            ToDoItem::new("both")
                .with_tags(["home", "work"])
                .with_deadline("2030-01-01"),
            ToDoItem::new("loose"),
        ];

        let groups = group_by_tag(&items);
        assert_eq!(groups.labels, ["home", "untagged", "work"]);

        let work: Vec<_> = groups
            .group("work")
            .iter()
            .map(|item| item.description.as_str())
            .collect();
        assert_eq!(work, ["both", "old"]);
        assert_eq!(groups.group("home").len(), 1);
        assert_eq!(groups.group("untagged")[0].description, "loose");
        assert!(groups.group("missing").is_empty());

        let appearances: usize = groups.groups.values().map(Vec::len).sum();
        assert_eq!(appearances, 4);
    }

    #[test]
    fn repeated_tag_appears_twice_in_its_group() {
        let items = vec![ToDoItem::new("dup").with_tags(["a", "a"])];
        let groups = group_by_tag(&items);
        assert_eq!(groups.labels, ["a"]);
        assert_eq!(groups.group("a").len(), 2);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert_eq!(group_by_tag(&[]), TagGroups::default());
    }
}
