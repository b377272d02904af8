use crate::models::ToDoItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn compare(self, a: &ToDoItem, b: &ToDoItem) -> Ordering {
        match self {
            SortOrder::Newest => compare_newest(a, b),
            SortOrder::Oldest => compare_oldest(a, b),
        }
    }
}

/// Later deadlines first. Items without a deadline go last.
pub fn compare_newest(a: &ToDoItem, b: &ToDoItem) -> Ordering {
    compare_by_deadline(a, b, |x, y| y.cmp(&x))
}

/// Earlier deadlines first. Items without a deadline also go last, exactly
/// as in [`compare_newest`].
pub fn compare_oldest(a: &ToDoItem, b: &ToDoItem) -> Ordering {
    compare_by_deadline(a, b, |x, y| x.cmp(&y))
}

fn compare_by_deadline(
    a: &ToDoItem,
    b: &ToDoItem,
    both_present: impl Fn(i64, i64) -> Ordering,
) -> Ordering {
    match (a.deadline_timestamp(), b.deadline_timestamp()) {
        (Some(x), Some(y)) => both_present(x, y),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort; ties keep their input order.
pub fn sort_items(items: &mut [ToDoItem], order: SortOrder) {
    items.sort_by(|a, b| order.compare(a, b));
}

pub fn sorted(items: &[ToDoItem], order: SortOrder) -> Vec<ToDoItem> {
    let mut copy = items.to_vec();
    sort_items(&mut copy, order);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, deadline: Option<&str>) -> ToDoItem {
        let item = ToDoItem::new(description);
        match deadline {
            Some(deadline) => item.with_deadline(deadline),
            None => item,
        }
    }

    fn descriptions(items: &[ToDoItem]) -> Vec<&str> {
        items.iter().map(|item| item.description.as_str()).collect()
    }

    #[test]
    fn distinct_deadlines_order_oppositely() {
        let early = item("early", Some("2030-01-01"));
        let late = item("late", Some("2031-06-15T12:00:00Z"));

        assert_eq!(compare_newest(&early, &late), Ordering::Greater);
        assert_eq!(compare_newest(&late, &early), Ordering::Less);
        assert_eq!(compare_oldest(&early, &late), Ordering::Less);
        assert_eq!(compare_oldest(&late, &early), Ordering::Greater);
    }

    #[test]
    fn missing_deadlines_sort_last_in_both_orders() {
        let dated = item("dated", Some("2030-01-01"));
        let absent = item("absent", None);
        let garbage = item("garbage", Some("not a date"));
        let epoch = item("epoch", Some("1970-01-01"));

        for undated in [&absent, &garbage, &epoch] {
            assert_eq!(compare_newest(undated, &dated), Ordering::Greater);
            assert_eq!(compare_newest(&dated, undated), Ordering::Less);
            assert_eq!(compare_oldest(undated, &dated), Ordering::Greater);
            assert_eq!(compare_oldest(&dated, undated), Ordering::Less);
        }
        assert_eq!(compare_newest(&absent, &garbage), Ordering::Equal);
        assert_eq!(compare_oldest(&absent, &garbage), Ordering::Equal);
    }

    #[test]
    fn equal_deadlines_compare_equal() {
        let a = item("a", Some("2030-01-01"));
        let b = item("b", Some("2030-01-01T00:00:00Z"));
        assert_eq!(compare_newest(&a, &b), Ordering::Equal);
        assert_eq!(compare_oldest(&a, &b), Ordering::Equal);
    }

    #[test]
    fn sorting_is_stable_on_ties() {
        let items = vec![
            item("none-1", None),
            item("mid-1", Some("2030-05-01")),
            item("late", Some("2031-01-01")),
            item("none-2", Some("")),
            item("mid-2", Some("2030-05-01")),
            item("early", Some("2029-01-01")),
        ];

        let newest = sorted(&items, SortOrder::Newest);
        assert_eq!(
            descriptions(&newest),
            ["late", "mid-1", "mid-2", "early", "none-1", "none-2"]
        );

        let oldest = sorted(&items, SortOrder::Oldest);
        assert_eq!(
            descriptions(&oldest),
            ["early", "mid-1", "mid-2", "late", "none-1", "none-2"]
        );

        let again = sorted(&newest, SortOrder::Newest);
        assert_eq!(again, newest);
    }

    #[test]
    fn sorted_leaves_input_untouched() {
        let items = vec![item("a", Some("2029-01-01")), item("b", Some("2030-01-01"))];
        let _ = sorted(&items, SortOrder::Newest);
        assert_eq!(descriptions(&items), ["a", "b"]);
    }
}
