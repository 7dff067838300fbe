//! Search and category filtering over catalog lists
//!
//! Filtering is a pure function of the item list, the search text and the
//! selected category. The result keeps the input order.

/// Category selector value that matches every item
pub const ALL_CATEGORIES: &str = "all";

/// A catalog item that can be searched and partitioned by category
pub trait Filterable {
    /// Text fields searched by the query
    fn search_fields(&self) -> Vec<&str>;

    /// Category (or department) id the item belongs to
    fn category(&self) -> &str;
}

/// Does `item` contain `needle` (already lowercased) in any search field?
fn matches_query<T: Filterable>(item: &T, needle: &str) -> bool {
    needle.is_empty()
        || item
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

fn matches_category<T: Filterable>(item: &T, category: &str) -> bool {
    category == ALL_CATEGORIES || item.category() == category
}

/// Filter `items` by a case-insensitive substring `query` and an exact `category`
///
/// An empty query matches everything and `"all"` matches every category.
/// An unknown category matches nothing.
///
/// # Examples
/// ```
/// use campus_portal::filter::{filter, Filterable};
///
/// struct Tile(&'static str, &'static str);
///
/// impl Filterable for Tile {
///     fn search_fields(&self) -> Vec<&str> {
///         vec![self.0]
///     }
///
///     fn category(&self) -> &str {
///         self.1
///     }
/// }
///
/// let tiles = [
///     Tile("Diploma in Computer Science", "ict"),
///     Tile("Certificate in Electrical Engineering", "engineering"),
/// ];
/// let visible = filter(&tiles, "COMP", "all");
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].0, "Diploma in Computer Science");
/// assert!(filter(&tiles, "comp", "engineering").is_empty());
/// ```
#[must_use]
pub fn filter<'a, T: Filterable>(items: &'a [T], query: &str, category: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_query(*item, &needle) && matches_category(*item, category))
        .collect()
}

/// Search text and category selection owned by one screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Search text as typed
    pub query: String,
    /// Selected category id
    pub category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl FilterState {
    /// Build a filter state; `None` falls back to the empty query / `"all"`
    #[must_use]
    pub fn new(query: Option<&str>, category: Option<&str>) -> Self {
        Self {
            query: query.unwrap_or_default().to_string(),
            category: category.unwrap_or(ALL_CATEGORIES).to_string(),
        }
    }

    /// Apply this state to a list of items
    #[must_use]
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter(items, &self.query, &self.category)
    }

    /// Clear the query and select every category (navigation away)
    pub fn reset(&mut self) {
        self.query.clear();
        self.category = ALL_CATEGORIES.to_string();
    }

    /// Whether any constraint is active
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category != ALL_CATEGORIES
    }
}

/// Result-count label such as `"1 course found"` or `"5 articles"`
#[must_use]
pub fn count_label(count: usize, noun: &str, suffix: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    if suffix.is_empty() {
        format!("{count} {noun}{plural}")
    } else {
        format!("{count} {noun}{plural} {suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        title: &'static str,
        department: &'static str,
    }

    impl Filterable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title]
        }

        fn category(&self) -> &str {
            self.department
        }
    }

    fn two_items() -> Vec<Item> {
        vec![
            Item {
                title: "Diploma in Computer Science",
                department: "ict",
            },
            Item {
                title: "Certificate in Electrical Engineering",
                department: "engineering",
            },
        ]
    }

    #[test]
    fn test_query_matches_case_insensitively() {
        let items = two_items();
        let found = filter(&items, "comp", ALL_CATEGORIES);
        assert_eq!(found, vec![&items[0]]);

        let found = filter(&items, "ELECTRICAL", ALL_CATEGORIES);
        assert_eq!(found, vec![&items[1]]);
    }

    #[test]
    fn test_category_only() {
        let items = two_items();
        let found = filter(&items, "", "engineering");
        assert_eq!(found, vec![&items[1]]);
    }

    #[test]
    fn test_empty_query_all_categories_is_identity() {
        let items = two_items();
        let found = filter(&items, "", ALL_CATEGORIES);
        assert_eq!(found, items.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let items = two_items();
        assert!(filter(&items, "", "astronomy").is_empty());
    }

    #[test]
    fn test_query_and_category_are_conjoined() {
        let items = two_items();
        assert!(filter(&items, "comp", "engineering").is_empty());
    }

    #[test]
    fn test_filter_state_reset() {
        let mut state = FilterState::new(Some("comp"), Some("ict"));
        assert!(state.is_active());

        state.reset();
        assert_eq!(state, FilterState::default());
        assert!(!state.is_active());
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1, "course", "found"), "1 course found");
        assert_eq!(count_label(0, "course", "found"), "0 courses found");
        assert_eq!(count_label(5, "article", ""), "5 articles");
    }
}
