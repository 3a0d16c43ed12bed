//! Rating filter.

use serde::{Deserialize, Serialize};

/// Lowest rating that passes [`filter_by_rating`].
pub const MIN_RATING: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub rating: f64,
}

impl Book {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

/// Keep the items rated [`MIN_RATING`] or higher, in their original order.
pub fn filter_by_rating(items: &[Book]) -> Vec<Book> {
    items
        .iter()
        .filter(|item| item.rating >= MIN_RATING)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Vec<Book> {
        vec![
            Book::new("Book A", 4.5),
            Book::new("Book B", 3.2),
            Book::new("Book C", 5.0),
        ]
    }

    #[test]
    fn keeps_high_ratings_in_order() {
        let kept = filter_by_rating(&books());
        assert_eq!(kept, vec![Book::new("Book A", 4.5), Book::new("Book C", 5.0)]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let kept = filter_by_rating(&[Book::new("edge", 4.0), Book::new("below", 3.99)]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "edge");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(filter_by_rating(&[]).is_empty());
    }

    #[test]
    fn book_serializes_with_plain_field_names() {
        let v = serde_json::to_value(Book::new("Book A", 4.5)).unwrap();
        assert_eq!(v, serde_json::json!({"title": "Book A", "rating": 4.5}));
    }
}
