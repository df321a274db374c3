//! Clue records shared by every group's path.
//!
//! Clues are immutable once loaded; the generator only reorders references to
//! them, so the pool a caller supplies is the pool every group draws from.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory clue category used to prefer alternating paths.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Person,
    Place,
}

impl Category {
    /// Parse a free-form category label; unknown labels are untyped.
    pub fn parse(label: &str) -> Option<Category> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("person") {
            Some(Category::Person)
        } else if label.eq_ignore_ascii_case("place") {
            Some(Category::Place)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Person => "person",
            Category::Place => "place",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question paired with where its answer (the next clue) gets hidden.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Clue {
    pub question: String,
    pub location_hint: String,
    pub category: Option<Category>,
}

impl Clue {
    pub fn new(
        question: impl Into<String>,
        location_hint: impl Into<String>,
        category: Option<Category>,
    ) -> Self {
        Self {
            question: question.into(),
            location_hint: location_hint.into(),
            category,
        }
    }

    /// Build a clue from an unnormalized category label.
    pub fn with_label(
        question: impl Into<String>,
        location_hint: impl Into<String>,
        label: Option<&str>,
    ) -> Self {
        Self::new(question, location_hint, label.and_then(Category::parse))
    }

    pub fn is(&self, category: Category) -> bool {
        self.category == Some(category)
    }
}

/// Split a pool into its randomizable prefix and the shared final clue.
///
/// Returns `None` for an empty pool.
pub fn split_final(pool: &[Clue]) -> Option<(&Clue, &[Clue])> {
    pool.split_last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_normalize_case_insensitively() {
        assert_eq!(Category::parse("Person"), Some(Category::Person));
        assert_eq!(Category::parse(" PLACE "), Some(Category::Place));
        assert_eq!(Category::parse("thing"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn final_clue_is_the_last_entry() {
        let pool = vec![
            Clue::new("a", "A", Some(Category::Place)),
            Clue::new("b", "B", None),
            Clue::new("c", "C", Some(Category::Person)),
        ];
        let (last, rest) = split_final(&pool).expect("non-empty pool");
        assert_eq!(last.question, "c");
        assert_eq!(rest.len(), 2);
        assert!(split_final(&[]).is_none());
    }
}
