//! Catalog records shared by every layer
//!
//! Plain data only: storage models convert into these, and the services
//! operate on them without knowing which repository produced them.

use serde::{Deserialize, Serialize};

/// Language stored when the source record listed none.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Birth and death years, either of which may be unknown.
///
/// An unknown bound places no constraint on that side, so BCE years
/// (negative values) need no sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifespan {
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

impl Lifespan {
    pub fn new(birth_year: Option<i32>, death_year: Option<i32>) -> Self {
        Self {
            birth_year,
            death_year,
        }
    }

    /// True when `year` falls inside the (possibly open) interval, bounds inclusive.
    pub fn includes(&self, year: i32) -> bool {
        let born = self.birth_year.is_none_or(|birth| birth <= year);
        let not_dead = self.death_year.is_none_or(|death| death >= year);
        born && not_dead
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
    #[serde(flatten)]
    pub lifespan: Lifespan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: Option<Author>,
    pub language: String,
    pub download_count: i64,
}

impl Book {
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.name.as_str())
    }
}

/// Input for creating an author
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthor {
    pub name: String,
    pub lifespan: Lifespan,
}

/// Input for creating a book; defaults are already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: Option<Author>,
    pub language: String,
    pub download_count: i64,
}

/// Case-insensitive containment in either direction.
///
/// Deliberately loose: "Anna" is equivalent to "Anna Karenina", and
/// "Ann" to "Anna".
pub fn substring_equivalent(candidate: &str, stored: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let stored = stored.to_lowercase();
    candidate.contains(&stored) || stored.contains(&candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_equivalence_is_symmetric_and_case_insensitive() {
        assert!(substring_equivalent("anna", "Anna Karenina"));
        assert!(substring_equivalent("ANNA KARENINA (Illustrated)", "Anna Karenina"));
        assert!(substring_equivalent("Ann", "anna"));
        assert!(!substring_equivalent("Dune", "Emma"));
    }

    #[test]
    fn test_closed_lifespan_bounds_are_inclusive() {
        let span = Lifespan::new(Some(1800), Some(1850));
        assert!(span.includes(1800));
        assert!(span.includes(1825));
        assert!(span.includes(1850));
        assert!(!span.includes(1799));
        assert!(!span.includes(1851));
    }

    #[test]
    fn test_open_lifespan_has_no_constraint() {
        let unknown_birth = Lifespan::new(None, Some(1900));
        assert!(unknown_birth.includes(-500));
        assert!(unknown_birth.includes(1900));
        assert!(!unknown_birth.includes(1901));

        let unknown = Lifespan::default();
        assert!(unknown.includes(i32::MIN));
        assert!(unknown.includes(3000));
    }
}
