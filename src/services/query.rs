//! Search descriptors for the external lookup service
//!
//! Pure construction and validation. Rendering to a query string is the only
//! place that knows Gutendex parameter names.

use crate::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Free-text search over titles and author names
    Title(String),
    /// Bookshelf / subject search
    Topic(String),
    /// Service-side popularity ordering, no numeric cap
    Popular,
    /// Two-letter language code
    Language(String),
    /// Authors alive at some point within the (inclusive) range
    AuthorYears { start: i32, end: i32 },
}

impl SearchQuery {
    pub fn by_title(text: &str) -> Result<Self, DomainError> {
        Ok(Self::Title(non_empty(text, "title")?))
    }

    pub fn by_topic(text: &str) -> Result<Self, DomainError> {
        Ok(Self::Topic(non_empty(text, "topic")?))
    }

    /// Relies on the service's own ordering; callers truncate the results.
    pub fn most_popular() -> Self {
        Self::Popular
    }

    pub fn by_language(code: &str) -> Result<Self, DomainError> {
        let code = non_empty(code, "language")?.to_lowercase();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(DomainError::InvalidQuery(format!(
                "language must be a two-letter code (e.g. 'es', 'en'), got '{}'",
                code
            )));
        }
        Ok(Self::Language(code))
    }

    pub fn by_author_years(start: i32, end: i32) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidQuery(format!(
                "start year {} is after end year {}",
                start, end
            )));
        }
        Ok(Self::AuthorYears { start, end })
    }

    /// Parameter pairs, values not yet encoded.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            SearchQuery::Title(text) => vec![("search", text.clone())],
            SearchQuery::Topic(text) => vec![("topic", text.clone())],
            SearchQuery::Popular => vec![("sort", "popular".to_string())],
            SearchQuery::Language(code) => vec![("languages", code.clone())],
            SearchQuery::AuthorYears { start, end } => vec![
                ("author_year_start", start.to_string()),
                ("author_year_end", end.to_string()),
            ],
        }
    }

    pub fn to_query_string(&self) -> String {
        self.params()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn non_empty(text: &str, field: &str) -> Result<String, DomainError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidQuery(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_rejected() {
        assert!(matches!(
            SearchQuery::by_title("   "),
            Err(DomainError::InvalidQuery(_))
        ));
        assert!(matches!(
            SearchQuery::by_topic(""),
            Err(DomainError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_title_is_trimmed_and_encoded() {
        let query = SearchQuery::by_title("  don quijote ").unwrap();
        assert_eq!(query, SearchQuery::Title("don quijote".to_string()));
        assert_eq!(query.to_query_string(), "search=don%20quijote");
    }

    #[test]
    fn test_popular_has_no_limit() {
        let query = SearchQuery::most_popular();
        assert_eq!(query.to_query_string(), "sort=popular");
    }

    #[test]
    fn test_language_code_validation() {
        assert_eq!(
            SearchQuery::by_language(" FR ").unwrap(),
            SearchQuery::Language("fr".to_string())
        );
        assert!(SearchQuery::by_language("fra").is_err());
        assert!(SearchQuery::by_language("e1").is_err());
    }

    #[test]
    fn test_author_year_range() {
        let query = SearchQuery::by_author_years(-500, 1600).unwrap();
        assert_eq!(
            query.to_query_string(),
            "author_year_start=-500&author_year_end=1600"
        );
        assert!(SearchQuery::by_author_years(1900, 1800).is_err());
    }
}
