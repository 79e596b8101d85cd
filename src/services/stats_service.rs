//! Catalog aggregates and rankings
//!
//! Pure functions over book/author slices, plus thin async wrappers that load
//! the catalog first.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::{Author, Book, Catalog, DomainError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadStatistics {
    pub count: usize,
    pub sum: i128,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
}

impl DownloadStatistics {
    /// `None` for an empty slice.
    pub fn from_books(books: &[Book]) -> Option<Self> {
        let min = books.iter().map(|b| b.download_count).min()?;
        let max = books.iter().map(|b| b.download_count).max()?;
        let sum: i128 = books.iter().map(|b| i128::from(b.download_count)).sum();

        Some(Self {
            count: books.len(),
            sum,
            min,
            max,
            mean: sum as f64 / books.len() as f64,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub language: String,
    pub display_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProlificAuthor {
    pub author: Author,
    pub book_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStatistics {
    pub total_books: usize,
    pub total_authors: usize,
    pub downloads: Option<DownloadStatistics>,
    pub languages: Vec<LanguageCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_prolific_author: Option<ProlificAuthor>,
}

/// Readable name for the language codes the catalog most often holds.
pub fn language_name(code: &str) -> String {
    match code.to_lowercase().as_str() {
        "es" => "Spanish".to_string(),
        "en" => "English".to_string(),
        "fr" => "French".to_string(),
        "pt" => "Portuguese".to_string(),
        "de" => "German".to_string(),
        "it" => "Italian".to_string(),
        _ => code.to_uppercase(),
    }
}

/// Books ordered by downloads descending, ties in catalog order, first `n` kept.
pub fn rank_by_downloads(mut books: Vec<Book>, n: usize) -> Vec<Book> {
    // stable sort keeps insertion order among equal counts
    books.sort_by(|a, b| b.download_count.cmp(&a.download_count));
    books.truncate(n);
    books
}

/// Count per language, descending count, ties by language code.
pub fn language_histogram(books: &[Book]) -> Vec<LanguageCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for book in books {
        *counts.entry(book.language.as_str()).or_insert(0) += 1;
    }

    let mut histogram: Vec<LanguageCount> = counts
        .into_iter()
        .map(|(language, count)| LanguageCount {
            language: language.to_string(),
            display_name: language_name(language),
            count,
        })
        .collect();

    histogram.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.language.cmp(&b.language)));
    histogram
}

/// Author with the most linked books; on ties the last one in catalog order wins.
pub fn most_prolific_author(authors: &[Author], books: &[Book]) -> Option<ProlificAuthor> {
    let mut per_author: HashMap<i32, usize> = HashMap::new();
    for book in books {
        if let Some(author) = &book.author {
            *per_author.entry(author.id).or_insert(0) += 1;
        }
    }

    // max_by_key returns the last of several equal maxima
    authors
        .iter()
        .max_by_key(|a| per_author.get(&a.id).copied().unwrap_or(0))
        .map(|author| ProlificAuthor {
            author: author.clone(),
            book_count: per_author.get(&author.id).copied().unwrap_or(0),
        })
}

pub async fn top_by_downloads(catalog: &Catalog, n: usize) -> Result<Vec<Book>, DomainError> {
    let books = catalog.books.find_all().await?;
    Ok(rank_by_downloads(books, n))
}

pub async fn by_language(catalog: &Catalog, code: &str) -> Result<Vec<Book>, DomainError> {
    catalog.books.find_by_language(code).await
}

pub async fn download_statistics(
    catalog: &Catalog,
) -> Result<Option<DownloadStatistics>, DomainError> {
    let books = catalog.books.find_all().await?;
    Ok(DownloadStatistics::from_books(&books))
}

/// Full statistics report; the prolific author is omitted when nobody has a book.
pub async fn catalog_statistics(catalog: &Catalog) -> Result<CatalogStatistics, DomainError> {
    let books = catalog.books.find_all().await?;
    let authors = catalog.authors.find_all().await?;

    let most_prolific_author =
        most_prolific_author(&authors, &books).filter(|p| p.book_count > 0);

    tracing::info!(
        "Statistics over {} books and {} authors",
        books.len(),
        authors.len()
    );

    Ok(CatalogStatistics {
        total_books: books.len(),
        total_authors: authors.len(),
        downloads: DownloadStatistics::from_books(&books),
        languages: language_histogram(&books),
        most_prolific_author,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Lifespan;

    fn author(id: i32, name: &str) -> Author {
        Author {
            id,
            name: name.to_string(),
            lifespan: Lifespan::default(),
        }
    }

    fn book(id: i32, title: &str, language: &str, downloads: i64, author: Option<&Author>) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.cloned(),
            language: language.to_string(),
            download_count: downloads,
        }
    }

    #[test]
    fn test_top_by_downloads_ranks_and_truncates() {
        let books = vec![
            book(1, "A", "en", 50, None),
            book(2, "B", "en", 200, None),
            book(3, "C", "en", 10, None),
        ];

        let titles: Vec<String> = rank_by_downloads(books, 2)
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_top_by_downloads_ties_keep_catalog_order() {
        let books = vec![
            book(1, "First", "en", 7, None),
            book(2, "Second", "en", 9, None),
            book(3, "Third", "en", 7, None),
        ];

        let titles: Vec<String> = rank_by_downloads(books, 10)
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["Second", "First", "Third"]);
    }

    #[test]
    fn test_language_histogram_orders_by_count() {
        let books = vec![
            book(1, "A", "en", 0, None),
            book(2, "B", "en", 0, None),
            book(3, "C", "es", 0, None),
        ];

        let histogram = language_histogram(&books);
        assert_eq!(histogram.len(), 2);
        assert_eq!((histogram[0].language.as_str(), histogram[0].count), ("en", 2));
        assert_eq!((histogram[1].language.as_str(), histogram[1].count), ("es", 1));
        assert_eq!(histogram[1].display_name, "Spanish");
    }

    #[test]
    fn test_download_statistics() {
        assert_eq!(DownloadStatistics::from_books(&[]), None);

        let books = vec![
            book(1, "A", "en", 50, None),
            book(2, "B", "en", 200, None),
            book(3, "C", "en", 10, None),
        ];
        let stats = DownloadStatistics::from_books(&books).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.sum, 260);
        assert_eq!(stats.min, 10);
        assert_eq!(stats.max, 200);
        assert!((stats.mean - 86.666_666).abs() < 1e-3);
    }

    #[test]
    fn test_download_statistics_sum_exceeds_i64() {
        let books = vec![
            book(1, "A", "en", i64::MAX, None),
            book(2, "B", "en", 1, None),
        ];

        let stats = DownloadStatistics::from_books(&books).unwrap();
        assert_eq!(stats.sum, i128::from(i64::MAX) + 1);
        assert_eq!(stats.max, i64::MAX);
        assert!(stats.mean > 0.0);
    }

    #[test]
    fn test_most_prolific_author() {
        assert_eq!(most_prolific_author(&[], &[]), None);

        let dickens = author(1, "Dickens, Charles");
        let twain = author(2, "Twain, Mark");
        let books = vec![
            book(1, "Oliver Twist", "en", 0, Some(&dickens)),
            book(2, "Tom Sawyer", "en", 0, Some(&twain)),
            book(3, "Great Expectations", "en", 0, Some(&dickens)),
            book(4, "Anonymous", "en", 0, None),
        ];

        let top = most_prolific_author(&[dickens.clone(), twain.clone()], &books).unwrap();
        assert_eq!(top.author, dickens);
        assert_eq!(top.book_count, 2);
    }

    #[test]
    fn test_most_prolific_author_tie_goes_to_last() {
        let first = author(1, "First");
        let second = author(2, "Second");
        let books = vec![
            book(1, "A", "en", 0, Some(&first)),
            book(2, "B", "en", 0, Some(&second)),
        ];

        let top = most_prolific_author(&[first, second.clone()], &books).unwrap();
        assert_eq!(top.author, second);
    }

    #[test]
    fn test_language_name_falls_back_to_code() {
        assert_eq!(language_name("fr"), "French");
        assert_eq!(language_name("fi"), "FI");
    }
}
