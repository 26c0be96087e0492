//! # Catalog Crate
//!
//! This crate loads a tabular movie catalog into memory and indexes it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, GenreSet, Catalog)
//! - **parser**: Parse the CSV file into records
//! - **index**: Assign positions and build title/genre indices
//! - **cache**: Load-once, shared access to a catalog file
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogCache;
//!
//! let cache = CatalogCache::new("data/processed_movies.csv");
//! let catalog = cache.get()?;
//!
//! let movie = catalog.find_by_title("the dark knight").unwrap();
//! println!("{} [{}]", movie.title, movie.genres.joined());
//! ```

// Public modules
pub mod cache;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use cache::CatalogCache;
pub use error::{DataLoadError, Result};
pub use types::{
    Catalog, GenreSet, MovieRecord, Position, GENRE_DELIMITER, GENRE_DISPLAY_SEPARATOR,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::from_records(vec![MovieRecord::new(
            "Toy Story",
            GenreSet::parse("Animation;Comedy;Family"),
            7.9,
            81,
        )]);

        assert_eq!(catalog.len(), 1);
        let retrieved = catalog.get(0).unwrap();
        assert_eq!(retrieved.title, "Toy Story");
        assert_eq!(retrieved.genres.len(), 3);
        assert_eq!(retrieved.runtime, 81);
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::from_records(Vec::new());

        // Querying non-existent data should return None or empty slices
        assert!(catalog.get(999).is_none());
        assert!(catalog.find_by_title("missing").is_none());
        assert!(catalog.positions_with_genre("Action").is_empty());
        assert!(catalog.titles().is_empty());
    }
}
