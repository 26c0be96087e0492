//! # Engine Crate
//!
//! Genre-similarity recommendations over an immutable movie catalog.
//!
//! ## Components
//!
//! ### Similarity
//! Jaccard overlap of two genre sets, case-insensitive, `0.0` for two empty
//! sets.
//!
//! ### Recommender
//! Resolves a title to its first catalog match, scores every other record
//! against it and keeps the best `top_n`, ties in catalog order. Can narrow
//! scoring through the catalog's genre index (`ScanMode::GenreIndex`)
//! without changing results.
//!
//! ### Top-rated
//! The `n` highest-rated records.
//!
//! ### Formatter
//! Turns results into display rows (genre string, percentage similarity).
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogCache;
//! use engine::{format_recommendations, QueryError, Recommender};
//!
//! let catalog = CatalogCache::new("data/processed_movies.csv").get()?;
//! let recommender = Recommender::new(catalog);
//!
//! match recommender.recommend("Inception", 5) {
//!     Ok(result) => {
//!         for row in format_recommendations(&result) {
//!             println!("{} {}", row.title, row.similarity);
//!         }
//!     }
//!     Err(QueryError::NotFound { .. }) => println!("Movie not found"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! Every query is a blocking, bounded scan over shared read-only data; the
//! catalog is never mutated, so any number of threads may query it at once.

// Public modules
pub mod error;
pub mod formatter;
pub mod recommender;
pub mod similarity;
pub mod top_rated;

// Re-export commonly used types
pub use error::{QueryError, Result};
pub use formatter::{
    format_percentage, format_recommendations, format_score, format_top_rated,
    RecommendationRow, TopRatedRow,
};
pub use recommender::{recommend, Recommendation, Recommender, ScanMode, ScoredCandidate};
pub use similarity::{jaccard, similarity_between};
pub use top_rated::top_rated;
