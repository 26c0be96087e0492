//! Catalog construction and indexing.
//!
//! Builds a `Catalog` from parsed records:
//! - assigns stable positions in load order
//! - builds the case-insensitive title index (first occurrence wins)
//! - builds the inverted genre index (tag -> ascending positions)

use crate::error::Result;
use crate::parser;
use crate::types::{normalize, Catalog, MovieRecord};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

impl Catalog {
    /// Load the catalog from a CSV file.
    ///
    /// This is the main entry point. Loading is deterministic: the same file
    /// always produces an equal `Catalog`.
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);
        let start = Instant::now();

        let parsed = parser::parse_catalog_csv(path)?;
        let catalog = Self::from_records(parsed.records);

        info!(
            "Catalog built: {} movies, {} genres, {} rows skipped in {:?}",
            catalog.len(),
            catalog.genre_count(),
            parsed.skipped,
            start.elapsed()
        );
        Ok(catalog)
    }

    /// Load the catalog from any CSV reader
    pub fn load_from_reader<R: Read>(reader: R, source: &str) -> Result<Self> {
        let parsed = parser::parse_catalog_reader(reader, source)?;
        if parsed.skipped > 0 {
            info!("{} rows skipped while loading {}", parsed.skipped, source);
        }
        Ok(Self::from_records(parsed.records))
    }

    /// Build a catalog from records in the given order.
    ///
    /// Positions are reassigned to match the order of `records`.
    pub fn from_records(records: impl IntoIterator<Item = MovieRecord>) -> Self {
        let records: Vec<MovieRecord> = records
            .into_iter()
            .enumerate()
            .map(|(position, mut record)| {
                record.position = position;
                record
            })
            .collect();

        let mut catalog = Catalog {
            records,
            title_index: HashMap::new(),
            genre_index: HashMap::new(),
        };
        catalog.build_indices();
        catalog
    }

    /// Populate `title_index` and `genre_index` from `records`
    fn build_indices(&mut self) {
        let mut duplicate_titles = 0usize;

        for record in &self.records {
            let key = normalize(&record.title);
            if self.title_index.contains_key(&key) {
                duplicate_titles += 1;
            } else {
                self.title_index.insert(key, record.position);
            }

            for genre in record.genres.keys() {
                self.genre_index
                    .entry(genre.to_string())
                    .or_default()
                    .push(record.position);
            }
        }

        if duplicate_titles > 0 {
            warn!(
                "{} records share a title with an earlier record; lookups resolve to the first",
                duplicate_titles
            );
        }
    }
}

impl FromIterator<MovieRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = MovieRecord>>(iter: I) -> Self {
        Catalog::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenreSet;

    fn movie(title: &str, genres: &str) -> MovieRecord {
        MovieRecord::new(title, GenreSet::parse(genres), 7.0, 100)
    }

    fn sample() -> Catalog {
        Catalog::from_records(vec![
            movie("Alien", "Horror;Science Fiction"),
            movie("Heat", "Crime;Drama"),
            movie("alien", "Documentary"),
            movie("Blade Runner", "science fiction;Drama"),
        ])
    }

    #[test]
    fn test_positions_follow_load_order() {
        let catalog = sample();
        let positions: Vec<_> = catalog.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_title_lookup_is_case_insensitive_first_match() {
        let catalog = sample();
        assert_eq!(catalog.position_of_title("ALIEN"), Some(0));
        assert_eq!(catalog.find_by_title("heat").map(|r| r.position), Some(1));
        assert!(catalog.find_by_title("Ran").is_none());
    }

    #[test]
    fn test_genre_index_ignores_case() {
        let catalog = sample();
        assert_eq!(catalog.positions_with_genre("Science Fiction"), &[0, 3]);
        assert_eq!(catalog.positions_with_genre("drama"), &[1, 3]);
        assert!(catalog.positions_with_genre("Western").is_empty());
        assert_eq!(catalog.genre_count(), 5);
    }

    #[test]
    fn test_titles_are_unique_exact_spelling() {
        let catalog = Catalog::from_records(vec![
            movie("Heat", "Crime"),
            movie("Heat", "Drama"),
            movie("heat", "Drama"),
        ]);
        assert_eq!(catalog.titles(), vec!["Heat", "heat"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_records(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
        assert!(catalog.position_of_title("anything").is_none());
    }

    #[test]
    fn test_load_from_reader() {
        let csv = "title,genres,vote_average,runtime\nA,Drama,5,90\nB,,6,80\n";
        let catalog = Catalog::load_from_reader(csv.as_bytes(), "inline").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(|r| r.position), Some(1));
    }

    #[test]
    fn test_bad_rows_do_not_shift_positions() {
        let csv = "title,genres,vote_average,runtime\n\
                   A,Drama,7.0,90\n\
                   B,Drama,6.0,\n\
                   C,Drama,5.0,100\n";
        let catalog = Catalog::load_from_reader(csv.as_bytes(), "inline").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.position_of_title("c"), Some(1));
        assert!(catalog.find_by_title("B").is_none());
    }
}
