//! Core domain types for the movie catalog.
//!
//! A `Catalog` is an ordered, immutable sequence of `MovieRecord`s. The
//! position of a record inside the catalog is its identity: lookups return
//! positions and the recommender excludes the query movie by position, not
//! by title, because titles are not guaranteed to be unique.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Type Aliases & Constants
// =============================================================================

/// Stable index of a record inside its catalog (0-based, load order)
pub type Position = usize;

/// Separator between genre tags in the raw `genres` column
pub const GENRE_DELIMITER: char = ';';

/// Separator used when a genre set is rendered back into a single string
pub const GENRE_DISPLAY_SEPARATOR: &str = "; ";

// =============================================================================
// GenreSet
// =============================================================================

/// A set of genre tags.
///
/// Tags keep their original spelling and first-seen order for display, while
/// membership and set operations compare the lower-cased form. Inserting
/// `"Action"` and then `"action"` therefore keeps a single `"Action"` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct GenreSet {
    /// Tags as written in the source, in insertion order
    tags: Vec<String>,
    /// Lower-cased tags used for comparisons
    keys: HashSet<String>,
}

impl GenreSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw `;`-delimited genre field.
    ///
    /// Tokens are trimmed and empty tokens are dropped, so `""`, `" "` and
    /// `";;"` all produce an empty set.
    pub fn parse(raw: &str) -> Self {
        raw.split(GENRE_DELIMITER).collect()
    }

    /// Inserts a tag, returning `false` if it was empty or already present
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        if !self.keys.insert(normalize(tag)) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Case-insensitive membership test
    pub fn contains(&self, tag: &str) -> bool {
        self.keys.contains(&normalize(tag.trim()))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags in their original spelling and insertion order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Lower-cased tags (unordered)
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of tags shared with `other`, ignoring case
    pub fn intersection_len(&self, other: &GenreSet) -> usize {
        // Probe the larger set with the smaller one
        let (small, large) = if self.keys.len() <= other.keys.len() {
            (&self.keys, &other.keys)
        } else {
            (&other.keys, &self.keys)
        };
        small.iter().filter(|key| large.contains(*key)).count()
    }

    /// Number of distinct tags across both sets, ignoring case
    pub fn union_len(&self, other: &GenreSet) -> usize {
        self.keys.len() + other.keys.len() - self.intersection_len(other)
    }

    /// Renders the tags joined with `"; "`
    pub fn joined(&self) -> String {
        self.tags.join(GENRE_DISPLAY_SEPARATOR)
    }
}

impl<S: AsRef<str>> FromIterator<S> for GenreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = GenreSet::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for GenreSet {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<GenreSet> for Vec<String> {
    fn from(set: GenreSet) -> Self {
        set.tags
    }
}

/// Case folding shared by genre keys and title lookups
pub(crate) fn normalize(value: &str) -> String {
    value.to_lowercase()
}

// =============================================================================
// MovieRecord
// =============================================================================

/// One row of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Position in the catalog; assigned when the catalog is built
    pub position: Position,
    /// Display title. Not unique.
    pub title: String,
    /// Always present, possibly empty
    pub genres: GenreSet,
    /// Average vote, 0.0 - 10.0
    pub rating: f64,
    /// Runtime in whole minutes
    pub runtime: u32,
}

impl MovieRecord {
    /// Creates a record that has not been placed in a catalog yet.
    ///
    /// `Catalog::from_records` overwrites the position.
    pub fn new(title: impl Into<String>, genres: GenreSet, rating: f64, runtime: u32) -> Self {
        Self {
            position: 0,
            title: title.into(),
            genres,
            rating,
            runtime,
        }
    }
}

// =============================================================================
// Catalog - the in-memory dataset
// =============================================================================

/// Immutable, ordered collection of movie records plus lookup indices.
///
/// Nothing mutates a `Catalog` after construction, so it can be shared
/// between threads behind an `Arc` without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub(crate) records: Vec<MovieRecord>,

    /// Lower-cased title -> first position carrying that title
    pub(crate) title_index: HashMap<String, Position>,
    /// Lower-cased genre tag -> ascending positions carrying that tag
    pub(crate) genre_index: HashMap<String, Vec<Position>>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in catalog order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    /// Get a record by position
    pub fn get(&self, position: Position) -> Option<&MovieRecord> {
        self.records.get(position)
    }

    /// Position of the first record whose title matches, ignoring case
    pub fn position_of_title(&self, title: &str) -> Option<Position> {
        self.title_index.get(&normalize(title)).copied()
    }

    /// First record whose title matches, ignoring case
    pub fn find_by_title(&self, title: &str) -> Option<&MovieRecord> {
        self.position_of_title(title)
            .and_then(|position| self.get(position))
    }

    /// Positions of every record tagged with `genre`, ignoring case.
    ///
    /// Returns an empty slice for unknown genres.
    pub fn positions_with_genre(&self, genre: &str) -> &[Position] {
        self.genre_index
            .get(&normalize(genre.trim()))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct genre tags (case-insensitive)
    pub fn genre_count(&self) -> usize {
        self.genre_index.len()
    }

    /// Distinct titles (exact spelling) in catalog order
    pub fn titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|record| record.title.as_str())
            .filter(|title| seen.insert(*title))
            .collect()
    }
}
