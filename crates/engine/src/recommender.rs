//! Genre-similarity recommendations.
//!
//! ## Algorithm
//! 1. Resolve the query title to the first matching record (case-insensitive)
//! 2. Score every other record against it with Jaccard similarity
//! 3. Stable sort by score descending, so ties keep catalog order
//! 4. Keep the first `top_n`
//!
//! The target is excluded by position, so other records that share its
//! title are still scored like any other candidate.
//!
//! ## Scan modes
//! `FullScan` scores the whole catalog. `GenreIndex` only scores records
//! that share at least one tag with the target, found through the catalog's
//! inverted genre index. Every other record scores exactly 0, which sorts
//! after every overlapping record, so appending them in catalog order gives
//! the same ranking as a full scan.

use crate::error::{QueryError, Result};
use crate::similarity::jaccard;
use catalog::{Catalog, MovieRecord, Position};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, instrument};

/// How candidates are gathered for scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Score every record in the catalog
    #[default]
    FullScan,
    /// Score only records that share a genre with the target
    GenreIndex,
}

/// A catalog record paired with its similarity to the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub record: &'a MovieRecord,
    /// Jaccard similarity in `[0, 1]`
    pub score: f64,
}

/// Ranked result of one query
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    /// The record the query title resolved to
    pub target: &'a MovieRecord,
    /// Up to `top_n` candidates, best first
    pub candidates: Vec<ScoredCandidate<'a>>,
}

impl<'a> Recommendation<'a> {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCandidate<'a>> {
        self.candidates.iter()
    }
}

/// Recommend the `top_n` records whose genres best match `title`'s.
///
/// Returns `QueryError::NotFound` when no record has that title and
/// `QueryError::InvalidArgument` when `top_n` is zero. Asking for more
/// results than there are candidates returns all of them.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    title: &str,
    top_n: usize,
) -> Result<Recommendation<'a>> {
    recommend_with_mode(catalog, title, top_n, ScanMode::FullScan)
}

#[instrument(skip(catalog), fields(catalog_len = catalog.len()))]
fn recommend_with_mode<'a>(
    catalog: &'a Catalog,
    title: &str,
    top_n: usize,
    mode: ScanMode,
) -> Result<Recommendation<'a>> {
    if top_n == 0 {
        return Err(QueryError::InvalidArgument("top_n must be at least 1".to_string()));
    }

    let target = catalog
        .find_by_title(title)
        .ok_or_else(|| QueryError::NotFound {
            title: title.to_string(),
        })?;
    debug!(
        "Resolved '{}' to position {} [{}]",
        title,
        target.position,
        target.genres.joined()
    );

    let candidates = match mode {
        ScanMode::FullScan => rank_full_scan(catalog, target, top_n),
        ScanMode::GenreIndex => rank_genre_index(catalog, target, top_n),
    };
    debug!("Returning {} candidates", candidates.len());

    Ok(Recommendation { target, candidates })
}

fn rank_full_scan<'a>(
    catalog: &'a Catalog,
    target: &'a MovieRecord,
    top_n: usize,
) -> Vec<ScoredCandidate<'a>> {
    // Parallel collect keeps catalog order, which the stable sort relies on
    let mut scored: Vec<ScoredCandidate<'a>> = catalog
        .records()
        .par_iter()
        .filter(|record| record.position != target.position)
        .map(|record| ScoredCandidate {
            record,
            score: jaccard(&target.genres, &record.genres),
        })
        .collect();

    sort_by_score(&mut scored);
    scored.truncate(top_n);
    scored
}

fn rank_genre_index<'a>(
    catalog: &'a Catalog,
    target: &'a MovieRecord,
    top_n: usize,
) -> Vec<ScoredCandidate<'a>> {
    let mut overlapping: Vec<Position> = target
        .genres
        .keys()
        .flat_map(|genre| catalog.positions_with_genre(genre).iter().copied())
        .filter(|&position| position != target.position)
        .collect();
    overlapping.sort_unstable();
    overlapping.dedup();
    debug!(
        "Genre index narrowed {} records to {} overlapping",
        catalog.len(),
        overlapping.len()
    );

    let mut scored: Vec<ScoredCandidate<'a>> = overlapping
        .iter()
        .filter_map(|&position| catalog.get(position))
        .map(|record| ScoredCandidate {
            record,
            score: jaccard(&target.genres, &record.genres),
        })
        .collect();

    sort_by_score(&mut scored);
    scored.truncate(top_n);

    // Pad with zero-overlap records in catalog order
    if scored.len() < top_n {
        let padding = catalog
            .iter()
            .filter(|record| {
                record.position != target.position
                    && overlapping.binary_search(&record.position).is_err()
            })
            .map(|record| ScoredCandidate { record, score: 0.0 })
            .take(top_n - scored.len());
        scored.extend(padding);
    }

    scored
}

/// Stable sort, highest score first
fn sort_by_score(scored: &mut [ScoredCandidate<'_>]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Recommendation service bound to a shared catalog.
///
/// Cloning is cheap; every clone shares the same `Arc<Catalog>`.
///
/// ## Usage
/// ```ignore
/// let recommender = Recommender::new(catalog.clone())
///     .with_scan_mode(ScanMode::GenreIndex);
///
/// let result = recommender.recommend("Inception", 5)?;
/// ```
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    scan_mode: ScanMode,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            scan_mode: ScanMode::default(),
        }
    }

    /// Configure how candidates are gathered (default: `FullScan`)
    pub fn with_scan_mode(mut self, scan_mode: ScanMode) -> Self {
        self.scan_mode = scan_mode;
        self
    }

    pub fn scan_mode(&self) -> ScanMode {
        self.scan_mode
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// See [`recommend`]
    pub fn recommend(&self, title: &str, top_n: usize) -> Result<Recommendation<'_>> {
        recommend_with_mode(&self.catalog, title, top_n, self.scan_mode)
    }
}
