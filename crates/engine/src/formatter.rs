//! Display rows for ranked results.
//!
//! Pure string shaping: no sorting, filtering or re-scoring happens here.

use crate::recommender::Recommendation;
use catalog::MovieRecord;
use serde::Serialize;

/// One recommended movie, ready to print
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRow {
    pub title: String,
    /// Genres joined with `"; "` in load order
    pub genres: String,
    pub rating: f64,
    /// Minutes
    pub runtime: u32,
    /// Similarity as a percentage with two decimals, e.g. `"42.00%"`
    pub similarity: String,
}

/// One entry of the top-rated table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopRatedRow {
    pub rank: usize,
    pub title: String,
    pub genres: String,
    /// Two decimals, e.g. `"8.40"`
    pub rating: String,
    pub runtime: u32,
}

pub fn format_recommendations(recommendation: &Recommendation<'_>) -> Vec<RecommendationRow> {
    recommendation
        .iter()
        .map(|candidate| RecommendationRow {
            title: candidate.record.title.clone(),
            genres: candidate.record.genres.joined(),
            rating: candidate.record.rating,
            runtime: candidate.record.runtime,
            similarity: format_percentage(candidate.score),
        })
        .collect()
}

pub fn format_top_rated(records: &[&MovieRecord]) -> Vec<TopRatedRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| TopRatedRow {
            rank: i + 1,
            title: record.title.clone(),
            genres: record.genres.joined(),
            rating: format!("{:.2}", record.rating),
            runtime: record.runtime,
        })
        .collect()
}

/// `0.4213` -> `"42.13%"`
pub fn format_percentage(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

/// Two-decimal rendering used by the ad-hoc similarity calculator
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}
