//! Genre-set similarity.

use catalog::GenreSet;

/// Jaccard similarity `|A ∩ B| / |A ∪ B|` of two genre sets, in `[0, 1]`.
///
/// Tags compare case-insensitively. Two empty sets score `0.0`, not NaN.
pub fn jaccard(a: &GenreSet, b: &GenreSet) -> f64 {
    let union = a.union_len(b);
    if union == 0 {
        return 0.0;
    }
    a.intersection_len(b) as f64 / union as f64
}

/// Similarity of two free-text genre lists such as `"action; adventure"`.
///
/// Both inputs go through the same normalization as the catalog's `genres`
/// column, so blank or malformed input is just an empty set.
pub fn similarity_between(raw_a: &str, raw_b: &str) -> f64 {
    jaccard(&GenreSet::parse(raw_a), &GenreSet::parse(raw_b))
}
