//! Highest-rated movies in the catalog.

use crate::error::{QueryError, Result};
use catalog::{Catalog, MovieRecord};

/// Up to `n` records ordered by rating, highest first.
///
/// Equal ratings keep catalog order.
pub fn top_rated(catalog: &Catalog, n: usize) -> Result<Vec<&MovieRecord>> {
    if n == 0 {
        return Err(QueryError::InvalidArgument("n must be at least 1".to_string()));
    }

    let mut records: Vec<&MovieRecord> = catalog.iter().collect();
    records.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    records.truncate(n);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::GenreSet;

    fn rated(title: &str, rating: f64) -> MovieRecord {
        MovieRecord::new(title, GenreSet::new(), rating, 90)
    }

    #[test]
    fn test_sorted_by_rating_descending() {
        let catalog = Catalog::from_records(vec![
            rated("Low", 3.1),
            rated("High", 9.0),
            rated("Mid", 6.5),
        ]);
        let top: Vec<&str> = top_rated(&catalog, 2)
            .unwrap()
            .into_iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(top, vec!["High", "Mid"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::from_records(vec![
            rated("First", 8.0),
            rated("Best", 9.5),
            rated("Second", 8.0),
        ]);
        let top: Vec<usize> = top_rated(&catalog, 3)
            .unwrap()
            .into_iter()
            .map(|r| r.position)
            .collect();
        assert_eq!(top, vec![1, 0, 2]);
    }

    #[test]
    fn test_n_larger_than_catalog() {
        let catalog = Catalog::from_records(vec![rated("Only", 5.0)]);
        assert_eq!(top_rated(&catalog, 10).unwrap().len(), 1);
    }

    #[test]
    fn test_zero_n_is_invalid() {
        let catalog = Catalog::from_records(vec![rated("Only", 5.0)]);
        assert!(matches!(
            top_rated(&catalog, 0),
            Err(QueryError::InvalidArgument(_))
        ));
    }
}
