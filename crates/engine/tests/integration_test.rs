//! Integration tests for the engine.
//!
//! These tests load a catalog from CSV text and run queries end to end, the
//! way the CLI does.

use catalog::Catalog;
use engine::{
    format_recommendations, format_top_rated, jaccard, recommend, top_rated, QueryError,
    Recommender, ScanMode,
};
use std::sync::Arc;

const CATALOG_CSV: &str = "\
title,genres,vote_average,runtime,overview
The Matrix,Action;Science Fiction,8.2,136,\"Neo, a hacker\"
Inception,Action;Science Fiction;Adventure,8.4,148,Dreams
Heat,Action;Crime;Drama,7.9,170,Heists
Toy Story,Animation;Comedy;Family,8.0,81,Toys
Blank Slate,,5.5,90,
The Matrix Reloaded,Action;Science Fiction;Adventure;Thriller,7.0,138,Sequel
Up,Animation;Comedy;Family;Adventure,7.9,96,Balloons
Se7en,Crime;Mystery;Thriller,8.4,127,Sins
";

fn load() -> Arc<Catalog> {
    Arc::new(Catalog::load_from_reader(CATALOG_CSV.as_bytes(), "inline").unwrap())
}

#[test]
fn test_recommend_and_format() {
    let catalog = load();
    let result = recommend(&catalog, "the matrix", 3).unwrap();
    let rows = format_recommendations(&result);

    assert_eq!(result.target.title, "The Matrix");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].title, "Inception");
    assert_eq!(rows[0].similarity, "66.67%");
    assert_eq!(rows[0].genres, "Action; Science Fiction; Adventure");
    assert_eq!(rows[1].title, "The Matrix Reloaded");
    assert_eq!(rows[1].similarity, "50.00%");
    assert_eq!(rows[2].title, "Heat");
    assert_eq!(rows[2].similarity, "25.00%");
}

#[test]
fn test_results_never_include_target_and_are_sorted() {
    let catalog = load();

    for record in catalog.iter() {
        let top_n = catalog.len() - 1;
        let result = recommend(&catalog, &record.title, top_n).unwrap();

        assert_eq!(result.len(), top_n);
        assert!(result.iter().all(|c| c.record.position != result.target.position));
        for pair in result.candidates.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for candidate in result.iter() {
            assert_eq!(
                candidate.score,
                jaccard(&result.target.genres, &candidate.record.genres)
            );
        }
    }
}

#[test]
fn test_not_found_is_a_typed_outcome() {
    let catalog = load();
    let recommender = Recommender::new(catalog);

    match recommender.recommend("nonexistent-title-xyz", 5) {
        Err(QueryError::NotFound { title }) => assert_eq!(title, "nonexistent-title-xyz"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_index_scan_matches_full_scan_on_loaded_catalog() {
    let catalog = load();
    let full = Recommender::new(catalog.clone());
    let indexed = Recommender::new(catalog.clone()).with_scan_mode(ScanMode::GenreIndex);

    for record in catalog.iter() {
        for top_n in [1, 3, catalog.len()] {
            assert_eq!(
                full.recommend(&record.title, top_n).unwrap(),
                indexed.recommend(&record.title, top_n).unwrap()
            );
        }
    }
}

#[test]
fn test_top_rated_table() {
    let catalog = load();
    let records = top_rated(&catalog, 3).unwrap();
    let rows = format_top_rated(&records);

    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Inception", "Se7en", "The Matrix"]);
    assert_eq!(rows[0].rating, "8.40");
    assert_eq!(rows[2].rank, 3);
}

#[test]
fn test_rows_serialize_to_json() {
    let catalog = load();
    let result = recommend(&catalog, "Toy Story", 1).unwrap();
    let json = serde_json::to_value(format_recommendations(&result)).unwrap();

    assert_eq!(json[0]["title"], "Up");
    assert_eq!(json[0]["similarity"], "75.00%");
    assert_eq!(json[0]["runtime"], 96);
}
