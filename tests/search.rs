use std::sync::Arc;

use ecotrail::db::models::DestinationCategory;
use ecotrail::db::seed;
use ecotrail::db::{DocStore, Repository};
use ecotrail::search::search;

async fn seeded_repo() -> Repository {
    let store = DocStore::open_in_memory().unwrap();
    let repo = Repository::new(Arc::new(store));
    seed::reseed(&repo).await.unwrap();
    repo
}

#[tokio::test]
async fn term_matches_destinations_by_name_substring() {
    let repo = seeded_repo().await;

    let results = search(&repo, "falls", None).await.unwrap();

    let names: Vec<&str> = results.destinations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Hundru Falls"]);
}

#[tokio::test]
async fn category_filter_narrows_destinations_only() {
    let repo = seeded_repo().await;

    let results = search(&repo, "falls", Some(DestinationCategory::Cultural))
        .await
        .unwrap();
    assert!(results.destinations.is_empty());

    // Events and guides ignore the category filter entirely.
    let results = search(&repo, "festival", Some(DestinationCategory::Cultural))
        .await
        .unwrap();
    assert!(!results.events.is_empty());
}

#[tokio::test]
async fn matching_is_case_insensitive_across_fields() {
    let repo = seeded_repo().await;

    let results = search(&repo, "RANCHI", None).await.unwrap();
    assert!(!results.destinations.is_empty());
    assert!(!results.guides.is_empty());

    // Guides match on specialization too.
    let results = search(&repo, "wildlife", None).await.unwrap();
    assert!(results.guides.iter().any(|g| g.name == "Sunita Oraon"));
}

#[tokio::test]
async fn unmatched_term_returns_three_empty_sets() {
    let repo = seeded_repo().await;

    let results = search(&repo, "himalaya", None).await.unwrap();
    assert!(results.destinations.is_empty());
    assert!(results.events.is_empty());
    assert!(results.guides.is_empty());
}
