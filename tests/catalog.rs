use std::sync::Arc;

use ecotrail::db::models::{
    ChatExchange, Destination, DestinationDraft, Event, EventDraft, Itinerary, LocalGuide,
    LocalGuideDraft,
};
use ecotrail::db::seed;
use ecotrail::db::store::Filter;
use ecotrail::db::{DocStore, Repository};
use ecotrail::error::ServiceError;

fn test_repo() -> Repository {
    let store = DocStore::open_in_memory().unwrap();
    Repository::new(Arc::new(store))
}

fn destination_draft(name: &str, category: &str) -> DestinationDraft {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "description": "A place worth visiting",
        "location": "Ranchi",
        "category": category,
        "best_time_to_visit": "October to March",
    }))
    .unwrap()
}

#[tokio::test]
async fn created_destination_is_retrievable_by_id() {
    let repo = test_repo();

    let created = repo.create(destination_draft("Jonha Falls", "eco")).await.unwrap();
    let fetched: Destination = repo.get_by_id(&created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn created_event_is_retrievable_by_id() {
    let repo = test_repo();

    let draft: EventDraft = serde_json::from_value(serde_json::json!({
        "name": "Karma Festival",
        "description": "Harvest festival",
        "location": "Ranchi",
        "date": "2025-08-15",
        "category": "festival",
    }))
    .unwrap();

    let created = repo.create(draft).await.unwrap();
    let fetched: Event = repo.get_by_id(&created.id).await.unwrap();

    assert_eq!(fetched, created);
    // The calendar date must survive as a plain string.
    assert_eq!(fetched.date, "2025-08-15");
}

#[tokio::test]
async fn created_guide_is_retrievable_and_starts_unrated() {
    let repo = test_repo();

    let draft: LocalGuideDraft = serde_json::from_value(serde_json::json!({
        "name": "Ramesh Munda",
        "specialization": "Tribal Culture",
        "location": "Ranchi",
        "contact": "+91-9876543210",
        "description": "Experienced guide",
        "price_per_day": "₹2000",
    }))
    .unwrap();

    let created = repo.create(draft).await.unwrap();
    let fetched: LocalGuide = repo.get_by_id(&created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.rating, 0.0);
    assert_eq!(fetched.reviews_count, 0);
}

#[tokio::test]
async fn inserted_itinerary_and_exchange_are_retrievable_by_id() {
    let repo = test_repo();

    let itinerary = Itinerary {
        id: "it-1".to_string(),
        user_name: "Asha".to_string(),
        days: 3,
        interests: vec!["wildlife".to_string()],
        budget: "medium".to_string(),
        destinations: vec![],
        activities: vec![],
        accommodation_suggestions: vec![],
        transport_suggestions: vec![],
        total_cost_estimate: None,
        created_at: chrono::Utc::now(),
    };
    repo.insert(&itinerary).await.unwrap();
    let fetched: Itinerary = repo.get_by_id("it-1").await.unwrap();
    assert_eq!(fetched, itinerary);

    let exchange = ChatExchange::new("s-1", "hello", "hi there");
    repo.insert(&exchange).await.unwrap();
    let fetched: ChatExchange = repo.get_by_id(&exchange.id).await.unwrap();
    assert_eq!(fetched, exchange);
}

#[tokio::test]
async fn get_by_id_of_unknown_id_is_not_found() {
    let repo = test_repo();

    let err = repo.get_by_id::<Destination>("missing").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn list_filters_destinations_by_category() {
    let repo = test_repo();
    repo.create(destination_draft("Hundru Falls", "eco")).await.unwrap();
    repo.create(destination_draft("Tribal Museum", "cultural")).await.unwrap();

    let eco = repo
        .list::<Destination>(Filter::new().eq("category", "eco"))
        .await
        .unwrap();
    assert_eq!(eco.len(), 1);
    assert_eq!(eco[0].name, "Hundru Falls");

    let all = repo.list::<Destination>(Filter::new()).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn event_registration_link_must_match_flag() {
    let repo = test_repo();

    let missing_link: EventDraft = serde_json::from_value(serde_json::json!({
        "name": "Handicrafts Fair",
        "description": "Annual fair",
        "location": "Ranchi",
        "date": "2025-10-15",
        "category": "fair",
        "registration_required": true,
    }))
    .unwrap();
    let err = repo.create(missing_link).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let stray_link: EventDraft = serde_json::from_value(serde_json::json!({
        "name": "Handicrafts Fair",
        "description": "Annual fair",
        "location": "Ranchi",
        "date": "2025-10-15",
        "category": "fair",
        "registration_link": "https://example.com/register",
    }))
    .unwrap();
    let err = repo.create(stray_link).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn reseed_converges_regardless_of_prior_contents() {
    let repo = test_repo();

    // Pre-existing junk must be cleared by the first run.
    repo.create(destination_draft("Old Entry", "adventure")).await.unwrap();

    let first = seed::reseed(&repo).await.unwrap();
    assert_eq!(first, 9);
    assert_eq!(repo.list::<Destination>(Filter::new()).await.unwrap().len(), 3);
    assert_eq!(repo.list::<Event>(Filter::new()).await.unwrap().len(), 4);
    assert_eq!(repo.list::<LocalGuide>(Filter::new()).await.unwrap().len(), 2);

    let second = seed::reseed(&repo).await.unwrap();
    assert_eq!(second, 9);
    assert_eq!(repo.list::<Destination>(Filter::new()).await.unwrap().len(), 3);
    assert_eq!(repo.list::<Event>(Filter::new()).await.unwrap().len(), 4);
    assert_eq!(repo.list::<LocalGuide>(Filter::new()).await.unwrap().len(), 2);
}
