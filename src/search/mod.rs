use serde::Serialize;

use crate::db::models::{Destination, DestinationCategory, Event, LocalGuide};
use crate::db::repository::Repository;
use crate::db::store::Filter;
use crate::error::ServiceError;

/// Per-collection cap on search hits.
const SEARCH_CAP: usize = 50;

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub destinations: Vec<Destination>,
    pub events: Vec<Event>,
    pub guides: Vec<LocalGuide>,
}

/// Fan-out substring query across the three catalog collections. The
/// optional category narrows destinations only. All-or-nothing: if any
/// sub-search fails the whole call fails, no partial results.
pub async fn search(
    repo: &Repository,
    term: &str,
    category: Option<DestinationCategory>,
) -> Result<SearchResults, ServiceError> {
    let mut destination_filter =
        Filter::new().contains_any(&["name", "description", "location"], term);
    if let Some(category) = category {
        destination_filter = destination_filter.eq("category", category.as_str());
    }
    let destinations = repo
        .find::<Destination>(destination_filter, SEARCH_CAP)
        .await?;

    let event_filter = Filter::new().contains_any(&["name", "description", "location"], term);
    let events = repo.find::<Event>(event_filter, SEARCH_CAP).await?;

    let guide_filter = Filter::new().contains_any(&["name", "specialization", "location"], term);
    let guides = repo.find::<LocalGuide>(guide_filter, SEARCH_CAP).await?;

    Ok(SearchResults {
        destinations,
        events,
        guides,
    })
}
