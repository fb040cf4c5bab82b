use serde::{Deserialize, Serialize};

use crate::db::models::{DestinationCategory, EventCategory};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub category: Option<DestinationCategory>,
}

#[derive(Debug, Deserialize)]
pub struct DestinationListQuery {
    pub category: Option<DestinationCategory>,
}

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    pub category: Option<EventCategory>,
}

#[derive(Debug, Deserialize)]
pub struct GuideListQuery {
    pub location: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub inserted: usize,
}
