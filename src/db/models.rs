use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// A persisted catalog type: knows its collection and exposes its id.
pub trait CatalogEntity: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: &'static str;
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// Validating builder for a catalog entity. The repository assigns the id
/// and creation timestamp; the draft never carries either.
pub trait Draft {
    type Entity: CatalogEntity;

    fn build(self, id: String, created_at: DateTime<Utc>) -> Result<Self::Entity, ServiceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationCategory {
    Eco,
    Cultural,
    Adventure,
    Festivals,
}

impl DestinationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationCategory::Eco => "eco",
            DestinationCategory::Cultural => "cultural",
            DestinationCategory::Adventure => "adventure",
            DestinationCategory::Festivals => "festivals",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Festival,
    Fair,
    Cultural,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Festival => "festival",
            EventCategory::Fair => "fair",
            EventCategory::Cultural => "cultural",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub category: DestinationCategory,
    #[serde(default)]
    pub images: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub best_time_to_visit: String,
    pub entry_fee: Option<String>,
    #[serde(default)]
    pub nearby_attractions: Vec<String>,
    #[serde(default)]
    pub eco_tips: Vec<String>,
    pub cultural_significance: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CatalogEntity for Destination {
    const COLLECTION: &'static str = "destinations";
    const KIND: &'static str = "Destination";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DestinationDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub category: DestinationCategory,
    #[serde(default)]
    pub images: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub best_time_to_visit: String,
    pub entry_fee: Option<String>,
    #[serde(default)]
    pub nearby_attractions: Vec<String>,
    #[serde(default)]
    pub eco_tips: Vec<String>,
    pub cultural_significance: Option<String>,
}

impl Draft for DestinationDraft {
    type Entity = Destination;

    fn build(self, id: String, created_at: DateTime<Utc>) -> Result<Destination, ServiceError> {
        Ok(Destination {
            id,
            name: self.name,
            description: self.description,
            location: self.location,
            category: self.category,
            images: self.images,
            latitude: self.latitude,
            longitude: self.longitude,
            best_time_to_visit: self.best_time_to_visit,
            entry_fee: self.entry_fee,
            nearby_attractions: self.nearby_attractions,
            eco_tips: self.eco_tips,
            cultural_significance: self.cultural_significance,
            created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    /// Calendar date string, deliberately not a timestamp.
    pub date: String,
    pub category: EventCategory,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub registration_required: bool,
    pub registration_link: Option<String>,
    pub cultural_significance: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CatalogEntity for Event {
    const COLLECTION: &'static str = "events";
    const KIND: &'static str = "Event";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub category: EventCategory,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub registration_required: bool,
    pub registration_link: Option<String>,
    pub cultural_significance: Option<String>,
}

impl Draft for EventDraft {
    type Entity = Event;

    fn build(self, id: String, created_at: DateTime<Utc>) -> Result<Event, ServiceError> {
        // A registration link only makes sense together with the flag.
        if self.registration_required && self.registration_link.is_none() {
            return Err(ServiceError::Validation(
                "registration_link is required when registration_required is set".to_string(),
            ));
        }
        if !self.registration_required && self.registration_link.is_some() {
            return Err(ServiceError::Validation(
                "registration_link given but registration_required is not set".to_string(),
            ));
        }

        Ok(Event {
            id,
            name: self.name,
            description: self.description,
            location: self.location,
            date: self.date,
            category: self.category,
            images: self.images,
            registration_required: self.registration_required,
            registration_link: self.registration_link,
            cultural_significance: self.cultural_significance,
            created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalGuide {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub location: String,
    pub contact: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: u32,
    #[serde(default)]
    pub languages: Vec<String>,
    pub description: String,
    pub price_per_day: String,
    #[serde(default)]
    pub availability: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl CatalogEntity for LocalGuide {
    const COLLECTION: &'static str = "guides";
    const KIND: &'static str = "Guide";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalGuideDraft {
    pub name: String,
    pub specialization: String,
    pub location: String,
    pub contact: String,
    #[serde(default)]
    pub languages: Vec<String>,
    pub description: String,
    pub price_per_day: String,
    #[serde(default)]
    pub availability: Vec<String>,
}

impl Draft for LocalGuideDraft {
    type Entity = LocalGuide;

    fn build(self, id: String, created_at: DateTime<Utc>) -> Result<LocalGuide, ServiceError> {
        Ok(LocalGuide {
            id,
            name: self.name,
            specialization: self.specialization,
            location: self.location,
            contact: self.contact,
            // New guides start unrated; ratings accrue through reviews.
            rating: 0.0,
            reviews_count: 0,
            languages: self.languages,
            description: self.description,
            price_per_day: self.price_per_day,
            availability: self.availability,
            created_at,
        })
    }
}

/// Durable output of one itinerary synthesis run. Never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: String,
    pub user_name: String,
    pub days: u32,
    pub interests: Vec<String>,
    pub budget: String,
    pub destinations: Vec<String>,
    pub activities: Vec<String>,
    pub accommodation_suggestions: Vec<String>,
    pub transport_suggestions: Vec<String>,
    pub total_cost_estimate: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CatalogEntity for Itinerary {
    const COLLECTION: &'static str = "itineraries";
    const KIND: &'static str = "Itinerary";

    fn id(&self) -> &str {
        &self.id
    }
}

/// One completed user/assistant exchange. Persisted exactly once, only after
/// the provider has replied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub id: String,
    pub session_id: String,
    pub user_message: String,
    pub assistant_reply: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatExchange {
    pub fn new(session_id: &str, user_message: &str, assistant_reply: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            session_id: session_id.to_string(),
            user_message: user_message.to_string(),
            assistant_reply: assistant_reply.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl CatalogEntity for ChatExchange {
    const COLLECTION: &'static str = "chat_messages";
    const KIND: &'static str = "Exchange";

    fn id(&self) -> &str {
        &self.id
    }
}
