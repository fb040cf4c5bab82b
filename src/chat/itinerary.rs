use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::chat::assistant::ChatService;
use crate::db::models::Itinerary;
use crate::error::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryRequest {
    pub user_name: String,
    pub days: u32,
    pub interests: Vec<String>,
    pub budget: String,
    pub special_requirements: Option<String>,
}

impl ChatService {
    /// Turn a structured travel request into a persisted itinerary. The
    /// conversation is keyed by a session id derived from the traveler name,
    /// so repeated requests for the same name continue one conversation.
    ///
    /// The provider's free-text reply is currently not parsed into the
    /// structured fields; the itinerary carries a fixed illustrative set.
    /// TODO: derive destinations/activities from the reply once a response
    /// format is agreed with the provider prompt.
    pub async fn generate_itinerary(
        &self,
        request: ItineraryRequest,
    ) -> Result<Itinerary, ServiceError> {
        if request.days < 1 {
            return Err(ServiceError::Validation(
                "days must be at least 1".to_string(),
            ));
        }
        if request.interests.is_empty() {
            return Err(ServiceError::Validation(
                "at least one interest is required".to_string(),
            ));
        }

        let session_id = format!("itinerary_{}", request.user_name);
        let prompt = build_prompt(&request);

        let _reply = self.converse(&session_id, &prompt).await?;

        let itinerary = Itinerary {
            id: Uuid::new_v4().to_string(),
            user_name: request.user_name,
            days: request.days,
            interests: request.interests,
            budget: request.budget.clone(),
            destinations: fixed(&["Hundru Falls", "Betla National Park", "Tribal Museum"]),
            activities: fixed(&["Waterfall trekking", "Wildlife safari", "Cultural tour"]),
            accommodation_suggestions: fixed(&["Eco-lodge", "Tribal homestay", "Budget hotel"]),
            transport_suggestions: fixed(&["Local taxi", "Government bus", "Private vehicle"]),
            total_cost_estimate: Some(request.budget),
            created_at: Utc::now(),
        };

        self.repo.insert(&itinerary).await?;

        info!(
            "Generated {}-day itinerary for {}",
            itinerary.days, itinerary.user_name
        );
        Ok(itinerary)
    }
}

fn build_prompt(request: &ItineraryRequest) -> String {
    format!(
        "Generate a detailed {days}-day itinerary for Jharkhand tourism.

User Details:
- Name: {name}
- Days: {days}
- Interests: {interests}
- Budget: {budget}
- Special Requirements: {special}

Please provide:
1. List of destinations to visit (specific names)
2. Daily activities
3. Accommodation suggestions
4. Transportation recommendations
5. Cost estimates

Focus on eco-tourism and cultural experiences. Include tribal villages, waterfalls, wildlife sanctuaries, and cultural sites.
Format the response as a practical, day-wise itinerary.",
        days = request.days,
        name = request.user_name,
        interests = request.interests.join(", "),
        budget = request.budget,
        special = request.special_requirements.as_deref().unwrap_or("None"),
    )
}

fn fixed(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
