use actix_web::{get, post, web, HttpResponse};

use crate::api::models::{
    ChatReply, ChatRequest, DestinationListQuery, EventListQuery, GuideListQuery, SearchQuery,
    SeedResponse,
};
use crate::chat::{ChatService, ItineraryRequest};
use crate::db::models::{
    Destination, DestinationDraft, Event, EventDraft, Itinerary, LocalGuide, LocalGuideDraft,
};
use crate::db::repository::Repository;
use crate::db::store::Filter;
use crate::db::{models::ChatExchange, seed};
use crate::error::ServiceError;
use crate::search;

#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Jharkhand Eco-Tourism API",
        "version": "1.0.0",
    }))
}

// --- Destinations ---

#[post("/destinations")]
pub async fn create_destination(
    repo: web::Data<Repository>,
    draft: web::Json<DestinationDraft>,
) -> Result<HttpResponse, ServiceError> {
    let destination = repo.create(draft.into_inner()).await?;
    Ok(HttpResponse::Ok().json(destination))
}

#[get("/destinations")]
pub async fn list_destinations(
    repo: web::Data<Repository>,
    query: web::Query<DestinationListQuery>,
) -> Result<HttpResponse, ServiceError> {
    let mut filter = Filter::new();
    if let Some(category) = query.category {
        filter = filter.eq("category", category.as_str());
    }
    let destinations = repo.list::<Destination>(filter).await?;
    Ok(HttpResponse::Ok().json(destinations))
}

#[get("/destinations/{id}")]
pub async fn get_destination(
    repo: web::Data<Repository>,
    id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let destination = repo.get_by_id::<Destination>(&id).await?;
    Ok(HttpResponse::Ok().json(destination))
}

// --- Events ---

#[post("/events")]
pub async fn create_event(
    repo: web::Data<Repository>,
    draft: web::Json<EventDraft>,
) -> Result<HttpResponse, ServiceError> {
    let event = repo.create(draft.into_inner()).await?;
    Ok(HttpResponse::Ok().json(event))
}

#[get("/events")]
pub async fn list_events(
    repo: web::Data<Repository>,
    query: web::Query<EventListQuery>,
) -> Result<HttpResponse, ServiceError> {
    let mut filter = Filter::new();
    if let Some(category) = query.category {
        filter = filter.eq("category", category.as_str());
    }
    let events = repo.list::<Event>(filter).await?;
    Ok(HttpResponse::Ok().json(events))
}

// --- Guides ---

#[post("/guides")]
pub async fn create_guide(
    repo: web::Data<Repository>,
    draft: web::Json<LocalGuideDraft>,
) -> Result<HttpResponse, ServiceError> {
    let guide = repo.create(draft.into_inner()).await?;
    Ok(HttpResponse::Ok().json(guide))
}

#[get("/guides")]
pub async fn list_guides(
    repo: web::Data<Repository>,
    query: web::Query<GuideListQuery>,
) -> Result<HttpResponse, ServiceError> {
    let mut filter = Filter::new();
    if let Some(location) = &query.location {
        filter = filter.eq("location", location.as_str());
    }
    if let Some(specialization) = &query.specialization {
        filter = filter.contains_any(&["specialization"], specialization);
    }
    let guides = repo.list::<LocalGuide>(filter).await?;
    Ok(HttpResponse::Ok().json(guides))
}

// --- Itineraries ---

#[post("/itinerary/generate")]
pub async fn generate_itinerary(
    chat: web::Data<ChatService>,
    request: web::Json<ItineraryRequest>,
) -> Result<HttpResponse, ServiceError> {
    let itinerary = chat.generate_itinerary(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(itinerary))
}

#[get("/itineraries")]
pub async fn list_itineraries(
    repo: web::Data<Repository>,
) -> Result<HttpResponse, ServiceError> {
    let itineraries = repo.list::<Itinerary>(Filter::new()).await?;
    Ok(HttpResponse::Ok().json(itineraries))
}

// --- Chat ---

#[post("/chat")]
pub async fn chat_with_assistant(
    chat: web::Data<ChatService>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, ServiceError> {
    let request = request.into_inner();
    let reply = chat.send(&request.session_id, &request.message).await?;
    Ok(HttpResponse::Ok().json(ChatReply {
        reply,
        session_id: request.session_id,
    }))
}

#[get("/chat/history/{session_id}")]
pub async fn chat_history(
    repo: web::Data<Repository>,
    session_id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let filter = Filter::new().eq("session_id", session_id.as_str());
    let exchanges = repo.list::<ChatExchange>(filter).await?;
    Ok(HttpResponse::Ok().json(exchanges))
}

// --- Search ---

#[post("/search")]
pub async fn search_content(
    repo: web::Data<Repository>,
    query: web::Json<SearchQuery>,
) -> Result<HttpResponse, ServiceError> {
    let query = query.into_inner();
    let results = search::search(&repo, &query.query, query.category).await?;
    Ok(HttpResponse::Ok().json(results))
}

// --- Seeding ---

#[post("/seed-data")]
pub async fn seed_data(repo: web::Data<Repository>) -> Result<HttpResponse, ServiceError> {
    let inserted = seed::reseed(&repo).await?;
    Ok(HttpResponse::Ok().json(SeedResponse { inserted }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(root)
            .service(create_destination)
            .service(list_destinations)
            .service(get_destination)
            .service(create_event)
            .service(list_events)
            .service(create_guide)
            .service(list_guides)
            .service(generate_itinerary)
            .service(list_itineraries)
            .service(chat_with_assistant)
            .service(chat_history)
            .service(search_content)
            .service(seed_data),
    );
}
