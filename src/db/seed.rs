use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::db::models::{
    CatalogEntity, Destination, DestinationCategory, Event, EventCategory, LocalGuide,
};
use crate::db::repository::Repository;
use crate::db::store::Filter;
use crate::error::ServiceError;

/// Clear the destination, event, and guide collections and repopulate them
/// from the built-in sample catalog. Running it any number of times
/// converges to the same final contents. A failure partway through is
/// surfaced and not rolled back.
pub async fn reseed(repo: &Repository) -> Result<usize, ServiceError> {
    info!("Reseeding sample catalog");

    let store = repo.store();
    store.delete_many(Destination::COLLECTION, &Filter::new()).await?;
    store.delete_many(Event::COLLECTION, &Filter::new()).await?;
    store.delete_many(LocalGuide::COLLECTION, &Filter::new()).await?;

    let mut inserted = 0;
    for destination in sample_destinations() {
        repo.insert(&destination).await?;
        inserted += 1;
    }
    for event in sample_events() {
        repo.insert(&event).await?;
        inserted += 1;
    }
    for guide in sample_guides() {
        repo.insert(&guide).await?;
        inserted += 1;
    }

    info!("Seeded {} catalog entries", inserted);
    Ok(inserted)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_destinations() -> Vec<Destination> {
    vec![
        Destination {
            id: Uuid::new_v4().to_string(),
            name: "Hundru Falls".to_string(),
            description: "One of the most spectacular waterfalls in Jharkhand, cascading from a height of 98 meters".to_string(),
            location: "Ranchi".to_string(),
            category: DestinationCategory::Eco,
            images: strings(&["https://images.unsplash.com/photo-1506905925346-21bda4d32df4"]),
            latitude: Some(23.4186),
            longitude: Some(85.6081),
            best_time_to_visit: "October to March".to_string(),
            entry_fee: Some("₹20 per person".to_string()),
            nearby_attractions: strings(&["Jonha Falls", "Rock Garden"]),
            eco_tips: strings(&[
                "Carry reusable water bottles",
                "Don't litter",
                "Respect local wildlife",
            ]),
            cultural_significance: Some("Sacred to local tribal communities".to_string()),
            created_at: Utc::now(),
        },
        Destination {
            id: Uuid::new_v4().to_string(),
            name: "Betla National Park".to_string(),
            description: "Rich wildlife sanctuary famous for tigers, elephants, and diverse flora".to_string(),
            location: "Palamu".to_string(),
            category: DestinationCategory::Eco,
            images: strings(&["https://images.unsplash.com/photo-1549366021-9f761d040942"]),
            latitude: Some(23.9167),
            longitude: Some(84.1833),
            best_time_to_visit: "November to April".to_string(),
            entry_fee: Some("₹100 per person".to_string()),
            nearby_attractions: strings(&["Palamu Fort", "Kechki"]),
            eco_tips: strings(&[
                "Maintain silence during safari",
                "Follow park guidelines",
                "Use eco-friendly transport",
            ]),
            cultural_significance: Some("Traditional hunting grounds of local tribes".to_string()),
            created_at: Utc::now(),
        },
        Destination {
            id: Uuid::new_v4().to_string(),
            name: "Tribal Museum Ranchi".to_string(),
            description: "Comprehensive collection showcasing rich tribal heritage and culture of Jharkhand".to_string(),
            location: "Ranchi".to_string(),
            category: DestinationCategory::Cultural,
            images: strings(&["https://images.unsplash.com/photo-1578662996442-48f60103fc96"]),
            latitude: Some(23.3441),
            longitude: Some(85.3096),
            best_time_to_visit: "Year round".to_string(),
            entry_fee: Some("₹30 per person".to_string()),
            nearby_attractions: strings(&["Tagore Hill", "Kanke Dam"]),
            eco_tips: strings(&[
                "Support local artisans",
                "Respect cultural artifacts",
                "Learn about sustainable practices",
            ]),
            cultural_significance: Some("Preserves 5000 years of tribal history and traditions".to_string()),
            created_at: Utc::now(),
        },
    ]
}

fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: Uuid::new_v4().to_string(),
            name: "Karma Festival".to_string(),
            description: "Major tribal festival celebrating nature, fertility, and harvest with traditional dance and music".to_string(),
            location: "Various tribal villages".to_string(),
            date: "2025-08-15".to_string(),
            category: EventCategory::Festival,
            images: strings(&[
                "/images/cultural_heritage_1.png",
                "/images/cultural_heritage_4.png",
            ]),
            registration_required: false,
            registration_link: None,
            cultural_significance: Some("One of the most important festivals for tribal communities in Jharkhand".to_string()),
            created_at: Utc::now(),
        },
        Event {
            id: Uuid::new_v4().to_string(),
            name: "Sarhul Festival".to_string(),
            description: "Spring festival celebrating the blossoming of sal trees with traditional rituals".to_string(),
            location: "Tribal areas across Jharkhand".to_string(),
            date: "2025-03-21".to_string(),
            category: EventCategory::Festival,
            images: strings(&["/images/cultural_heritage_6.png"]),
            registration_required: false,
            registration_link: None,
            cultural_significance: Some("Sacred festival marking the beginning of new year for tribal communities".to_string()),
            created_at: Utc::now(),
        },
        Event {
            id: Uuid::new_v4().to_string(),
            name: "Traditional Handicrafts Fair".to_string(),
            description: "Annual fair showcasing authentic Jharkhand handicrafts including pottery, tribal art, and bamboo crafts".to_string(),
            location: "Ranchi Cultural Center".to_string(),
            date: "2025-10-15".to_string(),
            category: EventCategory::Fair,
            images: strings(&[
                "/images/cultural_heritage_2.png",
                "/images/cultural_heritage_5.png",
            ]),
            registration_required: true,
            registration_link: Some("https://jharkhandtourism.com/handicrafts-fair".to_string()),
            cultural_significance: Some("Promotes local artisan communities and preserves traditional craft techniques".to_string()),
            created_at: Utc::now(),
        },
        Event {
            id: Uuid::new_v4().to_string(),
            name: "Sohrai Art Festival".to_string(),
            description: "Celebration of traditional Sohrai and Khovar tribal wall paintings with live demonstrations".to_string(),
            location: "Hazaribagh villages".to_string(),
            date: "2025-11-20".to_string(),
            category: EventCategory::Cultural,
            images: strings(&["/images/cultural_heritage_3.png"]),
            registration_required: false,
            registration_link: None,
            cultural_significance: Some("Ancient art form practiced by tribal women, recognized by UNESCO".to_string()),
            created_at: Utc::now(),
        },
    ]
}

fn sample_guides() -> Vec<LocalGuide> {
    vec![
        LocalGuide {
            id: Uuid::new_v4().to_string(),
            name: "Ramesh Munda".to_string(),
            specialization: "Tribal Culture & Heritage".to_string(),
            location: "Ranchi".to_string(),
            contact: "+91-9876543210".to_string(),
            rating: 4.8,
            reviews_count: 45,
            languages: strings(&["Hindi", "English", "Mundari"]),
            description: "Expert guide with 15 years experience in tribal culture and traditional crafts".to_string(),
            price_per_day: "₹2000-3000".to_string(),
            availability: strings(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            created_at: Utc::now(),
        },
        LocalGuide {
            id: Uuid::new_v4().to_string(),
            name: "Sunita Oraon".to_string(),
            specialization: "Eco-Tourism & Wildlife".to_string(),
            location: "Palamu".to_string(),
            contact: "+91-9876543211".to_string(),
            rating: 4.9,
            reviews_count: 62,
            languages: strings(&["Hindi", "English", "Oraon"]),
            description: "Wildlife expert and eco-tourism specialist with deep forest knowledge".to_string(),
            price_per_day: "₹2500-3500".to_string(),
            availability: strings(&["Mon", "Wed", "Fri", "Sat", "Sun"]),
            created_at: Utc::now(),
        },
    ]
}
