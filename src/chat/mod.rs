pub mod assistant;
pub mod itinerary;
pub mod session;

pub use assistant::ChatService;
pub use itinerary::ItineraryRequest;
pub use session::{Conversation, SessionRegistry};
