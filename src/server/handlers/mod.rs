pub mod discovery;
pub mod itinerary;
pub mod places;
pub mod presentation;
pub mod sessions;
