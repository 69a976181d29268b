mod criteria;
mod itinerary;
mod location;
mod place;
mod rating;
mod session;
mod views;

pub use criteria::{CriteriaUpdate, FilterCriteria, FilterOptions};
pub use itinerary::{Itinerary, ItineraryEntry};
pub use location::Coordinates;
pub use place::{Attribute, Place};
pub use rating::Rating;
pub use session::{Session, SessionState};
pub use views::{
    ItineraryItem, Listing, ListingStatus, MapMarker, MapStyle, MapView, PlaceCard, Statistics,
    TopRated,
};
