use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::entities::{
    CriteriaUpdate, FilterOptions, ItineraryItem, Listing, MapStyle, MapView, Place, Session,
    Statistics,
};
use crate::error::Error;
use crate::external::images::ImageOutcome;

#[async_trait]
pub trait CatalogAPI {
    async fn list_places(&self) -> Result<Vec<Place>, Error>;
    async fn find_place(&self, name: String) -> Result<Place, Error>;
    async fn filter_options(&self) -> Result<FilterOptions, Error>;
    async fn place_image(&self, name: String) -> Result<ImageOutcome, Error>;
}

#[async_trait]
pub trait SessionAPI {
    async fn create_session(&self, visitor_name: Option<String>) -> Result<Session, Error>;
    async fn find_session(&self, id: Uuid) -> Result<Session, Error>;
    async fn end_session(&self, id: Uuid) -> Result<(), Error>;
    async fn update_criteria(&self, id: Uuid, update: CriteriaUpdate) -> Result<Session, Error>;
    async fn reset_criteria(&self, id: Uuid) -> Result<Session, Error>;
    async fn toggle_favorite(&self, id: Uuid, place: String) -> Result<(bool, Session), Error>;
    async fn set_rating(&self, id: Uuid, place: String, value: i64) -> Result<Session, Error>;
    async fn mark_visited(
        &self,
        id: Uuid,
        place: String,
        when: Option<NaiveDate>,
    ) -> Result<Session, Error>;
}

#[async_trait]
pub trait ItineraryAPI {
    async fn add_to_itinerary(
        &self,
        id: Uuid,
        place: String,
        when: Option<NaiveDate>,
    ) -> Result<Session, Error>;
    async fn remove_from_itinerary(&self, id: Uuid, index: usize) -> Result<Session, Error>;
    async fn find_itinerary(&self, id: Uuid) -> Result<Vec<ItineraryItem>, Error>;
}

#[async_trait]
pub trait DiscoveryAPI {
    async fn discover(&self, id: Uuid) -> Result<Place, Error>;
    async fn current_pick(&self, id: Uuid) -> Result<Option<Place>, Error>;
}

#[async_trait]
pub trait PresentationAPI {
    async fn listing(&self, id: Uuid) -> Result<Listing, Error>;
    async fn favorites(&self, id: Uuid) -> Result<Vec<Place>, Error>;
    async fn statistics(&self, id: Uuid) -> Result<Statistics, Error>;
    async fn map_view(&self, id: Uuid, style: MapStyle) -> Result<MapView, Error>;
}

pub trait API: CatalogAPI + SessionAPI + ItineraryAPI + DiscoveryAPI + PresentationAPI {}
