use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Place, Rating};

/// One entry of the result list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceCard {
    pub place: Place,
    pub distance_km: f64,
    pub rating: Option<Rating>,
    pub is_favorite: bool,
    pub visited_on: Option<NaiveDate>,
    pub rating_label: String,
}

impl PlaceCard {
    pub fn new(
        place: Place,
        distance_km: f64,
        rating: Option<Rating>,
        is_favorite: bool,
        visited_on: Option<NaiveDate>,
    ) -> Self {
        let rating_label = match rating {
            Some(rating) => format!("{} / 5", rating),
            None => "Not rated".into(),
        };

        Self {
            place,
            distance_km,
            rating,
            is_favorite,
            visited_on,
            rating_label,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub cards: Vec<PlaceCard>,
    /// `false` while the default all-selected criteria are in effect.
    pub criteria_customized: bool,
    pub status: ListingStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Matches,
    NoMatches,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    /// 1-based position for display.
    pub position: usize,
    /// Storage index to pass back on removal.
    pub index: usize,
    pub place: String,
    pub date_added: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopRated {
    pub place: String,
    pub rating: Rating,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub available: usize,
    pub share_of_catalog: f64,
    pub favorites: usize,
    pub visited: usize,
    pub total_places: usize,
    pub categories: usize,
    pub top_rated: Option<TopRated>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapStyle {
    #[default]
    Light,
    Dark,
    Satellite,
}

impl MapStyle {
    pub fn tiles(&self) -> &'static str {
        match self {
            Self::Light => "cartodbpositron",
            Self::Dark => "cartodbdark_matter",
            Self::Satellite => "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub coordinates: Coordinates,
    pub tooltip: String,
    pub popup: String,
    pub category: String,
    pub mood: String,
    pub price_level: String,
}

impl MapMarker {
    pub const POPUP_CHARS: usize = 100;

    pub fn for_place(place: &Place) -> Self {
        let excerpt: String = place.description.chars().take(Self::POPUP_CHARS).collect();

        Self {
            coordinates: place.coordinates,
            tooltip: place.name.clone(),
            popup: format!("{}...", excerpt),
            category: place.category.clone(),
            mood: place.mood.clone(),
            price_level: place.price_level.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub style: MapStyle,
    pub tiles: String,
    pub markers: Vec<MapMarker>,
}
