use std::collections::BTreeSet;

use super::helpers::fetch_session;
use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::PresentationAPI,
    entities::{
        Listing, ListingStatus, MapMarker, MapStyle, MapView, Place, PlaceCard, Statistics,
        TopRated,
    },
    error::Error,
    filter,
};

const MAP_ZOOM: u8 = 12;

#[async_trait]
impl PresentationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn listing(&self, id: Uuid) -> Result<Listing, Error> {
        let sessions = self.sessions.lock().await;
        let session = fetch_session(&sessions, &id)?;

        let criteria = self.effective_criteria(session);
        let cards: Vec<PlaceCard> = filter::filter_with_distance(self.catalog.places(), &criteria)
            .into_iter()
            .map(|(place, distance_km)| {
                PlaceCard::new(
                    place.clone(),
                    distance_km,
                    session.state.rating(&place.name),
                    session.state.is_favorite(&place.name),
                    session.state.visited_on(&place.name),
                )
            })
            .collect();

        let status = if cards.is_empty() {
            ListingStatus::NoMatches
        } else {
            ListingStatus::Matches
        };

        Ok(Listing {
            cards,
            criteria_customized: session.is_customized(),
            status,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn favorites(&self, id: Uuid) -> Result<Vec<Place>, Error> {
        let sessions = self.sessions.lock().await;
        let session = fetch_session(&sessions, &id)?;

        let places = session
            .state
            .favorites
            .iter()
            .filter_map(|name| {
                let place = self.catalog.find(name);
                if place.is_none() {
                    tracing::warn!(place = %name, "skipping favorite missing from catalog");
                }
                place.cloned()
            })
            .collect();

        Ok(places)
    }

    #[tracing::instrument(skip(self))]
    async fn statistics(&self, id: Uuid) -> Result<Statistics, Error> {
        let sessions = self.sessions.lock().await;
        let session = fetch_session(&sessions, &id)?;

        let criteria = self.effective_criteria(session);
        let available = filter::filter(self.catalog.places(), &criteria).len();
        let total_places = self.catalog.len();

        let share_of_catalog = match total_places {
            0 => 0.0,
            total => available as f64 / total as f64,
        };

        let categories = self
            .catalog
            .places()
            .iter()
            .map(|place| place.category.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        let top_rated = session.state.top_rated().map(|(place, rating)| TopRated {
            place: place.to_string(),
            rating,
        });

        Ok(Statistics {
            available,
            share_of_catalog,
            favorites: session.state.favorites.len(),
            visited: session.state.visited.len(),
            total_places,
            categories,
            top_rated,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn map_view(&self, id: Uuid, style: MapStyle) -> Result<MapView, Error> {
        let sessions = self.sessions.lock().await;
        let session = fetch_session(&sessions, &id)?;

        let criteria = self.effective_criteria(session);
        let markers = filter::filter(self.catalog.places(), &criteria)
            .into_iter()
            .map(MapMarker::for_place)
            .collect();

        Ok(MapView {
            center: self.config.center,
            zoom: MAP_ZOOM,
            style,
            tiles: style.tiles().to_string(),
            markers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::api::SessionAPI;
    use crate::catalog::Catalog;
    use crate::entities::CriteriaUpdate;
    use std::sync::Arc;
    use tokio_test::block_on;

    fn names(listing: &Listing) -> Vec<&str> {
        listing.cards.iter().map(|c| c.place.name.as_str()).collect()
    }

    fn beaches_within(max_distance_km: f64) -> CriteriaUpdate {
        CriteriaUpdate {
            categories: BTreeSet::from(["Beach".to_string(), "Museum".to_string()]),
            age_groups: BTreeSet::from(["All".to_string()]),
            moods: BTreeSet::from(["Calm".to_string(), "Cultural".to_string()]),
            price_levels: BTreeSet::from(["Free".to_string(), "Medium".to_string()]),
            accessibility: BTreeSet::from(["Easy".to_string()]),
            max_distance_km,
        }
    }

    #[test]
    fn default_listing_uses_all_options_and_default_distance() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();

        let listing = block_on(engine.listing(session.id)).unwrap();

        assert_eq!(names(&listing), vec!["Aghir", "Midoun"]);
        assert!(!listing.criteria_customized);
        assert_eq!(listing.status, ListingStatus::Matches);
        assert!((listing.cards[0].distance_km - 2.0).abs() < 0.05);
    }

    #[test]
    fn no_matches_is_distinguishable_from_defaults() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();
        let mut update = beaches_within(30.0);
        update.categories.clear();
        block_on(engine.update_criteria(session.id, update)).unwrap();

        let listing = block_on(engine.listing(session.id)).unwrap();

        assert!(listing.cards.is_empty());
        assert!(listing.criteria_customized);
        assert_eq!(listing.status, ListingStatus::NoMatches);
    }

    #[test]
    fn cards_reflect_session_state() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();
        block_on(engine.update_criteria(session.id, beaches_within(30.0))).unwrap();
        block_on(engine.toggle_favorite(session.id, "Guellala".into())).unwrap();
        block_on(engine.set_rating(session.id, "Guellala".into(), 4)).unwrap();

        let listing = block_on(engine.listing(session.id)).unwrap();

        assert_eq!(names(&listing), vec!["Aghir", "Guellala"]);
        let guellala = &listing.cards[1];
        assert!(guellala.is_favorite);
        assert_eq!(guellala.rating.unwrap().value(), 4);
        assert_eq!(guellala.rating_label, "4 / 5");
        assert_eq!(listing.cards[0].rating_label, "Not rated");
    }

    #[test]
    fn statistics_summarize_the_session() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();
        block_on(engine.toggle_favorite(session.id, "Aghir".into())).unwrap();
        block_on(engine.mark_visited(session.id, "Midoun".into(), None)).unwrap();
        block_on(engine.set_rating(session.id, "Midoun".into(), 3)).unwrap();
        block_on(engine.set_rating(session.id, "Ajim".into(), 5)).unwrap();

        let stats = block_on(engine.statistics(session.id)).unwrap();

        assert_eq!(stats.available, 2);
        assert_eq!(stats.total_places, 4);
        assert!((stats.share_of_catalog - 0.5).abs() < f64::EPSILON);
        assert_eq!(stats.favorites, 1);
        assert_eq!(stats.visited, 1);
        assert_eq!(stats.categories, 3);
        assert_eq!(stats.top_rated.unwrap().place, "Ajim");
    }

    #[test]
    fn top_rated_tie_goes_to_the_first_rated_place() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();
        block_on(engine.set_rating(session.id, "Midoun".into(), 5)).unwrap();
        block_on(engine.set_rating(session.id, "Aghir".into(), 5)).unwrap();

        let stats = block_on(engine.statistics(session.id)).unwrap();

        assert_eq!(stats.top_rated.unwrap().place, "Midoun");
    }

    #[test]
    fn empty_catalog_has_zero_share() {
        let engine = Engine::new(Arc::new(Catalog::default()), fixtures::config(true));
        let session = block_on(engine.create_session(None)).unwrap();

        let stats = block_on(engine.statistics(session.id)).unwrap();

        assert_eq!(stats.total_places, 0);
        assert_eq!(stats.available, 0);
        assert_eq!(stats.share_of_catalog, 0.0);
        assert!(stats.top_rated.is_none());
    }

    #[test]
    fn favorites_resolve_against_the_catalog() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();
        block_on(engine.toggle_favorite(session.id, "Midoun".into())).unwrap();
        block_on(engine.toggle_favorite(session.id, "Aghir".into())).unwrap();

        let favorites = block_on(engine.favorites(session.id)).unwrap();
        let names: Vec<&str> = favorites.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Aghir", "Midoun"]);
    }

    #[test]
    fn map_has_one_marker_per_visible_place() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();

        let map = block_on(engine.map_view(session.id, MapStyle::Dark)).unwrap();

        assert_eq!(map.zoom, 12);
        assert_eq!(map.tiles, "cartodbdark_matter");
        assert_eq!(map.center, engine.config().center);
        let tooltips: Vec<&str> = map.markers.iter().map(|m| m.tooltip.as_str()).collect();
        assert_eq!(tooltips, vec!["Aghir", "Midoun"]);
        assert_eq!(map.markers[0].popup, "Aghir description...");
    }
}
