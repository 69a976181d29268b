use super::helpers::{fetch_session, fetch_session_for_update, require_place, today};
use super::Engine;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    api::ItineraryAPI,
    entities::{ItineraryItem, Session},
    error::Error,
};

#[async_trait]
impl ItineraryAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn add_to_itinerary(
        &self,
        id: Uuid,
        place: String,
        when: Option<NaiveDate>,
    ) -> Result<Session, Error> {
        require_place(&self.catalog, &place)?;

        let mut sessions = self.sessions.lock().await;
        let session = fetch_session_for_update(&mut sessions, &id)?;

        session
            .state
            .itinerary
            .append(&place, when.unwrap_or_else(today));

        Ok(session.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn remove_from_itinerary(&self, id: Uuid, index: usize) -> Result<Session, Error> {
        let mut sessions = self.sessions.lock().await;
        let session = fetch_session_for_update(&mut sessions, &id)?;

        match session.state.itinerary.remove_at(index) {
            Ok(entry) => {
                tracing::info!(index, place = %entry.place, "removed itinerary entry");
            }
            Err(err) if !self.config.strict_indices => {
                tracing::warn!(error = %err, "ignoring stale itinerary index");
            }
            Err(err) => return Err(err),
        }

        Ok(session.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn find_itinerary(&self, id: Uuid) -> Result<Vec<ItineraryItem>, Error> {
        let sessions = self.sessions.lock().await;
        let session = fetch_session(&sessions, &id)?;

        let items = session
            .state
            .itinerary
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| ItineraryItem {
                position: index + 1,
                index,
                place: entry.place.clone(),
                date_added: entry.date_added,
            })
            .collect();

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::api::SessionAPI;
    use std::sync::Arc;
    use tokio_test::block_on;

    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 1, d)
    }

    #[test]
    fn duplicate_entries_then_remove_first() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();

        block_on(engine.add_to_itinerary(session.id, "Aghir".into(), day(1))).unwrap();
        let after_two = block_on(engine.add_to_itinerary(session.id, "Aghir".into(), day(2))).unwrap();
        assert_eq!(after_two.state.itinerary.len(), 2);

        let after_remove = block_on(engine.remove_from_itinerary(session.id, 0)).unwrap();

        let entries = after_remove.state.itinerary.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].place, "Aghir");
        assert_eq!(Some(entries[0].date_added), day(2));
    }

    #[test]
    fn items_carry_display_position_and_storage_index() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();
        block_on(engine.add_to_itinerary(session.id, "Aghir".into(), day(1))).unwrap();
        block_on(engine.add_to_itinerary(session.id, "Midoun".into(), day(1))).unwrap();

        let items = block_on(engine.find_itinerary(session.id)).unwrap();

        assert_eq!(items[1].position, 2);
        assert_eq!(items[1].index, 1);
        assert_eq!(items[1].place, "Midoun");
    }

    #[test]
    fn stale_index_fails_in_strict_mode() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();

        let err = block_on(engine.remove_from_itinerary(session.id, 0)).unwrap_err();

        assert_eq!(err.code, crate::error::INDEX_OUT_OF_BOUNDS);
    }

    #[test]
    fn stale_index_is_ignored_in_lenient_mode() {
        let engine = Engine::new(Arc::new(fixtures::catalog()), fixtures::config(false));
        let session = block_on(engine.create_session(None)).unwrap();
        block_on(engine.add_to_itinerary(session.id, "Aghir".into(), day(1))).unwrap();

        let session = block_on(engine.remove_from_itinerary(session.id, 5)).unwrap();

        assert_eq!(session.state.itinerary.len(), 1);
    }

    #[test]
    fn unknown_place_cannot_be_planned() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();

        let err = block_on(engine.add_to_itinerary(session.id, "Atlantis".into(), None)).unwrap_err();

        assert_eq!(err.code, crate::error::PLACE_NOT_FOUND);
    }
}
