use super::helpers::{fetch_session, fetch_session_for_update, require_place, today};
use super::Engine;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    api::SessionAPI,
    entities::{CriteriaUpdate, Session},
    error::{session_not_found_error, Error},
};

#[async_trait]
impl SessionAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_session(&self, visitor_name: Option<String>) -> Result<Session, Error> {
        let session = Session::new(visitor_name);

        self.sessions
            .lock()
            .await
            .insert(session.id, session.clone());

        tracing::info!(session_id = %session.id, "session created");

        Ok(session)
    }

    #[tracing::instrument(skip(self))]
    async fn find_session(&self, id: Uuid) -> Result<Session, Error> {
        let sessions = self.sessions.lock().await;

        Ok(fetch_session(&sessions, &id)?.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn end_session(&self, id: Uuid) -> Result<(), Error> {
        self.sessions
            .lock()
            .await
            .remove(&id)
            .ok_or_else(session_not_found_error)?;

        tracing::info!(session_id = %id, "session ended");

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn update_criteria(&self, id: Uuid, update: CriteriaUpdate) -> Result<Session, Error> {
        let criteria = update.into_criteria(
            self.config.center,
            self.config.min_distance_km..=self.config.max_distance_km,
        )?;

        let mut sessions = self.sessions.lock().await;
        let session = fetch_session_for_update(&mut sessions, &id)?;

        session.set_criteria(criteria);

        Ok(session.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn reset_criteria(&self, id: Uuid) -> Result<Session, Error> {
        let mut sessions = self.sessions.lock().await;
        let session = fetch_session_for_update(&mut sessions, &id)?;

        session.reset_criteria();

        Ok(session.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn toggle_favorite(&self, id: Uuid, place: String) -> Result<(bool, Session), Error> {
        require_place(&self.catalog, &place)?;

        let mut sessions = self.sessions.lock().await;
        let session = fetch_session_for_update(&mut sessions, &id)?;

        let is_favorite = session.state.toggle_favorite(&place);

        Ok((is_favorite, session.clone()))
    }

    #[tracing::instrument(skip(self))]
    async fn set_rating(&self, id: Uuid, place: String, value: i64) -> Result<Session, Error> {
        require_place(&self.catalog, &place)?;

        let mut sessions = self.sessions.lock().await;
        let session = fetch_session_for_update(&mut sessions, &id)?;

        session.state.set_rating(&place, value)?;

        Ok(session.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn mark_visited(
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
            .mark_visited(&place, when.unwrap_or_else(today));

        Ok(session.clone())
    }
}
