use super::helpers::{fetch_session, fetch_session_for_update};
use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{api::DiscoveryAPI, discovery::random_pick, entities::Place, error::Error, filter};

#[async_trait]
impl DiscoveryAPI for Engine {
    /// Draws a new pick from the session's filtered places and keeps it until
    /// the next draw or a criteria change.
    #[tracing::instrument(skip(self))]
    async fn discover(&self, id: Uuid) -> Result<Place, Error> {
        let mut sessions = self.sessions.lock().await;
        let session = fetch_session_for_update(&mut sessions, &id)?;

        let criteria = self.effective_criteria(session);
        let candidates = filter::filter(self.catalog.places(), &criteria);

        let pick = (*random_pick(&candidates, &mut rand::thread_rng())?).clone();

        tracing::info!(place = %pick.name, candidates = candidates.len(), "discovery pick");

        session.pick = Some(pick.clone());

        Ok(pick)
    }

    #[tracing::instrument(skip(self))]
    async fn current_pick(&self, id: Uuid) -> Result<Option<Place>, Error> {
        let sessions = self.sessions.lock().await;

        Ok(fetch_session(&sessions, &id)?.pick.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::api::SessionAPI;
    use crate::entities::CriteriaUpdate;
    use std::collections::BTreeSet;
    use tokio_test::block_on;

    #[test]
    fn pick_comes_from_the_filtered_set_and_sticks() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();

        let pick = block_on(engine.discover(session.id)).unwrap();

        assert!(["Aghir", "Midoun"].contains(&pick.name.as_str()));
        assert_eq!(block_on(engine.current_pick(session.id)).unwrap(), Some(pick));
    }

    #[test]
    fn no_candidates_is_signalled_and_pick_cleared() {
        let engine = fixtures::engine();
        let session = block_on(engine.create_session(None)).unwrap();
        block_on(engine.discover(session.id)).unwrap();

        let nothing = CriteriaUpdate {
            categories: BTreeSet::new(),
            age_groups: BTreeSet::from(["All".to_string()]),
            moods: BTreeSet::new(),
            price_levels: BTreeSet::new(),
            accessibility: BTreeSet::new(),
            max_distance_km: 30.0,
        };
        block_on(engine.update_criteria(session.id, nothing)).unwrap();

        assert_eq!(block_on(engine.current_pick(session.id)).unwrap(), None);

        let err = block_on(engine.discover(session.id)).unwrap_err();
        assert_eq!(err.code, crate::error::NO_CANDIDATES);
    }
}
