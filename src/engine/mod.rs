mod catalog_api;
mod discovery_api;
mod helpers;
mod itinerary_api;
mod presentation_api;
mod session_api;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::API,
    catalog::Catalog,
    config::Config,
    entities::{FilterCriteria, Session},
};

/// Holds the shared catalog and every live session. Sessions never see each
/// other's state.
pub struct Engine {
    catalog: Arc<Catalog>,
    config: Config,
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(catalog: Arc<Catalog>, config: Config) -> Self {
        tracing::info!(places = catalog.len(), "engine ready");

        Self {
            catalog,
            config,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every option selected, configured default distance.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::all_selected(
            self.catalog.options(),
            self.config.center,
            self.config.default_max_distance_km,
        )
    }

    fn effective_criteria(&self, session: &Session) -> FilterCriteria {
        session
            .criteria
            .clone()
            .unwrap_or_else(|| self.default_criteria())
    }
}

impl API for Engine {}
