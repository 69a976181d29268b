use super::helpers::require_place;
use super::Engine;

use async_trait::async_trait;

use crate::{
    api::CatalogAPI,
    entities::{FilterOptions, Place},
    error::Error,
    external::images::{fetch_image, ImageOutcome},
};

#[async_trait]
impl CatalogAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_places(&self) -> Result<Vec<Place>, Error> {
        Ok(self.catalog.places().to_vec())
    }

    #[tracing::instrument(skip(self))]
    async fn find_place(&self, name: String) -> Result<Place, Error> {
        Ok(require_place(&self.catalog, &name)?.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn filter_options(&self) -> Result<FilterOptions, Error> {
        Ok(self.catalog.options().clone())
    }

    #[tracing::instrument(skip(self))]
    async fn place_image(&self, name: String) -> Result<ImageOutcome, Error> {
        let reference = require_place(&self.catalog, &name)?.image.clone();

        Ok(fetch_image(&reference, self.config.image_timeout).await)
    }
}
