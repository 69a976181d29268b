use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Listing, MapStyle, MapView, Place, Statistics};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct MapParams {
    #[serde(default)]
    style: MapStyle,
}

pub async fn listing(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Listing>, Error> {
    let listing = api.listing(id).await?;

    Ok(listing.into())
}

pub async fn favorites(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Place>>, Error> {
    let places = api.favorites(id).await?;

    Ok(places.into())
}

pub async fn statistics(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Statistics>, Error> {
    let stats = api.statistics(id).await?;

    Ok(stats.into())
}

pub async fn map(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Query(params): Query<MapParams>,
) -> Result<Json<MapView>, Error> {
    let view = api.map_view(id, params.style).await?;

    Ok(view.into())
}
