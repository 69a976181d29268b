use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::entities::Place;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn discover(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Place>, Error> {
    let place = api.discover(id).await?;

    Ok(place.into())
}

pub async fn current(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Place>>, Error> {
    let place = api.current_pick(id).await?;

    Ok(place.into())
}
