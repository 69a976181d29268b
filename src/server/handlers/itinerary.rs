use axum::extract::{Extension, Json, Path};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{ItineraryItem, Session};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct AddParams {
    place: String,
    date: Option<NaiveDate>,
}

pub async fn add(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<AddParams>,
) -> Result<Json<Session>, Error> {
    let session = api.add_to_itinerary(id, params.place, params.date).await?;

    Ok(session.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<Session>, Error> {
    let session = api.remove_from_itinerary(id, index).await?;

    Ok(session.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ItineraryItem>>, Error> {
    let items = api.find_itinerary(id).await?;

    Ok(items.into())
}
