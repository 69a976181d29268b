use axum::extract::{Extension, Json, Path};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{CriteriaUpdate, Session};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    visitor_name: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RatingParams {
    value: i64,
}

#[derive(Serialize, Deserialize)]
pub struct VisitedParams {
    date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize)]
pub struct CreatedSession {
    session: Session,
    greeting: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct FavoriteToggled {
    is_favorite: bool,
    session: Session,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<CreatedSession>, Error> {
    let session = api.create_session(params.visitor_name).await?;
    let greeting = session.greeting();

    Ok(CreatedSession { session, greeting }.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, Error> {
    let session = api.find_session(id).await?;

    Ok(session.into())
}

pub async fn end(Extension(api): Extension<DynAPI>, Path(id): Path<Uuid>) -> Result<Json<()>, Error> {
    api.end_session(id).await?;

    Ok(().into())
}

pub async fn update_criteria(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(update): Json<CriteriaUpdate>,
) -> Result<Json<Session>, Error> {
    let session = api.update_criteria(id, update).await?;

    Ok(session.into())
}

pub async fn reset_criteria(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, Error> {
    let session = api.reset_criteria(id).await?;

    Ok(session.into())
}

pub async fn toggle_favorite(
    Extension(api): Extension<DynAPI>,
    Path((id, place)): Path<(Uuid, String)>,
) -> Result<Json<FavoriteToggled>, Error> {
    let (is_favorite, session) = api.toggle_favorite(id, place).await?;

    Ok(FavoriteToggled {
        is_favorite,
        session,
    }
    .into())
}

pub async fn set_rating(
    Extension(api): Extension<DynAPI>,
    Path((id, place)): Path<(Uuid, String)>,
    Json(params): Json<RatingParams>,
) -> Result<Json<Session>, Error> {
    let session = api.set_rating(id, place, params.value).await?;

    Ok(session.into())
}

pub async fn mark_visited(
    Extension(api): Extension<DynAPI>,
    Path((id, place)): Path<(Uuid, String)>,
    Json(params): Json<VisitedParams>,
) -> Result<Json<Session>, Error> {
    let session = api.mark_visited(id, place, params.date).await?;

    Ok(session.into())
}
