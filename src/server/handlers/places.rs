use axum::extract::{Extension, Json, Path};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::entities::{FilterOptions, Place};
use crate::error::Error;
use crate::external::images::ImageOutcome;
use crate::server::DynAPI;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Place>>, Error> {
    let places = api.list_places().await?;

    Ok(places.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(name): Path<String>,
) -> Result<Json<Place>, Error> {
    let place = api.find_place(name).await?;

    Ok(place.into())
}

pub async fn options(Extension(api): Extension<DynAPI>) -> Result<Json<FilterOptions>, Error> {
    let options = api.filter_options().await?;

    Ok(options.into())
}

/// Raw bytes when the image loads, a JSON placeholder with a warning otherwise.
pub async fn image(
    Extension(api): Extension<DynAPI>,
    Path(name): Path<String>,
) -> Result<Response, Error> {
    let outcome = api.place_image(name).await?;

    let response = match outcome {
        ImageOutcome::Loaded {
            bytes,
            content_type,
        } => {
            let content_type =
                content_type.unwrap_or_else(|| "application/octet-stream".to_string());

            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        placeholder => {
            let warning = placeholder.warning();

            Json(serde_json::json!({
                "placeholder": placeholder,
                "warning": warning,
            }))
            .into_response()
        }
    };

    Ok(response)
}
