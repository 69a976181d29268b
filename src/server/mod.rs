mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::api::API;
use crate::error::{server_error, Error};
use crate::server::handlers::{discovery, itinerary, places, presentation, sessions};

type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/places", get(places::list))
        .route("/places/:name", get(places::find))
        .route("/places/:name/image", get(places::image))
        .route("/filters/options", get(places::options))
        .route("/sessions", post(sessions::create))
        .route("/sessions/:id", get(sessions::find).delete(sessions::end))
        .route(
            "/sessions/:id/criteria",
            put(sessions::update_criteria).delete(sessions::reset_criteria),
        )
        .route(
            "/sessions/:id/favorites/:place/toggle",
            patch(sessions::toggle_favorite),
        )
        .route("/sessions/:id/ratings/:place", put(sessions::set_rating))
        .route("/sessions/:id/visited/:place", patch(sessions::mark_visited))
        .route(
            "/sessions/:id/itinerary",
            get(itinerary::find).post(itinerary::add),
        )
        .route("/sessions/:id/itinerary/:index", delete(itinerary::remove))
        .route(
            "/sessions/:id/discovery",
            get(discovery::current).post(discovery::discover),
        )
        .route("/sessions/:id/places", get(presentation::listing))
        .route("/sessions/:id/favorites", get(presentation::favorites))
        .route("/sessions/:id/stats", get(presentation::statistics))
        .route("/sessions/:id/map", get(presentation::map))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(server_error)
}
