use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::error::BookingError;
use crate::model::{Reservation, ReservationId};
use crate::store::{ListFilter, Store};
use crate::validate::ReservationDraft;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub room: Option<String>,
    pub date: Option<String>,
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match &self {
            BookingError::MissingFields
            | BookingError::InvalidDateFormat
            | BookingError::InvalidTimeFormat => StatusCode::BAD_REQUEST,
            BookingError::Conflict => StatusCode::CONFLICT,
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let msg = self.to_string();
        if status.is_server_error() {
            warn!(%msg, code = %status.as_u16(), "request failed");
        }
        (status, Json(json!({ "error": msg }))).into_response()
    }
}

pub fn router(store: Arc<Store>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
        ])
        .allow_headers(Any);
    Router::new()
        .route("/", get(landing))
        .route(
            "/api/reservations",
            get(list_reservations).post(create_reservation),
        )
        .route(
            "/api/reservations/:id",
            put(update_reservation).delete(delete_reservation),
        )
        .layer(cors)
        .with_state(store)
}

async fn landing() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn list_reservations(
    State(store): State<Arc<Store>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Reservation>>, BookingError> {
    let filter = ListFilter {
        room: query.room,
        date: query.date,
    };
    // The store is synchronous file I/O, so it runs on a blocking thread.
    let rows = tokio::task::spawn_blocking(move || store.list(&filter))
        .await
        .map_err(|e| BookingError::Internal(e.to_string()))??;
    Ok(Json(rows))
}

async fn create_reservation(
    State(store): State<Arc<Store>>,
    Json(draft): Json<ReservationDraft>,
) -> Result<(StatusCode, Json<Reservation>), BookingError> {
    let created = tokio::task::spawn_blocking(move || store.create(&draft))
        .await
        .map_err(|e| BookingError::Internal(e.to_string()))??;
    info!(id = created.id, room = %created.room, date = %created.date, time = %created.time, "reservation created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_reservation(
    State(store): State<Arc<Store>>,
    Path(id): Path<ReservationId>,
    Json(draft): Json<ReservationDraft>,
) -> Result<Json<Reservation>, BookingError> {
    let updated = tokio::task::spawn_blocking(move || store.update(id, &draft))
        .await
        .map_err(|e| BookingError::Internal(e.to_string()))??;
    info!(id = updated.id, room = %updated.room, "reservation updated");
    Ok(Json(updated))
}

async fn delete_reservation(
    State(store): State<Arc<Store>>,
    Path(id): Path<ReservationId>,
) -> Result<StatusCode, BookingError> {
    tokio::task::spawn_blocking(move || store.delete(id))
        .await
        .map_err(|e| BookingError::Internal(e.to_string()))??;
    info!(id, "reservation deleted");
    Ok(StatusCode::NO_CONTENT)
}
