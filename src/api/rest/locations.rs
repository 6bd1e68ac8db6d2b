use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use serde::Serialize;

use crate::error::AppError;
use crate::eta::estimate_eta_minutes;
use crate::models::location::{LocationSnapshot, LocationUpdate};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/location/updates", post(submit_update))
        .route("/location/track/:order_id", get(track_order))
}

#[derive(Serialize)]
pub struct UpdateAccepted {
    status: &'static str,
}

async fn submit_update(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LocationUpdate>,
) -> Result<(StatusCode, Json<UpdateAccepted>), AppError> {
    if let Err(details) = payload.validate() {
        state
            .metrics
            .location_updates_total
            .with_label_values(&["rejected"])
            .inc();
        return Err(AppError::Validation(details));
    }

    let snapshot = LocationSnapshot {
        position: payload.position,
        timestamp: payload.timestamp,
        eta_minutes: estimate_eta_minutes(payload.speed_mps),
    };

    // Last write wins by arrival order, even if the sample itself is older.
    state.locations.insert(payload.order_id.clone(), snapshot);

    state
        .metrics
        .location_updates_total
        .with_label_values(&["accepted"])
        .inc();
    state
        .metrics
        .tracked_orders
        .set(state.locations.len() as i64);

    tracing::debug!(
        order_id = %payload.order_id,
        courier_id = %payload.courier_id,
        "location update stored"
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(UpdateAccepted { status: "accepted" }),
    ))
}

async fn track_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<LocationSnapshot>, AppError> {
    let snapshot = state
        .locations
        .get(&order_id)
        .map(|entry| entry.value().clone());

    match snapshot {
        Some(snapshot) => {
            state
                .metrics
                .track_requests_total
                .with_label_values(&["found"])
                .inc();
            Ok(Json(snapshot))
        }
        None => {
            state
                .metrics
                .track_requests_total
                .with_label_values(&["not_found"])
                .inc();
            Err(AppError::NotFound(
                "Location not found for orderId".to_string(),
            ))
        }
    }
}
