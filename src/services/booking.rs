//! Booking services - Lettura e cancellazione prenotazioni

use crate::core::{AppError, AppState};
use crate::entities::Booking;
use crate::repositories::{Delete, Read};
use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{info, instrument};

#[instrument(skip(state), fields(booking_id = %booking_id))]
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    let booking = state
        .booking
        .read(&booking_id)
        .await?
        .ok_or_else(|| AppError::not_found("Booking not found"))?;

    Ok(Json(booking))
}

#[instrument(skip(state), fields(booking_id = %booking_id))]
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<i64>,
) -> Result<(), AppError> {
    if state.booking.read(&booking_id).await?.is_none() {
        return Err(AppError::not_found("Booking not found"));
    }

    state.booking.delete(&booking_id).await?;
    info!("Booking deleted");
    Ok(())
}
