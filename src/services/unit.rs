//! Unit services - CRUD unit, prenotazioni e pulizie annidate

use crate::core::{AppError, AppState};
use crate::dtos::{CreateBookingDTO, CreateCleaningDTO, UpdateUnitDTO};
use crate::entities::{Booking, Cleaning, Unit};
use crate::repositories::{Delete, Read, Update};
use axum::extract::{Json, Path, State};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

#[instrument(skip(state), fields(unit_id = %unit_id))]
pub async fn get_unit(
    State(state): State<Arc<AppState>>,
    Path(unit_id): Path<i64>,
) -> Result<Json<Unit>, AppError> {
    let unit = state
        .unit
        .read(&unit_id)
        .await?
        .ok_or_else(|| AppError::not_found("Unit not found"))?;

    Ok(Json(unit))
}

#[instrument(skip(state, body), fields(unit_id = %unit_id))]
pub async fn update_unit(
    State(state): State<Arc<AppState>>,
    Path(unit_id): Path<i64>,
    Json(body): Json<UpdateUnitDTO>,
) -> Result<Json<Unit>, AppError> {
    body.validate()?;

    let unit = state.unit.update(&unit_id, &body).await?;
    Ok(Json(unit))
}

#[instrument(skip(state), fields(unit_id = %unit_id))]
pub async fn delete_unit(
    State(state): State<Arc<AppState>>,
    Path(unit_id): Path<i64>,
) -> Result<(), AppError> {
    if state.unit.read(&unit_id).await?.is_none() {
        return Err(AppError::not_found("Unit not found"));
    }

    state.unit.delete(&unit_id).await?;
    info!("Unit deleted");
    Ok(())
}

#[instrument(skip(state), fields(unit_id = %unit_id))]
pub async fn list_unit_bookings(
    State(state): State<Arc<AppState>>,
    Path(unit_id): Path<i64>,
) -> Result<Json<Vec<Booking>>, AppError> {
    if state.unit.read(&unit_id).await?.is_none() {
        return Err(AppError::not_found("Unit not found"));
    }

    let bookings = state.booking.find_many_by_unit(&unit_id).await?;
    Ok(Json(bookings))
}

#[instrument(skip(state, body), fields(unit_id = %unit_id))]
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Path(unit_id): Path<i64>,
    Json(body): Json<CreateBookingDTO>,
) -> Result<Json<Booking>, AppError> {
    body.validate()?;

    if body.check_out <= body.check_in {
        return Err(AppError::bad_request("check_out must be after check_in"));
    }

    if state.unit.read(&unit_id).await?.is_none() {
        return Err(AppError::not_found("Unit not found"));
    }

    let booking = state.booking.create_for_unit(&unit_id, &body).await?;
    info!(
        booking_id = booking.booking_id,
        nights = booking.nights(),
        "Booking created"
    );
    Ok(Json(booking))
}

#[instrument(skip(state), fields(unit_id = %unit_id))]
pub async fn list_unit_cleanings(
    State(state): State<Arc<AppState>>,
    Path(unit_id): Path<i64>,
) -> Result<Json<Vec<Cleaning>>, AppError> {
    if state.unit.read(&unit_id).await?.is_none() {
        return Err(AppError::not_found("Unit not found"));
    }

    let cleanings = state.cleaning.find_many_by_unit(&unit_id).await?;
    Ok(Json(cleanings))
}

#[instrument(skip(state, body), fields(unit_id = %unit_id))]
pub async fn create_cleaning(
    State(state): State<Arc<AppState>>,
    Path(unit_id): Path<i64>,
    Json(body): Json<CreateCleaningDTO>,
) -> Result<Json<Cleaning>, AppError> {
    body.validate()?;

    if state.unit.read(&unit_id).await?.is_none() {
        return Err(AppError::not_found("Unit not found"));
    }

    let cleaning = state.cleaning.create_for_unit(&unit_id, &body).await?;
    info!(cleaning_id = cleaning.cleaning_id, "Cleaning scheduled");
    Ok(Json(cleaning))
}
