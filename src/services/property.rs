//! Property services - CRUD proprietà e unit annidate

use crate::core::{AppError, AppState};
use crate::dtos::{CreatePropertyDTO, CreateUnitDTO, OwnerQuery, UpdatePropertyDTO};
use crate::entities::{Property, Unit};
use crate::repositories::{Create, Delete, Read, Update};
use axum::extract::{Json, Path, Query, State};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_properties(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<Property>>, AppError> {
    let properties = state.property.find_many_by_owner(&query.owner_sub).await?;
    debug!("Found {} properties", properties.len());
    Ok(Json(properties))
}

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn create_property(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePropertyDTO>,
) -> Result<Json<Property>, AppError> {
    body.validate()?;

    let property = state.property.create(&body).await?;
    info!(property_id = property.property_id, "Property created");
    Ok(Json(property))
}

#[instrument(skip(state), fields(property_id = %property_id))]
pub async fn get_property(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<i64>,
) -> Result<Json<Property>, AppError> {
    let property = state
        .property
        .read(&property_id)
        .await?
        .ok_or_else(|| AppError::not_found("Property not found"))?;

    Ok(Json(property))
}

#[instrument(skip(state, body), fields(property_id = %property_id))]
pub async fn update_property(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<i64>,
    Json(body): Json<UpdatePropertyDTO>,
) -> Result<Json<Property>, AppError> {
    body.validate()?;

    let property = state.property.update(&property_id, &body).await?;
    Ok(Json(property))
}

#[instrument(skip(state), fields(property_id = %property_id))]
pub async fn delete_property(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<i64>,
) -> Result<(), AppError> {
    if state.property.read(&property_id).await?.is_none() {
        warn!("Property not found for deletion");
        return Err(AppError::not_found("Property not found"));
    }

    state.property.delete(&property_id).await?;
    info!("Property deleted");
    Ok(())
}

#[instrument(skip(state), fields(property_id = %property_id))]
pub async fn list_units(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<i64>,
) -> Result<Json<Vec<Unit>>, AppError> {
    if state.property.read(&property_id).await?.is_none() {
        return Err(AppError::not_found("Property not found"));
    }

    let units = state.unit.find_many_by_property(&property_id).await?;
    Ok(Json(units))
}

#[instrument(skip(state, body), fields(property_id = %property_id))]
pub async fn create_unit(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<i64>,
    Json(body): Json<CreateUnitDTO>,
) -> Result<Json<Unit>, AppError> {
    body.validate()?;

    // la unit vive solo dentro una proprietà esistente
    if state.property.read(&property_id).await?.is_none() {
        return Err(AppError::not_found("Property not found"));
    }

    let unit = state.unit.create_for_property(&property_id, &body).await?;
    info!(unit_id = unit.unit_id, "Unit created");
    Ok(Json(unit))
}
