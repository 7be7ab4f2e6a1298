//! Cleaning services - Stato pulizie e task-list del cleaner

use crate::core::{AppError, AppState};
use crate::dtos::{CleanerQuery, CleaningTaskDTO, UpdateCleaningDTO};
use crate::entities::Cleaning;
use crate::repositories::{Read, Update};
use axum::extract::{Json, Path, Query, State};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[instrument(skip(state), fields(cleaning_id = %cleaning_id))]
pub async fn get_cleaning(
    State(state): State<Arc<AppState>>,
    Path(cleaning_id): Path<i64>,
) -> Result<Json<Cleaning>, AppError> {
    let cleaning = state
        .cleaning
        .read(&cleaning_id)
        .await?
        .ok_or_else(|| AppError::not_found("Cleaning not found"))?;

    Ok(Json(cleaning))
}

/// Aggiorna stato, assegnazione o data di una pulizia
#[instrument(skip(state, body), fields(cleaning_id = %cleaning_id))]
pub async fn update_cleaning(
    State(state): State<Arc<AppState>>,
    Path(cleaning_id): Path<i64>,
    Json(body): Json<UpdateCleaningDTO>,
) -> Result<Json<Cleaning>, AppError> {
    let cleaning = state.cleaning.update(&cleaning_id, &body).await?;
    info!("Cleaning updated");
    Ok(Json(cleaning))
}

/// Task-list del cleaner: pulizie visibili tramite le affiliations ACTIVE
#[instrument(skip(state))]
pub async fn list_cleaner_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CleanerQuery>,
) -> Result<Json<Vec<CleaningTaskDTO>>, AppError> {
    let tasks = state.cleaning.find_tasks_for_cleaner(&query.cleaner_sub).await?;
    debug!("Found {} cleaning tasks", tasks.len());
    Ok(Json(tasks))
}
