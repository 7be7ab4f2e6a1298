//! Cleaning DTOs

use crate::entities::CleaningStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per programmare una pulizia (unit_id dal path)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateCleaningDTO {
    pub scheduled_date: NaiveDate,
    pub cleaner_sub: Option<String>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// DTO per aggiornare stato/assegnazione di una pulizia
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateCleaningDTO {
    pub status: Option<CleaningStatus>,
    pub cleaner_sub: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Riga della task-list del cleaner, arricchita con i nomi di unit e proprietà
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct CleaningTaskDTO {
    pub cleaning_id: i64,
    pub unit_id: i64,
    pub unit_name: String,
    pub property_name: String,
    pub scheduled_date: NaiveDate,
    pub status: CleaningStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
