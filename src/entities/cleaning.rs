//! Cleaning entity - Pulizia programmata per una unit

use super::enums::CleaningStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Cleaning {
    pub cleaning_id: i64,
    pub unit_id: i64,
    pub scheduled_date: NaiveDate,
    pub status: CleaningStatus,
    pub cleaner_sub: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
