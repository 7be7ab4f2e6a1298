//! CleanerAffiliation entity - Legame cleaner/owner
//!
//! Un'affiliation ACTIVE dà al cleaner visibilità sulle pulizie delle unit
//! dell'owner collegato.

use super::enums::AffiliationStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct CleanerAffiliation {
    pub affiliation_id: i64,
    pub owner_sub: String,
    pub cleaner_sub: String,
    pub status: AffiliationStatus,
    pub created_at: DateTime<Utc>,
}
