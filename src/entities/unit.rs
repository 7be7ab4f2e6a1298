//! Unit entity - Unità affittabile di una proprietà

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Unit {
    pub unit_id: i64,
    pub property_id: i64,
    pub name: String,
    pub max_guests: i64,
    pub nightly_rate_cents: i64,
    pub cleaning_fee_cents: i64,
    pub policy_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
