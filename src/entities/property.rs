//! Property entity - Entità proprietà

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Property {
    pub property_id: i64,
    pub owner_sub: String,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}
