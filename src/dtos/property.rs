//! Property & Unit DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare una nuova proprietà
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreatePropertyDTO {
    #[validate(length(min = 1, max = 64))]
    pub owner_sub: String,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 240))]
    pub address: String,
}

/// DTO per aggiornamento parziale di una proprietà
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdatePropertyDTO {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 240))]
    pub address: Option<String>,
}

/// DTO per creare una unit dentro una proprietà (property_id dal path)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUnitDTO {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(range(min = 1, max = 50))]
    pub max_guests: i64,
    #[validate(range(min = 0))]
    pub nightly_rate_cents: i64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub cleaning_fee_cents: i64,
    pub policy_notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateUnitDTO {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(range(min = 1, max = 50))]
    pub max_guests: Option<i64>,
    #[validate(range(min = 0))]
    pub nightly_rate_cents: Option<i64>,
    #[validate(range(min = 0))]
    pub cleaning_fee_cents: Option<i64>,
    pub policy_notes: Option<String>,
}
