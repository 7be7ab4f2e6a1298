//! Query DTOs - Data Transfer Objects per query parameters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct OwnerQuery {
    pub owner_sub: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CleanerQuery {
    pub cleaner_sub: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RealtorQuery {
    pub realtor_sub: String,
}

/// Filtro affiliations: uno dei due lati del legame
#[derive(Serialize, Deserialize, Debug)]
pub struct AffiliationQuery {
    #[serde(default)]
    pub owner_sub: Option<String>,
    #[serde(default)]
    pub cleaner_sub: Option<String>,
}

/// Paginazione dei post del forum (cursore temporale)
#[derive(Serialize, Deserialize, Debug)]
pub struct PostsQuery {
    #[serde(default)]
    pub before_date: Option<DateTime<Utc>>,
}
