//! UserProfile entity - Contatori di reputazione e voti per utente
//!
//! Le righe vengono create lazy al primo evento che tocca il profilo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct UserProfile {
    pub sub: String,
    pub display_name: Option<String>,
    pub reputation: i64,
    pub upvotes_given: i64,
    pub downvotes_given: i64,
    pub upvotes_received: i64,
    pub downvotes_received: i64,
    pub created_at: DateTime<Utc>,
}
