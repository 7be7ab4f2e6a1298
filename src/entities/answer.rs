//! Answer entity - Risposta a un post del forum

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Answer {
    pub answer_id: i64,
    pub post_id: i64,
    pub author_sub: String,
    pub body: String,
    pub score: i64,
    pub is_accepted: bool,
    pub created_at: DateTime<Utc>,
}
