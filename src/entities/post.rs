//! Post entity - Domanda del forum community

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub post_id: i64,
    pub author_sub: String,
    pub title: String,
    pub body: String,
    pub score: i64,
    pub accepted_answer_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}
