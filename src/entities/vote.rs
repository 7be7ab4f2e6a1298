//! Vote entity - Voto (+1/-1) su un post o una risposta

use super::enums::VoteTarget;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Vote {
    pub vote_id: i64,
    pub voter_sub: String,
    pub target_kind: VoteTarget,
    pub target_id: i64,
    pub value: i64,
    pub created_at: DateTime<Utc>,
}
