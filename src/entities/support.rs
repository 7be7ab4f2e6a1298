//! Support entities - Thread e messaggi della inbox di supporto

use super::enums::MessageDirection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct SupportThread {
    pub thread_id: i64,
    pub sender_email: String,
    pub subject: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct SupportMessage {
    pub message_id: i64,
    pub thread_id: i64,
    pub direction: MessageDirection,
    pub body: String,
    pub received_at: DateTime<Utc>,
}
