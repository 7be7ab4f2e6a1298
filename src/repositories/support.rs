//! SupportRepository - Thread e messaggi della inbox di supporto

use super::traits::Read;
use crate::entities::{MessageDirection, SupportMessage, SupportThread};
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct SupportRepository {
    connection_pool: SqlitePool,
}

impl SupportRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_all_threads(&self) -> Result<Vec<SupportThread>, Error> {
        sqlx::query_as::<_, SupportThread>(
            "SELECT * FROM support_threads ORDER BY created_at DESC",
        )
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Thread più recente per mittente (l'ingestione accoda lì)
    pub async fn find_thread_by_sender(
        &self,
        sender_email: &str,
    ) -> Result<Option<SupportThread>, Error> {
        sqlx::query_as::<_, SupportThread>(
            "SELECT * FROM support_threads WHERE sender_email = ? ORDER BY created_at DESC LIMIT 1",
        )
        .bind(sender_email)
        .fetch_optional(&self.connection_pool)
        .await
    }

    pub async fn create_thread(
        &self,
        sender_email: &str,
        subject: &str,
    ) -> Result<SupportThread, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO support_threads (sender_email, subject, created_at) VALUES (?, ?, ?)",
        )
        .bind(sender_email)
        .bind(subject)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(SupportThread {
            thread_id: result.last_insert_rowid(),
            sender_email: sender_email.to_string(),
            subject: subject.to_string(),
            created_at: now,
        })
    }

    pub async fn find_messages_by_thread(
        &self,
        thread_id: &i64,
    ) -> Result<Vec<SupportMessage>, Error> {
        sqlx::query_as::<_, SupportMessage>(
            "SELECT * FROM support_messages WHERE thread_id = ? ORDER BY received_at ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn create_message(
        &self,
        thread_id: &i64,
        direction: MessageDirection,
        body: &str,
    ) -> Result<SupportMessage, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO support_messages (thread_id, direction, body, received_at) VALUES (?, ?, ?, ?)",
        )
        .bind(thread_id)
        .bind(direction.clone())
        .bind(body)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(SupportMessage {
            message_id: result.last_insert_rowid(),
            thread_id: *thread_id,
            direction,
            body: body.to_string(),
            received_at: now,
        })
    }
}

impl Read<SupportThread, i64> for SupportRepository {
    async fn read(&self, id: &i64) -> Result<Option<SupportThread>, Error> {
        sqlx::query_as::<_, SupportThread>("SELECT * FROM support_threads WHERE thread_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
