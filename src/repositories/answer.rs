//! AnswerRepository - Repository per le risposte del forum

use super::traits::Read;
use crate::dtos::CreateAnswerDTO;
use crate::entities::Answer;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct AnswerRepository {
    connection_pool: SqlitePool,
}

impl AnswerRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_post(&self, post_id: &i64) -> Result<Vec<Answer>, Error> {
        sqlx::query_as::<_, Answer>(
            "SELECT * FROM answers WHERE post_id = ? ORDER BY score DESC, created_at ASC",
        )
        .bind(post_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn create_for_post(
        &self,
        post_id: &i64,
        data: &CreateAnswerDTO,
    ) -> Result<Answer, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO answers (post_id, author_sub, body, score, is_accepted, created_at) VALUES (?, ?, ?, 0, 0, ?)",
        )
        .bind(post_id)
        .bind(&data.author_sub)
        .bind(&data.body)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Answer {
            answer_id: result.last_insert_rowid(),
            post_id: *post_id,
            author_sub: data.author_sub.clone(),
            body: data.body.clone(),
            score: 0,
            is_accepted: false,
            created_at: now,
        })
    }

    /// Flip del flag is_accepted; ritorna la riga aggiornata
    pub async fn set_accepted(&self, answer_id: &i64, accepted: bool) -> Result<Answer, Error> {
        sqlx::query("UPDATE answers SET is_accepted = ? WHERE answer_id = ?")
            .bind(accepted)
            .bind(answer_id)
            .execute(&self.connection_pool)
            .await?;

        self.read(answer_id).await?.ok_or(Error::RowNotFound)
    }

    pub async fn apply_score_delta(&self, answer_id: &i64, delta: i64) -> Result<(), Error> {
        sqlx::query("UPDATE answers SET score = score + ? WHERE answer_id = ?")
            .bind(delta)
            .bind(answer_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl Read<Answer, i64> for AnswerRepository {
    async fn read(&self, id: &i64) -> Result<Option<Answer>, Error> {
        sqlx::query_as::<_, Answer>("SELECT * FROM answers WHERE answer_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
