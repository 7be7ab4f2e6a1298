//! PostRepository - Repository per i post del forum
//!
//! Qui vivono anche le scritture condizionali sul puntatore accepted_answer_id:
//! il clear confronta-e-azzera è l'equivalente SQL della condition expression
//! usata dal trigger di accettazione.

use super::traits::Read;
use crate::dtos::CreatePostDTO;
use crate::entities::Post;
use chrono::{DateTime, Utc};
use sqlx::{Error, SqlitePool};

/// Page size della lista post
const POSTS_PAGE_SIZE: i64 = 20;

pub struct PostRepository {
    connection_pool: SqlitePool,
}

impl PostRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Lista paginata per cursore temporale (come la paginazione dei messaggi)
    pub async fn find_page(
        &self,
        before_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<Post>, Error> {
        match before_date {
            Some(cursor) => {
                sqlx::query_as::<_, Post>(
                    "SELECT * FROM posts WHERE created_at < ? ORDER BY created_at DESC LIMIT ?",
                )
                .bind(cursor)
                .bind(POSTS_PAGE_SIZE)
                .fetch_all(&self.connection_pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Post>(
                    "SELECT * FROM posts ORDER BY created_at DESC LIMIT ?",
                )
                .bind(POSTS_PAGE_SIZE)
                .fetch_all(&self.connection_pool)
                .await
            }
        }
    }

    pub async fn create(&self, data: &CreatePostDTO) -> Result<Post, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO posts (author_sub, title, body, score, created_at) VALUES (?, ?, ?, 0, ?)",
        )
        .bind(&data.author_sub)
        .bind(&data.title)
        .bind(&data.body)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Post {
            post_id: result.last_insert_rowid(),
            author_sub: data.author_sub.clone(),
            title: data.title.clone(),
            body: data.body.clone(),
            score: 0,
            accepted_answer_id: None,
            created_at: now,
        })
    }

    pub async fn apply_score_delta(&self, post_id: &i64, delta: i64) -> Result<(), Error> {
        sqlx::query("UPDATE posts SET score = score + ? WHERE post_id = ?")
            .bind(delta)
            .bind(post_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }

    /// Punta il post alla risposta accettata. Set incondizionato: un accept
    /// più recente vince sempre.
    pub async fn set_accepted_answer(
        &self,
        post_id: &i64,
        answer_id: &i64,
    ) -> Result<(), Error> {
        sqlx::query("UPDATE posts SET accepted_answer_id = ? WHERE post_id = ?")
            .bind(answer_id)
            .bind(post_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }

    /// Compare-and-clear: azzera il puntatore solo se punta ancora a questa
    /// risposta. Un unaccept stantio non deve sovrascrivere un accept più nuovo.
    ///
    /// # Returns
    /// `true` se il puntatore è stato azzerato, `false` se non combaciava più
    pub async fn clear_accepted_answer_if_matches(
        &self,
        post_id: &i64,
        answer_id: &i64,
    ) -> Result<bool, Error> {
        let result = sqlx::query(
            "UPDATE posts SET accepted_answer_id = NULL WHERE post_id = ? AND accepted_answer_id = ?",
        )
        .bind(post_id)
        .bind(answer_id)
        .execute(&self.connection_pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl Read<Post, i64> for PostRepository {
    async fn read(&self, id: &i64) -> Result<Option<Post>, Error> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE post_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
