//! UserProfileRepository - Contatori di reputazione e voti
//!
//! I profili sono creati lazy: ogni scrittura passa prima da `ensure`, che
//! inserisce la riga a zero se manca (INSERT OR IGNORE, idempotente).

use super::traits::Read;
use crate::entities::UserProfile;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct UserProfileRepository {
    connection_pool: SqlitePool,
}

impl UserProfileRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Crea il profilo a zero se non esiste ancora
    pub async fn ensure(&self, sub: &str) -> Result<(), Error> {
        sqlx::query(
            "INSERT OR IGNORE INTO user_profiles (sub, reputation, upvotes_given, downvotes_given, upvotes_received, downvotes_received, created_at) VALUES (?, 0, 0, 0, 0, 0, ?)",
        )
        .bind(sub)
        .bind(Utc::now())
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }

    pub async fn apply_reputation_delta(&self, sub: &str, delta: i64) -> Result<(), Error> {
        self.ensure(sub).await?;

        sqlx::query("UPDATE user_profiles SET reputation = reputation + ? WHERE sub = ?")
            .bind(delta)
            .bind(sub)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }

    /// Applica in una sola scrittura i delta sui quattro contatori voto
    pub async fn apply_vote_counters(
        &self,
        sub: &str,
        up_given: i64,
        down_given: i64,
        up_received: i64,
        down_received: i64,
    ) -> Result<(), Error> {
        self.ensure(sub).await?;

        sqlx::query(
            r#"
            UPDATE user_profiles
            SET upvotes_given = upvotes_given + ?,
                downvotes_given = downvotes_given + ?,
                upvotes_received = upvotes_received + ?,
                downvotes_received = downvotes_received + ?
            WHERE sub = ?
            "#,
        )
        .bind(up_given)
        .bind(down_given)
        .bind(up_received)
        .bind(down_received)
        .bind(sub)
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }
}

impl Read<UserProfile, String> for UserProfileRepository {
    async fn read(&self, id: &String) -> Result<Option<UserProfile>, Error> {
        sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles WHERE sub = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
