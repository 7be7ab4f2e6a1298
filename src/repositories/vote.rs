//! VoteRepository - Repository per i voti del forum

use super::traits::Read;
use crate::entities::{Vote, VoteTarget};
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct VoteRepository {
    connection_pool: SqlitePool,
}

impl VoteRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Voto esistente di un votante su un target (unique per costruzione)
    pub async fn find_by_voter_and_target(
        &self,
        voter_sub: &str,
        target_kind: VoteTarget,
        target_id: &i64,
    ) -> Result<Option<Vote>, Error> {
        sqlx::query_as::<_, Vote>(
            "SELECT * FROM votes WHERE voter_sub = ? AND target_kind = ? AND target_id = ?",
        )
        .bind(voter_sub)
        .bind(target_kind)
        .bind(target_id)
        .fetch_optional(&self.connection_pool)
        .await
    }

    pub async fn create(
        &self,
        voter_sub: &str,
        target_kind: VoteTarget,
        target_id: &i64,
        value: i64,
    ) -> Result<Vote, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO votes (voter_sub, target_kind, target_id, value, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(voter_sub)
        .bind(target_kind)
        .bind(target_id)
        .bind(value)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Vote {
            vote_id: result.last_insert_rowid(),
            voter_sub: voter_sub.to_string(),
            target_kind,
            target_id: *target_id,
            value,
            created_at: now,
        })
    }

    pub async fn update_value(&self, vote_id: &i64, value: i64) -> Result<Vote, Error> {
        sqlx::query("UPDATE votes SET value = ? WHERE vote_id = ?")
            .bind(value)
            .bind(vote_id)
            .execute(&self.connection_pool)
            .await?;

        self.read(vote_id).await?.ok_or(Error::RowNotFound)
    }

    pub async fn delete(&self, vote_id: &i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM votes WHERE vote_id = ?")
            .bind(vote_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl Read<Vote, i64> for VoteRepository {
    async fn read(&self, id: &i64) -> Result<Option<Vote>, Error> {
        sqlx::query_as::<_, Vote>("SELECT * FROM votes WHERE vote_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
