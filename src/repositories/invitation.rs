//! InvitationRepository - Repository per la gestione degli inviti

use super::traits::Read;
use crate::entities::{Invitation, InvitationStatus};
use chrono::{DateTime, Utc};
use sqlx::{Error, SqlitePool};

pub struct InvitationRepository {
    connection_pool: SqlitePool,
}

impl InvitationRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Get all pending invitations created by a specific owner
    pub async fn find_pending_by_owner(&self, owner_sub: &str) -> Result<Vec<Invitation>, Error> {
        sqlx::query_as::<_, Invitation>(
            "SELECT * FROM invitations WHERE owner_sub = ? AND status = 'PENDING' ORDER BY created_at DESC",
        )
        .bind(owner_sub)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn update_status(
        &self,
        invitation_id: &i64,
        new_status: &InvitationStatus,
    ) -> Result<(), Error> {
        sqlx::query("UPDATE invitations SET status = ? WHERE invitation_id = ?")
            .bind(new_status.clone())
            .bind(invitation_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }

    /// Insert a new PENDING invitation; the raw token never reaches this layer,
    /// solo il suo hash.
    pub async fn create(
        &self,
        owner_sub: &str,
        email: &str,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Invitation, Error> {
        let now = Utc::now();
        let status = InvitationStatus::Pending;

        let result = sqlx::query(
            r#"
            INSERT INTO invitations (owner_sub, email, token_hash, status, expires_at, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(owner_sub)
        .bind(email)
        .bind(token_hash)
        .bind(status.clone())
        .bind(expires_at)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Invitation {
            invitation_id: result.last_insert_rowid(),
            owner_sub: owner_sub.to_string(),
            email: email.to_string(),
            token_hash: token_hash.to_string(),
            status,
            expires_at,
            created_at: now,
        })
    }
}

impl Read<Invitation, i64> for InvitationRepository {
    async fn read(&self, id: &i64) -> Result<Option<Invitation>, Error> {
        sqlx::query_as::<_, Invitation>("SELECT * FROM invitations WHERE invitation_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
