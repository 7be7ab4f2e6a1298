//! AffiliationRepository - Repository per i legami cleaner/owner

use super::traits::Read;
use crate::entities::{AffiliationStatus, CleanerAffiliation};
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct AffiliationRepository {
    connection_pool: SqlitePool,
}

impl AffiliationRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_owner(
        &self,
        owner_sub: &str,
    ) -> Result<Vec<CleanerAffiliation>, Error> {
        sqlx::query_as::<_, CleanerAffiliation>(
            "SELECT * FROM cleaner_affiliations WHERE owner_sub = ? ORDER BY created_at DESC",
        )
        .bind(owner_sub)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn find_many_by_cleaner(
        &self,
        cleaner_sub: &str,
    ) -> Result<Vec<CleanerAffiliation>, Error> {
        sqlx::query_as::<_, CleanerAffiliation>(
            "SELECT * FROM cleaner_affiliations WHERE cleaner_sub = ? ORDER BY created_at DESC",
        )
        .bind(cleaner_sub)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Affiliation ACTIVE già esistente tra i due lati, se c'è
    pub async fn find_active_pair(
        &self,
        owner_sub: &str,
        cleaner_sub: &str,
    ) -> Result<Option<CleanerAffiliation>, Error> {
        sqlx::query_as::<_, CleanerAffiliation>(
            "SELECT * FROM cleaner_affiliations WHERE owner_sub = ? AND cleaner_sub = ? AND status = 'ACTIVE'",
        )
        .bind(owner_sub)
        .bind(cleaner_sub)
        .fetch_optional(&self.connection_pool)
        .await
    }

    pub async fn create(
        &self,
        owner_sub: &str,
        cleaner_sub: &str,
    ) -> Result<CleanerAffiliation, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO cleaner_affiliations (owner_sub, cleaner_sub, status, created_at) VALUES (?, ?, 'ACTIVE', ?)",
        )
        .bind(owner_sub)
        .bind(cleaner_sub)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(CleanerAffiliation {
            affiliation_id: result.last_insert_rowid(),
            owner_sub: owner_sub.to_string(),
            cleaner_sub: cleaner_sub.to_string(),
            status: AffiliationStatus::Active,
            created_at: now,
        })
    }

    /// Revoca condizionale: tocca la riga solo se è ancora ACTIVE
    pub async fn revoke(&self, affiliation_id: &i64) -> Result<bool, Error> {
        let result = sqlx::query(
            "UPDATE cleaner_affiliations SET status = 'REVOKED' WHERE affiliation_id = ? AND status = 'ACTIVE'",
        )
        .bind(affiliation_id)
        .execute(&self.connection_pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl Read<CleanerAffiliation, i64> for AffiliationRepository {
    async fn read(&self, id: &i64) -> Result<Option<CleanerAffiliation>, Error> {
        sqlx::query_as::<_, CleanerAffiliation>(
            "SELECT * FROM cleaner_affiliations WHERE affiliation_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}
