//! Revenue repositories - Audit di lead generation, profili e snapshot mensili

use super::traits::Read;
use crate::dtos::{CreateRevenueAuditDTO, CreateSnapshotDTO, PropertyRevenueSummaryDTO};
use crate::entities::{AuditStatus, RevenueAudit, RevenueProfile, RevenueSnapshot};
use chrono::Utc;
use sqlx::{Error, SqlitePool};

// ***************************** AUDIT ***************************** //

pub struct RevenueAuditRepository {
    connection_pool: SqlitePool,
}

impl RevenueAuditRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_all(&self) -> Result<Vec<RevenueAudit>, Error> {
        sqlx::query_as::<_, RevenueAudit>(
            "SELECT * FROM revenue_audits ORDER BY created_at DESC",
        )
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn create(&self, data: &CreateRevenueAuditDTO) -> Result<RevenueAudit, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO revenue_audits (contact_name, contact_email, address, bedrooms, estimated_revenue_cents, status, created_at)
            VALUES (?, ?, ?, ?, ?, 'NEW', ?)
            "#,
        )
        .bind(&data.contact_name)
        .bind(&data.contact_email)
        .bind(&data.address)
        .bind(data.bedrooms)
        .bind(data.estimated_revenue_cents)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(RevenueAudit {
            audit_id: result.last_insert_rowid(),
            contact_name: data.contact_name.clone(),
            contact_email: data.contact_email.clone(),
            address: data.address.clone(),
            bedrooms: data.bedrooms,
            estimated_revenue_cents: data.estimated_revenue_cents,
            status: AuditStatus::New,
            property_id: None,
            created_at: now,
        })
    }

    /// Marca l'audit CONVERTED agganciandolo alla proprietà creata.
    /// Condizionale su status = NEW: una doppia conversione non passa.
    pub async fn mark_converted(
        &self,
        audit_id: &i64,
        property_id: &i64,
    ) -> Result<bool, Error> {
        let result = sqlx::query(
            "UPDATE revenue_audits SET status = 'CONVERTED', property_id = ? WHERE audit_id = ? AND status = 'NEW'",
        )
        .bind(property_id)
        .bind(audit_id)
        .execute(&self.connection_pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl Read<RevenueAudit, i64> for RevenueAuditRepository {
    async fn read(&self, id: &i64) -> Result<Option<RevenueAudit>, Error> {
        sqlx::query_as::<_, RevenueAudit>("SELECT * FROM revenue_audits WHERE audit_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

// ***************************** PROFILE ***************************** //

pub struct RevenueProfileRepository {
    connection_pool: SqlitePool,
}

impl RevenueProfileRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn create(
        &self,
        property_id: &i64,
        target_monthly_cents: i64,
        notes: Option<String>,
    ) -> Result<RevenueProfile, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO revenue_profiles (property_id, target_monthly_cents, notes, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(property_id)
        .bind(target_monthly_cents)
        .bind(&notes)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(RevenueProfile {
            profile_id: result.last_insert_rowid(),
            property_id: *property_id,
            target_monthly_cents,
            notes,
            created_at: now,
        })
    }

    pub async fn find_by_property(
        &self,
        property_id: &i64,
    ) -> Result<Option<RevenueProfile>, Error> {
        sqlx::query_as::<_, RevenueProfile>(
            "SELECT * FROM revenue_profiles WHERE property_id = ? ORDER BY created_at DESC LIMIT 1",
        )
        .bind(property_id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}

// ***************************** SNAPSHOT ***************************** //

pub struct RevenueSnapshotRepository {
    connection_pool: SqlitePool,
}

impl RevenueSnapshotRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_unit(&self, unit_id: &i64) -> Result<Vec<RevenueSnapshot>, Error> {
        sqlx::query_as::<_, RevenueSnapshot>(
            "SELECT * FROM revenue_snapshots WHERE unit_id = ? ORDER BY month ASC",
        )
        .bind(unit_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn create_for_unit(
        &self,
        unit_id: &i64,
        data: &CreateSnapshotDTO,
    ) -> Result<RevenueSnapshot, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO revenue_snapshots (unit_id, month, gross_cents, payout_cents, nights_booked, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(unit_id)
        .bind(&data.month)
        .bind(data.gross_cents)
        .bind(data.payout_cents)
        .bind(data.nights_booked)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(RevenueSnapshot {
            snapshot_id: result.last_insert_rowid(),
            unit_id: *unit_id,
            month: data.month.clone(),
            gross_cents: data.gross_cents,
            payout_cents: data.payout_cents,
            nights_booked: data.nights_booked,
            created_at: now,
        })
    }

    /// Aggregato per proprietà: somma degli snapshot di tutte le sue unit
    pub async fn property_summary(
        &self,
        property_id: &i64,
    ) -> Result<PropertyRevenueSummaryDTO, Error> {
        sqlx::query_as::<_, PropertyRevenueSummaryDTO>(
            r#"
            SELECT ? AS property_id,
                   COALESCE(SUM(s.gross_cents), 0) AS gross_cents,
                   COALESCE(SUM(s.payout_cents), 0) AS payout_cents,
                   COALESCE(SUM(s.nights_booked), 0) AS nights_booked,
                   COUNT(s.snapshot_id) AS months
            FROM units u
            LEFT JOIN revenue_snapshots s ON s.unit_id = u.unit_id
            WHERE u.property_id = ?
            "#,
        )
        .bind(property_id)
        .bind(property_id)
        .fetch_one(&self.connection_pool)
        .await
    }
}
