//! Revenue entities - Audit di lead generation, profili e snapshot mensili

use super::enums::AuditStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct RevenueAudit {
    pub audit_id: i64,
    pub contact_name: String,
    pub contact_email: String,
    pub address: String,
    pub bedrooms: i64,
    pub estimated_revenue_cents: i64,
    pub status: AuditStatus,
    pub property_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct RevenueProfile {
    pub profile_id: i64,
    pub property_id: i64,
    pub target_monthly_cents: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Riga mensile di fatturato per una unit ("YYYY-MM")
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct RevenueSnapshot {
    pub snapshot_id: i64,
    pub unit_id: i64,
    pub month: String,
    pub gross_cents: i64,
    pub payout_cents: i64,
    pub nights_booked: i64,
    pub created_at: DateTime<Utc>,
}
