//! Revenue DTOs

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    /// Mese in formato "YYYY-MM"
    static ref MONTH_RE: Regex = Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").unwrap();
}

/// DTO di lead capture per un revenue audit
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateRevenueAuditDTO {
    #[validate(length(min = 1, max = 120))]
    pub contact_name: String,
    #[validate(email)]
    pub contact_email: String,
    #[validate(length(min = 1, max = 240))]
    pub address: String,
    #[validate(range(min = 0, max = 50))]
    pub bedrooms: i64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub estimated_revenue_cents: i64,
}

/// DTO per registrare lo snapshot mensile di una unit (unit_id dal path)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateSnapshotDTO {
    #[validate(regex(path = *MONTH_RE))]
    pub month: String,
    #[validate(range(min = 0))]
    pub gross_cents: i64,
    #[validate(range(min = 0))]
    pub payout_cents: i64,
    #[validate(range(min = 0, max = 31))]
    pub nights_booked: i64,
}

/// DTO per convertire un audit in una proprietà gestita
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct ConvertAuditDTO {
    #[validate(length(min = 1, max = 64))]
    pub owner_sub: String,
    /// Nome della proprietà; default: l'indirizzo dell'audit
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
}

/// Esito della conversione audit → proprietà
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConvertedAuditDTO {
    pub audit: crate::entities::RevenueAudit,
    pub property: crate::entities::Property,
    pub revenue_profile: crate::entities::RevenueProfile,
}

/// Aggregato di fatturato per una proprietà (somma sulle sue unit)
#[derive(Serialize, Deserialize, Debug, Clone, Default, sqlx::FromRow)]
pub struct PropertyRevenueSummaryDTO {
    pub property_id: i64,
    pub gross_cents: i64,
    pub payout_cents: i64,
    pub nights_booked: i64,
    pub months: i64,
}
