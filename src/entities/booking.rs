//! Booking entity - Prenotazione di una unit

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Booking {
    pub booking_id: i64,
    pub unit_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub payout_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Numero di notti coperte dalla prenotazione
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}
