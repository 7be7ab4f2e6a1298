//! Booking DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare una prenotazione (unit_id dal path)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateBookingDTO {
    #[validate(length(min = 1, max = 120))]
    pub guest_name: String,
    #[validate(email)]
    pub guest_email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 0))]
    pub payout_cents: i64,
}
