//! BookingRepository - Repository per le prenotazioni

use super::traits::{Delete, Read};
use crate::dtos::CreateBookingDTO;
use crate::entities::Booking;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct BookingRepository {
    connection_pool: SqlitePool,
}

impl BookingRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_unit(&self, unit_id: &i64) -> Result<Vec<Booking>, Error> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE unit_id = ? ORDER BY check_in ASC",
        )
        .bind(unit_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn create_for_unit(
        &self,
        unit_id: &i64,
        data: &CreateBookingDTO,
    ) -> Result<Booking, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO bookings (unit_id, guest_name, guest_email, check_in, check_out, payout_cents, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(unit_id)
        .bind(&data.guest_name)
        .bind(&data.guest_email)
        .bind(data.check_in)
        .bind(data.check_out)
        .bind(data.payout_cents)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Booking {
            booking_id: result.last_insert_rowid(),
            unit_id: *unit_id,
            guest_name: data.guest_name.clone(),
            guest_email: data.guest_email.clone(),
            check_in: data.check_in,
            check_out: data.check_out,
            payout_cents: data.payout_cents,
            created_at: now,
        })
    }
}

impl Read<Booking, i64> for BookingRepository {
    async fn read(&self, id: &i64) -> Result<Option<Booking>, Error> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE booking_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Delete<i64> for BookingRepository {
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM bookings WHERE booking_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
