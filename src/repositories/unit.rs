//! UnitRepository - Repository per le unit affittabili

use super::traits::{Delete, Read, Update};
use crate::dtos::{CreateUnitDTO, UpdateUnitDTO};
use crate::entities::Unit;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct UnitRepository {
    connection_pool: SqlitePool,
}

impl UnitRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_property(&self, property_id: &i64) -> Result<Vec<Unit>, Error> {
        sqlx::query_as::<_, Unit>(
            "SELECT * FROM units WHERE property_id = ? ORDER BY created_at ASC",
        )
        .bind(property_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Create a unit under an existing property (property_id arriva dal path)
    pub async fn create_for_property(
        &self,
        property_id: &i64,
        data: &CreateUnitDTO,
    ) -> Result<Unit, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO units (property_id, name, max_guests, nightly_rate_cents, cleaning_fee_cents, policy_notes, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(property_id)
        .bind(&data.name)
        .bind(data.max_guests)
        .bind(data.nightly_rate_cents)
        .bind(data.cleaning_fee_cents)
        .bind(&data.policy_notes)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Unit {
            unit_id: result.last_insert_rowid(),
            property_id: *property_id,
            name: data.name.clone(),
            max_guests: data.max_guests,
            nightly_rate_cents: data.nightly_rate_cents,
            cleaning_fee_cents: data.cleaning_fee_cents,
            policy_notes: data.policy_notes.clone(),
            created_at: now,
        })
    }
}

impl Read<Unit, i64> for UnitRepository {
    async fn read(&self, id: &i64) -> Result<Option<Unit>, Error> {
        sqlx::query_as::<_, Unit>("SELECT * FROM units WHERE unit_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Update<Unit, UpdateUnitDTO, i64> for UnitRepository {
    async fn update(&self, id: &i64, data: &UpdateUnitDTO) -> Result<Unit, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        if data.name.is_none()
            && data.max_guests.is_none()
            && data.nightly_rate_cents.is_none()
            && data.cleaning_fee_cents.is_none()
            && data.policy_notes.is_none()
        {
            return Ok(current);
        }

        let mut query_builder = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE units SET ");
        let mut separated = query_builder.separated(", ");
        if let Some(ref name) = data.name {
            separated.push("name = ");
            separated.push_bind_unseparated(name);
        }
        if let Some(max_guests) = data.max_guests {
            separated.push("max_guests = ");
            separated.push_bind_unseparated(max_guests);
        }
        if let Some(rate) = data.nightly_rate_cents {
            separated.push("nightly_rate_cents = ");
            separated.push_bind_unseparated(rate);
        }
        if let Some(fee) = data.cleaning_fee_cents {
            separated.push("cleaning_fee_cents = ");
            separated.push_bind_unseparated(fee);
        }
        if let Some(ref notes) = data.policy_notes {
            separated.push("policy_notes = ");
            separated.push_bind_unseparated(notes);
        }
        query_builder.push(" WHERE unit_id = ");
        query_builder.push_bind(id);

        query_builder.build().execute(&self.connection_pool).await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i64> for UnitRepository {
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM units WHERE unit_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
