//! PropertyRepository - Repository per la gestione delle proprietà

use super::traits::{Create, Delete, Read, Update};
use crate::dtos::{CreatePropertyDTO, UpdatePropertyDTO};
use crate::entities::Property;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct PropertyRepository {
    connection_pool: SqlitePool,
}

impl PropertyRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Tutte le proprietà di un owner, le più recenti prima
    pub async fn find_many_by_owner(&self, owner_sub: &str) -> Result<Vec<Property>, Error> {
        sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE owner_sub = ? ORDER BY created_at DESC",
        )
        .bind(owner_sub)
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Create<Property, CreatePropertyDTO> for PropertyRepository {
    async fn create(&self, data: &CreatePropertyDTO) -> Result<Property, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO properties (owner_sub, name, address, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&data.owner_sub)
        .bind(&data.name)
        .bind(&data.address)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Property {
            property_id: result.last_insert_rowid(),
            owner_sub: data.owner_sub.clone(),
            name: data.name.clone(),
            address: data.address.clone(),
            created_at: now,
        })
    }
}

impl Read<Property, i64> for PropertyRepository {
    async fn read(&self, id: &i64) -> Result<Option<Property>, Error> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE property_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Update<Property, UpdatePropertyDTO, i64> for PropertyRepository {
    async fn update(&self, id: &i64, data: &UpdatePropertyDTO) -> Result<Property, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        if data.name.is_none() && data.address.is_none() {
            return Ok(current);
        }

        let mut query_builder = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE properties SET ");
        let mut separated = query_builder.separated(", ");
        if let Some(ref name) = data.name {
            separated.push("name = ");
            separated.push_bind_unseparated(name);
        }
        if let Some(ref address) = data.address {
            separated.push("address = ");
            separated.push_bind_unseparated(address);
        }
        query_builder.push(" WHERE property_id = ");
        query_builder.push_bind(id);

        query_builder.build().execute(&self.connection_pool).await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i64> for PropertyRepository {
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM properties WHERE property_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
