//! CleaningRepository - Repository per le pulizie programmate

use super::traits::{Read, Update};
use crate::dtos::{CleaningTaskDTO, CreateCleaningDTO, UpdateCleaningDTO};
use crate::entities::Cleaning;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct CleaningRepository {
    connection_pool: SqlitePool,
}

impl CleaningRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_unit(&self, unit_id: &i64) -> Result<Vec<Cleaning>, Error> {
        sqlx::query_as::<_, Cleaning>(
            "SELECT * FROM cleanings WHERE unit_id = ? ORDER BY scheduled_date ASC",
        )
        .bind(unit_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Task-list per un cleaner: tutte le pulizie sulle unit di owner con cui
    /// il cleaner ha un'affiliation ACTIVE, arricchite con nomi di unit e proprietà.
    pub async fn find_tasks_for_cleaner(
        &self,
        cleaner_sub: &str,
    ) -> Result<Vec<CleaningTaskDTO>, Error> {
        sqlx::query_as::<_, CleaningTaskDTO>(
            r#"
            SELECT c.cleaning_id, c.unit_id, u.name AS unit_name, p.name AS property_name,
                   c.scheduled_date, c.status, c.notes, c.created_at
            FROM cleanings c
            JOIN units u ON u.unit_id = c.unit_id
            JOIN properties p ON p.property_id = u.property_id
            JOIN cleaner_affiliations a
                 ON a.owner_sub = p.owner_sub
                AND a.cleaner_sub = ?
                AND a.status = 'ACTIVE'
            ORDER BY c.scheduled_date ASC
            "#,
        )
        .bind(cleaner_sub)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn create_for_unit(
        &self,
        unit_id: &i64,
        data: &CreateCleaningDTO,
    ) -> Result<Cleaning, Error> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO cleanings (unit_id, scheduled_date, status, cleaner_sub, notes, created_at)
            VALUES (?, ?, 'SCHEDULED', ?, ?, ?)
            "#,
        )
        .bind(unit_id)
        .bind(data.scheduled_date)
        .bind(&data.cleaner_sub)
        .bind(&data.notes)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Cleaning {
            cleaning_id: result.last_insert_rowid(),
            unit_id: *unit_id,
            scheduled_date: data.scheduled_date,
            status: crate::entities::CleaningStatus::Scheduled,
            cleaner_sub: data.cleaner_sub.clone(),
            notes: data.notes.clone(),
            created_at: now,
        })
    }
}

impl Read<Cleaning, i64> for CleaningRepository {
    async fn read(&self, id: &i64) -> Result<Option<Cleaning>, Error> {
        sqlx::query_as::<_, Cleaning>("SELECT * FROM cleanings WHERE cleaning_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Update<Cleaning, UpdateCleaningDTO, i64> for CleaningRepository {
    async fn update(&self, id: &i64, data: &UpdateCleaningDTO) -> Result<Cleaning, Error> {
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        if data.status.is_none()
            && data.cleaner_sub.is_none()
            && data.scheduled_date.is_none()
            && data.notes.is_none()
        {
            return Ok(current);
        }

        let mut query_builder = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE cleanings SET ");
        let mut separated = query_builder.separated(", ");
        if let Some(ref status) = data.status {
            separated.push("status = ");
            separated.push_bind_unseparated(status.clone());
        }
        if let Some(ref cleaner_sub) = data.cleaner_sub {
            separated.push("cleaner_sub = ");
            separated.push_bind_unseparated(cleaner_sub);
        }
        if let Some(scheduled_date) = data.scheduled_date {
            separated.push("scheduled_date = ");
            separated.push_bind_unseparated(scheduled_date);
        }
        if let Some(ref notes) = data.notes {
            separated.push("notes = ");
            separated.push_bind_unseparated(notes);
        }
        query_builder.push(" WHERE cleaning_id = ");
        query_builder.push_bind(id);

        query_builder.build().execute(&self.connection_pool).await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}
