//! ReferralRepository - Repository per le segnalazioni realtor → host

use super::traits::Read;
use crate::dtos::CreateReferralDTO;
use crate::entities::{OnboardingStatus, Referral};
use chrono::Utc;
use sqlx::{Error, SqlitePool};

pub struct ReferralRepository {
    connection_pool: SqlitePool,
}

impl ReferralRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    pub async fn find_many_by_realtor(&self, realtor_sub: &str) -> Result<Vec<Referral>, Error> {
        sqlx::query_as::<_, Referral>(
            "SELECT * FROM referrals WHERE realtor_sub = ? ORDER BY created_at DESC",
        )
        .bind(realtor_sub)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// True se il codice è già assegnato a una segnalazione
    pub async fn code_taken(&self, code: &str) -> Result<bool, Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM referrals WHERE referral_code = ?")
                .bind(code)
                .fetch_one(&self.connection_pool)
                .await?;

        Ok(count.0 > 0)
    }

    pub async fn create(
        &self,
        data: &CreateReferralDTO,
        referral_code: &str,
    ) -> Result<Referral, Error> {
        let now = Utc::now();
        let status = OnboardingStatus::Invited;

        let result = sqlx::query(
            r#"
            INSERT INTO referrals (realtor_sub, host_name, host_email, referral_code, onboarding_status, payout_cents, created_at)
            VALUES (?, ?, ?, ?, ?, 0, ?)
            "#,
        )
        .bind(&data.realtor_sub)
        .bind(&data.host_name)
        .bind(&data.host_email)
        .bind(referral_code)
        .bind(status)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        Ok(Referral {
            referral_id: result.last_insert_rowid(),
            realtor_sub: data.realtor_sub.clone(),
            host_name: data.host_name.clone(),
            host_email: data.host_email.clone(),
            referral_code: referral_code.to_string(),
            onboarding_status: status,
            payout_cents: 0,
            created_at: now,
        })
    }

    pub async fn update_status(
        &self,
        referral_id: &i64,
        new_status: OnboardingStatus,
    ) -> Result<(), Error> {
        sqlx::query("UPDATE referrals SET onboarding_status = ? WHERE referral_id = ?")
            .bind(new_status)
            .bind(referral_id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

impl Read<Referral, i64> for ReferralRepository {
    async fn read(&self, id: &i64) -> Result<Option<Referral>, Error> {
        sqlx::query_as::<_, Referral>("SELECT * FROM referrals WHERE referral_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
