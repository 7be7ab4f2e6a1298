//! Referral entity - Segnalazione realtor → host con codice e funnel di onboarding

use super::enums::OnboardingStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lunghezza massima di un referral code, suffissi inclusi
pub const MAX_REFERRAL_CODE_LEN: usize = 16;

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Referral {
    pub referral_id: i64,
    pub realtor_sub: String,
    pub host_name: String,
    pub host_email: String,
    pub referral_code: String,
    pub onboarding_status: OnboardingStatus,
    pub payout_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Referral {
    /// Base code derivato dal nome dell'host: solo alfanumerici maiuscoli,
    /// troncato per lasciare spazio a un suffisso a due cifre.
    pub fn base_code(host_name: &str) -> String {
        let mut code: String = host_name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .take(MAX_REFERRAL_CODE_LEN - 2)
            .collect();
        if code.len() < 4 {
            code.push_str("HOST");
            code.truncate(MAX_REFERRAL_CODE_LEN - 2);
        }
        code
    }
}
