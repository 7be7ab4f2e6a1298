//! Referral DTOs

use crate::entities::OnboardingStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare una segnalazione realtor → host
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateReferralDTO {
    #[validate(length(min = 1, max = 64))]
    pub realtor_sub: String,
    #[validate(length(min = 1, max = 120))]
    pub host_name: String,
    #[validate(email)]
    pub host_email: String,
}

/// DTO per avanzare lo stato di onboarding (solo in avanti)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateReferralStatusDTO {
    pub onboarding_status: OnboardingStatus,
}
