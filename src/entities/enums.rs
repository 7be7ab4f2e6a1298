//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use serde::{Deserialize, Serialize};

// ********************* ENUMERAZIONI UTILI **********************//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum CleaningStatus {
    Scheduled,
    Completed,
    Missed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Revoked,
    Expired,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum AffiliationStatus {
    Active,
    Revoked,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum OnboardingStatus {
    Invited,
    Started,
    Submitted,
    Completed,
}

impl OnboardingStatus {
    /// Posizione nel funnel di onboarding (le transizioni sono solo in avanti)
    pub fn rank(&self) -> u8 {
        match self {
            OnboardingStatus::Invited => 0,
            OnboardingStatus::Started => 1,
            OnboardingStatus::Submitted => 2,
            OnboardingStatus::Completed => 3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum VoteTarget {
    Post,
    Answer,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum AuditStatus {
    New,
    Converted,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum MessageDirection {
    Inbound,
    Outbound,
}
