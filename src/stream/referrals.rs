//! Referral trigger - Email di benvenuto all'host segnalato

use super::events::ChangeKind;
use super::worker::TriggerOutcome;
use crate::core::AppState;
use crate::entities::Referral;

pub async fn handle(
    state: &AppState,
    kind: ChangeKind,
    referral: Referral,
) -> Result<TriggerOutcome, sqlx::Error> {
    if kind != ChangeKind::Insert {
        return Ok(TriggerOutcome::Noop);
    }

    if state.mailer.send_referral_welcome(&referral).await.is_err() {
        return Ok(TriggerOutcome::Skipped);
    }

    Ok(TriggerOutcome::Applied)
}
