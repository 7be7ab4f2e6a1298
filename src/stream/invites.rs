//! Invitation trigger - Email di invito su Insert
//!
//! L'equivalente della Lambda che ascoltava gli insert sulla tabella inviti:
//! manda l'email col link di accettazione. Il token in chiaro viaggia solo
//! sull'evento, mai nel database.

use super::events::ChangeKind;
use super::worker::TriggerOutcome;
use crate::core::AppState;
use crate::entities::Invitation;
use tracing::warn;

pub async fn handle(
    state: &AppState,
    kind: ChangeKind,
    invitation: Invitation,
    raw_token: Option<String>,
) -> Result<TriggerOutcome, sqlx::Error> {
    if kind != ChangeKind::Insert {
        return Ok(TriggerOutcome::Noop);
    }

    let Some(raw_token) = raw_token else {
        warn!(
            invitation_id = invitation.invitation_id,
            "invitation insert without raw token, cannot build accept link"
        );
        return Ok(TriggerOutcome::Skipped);
    };

    // Mail failure: loggata e basta, la redelivery non è compito nostro
    if state
        .mailer
        .send_invitation_email(&invitation, &raw_token)
        .await
        .is_err()
    {
        return Ok(TriggerOutcome::Skipped);
    }

    Ok(TriggerOutcome::Applied)
}
