//! Acceptance trigger - Propagazione dell'accettazione di una risposta
//!
//! Quando il flag is_accepted di una risposta transiziona, il trigger aggiorna
//! il puntatore accepted_answer_id del post padre e la reputazione dell'autore
//! della risposta (±delta configurato, default 15).

use super::events::{AnswerImage, ChangeKind};
use super::worker::TriggerOutcome;
use crate::core::AppState;
use crate::repositories::Read;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptanceAction {
    Accept,
    Unaccept,
    Noop,
}

/// Classifica la transizione del flag is_accepted per tipo di evento.
///
/// Insert conta solo l'immagine nuova, Remove solo la vecchia, Modify il
/// fronte di salita/discesa tra le due. Campi mancanti valgono false.
pub fn classify_transition(
    kind: ChangeKind,
    old_accepted: Option<bool>,
    new_accepted: Option<bool>,
) -> AcceptanceAction {
    let old_accepted = old_accepted.unwrap_or(false);
    let new_accepted = new_accepted.unwrap_or(false);

    match kind {
        ChangeKind::Insert => {
            if new_accepted {
                AcceptanceAction::Accept
            } else {
                AcceptanceAction::Noop
            }
        }
        ChangeKind::Modify => match (old_accepted, new_accepted) {
            (false, true) => AcceptanceAction::Accept,
            (true, false) => AcceptanceAction::Unaccept,
            _ => AcceptanceAction::Noop,
        },
        ChangeKind::Remove => {
            if old_accepted {
                AcceptanceAction::Unaccept
            } else {
                AcceptanceAction::Noop
            }
        }
    }
}

pub async fn handle(
    state: &AppState,
    kind: ChangeKind,
    old: Option<AnswerImage>,
    new: Option<AnswerImage>,
) -> Result<TriggerOutcome, sqlx::Error> {
    let action = classify_transition(
        kind,
        old.as_ref().and_then(|i| i.is_accepted),
        new.as_ref().and_then(|i| i.is_accepted),
    );

    if action == AcceptanceAction::Noop {
        return Ok(TriggerOutcome::Noop);
    }

    // L'immagine di riferimento: quella nuova per un accept, quella vecchia
    // per un unaccept (su un Remove la nuova non esiste)
    let image = match action {
        AcceptanceAction::Accept => new.or(old),
        AcceptanceAction::Unaccept => old.or(new),
        AcceptanceAction::Noop => unreachable!(),
    };
    let Some(image) = image else {
        warn!("answer event without any image, skipping");
        return Ok(TriggerOutcome::Skipped);
    };

    // Recupero dei campi mancanti con una point read della riga sorgente
    let (post_id, author_sub) = match (image.post_id, image.author_sub.clone()) {
        (Some(post_id), Some(author_sub)) => (post_id, author_sub),
        _ => match state.answer.read(&image.answer_id).await? {
            Some(answer) => (answer.post_id, answer.author_sub),
            None => {
                warn!(
                    answer_id = image.answer_id,
                    "cannot recover answer image fields, skipping record"
                );
                return Ok(TriggerOutcome::Skipped);
            }
        },
    };

    let delta = state.config.accepted_answer_rep_delta;

    match action {
        AcceptanceAction::Accept => {
            // Set incondizionato: l'accettazione più recente vince
            state.post.set_accepted_answer(&post_id, &image.answer_id).await?;
            state.profile.apply_reputation_delta(&author_sub, delta).await?;
            debug!(post_id, answer_id = image.answer_id, "accepted answer propagated");
        }
        AcceptanceAction::Unaccept => {
            // Compare-and-clear: non sovrascrivere un puntatore che nel
            // frattempo è stato spostato su un'altra risposta
            let cleared = state
                .post
                .clear_accepted_answer_if_matches(&post_id, &image.answer_id)
                .await?;
            if !cleared {
                debug!(
                    post_id,
                    answer_id = image.answer_id,
                    "stale unaccept, pointer already moved"
                );
            }
            state.profile.apply_reputation_delta(&author_sub, -delta).await?;
        }
        AcceptanceAction::Noop => unreachable!(),
    }

    Ok(TriggerOutcome::Applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tabella completa delle transizioni: 3 kind × 2 old × 2 new
    #[test]
    fn transition_table() {
        use AcceptanceAction::*;
        use ChangeKind::*;

        let cases = [
            (Insert, Some(false), Some(false), Noop),
            (Insert, Some(false), Some(true), Accept),
            (Insert, Some(true), Some(false), Noop),
            (Insert, Some(true), Some(true), Accept),
            (Modify, Some(false), Some(false), Noop),
            (Modify, Some(false), Some(true), Accept),
            (Modify, Some(true), Some(false), Unaccept),
            (Modify, Some(true), Some(true), Noop),
            (Remove, Some(false), Some(false), Noop),
            (Remove, Some(false), Some(true), Noop),
            (Remove, Some(true), Some(false), Unaccept),
            (Remove, Some(true), Some(true), Unaccept),
        ];

        for (kind, old, new, expected) in cases {
            assert_eq!(
                classify_transition(kind, old, new),
                expected,
                "kind={kind:?} old={old:?} new={new:?}"
            );
        }
    }

    #[test]
    fn missing_images_count_as_not_accepted() {
        assert_eq!(
            classify_transition(ChangeKind::Insert, None, None),
            AcceptanceAction::Noop
        );
        assert_eq!(
            classify_transition(ChangeKind::Modify, None, Some(true)),
            AcceptanceAction::Accept
        );
        assert_eq!(
            classify_transition(ChangeKind::Remove, Some(true), None),
            AcceptanceAction::Unaccept
        );
    }
}
