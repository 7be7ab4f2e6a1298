//! Membership services - Inviti cleaner e affiliations cleaner/owner

use crate::core::{AppError, AppState};
use crate::dtos::{
    AcceptInvitationDTO, AcceptInvitationResponseDTO, AffiliationQuery, CreateInvitationDTO,
    CreatedInvitationDTO, OwnerQuery,
};
use crate::entities::{CleanerAffiliation, Invitation, InvitationStatus};
use crate::repositories::Read;
use crate::stream::{ChangeEvent, ChangeKind};
use axum::extract::{Json, Path, Query, State};
use axum_macros::debug_handler;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn create_invitation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateInvitationDTO>,
) -> Result<Json<CreatedInvitationDTO>, AppError> {
    // 1. Validare il DTO (owner_sub, email)
    // 2. Generare il token casuale e salvarne solo l'hash
    // 3. Inserire l'invito PENDING con scadenza configurata
    // 4. Pubblicare l'Insert sul change feed: l'email parte dal trigger
    // 5. Ritornare invito + token in chiaro (unica occasione di vederlo)
    body.validate()?;

    let raw_token = Invitation::generate_token();
    let token_hash = Invitation::hash_token(&raw_token);
    let expires_at = Utc::now() + Duration::days(state.config.invitation_ttl_days);

    let invitation = state
        .invitation
        .create(&body.owner_sub, &body.email, &token_hash, expires_at)
        .await?;

    state.feed.publish(ChangeEvent::Invitation {
        kind: ChangeKind::Insert,
        invitation: invitation.clone(),
        raw_token: Some(raw_token.clone()),
    });

    info!(invitation_id = invitation.invitation_id, "Invitation created");
    Ok(Json(CreatedInvitationDTO {
        invitation,
        token: raw_token,
    }))
}

#[instrument(skip(state))]
pub async fn list_pending_invitations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<Invitation>>, AppError> {
    let invitations = state.invitation.find_pending_by_owner(&query.owner_sub).await?;
    Ok(Json(invitations))
}

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn accept_invitation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AcceptInvitationDTO>,
) -> Result<Json<AcceptInvitationResponseDTO>, AppError> {
    // 1. Validare il DTO (id, token, cleaner_sub)
    // 2. Lettura consistente dell'invito per id
    // 3. Respingere se status != PENDING, se scaduto (marcandolo EXPIRED),
    //    o se l'hash del token presentato non combacia
    // 4. Tentare la creazione dell'affiliation ACTIVE (duplicato = successo)
    // 5. Marcare l'invito ACCEPTED in ogni caso; un errore sull'affiliation
    //    diventa un warning non fatale nella risposta
    body.validate()?;

    let invitation = state
        .invitation
        .read(&body.invitation_id)
        .await?
        .ok_or_else(|| AppError::not_found("Invitation not found"))?;

    if invitation.status != InvitationStatus::Pending {
        return Err(AppError::bad_request("invitation is not pending"));
    }

    if invitation.is_expired(Utc::now()) {
        state
            .invitation
            .update_status(&invitation.invitation_id, &InvitationStatus::Expired)
            .await?;
        return Err(AppError::bad_request("invitation has expired"));
    }

    if !invitation.verify_token(&body.token) {
        return Err(AppError::bad_request("invitation token mismatch"));
    }

    // Affiliation: un legame ACTIVE già esistente conta come successo
    let mut warning = None;
    let affiliation_id = match state
        .affiliation
        .find_active_pair(&invitation.owner_sub, &body.cleaner_sub)
        .await
    {
        Ok(Some(existing)) => Some(existing.affiliation_id),
        Ok(None) => match state
            .affiliation
            .create(&invitation.owner_sub, &body.cleaner_sub)
            .await
        {
            Ok(affiliation) => Some(affiliation.affiliation_id),
            Err(e) => {
                warn!(error = %e, "Affiliation creation failed, invitation accepted anyway");
                warning = Some(format!("affiliation could not be created: {}", e));
                None
            }
        },
        Err(e) => {
            warn!(error = %e, "Affiliation lookup failed, invitation accepted anyway");
            warning = Some(format!("affiliation could not be created: {}", e));
            None
        }
    };

    state
        .invitation
        .update_status(&invitation.invitation_id, &InvitationStatus::Accepted)
        .await?;

    let invitation = state
        .invitation
        .read(&invitation.invitation_id)
        .await?
        .ok_or_else(|| AppError::internal_server_error("Internal server error"))?;

    info!(invitation_id = invitation.invitation_id, "Invitation accepted");
    Ok(Json(AcceptInvitationResponseDTO {
        invitation,
        affiliation_id,
        warning,
    }))
}

#[instrument(skip(state), fields(invitation_id = %invitation_id))]
pub async fn revoke_invitation(
    State(state): State<Arc<AppState>>,
    Path(invitation_id): Path<i64>,
) -> Result<Json<Invitation>, AppError> {
    let invitation = state
        .invitation
        .read(&invitation_id)
        .await?
        .ok_or_else(|| AppError::not_found("Invitation not found"))?;

    if invitation.status != InvitationStatus::Pending {
        return Err(AppError::conflict("Only pending invitations can be revoked"));
    }

    state
        .invitation
        .update_status(&invitation_id, &InvitationStatus::Revoked)
        .await?;

    let invitation = state
        .invitation
        .read(&invitation_id)
        .await?
        .ok_or_else(|| AppError::internal_server_error("Internal server error"))?;

    info!("Invitation revoked");
    Ok(Json(invitation))
}

#[instrument(skip(state))]
pub async fn list_affiliations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AffiliationQuery>,
) -> Result<Json<Vec<CleanerAffiliation>>, AppError> {
    let affiliations = match (&query.owner_sub, &query.cleaner_sub) {
        (Some(owner_sub), _) => state.affiliation.find_many_by_owner(owner_sub).await?,
        (None, Some(cleaner_sub)) => state.affiliation.find_many_by_cleaner(cleaner_sub).await?,
        (None, None) => {
            return Err(AppError::bad_request(
                "owner_sub or cleaner_sub query parameter is required",
            ));
        }
    };

    Ok(Json(affiliations))
}

#[instrument(skip(state), fields(affiliation_id = %affiliation_id))]
pub async fn revoke_affiliation(
    State(state): State<Arc<AppState>>,
    Path(affiliation_id): Path<i64>,
) -> Result<Json<CleanerAffiliation>, AppError> {
    if state.affiliation.read(&affiliation_id).await?.is_none() {
        return Err(AppError::not_found("Affiliation not found"));
    }

    // condizionale su ACTIVE: doppia revoca = conflict
    if !state.affiliation.revoke(&affiliation_id).await? {
        return Err(AppError::conflict("Affiliation is not active"));
    }

    let affiliation = state
        .affiliation
        .read(&affiliation_id)
        .await?
        .ok_or_else(|| AppError::internal_server_error("Internal server error"))?;

    info!("Affiliation revoked");
    Ok(Json(affiliation))
}
