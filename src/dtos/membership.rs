//! Membership DTOs - Inviti e affiliations cleaner/owner

use crate::entities::Invitation;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare un invito verso un cleaner
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateInvitationDTO {
    #[validate(length(min = 1, max = 64))]
    pub owner_sub: String,
    #[validate(email)]
    pub email: String,
}

/// Risposta alla creazione: l'invito più il token in chiaro, restituito
/// una sola volta (in tabella resta solo l'hash).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreatedInvitationDTO {
    #[serde(flatten)]
    pub invitation: Invitation,
    pub token: String,
}

/// DTO per accettare un invito: id + token arrivano dal link dell'email
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct AcceptInvitationDTO {
    pub invitation_id: i64,
    #[validate(length(min = 1, max = 128))]
    pub token: String,
    #[validate(length(min = 1, max = 64))]
    pub cleaner_sub: String,
}

/// Esito dell'accettazione: l'invito viene marcato ACCEPTED comunque,
/// un'eventuale failure sull'affiliation è un warning non fatale.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AcceptInvitationResponseDTO {
    pub invitation: Invitation,
    pub affiliation_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
