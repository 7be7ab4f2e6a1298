//! Support DTOs - Webhook email inbound e thread arricchiti

use crate::entities::{SupportMessage, SupportThread};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload del webhook di posta inbound
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct InboundEmailDTO {
    #[validate(email)]
    pub from_email: String,
    #[validate(length(min = 1, max = 300))]
    pub subject: String,
    #[validate(length(min = 1, max = 50000))]
    pub body: String,
}

/// Thread di supporto con i suoi messaggi
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EnrichedThreadDTO {
    #[serde(flatten)]
    pub thread: SupportThread,
    pub messages: Vec<SupportMessage>,
}
