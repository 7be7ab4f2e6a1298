//! Forum DTOs - Post, risposte e voti della community

use crate::entities::{Answer, Post, VoteTarget};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreatePostDTO {
    #[validate(length(min = 1, max = 64))]
    pub author_sub: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 10000))]
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateAnswerDTO {
    #[validate(length(min = 1, max = 64))]
    pub author_sub: String,
    #[validate(length(min = 1, max = 10000))]
    pub body: String,
}

/// DTO per esprimere un voto. Rivotare con lo stesso valore toglie il voto,
/// col valore opposto lo inverte.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CastVoteDTO {
    #[validate(length(min = 1, max = 64))]
    pub voter_sub: String,
    pub target_kind: VoteTarget,
    pub target_id: i64,
    /// +1 o -1; il controllo è fatto nel service (validator non copre il dominio {-1,1})
    pub value: i64,
}

/// Post arricchito con le sue risposte
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EnrichedPostDTO {
    #[serde(flatten)]
    pub post: Post,
    pub answers: Vec<Answer>,
}
