//! Invitation entity - Invito via email con token hashato
//!
//! Il token in chiaro non viene mai persistito: in tabella finisce solo lo
//! sha256 esadecimale, e il confronto in accettazione avviene ri-hashando il
//! token presentato dal client.

use super::enums::InvitationStatus;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Invitation {
    pub invitation_id: i64,
    pub owner_sub: String, // owner che invita
    pub email: String,     // indirizzo del cleaner invitato
    #[serde(skip_serializing)]
    pub token_hash: String,
    pub status: InvitationStatus,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// Verify that a presented raw token hashes to the stored hash
    pub fn verify_token(&self, raw_token: &str) -> bool {
        Self::hash_token(raw_token) == self.token_hash
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// Hash a raw token with sha256, hex-encoded
    pub fn hash_token(raw_token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(raw_token.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Generate a fresh random invitation token (url-safe, 32 chars)
    pub fn generate_token() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
        let mut rng = rand::thread_rng();
        (0..32)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect()
    }
}
