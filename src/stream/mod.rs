//! Stream module - Change feed e trigger di propagazione dello stato derivato
//!
//! Il rimpiazzo in-process degli stream trigger del database: i services
//! pubblicano eventi Insert/Modify/Remove con le immagini before/after, un
//! worker singolo li consuma e applica le scritture derivate (puntatore di
//! risposta accettata, score e reputazione, email, ingestione supporto).

pub mod events;
pub mod worker;
pub mod acceptance;
pub mod votes;
pub mod invites;
pub mod referrals;
pub mod inbound;

// Re-exports per facilitare l'import
pub use events::{AnswerImage, ChangeEvent, ChangeFeed, ChangeKind};
pub use worker::{TriggerOutcome, dispatch, spawn};
