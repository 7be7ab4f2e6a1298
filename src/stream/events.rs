//! Change feed - Eventi di change-data-capture pubblicati dai services
//!
//! Ogni evento porta il tipo di modifica (Insert/Modify/Remove) e le immagini
//! before/after della riga, come i record di uno stream di database. I campi
//! delle immagini Answer sono opzionali: un'immagine può arrivare incompleta e
//! il trigger la ricostruisce con una point read.

use crate::entities::{Answer, Invitation, Referral, Vote};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Modify,
    Remove,
}

/// Immagine (potenzialmente parziale) di una riga answer su un evento stream
#[derive(Debug, Clone)]
pub struct AnswerImage {
    pub answer_id: i64,
    pub post_id: Option<i64>,
    pub author_sub: Option<String>,
    pub is_accepted: Option<bool>,
}

impl From<&Answer> for AnswerImage {
    fn from(value: &Answer) -> Self {
        Self {
            answer_id: value.answer_id,
            post_id: Some(value.post_id),
            author_sub: Some(value.author_sub.clone()),
            is_accepted: Some(value.is_accepted),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ChangeEvent {
    Answer {
        kind: ChangeKind,
        old: Option<AnswerImage>,
        new: Option<AnswerImage>,
    },
    Vote {
        kind: ChangeKind,
        old: Option<Vote>,
        new: Option<Vote>,
    },
    Invitation {
        kind: ChangeKind,
        invitation: Invitation,
        /// Presente solo sull'Insert: serve al trigger email per il link di
        /// accettazione e non viene mai persistito.
        raw_token: Option<String>,
    },
    Referral {
        kind: ChangeKind,
        referral: Referral,
    },
    InboundEmail {
        from_email: String,
        subject: String,
        body: String,
    },
}

impl ChangeEvent {
    /// Etichetta corta per il logging del worker
    pub fn label(&self) -> &'static str {
        match self {
            ChangeEvent::Answer { .. } => "answer",
            ChangeEvent::Vote { .. } => "vote",
            ChangeEvent::Invitation { .. } => "invitation",
            ChangeEvent::Referral { .. } => "referral",
            ChangeEvent::InboundEmail { .. } => "inbound_email",
        }
    }
}

/// Lato di pubblicazione del feed, condiviso nello stato dell'applicazione
#[derive(Clone)]
pub struct ChangeFeed {
    tx: UnboundedSender<ChangeEvent>,
}

impl ChangeFeed {
    pub fn channel() -> (Self, UnboundedReceiver<ChangeEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Pubblica un evento. Il feed è fire-and-forget: se il worker è giù
    /// l'evento viene perso e loggato, mai propagato come errore al client.
    pub fn publish(&self, event: ChangeEvent) {
        if let Err(e) = self.tx.send(event) {
            warn!(event = e.0.label(), "change feed closed, event dropped");
        }
    }
}
