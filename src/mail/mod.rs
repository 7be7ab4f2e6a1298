//! Mail module - Invio email transazionali via SMTP
//!
//! Il transport è opzionale: senza SMTP_HOST configurato le email vengono solo
//! loggate, così ambienti di sviluppo e test non hanno bisogno di un relay.

use crate::core::Config;
use crate::entities::{Invitation, Referral};
use lettre::{
    Message, SmtpTransport, Transport,
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
};
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct Mailer {
    transport: Option<SmtpTransport>,
    from: String,
    app_url: String,
}

impl Mailer {
    /// Costruisce il mailer dalla configurazione; relay autenticato se ci sono
    /// le credenziali, builder_dangerous verso un relay locale altrimenti.
    pub fn from_config(config: &Config) -> Result<Self, String> {
        let transport = match &config.smtp_host {
            Some(host) => Some(
                if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_pass) {
                    let creds = Credentials::new(user.clone(), pass.clone());
                    SmtpTransport::relay(host)
                        .map_err(|e| format!("SMTP relay error: {}", e))?
                        .credentials(creds)
                        .build()
                } else {
                    SmtpTransport::builder_dangerous(host).build()
                },
            ),
            None => None,
        };

        Ok(Self {
            transport,
            from: config.smtp_from.clone(),
            app_url: config.app_url.clone(),
        })
    }

    /// Mailer disabilitato (usato nei test)
    pub fn disabled() -> Self {
        Self {
            transport: None,
            from: "noreply@latimere.com".to_string(),
            app_url: "http://localhost:3000".to_string(),
        }
    }

    /// Invito cleaner: il link di accettazione porta il token in chiaro,
    /// che esiste solo qui e nella risposta alla creazione.
    pub async fn send_invitation_email(
        &self,
        invitation: &Invitation,
        raw_token: &str,
    ) -> Result<(), String> {
        let accept_url = format!(
            "{}/accept-invitation?invitation={}&token={}",
            self.app_url, invitation.invitation_id, raw_token
        );

        let body = format!(
            r#"You have been invited to join Latimere Host as a cleaner.

Click on the link below to accept the invitation:
{}

This invitation will expire on {}.

If you did not expect this invitation, you can safely ignore this email.

Best regards,
The Latimere Team"#,
            accept_url,
            invitation.expires_at.format("%Y-%m-%d"),
        );

        self.send(&invitation.email, "You've been invited to Latimere Host", body)
            .await
    }

    /// Benvenuto all'host segnalato da un realtor, con il referral code
    pub async fn send_referral_welcome(&self, referral: &Referral) -> Result<(), String> {
        let body = format!(
            r#"Hi {},

A realtor has referred you to Latimere Host, the short-term-rental
management platform. Your referral code is:

    {}

Use it when you sign up at {} to link your account to your referrer.

Best regards,
The Latimere Team"#,
            referral.host_name, referral.referral_code, self.app_url,
        );

        self.send(&referral.host_email, "Welcome to Latimere Host", body)
            .await
    }

    async fn send(&self, to: &str, subject: &str, body: String) -> Result<(), String> {
        let Some(transport) = self.transport.clone() else {
            debug!(to, subject, "SMTP disabled, skipping outbound email");
            return Ok(());
        };

        let email = Message::builder()
            .from(self.from.parse().map_err(|e| format!("Invalid from address: {}", e))?)
            .to(to.parse().map_err(|e| format!("Invalid to address: {}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| format!("Failed to build email: {}", e))?;

        // lettre SmtpTransport è bloccante: fuori dall'executor async
        let send_result = tokio::task::spawn_blocking(move || transport.send(&email))
            .await
            .map_err(|e| format!("Mail task panicked: {}", e))?;

        match send_result {
            Ok(_) => {
                info!(to, subject, "Email sent");
                Ok(())
            }
            Err(e) => {
                warn!(to, subject, error = %e, "Failed to send email");
                Err(format!("Failed to send email: {}", e))
            }
        }
    }
}
