//! Sign-up with a welcome email

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, info};

/// Sent to every new user
pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

/// Email sending collaborator
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver `message` to `to`. Fire-and-forget.
    async fn send_email(&self, to: &str, message: &str);
}

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Register `email`, sending the welcome message once on success.
///
/// Returns `false` without contacting the mailer when the address is
/// malformed.
pub async fn sign_up(mailer: &dyn Mailer, email: &str) -> bool {
    if !is_valid_email(email) {
        debug!(email, "rejecting sign-up");
        return false;
    }
    mailer.send_email(email, WELCOME_MESSAGE).await;
    info!(email, "signed up");
    true
}
