//! Agent session lifecycle
//!
//! Starting a session mints a token and stores it so the next launch can
//! offer to resume. The remote side of a session is not modelled here.

use super::auth::AuthStore;
use anyhow::Result;
use chrono::Local;

#[derive(Debug, Default)]
pub struct SessionService {
    active: Option<String>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the session the shell is attached to, if any
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Mint a fresh token, persist it and make it the active session
    pub fn start_new_session(&mut self, auth: &AuthStore) -> Result<String> {
        let token = mint_token();
        auth.set_token(&token)?;
        tracing::info!(session = %token, "started new session");
        self.active = Some(token.clone());
        Ok(token)
    }

    /// Attach to the session stored by a previous run.
    ///
    /// Falls back to a new session when the token has disappeared meanwhile.
    pub fn restore_or_start_new_session(&mut self, auth: &AuthStore) -> Result<String> {
        match auth.get_token()? {
            Some(token) => {
                tracing::info!(session = %token, "resumed session");
                self.active = Some(token.clone());
                Ok(token)
            }
            None => self.start_new_session(auth),
        }
    }
}

fn mint_token() -> String {
    let now = Local::now();
    format!(
        "{}-{:09}-{}",
        now.format("%Y%m%d%H%M%S"),
        now.timestamp_subsec_nanos(),
        std::process::id()
    )
}
