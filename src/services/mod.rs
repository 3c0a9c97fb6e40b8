//! External collaborators of the shell
//!
//! This module contains the services the shell calls into:
//! - Settings freshness (backed by `config::Settings`)
//! - Session token storage
//! - Session lifecycle

pub mod auth;
pub mod session;

pub use auth::AuthStore;
pub use session::SessionService;

use crate::config::{DataDir, Settings};
use anyhow::Result;

/// What the startup sequence needs from the outside world
pub trait StartupServices {
    /// Whether persisted settings exist and match the current schema
    fn settings_are_up_to_date(&self) -> Result<bool>;

    /// Token of a previous session, if one was stored
    fn get_token(&self) -> Result<Option<String>>;

    /// Ask for a new session; the result is not awaited
    fn start_new_session(&mut self) -> Result<()>;
}

/// Services backed by files in the data directory
#[derive(Debug)]
pub struct LocalServices {
    pub data_dir: DataDir,
    pub auth: AuthStore,
    pub session: SessionService,
}

impl LocalServices {
    pub fn new(data_dir: DataDir) -> Self {
        Self {
            auth: AuthStore::new(&data_dir),
            session: SessionService::new(),
            data_dir,
        }
    }

    /// Persisted settings, or defaults when none are stored yet
    pub fn load_settings(&self) -> Settings {
        Settings::load(&self.data_dir).unwrap_or_default()
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        settings.save(&self.data_dir)?;
        tracing::info!(model = %settings.llm_model, agent = %settings.agent, "settings saved");
        Ok(())
    }

    pub fn resume_session(&mut self) -> Result<String> {
        self.session.restore_or_start_new_session(&self.auth)
    }

    /// Forget the stored session and start over
    pub fn replace_session(&mut self) -> Result<String> {
        self.auth.clear_token()?;
        self.session.start_new_session(&self.auth)
    }
}

impl StartupServices for LocalServices {
    fn settings_are_up_to_date(&self) -> Result<bool> {
        Ok(Settings::are_up_to_date(&self.data_dir))
    }

    fn get_token(&self) -> Result<Option<String>> {
        self.auth.get_token()
    }

    fn start_new_session(&mut self) -> Result<()> {
        self.session.start_new_session(&self.auth)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_services_report_stale_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let services = LocalServices::new(DataDir::new(tmp.path()));
        assert!(!services.settings_are_up_to_date().unwrap());

        services.save_settings(&Settings::default()).unwrap();
        assert!(services.settings_are_up_to_date().unwrap());
    }

    #[test]
    fn test_replace_session_mints_new_token() {
        let tmp = tempfile::tempdir().unwrap();
        let mut services = LocalServices::new(DataDir::new(tmp.path()));
        services.auth.set_token("old").unwrap();

        let token = services.replace_session().unwrap();

        assert_ne!(token, "old");
        assert_eq!(services.get_token().unwrap(), Some(token));
    }
}
