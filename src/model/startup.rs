//! One-shot startup sequencing
//!
//! The first mount of the shell decides what the user sees first: the
//! settings overlay, the resume prompt, or nothing at all while a fresh
//! session is started in the background. Later mounts do nothing.

use super::overlay::{Overlay, OverlaySet};
use crate::services::StartupServices;
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set-once flag owned by the application context
#[derive(Debug, Default)]
pub struct InitGuard {
    done: AtomicBool,
}

impl InitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once: for the first caller.
    pub fn claim(&self) -> bool {
        !self.done.swap(true, Ordering::SeqCst)
    }

    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

/// Which startup branch ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupDecision {
    /// Settings were missing or stale
    OpenSettings,
    /// A previous session token was found
    OpenLoadSession,
    /// Nothing to ask; a new session was requested
    StartNewSession,
}

/// Run the startup sequence if it hasn't run yet for this guard.
///
/// Returns `Ok(None)` on every call after the first. Collaborator failures are
/// returned to the caller untouched; the guard stays claimed either way.
pub fn run(
    guard: &InitGuard,
    services: &mut dyn StartupServices,
    overlays: &mut OverlaySet,
) -> Result<Option<StartupDecision>> {
    if !guard.claim() {
        tracing::debug!("startup sequence already ran, skipping");
        return Ok(None);
    }

    let decision = if !services.settings_are_up_to_date()? {
        overlays.open(Overlay::Settings);
        StartupDecision::OpenSettings
    } else if services.get_token()?.is_some() {
        overlays.open(Overlay::LoadSession);
        StartupDecision::OpenLoadSession
    } else {
        services.start_new_session()?;
        StartupDecision::StartNewSession
    };

    tracing::info!(?decision, "startup sequence complete");
    Ok(Some(decision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    /// In-memory collaborators that count calls
    #[derive(Default)]
    struct FakeServices {
        settings_current: bool,
        token: Option<String>,
        fail_settings_check: bool,
        sessions_started: usize,
    }

    impl StartupServices for FakeServices {
        fn settings_are_up_to_date(&self) -> Result<bool> {
            if self.fail_settings_check {
                return Err(anyhow!("settings unreadable"));
            }
            Ok(self.settings_current)
        }

        fn get_token(&self) -> Result<Option<String>> {
            Ok(self.token.clone())
        }

        fn start_new_session(&mut self) -> Result<()> {
            self.sessions_started += 1;
            Ok(())
        }
    }

    #[test]
    fn test_guard_claims_once() {
        let guard = InitGuard::new();
        assert!(!guard.is_done());
        assert!(guard.claim());
        assert!(!guard.claim());
        assert!(!guard.claim());
        assert!(guard.is_done());
    }

    #[test]
    fn test_stale_settings_open_settings_overlay() {
        let guard = InitGuard::new();
        let mut services = FakeServices {
            settings_current: false,
            token: Some("abc".to_string()),
            ..Default::default()
        };
        let mut overlays = OverlaySet::new();

        let decision = run(&guard, &mut services, &mut overlays).unwrap();

        assert_eq!(decision, Some(StartupDecision::OpenSettings));
        assert!(overlays.is_open(Overlay::Settings));
        assert!(!overlays.is_open(Overlay::LoadSession));
        assert_eq!(services.sessions_started, 0);
    }

    #[test]
    fn test_token_opens_load_session_overlay() {
        let guard = InitGuard::new();
        let mut services = FakeServices {
            settings_current: true,
            token: Some("abc".to_string()),
            ..Default::default()
        };
        let mut overlays = OverlaySet::new();

        let decision = run(&guard, &mut services, &mut overlays).unwrap();

        assert_eq!(decision, Some(StartupDecision::OpenLoadSession));
        assert!(overlays.is_open(Overlay::LoadSession));
        assert!(!overlays.is_open(Overlay::Settings));
        assert_eq!(services.sessions_started, 0);
    }

    #[test]
    fn test_no_token_starts_session() {
        let guard = InitGuard::new();
        let mut services = FakeServices {
            settings_current: true,
            ..Default::default()
        };
        let mut overlays = OverlaySet::new();

        let decision = run(&guard, &mut services, &mut overlays).unwrap();

        assert_eq!(decision, Some(StartupDecision::StartNewSession));
        assert!(overlays.is_empty());
        assert_eq!(services.sessions_started, 1);
    }

    #[test]
    fn test_repeated_runs_are_noops() {
        let guard = InitGuard::new();
        let mut services = FakeServices {
            settings_current: true,
            ..Default::default()
        };
        let mut overlays = OverlaySet::new();

        for _ in 0..3 {
            run(&guard, &mut services, &mut overlays).unwrap();
        }

        assert_eq!(services.sessions_started, 1);
    }

    #[test]
    fn test_failure_propagates_and_keeps_guard() {
        let guard = InitGuard::new();
        let mut services = FakeServices {
            fail_settings_check: true,
            ..Default::default()
        };
        let mut overlays = OverlaySet::new();

        assert!(run(&guard, &mut services, &mut overlays).is_err());
        assert!(overlays.is_empty());
        assert_eq!(run(&guard, &mut services, &mut overlays).unwrap(), None);
    }
}
