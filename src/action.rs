//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the shell can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::route::Route;
use crate::model::ui::SplitAdjust;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for toast expiry
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch the active route
    Navigate(Route),
    /// Move keyboard focus to the next pane
    FocusNextPane,
    /// Move keyboard focus to the previous pane
    FocusPrevPane,
    /// Grow or shrink one of the split panes
    AdjustSplit(SplitAdjust),

    // ─────────────────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the settings overlay
    OpenSettings,
    /// Close the settings overlay
    CloseSettings,
    /// Persist the values in the settings overlay
    SaveSettings,
    /// Close the load-previous-session overlay
    CloseLoadSession,
    /// Open the model configuration overlay
    OpenModelConfig,
    /// Close the model configuration overlay
    CloseModelConfig,

    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────
    /// Resume the session identified by the stored token
    ResumeSession,
    /// Discard the stored token and start a fresh session
    StartNewSession,

    // ─────────────────────────────────────────────────────────────────────────
    // Surfaces
    // ─────────────────────────────────────────────────────────────────────────
    /// Clear the error surface
    DismissErrors,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::Navigate(route) => write!(f, "Navigate({})", route.path()),
            Action::FocusNextPane => write!(f, "FocusNextPane"),
            Action::FocusPrevPane => write!(f, "FocusPrevPane"),
            Action::AdjustSplit(adjust) => write!(f, "AdjustSplit({:?})", adjust),
            Action::OpenSettings => write!(f, "OpenSettings"),
            Action::CloseSettings => write!(f, "CloseSettings"),
            Action::SaveSettings => write!(f, "SaveSettings"),
            Action::CloseLoadSession => write!(f, "CloseLoadSession"),
            Action::OpenModelConfig => write!(f, "OpenModelConfig"),
            Action::CloseModelConfig => write!(f, "CloseModelConfig"),
            Action::ResumeSession => write!(f, "ResumeSession"),
            Action::StartNewSession => write!(f, "StartNewSession"),
            Action::DismissErrors => write!(f, "DismissErrors"),
        }
    }
}
