//! Model layer - shell state kept apart from rendering
//!
//! This module contains the state-related types:
//! - `Route` - Which view the content area shows
//! - `OverlaySet` - Open/closed flags for the three overlays
//! - `InitGuard` / `StartupDecision` - One-shot startup sequencing
//! - `SplitSizes` / `PaneFocus` - Workspace layout state
//! - `Toasts` / `ErrorLog` - Notification and error surfaces

pub mod notify;
pub mod overlay;
pub mod route;
pub mod startup;
pub mod ui;

pub use notify::{ErrorLog, ToastLevel, Toasts};
pub use overlay::{Overlay, OverlaySet};
pub use route::Route;
pub use startup::{InitGuard, StartupDecision};
pub use ui::{PaneFocus, SplitAdjust, SplitSizes};
