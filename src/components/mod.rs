//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod controls;
pub mod input;
pub mod layout;
pub mod load_session_dialog;
pub mod login;
pub mod model_config;
pub mod nav;
pub mod pane;
pub mod settings_dialog;
pub mod surfaces;

pub use controls::ControlBar;
pub use layout::{calculate_home_layout, calculate_shell_layout, centered_popup};
pub use load_session_dialog::LoadSessionDialog;
pub use login::LoginForm;
pub use model_config::ModelConfigForm;
pub use nav::NavBar;
pub use pane::{draw_home_screen, HomeRenderContext};
pub use settings_dialog::SettingsDialog;
pub use surfaces::{draw_errors, draw_toasts};
