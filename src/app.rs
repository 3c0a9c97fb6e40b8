//! Root application component
//!
//! The App struct implements the Component trait, acting as the shell that
//! composes the route view, the overlays and the always-mounted surfaces.
//! Errors raised while handling an action stop here and are shown on the
//! error panel instead of tearing down the UI.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_shell_layout, draw_errors, draw_home_screen, draw_toasts, ControlBar,
    HomeRenderContext, LoadSessionDialog, LoginForm, ModelConfigForm, NavBar, SettingsDialog,
};
use crate::model::startup;
use crate::model::{
    ErrorLog, InitGuard, Overlay, OverlaySet, PaneFocus, Route, SplitAdjust, SplitSizes,
    StartupDecision, ToastLevel, Toasts,
};
use crate::services::LocalServices;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

/// State that outlives any single mount of the shell
pub struct AppContext {
    /// Set once the startup sequence has run
    pub init: InitGuard,
    pub services: LocalServices,
}

impl AppContext {
    pub fn new(services: LocalServices) -> Self {
        Self {
            init: InitGuard::new(),
            services,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    pub context: AppContext,

    /// Route shown in the content area
    pub route: Route,

    /// Which overlays are open
    pub overlays: OverlaySet,

    /// Focused pane on the home route
    pub focus: PaneFocus,

    /// Split sizes, fixed when the home layout is first drawn
    pub split: Option<SplitSizes>,

    /// Branch taken by the startup sequence, if it ran during this mount
    pub startup: Option<StartupDecision>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    pub errors: ErrorLog,
    pub toasts: Toasts,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub nav: NavBar,
    pub controls: ControlBar,
    pub login: LoginForm,
    pub model_config: ModelConfigForm,
    pub settings_dialog: SettingsDialog,
    pub load_session_dialog: LoadSessionDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Mount a shell on the given context
    pub fn new(context: AppContext, route: Route) -> App {
        let mut nav = NavBar::new();
        nav.active = route;

        App {
            context,
            route,
            overlays: OverlaySet::new(),
            focus: PaneFocus::default(),
            split: None,
            startup: None,
            should_quit: false,
            errors: ErrorLog::new(),
            toasts: Toasts::new(),
            nav,
            controls: ControlBar::new(),
            login: LoginForm::new(),
            model_config: ModelConfigForm::new(),
            settings_dialog: SettingsDialog::new(),
            load_session_dialog: LoadSessionDialog,
        }
    }

    /// Tear the shell down, keeping the context for a later mount
    pub fn unmount(self) -> AppContext {
        self.context
    }

    fn open_settings(&mut self) {
        if !self.overlays.is_open(Overlay::Settings) {
            let settings = self.context.services.load_settings();
            self.settings_dialog.reset(&settings);
        }
        self.overlays.open(Overlay::Settings);
    }

    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::debug!(from = self.route.path(), to = route.path(), "navigate");

        // Views lose their local state when they go away
        match self.route {
            Route::Login => self.login = LoginForm::new(),
            Route::Home => self.split = None,
            Route::NotFound => {}
        }

        self.route = route;
        self.nav.active = route;
    }

    /// Handle an action; errors go up to `update`, which reports them
    fn apply(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.toasts.expire(Instant::now()),
            Action::Resize(w, h) => {
                // Split sizes are kept; the layout clamps them
                tracing::debug!(width = w, height = h, "terminal resized");
            }
            Action::Quit => self.should_quit = true,

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(route) => self.navigate(route),
            Action::FocusNextPane => self.focus = self.focus.next(),
            Action::FocusPrevPane => self.focus = self.focus.prev(),
            Action::AdjustSplit(adjust) => {
                if let Some(split) = self.split.as_mut() {
                    split.adjust(adjust);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Overlays
            // ─────────────────────────────────────────────────────────────────
            Action::OpenSettings => self.open_settings(),
            Action::CloseSettings => self.overlays.close(Overlay::Settings),
            Action::SaveSettings => {
                let settings = self.settings_dialog.draft();
                self.context.services.save_settings(&settings)?;
                self.overlays.close(Overlay::Settings);
                self.toasts.push(ToastLevel::Success, "Settings saved");
            }
            Action::CloseLoadSession => self.overlays.close(Overlay::LoadSession),
            Action::OpenModelConfig => {
                if !self.overlays.is_open(Overlay::ModelConfig) {
                    self.model_config = ModelConfigForm::new();
                }
                self.overlays.open(Overlay::ModelConfig);
            }
            Action::CloseModelConfig => {
                self.overlays.close(Overlay::ModelConfig);
                self.model_config = ModelConfigForm::new();
            }

            // ─────────────────────────────────────────────────────────────────
            // Session
            // ─────────────────────────────────────────────────────────────────
            Action::ResumeSession => {
                let id = self.context.services.resume_session()?;
                self.overlays.close(Overlay::LoadSession);
                self.toasts.push(ToastLevel::Info, format!("Resumed session {}", id));
            }
            Action::StartNewSession => {
                let id = self.context.services.replace_session()?;
                self.overlays.close(Overlay::LoadSession);
                self.toasts.push(ToastLevel::Info, format!("Started session {}", id));
            }

            Action::DismissErrors => self.errors.clear(),
        }
        Ok(None)
    }

    /// Keys that work everywhere, even with an overlay open
    fn global_key_action(key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::F(1) => Some(Action::Navigate(Route::Home)),
            KeyCode::F(2) => Some(Action::Navigate(Route::Login)),
            KeyCode::F(3) => Some(Action::OpenModelConfig),
            KeyCode::F(8) => Some(Action::DismissErrors),
            KeyCode::F(10) => Some(Action::OpenSettings),
            _ => None,
        }
    }

    fn handle_home_key_event(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Left => Some(Action::AdjustSplit(SplitAdjust::NarrowChat)),
                KeyCode::Right => Some(Action::AdjustSplit(SplitAdjust::WidenChat)),
                KeyCode::Up => Some(Action::AdjustSplit(SplitAdjust::ShrinkWorkspace)),
                KeyCode::Down => Some(Action::AdjustSplit(SplitAdjust::GrowWorkspace)),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Tab => Some(Action::FocusNextPane),
            KeyCode::BackTab => Some(Action::FocusPrevPane),
            _ => None,
        }
    }

    fn handle_overlay_key_event(&mut self, overlay: Overlay, key: KeyEvent) -> Result<Option<Action>> {
        match overlay {
            Overlay::Settings => self.settings_dialog.handle_key_event(key),
            Overlay::LoadSession => self.load_session_dialog.handle_key_event(key),
            Overlay::ModelConfig => self.model_config.handle_key_event(key),
        }
    }

    fn draw_overlay(&mut self, frame: &mut Frame, area: Rect, overlay: Overlay) -> Result<()> {
        match overlay {
            Overlay::Settings => self.settings_dialog.draw(frame, area),
            Overlay::LoadSession => self.load_session_dialog.draw(frame, area),
            Overlay::ModelConfig => self.model_config.draw(frame, area),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    /// Runs the startup sequence the first time any shell mounts on this context
    fn init(&mut self) -> Result<()> {
        let result = startup::run(
            &self.context.init,
            &mut self.context.services,
            &mut self.overlays,
        );
        match result {
            Ok(decision) => {
                if decision == Some(StartupDecision::OpenSettings) {
                    let settings = self.context.services.load_settings();
                    self.settings_dialog.reset(&settings);
                }
                self.startup = decision;
            }
            Err(e) => self.errors.report(&e.context("Startup failed")),
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(action) = Self::global_key_action(key) {
            return Ok(Some(action));
        }

        if let Some(overlay) = self.overlays.top() {
            return self.handle_overlay_key_event(overlay, key);
        }

        match self.route {
            Route::Home => Ok(self.handle_home_key_event(key)),
            Route::Login => self.login.handle_key_event(key),
            Route::NotFound => Ok(None),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.overlays.top() == Some(Overlay::ModelConfig) {
            if let Some(action) = self.model_config.handle_mouse_event(mouse)? {
                return Ok(Some(action));
            }
        }
        if let Some(action) = self.nav.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }
        self.controls.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        tracing::trace!(%action, "update");
        match self.apply(action) {
            Ok(next) => Ok(next),
            Err(e) => {
                self.errors.report(&e);
                Ok(None)
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_shell_layout(area);

        self.nav.draw(frame, layout.nav)?;

        match self.route {
            Route::Home => {
                // Initial sizes come from the viewport at the first draw only
                let sizes = *self.split.get_or_insert_with(|| SplitSizes::initial(area.height));
                let ctx = HomeRenderContext {
                    sizes: &sizes,
                    focus: self.focus,
                    session: self.context.services.session.active(),
                };
                draw_home_screen(frame, layout.content, &ctx);
            }
            Route::Login => self.login.draw(frame, layout.content)?,
            Route::NotFound => {}
        }

        self.controls.session = self.context.services.session.active().map(str::to_string);
        self.controls.draw(frame, layout.controls)?;

        let visible: Vec<Overlay> = self.overlays.visible().collect();
        for overlay in visible {
            self.draw_overlay(frame, area, overlay)?;
        }

        draw_errors(frame, layout.content, &self.errors);
        draw_toasts(frame, area, &self.toasts);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DataDir, Settings};
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mount(tmp: &TempDir) -> App {
        let services = LocalServices::new(DataDir::new(tmp.path()));
        let mut app = App::new(AppContext::new(services), Route::Home);
        app.init().unwrap();
        app
    }

    fn with_fresh_settings(tmp: &TempDir) {
        Settings::default().save(&DataDir::new(tmp.path())).unwrap();
    }

    /// Run a key through the app the way the main loop does
    fn press(app: &mut App, key: KeyEvent) {
        let mut action = app.handle_key_event(key).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_stale_settings_open_settings_overlay() {
        let tmp = tempfile::tempdir().unwrap();
        let app = mount(&tmp);

        assert_eq!(app.startup, Some(StartupDecision::OpenSettings));
        assert!(app.overlays.is_open(Overlay::Settings));
        assert!(!app.overlays.is_open(Overlay::LoadSession));
        assert!(app.context.services.session.active().is_none());
        assert_eq!(app.settings_dialog.draft().llm_model, Settings::default().llm_model);
    }

    #[test]
    fn test_stored_token_opens_load_session_overlay() {
        let tmp = tempfile::tempdir().unwrap();
        with_fresh_settings(&tmp);
        fs::write(DataDir::new(tmp.path()).token_path(), "previous\n").unwrap();

        let app = mount(&tmp);

        assert_eq!(app.startup, Some(StartupDecision::OpenLoadSession));
        assert!(app.overlays.is_open(Overlay::LoadSession));
        assert!(!app.overlays.is_open(Overlay::Settings));
        assert!(app.context.services.session.active().is_none());
    }

    #[test]
    fn test_fresh_start_begins_session_without_overlays() {
        let tmp = tempfile::tempdir().unwrap();
        with_fresh_settings(&tmp);

        let app = mount(&tmp);

        assert_eq!(app.startup, Some(StartupDecision::StartNewSession));
        assert!(app.overlays.is_empty());
        assert!(app.context.services.session.active().is_some());
        assert!(DataDir::new(tmp.path()).token_path().exists());
    }

    #[test]
    fn test_remount_skips_startup() {
        let tmp = tempfile::tempdir().unwrap();
        with_fresh_settings(&tmp);

        let mut app = mount(&tmp);
        let first_session = app.context.services.session.active().map(str::to_string);
        app.init().unwrap();

        // A token now exists, but a second mount must not ask about it
        let mut remounted = App::new(app.unmount(), Route::Home);
        remounted.init().unwrap();

        assert_eq!(remounted.startup, None);
        assert!(remounted.overlays.is_empty());
        assert_eq!(
            remounted.context.services.session.active().map(str::to_string),
            first_session
        );
    }

    #[test]
    fn test_startup_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        with_fresh_settings(&tmp);
        // A directory where the token file should be makes the lookup fail
        fs::create_dir(DataDir::new(tmp.path()).token_path()).unwrap();

        let app = mount(&tmp);

        assert_eq!(app.startup, None);
        assert_eq!(app.errors.len(), 1);
        assert!(app.overlays.is_empty());
        assert!(app.context.init.is_done());
    }

    #[test]
    fn test_model_config_is_independent_of_other_overlays() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = mount(&tmp);
        assert!(app.overlays.is_open(Overlay::Settings));

        press(&mut app, key(KeyCode::F(3)));
        assert!(app.overlays.is_open(Overlay::ModelConfig));
        assert!(app.overlays.is_open(Overlay::Settings));
        assert_eq!(app.overlays.top(), Some(Overlay::ModelConfig));

        // Esc goes to the topmost overlay only
        press(&mut app, key(KeyCode::Esc));
        assert!(!app.overlays.is_open(Overlay::ModelConfig));
        assert!(app.overlays.is_open(Overlay::Settings));
        assert!(!app.overlays.is_open(Overlay::LoadSession));
    }

    #[test]
    fn test_model_config_resets_when_closed() {
        let tmp = tempfile::tempdir().unwrap();
        with_fresh_settings(&tmp);
        let mut app = mount(&tmp);

        press(&mut app, key(KeyCode::F(3)));
        press(&mut app, key(KeyCode::Tab));
        press(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.model_config.api_key.value, "k");

        press(&mut app, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert!(app.overlays.is_empty());

        press(&mut app, key(KeyCode::F(3)));
        assert!(app.model_config.api_key.value.is_empty());
    }

    #[test]
    fn test_login_route_keeps_local_state() {
        let tmp = tempfile::tempdir().unwrap();
        with_fresh_settings(&tmp);
        let mut app = mount(&tmp);

        press(&mut app, key(KeyCode::F(2)));
        assert_eq!(app.route, Route::Login);
        assert!(app.login.username.value.is_empty());
        assert!(app.login.password.value.is_empty());

        for c in "bob".chars() {
            press(&mut app, key(KeyCode::Char(c)));
        }
        press(&mut app, key(KeyCode::Enter));
        press(&mut app, key(KeyCode::Enter));
        assert_eq!(app.login.username.value, "bob");
        assert!(app.overlays.is_empty());
        assert!(app.errors.is_empty());

        // Leaving the route drops the form state
        press(&mut app, key(KeyCode::F(1)));
        press(&mut app, key(KeyCode::F(2)));
        assert!(app.login.username.value.is_empty());
    }

    #[test]
    fn test_settings_save_closes_and_persists() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = mount(&tmp);

        press(&mut app, key(KeyCode::BackTab));
        press(&mut app, key(KeyCode::Enter));

        assert!(!app.overlays.is_open(Overlay::Settings));
        assert!(Settings::are_up_to_date(&DataDir::new(tmp.path())));
        assert_eq!(app.toasts.len(), 1);
    }

    #[test]
    fn test_settings_save_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("not-a-dir");
        fs::write(&root, "").unwrap();
        let services = LocalServices::new(DataDir::new(&root));
        let mut app = App::new(AppContext::new(services), Route::Home);
        app.init().unwrap();
        assert!(app.overlays.is_open(Overlay::Settings));

        app.update(Action::SaveSettings).unwrap();

        assert_eq!(app.errors.len(), 1);
        assert!(app.overlays.is_open(Overlay::Settings));
    }

    #[test]
    fn test_resume_and_start_new_session() {
        let tmp = tempfile::tempdir().unwrap();
        with_fresh_settings(&tmp);
        fs::write(DataDir::new(tmp.path()).token_path(), "previous\n").unwrap();
        let mut app = mount(&tmp);

        press(&mut app, key(KeyCode::Char('r')));
        assert!(app.overlays.is_empty());
        assert_eq!(app.context.services.session.active(), Some("previous"));

        app.overlays.open(Overlay::LoadSession);
        press(&mut app, key(KeyCode::Char('n')));
        assert!(app.overlays.is_empty());
        assert_ne!(app.context.services.session.active(), Some("previous"));
    }

    #[test]
    fn test_split_sizes_fixed_at_first_draw() {
        let tmp = tempfile::tempdir().unwrap();
        with_fresh_settings(&tmp);
        let mut app = mount(&tmp);
        assert!(app.split.is_none());

        render(&mut app, 140, 40);
        assert_eq!(app.split, Some(SplitSizes::initial(40)));

        app.update(Action::Resize(140, 60)).unwrap();
        render(&mut app, 140, 60);
        assert_eq!(app.split, Some(SplitSizes::initial(40)));

        // Leaving and returning to the home route lays it out again
        app.update(Action::Navigate(Route::Login)).unwrap();
        app.update(Action::Navigate(Route::Home)).unwrap();
        render(&mut app, 140, 60);
        assert_eq!(app.split, Some(SplitSizes::initial(60)));
    }

    #[test]
    fn test_split_adjust_and_focus() {
        let tmp = tempfile::tempdir().unwrap();
        with_fresh_settings(&tmp);
        let mut app = mount(&tmp);
        render(&mut app, 140, 40);

        press(&mut app, KeyEvent::new(KeyCode::Right, KeyModifiers::ALT));
        let widened = app.split.map(|s| s.chat_width);
        assert!(widened > Some(SplitSizes::initial(40).chat_width));

        press(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, PaneFocus::Workspace);
    }

    #[test]
    fn test_draw_every_route() {
        let tmp = tempfile::tempdir().unwrap();
        with_fresh_settings(&tmp);
        let mut app = mount(&tmp);

        let home = render(&mut app, 140, 40);
        assert!(home.contains("Chat"));
        assert!(home.contains("Workspace"));
        assert!(home.contains("Terminal"));

        app.update(Action::Navigate(Route::Login)).unwrap();
        let login = render(&mut app, 140, 40);
        assert!(login.contains("Login"));
        assert!(!login.contains("Workspace"));

        app.update(Action::Navigate(Route::NotFound)).unwrap();
        let not_found = render(&mut app, 140, 40);
        assert!(not_found.contains("Model Config"));

        // Tiny terminals must not panic
        render(&mut app, 10, 4);
    }

    #[test]
    fn test_draw_with_all_overlays_open() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = mount(&tmp);
        app.overlays.open(Overlay::LoadSession);
        app.update(Action::OpenModelConfig).unwrap();
        app.errors.report(&anyhow::anyhow!("boom"));
        app.toasts.push(ToastLevel::Info, "heads up");

        let screen = render(&mut app, 140, 40);
        assert!(screen.contains("Model Configuration"));
        assert!(screen.contains("boom"));
        assert!(screen.contains("heads up"));
    }

    #[test]
    fn test_quit_and_dismiss_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = mount(&tmp);
        app.errors.report(&anyhow::anyhow!("boom"));

        press(&mut app, key(KeyCode::F(8)));
        assert!(app.errors.is_empty());

        press(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
