//! Navigation routes

/// A view the content area can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/` - the chat / workspace / terminal layout
    #[default]
    Home,
    /// `/login` - the credential form
    Login,
    /// Any other path; renders an empty content area
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/login" => Route::Login,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::NotFound => "*",
        }
    }
}
