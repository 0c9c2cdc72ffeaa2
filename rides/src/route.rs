//! Navigation targets shared by the browser router and the CLI.

/// A screen the user can be sent to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }

    /// Whether the screen requires a session token.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}
