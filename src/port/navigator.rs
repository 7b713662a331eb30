//! Navigation port.
//!
//! The auth store decides where the user should go after a credential
//! transition; what "going there" means belongs to the presentation layer.

use std::fmt;

/// Views the auth store can redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// The default landing view.
    Home,
    /// The login form.
    Login,
    /// The forced password-change form.
    ChangePassword,
}

impl Route {
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/auth/login",
            Route::ChangePassword => "/auth/change-password",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Receives redirect requests.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
