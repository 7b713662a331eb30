//! Terminal rendering of auth redirects.

use parking_lot::Mutex;
use tracing::debug;

use super::output;
use crate::port::{Navigator, Route};

/// Turns redirects into hints about which command to run next.
#[derive(Default)]
pub struct ConsoleNavigator {
    last: Mutex<Option<Route>>,
}

impl ConsoleNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent redirect, if any.
    #[must_use]
    pub fn last_route(&self) -> Option<Route> {
        *self.last.lock()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        debug!(%route, "Redirect");
        *self.last.lock() = Some(route);
        match route {
            Route::Home => {}
            Route::Login => output::note("Signed out. Run `schooldesk login` to sign in."),
            Route::ChangePassword => output::warn(
                "Password change required. Run `schooldesk change-password` before continuing.",
            ),
        }
    }
}
