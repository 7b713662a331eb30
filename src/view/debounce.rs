//! Search input debouncing.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

/// Quiet period before a search term is considered settled.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Writer half: pushes raw keystroke-level terms.
#[derive(Clone)]
pub struct SearchInput {
    tx: Arc<watch::Sender<String>>,
}

impl SearchInput {
    /// Replace the pending term. Never blocks.
    pub fn push(&self, term: impl Into<String>) {
        self.tx.send_replace(term.into());
    }
}

/// Reader half: yields a term once input has been quiet long enough.
///
/// Only the latest term is kept; intermediate terms are dropped.
pub struct SearchDebouncer {
    rx: watch::Receiver<String>,
    quiet: Duration,
}

impl SearchDebouncer {
    #[must_use]
    pub fn new(quiet: Duration) -> (SearchInput, Self) {
        let (tx, rx) = watch::channel(String::new());
        (SearchInput { tx: Arc::new(tx) }, Self { rx, quiet })
    }

    #[must_use]
    pub fn with_default_period() -> (SearchInput, Self) {
        Self::new(DEFAULT_QUIET_PERIOD)
    }

    /// Wait for the next term, then until no newer term arrives for the
    /// quiet period. Returns `None` once every input handle is dropped.
    pub async fn settled(&mut self) -> Option<String> {
        self.rx.changed().await.ok()?;
        loop {
            match time::timeout(self.quiet, self.rx.changed()).await {
                Ok(Ok(())) => continue,
                Ok(Err(_)) | Err(_) => return Some(self.rx.borrow_and_update().clone()),
            }
        }
    }
}
