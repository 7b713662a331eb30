//! Bearer token source for outbound request decoration.

/// Supplies the current access token, if any.
pub trait TokenSource: Send + Sync {
    fn access_token(&self) -> Option<String>;
}
