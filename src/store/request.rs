//! Request lifecycle shared by every store.
//!
//! One gateway call per operation: mark pending and clear the previous error,
//! await the call, then either reconcile the result and clear the loading
//! flag in a single write, or record the failure message and leave the cache
//! untouched. Overlapping calls are not serialised; each completion writes
//! independently.

use std::future::Future;

use tracing::{debug, warn};

use super::observable::Observable;
use crate::error::ApiError;
use crate::port::ApiResult;

/// State with a loading flag and a last-error slot.
pub trait RequestState {
    fn set_loading(&mut self, loading: bool);
    fn set_error(&mut self, error: Option<String>);
}

/// Implement [`RequestState`] for a struct with `is_loading` and `error` fields.
macro_rules! request_state {
    ($state:ty) => {
        impl $crate::store::request::RequestState for $state {
            fn set_loading(&mut self, loading: bool) {
                self.is_loading = loading;
            }

            fn set_error(&mut self, error: Option<String>) {
                self.error = error;
            }
        }
    };
}

pub(crate) use request_state;

/// Run one gateway call through the pending/succeeded/failed cycle.
///
/// `reconcile` runs only on success, in the same write that clears the
/// loading flag. On failure the store's `error` becomes the server message if
/// one was sent, otherwise `fallback`.
pub async fn run<S, T, Fut, R>(
    cell: &Observable<S>,
    operation: &'static str,
    fallback: &str,
    call: Fut,
    reconcile: R,
) -> ApiResult<T>
where
    S: RequestState + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>>,
    R: FnOnce(&mut S, &T),
{
    cell.update(|state| {
        state.set_loading(true);
        state.set_error(None);
    });
    debug!(operation, "Request started");

    match call.await {
        Ok(value) => {
            cell.update(|state| {
                reconcile(state, &value);
                state.set_loading(false);
            });
            debug!(operation, "Request succeeded");
            Ok(value)
        }
        Err(err) => {
            let message = err.user_message(fallback);
            warn!(operation, error = %err, "Request failed");
            cell.update(|state| {
                state.set_loading(false);
                state.set_error(Some(message));
            });
            Err(err)
        }
    }
}
