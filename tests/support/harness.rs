//! Stores wired to a scripted backend, in-memory storage and a recording
//! navigator.

use std::sync::Arc;

use schooldesk::adapter::storage::MemoryStore;
use schooldesk::infrastructure::{App, Gateways};
use schooldesk::port::{KeyValueStore, TokenSource};
use schooldesk::store::TokenSlot;
use schooldesk::testkit::backend::MockBackend;
use schooldesk::testkit::navigator::RecordingNavigator;

pub struct Harness {
    pub backend: Arc<MockBackend>,
    pub storage: Arc<MemoryStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub tokens: Arc<TokenSlot>,
    pub app: App,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStore::new()))
    }

    /// Build against existing storage, as a restarted process would.
    pub fn with_storage(storage: Arc<MemoryStore>) -> Self {
        let backend = Arc::new(MockBackend::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let tokens = Arc::new(TokenSlot::new());
        let app = App::from_parts(
            gateways(&backend),
            storage.clone(),
            navigator.clone(),
            tokens.clone(),
        );
        Self {
            backend,
            storage,
            navigator,
            tokens,
            app,
        }
    }

    /// The raw persisted auth entry.
    pub fn stored_auth(&self) -> Option<String> {
        self.storage
            .get(schooldesk::store::AUTH_STORAGE_KEY)
            .expect("memory storage never fails")
    }

    /// What the HTTP client would send as bearer.
    pub fn bearer(&self) -> Option<String> {
        self.tokens.access_token()
    }
}

fn gateways(backend: &Arc<MockBackend>) -> Gateways {
    Gateways {
        sessions: backend.clone(),
        classes: backend.clone(),
        subjects: backend.clone(),
        class_subjects: backend.clone(),
        grade_boundaries: backend.clone(),
        auth: backend.clone(),
    }
}
