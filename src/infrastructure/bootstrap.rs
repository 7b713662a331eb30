//! Composition root: wires gateways, storage and navigation into stores.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::adapter::http::{
    ApiClient, HttpAuthGateway, HttpClassGateway, HttpClassSubjectGateway,
    HttpGradeBoundaryGateway, HttpSessionGateway, HttpSubjectGateway,
};
use crate::adapter::storage::FileStore;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::{
    AuthGateway, ClassGateway, ClassSubjectGateway, GradeBoundaryGateway, KeyValueStore,
    Navigator, SessionGateway, SubjectGateway, TokenSource,
};
use crate::store::{
    AuthStore, ClassStore, ClassSubjectStore, GradeBoundaryStore, LayoutStore, SessionStore,
    SubjectStore, TokenSlot,
};

/// One gateway per backend resource.
#[derive(Clone)]
pub struct Gateways {
    pub sessions: Arc<dyn SessionGateway>,
    pub classes: Arc<dyn ClassGateway>,
    pub subjects: Arc<dyn SubjectGateway>,
    pub class_subjects: Arc<dyn ClassSubjectGateway>,
    pub grade_boundaries: Arc<dyn GradeBoundaryGateway>,
    pub auth: Arc<dyn AuthGateway>,
}

impl Gateways {
    /// HTTP gateways sharing one client.
    #[must_use]
    pub fn http(client: Arc<ApiClient>) -> Self {
        Self {
            sessions: Arc::new(HttpSessionGateway::new(Arc::clone(&client))),
            classes: Arc::new(HttpClassGateway::new(Arc::clone(&client))),
            subjects: Arc::new(HttpSubjectGateway::new(Arc::clone(&client))),
            class_subjects: Arc::new(HttpClassSubjectGateway::new(Arc::clone(&client))),
            grade_boundaries: Arc::new(HttpGradeBoundaryGateway::new(Arc::clone(&client))),
            auth: Arc::new(HttpAuthGateway::new(client)),
        }
    }
}

/// Every store of the application, constructed once.
pub struct App {
    pub auth: AuthStore,
    pub sessions: SessionStore,
    pub classes: ClassStore,
    pub subjects: SubjectStore,
    pub class_subjects: ClassSubjectStore,
    pub grade_boundaries: GradeBoundaryStore,
    pub layout: LayoutStore,
}

impl App {
    /// Build the application against the configured backend and storage
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn build(config: &Config, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let tokens = Arc::new(TokenSlot::new());
        let source: Arc<dyn TokenSource> = tokens.clone();
        let client = Arc::new(ApiClient::new(&config.api.base_url)?.with_token_source(source));
        let storage = Arc::new(FileStore::new(config.storage.resolve_dir()));

        info!(
            base_url = %client.base_url(),
            storage = %storage.dir().display(),
            "Application wired"
        );

        Ok(Self::from_parts(
            Gateways::http(client),
            storage,
            navigator,
            tokens,
        ))
    }

    /// Assemble stores from explicit collaborators.
    ///
    /// The token slot must be the one the gateways' client reads from, so
    /// the auth store's tokens reach outbound requests.
    #[must_use]
    pub fn from_parts(
        gateways: Gateways,
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        tokens: Arc<TokenSlot>,
    ) -> Self {
        Self {
            auth: AuthStore::new(gateways.auth, Arc::clone(&storage), navigator, tokens),
            sessions: SessionStore::new(gateways.sessions),
            classes: ClassStore::new(gateways.classes),
            subjects: SubjectStore::new(gateways.subjects),
            class_subjects: ClassSubjectStore::new(gateways.class_subjects),
            grade_boundaries: GradeBoundaryStore::new(gateways.grade_boundaries),
            layout: LayoutStore::new(storage),
        }
    }

    /// Warm the caches every view expects: the active session and the
    /// grade scale.
    ///
    /// Failures are recorded on the stores and logged, never fatal.
    pub async fn init(&self) {
        let (session, grades) = tokio::join!(
            self.sessions.load_active_session(),
            self.grade_boundaries.load_grade_boundaries(),
        );
        match session {
            Ok(session) => debug!(session = %session.session_name, "Active session loaded"),
            Err(e) => warn!(error = %e, "No active session on startup"),
        }
        match grades {
            Ok(grades) => debug!(count = grades.len(), "Grade boundaries loaded"),
            Err(e) => warn!(error = %e, "Grade boundaries unavailable on startup"),
        }
    }
}
