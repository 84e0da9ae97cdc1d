//! Application shell and view routing.

use crate::config::AppConfig;
use crate::dashboard::DashboardView;
use crate::storefront::StorefrontView;
use crate::success::{parse_query, SuccessView};
use crate::upload::UploadFlow;
use crate::AppError;
use maker_auth::{AuthClient, AuthState, User};
use maker_commerce::{Catalog, Product, PRODUCTS_KEY};
use maker_events::EventBus;
use maker_records::{RecordBackend, RecordStore};

/// The storefront's top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// The product catalog.
    #[default]
    Store,
    /// The community chat.
    Community,
    /// The creator dashboard.
    Dashboard,
    /// The upload form.
    Upload,
    /// The post-payment confirmation.
    Success,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Store => "store",
            View::Community => "community",
            View::Dashboard => "dashboard",
            View::Upload => "upload",
            View::Success => "success",
        }
    }

    /// The view a launch URL lands on: the confirmation screen when the
    /// query carries a checkout session token, the store otherwise.
    pub fn from_query(query: &str) -> Self {
        let has_session = parse_query(query)
            .iter()
            .any(|(k, v)| k == "session_id" && !v.is_empty());
        if has_session {
            View::Success
        } else {
            View::Store
        }
    }
}

/// The application shell.
///
/// Owns the shared event bus, record store, and configuration, and hands
/// each view its dependencies explicitly.
pub struct App {
    config: AppConfig,
    bus: EventBus,
    store: RecordStore<Product>,
    catalog: Catalog,
    auth_state: AuthState,
    current_view: View,
}

impl App {
    /// Create the shell over a record backend.
    pub fn new(config: AppConfig, backend: impl RecordBackend + 'static) -> Self {
        let store: RecordStore<Product> = RecordStore::new(backend, PRODUCTS_KEY);
        Self {
            config,
            bus: EventBus::new(),
            catalog: Catalog::new(store.clone()),
            store,
            auth_state: AuthState {
                user: None,
                is_loading: true,
            },
            current_view: View::Store,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn store(&self) -> &RecordStore<Product> {
        &self.store
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Switch views.
    pub fn navigate(&mut self, view: View) {
        self.current_view = view;
    }

    /// Route from a launch URL's query string.
    pub fn open(&mut self, query: &str) {
        self.current_view = View::from_query(query);
    }

    /// Refresh the session snapshot from the auth collaborator.
    ///
    /// A failed call resolves to signed-out; the storefront itself stays
    /// browsable either way.
    pub async fn refresh_session(&mut self, auth: &dyn AuthClient) -> &AuthState {
        self.auth_state = match auth.me().await {
            Ok(user) => AuthState::signed_in(user),
            Err(e) => {
                tracing::warn!(error = %e, "session resolution failed, treating as signed out");
                AuthState::signed_out()
            }
        };
        &self.auth_state
    }

    /// The signed-in user, if the session has resolved to one.
    pub fn user(&self) -> Option<&User> {
        self.auth_state.user.as_ref()
    }

    /// Mount the storefront view.
    pub fn storefront(&self) -> StorefrontView {
        StorefrontView::mount(self.catalog.clone(), &self.bus)
    }

    /// Mount the creator dashboard. Requires a signed-in identity.
    pub fn dashboard(&self) -> Result<DashboardView, AppError> {
        let user = self
            .user()
            .ok_or(AppError::Auth(maker_auth::AuthError::NotSignedIn))?;
        Ok(DashboardView::mount(
            self.store.clone(),
            self.bus.clone(),
            user.id.clone(),
        ))
    }

    /// Start an upload flow. Requires a signed-in identity.
    pub fn upload_flow(&self) -> Result<UploadFlow, AppError> {
        if self.user().is_none() {
            return Err(AppError::Auth(maker_auth::AuthError::NotSignedIn));
        }
        Ok(UploadFlow::new(self.store.clone(), self.bus.clone()))
    }

    /// Build the confirmation view from a return-trip query string.
    pub fn success_view(&self, query: &str) -> SuccessView {
        SuccessView::from_query(query, &self.store)
    }
}
