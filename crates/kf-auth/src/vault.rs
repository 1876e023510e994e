use super::*;
use kf_core::Epoch;
use kf_core::ID;
use std::sync::Arc;

/// Store shared by every scope across workers.
pub type Shared = Arc<dyn SessionStore + Send + Sync>;
/// One browser's view of the shared store.
pub type ScopeStore = Scoped<Shared>;

/// Application state behind the auth routes: settings, the shared
/// durable store, and the HTTP client used for token exchange.
#[derive(Clone)]
pub struct Vault {
    settings: Arc<Settings>,
    store: Shared,
    http: reqwest::Client,
}

impl Vault {
    pub fn new(settings: Settings, store: Shared) -> Result<Self, reqwest::Error> {
        let http = HttpEndpoint::client(&settings)?;
        if !settings.configured() {
            log::warn!("identity provider not configured; sign-in stays disabled");
        }
        Ok(Self {
            settings: Arc::new(settings),
            store,
            http,
        })
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn scoped(&self, scope: ID<Scope>) -> ScopeStore {
        Scoped::new(self.store.clone(), scope)
    }
    pub fn sessions(&self, scope: ID<Scope>) -> Sessions<ScopeStore> {
        Sessions::new(self.scoped(scope))
    }
    pub fn provider(&self, scope: ID<Scope>) -> OidcProvider<ScopeStore> {
        OidcProvider::new(self.settings.clone(), self.scoped(scope))
    }
    pub fn auth(&self, scope: ID<Scope>) -> Auth<OidcProvider<ScopeStore>, ScopeStore> {
        Auth::new(self.provider(scope), self.sessions(scope))
    }
    /// Prune abandoned scopes from the shared store. Failures are logged.
    pub fn sweep(&self, now: Epoch) -> usize {
        sweep(&*self.store, now)
            .inspect_err(|e| log::error!("storage sweep failed: {}", e))
            .unwrap_or_default()
    }
    /// Token endpoints for a callback, the started flow's endpoint first.
    pub fn exchange(&self, first: Flow) -> Exchange<HttpEndpoint> {
        Exchange::new(
            self.settings
                .token_urls(first)
                .into_iter()
                .map(|url| HttpEndpoint::new(self.http.clone(), url))
                .collect(),
        )
    }
}
