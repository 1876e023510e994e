use super::*;
use kf_core::*;
use std::sync::Arc;

pub(crate) const ACCOUNT_KEY: &str = const_format::concatcp!(PROVIDER_PREFIX, "account");
pub(crate) const PENDING_KEY: &str = const_format::concatcp!(PROVIDER_PREFIX, "pending");

/// Identity-provider configuration, read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Provider host: a `*.b2clogin.com` subdomain or a custom domain.
    pub domain: String,
    pub tenant: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub post_logout_uri: String,
    /// Extra API scopes appended to the authorize request.
    pub api_scopes: Vec<String>,
    pub signin_policy: String,
    pub signup_policy: String,
    pub token_timeout: std::time::Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            domain: String::default(),
            tenant: String::default(),
            client_id: String::default(),
            redirect_uri: "http://localhost:8888/auth/callback".to_string(),
            post_logout_uri: "http://localhost:8888/".to_string(),
            api_scopes: Vec::new(),
            signin_policy: "B2C_1_signin".to_string(),
            signup_policy: "B2C_1_signup".to_string(),
            token_timeout: std::time::Duration::from_secs(TOKEN_TIMEOUT),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |key: &str, default: String| std::env::var(key).unwrap_or(default);
        Self {
            domain: var("KF_IDP_DOMAIN", defaults.domain),
            tenant: var("KF_IDP_TENANT", defaults.tenant),
            client_id: var("KF_CLIENT_ID", defaults.client_id),
            redirect_uri: var("KF_REDIRECT_URI", defaults.redirect_uri),
            post_logout_uri: var("KF_POST_LOGOUT_URI", defaults.post_logout_uri),
            api_scopes: std::env::var("KF_API_SCOPES")
                .map(|s| s.split_whitespace().map(str::to_string).collect())
                .unwrap_or(defaults.api_scopes),
            signin_policy: var("KF_SIGNIN_POLICY", defaults.signin_policy),
            signup_policy: var("KF_SIGNUP_POLICY", defaults.signup_policy),
            token_timeout: std::env::var("KF_TOKEN_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(std::time::Duration::from_secs)
                .unwrap_or(defaults.token_timeout),
        }
    }
    pub fn configured(&self) -> bool {
        !self.domain.is_empty() && !self.tenant.is_empty() && !self.client_id.is_empty()
    }
    pub fn policy(&self, flow: Flow) -> &str {
        match flow {
            Flow::SignIn => &self.signin_policy,
            Flow::SignUp => &self.signup_policy,
        }
    }
    pub fn authority(&self, flow: Flow) -> String {
        format!("https://{}/{}/{}", self.domain, self.tenant, self.policy(flow))
    }
    pub fn token_url(&self, flow: Flow) -> String {
        format!("{}/oauth2/v2.0/token", self.authority(flow))
    }
    /// Token endpoints in the order the callback should try them.
    pub fn token_urls(&self, first: Flow) -> Vec<String> {
        let second = match first {
            Flow::SignIn => Flow::SignUp,
            Flow::SignUp => Flow::SignIn,
        };
        vec![self.token_url(first), self.token_url(second)]
    }
    pub fn scope(&self) -> String {
        std::iter::once(TOKEN_SCOPE)
            .chain(self.api_scopes.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// State recorded when an authorization request leaves for the provider.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pending {
    pub flow: Flow,
    pub state: String,
    pub nonce: String,
    /// Records written without a timestamp count as stale.
    #[serde(default)]
    pub created: Epoch,
}

impl Pending {
    pub fn stale(&self, now: Epoch) -> bool {
        now - self.created >= PENDING_TTL
    }
}

/// Provider client for a B2C-style OIDC authority. Its own records live
/// under the provider key prefix in the scope's store.
#[derive(Debug, Clone)]
pub struct OidcProvider<S> {
    settings: Arc<Settings>,
    store: S,
}

impl<S: SessionStore> OidcProvider<S> {
    pub fn new(settings: Arc<Settings>, store: S) -> Self {
        Self { settings, store }
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    /// Record the account a completed callback signed in.
    pub fn remember(&self, claims: &Claims) -> Result<(), ProviderError> {
        self.store
            .set(ACCOUNT_KEY, &claims.sub)
            .map_err(|e| ProviderError::new("storage_error", &e.to_string()))
    }
    /// Take the pending request, if one was recorded for this scope.
    pub fn pending(&self) -> Option<Pending> {
        let json = self.store.get(PENDING_KEY).ok()??;
        if let Err(e) = self.store.remove(PENDING_KEY) {
            log::warn!("failed to remove pending request: {}", e);
        }
        serde_json::from_str::<Pending>(&json)
            .inspect_err(|e| log::warn!("unreadable pending request: {}", e))
            .ok()
            .filter(|p| !p.stale(epoch()))
    }
    pub fn authorize_url(&self, flow: Flow, pending: &Pending) -> String {
        let mut url = format!(
            "{}/oauth2/v2.0/authorize?client_id={}&response_type=code&response_mode=query&redirect_uri={}&scope={}&state={}&nonce={}",
            self.settings.authority(flow),
            urlencoding::encode(&self.settings.client_id),
            urlencoding::encode(&self.settings.redirect_uri),
            urlencoding::encode(&self.settings.scope()),
            urlencoding::encode(&pending.state),
            urlencoding::encode(&pending.nonce),
        );
        if flow == Flow::SignUp {
            url.push_str("&prompt=create");
        }
        url
    }
    pub fn logout_url(&self) -> String {
        format!(
            "{}/oauth2/v2.0/logout?post_logout_redirect_uri={}",
            self.settings.authority(Flow::SignIn),
            urlencoding::encode(&self.settings.post_logout_uri),
        )
    }
}

impl<S: SessionStore> IdentityProvider for OidcProvider<S> {
    fn ready(&self) -> bool {
        self.settings.configured()
    }
    fn account(&self) -> Option<String> {
        self.store
            .get(ACCOUNT_KEY)
            .inspect_err(|e| log::error!("failed to read provider account: {}", e))
            .ok()
            .flatten()
    }
    async fn popup(&self, flow: Flow) -> Result<Navigation, ProviderError> {
        log::debug!("no popup window for server-rendered {}", flow);
        Err(ProviderError::new(
            "popup_window_error",
            "interactive popups are unavailable to server-rendered sign-in",
        ))
    }
    async fn redirect(&self, flow: Flow) -> Result<Navigation, ProviderError> {
        let pending = Pending {
            flow,
            state: random(),
            nonce: random(),
            created: epoch(),
        };
        let json = serde_json::to_string(&pending)
            .map_err(|e| ProviderError::new("serialization_error", &e.to_string()))?;
        self.store
            .set(PENDING_KEY, &json)
            .map_err(|e| ProviderError::new("storage_error", &e.to_string()))?;
        Ok(Navigation::To(self.authorize_url(flow, &pending)))
    }
    async fn logout(&self) -> Result<Navigation, ProviderError> {
        if let Err(e) = self.store.remove(ACCOUNT_KEY) {
            log::warn!("failed to forget provider account: {}", e);
        }
        Ok(Navigation::To(self.logout_url()))
    }
}

fn random() -> String {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Arc<Settings> {
        Arc::new(Settings {
            domain: "khalifafund.b2clogin.com".into(),
            tenant: "khalifafund.onmicrosoft.com".into(),
            client_id: "client-1".into(),
            api_scopes: vec!["https://khalifafund.onmicrosoft.com/api/read".into()],
            ..Settings::default()
        })
    }

    #[test]
    fn unconfigured_settings_are_not_ready() {
        let provider = OidcProvider::new(Arc::new(Settings::default()), MemoryStore::default());
        assert!(!provider.ready());
    }
    #[test]
    fn token_urls_follow_the_flow() {
        let urls = settings().token_urls(Flow::SignUp);
        assert_eq!(
            urls[0],
            "https://khalifafund.b2clogin.com/khalifafund.onmicrosoft.com/B2C_1_signup/oauth2/v2.0/token"
        );
        assert!(urls[1].contains("B2C_1_signin"));
    }
    #[test]
    fn scope_appends_api_scopes() {
        assert_eq!(
            settings().scope(),
            "openid profile email https://khalifafund.onmicrosoft.com/api/read"
        );
    }
    #[tokio::test]
    async fn redirect_records_pending_request() {
        let provider = OidcProvider::new(settings(), MemoryStore::default());
        let Ok(Navigation::To(url)) = provider.redirect(Flow::SignUp).await else {
            panic!("expected navigation");
        };
        let pending = provider.pending().unwrap();
        assert_eq!(pending.flow, Flow::SignUp);
        assert_eq!(pending.state.len(), 32);
        assert!(!pending.stale(epoch()));
        assert!(pending.stale(pending.created + PENDING_TTL));
        assert!(url.contains(&format!("state={}", pending.state)));
        assert!(url.contains("response_type=code"));
        assert!(url.ends_with("&prompt=create"));
        assert_eq!(provider.pending(), None);
    }
    #[tokio::test]
    async fn popup_is_a_fallback_class_error() {
        let provider = OidcProvider::new(settings(), MemoryStore::default());
        let error = provider.popup(Flow::SignIn).await.unwrap_err();
        assert_eq!(Step::from(&error), Step::Redirect);
    }
    #[tokio::test]
    async fn logout_forgets_account() {
        let provider = OidcProvider::new(settings(), MemoryStore::default());
        provider.remember(&crate::claims::tests::claims("user-1", 10)).unwrap();
        assert_eq!(provider.account().as_deref(), Some("user-1"));
        let nav = provider.logout().await.unwrap();
        assert_eq!(provider.account(), None);
        assert_eq!(
            nav,
            Navigation::To(
                "https://khalifafund.b2clogin.com/khalifafund.onmicrosoft.com/B2C_1_signin/oauth2/v2.0/logout?post_logout_redirect_uri=http%3A%2F%2Flocalhost%3A8888%2F".into()
            )
        );
    }
}
