use super::*;
use kf_core::*;

/// Combines the identity-provider client's account state with the local
/// session into the one view pages consume.
pub struct Auth<P, S> {
    provider: P,
    sessions: Sessions<S>,
}

impl<P: IdentityProvider, S: SessionStore> Auth<P, S> {
    pub fn new(provider: P, sessions: Sessions<S>) -> Self {
        Self { provider, sessions }
    }
    pub fn provider(&self) -> &P {
        &self.provider
    }
    pub fn sessions(&self) -> &Sessions<S> {
        &self.sessions
    }

    pub fn loading(&self) -> bool {
        !self.provider.ready()
    }
    /// Requires both a provider account and a valid local session.
    pub fn session_at(&self, now: Epoch) -> Option<Claims> {
        if self.loading() {
            return None;
        }
        self.provider.account()?;
        self.sessions.read_at(now)
    }
    pub fn authenticated(&self) -> bool {
        self.session_at(epoch()).is_some()
    }
    pub fn user(&self) -> Option<UserInfo> {
        let now = epoch();
        self.session_at(now).map(|claims| UserInfo::new(claims, now))
    }

    pub async fn sign_in(&self) -> Result<Navigation, AuthError> {
        self.interactive(Flow::SignIn).await
    }
    pub async fn sign_up(&self) -> Result<Navigation, AuthError> {
        self.interactive(Flow::SignUp).await
    }
    pub async fn sign_in_redirect(&self) -> Result<Navigation, AuthError> {
        self.redirect(Flow::SignIn).await
    }
    pub async fn sign_up_redirect(&self) -> Result<Navigation, AuthError> {
        self.redirect(Flow::SignUp).await
    }

    /// Local session goes first so the portal reacts at once; a failing
    /// provider logout still lands the user on the home route.
    pub async fn sign_out(&self) -> Navigation {
        if self.loading() {
            log::warn!("sign-out requested before identity client initialised");
            return Navigation::Stay;
        }
        self.sessions.clear();
        match self.provider.logout().await {
            Ok(navigation) => navigation,
            Err(e) => {
                log::error!("provider logout failed: {}", e);
                Navigation::To(HOME_ROUTE.to_string())
            }
        }
    }

    async fn interactive(&self, flow: Flow) -> Result<Navigation, AuthError> {
        if self.loading() {
            log::warn!("{} requested before identity client initialised", flow);
            return Ok(Navigation::Stay);
        }
        match self.provider.popup(flow).await {
            Ok(navigation) => Ok(navigation),
            Err(e) => match Step::from(&e) {
                Step::Redirect => {
                    log::info!("{} popup unavailable ({}), redirecting", flow, e.code);
                    self.redirect(flow).await
                }
                Step::Fail => {
                    log::error!("{} failed: {}", flow, e);
                    Err(e.into())
                }
            },
        }
    }
    async fn redirect(&self, flow: Flow) -> Result<Navigation, AuthError> {
        if self.loading() {
            log::warn!("{} requested before identity client initialised", flow);
            return Ok(Navigation::Stay);
        }
        self.provider
            .redirect(flow)
            .await
            .inspect_err(|e| log::error!("{} redirect failed: {}", flow, e))
            .map_err(AuthError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::tests::token;
    use std::cell::Cell;
    use std::cell::RefCell;

    /// Scripted provider recording which calls were made.
    #[derive(Default)]
    struct Script {
        ready: bool,
        account: Option<String>,
        popup: Option<ProviderError>,
        logout: Option<ProviderError>,
        calls: RefCell<Vec<&'static str>>,
        redirects: Cell<usize>,
    }
    impl IdentityProvider for Script {
        fn ready(&self) -> bool {
            self.ready
        }
        fn account(&self) -> Option<String> {
            self.account.clone()
        }
        async fn popup(&self, _: Flow) -> Result<Navigation, ProviderError> {
            self.calls.borrow_mut().push("popup");
            match self.popup.clone() {
                Some(e) => Err(e),
                None => Ok(Navigation::Stay),
            }
        }
        async fn redirect(&self, flow: Flow) -> Result<Navigation, ProviderError> {
            self.calls.borrow_mut().push("redirect");
            self.redirects.set(self.redirects.get() + 1);
            Ok(Navigation::To(format!("https://idp/{}", flow)))
        }
        async fn logout(&self) -> Result<Navigation, ProviderError> {
            self.calls.borrow_mut().push("logout");
            match self.logout.clone() {
                Some(e) => Err(e),
                None => Ok(Navigation::To("https://idp/logout".into())),
            }
        }
    }

    fn ready() -> Script {
        Script {
            ready: true,
            account: Some("user-1".into()),
            ..Script::default()
        }
    }
    fn signed_in(provider: Script) -> Auth<Script, MemoryStore> {
        let sessions = Sessions::new(MemoryStore::default());
        sessions
            .store(&token(&serde_json::json!({
                "sub": "user-1",
                "exp": epoch() + 3600,
                "given_name": "Ahmed",
                "family_name": "Al Mansoori",
                "emails": ["ahmed@example.ae"],
            })))
            .unwrap();
        Auth::new(provider, sessions)
    }

    #[test]
    fn authenticated_needs_account_and_session() {
        assert!(signed_in(ready()).authenticated());
        let no_account = Script {
            account: None,
            ..ready()
        };
        assert!(!signed_in(no_account).authenticated());
        let no_session = Auth::new(ready(), Sessions::new(MemoryStore::default()));
        assert!(!no_session.authenticated());
    }
    #[test]
    fn expired_session_is_not_authenticated() {
        let auth = signed_in(ready());
        assert!(auth.session_at(epoch() + 7200).is_none());
        assert!(!auth.authenticated());
    }
    #[test]
    fn user_projection() {
        let user = signed_in(ready()).user().unwrap();
        assert_eq!(user.initials, "AA");
        assert_eq!(user.email.as_deref(), Some("ahmed@example.ae"));
        assert_eq!(user.name, "Ahmed");
        assert!(!user.expiring);
    }
    #[tokio::test]
    async fn popup_success_skips_redirect() {
        let auth = signed_in(ready());
        assert_eq!(auth.sign_in().await, Ok(Navigation::Stay));
        assert_eq!(*auth.provider().calls.borrow(), vec!["popup"]);
    }
    #[tokio::test]
    async fn blocked_popup_falls_back_to_redirect() {
        let provider = Script {
            popup: Some(ProviderError::new("popup_window_error", "blocked")),
            ..ready()
        };
        let auth = signed_in(provider);
        assert_eq!(
            auth.sign_up().await,
            Ok(Navigation::To("https://idp/sign-up".into()))
        );
        assert_eq!(*auth.provider().calls.borrow(), vec!["popup", "redirect"]);
    }
    #[tokio::test]
    async fn other_popup_errors_are_returned() {
        let error = ProviderError::new("user_cancelled", "closed");
        let provider = Script {
            popup: Some(error.clone()),
            ..ready()
        };
        let auth = signed_in(provider);
        assert_eq!(auth.sign_in().await, Err(AuthError::Client(error)));
        assert_eq!(auth.provider().redirects.get(), 0);
    }
    #[tokio::test]
    async fn forced_redirect_skips_popup() {
        let auth = signed_in(ready());
        auth.sign_in_redirect().await.unwrap();
        auth.sign_up_redirect().await.unwrap();
        assert_eq!(*auth.provider().calls.borrow(), vec!["redirect", "redirect"]);
    }
    #[tokio::test]
    async fn actions_before_initialisation_are_noops() {
        let provider = Script::default();
        let auth = Auth::new(provider, Sessions::new(MemoryStore::default()));
        assert!(auth.loading());
        assert_eq!(auth.sign_in().await, Ok(Navigation::Stay));
        assert_eq!(auth.sign_up_redirect().await, Ok(Navigation::Stay));
        assert_eq!(auth.sign_out().await, Navigation::Stay);
        assert!(auth.provider().calls.borrow().is_empty());
    }
    #[tokio::test]
    async fn sign_out_clears_session_first() {
        let auth = signed_in(ready());
        let nav = auth.sign_out().await;
        assert_eq!(nav, Navigation::To("https://idp/logout".into()));
        assert_eq!(auth.sessions().read(), None);
    }
    #[tokio::test]
    async fn failed_logout_still_goes_home() {
        let provider = Script {
            logout: Some(ProviderError::new("network_error", "offline")),
            ..ready()
        };
        let auth = signed_in(provider);
        assert_eq!(auth.sign_out().await, Navigation::To("/".into()));
        assert_eq!(auth.sessions().read(), None);
    }
}
