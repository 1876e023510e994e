use super::*;
use kf_core::*;

/// Query parameters of the provider's redirect back to the portal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl CallbackQuery {
    /// Accepts a full redirect URL or just its query string.
    /// Empty values count as absent.
    pub fn parse(url: &str) -> Self {
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or(url);
        let query = query.split('#').next().unwrap_or_default();
        let mut parsed = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = form_decode(value).filter(|v| !v.is_empty());
            match key {
                "code" => parsed.code = value,
                "state" => parsed.state = value,
                "error" => parsed.error = value,
                "error_description" => parsed.error_description = value,
                _ => continue,
            }
        }
        parsed
    }
}

fn form_decode(value: &str) -> Option<String> {
    urlencoding::decode(&value.replace('+', " "))
        .inspect_err(|e| log::warn!("undecodable callback parameter: {}", e))
        .ok()
        .map(|v| v.into_owned())
}

/// Callback page state: `Loading` moves to exactly one terminal phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Success {
        claims: Claims,
        landing: String,
        delay: std::time::Duration,
    },
    Failure {
        message: String,
    },
}

impl Phase {
    pub fn terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Completes the authorization-code flow for one page visit.
pub struct Callback<'a, E, S> {
    settings: &'a Settings,
    exchange: &'a Exchange<E>,
    sessions: &'a Sessions<S>,
    expected: Option<String>,
    phase: Phase,
}

impl<'a, E: TokenEndpoint, S: SessionStore> Callback<'a, E, S> {
    pub fn new(settings: &'a Settings, exchange: &'a Exchange<E>, sessions: &'a Sessions<S>) -> Self {
        Self {
            settings,
            exchange,
            sessions,
            expected: None,
            phase: Phase::Loading,
        }
    }
    /// Require the redirect to carry this `state` before any exchange.
    pub fn expecting(self, state: Option<&str>) -> Self {
        Self {
            expected: state.map(str::to_string),
            ..self
        }
    }
    pub fn phase(&self) -> &Phase {
        &self.phase
    }
    /// Runs once; later calls leave the terminal phase untouched.
    pub async fn complete(&mut self, query: &CallbackQuery) -> &Phase {
        if self.phase.terminal() {
            return &self.phase;
        }
        self.phase = match self.attempt(query).await {
            Ok(claims) => Phase::Success {
                claims,
                landing: LANDING_ROUTE.to_string(),
                delay: REDIRECT_DELAY,
            },
            Err(e) => {
                log::warn!("authentication callback failed: {}", e);
                Phase::Failure {
                    message: e.message(),
                }
            }
        };
        &self.phase
    }
    async fn attempt(&self, query: &CallbackQuery) -> Result<Claims, AuthError> {
        if let Some(error) = query.error.as_ref() {
            return Err(AuthError::Provider(
                query.error_description.clone().unwrap_or_else(|| error.clone()),
            ));
        }
        let code = query.code.as_deref().ok_or(AuthError::MissingCode)?;
        if let Some(expected) = self.expected.as_deref() {
            if query.state.as_deref() != Some(expected) {
                return Err(AuthError::State);
            }
        }
        let request = TokenRequest::new(self.settings, code, query.state.as_deref());
        let token = self.exchange.run(&request).await?;
        self.sessions
            .store(&token)
            .ok_or_else(|| AuthError::Decode("id token could not be stored".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::tests::token;
    use crate::exchange::tests::Canned;

    fn jwt() -> String {
        token(&serde_json::json!({ "sub": "user-1", "exp": epoch() + 3600, "name": "Sarah Johnson" }))
    }

    #[test]
    fn parses_full_redirect_url() {
        let q = CallbackQuery::parse(
            "https://portal.example.ae/auth/callback?code=abc%2F123&state=xyz#frag",
        );
        assert_eq!(q.code.as_deref(), Some("abc/123"));
        assert_eq!(q.state.as_deref(), Some("xyz"));
        assert_eq!(q.error, None);
    }
    #[test]
    fn parses_plus_as_space() {
        let q = CallbackQuery::parse("error=access_denied&error_description=User+cancelled");
        assert_eq!(q.error.as_deref(), Some("access_denied"));
        assert_eq!(q.error_description.as_deref(), Some("User cancelled"));
    }
    #[test]
    fn empty_code_is_absent() {
        assert_eq!(CallbackQuery::parse("?code=&state=s").code, None);
    }
    #[tokio::test]
    async fn provider_error_never_exchanges() {
        let endpoint = Canned::token("https://a/token", &jwt());
        let exchange = Exchange::new(vec![&endpoint]);
        let sessions = Sessions::new(MemoryStore::default());
        let settings = Settings::default();
        let mut callback = Callback::new(&settings, &exchange, &sessions);
        let query = CallbackQuery::parse("error=access_denied&error_description=User+cancelled");
        assert_eq!(
            callback.complete(&query).await,
            &Phase::Failure {
                message: "User cancelled".into()
            }
        );
        assert!(endpoint.seen.borrow().is_empty());
        assert_eq!(sessions.read(), None);
    }
    #[tokio::test]
    async fn provider_error_without_description_uses_code() {
        let endpoint = Canned::token("https://a/token", &jwt());
        let exchange = Exchange::new(vec![&endpoint]);
        let sessions = Sessions::new(MemoryStore::default());
        let settings = Settings::default();
        let mut callback = Callback::new(&settings, &exchange, &sessions);
        let phase = callback.complete(&CallbackQuery::parse("error=server_error")).await;
        assert_eq!(
            phase,
            &Phase::Failure {
                message: "server_error".into()
            }
        );
    }
    #[tokio::test]
    async fn missing_code_fails() {
        let endpoint = Canned::token("https://a/token", &jwt());
        let exchange = Exchange::new(vec![&endpoint]);
        let sessions = Sessions::new(MemoryStore::default());
        let settings = Settings::default();
        let mut callback = Callback::new(&settings, &exchange, &sessions);
        let phase = callback.complete(&CallbackQuery::parse("state=abc")).await;
        assert_eq!(
            phase,
            &Phase::Failure {
                message: "No authorization code received".into()
            }
        );
        assert!(endpoint.seen.borrow().is_empty());
    }
    #[tokio::test]
    async fn code_exchange_succeeds_and_stores_session() {
        let endpoint = Canned::token("https://a/token", &jwt());
        let exchange = Exchange::new(vec![&endpoint]);
        let sessions = Sessions::new(MemoryStore::default());
        let settings = Settings::default();
        let mut callback = Callback::new(&settings, &exchange, &sessions);
        let phase = callback
            .complete(&CallbackQuery::parse("code=abc&state=xyz"))
            .await
            .clone();
        let Phase::Success {
            claims,
            landing,
            delay,
        } = phase
        else {
            panic!("expected success, got {:?}", phase);
        };
        assert_eq!(landing, "/dashboard");
        assert_eq!(delay, REDIRECT_DELAY);
        assert_eq!(sessions.read(), Some(claims));
        let seen = endpoint.seen.borrow();
        assert_eq!(seen[0].code, "abc");
        assert_eq!(seen[0].state.as_deref(), Some("xyz"));
        assert_eq!(seen[0].redirect_uri, settings.redirect_uri);
    }
    #[tokio::test]
    async fn undecodable_token_reads_as_exchange_failure() {
        let endpoint = Canned::token("https://a/token", "not-a-jwt");
        let exchange = Exchange::new(vec![&endpoint]);
        let sessions = Sessions::new(MemoryStore::default());
        let settings = Settings::default();
        let mut callback = Callback::new(&settings, &exchange, &sessions);
        let phase = callback.complete(&CallbackQuery::parse("code=abc")).await;
        assert_eq!(
            phase,
            &Phase::Failure {
                message: AuthError::Exchange.message()
            }
        );
    }
    #[tokio::test]
    async fn mismatched_state_never_exchanges() {
        let endpoint = Canned::token("https://a/token", &jwt());
        let exchange = Exchange::new(vec![&endpoint]);
        let sessions = Sessions::new(MemoryStore::default());
        let settings = Settings::default();
        for query in ["code=abc&state=forged", "code=abc"] {
            let mut callback =
                Callback::new(&settings, &exchange, &sessions).expecting(Some("issued"));
            let phase = callback.complete(&CallbackQuery::parse(query)).await;
            assert_eq!(
                phase,
                &Phase::Failure {
                    message: AuthError::State.message()
                }
            );
        }
        assert!(endpoint.seen.borrow().is_empty());
        assert_eq!(sessions.read(), None);
    }
    #[tokio::test]
    async fn matching_state_exchanges() {
        let endpoint = Canned::token("https://a/token", &jwt());
        let exchange = Exchange::new(vec![&endpoint]);
        let sessions = Sessions::new(MemoryStore::default());
        let settings = Settings::default();
        let mut callback = Callback::new(&settings, &exchange, &sessions).expecting(Some("issued"));
        let phase = callback
            .complete(&CallbackQuery::parse("code=abc&state=issued"))
            .await;
        assert!(matches!(phase, Phase::Success { .. }));
    }
    #[tokio::test]
    async fn terminal_phase_is_sticky() {
        let endpoint = Canned::token("https://a/token", &jwt());
        let exchange = Exchange::new(vec![&endpoint]);
        let sessions = Sessions::new(MemoryStore::default());
        let settings = Settings::default();
        let mut callback = Callback::new(&settings, &exchange, &sessions);
        callback.complete(&CallbackQuery::parse("")).await;
        callback.complete(&CallbackQuery::parse("code=abc")).await;
        assert!(matches!(callback.phase(), Phase::Failure { .. }));
        assert!(endpoint.seen.borrow().is_empty());
    }
}
