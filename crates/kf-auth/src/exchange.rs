use super::*;
use kf_core::*;

/// Form body of an authorization-code token request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TokenRequest {
    pub client_id: String,
    pub scope: String,
    pub code: String,
    pub redirect_uri: String,
    pub grant_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl TokenRequest {
    pub fn new(settings: &Settings, code: &str, state: Option<&str>) -> Self {
        Self {
            client_id: settings.client_id.clone(),
            scope: TOKEN_SCOPE.to_string(),
            code: code.to_string(),
            redirect_uri: settings.redirect_uri.clone(),
            grant_type: "authorization_code".to_string(),
            state: state.map(str::to_string),
        }
    }
}

/// Token endpoint response body. Success carries `id_token`; failure
/// carries `error` and usually `error_description`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// One token endpoint the exchange may be posted to.
#[allow(async_fn_in_trait)]
pub trait TokenEndpoint {
    fn url(&self) -> &str;
    /// Transport failures are reported as `Err(message)`; any response
    /// body the endpoint returns, success or OAuth error, is `Ok`.
    async fn post(&self, request: &TokenRequest) -> Result<TokenResponse, String>;
}

/// Tries each endpoint in order and keeps the first ID token.
pub struct Exchange<E> {
    endpoints: Vec<E>,
}

impl<E: TokenEndpoint> Exchange<E> {
    /// Endpoints sharing a URL are posted to once.
    pub fn new(endpoints: Vec<E>) -> Self {
        let mut unique = Vec::<E>::with_capacity(endpoints.len());
        for endpoint in endpoints {
            if unique.iter().any(|e| e.url() == endpoint.url()) {
                log::debug!("skipping duplicate token endpoint {}", endpoint.url());
                continue;
            }
            unique.push(endpoint);
        }
        Self { endpoints: unique }
    }
    pub fn endpoints(&self) -> &[E] {
        &self.endpoints
    }
    pub async fn run(&self, request: &TokenRequest) -> Result<String, AuthError> {
        for endpoint in self.endpoints.iter() {
            match endpoint.post(request).await {
                Err(e) => log::warn!("token endpoint {} unreachable: {}", endpoint.url(), e),
                Ok(TokenResponse {
                    id_token: Some(token),
                    ..
                }) if !token.is_empty() => {
                    log::info!("token exchange succeeded at {}", endpoint.url());
                    return Ok(token);
                }
                Ok(TokenResponse {
                    error: Some(error), ..
                }) if error == "invalid_grant" => continue,
                Ok(TokenResponse {
                    error,
                    error_description,
                    ..
                }) => log::warn!(
                    "token endpoint {} refused exchange: {} {}",
                    endpoint.url(),
                    error.as_deref().unwrap_or("no id_token"),
                    error_description.as_deref().unwrap_or_default()
                ),
            }
        }
        Err(AuthError::Exchange)
    }
}
