use super::*;

/// Token endpoint reached over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpEndpoint {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
    /// Shared client carrying the configured exchange timeout.
    pub fn client(settings: &Settings) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(settings.token_timeout)
            .build()
    }
}

impl TokenEndpoint for HttpEndpoint {
    fn url(&self) -> &str {
        &self.url
    }
    async fn post(&self, request: &TokenRequest) -> Result<TokenResponse, String> {
        let response = self
            .client
            .post(&self.url)
            .form(request)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;
        serde_json::from_str::<TokenResponse>(&body)
            .map_err(|_| format!("status {} with non-json body", status))
    }
}
