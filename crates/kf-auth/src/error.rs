/// Failures of the durable session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Io(String),
    Corrupt(String),
    Poisoned,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(s) => write!(f, "storage io: {}", s),
            Self::Corrupt(s) => write!(f, "storage corrupt: {}", s),
            Self::Poisoned => write!(f, "storage lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Corrupt(e.to_string())
    }
}

/// Error reported by the identity-provider client.
/// `code` follows the provider's error-code vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ProviderError {}

/// Terminal failures of the authentication flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The redirect carried an `error` parameter.
    Provider(String),
    /// The redirect carried neither `error` nor `code`.
    MissingCode,
    /// No token endpoint produced an ID token.
    Exchange,
    /// The ID token could not be decoded or failed claim validation.
    Decode(String),
    /// The redirect's `state` does not answer the pending request.
    State,
    /// The identity-provider client failed outside the popup fallback class.
    Client(ProviderError),
}

impl AuthError {
    /// Message shown on the error panel.
    pub fn message(&self) -> String {
        match self {
            Self::Provider(description) => description.clone(),
            Self::MissingCode => "No authorization code received".to_string(),
            Self::Exchange | Self::Decode(_) | Self::State => {
                "Authentication failed. Please try again.".to_string()
            }
            Self::Client(e) => e.message.clone(),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provider(s) => write!(f, "provider error: {}", s),
            Self::MissingCode => write!(f, "no authorization code"),
            Self::Exchange => write!(f, "token exchange failed on every endpoint"),
            Self::Decode(s) => write!(f, "id token rejected: {}", s),
            Self::State => write!(f, "callback state does not match the pending request"),
            Self::Client(e) => write!(f, "identity client: {}", e),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<ProviderError> for AuthError {
    fn from(e: ProviderError) -> Self {
        Self::Client(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decode_failures_read_like_exchange_failures() {
        assert_eq!(
            AuthError::Decode("bad".into()).message(),
            AuthError::Exchange.message()
        );
    }
    #[test]
    fn provider_description_is_verbatim() {
        assert_eq!(AuthError::Provider("User cancelled".into()).message(), "User cancelled");
    }
}
