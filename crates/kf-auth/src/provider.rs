use super::*;

/// Which user journey an authorization request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Flow {
    SignIn,
    SignUp,
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignIn => write!(f, "sign-in"),
            Self::SignUp => write!(f, "sign-up"),
        }
    }
}

/// Where the browser should go after an auth action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    To(String),
}

/// The identity-provider client library the auth facade drives.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    /// Initialization signal; no action may be issued before it is true.
    fn ready(&self) -> bool;
    /// Account identifier the client currently holds, if any.
    fn account(&self) -> Option<String>;
    async fn popup(&self, flow: Flow) -> Result<Navigation, ProviderError>;
    async fn redirect(&self, flow: Flow) -> Result<Navigation, ProviderError>;
    async fn logout(&self) -> Result<Navigation, ProviderError>;
}

/// Error codes for which an interactive attempt falls back to redirect.
pub const POPUP_FALLBACK: [&str; 4] = [
    "popup_window_error",
    "empty_window_error",
    "monitor_window_timeout",
    "block_nested_popups",
];

/// Next step after a failed interactive attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Redirect,
    Fail,
}

impl From<&ProviderError> for Step {
    fn from(error: &ProviderError) -> Self {
        match POPUP_FALLBACK.contains(&error.code.as_str()) {
            true => Self::Redirect,
            false => Self::Fail,
        }
    }
}
