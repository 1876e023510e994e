use super::*;
use kf_core::*;

const FALLBACK: &str = "Checking your session…";

/// Outcome of guarding a protected page.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate<T = ()> {
    /// Auth state still loading; show the fallback.
    Fallback(String),
    /// Not signed in; go here and render nothing.
    Redirect(String),
    Render(T),
}

/// Blocks a subtree until the auth facade reports a signed-in user.
/// Evaluation is a pure function of the facade's state; nothing polls.
#[derive(Debug, Clone)]
pub struct Guard {
    redirect: String,
    fallback: String,
}

impl Default for Guard {
    fn default() -> Self {
        Self {
            redirect: HOME_ROUTE.to_string(),
            fallback: FALLBACK.to_string(),
        }
    }
}

impl Guard {
    pub fn to(redirect: &str) -> Self {
        Self {
            redirect: redirect.to_string(),
            ..Self::default()
        }
    }
    pub fn with_fallback(self, fallback: &str) -> Self {
        Self {
            fallback: fallback.to_string(),
            ..self
        }
    }
    pub fn evaluate(&self, loading: bool, authenticated: bool) -> Gate {
        match (loading, authenticated) {
            (true, _) => Gate::Fallback(self.fallback.clone()),
            (false, false) => Gate::Redirect(self.redirect.clone()),
            (false, true) => Gate::Render(()),
        }
    }
    pub fn admit<P: IdentityProvider, S: SessionStore>(&self, auth: &Auth<P, S>) -> Gate<UserInfo> {
        let user = auth.user();
        match self.evaluate(auth.loading(), user.is_some()) {
            Gate::Fallback(text) => Gate::Fallback(text),
            Gate::Redirect(target) => Gate::Redirect(target),
            Gate::Render(()) => user.map(Gate::Render).unwrap_or(Gate::Redirect(self.redirect.clone())),
        }
    }
}
