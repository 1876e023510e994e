//! Authentication against the external identity provider.
//!
//! Completes the OAuth2 authorization-code flow, keeps the decoded ID-token
//! claims as the portal's session, and gates protected routes on it.
//!
//! ## Session
//!
//! - [`Claims`] — Decoded, shape-checked ID-token claim set
//! - [`SessionStore`] — Injected key-value storage ([`MemoryStore`], [`FileStore`], [`Scoped`])
//! - [`Sessions`] — Store, read with lazy expiry, clear
//!
//! ## Flow
//!
//! - [`Callback`] — Redirect handling and its `Loading → Success | Failure` phases
//! - [`Exchange`] — Sequential token-endpoint attempts, first ID token wins
//! - [`IdentityProvider`] — Provider client seam, with [`OidcProvider`] for B2C authorities
//! - [`Auth`] — Facade over provider account state and the local session
//! - [`Guard`] — Fallback / redirect / render decision for protected pages
mod callback;
mod claims;
mod dto;
mod error;
mod exchange;
mod facade;
mod guard;
mod oidc;
mod provider;
mod session;
mod store;

pub use callback::*;
pub use claims::*;
pub use dto::*;
pub use error::*;
pub use exchange::*;
pub use facade::*;
pub use guard::*;
pub use oidc::*;
pub use provider::*;
pub use session::*;
pub use store::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod http;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
mod vault;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use http::*;
#[cfg(feature = "server")]
pub use middleware::*;
#[cfg(feature = "server")]
pub use vault::*;
