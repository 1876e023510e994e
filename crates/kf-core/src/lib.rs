//! Core identifiers, constants, and runtime utilities for the portal.
//!
//! This crate provides the foundational types and fixed parameters
//! shared by the authentication, marketplace, and server crates.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seconds since the Unix epoch, as carried in ID-token claims.
pub type Epoch = i64;
/// Marketplace rating on a 0–5 scale.
pub type Rating = f32;

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> TryFrom<&str> for ID<T> {
    type Error = uuid::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        uuid::Uuid::parse_str(s).map(Self::from)
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Storage key holding the JSON-serialized claim set.
pub const SESSION_KEY: &str = "kf.session";
/// Prefix of every key owned by the identity-provider client.
pub const PROVIDER_PREFIX: &str = "oidc.";
/// Remaining lifetime under which a session counts as expiring soon (seconds).
pub const EXPIRY_WARNING: Epoch = 5 * 60;
/// Display name used when the token carries no name claims.
pub const DEFAULT_NAME: &str = "User";
/// Initials used when no name can be derived.
pub const DEFAULT_INITIALS: &str = "U";

// ============================================================================
// OAUTH PARAMETERS
// ============================================================================
/// Scope string sent with every token request.
pub const TOKEN_SCOPE: &str = "openid profile email";
/// Default timeout on the token-exchange POST (seconds).
pub const TOKEN_TIMEOUT: u64 = 10;
/// Age after which an unanswered authorization request is discarded (seconds).
pub const PENDING_TTL: Epoch = 15 * 60;
/// Period of the sweep over abandoned storage entries.
pub const SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10 * 60);
/// Delay between the callback success panel and the landing redirect.
pub const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_secs(2);

// ============================================================================
// ROUTES
// ============================================================================
/// Public landing route.
pub const HOME_ROUTE: &str = "/";
/// Authenticated landing route after a successful callback.
pub const LANDING_ROUTE: &str = "/dashboard";
/// Cookie naming the browser storage scope.
pub const SCOPE_COOKIE: &str = "kf_scope";

// ============================================================================
// MARKETPLACE PARAMETERS
// ============================================================================
/// Listings per marketplace page.
pub const PAGE_SIZE: usize = 9;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Current wall-clock time in seconds since the Unix epoch.
pub fn epoch() -> Epoch {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as Epoch)
        .unwrap_or_default()
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", epoch())).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
