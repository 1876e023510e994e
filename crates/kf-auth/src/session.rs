use super::*;
use crate::oidc::ACCOUNT_KEY;
use crate::oidc::PENDING_KEY;
use kf_core::*;
use std::collections::BTreeSet;

/// Session lifecycle over an injected store.
///
/// Every storage or parse failure is logged and reported as "no session";
/// callers never see an error from this type.
#[derive(Debug, Clone)]
pub struct Sessions<S> {
    backend: S,
}

impl<S: SessionStore> Sessions<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Decode an ID token and persist its full claim set.
    pub fn store(&self, token: &str) -> Option<Claims> {
        let claims = Claims::decode(token)
            .inspect_err(|e| log::error!("failed to decode id token: {}", e))
            .ok()?;
        self.save(&claims).then_some(claims)
    }
    /// Persist an already decoded claim set.
    pub fn save(&self, claims: &Claims) -> bool {
        match serde_json::to_string(claims) {
            Err(e) => log::error!("failed to serialize session: {}", e),
            Ok(json) => match self.backend.set(SESSION_KEY, &json) {
                Err(e) => log::error!("failed to write session: {}", e),
                Ok(()) => {
                    log::debug!("stored session for {}", claims.sub);
                    return true;
                }
            },
        }
        false
    }

    pub fn read(&self) -> Option<Claims> {
        self.read_at(epoch())
    }
    /// Load the session as of `now`. An expired record is deleted on the
    /// way out; a record not yet valid is left in place.
    pub fn read_at(&self, now: Epoch) -> Option<Claims> {
        let json = self
            .backend
            .get(SESSION_KEY)
            .inspect_err(|e| log::error!("failed to read session: {}", e))
            .ok()??;
        let claims = match Claims::parse(&json) {
            Ok(claims) => claims,
            Err(e) => {
                log::error!("discarding unreadable session: {}", e);
                self.drop_record();
                return None;
            }
        };
        if claims.expired(now) {
            log::info!("session for {} expired", claims.sub);
            self.drop_record();
            return None;
        }
        claims.valid(now).then_some(claims)
    }

    /// Delete the session record and every provider-client key.
    pub fn clear(&self) {
        self.drop_record();
        match self.backend.keys() {
            Err(e) => log::error!("failed to list storage keys: {}", e),
            Ok(keys) => keys
                .iter()
                .filter(|k| k.starts_with(PROVIDER_PREFIX))
                .for_each(|k| {
                    if let Err(e) = self.backend.remove(k) {
                        log::error!("failed to remove {}: {}", k, e);
                    }
                }),
        }
    }
    fn drop_record(&self) {
        if let Err(e) = self.backend.remove(SESSION_KEY) {
            log::error!("failed to remove session: {}", e);
        }
    }
}

/// Drops expired or unreadable sessions, stale pending requests, and
/// accounts left without a session, across every scope of a shared store.
/// Returns how many keys were removed.
pub fn sweep<S: SessionStore + ?Sized>(store: &S, now: Epoch) -> Result<usize, StoreError> {
    let keys = store.keys()?;
    let mut live = BTreeSet::new();
    let mut stale = Vec::new();
    for key in keys.iter() {
        let Some((scope, name)) = key.split_once('/') else {
            continue;
        };
        match name {
            SESSION_KEY => match store
                .get(key)?
                .and_then(|json| Claims::parse(&json).ok())
                .filter(|claims| !claims.expired(now))
            {
                Some(_) => {
                    live.insert(scope);
                }
                None => stale.push(key.clone()),
            },
            PENDING_KEY => {
                let fresh = store
                    .get(key)?
                    .and_then(|json| serde_json::from_str::<Pending>(&json).ok())
                    .is_some_and(|pending| !pending.stale(now));
                if !fresh {
                    stale.push(key.clone());
                }
            }
            _ => continue,
        }
    }
    stale.extend(
        keys.iter()
            .filter(|k| {
                k.split_once('/')
                    .is_some_and(|(scope, name)| name == ACCOUNT_KEY && !live.contains(scope))
            })
            .cloned(),
    );
    if !stale.is_empty() {
        store.remove_all(&stale)?;
        log::info!("swept {} abandoned storage keys", stale.len());
    }
    Ok(stale.len())
}
