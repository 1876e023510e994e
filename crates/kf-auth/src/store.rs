use super::*;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::RwLock;

/// Key-value storage backing the session record and provider-client keys.
/// Implementations are injected so the session module never reaches for
/// ambient global state.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
    fn keys(&self) -> Result<Vec<String>, StoreError>;
    fn remove_all(&self, keys: &[String]) -> Result<(), StoreError> {
        keys.iter().try_for_each(|k| self.remove(k))
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
    fn keys(&self) -> Result<Vec<String>, StoreError> {
        (**self).keys()
    }
    fn remove_all(&self, keys: &[String]) -> Result<(), StoreError> {
        (**self).remove_all(keys)
    }
}

/// Volatile store, used in tests and for ephemeral deployments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}

/// Durable store: a single JSON object on disk, written through on every
/// mutation. Writes go to a sibling temp file and are renamed into place.
/// The in-memory map only changes once the file write has succeeded.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        log::info!("session store at {} ({} keys)", path.display(), entries.len());
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }
    /// Applies `change` to a copy and swaps it in after a successful flush.
    /// `change` reports whether anything changed.
    fn commit<F>(&self, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        let mut next = entries.clone();
        if !change(&mut next) {
            return Ok(());
        }
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let temp = self.path.with_extension("tmp");
        std::fs::write(&temp, serde_json::to_vec(entries)?)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.commit(|next| {
            next.insert(key.to_string(), value.to_string());
            true
        })
    }
    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.commit(|next| next.remove(key).is_some())
    }
    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
    /// One file write for the whole batch.
    fn remove_all(&self, keys: &[String]) -> Result<(), StoreError> {
        self.commit(|next| keys.iter().fold(false, |hit, k| next.remove(k).is_some() || hit))
    }
}

/// Marker for one browser's storage scope.
pub struct Scope;

/// Namespaces a shared store to one scope, so every browser sees a
/// private key space (one session per scope, shared by its tabs).
#[derive(Debug, Clone)]
pub struct Scoped<S> {
    inner: S,
    prefix: String,
}

impl<S> Scoped<S> {
    pub fn new(inner: S, scope: kf_core::ID<Scope>) -> Self {
        Self {
            inner,
            prefix: format!("{}/", scope),
        }
    }
    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl<S: SessionStore> SessionStore for Scoped<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(&self.key(key))
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set(&self.key(key), value)
    }
    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(&self.key(key))
    }
    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .inner
            .keys()?
            .into_iter()
            .filter_map(|k| k.strip_prefix(self.prefix.as_str()).map(str::to_string))
            .collect())
    }
}
