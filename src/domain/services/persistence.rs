#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Envelope;
use crate::infrastructure::storage::StorageBox;

#[cfg(feature = "dev")]
use once_cell::sync::Lazy;

// Dev builds get a per-run key so restarting the process starts from a clean
// session instead of replaying yesterday's state.
#[cfg(feature = "dev")]
static RUN_SUFFIX: Lazy<String> = Lazy::new(|| {
    return uuid::Uuid::new_v4()
        .to_string()
        .split('-')
        .next()
        .unwrap()
        .to_string();
});

fn storage_key() -> String {
    let base = Config::get(ConfigKey::StorageKey);

    #[cfg(feature = "dev")]
    {
        return format!("{base}-{run}", run = *RUN_SUFFIX);
    }

    #[cfg(not(feature = "dev"))]
    {
        return base;
    }
}

/// Mirrors the whitelisted subset of session state to durable storage after
/// each mutation. The in-memory session stays the source of truth; storage is
/// a convenience cache across reloads, so every failure here is logged and
/// swallowed.
pub struct Persistence {
    storage: StorageBox,
    key: String,
}

impl Persistence {
    pub fn new(storage: StorageBox) -> Persistence {
        return Persistence {
            storage,
            key: storage_key(),
        };
    }

    pub fn with_key(storage: StorageBox, key: &str) -> Persistence {
        return Persistence {
            storage,
            key: key.to_string(),
        };
    }

    pub fn key(&self) -> &str {
        return &self.key;
    }

    /// Best-effort write-through.
    pub async fn save(&self, envelope: &Envelope) {
        let payload = match envelope.encode() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = ?err, "failed to encode session envelope");
                return;
            }
        };

        if let Err(err) = self.storage.set(&self.key, &payload).await {
            tracing::warn!(error = ?err, key = %self.key, "failed to persist session");
        }
    }

    /// Reads and decodes the persisted envelope. Unavailable storage and
    /// corrupt payloads both degrade to the empty envelope.
    pub async fn load(&self) -> Envelope {
        match self.storage.get(&self.key).await {
            Ok(Some(payload)) => return Envelope::decode(&payload),
            Ok(None) => return Envelope::default(),
            Err(err) => {
                tracing::warn!(error = ?err, key = %self.key, "failed to read persisted session");
                return Envelope::default();
            }
        }
    }

    pub async fn reset(&self) {
        if let Err(err) = self.storage.remove(&self.key).await {
            tracing::warn!(error = ?err, key = %self.key, "failed to reset persisted session");
        }
    }
}
