#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use dashmap::DashMap;
use once_cell::sync::Lazy;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    FetchTimeout,
    RemoteURL,
    StorageDir,
    StorageKey,
}

impl ToString for ConfigKey {
    fn to_string(&self) -> String {
        match self {
            ConfigKey::FetchTimeout => return String::from("fetch-timeout"),
            ConfigKey::RemoteURL => return String::from("remote-url"),
            ConfigKey::StorageDir => return String::from("storage-dir"),
            ConfigKey::StorageKey => return String::from("storage-key"),
        }
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return Config::default(key);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let storage_dir = dirs::cache_dir()
            .unwrap()
            .join("docchat/state")
            .to_string_lossy()
            .to_string();

        let res = match key {
            ConfigKey::FetchTimeout => "1000",
            ConfigKey::RemoteURL => "http://localhost:8000",
            ConfigKey::StorageDir => &storage_dir,
            ConfigKey::StorageKey => "docchat-session",
        };

        return res.to_string();
    }
}
