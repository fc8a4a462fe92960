use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key under which the session token is persisted.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// File-backed key-value store for session data.
///
/// The file holds a flat JSON object of string pairs and is read and written
/// whole on every operation. A missing file reads as empty.
#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, String> {
        if !self.path.exists() {
            return Ok(None);
        }
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<HashMap<String, String>>(&content) {
                Ok(map) => Ok(map.get(key).cloned()),
                Err(e) => Err(format!("Invalid session file - {}", e)),
            },
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut map = self.read_map_or_default();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    pub fn remove(&self, key: &str) -> Result<(), String> {
        let mut map = self.read_map_or_default();
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }

    // A corrupt or unreadable file starts over empty; the next write replaces it.
    fn read_map_or_default(&self) -> HashMap<String, String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), String> {
        match serde_json::to_string_pretty(map) {
            Ok(json) => match fs::write(&self.path, &json) {
                Ok(_) => Ok(()),
                Err(e) => Err(e.to_string()),
            },
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_on_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("session.json"));
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("session.json"));

        store.set(ACCESS_TOKEN_KEY, "tok123").unwrap();
        assert_eq!(
            store.get(ACCESS_TOKEN_KEY).unwrap(),
            Some("tok123".to_string())
        );

        // Overwrites replace the previous value.
        store.set(ACCESS_TOKEN_KEY, "tok456").unwrap();
        assert_eq!(
            store.get(ACCESS_TOKEN_KEY).unwrap(),
            Some("tok456".to_string())
        );
    }

    #[test]
    fn test_remove_clears_value_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("session.json"));

        store.set(ACCESS_TOKEN_KEY, "tok123").unwrap();
        store.remove(ACCESS_TOKEN_KEY).unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);

        // Removing again, and removing on a missing file, are both no-ops.
        store.remove(ACCESS_TOKEN_KEY).unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("session.json"));

        store.set(ACCESS_TOKEN_KEY, "tok123").unwrap();
        store.set("theme", "dark").unwrap();
        store.remove("theme").unwrap();

        assert_eq!(
            store.get(ACCESS_TOKEN_KEY).unwrap(),
            Some("tok123".to_string())
        );
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_errors_on_get_but_recovers_on_set() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let store = TokenStore::new(&path);
        assert!(store.get(ACCESS_TOKEN_KEY).is_err());

        store.set(ACCESS_TOKEN_KEY, "tok123").unwrap();
        assert_eq!(
            store.get(ACCESS_TOKEN_KEY).unwrap(),
            Some("tok123".to_string())
        );
    }
}
