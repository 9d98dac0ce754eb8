use std::fs;
use std::path::PathBuf;

use underwrite_core::assumptions::{slugify, ScenarioRecord};
use underwrite_core::{UnderwriteError, UnderwriteResult};

/// File-backed scenario store: one pretty-printed JSON document per
/// scenario, keyed by slug id. Lookups accept either the original name
/// or the slug, since both reduce to the same file name.
pub struct ScenarioStore {
    dir: PathBuf,
}

impl ScenarioStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn save(&self, record: &ScenarioRecord) -> UnderwriteResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            UnderwriteError::Io(format!("Failed to create '{}': {}", self.dir.display(), e))
        })?;
        let path = self.record_path(&record.id);
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)
            .map_err(|e| UnderwriteError::Io(format!("Failed to write '{}': {}", path.display(), e)))?;
        Ok(path)
    }

    /// All parseable scenario documents, ordered by id. Files the store
    /// does not recognize are skipped, not errors; the directory may
    /// hold other things.
    pub fn list(&self) -> UnderwriteResult<Vec<ScenarioRecord>> {
        let mut records = Vec::new();
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Ok(records),
        };
        for entry in entries {
            let entry = entry.map_err(|e| UnderwriteError::Io(e.to_string()))?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Ok(contents) = fs::read_to_string(&path) {
                if let Ok(record) = serde_json::from_str::<ScenarioRecord>(&contents) {
                    records.push(record);
                }
            }
        }
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    pub fn load(&self, name_or_id: &str) -> UnderwriteResult<ScenarioRecord> {
        let path = self.record_path(&slugify(name_or_id));
        let contents = fs::read_to_string(&path)
            .map_err(|_| UnderwriteError::ScenarioNotFound(name_or_id.to_string()))?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn delete(&self, name_or_id: &str) -> UnderwriteResult<PathBuf> {
        let path = self.record_path(&slugify(name_or_id));
        if !path.is_file() {
            return Err(UnderwriteError::ScenarioNotFound(name_or_id.to_string()));
        }
        fs::remove_file(&path).map_err(|e| {
            UnderwriteError::Io(format!("Failed to delete '{}': {}", path.display(), e))
        })?;
        Ok(path)
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use underwrite_core::assumptions::load_baseline;

    static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_dir() -> PathBuf {
        let unique = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("uw-store-{}-{}", std::process::id(), unique))
    }

    #[test]
    fn test_save_load_delete_round_trip() {
        let dir = scratch_dir();
        let store = ScenarioStore::new(&dir);

        let record = ScenarioRecord::new("Main St 8-Plex", load_baseline());
        let path = store.save(&record).unwrap();
        assert!(path.ends_with("main-st-8-plex.json"));

        // Lookup works by name and by slug
        assert_eq!(store.load("Main St 8-Plex").unwrap(), record);
        assert_eq!(store.load("main-st-8-plex").unwrap(), record);

        store.delete("main-st-8-plex").unwrap();
        assert!(matches!(
            store.load("main-st-8-plex"),
            Err(UnderwriteError::ScenarioNotFound(_))
        ));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_sorts_and_skips_foreign_files() {
        let dir = scratch_dir();
        let store = ScenarioStore::new(&dir);

        store.save(&ScenarioRecord::new("B Deal", load_baseline())).unwrap();
        store.save(&ScenarioRecord::new("A Deal", load_baseline())).unwrap();
        fs::write(dir.join("notes.json"), "not a scenario").unwrap();
        fs::write(dir.join("readme.txt"), "ignored").unwrap();

        let records = store.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a-deal");
        assert_eq!(records[1].id, "b-deal");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_without_directory_is_empty() {
        let store = ScenarioStore::new(scratch_dir().join("never-created"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_scenario() {
        let dir = scratch_dir();
        let store = ScenarioStore::new(&dir);
        assert!(matches!(
            store.delete("ghost"),
            Err(UnderwriteError::ScenarioNotFound(_))
        ));
    }
}
