//! File-based snapshot storage.

use std::fs;
use std::path::{Path, PathBuf};

use horror_core::circuit::CircuitSnapshot;

use super::{RepositoryError, Result, SnapshotRepository};

/// Writes `snapshot` as pretty JSON through a temp file and an atomic rename.
pub fn write_snapshot(path: &Path, snapshot: &CircuitSnapshot) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(snapshot)?;
    fs::write(&temp_path, bytes)?;
    fs::rename(&temp_path, path)?;

    tracing::debug!(path = %path.display(), components = snapshot.components.len(), "saved circuit snapshot");
    Ok(())
}

/// Reads a snapshot written by [`write_snapshot`].
pub fn read_snapshot(path: &Path) -> Result<CircuitSnapshot> {
    let bytes = fs::read(path)?;
    let snapshot: CircuitSnapshot = serde_json::from_slice(&bytes)?;

    tracing::debug!(path = %path.display(), components = snapshot.components.len(), "loaded circuit snapshot");
    Ok(snapshot)
}

/// File-based implementation of [`SnapshotRepository`].
///
/// Stores one `circuit_{key}.json` file per slot.
pub struct FileSnapshotRepository {
    base_dir: PathBuf,
}

impl FileSnapshotRepository {
    /// Create a new file-based repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn snapshot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(RepositoryError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(format!("circuit_{key}.json")))
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn save(&self, key: &str, snapshot: &CircuitSnapshot) -> Result<()> {
        write_snapshot(&self.snapshot_path(key)?, snapshot)
    }

    fn load(&self, key: &str) -> Result<Option<CircuitSnapshot>> {
        let path = self.snapshot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        read_snapshot(&path).map(Some)
    }

    fn exists(&self, key: &str) -> bool {
        self.snapshot_path(key).is_ok_and(|path| path.exists())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.snapshot_path(key)?;
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!(key, "deleted circuit snapshot");
        }
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if let Some(key) = path
                .file_name()
                .and_then(|s| s.to_str())
                .and_then(|s| s.strip_prefix("circuit_"))
                .and_then(|s| s.strip_suffix(".json"))
            {
                keys.push(key.to_string());
            }
        }

        keys.sort_unstable();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use horror_core::circuit::ComponentSnapshot;

    use super::*;

    fn sample() -> CircuitSnapshot {
        let mut snapshot = CircuitSnapshot::default();
        snapshot.components.insert(
            CircuitSnapshot::key(0),
            ComponentSnapshot {
                rotation: 90,
                directions: vec!["03".to_string()],
            },
        );
        snapshot
    }

    #[test]
    fn saves_and_lists_slots() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSnapshotRepository::new(dir.path()).unwrap();

        repo.save("fuse_box", &sample()).unwrap();
        repo.save("attic", &sample()).unwrap();

        assert!(repo.exists("fuse_box"));
        assert_eq!(repo.load("fuse_box").unwrap(), Some(sample()));
        assert_eq!(repo.list_keys().unwrap(), vec!["attic", "fuse_box"]);

        repo.delete("attic").unwrap();
        assert!(!repo.exists("attic"));
        assert_eq!(repo.load("attic").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSnapshotRepository::new(dir.path()).unwrap();

        assert!(matches!(
            repo.save("../escape", &sample()),
            Err(RepositoryError::InvalidKey(_))
        ));
        assert!(!repo.exists("../escape"));
    }
}
