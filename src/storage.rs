// Manages the on-disk goal file.
//
// ⚠️ VERSION BUMP REQUIRED:
// Changes to the Goal struct serialization format require incrementing
// GOALS_FILE_VERSION below to prevent data corruption.
use crate::context::AppContext;
use crate::model::Goal;
use anyhow::Result;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Increment this when making breaking changes to the Goal struct
// serialization format.
// Version history:
// - v1: uid + name + deadline + completed
const GOALS_FILE_VERSION: u32 = 1;

/// Wrapper struct for the versioned goal file.
#[derive(Serialize, Deserialize)]
struct GoalsFileData {
    #[serde(default)]
    version: u32,
    goals: Vec<Goal>,
}

/// Local file storage for the goal list: one file, rewritten wholesale on
/// every mutation. Writes are atomic (tmp + rename) and guarded by a
/// sidecar file lock so two processes cannot interleave.
pub struct LocalStorage;

impl LocalStorage {
    /// Helper to get a sidecar lock file path.
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: write to a .tmp file then rename.
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Loads the goal list. A missing file yields an empty list.
    ///
    /// A file that fails to parse is set aside as `goals.json.corrupt`
    /// (preserving the user's data for manual recovery), a warning is
    /// logged, and the session starts empty. A version mismatch with no
    /// known migration is treated the same way.
    pub fn load(ctx: &dyn AppContext) -> Result<Vec<Goal>> {
        let Some(path) = ctx.get_goals_path() else {
            return Ok(vec![]);
        };
        if !path.exists() {
            return Ok(vec![]);
        }
        Self::with_lock(&path, || {
            let json = fs::read_to_string(&path)?;
            match serde_json::from_str::<GoalsFileData>(&json) {
                Ok(data) if data.version == GOALS_FILE_VERSION => Ok(data.goals),
                Ok(data) => {
                    log::warn!(
                        "Goal file {} has unknown version {}; starting empty",
                        path.display(),
                        data.version
                    );
                    Self::quarantine(&path);
                    Ok(vec![])
                }
                Err(e) => {
                    log::warn!(
                        "Goal file {} is unreadable ({}); starting empty",
                        path.display(),
                        e
                    );
                    Self::quarantine(&path);
                    Ok(vec![])
                }
            }
        })
    }

    /// Saves the entire goal list, overwriting the previous file.
    pub fn save(ctx: &dyn AppContext, goals: &[Goal]) -> Result<()> {
        let Some(path) = ctx.get_goals_path() else {
            return Err(anyhow::anyhow!("Could not determine goal file path"));
        };
        Self::with_lock(&path, || {
            let data = GoalsFileData {
                version: GOALS_FILE_VERSION,
                goals: goals.to_vec(),
            };
            let json = serde_json::to_string_pretty(&data)?;
            Self::atomic_write(&path, json)?;
            Ok(())
        })
    }

    /// Moves an unreadable goal file out of the way instead of destroying it.
    fn quarantine(path: &Path) {
        let mut backup = path.as_os_str().to_os_string();
        backup.push(".corrupt");
        if let Err(e) = fs::rename(path, PathBuf::from(&backup)) {
            log::warn!("Could not set aside corrupt goal file: {}", e);
        }
    }
}

#[cfg(test)]
mod storage_tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn missing_file_loads_empty() {
        let ctx = TestContext::new();
        let goals = LocalStorage::load(&ctx).unwrap();
        assert!(goals.is_empty());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let ctx = TestContext::new();
        let goals = vec![
            Goal::new("Write report", "2026-09-01"),
            Goal::new("Ship release", "2026-10-15"),
        ];
        LocalStorage::save(&ctx, &goals).unwrap();

        let loaded = LocalStorage::load(&ctx).unwrap();
        assert_eq!(loaded, goals);
    }

    #[test]
    fn corrupt_file_is_quarantined_and_loads_empty() {
        let ctx = TestContext::new();
        let path = ctx.get_goals_path().unwrap();
        fs::write(&path, "{ not json at all").unwrap();

        let goals = LocalStorage::load(&ctx).unwrap();
        assert!(goals.is_empty());

        // Original bytes survive in the .corrupt sidecar.
        let mut backup = path.as_os_str().to_os_string();
        backup.push(".corrupt");
        let preserved = fs::read_to_string(PathBuf::from(backup)).unwrap();
        assert_eq!(preserved, "{ not json at all");
        assert!(!path.exists());

        // Saving afterwards writes a fresh file.
        LocalStorage::save(&ctx, &[Goal::new("fresh", "2026-01-01")]).unwrap();
        assert_eq!(LocalStorage::load(&ctx).unwrap().len(), 1);
    }

    #[test]
    fn unknown_version_is_quarantined() {
        let ctx = TestContext::new();
        let path = ctx.get_goals_path().unwrap();
        fs::write(&path, r#"{ "version": 99, "goals": [] }"#).unwrap();

        let goals = LocalStorage::load(&ctx).unwrap();
        assert!(goals.is_empty());
        assert!(!path.exists());
    }
}
