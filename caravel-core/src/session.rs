//! Session state: the navigation cursor

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::entry::{sort_entries, DirEntry, EntryKind};
use crate::error::{CaravelError, CaravelResult};
use crate::path;

/// The session's current-directory cursor.
///
/// Only the dispatcher mutates it; operations take a snapshot of the
/// current directory when they start. The cursor always points at a
/// directory that existed at last verification: a failed navigation
/// leaves it untouched.
#[derive(Debug)]
pub struct Session {
    current_dir: PathBuf,
}

impl Session {
    /// Open a session rooted at `start`, which must be an existing,
    /// reachable directory.
    pub async fn open(start: impl Into<PathBuf>) -> CaravelResult<Self> {
        let start = start.into();
        let meta = fs::metadata(&start)
            .await
            .map_err(|_| CaravelError::NotADirectory(start.display().to_string()))?;
        if !meta.is_dir() {
            return Err(CaravelError::NotADirectory(start.display().to_string()));
        }
        Ok(Self { current_dir: start })
    }

    /// Snapshot of the current directory.
    pub fn current(&self) -> &Path {
        &self.current_dir
    }

    /// Move the cursor to its parent. At the filesystem root this is a
    /// no-op: the root has no parent.
    pub fn navigate_up(&mut self) {
        self.current_dir.pop();
    }

    /// Resolve `token` against the cursor and move there if the target
    /// is an existing directory. On failure the cursor is unchanged.
    pub async fn navigate_to(&mut self, token: &str) -> CaravelResult<()> {
        let target = path::resolve(token, &self.current_dir)?;
        match fs::metadata(&target).await {
            Ok(meta) if meta.is_dir() => {
                tracing::debug!(cursor = %target.display(), "cursor moved");
                self.current_dir = target;
                Ok(())
            }
            _ => Err(CaravelError::NotADirectory(target.display().to_string())),
        }
    }

    /// Enumerate the direct children of the current directory, sorted
    /// directories-first then alphabetically within each group.
    pub async fn list(&self) -> CaravelResult<Vec<DirEntry>> {
        let mut read_dir = fs::read_dir(&self.current_dir).await?;
        let mut entries = Vec::new();
        while let Some(entry) = read_dir.next_entry().await? {
            let file_type = entry.file_type().await?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        sort_entries(&mut entries);
        Ok(entries)
    }
}
