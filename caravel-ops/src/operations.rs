//! File operation catalog
//!
//! Every operation resolves its paths against a snapshot of the
//! current directory before touching the filesystem, then leans on the
//! transfer pipeline for anything that streams.

use std::path::{Path, PathBuf};

use tokio::fs::{self, File, OpenOptions};
use tokio::io::{stdout, AsyncReadExt, AsyncWriteExt};

use caravel_core::{path, CaravelError, CaravelResult};

use crate::transfer::{self, CHUNK_SIZE};
use crate::transform::Transform;

/// Stream a file's contents to stdout, chunk by chunk.
pub async fn read_print(current_dir: &Path, token: &str) -> CaravelResult<()> {
    let source = path::resolve(token, current_dir)?;
    let mut file = File::open(&source).await?;
    let mut out = stdout();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n]).await?;
    }
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}

/// Create a new empty file. Never truncates: an existing file at the
/// target path is a failure.
pub async fn create_file(current_dir: &Path, token: &str) -> CaravelResult<()> {
    let target = path::resolve(token, current_dir)?;
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => {
                CaravelError::AlreadyExists(target.display().to_string())
            }
            _ => CaravelError::Io(e),
        })?;
    Ok(())
}

/// Atomic filesystem rename.
pub async fn rename_entry(current_dir: &Path, from: &str, to: &str) -> CaravelResult<()> {
    let from = path::resolve(from, current_dir)?;
    let to = path::resolve(to, current_dir)?;
    fs::rename(&from, &to).await?;
    Ok(())
}

/// Stream `source` into `dest_dir` under the source's base name.
pub async fn copy_file(current_dir: &Path, source: &str, dest_dir: &str) -> CaravelResult<()> {
    let source = path::resolve(source, current_dir)?;
    let dest_dir = path::resolve(dest_dir, current_dir)?;
    let target = copy_target(&source, &dest_dir)?;
    transfer::run(&source, Some(target.as_path()), Transform::None).await?;
    Ok(())
}

/// Copy, then delete the source, but only once the write completed.
/// A failed write leaves the source untouched; a failed delete is an
/// overall failure even though the copy landed.
pub async fn move_file(current_dir: &Path, source: &str, dest_dir: &str) -> CaravelResult<()> {
    let source = path::resolve(source, current_dir)?;
    let dest_dir = path::resolve(dest_dir, current_dir)?;
    let target = copy_target(&source, &dest_dir)?;
    transfer::run(&source, Some(target.as_path()), Transform::None).await?;
    fs::remove_file(&source).await?;
    Ok(())
}

/// Remove a file.
pub async fn delete_entry(current_dir: &Path, token: &str) -> CaravelResult<()> {
    let target = path::resolve(token, current_dir)?;
    fs::remove_file(&target).await?;
    Ok(())
}

/// Stream a file through the hash stage; returns the lowercase hex
/// digest of its contents.
pub async fn hash_file(current_dir: &Path, token: &str) -> CaravelResult<String> {
    let source = path::resolve(token, current_dir)?;
    let outcome = transfer::run(&source, None, Transform::Hash).await?;
    Ok(outcome.digest.unwrap_or_default())
}

/// Compress `source` into `dest`.
pub async fn compress_file(current_dir: &Path, source: &str, dest: &str) -> CaravelResult<()> {
    let source = path::resolve(source, current_dir)?;
    let dest = path::resolve(dest, current_dir)?;
    transfer::run(&source, Some(dest.as_path()), Transform::Compress).await?;
    Ok(())
}

/// Decompress `source` into `dest`.
pub async fn decompress_file(current_dir: &Path, source: &str, dest: &str) -> CaravelResult<()> {
    let source = path::resolve(source, current_dir)?;
    let dest = path::resolve(dest, current_dir)?;
    transfer::run(&source, Some(dest.as_path()), Transform::Decompress).await?;
    Ok(())
}

fn copy_target(source: &Path, dest_dir: &Path) -> CaravelResult<PathBuf> {
    let name = source
        .file_name()
        .ok_or_else(|| CaravelError::NotFound(source.display().to_string()))?;
    Ok(dest_dir.join(name))
}
