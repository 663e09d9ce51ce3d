// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::Deref,
          path::{Path, PathBuf},
          sync::atomic::{AtomicUsize, Ordering},
          time::{SystemTime, UNIX_EPOCH}};

use miette::IntoDiagnostic;

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped. Tests use this to set up throwaway git repositories
/// and log files without changing the current working directory of the process.
///
/// # Errors
///
/// Returns an error if:
/// - The temp directory cannot be created due to insufficient permissions
/// - I/O errors occur during directory creation
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|it| it.as_nanos())
        .unwrap_or_default();
    let count = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = format!("simple_git_{pid}_{nanos}_{count}", pid = std::process::id());

    let new_temp_dir = std::env::temp_dir().join(name);
    std::fs::create_dir_all(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

/// Automatically delete the temporary directory when the [`TempDir`] struct is dropped.
impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_removed_on_drop() {
        let temp_dir = try_create_temp_dir().unwrap();
        let path = temp_dir.inner.clone();
        assert!(path.is_dir());

        let other = try_create_temp_dir().unwrap();
        assert_ne!(other.inner, path);

        drop(temp_dir);
        assert!(!path.exists());
    }
}
