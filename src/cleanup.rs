use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Owns the on-disk policy file for the duration of one apply. The file is removed when the
/// guard is dropped, including on early `?` returns and unwinding.
#[derive(Debug)]
pub struct TempPolicyFile {
    path: PathBuf,
}

impl TempPolicyFile {
    /// Claims `path` before writing so a failed or partial write is still cleaned up.
    pub fn create(path: impl Into<PathBuf>, contents: &str) -> io::Result<Self> {
        let guard = TempPolicyFile { path: path.into() };
        fs::write(&guard.path, contents)?;
        debug!("Wrote CORS policy to {:?}", guard.path);
        Ok(guard)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempPolicyFile {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed temporary policy file {:?}", self.path),
            Err(e) => warn!("Failed to remove temporary policy file {:?}: {}", self.path, e),
        }
    }
}
