//! Transient artifact naming and bookkeeping

use pdftoogg_core::guard::{check_path, Confirm};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::ToolsConfig;
use crate::error::ConvertError;

/// Where the pipeline puts its intermediate files.
///
/// With the default config these are `./.pdfTemp.txt` and
/// `./.pdfTemp0.wav`, `./.pdfTemp1.wav`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientPaths {
    dir: PathBuf,
    stem: String,
}

impl TransientPaths {
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
        }
    }

    pub fn from_config(config: &ToolsConfig) -> Self {
        Self::new(&config.work_dir, &config.temp_stem)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Extracted text
    pub fn text(&self) -> PathBuf {
        self.dir.join(format!("{}.txt", self.stem))
    }

    /// Synthesized audio of segment `index`
    pub fn segment(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}{}.wav", self.stem, index))
    }
}

/// Asks before every write and remembers what the run has created.
///
/// A path is *claimed* right before a tool writes it and *released* once the
/// next stage has consumed it. Whatever is still claimed when the run ends
/// is removed by [`ArtifactGuard::cleanup`], together with any directory the
/// run had to create. Files the user declined to overwrite are never
/// claimed, so they are never removed.
pub struct ArtifactGuard<'a> {
    confirm: &'a mut dyn Confirm,
    claimed: Vec<PathBuf>,
    /// Deepest first
    created_dirs: Vec<PathBuf>,
}

impl<'a> ArtifactGuard<'a> {
    pub fn new(confirm: &'a mut dyn Confirm) -> Self {
        Self {
            confirm,
            claimed: Vec::new(),
            created_dirs: Vec::new(),
        }
    }

    /// Create `dir` and its missing parents, remembering which ones this
    /// run created.
    pub fn create_dir(&mut self, dir: &Path) -> Result<(), ConvertError> {
        let missing: Vec<PathBuf> = dir
            .ancestors()
            .filter(|d| !d.as_os_str().is_empty())
            .take_while(|d| !d.exists())
            .map(Path::to_path_buf)
            .collect();
        std::fs::create_dir_all(dir)?;
        self.created_dirs.extend(missing);
        Ok(())
    }

    /// Make sure `path` may be written, asking if something is already there.
    pub fn check(&mut self, path: &Path) -> Result<(), ConvertError> {
        let decision = check_path(path, &mut *self.confirm)?;
        if decision.may_write() {
            Ok(())
        } else {
            Err(ConvertError::Declined(path.to_path_buf()))
        }
    }

    /// [`check`](Self::check) `path`, then track it as a transient artifact.
    pub fn claim(&mut self, path: &Path) -> Result<(), ConvertError> {
        self.check(path)?;
        self.track(path);
        Ok(())
    }

    /// Track an already checked `path` so a failed run removes it.
    pub fn track(&mut self, path: &Path) {
        if !self.claimed.iter().any(|p| p == path) {
            self.claimed.push(path.to_path_buf());
        }
    }

    /// Stop tracking `path` and leave it in place.
    pub fn keep(&mut self, path: &Path) {
        self.claimed.retain(|p| p != path);
    }

    /// Delete a consumed artifact. Failing to delete is logged, not fatal.
    pub fn release(&mut self, path: &Path) {
        self.claimed.retain(|p| p != path);
        remove_quietly(path);
    }

    pub fn claimed(&self) -> &[PathBuf] {
        &self.claimed
    }

    /// Best-effort removal of everything still claimed, then of the
    /// directories this run created. A directory something else was put
    /// into stays.
    pub fn cleanup(&mut self) {
        for path in self.claimed.drain(..) {
            if path.exists() {
                debug!("Removing leftover {}", path.display());
                remove_quietly(&path);
            }
        }
        for dir in self.created_dirs.drain(..) {
            if let Err(e) = std::fs::remove_dir(&dir) {
                debug!("Keeping directory {}: {}", dir.display(), e);
                break;
            }
        }
    }
}

fn remove_quietly(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        warn!("Failed to remove temporary file {}: {}", path.display(), e);
    }
}
