//! Repository bootstrap and discovery
//!
//! A ding repository is any directory containing a `.ding/` marker, which
//! in turn holds the `objects/` storage directory. Discovery walks from a
//! starting directory up through its ancestors until it finds the marker.

use crate::{Error, Result, DING_DIR, OBJECTS_DIR};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// A resolved repository, read-only for the duration of a run
#[derive(Clone, Debug)]
pub struct Repository {
    root: PathBuf,
    storage: PathBuf,
}

/// What [`Repository::init`] found at the target path.
///
/// Bootstrap is idempotent and reports rather than fails: an already
/// initialized repository or a bad target path is an outcome, not an error.
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// A fresh marker directory was created at the contained path
    Initialized(PathBuf),
    AlreadyInitialized,
    MissingPath,
    NotADirectory,
}

impl Repository {
    /// Initialize a repository at `path`: create the `.ding/` marker and
    /// its `objects/` subdirectory.
    ///
    /// Only actual filesystem failures (permissions and the like) surface
    /// as errors; everything else is an [`InitOutcome`].
    pub fn init(path: impl AsRef<Path>) -> Result<InitOutcome> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(InitOutcome::MissingPath);
        }
        if !path.is_dir() {
            return Ok(InitOutcome::NotADirectory);
        }

        let root = path.canonicalize()?;
        let marker = root.join(DING_DIR);
        if marker.exists() {
            return Ok(InitOutcome::AlreadyInitialized);
        }

        fs::create_dir(&marker)?;
        fs::create_dir(marker.join(OBJECTS_DIR))?;
        info!("initialized ding repository at {}", marker.display());
        Ok(InitOutcome::Initialized(marker))
    }

    /// Resolve the repository enclosing `start_dir` by walking up the
    /// ancestor chain looking for the `.ding/` marker.
    ///
    /// Performs no writes. Fails with [`Error::RepositoryNotFound`] once
    /// the filesystem root is reached without finding a marker.
    pub fn discover(start_dir: impl AsRef<Path>) -> Result<Self> {
        let mut dir = start_dir.as_ref().canonicalize()?;

        loop {
            if dir.join(DING_DIR).is_dir() {
                debug!("resolved repository root at {}", dir.display());
                let storage = dir.join(DING_DIR).join(OBJECTS_DIR);
                return Ok(Repository { root: dir, storage });
            }
            if !dir.pop() {
                return Err(Error::RepositoryNotFound);
            }
        }
    }

    /// The working-tree root, the directory containing the marker
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The object storage directory, `<root>/.ding/objects`
    pub fn storage(&self) -> &Path {
        &self.storage
    }
}
