//! Filesystem layout for archived homeworks.
//!
//! Saved files live under `<base>/homeworks/<subject>/<theme>.<ext>`. The
//! `homeworks` root is created once at manager construction; subject folders
//! are created on demand. Both creations are idempotent. When the computed
//! filename is already taken, the candidate is renamed exactly once to
//! `<theme>_copy.<ext>` -- a further collision on the `_copy` name silently
//! overwrites it, which callers relying on repeated runs should be aware of.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hwfetch::fetch::DownloadedFile;
//! use hwfetch::storage::FolderManager;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = FolderManager::new(".").await?;
//! let file = DownloadedFile { extension: "pdf".into(), content: b"%PDF".to_vec() };
//!
//! let path = manager.save("Math", "Lab1", &file).await?;
//! assert!(path.ends_with("homeworks/Math/Lab1.pdf"));
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::fetch::DownloadedFile;

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Name of the root folder all homeworks are archived under.
pub const HOMEWORKS_DIR: &str = "homeworks";

/// Suffix appended to the theme when the computed filename is taken.
const COPY_SUFFIX: &str = "_copy";

/// Writes downloaded homework files into the archive layout.
///
/// The manager keeps no state across saves beyond the root folder's
/// existence; each [`save`](FolderManager::save) call is independent.
#[derive(Debug, Clone)]
pub struct FolderManager {
    root: PathBuf,
}

impl FolderManager {
    /// Creates a manager rooted at `<base_dir>/homeworks`.
    ///
    /// The root folder is created here, idempotently, not per save call.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let root = base_dir.as_ref().join(HOMEWORKS_DIR);
        debug!("Ensuring archive root {:?}", root);
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Gets the archive root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Saves a downloaded file under its subject folder.
    ///
    /// Ensures `<root>/<subject>` exists, resolves the filename collision
    /// once, then writes the bytes, truncating/creating the file. Returns the
    /// path the file was written to.
    pub async fn save(
        &self,
        subject: &str,
        theme: &str,
        file: &DownloadedFile,
    ) -> Result<PathBuf> {
        let subject_dir = self.root.join(subject);
        fs::create_dir_all(&subject_dir).await?;

        let mut filename = format!("{theme}.{}", file.extension);
        if subject_dir.join(&filename).exists() {
            filename = format!("{theme}{COPY_SUFFIX}.{}", file.extension);
        }

        let path = subject_dir.join(filename);
        debug!("Writing {} byte(s) to {:?}", file.content.len(), path);
        fs::write(&path, &file.content).await?;

        Ok(path)
    }
}
