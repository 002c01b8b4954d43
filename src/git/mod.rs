//! Git tag retrieval
//!
//! Resolution only needs tag names, so the git layer is reduced to the
//! [TagSource] trait with two implementations:
//!
//! - [repository::Git2Repository]: reads `refs/tags` through the `git2` crate
//! - [mock::MockRepository]: a fixed tag list for testing
//!
//! A missing repository is not an error for versioning purposes; use
//! [collect_tags] to get an empty tag list plus a warning in that case.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::error::Result;

/// Anything that can list tag names
///
/// ## Error Handling
///
/// Implementations map underlying errors (like `git2::Error`) into
/// [crate::error::ReleaseVersionError].
pub trait TagSource {
    /// Get all tag names, in no particular order
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names without the `refs/tags/` prefix
    /// * `Err` - If the tag references cannot be read
    fn list_tags(&self) -> Result<Vec<String>>;
}

/// Tags of the repository containing `project_dir`.
///
/// Returns an empty list and a [BoundaryWarning::NoRepository] when no
/// repository can be discovered, and propagates errors only for a repository
/// that exists but cannot be read.
pub fn collect_tags(project_dir: &Path) -> Result<(Vec<String>, Option<BoundaryWarning>)> {
    match Git2Repository::open(project_dir) {
        Ok(repo) => Ok((repo.list_tags()?, None)),
        Err(e) => Ok((
            Vec::new(),
            Some(BoundaryWarning::NoRepository {
                path: project_dir.display().to_string(),
                reason: e.to_string(),
            }),
        )),
    }
}
