//! Domain logic - version model and tag selection, independent of git and I/O

pub mod tag;
pub mod version;

pub use tag::{TagMatch, TagSelector};
pub use version::{
    parse_candidate, version_code_of, version_name_of, VersionField, VersionInfo, VersionSource,
};
