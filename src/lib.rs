pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;
pub mod resolver;
pub mod ui;

pub use error::{ReleaseVersionError, Result};
pub use resolver::{adjust_version_code, resolve, ResolutionConfig, Resolved, ResolvedVersion};
