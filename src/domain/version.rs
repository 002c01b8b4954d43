use semver::{BuildMetadata, Version};
use std::fmt;

/// Where a resolved version code or name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionSource {
    Fallback,
    LatestGitTag,
    NotInferred,
    OverridingFile,
    OverridingProperty,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionSource::Fallback => "Fallback",
            VersionSource::LatestGitTag => "LatestGitTag",
            VersionSource::NotInferred => "NotInferred",
            VersionSource::OverridingFile => "OverridingFile",
            VersionSource::OverridingProperty => "OverridingProperty",
        };
        f.write_str(name)
    }
}

/// The two independently resolved outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionField {
    Code,
    Name,
}

impl fmt::Display for VersionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionField::Code => f.write_str("versionCode"),
            VersionField::Name => f.write_str("versionName"),
        }
    }
}

/// One candidate tier: a code and a name, each tagged with its own source.
///
/// Either half may be missing, in which case resolution of that field falls
/// through to the next tier while the other half can still win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub code: Option<i32>,
    pub name: Option<String>,
    pub code_source: VersionSource,
    pub name_source: VersionSource,
}

impl VersionInfo {
    /// Derive code and name from a parsed semantic version.
    ///
    /// The code is the build metadata read as an integer (absent when there is
    /// no metadata or it is not numeric); the name is the version without its
    /// `+metadata` suffix.
    pub fn from_semver(version: &Version, source: VersionSource) -> Self {
        VersionInfo {
            code: version_code_of(version),
            name: Some(version_name_of(version)),
            code_source: source,
            name_source: source,
        }
    }

    pub fn code_and_source(&self) -> Option<(i32, VersionSource)> {
        self.code.map(|code| (code, self.code_source))
    }

    pub fn name_and_source(&self) -> Option<(String, VersionSource)> {
        self.name.clone().map(|name| (name, self.name_source))
    }
}

/// Parse a candidate version string after removing `prefix`.
///
/// The prefix is only removed when present; a string that does not start with
/// it is parsed as-is. Anything that is not strict SemVer yields `None`.
pub fn parse_candidate(raw: &str, prefix: &str) -> Option<Version> {
    let stripped = raw.strip_prefix(prefix).unwrap_or(raw);
    Version::parse(stripped).ok()
}

/// Build metadata of `version` as a version code, if it is a 32-bit integer
pub fn version_code_of(version: &Version) -> Option<i32> {
    version.build.as_str().parse::<i32>().ok()
}

/// `version` rendered without its build metadata
pub fn version_name_of(version: &Version) -> String {
    let mut name = version.clone();
    name.build = BuildMetadata::EMPTY;
    name.to_string()
}
