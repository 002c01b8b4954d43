//! Version resolution: the precedence chain and build-type adjustment.
//!
//! Each field (code, name) walks the same ordered tiers and takes the first
//! value present:
//!
//! 1. `OverridingProperty` - the field-specific override, else the value
//!    derived from the combined version override
//! 2. `OverridingFile` - trimmed content of the override file
//! 3. `LatestGitTag` - greatest matching tag
//! 4. `Fallback` - configured defaults
//!
//! A tier may supply a name without a code (`1.2.3` has no build metadata);
//! the code then falls through on its own.

use std::collections::BTreeSet;

use semver::Version;

use crate::boundary::BoundaryWarning;
use crate::domain::{
    parse_candidate, version_code_of, TagMatch, TagSelector, VersionField, VersionInfo,
    VersionSource,
};
use crate::error::{ReleaseVersionError, Result};

/// All inputs of one resolution, materialized by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionConfig {
    pub code_inference_enabled: bool,
    pub name_inference_enabled: bool,
    /// Trimmed text of the override file, if it exists and was read
    pub override_file_contents: Option<String>,
    pub full_override: Option<String>,
    pub code_override: Option<i32>,
    pub name_override: Option<String>,
    pub prefix: String,
    pub tags: Vec<String>,
    pub build_type: String,
    pub release_build_types: BTreeSet<String>,
    pub fallback_code: Option<i32>,
    pub fallback_name: Option<String>,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        ResolutionConfig {
            code_inference_enabled: true,
            name_inference_enabled: true,
            override_file_contents: None,
            full_override: None,
            code_override: None,
            name_override: None,
            prefix: String::new(),
            tags: Vec::new(),
            build_type: "release".to_string(),
            release_build_types: BTreeSet::from(["release".to_string()]),
            fallback_code: Some(1),
            fallback_name: Some("1.0.0".to_string()),
        }
    }
}

/// A resolved value together with the tier it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: VersionSource,
}

/// Result of one resolution; a field is `None` when its inference is disabled.
///
/// Candidate codes are 32-bit; the resolved code is wider so the non-release
/// increment of `i32::MAX` is still representable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedVersion {
    pub code: Option<Resolved<i64>>,
    pub name: Option<Resolved<String>>,
}

impl ResolutionConfig {
    fn override_file_version(&self) -> Option<Version> {
        self.override_file_contents
            .as_deref()
            .and_then(|contents| parse_candidate(contents, &self.prefix))
    }

    fn full_override_version(&self) -> Option<Version> {
        self.full_override
            .as_deref()
            .and_then(|raw| parse_candidate(raw, &self.prefix))
    }

    fn latest_tag(&self) -> Option<Version> {
        TagSelector::new(self.prefix.as_str()).select_latest(&self.tags)
    }

    /// Candidate tiers in precedence order
    fn tiers(&self) -> Vec<VersionInfo> {
        let combined = self
            .full_override_version()
            .map(|version| VersionInfo::from_semver(&version, VersionSource::OverridingProperty));

        let property = VersionInfo {
            code: self
                .code_override
                .or_else(|| combined.as_ref().and_then(|info| info.code)),
            name: self
                .name_override
                .clone()
                .or_else(|| combined.and_then(|info| info.name)),
            code_source: VersionSource::OverridingProperty,
            name_source: VersionSource::OverridingProperty,
        };

        let file = self
            .override_file_version()
            .map(|version| VersionInfo::from_semver(&version, VersionSource::OverridingFile));

        let tag = self
            .latest_tag()
            .map(|version| VersionInfo::from_semver(&version, VersionSource::LatestGitTag));

        let fallback = VersionInfo {
            code: self.fallback_code,
            name: self.fallback_name.clone(),
            code_source: VersionSource::Fallback,
            name_source: VersionSource::Fallback,
        };

        [Some(property), file, tag, Some(fallback)]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Resolve version code and name from `config`.
///
/// Fails only when a field's inference is enabled and no tier supplies it.
pub fn resolve(config: &ResolutionConfig) -> Result<ResolvedVersion> {
    let tiers = config.tiers();

    let code = if config.code_inference_enabled {
        let (code, source) = tiers
            .iter()
            .find_map(VersionInfo::code_and_source)
            .ok_or_else(|| ReleaseVersionError::unresolved(VersionField::Code))?;
        let value =
            adjust_version_code(code, source, &config.build_type, &config.release_build_types);
        Some(Resolved { value, source })
    } else {
        None
    };

    let name = if config.name_inference_enabled {
        let (value, source) = tiers
            .iter()
            .find_map(VersionInfo::name_and_source)
            .ok_or_else(|| ReleaseVersionError::unresolved(VersionField::Name))?;
        Some(Resolved { value, source })
    } else {
        None
    };

    Ok(ResolvedVersion { code, name })
}

/// Apply the build-type adjustment to a resolved version code.
///
/// Release build types keep the code. Other build types increment it by one
/// only when it came from the latest git tag, so a build made after a release
/// always installs over that release.
pub fn adjust_version_code(
    code: i32,
    source: VersionSource,
    build_type: &str,
    release_build_types: &BTreeSet<String>,
) -> i64 {
    let code = i64::from(code);
    if release_build_types.contains(build_type) {
        return code;
    }

    match source {
        VersionSource::Fallback
        | VersionSource::NotInferred
        | VersionSource::OverridingFile
        | VersionSource::OverridingProperty => code,
        VersionSource::LatestGitTag => code + 1,
    }
}

/// List the malformed candidates that resolution silently skips.
///
/// Purely informational; `resolve` gives the same answer whether or not this
/// is called.
pub fn diagnose(config: &ResolutionConfig) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    let mut check_candidate = |origin: &str, raw: &str| match parse_candidate(raw, &config.prefix)
    {
        None => warnings.push(BoundaryWarning::UnparsableOverride {
            origin: origin.to_string(),
            value: raw.to_string(),
        }),
        Some(version) => {
            if !version.build.is_empty() && version_code_of(&version).is_none() {
                warnings.push(BoundaryWarning::NonNumericBuildMetadata {
                    origin: origin.to_string(),
                    metadata: version.build.to_string(),
                });
            }
        }
    };

    if let Some(raw) = config.full_override.as_deref() {
        check_candidate("version override", raw);
    }
    if let Some(raw) = config.override_file_contents.as_deref() {
        check_candidate("override file", raw);
    }

    let selector = TagSelector::new(config.prefix.as_str());
    for tag in &config.tags {
        if selector.classify(tag) == TagMatch::Unparsable {
            warnings.push(BoundaryWarning::UnparsableTag { tag: tag.clone() });
        }
    }

    if let Some(latest) = selector.select_latest(&config.tags) {
        if !latest.build.is_empty() && version_code_of(&latest).is_none() {
            warnings.push(BoundaryWarning::NonNumericBuildMetadata {
                origin: "latest git tag".to_string(),
                metadata: latest.build.to_string(),
            });
        }
    }

    warnings
}
