//! Main workflow orchestration logic
//!
//! Gathers the inputs of one resolution (tags, override file, overrides from
//! the command line and the config file), resolves, reports, and persists.
//! Kept apart from `main.rs` so it runs without clap.

use std::fs;
use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::config::ReleaseTagVersionConfig;
use crate::domain::VersionField;
use crate::error::Result;
use crate::git::{collect_tags, TagSource};
use crate::output::{write_outputs, OutputFiles};
use crate::resolver::{diagnose, resolve, ResolutionConfig, ResolvedVersion};
use crate::ui;

/// Arguments for the infer workflow
///
/// Mirrors the CLI Args in a form that can be built programmatically.
/// Overrides given here win over the ones in the config file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InferArgs {
    /// Directory of the project being versioned
    pub project_dir: PathBuf,

    /// Active build type, e.g. `release` or `debug`
    pub build_type: String,

    /// Where `code.txt` and `name.txt` are written
    pub output_dir: PathBuf,

    pub version_override: Option<String>,
    pub version_code_override: Option<i32>,
    pub version_name_override: Option<String>,

    /// Replaces the configured tag prefix
    pub prefix: Option<String>,

    /// Resolve and report without writing outputs
    pub dry_run: bool,

    /// Also print the candidates that were skipped
    pub verbose: bool,
}

/// Result of a successful infer workflow
#[derive(Debug, Clone, PartialEq)]
pub struct InferOutcome {
    pub resolved: ResolvedVersion,

    /// Output files, `None` on a dry run
    pub files: Option<OutputFiles>,

    /// Non-fatal conditions met along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Default per-variant output directory inside `project_dir`
pub fn default_output_dir(project_dir: &Path, variant: &str) -> PathBuf {
    project_dir
        .join("build")
        .join("generated")
        .join("release-tag-version")
        .join(variant)
}

/// Read the override file, trimmed.
///
/// A missing file is simply absent; an unreadable one is absent plus a warning.
pub fn read_override_file(path: &Path) -> (Option<String>, Option<BoundaryWarning>) {
    if !path.is_file() {
        return (None, None);
    }

    match fs::read_to_string(path) {
        Ok(text) => (Some(text.trim().to_string()), None),
        Err(e) => (
            None,
            Some(BoundaryWarning::OverrideFileUnreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            }),
        ),
    }
}

/// Build the resolution inputs from arguments, configuration, and gathered sources
pub fn build_resolution_config(
    args: &InferArgs,
    config: &ReleaseTagVersionConfig,
    tags: Vec<String>,
    override_file_contents: Option<String>,
) -> ResolutionConfig {
    ResolutionConfig {
        code_inference_enabled: config.version_code_is_inferred,
        name_inference_enabled: config.version_name_is_inferred,
        override_file_contents,
        full_override: args
            .version_override
            .clone()
            .or_else(|| config.version_override.clone()),
        code_override: args.version_code_override.or(config.version_code_override),
        name_override: args
            .version_name_override
            .clone()
            .or_else(|| config.version_name_override.clone()),
        prefix: args
            .prefix
            .clone()
            .unwrap_or_else(|| config.version_prefix.clone()),
        tags,
        build_type: args.build_type.clone(),
        release_build_types: config.release_build_types.clone(),
        fallback_code: Some(config.fallback_version_code),
        fallback_name: Some(config.fallback_version_name.clone()),
    }
}

/// Main infer workflow, reading tags from the project's git repository
///
/// # Returns
///
/// The resolved values, or the fatal error when a field cannot be resolved
pub fn run_infer(args: &InferArgs, config: &ReleaseTagVersionConfig) -> Result<InferOutcome> {
    let (tags, warning) = collect_tags(&args.project_dir)?;
    run_with_tags(args, config, tags, warning.into_iter().collect())
}

/// Infer workflow with an explicit tag source
pub fn run_infer_with_source(
    args: &InferArgs,
    config: &ReleaseTagVersionConfig,
    source: &dyn TagSource,
) -> Result<InferOutcome> {
    run_with_tags(args, config, source.list_tags()?, Vec::new())
}

fn run_with_tags(
    args: &InferArgs,
    config: &ReleaseTagVersionConfig,
    tags: Vec<String>,
    mut warnings: Vec<BoundaryWarning>,
) -> Result<InferOutcome> {
    let override_path = args.project_dir.join(&config.version_override_file);
    let (override_file_contents, file_warning) = read_override_file(&override_path);
    warnings.extend(file_warning);

    let resolution = build_resolution_config(args, config, tags, override_file_contents);
    warnings.extend(diagnose(&resolution));

    if args.verbose {
        for warning in &warnings {
            ui::display_boundary_warning(warning);
        }
    }

    let resolved = resolve(&resolution)?;

    if let Some(code) = &resolved.code {
        ui::display_resolved(VersionField::Code, &code.value, code.source);
    }
    if let Some(name) = &resolved.name {
        ui::display_resolved(VersionField::Name, &name.value, name.source);
    }

    let files = if args.dry_run {
        None
    } else {
        Some(write_outputs(&args.output_dir, &resolved)?)
    };

    Ok(InferOutcome {
        resolved,
        files,
        warnings,
    })
}
