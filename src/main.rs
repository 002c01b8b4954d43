use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use release_tag_version::cli::orchestration::{default_output_dir, run_infer, InferArgs};
use release_tag_version::config;
use release_tag_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-tag-version",
    about = "Infer a version code and name from the latest release git tag"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, default_value = ".", help = "Project directory to version")]
    project_dir: PathBuf,

    #[arg(
        short,
        long,
        required_unless_present = "version",
        help = "Active build type (e.g. release, debug)"
    )]
    build_type: Option<String>,

    #[arg(long, help = "Variant name used for the default output directory")]
    variant: Option<String>,

    #[arg(short, long, help = "Directory receiving code.txt and name.txt")]
    output_dir: Option<PathBuf>,

    #[arg(long, help = "Override version code and name, e.g. 1.2.3+4")]
    version_override: Option<String>,

    #[arg(long, help = "Override the version code")]
    version_code_override: Option<i32>,

    #[arg(long, help = "Override the version name")]
    version_name_override: Option<String>,

    #[arg(long, help = "Tag prefix, replacing the configured one")]
    prefix: Option<String>,

    #[arg(long, help = "Resolve and print without writing output files")]
    dry_run: bool,

    #[arg(long, help = "Report skipped tags and overrides")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // clap only lets --build-type be absent when --version is given
    let build_type = match args.build_type {
        Some(build_type) if !args.version => build_type,
        _ => {
            println!("release-tag-version {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };

    // Load configuration
    let config = match config::load_config(args.config.as_deref(), &args.project_dir) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let variant = args.variant.unwrap_or_else(|| build_type.clone());
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| default_output_dir(&args.project_dir, &variant));

    ui::display_status(&format!(
        "Inferring version for variant '{}' (build type '{}')",
        variant, build_type
    ));

    let infer_args = InferArgs {
        project_dir: args.project_dir,
        build_type,
        output_dir,
        version_override: args.version_override,
        version_code_override: args.version_code_override,
        version_name_override: args.version_name_override,
        prefix: args.prefix,
        dry_run: args.dry_run,
        verbose: args.verbose,
    };

    match run_infer(&infer_args, &config) {
        Ok(outcome) => {
            if outcome.files.is_some() {
                ui::display_success(&format!(
                    "Wrote version outputs to {}",
                    infer_args.output_dir.display()
                ));
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
