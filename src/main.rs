mod cli;
mod config;

use bom_flat::adapters::outbound::console::StderrProgressReporter;
use bom_flat::adapters::outbound::filesystem::{discover_bom_files, FileSystemReader};
use bom_flat::adapters::outbound::spreadsheet::XlsxSheetWriter;
use bom_flat::application::dto::{BomRequest, DEFAULT_IGNORE_FILE};
use bom_flat::application::use_cases::GenerateWorkbookUseCase;
use bom_flat::bom_structure::policies::PartNumberValidator;
use bom_flat::bom_structure::services::TreeRenderer;
use bom_flat::ports::outbound::ProgressReporter;
use bom_flat::shared::error::{BomError, ExitCode};
use bom_flat::shared::Result;
use cli::Args;
use config::ConfigFile;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Settings after merging the config file with command-line arguments.
/// Command-line values win.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    ignore_file: PathBuf,
    output_dir: Option<PathBuf>,
    invalid_patterns: Option<Vec<String>>,
    verbose: bool,
}

impl Settings {
    fn merge(args: &Args, config: ConfigFile) -> Self {
        let invalid_patterns = if args.invalid_patterns.is_empty() {
            config.invalid_part_patterns
        } else {
            Some(args.invalid_patterns.clone())
        };

        Self {
            ignore_file: args
                .ignore_file
                .clone()
                .or(config.ignore_file.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IGNORE_FILE)),
            output_dir: args
                .output_dir
                .clone()
                .or(config.output_dir.map(PathBuf::from)),
            invalid_patterns,
            verbose: args.verbose || config.verbose.unwrap_or(false),
        }
    }

    fn validator(&self) -> Result<PartNumberValidator> {
        match &self.invalid_patterns {
            Some(patterns) => PartNumberValidator::new(patterns),
            None => Ok(PartNumberValidator::default()),
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };
    let settings = Settings::merge(&args, config);
    let validator = settings.validator()?;
    if let Some(dir) = &settings.output_dir {
        validate_output_dir(dir)?;
    }

    let files = if args.files.is_empty() {
        discover_bom_files(Path::new("."), &settings.ignore_file)?
    } else {
        args.files.clone()
    };
    if files.is_empty() {
        println!("There are no valid files.");
        return Ok(ExitCode::Success);
    }

    let progress_reporter = StderrProgressReporter::new();
    let use_case = GenerateWorkbookUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        XlsxSheetWriter::new(),
        &progress_reporter,
        validator,
    );

    let total = files.len();
    let mut failures = 0;
    for (index, path) in files.iter().enumerate() {
        if total > 1 {
            progress_reporter.report_progress(index, total, Some(&path.display().to_string()));
        }

        let request = BomRequest::builder()
            .bom_path(path)
            .ignore_file(&settings.ignore_file)
            .output_dir(settings.output_dir.clone())
            .report_dropped_rows(settings.verbose)
            .build()?;

        match use_case.execute(request) {
            Ok(response) => {
                if args.tree {
                    print!("{}", TreeRenderer::render(&response.tree));
                }
            }
            Err(e) => {
                failures += 1;
                progress_reporter.report_error(&format!("❌ {}: {}", path.display(), e));
            }
        }
    }
    if total > 1 {
        progress_reporter.report_progress(total, total, None);
    }

    progress_reporter.report_completion(&format!(
        "Converted {} of {} file(s)",
        total - failures,
        total
    ));

    if failures > 0 {
        Ok(ExitCode::FileFailures)
    } else {
        Ok(ExitCode::Success)
    }
}

fn validate_output_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(BomError::ConfigError {
            message: format!("Output directory does not exist: {}", dir.display()),
            hint: "Create the directory first, or omit --output-dir to write next to each BOM."
                .to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["bom-flat"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_merge_defaults() {
        let settings = Settings::merge(&args(&[]), ConfigFile::default());
        assert_eq!(
            settings,
            Settings {
                ignore_file: PathBuf::from("ignore.txt"),
                output_dir: None,
                invalid_patterns: None,
                verbose: false,
            }
        );
    }

    #[test]
    fn test_merge_config_values_apply() {
        let config = ConfigFile {
            ignore_file: Some("skip.txt".to_string()),
            output_dir: Some("out".to_string()),
            invalid_part_patterns: Some(vec!["^TMP-".to_string()]),
            verbose: Some(true),
            ..Default::default()
        };

        let settings = Settings::merge(&args(&[]), config);
        assert_eq!(settings.ignore_file, PathBuf::from("skip.txt"));
        assert_eq!(settings.output_dir, Some(PathBuf::from("out")));
        assert_eq!(settings.invalid_patterns, Some(vec!["^TMP-".to_string()]));
        assert!(settings.verbose);
    }

    #[test]
    fn test_merge_cli_overrides_config() {
        let config = ConfigFile {
            ignore_file: Some("skip.txt".to_string()),
            invalid_part_patterns: Some(vec!["^TMP-".to_string()]),
            ..Default::default()
        };

        let settings = Settings::merge(&args(&["-i", "other.txt", "-x", "^OLD"]), config);
        assert_eq!(settings.ignore_file, PathBuf::from("other.txt"));
        assert_eq!(settings.invalid_patterns, Some(vec!["^OLD".to_string()]));
    }

    #[test]
    fn test_validator_rejects_bad_pattern() {
        let settings = Settings::merge(&args(&["-x", "("]), ConfigFile::default());
        let err = settings.validator().unwrap_err();
        assert!(err.to_string().contains("Invalid part number pattern"));
    }

    #[test]
    fn test_validate_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_output_dir(temp_dir.path()).is_ok());

        let err = validate_output_dir(&temp_dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("Output directory does not exist"));
    }
}
