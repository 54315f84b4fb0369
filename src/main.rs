use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stringray::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs};
use stringray::config::{Config, ConfigLoader, FileConfigLoader};
use stringray::output::{
    ColorMode, ErrorOutput, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter,
    TextFormatter,
};
use stringray::scanner::{DirectoryScanner, FileScanner, GlobFilter, read_files};
use stringray::{
    EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, StringRayError, ValidatorInput,
    ValidatorOutput, options, validate,
};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// `RUST_LOG` wins; otherwise `-v` enables info and `-vv` debug.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> stringray::Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args)?;

    let input = ValidatorInput {
        files: read_files(&scan_paths(&config, &args.paths)?)?,
        checker: config.checker.kind,
        checker_options: config.checker.options,
        decider: config.decider.kind,
        decider_options: config.decider.options,
    };
    info!(
        files = input.files.len(),
        checker = %input.checker,
        decider = %input.decider,
        "validating"
    );

    let output = validate(&input)?;

    let color_mode = color_choice_to_mode(cli.color);
    let rendered = format_output(args.format, &output, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &rendered, cli.quiet)?;

    Ok(if output.summary.pass {
        EXIT_SUCCESS
    } else {
        EXIT_VALIDATION_FAILED
    })
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> stringray::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// CLI flags win over the config file. `--files` replaces, `--exclude` adds.
fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) -> stringray::Result<()> {
    if !args.files.is_empty() {
        config.files.clone_from(&args.files);
    }
    config.exclude.extend(args.exclude.iter().cloned());

    if let Some(checker) = &args.checker {
        config.checker.kind.clone_from(checker);
    }
    if let Some(json) = &args.checker_options {
        config.checker.options = options::parse("--checker-options", json)?;
    }
    if let Some(decider) = &args.decider {
        config.decider.kind.clone_from(decider);
    }
    if let Some(json) = &args.decider_options {
        config.decider.options = options::parse("--decider-options", json)?;
    }

    config.validate()
}

fn scan_paths(config: &Config, roots: &[PathBuf]) -> stringray::Result<Vec<PathBuf>> {
    let scanner = DirectoryScanner::new(GlobFilter::new(&config.files, &config.exclude)?);
    let mut all_files = Vec::new();
    for root in roots {
        all_files.extend(scanner.scan(root)?);
    }
    Ok(all_files)
}

fn format_output(
    format: OutputFormat,
    output: &ValidatorOutput,
    color_mode: ColorMode,
    verbose: u8,
) -> stringray::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(output),
        OutputFormat::Json => JsonFormatter.format(output),
        OutputFormat::Markdown => MarkdownFormatter.format(output),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> stringray::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
        if !content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> stringray::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StringRayError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!(
                "Configuration file already exists: {}. Use --force to overwrite.",
                output_path.display()
            ),
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

const fn generate_config_template() -> &'static str {
    r#"# StringRay configuration file

# Files to validate (glob patterns, relative to each scanned path)
files = ["**/*.{js,ts,md,json}"]

# Files to skip
exclude = ["**/node_modules/**"]

[checker]
# grammar | char_count | custom
kind = "grammar"

# [checker.options]
# maxChars = 100                         # char_count
# logic = "content.length < 80"          # custom

[decider]
# threshold | noCritical | custom
kind = "threshold"

# [decider.options]
# minValidRatio = 0.8                    # threshold
# logic = "results.every(r => r.valid)"  # custom
"#
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
